use crate::{LogoutHandler, Session};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct CountingHandler {
    calls: AtomicUsize,
}

impl LogoutHandler for CountingHandler {
    fn on_logout(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn counting_session() -> (Arc<CountingHandler>, Session) {
    let handler = Arc::new(CountingHandler {
        calls: AtomicUsize::new(0),
    });
    let session = Session::with_handler(handler.clone());
    (handler, session)
}

#[test]
fn test_new_session_is_signed_out() {
    let session = Session::new();
    assert!(!session.is_authenticated());
    assert!(session.token().is_none());
}

#[test]
fn test_login_stores_token() {
    let session = Session::new();
    session.login("abc");
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn test_logout_calls_handler_once() {
    let (handler, session) = counting_session();
    session.login("abc");

    assert!(session.logout());
    assert!(!session.logout());

    assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
    assert!(!session.is_authenticated());
}

#[test]
fn test_logout_when_signed_out_does_not_call_handler() {
    let (handler, session) = counting_session();

    assert!(!session.logout());

    assert_eq!(handler.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_concurrent_logouts_call_handler_once() {
    let (handler, session) = counting_session();
    let session = Arc::new(session);
    session.login("abc");

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let session = Arc::clone(&session);
            std::thread::spawn(move || session.logout())
        })
        .collect();
    let ended: usize = threads
        .into_iter()
        .map(|t| usize::from(t.join().unwrap()))
        .sum();

    assert_eq!(ended, 1);
    assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_closure_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let session = Session::with_handler(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));
    session.login("abc");

    session.logout();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_debug_does_not_print_token() {
    let session = Session::new();
    session.login("super-secret-token");

    let debug = format!("{session:?}");

    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("authenticated: true"));
}
