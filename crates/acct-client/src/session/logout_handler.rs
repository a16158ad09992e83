/// Called when the session ends because the server rejected the credential.
pub trait LogoutHandler: Send + Sync {
    fn on_logout(&self);
}

impl<F> LogoutHandler for F
where
    F: Fn() + Send + Sync,
{
    fn on_logout(&self) {
        self()
    }
}
