pub(crate) mod logout_handler;
pub(crate) mod session;

pub use logout_handler::LogoutHandler;
pub use session::Session;
