//! acct-client library
//!
//! HTTP client for the account API, the bearer-credential session it reads
//! from, and the API-key dialog driver built on top of both.

pub(crate) mod api_key_manager;
pub(crate) mod client;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use api_key_manager::ApiKeyManager;
pub use client::{Access, Client, ClientError, ClientResult};
pub use session::{LogoutHandler, Session};
