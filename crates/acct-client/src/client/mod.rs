pub(crate) mod access;
pub(crate) mod client;
pub(crate) mod error;

pub use access::Access;
pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
