/// Whether an operation carries the session credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Sent without a bearer header; a 401 is an ordinary API error
    Public,
    /// Sent with the bearer header when a token is present; a 401 ends the session
    Authorized,
}
