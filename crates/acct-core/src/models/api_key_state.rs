/// Where the API-key dialog currently is.
///
/// The issued key only ever lives inside `KeyShown`; leaving that state
/// drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyState {
    /// The account has never been issued a key
    NoKey,
    /// A freshly issued key is on screen
    KeyShown { key: String },
    /// A key exists but cannot be displayed again
    HasKeyHidden,
    /// Regeneration requested, waiting for the confirmation phrase
    ConfirmPending { input: String },
}

impl ApiKeyState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoKey => "no-key",
            Self::KeyShown { .. } => "key-shown",
            Self::HasKeyHidden => "has-key-hidden",
            Self::ConfirmPending { .. } => "confirm-pending",
        }
    }
}

impl std::fmt::Display for ApiKeyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
