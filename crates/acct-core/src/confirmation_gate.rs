use crate::{CoreError, Result as CoreErrorResult};

/// Phrase the user types before an API key is regenerated
pub const REGENERATE_API_KEY_PHRASE: &str = "regenerate my api key";
/// Phrase the user types before the account is deleted
pub const DELETE_ACCOUNT_PHRASE: &str = "delete my account";

/// Literal-text safeguard in front of an irreversible action.
///
/// Matching is exact: no trimming, no case folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationGate {
    phrase: &'static str,
}

impl ConfirmationGate {
    pub const fn new(phrase: &'static str) -> Self {
        Self { phrase }
    }

    pub const fn regenerate_api_key() -> Self {
        Self::new(REGENERATE_API_KEY_PHRASE)
    }

    pub const fn delete_account() -> Self {
        Self::new(DELETE_ACCOUNT_PHRASE)
    }

    pub fn phrase(&self) -> &'static str {
        self.phrase
    }

    pub fn is_satisfied(&self, input: &str) -> bool {
        input == self.phrase
    }

    #[track_caller]
    pub fn check(&self, input: &str) -> CoreErrorResult<()> {
        if self.is_satisfied(input) {
            Ok(())
        } else {
            Err(CoreError::confirmation_mismatch())
        }
    }
}
