use crate::{ApiKeyState, ConfirmationGate, CoreError, Result as CoreErrorResult};

/// State machine behind the API-key dialog.
///
/// ```text
/// NoKey --generate--> KeyShown --close--> HasKeyHidden
/// HasKeyHidden --request_regenerate--> ConfirmPending --regenerate--> KeyShown
/// ConfirmPending --cancel/close--> HasKeyHidden
/// ```
///
/// `busy` stands in for the disabled button: while a request is in flight a
/// second one is refused.
#[derive(Debug, Clone)]
pub struct ApiKeyFlow {
    state: ApiKeyState,
    busy: bool,
    gate: ConfirmationGate,
}

impl Default for ApiKeyFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiKeyFlow {
    pub fn new() -> Self {
        Self::with_gate(ConfirmationGate::regenerate_api_key())
    }

    pub fn with_gate(gate: ConfirmationGate) -> Self {
        Self {
            state: ApiKeyState::NoKey,
            busy: false,
            gate,
        }
    }

    /// Seed the flow from the server's "has key" answer
    pub fn from_has_key(has_key: bool) -> Self {
        let mut flow = Self::new();
        flow.sync_has_key(has_key);
        flow
    }

    pub fn state(&self) -> &ApiKeyState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn gate(&self) -> ConfirmationGate {
        self.gate
    }

    pub fn has_key(&self) -> bool {
        !matches!(self.state, ApiKeyState::NoKey)
    }

    /// The key text, only while the dialog shows a fresh key
    pub fn displayed_key(&self) -> Option<&str> {
        match &self.state {
            ApiKeyState::KeyShown { key } => Some(key.as_str()),
            _ => None,
        }
    }

    pub fn confirmation_input(&self) -> Option<&str> {
        match &self.state {
            ApiKeyState::ConfirmPending { input } => Some(input.as_str()),
            _ => None,
        }
    }

    pub fn can_generate(&self) -> bool {
        !self.busy && matches!(self.state, ApiKeyState::NoKey)
    }

    pub fn can_regenerate(&self) -> bool {
        !self.busy
            && matches!(&self.state, ApiKeyState::ConfirmPending { input } if self.gate.is_satisfied(input))
    }

    /// Apply a fresh "has key" answer. Ignored while a key is on screen or a
    /// request is in flight.
    pub fn sync_has_key(&mut self, has_key: bool) {
        if self.busy || matches!(self.state, ApiKeyState::KeyShown { .. }) {
            return;
        }
        self.state = if has_key {
            ApiKeyState::HasKeyHidden
        } else {
            ApiKeyState::NoKey
        };
    }

    #[track_caller]
    pub fn request_regenerate(&mut self) -> CoreErrorResult<()> {
        self.ensure_idle()?;
        match self.state {
            ApiKeyState::HasKeyHidden => {
                self.state = ApiKeyState::ConfirmPending {
                    input: String::new(),
                };
                Ok(())
            }
            _ => Err(CoreError::invalid_transition(
                "request regeneration",
                self.state.as_str(),
            )),
        }
    }

    #[track_caller]
    pub fn set_confirmation_input(&mut self, text: &str) -> CoreErrorResult<()> {
        match &mut self.state {
            ApiKeyState::ConfirmPending { input } => {
                *input = text.to_string();
                Ok(())
            }
            other => Err(CoreError::invalid_transition(
                "enter confirmation",
                other.as_str(),
            )),
        }
    }

    pub fn cancel_regenerate(&mut self) {
        if !self.busy && matches!(self.state, ApiKeyState::ConfirmPending { .. }) {
            self.state = ApiKeyState::HasKeyHidden;
        }
    }

    /// Close the dialog. A shown key is dropped and cannot be recovered.
    pub fn close(&mut self) {
        if self.busy {
            return;
        }
        match self.state {
            ApiKeyState::KeyShown { .. } | ApiKeyState::ConfirmPending { .. } => {
                self.state = ApiKeyState::HasKeyHidden;
            }
            ApiKeyState::NoKey | ApiKeyState::HasKeyHidden => {}
        }
    }

    /// Mark a generate request as in flight
    #[track_caller]
    pub fn begin_generate(&mut self) -> CoreErrorResult<()> {
        self.ensure_idle()?;
        if !matches!(self.state, ApiKeyState::NoKey) {
            return Err(CoreError::invalid_transition(
                "generate a key",
                self.state.as_str(),
            ));
        }
        self.busy = true;
        Ok(())
    }

    /// Mark a regenerate request as in flight
    #[track_caller]
    pub fn begin_regenerate(&mut self) -> CoreErrorResult<()> {
        self.ensure_idle()?;
        match &self.state {
            ApiKeyState::ConfirmPending { input } => {
                self.gate.check(input)?;
                self.busy = true;
                Ok(())
            }
            other => Err(CoreError::invalid_transition(
                "regenerate the key",
                other.as_str(),
            )),
        }
    }

    /// The in-flight request returned a key
    #[track_caller]
    pub fn complete(&mut self, key: String) -> CoreErrorResult<()> {
        if !self.busy {
            return Err(CoreError::invalid_transition("accept a key", "idle"));
        }
        self.busy = false;
        self.state = ApiKeyState::KeyShown { key };
        Ok(())
    }

    /// The in-flight request failed; the dialog stays where it was
    pub fn fail(&mut self) {
        self.busy = false;
    }

    /// Forget everything, used on logout
    pub fn reset(&mut self) {
        self.busy = false;
        self.state = ApiKeyState::NoKey;
    }

    #[track_caller]
    fn ensure_idle(&self) -> CoreErrorResult<()> {
        if self.busy {
            Err(CoreError::busy())
        } else {
            Ok(())
        }
    }
}
