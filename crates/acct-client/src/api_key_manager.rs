use crate::{Client, ClientError, ClientResult};

use acct_core::{ApiKeyFlow, CoreError, response_fields};

use log::{info, warn};

/// Drives the API-key dialog over the network.
///
/// Owns the dialog state for as long as the dialog exists. The issued key is
/// only ever held inside the flow; dropping the manager or closing the
/// dialog discards it.
pub struct ApiKeyManager<'a> {
    client: &'a Client,
    flow: ApiKeyFlow,
}

impl<'a> ApiKeyManager<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            flow: ApiKeyFlow::new(),
        }
    }

    pub fn flow(&self) -> &ApiKeyFlow {
        &self.flow
    }

    /// Ask the server whether a key exists and update the dialog
    pub async fn refresh(&mut self) -> ClientResult<bool> {
        let body = match self.client.has_api_key().await {
            Ok(body) => body,
            Err(e) => return Err(self.abandon(e)),
        };

        let has_key = response_fields::has_api_key(&body)
            .ok_or_else(|| CoreError::missing_field("hasKey"))?;
        self.flow.sync_has_key(has_key);
        Ok(has_key)
    }

    /// Issue the first key and show it
    pub async fn generate(&mut self) -> ClientResult<&str> {
        self.flow.begin_generate()?;
        let result = self.client.generate_api_key().await;
        self.finish(result, "generated")
    }

    /// Replace the key; requires the confirmation phrase to have been typed
    pub async fn regenerate(&mut self) -> ClientResult<&str> {
        self.flow.begin_regenerate()?;
        let result = self.client.regenerate_api_key().await;
        self.finish(result, "regenerated")
    }

    pub fn request_regenerate(&mut self) -> ClientResult<()> {
        Ok(self.flow.request_regenerate()?)
    }

    pub fn set_confirmation_input(&mut self, input: &str) -> ClientResult<()> {
        Ok(self.flow.set_confirmation_input(input)?)
    }

    pub fn cancel_regenerate(&mut self) {
        self.flow.cancel_regenerate();
    }

    /// Close the dialog, discarding any displayed key
    pub fn close(&mut self) {
        self.flow.close();
    }

    fn finish(
        &mut self,
        result: ClientResult<serde_json::Value>,
        action: &str,
    ) -> ClientResult<&str> {
        let body = match result {
            Ok(body) => body,
            Err(e) => return Err(self.abandon(e)),
        };

        let Some(key) = response_fields::api_key(&body) else {
            warn!("API key response did not contain a key");
            self.flow.fail();
            return Err(CoreError::missing_field("apiKey").into());
        };

        self.flow.complete(key)?;
        info!("API key {action}");
        self.flow
            .displayed_key()
            .ok_or_else(|| CoreError::missing_field("apiKey").into())
    }

    /// Roll the dialog back after a failed call. A rejected credential has
    /// already ended the session, so the dialog starts over.
    fn abandon(&mut self, err: ClientError) -> ClientError {
        if err.is_unauthorized() {
            self.flow.reset();
        } else {
            self.flow.fail();
        }
        err
    }
}
