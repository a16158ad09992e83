use crate::{Access, ClientError, ClientResult, Session};

use acct_config::ApiConfig;
use acct_core::{ConfirmationGate, response_fields};

use std::sync::Arc;

use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::{Value, json};

/// HTTP client for the account API
///
/// Every operation is one request and one response. Nothing is cached and
/// nothing is retried; the JSON body the server sends back is returned
/// as-is.
pub struct Client {
    pub base_url: String,
    session: Arc<Session>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "https://api.example.com")
    /// * `session` - Session whose token is attached to authorized calls
    pub fn new(base_url: &str, session: Arc<Session>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with the configured base URL and request timeout
    pub fn from_config(config: &ApiConfig, session: Arc<Session>) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            client,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build a request, attaching the bearer token to authorized calls
    fn request(&self, method: Method, path: &str, access: Access) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if access == Access::Authorized
            && let Some(token) = self.session.token()
        {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder, access: Access) -> ClientResult<Value> {
        let response = req.send().await.inspect_err(|e| {
            warn!("Request failed before a response arrived: {e}");
        })?;
        let status = response.status();
        let path = response.url().path().to_string();
        let bytes = response.bytes().await?;

        debug!("{path} -> {}", status.as_u16());

        if status == StatusCode::UNAUTHORIZED && access == Access::Authorized {
            warn!("{path} rejected the session credential, logging out");
            self.session.logout();
            return Err(ClientError::unauthorized());
        }

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            let message = response_fields::error_message(&body);
            warn!(
                "{path} failed with status {}: {}",
                status.as_u16(),
                message.as_deref().unwrap_or("no message")
            );
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post<B: Serialize>(&self, path: &str, access: Access, body: &B) -> ClientResult<Value> {
        let req = self.request(Method::POST, path, access).json(body);
        self.execute(req, access).await
    }

    async fn get(&self, path: &str) -> ClientResult<Value> {
        let req = self.request(Method::GET, path, Access::Authorized);
        self.execute(req, Access::Authorized).await
    }

    // =========================================================================
    // Profile Operations
    // =========================================================================

    /// Fetch the signed-in user's profile
    pub async fn profile(&self) -> ClientResult<Value> {
        self.get("/profile").await
    }

    /// Change the display name
    pub async fn set_user_name(&self, name: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct SetUserNameRequest<'a> {
            name: &'a str,
        }

        self.post(
            "/profile/setUserName",
            Access::Authorized,
            &SetUserNameRequest { name },
        )
        .await
    }

    /// Change the phone number
    pub async fn set_phone_number(&self, phone_number: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SetPhoneNumberRequest<'a> {
            phone_number: &'a str,
        }

        self.post(
            "/profile/setPhoneNumber",
            Access::Authorized,
            &SetPhoneNumberRequest { phone_number },
        )
        .await
    }

    /// Set the profile image from a URL or `data:` URL
    pub async fn set_image(&self, image: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct SetImageRequest<'a> {
            image: &'a str,
        }

        self.post(
            "/profile/setImage",
            Access::Authorized,
            &SetImageRequest { image },
        )
        .await
    }

    /// Remove the profile image
    pub async fn remove_image(&self) -> ClientResult<Value> {
        self.post("/profile/removeImage", Access::Authorized, &json!({}))
            .await
    }

    // =========================================================================
    // Account Settings Operations
    // =========================================================================

    /// Change the password
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ChangePasswordRequest<'a> {
            current_password: &'a str,
            new_password: &'a str,
        }

        let body = ChangePasswordRequest {
            current_password,
            new_password,
        };
        self.post("/profile/changePassword", Access::Authorized, &body)
            .await
    }

    /// Check the password without changing anything
    pub async fn verify_password(&self, password: &str) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct VerifyPasswordRequest<'a> {
            password: &'a str,
        }

        self.post(
            "/profile/verifyPassword",
            Access::Authorized,
            &VerifyPasswordRequest { password },
        )
        .await
    }

    /// Delete the account
    pub async fn delete_account(&self) -> ClientResult<Value> {
        self.post("/profile/deleteUser", Access::Authorized, &json!({}))
            .await
    }

    /// Delete the account once the user has typed the confirmation phrase
    pub async fn delete_account_confirmed(&self, confirmation: &str) -> ClientResult<Value> {
        ConfirmationGate::delete_account().check(confirmation)?;
        self.delete_account().await
    }

    // =========================================================================
    // Contact Operations
    // =========================================================================

    /// Send the general contact form
    pub async fn submit_contact(
        &self,
        name: &str,
        email: &str,
        subject: Option<&str>,
        message: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct ContactRequest<'a> {
            name: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            subject: Option<&'a str>,
            message: &'a str,
        }

        let body = ContactRequest {
            name,
            email,
            subject,
            message,
        };
        self.post("/contact", Access::Public, &body).await
    }

    /// Send the developer/enterprise contact form
    pub async fn submit_developer_contact(
        &self,
        name: &str,
        email: &str,
        company: Option<&str>,
        use_case: Option<&str>,
        message: &str,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DeveloperContactRequest<'a> {
            name: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            company: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            use_case: Option<&'a str>,
            message: &'a str,
        }

        let body = DeveloperContactRequest {
            name,
            email,
            company,
            use_case,
            message,
        };
        self.post("/developerContact", Access::Public, &body).await
    }

    // =========================================================================
    // Payment Operations
    // =========================================================================

    /// Create a payment order
    ///
    /// `amount` is in the currency's smallest unit (cents, paise).
    pub async fn create_payment_order(
        &self,
        amount: u64,
        currency: &str,
        tokens: Option<u64>,
    ) -> ClientResult<Value> {
        #[derive(Serialize)]
        struct CreateOrderRequest<'a> {
            amount: u64,
            currency: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            tokens: Option<u64>,
        }

        let body = CreateOrderRequest {
            amount,
            currency,
            tokens,
        };
        self.post("/payments/create-order", Access::Authorized, &body)
            .await
    }

    /// List past payments
    pub async fn payment_history(&self) -> ClientResult<Value> {
        self.get("/payments/payment-history").await
    }

    // =========================================================================
    // API Key Operations
    // =========================================================================

    /// Ask whether the account already has an API key
    pub async fn has_api_key(&self) -> ClientResult<Value> {
        self.get("/profile/haskey").await
    }

    /// Issue the first API key
    pub async fn generate_api_key(&self) -> ClientResult<Value> {
        self.post("/profile/key", Access::Authorized, &json!({}))
            .await
    }

    /// Replace the API key; the old key stops working
    pub async fn regenerate_api_key(&self) -> ClientResult<Value> {
        self.post("/profile/key/regenerate", Access::Authorized, &json!({}))
            .await
    }
}
