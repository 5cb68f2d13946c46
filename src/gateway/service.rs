//! Gateway orchestration: environment resolution, request construction,
//! the outbound call, and response classification for each operation.

use crate::config::PaystackConfig;
use crate::gateway::client::GatewayClient;
use crate::gateway::environment::{EnvironmentBundle, PaystackEnvironments};
use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::reference::new_reference;
use crate::gateway::types::{
    ChargeIntent, GatewayEnvelope, InitializeData, RecipientData, RecipientIntent, TransferData,
    TransferIntent, VerifyData, WebhookEvent,
};
use crate::gateway::{request, signature};
use tracing::info;

/// Stateless facade over the Paystack API. Shared read-only across
/// concurrent requests; every call is independent.
pub struct PaystackGateway {
    environments: PaystackEnvironments,
    client: GatewayClient,
    webhook_secret: String,
    callback_url: String,
}

impl PaystackGateway {
    pub fn new(config: &PaystackConfig) -> GatewayResult<Self> {
        Ok(Self {
            environments: PaystackEnvironments::new(
                config.sandbox.clone(),
                config.live.clone(),
                config.active_env.clone(),
            ),
            client: GatewayClient::new()?,
            webhook_secret: config.webhook_secret.clone(),
            callback_url: config.callback_url.clone(),
        })
    }

    fn active(&self) -> &EnvironmentBundle {
        self.environments.active()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.active().base_url, path)
    }

    pub async fn initialize_collection(
        &self,
        intent: ChargeIntent,
    ) -> GatewayResult<GatewayEnvelope<InitializeData>> {
        let reference = new_reference();
        let body = request::build_initialize(&intent, &reference, &self.callback_url)?;

        info!(
            reference = %reference,
            email = %intent.email,
            environment = %self.environments.active_name(),
            "initializing collection"
        );

        let envelope = self
            .client
            .post_json(
                &self.endpoint("/transaction/initialize"),
                &self.active().secret_key,
                &body,
            )
            .await?;

        info!(reference = %reference, "collection initialized");
        Ok(envelope)
    }

    pub async fn verify_collection(
        &self,
        reference: &str,
    ) -> GatewayResult<GatewayEnvelope<VerifyData>> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(GatewayError::InvalidRequest {
                message: "reference is required".to_string(),
                field: Some("reference".to_string()),
            });
        }
        // The reference becomes a URL path segment; anything outside the
        // gateway's reference alphabet is rejected rather than encoded.
        if !reference
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(GatewayError::InvalidRequest {
                message: "reference contains unsupported characters".to_string(),
                field: Some("reference".to_string()),
            });
        }

        info!(
            reference = %reference,
            environment = %self.environments.active_name(),
            "verifying collection"
        );

        self.client
            .get(
                &self.endpoint(&format!("/transaction/verify/{}", reference)),
                &self.active().secret_key,
            )
            .await
    }

    pub async fn create_recipient(
        &self,
        intent: RecipientIntent,
    ) -> GatewayResult<GatewayEnvelope<RecipientData>> {
        let body = request::build_recipient(&intent)?;

        info!(
            name = %intent.name,
            environment = %self.environments.active_name(),
            "creating transfer recipient"
        );

        let envelope: GatewayEnvelope<RecipientData> = self
            .client
            .post_json(
                &self.endpoint("/transferrecipient"),
                &self.active().secret_key,
                &body,
            )
            .await?;

        info!(recipient_code = %envelope.data.recipient_code, "transfer recipient created");
        Ok(envelope)
    }

    pub async fn initiate_transfer(
        &self,
        intent: TransferIntent,
    ) -> GatewayResult<GatewayEnvelope<TransferData>> {
        let reference = new_reference();
        let body = request::build_transfer(&intent, &reference)?;

        info!(
            reference = %reference,
            recipient = %intent.recipient_code,
            environment = %self.environments.active_name(),
            "initiating transfer"
        );

        let envelope = self
            .client
            .post_json(&self.endpoint("/transfer"), &self.active().secret_key, &body)
            .await?;

        info!(reference = %reference, "transfer initiated");
        Ok(envelope)
    }

    /// Authenticate a webhook delivery against its raw payload bytes.
    pub fn verify_webhook(&self, payload: &[u8], signature_hex: &str) -> bool {
        signature::verify_signature(payload, &self.webhook_secret, signature_hex)
    }

    /// Parse a webhook payload. Only call after `verify_webhook` succeeds.
    pub fn parse_webhook_event(&self, payload: &[u8]) -> GatewayResult<WebhookEvent> {
        signature::parse_event(payload)
    }

    pub fn active_environment_name(&self) -> &str {
        self.environments.active_name()
    }

    pub fn is_live(&self) -> bool {
        self.environments.is_live()
    }
}
