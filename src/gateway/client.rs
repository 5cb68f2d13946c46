//! Outbound HTTPS client and response classification.
//!
//! One call is one attempt: retry policy belongs to callers. Both the
//! connect and the overall request duration are bounded so a stalled
//! gateway surfaces as `ConnectionError` instead of hanging.

use crate::gateway::error::{GatewayError, GatewayResult};
use crate::gateway::types::GatewayEnvelope;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
}

impl GatewayClient {
    pub fn new() -> GatewayResult<Self> {
        Self::with_timeouts(CONNECT_TIMEOUT, READ_TIMEOUT)
    }

    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(read_timeout)
            .build()
            .map_err(|e| GatewayError::InternalError {
                message: format!("failed to initialize HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        secret_key: &str,
        body: &B,
    ) -> GatewayResult<GatewayEnvelope<T>> {
        let response = self
            .client
            .post(url)
            .bearer_auth(secret_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::read(response).await
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        secret_key: &str,
    ) -> GatewayResult<GatewayEnvelope<T>> {
        let response = self
            .client
            .get(url)
            .bearer_auth(secret_key)
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::read(response).await
    }

    async fn read<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> GatewayResult<GatewayEnvelope<T>> {
        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;
        classify(status_code, &body)
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_builder() {
        GatewayError::InternalError {
            message: format!("malformed gateway request: {}", err),
        }
    } else {
        // Timeouts, DNS, connect and TLS failures all land here.
        GatewayError::ConnectionError {
            message: format!("gateway request failed: {}", err),
        }
    }
}

/// Classify a transported response into a typed outcome.
///
/// Logical success requires BOTH a 2xx transport status and `status: true`
/// in the envelope; the gateway routinely returns HTTP 200 carrying a
/// semantic failure, and collapsing the two checks is the classic
/// integration bug this function exists to prevent.
pub fn classify<T: DeserializeOwned>(
    status_code: u16,
    body: &str,
) -> GatewayResult<GatewayEnvelope<T>> {
    if (400..500).contains(&status_code) {
        return Err(GatewayError::ClientError {
            status_code,
            message: body.to_string(),
        });
    }
    if status_code >= 500 {
        return Err(GatewayError::ServerError {
            status_code,
            message: body.to_string(),
        });
    }
    // A 1xx/3xx reaching this point is outside the gateway contract; its
    // body gets no chance to masquerade as a successful envelope.
    if !(200..300).contains(&status_code) {
        return Err(GatewayError::InternalError {
            message: format!("unexpected gateway HTTP status {}", status_code),
        });
    }

    let envelope: GatewayEnvelope<T> =
        serde_json::from_str(body).map_err(|e| GatewayError::InternalError {
            message: format!("invalid gateway JSON response: {}", e),
        })?;

    if !envelope.status {
        return Err(GatewayError::GatewayRejected {
            message: envelope.message,
        });
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    #[test]
    fn http_200_with_false_status_is_rejected_not_success() {
        let body = r#"{"status":false,"message":"declined","data":null}"#;
        let err = classify::<JsonValue>(200, body).expect_err("must not classify as success");
        assert!(matches!(
            err,
            GatewayError::GatewayRejected { ref message } if message == "declined"
        ));
    }

    #[test]
    fn http_200_with_true_status_is_success() {
        let body = r#"{"status":true,"message":"ok","data":{"reference":"TXN_1"}}"#;
        let envelope = classify::<JsonValue>(200, body).expect("should classify as success");
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data["reference"], "TXN_1");
    }

    #[test]
    fn http_4xx_maps_to_client_error_with_status() {
        let err = classify::<JsonValue>(404, "not found").expect_err("4xx must fail");
        assert!(matches!(
            err,
            GatewayError::ClientError { status_code: 404, .. }
        ));
    }

    #[test]
    fn http_5xx_maps_to_server_error_with_status() {
        let err = classify::<JsonValue>(503, "unavailable").expect_err("5xx must fail");
        assert!(matches!(
            err,
            GatewayError::ServerError { status_code: 503, .. }
        ));
    }

    #[test]
    fn non_2xx_status_is_never_success_even_with_true_envelope() {
        let body = r#"{"status":true,"message":"ok","data":{"reference":"TXN_1"}}"#;
        for status_code in [101, 302, 304] {
            let err = classify::<JsonValue>(status_code, body)
                .expect_err("non-2xx transport status must not classify as success");
            assert!(
                matches!(err, GatewayError::InternalError { .. }),
                "HTTP {} should be an internal error",
                status_code
            );
        }
    }

    #[test]
    fn unparseable_2xx_body_is_internal_error() {
        let err = classify::<JsonValue>(200, "<html>gateway oops</html>")
            .expect_err("garbage body must fail");
        assert!(matches!(err, GatewayError::InternalError { .. }));
    }
}
