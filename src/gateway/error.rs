use thiserror::Error;

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Error taxonomy for gateway calls. Local validation failures never reach
/// the network; everything else maps one-to-one onto a transport or
/// gateway-level outcome.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest {
        message: String,
        field: Option<String>,
    },

    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Gateway client error: HTTP {status_code}: {message}")]
    ClientError { status_code: u16, message: String },

    #[error("Gateway server error: HTTP {status_code}: {message}")]
    ServerError { status_code: u16, message: String },

    #[error("Gateway rejected request: {message}")]
    GatewayRejected { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl GatewayError {
    /// Stable machine-readable code for API clients.
    pub fn error_code(&self) -> &'static str {
        match self {
            GatewayError::InvalidAmount { .. } => "INVALID_AMOUNT",
            GatewayError::InvalidRequest { .. } => "INVALID_REQUEST",
            GatewayError::ConnectionError { .. } => "CONNECTION_ERROR",
            GatewayError::ClientError { .. } => "CLIENT_ERROR",
            GatewayError::ServerError { .. } => "SERVER_ERROR",
            GatewayError::GatewayRejected { .. } => "GATEWAY_REJECTED",
            GatewayError::InternalError { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::InvalidAmount { .. } => false,
            GatewayError::InvalidRequest { .. } => false,
            GatewayError::ConnectionError { .. } => true,
            GatewayError::ClientError { .. } => false,
            GatewayError::ServerError { .. } => true,
            GatewayError::GatewayRejected { .. } => false,
            GatewayError::InternalError { .. } => false,
        }
    }

    /// HTTP status the boundary returns for this error. `ServerError` and
    /// `ConnectionError` share the "temporarily unavailable" class since the
    /// remediation (retry later) is the same; the rest are caller-side.
    pub fn http_status_code(&self) -> u16 {
        match self {
            GatewayError::InvalidAmount { .. } => 400,
            GatewayError::InvalidRequest { .. } => 400,
            GatewayError::ConnectionError { .. } => 503,
            GatewayError::ClientError { .. } => 400,
            GatewayError::ServerError { .. } => 503,
            GatewayError::GatewayRejected { .. } => 402,
            GatewayError::InternalError { .. } => 500,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            GatewayError::InvalidAmount { message } => message.clone(),
            GatewayError::InvalidRequest { message, .. } => message.clone(),
            GatewayError::ConnectionError { .. } => {
                "Payment gateway is temporarily unreachable".to_string()
            }
            GatewayError::ClientError { status_code, .. } => {
                format!("Payment gateway rejected the request (HTTP {})", status_code)
            }
            GatewayError::ServerError { .. } => {
                "Payment gateway is temporarily unavailable".to_string()
            }
            GatewayError::GatewayRejected { message } => message.clone(),
            GatewayError::InternalError { .. } => "Unexpected internal error".to_string(),
        }
    }
}
