/// Failures talking to the emote HTTP API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    #[error("API returned error code {code}: {message}")]
    ServerError { code: i64, message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            Self::Transport(err)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no SESSDATA provided")]
    EmptyCredential,

    #[error(
        "not logged in or SESSDATA is invalid/expired (code={code}, message={message}); \
         check the SESSDATA value"
    )]
    NotAuthenticated { code: i64, message: String },

    #[error("panel data is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("emote API failure: {0}")]
    Api(#[from] ApiError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
