use serde::de::DeserializeOwned;

use crate::api::types::envelope_code_error;
use crate::error::{ApiError, CoreError};

/// Response envelope shared by both endpoints. `data` is kept untyped until
/// the code has been checked, since error responses carry arbitrary data.
#[derive(serde::Deserialize)]
pub(super) struct Envelope {
    pub(super) code: i64,
    #[serde(default)]
    pub(super) message: Option<String>,
    #[serde(default)]
    pub(super) data: Option<serde_json::Value>,
}

/// Decode an envelope body and return its typed `data` payload.
///
/// A non-zero `code` is reported through [`envelope_code_error`]; a zero
/// code without `data` is an invalid response.
pub(super) fn decode_payload<T: DeserializeOwned>(
    body: &str,
    endpoint: &str,
) -> Result<T, CoreError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        ApiError::InvalidResponse(format!("decode {endpoint} response: {e}; body={body}"))
    })?;

    if envelope.code != 0 {
        return Err(envelope_code_error(envelope.code, envelope.message));
    }

    let data = match envelope.data {
        Some(data) if !data.is_null() => data,
        _ => {
            return Err(ApiError::InvalidResponse(format!(
                "{endpoint} response has no `data` field"
            ))
            .into())
        }
    };

    serde_json::from_value(data).map_err(|e| {
        ApiError::InvalidResponse(format!("decode {endpoint} data: {e}")).into()
    })
}
