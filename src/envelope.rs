//! The uniform per-call result.

use std::fmt;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::Result;

/// `responseCode` value the service reports on successful calls.
pub const SUCCESS_CODE: &str = "SUCC";

/// Uniform result of one API call.
///
/// Remote response bodies pass through verbatim. Local encoding and
/// transport failures are synthesized into the same base shape
/// (`message`, `status`, `timeTaken`, `responseCode`), so a caller always
/// holds one parseable JSON document, whatever happened on the way.
#[derive(Debug, Clone)]
pub struct Envelope {
    status: u16,
    body: String,
}

impl Envelope {
    /// Wraps a response body received from the service, untouched.
    pub(crate) fn remote(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Builds a local failure document. `status` is 0 unless an HTTP
    /// status was observed before the failure.
    pub(crate) fn synthesized(status: u16, code: &str, message: impl Into<String>) -> Self {
        let body = serde_json::json!({
            "message": message.into(),
            "status": status,
            "timeTaken": "0.00s",
            "responseCode": code,
        })
        .to_string();
        Self { status, body }
    }

    /// HTTP status observed on the wire; 0 when the call never produced
    /// one.
    pub fn http_status(&self) -> u16 {
        self.status
    }

    /// Raw JSON text of the envelope.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Consumes the envelope, returning the raw JSON text.
    pub fn into_string(self) -> String {
        self.body
    }

    /// Decodes the envelope into one of the crate's typed response
    /// structs, or any other matching shape.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The `responseCode` field, when the envelope carries one.
    pub fn response_code(&self) -> Option<String> {
        self.decode::<Base>().ok().map(|base| base.response_code)
    }

    /// True when the call succeeded (`responseCode == "SUCC"`).
    pub fn is_success(&self) -> bool {
        self.response_code().as_deref() == Some(SUCCESS_CODE)
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl AsRef<str> for Envelope {
    fn as_ref(&self) -> &str {
        &self.body
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Base {
    response_code: String,
}
