//! Request dispatch.
//!
//! One round trip per call, no retries. Expected failure classes never
//! escape: unreadable media and transport faults are folded into a
//! synthesized [`Envelope`] carrying the configured failure code, so every
//! operation returns the same parseable shape.

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use tracing::{debug, warn};

use crate::envelope::Envelope;
use crate::error::Result;
use crate::media::{self, Payload, Values};
use crate::ops::{self, Descriptor};

/// Value of the `platformId` header sent with every request.
pub(crate) const PLATFORM_ID: &str = "13";

/// Value of the `platformVersion` header sent with every request.
pub(crate) const PLATFORM_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the VoiceIt API.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
    api_key: String,
    api_token: String,
    failure_code: String,
}

impl HttpClient {
    pub(crate) fn new(
        base_url: String,
        api_key: String,
        api_token: String,
        timeout: Duration,
        failure_code: String,
    ) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            api_token,
            failure_code,
        })
    }

    /// Executes one operation from the registry.
    ///
    /// Exactly one network attempt. `path_params` substitute the
    /// descriptor's placeholders; `values` fill its body fields in order.
    pub(crate) async fn invoke(
        &self,
        desc: &Descriptor,
        path_params: &[(&str, &str)],
        values: Values<'_>,
    ) -> Envelope {
        let path = ops::resolve(desc.path, path_params);
        debug!(op = desc.name, method = desc.method, path = %path, "dispatching");

        let payload = match media::build(desc, values).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(op = desc.name, error = %e, "media encoding failed");
                return self.failure(0, format!("{}: {e}", desc.name));
            }
        };

        let url = format!("{}{}", self.base_url, path);
        let request = match desc.method {
            "GET" => self.client.get(&url),
            "POST" => self.client.post(&url),
            "PUT" => self.client.put(&url),
            "DELETE" => self.client.delete(&url),
            other => panic!("{}: unsupported method `{other}`", desc.name),
        };

        let request = request
            .basic_auth(&self.api_key, Some(&self.api_token))
            .header("platformId", PLATFORM_ID)
            .header("platformVersion", PLATFORM_VERSION);

        let request = match payload {
            Payload::Empty => request,
            Payload::Form(fields) => request.form(&fields),
            Payload::Multipart(form) => request.multipart(form),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(op = desc.name, error = %e, "transport failure");
                return self.failure(0, format!("{}: {e}", desc.name));
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Envelope::remote(status, body),
            Err(e) => {
                warn!(op = desc.name, status, error = %e, "failed reading response body");
                self.failure(status, format!("{}: {e}", desc.name))
            }
        }
    }

    fn failure(&self, status: u16, message: String) -> Envelope {
        Envelope::synthesized(status, &self.failure_code, message)
    }
}
