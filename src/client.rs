//! VoiceIt API client.

use std::sync::Arc;
use std::time::Duration;

use crate::enrollments::EnrollmentService;
use crate::error::{Error, Result};
use crate::face::FaceService;
use crate::groups::GroupService;
use crate::http::HttpClient;
use crate::users::UserService;
use crate::video::VideoService;
use crate::voice::VoiceService;

/// Default VoiceIt API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.voiceit.io";

/// Default per-call timeout. Generous because media uploads run much
/// longer than metadata calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default `responseCode` written into locally synthesized failure
/// envelopes.
pub const DEFAULT_FAILURE_CODE: &str = "FAIL";

/// VoiceIt API client.
///
/// Holds the account credentials and is immutable after construction;
/// clone-free concurrent use is fine since every service borrows the same
/// shared transport.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() -> voiceit2::Result<()> {
/// let client = voiceit2::Client::new("key", "tok")?;
///
/// let envelope = client.users().create().await;
/// let created: voiceit2::CreateUserResponse = envelope.decode()?;
/// println!("created {}", created.user_id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a client with default configuration.
    ///
    /// Fails with [`Error::Config`] when either credential is empty; no
    /// network call is attempted.
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key, api_token).build()
    }

    /// Creates a builder for more configuration options.
    pub fn builder(api_key: impl Into<String>, api_token: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key, api_token)
    }

    /// User directory operations.
    pub fn users(&self) -> UserService {
        UserService::new(self.http.clone())
    }

    /// Group directory and membership operations.
    pub fn groups(&self) -> GroupService {
        GroupService::new(self.http.clone())
    }

    /// Voice enrollment, verification, and identification.
    pub fn voice(&self) -> VoiceService {
        VoiceService::new(self.http.clone())
    }

    /// Video enrollment, verification, and identification.
    pub fn video(&self) -> VideoService {
        VideoService::new(self.http.clone())
    }

    /// Face enrollment and verification.
    pub fn face(&self) -> FaceService {
        FaceService::new(self.http.clone())
    }

    /// Enrollment deletion.
    pub fn enrollments(&self) -> EnrollmentService {
        EnrollmentService::new(self.http.clone())
    }
}

/// Builder for a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    api_token: String,
    base_url: String,
    timeout: Duration,
    failure_code: String,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(api_key: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_token: api_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            failure_code: DEFAULT_FAILURE_CODE.to_string(),
        }
    }

    /// Sets a custom base URL for the API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `responseCode` used in synthesized failure envelopes.
    pub fn failure_code(mut self, code: impl Into<String>) -> Self {
        self.failure_code = code.into();
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.api_key.is_empty() {
            return Err(Error::Config("api_key must be non-empty".to_string()));
        }
        if self.api_token.is_empty() {
            return Err(Error::Config("api_token must be non-empty".to_string()));
        }

        let http = HttpClient::new(
            self.base_url,
            self.api_key,
            self.api_token,
            self.timeout,
            self.failure_code,
        )?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}
