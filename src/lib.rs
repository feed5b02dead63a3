//! VoiceIt API 2.0 SDK for Rust.
//!
//! This crate provides a client for the VoiceIt biometric-identity
//! platform: voice, face, and video enrollment, 1:1 verification, 1:N
//! identification within a group, and directory management for users and
//! groups.
//!
//! Every operation returns an [`Envelope`] — the service's JSON response
//! verbatim, or a synthesized document of the same shape when the call
//! failed before a response arrived (unreadable media file, DNS, connect,
//! TLS, timeout). Inspect `status`/`responseCode` or decode into the typed
//! structs in this crate to tell the cases apart; no operation call ever
//! returns an error or panics on I/O and network conditions.
//!
//! ```rust,no_run
//! # async fn run() -> voiceit2::Result<()> {
//! let client = voiceit2::Client::new("key", "tok")?;
//!
//! let created: voiceit2::CreateUserResponse = client.users().create().await.decode()?;
//! let envelope = client
//!     .voice()
//!     .enroll(&created.user_id, "en-US", "./enrollment1.wav")
//!     .await;
//! assert!(envelope.is_success());
//! # Ok(())
//! # }
//! ```

mod client;
mod enrollments;
mod envelope;
mod error;
mod face;
mod groups;
mod http;
mod media;
mod ops;
mod types;
mod users;
mod video;
mod voice;

pub use client::{
    Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_FAILURE_CODE, DEFAULT_TIMEOUT,
};
pub use enrollments::EnrollmentService;
pub use envelope::{Envelope, SUCCESS_CODE};
pub use error::{Error, Result};
pub use face::FaceService;
pub use groups::GroupService;
pub use media::MediaSource;
pub use types::{
    CreateFaceEnrollmentResponse, CreateGroupResponse, CreateUserResponse,
    CreateVideoEnrollmentResponse, CreateVoiceEnrollmentResponse, FaceVerificationResponse,
    GetAllUsersResponse, StatusResponse, UserSummary, VideoIdentificationResponse,
    VideoVerificationResponse, VoiceIdentificationResponse, VoiceVerificationResponse,
};
pub use users::UserService;
pub use video::VideoService;
pub use voice::VoiceService;
