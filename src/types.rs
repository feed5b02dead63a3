//! Typed envelope payloads.
//!
//! One struct per response shape, decodable from an [`Envelope`] via
//! [`Envelope::decode`](crate::Envelope::decode). Fields are camelCase on
//! the wire; everything defaults so a struct still decodes when the
//! service omits a field.

use serde::{Deserialize, Serialize};

// ==================== Directory ====================

/// One entry of a user listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSummary {
    pub created_at: i64,
    pub user_id: String,
}

/// Response to `GetAllUsers`. `count` equals `users.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAllUsersResponse {
    pub message: String,
    pub count: u32,
    pub status: u16,
    pub time_taken: String,
    pub users: Vec<UserSummary>,
    pub response_code: String,
}

/// Response to `CreateUser`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserResponse {
    pub message: String,
    pub status: u16,
    pub time_taken: String,
    pub created_at: i64,
    pub user_id: String,
    pub response_code: String,
}

/// Response to `CreateGroup`; echoes the submitted description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGroupResponse {
    pub message: String,
    pub description: String,
    pub group_id: String,
    pub status: u16,
    pub created_at: i64,
    pub time_taken: String,
    pub response_code: String,
}

/// Base-shape response for deletions and membership edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusResponse {
    pub message: String,
    pub status: u16,
    pub time_taken: String,
    pub response_code: String,
}

// ==================== Voice ====================

/// Response to `CreateVoiceEnrollment[ByUrl]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVoiceEnrollmentResponse {
    pub message: String,
    pub content_language: String,
    pub id: i64,
    pub status: u16,
    pub text: String,
    pub text_confidence: f32,
    pub created_at: i64,
    pub time_taken: String,
    pub response_code: String,
}

/// Response to `VoiceVerification[ByUrl]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoiceVerificationResponse {
    pub message: String,
    pub status: u16,
    pub confidence: f32,
    pub text: String,
    pub text_confidence: f32,
    pub time_taken: String,
    pub response_code: String,
}

/// Response to `VoiceIdentification[ByUrl]`; `user_id` is the matched
/// identity within the probed group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoiceIdentificationResponse {
    pub message: String,
    pub user_id: String,
    pub group_id: String,
    pub confidence: f32,
    pub status: u16,
    pub text: String,
    pub text_confidence: f32,
    pub time_taken: String,
    pub response_code: String,
}

// ==================== Video ====================

/// Response to `CreateVideoEnrollment[ByUrl]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateVideoEnrollmentResponse {
    pub message: String,
    pub content_language: String,
    pub id: i64,
    pub status: u16,
    pub text: String,
    pub text_confidence: f32,
    pub created_at: i64,
    pub time_taken: String,
    pub response_code: String,
}

/// Response to `VideoVerification[ByUrl]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoVerificationResponse {
    pub message: String,
    pub status: u16,
    pub voice_confidence: f32,
    pub face_confidence: f32,
    pub text: String,
    pub text_confidence: f32,
    pub blinks_count: i32,
    pub time_taken: String,
    pub response_code: String,
}

/// Response to `VideoIdentification[ByUrl]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoIdentificationResponse {
    pub message: String,
    pub user_id: String,
    pub status: u16,
    pub voice_confidence: f32,
    pub face_confidence: f32,
    pub text: String,
    pub text_confidence: f32,
    pub blinks_count: i32,
    pub time_taken: String,
    pub response_code: String,
}

// ==================== Face ====================

/// Response to `CreateFaceEnrollment`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateFaceEnrollmentResponse {
    pub message: String,
    pub status: u16,
    pub blinks_count: i32,
    pub created_at: i64,
    pub time_taken: String,
    pub face_enrollment_id: i64,
    pub response_code: String,
}

/// Response to `FaceVerification`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FaceVerificationResponse {
    pub message: String,
    pub status: u16,
    pub face_confidence: f32,
    pub blinks_count: i32,
    pub time_taken: String,
    pub response_code: String,
}
