//! Enrollment deletion.

use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::Values;
use crate::ops;

/// Enrollment management service. Creation goes through the per-modality
/// services; deletion is modality-agnostic and lives here.
pub struct EnrollmentService {
    http: Arc<HttpClient>,
}

impl EnrollmentService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Deletes one enrollment of a user by its integer id.
    pub async fn delete(&self, user_id: &str, enrollment_id: i64) -> Envelope {
        let id = enrollment_id.to_string();
        self.http
            .invoke(
                &ops::DELETE_ENROLLMENT,
                &[("userId", user_id), ("enrollmentId", &id)],
                Values::default(),
            )
            .await
    }

    /// Deletes every enrollment a user holds, across all modalities.
    pub async fn delete_all(&self, user_id: &str) -> Envelope {
        self.http
            .invoke(
                &ops::DELETE_ALL_ENROLLMENTS,
                &[("userId", user_id)],
                Values::default(),
            )
            .await
    }
}
