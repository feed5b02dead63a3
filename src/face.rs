//! Face enrollment and verification.

use std::path::Path;
use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::{MediaSource, Values};
use crate::ops;

/// Face biometrics service. Face samples are short video clips; the
/// optional blink-detection toggle adds a liveness check.
pub struct FaceService {
    http: Arc<HttpClient>,
}

impl FaceService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Enrolls a face sample from a local video file. The response carries
    /// `faceEnrollmentId` and the observed `blinksCount`.
    pub async fn enroll(
        &self,
        user_id: &str,
        video: impl AsRef<Path>,
        do_blink_detection: bool,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_FACE_ENROLLMENT,
                &[],
                Values {
                    texts: &[user_id],
                    flags: &[do_blink_detection],
                    media: Some(MediaSource::file(video.as_ref())),
                },
            )
            .await
    }

    /// Verifies a probe clip against one user's face enrollments.
    pub async fn verify(&self, user_id: &str, video: impl AsRef<Path>) -> Envelope {
        self.http
            .invoke(
                &ops::FACE_VERIFICATION,
                &[],
                Values {
                    texts: &[user_id],
                    media: Some(MediaSource::file(video.as_ref())),
                    ..Default::default()
                },
            )
            .await
    }
}
