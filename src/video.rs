//! Video enrollment, verification, and identification.
//!
//! Video calls carry both voice and face signal; enrollment and
//! verification accept a blink-detection toggle for liveness.

use std::path::Path;
use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::{MediaSource, Values};
use crate::ops;

/// Video biometrics service.
pub struct VideoService {
    http: Arc<HttpClient>,
}

impl VideoService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Enrolls a video sample from a local file.
    pub async fn enroll(
        &self,
        user_id: &str,
        content_language: &str,
        video: impl AsRef<Path>,
        do_blink_detection: bool,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_VIDEO_ENROLLMENT,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    flags: &[do_blink_detection],
                    media: Some(MediaSource::file(video.as_ref())),
                },
            )
            .await
    }

    /// Enrolls a video sample the service downloads from `file_url`.
    pub async fn enroll_by_url(
        &self,
        user_id: &str,
        content_language: &str,
        file_url: &str,
        do_blink_detection: bool,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_VIDEO_ENROLLMENT_BY_URL,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    flags: &[do_blink_detection],
                    media: Some(MediaSource::url(file_url)),
                },
            )
            .await
    }

    /// Verifies a probe video against one user's video enrollments.
    pub async fn verify(
        &self,
        user_id: &str,
        content_language: &str,
        video: impl AsRef<Path>,
        do_blink_detection: bool,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VIDEO_VERIFICATION,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    flags: &[do_blink_detection],
                    media: Some(MediaSource::file(video.as_ref())),
                },
            )
            .await
    }

    /// Verifies a probe video fetched from `file_url`.
    pub async fn verify_by_url(
        &self,
        user_id: &str,
        content_language: &str,
        file_url: &str,
        do_blink_detection: bool,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VIDEO_VERIFICATION_BY_URL,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    flags: &[do_blink_detection],
                    media: Some(MediaSource::url(file_url)),
                },
            )
            .await
    }

    /// Identifies which member of a group a probe video belongs to.
    pub async fn identify(
        &self,
        group_id: &str,
        content_language: &str,
        video: impl AsRef<Path>,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VIDEO_IDENTIFICATION,
                &[],
                Values {
                    texts: &[group_id, content_language],
                    media: Some(MediaSource::file(video.as_ref())),
                    ..Default::default()
                },
            )
            .await
    }

    /// Identifies within a group from a probe fetched from `file_url`.
    pub async fn identify_by_url(
        &self,
        group_id: &str,
        content_language: &str,
        file_url: &str,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VIDEO_IDENTIFICATION_BY_URL,
                &[],
                Values {
                    texts: &[group_id, content_language],
                    media: Some(MediaSource::url(file_url)),
                    ..Default::default()
                },
            )
            .await
    }
}
