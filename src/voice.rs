//! Voice enrollment, verification, and identification.

use std::path::Path;
use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::{MediaSource, Values};
use crate::ops;

/// Voice biometrics service.
///
/// Each user may hold several voice enrollments; redundant samples improve
/// match confidence. Verification is 1:1 against one user's enrollments,
/// identification is 1:N across a group.
pub struct VoiceService {
    http: Arc<HttpClient>,
}

impl VoiceService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Enrolls a voice sample from a local audio file.
    ///
    /// The file streams into the request body, so arbitrarily large
    /// recordings upload with bounded memory.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run() -> voiceit2::Result<()> {
    /// # let client = voiceit2::Client::new("key", "tok")?;
    /// let envelope = client
    ///     .voice()
    ///     .enroll("usr_c0ffeec0ffeec0ffeec0ffeec0ffee00", "en-US", "./enrollment1.wav")
    ///     .await;
    /// let created: voiceit2::CreateVoiceEnrollmentResponse = envelope.decode()?;
    /// println!("enrollment id {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn enroll(
        &self,
        user_id: &str,
        content_language: &str,
        recording: impl AsRef<Path>,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_VOICE_ENROLLMENT,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    media: Some(MediaSource::file(recording.as_ref())),
                    ..Default::default()
                },
            )
            .await
    }

    /// Enrolls a voice sample the service downloads from `file_url`.
    pub async fn enroll_by_url(
        &self,
        user_id: &str,
        content_language: &str,
        file_url: &str,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_VOICE_ENROLLMENT_BY_URL,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    media: Some(MediaSource::url(file_url)),
                    ..Default::default()
                },
            )
            .await
    }

    /// Verifies a probe recording against one user's voice enrollments.
    pub async fn verify(
        &self,
        user_id: &str,
        content_language: &str,
        recording: impl AsRef<Path>,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VOICE_VERIFICATION,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    media: Some(MediaSource::file(recording.as_ref())),
                    ..Default::default()
                },
            )
            .await
    }

    /// Verifies a probe recording fetched from `file_url`.
    pub async fn verify_by_url(
        &self,
        user_id: &str,
        content_language: &str,
        file_url: &str,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VOICE_VERIFICATION_BY_URL,
                &[],
                Values {
                    texts: &[user_id, content_language],
                    media: Some(MediaSource::url(file_url)),
                    ..Default::default()
                },
            )
            .await
    }

    /// Identifies which member of a group a probe recording belongs to.
    pub async fn identify(
        &self,
        group_id: &str,
        content_language: &str,
        recording: impl AsRef<Path>,
    ) -> Envelope {
        self.http
            .invoke(
                &ops::VOICE_IDENTIFICATION,
                &[],
                Values {
                    texts: &[group_id, content_language],
                    media: Some(MediaSource::file(recording.as_ref())),
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
                &ops::VOICE_IDENTIFICATION_BY_URL,
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
