//! User directory operations.

use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::Values;
use crate::ops;

/// User directory service.
pub struct UserService {
    http: Arc<HttpClient>,
}

impl UserService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Lists every user on the account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn run() -> voiceit2::Result<()> {
    /// # let client = voiceit2::Client::new("key", "tok")?;
    /// let listing: voiceit2::GetAllUsersResponse = client.users().get_all().await.decode()?;
    /// for user in &listing.users {
    ///     println!("{} created at {}", user.user_id, user.created_at);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_all(&self) -> Envelope {
        self.http
            .invoke(&ops::GET_ALL_USERS, &[], Values::default())
            .await
    }

    /// Creates a user; the service generates and returns its `userId`.
    pub async fn create(&self) -> Envelope {
        self.http
            .invoke(&ops::CREATE_USER, &[], Values::default())
            .await
    }

    /// Deletes a user. Enrollments owned by the user become unusable for
    /// later verification or identification.
    pub async fn delete(&self, user_id: &str) -> Envelope {
        self.http
            .invoke(&ops::DELETE_USER, &[("userId", user_id)], Values::default())
            .await
    }
}
