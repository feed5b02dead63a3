//! Group directory and membership operations.

use std::sync::Arc;

use crate::envelope::Envelope;
use crate::http::HttpClient;
use crate::media::Values;
use crate::ops;

/// Group directory service.
///
/// Groups hold a many-to-many membership relation to users; identification
/// runs against the users currently in a group. Deleting a group does not
/// delete its members.
pub struct GroupService {
    http: Arc<HttpClient>,
}

impl GroupService {
    pub(crate) fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Creates a group with a description (may be empty); the service
    /// echoes the description back and returns the generated `groupId`.
    pub async fn create(&self, description: &str) -> Envelope {
        self.http
            .invoke(
                &ops::CREATE_GROUP,
                &[],
                Values {
                    texts: &[description],
                    ..Default::default()
                },
            )
            .await
    }

    /// Adds a user to a group.
    pub async fn add_user(&self, group_id: &str, user_id: &str) -> Envelope {
        self.http
            .invoke(
                &ops::ADD_USER_TO_GROUP,
                &[],
                Values {
                    texts: &[group_id, user_id],
                    ..Default::default()
                },
            )
            .await
    }

    /// Removes a user from a group; the user itself is untouched.
    pub async fn remove_user(&self, group_id: &str, user_id: &str) -> Envelope {
        self.http
            .invoke(
                &ops::REMOVE_USER_FROM_GROUP,
                &[],
                Values {
                    texts: &[group_id, user_id],
                    ..Default::default()
                },
            )
            .await
    }

    /// Deletes a group. Members are not cascade-deleted.
    pub async fn delete(&self, group_id: &str) -> Envelope {
        self.http
            .invoke(
                &ops::DELETE_GROUP,
                &[("groupId", group_id)],
                Values::default(),
            )
            .await
    }
}
