//! Flow tests mirroring real account choreography against scripted
//! responses: user and group CRUD, voice enrollment, identification, and
//! enrollment cleanup.
//!
//! Sequential responses for one endpoint are modeled with ordered
//! `up_to_n_times(1)` mocks, so repeated calls observe distinct documents
//! the way a live account would produce them.

use std::time::Duration;

use regex::Regex;
use voiceit2::{
    Client, CreateGroupResponse, CreateUserResponse, CreateVoiceEnrollmentResponse,
    StatusResponse, VoiceIdentificationResponse,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_A: &str = "usr_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const USER_B: &str = "usr_bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
const GROUP: &str = "grp_cccccccccccccccccccccccccccccccc";

fn client_for(server: &MockServer) -> Client {
    Client::builder("key", "tok")
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client construction")
}

fn create_user_body(user_id: &str) -> String {
    format!(
        r#"{{"message":"Created user with userId : {user_id}","status":201,"timeTaken":"0.01s","createdAt":1508874727,"userId":"{user_id}","responseCode":"SUCC"}}"#
    )
}

fn voice_enrollment_body(user_id: &str, id: i64) -> String {
    format!(
        r#"{{"message":"Successfully enrolled user with userId : {user_id}","contentLanguage":"en-US","id":{id},"status":201,"text":"Never forget tomorrow is a new day","textConfidence":91.0,"createdAt":1508874727,"timeTaken":"2.5s","responseCode":"SUCC"}}"#
    )
}

async fn mount_sequential_enrollments(server: &MockServer, user_id: &'static str) {
    for id in 1..=3 {
        Mock::given(method("POST"))
            .and(path("/enrollments/byUrl"))
            .and(body_string_contains(format!("userId={user_id}")))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_raw(voice_enrollment_body(user_id, id), "application/json"),
            )
            .up_to_n_times(1)
            .mount(server)
            .await;
    }
}

#[tokio::test]
async fn user_creation_and_deletion_follow_the_identifier_conventions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(201).set_body_raw(create_user_body(USER_A), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created: CreateUserResponse = client.users().create().await.decode().unwrap();

    let id_format = Regex::new(r"^usr_[0-9a-z]{32}$").unwrap();
    assert!(id_format.is_match(&created.user_id));
    assert_eq!(created.user_id.len(), 36);
    assert!(created.created_at > 0);
    assert_eq!(created.status, 201);
    assert_eq!(created.response_code, "SUCC");
    assert!(created.message.starts_with("Created user with userId : usr_"));

    Mock::given(method("DELETE"))
        .and(path(format!("/users/{}", created.user_id)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"message":"Deleted user with userId : {}","status":200,"timeTaken":"0.01s","responseCode":"SUCC"}}"#,
                created.user_id
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let deleted: StatusResponse = client.users().delete(&created.user_id).await.decode().unwrap();
    assert_eq!(deleted.status, 200);
    assert!(deleted.message.starts_with("Deleted user with userId : usr_"));
}

#[tokio::test]
async fn group_membership_edits_echo_both_identifiers() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    Mock::given(method("POST"))
        .and(path("/groups"))
        .and(body_string_contains("description=Sample+Group+Description"))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            format!(
                r#"{{"message":"Created group with groupId: {GROUP}","description":"Sample Group Description","groupId":"{GROUP}","status":201,"createdAt":1508874727,"timeTaken":"0.01s","responseCode":"SUCC"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let group: CreateGroupResponse = client
        .groups()
        .create("Sample Group Description")
        .await
        .decode()
        .unwrap();
    assert_eq!(group.description, "Sample Group Description");
    assert!(Regex::new(r"^grp_[0-9a-z]{32}$").unwrap().is_match(&group.group_id));

    Mock::given(method("PUT"))
        .and(path("/groups/addUser"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"message":"Successfully added user {USER_A} to group with groupId : {GROUP}","status":200,"timeTaken":"0.01s","responseCode":"SUCC"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/groups/removeUser"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"message":"Successfully removed user {USER_A} from group with groupId : {GROUP}","status":200,"timeTaken":"0.01s","responseCode":"SUCC"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let added: StatusResponse = client
        .groups()
        .add_user(&group.group_id, USER_A)
        .await
        .decode()
        .unwrap();
    let added_format =
        Regex::new(r"Successfully added user usr_[0-9a-z]{32} to group with groupId : grp_[0-9a-z]{32}")
            .unwrap();
    assert!(added_format.is_match(&added.message));
    assert_eq!(added.status, 200);

    let removed: StatusResponse = client
        .groups()
        .remove_user(&group.group_id, USER_A)
        .await
        .decode()
        .unwrap();
    let removed_format = Regex::new(
        r"Successfully removed user usr_[0-9a-z]{32} from group with groupId : grp_[0-9a-z]{32}",
    )
    .unwrap();
    assert!(removed_format.is_match(&removed.message));
    assert_eq!(removed.status, 200);
}

#[tokio::test]
async fn voice_identification_flow_matches_the_enrolled_speaker() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    // Two users, created back to back.
    for user_id in [USER_A, USER_B] {
        Mock::given(method("POST"))
            .and(path("/users"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_raw(create_user_body(user_id), "application/json"),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;
    }

    let a: CreateUserResponse = client.users().create().await.decode().unwrap();
    let b: CreateUserResponse = client.users().create().await.decode().unwrap();
    assert_eq!(a.user_id, USER_A);
    assert_eq!(b.user_id, USER_B);

    // Three enrollments per user; ids are unique per user.
    mount_sequential_enrollments(&server, USER_A).await;
    mount_sequential_enrollments(&server, USER_B).await;

    let mut ids_a = Vec::new();
    for n in 1..=3 {
        let enrolled: CreateVoiceEnrollmentResponse = client
            .voice()
            .enroll_by_url(
                &a.user_id,
                "en-US",
                &format!("https://example.com/enrollmentA{n}.wav"),
            )
            .await
            .decode()
            .unwrap();
        assert_eq!(enrolled.status, 201);
        assert_eq!(enrolled.content_language, "en-US");
        assert_eq!(enrolled.text, "Never forget tomorrow is a new day");
        ids_a.push(enrolled.id);
    }
    ids_a.sort_unstable();
    ids_a.dedup();
    assert_eq!(ids_a.len(), 3, "enrollment ids repeat within one user");

    for n in 1..=3 {
        let enrolled: CreateVoiceEnrollmentResponse = client
            .voice()
            .enroll_by_url(
                &b.user_id,
                "en-US",
                &format!("https://example.com/enrollmentB{n}.wav"),
            )
            .await
            .decode()
            .unwrap();
        assert_eq!(enrolled.status, 201);
    }

    // Identification against the group picks out speaker A.
    Mock::given(method("POST"))
        .and(path("/identification/byUrl"))
        .and(body_string_contains(format!("groupId={GROUP}")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"message":"Successfully identified user with userId : {USER_A} in group with groupId : {GROUP}","userId":"{USER_A}","groupId":"{GROUP}","confidence":94.2,"status":200,"text":"Never forget tomorrow is a new day","textConfidence":90.1,"timeTaken":"3.1s","responseCode":"SUCC"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let identified: VoiceIdentificationResponse = client
        .voice()
        .identify_by_url(GROUP, "en-US", "https://example.com/probeA.wav")
        .await
        .decode()
        .unwrap();
    assert_eq!(identified.user_id, a.user_id);
    assert_eq!(identified.status, 200);
    assert_eq!(identified.response_code, "SUCC");
    let message_format = Regex::new(
        r"Successfully identified user with userId : usr_[0-9a-z]{32} in group with groupId : grp_[0-9a-z]{32}",
    )
    .unwrap();
    assert!(message_format.is_match(&identified.message));
}

#[tokio::test]
async fn deleting_enrollments_removes_the_user_from_later_matches() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    for id in [1_i64, 2, 3] {
        Mock::given(method("DELETE"))
            .and(path(format!("/enrollments/{USER_A}/{id}")))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                format!(
                    r#"{{"message":"Deleted enrollment with id : {id}","status":200,"timeTaken":"0.01s","responseCode":"SUCC"}}"#
                ),
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let deleted: StatusResponse = client
            .enrollments()
            .delete(USER_A, id)
            .await
            .decode()
            .unwrap();
        assert_eq!(deleted.message, format!("Deleted enrollment with id : {id}"));
        assert_eq!(deleted.status, 200);
    }

    Mock::given(method("DELETE"))
        .and(path(format!("/enrollments/{USER_B}/all")))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            format!(
                r#"{{"message":"Deleted all enrollments for user with userId : {USER_B}","status":200,"timeTaken":"0.02s","responseCode":"SUCC"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let wiped: StatusResponse = client
        .enrollments()
        .delete_all(USER_B)
        .await
        .decode()
        .unwrap();
    assert_eq!(wiped.status, 200);

    // With no enrollments left, identification over the group reports no
    // match instead of the deleted speaker.
    Mock::given(method("POST"))
        .and(path("/identification/byUrl"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            format!(
                r#"{{"message":"No match found in group with groupId : {GROUP}","status":404,"timeTaken":"2.9s","responseCode":"IFUD"}}"#
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client
        .voice()
        .identify_by_url(GROUP, "en-US", "https://example.com/probeA.wav")
        .await;
    assert!(!envelope.is_success());
    assert_eq!(envelope.http_status(), 404);
    let miss: VoiceIdentificationResponse = envelope.decode().unwrap();
    assert_ne!(miss.user_id, USER_A);
    assert!(miss.user_id.is_empty());
}
