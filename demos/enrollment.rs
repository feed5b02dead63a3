//! Voice enrollment walkthrough.
//!
//! Creates a user, enrolls three voice samples by URL, runs a 1:1
//! verification, then cleans the account back up.
//!
//! Run with:
//! ```bash
//! export VIAPIKEY="your-api-key"
//! export VIAPITOKEN="your-api-token"
//! cargo run --example enrollment
//! ```

use std::env;

use voiceit2::{
    Client, CreateUserResponse, CreateVoiceEnrollmentResponse, VoiceVerificationResponse,
};

const TEST_DATA: &str = "https://s3.amazonaws.com/voiceit-api2-testing-files/test-data";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = env::var("VIAPIKEY").expect("VIAPIKEY environment variable not set");
    let api_token = env::var("VIAPITOKEN").expect("VIAPITOKEN environment variable not set");

    let client = Client::new(api_key, api_token)?;

    let created: CreateUserResponse = client.users().create().await.decode()?;
    println!("created user {}", created.user_id);

    for n in 1..=3 {
        let url = format!("{TEST_DATA}/enrollmentArmaan{n}.wav");
        let enrolled: CreateVoiceEnrollmentResponse = client
            .voice()
            .enroll_by_url(&created.user_id, "en-US", &url)
            .await
            .decode()?;
        println!("enrollment {}: \"{}\"", enrolled.id, enrolled.text);
    }

    let verified: VoiceVerificationResponse = client
        .voice()
        .verify_by_url(
            &created.user_id,
            "en-US",
            &format!("{TEST_DATA}/verificationArmaan1.wav"),
        )
        .await
        .decode()?;
    println!("verified with confidence {:.1}", verified.confidence);

    let cleanup = client.enrollments().delete_all(&created.user_id).await;
    println!("cleanup: {}", cleanup.is_success());
    client.users().delete(&created.user_id).await;

    Ok(())
}
