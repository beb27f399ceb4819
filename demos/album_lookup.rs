//! Album lookup with an app-only token.
//!
//! This example shows how to:
//! - Read client credentials from the environment
//! - Obtain a token with the client-credentials grant
//! - Fetch an album and its tracks

use tunesrs::{Credentials, MusicClient, RequestParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let credentials = Credentials::from_env()?;
    let client = MusicClient::new();

    println!("Requesting access token...");
    let token = client.get_access_token(&credentials).await?;

    let album_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0sNOF9WDwhWunNAHPD3Baj".to_string());

    let params = RequestParams::new()
        .with("id", album_id.as_str())
        .with("market", "SE");

    let album: serde_json::Value = client
        .get_an_album(&params, &token)
        .await?
        .error_for_status()?
        .json()?;

    println!("Album: {}", album["name"]);
    println!("Released: {}", album["release_date"]);

    let params = params.with("limit", 50);
    let tracks: serde_json::Value = client
        .get_an_albums_tracks(&params, &token)
        .await?
        .error_for_status()?
        .json()?;

    for track in tracks["items"].as_array().into_iter().flatten() {
        println!("   {:>2}. {}", track["track_number"], track["name"]);
    }

    Ok(())
}
