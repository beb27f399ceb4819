//! Playback state with a user token.
//!
//! Exchanges a stored refresh token for an access token, then prints what
//! the user is listening to and which devices are available.

use tunesrs::{Credentials, MusicClient, RequestParams, refresh_token_from_env};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let credentials = Credentials::from_env()?;
    let refresh_token = refresh_token_from_env()?;
    let client = MusicClient::new();

    let token = client
        .refresh_access_token(&credentials, &refresh_token)
        .await?;

    let resp = client
        .get_information_about_the_users_current_playback(&RequestParams::new(), &token)
        .await?
        .error_for_status()?;

    if resp.status.as_u16() == 204 {
        println!("Nothing is playing");
    } else {
        let playback: serde_json::Value = resp.json()?;
        println!(
            "Playing {} on {} (shuffle: {}, repeat: {})",
            playback["item"]["name"],
            playback["device"]["name"],
            playback["shuffle_state"],
            playback["repeat_state"]
        );
    }

    let devices: serde_json::Value = client
        .get_a_users_available_devices(&RequestParams::new(), &token)
        .await?
        .error_for_status()?
        .json()?;

    println!("Devices:");
    for device in devices["devices"].as_array().into_iter().flatten() {
        println!("   - {} ({})", device["name"], device["type"]);
    }

    Ok(())
}
