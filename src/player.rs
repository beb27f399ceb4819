use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const ADD_ITEM_TO_QUEUE: Endpoint = Endpoint::post("add_item_to_queue", "me/player/queue");
pub const GET_A_USERS_AVAILABLE_DEVICES: Endpoint =
    Endpoint::get("get_a_users_available_devices", "me/player/devices");
pub const GET_INFORMATION_ABOUT_THE_USERS_CURRENT_PLAYBACK: Endpoint = Endpoint::get(
    "get_information_about_the_users_current_playback",
    "me/player",
);
pub const GET_CURRENT_USERS_RECENTLY_PLAYED_TRACKS: Endpoint = Endpoint::get(
    "get_current_users_recently_played_tracks",
    "me/player/recently-played",
);
pub const GET_THE_USERS_CURRENTLY_PLAYING_TRACK: Endpoint = Endpoint::get(
    "get_the_users_currently_playing_track",
    "me/player/currently-playing",
);
pub const PAUSE_A_USERS_PLAYBACK: Endpoint =
    Endpoint::put("pause_a_users_playback", "me/player/pause");
pub const SEEK_TO_POSITION_IN_CURRENTLY_PLAYING_TRACK: Endpoint = Endpoint::put(
    "seek_to_position_in_currently_playing_track",
    "me/player/seek",
);
pub const SET_REPEAT_MODE_ON_USERS_PLAYBACK: Endpoint =
    Endpoint::put("set_repeat_mode_on_users_playback", "me/player/repeat");
pub const SET_VOLUME_FOR_USERS_PLAYBACK: Endpoint =
    Endpoint::put("set_volume_for_users_playback", "me/player/volume");
pub const SKIP_USERS_PLAYBACK_TO_NEXT_TRACK: Endpoint =
    Endpoint::post("skip_users_playback_to_next_track", "me/player/next");
pub const SKIP_USERS_PLAYBACK_TO_PREVIOUS_TRACK: Endpoint =
    Endpoint::post("skip_users_playback_to_previous_track", "me/player/previous");
pub const START_RESUME_A_USERS_PLAYBACK: Endpoint =
    Endpoint::put("start_resume_a_users_playback", "me/player/play");
pub const TOGGLE_SHUFFLE_FOR_USERS_PLAYBACK: Endpoint =
    Endpoint::put("toggle_shuffle_for_users_playback", "me/player/shuffle");
// TODO: send device_ids and play as a JSON body
pub const TRANSFER_A_USERS_PLAYBACK: Endpoint =
    Endpoint::put("transfer_a_users_playback", "me/player").unimplemented();

/// Playback control for the current user.
///
/// All of these act on the user's active device unless `device_id` is
/// given, and require a user token with the matching playback scopes.
impl MusicClient {
    /// Add an item to the end of the playback queue.
    ///
    /// # Parameters
    ///
    /// * `uri` - The track or episode URI to queue (required)
    /// * `device_id` - Target device
    pub async fn add_item_to_queue(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        ADD_ITEM_TO_QUEUE.execute(self, params, token).await
    }

    pub async fn get_a_users_available_devices(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_USERS_AVAILABLE_DEVICES
            .execute(self, params, token)
            .await
    }

    /// Get the current playback state: device, item, progress, shuffle and
    /// repeat. Accepts `market` and `additional_types`.
    ///
    /// The service answers `204 No Content` when nothing is playing.
    pub async fn get_information_about_the_users_current_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_INFORMATION_ABOUT_THE_USERS_CURRENT_PLAYBACK
            .execute(self, params, token)
            .await
    }

    /// Get recently played tracks.
    ///
    /// # Parameters
    ///
    /// * `limit` - Maximum number of items to return
    /// * `after` - Unix timestamp in milliseconds; return items played after it
    /// * `before` - Unix timestamp in milliseconds; return items played before it
    pub async fn get_current_users_recently_played_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_CURRENT_USERS_RECENTLY_PLAYED_TRACKS
            .execute(self, params, token)
            .await
    }

    /// Get the item currently playing. Accepts `market` and `additional_types`.
    pub async fn get_the_users_currently_playing_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_THE_USERS_CURRENTLY_PLAYING_TRACK
            .execute(self, params, token)
            .await
    }

    pub async fn pause_a_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        PAUSE_A_USERS_PLAYBACK.execute(self, params, token).await
    }

    /// Seek within the current track.
    ///
    /// # Parameters
    ///
    /// * `position_ms` - Position in milliseconds (required)
    /// * `device_id` - Target device
    pub async fn seek_to_position_in_currently_playing_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SEEK_TO_POSITION_IN_CURRENTLY_PLAYING_TRACK
            .execute(self, params, token)
            .await
    }

    /// Set the repeat mode.
    ///
    /// # Parameters
    ///
    /// * `state` - `track`, `context` or `off` (required)
    /// * `device_id` - Target device
    pub async fn set_repeat_mode_on_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SET_REPEAT_MODE_ON_USERS_PLAYBACK
            .execute(self, params, token)
            .await
    }

    /// Set the volume.
    ///
    /// # Parameters
    ///
    /// * `volume_percent` - Volume from 0 to 100 (required)
    /// * `device_id` - Target device
    pub async fn set_volume_for_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SET_VOLUME_FOR_USERS_PLAYBACK
            .execute(self, params, token)
            .await
    }

    pub async fn skip_users_playback_to_next_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SKIP_USERS_PLAYBACK_TO_NEXT_TRACK
            .execute(self, params, token)
            .await
    }

    pub async fn skip_users_playback_to_previous_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SKIP_USERS_PLAYBACK_TO_PREVIOUS_TRACK
            .execute(self, params, token)
            .await
    }

    /// Start or resume playback. Accepts `device_id`.
    pub async fn start_resume_a_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        START_RESUME_A_USERS_PLAYBACK
            .execute(self, params, token)
            .await
    }

    /// Turn shuffle on or off.
    ///
    /// # Parameters
    ///
    /// * `state` - `true` or `false` (required)
    /// * `device_id` - Target device
    pub async fn toggle_shuffle_for_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        TOGGLE_SHUFFLE_FOR_USERS_PLAYBACK
            .execute(self, params, token)
            .await
    }

    /// Move playback to another device.
    ///
    /// Not implemented: always fails with [`Error::NotImplemented`] and
    /// sends nothing.
    pub async fn transfer_a_users_playback(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        TRANSFER_A_USERS_PLAYBACK.execute(self, params, token).await
    }
}
