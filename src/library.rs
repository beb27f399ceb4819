use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const CHECK_USERS_SAVED_ALBUMS: Endpoint =
    Endpoint::get("check_users_saved_albums", "me/albums/contains");
pub const CHECK_USERS_SAVED_TRACKS: Endpoint =
    Endpoint::get("check_users_saved_tracks", "me/tracks/contains");
pub const GET_CURRENT_USERS_SAVED_ALBUMS: Endpoint =
    Endpoint::get("get_current_users_saved_albums", "me/albums");
pub const GET_USERS_SAVED_TRACKS: Endpoint = Endpoint::get("get_users_saved_tracks", "me/tracks");
pub const REMOVE_ALBUMS_FOR_CURRENT_USER: Endpoint =
    Endpoint::delete("remove_albums_for_current_user", "me/albums");
pub const REMOVE_USERS_SAVED_TRACKS: Endpoint =
    Endpoint::delete("remove_users_saved_tracks", "me/tracks");
pub const SAVE_ALBUMS_FOR_CURRENT_USER: Endpoint =
    Endpoint::put("save_albums_for_current_user", "me/albums");
pub const SAVE_TRACKS_FOR_USER: Endpoint = Endpoint::put("save_tracks_for_user", "me/tracks");

impl MusicClient {
    /// Check whether albums are saved in the current user's library.
    ///
    /// # Parameters
    ///
    /// * `ids` - Comma-separated list of album IDs (required)
    pub async fn check_users_saved_albums(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CHECK_USERS_SAVED_ALBUMS.execute(self, params, token).await
    }

    /// Check whether tracks are saved in the current user's library.
    ///
    /// # Parameters
    ///
    /// * `ids` - Comma-separated list of track IDs (required)
    pub async fn check_users_saved_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CHECK_USERS_SAVED_TRACKS.execute(self, params, token).await
    }

    /// Get the albums saved in the current user's library.
    ///
    /// Accepts `limit`, `offset` and `market`.
    pub async fn get_current_users_saved_albums(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_CURRENT_USERS_SAVED_ALBUMS
            .execute(self, params, token)
            .await
    }

    /// Get the tracks saved in the current user's library.
    ///
    /// Accepts `limit`, `offset` and `market`.
    pub async fn get_users_saved_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_USERS_SAVED_TRACKS.execute(self, params, token).await
    }

    /// Remove albums from the current user's library; pass them as `ids`.
    pub async fn remove_albums_for_current_user(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        REMOVE_ALBUMS_FOR_CURRENT_USER
            .execute(self, params, token)
            .await
    }

    /// Remove tracks from the current user's library; pass them as `ids`.
    pub async fn remove_users_saved_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        REMOVE_USERS_SAVED_TRACKS.execute(self, params, token).await
    }

    /// Save albums to the current user's library.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new().with("ids", vec!["382ObEPsp2rxGrnsizN5TX", "1A2GTWGtFfWp7KSQTwWOyo"]);
    /// let resp = client.save_albums_for_current_user(&params, &token).await?;
    /// assert!(resp.is_success());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn save_albums_for_current_user(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SAVE_ALBUMS_FOR_CURRENT_USER
            .execute(self, params, token)
            .await
    }

    /// Save tracks to the current user's library; pass them as `ids`.
    pub async fn save_tracks_for_user(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SAVE_TRACKS_FOR_USER.execute(self, params, token).await
    }
}
