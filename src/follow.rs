use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const CHECK_IF_CURRENT_USER_FOLLOWS_ARTISTS_OR_USERS: Endpoint = Endpoint::get(
    "check_if_current_user_follows_artists_or_users",
    "me/following/contains",
);
pub const CHECK_IF_USERS_FOLLOW_A_PLAYLIST: Endpoint = Endpoint::get(
    "check_if_users_follow_a_playlist",
    "playlists/playlist_id/followers/contains",
);
pub const FOLLOW_ARTISTS_OR_USERS: Endpoint =
    Endpoint::put("follow_artists_or_users", "me/following");
pub const FOLLOW_A_PLAYLIST: Endpoint =
    Endpoint::put("follow_a_playlist", "playlists/playlist_id/followers");
pub const GET_USERS_FOLLOWED_ARTISTS: Endpoint =
    Endpoint::get("get_users_followed_artists", "me/following");
pub const UNFOLLOW_ARTISTS_OR_USERS: Endpoint =
    Endpoint::delete("unfollow_artists_or_users", "me/following");
pub const UNFOLLOW_PLAYLIST: Endpoint =
    Endpoint::delete("unfollow_playlist", "playlists/playlist_id/followers");

impl MusicClient {
    /// Check whether the current user follows some artists or users.
    ///
    /// # Parameters
    ///
    /// * `type` - `artist` or `user` (required)
    /// * `ids` - Comma-separated list of IDs to check (required)
    pub async fn check_if_current_user_follows_artists_or_users(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CHECK_IF_CURRENT_USER_FOLLOWS_ARTISTS_OR_USERS
            .execute(self, params, token)
            .await
    }

    /// Check whether some users follow a playlist.
    ///
    /// # Parameters
    ///
    /// * `playlist_id` - The playlist ID (required)
    /// * `ids` - Comma-separated list of user IDs (required)
    pub async fn check_if_users_follow_a_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CHECK_IF_USERS_FOLLOW_A_PLAYLIST
            .execute(self, params, token)
            .await
    }

    /// Follow artists or users. Takes `type` and `ids`.
    pub async fn follow_artists_or_users(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        FOLLOW_ARTISTS_OR_USERS.execute(self, params, token).await
    }

    /// Follow a playlist.
    ///
    /// # Parameters
    ///
    /// * `playlist_id` - The playlist ID (required)
    /// * `public` - Whether the playlist shows up on the user's profile (sent in the body)
    pub async fn follow_a_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        FOLLOW_A_PLAYLIST.execute(self, params, token).await
    }

    /// Get the artists the current user follows.
    ///
    /// # Parameters
    ///
    /// * `type` - Must be `artist` (required)
    /// * `after` - Cursor: the last artist ID of the previous page
    /// * `limit` - Maximum number of artists to return
    pub async fn get_users_followed_artists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_USERS_FOLLOWED_ARTISTS.execute(self, params, token).await
    }

    /// Unfollow artists or users. Takes `type` and `ids`.
    pub async fn unfollow_artists_or_users(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        UNFOLLOW_ARTISTS_OR_USERS.execute(self, params, token).await
    }

    pub async fn unfollow_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        UNFOLLOW_PLAYLIST.execute(self, params, token).await
    }
}
