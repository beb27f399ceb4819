use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const GET_CURRENT_USERS_PROFILE: Endpoint = Endpoint::get("get_current_users_profile", "me");
pub const GET_A_USERS_PROFILE: Endpoint = Endpoint::get("get_a_users_profile", "users/user_id");
// TODO: route `type` (artists or tracks) into the path instead of the query string
pub const GET_USERS_TOP_ARTISTS_AND_TRACKS: Endpoint =
    Endpoint::get("get_users_top_artists_and_tracks", "me/top/type").unimplemented();

impl MusicClient {
    /// Get the profile of the user the token belongs to.
    pub async fn get_current_users_profile(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_CURRENT_USERS_PROFILE.execute(self, params, token).await
    }

    /// Get a user's public profile.
    ///
    /// # Parameters
    ///
    /// * `user_id` - The user ID (required)
    pub async fn get_a_users_profile(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_USERS_PROFILE.execute(self, params, token).await
    }

    /// Get the current user's top artists or tracks.
    ///
    /// Not implemented: always fails with [`Error::NotImplemented`] and
    /// sends nothing.
    pub async fn get_users_top_artists_and_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_USERS_TOP_ARTISTS_AND_TRACKS
            .execute(self, params, token)
            .await
    }
}
