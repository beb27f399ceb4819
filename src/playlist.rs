use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const ADD_ITEMS_TO_PLAYLIST: Endpoint =
    Endpoint::post("add_items_to_playlist", "playlists/playlist_id/tracks");
pub const CHANGE_A_PLAYLISTS_DETAILS: Endpoint =
    Endpoint::put("change_a_playlists_details", "playlists/playlist_id");
pub const CREATE_A_PLAYLIST: Endpoint =
    Endpoint::post("create_a_playlist", "users/user_id/playlists");
pub const GET_A_LIST_OF_CURRENT_USERS_PLAYLISTS: Endpoint =
    Endpoint::get("get_a_list_of_current_users_playlists", "me/playlists");
pub const GET_A_LIST_OF_A_USERS_PLAYLISTS: Endpoint =
    Endpoint::get("get_a_list_of_a_users_playlists", "users/user_id/playlists");
pub const GET_A_PLAYLIST_COVER_IMAGE: Endpoint =
    Endpoint::get("get_a_playlist_cover_image", "playlists/playlist_id/images");
pub const GET_A_PLAYLIST: Endpoint = Endpoint::get("get_a_playlist", "playlists/playlist_id");
pub const GET_A_PLAYLISTS_ITEMS: Endpoint =
    Endpoint::get("get_a_playlists_items", "playlists/playlist_id/tracks");
pub const REMOVE_ITEMS_FROM_PLAYLIST: Endpoint =
    Endpoint::delete("remove_items_from_playlist", "playlists/playlist_id/tracks");
// TODO: send range_start, insert_before, range_length and snapshot_id as a JSON body
pub const REORDER_OR_REPLACE_PLAYLIST_ITEMS: Endpoint =
    Endpoint::put("reorder_or_replace_playlist_items", "playlists/playlist_id/tracks")
        .unimplemented();

impl MusicClient {
    /// Add tracks or episodes to a playlist.
    ///
    /// # Parameters
    ///
    /// * `playlist_id` - The playlist ID (required)
    /// * `uris` - Comma-separated list of track or episode URIs (required)
    /// * `position` - Zero-based index to insert at; appends when absent
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("playlist_id", "3cEYpjA9oz9GiPac4AsH4n")
    ///     .with("uris", vec!["music:track:4iV5W9uYEdYUVa79Axb7Rh"])
    ///     .with("position", 0);
    /// let resp = client.add_items_to_playlist(&params, &token).await?.error_for_status()?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_items_to_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        ADD_ITEMS_TO_PLAYLIST.execute(self, params, token).await
    }

    /// Change a playlist's name, description or visibility.
    ///
    /// # Parameters
    ///
    /// * `playlist_id` - The playlist ID (required)
    /// * `name`, `description`, `public`, `collaborative` - New values, sent in the body
    pub async fn change_a_playlists_details(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CHANGE_A_PLAYLISTS_DETAILS.execute(self, params, token).await
    }

    /// Create a playlist for a user.
    ///
    /// # Parameters
    ///
    /// * `user_id` - The owner's user ID (required)
    /// * `name` - Playlist name (required, sent in the body)
    /// * `description`, `public`, `collaborative` - Sent in the body
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("user_id", "smedjan")
    ///     .with("name", "New Playlist")
    ///     .with("public", false);
    /// let playlist: serde_json::Value = client.create_a_playlist(&params, &token).await?.json()?;
    /// println!("Created {}", playlist["id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_a_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        CREATE_A_PLAYLIST.execute(self, params, token).await
    }

    /// Get the current user's playlists. Accepts `limit` and `offset`.
    pub async fn get_a_list_of_current_users_playlists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_LIST_OF_CURRENT_USERS_PLAYLISTS
            .execute(self, params, token)
            .await
    }

    /// Get a user's public playlists.
    ///
    /// # Parameters
    ///
    /// * `user_id` - The user ID (required)
    /// * `limit` - Maximum number of playlists to return
    /// * `offset` - Index of the first playlist to return
    pub async fn get_a_list_of_a_users_playlists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_LIST_OF_A_USERS_PLAYLISTS
            .execute(self, params, token)
            .await
    }

    pub async fn get_a_playlist_cover_image(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_PLAYLIST_COVER_IMAGE.execute(self, params, token).await
    }

    /// Get a playlist.
    ///
    /// # Parameters
    ///
    /// * `playlist_id` - The playlist ID (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    /// * `fields` - Field filter, e.g. `name,tracks.items(track.name)`
    /// * `additional_types` - Item types besides tracks, e.g. `episode`
    pub async fn get_a_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_PLAYLIST.execute(self, params, token).await
    }

    /// Get the items of a playlist.
    ///
    /// Takes `playlist_id` plus the same filters as [`MusicClient::get_a_playlist`],
    /// and `limit`/`offset` for paging.
    pub async fn get_a_playlists_items(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_PLAYLISTS_ITEMS.execute(self, params, token).await
    }

    /// Remove items from a playlist. Takes `playlist_id` and `uris`.
    pub async fn remove_items_from_playlist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        REMOVE_ITEMS_FROM_PLAYLIST.execute(self, params, token).await
    }

    /// Reorder or replace the items of a playlist.
    ///
    /// Not implemented: always fails with [`Error::NotImplemented`] and
    /// sends nothing.
    pub async fn reorder_or_replace_playlist_items(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        REORDER_OR_REPLACE_PLAYLIST_ITEMS
            .execute(self, params, token)
            .await
    }
}
