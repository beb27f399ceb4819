use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const GET_AN_ARTIST: Endpoint = Endpoint::get("get_an_artist", "artists/id");
pub const GET_AN_ARTISTS_ALBUMS: Endpoint =
    Endpoint::get("get_an_artists_albums", "artists/id/albums");
pub const GET_AN_ARTISTS_TOP_TRACKS: Endpoint =
    Endpoint::get("get_an_artists_top_tracks", "artists/id/top-tracks");
pub const GET_AN_ARTISTS_RELATED_ARTISTS: Endpoint =
    Endpoint::get("get_an_artists_related_artists", "artists/id/related-artists");
pub const GET_SEVERAL_ARTISTS: Endpoint = Endpoint::get("get_several_artists", "artists");

impl MusicClient {
    /// Get catalog information for a single artist.
    ///
    /// # Parameters
    ///
    /// * `id` - The artist ID (required)
    pub async fn get_an_artist(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ARTIST.execute(self, params, token).await
    }

    /// Get an artist's albums.
    ///
    /// # Parameters
    ///
    /// * `id` - The artist ID (required)
    /// * `include_groups` - Comma-separated album types, e.g. `album,single`
    /// * `market` - An ISO 3166-1 alpha-2 country code
    /// * `limit` - Maximum number of albums to return
    /// * `offset` - Index of the first album to return
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("id", "0OdUWJ0sBjDrqHygGUXeCF")
    ///     .with("include_groups", vec!["album", "single"])
    ///     .with("limit", 10);
    /// let albums = client.get_an_artists_albums(&params, &token).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_an_artists_albums(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ARTISTS_ALBUMS.execute(self, params, token).await
    }

    /// Get an artist's top tracks in a market.
    ///
    /// # Parameters
    ///
    /// * `id` - The artist ID (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code (required)
    pub async fn get_an_artists_top_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ARTISTS_TOP_TRACKS.execute(self, params, token).await
    }

    /// Get artists similar to the given artist.
    pub async fn get_an_artists_related_artists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ARTISTS_RELATED_ARTISTS
            .execute(self, params, token)
            .await
    }

    /// Get several artists at once; pass their IDs as `ids`.
    pub async fn get_several_artists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_SEVERAL_ARTISTS.execute(self, params, token).await
    }
}
