use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const GET_AN_ALBUM: Endpoint = Endpoint::get("get_an_album", "albums/id");
pub const GET_AN_ALBUMS_TRACKS: Endpoint = Endpoint::get("get_an_albums_tracks", "albums/id/tracks");
pub const GET_SEVERAL_ALBUMS: Endpoint = Endpoint::get("get_several_albums", "albums");

impl MusicClient {
    /// Get catalog information for a single album.
    ///
    /// # Parameters
    ///
    /// * `id` - The album ID (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("id", "0sNOF9WDwhWunNAHPD3Baj")
    ///     .with("market", "SE");
    /// let album = client.get_an_album(&params, &token).await?;
    /// let album: serde_json::Value = album.json()?;
    /// println!("Album: {}", album["name"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_an_album(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ALBUM.execute(self, params, token).await
    }

    /// Get the tracks of an album.
    ///
    /// # Parameters
    ///
    /// * `id` - The album ID (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    /// * `limit` - Maximum number of tracks to return
    /// * `offset` - Index of the first track to return
    pub async fn get_an_albums_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AN_ALBUMS_TRACKS.execute(self, params, token).await
    }

    /// Get several albums at once.
    ///
    /// # Parameters
    ///
    /// * `ids` - Comma-separated list of album IDs (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    pub async fn get_several_albums(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_SEVERAL_ALBUMS.execute(self, params, token).await
    }
}
