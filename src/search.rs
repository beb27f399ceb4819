use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const SEARCH_FOR_AN_ITEM: Endpoint = Endpoint::get("search_for_an_item", "search");

impl MusicClient {
    /// Search the catalog.
    ///
    /// # Parameters
    ///
    /// * `q` - The search query (required)
    /// * `type` - Comma-separated item types: `album`, `artist`, `playlist`, `track` (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    /// * `limit` - Maximum number of results per type
    /// * `offset` - Index of the first result to return
    /// * `include_external` - `audio` to include externally hosted content
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: tunesrs::MusicClient, token: tunesrs::AccessToken) -> Result<(), tunesrs::Error> {
    /// use tunesrs::RequestParams;
    ///
    /// let params = RequestParams::new()
    ///     .with("q", "tania bowra")
    ///     .with("type", vec!["artist", "album"])
    ///     .with("limit", 5);
    /// let results: serde_json::Value = client.search_for_an_item(&params, &token).await?.json()?;
    ///
    /// for artist in results["artists"]["items"].as_array().into_iter().flatten() {
    ///     println!("Artist: {}", artist["name"]);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_for_an_item(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        SEARCH_FOR_AN_ITEM.execute(self, params, token).await
    }
}
