use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const GET_A_CATEGORY: Endpoint = Endpoint::get("get_a_category", "browse/categories/category_id");
pub const GET_A_CATEGORYS_PLAYLISTS: Endpoint = Endpoint::get(
    "get_a_categorys_playlists",
    "browse/categories/category_id/playlists",
);
pub const GET_ALL_CATEGORIES: Endpoint = Endpoint::get("get_all_categories", "browse/categories");
pub const GET_ALL_FEATURED_PLAYLISTS: Endpoint =
    Endpoint::get("get_all_featured_playlists", "browse/featured-playlists");
pub const GET_ALL_NEW_RELEASES: Endpoint =
    Endpoint::get("get_all_new_releases", "browse/new-releases");
pub const GET_AVAILABLE_GENRE_SEEDS: Endpoint = Endpoint::get(
    "get_available_genre_seeds",
    "recommendations/available-genre-seeds",
);
// TODO: allow seed_artists, seed_genres and seed_tracks through the query filter
pub const GET_RECOMMENDATIONS: Endpoint =
    Endpoint::get("get_recommendations", "recommendations").unimplemented();

impl MusicClient {
    /// Get a single browse category.
    ///
    /// # Parameters
    ///
    /// * `category_id` - The category ID (required)
    /// * `country` - An ISO 3166-1 alpha-2 country code
    /// * `locale` - Language and country, e.g. `sv_SE`
    pub async fn get_a_category(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_CATEGORY.execute(self, params, token).await
    }

    /// Get the playlists tagged with a browse category.
    ///
    /// # Parameters
    ///
    /// * `category_id` - The category ID (required)
    /// * `country` - An ISO 3166-1 alpha-2 country code
    /// * `limit` - Maximum number of playlists to return
    /// * `offset` - Index of the first playlist to return
    pub async fn get_a_categorys_playlists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_CATEGORYS_PLAYLISTS.execute(self, params, token).await
    }

    /// List the browse categories.
    ///
    /// Accepts `country`, `locale`, `limit` and `offset`.
    pub async fn get_all_categories(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_ALL_CATEGORIES.execute(self, params, token).await
    }

    /// List featured playlists.
    ///
    /// Accepts `country`, `locale`, `timestamp`, `limit` and `offset`.
    pub async fn get_all_featured_playlists(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_ALL_FEATURED_PLAYLISTS.execute(self, params, token).await
    }

    /// List new album releases.
    ///
    /// Accepts `country`, `limit` and `offset`.
    pub async fn get_all_new_releases(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_ALL_NEW_RELEASES.execute(self, params, token).await
    }

    pub async fn get_available_genre_seeds(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AVAILABLE_GENRE_SEEDS.execute(self, params, token).await
    }

    /// Get track recommendations from seed artists, genres and tracks.
    ///
    /// Not implemented: always fails with [`Error::NotImplemented`] and
    /// sends nothing.
    pub async fn get_recommendations(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_RECOMMENDATIONS.execute(self, params, token).await
    }
}
