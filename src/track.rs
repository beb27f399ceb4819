use crate::AccessToken;
use crate::ApiResponse;
use crate::Endpoint;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;

pub const GET_AUDIO_ANALYSIS: Endpoint = Endpoint::get("get_audio_analysis", "audio-analysis/id");
pub const GET_AUDIO_FEATURES_FOR_A_TRACK: Endpoint =
    Endpoint::get("get_audio_features_for_a_track", "audio-features/id");
pub const GET_AUDIO_FEATURES_FOR_SEVERAL_TRACKS: Endpoint =
    Endpoint::get("get_audio_features_for_several_tracks", "audio-features");
pub const GET_SEVERAL_TRACKS: Endpoint = Endpoint::get("get_several_tracks", "tracks");
pub const GET_A_TRACK: Endpoint = Endpoint::get("get_a_track", "tracks/id");

impl MusicClient {
    /// Get the low-level audio analysis of a track: sections, bars, beats
    /// and segments.
    ///
    /// # Parameters
    ///
    /// * `id` - The track ID (required)
    pub async fn get_audio_analysis(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AUDIO_ANALYSIS.execute(self, params, token).await
    }

    /// Get audio features (tempo, key, energy, ...) of a track; takes `id`.
    pub async fn get_audio_features_for_a_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AUDIO_FEATURES_FOR_A_TRACK
            .execute(self, params, token)
            .await
    }

    /// Get audio features of several tracks; takes `ids`.
    pub async fn get_audio_features_for_several_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_AUDIO_FEATURES_FOR_SEVERAL_TRACKS
            .execute(self, params, token)
            .await
    }

    /// Get several tracks at once.
    ///
    /// # Parameters
    ///
    /// * `ids` - Comma-separated list of track IDs (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    pub async fn get_several_tracks(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_SEVERAL_TRACKS.execute(self, params, token).await
    }

    /// Get catalog information for a single track.
    ///
    /// # Parameters
    ///
    /// * `id` - The track ID (required)
    /// * `market` - An ISO 3166-1 alpha-2 country code
    pub async fn get_a_track(
        &self,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        GET_A_TRACK.execute(self, params, token).await
    }
}
