use crate::AccessToken;
use crate::ApiResponse;
use crate::Error;
use crate::MusicClient;
use crate::RequestParams;
use crate::{album, artist, browse, follow, library, player, playlist, search, track, user};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// HTTP verb used by an endpoint.
#[derive(
    Debug, Serialize, Deserialize, EnumString, AsRefStr, Display, EnumIter, PartialEq, Eq, Clone, Copy,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Static description of one remote operation.
///
/// The template is relative to the client's API base URL and may contain
/// path placeholders (see [`crate::PATH_PARAMS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name, identical to the matching `MusicClient` method
    pub name: &'static str,
    pub method: HttpMethod,
    pub template: &'static str,
    /// `false` for operations whose request shape is not wired up yet
    pub implemented: bool,
}

impl Endpoint {
    pub const fn get(name: &'static str, template: &'static str) -> Self {
        Self::new(name, HttpMethod::Get, template)
    }

    pub const fn post(name: &'static str, template: &'static str) -> Self {
        Self::new(name, HttpMethod::Post, template)
    }

    pub const fn put(name: &'static str, template: &'static str) -> Self {
        Self::new(name, HttpMethod::Put, template)
    }

    pub const fn delete(name: &'static str, template: &'static str) -> Self {
        Self::new(name, HttpMethod::Delete, template)
    }

    const fn new(name: &'static str, method: HttpMethod, template: &'static str) -> Self {
        Self {
            name,
            method,
            template,
            implemented: true,
        }
    }

    /// Mark the endpoint as a stub; executing it fails with
    /// [`Error::NotImplemented`].
    pub const fn unimplemented(mut self) -> Self {
        self.implemented = false;
        self
    }

    /// Look up an endpoint by operation name.
    pub fn by_name(name: &str) -> Option<&'static Endpoint> {
        ENDPOINTS.iter().find(|endpoint| endpoint.name == name)
    }

    /// Run this endpoint with the given parameters and bearer token.
    ///
    /// Stubs return [`Error::NotImplemented`] without touching the network.
    pub async fn execute(
        &self,
        client: &MusicClient,
        params: &RequestParams,
        token: &AccessToken,
    ) -> Result<ApiResponse, Error> {
        if !self.implemented {
            return Err(Error::NotImplemented(self.name));
        }

        client
            .request(self.method, self.template, params, token)
            .await
    }
}

/// Every endpoint known to the client.
pub static ENDPOINTS: &[Endpoint] = &[
    // Albums
    album::GET_AN_ALBUM,
    album::GET_AN_ALBUMS_TRACKS,
    album::GET_SEVERAL_ALBUMS,
    // Artists
    artist::GET_AN_ARTIST,
    artist::GET_AN_ARTISTS_ALBUMS,
    artist::GET_AN_ARTISTS_TOP_TRACKS,
    artist::GET_AN_ARTISTS_RELATED_ARTISTS,
    artist::GET_SEVERAL_ARTISTS,
    // Browse
    browse::GET_A_CATEGORY,
    browse::GET_A_CATEGORYS_PLAYLISTS,
    browse::GET_ALL_CATEGORIES,
    browse::GET_ALL_FEATURED_PLAYLISTS,
    browse::GET_ALL_NEW_RELEASES,
    browse::GET_AVAILABLE_GENRE_SEEDS,
    browse::GET_RECOMMENDATIONS,
    // Follow
    follow::CHECK_IF_CURRENT_USER_FOLLOWS_ARTISTS_OR_USERS,
    follow::CHECK_IF_USERS_FOLLOW_A_PLAYLIST,
    follow::FOLLOW_ARTISTS_OR_USERS,
    follow::FOLLOW_A_PLAYLIST,
    follow::GET_USERS_FOLLOWED_ARTISTS,
    follow::UNFOLLOW_ARTISTS_OR_USERS,
    follow::UNFOLLOW_PLAYLIST,
    // Library
    library::CHECK_USERS_SAVED_ALBUMS,
    library::CHECK_USERS_SAVED_TRACKS,
    library::GET_CURRENT_USERS_SAVED_ALBUMS,
    library::GET_USERS_SAVED_TRACKS,
    library::REMOVE_ALBUMS_FOR_CURRENT_USER,
    library::REMOVE_USERS_SAVED_TRACKS,
    library::SAVE_ALBUMS_FOR_CURRENT_USER,
    library::SAVE_TRACKS_FOR_USER,
    // Player
    player::ADD_ITEM_TO_QUEUE,
    player::GET_A_USERS_AVAILABLE_DEVICES,
    player::GET_INFORMATION_ABOUT_THE_USERS_CURRENT_PLAYBACK,
    player::GET_CURRENT_USERS_RECENTLY_PLAYED_TRACKS,
    player::GET_THE_USERS_CURRENTLY_PLAYING_TRACK,
    player::PAUSE_A_USERS_PLAYBACK,
    player::SEEK_TO_POSITION_IN_CURRENTLY_PLAYING_TRACK,
    player::SET_REPEAT_MODE_ON_USERS_PLAYBACK,
    player::SET_VOLUME_FOR_USERS_PLAYBACK,
    player::SKIP_USERS_PLAYBACK_TO_NEXT_TRACK,
    player::SKIP_USERS_PLAYBACK_TO_PREVIOUS_TRACK,
    player::START_RESUME_A_USERS_PLAYBACK,
    player::TOGGLE_SHUFFLE_FOR_USERS_PLAYBACK,
    player::TRANSFER_A_USERS_PLAYBACK,
    // Playlists
    playlist::ADD_ITEMS_TO_PLAYLIST,
    playlist::CHANGE_A_PLAYLISTS_DETAILS,
    playlist::CREATE_A_PLAYLIST,
    playlist::GET_A_LIST_OF_CURRENT_USERS_PLAYLISTS,
    playlist::GET_A_LIST_OF_A_USERS_PLAYLISTS,
    playlist::GET_A_PLAYLIST_COVER_IMAGE,
    playlist::GET_A_PLAYLIST,
    playlist::GET_A_PLAYLISTS_ITEMS,
    playlist::REMOVE_ITEMS_FROM_PLAYLIST,
    playlist::REORDER_OR_REPLACE_PLAYLIST_ITEMS,
    // Search
    search::SEARCH_FOR_AN_ITEM,
    // Tracks
    track::GET_AUDIO_ANALYSIS,
    track::GET_AUDIO_FEATURES_FOR_A_TRACK,
    track::GET_AUDIO_FEATURES_FOR_SEVERAL_TRACKS,
    track::GET_SEVERAL_TRACKS,
    track::GET_A_TRACK,
    // Users and personalization
    user::GET_CURRENT_USERS_PROFILE,
    user::GET_A_USERS_PROFILE,
    user::GET_USERS_TOP_ARTISTS_AND_TRACKS,
];
