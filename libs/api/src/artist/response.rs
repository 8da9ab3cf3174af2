use entity::prelude::*;
use entity::show::ArtistShow;
use serde::Serialize;
use utoipa::ToSchema;

use crate::filters::format_start_time;

#[derive(Serialize, ToSchema)]
pub struct ArtistResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistEntity> for ArtistResponse {
    fn from(value: ArtistEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            state: value.state,
            phone: value.phone,
            genres: value.genres,
            image_link: value.image_link,
            facebook_link: value.facebook_link,
            website: value.website,
            seeking_venue: value.seeking_venue,
            seeking_description: value.seeking_description,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetArtistsResponse {
    pub artists: Vec<ArtistResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct SearchArtistsResponse {
    pub count: usize,
    pub data: Vec<ArtistResponse>,
}

impl From<Vec<ArtistEntity>> for SearchArtistsResponse {
    fn from(value: Vec<ArtistEntity>) -> Self {
        Self {
            count: value.len(),
            data: value.into_iter().map(ArtistResponse::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ArtistShowResponse {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ArtistShow> for ArtistShowResponse {
    fn from(value: ArtistShow) -> Self {
        Self {
            venue_id: value.venue_id,
            venue_name: value.venue_name,
            venue_image_link: value.venue_image_link,
            start_time: format_start_time(&value.start_time),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetArtistResponse {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShowResponse>,
    pub upcoming_shows: Vec<ArtistShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl GetArtistResponse {
    pub fn new(
        artist: ArtistEntity,
        past_shows: Vec<ArtistShow>,
        upcoming_shows: Vec<ArtistShow>,
    ) -> Self {
        let past_shows: Vec<_> = past_shows
            .into_iter()
            .map(ArtistShowResponse::from)
            .collect();
        let upcoming_shows: Vec<_> = upcoming_shows
            .into_iter()
            .map(ArtistShowResponse::from)
            .collect();

        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateArtistResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct EditArtistResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteArtistResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_artist_detail_counts_shows() {
        // Arrange
        let artist = ArtistEntity {
            id: 10,
            name: "Guided by Voices".to_string(),
            ..Default::default()
        };
        let upcoming = vec![ArtistShow {
            venue_id: 3,
            venue_name: "The Dive".to_string(),
            venue_image_link: None,
            start_time: Utc.with_ymd_and_hms(2024, 7, 1, 20, 0, 0).unwrap(),
        }];

        // Act
        let response = GetArtistResponse::new(artist, vec![], upcoming);

        // Assert
        assert_eq!(response.past_shows_count, 0);
        assert_eq!(response.upcoming_shows_count, 1);
        assert_eq!(response.upcoming_shows[0].venue_name, "The Dive");
    }

    #[test]
    fn test_search_response_counts_single_match() {
        // Arrange
        let artists = vec![ArtistEntity {
            id: 10,
            name: "Guided by Voices".to_string(),
            ..Default::default()
        }];

        // Act
        let response = SearchArtistsResponse::from(artists);

        // Assert
        assert_eq!(response.count, 1);
        assert_eq!(response.data[0].name, "Guided by Voices");
    }
}
