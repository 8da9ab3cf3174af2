use entity::prelude::*;
use entity::show::VenueShow;
use entity::venue::Area;
use serde::Serialize;
use utoipa::ToSchema;

use crate::filters::format_start_time;

#[derive(Serialize, ToSchema)]
pub struct VenueResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueEntity> for VenueResponse {
    fn from(value: VenueEntity) -> Self {
        Self {
            id: value.id,
            name: value.name,
            city: value.city,
            state: value.state,
            address: value.address,
            phone: value.phone,
            image_link: value.image_link,
            facebook_link: value.facebook_link,
            genres: value.genres,
            website: value.website,
            seeking_talent: value.seeking_talent,
            seeking_description: value.seeking_description,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct AreaResponse {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct GetVenuesResponse {
    pub areas: Vec<AreaResponse>,
}

impl From<Vec<Area>> for GetVenuesResponse {
    fn from(value: Vec<Area>) -> Self {
        Self {
            areas: value
                .into_iter()
                .map(|area| AreaResponse {
                    city: area.city,
                    state: area.state,
                    venues: area
                        .venues
                        .into_iter()
                        .map(VenueResponse::from)
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct SearchVenuesResponse {
    pub count: usize,
    pub data: Vec<VenueResponse>,
}

impl From<Vec<VenueEntity>> for SearchVenuesResponse {
    fn from(value: Vec<VenueEntity>) -> Self {
        Self {
            count: value.len(),
            data: value.into_iter().map(VenueResponse::from).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct VenueShowResponse {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<VenueShow> for VenueShowResponse {
    fn from(value: VenueShow) -> Self {
        Self {
            artist_id: value.artist_id,
            artist_name: value.artist_name,
            artist_image_link: value.artist_image_link,
            start_time: format_start_time(&value.start_time),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetVenueResponse {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShowResponse>,
    pub upcoming_shows: Vec<VenueShowResponse>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl GetVenueResponse {
    pub fn new(
        venue: VenueEntity,
        past_shows: Vec<VenueShow>,
        upcoming_shows: Vec<VenueShow>,
    ) -> Self {
        let past_shows: Vec<_> = past_shows
            .into_iter()
            .map(VenueShowResponse::from)
            .collect();
        let upcoming_shows: Vec<_> = upcoming_shows
            .into_iter()
            .map(VenueShowResponse::from)
            .collect();

        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: venue.city,
            state: venue.state,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreateVenueResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct EditVenueResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteVenueResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod test {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_search_response_counts_single_match() {
        // Arrange
        let venues = vec![VenueEntity {
            id: 7,
            name: "The Dive".to_string(),
            ..Default::default()
        }];

        // Act
        let response = SearchVenuesResponse::from(venues);

        // Assert
        assert_eq!(response.count, 1);
        assert_eq!(response.data[0].id, 7);
        assert_eq!(response.data[0].name, "The Dive");
    }

    #[test]
    fn test_venue_detail_counts_and_formats_shows() {
        // Arrange
        let venue = VenueEntity {
            id: 3,
            name: "The Dive".to_string(),
            ..Default::default()
        };
        let past = vec![VenueShow {
            artist_id: 10,
            artist_name: "Guided by Voices".to_string(),
            artist_image_link: None,
            start_time: Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap(),
        }];
        let upcoming = vec![VenueShow {
            artist_id: 11,
            artist_name: "The Wild Sax Band".to_string(),
            artist_image_link: None,
            start_time: Utc.with_ymd_and_hms(2024, 7, 1, 20, 0, 0).unwrap(),
        }];

        // Act
        let response = GetVenueResponse::new(venue, past, upcoming);

        // Assert
        assert_eq!(response.past_shows_count, 1);
        assert_eq!(response.upcoming_shows_count, 1);
        assert_eq!(
            response.upcoming_shows[0].start_time,
            "Mon 07, 01, 2024 8:00PM"
        );
    }

    #[test]
    fn test_grouped_response_keeps_area_membership() {
        // Arrange
        let areas = vec![Area {
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            venues: vec![
                VenueEntity {
                    id: 1,
                    city: "Brooklyn".to_string(),
                    state: "NY".to_string(),
                    ..Default::default()
                },
                VenueEntity {
                    id: 3,
                    city: "Brooklyn".to_string(),
                    state: "NY".to_string(),
                    ..Default::default()
                },
            ],
        }];

        // Act
        let response = GetVenuesResponse::from(areas);

        // Assert
        assert_eq!(response.areas.len(), 1);
        assert_eq!(
            response.areas[0]
                .venues
                .iter()
                .map(|v| v.id)
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
    }
}
