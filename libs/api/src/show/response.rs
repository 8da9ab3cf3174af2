use entity::show::ShowListing;
use serde::Serialize;
use utoipa::ToSchema;

use crate::filters::format_start_time;

#[derive(Serialize, ToSchema)]
pub struct ShowResponse {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListing> for ShowResponse {
    fn from(value: ShowListing) -> Self {
        Self {
            venue_id: value.venue_id,
            venue_name: value.venue_name,
            artist_id: value.artist_id,
            artist_name: value.artist_name,
            artist_image_link: value.artist_image_link,
            start_time: format_start_time(&value.start_time),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct GetShowsResponse {
    pub shows: Vec<ShowResponse>,
}

#[derive(Serialize, ToSchema)]
pub struct CreateShowResponse {
    pub success: bool,
    pub message: String,
}
