use chrono::{DateTime, Utc};
use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct CreateShowRequest {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl From<CreateShowRequest> for ShowEntity {
    fn from(value: CreateShowRequest) -> Self {
        Self {
            artist_id: value.artist_id,
            venue_id: value.venue_id,
            start_time: value.start_time,
            ..Default::default()
        }
    }
}
