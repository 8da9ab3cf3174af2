use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct ArtistRequest {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl From<ArtistRequest> for ArtistEntity {
    fn from(value: ArtistRequest) -> Self {
        Self {
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
            ..Default::default()
        }
    }
}
