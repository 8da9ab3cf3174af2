use entity::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct VenueRequest {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl From<VenueRequest> for VenueEntity {
    fn from(value: VenueRequest) -> Self {
        Self {
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
            ..Default::default()
        }
    }
}
