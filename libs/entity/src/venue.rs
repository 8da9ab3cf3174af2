use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Venue {
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

/// Venues sharing one distinct (city, state) pair.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Venue>,
}
