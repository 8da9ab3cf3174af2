use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i32,
    pub start_time: DateTime<Utc>,
    pub artist_id: i32,
    pub venue_id: i32,
}

/// A show on a venue page, projected onto its artist.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show on an artist page, projected onto its venue.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// One row of the full shows listing.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for Show {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// Splits shows into (past, upcoming) relative to `now`.
/// A show starting exactly at `now` counts as upcoming.
pub fn split_past_upcoming<T: Scheduled>(
    shows: Vec<T>,
    now: DateTime<Utc>,
) -> (Vec<T>, Vec<T>) {
    shows.into_iter().partition(|show| show.start_time() < now)
}
