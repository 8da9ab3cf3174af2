use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::show::{split_past_upcoming, ArtistShow, ShowListing, VenueShow};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<show::Model> for ShowEntity {
    fn from(value: show::Model) -> Self {
        Self {
            id: value.id,
            start_time: value.start_time.and_utc(),
            artist_id: value.artist_id,
            venue_id: value.venue_id,
        }
    }
}

impl From<ShowEntity> for show::ActiveModel {
    fn from(value: ShowEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            start_time: ActiveValue::set(value.start_time.naive_utc()),
            artist_id: ActiveValue::set(value.artist_id),
            venue_id: ActiveValue::set(value.venue_id),
        }
    }
}

impl ShowRepository {
    /// Every show joined with its venue and artist, ordered by id.
    pub async fn find_all(&self) -> anyhow::Result<Vec<ShowListing>> {
        let shows = Show::find()
            .order_by_asc(show::Column::Id)
            .all(&self.db)
            .await?;

        let artist_ids: Vec<_> = shows.iter().map(|x| x.artist_id).collect();
        let venue_ids: Vec<_> = shows.iter().map(|x| x.venue_id).collect();

        let artists: HashMap<_, _> = Artist::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, x))
            .collect();
        let venues: HashMap<_, _> = Venue::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, x))
            .collect();

        let mut results = vec![];
        for show in shows {
            let Some(artist) = artists.get(&show.artist_id) else {
                continue;
            };
            let Some(venue) = venues.get(&show.venue_id) else {
                continue;
            };
            results.push(ShowListing {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: show.start_time.and_utc(),
            });
        }

        Ok(results)
    }

    /// The venue's shows projected onto their artists and split into
    /// (past, upcoming) relative to `now`.
    pub async fn find_by_venue(
        &self,
        venue_id: i32,
        now: DateTime<Utc>,
    ) -> anyhow::Result<(Vec<VenueShow>, Vec<VenueShow>)> {
        let shows = Show::find()
            .filter(show::Column::VenueId.eq(venue_id))
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        let artist_ids: Vec<_> = shows.iter().map(|x| x.artist_id).collect();
        let artists: HashMap<_, _> = Artist::find()
            .filter(artist::Column::Id.is_in(artist_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, x))
            .collect();

        let mut records = vec![];
        for show in shows {
            let Some(artist) = artists.get(&show.artist_id) else {
                continue;
            };
            records.push(VenueShow {
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: show.start_time.and_utc(),
            });
        }

        Ok(split_past_upcoming(records, now))
    }

    /// The artist's shows projected onto their venues and split into
    /// (past, upcoming) relative to `now`.
    pub async fn find_by_artist(
        &self,
        artist_id: i32,
        now: DateTime<Utc>,
    ) -> anyhow::Result<(Vec<ArtistShow>, Vec<ArtistShow>)> {
        let shows = Show::find()
            .filter(show::Column::ArtistId.eq(artist_id))
            .order_by_asc(show::Column::StartTime)
            .all(&self.db)
            .await?;

        let venue_ids: Vec<_> = shows.iter().map(|x| x.venue_id).collect();
        let venues: HashMap<_, _> = Venue::find()
            .filter(venue::Column::Id.is_in(venue_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|x| (x.id, x))
            .collect();

        let mut records = vec![];
        for show in shows {
            let Some(venue) = venues.get(&show.venue_id) else {
                continue;
            };
            records.push(ArtistShow {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                venue_image_link: venue.image_link.clone(),
                start_time: show.start_time.and_utc(),
            });
        }

        Ok(split_past_upcoming(records, now))
    }

    pub async fn create(
        &self,
        show: ShowEntity,
    ) -> anyhow::Result<ShowEntity> {
        let txn = self.db.begin().await?;

        let mut model = show::ActiveModel::from(show);
        model.id = ActiveValue::NotSet;
        let model = model.insert(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;

    fn show_model(
        id: i32,
        artist_id: i32,
        venue_id: i32,
        start_time: DateTime<Utc>,
    ) -> show::Model {
        show::Model {
            id,
            start_time: start_time.naive_utc(),
            artist_id,
            venue_id,
        }
    }

    fn artist_model(id: i32, name: &str) -> artist::Model {
        artist::Model {
            id,
            name: name.to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            phone: None,
            genres: vec!["Jazz".to_string()],
            image_link: Some("https://example.com/artist.png".to_string()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    fn venue_model(id: i32, name: &str) -> venue::Model {
        venue::Model {
            id,
            name: name.to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            address: "123 Main St".to_string(),
            phone: None,
            image_link: Some("https://example.com/venue.png".to_string()),
            facebook_link: None,
            genres: vec!["Jazz".to_string()],
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_find_by_venue_splits_past_and_upcoming() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 7, 1, 20, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                show_model(1, 10, 3, before),
                show_model(2, 10, 3, after),
            ]])
            .append_query_results(vec![vec![artist_model(
                10,
                "Guided by Voices",
            )]])
            .into_connection();
        let repository = ShowRepository::new(db);

        // Act
        let (past, upcoming) =
            repository.find_by_venue(3, now).await.unwrap();

        // Assert
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].artist_id, 10);
        assert_eq!(past[0].artist_name, "Guided by Voices");
        assert_eq!(past[0].start_time, before);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].start_time, after);
    }

    #[tokio::test]
    async fn test_find_by_artist_projects_venues() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 7, 1, 20, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![show_model(1, 10, 3, after)]])
            .append_query_results(vec![vec![venue_model(3, "The Dive")]])
            .into_connection();
        let repository = ShowRepository::new(db);

        // Act
        let (past, upcoming) =
            repository.find_by_artist(10, now).await.unwrap();

        // Assert
        assert!(past.is_empty());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].venue_id, 3);
        assert_eq!(upcoming[0].venue_name, "The Dive");
        assert_eq!(
            upcoming[0].venue_image_link.as_deref(),
            Some("https://example.com/venue.png")
        );
    }

    #[tokio::test]
    async fn test_find_all_joins_both_sides() {
        // Arrange
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                show_model(1, 10, 3, start),
                show_model(2, 11, 3, start),
            ]])
            .append_query_results(vec![vec![
                artist_model(10, "Guided by Voices"),
                artist_model(11, "The Wild Sax Band"),
            ]])
            .append_query_results(vec![vec![venue_model(3, "The Dive")]])
            .into_connection();
        let repository = ShowRepository::new(db);

        // Act
        let listings = repository.find_all().await.unwrap();

        // Assert
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].artist_name, "Guided by Voices");
        assert_eq!(listings[1].artist_name, "The Wild Sax Band");
        assert!(listings.iter().all(|l| l.venue_name == "The Dive"));
    }

    #[tokio::test]
    async fn test_create_returns_stored_record() {
        // Arrange
        let start = Utc.with_ymd_and_hms(2024, 7, 1, 20, 0, 0).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![show_model(9, 10, 3, start)]])
            .into_connection();
        let repository = ShowRepository::new(db);
        let draft = ShowEntity {
            start_time: start,
            artist_id: 10,
            venue_id: 3,
            ..Default::default()
        };

        // Act
        let created = repository.create(draft).await.unwrap();

        // Assert
        assert_eq!(created.id, 9);
        assert_eq!(created.start_time, start);
    }
}
