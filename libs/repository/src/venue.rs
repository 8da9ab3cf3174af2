use entity::venue::Area;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<venue::Model> for VenueEntity {
    fn from(value: venue::Model) -> Self {
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

impl From<VenueEntity> for venue::ActiveModel {
    fn from(value: VenueEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            name: ActiveValue::set(value.name),
            city: ActiveValue::set(value.city),
            state: ActiveValue::set(value.state),
            address: ActiveValue::set(value.address),
            phone: ActiveValue::set(value.phone),
            image_link: ActiveValue::set(value.image_link),
            facebook_link: ActiveValue::set(value.facebook_link),
            genres: ActiveValue::set(value.genres),
            website: ActiveValue::set(value.website),
            seeking_talent: ActiveValue::set(value.seeking_talent),
            seeking_description: ActiveValue::set(value.seeking_description),
        }
    }
}

impl VenueRepository {
    /// Venues grouped by distinct (city, state), one group per pair.
    pub async fn find_grouped_by_area(&self) -> anyhow::Result<Vec<Area>> {
        let venues = Venue::find()
            .order_by_asc(venue::Column::City)
            .order_by_asc(venue::Column::State)
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?;

        let mut areas: Vec<Area> = vec![];
        for venue in venues.into_iter().map(VenueEntity::from) {
            let needs_new_area = areas.last().map_or(true, |area| {
                area.city != venue.city || area.state != venue.state
            });
            if needs_new_area {
                areas.push(Area {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![],
                });
            }
            if let Some(area) = areas.last_mut() {
                area.venues.push(venue);
            }
        }

        Ok(areas)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<VenueEntity>> {
        let venue = Venue::find_by_id(id).one(&self.db).await?;

        Ok(venue.map(VenueEntity::from))
    }

    /// Case-sensitive substring match on the venue name.
    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> anyhow::Result<Vec<VenueEntity>> {
        let venues = Venue::find()
            .filter(venue::Column::Name.contains(term))
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?;

        Ok(venues.into_iter().map(VenueEntity::from).collect())
    }

    pub async fn create(
        &self,
        venue: VenueEntity,
    ) -> anyhow::Result<VenueEntity> {
        let txn = self.db.begin().await?;

        let mut model = venue::ActiveModel::from(venue);
        model.id = ActiveValue::NotSet;
        let model = model.insert(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }

    pub async fn update(
        &self,
        venue: VenueEntity,
    ) -> anyhow::Result<VenueEntity> {
        let txn = self.db.begin().await?;

        let model = venue::ActiveModel::from(venue).update(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }

    /// Deletes the venue and, through the FK cascade, its shows.
    /// Returns the deleted record, None when no venue had the id.
    pub async fn delete(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<VenueEntity>> {
        let txn = self.db.begin().await?;

        let Some(model) = Venue::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        Venue::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(model.into()))
    }
}

#[cfg(test)]
mod test {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    use super::*;

    fn model(id: i32, name: &str, city: &str, state: &str) -> venue::Model {
        venue::Model {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "123 Main St".to_string(),
            phone: None,
            image_link: Some("https://example.com/venue.png".to_string()),
            facebook_link: None,
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            website: None,
            seeking_talent: false,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_find_grouped_by_area() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model(1, "The Dive", "Brooklyn", "NY"),
                model(3, "Stage Left", "Brooklyn", "NY"),
                model(2, "The Fillmore", "San Francisco", "CA"),
            ]])
            .into_connection();
        let repository = VenueRepository::new(db);

        // Act
        let areas = repository.find_grouped_by_area().await.unwrap();

        // Assert
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "Brooklyn");
        assert_eq!(areas[0].state, "NY");
        assert_eq!(
            areas[0]
                .venues
                .iter()
                .map(|v| v.id)
                .collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(areas[1].city, "San Francisco");
        assert_eq!(areas[1].venues.len(), 1);
    }

    #[tokio::test]
    async fn test_search_by_name_maps_matches() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(
                7,
                "The Dive",
                "Brooklyn",
                "NY",
            )]])
            .into_connection();
        let repository = VenueRepository::new(db);

        // Act
        let venues = repository.search_by_name("Dive").await.unwrap();

        // Assert
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].id, 7);
        assert_eq!(venues[0].name, "The Dive");
    }

    #[tokio::test]
    async fn test_create_returns_stored_record() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(
                1,
                "The Dive",
                "Brooklyn",
                "NY",
            )]])
            .into_connection();
        let repository = VenueRepository::new(db);
        let draft = VenueEntity {
            name: "The Dive".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            address: "123 Main St".to_string(),
            image_link: Some("https://example.com/venue.png".to_string()),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            ..Default::default()
        };

        // Act
        let created = repository.create(draft).await.unwrap();

        // Assert
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "The Dive");
        assert_eq!(
            created.genres,
            vec!["Jazz".to_string(), "Folk".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_propagates_database_error() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "connection reset".to_string(),
            )])
            .into_connection();
        let repository = VenueRepository::new(db);

        // Act
        let result = repository
            .create(VenueEntity {
                name: "The Dive".to_string(),
                ..Default::default()
            })
            .await;

        // Assert
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(
                4,
                "The Dive",
                "Brooklyn",
                "NY",
            )]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repository = VenueRepository::new(db);

        // Act
        let deleted = repository.delete(4).await.unwrap();

        // Assert
        assert_eq!(deleted.map(|v| v.name), Some("The Dive".to_string()));
    }

    #[tokio::test]
    async fn test_delete_missing_returns_none() {
        // Arrange
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<venue::Model>::new()])
            .into_connection();
        let repository = VenueRepository::new(db);

        // Act
        let deleted = repository.delete(99).await.unwrap();

        // Assert
        assert!(deleted.is_none());
    }
}
