use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<artist::Model> for ArtistEntity {
    fn from(value: artist::Model) -> Self {
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

impl From<ArtistEntity> for artist::ActiveModel {
    fn from(value: ArtistEntity) -> Self {
        Self {
            id: ActiveValue::set(value.id),
            name: ActiveValue::set(value.name),
            city: ActiveValue::set(value.city),
            state: ActiveValue::set(value.state),
            phone: ActiveValue::set(value.phone),
            genres: ActiveValue::set(value.genres),
            image_link: ActiveValue::set(value.image_link),
            facebook_link: ActiveValue::set(value.facebook_link),
            website: ActiveValue::set(value.website),
            seeking_venue: ActiveValue::set(value.seeking_venue),
            seeking_description: ActiveValue::set(value.seeking_description),
        }
    }
}

impl ArtistRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<ArtistEntity>> {
        let artists = Artist::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(ArtistEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<ArtistEntity>> {
        let artist = Artist::find_by_id(id).one(&self.db).await?;

        Ok(artist.map(ArtistEntity::from))
    }

    /// Case-sensitive substring match on the artist name.
    pub async fn search_by_name(
        &self,
        term: &str,
    ) -> anyhow::Result<Vec<ArtistEntity>> {
        let artists = Artist::find()
            .filter(artist::Column::Name.contains(term))
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?;

        Ok(artists.into_iter().map(ArtistEntity::from).collect())
    }

    pub async fn create(
        &self,
        artist: ArtistEntity,
    ) -> anyhow::Result<ArtistEntity> {
        let txn = self.db.begin().await?;

        let mut model = artist::ActiveModel::from(artist);
        model.id = ActiveValue::NotSet;
        let model = model.insert(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }

    pub async fn update(
        &self,
        artist: ArtistEntity,
    ) -> anyhow::Result<ArtistEntity> {
        let txn = self.db.begin().await?;

        let model = artist::ActiveModel::from(artist).update(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }

    /// Deletes the artist and, through the FK cascade, its shows.
    /// Returns the deleted record, None when no artist had the id.
    pub async fn delete(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<ArtistEntity>> {
        let txn = self.db.begin().await?;

        let Some(model) = Artist::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        Artist::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(Some(model.into()))
    }
}
