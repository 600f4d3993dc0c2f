use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use super::{name_contains, shows, Schedule, SearchResults};
use crate::entities::artist;
use crate::error::StoreError;
use crate::forms::{ArtistChanges, ArtistDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    pub artist: artist::Model,
    pub schedule: Schedule,
}

pub async fn create(db: &DatabaseConnection, draft: ArtistDraft) -> Result<artist::Model, StoreError> {
    let created = db
        .transaction::<_, artist::Model, StoreError>(|txn| {
            Box::pin(async move { Ok(draft.into_active_model().insert(txn).await?) })
        })
        .await?;

    tracing::info!(artist_id = created.id, name = %created.name, "artist created");
    Ok(created)
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<artist::Model, StoreError> {
    artist::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: "artist", id })
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<artist::Model>, StoreError> {
    Ok(artist::Entity::find()
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?)
}

/// Case-insensitive substring search on the artist name.
pub async fn search(
    db: &DatabaseConnection,
    term: &str,
) -> Result<SearchResults<artist::Model>, StoreError> {
    let matches = artist::Entity::find()
        .filter(name_contains(artist::Column::NameFolded, term))
        .order_by_asc(artist::Column::Id)
        .all(db)
        .await?;
    Ok(SearchResults::new(matches))
}

pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: ArtistChanges,
) -> Result<artist::Model, StoreError> {
    let updated = db
        .transaction::<_, artist::Model, StoreError>(|txn| {
            Box::pin(async move {
                let existing = artist::Entity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or(StoreError::NotFound { entity: "artist", id })?;
                if changes.is_empty() {
                    return Ok(existing);
                }
                let mut active: artist::ActiveModel = existing.into();
                changes.apply(&mut active);
                Ok(active.update(txn).await?)
            })
        })
        .await?;

    tracing::info!(artist_id = id, "artist updated");
    Ok(updated)
}

pub async fn detail(
    db: &DatabaseConnection,
    id: i32,
    now: NaiveDateTime,
) -> Result<ArtistDetail, StoreError> {
    let artist = get(db, id).await?;
    let listings = shows::for_artist(db, id).await?;
    Ok(ArtistDetail {
        artist,
        schedule: Schedule::split(listings, now),
    })
}
