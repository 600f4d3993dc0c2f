use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::entities::{artist, show, venue};
use crate::error::StoreError;
use crate::forms::ShowDraft;

/// A show joined with the names and images of its venue and artist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub show: show::Model,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Inserts a show after confirming both its venue and artist exist, all in
/// one transaction. Nothing is written when either reference is missing.
pub async fn create(db: &DatabaseConnection, draft: ShowDraft) -> Result<show::Model, StoreError> {
    let created = db
        .transaction::<_, show::Model, StoreError>(|txn| {
            Box::pin(async move {
                if venue::Entity::find_by_id(draft.venue_id).one(txn).await?.is_none() {
                    return Err(StoreError::MissingReference {
                        entity: "venue",
                        id: draft.venue_id,
                    });
                }
                if artist::Entity::find_by_id(draft.artist_id).one(txn).await?.is_none() {
                    return Err(StoreError::MissingReference {
                        entity: "artist",
                        id: draft.artist_id,
                    });
                }
                Ok(draft.into_active_model().insert(txn).await?)
            })
        })
        .await?;

    tracing::info!(
        show_id = created.id,
        venue_id = created.venue_id,
        artist_id = created.artist_id,
        "show created"
    );
    Ok(created)
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<show::Model, StoreError> {
    show::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: "show", id })
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<show::Model>, StoreError> {
    Ok(show::Entity::find()
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?)
}

/// All shows with venue and artist details, ordered by id.
pub async fn list_detailed(db: &DatabaseConnection) -> Result<Vec<ShowListing>, StoreError> {
    let shows = list(db).await?;
    Ok(listings(db, shows).await?)
}

pub(crate) async fn for_venue<C: ConnectionTrait>(
    db: &C,
    venue_id: i32,
) -> Result<Vec<ShowListing>, DbErr> {
    let shows = show::Entity::find()
        .filter(show::Column::VenueId.eq(venue_id))
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?;
    listings(db, shows).await
}

pub(crate) async fn for_artist<C: ConnectionTrait>(
    db: &C,
    artist_id: i32,
) -> Result<Vec<ShowListing>, DbErr> {
    let shows = show::Entity::find()
        .filter(show::Column::ArtistId.eq(artist_id))
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
        .all(db)
        .await?;
    listings(db, shows).await
}

async fn listings<C: ConnectionTrait>(
    db: &C,
    shows: Vec<show::Model>,
) -> Result<Vec<ShowListing>, DbErr> {
    if shows.is_empty() {
        return Ok(vec![]);
    }

    let venue_ids: Vec<i32> = shows.iter().map(|s| s.venue_id).collect();
    let artist_ids: Vec<i32> = shows.iter().map(|s| s.artist_id).collect();

    let venues: HashMap<i32, venue::Model> = venue::Entity::find()
        .filter(venue::Column::Id.is_in(venue_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|v| (v.id, v))
        .collect();

    let artists: HashMap<i32, artist::Model> = artist::Entity::find()
        .filter(artist::Column::Id.is_in(artist_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();

    Ok(shows
        .into_iter()
        .filter_map(|show| {
            let venue = venues.get(&show.venue_id)?;
            let artist = artists.get(&show.artist_id)?;
            Some(ShowListing {
                venue_name: venue.name.clone(),
                venue_image_link: venue.image_link.clone(),
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                show,
            })
        })
        .collect())
}
