use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use super::{name_contains, shows, Schedule, SearchResults};
use crate::entities::{show, venue};
use crate::error::StoreError;
use crate::forms::{VenueChanges, VenueDraft};
use crate::timestamp::is_upcoming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDetail {
    pub venue: venue::Model,
    pub schedule: Schedule,
}

pub async fn create(db: &DatabaseConnection, draft: VenueDraft) -> Result<venue::Model, StoreError> {
    let created = db
        .transaction::<_, venue::Model, StoreError>(|txn| {
            Box::pin(async move { Ok(draft.into_active_model().insert(txn).await?) })
        })
        .await?;

    tracing::info!(venue_id = created.id, name = %created.name, "venue created");
    Ok(created)
}

pub async fn get(db: &DatabaseConnection, id: i32) -> Result<venue::Model, StoreError> {
    venue::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::NotFound { entity: "venue", id })
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<venue::Model>, StoreError> {
    Ok(venue::Entity::find()
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?)
}

/// Case-insensitive substring search on the venue name.
pub async fn search(
    db: &DatabaseConnection,
    term: &str,
) -> Result<SearchResults<venue::Model>, StoreError> {
    let matches = venue::Entity::find()
        .filter(name_contains(venue::Column::NameFolded, term))
        .order_by_asc(venue::Column::Id)
        .all(db)
        .await?;
    Ok(SearchResults::new(matches))
}

/// Applies `changes` to the stored venue in one transaction.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    changes: VenueChanges,
) -> Result<venue::Model, StoreError> {
    let updated = db
        .transaction::<_, venue::Model, StoreError>(|txn| {
            Box::pin(async move {
                let existing = venue::Entity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or(StoreError::NotFound { entity: "venue", id })?;
                if changes.is_empty() {
                    return Ok(existing);
                }
                let mut active: venue::ActiveModel = existing.into();
                changes.apply(&mut active);
                Ok(active.update(txn).await?)
            })
        })
        .await?;

    tracing::info!(venue_id = id, "venue updated");
    Ok(updated)
}

/// Deletes a venue together with its shows.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), StoreError> {
    let shows_removed = db
        .transaction::<_, u64, StoreError>(|txn| {
            Box::pin(async move {
                if venue::Entity::find_by_id(id).one(txn).await?.is_none() {
                    return Err(StoreError::NotFound { entity: "venue", id });
                }
                let removed = show::Entity::delete_many()
                    .filter(show::Column::VenueId.eq(id))
                    .exec(txn)
                    .await?;
                venue::Entity::delete_by_id(id).exec(txn).await?;
                Ok(removed.rows_affected)
            })
        })
        .await?;

    tracing::info!(venue_id = id, shows_removed, "venue deleted");
    Ok(())
}

/// All venues grouped by (city, state), each with its upcoming show count.
pub async fn list_by_area(
    db: &DatabaseConnection,
    now: NaiveDateTime,
) -> Result<Vec<Area>, StoreError> {
    let venues = list(db).await?;
    let all_shows = show::Entity::find().all(db).await?;

    let mut upcoming: HashMap<i32, usize> = HashMap::new();
    for s in all_shows.iter().filter(|s| is_upcoming(&s.start_time, now)) {
        *upcoming.entry(s.venue_id).or_default() += 1;
    }

    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for v in venues {
        areas
            .entry((v.city.clone(), v.state.clone()))
            .or_default()
            .push(VenueSummary {
                id: v.id,
                num_upcoming_shows: upcoming.get(&v.id).copied().unwrap_or(0),
                name: v.name,
            });
    }

    Ok(areas
        .into_iter()
        .map(|((city, state), venues)| Area {
            city,
            state,
            venues,
        })
        .collect())
}

/// A venue with its shows split into past and upcoming.
pub async fn detail(
    db: &DatabaseConnection,
    id: i32,
    now: NaiveDateTime,
) -> Result<VenueDetail, StoreError> {
    let venue = get(db, id).await?;
    let listings = shows::for_venue(db, id).await?;
    Ok(VenueDetail {
        venue,
        schedule: Schedule::split(listings, now),
    })
}
