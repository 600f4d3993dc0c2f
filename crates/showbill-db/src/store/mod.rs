//! Persistence operations for venues, artists and shows.
//!
//! Every write runs inside one database transaction. Errors inside the
//! closure roll the transaction back before the caller sees them.

pub mod artists;
pub mod shows;
pub mod venues;

use chrono::NaiveDateTime;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, IntoSimpleExpr};

use crate::entities::fold_name;

pub use shows::ShowListing;

/// Outcome of a name search: every match, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<M> {
    pub count: usize,
    pub matches: Vec<M>,
}

impl<M> SearchResults<M> {
    pub(crate) fn new(matches: Vec<M>) -> Self {
        Self {
            count: matches.len(),
            matches,
        }
    }
}

/// Shows of one venue or artist split around a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub past: Vec<ShowListing>,
    pub upcoming: Vec<ShowListing>,
}

impl Schedule {
    pub fn split(listings: Vec<ShowListing>, now: NaiveDateTime) -> Self {
        let (upcoming, past): (Vec<_>, Vec<_>) = listings
            .into_iter()
            .partition(|l| crate::timestamp::is_upcoming(&l.show.start_time, now));
        Self { past, upcoming }
    }
}

/// `%term%` with `term` folded like stored names and its LIKE wildcards escaped.
fn like_pattern(term: &str) -> String {
    let escaped = fold_name(term.trim())
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Case-insensitive substring match against a folded name column.
fn name_contains<C: ColumnTrait>(folded_column: C, term: &str) -> SimpleExpr {
    Expr::expr(folded_column.into_simple_expr())
        .like(LikeExpr::new(like_pattern(term)).escape('\\'))
}
