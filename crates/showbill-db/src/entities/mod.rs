pub mod artist;
pub mod show;
pub mod venue;

use sea_orm::{ActiveValue, DbErr};

/// Case folding applied to stored names and search terms alike.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Recomputes the folded copy of `name` whenever `name` is being written.
pub(crate) fn refresh_folded(name: &ActiveValue<String>, folded: &mut ActiveValue<String>) {
    if let ActiveValue::Set(n) = name {
        *folded = ActiveValue::Set(fold_name(n));
    }
}

/// Rejects a blank value for a NOT NULL text column that is about to be written.
pub(crate) fn require_non_empty(value: &ActiveValue<String>, column: &str) -> Result<(), DbErr> {
    match value {
        ActiveValue::Set(v) | ActiveValue::Unchanged(v) if v.trim().is_empty() => {
            Err(DbErr::Custom(format!("{column} must not be empty")))
        }
        _ => Ok(()),
    }
}
