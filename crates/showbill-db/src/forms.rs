//! Form-to-record mapping.
//!
//! Each record type has a fixed field schema. A submitted form is checked
//! against it as a whole before anything touches a record: creates produce a
//! complete draft, edits produce a change set holding only the submitted
//! fields. Record → form defaults goes through `From<&Model> for FormData`
//! and never the other way round.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use sea_orm::{NotSet, Set};

use crate::entities::{artist, show, venue};
use crate::error::ValidationError;
use crate::timestamp::parse_start_time;

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9][0-9 ().-]{5,19}$").expect("phone pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Phone,
    Url,
    Integer,
    Timestamp,
}

impl FieldKind {
    fn check(self, label: &str, value: &str) -> Result<(), String> {
        let ok = match self {
            FieldKind::Text => true,
            FieldKind::Phone => PHONE_PATTERN.is_match(value.trim()),
            FieldKind::Url => url::Url::parse(value.trim())
                .map(|u| matches!(u.scheme(), "http" | "https"))
                .unwrap_or(false),
            FieldKind::Integer => value.trim().parse::<i32>().is_ok(),
            FieldKind::Timestamp => parse_start_time(value).is_some(),
        };
        if ok {
            return Ok(());
        }
        Err(match self {
            FieldKind::Text => format!("{label} is invalid"),
            FieldKind::Phone => format!("{label} is not a valid phone number"),
            FieldKind::Url => format!("{label} must be an http(s) URL"),
            FieldKind::Integer => format!("{label} must be a whole number"),
            FieldKind::Timestamp => format!("{label} is not a recognised date and time"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

const fn field(name: &'static str, label: &'static str, required: bool, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        label,
        required,
        kind,
    }
}

pub const VENUE_FIELDS: &[FieldSpec] = &[
    field("name", "Name", true, FieldKind::Text),
    field("city", "City", true, FieldKind::Text),
    field("state", "State", true, FieldKind::Text),
    field("address", "Address", true, FieldKind::Text),
    field("phone", "Phone", true, FieldKind::Phone),
    field("image_link", "Image Link", false, FieldKind::Url),
    field("facebook_link", "Facebook Link", false, FieldKind::Url),
];

pub const ARTIST_FIELDS: &[FieldSpec] = &[
    field("name", "Name", true, FieldKind::Text),
    field("city", "City", true, FieldKind::Text),
    field("state", "State", true, FieldKind::Text),
    field("phone", "Phone", true, FieldKind::Phone),
    field("genres", "Genres", true, FieldKind::Text),
    field("image_link", "Image Link", false, FieldKind::Url),
    field("facebook_link", "Facebook Link", false, FieldKind::Url),
];

pub const SHOW_FIELDS: &[FieldSpec] = &[
    field("artist_id", "Artist ID", true, FieldKind::Integer),
    field("venue_id", "Venue ID", true, FieldKind::Integer),
    field("start_time", "Start Time", true, FieldKind::Timestamp),
];

/// Submitted form fields by name. Repeated names (multi-selects) are joined
/// with a comma in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        self.fields
            .entry(name.into())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    /// Returns these values with every field in `submitted` replacing its
    /// counterpart. Used to redisplay an edit form after a rejected submission.
    pub fn overlaid(&self, submitted: &FormData) -> FormData {
        let mut fields = self.fields.clone();
        for (name, value) in &submitted.fields {
            fields.insert(name.clone(), value.clone());
        }
        FormData { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = FormData::default();
        for (k, v) in iter {
            form.insert(k, v);
        }
        form
    }
}

impl From<&venue::Model> for FormData {
    fn from(v: &venue::Model) -> Self {
        let mut form = FormData::default();
        form.insert("name", v.name.as_str());
        form.insert("city", v.city.as_str());
        form.insert("state", v.state.as_str());
        form.insert("address", v.address.as_str());
        form.insert("phone", v.phone.as_str());
        form.insert("image_link", v.image_link.clone().unwrap_or_default());
        form.insert("facebook_link", v.facebook_link.clone().unwrap_or_default());
        form
    }
}

impl From<&artist::Model> for FormData {
    fn from(a: &artist::Model) -> Self {
        let mut form = FormData::default();
        form.insert("name", a.name.as_str());
        form.insert("city", a.city.as_str());
        form.insert("state", a.state.as_str());
        form.insert("phone", a.phone.as_str());
        form.insert("genres", a.genres.as_str());
        form.insert("image_link", a.image_link.clone().unwrap_or_default());
        form.insert("facebook_link", a.facebook_link.clone().unwrap_or_default());
        form
    }
}

/// Field values that passed their checks. A `None` value is a blank optional.
struct Checked {
    values: BTreeMap<&'static str, Option<String>>,
}

impl Checked {
    /// Checks every field in `schema`. With `partial`, absent fields are
    /// skipped instead of treated as blank.
    fn run(form: &FormData, schema: &[FieldSpec], partial: bool) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();
        let mut values = BTreeMap::new();

        for spec in schema {
            let value = match form.get(spec.name) {
                None if partial => continue,
                Some(v) if !v.trim().is_empty() => Some(v),
                _ => None,
            };

            match value {
                None if spec.required => errors.add(spec.name, format!("{} is required", spec.label)),
                None => {
                    values.insert(spec.name, None);
                }
                Some(v) => match spec.kind.check(spec.label, v) {
                    Ok(()) => {
                        values.insert(spec.name, Some(v.to_string()));
                    }
                    Err(message) => errors.add(spec.name, message),
                },
            }
        }

        errors.into_result(Checked { values })
    }

    fn text(&mut self, name: &str) -> String {
        self.optional(name).unwrap_or_default()
    }

    fn optional(&mut self, name: &str) -> Option<String> {
        self.values.remove(name).flatten()
    }

    fn changed(&mut self, name: &str) -> Option<Option<String>> {
        self.values.remove(name)
    }

    fn integer(&mut self, name: &str) -> i32 {
        self.optional(name)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_default()
    }
}

fn set_if<T>(target: &mut sea_orm::ActiveValue<T>, value: Option<T>)
where
    T: Into<sea_orm::Value>,
{
    if let Some(v) = value {
        *target = Set(v);
    }
}

// ─── Venues ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl VenueDraft {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut c = Checked::run(form, VENUE_FIELDS, false)?;
        Ok(Self {
            name: c.text("name"),
            city: c.text("city"),
            state: c.text("state"),
            address: c.text("address"),
            phone: c.text("phone"),
            image_link: c.optional("image_link"),
            facebook_link: c.optional("facebook_link"),
        })
    }

    pub fn into_active_model(self) -> venue::ActiveModel {
        venue::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            name_folded: NotSet,
            city: Set(self.city),
            state: Set(self.state),
            address: Set(self.address),
            phone: Set(self.phone),
            image_link: Set(self.image_link),
            facebook_link: Set(self.facebook_link),
        }
    }
}

/// Submitted venue edits. `None` leaves a field untouched; for optional
/// fields `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
}

impl VenueChanges {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut c = Checked::run(form, VENUE_FIELDS, true)?;
        Ok(Self {
            name: c.optional("name"),
            city: c.optional("city"),
            state: c.optional("state"),
            address: c.optional("address"),
            phone: c.optional("phone"),
            image_link: c.changed("image_link"),
            facebook_link: c.changed("facebook_link"),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, active: &mut venue::ActiveModel) {
        set_if(&mut active.name, self.name);
        set_if(&mut active.city, self.city);
        set_if(&mut active.state, self.state);
        set_if(&mut active.address, self.address);
        set_if(&mut active.phone, self.phone);
        set_if(&mut active.image_link, self.image_link);
        set_if(&mut active.facebook_link, self.facebook_link);
    }
}

// ─── Artists ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDraft {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl ArtistDraft {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut c = Checked::run(form, ARTIST_FIELDS, false)?;
        Ok(Self {
            name: c.text("name"),
            city: c.text("city"),
            state: c.text("state"),
            phone: c.text("phone"),
            genres: c.text("genres"),
            image_link: c.optional("image_link"),
            facebook_link: c.optional("facebook_link"),
        })
    }

    pub fn into_active_model(self) -> artist::ActiveModel {
        artist::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            name_folded: NotSet,
            city: Set(self.city),
            state: Set(self.state),
            phone: Set(self.phone),
            genres: Set(self.genres),
            image_link: Set(self.image_link),
            facebook_link: Set(self.facebook_link),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
}

impl ArtistChanges {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut c = Checked::run(form, ARTIST_FIELDS, true)?;
        Ok(Self {
            name: c.optional("name"),
            city: c.optional("city"),
            state: c.optional("state"),
            phone: c.optional("phone"),
            genres: c.optional("genres"),
            image_link: c.changed("image_link"),
            facebook_link: c.changed("facebook_link"),
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(self, active: &mut artist::ActiveModel) {
        set_if(&mut active.name, self.name);
        set_if(&mut active.city, self.city);
        set_if(&mut active.state, self.state);
        set_if(&mut active.phone, self.phone);
        set_if(&mut active.genres, self.genres);
        set_if(&mut active.image_link, self.image_link);
        set_if(&mut active.facebook_link, self.facebook_link);
    }
}

// ─── Shows ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowDraft {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: String,
}

impl ShowDraft {
    pub fn from_form(form: &FormData) -> Result<Self, ValidationError> {
        let mut c = Checked::run(form, SHOW_FIELDS, false)?;
        Ok(Self {
            artist_id: c.integer("artist_id"),
            venue_id: c.integer("venue_id"),
            start_time: c.text("start_time"),
        })
    }

    pub fn into_active_model(self) -> show::ActiveModel {
        show::ActiveModel {
            id: NotSet,
            venue_id: Set(self.venue_id),
            artist_id: Set(self.artist_id),
            start_time: Set(self.start_time),
        }
    }
}
