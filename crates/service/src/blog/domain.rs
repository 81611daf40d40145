use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Blog record as stored and exchanged over the wire.
/// - `id`: absent before creation, assigned by [`super::BlogService::create`]
/// - `text`: required, must not be blank
/// - `created_date` / `updated_date`: supplied by the client, never refreshed server-side
///
/// Encodes with camelCase names; decoding matches field names case-insensitively.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: Option<Uuid>,
    pub text: String,
    pub author: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Blog {
    /// New, unidentified record with both timestamps set to `at`.
    pub fn new(text: impl Into<String>, author: Option<String>, at: DateTime<Utc>) -> Self {
        Self { id: None, text: text.into(), author, created_date: at, updated_date: at }
    }

    /// Same record with `id` assigned.
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Structural precondition checked at the boundary before the service is called.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.text.trim().is_empty() {
            return Err(ServiceError::validation("text is required"));
        }
        Ok(())
    }

    /// Like [`Blog::validate`], additionally requiring an identifier (replace semantics).
    pub fn validate_for_update(&self) -> Result<Uuid, ServiceError> {
        self.validate()?;
        self.id.ok_or_else(|| ServiceError::validation("id is required"))
    }
}

/// Parse an identifier taken from a request path.
pub fn parse_blog_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| ServiceError::validation(format!("malformed blog id `{raw}`: {e}")))
}

/// Read a client timestamp. Values without an offset (`2024-03-01T12:30:00`,
/// `2024-03-01`) are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = raw.parse::<DateTime<FixedOffset>>() {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    raw.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc())
}

struct WireTimestamp(DateTime<Utc>);

impl<'de> Deserialize<'de> for WireTimestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .map(WireTimestamp)
            .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&raw), &"an ISO 8601 timestamp"))
    }
}

#[derive(Clone, Copy)]
enum Field {
    Id,
    Text,
    Author,
    CreatedDate,
    UpdatedDate,
    Other,
}

impl Field {
    fn from_key(key: &str) -> Self {
        const NAMES: [(&str, Field); 5] = [
            ("id", Field::Id),
            ("text", Field::Text),
            ("author", Field::Author),
            ("createdDate", Field::CreatedDate),
            ("updatedDate", Field::UpdatedDate),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, field)| *field)
            .unwrap_or(Field::Other)
    }
}

impl<'de> Deserialize<'de> for Blog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(BlogVisitor)
    }
}

struct BlogVisitor;

fn set_once<'de, A, T>(map: &mut A, slot: &mut Option<T>, name: &'static str) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if slot.is_some() {
        return Err(de::Error::duplicate_field(name));
    }
    *slot = Some(map.next_value()?);
    Ok(())
}

impl<'de> Visitor<'de> for BlogVisitor {
    type Value = Blog;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a blog object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Blog, A::Error> {
        let mut id: Option<Option<Uuid>> = None;
        let mut text: Option<Option<String>> = None;
        let mut author: Option<Option<String>> = None;
        let mut created_date: Option<WireTimestamp> = None;
        let mut updated_date: Option<WireTimestamp> = None;

        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Field::Id => set_once(&mut map, &mut id, "id")?,
                Field::Text => set_once(&mut map, &mut text, "text")?,
                Field::Author => set_once(&mut map, &mut author, "author")?,
                Field::CreatedDate => set_once(&mut map, &mut created_date, "createdDate")?,
                Field::UpdatedDate => set_once(&mut map, &mut updated_date, "updatedDate")?,
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        // missing text decodes as empty so `validate` reports it, not the decoder
        Ok(Blog {
            id: id.flatten(),
            text: text.flatten().unwrap_or_default(),
            author: author.flatten(),
            created_date: created_date.map(|t| t.0).ok_or_else(|| <A::Error as de::Error>::missing_field("createdDate"))?,
            updated_date: updated_date.map(|t| t.0).ok_or_else(|| <A::Error as de::Error>::missing_field("updatedDate"))?,
        })
    }
}
