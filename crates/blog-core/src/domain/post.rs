use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Post identifier. Positive, assigned by the store.
pub type PostId = u64;

/// Post entity - a single blog entry.
///
/// `title`, `content` and `author` hold whatever JSON value the client sent.
/// `None` means the field was never sent and is left out of the JSON
/// representation; an explicit `null` is kept as `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub content: Option<Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub author: Option<Value>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    /// `null` until the first update.
    #[serde(default, serialize_with = "serialize_optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields accepted when creating a post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPost {
    pub title: Option<Value>,
    pub content: Option<Value>,
    pub author: Option<Value>,
}

/// Fields replaced by an update. Fields that were not sent are cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostUpdate {
    pub title: Option<Value>,
    pub content: Option<Value>,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(id: PostId, draft: NewPost) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Overwrite title and content and stamp `updated_at`.
    ///
    /// `author` and `created_at` are never touched.
    pub fn apply(&mut self, update: PostUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.updated_at = Some(Utc::now());
    }

    /// Author as a string, if it was sent as one.
    pub fn author_str(&self) -> Option<&str> {
        self.author.as_ref().and_then(Value::as_str)
    }
}

/// Deserialize a field that is present in the input, keeping `null` as
/// `Some(Value::Null)`. Pair with `#[serde(default)]` so a missing field
/// becomes `None`.
pub fn deserialize_present<'de, D>(d: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(d).map(Some)
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T10:00:00.123Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(ts))
}

fn serialize_optional_timestamp<S: Serializer>(
    ts: &Option<DateTime<Utc>>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match ts {
        Some(ts) => serialize_timestamp(ts, s),
        None => s.serialize_none(),
    }
}
