//! Data Transfer Objects - request types for the API.
//!
//! Every field is optional and takes any JSON value. A missing field is
//! `None`, an explicit `null` is `Some(Value::Null)`; unknown fields are
//! ignored.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

/// A query string value. A key given more than once keeps every value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryParam {
    Single(String),
    Repeated(Vec<String>),
}

impl QueryParam {
    fn push(self, value: String) -> Self {
        match self {
            QueryParam::Single(first) => QueryParam::Repeated(vec![first, value]),
            QueryParam::Repeated(mut values) => {
                values.push(value);
                QueryParam::Repeated(values)
            }
        }
    }

    fn is_given(&self) -> bool {
        match self {
            QueryParam::Single(value) => !value.is_empty(),
            QueryParam::Repeated(_) => true,
        }
    }
}

/// Query string of `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPostsQuery {
    pub sort_by: Option<QueryParam>,
    pub author: Option<QueryParam>,
}

impl ListPostsQuery {
    /// Collect the known keys from decoded query pairs. Other keys are
    /// ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "sortBy" => &mut query.sort_by,
                "author" => &mut query.author,
                _ => continue,
            };
            *slot = Some(match slot.take() {
                Some(existing) => existing.push(value),
                None => QueryParam::Single(value),
            });
        }
        query
    }

    /// Requested sort field. A single empty value counts as not given.
    pub fn sort_by(&self) -> Option<&QueryParam> {
        self.sort_by.as_ref().filter(|p| p.is_given())
    }

    /// Requested author filter. A single empty value counts as not given.
    pub fn author(&self) -> Option<&QueryParam> {
        self.author.as_ref().filter(|p| p.is_given())
    }
}
