//! Ordering and filtering of post listings.
//!
//! Sorts are stable: posts that compare equal keep their store order.

use std::borrow::Cow;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde_json::Value;

use super::Post;

thread_local! {
    // Root locale, tertiary strength: accents and case only break ties.
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        Collator::try_new(&Default::default(), options).ok()
    };
}

/// Field a listing can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortField {
    /// Ascending by creation time.
    CreatedAt,
    /// Ascending by author, in locale order.
    Author,
    /// Anything else. Gives no ordering: the input order is passed through.
    Unrecognized(String),
}

impl SortField {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "createdAt" => Self::CreatedAt,
            "author" => Self::Author,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

/// Sort posts in place, ascending by `field`.
pub fn sort_posts(posts: &mut [Post], field: &SortField) {
    match field {
        SortField::CreatedAt => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortField::Author => posts.sort_by(|a, b| {
            compare_authors(
                sort_text(a.author.as_ref()).as_deref(),
                sort_text(b.author.as_ref()).as_deref(),
            )
        }),
        SortField::Unrecognized(_) => {}
    }
}

/// Text a field value sorts by. Strings sort as themselves, numbers and
/// booleans by their JSON text. Missing, `null` and structured values have
/// no text.
fn sort_text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) => Some(Cow::Borrowed(s)),
        v @ (Value::Number(_) | Value::Bool(_)) => Some(Cow::Owned(v.to_string())),
        _ => None,
    }
}

/// Author ordering. Posts without an author come first.
pub fn compare_authors(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => collate(a, b),
    }
}

/// Locale-aware text comparison using the root collation.
///
/// Accents and case are secondary: "Émile" sorts with the E's, and when two
/// strings differ only in case, lowercase comes first ("alice" < "Alice").
/// Punctuation sorts before letters.
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare(a, b),
    })
}

// Used only if the collation data failed to load.
fn fold_compare(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();

    folded(a)
        .cmp(&folded(b))
        .then_with(|| {
            let case_rank = |c: char| u8::from(c.is_uppercase());
            a.chars().map(case_rank).cmp(b.chars().map(case_rank))
        })
        .then_with(|| a.cmp(b))
}

/// Posts whose author is exactly `name` (case-sensitive), in input order.
pub fn filter_by_author(posts: &[Post], name: &str) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| post.author_str() == Some(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::json;

    fn post(id: u64, author: Option<&str>, minutes: i64) -> Post {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Post {
            id,
            title: Some(json!(format!("post {id}"))),
            content: None,
            author: author.map(|a| json!(a)),
            created_at: base + Duration::minutes(minutes),
            updated_at: None,
        }
    }

    fn ids(posts: &[Post]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_parse_sort_field() {
        assert_eq!(SortField::parse("createdAt"), SortField::CreatedAt);
        assert_eq!(SortField::parse("author"), SortField::Author);
        assert_eq!(
            SortField::parse("Author"),
            SortField::Unrecognized("Author".to_string())
        );
    }

    #[test]
    fn test_sort_by_created_at() {
        let mut posts = vec![
            post(1, Some("a"), 30),
            post(2, Some("b"), 10),
            post(3, Some("c"), 20),
        ];
        sort_posts(&mut posts, &SortField::CreatedAt);
        assert_eq!(ids(&posts), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_author() {
        let mut posts = vec![
            post(1, Some("Carol"), 0),
            post(2, Some("alice"), 1),
            post(3, Some("Bob"), 2),
        ];
        sort_posts(&mut posts, &SortField::Author);
        assert_eq!(ids(&posts), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_author_is_stable_and_puts_missing_first() {
        let mut posts = vec![
            post(1, Some("Bob"), 0),
            post(2, None, 1),
            post(3, Some("Bob"), 2),
            post(4, Some("Al"), 3),
        ];
        sort_posts(&mut posts, &SortField::Author);
        assert_eq!(ids(&posts), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_unrecognized_field_passes_order_through() {
        let mut posts = vec![post(3, Some("z"), 5), post(1, Some("a"), 0)];
        sort_posts(&mut posts, &SortField::parse("title"));
        assert_eq!(ids(&posts), vec![3, 1]);
    }

    #[test]
    fn test_collate() {
        assert_eq!(collate("alice", "Bob"), Ordering::Less);
        assert_eq!(collate("alice", "Alice"), Ordering::Less);
        assert_eq!(collate("Alice", "alice"), Ordering::Greater);
        assert_eq!(collate("bob", "bob"), Ordering::Equal);
        assert_eq!(collate("Zed", "amy"), Ordering::Greater);
    }

    #[test]
    fn test_collate_accents_and_punctuation() {
        assert_eq!(collate("Émile", "Zoe"), Ordering::Less);
        assert_eq!(collate("Émile", "Emily"), Ordering::Less);
        assert_eq!(collate("élan", "Elan"), Ordering::Greater);
        assert_eq!(collate("~x", "a"), Ordering::Less);
    }

    #[test]
    fn test_sort_by_accented_author() {
        let mut posts = vec![
            post(1, Some("Zoe"), 0),
            post(2, Some("Émile"), 1),
            post(3, Some("adam"), 2),
        ];
        sort_posts(&mut posts, &SortField::Author);
        assert_eq!(ids(&posts), vec![3, 2, 1]);
    }

    #[test]
    fn test_sort_by_author_with_non_string_values() {
        let mut posts = vec![post(1, Some("b"), 0), post(2, None, 1), post(3, None, 2)];
        posts[1].author = Some(json!(7));
        posts[2].author = Some(Value::Null);
        sort_posts(&mut posts, &SortField::Author);
        // null has no text and sorts with the missing ones; "7" precedes letters
        assert_eq!(ids(&posts), vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_by_author_is_exact() {
        let posts = vec![
            post(1, Some("X"), 0),
            post(2, Some("x"), 1),
            post(3, None, 2),
            post(4, Some("X"), 3),
            post(5, Some("X "), 4),
        ];
        assert_eq!(ids(&filter_by_author(&posts, "X")), vec![1, 4]);
        assert!(filter_by_author(&posts, "Y").is_empty());
    }

    #[test]
    fn test_filter_by_author_skips_non_string_authors() {
        let mut posts = vec![post(1, None, 0), post(2, Some("5"), 1)];
        posts[0].author = Some(json!(5));
        assert_eq!(ids(&filter_by_author(&posts, "5")), vec![2]);
    }
}
