//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{self, NewPost, PostId, PostUpdate, SortField};
use blog_shared::MessageResponse;
use blog_shared::dto::{CreatePostRequest, ListPostsQuery, QueryParam, UpdatePostRequest};

use crate::middleware::body::PostBody;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a post id from a path segment.
///
/// Integer-prefix parsing: leading whitespace is skipped, an optional sign
/// is accepted, then the leading decimal digits are read ("12abc" -> 12,
/// "3.9" -> 3). Returns `None` when there are no digits or the value cannot
/// be a post id (zero, negative, too large).
pub fn parse_post_id(raw: &str) -> Option<PostId> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() || negative {
        return None;
    }

    digits.parse::<PostId>().ok().filter(|id| *id > 0)
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: PostBody<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let post = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /posts?sortBy=..&author=..
///
/// With both parameters the author filter is applied first and the matching
/// posts are sorted. A repeated `author` matches no post; a repeated
/// `sortBy` names no known field.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let query = ListPostsQuery::from_pairs(query.into_inner());
    let sort = query.sort_by().map(|param| match param {
        QueryParam::Single(raw) => SortField::parse(raw),
        QueryParam::Repeated(values) => SortField::Unrecognized(values.join(",")),
    });

    let posts = match (query.author(), sort) {
        (Some(QueryParam::Repeated(_)), _) => Vec::new(),
        (Some(QueryParam::Single(name)), sort) => {
            let mut posts = state.posts.filter_by_author(name).await?;
            if let Some(field) = sort {
                domain::sort_posts(&mut posts, &field);
            }
            posts
        }
        (None, Some(field)) => state.posts.sort_by(&field).await?,
        (None, None) => state.posts.list_all().await?,
    };

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path).ok_or_else(AppError::post_not_found)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: PostBody<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path).ok_or_else(AppError::post_not_found)?;
    let req = body.into_inner();

    let post = state
        .posts
        .update(
            id,
            PostUpdate {
                title: req.title,
                content: req.content,
            },
        )
        .await?
        .ok_or_else(AppError::post_not_found)?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path).ok_or_else(AppError::post_not_found)?;

    if !state.posts.delete(id).await? {
        return Err(AppError::post_not_found());
    }

    Ok(HttpResponse::Ok().json(MessageResponse::post_deleted()))
}
