//! Post resource handlers.
//!
//! Each handler runs decode, validate, persist and respond in that order and
//! stops at the first failing stage.

use actix_web::{HttpResponse, http::StatusCode, web};
use uuid::Uuid;

use blog_core::domain::{Post, PostParams};
use blog_core::ports::{BaseRepository, PostRepository};
use blog_core::{DomainError, RepoError, validate_post};
use blog_shared::{PostRequest, PostResponse};

use crate::mapping::{decode_json, send_json};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Malformed ids are reported as unknown ones.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("invalid post id".to_string()))
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// Decode and validate a post body.
fn decode_params(state: &AppState, body: &[u8]) -> AppResult<PostParams> {
    let params = PostParams::from(decode_json::<PostRequest>(body)?);
    validate_post(&params, &state.limits)?;
    Ok(params)
}

/// POST /v1/posts
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let params = decode_params(&state, &body)?;

    let post = state.posts.insert(Post::new(params)).await?;

    tracing::info!(post_id = %post.id, created_at = %post.created_at, "Post created");
    Ok(send_json(StatusCode::CREATED, &PostResponse::from(post)))
}

/// PUT /v1/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let existing = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    let params = decode_params(&state, &body)?;

    let post = state.posts.update(existing.revise(params)).await?;

    tracing::info!(post_id = %post.id, updated_at = %post.updated_at, "Post updated");
    Ok(send_json(StatusCode::OK, &PostResponse::from(post)))
}

/// DELETE /v1/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    match state.posts.delete(id).await {
        Ok(()) => tracing::info!(post_id = %id, "Post deleted"),
        Err(RepoError::NotFound) => tracing::debug!(post_id = %id, "Post already absent"),
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::NoContent().finish())
}

/// GET /v1/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state.posts.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(send_json(StatusCode::OK, &PostResponse::from(post)))
}

/// GET /v1/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .find_all()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(send_json(StatusCode::OK, &posts))
}
