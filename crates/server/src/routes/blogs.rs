use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::blog::{parse_blog_id, Blog};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::AppState;

/// Resource segment under `/api`, matched without regard to case.
pub const RESOURCE: &str = "blog";

fn ensure_blog_resource(segment: &str) -> Result<(), ApiError> {
    if segment.eq_ignore_ascii_case(RESOURCE) {
        Ok(())
    } else {
        Err(ApiError::NotFound(format!("no such resource `{segment}`")))
    }
}

/// Create a blog; responds with the freshly assigned id.
#[utoipa::path(
    post, path = "/api/blog", tag = "blog",
    request_body = crate::openapi::BlogDoc,
    responses(
        (status = 200, description = "Created, body is the new id", body = String),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn create_blog(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    payload: Result<Json<Blog>, JsonRejection>,
) -> Result<Json<Uuid>, ApiError> {
    ensure_blog_resource(&resource)?;
    let Json(blog) = payload?;
    blog.validate()?;
    Ok(Json(state.blogs.create(blog).await))
}

/// Replace a blog wholesale; the id travels in the body.
#[utoipa::path(
    put, path = "/api/blog", tag = "blog",
    request_body = crate::openapi::BlogDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    payload: Result<Json<Blog>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    ensure_blog_resource(&resource)?;
    let Json(blog) = payload?;
    blog.validate_for_update()?;
    state.blogs.update(blog).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/api/blog/{id}", tag = "blog",
    params(("id" = String, Path, description = "Blog ID (UUID)")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path((resource, raw)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    ensure_blog_resource(&resource)?;
    let id = parse_blog_id(&raw)?;
    state.blogs.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get, path = "/api/blog/{id}", tag = "blog",
    params(("id" = String, Path, description = "Blog ID (UUID)")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::BlogDoc),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path((resource, raw)): Path<(String, String)>,
) -> Result<Json<Blog>, ApiError> {
    ensure_blog_resource(&resource)?;
    let id = parse_blog_id(&raw)?;
    Ok(Json(state.blogs.get(id).await?))
}
