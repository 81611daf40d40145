use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire shape of a blog. Field names are matched case-insensitively on input.
#[derive(ToSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogDoc {
    /// Absent on create; required on update.
    pub id: Option<Uuid>,
    /// Must not be blank.
    pub text: String,
    pub author: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::blogs::create_blog,
        crate::routes::blogs::update_blog,
        crate::routes::blogs::delete_blog,
        crate::routes::blogs::get_blog,
    ),
    components(schemas(HealthResponse, BlogDoc)),
    tags(
        (name = "health"),
        (name = "blog")
    )
)]
pub struct ApiDoc;
