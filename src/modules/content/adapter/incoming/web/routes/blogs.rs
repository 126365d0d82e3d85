use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::ports::outgoing::blog_posts::{BlogPostRecord, NewBlogPost};
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

/// Wire shape of a post. `date` is the server-assigned publication time;
/// clients cannot set or change it.
#[derive(Serialize)]
pub struct BlogPostDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(rename = "date")]
    pub published_at: DateTime<FixedOffset>,
}

impl From<BlogPostRecord> for BlogPostDto {
    fn from(record: BlogPostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            image_url: record.image_url,
            published_at: record.published_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateBlogPostDto {
    pub title: String,
    pub content: String,
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
}

#[get("/api/public/blogs")]
pub async fn get_public_blogs_handler(data: web::Data<AppState>) -> impl Responder {
    match data.blogs.list.execute().await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(BlogPostDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to list blog posts");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/blogs")]
pub async fn create_blog_post_handler(
    _session: AdminSession,
    req: web::Json<CreateBlogPostDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let result = data
        .blogs
        .add
        .execute(NewBlogPost {
            title: dto.title,
            content: dto.content,
            image_url: dto.image_url,
        })
        .await;

    match result {
        Ok(record) => {
            info!(post_id = %record.id, "Blog post created");
            ApiResponse::created(BlogPostDto::from(record))
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to create blog post");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog_post_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.blogs.delete.execute(id).await {
        Ok(()) => {
            info!(post_id = %id, "Blog post deleted");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to delete blog post");
            ApiResponse::internal_error()
        }
    }
}
