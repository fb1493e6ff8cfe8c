//! Posts CRUD handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, PostUpdate, Role};
use quill_shared::dto::{PostListItem, PostResponse, PostSaveRequest, PostUpdateRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/posts - create a post, returns the new id.
pub async fn save(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<PostSaveRequest>,
) -> AppResult<HttpResponse> {
    identity.require_role(Role::User)?;

    let req = body.into_inner();
    let id = state
        .posts
        .create(NewPost {
            title: req.title,
            content: req.content,
            author: req.author,
        })
        .await?;

    tracing::debug!(post_id = id, "post created");
    Ok(HttpResponse::Ok().json(id))
}

/// PUT /api/v1/posts/{id} - update title/content, returns the id.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
    body: web::Json<PostUpdateRequest>,
) -> AppResult<HttpResponse> {
    identity.require_role(Role::User)?;

    let req = body.into_inner();
    let id = state
        .posts
        .update(
            path.into_inner(),
            PostUpdate {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(id))
}

/// DELETE /api/v1/posts/{id} - idempotent, returns the id either way.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    identity.require_role(Role::User)?;

    let id = path.into_inner();
    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(id))
}

/// GET /api/v1/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    let items: Vec<PostListItem> = posts
        .into_iter()
        .map(|p| PostListItem {
            id: p.id,
            title: p.title,
            author: p.author,
            modified_date: p.modified_date,
        })
        .collect();

    Ok(HttpResponse::Ok().json(items))
}

/// GET /api/v1/posts/{id} - single post detail.
pub async fn get(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.posts.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
    }))
}
