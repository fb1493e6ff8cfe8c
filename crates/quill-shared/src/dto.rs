//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a post. All fields required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSaveRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Request to update a post's mutable fields. The author cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostUpdateRequest {
    pub title: String,
    pub content: String,
}

/// Full detail of a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
}

/// One row of the post listing (newest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub modified_date: DateTime<Utc>,
}

/// Request to log in with a provider-issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub access_token: String,
}

/// The logged-in user's profile as kept in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}
