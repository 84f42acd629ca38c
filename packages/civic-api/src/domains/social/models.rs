use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;
use crate::governorate::{Governorate, GovernorateFilter};

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Voter,
    Candidate,
    Journalist,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Voter => "Voter",
            UserRole::Candidate => "Candidate",
            UserRole::Journalist => "Journalist",
            UserRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "voter" => Ok(UserRole::Voter),
            "candidate" => Ok(UserRole::Candidate),
            "journalist" => Ok(UserRole::Journalist),
            "admin" => Ok(UserRole::Admin),
            other => Err(ApiError::InvalidInput(format!("unknown role '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub avatar_url: String,
    pub verified: bool,
    pub governorate: Governorate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostKind {
    Post,
    Reel,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Post => "Post",
            PostKind::Reel => "Reel",
        }
    }
}

impl FromStr for PostKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "post" => Ok(PostKind::Post),
            "reel" => Ok(PostKind::Reel),
            other => Err(ApiError::InvalidInput(format!("unknown post type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: User,
    pub timestamp: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub is_sponsored: bool,
    #[serde(rename = "type")]
    pub kind: PostKind,
    pub governorates: Vec<Governorate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub organizer: User,
    pub governorate: Governorate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debate {
    pub id: String,
    pub title: String,
    pub topic: String,
    pub scheduled_time: String,
    pub is_live: bool,
    pub participants: Vec<User>,
    pub viewers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub publication: String,
    pub content_snippet: String,
    pub timestamp: String,
    pub url: String,
    pub governorates: Vec<Governorate>,
}

/// `{ "success": true }` acknowledgement for follow/like.
/// Reply of the post-writing assistant. The backend may omit the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSuggestion {
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionAck {
    pub success: bool,
}

// ============================================================================
// Filters and inputs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub role: Option<UserRole>,
    pub governorate: GovernorateFilter,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilters {
    pub kind: Option<PostKind>,
    pub governorate: GovernorateFilter,
    pub author_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilters {
    pub governorate: GovernorateFilter,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebateFilters {
    pub governorate: GovernorateFilter,
    pub participant_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleFilters {
    pub governorate: GovernorateFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReelDetails {
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    /// Any of RFC 3339, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DD`.
    pub date: String,
    pub location: String,
}
