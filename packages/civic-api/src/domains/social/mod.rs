//! Social feed endpoints: users, posts, events, debates, articles, login
//! and the write-side interactions (follow, like, create).

pub mod mocks;
pub mod models;

pub use models::*;

use serde_json::json;
use tracing::{debug, warn};

use crate::dispatcher::{ApiDispatcher, RequestOptions};
use crate::error::Result;
use crate::mock_context::MockContext;
use crate::query::QueryParams;

pub const USERS_PATH: &str = "social/users";
pub const POSTS_PATH: &str = "social/posts";
pub const EVENTS_PATH: &str = "social/events";
pub const DEBATES_PATH: &str = "social/debates";
pub const ARTICLES_PATH: &str = "social/articles";
pub const REELS_PATH: &str = "social/reels";
pub const FOLLOW_PATH: &str = "social/follow";
pub const LIKE_PATH: &str = "social/like";
pub const LOGIN_PATH: &str = "auth/login";
pub const SUGGESTION_PATH: &str = "gemini";

/// Returned when the assistant answers without any text.
pub const NO_SUGGESTION_MESSAGE: &str = "No suggestion received from the server.";
/// Returned when the assistant could not be reached at all.
pub const SUGGESTION_FAILED_MESSAGE: &str =
    "Failed to generate content. Please check the connection and try again.";

impl UserFilters {
    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .push("role", self.role.map(|r| r.as_str()))
            .push("governorate", self.governorate.query_value())
    }
}

impl PostFilters {
    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .push("type", self.kind.map(|k| k.as_str()))
            .push("governorate", self.governorate.query_value())
            .push("authorId", self.author_id.as_deref())
    }
}

impl EventFilters {
    pub fn query(&self) -> QueryParams {
        QueryParams::new().push("governorate", self.governorate.query_value())
    }
}

impl DebateFilters {
    pub fn query(&self) -> QueryParams {
        QueryParams::new()
            .push("governorate", self.governorate.query_value())
            .push_list("participantIds", &self.participant_ids)
    }
}

impl ArticleFilters {
    pub fn query(&self) -> QueryParams {
        QueryParams::new().push("governorate", self.governorate.query_value())
    }
}

/// Social resource family.
#[derive(Clone)]
pub struct SocialApi {
    dispatcher: ApiDispatcher,
    mocks: MockContext,
}

impl SocialApi {
    pub fn new(dispatcher: ApiDispatcher, mocks: MockContext) -> Self {
        Self { dispatcher, mocks }
    }

    pub async fn get_users(&self, filters: &UserFilters) -> Result<Vec<User>> {
        let path = filters.query().append_to(USERS_PATH);
        debug!(%path, "Fetching users");
        self.dispatcher
            .dispatch(&path, || mocks::users(&self.mocks, filters), RequestOptions::get())
            .await
    }

    pub async fn get_posts(&self, filters: &PostFilters) -> Result<Vec<Post>> {
        let path = filters.query().append_to(POSTS_PATH);
        debug!(%path, "Fetching posts");
        self.dispatcher
            .dispatch(&path, || mocks::posts(&self.mocks, filters), RequestOptions::get())
            .await
    }

    pub async fn get_events(&self, filters: &EventFilters) -> Result<Vec<Event>> {
        let path = filters.query().append_to(EVENTS_PATH);
        self.dispatcher
            .dispatch(&path, || mocks::events(&self.mocks, filters), RequestOptions::get())
            .await
    }

    pub async fn get_debates(&self, filters: &DebateFilters) -> Result<Vec<Debate>> {
        let path = filters.query().append_to(DEBATES_PATH);
        self.dispatcher
            .dispatch(&path, || mocks::debates(&self.mocks, filters), RequestOptions::get())
            .await
    }

    pub async fn get_articles(&self, filters: &ArticleFilters) -> Result<Vec<Article>> {
        let path = filters.query().append_to(ARTICLES_PATH);
        self.dispatcher
            .dispatch(&path, || mocks::articles(&self.mocks, filters), RequestOptions::get())
            .await
    }

    /// Mock login: the first user with `role`, or `None`.
    pub async fn login(&self, role: UserRole) -> Result<Option<User>> {
        self.dispatcher
            .dispatch(
                LOGIN_PATH,
                || mocks::login(&self.mocks, role),
                RequestOptions::post_json(json!({ "role": role })),
            )
            .await
    }

    pub async fn follow_candidate(&self, candidate_id: &str) -> Result<ActionAck> {
        self.dispatcher
            .dispatch(
                FOLLOW_PATH,
                || mocks::action_success(&self.mocks),
                RequestOptions::post_json(json!({ "candidateId": candidate_id })),
            )
            .await
    }

    pub async fn like_post(&self, post_id: &str) -> Result<ActionAck> {
        self.dispatcher
            .dispatch(
                LIKE_PATH,
                || mocks::action_success(&self.mocks),
                RequestOptions::post_json(json!({ "postId": post_id })),
            )
            .await
    }

    pub async fn create_post(&self, content: &str, user: &User) -> Result<Post> {
        self.dispatcher
            .dispatch(
                POSTS_PATH,
                || mocks::create_post(&self.mocks, content, user),
                RequestOptions::post_json(json!({ "content": content })),
            )
            .await
    }

    pub async fn create_reel(&self, details: &ReelDetails, user: &User) -> Result<Post> {
        self.dispatcher
            .dispatch(
                REELS_PATH,
                || mocks::create_reel(&self.mocks, details, user),
                RequestOptions::post_json(json!(details)),
            )
            .await
    }

    pub async fn create_event(&self, details: &EventDetails, user: &User) -> Result<Event> {
        self.dispatcher
            .dispatch(
                EVENTS_PATH,
                || mocks::create_event(&self.mocks, details, user),
                RequestOptions::post_json(json!(details)),
            )
            .await
    }

    /// Draft a post about `topic` with the writing assistant.
    ///
    /// Never fails: a reply without text yields `NO_SUGGESTION_MESSAGE`, and
    /// an error that survives the dispatcher yields `SUGGESTION_FAILED_MESSAGE`.
    pub async fn generate_post_suggestion(&self, topic: &str) -> String {
        let reply = self
            .dispatcher
            .dispatch(
                SUGGESTION_PATH,
                || mocks::post_suggestion(&self.mocks, topic),
                RequestOptions::post_json(json!({ "topic": topic })),
            )
            .await;

        match reply {
            Ok(PostSuggestion {
                suggestion: Some(text),
            }) if !text.is_empty() => text,
            Ok(_) => NO_SUGGESTION_MESSAGE.to_string(),
            Err(error) => {
                warn!(error = %error, "Post suggestion failed");
                SUGGESTION_FAILED_MESSAGE.to_string()
            }
        }
    }
}
