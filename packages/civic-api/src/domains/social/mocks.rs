//! Mock generators for the social endpoints.
//!
//! Each one waits `SOCIAL_LATENCY` and then filters the static fixtures.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::time::Duration;

use super::models::{
    ActionAck, Article, ArticleFilters, Debate, DebateFilters, Event, EventDetails, EventFilters,
    Post, PostFilters, PostKind, PostSuggestion, ReelDetails, User, UserFilters, UserRole,
};
use crate::error::{ApiError, Result};
use crate::fixtures::{MOCK_ARTICLES, MOCK_DEBATES, MOCK_EVENTS, MOCK_POSTS, MOCK_USERS};
use crate::mock_context::MockContext;
use crate::random::shuffle;

pub const SOCIAL_LATENCY: Duration = Duration::from_millis(200);

const REEL_PLACEHOLDER_URL: &str =
    "https://images.unsplash.com/photo-1599518559222-1b6a71ac337d?w=400";

pub async fn users(ctx: &MockContext, filters: &UserFilters) -> Result<Vec<User>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(MOCK_USERS
        .iter()
        .filter(|u| filters.role.map_or(true, |role| u.role == role))
        .filter(|u| filters.governorate.matches(u.governorate))
        .cloned()
        .collect())
}

/// Filtered posts in a fresh random order on every call.
pub async fn posts(ctx: &MockContext, filters: &PostFilters) -> Result<Vec<Post>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    let mut posts: Vec<Post> = MOCK_POSTS
        .iter()
        .filter(|p| filters.kind.map_or(true, |kind| p.kind == kind))
        .filter(|p| filters.governorate.matches_any(&p.governorates))
        .filter(|p| {
            filters
                .author_id
                .as_deref()
                .filter(|id| !id.is_empty())
                .map_or(true, |id| p.author.id == id)
        })
        .cloned()
        .collect();

    shuffle(ctx.random(), &mut posts);
    Ok(posts)
}

pub async fn events(ctx: &MockContext, filters: &EventFilters) -> Result<Vec<Event>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(MOCK_EVENTS
        .iter()
        .filter(|e| filters.governorate.matches(e.governorate))
        .cloned()
        .collect())
}

/// Governorate and participant filters narrow independently (AND).
pub async fn debates(ctx: &MockContext, filters: &DebateFilters) -> Result<Vec<Debate>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(MOCK_DEBATES
        .iter()
        .filter(|d| match filters.governorate.governorate() {
            Some(g) => d.participants.iter().any(|p| p.governorate == g),
            None => true,
        })
        .filter(|d| {
            filters.participant_ids.is_empty()
                || d.participants
                    .iter()
                    .any(|p| filters.participant_ids.contains(&p.id))
        })
        .cloned()
        .collect())
}

pub async fn articles(ctx: &MockContext, filters: &ArticleFilters) -> Result<Vec<Article>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(MOCK_ARTICLES
        .iter()
        .filter(|a| filters.governorate.matches_any(&a.governorates))
        .cloned()
        .collect())
}

/// First fixture user holding `role`.
pub async fn login(ctx: &MockContext, role: UserRole) -> Result<Option<User>> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(MOCK_USERS.iter().find(|u| u.role == role).cloned())
}

pub async fn action_success(ctx: &MockContext) -> Result<ActionAck> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(ActionAck { success: true })
}

/// Canned draft for the post-writing assistant.
pub async fn post_suggestion(ctx: &MockContext, topic: &str) -> Result<PostSuggestion> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(PostSuggestion {
        suggestion: Some(format!(
            "حان الوقت للحديث بصراحة عن {}. شاركونا آراءكم ومقترحاتكم، فصوتكم يصنع الفرق! #انتخابات_العراق",
            topic.trim()
        )),
    })
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub async fn create_post(ctx: &MockContext, content: &str, user: &User) -> Result<Post> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(Post {
        id: format!("post-{}", now_millis()),
        author: user.clone(),
        timestamp: "Just now".to_string(),
        content: content.to_string(),
        media_url: None,
        likes: 0,
        comments: 0,
        shares: 0,
        is_sponsored: false,
        kind: PostKind::Post,
        governorates: vec![user.governorate],
    })
}

pub async fn create_reel(ctx: &MockContext, details: &ReelDetails, user: &User) -> Result<Post> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(Post {
        id: format!("reel-{}", now_millis()),
        author: user.clone(),
        timestamp: "Just now".to_string(),
        content: details.caption.clone(),
        media_url: Some(REEL_PLACEHOLDER_URL.to_string()),
        likes: 0,
        comments: 0,
        shares: 0,
        is_sponsored: false,
        kind: PostKind::Reel,
        governorates: vec![user.governorate],
    })
}

pub async fn create_event(ctx: &MockContext, details: &EventDetails, user: &User) -> Result<Event> {
    ctx.latency.wait(SOCIAL_LATENCY).await;

    Ok(Event {
        id: format!("event-{}", now_millis()),
        title: details.title.clone(),
        date: normalize_event_date(&details.date)?,
        location: details.location.clone(),
        organizer: user.clone(),
        governorate: user.governorate,
    })
}

/// Normalize a user-entered date to RFC 3339 UTC with milliseconds.
pub fn normalize_event_date(raw: &str) -> Result<String> {
    let raw = raw.trim();

    let parsed: Option<DateTime<Utc>> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
                .ok()
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        });

    parsed
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| ApiError::InvalidInput(format!("invalid event date '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governorate::{Governorate, GovernorateFilter};

    fn ctx() -> MockContext {
        MockContext::deterministic(1)
    }

    #[tokio::test]
    async fn test_users_role_and_governorate() {
        let filters = UserFilters {
            role: Some(UserRole::Candidate),
            governorate: GovernorateFilter::Only(Governorate::Baghdad),
        };
        let users = users(&ctx(), &filters).await.unwrap();
        assert!(!users.is_empty());
        assert!(users
            .iter()
            .all(|u| u.role == UserRole::Candidate && u.governorate == Governorate::Baghdad));
    }

    #[tokio::test]
    async fn test_posts_by_governorate_membership() {
        let filters = PostFilters {
            governorate: Governorate::Dohuk.into(),
            ..Default::default()
        };
        let posts = posts(&ctx(), &filters).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert!(posts[0].governorates.contains(&Governorate::Dohuk));
    }

    #[tokio::test]
    async fn test_posts_by_kind() {
        let filters = PostFilters {
            kind: Some(PostKind::Reel),
            ..Default::default()
        };
        let posts = posts(&ctx(), &filters).await.unwrap();
        assert!(!posts.is_empty());
        assert!(posts.iter().all(|p| p.kind == PostKind::Reel));
    }

    #[tokio::test]
    async fn test_debates_filters_are_anded() {
        // user-2 debates in Basra; asking for Baghdad too must yield nothing.
        let filters = DebateFilters {
            governorate: Governorate::Baghdad.into(),
            participant_ids: vec!["user-2".to_string()],
        };
        let found = debates(&ctx(), &filters).await.unwrap();
        assert!(found.is_empty());

        let filters = DebateFilters {
            governorate: Governorate::Baghdad.into(),
            participant_ids: vec!["user-4".to_string()],
        };
        let found = debates(&ctx(), &filters).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "debate-3");
    }

    #[tokio::test]
    async fn test_unmatched_filter_is_empty_not_error() {
        let filters = EventFilters {
            governorate: Governorate::Wasit.into(),
        };
        assert!(events(&ctx(), &filters).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_first_user_with_role() {
        let user = login(&ctx(), UserRole::Journalist).await.unwrap().unwrap();
        assert_eq!(user.id, "user-8");
    }

    #[tokio::test]
    async fn test_post_suggestion_mentions_topic() {
        let reply = post_suggestion(&ctx(), " الكهرباء ").await.unwrap();
        assert!(reply.suggestion.unwrap().contains("عن الكهرباء."));
    }

    #[test]
    fn test_normalize_event_date() {
        assert_eq!(
            normalize_event_date("2025-11-11").unwrap(),
            "2025-11-11T00:00:00.000Z"
        );
        assert_eq!(
            normalize_event_date("2025-11-11T09:30").unwrap(),
            "2025-11-11T09:30:00.000Z"
        );
        assert_eq!(
            normalize_event_date("2025-11-11T12:00:00+03:00").unwrap(),
            "2025-11-11T09:00:00.000Z"
        );
        assert!(normalize_event_date("next tuesday").is_err());
    }
}
