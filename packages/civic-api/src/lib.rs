//! Mock-aware API client for the Iraqi civic platform.
//!
//! Page and view code calls the domain APIs here; whether the data comes from
//! the backend or from the bundled mock dataset is decided per call by the
//! [`ApiDispatcher`].
//!
//! # Example
//!
//! ```rust,ignore
//! use civic_api::{ApiConfig, CivicClient, Governorate, UserFilters, UserRole};
//!
//! let client = CivicClient::from_config(ApiConfig::from_env());
//!
//! let candidates = client
//!     .social()
//!     .get_users(&UserFilters {
//!         role: Some(UserRole::Candidate),
//!         governorate: Governorate::Baghdad.into(),
//!     })
//!     .await?;
//!
//! let baghdad = client.civic().get_governorate_data("baghdad").await?;
//! ```

pub mod config;
pub mod dispatcher;
pub mod domains;
pub mod error;
pub mod fixtures;
pub mod governorate;
pub mod mock_context;
pub mod query;
pub mod random;
pub mod testing;
pub mod transport;

pub use config::ApiConfig;
pub use dispatcher::{ApiDispatcher, DispatchOutcome, RequestOptions};
pub use domains::civic::{
    CivicApi, DashboardStats, Evidence, GovernorateData, GovernorateParticipation,
    IntegrityReport, PartyData, ReportReceipt,
};
pub use domains::social::{
    ActionAck, Article, ArticleFilters, Debate, DebateFilters, Event, EventDetails, EventFilters,
    Post, PostFilters, PostKind, PostSuggestion, ReelDetails, SocialApi, User, UserFilters,
    UserRole,
};
pub use error::{ApiError, Result};
pub use governorate::{Governorate, GovernorateFilter, GovernorateInfo};
pub use mock_context::{LatencySimulator, MockContext};
pub use random::{FastRandom, RandomSource};
pub use transport::{BaseHttpTransport, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport};

/// Entry point bundling both resource families over one dispatcher.
#[derive(Clone)]
pub struct CivicClient {
    social: SocialApi,
    civic: CivicApi,
}

impl CivicClient {
    pub fn new(dispatcher: ApiDispatcher, mocks: MockContext) -> Self {
        Self {
            social: SocialApi::new(dispatcher.clone(), mocks.clone()),
            civic: CivicApi::new(dispatcher, mocks),
        }
    }

    /// reqwest transport, simulated mock latency, unseeded randomness.
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(ApiDispatcher::with_reqwest(config), MockContext::default())
    }

    pub fn social(&self) -> &SocialApi {
        &self.social
    }

    pub fn civic(&self) -> &CivicApi {
        &self.civic
    }
}
