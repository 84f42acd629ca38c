//! Election-information endpoints: dashboard statistics, participation,
//! governorate and party detail, integrity reports.

pub mod mocks;
pub mod models;

pub use models::*;

use tracing::{debug, info};

use crate::dispatcher::{ApiDispatcher, RequestOptions};
use crate::error::Result;
use crate::mock_context::MockContext;

pub const DASHBOARD_PATH: &str = "civic/stats/dashboard";
pub const PARTICIPATION_PATH: &str = "civic/stats/participation";
pub const GOVERNORATES_PATH: &str = "civic/governorates";
pub const PARTIES_PATH: &str = "civic/parties";
pub const INTEGRITY_REPORTS_PATH: &str = "civic/reports/integrity";

pub fn governorate_path(governorate_name: &str) -> String {
    format!("{}/{}", GOVERNORATES_PATH, urlencoding::encode(governorate_name))
}

pub fn party_path(party_id: &str) -> String {
    format!("{}/{}", PARTIES_PATH, urlencoding::encode(party_id))
}

/// Civic resource family.
#[derive(Clone)]
pub struct CivicApi {
    dispatcher: ApiDispatcher,
    mocks: MockContext,
}

impl CivicApi {
    pub fn new(dispatcher: ApiDispatcher, mocks: MockContext) -> Self {
        Self { dispatcher, mocks }
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats> {
        self.dispatcher
            .dispatch(
                DASHBOARD_PATH,
                || mocks::dashboard_stats(&self.mocks),
                RequestOptions::get(),
            )
            .await
    }

    pub async fn get_governorate_participation(&self) -> Result<Vec<GovernorateParticipation>> {
        self.dispatcher
            .dispatch(
                PARTICIPATION_PATH,
                || mocks::governorate_participation(&self.mocks),
                RequestOptions::get(),
            )
            .await
    }

    /// Detail for one governorate, addressed by English name (e.g. `baghdad`).
    /// Unknown names fail with `ApiError::NotFound`.
    pub async fn get_governorate_data(&self, governorate_name: &str) -> Result<GovernorateData> {
        let path = governorate_path(governorate_name);
        debug!(%path, "Fetching governorate data");
        self.dispatcher
            .dispatch(
                &path,
                || mocks::governorate_data(&self.mocks, governorate_name),
                RequestOptions::get(),
            )
            .await
    }

    pub async fn get_party_data(&self, party_id: &str) -> Result<PartyData> {
        self.dispatcher
            .dispatch(
                &party_path(party_id),
                || mocks::party_data(&self.mocks, party_id),
                RequestOptions::get(),
            )
            .await
    }

    /// Submit as multipart form (governorate, violationType, description, evidence).
    pub async fn submit_integrity_report(&self, report: &IntegrityReport) -> Result<ReportReceipt> {
        let receipt = self
            .dispatcher
            .dispatch(
                INTEGRITY_REPORTS_PATH,
                || mocks::integrity_submission(&self.mocks),
                RequestOptions::post_multipart(report.form_parts()),
            )
            .await?;

        info!(
            tracking_id = %receipt.tracking_id,
            governorate = %report.governorate,
            "Integrity report submitted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_paths() {
        assert_eq!(governorate_path("baghdad"), "civic/governorates/baghdad");
        assert_eq!(governorate_path("dhi qar"), "civic/governorates/dhi%20qar");
        assert_eq!(party_path("tahaleef-al-nasr"), "civic/parties/tahaleef-al-nasr");
    }
}
