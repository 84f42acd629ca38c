use serde::{Deserialize, Serialize};

use crate::governorate::{Governorate, GovernorateInfo};
use crate::transport::FormPart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: u32,
    pub name: String,
    pub party: String,
    pub image_url: String,
    pub verified: bool,
    /// English governorate name.
    pub governorate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStats {
    pub registered_voters: u64,
    pub polling_stations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernorateData {
    pub governorate: GovernorateInfo,
    pub candidates: Vec<Candidate>,
    pub news: Vec<NewsItem>,
    pub local_stats: LocalStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub leader: String,
    pub founded: u16,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyData {
    pub party: Party,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenCampaignImpact {
    pub trees_saved: u32,
    pub paper_posters_saved: u32,
    pub co2_emissions_reduced_kg: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionShare {
    pub count: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDistribution {
    pub men: DistributionShare,
    pub women: DistributionShare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_registered_voters: u64,
    pub expected_turnout_percentage: u8,
    pub turnout_change_last_week: i32,
    pub approved_candidates_count: u32,
    pub verified_violations_count: u32,
    pub new_violations_change_last_week: i32,
    pub green_campaign_impact: GreenCampaignImpact,
    pub candidate_distribution: CandidateDistribution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernorateParticipation {
    pub governorate_id: String,
    pub governorate_name: String,
    pub estimated_turnout: u8,
}

/// Optional file attached to an integrity report.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Citizen report of an election-integrity violation.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrityReport {
    pub governorate: Governorate,
    pub violation_type: String,
    pub description: String,
    pub evidence: Option<Evidence>,
}

impl IntegrityReport {
    /// Multipart fields: governorate, violationType, description, evidence.
    pub fn form_parts(&self) -> Vec<FormPart> {
        let mut parts = vec![
            FormPart::text("governorate", self.governorate.en_name()),
            FormPart::text("violationType", self.violation_type.clone()),
            FormPart::text("description", self.description.clone()),
        ];
        if let Some(evidence) = &self.evidence {
            parts.push(FormPart::file(
                "evidence",
                evidence.file_name.clone(),
                evidence.content_type.clone(),
                evidence.bytes.clone(),
            ));
        }
        parts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportReceipt {
    pub success: bool,
    pub tracking_id: String,
}
