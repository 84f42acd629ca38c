//! Mock generators for the civic (election information) endpoints.

use std::time::Duration;

use super::models::{
    Candidate, CandidateDistribution, DashboardStats, DistributionShare, GovernorateData,
    GovernorateParticipation, GreenCampaignImpact, LocalStats, NewsItem, Party, PartyData,
    ReportReceipt,
};
use crate::error::{ApiError, Result};
use crate::governorate::Governorate;
use crate::mock_context::MockContext;
use crate::random::{base36_token, between};

pub const DASHBOARD_LATENCY: Duration = Duration::from_millis(500);
pub const PARTICIPATION_LATENCY: Duration = Duration::from_millis(600);
pub const GOVERNORATE_LATENCY: Duration = Duration::from_millis(650);
pub const PARTY_LATENCY: Duration = Duration::from_millis(500);
pub const REPORT_LATENCY: Duration = Duration::from_millis(500);

/// The one party the mock backend knows about.
pub const KNOWN_PARTY_ID: &str = "tahaleef-al-nasr";

pub const TRACKING_PREFIX: &str = "IQ-2025-";
const TRACKING_SUFFIX_LEN: usize = 7;

const MAX_REGISTERED_VOTERS: u64 = 5_000_000;
const MAX_POLLING_STATIONS: u64 = 1_500;

fn candidate(id: u32, name: &str, party: &str, image: u32, verified: bool, governorate: &str) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        party: party.to_string(),
        image_url: format!("https://picsum.photos/200/200?random={}", image),
        verified,
        governorate: governorate.to_string(),
    }
}

pub async fn dashboard_stats(ctx: &MockContext) -> Result<DashboardStats> {
    ctx.latency.wait(DASHBOARD_LATENCY).await;

    Ok(DashboardStats {
        total_registered_voters: 25_123_456,
        expected_turnout_percentage: 65,
        turnout_change_last_week: 2,
        approved_candidates_count: 8500,
        verified_violations_count: 1245,
        new_violations_change_last_week: -5,
        green_campaign_impact: GreenCampaignImpact {
            trees_saved: 12,
            paper_posters_saved: 245,
            co2_emissions_reduced_kg: 50,
        },
        candidate_distribution: CandidateDistribution {
            men: DistributionShare {
                count: 6120,
                percentage: 72,
            },
            women: DistributionShare {
                count: 2380,
                percentage: 28,
            },
        },
    })
}

/// One row per governorate, turnout drawn from 45..=75 on every call.
pub async fn governorate_participation(ctx: &MockContext) -> Result<Vec<GovernorateParticipation>> {
    ctx.latency.wait(PARTICIPATION_LATENCY).await;

    Ok(Governorate::ALL
        .iter()
        .map(|g| GovernorateParticipation {
            governorate_id: g.code().to_string(),
            governorate_name: g.arabic_name().to_string(),
            estimated_turnout: between(ctx.random(), 45, 75) as u8,
        })
        .collect())
}

pub async fn governorate_data(ctx: &MockContext, governorate_name: &str) -> Result<GovernorateData> {
    ctx.latency.wait(GOVERNORATE_LATENCY).await;

    let governorate = Governorate::from_detail_name(governorate_name)
        .ok_or_else(|| ApiError::NotFound("Governorate".to_string()))?;
    let en_name = governorate.en_name();

    let candidates = vec![
        candidate(1, "أحمد علي", "تحالف النصر", 1, true, en_name),
        candidate(2, "فاطمة حسن", "دولة القانون", 2, true, en_name),
        candidate(3, "علي كريم", "التيار الصدري", 3, false, en_name),
        candidate(4, "مريم جاسم", "الحزب الديمقراطي الكردستاني", 4, true, en_name),
    ];

    let news = vec![
        NewsItem {
            id: 1,
            title: format!("انطلاق الحملات في {}", governorate.arabic_name()),
            summary: "بدأ المرشحون حملاتهم الانتخابية مع التركيز على القضايا المحلية والخدمية..."
                .to_string(),
            date: "2025-09-15".to_string(),
        },
        NewsItem {
            id: 2,
            title: format!("IHEC تؤكد جاهزيتها في {}", governorate.arabic_name()),
            summary: "أعلنت المفوضية العليا المستقلة للانتخابات عن استكمال كافة الاستعدادات اللوجستية والفنية..."
                .to_string(),
            date: "2025-09-14".to_string(),
        },
    ];

    Ok(GovernorateData {
        governorate: governorate.info(),
        candidates,
        news,
        local_stats: LocalStats {
            registered_voters: ctx.random().next_below(MAX_REGISTERED_VOTERS),
            polling_stations: ctx.random().next_below(MAX_POLLING_STATIONS),
        },
    })
}

pub async fn party_data(ctx: &MockContext, party_id: &str) -> Result<PartyData> {
    ctx.latency.wait(PARTY_LATENCY).await;

    if party_id != KNOWN_PARTY_ID {
        return Err(ApiError::NotFound("Party".to_string()));
    }

    Ok(PartyData {
        party: Party {
            id: KNOWN_PARTY_ID.to_string(),
            name: "تحالف النصر".to_string(),
            logo_url: "https://via.placeholder.com/150/007a3d/FFFFFF?text=Logo".to_string(),
            leader: "حيدر العبادي".to_string(),
            founded: 2018,
            description: "تحالف سياسي يركز على الأمن، ومحاربة الفساد، وتحسين الخدمات العامة."
                .to_string(),
        },
        candidates: vec![
            candidate(1, "أحمد علي", "تحالف النصر", 11, true, "Baghdad"),
            candidate(10, "سارة محمود", "تحالف النصر", 12, true, "Basra"),
            candidate(11, "يوسف خالد", "تحالف النصر", 13, true, "Anbar"),
        ],
    })
}

/// Always accepted; returns a fresh `IQ-2025-XXXXXXX` tracking id.
pub async fn integrity_submission(ctx: &MockContext) -> Result<ReportReceipt> {
    ctx.latency.wait(REPORT_LATENCY).await;

    Ok(ReportReceipt {
        success: true,
        tracking_id: format!(
            "{}{}",
            TRACKING_PREFIX,
            base36_token(ctx.random(), TRACKING_SUFFIX_LEN)
        ),
    })
}
