//! Real-vs-mock dispatch decisions, end to end through the domain APIs.

mod common;

use civic_api::testing::MockTransport;
use civic_api::transport::{FormValue, RequestBody};
use civic_api::{
    ApiConfig, ApiError, ArticleFilters, DebateFilters, EventFilters, Evidence, Governorate,
    HttpMethod, IntegrityReport, MockContext, PostFilters, RequestOptions, UserFilters, UserRole,
};
use common::{CapturedLogs, TestHarness, TEST_BASE_URL};
use serde_json::json;

fn sample_report() -> IntegrityReport {
    IntegrityReport {
        governorate: Governorate::Basra,
        violation_type: "vote-buying".to_string(),
        description: "Cash handed out near a polling station".to_string(),
        evidence: None,
    }
}

#[tokio::test]
async fn mocks_enabled_never_touches_network() {
    let h = TestHarness::mocked();
    let social = h.client.social();
    let civic = h.client.civic();

    social.get_users(&UserFilters::default()).await.unwrap();
    social.get_posts(&PostFilters::default()).await.unwrap();
    social.get_events(&EventFilters::default()).await.unwrap();
    social.get_debates(&DebateFilters::default()).await.unwrap();
    social.get_articles(&ArticleFilters::default()).await.unwrap();
    social.login(UserRole::Voter).await.unwrap();
    social.follow_candidate("user-1").await.unwrap();
    social.like_post("post-1").await.unwrap();
    civic.get_dashboard_stats().await.unwrap();
    civic.get_governorate_participation().await.unwrap();
    civic.get_governorate_data("baghdad").await.unwrap();
    civic.get_party_data("tahaleef-al-nasr").await.unwrap();
    civic.submit_integrity_report(&sample_report()).await.unwrap();

    assert_eq!(h.network_calls(), 0);
}

#[tokio::test]
async fn missing_base_url_falls_back_to_mock() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();
    let h = TestHarness::without_base_url();

    let users = h
        .client
        .social()
        .get_users(&UserFilters {
            role: Some(UserRole::Candidate),
            ..Default::default()
        })
        .await
        .unwrap();
    let stats = h.client.civic().get_dashboard_stats().await.unwrap();

    assert!(!users.is_empty());
    assert_eq!(stats.total_registered_voters, 25_123_456);
    assert_eq!(h.network_calls(), 0);

    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("API base URL missing"), "{output}");
    assert!(output.contains("civic/stats/dashboard"), "{output}");
}

#[tokio::test]
async fn remote_success_is_decoded() {
    let body = json!([{
        "id": "remote-1",
        "name": "Remote Candidate",
        "role": "Candidate",
        "avatarUrl": "https://cdn.example.iq/a.png",
        "verified": true,
        "governorate": "Kirkuk"
    }]);
    let h = TestHarness::remote(MockTransport::new().with_json(200, body));

    let users = h
        .client
        .social()
        .get_users(&UserFilters {
            role: Some(UserRole::Candidate),
            governorate: Governorate::Kirkuk.into(),
        })
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "remote-1");
    assert_eq!(users[0].governorate, Governorate::Kirkuk);

    let call = h.transport.last_call().unwrap();
    assert_eq!(call.method, HttpMethod::Get);
    assert_eq!(
        call.url,
        "http://backend.test/api/social/users?role=Candidate&governorate=Kirkuk"
    );
    assert_eq!(call.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn non_success_status_falls_back_to_mock() {
    let h = TestHarness::remote(MockTransport::new().with_json(503, json!({})));

    let events = h
        .client
        .social()
        .get_events(&EventFilters {
            governorate: Governorate::Basra.into(),
        })
        .await
        .unwrap();

    assert_eq!(h.network_calls(), 1);
    assert!(!events.is_empty());
    assert!(events.iter().all(|e| e.governorate == Governorate::Basra));
}

#[tokio::test]
async fn network_error_falls_back_to_mock() {
    let h = TestHarness::remote(
        MockTransport::new().with_network_error("connection refused"),
    );

    let ack = h.client.social().like_post("post-3").await.unwrap();

    assert!(ack.success);
    assert_eq!(h.network_calls(), 1);
}

#[tokio::test]
async fn decode_failure_falls_back_to_mock() {
    let h = TestHarness::remote(
        MockTransport::new().with_raw(200, "<html>maintenance</html>"),
    );

    let party = h
        .client
        .civic()
        .get_party_data("tahaleef-al-nasr")
        .await
        .unwrap();

    assert_eq!(party.party.id, "tahaleef-al-nasr");
}

#[tokio::test]
async fn disabled_fallback_propagates_status() {
    let h = TestHarness::remote(MockTransport::new().with_json(500, json!({})));

    let result = h
        .dispatcher
        .dispatch::<Vec<u32>, _, _>(
            "civic/stats/participation",
            || async { Ok::<_, ApiError>(vec![1, 2, 3]) },
            RequestOptions::get().disable_mock_fallback(),
        )
        .await;

    assert!(matches!(result, Err(ApiError::Status { status: 500 })));
}

#[tokio::test]
async fn disabled_fallback_propagates_network_error() {
    let h = TestHarness::remote(MockTransport::new().with_network_error("reset"));

    let result = h
        .dispatcher
        .dispatch::<Vec<u32>, _, _>(
            "social/users",
            || async { Ok::<_, ApiError>(vec![]) },
            RequestOptions::get().disable_mock_fallback(),
        )
        .await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn disabled_fallback_forces_network_even_with_mocks_on() {
    let h = TestHarness::with(
        ApiConfig::mocked().with_base_url(TEST_BASE_URL),
        MockTransport::new().with_json(200, json!([7, 8])),
        MockContext::deterministic(1),
    );

    let values = h
        .dispatcher
        .dispatch::<Vec<u32>, _, _>(
            "/numbers",
            || async { Ok::<_, ApiError>(vec![0]) },
            RequestOptions::get().disable_mock_fallback(),
        )
        .await
        .unwrap();

    assert_eq!(values, vec![7, 8]);
    assert_eq!(h.transport.last_call().unwrap().url, "http://backend.test/api/numbers");
}

#[tokio::test]
async fn disabled_fallback_without_base_url_serves_mock() {
    let logs = CapturedLogs::default();
    let _guard = logs.install();
    let h = TestHarness::without_base_url();

    let values = h
        .dispatcher
        .dispatch::<Vec<u32>, _, _>(
            "social/users",
            || async { Ok::<_, ApiError>(vec![1]) },
            RequestOptions::get().disable_mock_fallback(),
        )
        .await
        .unwrap();

    assert_eq!(values, vec![1]);
    assert_eq!(h.network_calls(), 0);
    assert!(logs.contents().contains("API base URL missing"));
}

#[tokio::test]
async fn admin_users_from_backend_are_kept() {
    let body = json!([{
        "id": "admin-1",
        "name": "Platform Admin",
        "role": "Admin",
        "avatarUrl": "https://cdn.example.iq/admin.png",
        "verified": true,
        "governorate": "Baghdad"
    }]);
    let h = TestHarness::remote(MockTransport::new().with_json(200, body));

    let users = h.client.social().get_users(&UserFilters::default()).await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "admin-1");
    assert_eq!(users[0].role, UserRole::Admin);
}

#[tokio::test]
async fn admin_role_filter_reaches_backend() {
    let h = TestHarness::remote(MockTransport::new().with_json(200, json!([])));

    let users = h
        .client
        .social()
        .get_users(&UserFilters {
            role: Some("admin".parse().unwrap()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert!(users.is_empty());
    assert_eq!(
        h.transport.last_call().unwrap().url,
        "http://backend.test/api/social/users?role=Admin"
    );
}

#[tokio::test]
async fn mock_not_found_survives_fallback() {
    let h = TestHarness::remote(MockTransport::new().with_json(502, json!({})));

    let err = h
        .client
        .civic()
        .get_governorate_data("atlantis")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Governorate not found");
}

#[tokio::test]
async fn caller_headers_reach_transport() {
    let h = TestHarness::remote(MockTransport::new().with_json(200, json!([])));

    let _: Vec<u32> = h
        .dispatcher
        .dispatch(
            "social/articles",
            || async { Ok::<_, ApiError>(vec![]) },
            RequestOptions::get()
                .header("Authorization", "Bearer token")
                .header("Content-Type", "application/vnd.civic+json"),
        )
        .await
        .unwrap();

    let call = h.transport.last_call().unwrap();
    assert_eq!(call.header("authorization"), Some("Bearer token"));
    assert_eq!(call.header("content-type"), Some("application/vnd.civic+json"));
    assert_eq!(call.headers.len(), 2);
}

#[tokio::test]
async fn login_posts_json_body() {
    let h = TestHarness::remote(MockTransport::new().with_json(200, json!(null)));

    let user = h.client.social().login(UserRole::Candidate).await.unwrap();

    assert!(user.is_none());
    let call = h.transport.last_call().unwrap();
    assert_eq!(call.method, HttpMethod::Post);
    assert_eq!(call.url, "http://backend.test/api/auth/login");
    assert_eq!(call.body, RequestBody::Json(json!({ "role": "Candidate" })));
}

#[tokio::test]
async fn integrity_report_is_multipart() {
    let h = TestHarness::remote(
        MockTransport::new()
            .with_json(200, json!({ "success": true, "trackingId": "IQ-2025-SERVER1" })),
    );
    let mut report = sample_report();
    report.evidence = Some(Evidence {
        file_name: "photo.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF],
    });

    let receipt = h.client.civic().submit_integrity_report(&report).await.unwrap();

    assert_eq!(receipt.tracking_id, "IQ-2025-SERVER1");
    let call = h.transport.last_call().unwrap();
    assert_eq!(call.url, format!("{}civic/reports/integrity", TEST_BASE_URL));
    assert_eq!(call.header("content-type"), None);

    let RequestBody::Multipart(parts) = call.body else {
        panic!("expected multipart body");
    };
    let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["governorate", "violationType", "description", "evidence"]);
    assert_eq!(parts[0].value, FormValue::Text("Basra".to_string()));
    assert!(matches!(
        &parts[3].value,
        FormValue::File { file_name, .. } if file_name == "photo.jpg"
    ));
}

#[tokio::test]
async fn strict_dispatcher_surfaces_failures_for_domain_calls() {
    let h = TestHarness::strict(MockTransport::new().with_json(503, json!({})));

    let err = h.client.civic().get_dashboard_stats().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 503 }));
    assert_eq!(h.network_calls(), 1);
}
