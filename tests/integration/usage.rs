//! Integration tests for request history and usage reporting.

use crate::integration::mock_server::MockServerFixture;
use deepgram_manage::{FieldsOptions, Project, RequestOptions, UsageOptions};
use mockito::Matcher;

async fn project_fixture(fixture: &mut MockServerFixture) -> Project {
    fixture
        .mock_json(
            "GET",
            "/projects/p1",
            200,
            r#"{ "project_id": "p1", "name": "prod" }"#,
        )
        .await;
    fixture.client().project("p1").await.unwrap()
}

#[tokio::test]
async fn list_requests_with_filters() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .server
        .mock("GET", "/projects/p1/requests")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "2025-10-01".into()),
            Matcher::UrlEncoded("limit".into(), "25".into()),
            Matcher::UrlEncoded("status".into(), "succeeded".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "page": 0,
                "limit": 25,
                "requests": [{
                    "request_id": "r1",
                    "created": "2025-10-02T08:00:00Z",
                    "path": "/v1/listen",
                    "api_key_id": "k1",
                    "response": { "code": 200, "details": { "duration": 12.5 } }
                }]
            }"#,
        )
        .create_async()
        .await;

    let options = RequestOptions {
        start: Some("2025-10-01".to_string()),
        limit: Some(25),
        status: Some("succeeded".to_string()),
        ..Default::default()
    };
    let listing = project.requests(&options).await.unwrap();

    assert_eq!(listing.limit, 25);
    assert_eq!(listing.requests.len(), 1);
    assert_eq!(listing.requests[0].request_id, "r1");
    assert_eq!(listing.requests[0].path, "/v1/listen");
    assert!(listing.requests[0].response.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_request_detail() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/requests/r1",
            200,
            r#"{
                "request_id": "r1",
                "created": "2025-10-02T08:00:00Z",
                "path": "/v1/listen",
                "callback": { "url": "https://example.com/hook" }
            }"#,
        )
        .await;

    let request = project.request("r1").await.unwrap();

    assert_eq!(request.request_id, "r1");
    assert!(request.api_key_id.is_none());
    assert!(request.callback.is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn usage_summary_with_feature_filters() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .server
        .mock("GET", "/projects/p1/usage")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "2025-10-01".into()),
            Matcher::UrlEncoded("end".into(), "2025-10-31".into()),
            Matcher::UrlEncoded("punctuate".into(), "true".into()),
            Matcher::UrlEncoded("model".into(), "nova-2".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "start": "2025-10-01",
                "end": "2025-10-31",
                "resolution": { "units": "day", "amount": 1 },
                "results": [
                    { "start": "2025-10-01", "end": "2025-10-02", "hours": 2.25, "requests": 18 }
                ]
            }"#,
        )
        .create_async()
        .await;

    let options = UsageOptions {
        start: Some("2025-10-01".to_string()),
        end: Some("2025-10-31".to_string()),
        model: Some("nova-2".to_string()),
        punctuate: Some(true),
        ..Default::default()
    };
    let summary = project.usage(&options).await.unwrap();

    assert_eq!(summary.resolution.units, "day");
    assert_eq!(summary.results[0].hours, Some(2.25));
    assert_eq!(summary.results[0].requests, Some(18));
    mock.assert_async().await;
}

#[tokio::test]
async fn usage_fields_listing() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .server
        .mock("GET", "/projects/p1/usage/fields")
        .match_query(Matcher::UrlEncoded("start".into(), "2025-10-01".into()))
        .with_status(200)
        .with_body(
            r#"{
                "tags": ["prod"],
                "models": [{ "name": "nova-2", "language": "en", "model_id": "mid-1" }],
                "processing_methods": ["sync"],
                "languages": ["en"],
                "features": ["punctuate", "diarize"]
            }"#,
        )
        .create_async()
        .await;

    let options = FieldsOptions {
        start: Some("2025-10-01".to_string()),
        ..Default::default()
    };
    let fields = project.usage_fields(&options).await.unwrap();

    assert_eq!(fields.tags, vec!["prod".to_string()]);
    assert_eq!(fields.models[0].name, "nova-2");
    assert_eq!(fields.features.len(), 2);
    mock.assert_async().await;
}
