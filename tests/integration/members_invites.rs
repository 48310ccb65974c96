//! Integration tests for members, scopes, and invitations.

use crate::integration::mock_server::MockServerFixture;
use deepgram_manage::{NewInvite, Project};
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
async fn list_members() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/members",
            200,
            r#"{
                "members": [
                    {
                        "member_id": "m1",
                        "email": "jane@example.com",
                        "first_name": "Jane",
                        "scopes": ["owner"]
                    },
                    { "member_id": "m2", "email": "sam@example.com" }
                ]
            }"#,
        )
        .await;

    let members = project.members().await.unwrap();

    assert_eq!(members.len(), 2);
    assert_eq!(members[0].member_id, "m1");
    assert_eq!(members[0].scopes, vec!["owner".to_string()]);
    assert!(members[1].scopes.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn remove_member_via_record() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    fixture
        .mock_json(
            "GET",
            "/projects/p1/members",
            200,
            r#"{ "members": [{ "member_id": "m2", "email": "sam@example.com" }] }"#,
        )
        .await;
    let delete = fixture
        .mock_json(
            "DELETE",
            "/projects/p1/members/m2",
            200,
            r#"{ "message": "Member removed." }"#,
        )
        .await;

    let members = project.members().await.unwrap();
    members.into_iter().next().unwrap().remove().await.unwrap();

    delete.assert_async().await;
}

#[tokio::test]
async fn member_scopes_roundtrip() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/members/m1/scopes",
            200,
            r#"{ "scopes": ["admin", "member"] }"#,
        )
        .await;

    let scopes = project.member_scopes("m1").await.unwrap();

    assert_eq!(scopes, vec!["admin".to_string(), "member".to_string()]);
    mock.assert_async().await;
}

#[tokio::test]
async fn fetch_scopes_from_member_record() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    fixture
        .mock_json(
            "GET",
            "/projects/p1/members",
            200,
            r#"{ "members": [{ "member_id": "m1", "scopes": ["member"] }] }"#,
        )
        .await;
    let scopes_mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/members/m1/scopes",
            200,
            r#"{ "scopes": ["admin"] }"#,
        )
        .await;

    let members = project.members().await.unwrap();
    let live = members[0].fetch_scopes().await.unwrap();

    // The record keeps its listing-time snapshot; the fetch reflects the API.
    assert_eq!(members[0].scopes, vec!["member".to_string()]);
    assert_eq!(live, vec!["admin".to_string()]);
    scopes_mock.assert_async().await;
}

#[tokio::test]
async fn list_invites() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/invites",
            200,
            r#"{ "invites": [{ "email": "new@example.com", "scope": "member" }] }"#,
        )
        .await;

    let invites = project.invites().await.unwrap();

    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].email, "new@example.com");
    assert_eq!(invites[0].scope.as_deref(), Some("member"));
    mock.assert_async().await;
}

#[tokio::test]
async fn send_invite_posts_email_and_scope() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .server
        .mock("POST", "/projects/p1/invites")
        .match_body(Matcher::Json(serde_json::json!({
            "email": "new@example.com",
            "scope": "member"
        })))
        .with_status(200)
        .with_body(r#"{ "message": "Invitation sent." }"#)
        .create_async()
        .await;

    project
        .send_invite(&NewInvite::new("new@example.com", "member"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_invite_addresses_by_email() {
    let mut fixture = MockServerFixture::new().await;
    let project = project_fixture(&mut fixture).await;
    let mock = fixture
        .mock_json(
            "DELETE",
            "/projects/p1/invites/new@example.com",
            200,
            r#"{ "message": "Invitation removed." }"#,
        )
        .await;

    project.delete_invite("new@example.com").await.unwrap();

    mock.assert_async().await;
}
