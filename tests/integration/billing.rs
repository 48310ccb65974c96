//! Integration tests for balances.

use crate::integration::mock_server::MockServerFixture;

#[tokio::test]
async fn list_balances() {
    let mut fixture = MockServerFixture::new().await;
    fixture
        .mock_json(
            "GET",
            "/projects/p1",
            200,
            r#"{ "project_id": "p1", "name": "prod" }"#,
        )
        .await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/balances",
            200,
            r#"{
                "balances": [
                    { "balance_id": "b1", "amount": 123.45, "units": "usd" },
                    { "balance_id": "b2", "amount": 10.0, "units": "hour", "purchase_order_id": "po-7" }
                ]
            }"#,
        )
        .await;

    let project = fixture.client().project("p1").await.unwrap();
    let balances = project.balances().await.unwrap();

    assert_eq!(balances.len(), 2);
    assert_eq!(balances[0].balance_id, "b1");
    assert_eq!(balances[0].amount, 123.45);
    assert_eq!(balances[1].purchase_order_id.as_deref(), Some("po-7"));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_balance_by_id() {
    let mut fixture = MockServerFixture::new().await;
    fixture
        .mock_json(
            "GET",
            "/projects/p1",
            200,
            r#"{ "project_id": "p1", "name": "prod" }"#,
        )
        .await;
    let mock = fixture
        .mock_json(
            "GET",
            "/projects/p1/balances/b1",
            200,
            r#"{ "balance_id": "b1", "amount": 99.5, "units": "usd" }"#,
        )
        .await;

    let project = fixture.client().project("p1").await.unwrap();
    let balance = project.balance("b1").await.unwrap();

    assert_eq!(balance.amount, 99.5);
    assert_eq!(balance.units, "usd");
    mock.assert_async().await;
}
