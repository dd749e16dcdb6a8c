#![cfg(feature = "buyer")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the buyer API client.

pub mod common;

use cake_client_sdk::buyer::types::request::UpdateLeadRequest;
use cake_client_sdk::error::{InvalidArguments, Kind};
use httpmock::{Method::POST, MockServer};
use reqwest::StatusCode;
use rust_decimal_macros::dec;
use serde_json::json;

#[tokio::test]
async fn return_reasons_takes_no_parameters() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::buyer_client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/buyers/api/1/leads.asmx/GetReturnReasons")
            .json_body(json!({}));
        then.status(StatusCode::OK).json_body(json!({
            "d": [{"return_reason_id": 1, "return_reason": "Disconnected number"}]
        }));
    });

    let response = client.return_reasons().await?;

    assert_eq!(
        response.as_json(),
        Some(&json!([
            {"return_reason_id": 1, "return_reason": "Disconnected number"}
        ]))
    );
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn return_lead_posts_reason() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::buyer_client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/buyers/api/1/leads.asmx/Return")
            .json_body_includes(
                r#"{
                    "lead_id": "8c46cd64-0d71-4a70-8b87-0ee3d2523a37",
                    "return_reason_id": 1,
                    "buyer_contract_id": 0
                }"#,
            );
        then.status(StatusCode::OK).json_body(json!({"d": "Lead Returned"}));
    });

    let response = client
        .return_lead("8c46cd64-0d71-4a70-8b87-0ee3d2523a37", 1, None)
        .await?;

    assert_eq!(response.as_json(), Some(&json!("Lead Returned")));
    mock.assert();

    Ok(())
}

#[tokio::test]
async fn update_lead_rejects_partial_amount_pair() {
    let server = MockServer::start();
    let client = common::buyer_client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(StatusCode::OK).json_body(json!({"d": "Success"}));
    });

    let request = UpdateLeadRequest::builder()
        .lead_id("8c46cd64-0d71-4a70-8b87-0ee3d2523a37")
        .amount(dec!(12.00))
        .build();
    let err = client.update_lead(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);
    assert!(
        err.downcast_ref::<InvalidArguments>()
            .is_some_and(|e| e.reason.contains("add_to_existing"))
    );
    mock.assert_calls(0);
}

#[tokio::test]
async fn update_lead_rejects_partial_status_pair() {
    let server = MockServer::start();
    let client = common::buyer_client(&server);

    let request = UpdateLeadRequest::builder()
        .lead_id("8c46cd64-0d71-4a70-8b87-0ee3d2523a37")
        .status("returned")
        .build();
    let err = client.update_lead(&request).await.unwrap_err();

    assert_eq!(err.kind(), Kind::Validation);
    assert!(err.to_string().contains("sub_status"));
}

#[tokio::test]
async fn update_lead_sends_defaults_for_unset_fields() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = common::buyer_client(&server);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/buyers/api/1/leads.asmx/UpdateLead")
            .json_body_includes(
                r#"{
                    "lead_id": "8c46cd64-0d71-4a70-8b87-0ee3d2523a37",
                    "buyer_contract_id": 0,
                    "status": "approved",
                    "sub_status": "verified",
                    "amount": 0,
                    "add_to_existing": "TRUE",
                    "return_reason_id": 0
                }"#,
            );
        then.status(StatusCode::OK).json_body(json!({"d": "Lead Updated"}));
    });

    let request = UpdateLeadRequest::builder()
        .lead_id("8c46cd64-0d71-4a70-8b87-0ee3d2523a37")
        .status("approved")
        .sub_status("verified")
        .build();
    let response = client.update_lead(&request).await?;

    assert_eq!(response.as_json(), Some(&json!("Lead Updated")));
    mock.assert();

    Ok(())
}
