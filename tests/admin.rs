#![cfg(feature = "admin")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the admin API client.
//!
//! These tests use `httpmock` to mock HTTP responses, ensuring deterministic
//! and fast test execution without requiring network access.
//!
//! # Test Coverage
//!
//! - `transport`: envelope unwrapping, form fallback, missing-key handling
//! - `validators`: any-of / all-or-none / conditionally-required groups,
//!   checked to fail before any network call
//! - `read_modify_write`: edits that export current state first
//! - `pagination`: the affiliate id helper's sequential paging
//! - `reports`: decoding report rows into the response models

pub mod common;

mod transport {
    use cake_client_sdk::error::{Kind, MissingApiKey};
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn json_envelope_is_unwrapped() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/Currencies")
                .header("content-type", "application/json")
                .json_body_includes(r#"{"api_key": "dNJFmId9rI"}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": [
                    {"currency_id": 1, "currency_symbol": "$"},
                    {"currency_id": 2, "currency_symbol": "€"}
                ]
            }));
        });

        let response = client.currencies().await?;

        assert_eq!(
            response.as_json(),
            Some(&json!([
                {"currency_id": 1, "currency_symbol": "$"},
                {"currency_id": 2, "currency_symbol": "€"}
            ]))
        );
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn non_json_response_falls_back_to_form_post() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let json_attempt = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/Countries")
                .header("content-type", "application/json");
            then.status(StatusCode::OK)
                .body("<xml><country>US</country></xml>");
        });
        let form_attempt = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/Countries")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_includes("api_key=dNJFmId9rI");
            then.status(StatusCode::OK)
                .body("<xml><country>US</country></xml>");
        });

        let response = client.countries().await?;

        assert_eq!(response.as_raw(), Some("<xml><country>US</country></xml>"));
        json_attempt.assert();
        form_attempt.assert();

        Ok(())
    }

    #[tokio::test]
    async fn envelope_less_json_falls_back_to_form_post() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let json_attempt = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/Roles")
                .header("content-type", "application/json");
            // Valid JSON, but no `d` envelope.
            then.status(StatusCode::OK).json_body(json!({"roles": []}));
        });
        let form_attempt = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/Roles")
                .header("content-type", "application/x-www-form-urlencoded");
            then.status(StatusCode::OK).body("raw role listing");
        });

        let response = client.roles().await?;

        assert_eq!(response.as_raw(), Some("raw role listing"));
        json_attempt.assert();
        form_attempt.assert();

        Ok(())
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network_call() {
        let server = MockServer::start();
        let client = common::admin_client_without_key(&server);

        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(StatusCode::OK).json_body(json!({"d": []}));
        });

        let err = client.currencies().await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.downcast_ref::<MissingApiKey>().is_some());
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn set_api_key_stores_returned_key() -> anyhow::Result<()> {
        let server = MockServer::start();
        let mut client = common::admin_client_without_key(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/get.asmx/GetAPIKey")
                .json_body_includes(r#"{"username": "ops", "password": "hunter2"}"#);
            then.status(StatusCode::OK).json_body(json!({"d": "NewKey123"}));
        });

        client.set_api_key("ops", "hunter2").await?;

        assert!(client.api_key().is_some());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn set_api_key_clears_key_on_empty_response() -> anyhow::Result<()> {
        let server = MockServer::start();
        let mut client = common::admin_client(&server);

        server.mock(|when, then| {
            when.method(POST).path("/api/1/get.asmx/GetAPIKey");
            then.status(StatusCode::OK).json_body(json!({"d": ""}));
        });

        client.set_api_key("ops", "wrong").await?;

        assert!(client.api_key().is_none());

        Ok(())
    }
}

mod validators {
    use cake_client_sdk::admin::types::request::{
        AddBuyerRequest, AddCampaignRequest, EditCampaignRequest, ExportCampaignsRequest,
        UpdateConversionRequest,
    };
    use cake_client_sdk::error::{InvalidArguments, Kind, MissingArgument};
    use httpmock::MockServer;
    use reqwest::StatusCode;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn export_campaigns_requires_one_id_filter() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let mock = server.mock(|when, then| {
            when.method(httpmock::Method::POST);
            then.status(StatusCode::OK).json_body(json!({"d": {}}));
        });

        let request = ExportCampaignsRequest::builder().build();
        let err = client.export_campaigns(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(
            err.downcast_ref::<InvalidArguments>()
                .is_some_and(|e| e.reason.contains("source_affiliate_id"))
        );
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn add_buyer_rejects_partial_credit_pair() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = AddBuyerRequest::builder()
            .buyer_name("Acme Leads")
            .account_manager_id(3)
            .credit_type("limited")
            .build();
        let err = client.add_buyer(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(
            err.downcast_ref::<InvalidArguments>()
                .is_some_and(|e| e.reason.contains("credit_limit"))
        );
    }

    #[tokio::test]
    async fn add_campaign_rejects_out_of_range_affiliate_id() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = AddCampaignRequest::builder()
            .affiliate_id(1_000_000_000)
            .media_type_id(1)
            .payout(dec!(1.50))
            .offer_id(5)
            .build();
        let err = client.add_campaign(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("affiliate_id"));
    }

    #[tokio::test]
    async fn edit_campaign_rejects_out_of_range_campaign_id() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = EditCampaignRequest::builder().campaign_id(0).build();
        let err = client.edit_campaign(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("campaign_id"));
    }

    #[tokio::test]
    async fn update_conversion_requires_an_identifier() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = UpdateConversionRequest::builder().offer_id(9).build();
        let err = client.update_conversion(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("transaction_id"));
    }

    #[tokio::test]
    async fn update_conversion_requires_custom_date_for_custom_option() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = UpdateConversionRequest::builder()
            .offer_id(9)
            .conversion_id(123)
            .effective_date_option("custom")
            .build();
        let err = client.update_conversion(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(
            err.downcast_ref::<MissingArgument>()
                .is_some_and(|e| e.names == ["custom_date"])
        );
    }

    #[tokio::test]
    async fn update_conversion_rejects_partial_payout_pair() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let request = UpdateConversionRequest::builder()
            .offer_id(9)
            .conversion_id(123)
            .payout(dec!(4.00))
            .build();
        let err = client.update_conversion(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("add_to_existing_payout"));
    }
}

mod read_modify_write {
    use cake_client_sdk::admin::types::request::{EditAdvertiserRequest, EditCampaignRequest};
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn edit_advertiser_appends_to_existing_notes() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let export = server.mock(|when, then| {
            when.method(POST)
                .path("/api/6/export.asmx/Advertisers")
                .json_body_includes(r#"{"advertiser_id": 7}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {
                    "row_count": 1,
                    "advertisers": [{"advertiser_id": 7, "notes": "first contact 2016"}]
                }
            }));
        });
        let edit = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/addedit.asmx/Advertiser")
                .json_body_includes(
                    r#"{"advertiser_id": 7, "notes": "first contact 2016\nrenewed 2017"}"#,
                );
            then.status(StatusCode::OK)
                .json_body(json!({"d": "Advertiser Updated"}));
        });

        let request = EditAdvertiserRequest::builder()
            .advertiser_id(7)
            .notes("renewed 2017")
            .build();
        let response = client.edit_advertiser(&request).await?;

        assert_eq!(response.as_json(), Some(&json!("Advertiser Updated")));
        export.assert();
        edit.assert();

        Ok(())
    }

    #[tokio::test]
    async fn edit_campaign_keeps_unset_payout_and_hash() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let export = server.mock(|when, then| {
            when.method(POST)
                .path("/api/8/export.asmx/Campaigns")
                .json_body_includes(r#"{"campaign_id": 42}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {
                    "row_count": 1,
                    "campaigns": [{
                        "campaign_id": 42,
                        "original": false,
                        "pixel_info": {
                            "hash_type": {"hash_type_id": 2, "hash_type_name": "MD5 Hash"}
                        }
                    }]
                }
            }));
        });
        let edit = server.mock(|when, then| {
            when.method(POST)
                .path("/api/3/addedit.asmx/Campaign")
                .json_body_includes(
                    r#"{
                        "campaign_id": 42,
                        "payout": "9999.1234",
                        "payout_update_option": "do_not_change",
                        "expiration_date": "2067-10-20 13:31:59.7",
                        "expiration_date_modification_type": "do_not_change",
                        "unique_key_hash_type": "md5_hash"
                    }"#,
                );
            then.status(StatusCode::OK)
                .json_body(json!({"d": "Campaign Updated"}));
        });

        let request = EditCampaignRequest::builder().campaign_id(42).build();
        let response = client.edit_campaign(&request).await?;

        assert_eq!(response.as_json(), Some(&json!("Campaign Updated")));
        export.assert();
        edit.assert();

        Ok(())
    }

    #[tokio::test]
    async fn creative_exception_mode_follows_original_flag() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let export = server.mock(|when, then| {
            when.method(POST)
                .path("/api/8/export.asmx/Campaigns")
                .json_body_includes(r#"{"campaign_id": 10}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {
                    "row_count": 1,
                    "campaigns": [{"campaign_id": 10, "original": true}]
                }
            }));
        });
        let exception = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/addedit.asmx/CampaignCreativeExceptions")
                .json_body_includes(
                    r#"{
                        "campaign_id": 10,
                        "creative_id": 77,
                        "creative_exception_type": "block",
                        "creative_modification_type": "add"
                    }"#,
                );
            then.status(StatusCode::OK).json_body(json!({"d": "Success"}));
        });

        let response = client.add_campaign_creative_exception(10, 77).await?;

        assert_eq!(response.as_json(), Some(&json!("Success")));
        export.assert();
        exception.assert();

        Ok(())
    }

    #[tokio::test]
    async fn unknown_campaign_id_is_rejected_before_the_write() {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        server.mock(|when, then| {
            when.method(POST).path("/api/8/export.asmx/Campaigns");
            then.status(StatusCode::OK)
                .json_body(json!({"d": {"row_count": 0, "campaigns": []}}));
        });
        let exception = server.mock(|when, then| {
            when.method(POST)
                .path("/api/1/addedit.asmx/CampaignSubIdExceptions");
            then.status(StatusCode::OK).json_body(json!({"d": "Success"}));
        });

        let err = client
            .add_campaign_subid_exception(999, "subid-1")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("invalid campaign id"));
        exception.assert_calls(0);
    }
}

mod pagination {
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    fn affiliate_rows(range: std::ops::RangeInclusive<i64>) -> serde_json::Value {
        json!(
            range
                .map(|id| json!({"affiliate_id": id}))
                .collect::<Vec<_>>()
        )
    }

    #[tokio::test]
    async fn affiliate_ids_pages_through_the_export() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let probe = server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"start_at_row": 0, "row_limit": 1}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 6000, "affiliates": affiliate_rows(1..=1)}
            }));
        });
        let page_1 = server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"start_at_row": 1, "row_limit": 2500}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 6000, "affiliates": affiliate_rows(1..=2500)}
            }));
        });
        let page_2 = server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"start_at_row": 2501, "row_limit": 2500}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 6000, "affiliates": affiliate_rows(2501..=5000)}
            }));
        });
        let page_3 = server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"start_at_row": 5001, "row_limit": 2500}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 6000, "affiliates": affiliate_rows(5001..=6000)}
            }));
        });

        let ids = client.affiliate_ids().await?;

        assert_eq!(ids, (1..=6000).collect::<Vec<i64>>());
        probe.assert();
        page_1.assert();
        page_2.assert();
        page_3.assert();

        Ok(())
    }

    #[tokio::test]
    async fn affiliate_ids_handles_exact_page_multiple() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"row_limit": 1}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 2500, "affiliates": affiliate_rows(1..=1)}
            }));
        });
        let page = server.mock(|when, then| {
            when.method(POST)
                .path("/api/5/export.asmx/Affiliates")
                .json_body_includes(r#"{"start_at_row": 1, "row_limit": 2500}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {"row_count": 2500, "affiliates": affiliate_rows(1..=2500)}
            }));
        });

        let ids = client.affiliate_ids().await?;

        assert_eq!(ids.len(), 2500);
        page.assert();

        Ok(())
    }

    #[tokio::test]
    async fn advertiser_ids_collects_from_listing() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/1/get.asmx/Advertisers");
            then.status(StatusCode::OK).json_body(json!({
                "d": [
                    {"advertiser_id": 3, "advertiser_name": "Alpha"},
                    {"advertiser_id": 8, "advertiser_name": "Beta"}
                ]
            }));
        });

        let ids = client.advertiser_ids().await?;

        assert_eq!(ids, vec![3, 8]);
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn offer_ids_decodes_offer_rows() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/6/export.asmx/Offers")
                .json_body_includes(r#"{"advertiser_id": 11}"#);
            then.status(StatusCode::OK).json_body(json!({
                "d": {
                    "row_count": 2,
                    "offers": [
                        {"offer_id": 100, "offer_name": "Lead Gen A"},
                        {"offer_id": 101, "offer_name": "Lead Gen B"}
                    ]
                }
            }));
        });

        let ids = client.offer_ids(Some(11)).await?;

        assert_eq!(ids, vec![100, 101]);
        mock.assert();

        Ok(())
    }
}

mod reports {
    use cake_client_sdk::admin::types::request::ClicksRequest;
    use cake_client_sdk::admin::types::response::Click;
    use chrono::NaiveDate;
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn clicks_rows_decode_into_the_model() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::admin_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/12/reports.asmx/Clicks")
                .json_body_includes(
                    r#"{"start_date": "2024-03-01 00:00:00", "end_date": "2024-03-02 00:00:00"}"#,
                );
            then.status(StatusCode::OK).json_body(json!({
                "d": {
                    "row_count": 1,
                    "clicks": [{
                        "click_id": 9001,
                        "click_date": "2024-03-01 10:15:00",
                        "tracking_id": 555,
                        "ip_address": "203.0.113.7",
                        "paid": "0.85",
                        "duplicate": false,
                        "total_clicks": 1
                    }]
                }
            }));
        });

        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let request = ClicksRequest::builder().start_date(start).end_date(end).build();

        let response = client.clicks(&request).await?;
        let rows = response
            .as_json()
            .and_then(|data| data.get("clicks"))
            .cloned()
            .expect("clicks array missing");
        let clicks: Vec<Click> = serde_json::from_value(rows)?;

        assert_eq!(clicks.len(), 1);
        assert_eq!(clicks[0].click_id, Some(9001));
        // Numeric tracking ids are normalized to strings.
        assert_eq!(clicks[0].tracking_id.as_deref(), Some("555"));
        assert_eq!(clicks[0].duplicate, Some(false));
        mock.assert();

        Ok(())
    }
}
