#![cfg(feature = "affiliate")]
#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

//! Integration tests for the affiliate API client.

pub mod common;

mod account {
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn change_language_sends_identity_prefix() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/2/account.asmx/ChangeLanguage")
                .json_body_includes(
                    r#"{
                        "api_key": "dNJFmId9rI",
                        "affiliate_id": 500,
                        "contact_id": 12,
                        "new_language_id": 2
                    }"#,
                );
            then.status(StatusCode::OK).json_body(json!({"d": "Success"}));
        });

        let response = client.change_language(12, 2).await?;

        assert_eq!(response.as_json(), Some(&json!("Success")));
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn account_manager_lookup_succeeds() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/2/account.asmx/GetAccountManager");
            then.status(StatusCode::OK).json_body(json!({
                "d": {"contact_name": "Jordan", "email_address": "jordan@example.com"}
            }));
        });

        let response = client.account_manager().await?;

        assert_eq!(
            response
                .as_json()
                .and_then(|manager| manager.get("contact_name")),
            Some(&json!("Jordan"))
        );
        mock.assert();

        Ok(())
    }
}

mod offers {
    use cake_client_sdk::affiliate::types::request::OfferFeedRequest;
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    #[tokio::test]
    async fn offer_feed_applies_defaults() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/5/offers.asmx/OfferFeed")
                .json_body_includes(
                    r#"{
                        "affiliate_id": 500,
                        "api_key": "dNJFmId9rI",
                        "country_code": "US",
                        "media_type_category_id": 0,
                        "offer_status_id": 0,
                        "row_limit": 0
                    }"#,
                );
            then.status(StatusCode::OK)
                .json_body(json!({"d": {"row_count": 0, "offers": []}}));
        });

        let request = OfferFeedRequest::builder().country_code("US").build();
        let response = client.offer_feed(&request).await?;

        assert!(response.as_json().is_some());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn set_postback_url_posts_campaign_scope() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/2/offers.asmx/SetPostbackURL")
                .json_body_includes(
                    r#"{"campaign_id": 31, "postback_url": "https://tracker.example.com/pb"}"#,
                );
            then.status(StatusCode::OK).json_body(json!({"d": "Success"}));
        });

        let response = client
            .set_postback_url(31, "https://tracker.example.com/pb")
            .await?;

        assert_eq!(response.as_json(), Some(&json!("Success")));
        mock.assert();

        Ok(())
    }
}

mod reports {
    use cake_client_sdk::affiliate::types::request::{CampaignSummaryRequest, OrderDetailsRequest};
    use cake_client_sdk::error::{InvalidArguments, Kind};
    use chrono::NaiveDate;
    use httpmock::{Method::POST, MockServer};
    use reqwest::StatusCode;
    use serde_json::json;

    use crate::common;

    fn day(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn order_details_requires_conversion_or_order_id() {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(StatusCode::OK).json_body(json!({"d": {}}));
        });

        let request = OrderDetailsRequest::builder()
            .start_date(day(2024, 1, 1))
            .end_date(day(2024, 1, 31))
            .build();
        let err = client.order_details(&request).await.unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(
            err.downcast_ref::<InvalidArguments>()
                .is_some_and(|e| e.reason.contains("order_id"))
        );
        mock.assert_calls(0);
    }

    #[tokio::test]
    async fn campaign_summary_uses_vendor_defaults() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/6/reports.asmx/CampaignSummary")
                .json_body_includes(
                    r#"{
                        "start_date": "2024-01-01 00:00:00",
                        "end_date": "2024-01-31 00:00:00",
                        "event_type": "all",
                        "sort_field": "site_offer_id",
                        "sort_descending": "FALSE"
                    }"#,
                );
            then.status(StatusCode::OK)
                .json_body(json!({"d": {"row_count": 0, "campaigns": []}}));
        });

        let request = CampaignSummaryRequest::builder()
            .start_date(day(2024, 1, 1))
            .end_date(day(2024, 1, 31))
            .build();
        let response = client.campaign_summary(&request).await?;

        assert!(response.as_json().is_some());
        mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn network_news_issues_the_request() -> anyhow::Result<()> {
        let server = MockServer::start();
        let client = common::affiliate_client(&server);

        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/affiliates/api/2/reports.asmx/NetworkNews")
                .json_body_includes(r#"{"row_limit": 5}"#);
            then.status(StatusCode::OK)
                .json_body(json!({"d": [{"title": "Payout schedule change"}]}));
        });

        let response = client.network_news(Some(5)).await?;

        assert_eq!(
            response.as_json(),
            Some(&json!([{"title": "Payout schedule change"}]))
        );
        mock.assert();

        Ok(())
    }
}
