#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::NaiveDateTime;

use crate::Result;
use crate::params::must_have_one;

/// Parameters for `ChangeAccountInfo`.
///
/// Empty fields are submitted as empty strings, which the platform treats as
/// "clear this value" rather than "keep current" — callers editing a single
/// field should resubmit the full contact record.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ChangeAccountInfoRequest {
    pub contact_id: i64,
    pub contact_type_id: Option<i64>,
    #[builder(into)]
    pub first_name: Option<String>,
    #[builder(into)]
    pub last_name: Option<String>,
    #[builder(into)]
    pub email_address: Option<String>,
    #[builder(into)]
    pub title: Option<String>,
    #[builder(into)]
    pub phone_work: Option<String>,
    #[builder(into)]
    pub phone_cell: Option<String>,
    #[builder(into)]
    pub phone_fax: Option<String>,
    #[builder(into)]
    pub im_service: Option<String>,
    #[builder(into)]
    pub im_name: Option<String>,
    #[builder(into)]
    pub tax_class: Option<String>,
    #[builder(into)]
    pub ssn_tax_id: Option<String>,
    #[builder(into)]
    pub payment_to: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    #[builder(into)]
    pub address_street_1: Option<String>,
    #[builder(into)]
    pub address_street_2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
}

/// Parameters for `ApplyForOffer`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ApplyForOfferRequest {
    pub offer_contract_id: i64,
    pub media_type_id: i64,
    pub agreed_to_terms: bool,
    #[builder(into)]
    pub notes: Option<String>,
    #[builder(into)]
    pub agreed_from_ip_address: Option<String>,
}

/// Parameters for `OfferFeed`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct OfferFeedRequest {
    #[builder(into)]
    pub campaign_name: Option<String>,
    pub media_type_category_id: Option<i64>,
    pub vertical_category_id: Option<i64>,
    #[builder(into)]
    pub country_code: Option<String>,
    pub vertical_id: Option<i64>,
    pub offer_status_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `CampaignSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct CampaignSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[builder(into)]
    pub sub_affiliate: Option<String>,
    #[builder(into)]
    pub event_type: Option<String>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `Clicks`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ClicksRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub include_duplicates: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `EventConversions`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EventsConversionsRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub currency_id: i64,
    pub site_offer_id: Option<i64>,
    #[builder(into)]
    pub disposition_type: Option<String>,
    #[builder(into)]
    pub event_type: Option<String>,
    pub exclude_bot_traffic: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `OrderDetailChanges`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct OrderDetailChangesRequest {
    pub changes_since: NaiveDateTime,
    pub include_new_conversions: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `OrderDetails`.
///
/// At least one of `conversion_id` or `order_id` must be supplied.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct OrderDetailsRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub conversion_id: Option<i64>,
    #[builder(into)]
    pub order_id: Option<String>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

impl OrderDetailsRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("conversion_id", self.conversion_id.is_some()),
            ("order_id", self.order_id.is_some()),
        ])
    }
}

/// Parameters for `Referral`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ReferralRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    /// Restrict to referred affiliates over the payment minimum.
    pub over_minimum: bool,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `SubAffiliateSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SubAffiliateSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub site_offer_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `TopOfferSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct TopOfferSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub vertical_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}
