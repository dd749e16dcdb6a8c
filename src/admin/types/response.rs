#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

//! Deserialization targets for the admin export and report endpoints.
//!
//! These are flat attribute bags mirroring the shapes the platform returns.
//! Nested structures that this crate never inspects are kept as raw
//! [`Value`]s; decode them further as needed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::serde_as;

use crate::serde_helpers::StringFromAny;

/// An advertiser row from `export.asmx/Advertisers` or `get.asmx/Advertisers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BrandAdvertiser {
    pub advertiser_id: i64,
    pub advertiser_name: Option<String>,
    pub third_party_name: Option<String>,
    pub account_managers: Option<Value>,
    pub account_status: Option<Value>,
    pub address: Option<Value>,
    pub website: Option<String>,
    pub contacts: Option<Value>,
    pub tags: Option<Value>,
    pub credit_limits: Option<Value>,
    pub suppression_lists: Option<Value>,
    pub blacklists: Option<Value>,
    pub billing_cycle: Option<Value>,
    pub events: Option<Value>,
    pub voucher_codes: Option<Value>,
    pub storefronts: Option<Value>,
    pub quickbooks_id: Option<String>,
    pub online_signup: Option<bool>,
    pub signup_ip_address: Option<String>,
    pub api_key: Option<String>,
    pub date_created: Option<String>,
    pub date_last_accepted_terms: Option<String>,
    pub notes: Option<String>,
}

/// An affiliate row from `export.asmx/Affiliates`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SourceAffiliate {
    pub affiliate_id: i64,
    pub affiliate_name: Option<String>,
    pub third_party_name: Option<String>,
    pub tier: Option<Value>,
    pub account_managers: Option<Value>,
    pub account_status: Option<Value>,
    pub inactive_reason: Option<Value>,
    pub address: Option<Value>,
    pub website: Option<String>,
    pub payment_type: Option<Value>,
    pub contacts: Option<Value>,
    pub tags: Option<Value>,
    pub traffic_types: Option<Value>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub minimum_payment_threshold: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub auto_payment_fee: Option<String>,
    /// `Company` or the contact's name.
    pub payment_to: Option<String>,
    pub tax_class: Option<String>,
    pub ssn_tax_id: Option<String>,
    pub pay_vat: Option<bool>,
    pub swift_iban: Option<String>,
    pub referrals_enabled: Option<bool>,
    pub referred_by_affiliate: Option<Value>,
    pub referral_info: Option<Value>,
    pub billing_cycle: Option<Value>,
    pub currency_settings: Option<Value>,
    pub quickbooks_id: Option<String>,
    pub online_signup: Option<bool>,
    pub signup_ip_address: Option<String>,
    pub pay_for_conversions: Option<bool>,
    pub review: Option<bool>,
    pub review_new_subaffiliates: Option<bool>,
    pub suppression: Option<Value>,
    pub suppression_cap: Option<Value>,
    pub pixel_info: Option<Value>,
    pub fire_global_pixel: Option<bool>,
    pub blacklists: Option<Value>,
    pub redirect_domain_override: Option<String>,
    pub auto_approve_campaigns: Option<bool>,
    pub auto_approve_pixels: Option<bool>,
    pub hide_offers: Option<bool>,
    pub api_key: Option<String>,
    pub date_created: Option<String>,
    pub date_last_accepted_terms: Option<String>,
    pub notes: Option<String>,
}

/// The unique-key hash configured on a campaign pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HashType {
    pub hash_type_id: Option<i64>,
    pub hash_type_name: String,
}

/// Pixel configuration nested inside a campaign export row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PixelInfo {
    pub pixel_html: Option<String>,
    pub postback_url: Option<String>,
    pub postback_delay_ms: Option<i64>,
    pub hash_type: Option<HashType>,
}

/// A campaign row from `export.asmx/Campaigns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Campaign {
    pub campaign_id: i64,
    pub third_party_name: Option<String>,
    pub campaign_type: Option<String>,
    pub affiliate: Option<Value>,
    pub offer: Option<Value>,
    pub offer_contract: Option<Value>,
    /// Set on the campaign that holds an offer's original creative and sub
    /// id exception lists; exceptions on it block rather than allow.
    pub original: Option<bool>,
    pub non_original: Option<Value>,
    pub exceptions: Option<Value>,
    pub account_status: Option<Value>,
    pub currency: Option<Value>,
    pub media_type: Option<Value>,
    pub display_link_type: Option<Value>,
    pub event_overrides: Option<Value>,
    pub deal_flow: Option<Value>,
    pub payouts: Option<Value>,
    pub paid: Option<bool>,
    pub paid_redirects: Option<bool>,
    pub disable_prepop_appending: Option<bool>,
    pub suppression_amount: Option<i64>,
    pub cookie_domain: Option<String>,
    pub redirect_domain: Option<String>,
    pub click_cap: Option<Value>,
    pub conversion_cap: Option<Value>,
    pub pixel_info: Option<PixelInfo>,
    pub upsell_info: Option<Value>,
    pub submission_options: Option<Value>,
    pub voucher_codes: Option<Value>,
    pub test_link: Option<String>,
    pub redirect_offer: Option<Value>,
    pub redirect_404: Option<bool>,
    pub date_created: Option<String>,
    pub expiration_date: Option<String>,
    pub notes: Option<String>,
}

/// An offer row from `export.asmx/Offers`, reduced to the fields this crate
/// inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OfferRecord {
    pub offer_id: i64,
    pub offer_name: Option<String>,
    pub advertiser: Option<Value>,
    pub vertical: Option<Value>,
    pub offer_status: Option<Value>,
    pub offer_type: Option<Value>,
    pub hidden: Option<bool>,
}

/// A click row from `reports.asmx/Clicks`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Click {
    pub click_id: Option<i64>,
    pub visitor_id: Option<i64>,
    pub original_visitor_id: Option<i64>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub tracking_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub original_tracking_id: Option<String>,
    pub request_session_id: Option<i64>,
    pub click_date: Option<String>,
    pub udid: Option<String>,
    pub source_affiliate: Option<Value>,
    pub brand_advertiser: Option<Value>,
    pub site_offer: Option<Value>,
    pub site_offer_contract: Option<Value>,
    pub channel: Option<Value>,
    pub campaign: Option<Value>,
    pub creative: Option<Value>,
    pub sub_id_1: Option<String>,
    pub sub_id_2: Option<String>,
    pub sub_id_3: Option<String>,
    pub sub_id_4: Option<String>,
    pub sub_id_5: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub referrer_url: Option<String>,
    pub search_term: Option<String>,
    pub request_url: Option<String>,
    pub redirect_url: Option<String>,
    pub country: Option<Value>,
    pub region: Option<Value>,
    pub language: Option<Value>,
    pub isp: Option<Value>,
    pub device: Option<Value>,
    pub operating_system: Option<Value>,
    pub browser: Option<Value>,
    pub disposition: Option<Value>,
    pub paid_action: Option<Value>,
    pub paid: Option<Decimal>,
    pub received: Option<Decimal>,
    pub duplicate: Option<bool>,
    pub duplicate_clicks: Option<i64>,
    pub total_clicks: Option<i64>,
}

/// An event or conversion row from `reports.asmx/EventConversions`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct EventConversion {
    pub event_conversion_id: Option<i64>,
    pub visitor_id: Option<i64>,
    pub original_visitor_id: Option<i64>,
    pub user_id: Option<i64>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub tracking_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub original_tracking_id: Option<String>,
    pub request_session_id: Option<i64>,
    pub click_request_session_id: Option<i64>,
    pub click_id: Option<i64>,
    pub event_conversion_date: Option<String>,
    pub last_updated: Option<String>,
    pub click_date: Option<String>,
    pub source_date: Option<String>,
    pub udid: Option<String>,
    pub event_info: Option<Value>,
    pub source_affiliate: Option<Value>,
    pub brand_advertiser: Option<Value>,
    pub site_offer: Option<Value>,
    pub site_offer_contract: Option<Value>,
    pub channel: Option<Value>,
    pub campaign: Option<Value>,
    pub creative: Option<Value>,
    pub voucher_code: Option<String>,
    pub sub_id_1: Option<String>,
    pub sub_id_2: Option<String>,
    pub sub_id_3: Option<String>,
    pub sub_id_4: Option<String>,
    pub sub_id_5: Option<String>,
    pub event_conversion_ip_address: Option<String>,
    pub click_ip_address: Option<String>,
    pub event_conversion_referrer_url: Option<String>,
    pub click_referrer_url: Option<String>,
    pub event_conversion_user_agent: Option<String>,
    pub click_user_agent: Option<String>,
    pub source_type: Option<String>,
    pub price_format: Option<Value>,
    pub paid: Option<Decimal>,
    pub paid_unbilled: Option<Decimal>,
    pub received: Option<Decimal>,
    pub received_unbilled: Option<Decimal>,
    pub site_offer_credit_percentage: Option<Decimal>,
    pub site_offer_payment_percentage: Option<Decimal>,
    pub program_credit_percentage: Option<Decimal>,
    pub pixel_dropped: Option<bool>,
    pub suppressed: Option<bool>,
    pub returned: Option<bool>,
    pub test: Option<bool>,
    #[serde_as(as = "Option<StringFromAny>")]
    pub transaction_id: Option<String>,
    pub current_disposition: Option<Value>,
    pub order_total: Option<Decimal>,
    pub storefront: Option<Value>,
    pub payout_rule: Option<Value>,
    pub event_conversion_score: Option<Value>,
    pub country: Option<Value>,
    pub region: Option<Value>,
    pub language: Option<Value>,
    pub isp: Option<Value>,
    pub device: Option<Value>,
    pub operating_system: Option<Value>,
    pub browser: Option<Value>,
    pub search_term: Option<String>,
    pub keyword: Option<String>,
    pub note: Option<String>,
}

/// Envelope for `export.asmx/Advertisers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AdvertisersExportResponse {
    pub row_count: i64,
    #[serde(default)]
    pub advertisers: Vec<BrandAdvertiser>,
}

/// Envelope for `export.asmx/Affiliates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AffiliatesExportResponse {
    pub row_count: i64,
    #[serde(default)]
    pub affiliates: Vec<SourceAffiliate>,
}

/// Envelope for `export.asmx/Campaigns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct CampaignsExportResponse {
    pub row_count: i64,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

/// Envelope for `export.asmx/Offers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct OffersExportResponse {
    pub row_count: Option<i64>,
    #[serde(default)]
    pub offers: Vec<OfferRecord>,
}
