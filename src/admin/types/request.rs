#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::Result;
use crate::params::{id_in_range, if_one_then_all, must_have_one, require};
use crate::types::{ModificationType, Setting, Toggle};

// ---- accounting ----

/// Parameters for `ExportAdvertiserBills`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ExportAdvertiserBillsRequest {
    pub billing_period_start_date: NaiveDateTime,
    pub billing_period_end_date: NaiveDateTime,
    /// Billing cycle filter, defaults to `all`.
    #[builder(into)]
    pub billing_cycle: Option<String>,
}

/// Parameters for `ExportAffiliateBills`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ExportAffiliateBillsRequest {
    pub billing_period_start_date: NaiveDateTime,
    pub billing_period_end_date: NaiveDateTime,
    #[builder(into)]
    pub billing_cycle: Option<String>,
    pub paid_only: Option<bool>,
    pub payment_type_id: Option<i64>,
}

// ---- add/edit ----

/// Parameters for creating an advertiser.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddAdvertiserRequest {
    #[builder(into)]
    pub advertiser_name: String,
    #[builder(into)]
    pub third_party_name: Option<String>,
    /// Defaults to `1` (active).
    pub account_status_id: Option<i64>,
    pub online_signup: Option<bool>,
    #[builder(into)]
    pub signup_ip_address: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    /// Defaults to `3` (monthly).
    pub billing_cycle_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
    #[builder(into)]
    pub tags: Option<String>,
}

/// Parameters for editing an advertiser.
///
/// `notes` is appended to the advertiser's existing notes, which are read
/// with an export call first.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditAdvertiserRequest {
    pub advertiser_id: i64,
    #[builder(into)]
    pub advertiser_name: Option<String>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub account_status_id: Option<i64>,
    #[builder(into)]
    pub website: Option<String>,
    pub billing_cycle_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
    #[builder(into)]
    pub tags: Option<String>,
}

/// Parameters for creating an affiliate.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddAffiliateRequest {
    #[builder(into)]
    pub affiliate_name: String,
    #[builder(into)]
    pub third_party_name: Option<String>,
    /// Defaults to `1` (active).
    pub account_status_id: Option<i64>,
    pub inactive_reason_id: Option<i64>,
    pub affiliate_tier_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    pub hide_offers: Option<bool>,
    #[builder(into)]
    pub website: Option<String>,
    #[builder(into)]
    pub tax_class: Option<String>,
    #[builder(into)]
    pub ssn_tax_id: Option<String>,
    pub vat_tax_required: Option<bool>,
    #[builder(into)]
    pub swift_iban: Option<String>,
    /// `0` = pay the company, `1` = pay the contact.
    pub payment_to: Option<i64>,
    pub payment_fee: Option<Decimal>,
    pub payment_min_threshold: Option<Decimal>,
    pub currency_id: Option<i64>,
    /// Defaults to `1`.
    pub payment_setting_id: Option<i64>,
    /// Defaults to `3` (monthly).
    pub billing_cycle_id: Option<i64>,
    /// Defaults to `1` (check).
    pub payment_type_id: Option<i64>,
    #[builder(into)]
    pub payment_type_info: Option<String>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    /// Comma-separated id list.
    #[builder(into)]
    pub media_type_ids: Option<String>,
    #[builder(into)]
    pub price_format_ids: Option<String>,
    #[builder(into)]
    pub vertical_category_ids: Option<String>,
    #[builder(into)]
    pub country_codes: Option<String>,
    #[builder(into)]
    pub tags: Option<String>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_delay_ms: Option<i64>,
    /// Defaults to `TRUE`.
    pub fire_global_pixel: Option<bool>,
    /// Defaults to the current time.
    pub date_added: Option<NaiveDateTime>,
    pub online_signup: Option<bool>,
    #[builder(into)]
    pub signup_ip_address: Option<String>,
    pub referral_affiliate_id: Option<i64>,
    #[builder(into)]
    pub referral_notes: Option<String>,
    /// Defaults to `TRUE`.
    pub terms_and_conditions_agreed: Option<bool>,
    #[builder(into)]
    pub notes: Option<String>,
}

/// Parameters for editing an affiliate.
///
/// `hide_offers`, `vat_tax_required`, `payment_to` and `fire_global_pixel`
/// keep their current platform values when unset (read with an export call
/// first), and `notes` is appended to the existing notes.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditAffiliateRequest {
    pub affiliate_id: i64,
    #[builder(into)]
    pub affiliate_name: Option<String>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub account_status_id: Option<i64>,
    pub inactive_reason_id: Option<i64>,
    pub affiliate_tier_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    pub hide_offers: Option<bool>,
    #[builder(into)]
    pub website: Option<String>,
    #[builder(into)]
    pub tax_class: Option<String>,
    #[builder(into)]
    pub ssn_tax_id: Option<String>,
    pub vat_tax_required: Option<bool>,
    #[builder(into)]
    pub swift_iban: Option<String>,
    pub payment_to: Option<i64>,
    pub payment_fee: Option<Decimal>,
    pub payment_min_threshold: Option<Decimal>,
    pub currency_id: Option<i64>,
    pub payment_setting_id: Option<i64>,
    pub billing_cycle_id: Option<i64>,
    pub payment_type_id: Option<i64>,
    #[builder(into)]
    pub payment_type_info: Option<String>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub media_type_ids: Option<String>,
    #[builder(into)]
    pub price_format_ids: Option<String>,
    #[builder(into)]
    pub vertical_category_ids: Option<String>,
    #[builder(into)]
    pub country_codes: Option<String>,
    #[builder(into)]
    pub tags: Option<String>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_delay_ms: Option<i64>,
    pub fire_global_pixel: Option<bool>,
    pub referral_affiliate_id: Option<i64>,
    #[builder(into)]
    pub referral_notes: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
}

/// Parameters for blacklisting an affiliate (or one of its sub ids) from an
/// advertiser or offer.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddBlacklistRequest {
    pub affiliate_id: i64,
    pub blacklist_reason_id: i64,
    pub redirect_type: i64,
    #[builder(into)]
    pub sub_id: Option<String>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    /// Defaults to the current time.
    pub blacklist_date: Option<NaiveDateTime>,
}

impl AddBlacklistRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("advertiser_id", self.advertiser_id.is_some()),
            ("offer_id", self.offer_id.is_some()),
        ])
    }
}

/// Parameters for creating a lead buyer.
///
/// `credit_type` and `credit_limit` form an all-or-none pair.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddBuyerRequest {
    #[builder(into)]
    pub buyer_name: String,
    pub account_manager_id: i64,
    pub account_status_id: Option<i64>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    pub billing_cycle_id: Option<i64>,
    /// `unlimited` or `limited`; defaults to `unlimited`.
    #[builder(into)]
    pub credit_type: Option<String>,
    pub credit_limit: Option<Decimal>,
}

impl AddBuyerRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if_one_then_all(&[
            ("credit_type", self.credit_type.is_some()),
            ("credit_limit", self.credit_limit.is_some()),
        ])
    }
}

/// Parameters for editing a lead buyer.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditBuyerRequest {
    pub buyer_id: i64,
    #[builder(into)]
    pub buyer_name: Option<String>,
    pub account_status_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    #[builder(into)]
    pub address_street: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub address_city: Option<String>,
    #[builder(into)]
    pub address_state: Option<String>,
    #[builder(into)]
    pub address_zip_code: Option<String>,
    #[builder(into)]
    pub address_country: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    pub billing_cycle_id: Option<i64>,
    /// Defaults to `no_change`.
    #[builder(into)]
    pub credit_type: Option<String>,
    pub credit_limit: Option<Decimal>,
}

/// Parameters for creating a buyer contract.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddBuyerContractRequest {
    pub buyer_id: i64,
    pub vertical_id: i64,
    #[builder(into)]
    pub buyer_contract_name: String,
    pub account_status_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub replace_returns: Option<Toggle>,
    pub replacements_non_returnable: Option<Toggle>,
    /// Defaults to `30`.
    pub max_return_age_days: Option<i64>,
    pub buy_upsells: Option<Toggle>,
    pub vintage_leads: Option<Toggle>,
    pub min_lead_age_minutes: Option<i64>,
    /// Defaults to `7200`.
    pub max_lead_age_minutes: Option<i64>,
    pub posting_wait_seconds: Option<i64>,
    #[builder(into)]
    pub default_confirmation_page_link: Option<String>,
    /// Defaults to `10`.
    pub max_post_errors: Option<i64>,
    pub send_alert_only: Option<Toggle>,
    pub rank: Option<i64>,
    pub email_template_id: Option<i64>,
    pub portal_template_id: Option<i64>,
}

/// Parameters for editing a buyer contract.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditBuyerContractRequest {
    pub buyer_contract_id: i64,
    #[builder(into)]
    pub buyer_contract_name: Option<String>,
    pub account_status_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub replace_returns: Option<Setting>,
    pub replacements_non_returnable: Option<Setting>,
    pub max_return_age_days: Option<i64>,
    pub buy_upsells: Option<Setting>,
    pub vintage_leads: Option<Setting>,
    pub min_lead_age_minutes: Option<i64>,
    pub max_lead_age_minutes: Option<i64>,
    pub posting_wait_seconds: Option<i64>,
    #[builder(into)]
    pub default_confirmation_page_link: Option<String>,
    pub max_post_errors: Option<i64>,
    pub send_alert_only: Option<Setting>,
    pub rank: Option<i64>,
    pub email_template_id: Option<i64>,
    pub portal_template_id: Option<i64>,
}

/// Parameters for creating a campaign.
///
/// One of `offer_id` or `offer_contract_id` is required; ids must fit the
/// platform's `1..=999999999` range.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddCampaignRequest {
    pub affiliate_id: i64,
    pub media_type_id: i64,
    pub payout: Decimal,
    pub offer_id: Option<i64>,
    pub offer_contract_id: Option<i64>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub account_status_id: Option<i64>,
    /// Defaults to `1`.
    pub display_link_type_id: Option<i64>,
    /// Unset means the campaign never expires.
    pub expiration_date: Option<NaiveDateTime>,
    pub currency_id: Option<i64>,
    pub paid: Option<Toggle>,
    pub static_suppression: Option<i64>,
    pub paid_redirects: Option<Toggle>,
    pub paid_upsells: Option<Toggle>,
    pub review: Option<Toggle>,
    pub auto_disposition_delay_hours: Option<i64>,
    pub redirect_offer_contract_id: Option<i64>,
    pub redirect_404: Option<Toggle>,
    pub clear_session_on_conversion: Option<Toggle>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_delay_ms: Option<i64>,
    /// Defaults to `none`.
    #[builder(into)]
    pub unique_key_hash_type: Option<String>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub test_link: Option<String>,
    #[builder(into)]
    pub redirect_domain: Option<String>,
}

impl AddCampaignRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("offer_id", self.offer_id.is_some()),
            ("offer_contract_id", self.offer_contract_id.is_some()),
        ])?;
        id_in_range("affiliate_id", self.affiliate_id)?;
        if let Some(offer_id) = self.offer_id {
            id_in_range("offer_id", offer_id)?;
        }
        if let Some(offer_contract_id) = self.offer_contract_id {
            id_in_range("offer_contract_id", offer_contract_id)?;
        }
        if self.media_type_id < 1 {
            return Err(crate::error::Error::invalid_arguments(
                "media_type_id must be an integer greater than 0",
            ));
        }
        Ok(())
    }
}

/// Parameters for editing a campaign.
///
/// An unset `payout` leaves the stored payout untouched; an unset
/// `unique_key_hash_type` keeps the current hash type, which is read from a
/// campaign export first.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditCampaignRequest {
    pub campaign_id: i64,
    pub offer_contract_id: Option<i64>,
    pub media_type_id: Option<i64>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub account_status_id: Option<i64>,
    pub display_link_type_id: Option<i64>,
    pub expiration_date: Option<NaiveDateTime>,
    pub use_offer_contract_payout: Option<Setting>,
    pub payout: Option<Decimal>,
    pub paid: Option<Setting>,
    pub static_suppression: Option<i64>,
    pub paid_redirects: Option<Setting>,
    pub paid_upsells: Option<Setting>,
    pub review: Option<Setting>,
    pub auto_disposition_delay_hours: Option<i64>,
    pub redirect_offer_contract_id: Option<i64>,
    pub redirect_404: Option<Setting>,
    pub clear_session_on_conversion: Option<Setting>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_delay_ms: Option<i64>,
    #[builder(into)]
    pub unique_key_hash_type: Option<String>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub test_link: Option<String>,
    #[builder(into)]
    pub redirect_domain: Option<String>,
}

impl EditCampaignRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        id_in_range("campaign_id", self.campaign_id)
    }
}

/// Parameters for adding a contact to an advertiser, affiliate, or buyer.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddContactRequest {
    /// `advertiser`, `affiliate`, or `buyer`.
    #[builder(into)]
    pub entity_type: String,
    pub entity_id: i64,
    pub role_id: i64,
    #[builder(into)]
    pub contact_email_address: String,
    #[builder(into)]
    pub contact_first_name: String,
    pub include_in_mass_emails: Option<Toggle>,
    #[builder(into)]
    pub contact_middle_name: Option<String>,
    #[builder(into)]
    pub contact_last_name: Option<String>,
    #[builder(into)]
    pub contact_title: Option<String>,
    /// Defaults to `-1` (unassigned).
    pub contact_department_id: Option<i64>,
    #[builder(into)]
    pub contact_phone_work: Option<String>,
    #[builder(into)]
    pub contact_phone_cell: Option<String>,
    #[builder(into)]
    pub contact_phone_fax: Option<String>,
    #[builder(into)]
    pub contact_im_service: Option<String>,
    #[builder(into)]
    pub contact_im_name: Option<String>,
    #[builder(into)]
    pub contact_timezone: Option<String>,
    /// Defaults to `-1` (unset).
    pub contact_language_id: Option<i64>,
}

/// Parameters for creating a creative.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddCreativeRequest {
    #[builder(into)]
    pub creative_name: String,
    pub offer_id: i64,
    pub creative_type_id: i64,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub creative_status_id: Option<i64>,
    /// Defaults to `-1` (not applicable).
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[builder(into)]
    pub offer_link: Option<String>,
    pub allow_link_override: Option<bool>,
    #[builder(into)]
    pub notes: Option<String>,
}

/// Parameters for editing a creative.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditCreativeRequest {
    pub creative_id: i64,
    pub allow_link_override: bool,
    #[builder(into)]
    pub creative_name: Option<String>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub creative_type_id: Option<i64>,
    pub creative_status_id: Option<i64>,
    /// Defaults to `-2` (keep current).
    pub width: Option<i64>,
    pub height: Option<i64>,
    #[builder(into)]
    pub offer_link: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
}

/// Parameters for creating an offer.
///
/// `tags`/`tags_modification_type` and `allowed_media_type_ids`/
/// `allowed_media_type_modification_type` are all-or-none pairs.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct AddOfferRequest {
    pub advertiser_id: i64,
    pub vertical_id: i64,
    #[builder(into)]
    pub offer_name: String,
    pub offer_status_id: i64,
    pub offer_type_id: i64,
    pub last_touch: Toggle,
    pub price_format_id: i64,
    pub payout: Decimal,
    pub received: Decimal,
    #[builder(into)]
    pub offer_link: String,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub hidden: Option<Toggle>,
    pub currency_id: Option<i64>,
    pub ssl: Option<Toggle>,
    /// Defaults to `30`.
    pub click_cookie_days: Option<i64>,
    pub impression_cookie_days: Option<i64>,
    /// Defaults to `none`.
    #[builder(into)]
    pub auto_disposition_type: Option<String>,
    pub auto_disposition_delay_hours: Option<i64>,
    pub redirect_offer_contract_id: Option<i64>,
    pub redirect_404: Option<Toggle>,
    #[builder(into)]
    pub redirect_domain: Option<String>,
    pub conversions_from_whitelist_only: Option<Toggle>,
    pub track_search_terms_from_non_supported_search_engines: Option<Toggle>,
    pub enable_view_thru_conversions: Option<Toggle>,
    pub click_trumps_impression: Option<Toggle>,
    pub disable_click_deduplication: Option<Toggle>,
    pub session_regeneration_seconds: Option<i64>,
    pub session_regeneration_type_id: Option<i64>,
    pub enable_transaction_id_deduplication: Option<Toggle>,
    #[builder(into)]
    pub cookie_domain: Option<String>,
    pub postbacks_only: Option<Toggle>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_url_ms_delay: Option<i64>,
    pub fire_global_pixel: Option<Toggle>,
    pub fire_pixel_on_non_paid_conversions: Option<Toggle>,
    pub static_suppression: Option<i64>,
    pub conversion_cap_behavior: Option<i64>,
    pub conversion_behavior_on_redirect: Option<i64>,
    /// Unset means the offer never expires.
    pub expiration_date: Option<NaiveDateTime>,
    #[builder(into)]
    pub offer_contract_name: Option<String>,
    pub offer_contract_hidden: Option<Toggle>,
    pub received_percentage: Option<Toggle>,
    #[builder(into)]
    pub thankyou_link: Option<String>,
    #[builder(into)]
    pub preview_link: Option<String>,
    #[builder(into)]
    pub thumbnail_file_import_url: Option<String>,
    #[builder(into)]
    pub offer_description: Option<String>,
    #[builder(into)]
    pub restrictions: Option<String>,
    #[builder(into)]
    pub advertiser_extended_terms: Option<String>,
    #[builder(into)]
    pub testing_instructions: Option<String>,
    pub tags_modification_type: Option<ModificationType>,
    #[builder(into)]
    pub tags: Option<String>,
    pub allow_affiliates_to_create_creatives: Option<Toggle>,
    #[builder(into)]
    pub unsubscribe_link: Option<String>,
    #[builder(into)]
    pub from_lines: Option<String>,
    #[builder(into)]
    pub subject_lines: Option<String>,
    pub allowed_media_type_modification_type: Option<ModificationType>,
    #[builder(into)]
    pub allowed_media_type_ids: Option<String>,
}

impl AddOfferRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if_one_then_all(&[
            ("tags", self.tags.is_some()),
            (
                "tags_modification_type",
                self.tags_modification_type.is_some(),
            ),
        ])?;
        if_one_then_all(&[
            (
                "allowed_media_type_ids",
                self.allowed_media_type_ids.is_some(),
            ),
            (
                "allowed_media_type_modification_type",
                self.allowed_media_type_modification_type.is_some(),
            ),
        ])
    }
}

/// Parameters for editing an offer.
///
/// Unset `payout`/`received` leave the stored amounts untouched. The same
/// all-or-none pairs as [`AddOfferRequest`] apply.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditOfferRequest {
    pub offer_id: i64,
    #[builder(into)]
    pub offer_name: Option<String>,
    pub vertical_id: Option<i64>,
    #[builder(into)]
    pub third_party_name: Option<String>,
    pub hidden: Option<Setting>,
    pub offer_status_id: Option<i64>,
    pub ssl: Option<Setting>,
    pub click_cookie_days: Option<i64>,
    pub impression_cookie_days: Option<i64>,
    #[builder(into)]
    pub auto_disposition_type: Option<String>,
    pub auto_disposition_delay_hours: Option<i64>,
    pub redirect_offer_contract_id: Option<i64>,
    pub redirect_404: Option<Setting>,
    #[builder(into)]
    pub redirect_domain: Option<String>,
    pub conversions_from_whitelist_only: Option<Setting>,
    pub track_search_terms_from_non_supported_search_engines: Option<Setting>,
    pub enable_view_thru_conversions: Option<Setting>,
    pub click_trumps_impression: Option<Setting>,
    pub disable_click_deduplication: Option<Setting>,
    pub last_touch: Option<Setting>,
    pub session_regeneration_seconds: Option<i64>,
    pub session_regeneration_type_id: Option<i64>,
    pub enable_transaction_id_deduplication: Option<Setting>,
    #[builder(into)]
    pub cookie_domain: Option<String>,
    pub postbacks_only: Option<Setting>,
    #[builder(into)]
    pub pixel_html: Option<String>,
    #[builder(into)]
    pub postback_url: Option<String>,
    pub postback_url_ms_delay: Option<i64>,
    pub fire_global_pixel: Option<Setting>,
    pub fire_pixel_on_non_paid_conversions: Option<Setting>,
    pub static_suppression: Option<i64>,
    pub conversion_cap_behavior: Option<i64>,
    pub conversion_behavior_on_redirect: Option<i64>,
    pub expiration_date: Option<NaiveDateTime>,
    #[builder(into)]
    pub offer_contract_name: Option<String>,
    pub offer_contract_hidden: Option<Setting>,
    pub payout: Option<Decimal>,
    pub received: Option<Decimal>,
    pub received_percentage: Option<Setting>,
    #[builder(into)]
    pub offer_link: Option<String>,
    #[builder(into)]
    pub thankyou_link: Option<String>,
    #[builder(into)]
    pub preview_link: Option<String>,
    #[builder(into)]
    pub thumbnail_file_import_url: Option<String>,
    #[builder(into)]
    pub offer_description: Option<String>,
    #[builder(into)]
    pub restrictions: Option<String>,
    #[builder(into)]
    pub advertiser_extended_terms: Option<String>,
    #[builder(into)]
    pub testing_instructions: Option<String>,
    pub tags_modification_type: Option<ModificationType>,
    #[builder(into)]
    pub tags: Option<String>,
    pub allow_affiliates_to_create_creatives: Option<Setting>,
    #[builder(into)]
    pub unsubscribe_link: Option<String>,
    #[builder(into)]
    pub from_lines: Option<String>,
    #[builder(into)]
    pub subject_lines: Option<String>,
    pub allowed_media_type_modification_type: Option<ModificationType>,
    #[builder(into)]
    pub allowed_media_type_ids: Option<String>,
}

impl EditOfferRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        if_one_then_all(&[
            ("tags", self.tags.is_some()),
            (
                "tags_modification_type",
                self.tags_modification_type.is_some(),
            ),
        ])?;
        if_one_then_all(&[
            (
                "allowed_media_type_ids",
                self.allowed_media_type_ids.is_some(),
            ),
            (
                "allowed_media_type_modification_type",
                self.allowed_media_type_modification_type.is_some(),
            ),
        ])
    }
}

/// Parameters for setting caps on an offer, offer contract, or campaign.
///
/// One of `offer_id`, `offer_contract_id`, or `campaign_id` is required.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EditCapsRequest {
    pub cap_type_id: i64,
    pub cap_interval_id: i64,
    pub cap_amount: i64,
    pub send_alert_only: bool,
    pub offer_id: Option<i64>,
    pub offer_contract_id: Option<i64>,
    pub campaign_id: Option<i64>,
    /// Unset leaves the cap start date untouched.
    pub cap_start: Option<NaiveDateTime>,
}

impl EditCapsRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("offer_id", self.offer_id.is_some()),
            ("offer_contract_id", self.offer_contract_id.is_some()),
            ("campaign_id", self.campaign_id.is_some()),
        ])
    }
}

// ---- export ----

/// Parameters for `export.asmx/Advertisers`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportAdvertisersRequest {
    pub advertiser_id: Option<i64>,
    #[builder(into)]
    pub advertiser_name: Option<String>,
    pub account_manager_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `export.asmx/Affiliates`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportAffiliatesRequest {
    pub affiliate_id: Option<i64>,
    #[builder(into)]
    pub affiliate_name: Option<String>,
    pub account_manager_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `export.asmx/Blacklists`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportBlacklistsRequest {
    pub affiliate_id: Option<i64>,
    #[builder(into)]
    pub sub_id: Option<String>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
}

/// Parameters for `export.asmx/BuyerContracts`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportBuyerContractsRequest {
    pub buyer_contract_id: Option<i64>,
    pub buyer_id: Option<i64>,
    pub vertical_id: Option<i64>,
    pub buyer_contract_status_id: Option<i64>,
}

/// Parameters for `export.asmx/Campaigns`.
///
/// One of `campaign_id`, `site_offer_id`, or `source_affiliate_id` is
/// required.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportCampaignsRequest {
    pub campaign_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub source_affiliate_id: Option<i64>,
    pub channel_id: Option<i64>,
    pub account_status_id: Option<i64>,
    pub media_type_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

impl ExportCampaignsRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("campaign_id", self.campaign_id.is_some()),
            ("site_offer_id", self.site_offer_id.is_some()),
            ("source_affiliate_id", self.source_affiliate_id.is_some()),
        ])
    }
}

/// Parameters for `export.asmx/Creatives`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ExportCreativesRequest {
    pub offer_id: i64,
    pub creative_id: Option<i64>,
    #[builder(into)]
    pub creative_name: Option<String>,
    pub creative_type_id: Option<i64>,
    pub creative_status_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `export.asmx/Offers`.
#[derive(Debug, Clone, Default, Builder)]
#[non_exhaustive]
pub struct ExportOffersRequest {
    pub offer_id: Option<i64>,
    #[builder(into)]
    pub offer_name: Option<String>,
    pub advertiser_id: Option<i64>,
    pub vertical_id: Option<i64>,
    pub offer_type_id: Option<i64>,
    pub media_type_id: Option<i64>,
    pub offer_status_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `export.asmx/PixelLogRequests`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ExportPixelLogsRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub converted_only: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `export.asmx/Schedules`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ExportSchedulesRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub buyer_id: Option<i64>,
    pub status_id: Option<i64>,
    pub vertical_id: Option<i64>,
    pub priority_only: Option<bool>,
    pub active_only: Option<bool>,
}

// ---- reports ----

/// Parameters for `reports.asmx/BrandAdvertiserSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct BrandAdvertiserSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub brand_advertiser_id: Option<i64>,
    pub brand_advertiser_manager_id: Option<i64>,
    pub brand_advertiser_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub event_type: Option<String>,
}

/// Parameters for `reports.asmx/CampaignSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct CampaignSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub campaign_id: Option<i64>,
    pub source_affiliate_id: Option<i64>,
    #[builder(into)]
    pub subid_id: Option<String>,
    pub site_offer_id: Option<i64>,
    pub source_affiliate_tag_id: Option<i64>,
    pub site_offer_tag_id: Option<i64>,
    pub source_affiliate_manager_id: Option<i64>,
    pub brand_advertiser_manager_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub event_type: Option<String>,
}

/// Parameters for `reports.asmx/Clicks`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct ClicksRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub creative_id: Option<i64>,
    pub price_format_id: Option<i64>,
    pub include_duplicates: Option<bool>,
    pub include_tests: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `reports.asmx/EventConversionChanges`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EventConversionChangesRequest {
    pub changes_since: NaiveDateTime,
    pub include_new_event_conversions: Option<bool>,
    pub source_affiliate_id: Option<i64>,
    pub brand_advertiser_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub creative_id: Option<i64>,
    pub include_tests: Option<bool>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `reports.asmx/CountrySummary`.
///
/// One of `advertiser_id`, `offer_id`, `affiliate_id`, or `campaign_id` is
/// required.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct CountrySummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub affiliate_tag_id: Option<i64>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

impl CountrySummaryRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("advertiser_id", self.advertiser_id.is_some()),
            ("offer_id", self.offer_id.is_some()),
            ("affiliate_id", self.affiliate_id.is_some()),
            ("campaign_id", self.campaign_id.is_some()),
        ])
    }
}

/// Parameters for `reports.asmx/CreativeSummary`.
///
/// One of `site_offer_id` or `campaign_id` is required.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct CreativeSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub site_offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub event_type: Option<String>,
}

impl CreativeSummaryRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("site_offer_id", self.site_offer_id.is_some()),
            ("campaign_id", self.campaign_id.is_some()),
        ])
    }
}

/// Parameters for `reports.asmx/DailySummaryExport`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct DailySummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub source_affiliate_id: Option<i64>,
    pub brand_advertiser_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub vertical_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub creative_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    pub include_tests: Option<bool>,
}

/// Parameters for `reports.asmx/EventConversions`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct EventsConversionsRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[builder(into)]
    pub event_type: Option<String>,
    pub event_id: Option<i64>,
    pub source_affiliate_id: Option<i64>,
    pub brand_advertiser_id: Option<i64>,
    pub channel_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub site_offer_contract_id: Option<i64>,
    pub source_affiliate_tag_id: Option<i64>,
    pub brand_advertiser_tag_id: Option<i64>,
    pub site_offer_tag_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub creative_id: Option<i64>,
    pub price_format_id: Option<i64>,
    /// Defaults to `all`.
    #[builder(into)]
    pub source_type: Option<String>,
    /// Defaults to `both`.
    #[builder(into)]
    pub payment_percentage_filter: Option<String>,
    /// Defaults to `all`.
    #[builder(into)]
    pub disposition_type: Option<String>,
    pub disposition_id: Option<i64>,
    #[builder(into)]
    pub source_affiliate_billing_status: Option<String>,
    #[builder(into)]
    pub brand_advertiser_billing_status: Option<String>,
    /// Defaults to `non_tests`.
    #[builder(into)]
    pub test_filter: Option<String>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `reports.asmx/LeadsByBuyer`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LeadsByBuyerRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub vertical_id: Option<i64>,
    pub buyer_id: Option<i64>,
    pub buyer_contract_id: Option<i64>,
    pub status_id: Option<i64>,
    pub sub_status_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `reports.asmx/LeadsByAffiliateExport`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LeadsByAffiliateRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub vertical_id: Option<i64>,
    pub source_affiliate_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub source_affiliate_manager_id: Option<i64>,
    /// Defaults to `upsells_and_non_upsells`.
    #[builder(into)]
    pub upsell: Option<String>,
    pub lead_tier_id: Option<i64>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
}

/// Parameters for `reports_lite_clicks.asmx/AdvertiserSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksAdvertiserSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub advertiser_id: Option<i64>,
    pub advertiser_manager_id: Option<i64>,
    pub advertiser_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

/// Parameters for `reports_lite_clicks.asmx/AffiliateSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksAffiliateSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub affiliate_manager_id: Option<i64>,
    pub affiliate_tag_id: Option<i64>,
    pub offer_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

/// Parameters for `reports_lite_clicks.asmx/CampaignSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksCampaignSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    #[builder(into)]
    pub subaffiliate_id: Option<String>,
    pub affiliate_tag_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub offer_tag_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

/// Parameters for `reports_lite_clicks.asmx/CountrySummary`.
///
/// One of `advertiser_id`, `offer_id`, `affiliate_id`, or `campaign_id` is
/// required.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksCountrySummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub affiliate_tag_id: Option<i64>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

impl LiteClicksCountrySummaryRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("advertiser_id", self.advertiser_id.is_some()),
            ("offer_id", self.offer_id.is_some()),
            ("affiliate_id", self.affiliate_id.is_some()),
            ("campaign_id", self.campaign_id.is_some()),
        ])
    }
}

/// Parameters for `reports_lite_clicks.asmx/DailySummaryExport`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksDailySummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub advertiser_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub vertical_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub creative_id: Option<i64>,
    pub account_manager_id: Option<i64>,
    pub include_tests: Option<bool>,
}

/// Parameters for `reports_lite_clicks.asmx/OfferSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksOfferSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub advertiser_id: Option<i64>,
    pub advertiser_manager_id: Option<i64>,
    pub offer_id: Option<i64>,
    pub offer_tag_id: Option<i64>,
    pub affiliate_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

/// Parameters for `reports_lite_clicks.asmx/SubIDSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct LiteClicksSubIdSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub source_affiliate_id: i64,
    pub site_offer_id: Option<i64>,
    pub campaign_id: Option<i64>,
    /// Defaults to `NULL`, the vendor's marker for "no sub id".
    #[builder(into)]
    pub sub_id: Option<String>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

/// Parameters for `reports.asmx/OrderDetails`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct OrderDetailsRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub affiliate_id: Option<i64>,
    pub conversion_id: Option<i64>,
    #[builder(into)]
    pub order_id: Option<String>,
    pub start_at_row: Option<i64>,
    pub row_limit: Option<i64>,
    #[builder(into)]
    pub sort_field: Option<String>,
    pub sort_descending: Option<bool>,
}

/// Parameters for `reports.asmx/SiteOfferSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SiteOfferSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub brand_advertiser_id: Option<i64>,
    pub brand_advertiser_manager_id: Option<i64>,
    pub site_offer_id: Option<i64>,
    pub site_offer_tag_id: Option<i64>,
    pub source_affiliate_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub event_type: Option<String>,
}

/// Parameters for `reports.asmx/SourceAffiliateSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SourceAffiliateSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub source_affiliate_id: Option<i64>,
    pub source_affiliate_manager_id: Option<i64>,
    pub source_affiliate_tag_id: Option<i64>,
    pub site_offer_tag_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub event_type: Option<String>,
}

/// Parameters for `reports.asmx/SubIDSummary`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SubIdSummaryRequest {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub source_affiliate_id: i64,
    pub site_offer_id: Option<i64>,
    pub event_id: Option<i64>,
    #[builder(into)]
    pub revenue_filter: Option<String>,
}

// ---- signup ----

/// Parameters for `signup.asmx/Advertiser`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SignupAdvertiserRequest {
    #[builder(into)]
    pub company_name: String,
    #[builder(into)]
    pub address_street: String,
    #[builder(into)]
    pub address_city: String,
    #[builder(into)]
    pub address_state: String,
    #[builder(into)]
    pub address_zip_code: String,
    #[builder(into)]
    pub address_country: String,
    #[builder(into)]
    pub first_name: String,
    #[builder(into)]
    pub last_name: String,
    #[builder(into)]
    pub email_address: String,
    #[builder(into)]
    pub contact_phone_work: String,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub website: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
    #[builder(into)]
    pub contact_title: Option<String>,
    #[builder(into)]
    pub contact_phone_cell: Option<String>,
    #[builder(into)]
    pub contact_phone_fax: Option<String>,
    #[builder(into)]
    pub contact_im_name: Option<String>,
    pub contact_im_service: Option<i64>,
    #[builder(into)]
    pub ip_address: Option<String>,
}

/// Parameters for `signup.asmx/Affiliate`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct SignupAffiliateRequest {
    #[builder(into)]
    pub affiliate_name: String,
    pub account_status_id: i64,
    pub payment_setting_id: i64,
    #[builder(into)]
    pub tax_class: String,
    #[builder(into)]
    pub ssn_tax_id: String,
    #[builder(into)]
    pub address_street: String,
    #[builder(into)]
    pub address_city: String,
    #[builder(into)]
    pub address_state: String,
    #[builder(into)]
    pub address_zip_code: String,
    #[builder(into)]
    pub address_country: String,
    #[builder(into)]
    pub contact_first_name: String,
    #[builder(into)]
    pub contact_last_name: String,
    #[builder(into)]
    pub contact_email_address: String,
    #[builder(into)]
    pub contact_phone_work: String,
    #[builder(into)]
    pub contact_timezone: String,
    pub terms_and_conditions_agreed: bool,
    pub affiliate_tier_id: Option<i64>,
    pub hide_offers: Option<bool>,
    #[builder(into)]
    pub website: Option<String>,
    pub vat_tax_required: Option<bool>,
    #[builder(into)]
    pub swift_iban: Option<String>,
    pub payment_to: Option<i64>,
    pub payment_fee: Option<Decimal>,
    pub payment_min_threshold: Option<Decimal>,
    pub currency_id: Option<i64>,
    /// Defaults to `3` (monthly).
    pub billing_cycle_id: Option<i64>,
    /// Defaults to `1` (check).
    pub payment_type_id: Option<i64>,
    #[builder(into)]
    pub payment_type_info: Option<String>,
    #[builder(into)]
    pub address_street2: Option<String>,
    #[builder(into)]
    pub contact_middle_name: Option<String>,
    #[builder(into)]
    pub contact_title: Option<String>,
    #[builder(into)]
    pub contact_phone_cell: Option<String>,
    #[builder(into)]
    pub contact_phone_fax: Option<String>,
    #[builder(into)]
    pub contact_im_service: Option<String>,
    #[builder(into)]
    pub contact_im_name: Option<String>,
    pub contact_language_id: Option<i64>,
    #[builder(into)]
    pub media_type_ids: Option<String>,
    #[builder(into)]
    pub price_format_ids: Option<String>,
    #[builder(into)]
    pub vertical_category_ids: Option<String>,
    #[builder(into)]
    pub country_codes: Option<String>,
    #[builder(into)]
    pub tag_ids: Option<String>,
    /// Defaults to the current time.
    pub date_added: Option<NaiveDateTime>,
    #[builder(into)]
    pub signup_ip_address: Option<String>,
    pub referral_affiliate_id: Option<i64>,
    #[builder(into)]
    pub referral_notes: Option<String>,
    #[builder(into)]
    pub notes: Option<String>,
}

// ---- track ----

/// Parameters for `track.asmx/UpdateConversion`.
///
/// One of `conversion_id`, `request_session_id`, or `transaction_id` is
/// required; `payout`/`add_to_existing_payout` and
/// `received`/`received_option` are all-or-none pairs; `custom_date` is
/// required when `effective_date_option` is `custom`.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct UpdateConversionRequest {
    pub offer_id: i64,
    pub conversion_id: Option<i64>,
    pub request_session_id: Option<i64>,
    #[builder(into)]
    pub transaction_id: Option<String>,
    pub payout: Option<Decimal>,
    pub add_to_existing_payout: Option<bool>,
    pub received: Option<Decimal>,
    /// `add_to_existing_received`, `change`, or `no_change`.
    #[builder(into)]
    pub received_option: Option<String>,
    /// Defaults to `no_change`.
    #[builder(into)]
    pub disposition_type: Option<String>,
    pub disposition_id: Option<i64>,
    pub update_revshare_payout: Option<bool>,
    /// `conversion_date`, `current_date`, or `custom`; defaults to
    /// `conversion_date`.
    #[builder(into)]
    pub effective_date_option: Option<String>,
    pub custom_date: Option<NaiveDateTime>,
    #[builder(into)]
    pub note_to_append: Option<String>,
    /// Defaults to `ignore`.
    #[builder(into)]
    pub disallow_on_billing_status: Option<String>,
}

impl UpdateConversionRequest {
    pub(crate) fn validate(&self) -> Result<()> {
        must_have_one(&[
            ("conversion_id", self.conversion_id.is_some()),
            ("request_session_id", self.request_session_id.is_some()),
            ("transaction_id", self.transaction_id.is_some()),
        ])?;
        if_one_then_all(&[
            ("payout", self.payout.is_some()),
            (
                "add_to_existing_payout",
                self.add_to_existing_payout.is_some(),
            ),
        ])?;
        if_one_then_all(&[
            ("received", self.received.is_some()),
            ("received_option", self.received_option.is_some()),
        ])?;
        if self.effective_date_option.as_deref() == Some("custom") {
            require(&[("custom_date", self.custom_date.is_some())])?;
        }
        Ok(())
    }
}
