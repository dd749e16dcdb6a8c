//! Client for the admin (network operator) API.

use bon::Builder;
use chrono::{NaiveDateTime, Utc};
use reqwest::Client as ReqwestClient;
use rust_decimal::Decimal;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use super::types::request::{
    AddAdvertiserRequest, AddAffiliateRequest, AddBlacklistRequest, AddBuyerContractRequest,
    AddBuyerRequest, AddCampaignRequest, AddContactRequest, AddCreativeRequest, AddOfferRequest,
    BrandAdvertiserSummaryRequest, CampaignSummaryRequest, ClicksRequest, CountrySummaryRequest,
    CreativeSummaryRequest, DailySummaryRequest, EditAdvertiserRequest, EditAffiliateRequest,
    EditBuyerContractRequest, EditBuyerRequest, EditCampaignRequest, EditCapsRequest,
    EditCreativeRequest, EditOfferRequest, EventConversionChangesRequest,
    EventsConversionsRequest, ExportAdvertiserBillsRequest, ExportAdvertisersRequest,
    ExportAffiliateBillsRequest, ExportAffiliatesRequest, ExportBlacklistsRequest,
    ExportBuyerContractsRequest, ExportCampaignsRequest, ExportCreativesRequest,
    ExportOffersRequest, ExportPixelLogsRequest, ExportSchedulesRequest, LeadsByAffiliateRequest,
    LeadsByBuyerRequest, LiteClicksAdvertiserSummaryRequest, LiteClicksAffiliateSummaryRequest,
    LiteClicksCampaignSummaryRequest, LiteClicksCountrySummaryRequest,
    LiteClicksDailySummaryRequest, LiteClicksOfferSummaryRequest, LiteClicksSubIdSummaryRequest,
    OrderDetailsRequest, SignupAdvertiserRequest, SignupAffiliateRequest, SiteOfferSummaryRequest,
    SourceAffiliateSummaryRequest, SubIdSummaryRequest, UpdateConversionRequest,
};
use super::types::response::{
    AdvertisersExportResponse, AffiliatesExportResponse, BrandAdvertiser,
    CampaignsExportResponse, OffersExportResponse,
};
use crate::Result;
use crate::error::{Error, MissingApiKey};
use crate::params::Params;
use crate::types::{ApiResponse, ModificationType, ResponseFormat, Setting, Toggle};

/// Far-future timestamp the vendor treats as "leave this date untouched"
/// when paired with a `do_not_change` modification type.
const UNCHANGED_DATE: &str = "2067-10-20 13:31:59.7";

/// Out-of-domain amount the vendor treats as "leave this amount untouched"
/// when paired with a `do_not_change` modification type.
const UNCHANGED_AMOUNT: &str = "9999.1234";

/// Page size used by [`Client::affiliate_ids`].
const AFFILIATE_PAGE_SIZE: i64 = 2500;

fn push_decimal_or(params: &mut Params, key: &'static str, value: Option<Decimal>, fallback: i64) {
    match value {
        Some(amount) => params.push_decimal(key, amount),
        None => params.push(key, fallback),
    }
}

/// Pushes a date plus its paired modification-type flag, using the
/// far-future marker when the caller did not supply a value.
fn push_unchangeable_date(
    params: &mut Params,
    key: &'static str,
    modification_key: &'static str,
    value: Option<NaiveDateTime>,
) {
    match value {
        Some(date) => {
            params.push_date(key, date);
            params.push(modification_key, ModificationType::Change.as_str());
        }
        None => {
            params.push(key, UNCHANGED_DATE);
            params.push(modification_key, ModificationType::DoNotChange.as_str());
        }
    }
}

/// Connection configuration for the admin API.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Hostname of the network's admin console, e.g. `admin.example.com`.
    #[builder(into)]
    pub admin_domain: String,
    /// The network API key. May be omitted and obtained later with
    /// [`Client::set_api_key`].
    #[builder(into)]
    pub api_key: Option<SecretString>,
    #[builder(default)]
    pub response_format: ResponseFormat,
    #[builder(default = true)]
    pub use_https: bool,
}

/// HTTP client for the admin API.
///
/// One method per vendor operation. Operations that require arguments the
/// type system cannot express (any-of groups, all-or-none groups, id
/// ranges) validate them locally and fail before any network call. See the
/// [module docs](super) for the endpoint groups.
#[derive(Debug, Clone)]
pub struct Client {
    host: Url,
    api_key: Option<SecretString>,
    response_format: ResponseFormat,
    client: ReqwestClient,
}

impl Client {
    /// Creates a new admin API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain does not form a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            host: crate::host_url(&config.admin_domain, config.use_https)?,
            api_key: config.api_key,
            response_format: config.response_format,
            client: crate::http_client()?,
        })
    }

    /// The currently configured API key, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&SecretString> {
        self.api_key.as_ref()
    }

    fn key(&self) -> Result<&str> {
        Ok(self
            .api_key
            .as_ref()
            .ok_or(MissingApiKey)?
            .expose_secret())
    }

    /// Every admin operation leads with the network API key; building the
    /// prefix is also where the missing-key check happens, before any
    /// network I/O.
    fn base_params(&self) -> Result<Params> {
        let mut params = Params::new();
        params.push("api_key", self.key()?);
        Ok(params)
    }

    async fn call(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        let url = self.host.join(path)?;
        crate::call(&self.client, url, params, self.response_format.is_json()).await
    }

    /// The read half of read-modify-write edits always needs the decoded
    /// JSON shape, regardless of the configured response format.
    async fn call_forced_json(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        let url = self.host.join(path)?;
        crate::call(&self.client, url, params, true).await
    }

    /// Exchanges admin credentials for an API key and stores it on the
    /// client. An empty key in the response clears the stored key.
    pub async fn set_api_key(&mut self, username: &str, password: &str) -> Result<()> {
        let url = self.host.join("api/1/get.asmx/GetAPIKey")?;
        let mut params = Params::new();
        params.push("username", username);
        params.push("password", password);

        let data = crate::json_call(&self.client, url, &params).await?;
        self.api_key = match data.as_str() {
            Some("") | None => None,
            Some(api_key) => Some(SecretString::from(api_key)),
        };
        Ok(())
    }

    // ---- accounting ----

    pub async fn export_advertiser_bills(
        &self,
        request: &ExportAdvertiserBillsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push(
            "billing_cycle",
            request.billing_cycle.as_deref().unwrap_or("all"),
        );
        params.push_date(
            "billing_period_start_date",
            request.billing_period_start_date,
        );
        params.push_date("billing_period_end_date", request.billing_period_end_date);

        self.call("api/1/accounting.asmx/ExportAdvertiserBills", &params)
            .await
    }

    pub async fn export_affiliate_bills(
        &self,
        request: &ExportAffiliateBillsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push(
            "billing_cycle",
            request.billing_cycle.as_deref().unwrap_or("all"),
        );
        params.push_date(
            "billing_period_start_date",
            request.billing_period_start_date,
        );
        params.push_date("billing_period_end_date", request.billing_period_end_date);
        params.push_flag("paid_only", request.paid_only.unwrap_or(false));
        params.push("payment_type_id", request.payment_type_id.unwrap_or(0));

        self.call("api/1/accounting.asmx/ExportAffiliateBills", &params)
            .await
    }

    // ---- add/edit ----

    pub async fn add_advertiser(&self, request: &AddAdvertiserRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("advertiser_id", 0);
        params.push("advertiser_name", request.advertiser_name.as_str());
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(1));
        params.push_flag("online_signup", request.online_signup.unwrap_or(false));
        params.push(
            "signup_ip_address",
            request.signup_ip_address.as_deref().unwrap_or(""),
        );
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(3));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push("notes", request.notes.as_deref().unwrap_or(""));
        params.push("tags", request.tags.as_deref().unwrap_or(""));

        self.call("api/1/addedit.asmx/Advertiser", &params).await
    }

    pub async fn add_affiliate(&self, request: &AddAffiliateRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("affiliate_id", 0);
        params.push("affiliate_name", request.affiliate_name.as_str());
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(1));
        params.push(
            "inactive_reason_id",
            request.inactive_reason_id.unwrap_or(0),
        );
        params.push("affiliate_tier_id", request.affiliate_tier_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push_flag("hide_offers", request.hide_offers.unwrap_or(false));
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("tax_class", request.tax_class.as_deref().unwrap_or(""));
        params.push("ssn_tax_id", request.ssn_tax_id.as_deref().unwrap_or(""));
        params.push_flag(
            "vat_tax_required",
            request.vat_tax_required.unwrap_or(false),
        );
        params.push("swift_iban", request.swift_iban.as_deref().unwrap_or(""));
        params.push("payment_to", request.payment_to.unwrap_or(0));
        push_decimal_or(&mut params, "payment_fee", request.payment_fee, -1);
        push_decimal_or(
            &mut params,
            "payment_min_threshold",
            request.payment_min_threshold,
            -1,
        );
        params.push("currency_id", request.currency_id.unwrap_or(0));
        params.push(
            "payment_setting_id",
            request.payment_setting_id.unwrap_or(1),
        );
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(3));
        params.push("payment_type_id", request.payment_type_id.unwrap_or(1));
        params.push(
            "payment_type_info",
            request.payment_type_info.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push(
            "media_type_ids",
            request.media_type_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "price_format_ids",
            request.price_format_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "vertical_category_ids",
            request.vertical_category_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "country_codes",
            request.country_codes.as_deref().unwrap_or(""),
        );
        params.push("tags", request.tags.as_deref().unwrap_or(""));
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_delay_ms",
            request.postback_delay_ms.unwrap_or(-1),
        );
        params.push_flag(
            "fire_global_pixel",
            request.fire_global_pixel.unwrap_or(true),
        );
        params.push_date(
            "date_added",
            request
                .date_added
                .unwrap_or_else(|| Utc::now().naive_utc()),
        );
        params.push_flag("online_signup", request.online_signup.unwrap_or(false));
        params.push(
            "signup_ip_address",
            request.signup_ip_address.as_deref().unwrap_or(""),
        );
        params.push(
            "referral_affiliate_id",
            request.referral_affiliate_id.unwrap_or(0),
        );
        params.push(
            "referral_notes",
            request.referral_notes.as_deref().unwrap_or(""),
        );
        params.push_flag(
            "terms_and_conditions_agreed",
            request.terms_and_conditions_agreed.unwrap_or(true),
        );
        params.push("notes", request.notes.as_deref().unwrap_or(""));

        self.call("api/2/addedit.asmx/Affiliate", &params).await
    }

    /// Blacklists an affiliate (or one of its sub ids) from an advertiser
    /// or offer.
    pub async fn add_blacklist(&self, request: &AddBlacklistRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("blacklist_id", 0);
        params.push("affiliate_id", request.affiliate_id);
        params.push("sub_id", request.sub_id.as_deref().unwrap_or(""));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("blacklist_reason_id", request.blacklist_reason_id);
        params.push("redirect_type", request.redirect_type);
        params.push_date(
            "blacklist_date",
            request
                .blacklist_date
                .unwrap_or_else(|| Utc::now().naive_utc()),
        );
        params.push(
            "blacklist_date_modification_type",
            ModificationType::Change.as_str(),
        );

        self.call("api/1/addedit.asmx/Blacklist", &params).await
    }

    pub async fn add_buyer(&self, request: &AddBuyerRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("buyer_id", 0);
        params.push("buyer_name", request.buyer_name.as_str());
        params.push("account_status_id", request.account_status_id.unwrap_or(1));
        params.push("account_manager_id", request.account_manager_id);
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(3));
        params.push(
            "credit_type",
            request.credit_type.as_deref().unwrap_or("unlimited"),
        );
        push_decimal_or(&mut params, "credit_limit", request.credit_limit, -1);

        self.call("api/1/addedit.asmx/Buyer", &params).await
    }

    pub async fn add_buyer_contract(
        &self,
        request: &AddBuyerContractRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("buyer_contract_id", 0);
        params.push("buyer_id", request.buyer_id);
        params.push("vertical_id", request.vertical_id);
        params.push(
            "buyer_contract_name",
            request.buyer_contract_name.as_str(),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(1));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push(
            "replace_returns",
            request.replace_returns.unwrap_or(Toggle::Off).as_str(),
        );
        params.push(
            "replacements_non_returnable",
            request
                .replacements_non_returnable
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "max_return_age_days",
            request.max_return_age_days.unwrap_or(30),
        );
        params.push(
            "buy_upsells",
            request.buy_upsells.unwrap_or(Toggle::Off).as_str(),
        );
        params.push(
            "vintage_leads",
            request.vintage_leads.unwrap_or(Toggle::Off).as_str(),
        );
        params.push(
            "min_lead_age_minutes",
            request.min_lead_age_minutes.unwrap_or(0),
        );
        params.push(
            "max_lead_age_minutes",
            request.max_lead_age_minutes.unwrap_or(7200),
        );
        params.push(
            "posting_wait_seconds",
            request.posting_wait_seconds.unwrap_or(0),
        );
        params.push(
            "default_confirmation_page_link",
            request
                .default_confirmation_page_link
                .as_deref()
                .unwrap_or(""),
        );
        params.push("max_post_errors", request.max_post_errors.unwrap_or(10));
        params.push(
            "send_alert_only",
            request.send_alert_only.unwrap_or(Toggle::Off).as_str(),
        );
        params.push("rank", request.rank.unwrap_or(0));
        params.push("email_template_id", request.email_template_id.unwrap_or(0));
        params.push(
            "portal_template_id",
            request.portal_template_id.unwrap_or(0),
        );

        self.call("api/1/addedit.asmx/BuyerContract", &params).await
    }

    /// Creates a campaign for an affiliate on an offer or offer contract.
    pub async fn add_campaign(&self, request: &AddCampaignRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("campaign_id", 0);
        params.push("affiliate_id", request.affiliate_id);
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("offer_contract_id", request.offer_contract_id.unwrap_or(0));
        params.push("media_type_id", request.media_type_id);
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(1));
        params.push(
            "display_link_type_id",
            request.display_link_type_id.unwrap_or(1),
        );
        push_unchangeable_date(
            &mut params,
            "expiration_date",
            "expiration_date_modification_type",
            request.expiration_date,
        );
        params.push("currency_id", request.currency_id.unwrap_or(0));
        // Ignored by the vendor when creating a campaign, but the parameter
        // must be present.
        params.push("use_offer_contract_payout", Setting::NoChange.as_str());
        params.push_decimal("payout", request.payout);
        params.push("payout_update_option", ModificationType::Change.as_str());
        params.push("paid", request.paid.unwrap_or(Toggle::On).as_str());
        params.push(
            "static_suppression",
            request.static_suppression.unwrap_or(-1),
        );
        params.push(
            "paid_redirects",
            request.paid_redirects.unwrap_or(Toggle::On).as_str(),
        );
        params.push(
            "paid_upsells",
            request.paid_upsells.unwrap_or(Toggle::On).as_str(),
        );
        params.push("review", request.review.unwrap_or(Toggle::Off).as_str());
        params.push(
            "auto_disposition_delay_hours",
            request.auto_disposition_delay_hours.unwrap_or(-1),
        );
        params.push(
            "redirect_offer_contract_id",
            request.redirect_offer_contract_id.unwrap_or(0),
        );
        params.push(
            "redirect_404",
            request.redirect_404.unwrap_or(Toggle::Off).as_str(),
        );
        params.push(
            "clear_session_on_conversion",
            request
                .clear_session_on_conversion
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_delay_ms",
            request.postback_delay_ms.unwrap_or(-1),
        );
        params.push(
            "unique_key_hash_type",
            request.unique_key_hash_type.as_deref().unwrap_or("none"),
        );
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push("test_link", request.test_link.as_deref().unwrap_or(""));
        params.push(
            "redirect_domain",
            request.redirect_domain.as_deref().unwrap_or(""),
        );

        self.call("api/3/addedit.asmx/Campaign", &params).await
    }

    /// Adds a creative exception to a campaign. Whether the exception
    /// allows or blocks is decided by the campaign's `original` flag, read
    /// from a campaign export first.
    pub async fn add_campaign_creative_exception(
        &self,
        campaign_id: i64,
        creative_id: i64,
    ) -> Result<ApiResponse> {
        let exception_type = self.campaign_exception_mode(campaign_id).await?;

        let mut params = self.base_params()?;
        params.push("campaign_id", campaign_id);
        params.push("creative_id", creative_id);
        params.push("creative_exception_type", exception_type);
        params.push("creative_modification_type", "add");

        self.call("api/1/addedit.asmx/CampaignCreativeExceptions", &params)
            .await
    }

    /// Adds a sub id exception to a campaign; see
    /// [`Self::add_campaign_creative_exception`] for the allow/block rule.
    pub async fn add_campaign_subid_exception(
        &self,
        campaign_id: i64,
        sub_id: &str,
    ) -> Result<ApiResponse> {
        let exception_type = self.campaign_exception_mode(campaign_id).await?;

        let mut params = self.base_params()?;
        params.push("campaign_id", campaign_id);
        params.push("sub_id", sub_id);
        params.push("sub_id_exception_type", exception_type);
        params.push("sub_id_modification_type", "add");

        self.call("api/1/addedit.asmx/CampaignSubIdExceptions", &params)
            .await
    }

    pub async fn add_contact(&self, request: &AddContactRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("entity_type", request.entity_type.as_str());
        params.push("entity_id", request.entity_id);
        params.push("contact_id", 0);
        params.push("role_id", request.role_id);
        params.push(
            "include_in_mass_emails",
            request
                .include_in_mass_emails
                .unwrap_or(Toggle::On)
                .as_str(),
        );
        params.push(
            "contact_first_name",
            request.contact_first_name.as_str(),
        );
        params.push(
            "contact_middle_name",
            request.contact_middle_name.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_last_name",
            request.contact_last_name.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_email_address",
            request.contact_email_address.as_str(),
        );
        params.push("contact_password", "");
        params.push(
            "contact_title",
            request.contact_title.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_department_id",
            request.contact_department_id.unwrap_or(-1),
        );
        params.push(
            "contact_phone_work",
            request.contact_phone_work.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_phone_cell",
            request.contact_phone_cell.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_phone_fax",
            request.contact_phone_fax.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_service",
            request.contact_im_service.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_name",
            request.contact_im_name.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_timezone",
            request.contact_timezone.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_language_id",
            request.contact_language_id.unwrap_or(-1),
        );

        self.call("api/3/addedit.asmx/Contact", &params).await
    }

    pub async fn add_creative(&self, request: &AddCreativeRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("creative_id", 0);
        params.push("offer_id", request.offer_id);
        params.push("creative_name", request.creative_name.as_str());
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("creative_type_id", request.creative_type_id);
        params.push(
            "creative_status_id",
            request.creative_status_id.unwrap_or(1),
        );
        params.push("width", request.width.unwrap_or(-1));
        params.push("height", request.height.unwrap_or(-1));
        params.push("offer_link", request.offer_link.as_deref().unwrap_or(""));
        params.push_flag(
            "allow_link_override",
            request.allow_link_override.unwrap_or(false),
        );
        params.push("notes", request.notes.as_deref().unwrap_or(""));

        self.call("api/1/addedit.asmx/Creative", &params).await
    }

    pub async fn add_creative_files(
        &self,
        creative_id: i64,
        creative_file_import_url: &str,
        is_preview_file: Option<bool>,
        replace_all_files: Option<bool>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("creative_id", creative_id);
        params.push("creative_file_id", 0);
        params.push("creative_file_import_url", creative_file_import_url);
        params.push_flag("is_preview_file", is_preview_file.unwrap_or(false));
        params.push_flag("replace_all_files", replace_all_files.unwrap_or(false));

        self.call("api/1/addedit.asmx/CreativeFiles", &params).await
    }

    pub async fn add_offer(&self, request: &AddOfferRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("offer_id", 0);
        params.push("advertiser_id", request.advertiser_id);
        params.push("vertical_id", request.vertical_id);
        params.push("offer_name", request.offer_name.as_str());
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("hidden", request.hidden.unwrap_or(Toggle::Off).as_str());
        params.push("offer_status_id", request.offer_status_id);
        params.push("offer_type_id", request.offer_type_id);
        params.push("currency_id", request.currency_id.unwrap_or(0));
        params.push("ssl", request.ssl.unwrap_or(Toggle::On).as_str());
        params.push(
            "click_cookie_days",
            request.click_cookie_days.unwrap_or(30),
        );
        params.push(
            "impression_cookie_days",
            request.impression_cookie_days.unwrap_or(30),
        );
        params.push(
            "auto_disposition_type",
            request.auto_disposition_type.as_deref().unwrap_or("none"),
        );
        params.push(
            "auto_disposition_delay_hours",
            request.auto_disposition_delay_hours.unwrap_or(-1),
        );
        params.push(
            "redirect_offer_contract_id",
            request.redirect_offer_contract_id.unwrap_or(0),
        );
        params.push(
            "redirect_404",
            request.redirect_404.unwrap_or(Toggle::Off).as_str(),
        );
        params.push(
            "redirect_domain",
            request.redirect_domain.as_deref().unwrap_or(""),
        );
        params.push(
            "conversions_from_whitelist_only",
            request
                .conversions_from_whitelist_only
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "track_search_terms_from_non_supported_search_engines",
            request
                .track_search_terms_from_non_supported_search_engines
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "enable_view_thru_conversions",
            request
                .enable_view_thru_conversions
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "click_trumps_impression",
            request
                .click_trumps_impression
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "disable_click_deduplication",
            request
                .disable_click_deduplication
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push("last_touch", request.last_touch.as_str());
        params.push(
            "session_regeneration_seconds",
            request.session_regeneration_seconds.unwrap_or(-1),
        );
        params.push(
            "session_regeneration_type_id",
            request.session_regeneration_type_id.unwrap_or(0),
        );
        params.push(
            "enable_transaction_id_deduplication",
            request
                .enable_transaction_id_deduplication
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "cookie_domain",
            request.cookie_domain.as_deref().unwrap_or(""),
        );
        params.push(
            "postbacks_only",
            request.postbacks_only.unwrap_or(Toggle::Off).as_str(),
        );
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_url_ms_delay",
            request.postback_url_ms_delay.unwrap_or(-1),
        );
        params.push(
            "fire_global_pixel",
            request.fire_global_pixel.unwrap_or(Toggle::On).as_str(),
        );
        params.push(
            "fire_pixel_on_non_paid_conversions",
            request
                .fire_pixel_on_non_paid_conversions
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "static_suppression",
            request.static_suppression.unwrap_or(-1),
        );
        params.push(
            "conversion_cap_behavior",
            request.conversion_cap_behavior.unwrap_or(0),
        );
        params.push(
            "conversion_behavior_on_redirect",
            request.conversion_behavior_on_redirect.unwrap_or(0),
        );
        push_unchangeable_date(
            &mut params,
            "expiration_date",
            "expiration_date_modification_type",
            request.expiration_date,
        );
        params.push(
            "offer_contract_name",
            request.offer_contract_name.as_deref().unwrap_or(""),
        );
        params.push(
            "offer_contract_hidden",
            request
                .offer_contract_hidden
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push("price_format_id", request.price_format_id);
        params.push(
            "payout_modification_type",
            ModificationType::Change.as_str(),
        );
        params.push_decimal("payout", request.payout);
        params.push(
            "received_modification_type",
            ModificationType::Change.as_str(),
        );
        params.push_decimal("received", request.received);
        params.push(
            "received_percentage",
            request
                .received_percentage
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push("offer_link", request.offer_link.as_str());
        params.push(
            "thankyou_link",
            request.thankyou_link.as_deref().unwrap_or(""),
        );
        params.push(
            "preview_link",
            request.preview_link.as_deref().unwrap_or(""),
        );
        params.push(
            "thumbnail_file_import_url",
            request.thumbnail_file_import_url.as_deref().unwrap_or(""),
        );
        params.push(
            "offer_description",
            request.offer_description.as_deref().unwrap_or(""),
        );
        params.push(
            "restrictions",
            request.restrictions.as_deref().unwrap_or(""),
        );
        params.push(
            "advertiser_extended_terms",
            request.advertiser_extended_terms.as_deref().unwrap_or(""),
        );
        params.push(
            "testing_instructions",
            request.testing_instructions.as_deref().unwrap_or(""),
        );
        params.push(
            "tags_modification_type",
            request.tags_modification_type.unwrap_or_default().as_str(),
        );
        params.push("tags", request.tags.as_deref().unwrap_or(""));
        params.push(
            "allow_affiliates_to_create_creatives",
            request
                .allow_affiliates_to_create_creatives
                .unwrap_or(Toggle::Off)
                .as_str(),
        );
        params.push(
            "unsubscribe_link",
            request.unsubscribe_link.as_deref().unwrap_or(""),
        );
        params.push("from_lines", request.from_lines.as_deref().unwrap_or(""));
        params.push(
            "subject_lines",
            request.subject_lines.as_deref().unwrap_or(""),
        );
        params.push(
            "allowed_media_type_modification_type",
            request
                .allowed_media_type_modification_type
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "allowed_media_type_ids",
            request.allowed_media_type_ids.as_deref().unwrap_or(""),
        );

        self.call("api/5/addedit.asmx/Offer", &params).await
    }

    /// Edits an advertiser. Reads the current notes first so that the
    /// supplied `notes` are appended rather than overwritten.
    pub async fn edit_advertiser(&self, request: &EditAdvertiserRequest) -> Result<ApiResponse> {
        let export = self.fetch_advertisers(request.advertiser_id).await?;
        let current_notes = export
            .advertisers
            .first()
            .and_then(|advertiser| advertiser.notes.clone())
            .unwrap_or_default();

        let mut params = self.base_params()?;
        params.push("advertiser_id", request.advertiser_id);
        params.push(
            "advertiser_name",
            request.advertiser_name.as_deref().unwrap_or(""),
        );
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        // Not editable after creation; the vendor still requires the
        // parameters to be present.
        params.push_flag("online_signup", false);
        params.push("signup_ip_address", "");
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push(
            "notes",
            match request.notes.as_deref() {
                Some(notes) => format!("{current_notes}\n{notes}"),
                None => current_notes,
            },
        );
        params.push("tags", request.tags.as_deref().unwrap_or(""));

        self.call("api/1/addedit.asmx/Advertiser", &params).await
    }

    /// Edits an affiliate. The platform's edit endpoint overwrites every
    /// field, so the current `hide_offers`, VAT, payment-to and global
    /// pixel settings (and the notes, which are appended to) are read from
    /// an export first.
    pub async fn edit_affiliate(&self, request: &EditAffiliateRequest) -> Result<ApiResponse> {
        let export = self
            .fetch_affiliates(
                &ExportAffiliatesRequest::builder()
                    .affiliate_id(request.affiliate_id)
                    .build(),
            )
            .await?;
        let current = export.affiliates.first();
        let current_hide_offers = current.and_then(|a| a.hide_offers).unwrap_or(false);
        let current_vat_required = current.and_then(|a| a.pay_vat).unwrap_or(false);
        let current_payment_to = current
            .and_then(|a| a.payment_to.as_deref())
            .map_or(0, |payee| i64::from(payee != "Company"));
        let current_fire_global = current.and_then(|a| a.fire_global_pixel).unwrap_or(false);
        let current_notes = current
            .and_then(|a| a.notes.clone())
            .unwrap_or_default();

        let mut params = self.base_params()?;
        params.push("affiliate_id", request.affiliate_id);
        params.push(
            "affiliate_name",
            request.affiliate_name.as_deref().unwrap_or(""),
        );
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        params.push(
            "inactive_reason_id",
            request.inactive_reason_id.unwrap_or(0),
        );
        params.push("affiliate_tier_id", request.affiliate_tier_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push_flag(
            "hide_offers",
            request.hide_offers.unwrap_or(current_hide_offers),
        );
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("tax_class", request.tax_class.as_deref().unwrap_or(""));
        params.push("ssn_tax_id", request.ssn_tax_id.as_deref().unwrap_or(""));
        params.push_flag(
            "vat_tax_required",
            request.vat_tax_required.unwrap_or(current_vat_required),
        );
        params.push("swift_iban", request.swift_iban.as_deref().unwrap_or(""));
        params.push(
            "payment_to",
            request.payment_to.unwrap_or(current_payment_to),
        );
        push_decimal_or(&mut params, "payment_fee", request.payment_fee, -1);
        push_decimal_or(
            &mut params,
            "payment_min_threshold",
            request.payment_min_threshold,
            -1,
        );
        params.push("currency_id", request.currency_id.unwrap_or(0));
        params.push(
            "payment_setting_id",
            request.payment_setting_id.unwrap_or(0),
        );
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(0));
        params.push("payment_type_id", request.payment_type_id.unwrap_or(0));
        params.push(
            "payment_type_info",
            request.payment_type_info.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push(
            "media_type_ids",
            request.media_type_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "price_format_ids",
            request.price_format_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "vertical_category_ids",
            request.vertical_category_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "country_codes",
            request.country_codes.as_deref().unwrap_or(""),
        );
        params.push("tags", request.tags.as_deref().unwrap_or(""));
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_delay_ms",
            request.postback_delay_ms.unwrap_or(-1),
        );
        params.push_flag(
            "fire_global_pixel",
            request.fire_global_pixel.unwrap_or(current_fire_global),
        );
        // Not editable after creation; placeholder values keep the vendor's
        // parameter list complete.
        params.push("date_added", "2017-1-1");
        params.push_flag("online_signup", false);
        params.push("signup_ip_address", "");
        params.push(
            "referral_affiliate_id",
            request.referral_affiliate_id.unwrap_or(0),
        );
        params.push(
            "referral_notes",
            request.referral_notes.as_deref().unwrap_or(""),
        );
        params.push_flag("terms_and_conditions_agreed", false);
        params.push(
            "notes",
            match request.notes.as_deref() {
                Some(notes) => format!("{current_notes}\n{notes}"),
                None => current_notes,
            },
        );

        self.call("api/2/addedit.asmx/Affiliate", &params).await
    }

    pub async fn edit_buyer(&self, request: &EditBuyerRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("buyer_id", request.buyer_id);
        params.push("buyer_name", request.buyer_name.as_deref().unwrap_or(""));
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push(
            "address_street",
            request.address_street.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push(
            "address_city",
            request.address_city.as_deref().unwrap_or(""),
        );
        params.push(
            "address_state",
            request.address_state.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );
        params.push(
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(0));
        params.push(
            "credit_type",
            request.credit_type.as_deref().unwrap_or("no_change"),
        );
        push_decimal_or(&mut params, "credit_limit", request.credit_limit, -1);

        self.call("api/1/addedit.asmx/Buyer", &params).await
    }

    pub async fn edit_buyer_contract(
        &self,
        request: &EditBuyerContractRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("buyer_contract_id", request.buyer_contract_id);
        params.push("buyer_id", 0);
        params.push("vertical_id", 0);
        params.push(
            "buyer_contract_name",
            request.buyer_contract_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push(
            "replace_returns",
            request.replace_returns.unwrap_or_default().as_str(),
        );
        params.push(
            "replacements_non_returnable",
            request
                .replacements_non_returnable
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "max_return_age_days",
            request.max_return_age_days.unwrap_or(-1),
        );
        params.push(
            "buy_upsells",
            request.buy_upsells.unwrap_or_default().as_str(),
        );
        params.push(
            "vintage_leads",
            request.vintage_leads.unwrap_or_default().as_str(),
        );
        params.push(
            "min_lead_age_minutes",
            request.min_lead_age_minutes.unwrap_or(-1),
        );
        params.push(
            "max_lead_age_minutes",
            request.max_lead_age_minutes.unwrap_or(-1),
        );
        params.push(
            "posting_wait_seconds",
            request.posting_wait_seconds.unwrap_or(-1),
        );
        params.push(
            "default_confirmation_page_link",
            request
                .default_confirmation_page_link
                .as_deref()
                .unwrap_or(""),
        );
        params.push("max_post_errors", request.max_post_errors.unwrap_or(-1));
        params.push(
            "send_alert_only",
            request.send_alert_only.unwrap_or_default().as_str(),
        );
        params.push("rank", request.rank.unwrap_or(-1));
        params.push("email_template_id", request.email_template_id.unwrap_or(0));
        params.push(
            "portal_template_id",
            request.portal_template_id.unwrap_or(0),
        );

        self.call("api/1/addedit.asmx/BuyerContract", &params).await
    }

    /// Edits a campaign. An unset `unique_key_hash_type` keeps the hash
    /// currently configured on the campaign pixel, read from an export
    /// first.
    pub async fn edit_campaign(&self, request: &EditCampaignRequest) -> Result<ApiResponse> {
        request.validate()?;

        let export = self
            .fetch_campaigns(
                &ExportCampaignsRequest::builder()
                    .campaign_id(request.campaign_id)
                    .build(),
            )
            .await?;
        let current_hash = export
            .campaigns
            .first()
            .and_then(|campaign| campaign.pixel_info.as_ref())
            .and_then(|pixel_info| pixel_info.hash_type.as_ref())
            .map_or_else(
                || "none".to_owned(),
                |hash_type| hash_type.hash_type_name.to_lowercase().replace(' ', "_"),
            );

        let mut params = self.base_params()?;
        params.push("campaign_id", request.campaign_id);
        params.push("affiliate_id", 0);
        params.push("offer_id", 0);
        params.push("offer_contract_id", request.offer_contract_id.unwrap_or(0));
        params.push("media_type_id", request.media_type_id.unwrap_or(0));
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        params.push(
            "display_link_type_id",
            request.display_link_type_id.unwrap_or(0),
        );
        push_unchangeable_date(
            &mut params,
            "expiration_date",
            "expiration_date_modification_type",
            request.expiration_date,
        );
        params.push("currency_id", 0);
        match request.payout {
            Some(payout) => params.push_decimal("payout", payout),
            None => params.push("payout", UNCHANGED_AMOUNT),
        }
        let use_offer_contract_payout = if request.payout.is_some() {
            // An explicit payout overrides any contract-payout preference.
            Setting::Off
        } else {
            request.use_offer_contract_payout.unwrap_or_default()
        };
        params.push("use_offer_contract_payout", use_offer_contract_payout.as_str());
        let payout_update = if request.payout.is_some()
            || request.use_offer_contract_payout.unwrap_or_default() != Setting::NoChange
        {
            ModificationType::Change
        } else {
            ModificationType::DoNotChange
        };
        params.push("payout_update_option", payout_update.as_str());
        params.push("paid", request.paid.unwrap_or_default().as_str());
        params.push(
            "static_suppression",
            request.static_suppression.unwrap_or(-1),
        );
        params.push(
            "paid_redirects",
            request.paid_redirects.unwrap_or_default().as_str(),
        );
        params.push(
            "paid_upsells",
            request.paid_upsells.unwrap_or_default().as_str(),
        );
        params.push("review", request.review.unwrap_or_default().as_str());
        params.push(
            "auto_disposition_delay_hours",
            request.auto_disposition_delay_hours.unwrap_or(-1),
        );
        params.push(
            "redirect_offer_contract_id",
            request.redirect_offer_contract_id.unwrap_or(0),
        );
        params.push(
            "redirect_404",
            request.redirect_404.unwrap_or_default().as_str(),
        );
        params.push(
            "clear_session_on_conversion",
            request
                .clear_session_on_conversion
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_delay_ms",
            request.postback_delay_ms.unwrap_or(-1),
        );
        params.push(
            "unique_key_hash_type",
            request
                .unique_key_hash_type
                .as_deref()
                .unwrap_or(&current_hash),
        );
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push("test_link", request.test_link.as_deref().unwrap_or(""));
        params.push(
            "redirect_domain",
            request.redirect_domain.as_deref().unwrap_or(""),
        );

        self.call("api/3/addedit.asmx/Campaign", &params).await
    }

    /// Sets a cap on an offer, offer contract, or campaign.
    pub async fn edit_caps(&self, request: &EditCapsRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("offer_contract_id", request.offer_contract_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("cap_type_id", request.cap_type_id);
        params.push("cap_interval_id", request.cap_interval_id);
        params.push("cap_amount", request.cap_amount);
        match request.cap_start {
            Some(cap_start) => params.push_date("cap_start", cap_start),
            None => params.push("cap_start", UNCHANGED_DATE),
        }
        params.push_flag("send_alert_only", request.send_alert_only);

        self.call("api/1/addedit.asmx/Caps", &params).await
    }

    pub async fn edit_creative(&self, request: &EditCreativeRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("creative_id", request.creative_id);
        params.push("offer_id", 0);
        params.push(
            "creative_name",
            request.creative_name.as_deref().unwrap_or(""),
        );
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("creative_type_id", request.creative_type_id.unwrap_or(0));
        params.push(
            "creative_status_id",
            request.creative_status_id.unwrap_or(0),
        );
        params.push("width", request.width.unwrap_or(-2));
        params.push("height", request.height.unwrap_or(-2));
        params.push("offer_link", request.offer_link.as_deref().unwrap_or(""));
        params.push_flag("allow_link_override", request.allow_link_override);
        params.push("notes", request.notes.as_deref().unwrap_or(""));

        self.call("api/1/addedit.asmx/Creative", &params).await
    }

    pub async fn edit_offer(&self, request: &EditOfferRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("offer_id", request.offer_id);
        params.push("advertiser_id", 0);
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("offer_name", request.offer_name.as_deref().unwrap_or(""));
        params.push(
            "third_party_name",
            request.third_party_name.as_deref().unwrap_or(""),
        );
        params.push("hidden", request.hidden.unwrap_or_default().as_str());
        params.push("offer_status_id", request.offer_status_id.unwrap_or(0));
        params.push("offer_type_id", 0);
        params.push("currency_id", 0);
        params.push("ssl", request.ssl.unwrap_or_default().as_str());
        params.push(
            "click_cookie_days",
            request.click_cookie_days.unwrap_or(-1),
        );
        params.push(
            "impression_cookie_days",
            request.impression_cookie_days.unwrap_or(-1),
        );
        params.push(
            "auto_disposition_type",
            request
                .auto_disposition_type
                .as_deref()
                .unwrap_or("no_change"),
        );
        params.push(
            "auto_disposition_delay_hours",
            request.auto_disposition_delay_hours.unwrap_or(-1),
        );
        params.push(
            "redirect_offer_contract_id",
            request.redirect_offer_contract_id.unwrap_or(0),
        );
        params.push(
            "redirect_404",
            request.redirect_404.unwrap_or_default().as_str(),
        );
        params.push(
            "redirect_domain",
            request.redirect_domain.as_deref().unwrap_or(""),
        );
        params.push(
            "conversions_from_whitelist_only",
            request
                .conversions_from_whitelist_only
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "track_search_terms_from_non_supported_search_engines",
            request
                .track_search_terms_from_non_supported_search_engines
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "enable_view_thru_conversions",
            request
                .enable_view_thru_conversions
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "click_trumps_impression",
            request
                .click_trumps_impression
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "disable_click_deduplication",
            request
                .disable_click_deduplication
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "last_touch",
            request.last_touch.unwrap_or_default().as_str(),
        );
        params.push(
            "session_regeneration_seconds",
            request.session_regeneration_seconds.unwrap_or(-1),
        );
        params.push(
            "session_regeneration_type_id",
            request.session_regeneration_type_id.unwrap_or(0),
        );
        params.push(
            "enable_transaction_id_deduplication",
            request
                .enable_transaction_id_deduplication
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "cookie_domain",
            request.cookie_domain.as_deref().unwrap_or(""),
        );
        params.push(
            "postbacks_only",
            request.postbacks_only.unwrap_or_default().as_str(),
        );
        params.push("pixel_html", request.pixel_html.as_deref().unwrap_or(""));
        params.push(
            "postback_url",
            request.postback_url.as_deref().unwrap_or(""),
        );
        params.push(
            "postback_url_ms_delay",
            request.postback_url_ms_delay.unwrap_or(-1),
        );
        params.push(
            "fire_global_pixel",
            request.fire_global_pixel.unwrap_or_default().as_str(),
        );
        params.push(
            "fire_pixel_on_non_paid_conversions",
            request
                .fire_pixel_on_non_paid_conversions
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "static_suppression",
            request.static_suppression.unwrap_or(-1),
        );
        params.push(
            "conversion_cap_behavior",
            request.conversion_cap_behavior.unwrap_or(-1),
        );
        params.push(
            "conversion_behavior_on_redirect",
            request.conversion_behavior_on_redirect.unwrap_or(-1),
        );
        push_unchangeable_date(
            &mut params,
            "expiration_date",
            "expiration_date_modification_type",
            request.expiration_date,
        );
        params.push(
            "offer_contract_name",
            request.offer_contract_name.as_deref().unwrap_or(""),
        );
        params.push(
            "offer_contract_hidden",
            request.offer_contract_hidden.unwrap_or_default().as_str(),
        );
        params.push("price_format_id", 0);
        match request.payout {
            Some(payout) => {
                params.push_decimal("payout", payout);
                params.push(
                    "payout_modification_type",
                    ModificationType::Change.as_str(),
                );
            }
            None => {
                params.push("payout", UNCHANGED_AMOUNT);
                params.push(
                    "payout_modification_type",
                    ModificationType::DoNotChange.as_str(),
                );
            }
        }
        match request.received {
            Some(received) => {
                params.push_decimal("received", received);
                params.push(
                    "received_modification_type",
                    ModificationType::Change.as_str(),
                );
            }
            None => {
                params.push("received", UNCHANGED_AMOUNT);
                params.push(
                    "received_modification_type",
                    ModificationType::DoNotChange.as_str(),
                );
            }
        }
        params.push(
            "received_percentage",
            request.received_percentage.unwrap_or_default().as_str(),
        );
        params.push("offer_link", request.offer_link.as_deref().unwrap_or(""));
        params.push(
            "thankyou_link",
            request.thankyou_link.as_deref().unwrap_or(""),
        );
        params.push(
            "preview_link",
            request.preview_link.as_deref().unwrap_or(""),
        );
        params.push(
            "thumbnail_file_import_url",
            request.thumbnail_file_import_url.as_deref().unwrap_or(""),
        );
        params.push(
            "offer_description",
            request.offer_description.as_deref().unwrap_or(""),
        );
        params.push(
            "restrictions",
            request.restrictions.as_deref().unwrap_or(""),
        );
        params.push(
            "advertiser_extended_terms",
            request.advertiser_extended_terms.as_deref().unwrap_or(""),
        );
        params.push(
            "testing_instructions",
            request.testing_instructions.as_deref().unwrap_or(""),
        );
        params.push(
            "tags_modification_type",
            request.tags_modification_type.unwrap_or_default().as_str(),
        );
        params.push("tags", request.tags.as_deref().unwrap_or(""));
        params.push(
            "allow_affiliates_to_create_creatives",
            request
                .allow_affiliates_to_create_creatives
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "unsubscribe_link",
            request.unsubscribe_link.as_deref().unwrap_or(""),
        );
        params.push("from_lines", request.from_lines.as_deref().unwrap_or(""));
        params.push(
            "subject_lines",
            request.subject_lines.as_deref().unwrap_or(""),
        );
        params.push(
            "allowed_media_type_modification_type",
            request
                .allowed_media_type_modification_type
                .unwrap_or_default()
                .as_str(),
        );
        params.push(
            "allowed_media_type_ids",
            request.allowed_media_type_ids.as_deref().unwrap_or(""),
        );

        self.call("api/5/addedit.asmx/Offer", &params).await
    }

    pub async fn remove_blacklist(&self, blacklist_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("blacklist_id", blacklist_id);

        self.call("api/1/addedit.asmx/RemoveBlacklist", &params)
            .await
    }

    /// Removes a creative exception from a campaign; see
    /// [`Self::add_campaign_creative_exception`] for the allow/block rule.
    pub async fn remove_campaign_creative_exception(
        &self,
        campaign_id: i64,
        creative_id: i64,
    ) -> Result<ApiResponse> {
        let exception_type = self.campaign_exception_mode(campaign_id).await?;

        let mut params = self.base_params()?;
        params.push("campaign_id", campaign_id);
        params.push("creative_id", creative_id);
        params.push("creative_exception_type", exception_type);
        params.push("creative_modification_type", "remove");

        self.call("api/1/addedit.asmx/CampaignCreativeExceptions", &params)
            .await
    }

    /// Removes a sub id exception from a campaign.
    pub async fn remove_campaign_subid_exception(
        &self,
        campaign_id: i64,
        sub_id: &str,
    ) -> Result<ApiResponse> {
        let exception_type = self.campaign_exception_mode(campaign_id).await?;

        let mut params = self.base_params()?;
        params.push("campaign_id", campaign_id);
        params.push("sub_id", sub_id);
        params.push("sub_id_exception_type", exception_type);
        params.push("sub_id_modification_type", "remove");

        self.call("api/1/addedit.asmx/CampaignSubIdExceptions", &params)
            .await
    }

    // ---- export ----

    pub async fn export_advertisers(
        &self,
        request: &ExportAdvertisersRequest,
    ) -> Result<ApiResponse> {
        let params = self.export_advertisers_params(request)?;
        self.call("api/6/export.asmx/Advertisers", &params).await
    }

    pub async fn export_affiliates(
        &self,
        request: &ExportAffiliatesRequest,
    ) -> Result<ApiResponse> {
        let params = self.export_affiliates_params(request)?;
        self.call("api/5/export.asmx/Affiliates", &params).await
    }

    pub async fn export_blacklists(
        &self,
        request: &ExportBlacklistsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("sub_id", request.sub_id.as_deref().unwrap_or(""));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));

        self.call("api/1/export.asmx/Blacklists", &params).await
    }

    pub async fn export_buyer_contracts(
        &self,
        request: &ExportBuyerContractsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("buyer_contract_id", request.buyer_contract_id.unwrap_or(0));
        params.push("buyer_id", request.buyer_id.unwrap_or(0));
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push(
            "buyer_contract_status_id",
            request.buyer_contract_status_id.unwrap_or(0),
        );

        self.call("api/4/export.asmx/BuyerContracts", &params).await
    }

    pub async fn export_buyers(
        &self,
        buyer_id: Option<i64>,
        account_status_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("buyer_id", buyer_id.unwrap_or(0));
        params.push("account_status_id", account_status_id.unwrap_or(0));

        self.call("api/2/export.asmx/Buyers", &params).await
    }

    /// Exports campaigns. Requires one of `campaign_id`, `site_offer_id`,
    /// or `source_affiliate_id`.
    pub async fn export_campaigns(
        &self,
        request: &ExportCampaignsRequest,
    ) -> Result<ApiResponse> {
        request.validate()?;
        let params = self.export_campaigns_params(request)?;
        self.call("api/8/export.asmx/Campaigns", &params).await
    }

    pub async fn export_creatives(
        &self,
        request: &ExportCreativesRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push(
            "creative_name",
            request.creative_name.as_deref().unwrap_or(""),
        );
        params.push("offer_id", request.offer_id);
        params.push("creative_type_id", request.creative_type_id.unwrap_or(0));
        params.push(
            "creative_status_id",
            request.creative_status_id.unwrap_or(0),
        );
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("creative_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/3/export.asmx/Creatives", &params).await
    }

    pub async fn export_offers(&self, request: &ExportOffersRequest) -> Result<ApiResponse> {
        let params = self.export_offers_params(request)?;
        self.call("api/6/export.asmx/Offers", &params).await
    }

    pub async fn export_pixel_log_requests(
        &self,
        request: &ExportPixelLogsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push_flag("converted_only", request.converted_only.unwrap_or(false));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/1/export.asmx/PixelLogRequests", &params)
            .await
    }

    pub async fn export_rule_targets(&self, rule_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("rule_id", rule_id);

        self.call("api/3/export.asmx/RuleTargets", &params).await
    }

    pub async fn export_schedules(
        &self,
        request: &ExportSchedulesRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("buyer_id", request.buyer_id.unwrap_or(0));
        params.push("status_id", request.status_id.unwrap_or(0));
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push_flag("priority_only", request.priority_only.unwrap_or(false));
        params.push_flag("active_only", request.active_only.unwrap_or(false));

        self.call("api/2/export.asmx/Schedules", &params).await
    }

    // ---- get ----

    pub async fn account_statuses(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/AccountStatuses", &self.base_params()?)
            .await
    }

    pub async fn advertisers(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Advertisers", &self.base_params()?)
            .await
    }

    pub async fn affiliate_tags(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/AffiliateTags", &self.base_params()?)
            .await
    }

    pub async fn affiliate_tiers(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/AffiliateTiers", &self.base_params()?)
            .await
    }

    pub async fn billing_cycles(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/BillingCycles", &self.base_params()?)
            .await
    }

    pub async fn blacklist_reasons(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/BlacklistReasons", &self.base_params()?)
            .await
    }

    pub async fn cap_intervals(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/CapIntervals", &self.base_params()?)
            .await
    }

    pub async fn cap_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/CapTypes", &self.base_params()?)
            .await
    }

    pub async fn conversion_dispositions(&self) -> Result<ApiResponse> {
        self.call(
            "api/2/track.asmx/ConversionDispositions",
            &self.base_params()?,
        )
        .await
    }

    pub async fn countries(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Countries", &self.base_params()?)
            .await
    }

    pub async fn currencies(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Currencies", &self.base_params()?)
            .await
    }

    pub async fn custom_queue_statuses(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/CustomQueueStatuses", &self.base_params()?)
            .await
    }

    pub async fn departments(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Departments", &self.base_params()?)
            .await
    }

    /// `email_type` is `advertiser`, `affiliate`, or `both` (the default).
    pub async fn email_templates(&self, email_type: Option<&str>) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("email_type", email_type.unwrap_or("both"));

        self.call("api/1/get.asmx/EmailTemplates", &params).await
    }

    pub async fn exchange_rates(
        &self,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", start_date);
        params.push_date("end_date", end_date);

        self.call("api/1/get.asmx/ExchangeRates", &params).await
    }

    pub async fn filter_types(
        &self,
        filter_type_id: Option<i64>,
        filter_type_name: Option<&str>,
        vertical_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("filter_type_id", filter_type_id.unwrap_or(0));
        params.push("filter_type_name", filter_type_name.unwrap_or(""));
        params.push("vertical_id", vertical_id.unwrap_or(0));

        self.call("api/1/get.asmx/FilterTypes", &params).await
    }

    /// Exchanges admin credentials for an API key without storing it; use
    /// [`Self::set_api_key`] to store the key on the client instead.
    pub async fn lookup_api_key(&self, username: &str, password: &str) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.push("username", username);
        params.push("password", password);

        self.call("api/1/get.asmx/GetAPIKey", &params).await
    }

    pub async fn inactive_reasons(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/InactiveReasons", &self.base_params()?)
            .await
    }

    pub async fn languages(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Languages", &self.base_params()?)
            .await
    }

    pub async fn lead_info(&self, lead_id: &str, vertical_id: Option<i64>) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("lead_id", lead_id);
        params.push("vertical_id", vertical_id.unwrap_or(0));

        self.call("api/1/get.asmx/LeadInfo", &params).await
    }

    /// Lead return reasons come from the buyer API surface and take no API
    /// key.
    pub async fn lead_return_reasons(&self) -> Result<ApiResponse> {
        let params = Params::new();

        self.call("buyers/api/1/leads.asmx/GetReturnReasons", &params)
            .await
    }

    pub async fn lead_tier_groups(&self, lead_tier_group_id: Option<i64>) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("lead_tier_group_id", lead_tier_group_id.unwrap_or(0));

        self.call("api/1/get.asmx/LeadTierGroups", &params).await
    }

    pub async fn link_display_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/LinkDisplayTypes", &self.base_params()?)
            .await
    }

    pub async fn media_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/MediaTypes", &self.base_params()?)
            .await
    }

    pub async fn offer_statuses(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/OfferStatuses", &self.base_params()?)
            .await
    }

    pub async fn offer_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/OfferTypes", &self.base_params()?)
            .await
    }

    pub async fn payment_settings(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/PaymentSettings", &self.base_params()?)
            .await
    }

    pub async fn payment_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/PaymentTypes", &self.base_params()?)
            .await
    }

    pub async fn price_formats(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/PriceFormats", &self.base_params()?)
            .await
    }

    pub async fn response_dispositions(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/ResponseDispositions", &self.base_params()?)
            .await
    }

    pub async fn roles(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/Roles", &self.base_params()?)
            .await
    }

    pub async fn schedule_types(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/ScheduleTypes", &self.base_params()?)
            .await
    }

    pub async fn session_regeneration_types(&self) -> Result<ApiResponse> {
        self.call(
            "api/1/get.asmx/SessionRegenerationTypes",
            &self.base_params()?,
        )
        .await
    }

    pub async fn shared_rules(&self) -> Result<ApiResponse> {
        self.call("api/1/get.asmx/SharedRules", &self.base_params()?)
            .await
    }

    /// `domain_type` is `all` (the default), `tracking`, or `redirect`.
    pub async fn tracking_domains(&self, domain_type: Option<&str>) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("domain_type", domain_type.unwrap_or("all"));

        self.call("api/1/get.asmx/TrackingDomains", &params).await
    }

    pub async fn verticals(&self, vertical_category_id: Option<i64>) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("vertical_category_id", vertical_category_id.unwrap_or(0));

        self.call("api/2/get.asmx/Verticals", &params).await
    }

    pub async fn vertical_categories(&self) -> Result<ApiResponse> {
        self.call(
            "api/1/signup.asmx/GetVerticalCategories",
            &self.base_params()?,
        )
        .await
    }

    // ---- reports ----

    pub async fn brand_advertiser_summary(
        &self,
        request: &BrandAdvertiserSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push(
            "brand_advertiser_id",
            request.brand_advertiser_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_manager_id",
            request.brand_advertiser_manager_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_tag_id",
            request.brand_advertiser_tag_id.unwrap_or(0),
        );
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));

        self.call("api/3/reports.asmx/BrandAdvertiserSummary", &params)
            .await
    }

    pub async fn campaign_summary(&self, request: &CampaignSummaryRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push("subid_id", request.subid_id.as_deref().unwrap_or(""));
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push(
            "source_affiliate_tag_id",
            request.source_affiliate_tag_id.unwrap_or(0),
        );
        params.push(
            "site_offer_tag_id",
            request.site_offer_tag_id.unwrap_or(0),
        );
        params.push(
            "source_affiliate_manager_id",
            request.source_affiliate_manager_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_manager_id",
            request.brand_advertiser_manager_id.unwrap_or(0),
        );
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));

        self.call("api/5/reports.asmx/CampaignSummary", &params)
            .await
    }

    pub async fn clicks(&self, request: &ClicksRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push("price_format_id", request.price_format_id.unwrap_or(0));
        params.push_flag(
            "include_duplicates",
            request.include_duplicates.unwrap_or(false),
        );
        params.push_flag("include_tests", request.include_tests.unwrap_or(false));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("api/12/reports.asmx/Clicks", &params).await
    }

    pub async fn event_conversion_changes(
        &self,
        request: &EventConversionChangesRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("changes_since", request.changes_since);
        params.push_flag(
            "include_new_event_conversions",
            request.include_new_event_conversions.unwrap_or(false),
        );
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_id",
            request.brand_advertiser_id.unwrap_or(0),
        );
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push_flag("include_tests", request.include_tests.unwrap_or(false));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request
                .sort_field
                .as_deref()
                .unwrap_or("event_conversion_date"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/17/reports.asmx/EventConversionChanges", &params)
            .await
    }

    /// Per-country summary. Requires one of the entity id filters.
    pub async fn country_summary(&self, request: &CountrySummaryRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("affiliate_tag_id", request.affiliate_tag_id.unwrap_or(0));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports.asmx/CountrySummary", &params)
            .await
    }

    /// Per-creative summary. Requires `site_offer_id` or `campaign_id`.
    pub async fn creative_summary(&self, request: &CreativeSummaryRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));

        self.call("api/3/reports.asmx/CreativeSummary", &params)
            .await
    }

    pub async fn daily_summary(&self, request: &DailySummaryRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_id",
            request.brand_advertiser_id.unwrap_or(0),
        );
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push_flag("include_tests", request.include_tests.unwrap_or(false));

        self.call("api/2/reports.asmx/DailySummaryExport", &params)
            .await
    }

    pub async fn events_conversions(
        &self,
        request: &EventsConversionsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_id",
            request.brand_advertiser_id.unwrap_or(0),
        );
        params.push("channel_id", request.channel_id.unwrap_or(0));
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push(
            "site_offer_contract_id",
            request.site_offer_contract_id.unwrap_or(0),
        );
        params.push(
            "source_affiliate_tag_id",
            request.source_affiliate_tag_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_tag_id",
            request.brand_advertiser_tag_id.unwrap_or(0),
        );
        params.push(
            "site_offer_tag_id",
            request.site_offer_tag_id.unwrap_or(0),
        );
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push("price_format_id", request.price_format_id.unwrap_or(0));
        params.push(
            "source_type",
            request.source_type.as_deref().unwrap_or("all"),
        );
        params.push(
            "payment_percentage_filter",
            request
                .payment_percentage_filter
                .as_deref()
                .unwrap_or("both"),
        );
        params.push(
            "disposition_type",
            request.disposition_type.as_deref().unwrap_or("all"),
        );
        params.push("disposition_id", request.disposition_id.unwrap_or(0));
        params.push(
            "source_affiliate_billing_status",
            request
                .source_affiliate_billing_status
                .as_deref()
                .unwrap_or("all"),
        );
        params.push(
            "brand_advertiser_billing_status",
            request
                .brand_advertiser_billing_status
                .as_deref()
                .unwrap_or("all"),
        );
        params.push(
            "test_filter",
            request.test_filter.as_deref().unwrap_or("non_tests"),
        );
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request
                .sort_field
                .as_deref()
                .unwrap_or("event_conversion_date"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/17/reports.asmx/EventConversions", &params)
            .await
    }

    pub async fn leads_by_buyer(&self, request: &LeadsByBuyerRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("buyer_id", request.buyer_id.unwrap_or(0));
        params.push("buyer_contract_id", request.buyer_contract_id.unwrap_or(0));
        params.push("status_id", request.status_id.unwrap_or(0));
        params.push("sub_status_id", request.sub_status_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("transaction_date"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/4/reports.asmx/LeadsByBuyer", &params).await
    }

    pub async fn leads_by_affiliate(
        &self,
        request: &LeadsByAffiliateRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push(
            "source_affiliate_manager_id",
            request.source_affiliate_manager_id.unwrap_or(0),
        );
        params.push(
            "upsell",
            request
                .upsell
                .as_deref()
                .unwrap_or("upsells_and_non_upsells"),
        );
        params.push("lead_tier_id", request.lead_tier_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("api/2/reports.asmx/LeadsByAffiliateExport", &params)
            .await
    }

    pub async fn lite_clicks_advertiser_summary(
        &self,
        request: &LiteClicksAdvertiserSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push(
            "advertiser_manager_id",
            request.advertiser_manager_id.unwrap_or(0),
        );
        params.push(
            "advertiser_tag_id",
            request.advertiser_tag_id.unwrap_or(0),
        );
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports_lite_clicks.asmx/AdvertiserSummary", &params)
            .await
    }

    pub async fn lite_clicks_affiliate_summary(
        &self,
        request: &LiteClicksAffiliateSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push(
            "affiliate_manager_id",
            request.affiliate_manager_id.unwrap_or(0),
        );
        params.push("affiliate_tag_id", request.affiliate_tag_id.unwrap_or(0));
        params.push("offer_tag_id", request.offer_tag_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports_lite_clicks.asmx/AffiliateSummary", &params)
            .await
    }

    pub async fn lite_clicks_campaign_summary(
        &self,
        request: &LiteClicksCampaignSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push(
            "subaffiliate_id",
            request.subaffiliate_id.as_deref().unwrap_or(""),
        );
        params.push("affiliate_tag_id", request.affiliate_tag_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("offer_tag_id", request.offer_tag_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/2/reports_lite_clicks.asmx/CampaignSummary", &params)
            .await
    }

    /// Lite-clicks country summary. Requires one of the entity id filters.
    pub async fn lite_clicks_country_summary(
        &self,
        request: &LiteClicksCountrySummaryRequest,
    ) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("affiliate_tag_id", request.affiliate_tag_id.unwrap_or(0));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports_lite_clicks.asmx/CountrySummary", &params)
            .await
    }

    pub async fn lite_clicks_daily_summary(
        &self,
        request: &LiteClicksDailySummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("creative_id", request.creative_id.unwrap_or(0));
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push_flag("include_tests", request.include_tests.unwrap_or(false));

        self.call(
            "api/1/reports_lite_clicks.asmx/DailySummaryExport",
            &params,
        )
        .await
    }

    pub async fn lite_clicks_offer_summary(
        &self,
        request: &LiteClicksOfferSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push(
            "advertiser_manager_id",
            request.advertiser_manager_id.unwrap_or(0),
        );
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("offer_tag_id", request.offer_tag_id.unwrap_or(0));
        params.push("affiliate_tag_id", request.affiliate_tag_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports_lite_clicks.asmx/OfferSummary", &params)
            .await
    }

    pub async fn lite_clicks_sub_id_summary(
        &self,
        request: &LiteClicksSubIdSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("source_affiliate_id", request.source_affiliate_id);
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("sub_id", request.sub_id.as_deref().unwrap_or("NULL"));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/2/reports_lite_clicks.asmx/SubIDSummary", &params)
            .await
    }

    pub async fn login_export(
        &self,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        role_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", start_date);
        params.push_date("end_date", end_date);
        params.push("role_id", role_id.unwrap_or(0));

        self.call("api/1/reports.asmx/LoginExport", &params).await
    }

    pub async fn order_details(&self, request: &OrderDetailsRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push("conversion_id", request.conversion_id.unwrap_or(0));
        params.push("order_id", request.order_id.as_deref().unwrap_or(""));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("order_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("api/1/reports.asmx/OrderDetails", &params).await
    }

    pub async fn site_offer_summary(
        &self,
        request: &SiteOfferSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push(
            "brand_advertiser_id",
            request.brand_advertiser_id.unwrap_or(0),
        );
        params.push(
            "brand_advertiser_manager_id",
            request.brand_advertiser_manager_id.unwrap_or(0),
        );
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push(
            "site_offer_tag_id",
            request.site_offer_tag_id.unwrap_or(0),
        );
        params.push(
            "source_affiliate_tag_id",
            request.source_affiliate_tag_id.unwrap_or(0),
        );
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));

        self.call("api/4/reports.asmx/SiteOfferSummary", &params)
            .await
    }

    pub async fn source_affiliate_summary(
        &self,
        request: &SourceAffiliateSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push(
            "source_affiliate_manager_id",
            request.source_affiliate_manager_id.unwrap_or(0),
        );
        params.push(
            "source_affiliate_tag_id",
            request.source_affiliate_tag_id.unwrap_or(0),
        );
        params.push(
            "site_offer_tag_id",
            request.site_offer_tag_id.unwrap_or(0),
        );
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));

        self.call("api/3/reports.asmx/SourceAffiliateSummary", &params)
            .await
    }

    pub async fn sub_id_summary(&self, request: &SubIdSummaryRequest) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("source_affiliate_id", request.source_affiliate_id);
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("event_id", request.event_id.unwrap_or(0));
        params.push(
            "revenue_filter",
            request
                .revenue_filter
                .as_deref()
                .unwrap_or("conversions_and_events"),
        );

        self.call("api/1/reports.asmx/SubIDSummary", &params).await
    }

    pub async fn traffic_export(
        &self,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push_date("start_date", start_date);
        params.push_date("end_date", end_date);

        self.call("api/1/reports.asmx/TrafficExport", &params).await
    }

    // ---- signup ----

    pub async fn signup_advertiser(
        &self,
        request: &SignupAdvertiserRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("company_name", request.company_name.as_str());
        params.push("address_street", request.address_street.as_str());
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push("address_city", request.address_city.as_str());
        params.push("address_state", request.address_state.as_str());
        params.push("address_zip_code", request.address_zip_code.as_str());
        params.push("address_country", request.address_country.as_str());
        params.push("first_name", request.first_name.as_str());
        params.push("last_name", request.last_name.as_str());
        params.push("email_address", request.email_address.as_str());
        params.push("password", "");
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("notes", request.notes.as_deref().unwrap_or(""));
        params.push(
            "contact_title",
            request.contact_title.as_deref().unwrap_or(""),
        );
        params.push("contact_phone_work", request.contact_phone_work.as_str());
        params.push(
            "contact_phone_cell",
            request.contact_phone_cell.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_phone_fax",
            request.contact_phone_fax.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_name",
            request.contact_im_name.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_service",
            request.contact_im_service.unwrap_or(0),
        );
        params.push("ip_address", request.ip_address.as_deref().unwrap_or(""));

        self.call("api/1/signup.asmx/Advertiser", &params).await
    }

    pub async fn signup_affiliate(
        &self,
        request: &SignupAffiliateRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params()?;
        params.push("affiliate_name", request.affiliate_name.as_str());
        params.push("account_status_id", request.account_status_id);
        params.push("affiliate_tier_id", request.affiliate_tier_id.unwrap_or(0));
        params.push_flag("hide_offers", request.hide_offers.unwrap_or(false));
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push("tax_class", request.tax_class.as_str());
        params.push("ssn_tax_id", request.ssn_tax_id.as_str());
        params.push_flag(
            "vat_tax_required",
            request.vat_tax_required.unwrap_or(false),
        );
        params.push("swift_iban", request.swift_iban.as_deref().unwrap_or(""));
        params.push("payment_to", request.payment_to.unwrap_or(0));
        push_decimal_or(&mut params, "payment_fee", request.payment_fee, -1);
        push_decimal_or(
            &mut params,
            "payment_min_threshold",
            request.payment_min_threshold,
            -1,
        );
        params.push("currency_id", request.currency_id.unwrap_or(0));
        params.push("payment_setting_id", request.payment_setting_id);
        params.push("billing_cycle_id", request.billing_cycle_id.unwrap_or(3));
        params.push("payment_type_id", request.payment_type_id.unwrap_or(1));
        params.push(
            "payment_type_info",
            request.payment_type_info.as_deref().unwrap_or(""),
        );
        params.push("address_street", request.address_street.as_str());
        params.push(
            "address_street2",
            request.address_street2.as_deref().unwrap_or(""),
        );
        params.push("address_city", request.address_city.as_str());
        params.push("address_state", request.address_state.as_str());
        params.push("address_zip_code", request.address_zip_code.as_str());
        params.push("address_country", request.address_country.as_str());
        params.push(
            "contact_first_name",
            request.contact_first_name.as_str(),
        );
        params.push(
            "contact_middle_name",
            request.contact_middle_name.as_deref().unwrap_or(""),
        );
        params.push("contact_last_name", request.contact_last_name.as_str());
        params.push(
            "contact_email_address",
            request.contact_email_address.as_str(),
        );
        params.push("contact_password", "");
        params.push(
            "contact_title",
            request.contact_title.as_deref().unwrap_or(""),
        );
        params.push("contact_phone_work", request.contact_phone_work.as_str());
        params.push(
            "contact_phone_cell",
            request.contact_phone_cell.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_phone_fax",
            request.contact_phone_fax.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_service",
            request.contact_im_service.as_deref().unwrap_or(""),
        );
        params.push(
            "contact_im_name",
            request.contact_im_name.as_deref().unwrap_or(""),
        );
        params.push("contact_timezone", request.contact_timezone.as_str());
        params.push(
            "contact_language_id",
            request.contact_language_id.unwrap_or(0),
        );
        params.push(
            "media_type_ids",
            request.media_type_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "price_format_ids",
            request.price_format_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "vertical_category_ids",
            request.vertical_category_ids.as_deref().unwrap_or(""),
        );
        params.push(
            "country_codes",
            request.country_codes.as_deref().unwrap_or(""),
        );
        params.push("tag_ids", request.tag_ids.as_deref().unwrap_or(""));
        params.push_date(
            "date_added",
            request
                .date_added
                .unwrap_or_else(|| Utc::now().naive_utc()),
        );
        params.push(
            "signup_ip_address",
            request.signup_ip_address.as_deref().unwrap_or(""),
        );
        params.push(
            "referral_affiliate_id",
            request.referral_affiliate_id.unwrap_or(0),
        );
        params.push(
            "referral_notes",
            request.referral_notes.as_deref().unwrap_or(""),
        );
        params.push_flag(
            "terms_and_conditions_agreed",
            request.terms_and_conditions_agreed,
        );
        params.push("notes", request.notes.as_deref().unwrap_or(""));

        self.call("api/4/signup.asmx/Affiliate", &params).await
    }

    // ---- track ----

    /// Adjusts a tracked conversion (payout, received amount, disposition,
    /// or effective date).
    pub async fn update_conversion(
        &self,
        request: &UpdateConversionRequest,
    ) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params()?;
        params.push("offer_id", request.offer_id);
        params.push("conversion_id", request.conversion_id.unwrap_or(0));
        params.push(
            "request_session_id",
            request.request_session_id.unwrap_or(0),
        );
        params.push(
            "transaction_id",
            request.transaction_id.as_deref().unwrap_or(""),
        );
        push_decimal_or(&mut params, "payout", request.payout, 0);
        params.push_flag(
            "add_to_existing_payout",
            request.add_to_existing_payout.unwrap_or(true),
        );
        push_decimal_or(&mut params, "received", request.received, 0);
        params.push(
            "received_option",
            request.received_option.as_deref().unwrap_or("no_change"),
        );
        params.push(
            "disposition_type",
            request.disposition_type.as_deref().unwrap_or("no_change"),
        );
        params.push("disposition_id", request.disposition_id.unwrap_or(0));
        params.push_flag(
            "update_revshare_payout",
            request.update_revshare_payout.unwrap_or(false),
        );
        params.push(
            "effective_date_option",
            request
                .effective_date_option
                .as_deref()
                .unwrap_or("conversion_date"),
        );
        match request.custom_date {
            Some(custom_date) => params.push_date("custom_date", custom_date),
            None => params.push("custom_date", UNCHANGED_DATE),
        }
        params.push(
            "note_to_append",
            request.note_to_append.as_deref().unwrap_or(""),
        );
        params.push(
            "disallow_on_billing_status",
            request
                .disallow_on_billing_status
                .as_deref()
                .unwrap_or("ignore"),
        );

        self.call("api/4/track.asmx/UpdateConversion", &params)
            .await
    }

    // ---- convenience helpers ----

    /// Returns every advertiser id on the network.
    pub async fn advertiser_ids(&self) -> Result<Vec<i64>> {
        let advertisers: Vec<BrandAdvertiser> = self
            .call_forced_json("api/1/get.asmx/Advertisers", &self.base_params()?)
            .await?
            .decode()?;

        Ok(advertisers
            .iter()
            .map(|advertiser| advertiser.advertiser_id)
            .collect())
    }

    /// Returns every affiliate id on the network.
    ///
    /// Affiliate exports can be large, so this pages through the export
    /// sequentially: one probe call to learn the row count, then
    /// `ceil(count / 2500)` page calls concatenated in page order.
    pub async fn affiliate_ids(&self) -> Result<Vec<i64>> {
        let probe = self
            .fetch_affiliates(&ExportAffiliatesRequest::builder().row_limit(1).build())
            .await?;
        let affiliate_count = probe.row_count;
        let pages =
            affiliate_count / AFFILIATE_PAGE_SIZE + i64::from(affiliate_count % AFFILIATE_PAGE_SIZE != 0);

        let mut all_ids = Vec::with_capacity(usize::try_from(affiliate_count).unwrap_or(0));
        let mut start_row = 1;
        for _ in 0..pages {
            let page = self
                .fetch_affiliates(
                    &ExportAffiliatesRequest::builder()
                        .start_at_row(start_row)
                        .row_limit(AFFILIATE_PAGE_SIZE)
                        .build(),
                )
                .await?;
            all_ids.extend(page.affiliates.iter().map(|a| a.affiliate_id));
            start_row += AFFILIATE_PAGE_SIZE;
        }
        Ok(all_ids)
    }

    /// Returns the offer ids on the network, optionally restricted to one
    /// advertiser.
    pub async fn offer_ids(&self, advertiser_id: Option<i64>) -> Result<Vec<i64>> {
        let request = ExportOffersRequest {
            advertiser_id,
            ..ExportOffersRequest::default()
        };

        let export: OffersExportResponse = self
            .call_forced_json("api/6/export.asmx/Offers", &self.export_offers_params(&request)?)
            .await?
            .decode()?;

        Ok(export.offers.iter().map(|offer| offer.offer_id).collect())
    }

    // ---- internal ----

    fn export_advertisers_params(&self, request: &ExportAdvertisersRequest) -> Result<Params> {
        let mut params = self.base_params()?;
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push(
            "advertiser_name",
            request.advertiser_name.as_deref().unwrap_or(""),
        );
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push("tag_id", request.tag_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("advertiser_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));
        Ok(params)
    }

    fn export_affiliates_params(&self, request: &ExportAffiliatesRequest) -> Result<Params> {
        let mut params = self.base_params()?;
        params.push("affiliate_id", request.affiliate_id.unwrap_or(0));
        params.push(
            "affiliate_name",
            request.affiliate_name.as_deref().unwrap_or(""),
        );
        params.push(
            "account_manager_id",
            request.account_manager_id.unwrap_or(0),
        );
        params.push("tag_id", request.tag_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("affiliate_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));
        Ok(params)
    }

    fn export_campaigns_params(&self, request: &ExportCampaignsRequest) -> Result<Params> {
        let mut params = self.base_params()?;
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push(
            "source_affiliate_id",
            request.source_affiliate_id.unwrap_or(0),
        );
        params.push("channel_id", request.channel_id.unwrap_or(0));
        params.push("account_status_id", request.account_status_id.unwrap_or(0));
        params.push("media_type_id", request.media_type_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("campaign_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));
        Ok(params)
    }

    fn export_offers_params(&self, request: &ExportOffersRequest) -> Result<Params> {
        let mut params = self.base_params()?;
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("offer_name", request.offer_name.as_deref().unwrap_or(""));
        params.push("advertiser_id", request.advertiser_id.unwrap_or(0));
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("offer_type_id", request.offer_type_id.unwrap_or(0));
        params.push("media_type_id", request.media_type_id.unwrap_or(0));
        params.push("offer_status_id", request.offer_status_id.unwrap_or(0));
        params.push("tag_id", request.tag_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("offer_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));
        Ok(params)
    }

    async fn fetch_advertisers(&self, advertiser_id: i64) -> Result<AdvertisersExportResponse> {
        let request = ExportAdvertisersRequest::builder()
            .advertiser_id(advertiser_id)
            .build();
        self.call_forced_json(
            "api/6/export.asmx/Advertisers",
            &self.export_advertisers_params(&request)?,
        )
        .await?
        .decode()
    }

    async fn fetch_affiliates(
        &self,
        request: &ExportAffiliatesRequest,
    ) -> Result<AffiliatesExportResponse> {
        self.call_forced_json(
            "api/5/export.asmx/Affiliates",
            &self.export_affiliates_params(request)?,
        )
        .await?
        .decode()
    }

    async fn fetch_campaigns(
        &self,
        request: &ExportCampaignsRequest,
    ) -> Result<CampaignsExportResponse> {
        self.call_forced_json(
            "api/8/export.asmx/Campaigns",
            &self.export_campaigns_params(request)?,
        )
        .await?
        .decode()
    }

    /// Campaign exceptions block on the offer's original campaign and allow
    /// everywhere else; the flag lives in the campaign export.
    async fn campaign_exception_mode(&self, campaign_id: i64) -> Result<&'static str> {
        let export = self
            .fetch_campaigns(
                &ExportCampaignsRequest::builder()
                    .campaign_id(campaign_id)
                    .build(),
            )
            .await?;
        let campaign = export
            .campaigns
            .first()
            .ok_or_else(|| Error::invalid_arguments("invalid campaign id"))?;

        Ok(if campaign.original.unwrap_or(false) {
            "block"
        } else {
            "allow"
        })
    }
}
