//! Client for the affiliate-facing API.

use bon::Builder;
use chrono::NaiveDateTime;
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use super::types::request::{
    ApplyForOfferRequest, CampaignSummaryRequest, ChangeAccountInfoRequest, ClicksRequest,
    EventsConversionsRequest, OfferFeedRequest, OrderDetailChangesRequest, OrderDetailsRequest,
    ReferralRequest, SubAffiliateSummaryRequest, TopOfferSummaryRequest,
};
use crate::Result;
use crate::params::Params;
use crate::types::{ApiResponse, ResponseFormat};

/// Connection configuration for the affiliate API.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Hostname of the network's admin console, e.g. `admin.example.com`.
    #[builder(into)]
    pub admin_domain: String,
    /// The affiliate account the API key is scoped to.
    pub affiliate_id: i64,
    #[builder(into)]
    pub api_key: SecretString,
    #[builder(default)]
    pub response_format: ResponseFormat,
    #[builder(default = true)]
    pub use_https: bool,
}

/// HTTP client for the affiliate-facing API.
///
/// One method per vendor operation; every method issues a single POST and
/// returns the decoded [`ApiResponse`]. See the [module docs](super) for an
/// overview of the endpoint groups.
#[derive(Debug, Clone)]
pub struct Client {
    host: Url,
    affiliate_id: i64,
    api_key: SecretString,
    response_format: ResponseFormat,
    client: ReqwestClient,
}

impl Client {
    /// Creates a new affiliate API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain does not form a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            host: crate::host_url(&config.admin_domain, config.use_https)?,
            affiliate_id: config.affiliate_id,
            api_key: config.api_key,
            response_format: config.response_format,
            client: crate::http_client()?,
        })
    }

    async fn call(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        let url = self.host.join(path)?;
        crate::call(&self.client, url, params, self.response_format.is_json()).await
    }

    /// The `api_key, affiliate_id` prefix every operation but `OfferFeed`
    /// starts with.
    fn base_params(&self) -> Params {
        let mut params = Params::new();
        params.push("api_key", self.api_key.expose_secret());
        params.push("affiliate_id", self.affiliate_id);
        params
    }

    // ---- account ----

    /// Replaces the contact record for one of the affiliate's contacts.
    pub async fn change_account_info(
        &self,
        request: &ChangeAccountInfoRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", request.contact_id);
        params.push("contact_type_id", request.contact_type_id.unwrap_or(0));
        params.push("first_name", request.first_name.as_deref().unwrap_or(""));
        params.push("last_name", request.last_name.as_deref().unwrap_or(""));
        params.push(
            "email_address",
            request.email_address.as_deref().unwrap_or(""),
        );
        params.push("title", request.title.as_deref().unwrap_or(""));
        params.push("phone_work", request.phone_work.as_deref().unwrap_or(""));
        params.push("phone_cell", request.phone_cell.as_deref().unwrap_or(""));
        params.push("phone_fax", request.phone_fax.as_deref().unwrap_or(""));
        params.push("im_service", request.im_service.as_deref().unwrap_or(""));
        params.push("im_name", request.im_name.as_deref().unwrap_or(""));
        params.push("tax_class", request.tax_class.as_deref().unwrap_or(""));
        params.push("ssn_tax_id", request.ssn_tax_id.as_deref().unwrap_or(""));
        params.push("payment_to", request.payment_to.as_deref().unwrap_or(""));
        params.push("website", request.website.as_deref().unwrap_or(""));
        params.push(
            "address_street_1",
            request.address_street_1.as_deref().unwrap_or(""),
        );
        params.push(
            "address_street_2",
            request.address_street_2.as_deref().unwrap_or(""),
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
            "address_country",
            request.address_country.as_deref().unwrap_or(""),
        );
        params.push(
            "address_zip_code",
            request.address_zip_code.as_deref().unwrap_or(""),
        );

        self.call("affiliates/api/2/account.asmx/ChangeAccountInfo", &params)
            .await
    }

    pub async fn change_language(
        &self,
        contact_id: i64,
        new_language_id: i64,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);
        params.push("new_language_id", new_language_id);

        self.call("affiliates/api/2/account.asmx/ChangeLanguage", &params)
            .await
    }

    /// `new_media_type_ids` is the vendor's comma-separated id list.
    pub async fn change_media_types(
        &self,
        contact_id: i64,
        new_media_type_ids: &str,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);
        params.push("new_media_type_ids", new_media_type_ids);

        self.call("affiliates/api/2/account.asmx/ChangeMediaTypes", &params)
            .await
    }

    pub async fn change_price_formats(
        &self,
        contact_id: i64,
        new_price_format_ids: &str,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);
        params.push("new_price_format_ids", new_price_format_ids);

        self.call("affiliates/api/2/account.asmx/ChangePriceFormats", &params)
            .await
    }

    pub async fn change_vertical_categories(
        &self,
        contact_id: i64,
        new_vertical_category_ids: &str,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);
        params.push("new_vertical_category_ids", new_vertical_category_ids);

        self.call(
            "affiliates/api/2/account.asmx/ChangeVerticalCategories",
            &params,
        )
        .await
    }

    pub async fn account_info(&self, contact_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);

        self.call("affiliates/api/2/account.asmx/GetAccountInfo", &params)
            .await
    }

    pub async fn account_manager(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetAccountManager",
            &self.base_params(),
        )
        .await
    }

    pub async fn contact_types(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetContactTypes",
            &self.base_params(),
        )
        .await
    }

    pub async fn countries(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetCountries",
            &self.base_params(),
        )
        .await
    }

    pub async fn languages(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetLanguages",
            &self.base_params(),
        )
        .await
    }

    pub async fn media_types(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetMediaTypes",
            &self.base_params(),
        )
        .await
    }

    pub async fn payment_to_types(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetPaymentToTypes",
            &self.base_params(),
        )
        .await
    }

    pub async fn price_formats(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetPriceFormats",
            &self.base_params(),
        )
        .await
    }

    pub async fn tax_classes(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetTaxClasses",
            &self.base_params(),
        )
        .await
    }

    pub async fn us_states(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/account.asmx/GetUSStates",
            &self.base_params(),
        )
        .await
    }

    /// Triggers a password-reset email for the given contact.
    pub async fn reset_password(&self, contact_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("contact_id", contact_id);

        self.call("affiliates/api/2/account.asmx/ResetPassword", &params)
            .await
    }

    // ---- offers ----

    /// Creates a text-link creative on one of the affiliate's campaigns.
    pub async fn add_link_creative(
        &self,
        campaign_id: i64,
        creative_name: &str,
        offer_link: &str,
        description: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("creative_name", creative_name);
        params.push("offer_link", offer_link);
        params.push("description", description.unwrap_or(""));

        self.call("affiliates/api/2/offers.asmx/AddLinkCreative", &params)
            .await
    }

    pub async fn apply_for_offer(&self, request: &ApplyForOfferRequest) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("offer_contract_id", request.offer_contract_id);
        params.push("media_type_id", request.media_type_id);
        params.push("notes", request.notes.as_deref().unwrap_or(""));
        params.push_flag("agreed_to_terms", request.agreed_to_terms);
        params.push(
            "agreed_from_ip_address",
            request.agreed_from_ip_address.as_deref().unwrap_or(""),
        );

        self.call("affiliates/api/3/offers.asmx/ApplyForOffer", &params)
            .await
    }

    /// Pulls creatives changed since `updates_since` from a configured
    /// export feed.
    pub async fn creative_feed(
        &self,
        updates_since: NaiveDateTime,
        export_feed_id: i64,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("export_feed_id", export_feed_id);
        params.push_date("updates_since", updates_since);

        self.call("affiliates/api/2/offers.asmx/CreativeFeed", &params)
            .await
    }

    pub async fn campaign(&self, campaign_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);

        self.call("affiliates/api/2/offers.asmx/GetCampaign", &params)
            .await
    }

    pub async fn creative_code(&self, campaign_id: i64, creative_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("creative_id", creative_id);

        self.call("affiliates/api/2/offers.asmx/GetCreativeCode", &params)
            .await
    }

    pub async fn creative_feeds(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetCreativeFeeds",
            &self.base_params(),
        )
        .await
    }

    pub async fn creative_types(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetCreativeTypes",
            &self.base_params(),
        )
        .await
    }

    pub async fn featured_offer(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetFeaturedOffer",
            &self.base_params(),
        )
        .await
    }

    pub async fn media_type_categories(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetMediaTypeCategories",
            &self.base_params(),
        )
        .await
    }

    pub async fn offer_statuses(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetOfferStatuses",
            &self.base_params(),
        )
        .await
    }

    pub async fn pixel_tokens(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetPixelTokens",
            &self.base_params(),
        )
        .await
    }

    pub async fn product_feeds(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetProductFeeds",
            &self.base_params(),
        )
        .await
    }

    pub async fn sub_affiliates(
        &self,
        start_at_row: Option<i64>,
        row_limit: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("start_at_row", start_at_row.unwrap_or(0));
        params.push("row_limit", row_limit.unwrap_or(0));

        self.call("affiliates/api/2/offers.asmx/GetSubAffiliates", &params)
            .await
    }

    pub async fn suppression_list(&self, offer_id: i64) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("offer_id", offer_id);

        self.call("affiliates/api/2/offers.asmx/GetSuppressionList", &params)
            .await
    }

    pub async fn tags(&self) -> Result<ApiResponse> {
        self.call("affiliates/api/2/offers.asmx/GetTags", &self.base_params())
            .await
    }

    pub async fn vertical_categories(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetVerticalCategories",
            &self.base_params(),
        )
        .await
    }

    pub async fn verticals(&self) -> Result<ApiResponse> {
        self.call(
            "affiliates/api/2/offers.asmx/GetVerticals",
            &self.base_params(),
        )
        .await
    }

    /// Lists the offers available to this affiliate.
    ///
    /// This endpoint predates the `api_key, affiliate_id` prefix convention
    /// and takes its identifying parameters in the opposite order.
    pub async fn offer_feed(&self, request: &OfferFeedRequest) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.push("affiliate_id", self.affiliate_id);
        params.push("api_key", self.api_key.expose_secret());
        params.push(
            "campaign_name",
            request.campaign_name.as_deref().unwrap_or(""),
        );
        params.push(
            "media_type_category_id",
            request.media_type_category_id.unwrap_or(0),
        );
        params.push(
            "vertical_category_id",
            request.vertical_category_id.unwrap_or(0),
        );
        params.push(
            "country_code",
            request.country_code.as_deref().unwrap_or(""),
        );
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("offer_status_id", request.offer_status_id.unwrap_or(0));
        params.push("tag_id", request.tag_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("affiliates/api/5/offers.asmx/OfferFeed", &params)
            .await
    }

    /// Emails a creative pack to one of the affiliate's contacts.
    pub async fn send_creative_pack(
        &self,
        campaign_id: i64,
        creative_id: Option<i64>,
        contact_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("creative_id", creative_id.unwrap_or(0));
        params.push("contact_id", contact_id.unwrap_or(0));

        self.call("affiliates/api/2/offers.asmx/SendCreativePack", &params)
            .await
    }

    pub async fn set_pixel(&self, campaign_id: i64, pixel_html: &str) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("pixel_html", pixel_html);

        self.call("affiliates/api/2/offers.asmx/SetPixel", &params)
            .await
    }

    pub async fn set_postback_url(
        &self,
        campaign_id: i64,
        postback_url: &str,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("postback_url", postback_url);

        self.call("affiliates/api/2/offers.asmx/SetPostbackURL", &params)
            .await
    }

    pub async fn set_test_link(&self, campaign_id: i64, test_link: &str) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("campaign_id", campaign_id);
        params.push("test_link", test_link);

        self.call("affiliates/api/2/offers.asmx/SetTestLink", &params)
            .await
    }

    // ---- reports ----

    pub async fn bills(
        &self,
        start_at_row: Option<i64>,
        row_limit: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("start_at_row", start_at_row.unwrap_or(0));
        params.push("row_limit", row_limit.unwrap_or(0));

        self.call("affiliates/api/3/reports.asmx/Bills", &params)
            .await
    }

    pub async fn campaign_summary(&self, request: &CampaignSummaryRequest) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push(
            "sub_affiliate",
            request.sub_affiliate.as_deref().unwrap_or(""),
        );
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("site_offer_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("affiliates/api/6/reports.asmx/CampaignSummary", &params)
            .await
    }

    pub async fn clicks(&self, request: &ClicksRequest) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("offer_id", request.offer_id.unwrap_or(0));
        params.push("campaign_id", request.campaign_id.unwrap_or(0));
        params.push_flag(
            "include_duplicates",
            request.include_duplicates.unwrap_or(false),
        );
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("affiliates/api/10/reports.asmx/Clicks", &params)
            .await
    }

    pub async fn daily_summary(
        &self,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        site_offer_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", start_date);
        params.push_date("end_date", end_date);
        params.push("site_offer_id", site_offer_id.unwrap_or(0));

        self.call("affiliates/api/3/reports.asmx/DailySummary", &params)
            .await
    }

    pub async fn events_conversions(
        &self,
        request: &EventsConversionsRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("currency_id", request.currency_id);
        params.push(
            "disposition_type",
            request.disposition_type.as_deref().unwrap_or(""),
        );
        params.push("event_type", request.event_type.as_deref().unwrap_or("all"));
        params.push_flag(
            "exclude_bot_traffic",
            request.exclude_bot_traffic.unwrap_or(false),
        );
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("affiliates/api/9/reports.asmx/EventConversions", &params)
            .await
    }

    pub async fn hourly_summary(
        &self,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
        site_offer_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", start_date);
        params.push_date("end_date", end_date);
        params.push("site_offer_id", site_offer_id.unwrap_or(0));

        self.call("affiliates/api/3/reports.asmx/HourlySummary", &params)
            .await
    }

    pub async fn network_news(&self, row_limit: Option<i64>) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("row_limit", row_limit.unwrap_or(0));

        self.call("affiliates/api/2/reports.asmx/NetworkNews", &params)
            .await
    }

    pub async fn offer_compliance(
        &self,
        start_at_row: Option<i64>,
        row_limit: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push("start_at_row", start_at_row.unwrap_or(0));
        params.push("row_limit", row_limit.unwrap_or(0));

        self.call("affiliates/api/3/reports.asmx/OfferCompliance", &params)
            .await
    }

    pub async fn order_detail_changes(
        &self,
        request: &OrderDetailChangesRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("changes_since", request.changes_since);
        params.push_flag(
            "include_new_conversions",
            request.include_new_conversions.unwrap_or(false),
        );
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("conversion_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("affiliates/api/2/reports.asmx/OrderDetailChanges", &params)
            .await
    }

    /// Order-level conversion detail. Requires `conversion_id` or
    /// `order_id`.
    pub async fn order_details(&self, request: &OrderDetailsRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("conversion_id", request.conversion_id.unwrap_or(0));
        params.push("order_id", request.order_id.as_deref().unwrap_or(""));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("conversion_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("affiliates/api/2/reports.asmx/OrderDetails", &params)
            .await
    }

    pub async fn performance_summary(&self, date: NaiveDateTime) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("date", date);

        self.call("affiliates/api/2/reports.asmx/PerformanceSummary", &params)
            .await
    }

    pub async fn referral(&self, request: &ReferralRequest) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push_flag("over_minimum", request.over_minimum);
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));
        params.push(
            "sort_field",
            request.sort_field.as_deref().unwrap_or("affiliate_id"),
        );
        params.push_flag("sort_descending", request.sort_descending.unwrap_or(false));

        self.call("affiliates/api/2/reports.asmx/Referral", &params)
            .await
    }

    pub async fn sub_affiliate_summary(
        &self,
        request: &SubAffiliateSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("site_offer_id", request.site_offer_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call(
            "affiliates/api/4/reports.asmx/SubAffiliateSummary",
            &params,
        )
        .await
    }

    pub async fn top_offer_summary(
        &self,
        request: &TopOfferSummaryRequest,
    ) -> Result<ApiResponse> {
        let mut params = self.base_params();
        params.push_date("start_date", request.start_date);
        params.push_date("end_date", request.end_date);
        params.push("vertical_id", request.vertical_id.unwrap_or(0));
        params.push("start_at_row", request.start_at_row.unwrap_or(0));
        params.push("row_limit", request.row_limit.unwrap_or(0));

        self.call("affiliates/api/3/reports.asmx/TopOfferSummary", &params)
            .await
    }
}
