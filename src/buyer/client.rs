//! Client for the buyer-facing lead endpoints.

use bon::Builder;
use reqwest::Client as ReqwestClient;
use url::Url;

use super::types::request::UpdateLeadRequest;
use crate::Result;
use crate::params::Params;
use crate::types::{ApiResponse, ResponseFormat};

/// Connection configuration for the buyer API.
#[derive(Debug, Clone, Builder)]
#[non_exhaustive]
pub struct Config {
    /// Hostname of the network's admin console, e.g. `admin.example.com`.
    #[builder(into)]
    pub admin_domain: String,
    #[builder(default)]
    pub response_format: ResponseFormat,
    #[builder(default = true)]
    pub use_https: bool,
}

/// HTTP client for the buyer-facing lead endpoints.
///
/// # Example
///
/// ```no_run
/// use cake_client_sdk::buyer::{Client, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(Config::builder().admin_domain("admin.example.com").build())?;
/// let reasons = client.return_reasons().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    host: Url,
    response_format: ResponseFormat,
    client: ReqwestClient,
}

impl Client {
    /// Creates a new buyer API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain does not form a valid URL or the HTTP
    /// client cannot be created.
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            host: crate::host_url(&config.admin_domain, config.use_https)?,
            response_format: config.response_format,
            client: crate::http_client()?,
        })
    }

    async fn call(&self, path: &str, params: &Params) -> Result<ApiResponse> {
        let url = self.host.join(path)?;
        crate::call(&self.client, url, params, self.response_format.is_json()).await
    }

    /// Lists the return reasons accepted by [`Self::return_lead`].
    pub async fn return_reasons(&self) -> Result<ApiResponse> {
        let params = Params::new();

        self.call("buyers/api/1/leads.asmx/GetReturnReasons", &params)
            .await
    }

    /// Returns a purchased lead to the network.
    pub async fn return_lead(
        &self,
        lead_id: &str,
        return_reason_id: i64,
        buyer_contract_id: Option<i64>,
    ) -> Result<ApiResponse> {
        let mut params = Params::new();
        params.push("lead_id", lead_id);
        params.push("return_reason_id", return_reason_id);
        params.push("buyer_contract_id", buyer_contract_id.unwrap_or(0));

        self.call("buyers/api/1/leads.asmx/Return", &params).await
    }

    /// Updates the status, price, or an arbitrary field of a purchased lead.
    pub async fn update_lead(&self, request: &UpdateLeadRequest) -> Result<ApiResponse> {
        request.validate()?;

        let mut params = Params::new();
        params.push("lead_id", request.lead_id.as_str());
        params.push("buyer_contract_id", request.buyer_contract_id.unwrap_or(0));
        params.push("status", request.status.as_deref().unwrap_or(""));
        params.push("sub_status", request.sub_status.as_deref().unwrap_or(""));
        match request.amount {
            Some(amount) => params.push_decimal("amount", amount),
            None => params.push("amount", 0),
        }
        params.push_flag("add_to_existing", request.add_to_existing.unwrap_or(true));
        params.push("field_name", request.field_name.as_deref().unwrap_or(""));
        params.push("field_value", request.field_value.as_deref().unwrap_or(""));
        params.push("return_reason_id", request.return_reason_id.unwrap_or(0));

        self.call("buyers/api/1/leads.asmx/UpdateLead", &params)
            .await
    }
}
