#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "admin")]
pub mod admin;
#[cfg(feature = "affiliate")]
pub mod affiliate;
#[cfg(feature = "buyer")]
pub mod buyer;
pub mod error;
pub(crate) mod params;
pub(crate) mod serde_helpers;
pub mod types;

#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use reqwest::Client as ReqwestClient;
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use reqwest::header::{HeaderMap, HeaderValue};
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use serde_json::Value;
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use url::Url;

use crate::error::Error;
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use crate::params::Params;
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
use crate::types::ApiResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Builds the shared HTTP client. Content type is set per request, since the
/// fallback path switches a JSON submission to form encoding.
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
pub(crate) fn http_client() -> Result<ReqwestClient> {
    let mut headers = HeaderMap::new();

    headers.insert("User-Agent", HeaderValue::from_static("cake_client_sdk"));
    headers.insert("Accept", HeaderValue::from_static("*/*"));
    headers.insert("Connection", HeaderValue::from_static("keep-alive"));

    Ok(ReqwestClient::builder().default_headers(headers).build()?)
}

/// Builds the base URL every operation path is joined onto.
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
pub(crate) fn host_url(admin_domain: &str, use_https: bool) -> Result<Url> {
    let scheme = if use_https { "https" } else { "http" };
    Ok(Url::parse(&format!("{scheme}://{admin_domain}/"))?)
}

/// Issues one logical API call.
///
/// With `as_json` set, the parameters are POSTed as a JSON body and the
/// response is unwrapped from the vendor's `{"d": ...}` envelope. If the
/// POST, the parse, or the envelope extraction fails, the same request is
/// re-issued form-encoded and the raw body text is returned instead — the
/// vendor is inconsistent about which endpoints speak JSON. Without
/// `as_json`, the form-encoded POST is the only attempt.
///
/// Status codes are never inspected; vendor-side errors come back to the
/// caller as whatever text the vendor produced.
#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(client, params), fields(path = url.path()))
)]
pub(crate) async fn call(
    client: &ReqwestClient,
    url: Url,
    params: &Params,
    as_json: bool,
) -> Result<ApiResponse> {
    if as_json {
        match json_call(client, url.clone(), params).await {
            Ok(data) => return Ok(ApiResponse::Json(data)),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    path = url.path(),
                    error = %_err,
                    "JSON envelope attempt failed, resubmitting form-encoded"
                );
            }
        }
    }

    let text = form_call(client, url, params).await?;
    Ok(ApiResponse::Raw(text))
}

#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
async fn json_call(client: &ReqwestClient, url: Url, params: &Params) -> Result<Value> {
    let text = client.post(url).json(params).send().await?.text().await?;
    let mut body: Value = serde_json::from_str(&text)?;

    body.as_object_mut()
        .and_then(|envelope| envelope.remove("d"))
        .ok_or_else(|| Error::decode("response has no `d` envelope"))
}

#[cfg(any(feature = "admin", feature = "affiliate", feature = "buyer"))]
async fn form_call(client: &ReqwestClient, url: Url, params: &Params) -> Result<String> {
    let response = client.post(url).form(&params.form_pairs()).send().await?;
    Ok(response.text().await?)
}

#[cfg(all(
    test,
    any(feature = "admin", feature = "affiliate", feature = "buyer")
))]
mod tests {
    use super::*;

    #[test]
    fn host_url_schemes() {
        let https = host_url("admin.example.com", true).expect("parse failed");
        assert_eq!(https.as_str(), "https://admin.example.com/");

        let http = host_url("127.0.0.1:8080", false).expect("parse failed");
        assert_eq!(http.as_str(), "http://127.0.0.1:8080/");
    }
}
