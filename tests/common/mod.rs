#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests"
)]
#![allow(
    unused,
    reason = "Each test binary uses a subset of these helpers"
)]

use httpmock::MockServer;

pub const API_KEY: &str = "dNJFmId9rI";
pub const AFFILIATE_ID: i64 = 500;

#[cfg(feature = "admin")]
pub fn admin_client(server: &MockServer) -> cake_client_sdk::admin::Client {
    cake_client_sdk::admin::Client::new(
        cake_client_sdk::admin::Config::builder()
            .admin_domain(server.address().to_string())
            .api_key(API_KEY)
            .use_https(false)
            .build(),
    )
    .unwrap()
}

#[cfg(feature = "admin")]
pub fn admin_client_without_key(server: &MockServer) -> cake_client_sdk::admin::Client {
    cake_client_sdk::admin::Client::new(
        cake_client_sdk::admin::Config::builder()
            .admin_domain(server.address().to_string())
            .use_https(false)
            .build(),
    )
    .unwrap()
}

#[cfg(feature = "affiliate")]
pub fn affiliate_client(server: &MockServer) -> cake_client_sdk::affiliate::Client {
    cake_client_sdk::affiliate::Client::new(
        cake_client_sdk::affiliate::Config::builder()
            .admin_domain(server.address().to_string())
            .affiliate_id(AFFILIATE_ID)
            .api_key(API_KEY)
            .use_https(false)
            .build(),
    )
    .unwrap()
}

#[cfg(feature = "buyer")]
pub fn buyer_client(server: &MockServer) -> cake_client_sdk::buyer::Client {
    cake_client_sdk::buyer::Client::new(
        cake_client_sdk::buyer::Config::builder()
            .admin_domain(server.address().to_string())
            .use_https(false)
            .build(),
    )
    .unwrap()
}
