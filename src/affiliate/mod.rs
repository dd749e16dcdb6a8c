//! Affiliate-facing API client and types.
//!
//! **Feature flag:** `affiliate` (required to use this module)
//!
//! Affiliates (traffic sources) authenticate with their affiliate id plus an
//! affiliate-scoped API key and get access to their own account, the offers
//! available to them, and their performance reports. Every endpoint lives
//! under `/affiliates/api/{version}/{resource}.asmx`.
//!
//! ## Endpoint groups
//!
//! | Resource | Operations |
//! |----------|------------|
//! | `account.asmx` | Contact info, language, media types, price formats, vertical categories, lookups, password reset |
//! | `offers.asmx` | Offer feed, campaign details, creatives, pixels, postback and test links, sub affiliates |
//! | `reports.asmx` | Bills, clicks, conversions, daily/hourly summaries, order details, referrals |
//!
//! # Example
//!
//! ```no_run
//! use cake_client_sdk::affiliate::{Client, Config};
//! use cake_client_sdk::affiliate::types::request::OfferFeedRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     Config::builder()
//!         .admin_domain("admin.example-network.com")
//!         .affiliate_id(500)
//!         .api_key("dNJFmId9rI")
//!         .build(),
//! )?;
//!
//! let offers = client
//!     .offer_feed(&OfferFeedRequest::builder().country_code("US").build())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, Config};
