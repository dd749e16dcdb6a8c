//! Admin (network operator) API client and types.
//!
//! **Feature flag:** `admin` (required to use this module)
//!
//! The admin API is the platform's full management surface: accounting
//! exports, entity creation and editing, state exports, enumerations,
//! reporting, public signup, and conversion adjustments. Every endpoint
//! lives under `/api/{version}/{resource}.asmx` and takes the network API
//! key as its first parameter.
//!
//! ## Endpoint groups
//!
//! | Resource | Operations |
//! |----------|------------|
//! | `accounting.asmx` | Advertiser and affiliate bill exports |
//! | `addedit.asmx` | Create/edit advertisers, affiliates, buyers, buyer contracts, campaigns, contacts, creatives, offers, blacklists, caps, exceptions |
//! | `export.asmx` | Entity state exports (advertisers, affiliates, campaigns, offers, creatives, ...) |
//! | `get.asmx` | Id/name enumerations (statuses, currencies, countries, verticals, ...) |
//! | `reports.asmx`, `reports_lite_clicks.asmx` | Performance reporting |
//! | `signup.asmx` | Public advertiser/affiliate signup |
//! | `track.asmx` | Conversion updates and dispositions |
//!
//! A handful of edit operations read current state with an export call
//! before writing (to preserve notes, flags, or the configured pixel hash).
//! There is no locking between the read and the write; a concurrent edit in
//! that window is silently lost, exactly as in the platform's own tooling.
//!
//! # Example
//!
//! ```no_run
//! use cake_client_sdk::admin::{Client, Config};
//! use cake_client_sdk::admin::types::request::ExportAffiliatesRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     Config::builder()
//!         .admin_domain("admin.example-network.com")
//!         .api_key("dNJFmId9rI")
//!         .build(),
//! )?;
//!
//! let affiliates = client
//!     .export_affiliates(&ExportAffiliatesRequest::builder().row_limit(100).build())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::{Client, Config};
