//! Buyer-facing API client and types.
//!
//! **Feature flag:** `buyer` (required to use this module)
//!
//! Lead buyers get a small API surface for returning and updating the leads
//! they have purchased. Unlike the admin and affiliate APIs, these endpoints
//! take no API key.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `/buyers/api/1/leads.asmx/GetReturnReasons` | List valid lead return reasons |
//! | `/buyers/api/1/leads.asmx/Return` | Return a purchased lead |
//! | `/buyers/api/1/leads.asmx/UpdateLead` | Update a purchased lead |

pub mod client;
pub mod types;

pub use client::{Client, Config};
