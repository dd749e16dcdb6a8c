//! Shared wire-level types used by all facade clients.

use std::fmt;

use serde_json::Value;

use crate::Result;
use crate::serde_helpers;

/// Body/response encoding negotiated with the vendor.
///
/// The platform's `.asmx` endpoints answer JSON (wrapped in a `{"d": ...}`
/// envelope) when POSTed a JSON body, and XML when POSTed form data, but not
/// consistently for every endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResponseFormat {
    /// POST JSON bodies and unwrap the `d` envelope, falling back to a
    /// form-encoded resubmission when the vendor does not cooperate.
    #[default]
    Json,
    /// Always POST form data and return the raw (XML) body text.
    Xml,
}

impl ResponseFormat {
    #[must_use]
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Outcome of one API call.
///
/// `Json` carries the inner value of the vendor's `{"d": ...}` envelope.
/// `Raw` carries the body text verbatim, either because the client is
/// configured for [`ResponseFormat::Xml`] or because the JSON attempt fell
/// back to a form-encoded resubmission.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ApiResponse {
    Json(Value),
    Raw(String),
}

impl ApiResponse {
    /// Deserializes the `d` envelope contents into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Decode`] error when the response was
    /// raw text, or an [`crate::error::Kind::Internal`] error when the JSON
    /// does not match `T`.
    pub fn decode<T: serde::de::DeserializeOwned>(self) -> Result<T> {
        match self {
            Self::Json(value) => serde_helpers::from_value(value),
            Self::Raw(_) => Err(crate::error::Error::decode(
                "expected a JSON envelope but the vendor returned raw text",
            )),
        }
    }

    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Raw(text) => Some(text),
        }
    }
}

/// Two-state `on`/`off` switch used by campaign and offer flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-state switch for edit operations, where `no_change` keeps the
/// value already stored on the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Setting {
    On,
    Off,
    #[default]
    NoChange,
}

impl Setting {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::NoChange => "no_change",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode flag the vendor pairs with partially-updatable fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModificationType {
    Change,
    #[default]
    DoNotChange,
}

impl ModificationType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::DoNotChange => "do_not_change",
        }
    }
}

impl fmt::Display for ModificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_unwraps_json_variant() {
        let response = ApiResponse::Json(json!({"row_count": 3}));

        #[derive(serde::Deserialize)]
        struct Probe {
            row_count: i64,
        }

        let probe: Probe = response.decode().expect("decode failed");
        assert_eq!(probe.row_count, 3);
    }

    #[test]
    fn decode_rejects_raw_variant() {
        let response = ApiResponse::Raw("<xml/>".to_owned());
        let err = response.decode::<serde_json::Value>().unwrap_err();

        assert_eq!(err.kind(), crate::error::Kind::Decode);
    }

    #[test]
    fn wire_spellings() {
        assert_eq!(Toggle::On.as_str(), "on");
        assert_eq!(Setting::NoChange.as_str(), "no_change");
        assert_eq!(ModificationType::DoNotChange.as_str(), "do_not_change");
    }
}
