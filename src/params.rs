//! Insertion-ordered parameter maps and argument precondition checks.
//!
//! The vendor's form-encoded endpoints are sensitive to parameter order, so
//! [`Params`] preserves insertion order for both JSON and form submission.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::ser::SerializeMap as _;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::Result;
use crate::error::{Error, InvalidArguments, MissingArgument};

/// Timestamp layout the vendor accepts for date parameters.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An ordered `key -> value` map for one API operation.
///
/// Serializes to a JSON object whose members appear in insertion order, and
/// flattens to `(key, value)` string pairs in the same order for
/// form-encoded submission.
#[derive(Debug, Clone, Default)]
pub(crate) struct Params {
    entries: Vec<(Cow<'static, str>, Value)>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &'static str, value: impl Into<Value>) {
        self.entries.push((Cow::Borrowed(key), value.into()));
    }

    /// Upper-case boolean convention used by most vendor flags.
    pub(crate) fn push_flag(&mut self, key: &'static str, value: bool) {
        self.push(key, if value { "TRUE" } else { "FALSE" });
    }

    pub(crate) fn push_date(&mut self, key: &'static str, value: NaiveDateTime) {
        self.push(key, value.format(DATE_FORMAT).to_string());
    }

    /// Monetary amounts go over the wire in their decimal string form.
    pub(crate) fn push_decimal(&mut self, key: &'static str, value: Decimal) {
        self.push(key, value.to_string());
    }

    /// Flattens into string pairs for `application/x-www-form-urlencoded`
    /// submission, preserving insertion order.
    pub(crate) fn form_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| {
                let rendered = match v {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (k.clone().into_owned(), rendered)
            })
            .collect()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Fails with [`MissingArgument`] unless every named value is present.
pub(crate) fn require(fields: &[(&str, bool)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingArgument::new(missing).into())
    }
}

/// Fails with [`InvalidArguments`] unless at least one named value is present.
pub(crate) fn must_have_one(fields: &[(&str, bool)]) -> Result<()> {
    if fields.iter().any(|(_, present)| *present) {
        Ok(())
    } else {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        Err(Error::invalid_arguments(format!(
            "please provide one of the following: {}",
            names.join(", ")
        )))
    }
}

/// Fails with [`InvalidArguments`] when some but not all named values are
/// present (all-or-none group).
pub(crate) fn if_one_then_all(fields: &[(&str, bool)]) -> Result<()> {
    let supplied = fields.iter().filter(|(_, present)| *present).count();

    if supplied == 0 || supplied == fields.len() {
        Ok(())
    } else {
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        Err(Error::invalid_arguments(format!(
            "if providing one of the following please provide all: {}",
            names.join(", ")
        )))
    }
}

/// Entity ids accepted by the add/edit campaign endpoints must fit the
/// vendor's 1..=999999999 range.
pub(crate) fn id_in_range(name: &str, id: i64) -> Result<()> {
    if (1..=999_999_999).contains(&id) {
        Ok(())
    } else {
        Err(Error::invalid_arguments(format!(
            "{name} must be an integer between 1 and 999999999"
        )))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "simpler test setup")]

    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::error::Kind;

    #[test]
    fn json_serialization_preserves_insertion_order() {
        let mut params = Params::new();
        params.push("api_key", "k");
        params.push("zeta", 1);
        params.push("alpha", 2);

        let body = serde_json::to_string(&params).unwrap();

        assert_eq!(body, r#"{"api_key":"k","zeta":1,"alpha":2}"#);
    }

    #[test]
    fn form_pairs_preserve_insertion_order_and_stringify() {
        let mut params = Params::new();
        params.push("api_key", "k");
        params.push("offer_id", 0);
        params.push_flag("paid_only", false);
        params.push_decimal("payout", dec!(12.50));

        assert_eq!(
            params.form_pairs(),
            vec![
                ("api_key".to_owned(), "k".to_owned()),
                ("offer_id".to_owned(), "0".to_owned()),
                ("paid_only".to_owned(), "FALSE".to_owned()),
                ("payout".to_owned(), "12.50".to_owned()),
            ]
        );
    }

    #[test]
    fn push_date_uses_vendor_layout() {
        let mut params = Params::new();
        let date = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(13, 30, 5)
            .unwrap();
        params.push_date("start_date", date);

        assert_eq!(
            params.form_pairs(),
            vec![("start_date".to_owned(), "2017-01-01 13:30:05".to_owned())]
        );
    }

    #[test]
    fn require_reports_every_missing_name() {
        let err = require(&[("custom_date", false), ("note", true)]).unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("custom_date"));
        assert!(!err.to_string().contains("note"));
    }

    #[test]
    fn must_have_one_accepts_any_member() {
        assert!(must_have_one(&[("conversion_id", false), ("order_id", true)]).is_ok());
    }

    #[test]
    fn must_have_one_rejects_empty_group() {
        let err = must_have_one(&[("conversion_id", false), ("order_id", false)]).unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("order_id"));
    }

    #[test]
    fn if_one_then_all_accepts_none_or_all() {
        assert!(if_one_then_all(&[("payout", false), ("add_to_existing_payout", false)]).is_ok());
        assert!(if_one_then_all(&[("payout", true), ("add_to_existing_payout", true)]).is_ok());
    }

    #[test]
    fn if_one_then_all_rejects_partial_group() {
        let err =
            if_one_then_all(&[("payout", true), ("add_to_existing_payout", false)]).unwrap_err();

        assert_eq!(err.kind(), Kind::Validation);
        assert!(err.to_string().contains("add_to_existing_payout"));
    }

    #[test]
    fn id_in_range_bounds() {
        assert!(id_in_range("campaign_id", 1).is_ok());
        assert!(id_in_range("campaign_id", 999_999_999).is_ok());
        assert!(id_in_range("campaign_id", 0).is_err());
        assert!(id_in_range("campaign_id", 1_000_000_000).is_err());
    }
}
