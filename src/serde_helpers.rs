//! Serde helpers for lenient deserialization of vendor responses.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;

/// Deserializes a `d`-envelope value into `T`.
///
/// When the `tracing` feature is enabled, failures are logged with the
/// offending payload before the error is returned; the vendor's export
/// shapes drift occasionally and the log line is the fastest way to spot a
/// new field type.
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    #[cfg(feature = "tracing")]
    {
        let original = value.clone();
        serde_json::from_value(value)
            .inspect_err(|e| {
                tracing::error!(
                    type_name = %std::any::type_name::<T>(),
                    json = %original,
                    error = %e,
                    "deserialization failed"
                );
            })
            .map_err(Into::into)
    }
    #[cfg(not(feature = "tracing"))]
    {
        Ok(serde_json::from_value(value)?)
    }
}

/// A `serde_as` type that deserializes strings or integers as `String`.
///
/// Several export fields (transaction ids, sub ids, tracking ids) arrive as
/// either spelling depending on the platform version. Use with
/// `#[serde_as(as = "StringFromAny")]` for `String` fields or
/// `#[serde_as(as = "Option<StringFromAny>")]` for `Option<String>`.
pub struct StringFromAny;

impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{self, Visitor};

        struct StringOrNumberVisitor;

        impl Visitor<'_> for StringOrNumberVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("string or integer")
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_owned())
            }

            fn visit_string<E>(self, v: String) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrNumberVisitor)
    }
}

impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}
