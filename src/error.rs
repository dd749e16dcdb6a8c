use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt;

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Error related to argument preconditions or missing credentials,
    /// raised before any network activity
    Validation,
    /// Error related to a response that could not be decoded into the
    /// requested shape
    Decode,
    /// Internal error from dependencies
    Internal,
}

#[derive(Debug)]
pub struct Error {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
    backtrace: Backtrace,
}

impl Error {
    pub fn with_source<S: StdError + Send + Sync + 'static>(kind: Kind, source: S) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    pub fn inner(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        let e = self.source.as_deref()?;
        e.downcast_ref::<E>()
    }

    pub fn invalid_arguments<S: Into<String>>(reason: S) -> Self {
        InvalidArguments {
            reason: reason.into(),
        }
        .into()
    }

    pub fn decode<S: Into<String>>(reason: S) -> Self {
        Decode {
            reason: reason.into(),
        }
        .into()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(src) => write!(f, "{:?}: {}", self.kind, src),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// A required argument was not supplied.
#[non_exhaustive]
#[derive(Debug)]
pub struct MissingArgument {
    pub names: Vec<String>,
}

impl MissingArgument {
    pub(crate) fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing argument(s): {}", self.names.join(", "))
    }
}

impl StdError for MissingArgument {}

/// A combination of arguments violated an any-of or all-or-none group.
#[non_exhaustive]
#[derive(Debug)]
pub struct InvalidArguments {
    pub reason: String,
}

impl fmt::Display for InvalidArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid arguments: {}", self.reason)
    }
}

impl StdError for InvalidArguments {}

/// No API key is configured on the client.
#[non_exhaustive]
#[derive(Debug, Clone, Copy)]
pub struct MissingApiKey;

impl fmt::Display for MissingApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no API key has been set; supply one at construction or call set_api_key first"
        )
    }
}

impl StdError for MissingApiKey {}

/// A response could not be decoded into the requested type, typically
/// because the vendor answered with raw text where JSON was required.
#[non_exhaustive]
#[derive(Debug)]
pub struct Decode {
    pub reason: String,
}

impl fmt::Display for Decode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unable to decode response: {}", self.reason)
    }
}

impl StdError for Decode {}

impl From<MissingArgument> for Error {
    fn from(err: MissingArgument) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<InvalidArguments> for Error {
    fn from(err: InvalidArguments) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<MissingApiKey> for Error {
    fn from(err: MissingApiKey) -> Self {
        Error::with_source(Kind::Validation, err)
    }
}

impl From<Decode> for Error {
    fn from(err: Decode) -> Self {
        Error::with_source(Kind::Decode, err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::with_source(Kind::Internal, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_display_should_succeed() {
        let err = MissingArgument::new(["custom_date"]);
        assert_eq!(err.to_string(), "missing argument(s): custom_date");
    }

    #[test]
    fn missing_argument_into_error_should_succeed() {
        let error: Error = MissingArgument::new(["start_date", "end_date"]).into();

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("start_date"));
    }

    #[test]
    fn invalid_arguments_into_error_should_succeed() {
        let error = Error::invalid_arguments("provide one of: conversion_id, order_id");

        assert_eq!(error.kind(), Kind::Validation);
        assert!(
            error
                .downcast_ref::<InvalidArguments>()
                .is_some_and(|e| e.reason.contains("conversion_id"))
        );
    }

    #[test]
    fn missing_api_key_into_error_should_succeed() {
        let error: Error = MissingApiKey.into();

        assert_eq!(error.kind(), Kind::Validation);
        assert!(error.to_string().contains("API key"));
    }
}
