//! Request tag enums: source platform, report language, and originator.
//!
//! All three are parsed once at the request boundary. An unknown tag is a
//! fatal configuration error; downstream code only ever sees the enums, so
//! every later lookup (column labels, sheet titles) is total by construction.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The two supported source platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl Platform {
    /// Parses a case-insensitive platform tag (`"instagram"`, `"TIKTOK"`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedPlatform`] for any other tag.
    pub fn parse(tag: &str) -> Result<Self, CoreError> {
        match tag.trim().to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "tiktok" => Ok(Platform::Tiktok),
            _ => Err(CoreError::UnsupportedPlatform(tag.to_string())),
        }
    }

    /// Lowercase tag used in file names and log fields.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Output language of the report. Every variant has a full set of
/// registered column labels and sheet titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// Parses a case-insensitive locale tag (`"en"`, `"ES"`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedLanguage`] for a tag without a
    /// registered label set. This is the loud-failure path for unknown
    /// languages: no silent empty column set is representable downstream.
    pub fn parse(tag: &str) -> Result<Self, CoreError> {
        match tag.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            _ => Err(CoreError::UnsupportedLanguage(tag.to_string())),
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Classification of the report requester: an end client or an internal
/// control review. Control reports carry extra columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Originator {
    Client,
    Control,
}

impl Originator {
    /// Parses a case-insensitive originator tag (`"client"`, `"Control"`).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedOriginator`] for any other tag.
    pub fn parse(tag: &str) -> Result<Self, CoreError> {
        match tag.trim().to_lowercase().as_str() {
            "client" => Ok(Originator::Client),
            "control" => Ok(Originator::Control),
            _ => Err(CoreError::UnsupportedOriginator(tag.to_string())),
        }
    }

    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Originator::Client => "client",
            Originator::Control => "control",
        }
    }
}

impl std::fmt::Display for Originator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}
