//! Shared domain types for the ANEX analytics export pipeline.
//!
//! This crate holds everything the other crates agree on: the platform /
//! language / originator tags parsed from an export request, the normalized
//! [`AnalyticsPayload`] that providers produce, the per-run
//! [`ReportContext`], and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod context;
pub mod error;
pub mod payload;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use context::ReportContext;
pub use error::{ConfigError, CoreError};
pub use payload::{
    AnalyticsPayload, CountryInfo, MetricRecord, NotableFollower, ProfileInfo, ReachabilityBucket,
    RequestRecord, TrendData,
};
pub use types::{Language, Originator, Platform};

/// Placeholder text rendered for missing or empty values.
///
/// Deliberately distinct from a numeric zero: `"NA"` means "not present",
/// while `"0"` means "present and quantitatively zero".
pub const NA: &str = "NA";
