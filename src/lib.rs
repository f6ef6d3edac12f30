pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::AgeReportPipeline};
pub use domain::model::{Record, ReportRow, RunSummary};
pub use utils::error::{ReportError, Result};
