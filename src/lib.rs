pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::LocalStorage;
pub use crate::core::{
    engine::{ConversionSummary, ReportEngine},
    pipeline::{ConversionOutcome, ConversionPipeline},
    reader::RecordReader,
    renderer::ReportRenderer,
};
pub use crate::domain::model::{ConversionJob, FieldValue, Record, RecordKind, RecordSet};
pub use crate::domain::template::{FieldTemplate, OFFER_TEMPLATE, PLACEHOLDER, PLAN_TEMPLATE};
pub use crate::utils::error::{ReportError, Result};
