use crate::core::reader::RecordReader;
use crate::core::renderer::ReportRenderer;
use crate::domain::model::{ConversionJob, RecordKind};
use crate::domain::ports::Storage;
use crate::domain::template::FieldTemplate;
use crate::utils::error::ReportError;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Result of one conversion. Failures are carried here rather than returned as `Err`.
#[derive(Debug, Serialize)]
pub struct ConversionOutcome {
    pub kind: RecordKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub success: bool,
    pub records_written: usize,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<ReportError>,
}

fn serialize_error<S: Serializer>(
    error: &Option<ReportError>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}

impl ConversionOutcome {
    fn succeeded(job: &ConversionJob, records_written: usize) -> Self {
        Self {
            kind: job.kind,
            source: job.source.clone(),
            destination: job.destination.clone(),
            success: true,
            records_written,
            error: None,
        }
    }

    fn failed(job: &ConversionJob, error: ReportError) -> Self {
        Self {
            kind: job.kind,
            source: job.source.clone(),
            destination: job.destination.clone(),
            success: false,
            records_written: 0,
            error: Some(error),
        }
    }
}

pub struct ConversionPipeline<S: Storage + Clone> {
    storage: S,
}

impl<S: Storage + Clone> ConversionPipeline<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Converts one comma-delimited source into the report for `kind`.
    pub fn convert(&self, kind: RecordKind, source: &Path, destination: &Path) -> ConversionOutcome {
        self.run_job(&ConversionJob::new(kind, source, destination))
    }

    /// Reads then renders. A source that cannot be read is never rendered,
    /// so no destination file appears for it.
    pub fn run_job(&self, job: &ConversionJob) -> ConversionOutcome {
        let span = tracing::info_span!("convert", kind = %job.kind);
        let _enter = span.enter();

        tracing::debug!("Reading {}", job.source.display());
        let reader = RecordReader::new(self.storage.clone()).with_delimiter(job.delimiter);
        let records = match reader.read(&job.source) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Skipping {} report: {}", job.kind, e);
                return ConversionOutcome::failed(job, e);
            }
        };

        tracing::debug!("Rendering {} records", records.len());
        let renderer = ReportRenderer::new(self.storage.clone());
        match renderer.render(&records, FieldTemplate::for_kind(job.kind), &job.destination) {
            Ok(written) => ConversionOutcome::succeeded(job, written),
            Err(e) => {
                tracing::error!("{} report failed: {}", job.kind, e);
                ConversionOutcome::failed(job, e)
            }
        }
    }
}
