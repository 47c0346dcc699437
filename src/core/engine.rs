use crate::core::pipeline::{ConversionOutcome, ConversionPipeline};
use crate::domain::model::ConversionJob;
use crate::domain::ports::Storage;
use crate::utils::error::ErrorSeverity;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize)]
pub struct ConversionSummary {
    pub outcomes: Vec<ConversionOutcome>,
    /// Destinations present on disk after the run, in job order.
    pub created_outputs: Vec<PathBuf>,
}

impl ConversionSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn records_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.records_written).sum()
    }

    pub fn worst_severity(&self) -> Option<ErrorSeverity> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error.as_ref())
            .map(|e| e.severity())
            .max()
    }

    pub fn exit_code(&self) -> i32 {
        match self.worst_severity() {
            None | Some(ErrorSeverity::Low) => 0,
            Some(ErrorSeverity::Medium) => 2,
            Some(ErrorSeverity::High) => 1,
        }
    }
}

/// Console line announcing job `position` (1-based).
pub fn progress_line(position: usize, job: &ConversionJob) -> String {
    format!("{}. Converting {}...", position, job.kind.description())
}

pub struct ReportEngine<S: Storage + Clone> {
    pipeline: ConversionPipeline<S>,
}

impl<S: Storage + Clone> ReportEngine<S> {
    pub fn new(pipeline: ConversionPipeline<S>) -> Self {
        Self { pipeline }
    }

    /// Runs `jobs` in order. A failed job never stops the ones after it.
    pub fn run(&self, jobs: &[ConversionJob]) -> ConversionSummary {
        self.run_with_progress(jobs, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `on_job` with the 1-based position
    /// of each job before it starts.
    pub fn run_with_progress<F>(&self, jobs: &[ConversionJob], mut on_job: F) -> ConversionSummary
    where
        F: FnMut(usize, &ConversionJob),
    {
        tracing::info!("Starting CSV to TXT conversion...");

        let mut summary = ConversionSummary::default();
        for (index, job) in jobs.iter().enumerate() {
            on_job(index + 1, job);
            tracing::info!("{}", progress_line(index + 1, job));
            summary.outcomes.push(self.pipeline.run_job(job));
        }

        summary.created_outputs = jobs
            .iter()
            .filter(|job| self.pipeline.storage().exists(&job.destination))
            .map(|job| self.pipeline.storage().resolve(&job.destination))
            .collect();

        tracing::info!(
            "Conversion completed! {} succeeded, {} failed, {} records written",
            summary.succeeded(),
            summary.failed(),
            summary.records_written()
        );
        summary
    }
}
