use crate::domain::model::{ConversionJob, RecordKind};
use crate::domain::ports::JobProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_delimiter, validate_path, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-report")]
#[command(about = "Convert plan and retention-offer CSV files into text reports")]
pub struct CliConfig {
    /// Directory holding the default SingaPling CSV files and reports
    #[arg(long, default_value = "documents")]
    pub documents_dir: PathBuf,

    /// Convert only this record type
    #[arg(long, value_enum)]
    pub kind: Option<RecordKind>,

    /// Source CSV for --kind (defaults to the kind's file in --documents-dir)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Report destination for --kind (defaults to the kind's file in --documents-dir)
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = ',')]
    pub delimiter: char,

    /// TOML job file; replaces the job flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the outcome summary as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    fn default_job(&self, kind: RecordKind, delimiter: u8) -> ConversionJob {
        ConversionJob::new(
            kind,
            self.documents_dir.join(kind.default_source_name()),
            self.documents_dir.join(kind.default_output_name()),
        )
        .with_delimiter(delimiter)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("documents_dir", &self.documents_dir)?;
        validate_delimiter("delimiter", self.delimiter)?;

        if self.kind.is_none() && (self.source.is_some() || self.output.is_some()) {
            return Err(ReportError::config(
                "--source and --output require --kind",
            ));
        }
        if let Some(source) = &self.source {
            validate_path("source", source)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }
        Ok(())
    }
}

impl JobProvider for CliConfig {
    fn base_dir(&self) -> &Path {
        Path::new(".")
    }

    fn jobs(&self) -> Result<Vec<ConversionJob>> {
        self.validate()?;
        let delimiter = validate_delimiter("delimiter", self.delimiter)?;

        let Some(kind) = self.kind else {
            return Ok(RecordKind::ALL
                .iter()
                .map(|&kind| self.default_job(kind, delimiter))
                .collect());
        };

        let mut job = self.default_job(kind, delimiter);
        if let Some(source) = &self.source {
            job.source = source.clone();
        }
        if let Some(output) = &self.output {
            job.destination = output.clone();
        }
        Ok(vec![job])
    }
}
