use crate::domain::model::{ConversionJob, RecordKind};
use crate::domain::ports::JobProvider;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{validate_delimiter, validate_non_empty, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    pub delimiter: Option<char>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            delimiter: None,
        }
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub kind: RecordKind,
    pub source: PathBuf,
    pub output: PathBuf,
    pub delimiter: Option<char>,
}

impl TomlConfig {
    /// Loads a job file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ReportError::config(format!("invalid TOML job file: {}", e)))
    }

    fn delimiter_for(&self, job: &JobConfig) -> char {
        job.delimiter.or(self.report.delimiter).unwrap_or(',')
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("jobs", &self.jobs)?;
        if let Some(delimiter) = self.report.delimiter {
            validate_delimiter("report.delimiter", delimiter)?;
        }

        for (index, job) in self.jobs.iter().enumerate() {
            validate_path(&format!("jobs[{}].source", index), &job.source)?;
            validate_path(&format!("jobs[{}].output", index), &job.output)?;
            validate_delimiter(&format!("jobs[{}].delimiter", index), self.delimiter_for(job))?;

            if job.source == job.output {
                return Err(ReportError::InvalidConfigValueError {
                    field: format!("jobs[{}].output", index),
                    value: job.output.display().to_string(),
                    reason: "Output would overwrite the source".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl JobProvider for TomlConfig {
    fn base_dir(&self) -> &Path {
        &self.report.base_dir
    }

    fn jobs(&self) -> Result<Vec<ConversionJob>> {
        self.validate()?;
        self.jobs
            .iter()
            .enumerate()
            .map(|(index, job)| {
                let delimiter = validate_delimiter(
                    &format!("jobs[{}].delimiter", index),
                    self.delimiter_for(job),
                )?;
                Ok(ConversionJob::new(job.kind, &job.source, &job.output).with_delimiter(delimiter))
            })
            .collect()
    }
}
