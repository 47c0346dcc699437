use crate::domain::model::RecordSet;
use crate::domain::ports::Storage;
use crate::domain::template::FieldTemplate;
use crate::utils::error::{ReportError, Result};
use std::path::Path;

pub struct ReportRenderer<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportRenderer<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the report for `records` to `destination` and returns the number of blocks.
    ///
    /// The report is built in memory first, so a failed write never leaves a
    /// partial report behind.
    pub fn render(
        &self,
        records: &RecordSet,
        template: &FieldTemplate,
        destination: &Path,
    ) -> Result<usize> {
        let report = render_report(records, template);

        tracing::debug!(
            "Writing {} bytes to {}",
            report.len(),
            destination.display()
        );
        self.storage
            .write_file(destination, report.as_bytes())
            .map_err(|e| ReportError::write_failure(destination, e))?;

        tracing::info!(
            "Wrote {} {} blocks to {}",
            records.len(),
            template.record_label,
            destination.display()
        );
        Ok(records.len())
    }
}

pub fn render_report(records: &RecordSet, template: &FieldTemplate) -> String {
    let mut out = String::new();

    out.push_str(template.title);
    out.push('\n');
    out.push_str(&template.banner());
    out.push_str("\n\n");

    let divider = template.divider();
    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("{} {}:\n", template.record_label, index + 1));
        for field in template.fields {
            out.push_str(&format!("  {}: {}\n", field.label, field.render_value(record)));
        }
        out.push_str(&divider);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::MockStorage;
    use crate::domain::model::Record;
    use crate::domain::template::{OFFER_TEMPLATE, PLAN_TEMPLATE};
    use std::io;

    fn basic_plan() -> Record {
        Record::new()
            .with("Plan", "Basic")
            .with("Price", "10")
            .with("Data", "5GB")
            .with("Service Type", "Mobile")
            .with("Speed", "4G")
    }

    #[test]
    fn test_plan_report_layout() {
        let records: RecordSet = vec![basic_plan()].into_iter().collect();
        let report = render_report(&records, &PLAN_TEMPLATE);

        let expected = format!(
            "SINGAPLING PLAN DETAILS\n{}\n\n\
             Plan 1:\n  Name: Basic\n  Price: $10\n  Data: 5GB\n  Service Type: Mobile\n  Speed: 4G\n{}\n",
            "=".repeat(50),
            "-".repeat(30)
        );
        assert_eq!(report, expected);
    }

    #[test]
    fn test_offer_report_numbers_blocks_in_order() {
        let records: RecordSet = vec![
            Record::new().with("OfferCode", "A1"),
            Record::new().with("OfferCode", "B2"),
        ]
        .into_iter()
        .collect();

        let report = render_report(&records, &OFFER_TEMPLATE);

        let first = report.find("Offer 1:\n  Code: A1").unwrap();
        let second = report.find("Offer 2:\n  Code: B2").unwrap();
        assert!(first < second);
        assert_eq!(report.matches(&"-".repeat(50)).count(), 2);
        assert!(report.contains("  Description: N/A\n"));
    }

    #[test]
    fn test_empty_record_set_renders_banner_only() {
        let report = render_report(&RecordSet::new(), &PLAN_TEMPLATE);
        assert_eq!(report, format!("SINGAPLING PLAN DETAILS\n{}\n\n", "=".repeat(50)));
    }

    #[test]
    fn test_render_writes_through_storage() {
        let storage = MockStorage::new();
        let renderer = ReportRenderer::new(storage.clone());
        let records: RecordSet = vec![basic_plan()].into_iter().collect();

        let written = renderer
            .render(&records, &PLAN_TEMPLATE, Path::new("plans.txt"))
            .unwrap();

        assert_eq!(written, 1);
        let saved = storage.get("plans.txt").unwrap();
        assert!(saved.contains("  Price: $10\n"));
    }

    #[test]
    fn test_render_write_failure() {
        let storage = MockStorage::new();
        storage.fail_writes_with(io::ErrorKind::PermissionDenied);
        let renderer = ReportRenderer::new(storage.clone());

        let err = renderer
            .render(&RecordSet::new(), &PLAN_TEMPLATE, Path::new("plans.txt"))
            .unwrap_err();

        assert!(matches!(err, ReportError::WriteFailure { .. }));
        assert!(storage.get("plans.txt").is_none());
    }
}
