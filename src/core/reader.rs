use crate::domain::model::{FieldValue, Record, RecordSet};
use crate::domain::ports::Storage;
use crate::utils::error::{ReadCause, ReportError, Result};
use std::io;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

pub struct RecordReader<S: Storage> {
    storage: S,
    delimiter: u8,
}

impl<S: Storage> RecordReader<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Reads `path` into records. The first row supplies the field keys.
    ///
    /// A missing file yields [`ReportError::SourceMissing`]; unreadable or
    /// undecodable content yields [`ReportError::ReadFailure`]. Either way the
    /// caller has no records to render.
    pub fn read(&self, path: &Path) -> Result<RecordSet> {
        let bytes = match self.storage.read_file(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Source {} not found", path.display());
                return Err(ReportError::source_missing(path));
            }
            Err(e) => return Err(ReportError::read_failure(path, e)),
        };

        let records = parse_records(&bytes, self.delimiter)
            .map_err(|cause| ReportError::read_failure(path, cause))?;

        tracing::info!(
            "Successfully read {} rows from {}",
            records.len(),
            path.display()
        );
        Ok(records)
    }
}

/// Parses UTF-8 delimited text with a header row.
///
/// Short rows get [`FieldValue::Absent`] for the missing columns. Values past
/// the last header are dropped.
pub fn parse_records(bytes: &[u8], delimiter: u8) -> std::result::Result<RecordSet, ReadCause> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut records = RecordSet::new();

    for (index, row) in reader.records().enumerate() {
        let row = row?;

        if row.len() > headers.len() {
            tracing::debug!(
                "Row {} has {} values for {} columns, discarding the extra values",
                index + 1,
                row.len(),
                headers.len()
            );
        }

        let mut record = Record::new();
        for (column, key) in headers.iter().enumerate() {
            let value = match row.get(column) {
                Some(value) => FieldValue::Present(value.to_string()),
                None => FieldValue::Absent,
            };
            record.insert(key, value);
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::MockStorage;

    #[test]
    fn test_parse_preserves_row_order() {
        let csv = "Plan,Price\nBasic,10\nPlus,20\nMax,30\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();

        let names: Vec<_> = records.iter().map(|r| r.get("Plan").unwrap()).collect();
        assert_eq!(names, vec!["Basic", "Plus", "Max"]);
    }

    #[test]
    fn test_short_row_marks_missing_columns_absent() {
        let csv = "Plan,Price,Data\nBasic,10\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();
        let record = records.iter().next().unwrap();

        assert_eq!(record.get("Price"), Some("10"));
        assert_eq!(record.value("Data"), Some(&FieldValue::Absent));
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_long_row_is_truncated_to_headers() {
        let csv = "Plan,Price\nBasic,10,surplus,more\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();
        let record = records.iter().next().unwrap();

        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["Plan", "Price"]);
        assert_eq!(record.get("Price"), Some("10"));
    }

    #[test]
    fn test_quoted_values_and_empty_cells() {
        let csv = "OfferCode,Description,Eligibility\nSAVE10,\"10% off, first month\",\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();
        let record = records.iter().next().unwrap();

        assert_eq!(record.get("Description"), Some("10% off, first month"));
        assert_eq!(record.get("Eligibility"), Some(""));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = "Plan,Price\n\nBasic,10\n\n\nPlus,20\n\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();

        assert_eq!(records.len(), 2);
        let names: Vec<_> = records.iter().map(|r| r.get("Plan").unwrap()).collect();
        assert_eq!(names, vec!["Basic", "Plus"]);
    }

    #[test]
    fn test_duplicate_header_takes_later_column() {
        let csv = "Plan,Plan,Price\nA,B\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();
        let record = records.iter().next().unwrap();

        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["Plan", "Price"]);
        assert_eq!(record.get("Plan"), Some("B"));
        assert_eq!(record.value("Price"), Some(&FieldValue::Absent));
    }

    #[test]
    fn test_bom_is_stripped_from_first_header() {
        let csv = "\u{feff}Plan,Price\nBasic,10\n";
        let records = parse_records(csv.as_bytes(), b',').unwrap();
        assert_eq!(records.iter().next().unwrap().get("Plan"), Some("Basic"));
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = "Plan;Price\nBasic;10\n";
        let records = parse_records(csv.as_bytes(), b';').unwrap();
        assert_eq!(records.iter().next().unwrap().get("Price"), Some("10"));
    }

    #[test]
    fn test_header_only_and_empty_sources() {
        assert!(parse_records(b"Plan,Price\n", b',').unwrap().is_empty());
        assert!(parse_records(b"", b',').unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let bytes = b"Plan,Price\n\xff\xfe,10\n";
        let err = parse_records(bytes, b',').unwrap_err();
        assert!(matches!(err, ReadCause::Decode(_)));
    }

    #[test]
    fn test_read_missing_source() {
        let reader = RecordReader::new(MockStorage::new());
        let err = reader.read(Path::new("plans.csv")).unwrap_err();
        assert!(matches!(err, ReportError::SourceMissing { .. }));
    }

    #[test]
    fn test_read_io_failure_is_read_failure() {
        let storage = MockStorage::new();
        storage.fail_reads_with(io::ErrorKind::PermissionDenied);
        let reader = RecordReader::new(storage);

        let err = reader.read(Path::new("plans.csv")).unwrap_err();
        assert!(matches!(
            err,
            ReportError::ReadFailure {
                source: ReadCause::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_read_through_storage() {
        let storage = MockStorage::new();
        storage.put("offers.tsv", "OfferCode\tDescription\nA1\tStay with us\n");
        let reader = RecordReader::new(storage).with_delimiter(b'\t');

        let records = reader.read(Path::new("offers.tsv")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records.iter().next().unwrap().get("Description"),
            Some("Stay with us")
        );
    }
}
