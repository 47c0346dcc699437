//! Declarative report layouts, one per record kind.

use crate::domain::model::{Record, RecordKind};

/// Rendered in place of a value whose key is absent from the record.
pub const PLACEHOLDER: &str = "N/A";

/// Width of the `=` rule under every report title.
pub const BANNER_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Verbatim,
    /// Prefixes the raw value with a currency symbol. The value is not parsed.
    Currency(&'static str),
}

impl FieldFormat {
    pub fn apply(&self, value: &str) -> String {
        match self {
            FieldFormat::Verbatim => value.to_string(),
            FieldFormat::Currency(symbol) => format!("{}{}", symbol, value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateField {
    pub label: &'static str,
    pub key: &'static str,
    pub format: FieldFormat,
}

impl TemplateField {
    pub const fn verbatim(label: &'static str, key: &'static str) -> Self {
        Self {
            label,
            key,
            format: FieldFormat::Verbatim,
        }
    }

    pub const fn currency(label: &'static str, key: &'static str, symbol: &'static str) -> Self {
        Self {
            label,
            key,
            format: FieldFormat::Currency(symbol),
        }
    }

    /// Formatted value for `record`, or [`PLACEHOLDER`] when the key has no value.
    pub fn render_value(&self, record: &Record) -> String {
        match record.get(self.key) {
            Some(value) => self.format.apply(value),
            None => PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTemplate {
    pub title: &'static str,
    pub record_label: &'static str,
    /// Plans get a short rule, offers a full-width one.
    pub divider_width: usize,
    pub fields: &'static [TemplateField],
}

pub const PLAN_TEMPLATE: FieldTemplate = FieldTemplate {
    title: "SINGAPLING PLAN DETAILS",
    record_label: "Plan",
    divider_width: 30,
    fields: &[
        TemplateField::verbatim("Name", "Plan"),
        TemplateField::currency("Price", "Price", "$"),
        TemplateField::verbatim("Data", "Data"),
        TemplateField::verbatim("Service Type", "Service Type"),
        TemplateField::verbatim("Speed", "Speed"),
    ],
};

pub const OFFER_TEMPLATE: FieldTemplate = FieldTemplate {
    title: "SINGAPLING RETENTION OFFERS",
    record_label: "Offer",
    divider_width: 50,
    fields: &[
        TemplateField::verbatim("Code", "OfferCode"),
        TemplateField::verbatim("Description", "Description"),
        TemplateField::verbatim("Eligibility", "Eligibility"),
    ],
};

impl FieldTemplate {
    pub fn for_kind(kind: RecordKind) -> &'static FieldTemplate {
        match kind {
            RecordKind::Plan => &PLAN_TEMPLATE,
            RecordKind::Offer => &OFFER_TEMPLATE,
        }
    }

    pub fn divider(&self) -> String {
        "-".repeat(self.divider_width)
    }

    pub fn banner(&self) -> String {
        "=".repeat(BANNER_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_prefix_is_not_validated() {
        let price = TemplateField::currency("Price", "Price", "$");

        let numeric = Record::new().with("Price", "10");
        let text = Record::new().with("Price", "free");
        let empty = Record::new().with("Price", "");

        assert_eq!(price.render_value(&numeric), "$10");
        assert_eq!(price.render_value(&text), "$free");
        assert_eq!(price.render_value(&empty), "$");
    }

    #[test]
    fn test_placeholder_skips_formatting() {
        let price = TemplateField::currency("Price", "Price", "$");
        assert_eq!(price.render_value(&Record::new()), "N/A");
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let name = TemplateField::verbatim("Name", "Plan");
        let record = Record::new().with("plan", "Basic");
        assert_eq!(name.render_value(&record), PLACEHOLDER);
    }

    #[test]
    fn test_templates_per_kind() {
        let plan = FieldTemplate::for_kind(RecordKind::Plan);
        let offer = FieldTemplate::for_kind(RecordKind::Offer);

        assert_eq!(plan.divider(), "-".repeat(30));
        assert_eq!(offer.divider(), "-".repeat(50));
        assert_eq!(plan.fields.len(), 5);
        assert_eq!(offer.fields.len(), 3);
        assert_eq!(offer.fields[0].key, "OfferCode");
    }
}
