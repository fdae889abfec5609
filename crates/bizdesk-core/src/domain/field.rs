//! Field Schema and Drafts
//!
//! Records describe their fields once; the list columns, the search filter,
//! the form inputs and validation all read the same table.

use chrono::NaiveDate;
use thiserror::Error;

/// Input kind of a field, decides parsing and the widget the UI renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text
    Text,
    /// Multi-line text (notes, remarks)
    LongText,
    /// Decimal number, empty means zero
    Number,
    /// Calendar date in `YYYY-MM-DD`
    Date,
    /// One of a fixed set of options
    Choice(&'static [&'static str]),
    /// Checkbox, stored as `"true"` / `"false"`
    Flag,
    /// Masked text, never shown in tables
    Password,
}

/// One field of a record: where it appears and how it validates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Marked with a red asterisk; submit is refused while empty
    pub required: bool,
    /// Included in the list's free-text filter
    pub searchable: bool,
    /// Shown as a table column
    pub column: bool,
    /// Rendered as a form input; computed fields are filled in on save
    pub input: bool,
    /// Numbers must be greater than zero
    pub positive: bool,
    /// Value a fresh draft starts with
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            searchable: false,
            column: true,
            input: true,
            positive: false,
            default: "",
        }
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Number)
    }

    pub const fn choice(key: &'static str, label: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(key, label, FieldKind::Choice(options))
    }

    pub const fn required(self) -> Self {
        Self { required: true, ..self }
    }

    pub const fn searchable(self) -> Self {
        Self { searchable: true, ..self }
    }

    /// Form-only field
    pub const fn hidden(self) -> Self {
        Self { column: false, ..self }
    }

    /// Table-only field: stamped or derived, never typed
    pub const fn computed(self) -> Self {
        Self { input: false, ..self }
    }

    pub const fn positive(self) -> Self {
        Self { positive: true, ..self }
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Table text for a raw stored value
    pub fn display(&self, raw: &str) -> String {
        match self.kind {
            FieldKind::Flag => if raw == "true" { "Yes" } else { "No" }.to_string(),
            FieldKind::Password => "••••".to_string(),
            _ => raw.to_string(),
        }
    }

    /// Check one raw value against this spec
    pub fn check(&self, raw: &str) -> Option<FieldProblem> {
        let value = raw.trim();
        if value.is_empty() {
            return self.required.then_some(FieldProblem::Missing);
        }
        match self.kind {
            FieldKind::Number => match value.parse::<f64>() {
                Ok(n) if !n.is_finite() => Some(FieldProblem::NotANumber),
                Ok(n) if self.positive && n <= 0.0 => Some(FieldProblem::NotPositive),
                Ok(_) => None,
                Err(_) => Some(FieldProblem::NotANumber),
            },
            FieldKind::Date if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() => Some(FieldProblem::BadDate),
            FieldKind::Choice(options) if !options.contains(&value) => Some(FieldProblem::UnknownChoice),
            FieldKind::Flag if value != "true" && value != "false" => Some(FieldProblem::UnknownChoice),
            _ => None,
        }
    }
}

/// What is wrong with a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldProblem {
    #[error("can not be empty")]
    Missing,
    #[error("must be a number")]
    NotANumber,
    #[error("must be greater than zero")]
    NotPositive,
    #[error("must be a date (YYYY-MM-DD)")]
    BadDate,
    #[error("has an unknown value")]
    UnknownChoice,
}

/// Validation failure for one field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label} {problem}")]
pub struct FieldError {
    pub key: &'static str,
    pub label: &'static str,
    pub problem: FieldProblem,
}

/// In-progress, unsaved form values keyed by field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    values: Vec<(&'static str, String)>,
}

impl Draft {
    /// Draft with every field at its default
    pub fn empty(fields: &[FieldSpec]) -> Self {
        Self {
            values: fields.iter().map(|spec| (spec.key, spec.default.to_string())).collect(),
        }
    }

    /// Raw value of a field, empty for unknown keys
    pub fn get(&self, key: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Set a field; returns false when the key is not part of this draft
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.values.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Trimmed text value
    pub fn text(&self, key: &str) -> String {
        self.get(key).trim().to_string()
    }

    /// Numeric value, zero when empty or unparsable
    pub fn number(&self, key: &str) -> f64 {
        self.get(key).trim().parse().unwrap_or(0.0)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == "true"
    }

    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.get(key).trim(), "%Y-%m-%d").ok()
    }

    /// Fill blank computed date fields with `today`
    pub fn stamp_dates(&mut self, fields: &[FieldSpec], today: NaiveDate) {
        for spec in fields.iter().filter(|s| !s.input && s.kind == FieldKind::Date) {
            if self.get(spec.key).trim().is_empty() {
                self.set(spec.key, format_date(Some(today)));
            }
        }
    }

    /// Every problem in the inputs of the draft, in field order
    pub fn validate(&self, fields: &[FieldSpec]) -> Vec<FieldError> {
        fields
            .iter()
            .filter(|spec| spec.input)
            .filter_map(|spec| {
                spec.check(self.get(spec.key)).map(|problem| FieldError {
                    key: spec.key,
                    label: spec.label,
                    problem,
                })
            })
            .collect()
    }
}

/// Render a number the way the tables show it: no trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Render an optional date as `YYYY-MM-DD`, empty when unset
pub fn format_date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("name", "Name").required().searchable(),
        FieldSpec::number("salary", "Salary"),
        FieldSpec::new("joined", "Joined", FieldKind::Date),
        FieldSpec::choice("status", "Status", &["Active", "Inactive"]).with_default("Active"),
    ];

    #[test]
    fn test_empty_draft_uses_defaults() {
        let draft = Draft::empty(FIELDS);
        assert_eq!(draft.get("name"), "");
        assert_eq!(draft.get("status"), "Active");
        assert_eq!(draft.get("unknown"), "");
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut draft = Draft::empty(FIELDS);
        assert!(draft.set("name", "Brac Bank"));
        assert!(!draft.set("colour", "red"));
        assert_eq!(draft.text("name"), "Brac Bank");
    }

    #[test]
    fn test_validate_reports_missing_and_malformed() {
        let mut draft = Draft::empty(FIELDS);
        draft.set("salary", "lots");
        draft.set("joined", "10/01/2025");
        let errors = draft.validate(FIELDS);
        let problems: Vec<_> = errors.iter().map(|e| (e.key, e.problem)).collect();
        assert_eq!(
            problems,
            vec![
                ("name", FieldProblem::Missing),
                ("salary", FieldProblem::NotANumber),
                ("joined", FieldProblem::BadDate),
            ]
        );
        assert_eq!(errors[0].to_string(), "Name can not be empty");
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut draft = Draft::empty(FIELDS);
        draft.set("name", "   ");
        let errors = draft.validate(FIELDS);
        assert_eq!(errors.len(), 1);
        assert_eq!((errors[0].key, errors[0].problem), ("name", FieldProblem::Missing));
    }

    #[test]
    fn test_unknown_choice_rejected() {
        let mut draft = Draft::empty(FIELDS);
        draft.set("name", "x");
        draft.set("status", "Retired");
        assert_eq!(draft.validate(FIELDS)[0].problem, FieldProblem::UnknownChoice);
    }

    #[test]
    fn test_number_helpers() {
        let mut draft = Draft::empty(FIELDS);
        assert_eq!(draft.number("salary"), 0.0);
        draft.set("salary", " 2.5 ");
        assert_eq!(draft.number("salary"), 2.5);
        assert_eq!(format_number(233.0), "233");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_positive_numbers() {
        const QTY: &[FieldSpec] = &[FieldSpec::number("quantity", "Quantity").required().positive()];
        let mut draft = Draft::empty(QTY);
        draft.set("quantity", "0");
        let errors = draft.validate(QTY);
        assert_eq!(errors[0].problem, FieldProblem::NotPositive);
        assert_eq!(errors[0].to_string(), "Quantity must be greater than zero");

        draft.set("quantity", "0.25");
        assert!(draft.validate(QTY).is_empty());
    }

    #[test]
    fn test_computed_fields_are_stamped_not_validated() {
        const SENT: &[FieldSpec] = &[
            FieldSpec::text("message", "Message").required(),
            FieldSpec::new("date", "Date", FieldKind::Date).required().computed(),
        ];
        let mut draft = Draft::empty(SENT);
        draft.set("message", "Eid offer");
        assert!(draft.validate(SENT).is_empty());

        let today = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        draft.stamp_dates(SENT, today);
        assert_eq!(draft.get("date"), "2025-03-16");

        // an existing date is kept
        draft.stamp_dates(SENT, today.succ_opt().unwrap());
        assert_eq!(draft.date("date"), Some(today));
    }

    #[test]
    fn test_flag_display() {
        let spec = FieldSpec::new("active", "Active", FieldKind::Flag);
        assert_eq!(spec.display("true"), "Yes");
        assert_eq!(spec.display("false"), "No");
    }
}
