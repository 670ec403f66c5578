//! Per-field validation results.

use super::submission::FormSchema;
use crate::domain::FieldError;
use indexmap::IndexMap;
use serde::Serialize;

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum FieldOutcome {
    Valid,
    Invalid(FieldError),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Validation results for every field of a schema, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub schema: FormSchema,
    outcomes: IndexMap<&'static str, FieldOutcome>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            outcomes: IndexMap::new(),
        }
    }

    /// A report with every schema field marked valid.
    pub fn all_valid(schema: FormSchema) -> Self {
        Self {
            schema,
            outcomes: schema
                .fields()
                .iter()
                .map(|f| (f.name, FieldOutcome::Valid))
                .collect(),
        }
    }

    /// Record the result of checking a field and hand back the checked value.
    pub fn record<T>(&mut self, field: &'static str, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.outcomes.insert(field, FieldOutcome::Valid);
                Some(value)
            }
            Err(err) => {
                self.outcomes.insert(field, FieldOutcome::Invalid(err));
                None
            }
        }
    }

    /// True iff no field failed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.values().all(FieldOutcome::is_valid)
    }

    /// Outcome for a field, if it was checked.
    pub fn outcome(&self, field: &str) -> Option<FieldOutcome> {
        self.outcomes.get(field).copied()
    }

    /// The error for a field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<FieldError> {
        match self.outcomes.get(field) {
            Some(FieldOutcome::Invalid(err)) => Some(*err),
            _ => None,
        }
    }

    /// Every failing field with its error, in schema order.
    pub fn errors(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.outcomes.iter().filter_map(|(field, outcome)| match outcome {
            FieldOutcome::Invalid(err) => Some((*field, *err)),
            FieldOutcome::Valid => None,
        })
    }

    /// Number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}
