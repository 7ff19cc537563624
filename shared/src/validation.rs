//! Validation schema for the fee creation form.
//!
//! Every rule is checked on each run so the form can show all failing
//! fields at once, one message per field.

use crate::{FeeCreationPayload, FeeDraft, FeeField, FeeTypeOption};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum number of characters for the fee type
pub const MIN_TYPE_CHARS: usize = 2;

/// Minimum number of characters for the description
pub const MIN_DESCRIPTION_CHARS: usize = 2;

/// Smallest accepted charge
pub const MIN_AMOUNT: f64 = 1.0;

/// A single schema-rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum FeeValidationError {
    #[error("Fee type must be at least {min} characters")]
    TypeTooShort { min: usize },
    #[error("Amount must be a number")]
    AmountNotANumber,
    #[error("Amount must be greater than 0")]
    AmountTooSmall,
    #[error("Month is required")]
    MonthRequired,
    #[error("Description must be at least {min} characters")]
    DescriptionTooShort { min: usize },
}

impl FeeValidationError {
    /// Field the error belongs to
    pub fn field(&self) -> FeeField {
        match self {
            Self::TypeTooShort { .. } => FeeField::Type,
            Self::AmountNotANumber | Self::AmountTooSmall => FeeField::Amount,
            Self::MonthRequired => FeeField::Month,
            Self::DescriptionTooShort { .. } => FeeField::Description,
        }
    }
}

/// Field-scoped validation errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeFieldErrors(BTreeMap<FeeField, FeeValidationError>);

impl FeeFieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error under its own field, replacing any previous one
    pub fn insert(&mut self, error: FeeValidationError) {
        self.0.insert(error.field(), error);
    }

    pub fn get(&self, field: FeeField) -> Option<&FeeValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FeeField) -> bool {
        self.0.contains_key(&field)
    }

    /// Inline message for a field, if it has an error
    pub fn message(&self, field: FeeField) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeeField, &FeeValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// How the compulsory flag reacts to a type change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompulsoryRule {
    /// Flag is forced to this value and the control is disabled
    Locked(bool),
    /// Flag is overwritten with this value and stays editable
    Reset(bool),
    /// Flag keeps whatever the user last set
    UserControlled,
}

impl CompulsoryRule {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked(_))
    }

    /// New flag value after applying the rule to `current`
    pub fn apply(&self, current: bool) -> bool {
        match self {
            Self::Locked(value) | Self::Reset(value) => *value,
            Self::UserControlled => current,
        }
    }
}

/// Compulsory behaviour for a fee type value.
///
/// Only the area fee is mandatory for every unit. Any other built-in type
/// resets the flag to optional, overwriting a manual choice.
pub fn derive_compulsory(fee_type: &str) -> CompulsoryRule {
    match FeeTypeOption::from_value(fee_type) {
        Some(FeeTypeOption::Area) => CompulsoryRule::Locked(true),
        Some(option) if option.is_built_in() => CompulsoryRule::Reset(false),
        _ => CompulsoryRule::UserControlled,
    }
}

/// Coerce the amount text box into a number, with JavaScript `Number` rules.
///
/// Blank input is zero, numeric text (surrounding whitespace allowed) is its
/// value, `Infinity` is infinite, anything else is NaN and fails validation
/// downstream.
pub fn parse_amount_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // `str::parse` also takes "inf" and "nan" spellings; only the JS literal counts.
    let unsigned = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return match trimmed {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ => f64::NAN,
        };
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

impl FeeDraft {
    /// Run the schema against the draft
    pub fn validate(&self) -> Result<FeeCreationPayload, FeeFieldErrors> {
        let mut errors = FeeFieldErrors::new();

        if self.fee_type.trim().chars().count() < MIN_TYPE_CHARS {
            errors.insert(FeeValidationError::TypeTooShort { min: MIN_TYPE_CHARS });
        }

        if self.amount.is_nan() {
            errors.insert(FeeValidationError::AmountNotANumber);
        } else if self.amount < MIN_AMOUNT {
            errors.insert(FeeValidationError::AmountTooSmall);
        }

        if self.month.is_empty() {
            errors.insert(FeeValidationError::MonthRequired);
        }

        if self.description.chars().count() < MIN_DESCRIPTION_CHARS {
            errors.insert(FeeValidationError::DescriptionTooShort {
                min: MIN_DESCRIPTION_CHARS,
            });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(FeeCreationPayload {
            fee_type: self.fee_type.clone(),
            amount: self.amount,
            month: self.month.clone(),
            description: self.description.clone(),
            compulsory: self.compulsory,
        })
    }
}
