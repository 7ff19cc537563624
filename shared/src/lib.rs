use serde::{Deserialize, Serialize};
use std::fmt;

mod validation;

pub use validation::{
    derive_compulsory, parse_amount_input, CompulsoryRule, FeeFieldErrors, FeeValidationError,
    MIN_AMOUNT, MIN_DESCRIPTION_CHARS, MIN_TYPE_CHARS,
};

/// Fee type choices offered by the type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeTypeOption {
    /// Charge calculated from apartment area
    Area,
    /// Parking charge
    Vehicle,
    /// Sentinel that switches the type field to free-text entry
    Other,
}

impl FeeTypeOption {
    /// All options in display order
    pub const ALL: [FeeTypeOption; 3] = [Self::Area, Self::Vehicle, Self::Other];

    /// Value carried by the select element (and by the payload for built-in types)
    pub fn value(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Vehicle => "vehicle",
            Self::Other => "other",
        }
    }

    /// Fixed display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Area => "Phí diện tích",
            Self::Vehicle => "Phí gửi xe",
            Self::Other => "Khác",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.value() == value)
    }

    /// True for the types that are persisted as-is (everything but the sentinel)
    pub fn is_built_in(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for FeeTypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Form fields of the fee creation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeField {
    Type,
    Amount,
    Month,
    Description,
    Compulsory,
}

impl FeeField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Amount => "amount",
            Self::Month => "month",
            Self::Description => "description",
            Self::Compulsory => "compulsory",
        }
    }
}

impl fmt::Display for FeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// In-progress fee form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeDraft {
    /// Built-in type value or free-typed custom type
    #[serde(rename = "type")]
    pub fee_type: String,
    /// Charge amount, already coerced from the text input (may be NaN)
    pub amount: f64,
    /// Opaque month identifier from the month picker (e.g. "2024-05")
    pub month: String,
    pub description: String,
    pub compulsory: bool,
}

impl Default for FeeDraft {
    fn default() -> Self {
        Self {
            fee_type: String::new(),
            amount: 0.0,
            month: String::new(),
            description: String::new(),
            compulsory: true,
        }
    }
}

/// Validated request handed to the submit handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCreationPayload {
    #[serde(rename = "type")]
    pub fee_type: String,
    pub amount: f64,
    pub month: String,
    pub description: String,
    pub compulsory: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_type_option_values_and_labels() {
        assert_eq!(FeeTypeOption::Area.value(), "area");
        assert_eq!(FeeTypeOption::Vehicle.value(), "vehicle");
        assert_eq!(FeeTypeOption::Other.value(), "other");

        assert_eq!(FeeTypeOption::Area.label(), "Phí diện tích");
        assert_eq!(FeeTypeOption::Vehicle.label(), "Phí gửi xe");
        assert_eq!(FeeTypeOption::Other.label(), "Khác");
    }

    #[test]
    fn test_fee_type_option_from_value() {
        assert_eq!(FeeTypeOption::from_value("area"), Some(FeeTypeOption::Area));
        assert_eq!(FeeTypeOption::from_value("vehicle"), Some(FeeTypeOption::Vehicle));
        assert_eq!(FeeTypeOption::from_value("other"), Some(FeeTypeOption::Other));
        assert_eq!(FeeTypeOption::from_value("water"), None);
        assert_eq!(FeeTypeOption::from_value("Area"), None);

        assert!(FeeTypeOption::Area.is_built_in());
        assert!(!FeeTypeOption::Other.is_built_in());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = FeeDraft::default();
        assert_eq!(draft.fee_type, "");
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.month, "");
        assert_eq!(draft.description, "");
        assert!(draft.compulsory);
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = FeeCreationPayload {
            fee_type: "area".to_string(),
            amount: 500000.0,
            month: "2024-05".to_string(),
            description: "Monthly fee".to_string(),
            compulsory: true,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "area",
                "amount": 500000.0,
                "month": "2024-05",
                "description": "Monthly fee",
                "compulsory": true
            })
        );

        let parsed: FeeCreationPayload = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, payload);
    }
}
