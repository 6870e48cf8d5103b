use circ_domain::period::Period;
use circ_domain::serde_helpers::blank_as_none;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// When a closed loan is anonymized.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ClosingType {
    Immediately,
    Interval,
    Never,
}

circ_domain::string_enum_serde!(ClosingType);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingTypes {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub loan: Option<ClosingType>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub fee_fine: Option<ClosingType>,
}

/// Anonymization rule for loans whose fees were settled with one payment method.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanException {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub payment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub closing_type: Option<ClosingType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
}

impl LoanException {
    pub fn is_interval(&self) -> bool {
        self.closing_type == Some(ClosingType::Interval)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanHistorySettings {
    #[serde(default)]
    pub closing_type: ClosingTypes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_fine: Option<Period>,
    /// Loans with fees or fines follow their own closing type.
    #[serde(default)]
    pub treat_enabled: bool,
    #[serde(default)]
    pub loan_exceptions: Vec<LoanException>,
}

impl Default for LoanHistorySettings {
    fn default() -> Self {
        Self {
            closing_type: ClosingTypes { loan: Some(ClosingType::Never), fee_fine: None },
            loan: None,
            fee_fine: None,
            treat_enabled: false,
            loan_exceptions: Vec::new(),
        }
    }
}

impl LoanHistorySettings {
    /// # Errors
    /// Fails when `value` is not a loan-history object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn is_loan_interval(&self) -> bool {
        self.closing_type.loan == Some(ClosingType::Interval)
    }

    pub fn is_fee_fine_interval(&self) -> bool {
        self.closing_type.fee_fine == Some(ClosingType::Interval)
    }

    pub const fn is_treat_enabled(&self) -> bool {
        self.treat_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circ_domain::period::IntervalId;
    use serde_json::json;

    #[test]
    fn reads_stored_shape() {
        let settings = LoanHistorySettings::from_value(json!({
            "closingType": { "loan": "interval", "feeFine": "" },
            "loan": { "duration": 2, "intervalId": "Weeks" },
            "treatEnabled": true,
            "loanExceptions": [{ "paymentMethod": "Cash", "closingType": "immediately" }]
        }))
        .unwrap();

        assert!(settings.is_loan_interval());
        assert!(!settings.is_fee_fine_interval());
        assert!(settings.is_treat_enabled());
        assert_eq!(settings.loan, Some(Period::new(2_u32, IntervalId::Weeks)));
        assert_eq!(settings.closing_type.fee_fine, None);
        assert!(!settings.loan_exceptions[0].is_interval());
    }

    #[test]
    fn unknown_closing_type_is_rejected() {
        assert!(LoanHistorySettings::from_value(json!({ "closingType": { "loan": "later" } })).is_err());
    }

    #[test]
    fn defaults_never_anonymize() {
        let json = serde_json::to_value(LoanHistorySettings::default()).unwrap();
        assert_eq!(
            json,
            json!({ "closingType": { "loan": "never" }, "treatEnabled": false, "loanExceptions": [] })
        );
    }
}
