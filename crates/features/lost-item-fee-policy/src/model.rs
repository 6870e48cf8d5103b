use circ_domain::input::{self, NumberInput};
use circ_domain::metadata::Metadata;
use circ_domain::period::Period;
use circ_domain::serde_helpers::blank_as_none;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum ChargeType {
    /// Bill the item's actual replacement cost, set later by staff.
    ActualCost,
    /// Bill a fixed amount.
    AnotherCost,
}

circ_domain::string_enum_serde!(ChargeType);

/// What happens to lost-item charges once the item is returned or replaced.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum LostItemAction {
    Charge,
    Remove,
}

circ_domain::string_enum_serde!(LostItemAction);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeAmountItem {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub charge_type: Option<ChargeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<NumberInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LostItemFeePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_aged_lost_overdue: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patron_billed_after_aged_lost: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_amount_item: Option<ChargeAmountItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_item_processing_fee: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_amount_item_patron: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_amount_item_system: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lost_item_charge_fee_fine: Option<Period>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub returned_lost_item: Option<LostItemAction>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub replaced_lost_item: Option<LostItemAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_processing_fee: Option<NumberInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_allowed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl LostItemFeePolicy {
    pub fn default_policy() -> Self {
        Self {
            charge_amount_item: Some(ChargeAmountItem {
                charge_type: Some(ChargeType::ActualCost),
                amount: Some(NumberInput::Integer(0)),
            }),
            lost_item_processing_fee: Some(NumberInput::Integer(0)),
            charge_amount_item_patron: Some(false),
            charge_amount_item_system: Some(false),
            returned_lost_item: Some(LostItemAction::Charge),
            replaced_lost_item: Some(LostItemAction::Charge),
            replacement_processing_fee: Some(NumberInput::Integer(0)),
            replacement_allowed: Some(false),
            ..Self::default()
        }
    }

    /// # Errors
    /// Fails when `value` is not a lost-item-fee-policy object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    fn charge_type(&self) -> Option<ChargeType> {
        self.charge_amount_item.as_ref()?.charge_type
    }

    pub fn is_actual_cost(&self) -> bool {
        self.charge_type() == Some(ChargeType::ActualCost)
    }

    pub fn is_another_cost(&self) -> bool {
        self.charge_type() == Some(ChargeType::AnotherCost)
    }

    pub fn has_lost_item_processing_fee(&self) -> bool {
        input::is_positive(self.lost_item_processing_fee.as_ref())
    }

    pub fn is_replacement_allowed(&self) -> bool {
        self.replacement_allowed == Some(true)
    }

    /// The processing fee is billed to the patron, to the system, or both.
    pub fn charges_processing_fee(&self) -> bool {
        self.charge_amount_item_patron == Some(true) || self.charge_amount_item_system == Some(true)
    }
}
