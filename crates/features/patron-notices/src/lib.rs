//! # Patron Notice Templates
//!
//! Email templates sent to patrons by notice policies. A template belongs to one
//! category (loan, request, fee/fine), carries an English subject and body, and
//! must have a name no other template uses.
//!
//! Uniqueness needs the server's template list, so it is checked asynchronously
//! through a host-provided [`TemplateLookup`].

mod error;
mod unique;

pub use crate::error::{PatronNoticeError, PatronNoticeErrorExt, Result};
pub use crate::unique::{TemplateLookup, name_query, validate_name_unique};

use circ_domain::metadata::Metadata;
use circ_domain::options::SelectOption;
use circ_domain::sections::Section;
use circ_domain::serde_helpers::blank_as_none;
use circ_domain::validation::{Checks, ErrorMap};
use circ_kernel::form::SettingsForm;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
pub enum PatronNoticeCategory {
    Loan,
    Request,
    FeeFineCharge,
    FeeFineAction,
}

circ_domain::string_enum_serde!(PatronNoticeCategory);

impl PatronNoticeCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loan => "Loan",
            Self::Request => "Request",
            Self::FeeFineCharge => "Manual fee/fine charge",
            Self::FeeFineAction => "Automated fee/fine action",
        }
    }

    /// Category dropdown, sorted by label.
    pub fn options() -> Vec<SelectOption> {
        let mut options: Vec<SelectOption> =
            Self::iter().map(|c| SelectOption::new(c.to_string(), c.label())).collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));
        options
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedTemplates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<LocalizedTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatronNoticeTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "blank_as_none")]
    pub category: Option<PatronNoticeCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_templates: Option<LocalizedTemplates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl PatronNoticeTemplate {
    /// # Errors
    /// Fails when `value` is not a template object.
    pub fn from_value(value: serde_json::Value) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn is_active(&self) -> bool {
        self.active == Some(true)
    }

    /// Predefined templates ship with the system; hosts warn before editing them.
    pub fn is_predefined(&self) -> bool {
        self.predefined == Some(true)
    }

    fn english(&self) -> Option<&LocalizedTemplate> {
        self.localized_templates.as_ref()?.en.as_ref()
    }
}

/// Name plus the English subject and body are required.
pub fn validate(template: &PatronNoticeTemplate) -> ErrorMap {
    let mut checks = Checks::new();
    let english = template.english();

    checks.required_text("name", template.name.as_deref());
    checks.required_text("localizedTemplates.en.header", english.and_then(|t| t.header.as_deref()));
    checks.required_text("localizedTemplates.en.body", english.and_then(|t| t.body.as_deref()));

    checks.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum PatronNoticeSection {
    EmailTemplate,
}

impl Section for PatronNoticeSection {}

/// Templates are stored exactly as edited.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatronNoticeForm;

impl SettingsForm for PatronNoticeForm {
    type Values = PatronNoticeTemplate;
    type Record = PatronNoticeTemplate;

    const NAME: &'static str = "patron-notice";

    fn validate(values: &PatronNoticeTemplate) -> ErrorMap {
        validate(values)
    }

    fn normalize(values: &PatronNoticeTemplate) -> PatronNoticeTemplate {
        values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circ_domain::validation::ErrorToken;
    use serde_json::json;

    #[test]
    fn subject_and_body_are_required() {
        let template = PatronNoticeTemplate::from_value(json!({
            "name": "Overdue",
            "category": "Loan",
            "localizedTemplates": { "en": { "header": "  ", "body": "<p>Due</p>" } }
        }))
        .unwrap();
        let errors = validate(&template);
        assert_eq!(errors.token("localizedTemplates.en.header"), Some(ErrorToken::Required));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_template_lists_every_missing_field() {
        let errors = validate(&PatronNoticeTemplate::default());
        assert_eq!(errors.paths().collect::<Vec<_>>(), vec![
            "localizedTemplates.en.body",
            "localizedTemplates.en.header",
            "name"
        ]);
    }

    #[test]
    fn category_options_sorted_by_label() {
        let values: Vec<String> = PatronNoticeCategory::options().into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["FeeFineAction", "Loan", "FeeFineCharge", "Request"]);
    }

    #[test]
    fn flags_default_to_false() {
        let template = PatronNoticeTemplate::from_value(json!({ "name": "x", "category": "" })).unwrap();
        assert!(!template.is_active());
        assert!(!template.is_predefined());
        assert_eq!(template.category, None);
    }
}
