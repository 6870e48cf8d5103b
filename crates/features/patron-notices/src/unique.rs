use crate::PatronNoticeTemplate;
use crate::error::{PatronNoticeErrorExt, Result};
use circ_domain::validation::ErrorToken;
use std::future::Future;
use tracing::debug;

/// Host-provided search over stored templates.
pub trait TemplateLookup {
    /// Templates matching a CQL `query`.
    fn find(&self, query: &str) -> impl Future<Output = Result<Vec<PatronNoticeTemplate>>> + Send;
}

/// Exact-name CQL query. Quotes, backslashes and masking characters are escaped.
pub fn name_query(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if matches!(ch, '\\' | '"' | '*' | '?' | '^') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("(name=\"{escaped}\")")
}

/// Checks that no other template uses `name`.
///
/// Returns [`ErrorToken::NameExists`] when the first template returned with exactly
/// this name belongs to a different record than `current_id`. An empty name is not
/// looked up; whitespace is queried like any other name.
///
/// # Errors
/// Propagates lookup failures with added context.
pub async fn validate_name_unique<L>(lookup: &L, name: &str, current_id: Option<&str>) -> Result<Option<ErrorToken>>
where
    L: TemplateLookup + Sync,
{
    if name.is_empty() {
        return Ok(None);
    }

    let templates = lookup.find(&name_query(name)).await.context("Checking template name")?;
    let taken = templates
        .iter()
        .find(|t| t.name.as_deref() == Some(name))
        .is_some_and(|t| t.id.as_deref() != current_id);

    debug!(name, taken, "Checked template name");
    Ok(taken.then_some(ErrorToken::NameExists))
}
