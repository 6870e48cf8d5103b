//! Kernel utilities shared across settings forms.
//! Keep this crate lightweight: the submission contract every form implements, the
//! config-record store seam, layered config loading and ID generation.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use circ_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Submitting a form
//! ```rust,ignore
//! use circ_kernel::form::prepare_submission;
//!
//! match prepare_submission::<FinePolicyForm>(&values) {
//!     Ok(record) => persist(record),
//!     Err(err) => show(err.errors()),
//! }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod form;
pub mod store;

use std::borrow::Cow;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use circ_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (no visually confusing characters).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// Renders the optional context of an error variant as ` (context)`.
///
/// Shared by every error enum in the workspace:
/// `#[error("Store error{}: {message}", format_context(.context))]`.
pub fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
