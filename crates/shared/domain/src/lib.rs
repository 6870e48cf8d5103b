//! # Domain Models
//!
//! Pure value types shared by every circulation settings form: lenient form inputs,
//! periods, patron identifiers, record metadata, the validation error map and the
//! section-toggle reducer. Dependencies are limited to `serde`, `bitflags` and `strum`.
//! Keep it lean: no I/O, no networking, no policy rules.

pub mod config;
pub mod constants;
pub mod identifiers;
pub mod input;
pub mod metadata;
pub mod options;
pub mod period;
pub mod sections;
pub mod serde_helpers;
pub mod validation;

#[doc(hidden)]
pub use serde as __serde;
