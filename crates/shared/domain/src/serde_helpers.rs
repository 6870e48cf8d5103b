//! Serde glue for values coming out of HTML forms.
//!
//! Select controls submit `""` when the placeholder option is chosen, so optional
//! enum and id fields treat blank strings as absent.

use serde::de::{self, Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Deserializes an optional string-backed value, mapping `null`, `""` and
/// whitespace-only strings to `None`.
///
/// # Errors
/// Fails when the string is not blank and does not parse into `T`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(::std::format!("unknown value `{value}`: {e}"))),
    }
}

/// Implements `Serialize`/`Deserialize` for a `strum` enum through its string form.
///
/// The type must implement `AsRef<str>` and `FromStr` (derive `AsRefStr` and
/// `EnumString`), so serde and strum never disagree on spelling.
#[macro_export]
macro_rules! string_enum_serde {
    ($ty:ty) => {
        impl $crate::__serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(::core::convert::AsRef::<str>::as_ref(self))
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(|_| {
                    <D::Error as $crate::__serde::de::Error>::custom(::std::format!(
                        "unknown {} `{raw}`",
                        ::core::stringify!($ty)
                    ))
                })
            }
        }
    };
}
