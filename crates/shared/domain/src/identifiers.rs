use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Patron identifiers that checkout can scan, in master-list order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum PatronIdentifier {
    Barcode,
    ExternalSystemId,
    Id,
    Username,
}

crate::string_enum_serde!(PatronIdentifier);

impl PatronIdentifier {
    /// Key stored in `prefPatronIdentifier`.
    pub fn key(self) -> &'static str {
        self.into()
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Barcode => "Barcode",
            Self::ExternalSystemId => "External system ID",
            Self::Id => "FOLIO record number",
            Self::Username => "Username",
        }
    }

    pub const fn flag(self) -> PatronIdentifierSet {
        match self {
            Self::Barcode => PatronIdentifierSet::BARCODE,
            Self::ExternalSystemId => PatronIdentifierSet::EXTERNAL_SYSTEM_ID,
            Self::Id => PatronIdentifierSet::ID,
            Self::Username => PatronIdentifierSet::USERNAME,
        }
    }

    /// Every identifier in its fixed order.
    pub fn master_list() -> Vec<Self> {
        Self::iter().collect()
    }
}

bitflags! {
    /// A selection of patron identifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct PatronIdentifierSet: u8 {
        const BARCODE = 1 << 0;
        const EXTERNAL_SYSTEM_ID = 1 << 1;
        const ID = 1 << 2;
        const USERNAME = 1 << 3;
    }
}

impl PatronIdentifierSet {
    /// Parses a comma-joined key list. Unknown keys are ignored.
    pub fn parse_keys(keys: &str) -> Self {
        keys.split(',').map(str::trim).fold(Self::empty(), |set, key| set | Self::from(key))
    }

    /// Builds the selection from checkbox states laid out over `order`.
    pub fn from_idents(idents: &[bool], order: &[PatronIdentifier]) -> Self {
        order
            .iter()
            .zip(idents)
            .filter(|&(_, checked)| *checked)
            .fold(Self::empty(), |set, (id, _)| set | id.flag())
    }

    /// One checkbox state per entry of `order`.
    pub fn to_idents(self, order: &[PatronIdentifier]) -> Vec<bool> {
        order.iter().map(|id| self.contains(id.flag())).collect()
    }

    /// Selected keys joined with commas, following `order`.
    pub fn to_keys(self, order: &[PatronIdentifier]) -> String {
        order
            .iter()
            .filter(|id| self.contains(id.flag()))
            .map(|id| id.key())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<&str> for PatronIdentifierSet {
    fn from(key: &str) -> Self {
        key.parse::<PatronIdentifier>().map_or_else(|_| Self::empty(), PatronIdentifier::flag)
    }
}

impl Serialize for PatronIdentifierSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_keys(&PatronIdentifier::master_list()))
    }
}

impl<'de> Deserialize<'de> for PatronIdentifierSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = String::deserialize(deserializer)?;
        Ok(Self::parse_keys(&keys))
    }
}
