//! # Amalgamating Business
//!
//! A business under consideration for an amalgamation, as the host
//! application holds it in its businesses table. Domestic (LEAR) businesses
//! carry their registry status flags; foreign businesses carry only what the
//! filer typed in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::corp_type::CorpTypeCd;
use crate::error::AmalgError;

// ─── Business Type ───────────────────────────────────────────────────

/// Origin of an amalgamating business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmlType {
    /// Registered in LEAR, the domestic registry of record.
    Lear,
    /// Out-of-jurisdiction business.
    Foreign,
}

impl AmlType {
    /// The wire string for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lear => "LEAR",
            Self::Foreign => "FOREIGN",
        }
    }
}

impl std::fmt::Display for AmlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `pad` so table output can align on width.
        f.pad(self.as_str())
    }
}

impl FromStr for AmlType {
    type Err = AmalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEAR" => Ok(Self::Lear),
            "FOREIGN" => Ok(Self::Foreign),
            other => Err(AmalgError::UnknownBusinessType(other.to_string())),
        }
    }
}

// ─── Business Role ───────────────────────────────────────────────────

/// Role a business plays in the amalgamation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmlRole {
    /// Ordinary amalgamating business.
    #[default]
    Amalgamating,
    /// Holding company in a short-form vertical amalgamation.
    Holding,
    /// Primary company in a short-form horizontal amalgamation.
    Primary,
}

// ─── Address ─────────────────────────────────────────────────────────

/// Registered office or mailing address, as returned by the registry.
///
/// The rules only look at whether an address is present. The host receives
/// one only when the current account is affiliated with the business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Address {
    pub street_address: String,
    pub street_address_additional: String,
    pub address_city: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

// ─── Amalgamating Business ───────────────────────────────────────────

/// A candidate or already-added business in an amalgamation filing.
///
/// Unknown keys are rejected. A misspelled status flag would otherwise read
/// as `false` and let the business through as eligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AmalgamatingBusiness {
    /// LEAR or FOREIGN.
    #[serde(rename = "type")]
    pub business_type: AmlType,
    /// Role in the amalgamation.
    #[serde(default)]
    pub role: AmlRole,
    /// Registry identifier (e.g. `BC1234567`). Absent for foreign businesses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    /// Legal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Business contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Corp type code. Only meaningful for LEAR businesses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_type: Option<CorpTypeCd>,
    /// Registered office address; absent when the registry withheld it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Home jurisdiction of a foreign business.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_jurisdiction: Option<String>,
    /// Corporation number in the foreign jurisdiction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corp_number: Option<String>,
    #[serde(default)]
    pub is_not_in_good_standing: bool,
    #[serde(default)]
    pub is_limited_restoration: bool,
    #[serde(default)]
    pub is_future_effective: bool,
}

impl AmalgamatingBusiness {
    /// A LEAR business with no address and no status flags set.
    pub fn lear(identifier: impl Into<String>, legal_type: CorpTypeCd) -> Self {
        Self {
            business_type: AmlType::Lear,
            role: AmlRole::Amalgamating,
            identifier: Some(identifier.into()),
            name: None,
            email: None,
            legal_type: Some(legal_type),
            address: None,
            foreign_jurisdiction: None,
            corp_number: None,
            is_not_in_good_standing: false,
            is_limited_restoration: false,
            is_future_effective: false,
        }
    }

    /// A foreign business identified by its legal name.
    pub fn foreign(name: impl Into<String>) -> Self {
        Self {
            business_type: AmlType::Foreign,
            role: AmlRole::Amalgamating,
            identifier: None,
            name: Some(name.into()),
            email: None,
            legal_type: None,
            address: None,
            foreign_jurisdiction: None,
            corp_number: None,
            is_not_in_good_standing: false,
            is_limited_restoration: false,
            is_future_effective: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_role(mut self, role: AmlRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_foreign_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.foreign_jurisdiction = Some(jurisdiction.into());
        self
    }

    pub fn not_in_good_standing(mut self) -> Self {
        self.is_not_in_good_standing = true;
        self
    }

    pub fn limited_restoration(mut self) -> Self {
        self.is_limited_restoration = true;
        self
    }

    pub fn future_effective(mut self) -> Self {
        self.is_future_effective = true;
        self
    }

    /// Whether this business is registered in LEAR.
    pub fn is_lear(&self) -> bool {
        self.business_type == AmlType::Lear
    }

    /// Whether this business is foreign.
    pub fn is_foreign(&self) -> bool {
        self.business_type == AmlType::Foreign
    }

    /// Whether this is a LEAR business of the given corp type.
    ///
    /// Always false for foreign businesses, whatever `legal_type` holds.
    pub fn is_lear_of_type(&self, legal_type: CorpTypeCd) -> bool {
        self.is_lear() && self.legal_type == Some(legal_type)
    }

    /// Label for log and CLI output: identifier, else name, else the type.
    pub fn label(&self) -> &str {
        self.identifier
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_else(|| self.business_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lear_constructor() {
        let b = AmalgamatingBusiness::lear("BC0000001", CorpTypeCd::BcCompany);
        assert!(b.is_lear());
        assert!(!b.is_foreign());
        assert!(b.address.is_none());
        assert!(b.is_lear_of_type(CorpTypeCd::BcCompany));
        assert!(!b.is_lear_of_type(CorpTypeCd::BcCcc));
        assert_eq!(b.label(), "BC0000001");
    }

    #[test]
    fn test_foreign_never_matches_lear_type() {
        let mut b = AmalgamatingBusiness::foreign("Acme Delaware Inc.");
        b.legal_type = Some(CorpTypeCd::BcCompany);
        assert!(!b.is_lear_of_type(CorpTypeCd::BcCompany));
        assert_eq!(b.label(), "Acme Delaware Inc.");
    }

    #[test]
    fn test_deserialize_minimal_lear() {
        let json = r#"{"type": "LEAR", "identifier": "BC0870100", "legal_type": "CC"}"#;
        let b: AmalgamatingBusiness = serde_json::from_str(json).unwrap();
        assert_eq!(b.business_type, AmlType::Lear);
        assert_eq!(b.role, AmlRole::Amalgamating);
        assert_eq!(b.legal_type, Some(CorpTypeCd::BcCcc));
        assert!(b.address.is_none());
        assert!(!b.is_not_in_good_standing);
        assert!(!b.is_limited_restoration);
        assert!(!b.is_future_effective);
    }

    #[test]
    fn test_deserialize_with_address_and_flags() {
        let json = r#"{
            "type": "LEAR",
            "role": "HOLDING",
            "identifier": "BC0870101",
            "legal_type": "ULC",
            "address": {"street_address": "1 Main St", "address_city": "Victoria"},
            "is_future_effective": true
        }"#;
        let b: AmalgamatingBusiness = serde_json::from_str(json).unwrap();
        assert_eq!(b.role, AmlRole::Holding);
        assert_eq!(b.address.as_ref().map(|a| a.address_city.as_str()), Some("Victoria"));
        assert!(b.is_future_effective);
    }

    #[test]
    fn test_deserialize_rejects_unknown_type() {
        let json = r#"{"type": "EXTRA"}"#;
        assert!(serde_json::from_str::<AmalgamatingBusiness>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_misspelled_flag() {
        let json = r#"{"type": "LEAR", "identifier": "BC0870102", "is_future_efective": true}"#;
        let err = serde_json::from_str::<AmalgamatingBusiness>(json).unwrap_err();
        assert!(err.to_string().contains("is_future_efective"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_address_field() {
        let json = r#"{"type": "LEAR", "address": {"street": "1 Main St"}}"#;
        assert!(serde_json::from_str::<AmalgamatingBusiness>(json).is_err());
    }

    #[test]
    fn test_builder_sets_role_and_name() {
        let b = AmalgamatingBusiness::lear("BC0000002", CorpTypeCd::BcUlcCompany)
            .with_name("COASTAL HOLDINGS ULC")
            .with_role(AmlRole::Primary)
            .future_effective();
        assert_eq!(b.role, AmlRole::Primary);
        assert_eq!(b.name.as_deref(), Some("COASTAL HOLDINGS ULC"));
        assert!(b.is_future_effective);
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["role"], "PRIMARY");
        assert_eq!(json["legal_type"], "ULC");
        assert!(json.get("address").is_none());
    }

    #[test]
    fn test_aml_type_padding() {
        assert_eq!(format!("{:<8}|", AmlType::Lear), "LEAR    |");
    }

    #[test]
    fn test_aml_type_from_str() {
        assert_eq!("LEAR".parse::<AmlType>().unwrap(), AmlType::Lear);
        assert_eq!("FOREIGN".parse::<AmlType>().unwrap(), AmlType::Foreign);
        assert!("lear".parse::<AmlType>().is_err());
    }
}
