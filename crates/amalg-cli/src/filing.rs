//! # Filing Files
//!
//! A filing file is the CLI's configuration: the host state an evaluation
//! runs against, written as YAML (or JSON, which YAML accepts).
//!
//! ```yaml
//! role_staff: false
//! target_type: ULC
//! businesses:
//!   - type: LEAR
//!     identifier: BC0870100
//!     legal_type: BC
//!     address: { street_address: "1 Main St", address_city: Victoria }
//!   - type: FOREIGN
//!     name: Acme Holdings LLC
//!     foreign_jurisdiction: US-DE
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use amalg_core::{AmalgamatingBusiness, CorpTypeCd};
use amalg_rules::EvaluationContext;

/// Host state for one amalgamation filing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Filing {
    /// Filer is registry staff.
    #[serde(default)]
    pub role_staff: bool,
    /// Corp type code of the amalgamated business, once chosen.
    #[serde(default)]
    pub target_type: Option<CorpTypeCd>,
    /// Businesses already in the filing.
    #[serde(default)]
    pub businesses: Vec<AmalgamatingBusiness>,
}

impl Filing {
    /// Parse a filing from YAML or JSON text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let filing: Self = serde_yaml::from_str(text).context("invalid filing document")?;
        filing.lint();
        Ok(filing)
    }

    /// Load a filing file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read filing: {}", path.display()))?;
        let filing = Self::from_yaml_str(&text)
            .with_context(|| format!("failed to parse filing: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            businesses = filing.businesses.len(),
            target_type = ?filing.target_type,
            role_staff = filing.role_staff,
            "loaded filing"
        );
        Ok(filing)
    }

    /// The evaluation context this filing describes.
    pub fn context(&self) -> EvaluationContext<'_> {
        EvaluationContext::for_target(self.target_type, self.role_staff, &self.businesses)
    }

    /// Find a roster member by identifier, falling back to an exact name match.
    pub fn find_business(&self, key: &str) -> Option<&AmalgamatingBusiness> {
        self.businesses
            .iter()
            .find(|b| b.identifier.as_deref() == Some(key))
            .or_else(|| self.businesses.iter().find(|b| b.name.as_deref() == Some(key)))
    }

    /// Warn about records the rules will read differently than the filer may expect.
    fn lint(&self) {
        for business in &self.businesses {
            if business.is_foreign() && business.legal_type.is_some() {
                tracing::warn!(
                    business = business.label(),
                    "foreign business carries a legal type; it is ignored by the rules"
                );
            }
            if business.is_lear() && business.legal_type.is_none() {
                tracing::warn!(
                    business = business.label(),
                    "LEAR business has no legal type; type mismatch rules cannot apply"
                );
            }
        }
    }
}

/// Load a single candidate business from a YAML or JSON file.
pub fn load_candidate(path: &Path) -> Result<AmalgamatingBusiness> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read candidate: {}", path.display()))?;
    serde_yaml::from_str(&text)
        .with_context(|| format!("failed to parse candidate: {}", path.display()))
}
