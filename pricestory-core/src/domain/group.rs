//! Indicator groups and the group catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::IndicatorKey;

/// A named, ordered set of indicator keys.
///
/// Key order is stable: it decides chart stacking and inline-label order,
/// so it must survive every hop from config to renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorGroup {
    pub name: String,
    pub keys: Vec<IndicatorKey>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no groups")]
    Empty,

    #[error("duplicate group name: {0}")]
    DuplicateGroup(String),

    #[error("fallback group '{0}' is not declared")]
    UnknownFallback(String),
}

/// The declared groups plus the fallback used for unrecognized names.
///
/// `resolve` never fails: any name the catalog does not know maps to the
/// fallback group, which is checked to exist at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCatalog {
    groups: Vec<IndicatorGroup>,
    fallback_idx: usize,
}

impl GroupCatalog {
    pub fn new(groups: Vec<IndicatorGroup>, fallback: &str) -> Result<Self, CatalogError> {
        if groups.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|g| g.name == group.name) {
                return Err(CatalogError::DuplicateGroup(group.name.clone()));
            }
        }
        let fallback_idx = groups
            .iter()
            .position(|g| g.name == fallback)
            .ok_or_else(|| CatalogError::UnknownFallback(fallback.to_string()))?;
        Ok(Self { groups, fallback_idx })
    }

    pub fn groups(&self) -> &[IndicatorGroup] {
        &self.groups
    }

    /// Exact lookup by name.
    pub fn group(&self, name: &str) -> Option<&IndicatorGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Lookup with the fallback as the final else-branch.
    pub fn resolve(&self, name: &str) -> &IndicatorGroup {
        self.group(name).unwrap_or(&self.groups[self.fallback_idx])
    }

    pub fn fallback_name(&self) -> &str {
        &self.groups[self.fallback_idx].name
    }

    /// Every declared key in declaration order, first occurrence wins.
    pub fn all_keys(&self) -> Vec<IndicatorKey> {
        let mut keys: Vec<IndicatorKey> = Vec::new();
        for group in &self.groups {
            for key in &group.keys {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }
        keys
    }
}
