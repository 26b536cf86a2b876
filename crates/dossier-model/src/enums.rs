//! Closed enumerations for catalog display metadata.
//!
//! The source catalogs carry these as free strings with string-keyed lookup
//! tables for labels and badges. Here they are exhaustive enums so an
//! unrecognized value is a parse error at construction time, never a silent
//! fallback at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File type of a library document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Pdf,
    Image,
    Archive,
    Text,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Image => "image",
            DocumentType::Archive => "archive",
            DocumentType::Text => "text",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(DocumentType::Pdf),
            "image" => Ok(DocumentType::Image),
            "archive" => Ok(DocumentType::Archive),
            "text" => Ok(DocumentType::Text),
            _ => Err(format!("Unknown document type: {s}")),
        }
    }
}

/// Release classification of a library document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Public,
    Restricted,
    Sensitive,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Public => "public",
            Classification::Restricted => "restricted",
            Classification::Sensitive => "sensitive",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Classification::Public),
            "restricted" => Ok(Classification::Restricted),
            "sensitive" => Ok(Classification::Sensitive),
            _ => Err(format!("Unknown classification: {s}")),
        }
    }
}

/// Severity of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "medium" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Kind of an affiliation entry in the connections sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AffiliationKind {
    Agency,
    Corporation,
    Individual,
    Organization,
    Document,
}

impl AffiliationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AffiliationKind::Agency => "agency",
            AffiliationKind::Corporation => "corporation",
            AffiliationKind::Individual => "individual",
            AffiliationKind::Organization => "organization",
            AffiliationKind::Document => "document",
        }
    }

    /// Section heading used when affiliations are grouped by kind.
    pub fn label(&self) -> &'static str {
        match self {
            AffiliationKind::Agency => "Government Agencies",
            AffiliationKind::Corporation => "Corporations",
            AffiliationKind::Individual => "Key Individuals",
            AffiliationKind::Organization => "Organizations",
            AffiliationKind::Document => "Related Documents",
        }
    }
}

impl fmt::Display for AffiliationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AffiliationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "agency" => Ok(AffiliationKind::Agency),
            "corporation" => Ok(AffiliationKind::Corporation),
            "individual" => Ok(AffiliationKind::Individual),
            "organization" => Ok(AffiliationKind::Organization),
            "document" => Ok(AffiliationKind::Document),
            _ => Err(format!("Unknown affiliation kind: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_from_str_rejects_unknown_values() {
        assert_eq!(
            "public".parse::<Classification>().unwrap(),
            Classification::Public
        );
        assert_eq!(
            "SENSITIVE".parse::<Classification>().unwrap(),
            Classification::Sensitive
        );
        assert!("secret".parse::<Classification>().is_err());
    }

    #[test]
    fn affiliation_kinds_carry_section_labels() {
        assert_eq!(AffiliationKind::Agency.label(), "Government Agencies");
        assert_eq!(
            "corporation".parse::<AffiliationKind>().unwrap(),
            AffiliationKind::Corporation
        );
    }
}
