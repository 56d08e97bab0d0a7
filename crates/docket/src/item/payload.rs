//! Typed extraction payloads.

use serde::{Deserialize, Serialize};

use super::types::DocumentType;

/// Structured fields extracted from a source document.
///
/// The variant determines the item's [`DocumentType`], so an item's type and
/// its payload shape cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "document_type", content = "fields", rename_all = "kebab-case")]
pub enum ExtractedData {
    /// A law, decree or ministerial order.
    LegalText {
        /// Kind of text (e.g., "Loi", "Décret exécutif").
        text_type: String,
        /// Regulatory sector (e.g., "Finance").
        sector: String,
    },
    /// An administrative procedure.
    Procedure {
        /// Procedure category (e.g., "Commerce").
        category: String,
        /// Responsible institution.
        institution: String,
    },
}

impl ExtractedData {
    /// Create a legal text payload.
    pub fn legal_text(text_type: impl Into<String>, sector: impl Into<String>) -> Self {
        ExtractedData::LegalText {
            text_type: text_type.into(),
            sector: sector.into(),
        }
    }

    /// Create a procedure payload.
    pub fn procedure(category: impl Into<String>, institution: impl Into<String>) -> Self {
        ExtractedData::Procedure {
            category: category.into(),
            institution: institution.into(),
        }
    }

    /// The document type this payload describes.
    pub fn document_type(&self) -> DocumentType {
        match self {
            ExtractedData::LegalText { .. } => DocumentType::LegalText,
            ExtractedData::Procedure { .. } => DocumentType::Procedure,
        }
    }

    /// Short one-line summary for item cards.
    pub fn summary(&self) -> String {
        match self {
            ExtractedData::LegalText { text_type, sector } => format!("{} ({})", text_type, sector),
            ExtractedData::Procedure {
                category,
                institution,
            } => format!("{} - {}", category, institution),
        }
    }
}
