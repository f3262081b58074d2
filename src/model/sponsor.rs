//! Sponsor model definitions.
//!
//! # Purpose
//! Defines the sponsor record with its contact person, postal addresses, and
//! uploaded-file metadata. Field names serialize in the camelCase form the
//! dashboard frontend exchanges.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category label applied when a creation path does not supply one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Logo URI shown until a real logo is uploaded.
pub const PLACEHOLDER_LOGO: &str = "/placeholder.svg";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sponsor {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub industry: String,
    pub category: String,
    pub account_manager: String,
    pub contact: Contact,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub billing_address: Address,
    #[serde(default)]
    pub files: Vec<SponsorFile>,
}

impl Sponsor {
    /// Minimal record for the quick-add path: a bare name plus placeholder
    /// branding. The store assigns the id; everything else gets filled in
    /// later from the detail view.
    pub fn quick_add(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            logo: PLACEHOLDER_LOGO.to_string(),
            industry: String::new(),
            category: UNCATEGORIZED.to_string(),
            account_manager: String::new(),
            contact: Contact::default(),
            address: Address::default(),
            billing_address: Address::default(),
            files: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Contact {
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub zip: String,
    pub city: String,
    pub country: String,
}

/// Metadata for a file attached to a sponsor.
///
/// `url` is a displayable reference produced by an external collaborator
/// (e.g. a browser object URL); the store treats it as opaque.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SponsorFile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    pub url: String,
    #[serde(rename = "uploadDate")]
    pub uploaded_at: DateTime<Utc>,
}
