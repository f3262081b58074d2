//! Offering model definitions.
//!
//! # Purpose
//! Defines sellable sponsorship products (LED banners, jersey space, VIP
//! packages) and their variants as listed in the offering catalog.
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OfferingKind,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub variants: Vec<OfferingVariant>,
    /// Variant count captured when the offering was created. The store derives
    /// it on `add_offering`; edits leave it to the caller.
    #[serde(default)]
    pub total_quantity: u32,
}

impl Offering {
    /// Minimal record for the quick-add path inside the booking dialog: name,
    /// description, and kind only. The store assigns the id and derives
    /// `total_quantity` from the (empty) variant list.
    pub fn quick_add(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: OfferingKind,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            description: description.into(),
            kind,
            category: String::new(),
            variants: Vec::new(),
            total_quantity: 0,
        }
    }

    /// Looks up a variant by its offering-local id.
    pub fn variant(&self, variant_id: &str) -> Option<&OfferingVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OfferingKind {
    Digital,
    Physical,
    Event,
}

/// Sub-option of an offering. Variant ids are unique within their offering
/// only, not globally.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfferingVariant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_available: bool,
}
