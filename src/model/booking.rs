//! Booking model definitions.
//!
//! # Purpose
//! Defines the assignment of a sponsor to an offering over an inclusive date
//! range, including the denormalized display names and the activity flag the
//! store computes at creation/edit time.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub sponsor_id: String,
    pub offering_id: String,
    /// Offering-local variant id when the booking targets a specific variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Sponsor name copied at creation/edit time; goes stale if the sponsor is
    /// later renamed.
    pub sponsor_name: String,
    /// Offering name copied at creation/edit time; same staleness caveat.
    pub offering_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whether "today" fell inside the range when the booking was created or
    /// last edited. Never re-evaluated as wall-clock time passes; use
    /// [`Booking::is_active_on`] for a fresh answer.
    pub is_active: bool,
}

impl Booking {
    /// Request payload for booking an offering over a date range. The store
    /// assigns the id, copies the display names, and computes `is_active`.
    pub fn request(
        sponsor_id: impl Into<String>,
        offering_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: String::new(),
            sponsor_id: sponsor_id.into(),
            offering_id: offering_id.into(),
            variant_id: None,
            sponsor_name: String::new(),
            offering_name: String::new(),
            start_date,
            end_date,
            is_active: false,
        }
    }

    /// Whether the booking covers `date`. Both range ends are inclusive.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
