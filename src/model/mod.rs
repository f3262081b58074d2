//! Sponsorship dashboard data model module.
//!
//! # Purpose
//! Re-exports the sponsor/offering/booking/game models and their owned
//! sub-records used by the store, seed data, and CSV import layers.
mod booking;
mod game;
mod offering;
mod sponsor;

pub use booking::Booking;
pub use game::Game;
pub use offering::{Offering, OfferingKind, OfferingVariant};
pub use sponsor::{Address, Contact, PLACEHOLDER_LOGO, Sponsor, SponsorFile, UNCATEGORIZED};
