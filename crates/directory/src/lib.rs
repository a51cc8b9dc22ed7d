//! `ecopass-directory` — user identity and ownership.
//!
//! Holds the user records (scalar identity fields only — owned passports
//! and saved links live in their own collections and are reached through
//! explicit query operations) and the directory service that creates
//! users, attaches passports and answers influencer lookups.

pub mod directory;
pub mod user;

pub use directory::UserDirectory;
pub use user::{Preference, SavedLink, UserRecord};
