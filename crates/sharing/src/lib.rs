//! `ecopass-sharing` — share-code issuance and redemption.
//!
//! The ledger issues opaque share codes keyed to an issuing user and turns
//! redemptions into saved-wardrobe links (directed viewer -> owner edges)
//! recorded against the user directory's link collection.

pub mod ledger;
pub mod token;

pub use ledger::SharingLedger;
pub use token::ShareToken;
