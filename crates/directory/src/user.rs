use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecopass_core::{Entity, SavedLinkId, UserId, ValueObject};
use ecopass_auth::CredentialHash;

/// Wearer preferences attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preference {
    pub allergies: BTreeSet<String>,
    pub preferred_materials: BTreeSet<String>,
}

impl ValueObject for Preference {}

/// A user account.
///
/// # Invariants
/// - `email` is globally unique (enforced at creation).
/// - Owned passports and saved links are **not** embedded here; they are
///   separate records keyed to this user and reached via the directory's
///   query operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub credential_hash: CredentialHash,
    pub is_influencer: bool,
    pub profile_picture: Option<Vec<u8>>,
    pub preference: Preference,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for UserRecord {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A saved-wardrobe link: a directed edge recording that `viewer` can see
/// `owner`'s passports.
///
/// `owner` is a weak reference (plain id, resolved through the directory
/// at query time), never an embedded user. Duplicate edges for the same
/// `(viewer, owner)` pair are permitted — each redemption records its own
/// edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLink {
    pub id: SavedLinkId,
    pub viewer: UserId,
    pub owner: UserId,
}

impl Entity for SavedLink {
    type Id = SavedLinkId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
