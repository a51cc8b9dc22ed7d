use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ecopass_core::{Entity, ShareTokenId, UserId};

/// An issued share token.
///
/// Created on demand, never mutated, never expires. Any holder of the
/// `code` may redeem it, any number of times, by any number of distinct
/// viewers. `issuer` is a weak reference (plain id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareToken {
    pub id: ShareTokenId,
    pub code: String,
    pub issuer: UserId,
}

impl ShareToken {
    /// Mint a token for `issuer` with a fresh random code.
    ///
    /// Codes are v4 UUIDs rendered as strings: 122 bits of entropy, so
    /// collisions across all tokens are negligible without a uniqueness
    /// scan.
    pub fn mint(issuer: UserId) -> Self {
        Self {
            id: ShareTokenId::new(),
            code: Uuid::new_v4().to_string(),
            issuer,
        }
    }
}

impl Entity for ShareToken {
    type Id = ShareTokenId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
