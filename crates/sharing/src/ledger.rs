use ecopass_core::{DomainError, DomainResult, SavedLinkId, ShareTokenId, UserId};
use ecopass_directory::{SavedLink, UserRecord};
use ecopass_store::Store;

use crate::token::ShareToken;

/// The sharing ledger service.
///
/// Stateless per `(issuer, viewer)` pair: every redemption is an
/// independent event that inserts its own link row. Concurrent
/// redemptions of the same code are conflict-free inserts — there is no
/// shared counter to race on.
pub struct SharingLedger<U, T, L> {
    users: U,
    tokens: T,
    links: L,
}

impl<U, T, L> SharingLedger<U, T, L>
where
    U: Store<UserId, UserRecord>,
    T: Store<ShareTokenId, ShareToken>,
    L: Store<SavedLinkId, SavedLink>,
{
    pub fn new(users: U, tokens: T, links: L) -> Self {
        Self {
            users,
            tokens,
            links,
        }
    }

    /// Issue a share token for `issuer_id`.
    ///
    /// Repeated calls mint distinct tokens; every previously issued code
    /// stays valid forever.
    pub fn issue_share(&self, issuer_id: UserId) -> DomainResult<ShareToken> {
        if self.users.get(&issuer_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let token = ShareToken::mint(issuer_id);
        tracing::info!(issuer = %issuer_id, token_id = %token.id, "share token issued");
        self.tokens.upsert(token.id, token.clone());
        Ok(token)
    }

    /// Redeem `code` on behalf of `viewer_id`.
    ///
    /// Records a saved-wardrobe link from the viewer to the token's
    /// issuer. The token survives redemption; redeeming the same code
    /// again (same viewer included) records another link. Self-redemption
    /// is permitted.
    pub fn redeem_share(&self, code: &str, viewer_id: UserId) -> DomainResult<SavedLink> {
        let token = self
            .tokens
            .find_where(&|t: &ShareToken| t.code == code)
            .into_iter()
            .next()
            .ok_or(DomainError::NotFound)?;

        if self.users.get(&viewer_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let link = SavedLink {
            id: SavedLinkId::new(),
            viewer: viewer_id,
            owner: token.issuer,
        };

        tracing::info!(viewer = %viewer_id, owner = %token.issuer, "share redeemed");
        self.links.upsert(link.id, link);
        Ok(link)
    }
}
