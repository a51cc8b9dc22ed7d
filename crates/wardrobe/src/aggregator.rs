use serde::{Deserialize, Serialize};

use ecopass_core::{DomainError, DomainResult, PassportId, SavedLinkId, UserId};
use ecopass_directory::{Preference, SavedLink, UserRecord};
use ecopass_passports::ProductPassport;
use ecopass_store::Store;

/// Minimal owner identity attached to an aggregated wardrobe.
///
/// Recomputed from the live user record on every call — never cached, so
/// renames and fresh profile pictures show up immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    pub id: UserId,
    pub name: String,
    pub profile_picture: Option<Vec<u8>>,
    pub is_influencer: bool,
    pub preference: Preference,
}

impl From<&UserRecord> for OwnerSummary {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            profile_picture: user.profile_picture.clone(),
            is_influencer: user.is_influencer,
            preference: user.preference.clone(),
        }
    }
}

/// One owner's visible wardrobe: identity summary + current passports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeEntry {
    pub owner: OwnerSummary,
    pub products: Vec<ProductPassport>,
}

/// The wardrobe aggregator service.
///
/// Read-only: walks the user, passport and link collections at query time.
/// Saved-wardrobe results carry one entry **per link** — a viewer holding
/// two links to the same owner sees that owner twice.
pub struct WardrobeAggregator<U, P, L> {
    users: U,
    passports: P,
    links: L,
}

impl<U, P, L> WardrobeAggregator<U, P, L>
where
    U: Store<UserId, UserRecord>,
    P: Store<PassportId, ProductPassport>,
    L: Store<SavedLinkId, SavedLink>,
{
    pub fn new(users: U, passports: P, links: L) -> Self {
        Self {
            users,
            passports,
            links,
        }
    }

    fn products_of(&self, owner: UserId) -> Vec<ProductPassport> {
        self.passports
            .find_where(&|p: &ProductPassport| p.owner == owner)
    }

    /// The user's own passports, unmodified.
    pub fn own_wardrobe(&self, user_id: UserId) -> DomainResult<Vec<ProductPassport>> {
        if self.users.get(&user_id).is_none() {
            return Err(DomainError::NotFound);
        }
        Ok(self.products_of(user_id))
    }

    /// The user's own passports filtered to one category.
    pub fn own_wardrobe_by_category(
        &self,
        user_id: UserId,
        category: &str,
    ) -> DomainResult<Vec<ProductPassport>> {
        let mut products = self.own_wardrobe(user_id)?;
        products.retain(|p| p.category() == category);
        Ok(products)
    }

    /// Every wardrobe the viewer has saved a link to.
    ///
    /// One entry per link, each resolving the owner's *current* passport
    /// set — live data, not a snapshot taken at link creation. Links whose
    /// owner no longer resolves are skipped.
    pub fn saved_wardrobes(&self, viewer_id: UserId) -> DomainResult<Vec<WardrobeEntry>> {
        if self.users.get(&viewer_id).is_none() {
            return Err(DomainError::NotFound);
        }

        let entries = self
            .links
            .find_where(&|l: &SavedLink| l.viewer == viewer_id)
            .into_iter()
            .filter_map(|link| {
                let owner = self.users.get(&link.owner)?;
                Some(WardrobeEntry {
                    owner: OwnerSummary::from(&owner),
                    products: self.products_of(owner.id),
                })
            })
            .collect();

        Ok(entries)
    }

    /// Every influencer's wardrobe, regardless of who is asking.
    pub fn influencer_wardrobes(&self) -> Vec<WardrobeEntry> {
        self.users
            .find_where(&|u: &UserRecord| u.is_influencer)
            .iter()
            .map(|influencer| WardrobeEntry {
                owner: OwnerSummary::from(influencer),
                products: self.products_of(influencer.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ecopass_auth::Sha256AuthProvider;
    use ecopass_core::ShareTokenId;
    use ecopass_directory::UserDirectory;
    use ecopass_passports::{MaterialComposition, PassportDraft, ProductInformation};
    use ecopass_sharing::{ShareToken, SharingLedger};
    use ecopass_store::InMemoryStore;

    struct Fixture {
        directory: UserDirectory<
            Arc<InMemoryStore<UserId, UserRecord>>,
            Arc<InMemoryStore<PassportId, ProductPassport>>,
            Arc<InMemoryStore<SavedLinkId, SavedLink>>,
            Arc<Sha256AuthProvider>,
        >,
        ledger: SharingLedger<
            Arc<InMemoryStore<UserId, UserRecord>>,
            Arc<InMemoryStore<ShareTokenId, ShareToken>>,
            Arc<InMemoryStore<SavedLinkId, SavedLink>>,
        >,
        aggregator: WardrobeAggregator<
            Arc<InMemoryStore<UserId, UserRecord>>,
            Arc<InMemoryStore<PassportId, ProductPassport>>,
            Arc<InMemoryStore<SavedLinkId, SavedLink>>,
        >,
    }

    fn fixture() -> Fixture {
        let users = Arc::new(InMemoryStore::new());
        let passports = Arc::new(InMemoryStore::new());
        let tokens = Arc::new(InMemoryStore::new());
        let links = Arc::new(InMemoryStore::new());

        Fixture {
            directory: UserDirectory::new(
                users.clone(),
                passports.clone(),
                links.clone(),
                Arc::new(Sha256AuthProvider::new()),
            ),
            ledger: SharingLedger::new(users.clone(), tokens, links.clone()),
            aggregator: WardrobeAggregator::new(users, passports, links),
        }
    }

    fn draft(name: &str, category: &str) -> PassportDraft {
        PassportDraft {
            product_information: ProductInformation {
                gtin: "1234567890123".to_string(),
                name: name.to_string(),
                category: category.to_string(),
                brand: "EcoWear".to_string(),
                model: "2024".to_string(),
            },
            materials: vec![MaterialComposition {
                material_name: "Organic Cotton".to_string(),
                composition_percentage: 100,
                certifications: vec![],
            }],
            environment_impact: None,
            manufacturing: None,
            durability_and_care: None,
            end_of_life: None,
            supply_chain: None,
            data_owner: "EcoWear".to_string(),
            image: None,
        }
    }

    #[test]
    fn own_wardrobe_returns_only_the_owner_passports() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        let bob = fx
            .directory
            .create_user("bob@example.com", "Bob", "password123")
            .unwrap();

        let tee = fx.directory.add_product(alice.id, draft("Tee", "T-Shirts")).unwrap();
        fx.directory.add_product(bob.id, draft("Jacket", "Jackets")).unwrap();

        let wardrobe = fx.aggregator.own_wardrobe(alice.id).unwrap();
        assert_eq!(wardrobe.len(), 1);
        assert_eq!(wardrobe[0].id, tee.id);
    }

    #[test]
    fn own_wardrobe_unknown_user_is_not_found() {
        let fx = fixture();
        assert_eq!(
            fx.aggregator.own_wardrobe(UserId::new()).unwrap_err(),
            DomainError::NotFound
        );
    }

    #[test]
    fn category_filter_narrows_the_own_wardrobe() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        fx.directory.add_product(alice.id, draft("Tee", "T-Shirts")).unwrap();
        fx.directory.add_product(alice.id, draft("Jacket", "Jackets")).unwrap();

        let jackets = fx
            .aggregator
            .own_wardrobe_by_category(alice.id, "Jackets")
            .unwrap();
        assert_eq!(jackets.len(), 1);
        assert_eq!(jackets[0].product_information.name, "Jacket");

        assert!(fx
            .aggregator
            .own_wardrobe_by_category(alice.id, "Shoes")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn saved_wardrobes_resolve_live_owner_products() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        let bob = fx
            .directory
            .create_user("bob@example.com", "Bob", "password123")
            .unwrap();

        let token = fx.ledger.issue_share(alice.id).unwrap();
        fx.ledger.redeem_share(&token.code, bob.id).unwrap();

        // Link created before the passport existed: the aggregate still
        // sees it, because owner products are resolved at query time.
        let tee = fx.directory.add_product(alice.id, draft("Tee", "T-Shirts")).unwrap();

        let saved = fx.aggregator.saved_wardrobes(bob.id).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].owner.id, alice.id);
        assert_eq!(saved[0].owner.name, "Alice");
        assert_eq!(saved[0].products.len(), 1);
        assert_eq!(saved[0].products[0].id, tee.id);
    }

    #[test]
    fn duplicate_links_produce_duplicate_entries() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        let bob = fx
            .directory
            .create_user("bob@example.com", "Bob", "password123")
            .unwrap();

        let token = fx.ledger.issue_share(alice.id).unwrap();
        fx.ledger.redeem_share(&token.code, bob.id).unwrap();
        fx.ledger.redeem_share(&token.code, bob.id).unwrap();

        // One entry per link, not per owner.
        let saved = fx.aggregator.saved_wardrobes(bob.id).unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].owner.id, alice.id);
        assert_eq!(saved[1].owner.id, alice.id);
    }

    #[test]
    fn influencer_wardrobes_cover_exactly_the_flagged_set() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        let bianca = fx
            .directory
            .create_user("bianca@example.com", "Bianca", "password123")
            .unwrap();
        fx.directory.mark_influencer(bianca.id, true).unwrap();
        let look = fx
            .directory
            .add_product(bianca.id, draft("Statement Coat", "Coats"))
            .unwrap();

        let wardrobes = fx.aggregator.influencer_wardrobes();
        assert_eq!(wardrobes.len(), 1);
        assert_eq!(wardrobes[0].owner.id, bianca.id);
        assert!(wardrobes[0].owner.is_influencer);
        assert_eq!(wardrobes[0].products, vec![look]);
        assert!(wardrobes.iter().all(|w| w.owner.id != alice.id));
    }

    #[test]
    fn summaries_reflect_current_owner_state() {
        let fx = fixture();
        let alice = fx
            .directory
            .create_user("alice@example.com", "Alice", "password123")
            .unwrap();
        let bob = fx
            .directory
            .create_user("bob@example.com", "Bob", "password123")
            .unwrap();

        let token = fx.ledger.issue_share(alice.id).unwrap();
        fx.ledger.redeem_share(&token.code, bob.id).unwrap();

        fx.directory
            .set_profile_picture(alice.id, vec![0xAB, 0xCD])
            .unwrap();

        let saved = fx.aggregator.saved_wardrobes(bob.id).unwrap();
        assert_eq!(saved[0].owner.profile_picture.as_deref(), Some(&[0xAB, 0xCD][..]));
    }
}
