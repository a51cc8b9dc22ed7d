use std::collections::BTreeSet;

use chrono::Utc;

use ecopass_auth::AuthProvider;
use ecopass_core::{DomainError, DomainResult, PassportId, SavedLinkId, UserId};
use ecopass_passports::{PassportDraft, ProductPassport};
use ecopass_store::Store;

use crate::user::{Preference, SavedLink, UserRecord};

/// The user directory service.
///
/// Every mutating operation resolves its inputs, then performs a single
/// `upsert` against the backing store; cross-statement isolation is the
/// store's contract.
pub struct UserDirectory<U, P, L, A> {
    users: U,
    passports: P,
    links: L,
    auth: A,
}

impl<U, P, L, A> UserDirectory<U, P, L, A>
where
    U: Store<UserId, UserRecord>,
    P: Store<PassportId, ProductPassport>,
    L: Store<SavedLinkId, SavedLink>,
    A: AuthProvider,
{
    pub fn new(users: U, passports: P, links: L, auth: A) -> Self {
        Self {
            users,
            passports,
            links,
            auth,
        }
    }

    /// Register a new user.
    ///
    /// Emails are stored trimmed + lowercased; uniqueness is global.
    pub fn create_user(
        &self,
        email: &str,
        name: &str,
        credential: &str,
    ) -> DomainResult<UserRecord> {
        let email = email.trim().to_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        let taken = self.users.find_where(&|u: &UserRecord| u.email == email);
        if !taken.is_empty() {
            return Err(DomainError::duplicate_email(email));
        }

        let now = Utc::now();
        let user = UserRecord {
            id: UserId::new(),
            email,
            name: name.trim().to_string(),
            credential_hash: self.auth.hash_credential(credential),
            is_influencer: false,
            profile_picture: None,
            preference: Preference::default(),
            created_at: now,
            updated_at: now,
        };

        tracing::info!(user_id = %user.id, "user created");
        self.users.upsert(user.id, user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: UserId) -> DomainResult<UserRecord> {
        self.users.get(&id).ok_or(DomainError::NotFound)
    }

    /// Resolve a user by email and verify the credential.
    ///
    /// `None` on unknown email or credential mismatch — login failures
    /// carry no further diagnosis.
    pub fn authenticate(&self, email: &str, credential: &str) -> Option<UserRecord> {
        let email = email.trim().to_lowercase();
        let user = self
            .users
            .find_where(&|u: &UserRecord| u.email == email)
            .into_iter()
            .next()?;

        if self.auth.verify_credential(credential, &user.credential_hash) {
            Some(user)
        } else {
            None
        }
    }

    /// Attach a new passport to `user_id`.
    ///
    /// Validates the draft, assigns the passport identity and metadata
    /// timestamps, persists it keyed to the owner.
    pub fn add_product(&self, user_id: UserId, draft: PassportDraft) -> DomainResult<ProductPassport> {
        let mut user = self.get_user(user_id)?;
        draft.validate()?;

        let now = Utc::now();
        let passport = ProductPassport::from_draft(PassportId::new(), user_id, draft, now);

        tracing::debug!(user_id = %user_id, passport_id = %passport.id, "passport added");
        self.passports.upsert(passport.id, passport.clone());

        user.updated_at = now;
        self.users.upsert(user.id, user);

        Ok(passport)
    }

    /// All users flagged as influencers. Order is stable within one call.
    pub fn list_influencers(&self) -> Vec<UserRecord> {
        self.users.find_where(&|u: &UserRecord| u.is_influencer)
    }

    pub fn set_profile_picture(&self, user_id: UserId, bytes: Vec<u8>) -> DomainResult<UserRecord> {
        let mut user = self.get_user(user_id)?;
        user.profile_picture = Some(bytes);
        user.updated_at = Utc::now();

        self.users.upsert(user.id, user.clone());
        Ok(user)
    }

    /// Flip the influencer flag for a user.
    pub fn mark_influencer(&self, user_id: UserId, is_influencer: bool) -> DomainResult<UserRecord> {
        let mut user = self.get_user(user_id)?;
        user.is_influencer = is_influencer;
        user.updated_at = Utc::now();

        self.users.upsert(user.id, user.clone());
        Ok(user)
    }

    /// Replace both preference sets.
    pub fn modify_preferences(
        &self,
        user_id: UserId,
        allergies: BTreeSet<String>,
        preferred_materials: BTreeSet<String>,
    ) -> DomainResult<UserRecord> {
        let mut user = self.get_user(user_id)?;
        user.preference = Preference {
            allergies,
            preferred_materials,
        };
        user.updated_at = Utc::now();

        self.users.upsert(user.id, user.clone());
        Ok(user)
    }

    /// Passports owned by `user_id`.
    pub fn list_products_for(&self, user_id: UserId) -> Vec<ProductPassport> {
        self.passports
            .find_where(&|p: &ProductPassport| p.owner == user_id)
    }

    /// Saved-wardrobe links held by `viewer`.
    pub fn list_saved_links_for(&self, viewer: UserId) -> Vec<SavedLink> {
        self.links.find_where(&|l: &SavedLink| l.viewer == viewer)
    }

    /// Barcode scan: resolve a passport by its GTIN.
    pub fn find_passport_by_gtin(&self, gtin: &str) -> DomainResult<ProductPassport> {
        self.passports
            .find_where(&|p: &ProductPassport| p.gtin() == gtin)
            .into_iter()
            .next()
            .ok_or(DomainError::NotFound)
    }
}
