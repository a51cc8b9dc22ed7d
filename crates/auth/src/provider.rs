//! Credential hashing seam.

use std::sync::Arc;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// An opaque stored credential hash.
///
/// The directory stores this verbatim and never inspects it; only the
/// issuing [`AuthProvider`] can verify against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialHash {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

/// Credential capability consumed by the user directory.
pub trait AuthProvider: Send + Sync {
    fn hash_credential(&self, plain: &str) -> CredentialHash;
    fn verify_credential(&self, plain: &str, hash: &CredentialHash) -> bool;
}

impl<P> AuthProvider for Arc<P>
where
    P: AuthProvider + ?Sized,
{
    fn hash_credential(&self, plain: &str) -> CredentialHash {
        (**self).hash_credential(plain)
    }

    fn verify_credential(&self, plain: &str, hash: &CredentialHash) -> bool {
        (**self).verify_credential(plain, hash)
    }
}

/// Salted-SHA-256 provider for tests/dev.
///
/// This is a stand-in, not a password KDF: deployments plug in their own
/// [`AuthProvider`] backed by whatever their platform mandates.
#[derive(Debug, Default)]
pub struct Sha256AuthProvider;

impl Sha256AuthProvider {
    pub fn new() -> Self {
        Self
    }

    fn digest(plain: &str, salt: &[u8]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        hasher.update(salt);
        hasher.update(plain.as_bytes());
        hasher.finalize().to_vec()
    }
}

impl AuthProvider for Sha256AuthProvider {
    fn hash_credential(&self, plain: &str) -> CredentialHash {
        let mut salt = vec![0u8; 16];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        let digest = Self::digest(plain, &salt);
        CredentialHash { salt, digest }
    }

    fn verify_credential(&self, plain: &str, hash: &CredentialHash) -> bool {
        Self::digest(plain, &hash.salt) == hash.digest
    }
}
