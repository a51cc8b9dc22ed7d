//! `ecopass-auth` — the opaque credential collaborator.
//!
//! The core needs exactly two capabilities from its auth layer: hash a
//! plaintext credential, and verify a plaintext against a stored hash.
//! Session and login-flow mechanics live outside this workspace.

pub mod provider;

pub use provider::{AuthProvider, CredentialHash, Sha256AuthProvider};
