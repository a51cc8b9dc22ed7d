//! Keyed record store abstraction.

use std::sync::Arc;

/// Keyed record collection contract consumed by the domain services.
///
/// One implementation instance backs one record type (users, passports,
/// share tokens, saved links each get their own collection). The contract
/// is deliberately small:
///
/// - `get` / `upsert` are the by-id read and write paths,
/// - `find_where` covers the equality lookups the core performs
///   (`email`, `code`, `is_influencer`) without exposing a query language,
/// - `list` returns the full collection in a stable order for one call.
///
/// Implementations must make each individual call atomic; cross-call
/// isolation (read-committed or stronger is recommended for the
/// read-then-write operations) is part of the backing engine's contract.
pub trait Store<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;
    fn upsert(&self, key: K, value: V);
    fn list(&self) -> Vec<V>;
    /// All records matching the predicate, in the same order as `list`.
    fn find_where(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V>;
}

impl<K, V, S> Store<K, V> for Arc<S>
where
    S: Store<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn upsert(&self, key: K, value: V) {
        (**self).upsert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn find_where(&self, predicate: &dyn Fn(&V) -> bool) -> Vec<V> {
        (**self).find_where(predicate)
    }
}
