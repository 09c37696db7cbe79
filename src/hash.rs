use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::Inspect;

/// Stable digest of a container's state.
///
/// A front end that polls the containers can keep the fingerprint from the last
/// frame and only redraw when it changes.
pub trait Fingerprint {
    fn fingerprint(&self) -> u64;

    /// Fingerprint with additional context hashed in first
    fn fingerprint_with(&self, with: &[&dyn HashInto]) -> u64;
}

/// Object-safe hashing into an [`Xxh64`] state, so mixed context can be passed
/// to [`Fingerprint::fingerprint_with`].
pub trait HashInto {
    fn hash_into(&self, hasher: &mut Xxh64);
}

impl<H: Hash + ?Sized> HashInto for H {
    fn hash_into(&self, hasher: &mut Xxh64) {
        self.hash(hasher);
    }
}

impl<A> Fingerprint for A
where
    A: Inspect + Hash,
{
    fn fingerprint(&self) -> u64 {
        self.fingerprint_with(&[])
    }

    fn fingerprint_with(&self, with: &[&dyn HashInto]) -> u64 {
        let mut hasher = Xxh64::new(0);

        for h in with {
            h.hash_into(&mut hasher);
        }

        // Kind first so equal-looking states of different containers differ
        self.kind().hash(&mut hasher);
        self.hash(&mut hasher);

        hasher.finish()
    }
}
