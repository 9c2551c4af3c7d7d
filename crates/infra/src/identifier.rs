//! Identifier-generation boundary.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::BoundaryError;

pub const DEFAULT_IDENTIFIER_LENGTH: usize = 13;

/// Source of freshly generated identifiers.
///
/// The result is opaque to the caller; it is shown and encoded as-is.
pub trait IdentifierSource: Send + Sync {
    fn generate(&self) -> Result<String, BoundaryError>;
}

impl<G> IdentifierSource for Arc<G>
where
    G: IdentifierSource + ?Sized,
{
    fn generate(&self) -> Result<String, BoundaryError> {
        (**self).generate()
    }
}

/// Random all-digit identifiers of a fixed length.
#[derive(Debug)]
pub struct RandomIdentifierSource {
    length: usize,
    rng: Mutex<StdRng>,
}

impl RandomIdentifierSource {
    /// OS-seeded generator.
    pub fn new(length: usize) -> Self {
        Self::with_rng(length, StdRng::from_entropy())
    }

    /// Reproducible generator (tests, demos).
    pub fn seeded(length: usize, seed: u64) -> Self {
        Self::with_rng(length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(length: usize, rng: StdRng) -> Self {
        Self {
            length,
            rng: Mutex::new(rng),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomIdentifierSource {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTIFIER_LENGTH)
    }
}

impl IdentifierSource for RandomIdentifierSource {
    fn generate(&self) -> Result<String, BoundaryError> {
        if self.length == 0 {
            return Err(BoundaryError::rejected("identifier length must be at least 1"));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| BoundaryError::unavailable("identifier generator lock poisoned"))?;

        let identifier: String = (0..self.length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        tracing::debug!(length = self.length, "identifier generated");
        Ok(identifier)
    }
}
