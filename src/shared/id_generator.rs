//! Record ID Generator
//!
//! Random suffixes for prefixed record ids such as `thread-<suffix>`.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Default suffix length
pub const DEFAULT_ID_LENGTH: usize = 16;

/// Source of unique id suffixes.
///
/// Any `Fn() -> String` is a generator, so tests can pin ids with a closure.
pub trait IdGenerator: Send + Sync {
    /// Generate a new id suffix
    fn generate(&self) -> String;
}

impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn generate(&self) -> String {
        self()
    }
}

/// Alphanumeric random id generator
pub struct RandomIdGenerator {
    length: usize,
}

impl RandomIdGenerator {
    /// Create a new generator producing suffixes of `length` characters
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Join an entity prefix and a generated suffix
pub fn prefixed_id(prefix: &str, generator: &dyn IdGenerator) -> String {
    format!("{}-{}", prefix, generator.generate())
}
