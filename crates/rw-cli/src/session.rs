//! Repeated generation with a retry policy

use log::info;
use rw_core::{GenerationError, GeneratorConfig, Level, LevelGenerator};

/// One generator reused across regenerations
///
/// Every attempt runs on a fresh grid. A stuck walk is retried up to
/// `retries` more times; other errors are returned immediately.
pub struct Session {
    generator: LevelGenerator,
    retries: u32,
    last_attempts: u32,
}

impl Session {
    pub fn new(config: GeneratorConfig, retries: u32) -> Self {
        Self {
            generator: LevelGenerator::new(config),
            retries,
            last_attempts: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Attempts used by the last call to [`Session::next_level`]
    pub fn last_attempts(&self) -> u32 {
        self.last_attempts
    }

    pub fn next_level(&mut self) -> Result<Level, GenerationError> {
        self.last_attempts = 0;
        loop {
            self.last_attempts += 1;
            match self.generator.generate() {
                Ok(level) => return Ok(level),
                Err(err) if err.is_retryable() && self.last_attempts <= self.retries => {
                    info!(
                        "attempt {} of {} failed: {}",
                        self.last_attempts,
                        self.retries + 1,
                        err
                    );
                }
                Err(err) => return Err(err),
            }
        }
    }
}
