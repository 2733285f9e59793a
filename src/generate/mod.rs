//! The generation pass. Every step draws from the single random source held
//! by [`Generator`], so a seeded source reproduces the exact same dataset.

use chrono::NaiveDateTime;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    catalog::Catalog, config::GeneratorConfig, error::GenerateError,
    records::Dataset,
};

pub mod identity;
pub mod questions;
pub mod responses;
pub mod surveys;
pub mod users;

pub struct Generator<R> {
    rng: R,
    /// The reference time that every timestamp is computed relative to.
    now: NaiveDateTime,
    config: GeneratorConfig,
    catalog: Catalog,
}

impl Generator<ChaCha20Rng> {
    /// A generator driven by a ChaCha20 stream seeded from `seed`.
    pub fn from_seed(
        seed: u64,
        now: NaiveDateTime,
        config: GeneratorConfig,
        catalog: Catalog,
    ) -> Result<Self, GenerateError> {
        Self::new(ChaCha20Rng::seed_from_u64(seed), now, config, catalog)
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(
        rng: R,
        now: NaiveDateTime,
        config: GeneratorConfig,
        catalog: Catalog,
    ) -> Result<Self, GenerateError> {
        config.validate()?;
        catalog.validate()?;

        Ok(Self {
            rng,
            now,
            config,
            catalog,
        })
    }

    /// Runs every step in order: users, surveys, questions and options, then
    /// responses and their histories.
    pub fn generate(&mut self) -> Dataset {
        let span =
            tracing::span!(tracing::Level::INFO, "generate", now = %self.now);
        let _guard = span.enter();

        let users = self.generate_users();
        let surveys = self.generate_surveys(&users);
        let (questions, options) =
            self.generate_questions_and_options(&surveys);
        let (responses, histories) = self.generate_responses_and_histories(
            &surveys, &questions, &options,
        );

        Dataset {
            generated_at: self.now,
            users,
            surveys,
            questions,
            options,
            responses,
            histories,
        }
    }
}

/// Picks a uniformly random element. Callers only pass catalog lists (checked
/// by [`Catalog::validate`]) or lists they have built non-empty themselves.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
