use chrono::TimeDelta;
use rand::Rng;

use crate::{
    generate::Generator,
    records::{Role, Survey, User},
};

impl<R: Rng> Generator<R> {
    /// Each creator receives a handful of surveys. The topic cycles through
    /// the catalog, offset by the creator's position and the survey's
    /// sequence number.
    pub fn generate_surveys(&mut self, users: &[User]) -> Vec<Survey> {
        let span = tracing::span!(tracing::Level::INFO, "generate_surveys");
        let _guard = span.enter();

        let mut surveys = Vec::new();

        let creators = users.iter().filter(|user| user.role == Role::Creator);
        for (creator_idx, creator) in (1usize..).zip(creators) {
            let count =
                self.rng.random_range(self.config.surveys_per_creator.clone());

            for seq in 0..count as usize {
                let topic = &self.catalog.topics
                    [(creator_idx + seq) % self.catalog.topics.len()];

                let days_ago =
                    self.rng.random_range(self.config.lookback_days.clone());
                let opens = self.now - TimeDelta::days(days_ago);
                let duration =
                    self.rng.random_range(self.config.duration_days.clone());
                let end_time = opens + TimeDelta::days(duration);

                // independent draws: a survey can be inactive and deleted
                let is_active =
                    self.rng.random_bool(self.config.active_probability);
                let is_deleted =
                    self.rng.random_bool(self.config.deleted_probability);

                let lead = self.rng.random_range(self.config.lead_days.clone());
                let created_at = opens - TimeDelta::days(lead);

                surveys.push(Survey {
                    id: surveys.len() as i64 + 1,
                    user_id: creator.id,
                    title: format!("{} ({})", topic.title, seq + 1),
                    description: topic.description.clone(),
                    start_time: (opens < self.now).then_some(opens),
                    end_time,
                    is_active,
                    is_deleted,
                    created_at,
                });
            }
        }

        tracing::debug!(
            "Generated {} surveys ({} deleted)",
            surveys.len(),
            surveys.iter().filter(|s| s.is_deleted).count()
        );

        surveys
    }
}
