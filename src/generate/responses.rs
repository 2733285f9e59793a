use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta};
use itertools::Itertools;
use rand::Rng;

use crate::{
    generate::{Generator, identity, pick},
    records::{
        Answer, Question, QuestionOption, QuestionType, Response,
        ResponseHistory, Survey,
    },
};

impl<R: Rng> Generator<R> {
    /// Simulates respondent sessions for every survey which has not been
    /// deleted. Each session answers most of the survey's questions and
    /// leaves one history row behind.
    pub fn generate_responses_and_histories(
        &mut self,
        surveys: &[Survey],
        questions: &[Question],
        options: &[QuestionOption],
    ) -> (Vec<Response>, Vec<ResponseHistory>) {
        let span = tracing::span!(
            tracing::Level::INFO,
            "generate_responses_and_histories"
        );
        let _guard = span.enter();

        let questions_of_survey: HashMap<i64, Vec<&Question>> = questions
            .iter()
            .map(|question| (question.survey_id, question))
            .into_group_map();
        let options_of_question: HashMap<i64, Vec<&QuestionOption>> = options
            .iter()
            .map(|option| (option.question_id, option))
            .into_group_map();

        let mut responses = Vec::new();
        let mut histories = Vec::new();

        for survey in surveys.iter().filter(|survey| !survey.is_deleted) {
            let sessions = self.session_count(survey);

            let Some(survey_questions) = questions_of_survey.get(&survey.id)
            else {
                continue;
            };

            for session_index in 0..sessions {
                let session_id = identity::session_id(&mut self.rng);
                let responded_at = self.response_time(survey);

                let n = survey_questions.len();
                let at_least =
                    n.saturating_sub(self.config.max_skipped_questions).max(1);
                let amount = self.rng.random_range(at_least..=n);

                for idx in rand::seq::index::sample(&mut self.rng, n, amount) {
                    let question = survey_questions[idx];
                    let answer = match question.kind {
                        QuestionType::MultipleChoice => {
                            let Some(choices) =
                                options_of_question.get(&question.id)
                            else {
                                tracing::warn!(
                                    "Question {} has no options, skipping",
                                    question.id
                                );
                                continue;
                            };
                            Answer::Choice {
                                option_id: pick(&mut self.rng, choices).id,
                            }
                        }
                        QuestionType::Subjective => Answer::Subjective {
                            content: pick(
                                &mut self.rng,
                                &self.catalog.subjective_answers,
                            )
                            .clone(),
                        },
                    };

                    responses.push(Response {
                        id: responses.len() as i64 + 1,
                        session_id,
                        question_id: question.id,
                        answer,
                        scale_value: None,
                        created_at: responded_at,
                    });
                }

                let device = format!(
                    "device_{}_{}_{}",
                    survey.id,
                    session_index,
                    self.rng.random_range(self.config.device_suffix.clone())
                );
                let ip_address = format!(
                    "192.168.{}.{}",
                    self.rng.random_range(1..=255u8),
                    self.rng.random_range(1..=255u8)
                );

                histories.push(ResponseHistory {
                    id: histories.len() as i64 + 1,
                    survey_id: survey.id,
                    device_id_hash: identity::sha256_base64(&device),
                    ip_address_hash: identity::sha256_base64(&ip_address),
                    responded_at,
                });
            }
        }

        tracing::debug!(
            "Generated {} responses across {} sessions",
            responses.len(),
            histories.len()
        );

        (responses, histories)
    }

    /// Surveys which are still collecting answers get the most sessions,
    /// finished ones fewer, and inactive-but-running ones the fewest.
    fn session_count(&mut self, survey: &Survey) -> u32 {
        let range = if survey.is_active && survey.end_time > self.now {
            &self.config.sessions_open
        } else if survey.end_time < self.now {
            &self.config.sessions_ended
        } else {
            &self.config.sessions_other
        };
        self.rng.random_range(range.clone())
    }

    /// A uniformly random instant in the survey's window. Falls back to the
    /// creation time when the window is empty.
    fn response_time(&mut self, survey: &Survey) -> NaiveDateTime {
        let opens_at = survey.opens_at();
        if survey.end_time > opens_at {
            let window = (survey.end_time - opens_at).num_seconds();
            opens_at + TimeDelta::seconds(self.rng.random_range(0..=window))
        } else {
            survey.created_at
        }
    }
}
