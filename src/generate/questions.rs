use rand::{Rng, seq::SliceRandom};

use crate::{
    generate::{Generator, pick},
    records::{Question, QuestionOption, QuestionType, Survey},
};

impl<R: Rng> Generator<R> {
    /// Deleted surveys get no questions. Multiple-choice questions each
    /// receive one complete option set from the catalog.
    pub fn generate_questions_and_options(
        &mut self,
        surveys: &[Survey],
    ) -> (Vec<Question>, Vec<QuestionOption>) {
        let span = tracing::span!(
            tracing::Level::INFO,
            "generate_questions_and_options"
        );
        let _guard = span.enter();

        let mut questions = Vec::new();
        let mut options = Vec::new();

        for survey in surveys.iter().filter(|survey| !survey.is_deleted) {
            let kinds = self.question_kinds();

            for (order_index, kind) in (1i64..).zip(kinds) {
                let question_id = questions.len() as i64 + 1;
                let bank = match kind {
                    QuestionType::MultipleChoice => {
                        &self.catalog.multiple_choice_questions
                    }
                    QuestionType::Subjective => {
                        &self.catalog.subjective_questions
                    }
                };

                questions.push(Question {
                    id: question_id,
                    survey_id: survey.id,
                    kind,
                    content: pick(&mut self.rng, bank).clone(),
                    order_index,
                });

                if kind == QuestionType::MultipleChoice {
                    let set = pick(&mut self.rng, &self.catalog.option_sets);
                    for content in set {
                        options.push(QuestionOption {
                            id: options.len() as i64 + 1,
                            question_id,
                            content: content.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            "Generated {} questions and {} options",
            questions.len(),
            options.len()
        );

        (questions, options)
    }

    /// The shuffled question types of one survey. The multiple-choice share
    /// is rounded down, the remainder is subjective.
    fn question_kinds(&mut self) -> Vec<QuestionType> {
        let n = self.rng.random_range(self.config.questions_per_survey.clone())
            as usize;
        let fraction = self
            .rng
            .random_range(self.config.multiple_choice_fraction.clone());
        let multiple_choice = ((n as f64 * fraction).floor() as usize).min(n);

        let mut kinds = Vec::with_capacity(n);
        kinds.extend(std::iter::repeat_n(
            QuestionType::MultipleChoice,
            multiple_choice,
        ));
        kinds.extend(std::iter::repeat_n(
            QuestionType::Subjective,
            n - multiple_choice,
        ));
        kinds.shuffle(&mut self.rng);
        kinds
    }
}
