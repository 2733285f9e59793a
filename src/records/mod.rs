use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Role {
    Creator,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Creator => "CREATOR",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum QuestionType {
    MultipleChoice,
    Subjective,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "MULTIPLE_CHOICE",
            QuestionType::Subjective => "SUBJECTIVE",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Assigned in insertion order, starting from 1.
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub birth_date: NaiveDate,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Survey {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    /// Only present when the survey window opened strictly before the
    /// reference time.
    pub start_time: Option<NaiveDateTime>,
    pub end_time: NaiveDateTime,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: NaiveDateTime,
}

impl Survey {
    /// The instant responses may start arriving from.
    pub fn opens_at(&self) -> NaiveDateTime {
        self.start_time.unwrap_or(self.created_at)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    pub id: i64,
    pub survey_id: i64,
    pub kind: QuestionType,
    pub content: String,
    /// 1-based position within the survey.
    pub order_index: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionOption {
    pub id: i64,
    pub question_id: i64,
    pub content: String,
}

/// What a respondent gave for a single question. A response is either a
/// selected option or free text, never both.
#[derive(Clone, Debug, PartialEq)]
pub enum Answer {
    Choice { option_id: i64 },
    Subjective { content: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub id: i64,
    pub session_id: Uuid,
    pub question_id: i64,
    pub answer: Answer,
    /// Reserved for scale questions; never populated by this generator.
    pub scale_value: Option<i64>,
    pub created_at: NaiveDateTime,
}

impl Response {
    pub fn question_type(&self) -> QuestionType {
        match self.answer {
            Answer::Choice { .. } => QuestionType::MultipleChoice,
            Answer::Subjective { .. } => QuestionType::Subjective,
        }
    }

    pub fn option_id(&self) -> Option<i64> {
        match self.answer {
            Answer::Choice { option_id } => Some(option_id),
            Answer::Subjective { .. } => None,
        }
    }

    pub fn subjective_content(&self) -> Option<&str> {
        match &self.answer {
            Answer::Choice { .. } => None,
            Answer::Subjective { content } => Some(content),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResponseHistory {
    pub id: i64,
    pub survey_id: i64,
    pub device_id_hash: String,
    pub ip_address_hash: String,
    pub responded_at: NaiveDateTime,
}

/// Everything produced by one generation pass, in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub generated_at: NaiveDateTime,
    pub users: Vec<User>,
    pub surveys: Vec<Survey>,
    pub questions: Vec<Question>,
    pub options: Vec<QuestionOption>,
    pub responses: Vec<Response>,
    pub histories: Vec<ResponseHistory>,
}

impl Dataset {
    pub fn statement_count(&self) -> usize {
        self.users.len()
            + self.surveys.len()
            + self.questions.len()
            + self.options.len()
            + self.responses.len()
            + self.histories.len()
    }
}
