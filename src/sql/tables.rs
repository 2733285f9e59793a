use crate::{
    records::{
        Question, QuestionOption, Response, ResponseHistory, Survey, User,
    },
    sql::{InsertStatement, ToInsert},
};

impl ToInsert for User {
    const TABLE: &'static str = "USER";
    const NOUN: &'static str = "users";

    fn to_insert(&self) -> InsertStatement {
        // USER is a reserved word in MySQL
        InsertStatement::into_table("`USER`")
            .value("USERNAME", self.username.as_str())
            .value("PASSWORD", self.password_hash.as_str())
            .value("BIRTH_DATE", self.birth_date)
            .value("ROLE", self.role.as_str())
            .value("CREATED_AT", self.created_at)
            .value("UPDATED_AT", self.created_at)
            .comment(format!("User ID: {}", self.id))
    }
}

impl ToInsert for Survey {
    const TABLE: &'static str = "SURVEYS";
    const NOUN: &'static str = "surveys";

    fn to_insert(&self) -> InsertStatement {
        InsertStatement::into_table(Self::TABLE)
            .value("USER_ID", self.user_id)
            .value("TITLE", self.title.as_str())
            .value("DESCRIPTION", self.description.as_str())
            .value("START_TIME", self.start_time)
            .value("END_TIME", self.end_time)
            .value("IS_ACTIVE", self.is_active)
            .value("IS_DELETED", self.is_deleted)
            .value("CREATED_AT", self.created_at)
            .value("UPDATED_AT", self.created_at)
            .comment(format!("Survey ID: {}", self.id))
    }
}

impl ToInsert for Question {
    const TABLE: &'static str = "QUESTIONS";
    const NOUN: &'static str = "questions";

    fn to_insert(&self) -> InsertStatement {
        InsertStatement::into_table(Self::TABLE)
            .value("SURVEY_ID", self.survey_id)
            .value("TYPE", self.kind.as_str())
            .value("CONTENT", self.content.as_str())
            .value("ORDER_INDEX", self.order_index)
            .comment(format!("Question ID: {}", self.id))
    }
}

impl ToInsert for QuestionOption {
    const TABLE: &'static str = "OPTIONS";
    const NOUN: &'static str = "options";

    fn to_insert(&self) -> InsertStatement {
        InsertStatement::into_table(Self::TABLE)
            .value("QUESTION_ID", self.question_id)
            .value("CONTENT", self.content.as_str())
            .comment(format!("Option ID: {}", self.id))
    }
}

impl ToInsert for Response {
    const TABLE: &'static str = "RESPONSES";
    const NOUN: &'static str = "responses";

    fn to_insert(&self) -> InsertStatement {
        InsertStatement::into_table(Self::TABLE)
            .value("RESPONSE_SESSION_ID", self.session_id.to_string())
            .value("QUESTION_ID", self.question_id)
            .value("QUESTION_TYPE", self.question_type().as_str())
            .value("OPTION_ID", self.option_id())
            .value("SUBJECTIVE_CONTENT", self.subjective_content())
            .value("SCALE_VALUE", self.scale_value)
            .value("CREATED_AT", self.created_at)
            .comment(format!("Response ID: {}", self.id))
    }
}

impl ToInsert for ResponseHistory {
    const TABLE: &'static str = "SURVEY_RESPONSE_HISTORY";
    const NOUN: &'static str = "response histories";

    fn to_insert(&self) -> InsertStatement {
        InsertStatement::into_table(Self::TABLE)
            .value("SURVEY_ID", self.survey_id)
            .value("DEVICE_ID_HASH", self.device_id_hash.as_str())
            .value("IP_ADDRESS_HASH", self.ip_address_hash.as_str())
            .value("RESPONDED_AT", self.responded_at)
            .comment(format!("History ID: {}", self.id))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::records::{Answer, Response, Role, Survey, User};
    use crate::sql::ToInsert;

    #[test]
    fn user_table_is_quoted() {
        let created = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        let user = User {
            id: 9,
            username: "test_admin_1@example.com".to_string(),
            password_hash: "hash".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1986, 2, 2).unwrap(),
            role: Role::Admin,
            created_at: created,
        };

        assert_eq!(
            user.to_insert().to_string(),
            "INSERT INTO `USER` (USERNAME, PASSWORD, BIRTH_DATE, ROLE, CREATED_AT, UPDATED_AT) \
             VALUES ('test_admin_1@example.com', 'hash', '1986-02-02', 'ADMIN', \
             '2024-05-06 07:08:09', '2024-05-06 07:08:09'); -- User ID: 9"
        );
    }

    #[test]
    fn survey_without_start_renders_null() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let survey = Survey {
            id: 4,
            user_id: 2,
            title: "Brand Awareness Survey (2)".to_string(),
            description: "What's up?".to_string(),
            start_time: None,
            end_time: ts,
            is_active: false,
            is_deleted: true,
            created_at: ts,
        };

        let rendered = survey.to_insert().to_string();
        assert!(rendered.contains(
            "'What''s up?', NULL, '2024-01-01 00:00:00', 0, 1,"
        ));
        assert!(rendered.ends_with("; -- Survey ID: 4"));
    }

    #[test]
    fn response_columns_follow_answer() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let choice = Response {
            id: 1,
            session_id: Uuid::nil(),
            question_id: 5,
            answer: Answer::Choice { option_id: 17 },
            scale_value: None,
            created_at: ts,
        };
        let text = Response {
            answer: Answer::Subjective {
                content: "It's very stable.".to_string(),
            },
            id: 2,
            ..choice.clone()
        };

        assert!(choice.to_insert().to_string().contains(
            "'00000000-0000-0000-0000-000000000000', 5, 'MULTIPLE_CHOICE', 17, NULL, NULL,"
        ));
        assert!(text.to_insert().to_string().contains(
            "5, 'SUBJECTIVE', NULL, 'It''s very stable.', NULL,"
        ));
    }
}
