//! Fixed content the generator samples from.

use crate::error::GenerateError;

/// bcrypt hash of `test1234`, shared by every generated account.
pub const TEST_PASSWORD_HASH: &str =
    "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

#[derive(Clone, Debug)]
pub struct Topic {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    pub password_hash: String,
    pub topics: Vec<Topic>,
    pub multiple_choice_questions: Vec<String>,
    pub subjective_questions: Vec<String>,
    /// Each entry is one complete set of options attached to a question.
    pub option_sets: Vec<Vec<String>>,
    pub subjective_answers: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        let topics = [
            ("서비스 만족도 조사", "고객 여러분의 소중한 의견을 듣고 싶습니다."),
            (
                "제품 피드백 수집",
                "새로운 제품에 대한 여러분의 생각을 알려주세요.",
            ),
            ("이벤트 참여 설문", "이벤트 참여 후기를 남겨주세요."),
            ("앱 사용성 조사", "앱 사용 경험을 공유해주세요."),
            (
                "고객 지원 만족도",
                "고객 지원 서비스에 대한 의견을 들려주세요.",
            ),
            ("브랜드 인지도 조사", "우리 브랜드에 대해 어떻게 생각하시나요?"),
            ("새 기능 테스트", "새로운 기능을 체험해보고 평가해주세요."),
            (
                "온라인 강의 만족도",
                "강의 콘텐츠에 대한 만족도를 평가해주세요.",
            ),
            ("온라인 쇼핑 경험", "쇼핑 경험을 공유해주세요."),
            ("웹사이트 개선 의견", "웹사이트 개선을 위한 의견을 주세요."),
        ];

        Catalog {
            password_hash: TEST_PASSWORD_HASH.to_string(),
            topics: topics
                .iter()
                .map(|(title, description)| Topic {
                    title: title.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            multiple_choice_questions: owned(&[
                "현재 만족도는 어떠신가요?",
                "어떤 기능을 가장 자주 사용하시나요?",
                "주로 어떤 기기를 사용하시나요?",
                "어떤 서비스를 가장 선호하시나요?",
                "가장 중요하게 생각하는 것은 무엇인가요?",
                "어떤 방식으로 알림을 받고 싶으신가요?",
            ]),
            subjective_questions: owned(&[
                "개선하고 싶은 점이 있다면 무엇인가요?",
                "추가로 원하는 기능이 있다면 알려주세요.",
                "전반적인 의견이나 제안사항을 자유롭게 남겨주세요.",
                "가장 불편했던 점은 무엇이었나요?",
                "특히 좋았던 점은 무엇이었나요?",
                "더 나은 서비스를 위한 아이디어를 공유해주세요.",
            ]),
            option_sets: vec![
                owned(&["매우 만족", "만족", "보통", "불만족", "매우 불만족"]),
                owned(&["기능 A", "기능 B", "기능 C", "기능 D"]),
                owned(&["스마트폰", "태블릿", "PC", "노트북"]),
                owned(&["서비스 1", "서비스 2", "서비스 3"]),
                owned(&["가격", "품질", "서비스", "편의성"]),
                owned(&["이메일", "SMS", "앱 푸시", "없음"]),
            ],
            subjective_answers: owned(&[
                "전반적으로 만족스럽습니다.",
                "좀 더 빠른 응답이 필요합니다.",
                "UI/UX 개선이 필요해 보입니다.",
                "기능이 다양해서 좋습니다.",
                "가격대비 만족도가 높습니다.",
                "고객 지원이 친절합니다.",
                "추가 기능을 원합니다.",
                "안정성이 좋습니다.",
                "다양한 결제 수단이 필요합니다.",
                "모바일 앱 개선이 필요합니다.",
            ]),
        }
    }
}

impl Catalog {
    /// Every list is sampled from at least once during generation, so none of
    /// them may be empty.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let lists = [
            ("topics", self.topics.len()),
            (
                "multiple_choice_questions",
                self.multiple_choice_questions.len(),
            ),
            ("subjective_questions", self.subjective_questions.len()),
            ("option_sets", self.option_sets.len()),
            ("subjective_answers", self.subjective_answers.len()),
        ];
        for (name, len) in lists {
            if len == 0 {
                return Err(GenerateError::EmptyCatalog(name));
            }
        }

        if self.option_sets.iter().any(|set| set.is_empty()) {
            return Err(GenerateError::EmptyCatalog("option_sets[..]"));
        }

        Ok(())
    }
}
