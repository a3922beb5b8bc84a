use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::application::ModelClient;
use crate::domain::{DomainError, GenerationRequest};

/// A [`ModelClient`] that answers from a canned payload instead of calling
/// the hosted provider.
///
/// Used by the `--mock-model` CLI flag for offline runs and by tests to
/// exercise the analyze pipeline against arbitrary response texts (empty,
/// malformed, conforming) without network access or a credential.
pub struct MockModelClient {
    response: String,
}

impl MockModelClient {
    /// A deterministic, schema-conforming sample report.
    pub fn new() -> Self {
        let report = json!({
            "studentName": "김하늘",
            "className": "3학년 2반",
            "totalScore": 527,
            "averageScore": 87.8,
            "summaryComment": "전 과목에서 고르게 우수한 성취를 보이고 있으며, 특히 역사와 영어에서 두드러진 강점이 확인됩니다.",
            "subjectComparisons": "역사(95점)가 가장 높고 수학(78점)이 상대적으로 낮아 보완이 필요합니다.",
            "subjectEvaluations": [
                {"subject": "국어", "score": 87, "comment": "독해와 표현 모두 안정적인 수준입니다."},
                {"subject": "영어", "score": 92, "comment": "어휘와 독해력이 뛰어난 상위권 성취입니다."},
                {"subject": "수학", "score": 78, "comment": "개념 이해는 양호하나 응용 문제 연습이 더 필요합니다."},
                {"subject": "과학", "score": 90, "comment": "탐구 영역에서 꾸준히 우수한 결과를 보입니다."},
                {"subject": "사회", "score": 85, "comment": "전반적으로 고른 이해도를 보여 줍니다."},
                {"subject": "역사", "score": 95, "comment": "최상위권 성취로 깊이 있는 이해가 돋보입니다."}
            ],
            "improvementPoints": [
                "수학 응용 문제를 주 3회 이상 풀며 취약 유형을 보완하세요.",
                "국어 비문학 독해 지문을 꾸준히 읽는 습관을 권장합니다.",
                "강점 과목인 역사는 심화 자료로 확장 학습을 이어가세요."
            ],
            "visualizationData": {
                "subjects": ["국어", "영어", "수학", "과학", "사회", "역사"],
                "scores": [87, 92, 78, 90, 85, 95],
                "average": 87.8,
                "radar_chart": [
                    {"subject": "국어", "score": 87, "fullMark": 100},
                    {"subject": "영어", "score": 92, "fullMark": 100},
                    {"subject": "수학", "score": 78, "fullMark": 100},
                    {"subject": "과학", "score": 90, "fullMark": 100},
                    {"subject": "사회", "score": 85, "fullMark": 100},
                    {"subject": "역사", "score": 95, "fullMark": 100}
                ]
            }
        });

        Self {
            response: report.to_string(),
        }
    }

    /// Answer every request with `response` verbatim.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for MockModelClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        debug!(
            "MockModelClient answering {} byte prompt with canned payload",
            request.user_text().len()
        );
        Ok(self.response.clone())
    }
}
