//! Integration tests for the analyze pipeline.
//!
//! The hosted provider is substituted at the `ModelClient` seam, so these
//! run offline and without a credential.

use std::sync::Arc;

use gradeinsight::{AnalyzeGradesUseCase, GeminiClient, MockModelClient, API_KEY_VAR, NOT_PROVIDED};

const CONFORMING_REPORT: &str = r#"{
    "studentName": "김하늘",
    "className": "미기입",
    "totalScore": 179,
    "averageScore": 89.5,
    "summaryComment": "두 과목 모두 우수한 성취를 보였습니다.",
    "subjectComparisons": "영어가 국어보다 강세입니다.",
    "subjectEvaluations": [
        {"subject": "국어", "score": 87, "comment": "안정적인 성취입니다."},
        {"subject": "영어", "score": 92, "comment": "뛰어난 성취입니다."}
    ],
    "improvementPoints": ["국어 독해 훈련을 권장합니다.", "꾸준한 복습이 필요합니다."],
    "visualizationData": {
        "subjects": ["국어", "영어"],
        "scores": [87, 92],
        "average": 89.5,
        "radar_chart": [
            {"subject": "국어", "score": 87, "fullMark": 100},
            {"subject": "영어", "score": 92, "fullMark": 100}
        ]
    }
}"#;

fn use_case_with_payload(payload: &str) -> AnalyzeGradesUseCase {
    AnalyzeGradesUseCase::new(Arc::new(MockModelClient::with_response(payload)))
}

#[tokio::test]
async fn conforming_payload_yields_aligned_visualization() {
    let use_case = use_case_with_payload(CONFORMING_REPORT);

    let report = use_case.execute("이름: 김하늘\n국어 87\n영어 92").await.unwrap();

    assert_eq!(
        report.visualization_data.subjects.len(),
        report.visualization_data.scores.len()
    );
    assert_eq!(report.visualization_data.radar_chart.len(), 2);
    assert_eq!(report.class_name, NOT_PROVIDED);
}

#[tokio::test]
async fn report_reflects_provider_output_not_local_parsing() {
    let use_case = use_case_with_payload(CONFORMING_REPORT);

    // Input mentions three subjects; the report must carry exactly what the
    // provider returned, nothing recomputed from the input.
    let report = use_case
        .execute("이름: 김하늘\n국어 87\n영어 92\n수학 60")
        .await
        .unwrap();

    assert_eq!(report.student_name, "김하늘");
    let subjects: Vec<&str> = report
        .subject_evaluations
        .iter()
        .map(|e| e.subject.as_str())
        .collect();
    assert_eq!(subjects, ["국어", "영어"]);
}

#[tokio::test]
async fn empty_payload_is_an_empty_response_error() {
    let use_case = use_case_with_payload("");

    let err = use_case.execute("국어 87").await.unwrap_err();
    assert!(err.is_empty_response());
}

#[tokio::test]
async fn whitespace_payload_is_an_empty_response_error() {
    let use_case = use_case_with_payload("  \n\t");

    let err = use_case.execute("국어 87").await.unwrap_err();
    assert!(err.is_empty_response());
}

#[tokio::test]
async fn non_json_payload_is_a_malformed_response_error() {
    let use_case = use_case_with_payload("not json");

    let err = use_case.execute("국어 87").await.unwrap_err();
    assert!(err.is_malformed());
}

#[tokio::test]
async fn shape_mismatch_is_a_malformed_response_error() {
    // Valid JSON, wrong shape: no partial report may come back.
    let use_case = use_case_with_payload(r#"{"studentName": "김하늘"}"#);

    let err = use_case.execute("국어 87").await.unwrap_err();
    assert!(err.is_malformed());
}

#[tokio::test]
async fn missing_credential_fails_before_any_network_call() {
    std::env::remove_var(API_KEY_VAR);

    // Unroutable endpoint: if the client ever attempted I/O the error kind
    // would be Provider, not Configuration.
    let client = GeminiClient::new().with_base_url("http://127.0.0.1:9");
    let use_case = AnalyzeGradesUseCase::new(Arc::new(client));

    for input in ["", "이름: 김하늘\n국어 87"] {
        let err = use_case.execute(input).await.unwrap_err();
        assert!(err.is_configuration(), "input {input:?} must fail on configuration");
        assert!(err.to_string().contains(API_KEY_VAR));
    }
}

#[tokio::test]
async fn default_mock_payload_flows_end_to_end() {
    let use_case = AnalyzeGradesUseCase::new(Arc::new(MockModelClient::new()));

    let report = use_case.execute(gradeinsight::cli::sample_input()).await.unwrap();

    assert_eq!(report.subject_count(), 6);
    assert_eq!(
        report.visualization_data.subjects.len(),
        report.visualization_data.scores.len()
    );
}
