//! Console presentation: input acquisition and read-only report rendering.

use std::io::Read;

use crate::domain::GradeReport;

const BAR_WIDTH: usize = 30;

/// Sample grade sheet, matching the fill-in example of the original form.
pub fn sample_input() -> &'static str {
    "이름: 김하늘\n반: 3학년 2반\n국어 87\n영어 92\n수학 78\n과학 90\n사회 85\n역사 95"
}

/// Read the raw grade text from `source`: a file path, or `-` for stdin.
pub fn read_input(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(source)
    }
}

/// Render the report as console text, mirroring the four sections of the
/// original report view: header, summary, visualization, per-subject
/// evaluation, improvement points.
pub fn render_report(report: &GradeReport) -> String {
    let mut out = String::new();

    out.push_str("GradeInsight Report\n");
    out.push_str("===================\n");
    out.push_str(&format!(
        "학생: {}    반: {}\n",
        report.student_name, report.class_name
    ));
    out.push_str(&format!(
        "총점: {}    평균: {}\n\n",
        fmt_score(report.total_score),
        fmt_score(report.average_score)
    ));

    out.push_str("1. 성적표 요약\n");
    out.push_str(&format!("   종합 의견: {}\n", report.summary_comment));
    out.push_str(&format!("   과목 비교: {}\n\n", report.subject_comparisons));

    let viz = &report.visualization_data;
    out.push_str(&format!(
        "2. 시각화 분석 (평균 {})\n",
        fmt_score(viz.average)
    ));
    let label_width = viz.subjects.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    for (subject, score) in viz.subjects.iter().zip(viz.scores.iter()) {
        let padding = " ".repeat(label_width - subject.chars().count());
        out.push_str(&format!(
            "   {subject}{padding}  {}  {}\n",
            score_bar(*score),
            fmt_score(*score)
        ));
    }
    out.push('\n');

    out.push_str("3. 과목별 평가\n");
    for evaluation in &report.subject_evaluations {
        out.push_str(&format!(
            "   {} ({}점): {}\n",
            evaluation.subject,
            fmt_score(evaluation.score),
            evaluation.comment
        ));
    }
    out.push('\n');

    out.push_str("4. 학습 개선 포인트\n");
    for (i, point) in report.improvement_points.iter().enumerate() {
        out.push_str(&format!("   {}. {}\n", i + 1, point));
    }

    out
}

/// Scores arrive as JSON numbers; print integers without a trailing `.0`.
fn fmt_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn score_bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RadarPoint, SubjectEvaluation, VisualizationData};

    fn sample_report() -> GradeReport {
        GradeReport {
            student_name: "김하늘".to_string(),
            class_name: "3학년 2반".to_string(),
            total_score: 179.0,
            average_score: 89.5,
            summary_comment: "우수한 성취입니다.".to_string(),
            subject_comparisons: "영어가 강세입니다.".to_string(),
            subject_evaluations: vec![
                SubjectEvaluation {
                    subject: "국어".to_string(),
                    score: 87.0,
                    comment: "안정적입니다.".to_string(),
                },
                SubjectEvaluation {
                    subject: "영어".to_string(),
                    score: 92.0,
                    comment: "뛰어납니다.".to_string(),
                },
            ],
            improvement_points: vec!["복습을 권장합니다.".to_string()],
            visualization_data: VisualizationData {
                subjects: vec!["국어".to_string(), "영어".to_string()],
                scores: vec![87.0, 92.0],
                average: 89.5,
                radar_chart: vec![
                    RadarPoint {
                        subject: "국어".to_string(),
                        score: 87.0,
                        full_mark: 100.0,
                    },
                    RadarPoint {
                        subject: "영어".to_string(),
                        score: 92.0,
                        full_mark: 100.0,
                    },
                ],
            },
        }
    }

    #[test]
    fn renders_all_four_sections() {
        let text = render_report(&sample_report());

        assert!(text.contains("1. 성적표 요약"));
        assert!(text.contains("2. 시각화 분석"));
        assert!(text.contains("3. 과목별 평가"));
        assert!(text.contains("4. 학습 개선 포인트"));
        assert!(text.contains("김하늘"));
        assert!(text.contains("평균: 89.5"));
    }

    #[test]
    fn integer_scores_render_without_decimals() {
        assert_eq!(fmt_score(87.0), "87");
        assert_eq!(fmt_score(89.5), "89.5");
    }

    #[test]
    fn score_bar_is_fixed_width() {
        for score in [0.0, 33.0, 87.0, 100.0, 250.0, -5.0] {
            assert_eq!(score_bar(score).chars().count(), BAR_WIDTH);
        }
    }

    #[test]
    fn sample_input_lists_name_class_and_subjects() {
        let sample = sample_input();

        assert!(sample.contains("이름: 김하늘"));
        assert!(sample.contains("반: 3학년 2반"));
        assert!(sample.contains("국어 87"));
    }
}
