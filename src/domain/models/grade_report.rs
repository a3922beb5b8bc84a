use serde::{Deserialize, Serialize};

/// Sentinel the model substitutes for textual fields it cannot find in the
/// input (Korean for "not provided").
pub const NOT_PROVIDED: &str = "미기입";

/// Radar-chart axis maximum; every subject is scored against the same scale.
pub const FULL_MARK: f64 = 100.0;

/// One student's analyzed performance, exactly as returned by the model.
///
/// Totals, averages, and array alignment are trusted as generated; nothing
/// is recomputed or repaired locally. The report is created fresh per
/// request and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub student_name: String,
    pub class_name: String,
    pub total_score: f64,
    pub average_score: f64,
    pub summary_comment: String,
    pub subject_comparisons: String,
    pub subject_evaluations: Vec<SubjectEvaluation>,
    pub improvement_points: Vec<String>,
    pub visualization_data: VisualizationData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEvaluation {
    pub subject: String,
    pub score: f64,
    pub comment: String,
}

/// Chart-ready projection of the per-subject scores.
///
/// `subjects` and `scores` are index-aligned. Note the wire name of the
/// radar series is `radar_chart`, not camelCase like every other field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationData {
    pub subjects: Vec<String>,
    pub scores: Vec<f64>,
    pub average: f64,
    pub radar_chart: Vec<RadarPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarPoint {
    pub subject: String,
    pub score: f64,
    pub full_mark: f64,
}

impl GradeReport {
    pub fn subject_count(&self) -> usize {
        self.subject_evaluations.len()
    }
}
