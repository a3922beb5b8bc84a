use serde_json::{json, Value};

/// Structural contract constraining the model's output to the
/// [`GradeReport`](super::GradeReport) wire shape.
///
/// Declared as a plain JSON value in the provider's structured-output
/// dialect (uppercase type tags, `properties`/`required`/`items`, free-text
/// `description` hints that steer generation). It has no runtime behavior of
/// its own; it is attached to every generation request and enforced by the
/// provider's constrained-decoding step.
pub fn report_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "studentName": { "type": "STRING", "description": "Name of the student. If missing, '미기입'" },
            "className": { "type": "STRING", "description": "Class name. If missing, '미기입'" },
            "totalScore": { "type": "NUMBER", "description": "Sum of all scores" },
            "averageScore": { "type": "NUMBER", "description": "Average of scores" },
            "summaryComment": { "type": "STRING", "description": "Overall summary comment (2-3 sentences)" },
            "subjectComparisons": { "type": "STRING", "description": "Brief comparison of highest/lowest subjects" },
            "subjectEvaluations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "subject": { "type": "STRING" },
                        "score": { "type": "NUMBER" },
                        "comment": { "type": "STRING", "description": "Specific comment based on the score" }
                    },
                    "required": ["subject", "score", "comment"]
                }
            },
            "improvementPoints": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "2-3 actionable advice points for the student"
            },
            "visualizationData": {
                "type": "OBJECT",
                "properties": {
                    "subjects": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "scores": { "type": "ARRAY", "items": { "type": "NUMBER" } },
                    "average": { "type": "NUMBER" },
                    "radar_chart": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "subject": { "type": "STRING" },
                                "score": { "type": "NUMBER" },
                                "fullMark": { "type": "NUMBER", "description": "Always 100" }
                            }
                        }
                    }
                }
            }
        },
        "required": [
            "studentName", "className", "totalScore", "averageScore",
            "summaryComment", "subjectComparisons", "subjectEvaluations",
            "improvementPoints", "visualizationData"
        ]
    })
}
