use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::ModelClient;
use crate::domain::{report_response_schema, DomainError, GenerationRequest, GradeReport};

/// System prompt directing the model to act as an educational consultant and
/// emit a report conforming to the response schema.
const SYSTEM_INSTRUCTION: &str = "\
You are a professional educational consultant and data analyst. \
Your role is to analyze raw student grade data provided by the user and generate a structured JSON report.

1. Parse the input text which may contain Name, Class, and a list of Subject/Score pairs.
2. If information is missing, use \"미기입\" for strings or 0 for numbers, but try to infer context.
3. Generate a professional summary, detailed subject evaluations, and actionable learning advice.
4. Provide data structures strictly formatted for visualization.
5. Ensure the tone is professional, encouraging, and objective.
6. All text output must be in Korean.";

/// The single integration operation: free-form grade text in, structured
/// [`GradeReport`] out.
///
/// Makes exactly one outbound model call per invocation. No caching, no
/// retry, no rate-limiting; every failure is terminal for that request and
/// bubbles unchanged to the caller.
pub struct AnalyzeGradesUseCase {
    model_client: Arc<dyn ModelClient>,
}

impl AnalyzeGradesUseCase {
    pub fn new(model_client: Arc<dyn ModelClient>) -> Self {
        Self { model_client }
    }

    /// Analyze `input_text` and return the model's report.
    ///
    /// Structural well-formedness of the result is guaranteed by the schema
    /// plus deserialization; semantic quality of the commentary is the
    /// provider's responsibility. Totals and array alignment are trusted as
    /// returned, never recomputed here.
    pub async fn execute(&self, input_text: &str) -> Result<GradeReport, DomainError> {
        info!("Analyzing grade input ({} bytes)", input_text.len());
        let start_time = Instant::now();

        let request = GenerationRequest::new(SYSTEM_INSTRUCTION, compose_user_prompt(input_text))
            .with_response_schema(report_response_schema());

        let text = self.model_client.generate(&request).await?;
        if text.trim().is_empty() {
            return Err(DomainError::EmptyResponse);
        }
        debug!("Model returned {} bytes of report JSON", text.len());

        let report: GradeReport = serde_json::from_str(&text)
            .map_err(|e| DomainError::malformed(format!("model output is not a grade report: {e}")))?;

        info!(
            "Generated report for {} ({} subjects) in {:.2}s",
            report.student_name,
            report.subject_count(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }
}

fn compose_user_prompt(input_text: &str) -> String {
    format!("Analyze the following student data:\n{input_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_wraps_raw_input() {
        let prompt = compose_user_prompt("이름: 김하늘\n국어 87");

        assert!(prompt.starts_with("Analyze the following student data:\n"));
        assert!(prompt.ends_with("국어 87"));
    }

    #[test]
    fn system_instruction_mandates_korean_and_placeholder() {
        assert!(SYSTEM_INSTRUCTION.contains("미기입"));
        assert!(SYSTEM_INSTRUCTION.contains("Korean"));
    }
}
