use serde_json::Value;

/// Default sampling temperature: low enough for consistent report structure,
/// high enough to keep the prose natural.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// A single structured-generation request to the hosted model.
///
/// Carries the fixed system instruction, the user's raw input, and the
/// output schema the provider must conform to. Built once per `analyze`
/// invocation and handed to a [`crate::application::ModelClient`].
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    system_instruction: String,
    user_text: String,
    response_schema: Option<Value>,
    temperature: f32,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_text: user_text.into(),
            response_schema: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn user_text(&self) -> &str {
        &self.user_text
    }

    pub fn response_schema(&self) -> Option<&Value> {
        self.response_schema.as_ref()
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}
