pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{AnalyzeGradesUseCase, ModelClient};

pub use connector::{GeminiClient, MockModelClient, API_KEY_VAR};

pub use domain::{
    report_response_schema, DomainError, GenerationRequest, GradeReport, RadarPoint,
    SubjectEvaluation, VisualizationData, FULL_MARK, NOT_PROVIDED,
};
