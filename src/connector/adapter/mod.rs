mod gemini_client;
mod mock_model;

pub use gemini_client::*;
pub use mock_model::*;
