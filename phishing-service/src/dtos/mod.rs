pub mod analysis;
pub mod email;

pub use analysis::AnalysisResponse;
pub use email::{EmailData, HealthResponse, ScoreResponse};
