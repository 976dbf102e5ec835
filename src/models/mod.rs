pub mod analysis;
pub mod enums;
pub mod session;

pub use analysis::AnalysisResult;
pub use session::{AnalysisInput, PatientContext};
