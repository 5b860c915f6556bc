pub mod capture;
pub mod session;

pub use capture::CaptureCollector;
pub use session::{AnalysisOutcome, SessionController};
