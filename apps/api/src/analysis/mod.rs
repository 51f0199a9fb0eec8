// Resume quality analysis: four weighted metrics, a letter grade and a capped action plan.
// Pure and synchronous; cheap enough to run on every edit.

pub mod analyzer;
pub mod ats;
pub mod brevity;
pub mod grading;
pub mod handlers;
pub mod heuristics;
pub mod impact;
pub mod keywords;
pub mod models;

pub use analyzer::ResumeAnalyzer;
pub use heuristics::HeuristicTables;
