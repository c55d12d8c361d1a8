//! Command implementations

pub mod audit;
pub mod score;
pub mod simple;

pub use audit::{AuditResult, LengthAudit, check_feedback, run_audit, summary_line};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
