//! Loan eligibility engine: intake validation, EMI computation, and the
//! rule set that turns an applicant's numbers into an accept/reject decision.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
