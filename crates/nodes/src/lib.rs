//! Procureflow stage implementations and workflow engine.
//!
//! This crate provides the three workflow stages (Intake, Supplier,
//! Approval) and the [`WorkflowEngine`] that sequences them over a single
//! request.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Stages adapt the business rules in the
//! [`pipeline`] crate to the [`pipeline::Stage`] contract; the engine checks
//! each stage's contract, owns the trace, and stops at the first failure.
//! Nothing here performs I/O.
//!
//! ## Flow
//!
//! ```text
//! raw request → Intake → Supplier → Approval → WorkflowState
//!                 │          │          │
//!             item, qty   supplier   approved, reason
//! ```

pub mod approval;
pub mod engine;
pub mod intake;
pub mod supplier;

pub use approval::ApprovalStage;
pub use engine::{WorkflowEngine, WORKFLOW_ID};
pub use intake::IntakeStage;
pub use supplier::SupplierStage;

/// Renders an optional state field for a trace entry or report, `-` when
/// the field is empty.
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_dash_renders_missing_fields_as_dash() {
        assert_eq!(or_dash(Some(3)), "3");
        assert_eq!(or_dash(None::<bool>), "-");
    }
}
