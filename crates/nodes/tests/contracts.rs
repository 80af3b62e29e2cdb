//! Engine enforcement of stage contracts and failure propagation.
//!
//! These tests swap in misbehaving stages to check that the engine, not the
//! stages, decides what reaches the trace and the caller.

use nodes::{ApprovalStage, IntakeStage, SupplierStage, WorkflowEngine};
use pipeline::{
    ContractViolation, ItemName, Quantity, Stage, StageContract, StageError, StateField,
    SupplierDirectory, SupplierName, WorkflowFailure, WorkflowState,
};

// ============================================================================
// Misbehaving stages
// ============================================================================

/// Supplier stand-in that always reports an internal fault.
struct BrokenCatalogStage;

impl Stage for BrokenCatalogStage {
    fn id(&self) -> &'static str {
        "supplier"
    }

    fn label(&self) -> &'static str {
        "Supplier"
    }

    fn contract(&self) -> StageContract {
        StageContract::new(&[StateField::Item], &[StateField::Supplier])
    }

    fn run(&self, _state: WorkflowState) -> Result<WorkflowState, StageError> {
        Err(StageError::new("supplier", "catalog unavailable"))
    }

    fn trace_entry(&self, _state: &WorkflowState) -> String {
        unreachable!("never succeeds")
    }
}

/// Supplier stand-in that also rewrites the item.
struct OverreachingStage;

impl Stage for OverreachingStage {
    fn id(&self) -> &'static str {
        "overreach"
    }

    fn label(&self) -> &'static str {
        "Overreach"
    }

    fn contract(&self) -> StageContract {
        StageContract::new(&[StateField::Item], &[StateField::Supplier])
    }

    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError> {
        let quantity = state.quantity().unwrap_or(Quantity::DEFAULT);
        Ok(state
            .with_intake(ItemName::new("gold bars").unwrap(), quantity)
            .with_supplier(SupplierName::new("Shady Co").unwrap()))
    }

    fn trace_entry(&self, _state: &WorkflowState) -> String {
        "Overreach done".to_string()
    }
}

/// Stage that writes to the trace itself.
struct ChattyStage;

impl Stage for ChattyStage {
    fn id(&self) -> &'static str {
        "chatty"
    }

    fn label(&self) -> &'static str {
        "Chatty"
    }

    fn contract(&self) -> StageContract {
        StageContract::new(&[StateField::Item], &[StateField::Supplier])
    }

    fn run(&self, mut state: WorkflowState) -> Result<WorkflowState, StageError> {
        state.record("chatty was here");
        Ok(state.with_supplier(SupplierName::unknown()))
    }

    fn trace_entry(&self, _state: &WorkflowState) -> String {
        "Chatty done".to_string()
    }
}

/// Stage that claims a field but never fills it.
struct LazyStage;

impl Stage for LazyStage {
    fn id(&self) -> &'static str {
        "lazy"
    }

    fn label(&self) -> &'static str {
        "Lazy"
    }

    fn contract(&self) -> StageContract {
        StageContract::new(&[], &[StateField::Supplier])
    }

    fn run(&self, state: WorkflowState) -> Result<WorkflowState, StageError> {
        Ok(state)
    }

    fn trace_entry(&self, _state: &WorkflowState) -> String {
        "Lazy done".to_string()
    }
}

fn engine_of(stages: Vec<Box<dyn Stage>>) -> WorkflowEngine {
    WorkflowEngine::with_stages(stages)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn supplier_fault_is_fatal_and_keeps_prior_trace() {
    let engine = engine_of(vec![
        Box::new(IntakeStage::new()),
        Box::new(BrokenCatalogStage),
        Box::new(ApprovalStage::default()),
    ]);

    let err = engine.run("Order 3 laptops").unwrap_err();

    assert_eq!(err.stage(), "supplier");
    assert_eq!(
        err.failure(),
        &WorkflowFailure::Stage(StageError::new("supplier", "catalog unavailable"))
    );
    assert_eq!(
        err.logs(),
        [
            "Received request: Order 3 laptops",
            "Intake parsed: item=laptops, quantity=3",
            "Supplier failed: catalog unavailable",
        ]
    );
}

#[test]
fn out_of_order_stage_is_a_contract_violation() {
    let engine = engine_of(vec![
        Box::new(SupplierStage::new(SupplierDirectory::default())),
        Box::new(IntakeStage::new()),
    ]);

    let err = engine.run("Order 3 laptops").unwrap_err();

    assert_eq!(err.stage(), "supplier");
    assert!(err.stage_error().is_none());
    assert_eq!(
        err.failure(),
        &WorkflowFailure::Contract(ContractViolation::MissingInput {
            field: StateField::Item
        })
    );
    assert_eq!(
        err.logs()[1],
        "Supplier failed: stage contract violated: required input field 'item' is not populated"
    );
}

#[test]
fn repeated_stage_cannot_overwrite_its_fields() {
    let engine = engine_of(vec![
        Box::new(IntakeStage::new()),
        Box::new(IntakeStage::new()),
    ]);

    let err = engine.run("Order 3 laptops").unwrap_err();

    assert_eq!(
        err.failure(),
        &WorkflowFailure::Contract(ContractViolation::AlreadyPopulated {
            field: StateField::Item
        })
    );
    assert_eq!(err.logs().len(), 3);
}

#[test]
fn writing_another_stages_field_is_rejected() {
    let engine = engine_of(vec![Box::new(IntakeStage::new()), Box::new(OverreachingStage)]);

    let err = engine.run("Order 3 laptops").unwrap_err();

    assert_eq!(err.stage(), "overreach");
    assert_eq!(
        err.failure(),
        &WorkflowFailure::Contract(ContractViolation::ForeignWrite {
            field: StateField::Item
        })
    );
    assert!(err.logs().iter().all(|entry| !entry.contains("gold bars")));
}

#[test]
fn stages_cannot_write_the_trace() {
    let engine = engine_of(vec![Box::new(IntakeStage::new()), Box::new(ChattyStage)]);

    let err = engine.run("Order 3 laptops").unwrap_err();

    assert_eq!(
        err.failure(),
        &WorkflowFailure::Contract(ContractViolation::ForeignWrite {
            field: StateField::Logs
        })
    );
    assert!(err.logs().iter().all(|entry| entry != "chatty was here"));
}

#[test]
fn owned_fields_must_be_populated() {
    let err = engine_of(vec![Box::new(LazyStage)])
        .run("Order 3 laptops")
        .unwrap_err();

    assert_eq!(
        err.failure(),
        &WorkflowFailure::Contract(ContractViolation::MissingOutput {
            field: StateField::Supplier
        })
    );
    assert_eq!(
        err.logs(),
        [
            "Received request: Order 3 laptops",
            "Lazy failed: stage contract violated: owned field 'supplier' was not populated",
        ]
    );
}

#[test]
fn later_stages_do_not_run_after_a_failure() {
    let engine = WorkflowEngine::default();

    let err = engine.run("Order 3.5 laptops").unwrap_err();

    assert_eq!(err.stage(), "intake");
    assert!(err
        .logs()
        .iter()
        .all(|entry| !entry.starts_with("Supplier") && !entry.starts_with("Approval")));
}
