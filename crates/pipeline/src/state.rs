//! The record threaded through every stage of a run.

use serde::Serialize;

use crate::{ItemName, Quantity, SupplierName};

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Names one field of [`WorkflowState`].
///
/// Stage contracts declare their reads and writes in terms of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    /// The request text as received. Set by the engine at creation.
    RawRequest,
    /// Extracted item name. Owned by Intake.
    Item,
    /// Extracted quantity. Owned by Intake.
    Quantity,
    /// Selected supplier. Owned by Supplier.
    Supplier,
    /// Approval decision. Owned by Approval.
    Approved,
    /// Justification for the decision. Owned by Approval.
    Reason,
    /// Trace entries. Owned by the engine.
    Logs,
}

impl StateField {
    /// Every field, in declaration order.
    pub const ALL: [StateField; 7] = [
        StateField::RawRequest,
        StateField::Item,
        StateField::Quantity,
        StateField::Supplier,
        StateField::Approved,
        StateField::Reason,
        StateField::Logs,
    ];

    /// Fields a complete run must have populated, in pipeline order.
    pub const STAGE_OWNED: [StateField; 5] = [
        StateField::Item,
        StateField::Quantity,
        StateField::Supplier,
        StateField::Approved,
        StateField::Reason,
    ];

    /// Serialised name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            StateField::RawRequest => "raw_request",
            StateField::Item => "item",
            StateField::Quantity => "quantity",
            StateField::Supplier => "supplier",
            StateField::Approved => "approved",
            StateField::Reason => "reason",
            StateField::Logs => "logs",
        }
    }
}

impl std::fmt::Display for StateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Accumulating record for one procurement request.
///
/// Created by the engine with only `raw_request` set. Each stage receives the
/// state by value and returns it with its own fields populated; optional
/// fields stay `None` until their owning stage has run.
///
/// The `with_*` builders do not guard against overwrites. That is enforced by
/// [`crate::StageContract::check_postconditions`], which compares the state
/// before and after every stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowState {
    raw_request: String,
    item: Option<ItemName>,
    quantity: Option<Quantity>,
    supplier: Option<SupplierName>,
    approved: Option<bool>,
    reason: Option<String>,
    logs: Vec<String>,
}

impl WorkflowState {
    /// Creates the initial state for `raw_request`, with an empty trace.
    pub fn new(raw_request: impl Into<String>) -> Self {
        Self {
            raw_request: raw_request.into(),
            item: None,
            quantity: None,
            supplier: None,
            approved: None,
            reason: None,
            logs: Vec::new(),
        }
    }

    /// The request text the run started from.
    pub fn raw_request(&self) -> &str {
        &self.raw_request
    }

    /// Normalised item, once Intake has run.
    pub fn item(&self) -> Option<&ItemName> {
        self.item.as_ref()
    }

    /// Requested quantity, once Intake has run.
    pub fn quantity(&self) -> Option<Quantity> {
        self.quantity
    }

    /// Selected supplier, possibly the unknown-supplier sentinel.
    pub fn supplier(&self) -> Option<&SupplierName> {
        self.supplier.as_ref()
    }

    /// Approval decision, once Approval has run.
    pub fn approved(&self) -> Option<bool> {
        self.approved
    }

    /// Justification for the approval decision.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Trace entries in execution order.
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Returns the state with Intake's fields set.
    pub fn with_intake(mut self, item: ItemName, quantity: Quantity) -> Self {
        self.item = Some(item);
        self.quantity = Some(quantity);
        self
    }

    /// Returns the state with the Supplier stage's field set.
    pub fn with_supplier(mut self, supplier: SupplierName) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Returns the state with the Approval stage's fields set.
    pub fn with_decision(mut self, approved: bool, reason: impl Into<String>) -> Self {
        self.approved = Some(approved);
        self.reason = Some(reason.into());
        self
    }

    /// Appends a trace entry.
    ///
    /// Only the workflow engine calls this; a stage that records an entry is
    /// rejected by the postcondition check.
    pub fn record(&mut self, entry: impl Into<String>) {
        self.logs.push(entry.into());
    }

    /// Consumes the state and returns its trace.
    pub fn into_logs(self) -> Vec<String> {
        self.logs
    }

    /// Returns `true` if `field` holds a value.
    ///
    /// `raw_request` is always populated; `logs` counts as populated once it
    /// holds at least one entry.
    pub fn is_populated(&self, field: StateField) -> bool {
        match field {
            StateField::RawRequest => true,
            StateField::Item => self.item.is_some(),
            StateField::Quantity => self.quantity.is_some(),
            StateField::Supplier => self.supplier.is_some(),
            StateField::Approved => self.approved.is_some(),
            StateField::Reason => self.reason.is_some(),
            StateField::Logs => !self.logs.is_empty(),
        }
    }

    /// Returns `true` if `field` holds the same value in `self` and `other`.
    pub fn field_matches(&self, other: &WorkflowState, field: StateField) -> bool {
        match field {
            StateField::RawRequest => self.raw_request == other.raw_request,
            StateField::Item => self.item == other.item,
            StateField::Quantity => self.quantity == other.quantity,
            StateField::Supplier => self.supplier == other.supplier,
            StateField::Approved => self.approved == other.approved,
            StateField::Reason => self.reason == other.reason,
            StateField::Logs => self.logs == other.logs,
        }
    }

    /// Returns `true` once every stage-owned field is populated.
    pub fn is_complete(&self) -> bool {
        self.first_unpopulated().is_none()
    }

    /// First stage-owned field, in pipeline order, that still holds no value.
    pub fn first_unpopulated(&self) -> Option<StateField> {
        StateField::STAGE_OWNED
            .into_iter()
            .find(|&field| !self.is_populated(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptops() -> ItemName {
        ItemName::new("laptops").unwrap()
    }

    #[test]
    fn new_state_has_only_the_request() {
        let state = WorkflowState::new("Order 3 laptops");

        assert_eq!(state.raw_request(), "Order 3 laptops");
        assert!(state.item().is_none());
        assert!(state.logs().is_empty());
        assert!(!state.is_complete());
        assert!(state.is_populated(StateField::RawRequest));
        assert!(!state.is_populated(StateField::Logs));
    }

    #[test]
    fn builders_fill_owned_fields() {
        let state = WorkflowState::new("Order 3 laptops")
            .with_intake(laptops(), Quantity::new(3))
            .with_supplier(SupplierName::new("Acme Computers").unwrap())
            .with_decision(true, "ok");

        assert!(state.is_complete());
        assert_eq!(state.quantity(), Some(Quantity::new(3)));
        assert_eq!(state.reason(), Some("ok"));
    }

    #[test]
    fn first_unpopulated_follows_pipeline_order() {
        let state = WorkflowState::new("Order 3 laptops");
        assert_eq!(state.first_unpopulated(), Some(StateField::Item));

        let state = state.with_intake(laptops(), Quantity::new(3));
        assert_eq!(state.first_unpopulated(), Some(StateField::Supplier));

        let state = state
            .with_supplier(SupplierName::unknown())
            .with_decision(false, "too many");
        assert_eq!(state.first_unpopulated(), None);
    }

    #[test]
    fn field_matches_compares_one_field() {
        let before = WorkflowState::new("Order 3 laptops");
        let after = before.clone().with_intake(laptops(), Quantity::new(3));

        assert!(before.field_matches(&after, StateField::RawRequest));
        assert!(before.field_matches(&after, StateField::Supplier));
        assert!(!before.field_matches(&after, StateField::Item));
        assert!(!before.field_matches(&after, StateField::Quantity));
    }

    #[test]
    fn serialises_absent_fields_as_null() {
        let state = WorkflowState::new("Order 3 laptops");
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["raw_request"], "Order 3 laptops");
        assert!(json["supplier"].is_null());
        assert_eq!(json["logs"], serde_json::json!([]));
    }
}
