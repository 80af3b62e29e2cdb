//! Property tests: invariants of a full run over generated requests.

use nodes::WorkflowEngine;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an item phrase of one to three words, in mixed case.
fn arb_item() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}( [A-Za-z]{1,12}){0,2}"
}

/// Generate one of the recognised request verbs.
fn arb_verb() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Order"),
        Just("buy"),
        Just("PURCHASE"),
        Just("Get"),
        Just("acquire"),
        Just("Request"),
    ]
}

/// A lone article is never an item.
fn is_article(item: &str) -> bool {
    matches!(item.to_lowercase().as_str(), "a" | "an")
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every recognised request completes with four trace entries and the
    /// decision implied by the default threshold.
    #[test]
    fn recognised_requests_complete_with_four_entries(
        verb in arb_verb(),
        quantity in 1u32..1_000,
        item in arb_item(),
    ) {
        prop_assume!(!is_article(&item));
        let engine = WorkflowEngine::default();
        let request = format!("{verb} {quantity} {item}");
        let state = engine.run(&request).unwrap();

        prop_assert_eq!(state.logs().len(), 4);
        prop_assert_eq!(state.quantity().map(|q| q.as_u32()), Some(quantity));
        prop_assert_eq!(state.item().map(|i| i.as_str().to_string()), Some(item.to_lowercase()));
        prop_assert_eq!(state.approved(), Some(quantity <= 5));
        prop_assert!(state.supplier().is_some());
    }

    /// Running the same request twice yields the same final state.
    #[test]
    fn runs_are_idempotent(quantity in 1u32..50, item in arb_item()) {
        prop_assume!(!is_article(&item));
        let engine = WorkflowEngine::default();
        let request = format!("Order {quantity} {item}");
        prop_assert_eq!(engine.run(&request).unwrap(), engine.run(&request).unwrap());
    }

    /// Text that never starts with a verb always fails at intake with two
    /// trace entries.
    #[test]
    fn unrecognised_text_fails_with_two_entries(text in "[0-9]{1,3} [a-z ]{0,20}") {
        let err = WorkflowEngine::default().run(&text).unwrap_err();
        prop_assert_eq!(err.stage(), "intake");
        prop_assert_eq!(err.logs().len(), 2);
    }
}
