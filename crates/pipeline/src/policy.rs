//! Approval policy: a single inclusive quantity threshold.

use serde::Serialize;

use crate::{ApprovalThreshold, Quantity};

/// Outcome of applying the approval policy to a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub approved: bool,
    pub reason: String,
}

/// Auto-approves requests whose quantity does not exceed the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApprovalPolicy {
    threshold: ApprovalThreshold,
}

impl ApprovalPolicy {
    /// Policy approving quantities up to and including `threshold`.
    pub fn new(threshold: ApprovalThreshold) -> Self {
        Self { threshold }
    }

    /// The inclusive auto-approval limit.
    pub fn threshold(&self) -> ApprovalThreshold {
        self.threshold
    }

    /// Applies the rule. Total over every quantity; there is no error path.
    pub fn decide(&self, quantity: Quantity) -> Decision {
        let threshold = self.threshold;
        if threshold.permits(quantity) {
            Decision {
                approved: true,
                reason: format!(
                    "Quantity {quantity} is within auto-approval threshold (<= {threshold})."
                ),
            }
        } else {
            Decision {
                approved: false,
                reason: format!(
                    "Quantity {quantity} exceeds auto-approval threshold (<= {threshold}); manual approval required."
                ),
            }
        }
    }
}
