//! Shared value types for the procurement domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! meaningful values that participate in domain computations (the approval
//! rule compares a [`Quantity`] against an [`ApprovalThreshold`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Quantities
// ---------------------------------------------------------------------------

/// Number of units requested.
///
/// Any `u32` is a valid quantity for the approval rule. Intake additionally
/// rejects zero before a quantity ever reaches the state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Quantity assumed when a request names no number (`"Buy a desk"`).
    pub const DEFAULT: Quantity = Quantity(1);

    /// Creates a [`Quantity`] from a raw integer.
    pub fn new(count: u32) -> Self {
        Self(count)
    }

    /// Returns the underlying integer value.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns `true` if this quantity is zero.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------

/// Largest quantity that is approved without manual review.
///
/// The rule is inclusive: a request is auto-approved when
/// `quantity <= threshold`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApprovalThreshold(u32);

impl ApprovalThreshold {
    /// Creates an [`ApprovalThreshold`] from a raw integer.
    pub fn new(limit: u32) -> Self {
        Self(limit)
    }

    /// Returns the threshold as an integer.
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Returns `true` if `quantity` may be approved automatically.
    pub fn permits(self, quantity: Quantity) -> bool {
        quantity.as_u32() <= self.0
    }
}

impl Default for ApprovalThreshold {
    fn default() -> Self {
        Self(5)
    }
}

impl std::fmt::Display for ApprovalThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Completion time stamped onto rendered run reports.
///
/// Kept out of [`crate::WorkflowState`]: two runs of the same request must
/// produce equal states. Serialises as an RFC 3339 string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Fixed time, for tests and replays.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
