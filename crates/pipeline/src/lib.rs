//! Core domain for the Procureflow procurement workflow.
//!
//! This crate contains every domain concept, newtype identifier, value type,
//! business rule, and error type used by the workflow. The [`nodes`] crate
//! wraps the rules in [`Stage`] implementations and sequences them; it never
//! adds domain rules of its own.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! Configuration is parsed from strings; reading files is the caller's job.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ItemName`, `SupplierName`, `RunId`, etc.) |
//! | [`types`] | Value types (`Quantity`, `ApprovalThreshold`, `Timestamp`) |
//! | [`state`] | `WorkflowState` and `StateField` |
//! | [`stage`] | The `Stage` port and `StageContract` checks |
//! | [`request`] | Request phrasing template (Intake rule) |
//! | [`directory`] | Supplier keyword directory (Supplier rule) |
//! | [`policy`] | Quantity threshold policy (Approval rule) |
//! | [`config`] | `WorkflowConfig` |
//! | [`errors`] | Stage, contract, workflow and configuration errors |
//!
//! [`nodes`]: ../nodes/index.html

pub mod config;
pub mod directory;
pub mod errors;
pub mod identifiers;
pub mod policy;
pub mod request;
pub mod stage;
pub mod state;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use config::WorkflowConfig;
pub use directory::{SupplierDirectory, SupplierEntry, SupplierEntryDocument, SupplierMatch};
pub use errors::{
    ConfigurationError, ContractViolation, StageError, WorkflowError, WorkflowFailure,
};
pub use identifiers::{ItemKeyword, ItemName, RunId, SupplierName};
pub use policy::{ApprovalPolicy, Decision};
pub use request::{parse_request, ParsedRequest, RequestParseError};
pub use stage::{Stage, StageContract};
pub use state::{StateField, WorkflowState};
pub use types::{ApprovalThreshold, Quantity, Timestamp};
