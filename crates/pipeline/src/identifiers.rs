//! Newtype domain identifiers.
//!
//! Every named concept in a procurement run is a distinct newtype wrapping a
//! primitive. This prevents accidentally interchanging an [`ItemName`] with a
//! [`SupplierName`] even though both are strings under the hood.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Identifiers: UUID-backed (internally generated)
// ---------------------------------------------------------------------------

/// Identifies a single workflow run (one request processed end-to-end).
///
/// Generated fresh for every run and attached to the run's logging span so
/// all events from one request can be correlated. It is never stored in
/// [`crate::WorkflowState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Identifiers: String-backed
// ---------------------------------------------------------------------------

string_id! {
    /// The item requested, as extracted by the Intake stage.
    ///
    /// Intake stores it lower-cased with whitespace runs collapsed
    /// (e.g. `"standing desks"`).
    ItemName
}

string_id! {
    /// A supplier's display name (e.g. `"Acme Computers"`).
    SupplierName
}

string_id! {
    /// A lookup keyword in the supplier directory (e.g. `"laptop"`).
    ///
    /// The directory stores keywords trimmed and lower-cased.
    ItemKeyword
}

impl SupplierName {
    /// Sentinel used when no directory keyword matches the requested item.
    pub const UNKNOWN: &'static str = "Unknown Supplier";

    /// Returns the sentinel supplier for unmatched items.
    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Returns `true` if this is the unmatched-item sentinel.
    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_reject_empty_values() {
        assert!(ItemName::new("").is_none());
        assert!(SupplierName::new(String::new()).is_none());
        assert_eq!(ItemKeyword::new("laptop").unwrap().as_str(), "laptop");
    }

    #[test]
    fn unknown_supplier_is_recognised() {
        assert!(SupplierName::unknown().is_unknown());
        assert!(!SupplierName::new("KeyCo").unwrap().is_unknown());
        assert_eq!(SupplierName::unknown().to_string(), "Unknown Supplier");
    }

    #[test]
    fn string_ids_serialise_as_plain_strings() {
        let item = ItemName::new("laptops").unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"laptops\"");
    }
}
