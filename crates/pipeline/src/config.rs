//! Workflow configuration.
//!
//! A configuration document is JSON:
//!
//! ```json
//! {
//!   "approval_threshold": 5,
//!   "suppliers": [
//!     { "keyword": "laptop", "supplier": "Acme Computers" },
//!     { "keyword": "chair",  "supplier": "OfficeCo" }
//!   ]
//! }
//! ```
//!
//! Both keys are optional. A missing `approval_threshold` means 5; a missing
//! `suppliers` list means [`SupplierDirectory::default_catalog`]. Reading the
//! document from disk is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::{
    ApprovalPolicy, ApprovalThreshold, ConfigurationError, SupplierDirectory,
    SupplierEntryDocument,
};

/// Settings injected into the workflow stages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkflowConfigDocument")]
pub struct WorkflowConfig {
    /// Largest quantity approved without manual review.
    pub approval_threshold: ApprovalThreshold,
    /// Keyword directory used by the Supplier stage.
    pub suppliers: SupplierDirectory,
}

/// Configuration as written, before the supplier list is validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WorkflowConfigDocument {
    approval_threshold: ApprovalThreshold,
    suppliers: Option<Vec<SupplierEntryDocument>>,
}

impl TryFrom<WorkflowConfigDocument> for WorkflowConfig {
    type Error = ConfigurationError;

    fn try_from(document: WorkflowConfigDocument) -> Result<Self, Self::Error> {
        let suppliers = match document.suppliers {
            Some(entries) => SupplierDirectory::try_from(entries)?,
            None => SupplierDirectory::default_catalog(),
        };
        Ok(Self {
            approval_threshold: document.approval_threshold,
            suppliers,
        })
    }
}

impl WorkflowConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// Syntax and shape errors surface as [`ConfigurationError::Malformed`];
    /// supplier-list problems keep their own variant.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigurationError> {
        let document: WorkflowConfigDocument =
            serde_json::from_str(document).map_err(|e| ConfigurationError::Malformed {
                message: e.to_string(),
            })?;
        Self::try_from(document)
    }

    /// Returns the configuration with its threshold replaced.
    pub fn with_threshold(mut self, threshold: ApprovalThreshold) -> Self {
        self.approval_threshold = threshold;
        self
    }

    /// The approval policy described by this configuration.
    pub fn policy(&self) -> ApprovalPolicy {
        ApprovalPolicy::new(self.approval_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = WorkflowConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WorkflowConfig::default());
        assert_eq!(config.approval_threshold.as_u32(), 5);
        assert_eq!(config.suppliers.len(), 6);
    }

    #[test]
    fn parses_threshold_and_suppliers() {
        let config = WorkflowConfig::from_json_str(
            r#"{
                "approval_threshold": 10,
                "suppliers": [{ "keyword": "Projector", "supplier": "Bright Ideas" }]
            }"#,
        )
        .unwrap();

        assert_eq!(config.policy().threshold().as_u32(), 10);
        assert_eq!(config.suppliers.len(), 1);
        assert_eq!(
            config.suppliers.entries()[0].keyword().as_str(),
            "projector"
        );
    }

    #[test]
    fn invalid_catalog_keeps_its_error_variant() {
        assert_eq!(
            WorkflowConfig::from_json_str(
                r#"{ "suppliers": [{ "keyword": "", "supplier": "Nobody" }] }"#,
            ),
            Err(ConfigurationError::EmptyKeyword { index: 0 })
        );
        assert_eq!(
            WorkflowConfig::from_json_str(
                r#"{ "suppliers": [{ "keyword": "pen", "supplier": " " }] }"#,
            ),
            Err(ConfigurationError::EmptySupplier {
                keyword: "pen".to_string()
            })
        );
        assert_eq!(
            WorkflowConfig::from_json_str(
                r#"{ "suppliers": [
                    { "keyword": "Pen", "supplier": "Inkwell" },
                    { "keyword": "pen ", "supplier": "Quill" }
                ] }"#,
            ),
            Err(ConfigurationError::DuplicateKeyword {
                keyword: "pen".to_string()
            })
        );
    }

    #[test]
    fn empty_supplier_list_is_valid() {
        let config = WorkflowConfig::from_json_str(r#"{ "suppliers": [] }"#).unwrap();
        assert!(config.suppliers.is_empty());
    }

    #[test]
    fn serde_deserialize_validates_too() {
        let err = serde_json::from_str::<WorkflowConfig>(
            r#"{ "suppliers": [{ "keyword": "", "supplier": "Nobody" }] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty keyword"), "{err}");
    }

    #[test]
    fn unknown_keys_and_bad_json_are_rejected() {
        assert!(WorkflowConfig::from_json_str(r#"{ "threshold": 3 }"#).is_err());
        assert!(WorkflowConfig::from_json_str("{ not json").is_err());
        assert!(WorkflowConfig::from_json_str(r#"{ "approval_threshold": -1 }"#).is_err());
    }

    #[test]
    fn threshold_override_keeps_suppliers() {
        let config = WorkflowConfig::default().with_threshold(ApprovalThreshold::new(2));
        assert_eq!(config.approval_threshold.as_u32(), 2);
        assert_eq!(config.suppliers, SupplierDirectory::default_catalog());
    }
}
