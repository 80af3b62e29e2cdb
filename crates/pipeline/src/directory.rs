//! Keyword directory mapping requested items to preferred suppliers.
//!
//! The directory is an insertion-ordered list of `keyword -> supplier`
//! entries, validated once at construction and read-only afterwards. Lookup
//! tries, in order:
//!
//! 1. an exact (case-insensitive) keyword match;
//! 2. the longest keyword that is a substring of the item, or of which the
//!    item is a substring. Ties go to the keyword registered first;
//! 3. no match, reported as [`SupplierMatch::Unmatched`] and resolved to the
//!    `"Unknown Supplier"` sentinel.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigurationError, ItemKeyword, ItemName, SupplierName};

/// One `keyword -> supplier` entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupplierEntryDocument {
    pub keyword: String,
    pub supplier: String,
}

/// A validated directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierEntry {
    keyword: ItemKeyword,
    supplier: SupplierName,
}

impl SupplierEntry {
    pub fn keyword(&self) -> &ItemKeyword {
        &self.keyword
    }

    pub fn supplier(&self) -> &SupplierName {
        &self.supplier
    }
}

/// How a supplier was found for an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplierMatch<'a> {
    /// The item equals a keyword.
    Exact(&'a SupplierEntry),
    /// The item and a keyword contain one another.
    Keyword(&'a SupplierEntry),
    /// No keyword relates to the item.
    Unmatched,
}

impl SupplierMatch<'_> {
    /// The selected supplier, or the unknown-supplier sentinel.
    pub fn supplier(&self) -> SupplierName {
        match self {
            SupplierMatch::Exact(entry) | SupplierMatch::Keyword(entry) => entry.supplier.clone(),
            SupplierMatch::Unmatched => SupplierName::unknown(),
        }
    }

    /// Short label for logging (`"exact"`, `"keyword"`, `"unmatched"`).
    pub fn kind(&self) -> &'static str {
        match self {
            SupplierMatch::Exact(_) => "exact",
            SupplierMatch::Keyword(_) => "keyword",
            SupplierMatch::Unmatched => "unmatched",
        }
    }
}

/// Validated, insertion-ordered supplier directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SupplierEntryDocument>", into = "Vec<SupplierEntryDocument>")]
pub struct SupplierDirectory {
    entries: Vec<SupplierEntry>,
}

impl SupplierDirectory {
    /// Builds a directory from `(keyword, supplier)` pairs, keeping their order.
    ///
    /// Keywords are trimmed and lower-cased. Fails on empty keywords, empty
    /// supplier names, or keywords that repeat after normalisation. An empty
    /// directory is valid; every lookup then resolves to the sentinel.
    pub fn new<I, K, S>(pairs: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (index, (keyword, supplier)) in pairs.into_iter().enumerate() {
            let normalised = keyword.as_ref().trim().to_lowercase();
            let keyword = ItemKeyword::new(normalised.clone())
                .ok_or(ConfigurationError::EmptyKeyword { index })?;
            let supplier = SupplierName::new(supplier.as_ref().trim()).ok_or_else(|| {
                ConfigurationError::EmptySupplier {
                    keyword: normalised.clone(),
                }
            })?;
            if !seen.insert(normalised.clone()) {
                return Err(ConfigurationError::DuplicateKeyword {
                    keyword: normalised,
                });
            }
            entries.push(SupplierEntry { keyword, supplier });
        }

        Ok(Self { entries })
    }

    /// The catalog used when no configuration is supplied.
    pub fn default_catalog() -> Self {
        const CATALOG: [(&str, &str); 6] = [
            ("laptop", "Acme Computers"),
            ("monitor", "Display World"),
            ("mouse", "Pointer Pros"),
            ("keyboard", "KeyCo"),
            ("chair", "OfficeCo"),
            ("desk", "FurnishIt"),
        ];
        let entries = CATALOG
            .iter()
            .filter_map(|(keyword, supplier)| {
                Some(SupplierEntry {
                    keyword: ItemKeyword::new(*keyword)?,
                    supplier: SupplierName::new(*supplier)?,
                })
            })
            .collect();
        Self { entries }
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[SupplierEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the supplier for `item`.
    pub fn lookup(&self, item: &ItemName) -> SupplierMatch<'_> {
        let item = item.as_str().to_lowercase();

        if let Some(entry) = self.entries.iter().find(|e| e.keyword.as_str() == item) {
            return SupplierMatch::Exact(entry);
        }

        let mut best: Option<&SupplierEntry> = None;
        for entry in &self.entries {
            let keyword = entry.keyword.as_str();
            if !item.contains(keyword) && !keyword.contains(item.as_str()) {
                continue;
            }
            // Strictly longer only, so the first-registered keyword wins ties.
            let longer = match best {
                Some(current) => {
                    keyword.chars().count() > current.keyword.as_str().chars().count()
                }
                None => true,
            };
            if longer {
                best = Some(entry);
            }
        }

        best.map_or(SupplierMatch::Unmatched, SupplierMatch::Keyword)
    }
}

impl Default for SupplierDirectory {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl TryFrom<Vec<SupplierEntryDocument>> for SupplierDirectory {
    type Error = ConfigurationError;

    fn try_from(documents: Vec<SupplierEntryDocument>) -> Result<Self, Self::Error> {
        Self::new(documents.into_iter().map(|d| (d.keyword, d.supplier)))
    }
}

impl From<SupplierDirectory> for Vec<SupplierEntryDocument> {
    fn from(directory: SupplierDirectory) -> Self {
        directory
            .entries
            .into_iter()
            .map(|e| SupplierEntryDocument {
                keyword: e.keyword.as_str().to_string(),
                supplier: e.supplier.as_str().to_string(),
            })
            .collect()
    }
}
