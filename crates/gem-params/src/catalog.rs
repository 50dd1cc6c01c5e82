//! Source catalogs: external documents that name source categories by label.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use gem_core::errors::{ErrorInfo, GemError};
use serde::{Deserialize, Serialize};

use crate::source_type::SourceType;

fn parse_error(code: &str, err: impl ToString) -> GemError {
    GemError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// A named collection of source entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCatalog {
    /// Catalog name.
    pub name: String,
    /// Free form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Entries in document order.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

/// One source as written in a catalog document.
///
/// `source_type` is kept as raw text so that a catalog with unknown labels can
/// still be loaded and reported on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Identifier, unique within the catalog.
    pub id: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source type label, e.g. `"Fault Source"`.
    pub source_type: String,
    /// Optional tectonic region tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tectonic_region: Option<String>,
}

/// An entry whose label resolved to a [`SourceType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSource {
    /// Identifier copied from the entry.
    pub id: String,
    /// Optional display name copied from the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved category.
    pub source_type: SourceType,
    /// Optional tectonic region copied from the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tectonic_region: Option<String>,
}

/// Kind of problem found while validating a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogIssueKind {
    /// The entry id is empty or whitespace.
    EmptyId,
    /// The entry id was already used by an earlier entry.
    DuplicateId,
    /// The source type label names no known category.
    UnknownSourceType,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    /// Zero based position of the entry in the catalog.
    pub entry: usize,
    /// Entry id as written.
    pub id: String,
    /// Problem classification.
    pub kind: CatalogIssueKind,
    /// Human readable detail.
    pub detail: String,
}

/// Outcome of [`SourceCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogReport {
    /// Catalog name.
    pub catalog: String,
    /// Total number of entries.
    pub entries: usize,
    /// Entries per resolved category; every category is present.
    pub counts: BTreeMap<SourceType, usize>,
    /// Findings in entry order.
    pub issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    /// Number of resolved entries per category.
    pub fn counts(&self) -> &BTreeMap<SourceType, usize> {
        &self.counts
    }

    /// True when no issue was found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl SourceCatalog {
    /// Parses a catalog from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self, GemError> {
        toml::from_str(data).map_err(|err| parse_error("gem_params.catalog_toml", err))
    }

    /// Parses a catalog from YAML text.
    pub fn from_yaml_str(data: &str) -> Result<Self, GemError> {
        serde_yaml::from_str(data).map_err(|err| parse_error("gem_params.catalog_yaml", err))
    }

    /// Parses a catalog from JSON text.
    pub fn from_json_str(data: &str) -> Result<Self, GemError> {
        serde_json::from_str(data).map_err(|err| parse_error("gem_params.catalog_json", err))
    }

    /// Collects every problem in the catalog without failing.
    pub fn validate(&self) -> CatalogReport {
        let mut counts: BTreeMap<SourceType, usize> =
            SourceType::iter().map(|member| (member, 0)).collect();
        let mut issues = Vec::new();
        let mut seen = BTreeSet::new();
        for (idx, entry) in self.sources.iter().enumerate() {
            if entry.id.trim().is_empty() {
                issues.push(CatalogIssue {
                    entry: idx,
                    id: entry.id.clone(),
                    kind: CatalogIssueKind::EmptyId,
                    detail: "source id is empty".into(),
                });
            } else if !seen.insert(entry.id.as_str()) {
                issues.push(CatalogIssue {
                    entry: idx,
                    id: entry.id.clone(),
                    kind: CatalogIssueKind::DuplicateId,
                    detail: format!("source id '{}' is used more than once", entry.id),
                });
            }
            match SourceType::from_label(&entry.source_type) {
                Ok(member) => *counts.entry(member).or_insert(0) += 1,
                Err(_) => issues.push(CatalogIssue {
                    entry: idx,
                    id: entry.id.clone(),
                    kind: CatalogIssueKind::UnknownSourceType,
                    detail: format!("'{}' is not a GEM source type", entry.source_type),
                }),
            }
        }
        CatalogReport {
            catalog: self.name.clone(),
            entries: self.sources.len(),
            counts,
            issues,
        }
    }

    /// Resolves every entry, failing on the first problem in document order.
    pub fn resolve(&self) -> Result<Vec<ResolvedSource>, GemError> {
        let mut seen = BTreeSet::new();
        let mut resolved = Vec::with_capacity(self.sources.len());
        for (idx, entry) in self.sources.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(GemError::Catalog(
                    ErrorInfo::new("gem_params.catalog_empty_id", "source id is empty")
                        .with_context("entry", idx.to_string()),
                ));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(GemError::Catalog(
                    ErrorInfo::new("gem_params.catalog_duplicate_id", "duplicate source id")
                        .with_context("entry", idx.to_string())
                        .with_context("id", entry.id.clone()),
                ));
            }
            let source_type =
                SourceType::from_label(&entry.source_type).map_err(|err| match err {
                    GemError::InvalidArgument(info) => {
                        GemError::InvalidArgument(info.with_context("id", entry.id.clone()))
                    }
                    other => other,
                })?;
            resolved.push(ResolvedSource {
                id: entry.id.clone(),
                name: entry.name.clone(),
                source_type,
                tectonic_region: entry.tectonic_region.clone(),
            });
        }
        Ok(resolved)
    }
}

/// Loads a catalog from disk, picking the format from the file extension.
pub fn load_catalog(path: &Path) -> Result<SourceCatalog, GemError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        GemError::Serde(
            ErrorInfo::new(
                "gem_params.read_catalog",
                format!("failed to read catalog: {err}"),
            )
            .with_context("path", path.display().to_string()),
        )
    })?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let parsed = match extension {
        "toml" => SourceCatalog::from_toml_str(&contents),
        "yaml" | "yml" => SourceCatalog::from_yaml_str(&contents),
        "json" => SourceCatalog::from_json_str(&contents),
        other => {
            return Err(GemError::Serde(
                ErrorInfo::new(
                    "gem_params.catalog_format",
                    format!("unsupported catalog extension '{other}'"),
                )
                .with_context("path", path.display().to_string())
                .with_hint("use .toml, .yaml, .yml or .json"),
            ))
        }
    };
    parsed.map_err(|err| match err {
        GemError::Serde(info) => {
            GemError::Serde(info.with_context("path", path.display().to_string()))
        }
        other => other,
    })
}
