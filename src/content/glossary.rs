//! Glossary of inline term definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FolioError, Result};

/// Term → definition map, kept in file order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary {
    terms: IndexMap<String, String>,
}

impl Glossary {
    /// Load a glossary from a YAML mapping. A missing file is an empty glossary.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No glossary at {:?}", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let glossary: Glossary =
            serde_yaml::from_str(&content).map_err(|source| FolioError::Glossary {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!("Loaded {} glossary terms from {:?}", glossary.len(), path);
        Ok(glossary)
    }

    /// Register a term, replacing any previous definition
    pub fn insert(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.terms.insert(term.into(), definition.into());
    }

    /// Definition of `term`.
    ///
    /// An exact match wins; otherwise the first registered term that is equal
    /// ignoring case.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        if let Some(definition) = self.terms.get(term) {
            return Some(definition);
        }
        let lower = term.to_lowercase();
        self.terms
            .iter()
            .find(|(k, _)| k.to_lowercase() == lower)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
