use crate::orgchart::domain::base_code;
use std::collections::{BTreeMap, HashMap};

/// Lookup table from base department code to display name.
///
/// Built from the department-name endpoint's mapping. Keys are normalized
/// to base codes; when two wire keys collapse onto one base code the
/// first one wins, with "first" defined by sorted wire-key order so the
/// outcome never depends on map iteration order.
#[derive(Debug, Default, Clone)]
pub struct NameCatalog {
    names: HashMap<String, String>,
}

impl NameCatalog {
    /// Builds the catalog from the wire mapping of dept code to name.
    pub fn from_wire(mapping: BTreeMap<String, String>) -> Self {
        let mut names = HashMap::with_capacity(mapping.len());
        for (code, name) in mapping {
            let base = base_code(&code).to_string();
            names.entry(base).or_insert(name);
        }
        Self { names }
    }

    /// Resolves a department code (base or variant) to its display name,
    /// falling back to the raw code when unresolved.
    pub fn resolve(&self, dept_code: &str) -> String {
        self.names
            .get(base_code(dept_code))
            .cloned()
            .unwrap_or_else(|| dept_code.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}
