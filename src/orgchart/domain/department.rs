use serde::{Deserialize, Serialize};

/// A department as returned by the directory listing endpoint.
///
/// Department codes may carry a trailing numeric variant suffix
/// (e.g. a department split by shift or location); [`base_code`]
/// strips it to recover the logical department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRecord {
    pub dept_code: String,
    pub dept_name: String,
    #[serde(default)]
    pub parent_dept_code: Option<String>,
}

/// A node in the built department forest.
///
/// Invariant: every `dept_code` in a forest produced by the tree builder
/// is unique. Nodes sharing a base code are merged under one
/// representative node whose `children` holds the original variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentNode {
    pub dept_code: String,
    pub dept_name: String,
    pub parent_dept_code: Option<String>,
    pub children: Vec<DepartmentNode>,
}

impl DepartmentNode {
    /// Creates a leaf node carrying the record verbatim.
    pub fn from_record(record: DepartmentRecord) -> Self {
        Self {
            dept_code: record.dept_code,
            dept_name: record.dept_name,
            parent_dept_code: record.parent_dept_code,
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DepartmentNode::node_count)
            .sum::<usize>()
    }
}

/// Derives the base department code by stripping a trailing run of ASCII
/// digits and an optional separator (`-` or `_`) before it.
///
/// A code with no digit suffix is its own base, and so is an all-digit
/// code (stripping must never produce an empty base).
pub fn base_code(dept_code: &str) -> &str {
    let stem = dept_code.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == dept_code.len() {
        return dept_code;
    }
    let stem = stem.strip_suffix(['-', '_']).unwrap_or(stem);
    if stem.is_empty() {
        dept_code
    } else {
        stem
    }
}

/// Strips a trailing numeric variant suffix from a display name
/// ("Sales 2" becomes "Sales"). Falls back to the original name when
/// stripping would leave it empty.
pub fn strip_variant_suffix(dept_name: &str) -> &str {
    let stem = dept_name.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == dept_name.len() {
        return dept_name;
    }
    let stem = stem.trim_end_matches([' ', '-', '_']);
    if stem.is_empty() {
        dept_name
    } else {
        stem
    }
}
