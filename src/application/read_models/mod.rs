//! Render-ready projections of browser state.
//!
//! These structs carry everything a renderer needs (resolved labels,
//! highlight flags) so rendering stays a pure string-building concern.

/// One employee line under an expanded tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub user_id: String,
    pub user_name: String,
    pub job_label: String,
    pub phone: String,
    pub selected: bool,
}

/// One visible node of the department tree, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub dept_code: String,
    pub dept_name: String,
    pub expanded: bool,
    pub has_children: bool,
    /// Employees of this node; populated only while expanded.
    pub employees: Vec<EmployeeRow>,
}

/// One flat search result, annotated with resolved display names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub user_id: String,
    pub user_name: String,
    pub dept_name: String,
    pub job_label: String,
    pub phone: String,
    pub selected: bool,
}
