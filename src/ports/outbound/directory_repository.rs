use crate::orgchart::domain::{DepartmentRecord, EmployeeRecord};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Scope parameters for a department-scoped employee listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeScope {
    /// Include employees of sub-departments of the requested code.
    pub include_sub_depts: bool,
    /// Use the all-departments endpoint variant.
    pub all_departments: bool,
}

impl Default for EmployeeScope {
    fn default() -> Self {
        Self {
            include_sub_depts: true,
            all_departments: false,
        }
    }
}

/// DirectoryRepository port for the HR directory backend.
///
/// This port abstracts the REST endpoints the org-chart browser consumes:
/// the department listing, the department-name table, department-scoped
/// employee listings and free-text employee search.
///
/// # Async Support
/// All methods are async; implementations must be `Send + Sync` so the
/// debounced search task can share them across the spawn boundary.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Fetches the flat department listing.
    ///
    /// # Errors
    /// Returns an error if the network request fails, the API returns a
    /// non-success status code, or the response cannot be parsed.
    async fn fetch_departments(&self) -> Result<Vec<DepartmentRecord>>;

    /// Fetches the department code to display name mapping.
    ///
    /// The wire mapping is returned in sorted key order so collision
    /// handling downstream is deterministic.
    async fn fetch_department_names(&self) -> Result<BTreeMap<String, String>>;

    /// Fetches the employees of one department, identified by base code.
    ///
    /// # Arguments
    /// * `base_code` - base department code of the node being expanded
    /// * `scope` - sub-department inclusion and endpoint variant flags
    async fn fetch_employees(
        &self,
        base_code: &str,
        scope: EmployeeScope,
    ) -> Result<Vec<EmployeeRecord>>;

    /// Runs a free-text employee search.
    async fn search_employees(&self, term: &str) -> Result<Vec<EmployeeRecord>>;
}
