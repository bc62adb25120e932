use crate::application::read_models::{EmployeeRow, SearchRow, TreeRow};
use crate::orgchart::domain::{
    base_code, job_level_label, DepartmentNode, EmployeeRecord, Selection,
};
use crate::orgchart::services::{NameCatalog, TreeBuilder};
use crate::ports::outbound::{
    DirectoryRepository, EmployeeScope, ProgressReporter, SelectionListener,
};
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Outcome of an employee fetch, cached per base department code.
///
/// The absent-key state means "not loaded yet". A failed fetch is cached
/// as `Failed` so it renders as an empty list and is never retried within
/// one mount, while staying distinguishable from a genuinely empty
/// department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeLoad {
    Loaded(Vec<EmployeeRecord>),
    Failed,
}

impl EmployeeLoad {
    pub fn employees(&self) -> &[EmployeeRecord] {
        match self {
            EmployeeLoad::Loaded(list) => list,
            EmployeeLoad::Failed => &[],
        }
    }
}

/// Mode flags supplied by the hosting caller.
#[derive(Debug, Clone, Copy)]
pub struct BrowserOptions {
    /// Use the all-departments employee listing endpoint variant.
    pub all_departments: bool,
    /// Ask the backend to include sub-department members per node.
    pub include_sub_depts: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            all_departments: false,
            include_sub_depts: true,
        }
    }
}

/// OrgChartBrowser - the stateful org-chart component.
///
/// Owns the built department forest, per-node expansion flags and the
/// lazily-populated employee cache. All state is instance-local and is
/// rebuilt by [`OrgChartBrowser::mount`]; dropping the browser drops the
/// cache (the remount contract).
///
/// # Type Parameters
/// * `R` - DirectoryRepository implementation
/// * `P` - ProgressReporter implementation
pub struct OrgChartBrowser<R, P> {
    repository: Arc<R>,
    reporter: P,
    listener: Box<dyn SelectionListener>,
    options: BrowserOptions,
    forest: Vec<DepartmentNode>,
    names: NameCatalog,
    expanded: HashSet<String>,
    employees: DashMap<String, EmployeeLoad>,
    selection: Selection,
}

impl<R, P> OrgChartBrowser<R, P>
where
    R: DirectoryRepository,
    P: ProgressReporter,
{
    /// Creates a browser with injected dependencies. The selection
    /// listener is the required upward callback; selection highlight
    /// state is fed separately through [`OrgChartBrowser::set_selection`].
    pub fn new(
        repository: Arc<R>,
        reporter: P,
        listener: Box<dyn SelectionListener>,
        options: BrowserOptions,
    ) -> Self {
        Self {
            repository,
            reporter,
            listener,
            options,
            forest: Vec::new(),
            names: NameCatalog::default(),
            expanded: HashSet::new(),
            employees: DashMap::new(),
            selection: Selection::default(),
        }
    }

    /// (Re)loads the department directory and rebuilds the forest.
    ///
    /// The department listing and the name table are fetched
    /// concurrently. Either call failing degrades to an empty forest or
    /// an empty name table with a reported warning; no error surfaces to
    /// the caller. Expansion flags and the employee cache are reset.
    pub async fn mount(&mut self) {
        self.expanded.clear();
        self.employees.clear();
        self.reporter.report("📖 Loading department directory...");

        let (departments, names) = futures::join!(
            self.repository.fetch_departments(),
            self.repository.fetch_department_names()
        );

        let records = match departments {
            Ok(records) => records,
            Err(e) => {
                self.reporter
                    .report_error(&format!("⚠️  Warning: failed to load departments: {}", e));
                Vec::new()
            }
        };
        self.names = match names {
            Ok(mapping) => NameCatalog::from_wire(mapping),
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: failed to load department names: {}",
                    e
                ));
                NameCatalog::default()
            }
        };

        self.forest = TreeBuilder::build(records);
        self.reporter.report(&format!(
            "✅ Loaded {} root department(s)",
            self.forest.len()
        ));
    }

    /// Flips the expansion flag for the node's base code.
    ///
    /// On the collapsed-to-expanded transition with no cache entry for
    /// that base code, fetches the employee list - at most one fetch per
    /// base code for the browser's lifetime. A cache hit (including a
    /// cached failure) never refetches. Fetch failures are reported and
    /// cached as [`EmployeeLoad::Failed`].
    pub async fn toggle(&mut self, dept_code: &str) {
        let base = base_code(dept_code).to_string();
        if self.expanded.remove(&base) {
            return;
        }
        self.expanded.insert(base.clone());
        if self.employees.contains_key(&base) {
            return;
        }

        let scope = EmployeeScope {
            include_sub_depts: self.options.include_sub_depts,
            all_departments: self.options.all_departments,
        };
        let load = match self.repository.fetch_employees(&base, scope).await {
            Ok(list) => EmployeeLoad::Loaded(list),
            Err(e) => {
                self.reporter.report_error(&format!(
                    "⚠️  Warning: failed to load employees for {}: {}",
                    base, e
                ));
                EmployeeLoad::Failed
            }
        };
        self.employees.insert(base, load);
    }

    pub fn is_expanded(&self, dept_code: &str) -> bool {
        self.expanded.contains(base_code(dept_code))
    }

    /// Cached employees for a node (empty while unloaded or failed).
    pub fn employees_of(&self, dept_code: &str) -> Vec<EmployeeRecord> {
        self.employees
            .get(base_code(dept_code))
            .map(|entry| entry.employees().to_vec())
            .unwrap_or_default()
    }

    /// Cache state for a node's base code; `None` means never fetched.
    pub fn load_state(&self, dept_code: &str) -> Option<EmployeeLoad> {
        self.employees
            .get(base_code(dept_code))
            .map(|entry| entry.value().clone())
    }

    pub fn forest(&self) -> &[DepartmentNode] {
        &self.forest
    }

    /// Replaces the externally-owned selection highlight state.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn is_selected(&self, user_id: &str) -> bool {
        self.selection.contains(user_id)
    }

    /// Reports a selection by user id, looked up in the employee cache.
    /// Returns false when the id is not in any loaded department.
    pub fn select(&self, user_id: &str) -> bool {
        match self.find_cached(user_id) {
            Some(record) => {
                self.select_record(&record);
                true
            }
            None => false,
        }
    }

    /// Reports a selection for a record the caller already holds
    /// (e.g. a search result row).
    pub fn select_record(&self, record: &EmployeeRecord) {
        self.listener
            .user_selected(&record.user_id, &record.user_name, &record.job_level);
    }

    fn find_cached(&self, user_id: &str) -> Option<EmployeeRecord> {
        self.employees.iter().find_map(|entry| {
            entry
                .value()
                .employees()
                .iter()
                .find(|record| record.user_id == user_id)
                .cloned()
        })
    }

    /// Flattens the visible part of the forest into render order.
    /// Collapsed nodes hide their descendants; expanded nodes carry
    /// their employee rows.
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        for node in &self.forest {
            self.push_rows(node, 0, &mut rows);
        }
        rows
    }

    fn push_rows(&self, node: &DepartmentNode, depth: usize, rows: &mut Vec<TreeRow>) {
        let expanded = self.is_expanded(&node.dept_code);
        let employees = if expanded {
            self.employee_rows(&node.dept_code)
        } else {
            Vec::new()
        };
        rows.push(TreeRow {
            depth,
            dept_code: node.dept_code.clone(),
            dept_name: node.dept_name.clone(),
            expanded,
            has_children: !node.children.is_empty(),
            employees,
        });
        if expanded {
            for child in &node.children {
                self.push_rows(child, depth + 1, rows);
            }
        }
    }

    fn employee_rows(&self, dept_code: &str) -> Vec<EmployeeRow> {
        self.employees_of(dept_code)
            .iter()
            .map(|record| EmployeeRow {
                user_id: record.user_id.clone(),
                user_name: record.user_name.clone(),
                job_label: job_level_label(&record.job_level).into_owned(),
                phone: record.phone.clone(),
                selected: self.is_selected(&record.user_id),
            })
            .collect()
    }

    /// Annotates flat search results with resolved department names and
    /// job-level labels; unresolved codes fall back to the raw code.
    pub fn search_rows(&self, results: &[EmployeeRecord]) -> Vec<SearchRow> {
        results
            .iter()
            .map(|record| SearchRow {
                user_id: record.user_id.clone(),
                user_name: record.user_name.clone(),
                dept_name: self.names.resolve(&record.dept_code),
                job_label: job_level_label(&record.job_level).into_owned(),
                phone: record.phone.clone(),
                selected: self.is_selected(&record.user_id),
            })
            .collect()
    }
}
