use async_trait::async_trait;
use hr_orgchart::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock DirectoryRepository for testing
///
/// Serves canned departments, names, employees and search results, and
/// tracks call counts so tests can assert fetch-once guarantees.
pub struct MockDirectoryRepository {
    departments: Vec<DepartmentRecord>,
    names: BTreeMap<String, String>,
    employees: HashMap<String, Vec<EmployeeRecord>>,
    search_results: Vec<EmployeeRecord>,
    fail_departments: bool,
    fail_employees: bool,
    fail_search: bool,
    employee_calls: Mutex<HashMap<String, usize>>,
    search_calls: AtomicUsize,
}

impl MockDirectoryRepository {
    pub fn new() -> Self {
        Self {
            departments: Vec::new(),
            names: BTreeMap::new(),
            employees: HashMap::new(),
            search_results: Vec::new(),
            fail_departments: false,
            fail_employees: false,
            fail_search: false,
            employee_calls: Mutex::new(HashMap::new()),
            search_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_department(mut self, code: &str, name: &str, parent: Option<&str>) -> Self {
        self.departments.push(DepartmentRecord {
            dept_code: code.to_string(),
            dept_name: name.to_string(),
            parent_dept_code: parent.map(String::from),
        });
        self
    }

    pub fn with_name(mut self, code: &str, name: &str) -> Self {
        self.names.insert(code.to_string(), name.to_string());
        self
    }

    pub fn with_employees(mut self, base_code: &str, employees: Vec<EmployeeRecord>) -> Self {
        self.employees.insert(base_code.to_string(), employees);
        self
    }

    pub fn with_search_results(mut self, results: Vec<EmployeeRecord>) -> Self {
        self.search_results = results;
        self
    }

    pub fn failing_departments(mut self) -> Self {
        self.fail_departments = true;
        self
    }

    pub fn failing_employees(mut self) -> Self {
        self.fail_employees = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Number of employee-listing calls made for the given base code.
    pub fn employee_call_count(&self, base_code: &str) -> usize {
        self.employee_calls
            .lock()
            .unwrap()
            .get(base_code)
            .copied()
            .unwrap_or(0)
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Convenience constructor for an employee record.
    pub fn employee(user_id: &str, user_name: &str, job_level: &str, dept_code: &str) -> EmployeeRecord {
        EmployeeRecord {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            job_level: job_level.to_string(),
            dept_code: dept_code.to_string(),
            phone: "010-0000".to_string(),
        }
    }
}

impl Default for MockDirectoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn fetch_departments(&self) -> Result<Vec<DepartmentRecord>> {
        if self.fail_departments {
            anyhow::bail!("Mock department listing failure");
        }
        Ok(self.departments.clone())
    }

    async fn fetch_department_names(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.names.clone())
    }

    async fn fetch_employees(
        &self,
        base_code: &str,
        _scope: EmployeeScope,
    ) -> Result<Vec<EmployeeRecord>> {
        *self
            .employee_calls
            .lock()
            .unwrap()
            .entry(base_code.to_string())
            .or_insert(0) += 1;
        if self.fail_employees {
            anyhow::bail!("Mock employee listing failure");
        }
        Ok(self.employees.get(base_code).cloned().unwrap_or_default())
    }

    async fn search_employees(&self, _term: &str) -> Result<Vec<EmployeeRecord>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            anyhow::bail!("Mock search failure");
        }
        Ok(self.search_results.clone())
    }
}
