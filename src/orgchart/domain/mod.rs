pub mod department;
pub mod employee;
pub mod selection;

pub use department::{base_code, strip_variant_suffix, DepartmentNode, DepartmentRecord};
pub use employee::{job_level_label, EmployeeRecord, JobLevel};
pub use selection::Selection;
