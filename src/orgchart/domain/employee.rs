use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// An employee as returned by the directory and search endpoints.
///
/// `job_level` stays a raw wire code on the record; interpret it through
/// [`JobLevel`] (or [`job_level_label`] for display) so unknown codes
/// degrade to the raw string instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub user_id: String,
    pub user_name: String,
    pub job_level: String,
    pub dept_code: String,
    #[serde(default)]
    pub phone: String,
}

/// Closed enumeration of the job-level codes `"0"`..`"6"`.
///
/// The backend transports job levels as string codes; this enum gives
/// them names and display labels with a defined fallback for codes
/// outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobLevel {
    Staff,
    SeniorStaff,
    AssistantManager,
    Manager,
    DeputyHead,
    DepartmentHead,
    Director,
}

impl JobLevel {
    /// All levels in ascending seniority order.
    pub const ALL: [JobLevel; 7] = [
        JobLevel::Staff,
        JobLevel::SeniorStaff,
        JobLevel::AssistantManager,
        JobLevel::Manager,
        JobLevel::DeputyHead,
        JobLevel::DepartmentHead,
        JobLevel::Director,
    ];

    /// The wire code for this level.
    pub fn code(&self) -> &'static str {
        match self {
            JobLevel::Staff => "0",
            JobLevel::SeniorStaff => "1",
            JobLevel::AssistantManager => "2",
            JobLevel::Manager => "3",
            JobLevel::DeputyHead => "4",
            JobLevel::DepartmentHead => "5",
            JobLevel::Director => "6",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            JobLevel::Staff => "Staff",
            JobLevel::SeniorStaff => "Senior Staff",
            JobLevel::AssistantManager => "Assistant Manager",
            JobLevel::Manager => "Manager",
            JobLevel::DeputyHead => "Deputy Head",
            JobLevel::DepartmentHead => "Department Head",
            JobLevel::Director => "Director",
        }
    }
}

impl FromStr for JobLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobLevel::ALL
            .into_iter()
            .find(|level| level.code() == s)
            .ok_or_else(|| format!("Unknown job level code: {}", s))
    }
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resolves a job-level code to its display label, falling back to the
/// raw code unchanged when the code is not one of `"0"`..`"6"`.
pub fn job_level_label(code: &str) -> Cow<'_, str> {
    match JobLevel::from_str(code) {
        Ok(level) => Cow::Borrowed(level.label()),
        Err(_) => Cow::Borrowed(code),
    }
}
