use crate::application::read_models::{SearchRow, TreeRow};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TreeRenderer adapter turning browser read models into console text.
///
/// Rendering is pure string building; the browser decides what is
/// visible and the presenter decides where the text goes.
pub struct TreeRenderer {
    color: bool,
}

impl TreeRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn highlight(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.yellow().bold())
        } else {
            text.to_string()
        }
    }

    /// Renders the flattened tree rows.
    pub fn render_tree(&self, rows: &[TreeRow]) -> String {
        if rows.is_empty() {
            return "(no departments)\n".to_string();
        }

        let mut out = String::new();
        for row in rows {
            let indent = "  ".repeat(row.depth);
            let marker = if !row.has_children && row.employees.is_empty() && !row.expanded {
                "·"
            } else if row.expanded {
                "▾"
            } else {
                "▸"
            };
            let _ = writeln!(
                out,
                "{}{} {} [{}]",
                indent, marker, row.dept_name, row.dept_code
            );
            for employee in &row.employees {
                let bullet = if employee.selected { "»" } else { "-" };
                let name = if employee.selected {
                    self.highlight(&employee.user_name)
                } else {
                    employee.user_name.clone()
                };
                let mut line = format!("{}  {} {} ({})", indent, bullet, name, employee.job_label);
                if !employee.phone.is_empty() {
                    let _ = write!(line, " {}", employee.phone);
                }
                let _ = writeln!(out, "{}", line);
            }
        }
        out
    }

    /// Renders the flat search result list.
    pub fn render_search(&self, rows: &[SearchRow]) -> String {
        if rows.is_empty() {
            return "No employees matched.\n".to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "🔎 {} result(s)", rows.len());
        for row in rows {
            let bullet = if row.selected { "»" } else { "-" };
            let name = if row.selected {
                self.highlight(&row.user_name)
            } else {
                row.user_name.clone()
            };
            let mut line = format!("{} {} ({}) {}", bullet, name, row.job_label, row.dept_name);
            if !row.phone.is_empty() {
                let _ = write!(line, " {}", row.phone);
            }
            let _ = writeln!(out, "{}", line);
        }
        out
    }
}
