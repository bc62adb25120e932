use crate::orgchart::domain::job_level_label;
use crate::ports::outbound::SelectionListener;

/// ConsoleSelectionListener adapter echoing selections to stderr.
///
/// The CLI has no surrounding page to hand selections to, so it fills
/// the required selection callback with this adapter.
pub struct ConsoleSelectionListener;

impl ConsoleSelectionListener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSelectionListener {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionListener for ConsoleSelectionListener {
    fn user_selected(&self, user_id: &str, user_name: &str, job_level: &str) {
        eprintln!(
            "👤 Selected: {} ({}) [{}]",
            user_name,
            job_level_label(job_level),
            user_id
        );
    }
}
