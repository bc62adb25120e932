use hr_orgchart::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SelectionListener that records every reported selection.
#[derive(Clone, Default)]
pub struct MockSelectionListener {
    selections: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockSelectionListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selections(&self) -> Vec<(String, String, String)> {
        self.selections.lock().unwrap().clone()
    }
}

impl SelectionListener for MockSelectionListener {
    fn user_selected(&self, user_id: &str, user_name: &str, job_level: &str) {
        self.selections.lock().unwrap().push((
            user_id.to_string(),
            user_name.to_string(),
            job_level.to_string(),
        ));
    }
}
