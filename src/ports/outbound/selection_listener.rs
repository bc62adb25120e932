/// SelectionListener port for reporting employee selection upward.
///
/// The browser never owns selection state; when the user picks an
/// employee it reports the pick through this port and leaves any
/// state change to the hosting caller.
pub trait SelectionListener: Send + Sync {
    /// Called when an employee is selected.
    ///
    /// # Arguments
    /// * `user_id` - unique employee id
    /// * `user_name` - display name
    /// * `job_level` - raw job-level code (`"0"`..`"6"`)
    fn user_selected(&self, user_id: &str, user_name: &str, job_level: &str);
}
