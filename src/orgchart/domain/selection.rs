use std::collections::HashSet;

/// Externally-owned selection state.
///
/// The browser never mutates this; the hosting caller feeds it in and the
/// browser only renders highlight from it. Single vs. multi mirrors the
/// caller's select mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<String>),
    Multi(HashSet<String>),
}

impl Selection {
    /// Empty single-select state (the default mode).
    pub fn none() -> Self {
        Selection::Single(None)
    }

    pub fn single(user_id: impl Into<String>) -> Self {
        Selection::Single(Some(user_id.into()))
    }

    pub fn multi<I, S>(user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Multi(user_ids.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, user_id: &str) -> bool {
        match self {
            Selection::Single(selected) => selected.as_deref() == Some(user_id),
            Selection::Multi(selected) => selected.contains(user_id),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::none()
    }
}
