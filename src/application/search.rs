use crate::orgchart::domain::EmployeeRecord;
use crate::ports::outbound::DirectoryRepository;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Inactivity window before a typed query is sent.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Queries shorter than this (after trimming) never fire.
pub const MIN_QUERY_CHARS: usize = 2;

/// SearchController - debounced free-text employee search.
///
/// Every input cancels the pending debounce timer and bumps a
/// monotonically increasing generation counter. A fired task re-checks
/// the generation before sending the request and again before committing
/// the response, so the visible result set always reflects the newest
/// query (last-write-wins by request order, not response order).
///
/// Search failures are reported and commit an empty result list; there
/// are no retries. While no query is active (trimmed input under the
/// minimum length) `results()` is `None` and callers fall back to the
/// tree view.
pub struct SearchController<R> {
    repository: Arc<R>,
    generation: Arc<AtomicU64>,
    results: Arc<Mutex<Option<Vec<EmployeeRecord>>>>,
    pending: Option<JoinHandle<()>>,
    debounce: Duration,
}

impl<R> SearchController<R>
where
    R: DirectoryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_debounce(repository, SEARCH_DEBOUNCE)
    }

    /// Creates a controller with a custom debounce window.
    pub fn with_debounce(repository: Arc<R>, debounce: Duration) -> Self {
        Self {
            repository,
            generation: Arc::new(AtomicU64::new(0)),
            results: Arc::new(Mutex::new(None)),
            pending: None,
            debounce,
        }
    }

    /// Feeds the current search box content into the controller.
    ///
    /// Cancels any pending timer. A trimmed query under
    /// [`MIN_QUERY_CHARS`] clears the results immediately without issuing
    /// a request; anything longer is scheduled to fire after the debounce
    /// window.
    pub fn on_input(&mut self, text: &str) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let term = text.trim().to_string();
        if term.chars().count() < MIN_QUERY_CHARS {
            *self.results.lock().unwrap() = None;
            return;
        }

        let repository = Arc::clone(&self.repository);
        let generation_counter = Arc::clone(&self.generation);
        let results = Arc::clone(&self.results);
        let debounce = self.debounce;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if generation_counter.load(Ordering::SeqCst) != generation {
                return;
            }

            let outcome = repository.search_employees(&term).await;

            // A newer query may have been issued while this one was in
            // flight; its result owns the screen, not ours.
            if generation_counter.load(Ordering::SeqCst) != generation {
                return;
            }
            let list = match outcome {
                Ok(list) => list,
                Err(e) => {
                    eprintln!("⚠️  Warning: employee search failed: {}", e);
                    Vec::new()
                }
            };
            *results.lock().unwrap() = Some(list);
        }));
    }

    /// The current result set: `None` while search is inactive (render
    /// the tree), `Some` once a query has committed.
    pub fn results(&self) -> Option<Vec<EmployeeRecord>> {
        self.results.lock().unwrap().clone()
    }

    /// Awaits the pending debounce task, if any. The CLI and tests use
    /// this to observe the post-debounce state deterministically.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl<R> Drop for SearchController<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orgchart::domain::DepartmentRecord;
    use crate::ports::outbound::EmployeeScope;
    use crate::shared::Result;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::atomic::AtomicUsize;

    struct StubSearchRepository {
        search_calls: AtomicUsize,
        fail: bool,
        /// Extra latency simulated inside the search call, per request.
        latency: Duration,
    }

    impl StubSearchRepository {
        fn new() -> Self {
            Self {
                search_calls: AtomicUsize::new(0),
                fail: false,
                latency: Duration::ZERO,
            }
        }

        fn call_count(&self) -> usize {
            self.search_calls.load(Ordering::SeqCst)
        }

        fn employee(term: &str) -> EmployeeRecord {
            EmployeeRecord {
                user_id: format!("match-{}", term),
                user_name: term.to_string(),
                job_level: "0".to_string(),
                dept_code: "HR".to_string(),
                phone: String::new(),
            }
        }
    }

    #[async_trait]
    impl DirectoryRepository for StubSearchRepository {
        async fn fetch_departments(&self) -> Result<Vec<DepartmentRecord>> {
            Ok(Vec::new())
        }

        async fn fetch_department_names(&self) -> Result<BTreeMap<String, String>> {
            Ok(BTreeMap::new())
        }

        async fn fetch_employees(
            &self,
            _base_code: &str,
            _scope: EmployeeScope,
        ) -> Result<Vec<EmployeeRecord>> {
            Ok(Vec::new())
        }

        async fn search_employees(&self, term: &str) -> Result<Vec<EmployeeRecord>> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            if !self.latency.is_zero() {
                tokio::time::sleep(self.latency).await;
            }
            if self.fail {
                anyhow::bail!("search backend unavailable");
            }
            Ok(vec![Self::employee(term)])
        }
    }

    async fn let_timers_fire(window: Duration) {
        tokio::time::advance(window).await;
        // Give the woken task a scheduling slot to run to completion
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_query_clears_without_request() {
        let repository = Arc::new(StubSearchRepository::new());
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("ada");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;
        assert!(search.results().is_some());
        assert_eq!(repository.call_count(), 1);

        search.on_input("a");
        assert!(search.results().is_none());
        assert_eq!(repository.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_fires_once_after_debounce() {
        let repository = Arc::new(StubSearchRepository::new());
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("ada");
        assert_eq!(repository.call_count(), 0);
        assert!(search.results().is_none());

        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;

        assert_eq!(repository.call_count(), 1);
        let results = search.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_name, "ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_is_trimmed_before_length_check() {
        let repository = Arc::new(StubSearchRepository::new());
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("  a  ");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;
        assert_eq!(repository.call_count(), 0);

        search.on_input("  ada  ");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;
        assert_eq!(repository.call_count(), 1);
        assert_eq!(search.results().unwrap()[0].user_name, "ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_retyping_sends_only_final_query() {
        let repository = Arc::new(StubSearchRepository::new());
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("ad");
        let_timers_fire(Duration::from_millis(100)).await;
        search.on_input("ada");
        let_timers_fire(Duration::from_millis(100)).await;
        search.on_input("ada l");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;

        assert_eq!(repository.call_count(), 1);
        assert_eq!(search.results().unwrap()[0].user_name, "ada l");
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_query_never_overwrites_newer_results() {
        let mut repository = StubSearchRepository::new();
        repository.latency = Duration::from_millis(500);
        let repository = Arc::new(repository);
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("old query");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        // The old query is now in flight (sleeping inside the backend)
        search.on_input("new query");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;
        let_timers_fire(Duration::from_millis(500)).await;

        let results = search.results().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_name, "new query");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_search_commits_empty_results() {
        let mut repository = StubSearchRepository::new();
        repository.fail = true;
        let repository = Arc::new(repository);
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("ada");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;

        assert_eq!(repository.call_count(), 1);
        assert_eq!(search.results(), Some(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_after_results_falls_back_to_tree() {
        let repository = Arc::new(StubSearchRepository::new());
        let mut search = SearchController::new(Arc::clone(&repository));

        search.on_input("ada");
        let_timers_fire(SEARCH_DEBOUNCE).await;
        search.settled().await;
        assert!(search.results().is_some());

        search.on_input("");
        assert!(search.results().is_none());
    }
}
