//! hr-orgchart - organization chart browser for HR directory services
//!
//! This library builds a browsable org chart on top of an HR backend's
//! REST directory API, following hexagonal architecture: the backend
//! owns persistence and business rules, the library owns the client-side
//! tree building, expansion state, lazy employee loading and debounced
//! search.
//!
//! # Architecture
//!
//! - **Domain Layer** (`orgchart`): department/employee models and the
//!   pure tree-building and name-resolution services
//! - **Application Layer** (`application`): the stateful browser and
//!   search controller plus render-ready read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use hr_orgchart::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn demo() -> Result<()> {
//! // Create adapters
//! let repository = Arc::new(HttpDirectoryClient::new(
//!     "https://hr.example.com",
//!     "bearer-token",
//! )?);
//! let reporter = StderrProgressReporter::new();
//! let listener = Box::new(ConsoleSelectionListener::new());
//!
//! // Create and mount the browser
//! let mut browser = OrgChartBrowser::new(
//!     Arc::clone(&repository),
//!     reporter,
//!     listener,
//!     BrowserOptions::default(),
//! );
//! browser.mount().await;
//!
//! // Expand a node (fetches its employees once) and render
//! browser.toggle("HR").await;
//! let output = TreeRenderer::new(false).render_tree(&browser.rows());
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod orgchart;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ConsoleSelectionListener, StderrProgressReporter, TreeRenderer,
    };
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::HttpDirectoryClient;
    pub use crate::application::read_models::{EmployeeRow, SearchRow, TreeRow};
    pub use crate::application::{BrowserOptions, EmployeeLoad, OrgChartBrowser, SearchController};
    pub use crate::orgchart::domain::{
        base_code, job_level_label, DepartmentNode, DepartmentRecord, EmployeeRecord, JobLevel,
        Selection,
    };
    pub use crate::orgchart::services::{NameCatalog, TreeBuilder};
    pub use crate::ports::outbound::{
        DirectoryRepository, EmployeeScope, OutputPresenter, ProgressReporter, SelectionListener,
    };
    pub use crate::shared::Result;
}
