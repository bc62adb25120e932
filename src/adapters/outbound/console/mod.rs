mod progress_reporter;
mod selection_listener;
mod tree_renderer;

pub use progress_reporter::StderrProgressReporter;
pub use selection_listener::ConsoleSelectionListener;
pub use tree_renderer::TreeRenderer;
