use hr_orgchart::adapters::outbound::console::{
    ConsoleSelectionListener, StderrProgressReporter, TreeRenderer,
};
use hr_orgchart::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use hr_orgchart::adapters::outbound::network::HttpDirectoryClient;
use hr_orgchart::application::{BrowserOptions, OrgChartBrowser, SearchController};
use hr_orgchart::cli::Args;
use hr_orgchart::config::{self, ConfigFile};
use hr_orgchart::orgchart::domain::Selection;
use hr_orgchart::ports::outbound::{OutputPresenter, ProgressReporter, SelectionListener};
use hr_orgchart::shared::error::{ExitCode, OrgChartError};
use hr_orgchart::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run() -> Result<ExitCode> {
    // Parse command-line arguments and resolve configuration
    let args = Args::parse_args();
    let config = resolve_config(&args)?;

    let base_url = args
        .base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .ok_or(OrgChartError::MissingBaseUrl)?;
    let token_var = config.token_env().to_string();
    let token = std::env::var(&token_var).map_err(|_| OrgChartError::MissingToken {
        var: token_var.clone(),
    })?;

    let options = BrowserOptions {
        all_departments: args.all_departments || config.all_departments.unwrap_or(false),
        include_sub_depts: !args.no_sub_depts && config.include_sub_depts.unwrap_or(true),
    };

    // Create adapters (Dependency Injection)
    let repository = Arc::new(HttpDirectoryClient::new(base_url, token)?);
    let console = StderrProgressReporter::new();
    let listener: Box<dyn SelectionListener> = Box::new(ConsoleSelectionListener::new());
    let mut browser = OrgChartBrowser::new(
        Arc::clone(&repository),
        StderrProgressReporter::new(),
        listener,
        options,
    );

    browser.mount().await;
    browser.set_selection(selection_from(&args.select));

    let renderer = TreeRenderer::new(!args.no_color);
    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };

    // Search mode: run one debounced query and print the flat results
    if let Some(term) = &args.search {
        let mut search = SearchController::new(Arc::clone(&repository));
        search.on_input(term);
        search.settled().await;

        let results = search.results().unwrap_or_default();
        let rows = browser.search_rows(&results);
        presenter.present(&renderer.render_search(&rows))?;
        return Ok(if rows.is_empty() {
            ExitCode::NoMatches
        } else {
            ExitCode::Success
        });
    }

    // Tree mode: expand the requested nodes, then print
    let total = args.expand.len();
    for (idx, dept_code) in args.expand.iter().enumerate() {
        console.report_progress(idx, total, Some(dept_code.as_str()));
        browser.toggle(dept_code).await;
        console.report_progress(idx + 1, total, Some(dept_code.as_str()));
    }
    if total > 0 {
        console.report_completion(&format!("✅ Expanded {} department(s)", total));
    }

    for user_id in &args.select {
        if !browser.select(user_id) {
            console.report_error(&format!(
                "⚠️  Warning: user id {} not found in any expanded department",
                user_id
            ));
        }
    }

    presenter.present(&renderer.render_tree(&browser.rows()))?;
    Ok(ExitCode::Success)
}

fn resolve_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path)),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn selection_from(user_ids: &[String]) -> Selection {
    match user_ids {
        [] => Selection::none(),
        [single] => Selection::single(single.clone()),
        many => Selection::multi(many.iter().cloned()),
    }
}
