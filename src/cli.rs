use clap::Parser;

/// Browse the organization chart of an HR directory service
#[derive(Parser, Debug)]
#[command(name = "hr-orgchart")]
#[command(version)]
#[command(about = "Browse the organization chart of an HR directory service", long_about = None)]
pub struct Args {
    /// Base URL of the directory backend (overrides the config file)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to ./orgchart.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Use the all-departments employee listing endpoint variant
    #[arg(short = 'A', long)]
    pub all_departments: bool,

    /// Do not include sub-department members in employee listings
    #[arg(long)]
    pub no_sub_depts: bool,

    /// Expand these department codes before printing (repeatable)
    #[arg(short, long = "expand", value_name = "DEPT_CODE")]
    pub expand: Vec<String>,

    /// Run a free-text employee search instead of printing the tree
    #[arg(short, long, value_name = "TERM")]
    pub search: Option<String>,

    /// Highlight these user ids and report them as selected (repeatable;
    /// more than one switches to multi-select mode)
    #[arg(long = "select", value_name = "USER_ID")]
    pub select: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Disable colored highlight in console output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
