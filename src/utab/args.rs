use clap::Parser;
use utab::commands::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "utab")]
#[command(about = "Table viewer for remote user directories", long_about = None)]
pub struct Cli {
    /// User id to show in detail view; lists all users when omitted
    pub id: Option<String>,

    /// Filter the table by a case-insensitive term (id, name, username, email)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by a field path (e.g. name, address.city, company.name)
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Print the current view as csv or json instead of a table
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<ExportFormat>,

    /// Show grouped summary counts below the table
    #[arg(long)]
    pub stats: bool,

    /// Base URL of the upstream resource (overrides UTAB_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
