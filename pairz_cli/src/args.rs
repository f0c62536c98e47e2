use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pairz")]
#[command(about = "Chess tournament registration and bracket pairing", long_about = None)]
pub struct Cli {
    /// Path to the roster file (defaults to the platform data directory)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Shared secret for the admin registry view
    #[arg(long, default_value = "3939")]
    pub admin_secret: String,

    /// Console text only: skip the rendered pairing table
    #[arg(long)]
    pub plain: bool,
}
