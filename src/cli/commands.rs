use clap::{ArgAction, Args, Parser, Subcommand};

use crate::model::filter::FilterValue;

#[derive(Parser)]
#[command(name = "roster", about = concat!("roster v", env!("CARGO_PKG_VERSION"), " - contacts, filters and settings"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding roster.toml (default: current directory)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a page of contacts with search, filters, sort and selection
    List(ListArgs),
    /// Show the filter and form option lists
    Options,
    /// Import contacts from a JSON array file
    Import(ImportArgs),
    /// Show or change notification preferences
    Prefs(PrefsCmd),
    /// Show or change the user profile
    Profile(ProfileCmd),
}

// ---------------------------------------------------------------------------
// Contact table args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Case-insensitive search over name, company and email
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Contact source, or "all"
    #[arg(long, default_value = "all")]
    pub source: FilterValue,
    /// Segment, or "all"
    #[arg(long, default_value = "all")]
    pub segment: FilterValue,
    /// Account status, or "all"
    #[arg(long, default_value = "all")]
    pub status: FilterValue,
    /// Sort column (repeat the same column to flip direction)
    #[arg(long, action = ArgAction::Append)]
    pub sort: Vec<String>,
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Override the configured page size
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Check the header checkbox (selects up to 50 visible rows)
    #[arg(long)]
    pub select_all: bool,
    /// Toggle the checkbox of a row by contact ID (repeatable)
    #[arg(long = "select", action = ArgAction::Append)]
    pub select: Vec<String>,
    /// Only print selected rows
    #[arg(long)]
    pub selected_only: bool,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file containing an array of contacts
    pub file: String,
}

// ---------------------------------------------------------------------------
// Settings args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct PrefsCmd {
    #[command(subcommand)]
    pub action: Option<PrefsAction>,
}

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show current preferences (default)
    Show,
    /// Flip one or more preferences and save
    Toggle {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Set a preference to true or false and save
    Set {
        key: String,
        #[arg(action = ArgAction::Set)]
        value: bool,
    },
}

#[derive(Args)]
pub struct ProfileCmd {
    #[command(subcommand)]
    pub action: Option<ProfileAction>,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile (default)
    Show,
    /// Change profile fields and save
    Set(ProfileSetArgs),
}

#[derive(Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// IANA timezone from the `options` list
    #[arg(long)]
    pub timezone: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar_url: Option<String>,
}

impl ProfileSetArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.timezone.is_none()
            && self.bio.is_none()
            && self.avatar_url.is_none()
    }
}
