//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use filenav_core::{NodeLocator, SYSTEM_CONTEXT_ID};

/// filenav - browse a file hierarchy the way a file picker sees it
#[derive(Parser, Debug)]
#[command(name = "filenav", version, about = "Browse a file hierarchy the way a file picker sees it")]
pub struct Cli {
    /// Log resolution and pruning decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List what the picker shows for a token
    List(ListArgs),
    /// Encode a locator as a token
    Encode(EncodeArgs),
    /// Decode a token into its sanitized locator
    Decode {
        #[arg(allow_hyphen_values = true)]
        token: String,
    },
    /// Print the repository capabilities
    Capabilities,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// JSON hierarchy fixture
    #[arg(long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Navigation settings (toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Token from a previous listing; empty for the start
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub token: String,

    /// Accepted file extension, e.g. `.png` (repeatable; `*` for all)
    #[arg(long = "accept", value_name = "EXT")]
    pub accept: Vec<String>,

    /// Capability held by the viewer, as `name` or `name@context`
    #[arg(long = "grant", value_name = "CAPABILITY", value_parser = parse_grant)]
    pub grants: Vec<(String, u64)>,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[arg(long)]
    pub context: u64,
    #[arg(long)]
    pub component: Option<String>,
    #[arg(long)]
    pub area: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<i64>,
    #[arg(long)]
    pub path: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

impl EncodeArgs {
    pub fn locator(&self) -> NodeLocator {
        NodeLocator {
            context_id: self.context,
            component: self.component.clone(),
            area: self.area.clone(),
            item_id: self.item,
            path: self.path.clone(),
            name: self.name.clone(),
        }
    }
}

/// Parse `name` (system context) or `name@context`.
fn parse_grant(s: &str) -> Result<(String, u64), String> {
    let (name, context) = match s.rsplit_once('@') {
        Some((name, ctx)) => {
            let ctx = ctx
                .parse::<u64>()
                .map_err(|_| format!("invalid context id in grant '{}'", s))?;
            (name, ctx)
        }
        None => (s, SYSTEM_CONTEXT_ID),
    };
    if name.is_empty() {
        return Err(format!("empty capability in grant '{}'", s));
    }
    Ok((name.to_string(), context))
}
