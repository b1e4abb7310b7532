use std::io::{self, ErrorKind};

use clap::Parser;
use filenav_core::engine::CAPABILITIES;
use filenav_core::{
    CapabilitySet, ExtensionFilter, ListingEngine, MemoryBackend, NavigationSettings,
    RequestContext, token,
};

mod cli;

use cli::{Cli, CliCommand, ListArgs};

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        CliCommand::List(args) => run_list(&args),
        CliCommand::Encode(args) => {
            println!("{}", token::encode(&args.locator()));
            Ok(())
        }
        CliCommand::Decode { token } => {
            let locator = token::decode(&token)
                .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
            print_json(&locator)
        }
        CliCommand::Capabilities => print_json(&CAPABILITIES),
    }
}

fn run_list(args: &ListArgs) -> io::Result<()> {
    let backend = MemoryBackend::load(&args.tree)?;
    log::debug!(
        "loaded {} node(s) from {}",
        backend.len(),
        args.tree.display()
    );
    let settings = args
        .config
        .as_deref()
        .map(NavigationSettings::load)
        .unwrap_or_default();

    let mut viewer = CapabilitySet::new();
    for (capability, context) in &args.grants {
        viewer.grant(capability, *context);
    }

    let engine = ListingEngine::with_pix_assets(Box::new(backend), &settings.assets);
    let request = RequestContext::new(&viewer, &settings);
    let filter = ExtensionFilter::from_accepted(&args.accept);
    let listing = engine
        .listing(&request, &args.token, &filter)
        .map_err(io::Error::other)?;
    print_json(&listing)
}

fn print_json<T: serde::Serialize>(value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))?;
    println!("{}", json);
    Ok(())
}
