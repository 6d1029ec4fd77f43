// SPDX-FileCopyrightText: 2024 Jade Lovelace
//
// SPDX-License-Identifier: BSD-2-Clause OR MIT

//! Shows the part of the NixOS configuration.nix manual under an option prefix

use nix_man_filter::man::{FixedLocator, Locate, ManLocator, ManViewer};
use nix_man_filter::{find_options, run, Error, Options, Result, Section};

use colorful::Colorful;
use structopt::StructOpt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

#[derive(StructOpt, Debug)]
#[structopt(about = "Filter the NixOS configuration.nix manual by option prefix")]
struct Args {
    /// Option prefix to filter by
    prefix: String,

    /// Show only option names and descriptions
    #[structopt(short, long)]
    description_only: bool,

    /// Print the names of the matching options instead of opening a man page
    #[structopt(short, long)]
    list: bool,

    /// Man page source to filter instead of the one `man -w configuration.nix` finds
    #[structopt(short, long)]
    source: Option<PathBuf>,

    /// Log each section as it is considered
    #[structopt(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("nix_man_filter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nix_man_filter=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal()),
        )
        .init();
}

fn print_names(sections: &[Section]) {
    let styled = io::stdout().is_terminal();
    for section in sections {
        if styled {
            println!("{}", section.name.as_str().bold());
        } else {
            println!("{}", section.name);
        }
    }
}

fn real_main(args: Args) -> Result<()> {
    info!(prefix = %args.prefix, "filtering the configuration.nix manual");
    if args.description_only {
        info!("showing descriptions only");
    }

    let locator: Box<dyn Locate> = match args.source {
        Some(path) => Box::new(FixedLocator(path)),
        None => Box::new(ManLocator::default()),
    };
    let out_dir = env::current_dir().map_err(Error::CurrentDir)?;
    let opts = Options {
        prefix: args.prefix,
        description_only: args.description_only,
        out_dir,
    };

    if args.list {
        print_names(&find_options(&opts, locator.as_ref())?);
        return Ok(());
    }

    run(&opts, locator.as_ref(), &ManViewer::default())
}

fn main() {
    let args = Args::from_args();
    init_logging(args.verbose);

    if let Err(e) = real_main(args) {
        match e {
            Error::NoMatches { .. } => warn!("{}", e),
            _ => error!("{}", e),
        }
        process::exit(1);
    }
}
