//! PicoRuby build-configuration CLI
//!
//! Entry point for the `picoruby-build-config` command-line tool.

use clap::{Parser, Subcommand};
use picoruby_build_config::{resolve, Environment};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "picoruby-build-config")]
#[command(about = "Resolve PicoRuby build directives from the environment", version)]
struct Cli {
    /// Log resolution steps to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the current environment into build directives
    Resolve {
        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Print only the directive-set fingerprint
        #[arg(long, conflicts_with = "human")]
        fingerprint: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve { human, fingerprint } => run_resolve(human, fingerprint),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_resolve(human: bool, fingerprint: bool) {
    let set = match resolve(&Environment::from_process()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if fingerprint {
        match set.fingerprint() {
            Ok(fp) => println!("{}", fp),
            Err(e) => {
                eprintln!("Error computing fingerprint: {}", e);
                process::exit(1);
            }
        }
    } else if human {
        println!("{}", set.to_human());
    } else {
        match set.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}
