// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for stencil

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use crate::walker::ParamTable;

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Substitute {{path.to.value}} placeholders inside JSON data trees")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Substitute every placeholder in a JSON data file, in place
    Substitute {
        #[arg(help = "Path to the JSON data tree")]
        data: PathBuf,

        #[arg(short, long, help = "JSON file holding the parameter table")]
        params: Option<PathBuf>,

        #[arg(
            short = 'P',
            long = "param",
            help = "Inline parameter (key=value, value parsed as JSON with string fallback)"
        )]
        param: Vec<String>,

        #[arg(long, help = "JSON file merged over the parameter table, key for key")]
        overwrite: Option<PathBuf>,

        #[arg(short, long, help = "Write the substituted tree to this file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Pretty-print the resulting JSON")]
        pretty: bool,
    },

    /// Resolve a path expression against a JSON data file
    Resolve {
        #[arg(help = "Path to the JSON data tree")]
        data: PathBuf,

        #[arg(help = "Path expression, e.g. devices[0].name")]
        path: String,

        #[arg(long, help = "Pretty-print the resolved value")]
        pretty: bool,
    },

    /// Run a single template string through the interpolator
    Render {
        #[arg(help = "Template string, e.g. 'line {{LINE}} ready'")]
        template: String,

        #[arg(short, long, help = "JSON file holding the parameter table")]
        params: Option<PathBuf>,

        #[arg(
            short = 'P',
            long = "param",
            help = "Inline parameter (key=value, value parsed as JSON with string fallback)"
        )]
        param: Vec<String>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse inline parameters from key=value format. The value side is
    /// parsed as a JSON literal when possible, so `--param count=3` yields
    /// a number and `--param name=LN00` a string.
    pub fn parse_params(pairs: &[String]) -> anyhow::Result<ParamTable> {
        let mut table = ParamTable::new();

        for pair in pairs {
            if let Some((key, raw)) = pair.split_once('=') {
                let value = serde_json::from_str(raw)
                    .unwrap_or_else(|_| Value::String(raw.to_string()));
                table.insert(key.to_string(), value);
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid parameter format '{}'. Expected 'key=value'",
                    pair
                ));
            }
        }

        Ok(table)
    }
}
