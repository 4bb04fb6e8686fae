use crate::logging::{LogLevel, TracingFormat};
use crate::report::OutputFormat;
use clap::{Parser, Subcommand};
use hydrate_core::ConstructionPolicy;
use hydrate_sources::Backend;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hydrate")]
#[command(about = "Plan and materialize described types from flat records")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 'l', long, global = true, help = "Set logging level", value_enum)]
    pub level: Option<LogLevel>,

    #[arg(long, global = true, help = "Log output format", value_enum)]
    pub log_format: Option<TracingFormat>,

    #[arg(short = 'o', long, global = true, help = "Report format", value_enum)]
    pub output: Option<OutputFormat>,

    #[arg(
        short = 'c',
        long,
        global = true,
        env = "HYDRATE_CONFIG",
        help = "Path to a hydrate.toml configuration file"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Materialize one instance of a registered type")]
    Run {
        #[arg(long = "type", help = "Name of the type to materialize")]
        type_name: String,
        #[arg(long, help = "Construction policy")]
        policy: Option<ConstructionPolicy>,
        #[arg(long, help = "JSON object to read the record from")]
        record: Option<PathBuf>,
        #[arg(
            long,
            conflicts_with = "record",
            help = "Pipe-delimited table to read the record from"
        )]
        table: Option<PathBuf>,
        #[arg(long, help = "Seed for synthesized values")]
        seed: Option<u64>,
    },
    #[command(about = "Materialize every sample type through every backend")]
    Matrix {
        #[arg(long = "backend", help = "Restrict to these backends (repeatable)")]
        backends: Vec<Backend>,
        #[arg(long, help = "Seed for synthesized values")]
        seed: Option<u64>,
    },
    #[command(about = "List registered types")]
    Types,
}
