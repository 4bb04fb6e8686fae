//! Command execution

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::errors::CliError;
use crate::report::{self, Outcome, OutputFormat};
use hydrate_core::{
    ConstructionPolicy, DescriptorProvider, Engine, Job, Planner, Record, SeededSynthesizer,
    TypeRegistry,
};
use hydrate_sources::{Backend, Table, catalog, json};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Values resolved from flags, then the config file, then built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: OutputFormat,
    pub seed: u64,
    pub policy: Option<ConstructionPolicy>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let (policy, seed) = match &cli.command {
            Commands::Run { policy, seed, .. } => (*policy, *seed),
            Commands::Matrix { seed, .. } => (None, *seed),
            Commands::Types => (None, None),
        };

        Self {
            output: cli
                .output
                .or(config.defaults.output)
                .unwrap_or_default(),
            seed: seed.or(config.defaults.seed).unwrap_or(0),
            policy: policy.or(config.defaults.policy),
        }
    }

    fn engine(&self) -> Engine {
        Engine::with_planner(Planner::with_synthesizer(SeededSynthesizer::new(self.seed)))
    }
}

#[instrument(skip_all)]
pub fn execute(command: Commands, settings: &Settings, out: &mut impl Write) -> miette::Result<()> {
    let registry = catalog::registry().map_err(CliError::from)?;
    debug!(types = registry.len(), "Registered sample types");

    match command {
        Commands::Run {
            type_name,
            record,
            table,
            ..
        } => run(
            &registry,
            settings,
            &type_name,
            record.as_deref(),
            table.as_deref(),
            out,
        )?,
        Commands::Matrix { backends, .. } => matrix(&registry, settings, &backends, out)?,
        Commands::Types => report::write_types(out, settings.output, &registry)
            .map_err(CliError::from)?,
    }

    Ok(())
}

fn load_record(record: Option<&Path>, table: Option<&Path>) -> Result<Record, CliError> {
    let read = |path: &Path| fs::read_to_string(path).map_err(|e| CliError::file_error(path, e));

    match (record, table) {
        (Some(path), _) => Ok(json::record_from_str(&read(path)?)?),
        (None, Some(path)) => Ok(Table::parse(&read(path)?)?.single_record()?),
        (None, None) => Ok(Record::new()),
    }
}

#[instrument(skip(registry, settings, out))]
fn run(
    registry: &TypeRegistry,
    settings: &Settings,
    type_name: &str,
    record: Option<&Path>,
    table: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let policy = settings.policy.ok_or(CliError::MissingPolicy)?;
    let descriptor = registry.require(type_name)?;
    let record = load_record(record, table)?;
    debug!(fields = record.len(), %policy, "Loaded record");

    let instance = settings.engine().run(&descriptor, &record, policy)?;

    let outcome = Outcome {
        backend: None,
        type_name: descriptor.name(),
        policy,
        instance: Some(&instance),
        error: None,
    };
    report::write_outcomes(out, settings.output, registry, &[outcome])?;
    Ok(())
}

#[instrument(skip_all, fields(backends = backends.len()))]
fn matrix(
    registry: &TypeRegistry,
    settings: &Settings,
    backends: &[Backend],
    out: &mut impl Write,
) -> Result<(), CliError> {
    let all = Backend::ALL;
    let backends = if backends.is_empty() {
        &all[..]
    } else {
        backends
    };

    let mut cells = Vec::new();
    let mut jobs = Vec::new();
    for &backend in backends {
        let record = backend.sample_record()?;
        for variant in catalog::VARIANTS {
            let descriptor = registry.require(variant)?;
            cells.push((backend, variant));
            jobs.push(Job::new(descriptor, record.clone(), backend.policy()));
        }
    }

    let results = settings.engine().run_batch(&jobs);

    let outcomes: Vec<Outcome<'_>> = cells
        .iter()
        .zip(&results)
        .map(|(&(backend, variant), result)| {
            let error = result.as_ref().err().map(|e| {
                warn!(%backend, type_name = variant, error = %e, "Materialization failed");
                e.to_string()
            });
            Outcome {
                backend: Some(backend.as_str()),
                type_name: variant,
                policy: backend.policy(),
                instance: result.as_ref().ok(),
                error,
            }
        })
        .collect();

    report::write_outcomes(out, settings.output, registry, &outcomes)?;
    Ok(())
}
