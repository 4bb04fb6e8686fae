//! Rendering of instances and type listings

use hydrate_core::{ConstructionPolicy, DescriptorProvider, Instance, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

const RULE: &str = "--------------------------------------------------";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable dump
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One materialization outcome, as reported.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend: Option<&'a str>,
    pub type_name: &'a str,
    pub policy: ConstructionPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<&'a Instance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Write a dump of `instance`: values, then setter counters, then constructor
/// counters, with properties in declaration order.
pub fn write_instance(
    out: &mut impl Write,
    descriptor: &TypeDescriptor,
    instance: &Instance,
) -> io::Result<()> {
    let names: Vec<&str> = descriptor.properties().iter().map(|p| p.name()).collect();
    write_dump(out, &names, instance)
}

fn write_dump(out: &mut impl Write, names: &[&str], instance: &Instance) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    for name in names {
        writeln!(out, "{name}: {}", instance.value(name).unwrap_or(""))?;
    }

    writeln!(out, "{RULE}")?;
    for name in names {
        writeln!(out, "{name} setter calls: {}", instance.setter_calls(name))?;
    }

    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "default constructor calls: {}",
        instance.counters.default_ctor_calls
    )?;
    writeln!(
        out,
        "param constructor calls: {}",
        instance.counters.param_ctor_calls
    )
}

/// Write a section heading for one outcome.
pub fn write_heading(out: &mut impl Write, outcome: &Outcome<'_>) -> io::Result<()> {
    match outcome.backend {
        Some(backend) => writeln!(
            out,
            "===== {} [{backend} / {}] =====",
            outcome.type_name, outcome.policy
        ),
        None => writeln!(out, "===== {} [{}] =====", outcome.type_name, outcome.policy),
    }
}

/// Write outcomes in the requested format.
pub fn write_outcomes(
    out: &mut impl Write,
    format: OutputFormat,
    provider: &dyn DescriptorProvider,
    outcomes: &[Outcome<'_>],
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcomes)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            for outcome in outcomes {
                write_heading(out, outcome)?;
                match (outcome.instance, &outcome.error) {
                    (Some(instance), _) => match provider.descriptor(outcome.type_name) {
                        Some(descriptor) => write_instance(out, &descriptor, instance)?,
                        // Unregistered type: fall back to the instance's own (sorted) names
                        None => {
                            let names: Vec<&str> =
                                instance.values.keys().map(String::as_str).collect();
                            write_dump(out, &names, instance)?;
                        }
                    },
                    (None, Some(error)) => writeln!(out, "error: {error}")?,
                    (None, None) => {}
                }
            }
            Ok(())
        }
    }
}

/// Write every registered type with its properties and constructors.
pub fn write_types(
    out: &mut impl Write,
    format: OutputFormat,
    provider: &dyn DescriptorProvider,
) -> io::Result<()> {
    let descriptors: Vec<_> = provider
        .type_names()
        .iter()
        .filter_map(|name| provider.descriptor(name))
        .collect();

    match format {
        OutputFormat::Json => {
            let listing: Vec<_> = descriptors
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "name": d.name(),
                        "properties": d.properties().iter().map(|p| {
                            serde_json::json!({ "name": p.name(), "mutability": p.mutability() })
                        }).collect::<Vec<_>>(),
                        "constructors": d.constructors(),
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)
        }
        OutputFormat::Text => {
            for descriptor in &descriptors {
                writeln!(out, "{}", descriptor.name())?;
                for property in descriptor.properties() {
                    writeln!(out, "  {}: {}", property.name(), property.mutability())?;
                }
                for constructor in descriptor.constructors() {
                    writeln!(
                        out,
                        "  constructor {} ({}): [{}]",
                        constructor.id(),
                        constructor.kind(),
                        constructor.parameters().join(", ")
                    )?;
                }
            }
            Ok(())
        }
    }
}
