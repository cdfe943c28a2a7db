// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use katsuyo::{
    classify, derive, load_dataset, run_hydrate, run_verify, ConjugateOptions, ConjugationLevel,
    HydrateOptions, Provenance, Verdict, WordClass,
};

mod cli;
use cli::{render, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Hydrate {
            dataset,
            output,
            dry_run,
            strict,
        } => {
            let options = HydrateOptions {
                output,
                dry_run,
                strict,
            };
            hydrate(&dataset, &options)
        }
        Commands::Verify { dataset } => verify(&dataset),
        Commands::Conjugate {
            surface,
            tag,
            level,
            strict,
        } => conjugate(&surface, &tag, level, strict),
        Commands::Show {
            id,
            dataset,
            source,
            level,
        } => show(&dataset, &id, source, level),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// `KATSUYO_LOG` wins; otherwise `-v` selects debug and the default is warn.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "katsuyo=debug" } else { "katsuyo=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KATSUYO_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn hydrate(dataset: &Path, options: &HydrateOptions) -> Result<(), String> {
    let report = run_hydrate(dataset, options).map_err(|e| e.to_string())?;
    println!();
    render::print_hydration_report(dataset, options, &report);
    Ok(())
}

fn verify(dataset: &Path) -> Result<(), String> {
    let report = run_verify(dataset).map_err(|e| e.to_string())?;
    render::print_verification_report(dataset, &report);
    if report.verdict() == Verdict::Fail {
        std::process::exit(1);
    }
    Ok(())
}

fn conjugate(surface: &str, tag: &str, level: ConjugationLevel, strict: bool) -> Result<(), String> {
    let WordClass::Verb(class) = classify(tag) else {
        return Err(format!("'{}' is not a verb tag (expected 动1, 动2 or 动3)", tag));
    };
    let derivation = derive(surface, class, ConjugateOptions { strict }).map_err(|e| e.to_string())?;
    render::print_conjugation(surface, class, &derivation.set, level, derivation.fallback.as_ref());
    Ok(())
}

fn show(dataset: &Path, id: &str, preferred: Provenance, level: ConjugationLevel) -> Result<(), String> {
    let entries = load_dataset(dataset).map_err(|e| e.to_string())?;
    let entry = entries
        .iter()
        .find(|entry| entry.id == id)
        .ok_or_else(|| format!("no entry with id '{}' in {}", id, dataset.display()))?;

    let (source, set) = entry
        .conjugations
        .as_ref()
        .and_then(|container| container.best_with_source(preferred))
        .ok_or_else(|| {
            format!(
                "entry '{}' ({}, {}) has no stored conjugations",
                id,
                entry.word(),
                entry.part_of_speech
            )
        })?;

    render::print_stored(id, entry.word(), source, preferred, &set, level);
    Ok(())
}
