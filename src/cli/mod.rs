// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the katsuyo command-line interface.
//!
//! Four subcommands: `hydrate` to write conjugations into a dataset, `verify`
//! to check a hydrated dataset, `conjugate` to derive the forms of a single
//! verb, and `show` to print the stored forms of one entry.

pub mod display;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use katsuyo::{ConjugationLevel, Provenance};

/// Default dataset location, relative to the project root.
pub const DEFAULT_DATASET: &str = "public/data/vocabulary.json";

#[derive(Parser)]
#[command(
    name = "katsuyo",
    about = "Japanese verb conjugation and vocabulary dataset hydration",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by KATSUYO_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write precomputed conjugations into every verb of a dataset
    Hydrate {
        /// Vocabulary dataset (JSON array of entries)
        #[arg(long, env = "KATSUYO_DATASET", default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Write the hydrated dataset here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report what would change without writing anything
        #[arg(long)]
        dry_run: bool,

        /// Treat rule fallbacks as errors for the affected entries
        #[arg(long)]
        strict: bool,
    },

    /// Check that every verb is hydrated and no non-verb carries conjugations
    ///
    /// Exits with status 1 when the check fails.
    Verify {
        /// Vocabulary dataset (JSON array of entries)
        #[arg(long, env = "KATSUYO_DATASET", default_value = DEFAULT_DATASET)]
        dataset: PathBuf,
    },

    /// Conjugate a single verb given its polite-present form
    Conjugate {
        /// Polite-present form, e.g. 書きます
        surface: String,

        /// Part-of-speech tag: 动1, 动2 or 动3
        #[arg(short, long)]
        tag: String,

        /// Forms to print: beginner, intermediate, advanced or complete
        #[arg(short, long, default_value = "complete")]
        level: ConjugationLevel,

        /// Fail instead of falling back on stems without a dedicated rule
        #[arg(long)]
        strict: bool,
    },

    /// Print the stored conjugations of one dataset entry
    Show {
        /// Entry identifier (`_id`)
        id: String,

        /// Vocabulary dataset (JSON array of entries)
        #[arg(long, env = "KATSUYO_DATASET", default_value = DEFAULT_DATASET)]
        dataset: PathBuf,

        /// Preferred provenance: precomputed or jmdict
        #[arg(short, long, default_value = "precomputed")]
        source: Provenance,

        /// Forms to print: beginner, intermediate, advanced or complete
        #[arg(short, long, default_value = "complete")]
        level: ConjugationLevel,
    },
}
