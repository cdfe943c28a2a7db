// Copyright 2025-present The katsuyo Authors
// SPDX-License-Identifier: Apache-2.0

//! Boxed terminal rendering of hydration, verification and conjugation output.

use std::path::Path;

use katsuyo::forms::info;
use katsuyo::{
    ActionCategory, ConjugationLevel, ConjugationSet, EntryRecord, HydrateOptions,
    HydrationReport, InflectionClass, Provenance, RuleFallback, Verdict, VerificationReport,
};

use super::display::*;

/// Column width of form labels in conjugation tables.
const LABEL_WIDTH: usize = 24;

/// One line per form selected by `level`: label, then the form itself.
pub fn form_lines(set: &ConjugationSet, level: ConjugationLevel) -> Vec<String> {
    level
        .forms()
        .into_iter()
        .map(|kind| {
            let meta = info(kind);
            format!(
                "  {}{}  {}",
                pad_right(meta.label, LABEL_WIDTH),
                themed(GREEN, &[BOLD], set.get(kind)),
                muted(meta.description)
            )
        })
        .collect()
}

/// `id  word  (tag)` plus an optional note.
fn record_line(record: &EntryRecord, note: Option<String>) -> String {
    let mut line = format!(
        "    {}  {}  {}",
        pad_right(&record.id, 12),
        pad_right(&record.word, 14),
        muted(&format!("({})", record.part_of_speech))
    );
    if let Some(note) = note {
        line.push_str("  ");
        line.push_str(&note);
    }
    line
}

fn error_note(record: &EntryRecord) -> Option<String> {
    match &record.action {
        katsuyo::EntryAction::Errored(err) => Some(themed(RED, &[], &err.to_string())),
        _ => None,
    }
}

pub fn print_hydration_report(dataset: &Path, options: &HydrateOptions, report: &HydrationReport) {
    title_block("HYDRATION SUMMARY");
    println!();

    section_top("RUN");
    row(&format!("  Dataset:   {}", dataset.display()));
    let target = if options.dry_run {
        muted("(dry run, nothing written)")
    } else {
        options
            .output
            .as_deref()
            .unwrap_or(dataset)
            .display()
            .to_string()
    };
    row(&format!("  Written:   {}", target));
    row(&format!(
        "  Strict:    {}",
        if options.strict { "yes" } else { "no" }
    ));

    section_mid("COUNTS");
    row(&format!("  Entries:   {}", report.total));
    for category in ActionCategory::ALL {
        let count = report.count(category);
        let value = if category == ActionCategory::Errored {
            count_expect_zero(count)
        } else {
            count.to_string()
        };
        row(&format!(
            "  {}{}",
            pad_right(&format!("{}:", action_label(category.label())), 11),
            value
        ));
    }
    row(&format!("  {}{}", pad_right("untouched:", 11), report.untouched));
    row(&format!(
        "  {}{}",
        pad_right("fallbacks:", 11),
        count_expect_zero(report.fallbacks.len())
    ));

    for category in ActionCategory::ALL {
        let samples = report.samples(category);
        if samples.is_empty() {
            continue;
        }
        section_mid(&format!("{} (first {})", category.label().to_uppercase(), samples.len()));
        for record in samples {
            row(&record_line(record, error_note(record)));
        }
        let hidden = report.count(category) - samples.len();
        if hidden > 0 {
            row(&muted(&format!("    … and {} more", hidden)));
        }
    }

    if !report.fallbacks.is_empty() {
        section_mid("FALLBACKS");
        for record in report.fallbacks.iter().take(katsuyo::SAMPLE_LIMIT) {
            let note = record
                .fallback
                .as_ref()
                .map(|fallback| themed(YELLOW, &[], &fallback.to_string()));
            row(&record_line(record, note));
        }
    }

    section_bot();

    if !report.errored.is_empty() {
        println!();
        println!(
            "{} errored ids: {}",
            themed(RED, &[BOLD], "✗"),
            report.errored_ids().join(", ")
        );
    }
}

pub fn print_verification_report(dataset: &Path, report: &VerificationReport) {
    title_block("VERIFICATION");
    println!();

    section_top("DATASET");
    row(&format!("  Path:      {}", dataset.display()));
    row(&format!("  Entries:   {}", report.total_entries));
    row(&format!("  Verbs:     {}", report.total_verbs()));
    for class in InflectionClass::ALL {
        row(&format!(
            "    {}  {}",
            pad_right(&format!("{} {}", class.tag(), class), 16),
            report.verbs_in(class)
        ));
    }

    section_mid("COVERAGE");
    row(&format!(
        "  {} with container          {}",
        check(report.verbs_without_container == 0),
        coverage(report.verbs_with_container, report.total_verbs())
    ));
    for source in Provenance::ALL {
        row(&format!(
            "    {}{}",
            pad_right(&format!("{}:", source), 26),
            report.verbs_with(source)
        ));
    }
    row(&format!(
        "  {} complete precomputed     {}",
        check(report.all_verbs_precomputed()),
        coverage(report.verbs_with_complete_precomputed, report.total_verbs())
    ));
    row(&format!(
        "  {} non-verbs with container {}",
        check(report.no_stray_containers()),
        count_expect_zero(report.non_verbs_with_container)
    ));
    row(&format!(
        "    {}{}",
        pad_right("stale precomputed:", 26),
        muted(&report.stale_precomputed.to_string())
    ));

    section_mid("EXAMPLES");
    for class in InflectionClass::ALL {
        for example in report.examples_for(class) {
            let form = example
                .casual_present
                .as_deref()
                .map(|form| themed(GREEN, &[], form))
                .unwrap_or_else(|| muted("(no precomputed)"));
            row(&format!(
                "    {}  {}  →  {}",
                pad_right(class.tag(), 4),
                pad_right(&example.word, 14),
                form
            ));
        }
    }

    if !report.offenders.is_empty() {
        section_mid("OFFENDERS");
        for offender in &report.offenders {
            row(&format!(
                "    {}  {}  {}",
                pad_right(&offender.id, 12),
                pad_right(&offender.word, 14),
                muted(&format!("({})", offender.part_of_speech))
            ));
        }
    }

    section_bot();
    println!();

    match report.verdict() {
        Verdict::Pass => println!("{} {}", themed(GREEN, &[BOLD], "✓"), themed(GREEN, &[BOLD], "PASS")),
        Verdict::Fail => println!("{} {}", themed(RED, &[BOLD], "✗"), themed(RED, &[BOLD], "FAIL")),
    }
}

/// Print a conjugation table for a freshly derived verb.
pub fn print_conjugation(
    surface: &str,
    class: InflectionClass,
    set: &ConjugationSet,
    level: ConjugationLevel,
    fallback: Option<&RuleFallback>,
) {
    section_top(&format!("{}  {} {}", surface, class.tag(), class));
    section_mid(&format!("{} FORMS", level.to_string().to_uppercase()));
    for line in form_lines(set, level) {
        row(&line);
    }
    if let Some(fallback) = fallback {
        section_mid("NOTE");
        row(&format!("  {}", themed(YELLOW, &[], &fallback.to_string())));
    }
    section_bot();
}

/// Print the stored set of a dataset entry.
pub fn print_stored(
    id: &str,
    word: &str,
    source: Provenance,
    preferred: Provenance,
    set: &ConjugationSet,
    level: ConjugationLevel,
) {
    section_top(&format!("{}  {}", word, muted(id)));
    let label = if source == preferred {
        format!("{} ({})", level.to_string().to_uppercase(), source)
    } else {
        format!(
            "{} ({}, {} missing)",
            level.to_string().to_uppercase(),
            source,
            preferred
        )
    };
    section_mid(&label);
    for line in form_lines(set, level) {
        row(&line);
    }
    section_bot();
}
