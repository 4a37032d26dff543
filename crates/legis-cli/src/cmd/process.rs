use crate::cmd::Settings;
use crate::input::ItemFile;
use crate::output::{print_json, print_table, truncate};
use anyhow::Context;
use legis_core::processor::Report;
use legis_core::summary::{HistorySummary, VoteMilestone};
use legis_core::ActionDate;
use std::path::PathBuf;

pub fn run(settings: &Settings, files: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let config = settings.load_config()?;
    let processor = settings.processor(&config)?;

    let mut reports = Vec::new();
    let mut failed = 0usize;

    for path in files {
        let result = ItemFile::load(path).and_then(|file| {
            let (item, actions) = file.into_parts(config.congress);
            processor
                .analyze(&actions, &item)
                .with_context(|| format!("failed to process {}", item.id()))
        });
        match result {
            Ok(report) => reports.push(report),
            Err(e) => {
                failed += 1;
                eprintln!("error: {}: {e:#}", path.display());
            }
        }
    }

    if json {
        print_json(&reports)?;
    } else {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_report(report);
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} items failed", files.len());
    }
    Ok(())
}

fn print_report(report: &Report) {
    if report.title.is_empty() {
        println!("{}", report.item);
    } else {
        println!("{}  {}", report.item, report.title);
    }
    println!("Status: {}", report.status);
    println!();

    let rows: Vec<Vec<String>> = report
        .actions
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let indent = "  ".repeat(a.level as usize);
            vec![
                i.to_string(),
                a.date.to_string(),
                a.kind.to_string(),
                a.status.map(|s| s.to_string()).unwrap_or_default(),
                format!("{indent}{}", truncate(&a.text, 70)),
            ]
        })
        .collect();
    print_table(&["#", "DATE", "KIND", "STATUS", "TEXT"], rows);

    let summary = summary_lines(&report.summary);
    if !summary.is_empty() {
        println!();
        for line in summary {
            println!("{line}");
        }
    }
}

fn vote_line(label: &str, milestone: &Option<VoteMilestone>) -> Option<String> {
    milestone.map(|m| format!("{label:<20}{} {}", m.result, m.date))
}

fn summary_lines(s: &HistorySummary) -> Vec<String> {
    let dated = |label: &str, date: &Option<ActionDate>| {
        date.map(|d| format!("{label:<20}{d}"))
    };
    [
        dated("active", &s.active),
        vote_line("house passage", &s.house_passage),
        vote_line("senate cloture", &s.senate_cloture),
        vote_line("senate passage", &s.senate_passage),
        dated("vetoed", &s.vetoed),
        vote_line("house override", &s.house_override),
        vote_line("senate override", &s.senate_override),
        dated("awaiting signature", &s.awaiting_signature),
        dated("enacted", &s.enacted),
    ]
    .into_iter()
    .flatten()
    .collect()
}

