//! Terminal rendering for catalog, report, and verdict panels
//!
//! Every user-facing message goes through here to keep the output
//! consistent. Unknown principle-id references are treated as no match
//! and skipped, never an error.

use owo_colors::OwoColorize;
use zenith_common::principles::{Category, PrincipleItem};
use zenith_common::report::ANALYSIS_REPORT;
use zenith_common::verdict::{Verdict, VerdictResult};

const WRAP_WIDTH: usize = 76;

/// Resolve referenced ids to principles, silently dropping unknown ids.
pub fn referenced_principles(ids: &[u32]) -> Vec<&'static PrincipleItem> {
    ids.iter().filter_map(|id| PrincipleItem::find(*id)).collect()
}

fn colored_verdict(verdict: Verdict) -> String {
    match verdict {
        Verdict::Approved => verdict.as_str().green().bold().to_string(),
        Verdict::Caution => verdict.as_str().yellow().bold().to_string(),
        Verdict::Rejected => verdict.as_str().red().bold().to_string(),
    }
}

pub fn print_catalog(items: &[&PrincipleItem], category: Option<Category>) {
    match category {
        Some(c) => println!("{}", format!("CATALOG // {}", c.as_str()).bold()),
        None => println!("{}", "CATALOG // ALL MODULES".bold()),
    }
    println!();
    for p in items {
        println!(
            "  {}  {}  {}",
            format!("NO.{:02}", p.id).dimmed(),
            format!("[{}]", p.category.as_str()).cyan(),
            p.title.bold()
        );
        println!("        {}", p.content);
    }
    println!();
    println!("{}", format!("{} principle(s)", items.len()).dimmed());
}

pub fn print_principle(p: &PrincipleItem) {
    println!(
        "{} {}",
        format!("NO.{:02} //", p.id).dimmed(),
        format!("[{}]", p.category.as_str()).cyan()
    );
    println!("{}", p.title.bold());
    println!();
    for line in textwrap::wrap(p.content, WRAP_WIDTH) {
        println!("{}", line);
    }
    println!();
    for point in p.points {
        println!("  {} {}", "-".dimmed(), point);
    }
}

pub fn print_no_match(id: u32) {
    println!("{}", format!("NO MATCH // principle {} not in catalog", id).yellow());
}

pub fn print_report() {
    let report = &ANALYSIS_REPORT;

    for line in textwrap::wrap(report.intro, WRAP_WIDTH) {
        println!("{}", line);
    }

    println!();
    println!("{}", report.meta_logic.title.bold());
    println!("{}", report.meta_logic.description.dimmed());
    for rule in report.meta_logic.rules {
        println!();
        println!("  {}", rule.title.cyan());
        println!("  {}", rule.description.dimmed());
        for point in rule.points {
            println!("    - {}", point);
        }
    }

    println!();
    println!("{}", report.core_framework.title.bold());
    println!("{}", report.core_framework.description.dimmed());
    for point in report.core_framework.points {
        println!();
        println!("  {}", point.label.cyan());
        println!("  {}", point.description);
        let refs = referenced_principles(point.ids);
        let titles: Vec<String> = refs
            .iter()
            .map(|p| format!("#{:02} {}", p.id, p.title))
            .collect();
        println!("  {} {}", "REFS:".dimmed(), titles.join(" / "));
    }

    for section in report.sections {
        println!();
        println!("{}", section.title.bold());
        for line in section.content {
            println!("  - {}", line);
        }
    }

    println!();
    println!("{}", report.key_insight.title.bold());
    println!("{}", report.key_insight.description.dimmed());
    for point in report.key_insight.points {
        println!("  - {}", point);
    }
    println!("  {}", report.key_insight.highlight.yellow());

    println!();
    for line in textwrap::wrap(report.summary, WRAP_WIDTH) {
        println!("{}", line);
    }
}

pub fn print_verdict(result: &VerdictResult) {
    println!();
    println!(
        "  {}  {}",
        "SYSTEM VERDICT".dimmed(),
        "ALIGNMENT".dimmed()
    );
    println!(
        "  {}  {}{}",
        colored_verdict(result.verdict),
        result.score.bold(),
        "/100".dimmed()
    );
    println!();

    for paragraph in result.analysis.split('\n') {
        if paragraph.trim().is_empty() {
            println!();
            continue;
        }
        for line in textwrap::wrap(paragraph.trim(), WRAP_WIDTH) {
            println!("  {} {}", ">>".dimmed(), line);
        }
    }

    if !result.risk_factors.is_empty() {
        println!();
        for risk in &result.risk_factors {
            println!("  {}", format!("WARN: {}", risk).red());
        }
    }

    let referenced = referenced_principles(&result.relevant_principle_ids);
    if !referenced.is_empty() {
        println!();
        println!("  {}", "REFERENCED PRINCIPLES".dimmed());
        for p in referenced {
            println!(
                "  {}  {}  {}",
                format!("NO.{:02}", p.id).dimmed(),
                format!("[{}]", p.category.as_str()).cyan(),
                p.title.bold()
            );
        }
    }
    println!();
}
