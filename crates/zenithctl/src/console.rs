//! Interactive console
//!
//! Read-eval-print loop over the verdict pipeline: type a dilemma, watch
//! the kernel-flavored log stream, get the verdict panel. One run is in
//! flight at a time by construction; empty input never invokes the
//! pipeline at all.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use owo_colors::OwoColorize;
use zenith_common::config::ZenithConfig;
use zenith_common::pipeline::ZenithPipeline;

use crate::commands::run_with_spinner;
use crate::display;

/// Precondition for a pipeline run. Blank lines produce no verdict.
pub fn should_run(input: &str) -> bool {
    !input.trim().is_empty()
}

fn print_banner() {
    println!("{}", "ZENITH_OS_KERNEL_V2.4".dimmed());
    println!("Welcome to Zenith OS.");
    println!("Type your dilemma below to run a system audit.");
    println!("Type 'exit' to disconnect.");
    println!("{}", "--------------------------------------------".dimmed());
}

pub fn run() -> Result<()> {
    print_banner();

    let config = ZenithConfig::load()?;
    let pipeline = ZenithPipeline::new(&config)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", ">".green());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        if matches!(input, "exit" | "quit") {
            break;
        }
        if !should_run(input) {
            continue;
        }

        println!("{}", "> INITIALIZING KERNEL...".green());
        println!("{}", "> CONNECTING TO NEURAL NET...".green());
        println!("{}", "> UPLOADING CONTEXT...".green());

        let result = run_with_spinner(&pipeline, input);

        println!("{}", "> DIAGNOSTIC COMPLETE.".green());
        println!("{}", format!("> VERDICT: {}", result.verdict.as_str()).green());
        display::print_verdict(&result);
    }

    println!("{}", "CONNECTION CLOSED.".dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_never_reaches_the_pipeline() {
        assert!(!should_run(""));
        assert!(!should_run("   "));
        assert!(!should_run("\t\n"));
    }

    #[test]
    fn real_input_runs() {
        assert!(should_run("Should I quit my stable job to start a company?"));
        assert!(should_run("  padded  "));
    }
}
