//! Zenith Control - CLI for the Zenith Protocol
//!
//! Browse the principle catalog, read the structured analysis report,
//! audit decision scenarios through the verdict pipeline, and export
//! share cards. All state is transient; nothing persists across runs.

mod commands;
mod console;
mod display;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use zenith_common::principles::Category;

#[derive(Parser)]
#[command(name = "zenithctl")]
#[command(about = "Zenith Protocol - anti-fragile decision support", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the principle catalog
    Principles {
        /// Show only one category
        #[arg(long, value_enum)]
        category: Option<CategoryFilter>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one principle in detail
    Show {
        /// Principle id (1-35)
        id: u32,
    },

    /// Render the structured analysis report
    Report,

    /// Audit a decision scenario against the 35 principles
    Audit {
        /// Free-text decision scenario
        scenario: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive console (type a dilemma, get a system audit)
    Console,

    /// Export a share card image for a principle
    Share {
        /// Principle id (1-35)
        id: u32,

        /// Output directory for the PNG
        #[arg(long, default_value = ".")]
        out: std::path::PathBuf,

        /// Skip image generation and use archive visuals
        #[arg(long)]
        offline: bool,
    },
}

/// CLI-facing category filter, mapped onto the catalog enum.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryFilter {
    Core,
    Strategy,
    Mindset,
    Relation,
    System,
}

impl From<CategoryFilter> for Category {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::Core => Category::Core,
            CategoryFilter::Strategy => Category::Strategy,
            CategoryFilter::Mindset => Category::Mindset,
            CategoryFilter::Relation => Category::Relation,
            CategoryFilter::System => Category::System,
        }
    }
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout stays clean for command output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Principles { category, json } => {
            commands::principles(category.map(Into::into), json)
        }
        Commands::Show { id } => commands::show(id),
        Commands::Report => commands::report(),
        Commands::Audit { scenario, json } => commands::audit(&scenario, json),
        Commands::Console => console::run(),
        Commands::Share { id, out, offline } => commands::share(id, &out, offline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_maps_onto_its_catalog_category() {
        let pairs = [
            (CategoryFilter::Core, Category::Core),
            (CategoryFilter::Strategy, Category::Strategy),
            (CategoryFilter::Mindset, Category::Mindset),
            (CategoryFilter::Relation, Category::Relation),
            (CategoryFilter::System, Category::System),
        ];
        for (filter, category) in pairs {
            assert_eq!(Category::from(filter), category);
        }
    }
}
