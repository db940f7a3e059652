//! Report Builder CLI
//!
//! Box-score CSV -> benchmark tables -> enriched report datasets.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Build benchmark tables and enriched report datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Build benchmark tables from season box-score CSVs
    Benchmarks {
        /// Team box-score CSV (one row per team-game)
        #[arg(long)]
        team_box: PathBuf,

        /// Player box-score CSV (one row per player-game)
        #[arg(long)]
        player_box: Option<PathBuf>,

        /// Output directory for benchmark CSVs
        #[arg(long, default_value = "data/benchmarks")]
        out_dir: PathBuf,

        /// Season suffix for output file names (e.g. "2025")
        #[arg(long, default_value = "current")]
        season: String,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },

    /// Enrich a box-score CSV with percentile, tier and role columns
    Enrich {
        /// Benchmark CSV produced by the benchmarks command
        #[arg(long)]
        benchmarks: PathBuf,

        /// Input box-score CSV
        #[arg(long)]
        input: PathBuf,

        /// Output enriched CSV
        #[arg(long)]
        out: PathBuf,

        /// Treat input as player rows (position-aware percentiles + roles)
        #[arg(long, default_value = "false")]
        player: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Benchmarks {
            team_box,
            player_box,
            out_dir,
            season,
            metadata,
        } => {
            println!("🔨 Building benchmark tables...");
            println!("   Team box:   {}", team_box.display());
            if let Some(ref player_box) = player_box {
                println!("   Player box: {}", player_box.display());
            }
            println!("   Output dir: {}", out_dir.display());
            println!("   Season:     {}", season);

            let (team_rows, player_rows) = report_builder::build_benchmark_files(
                &team_box,
                player_box.as_deref(),
                &out_dir,
                &season,
            )?;

            println!("\n✅ Benchmarks built");
            println!("   Team metric rows:   {}", team_rows);
            println!("   Player metric rows: {}", player_rows);

            if let Some(metadata_path) = metadata {
                let meta = report_builder::RunMetadata::now(&season, 0, team_rows + player_rows);
                meta.save(&metadata_path)?;
                println!("📄 Metadata saved to: {}", metadata_path.display());
            }
        }

        Commands::Enrich {
            benchmarks,
            input,
            out,
            player,
            metadata,
        } => {
            println!("🔨 Enriching {} rows...", if player { "player" } else { "team" });
            println!("   Benchmarks: {}", benchmarks.display());
            println!("   Input:      {}", input.display());
            println!("   Output:     {}", out.display());

            let rows = if player {
                report_builder::enrich_player_file(&benchmarks, &input, &out)?
            } else {
                report_builder::enrich_team_file(&benchmarks, &input, &out)?
            };

            println!("\n✅ Enriched {} rows", rows);

            if let Some(metadata_path) = metadata {
                let meta = report_builder::RunMetadata::now("enrich", rows, rows);
                meta.save(&metadata_path)?;
                println!("📄 Metadata saved to: {}", metadata_path.display());
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("report_builder CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
