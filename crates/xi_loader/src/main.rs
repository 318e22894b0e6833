//! Best XI CLI
//!
//! Schedule + roster → match list, squads, best XI picks

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use xi_core::{ApiResponse, BestXi, DataContext, RankingPreference, RiskPreference};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "best_xi")]
#[command(about = "Pick fantasy XI lineups for scheduled matches", long_about = None)]
struct Cli {
    /// Schedule file, one match per line
    #[arg(long, global = true, env = "XI_SCHEDULE_PATH", default_value = xi_loader::DEFAULT_SCHEDULE_PATH)]
    schedule: PathBuf,

    /// Roster CSV file
    #[arg(long, global = true, env = "XI_ROSTER_PATH", default_value = xi_loader::DEFAULT_ROSTER_PATH)]
    roster: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List scheduled matches with their indices
    Matches {
        /// Print the JSON envelope instead of a list
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List the players of both teams in a match
    Squad {
        /// Match index (0-based, as shown by `matches`)
        #[arg(long = "match")]
        match_index: usize,
    },

    /// Pick the best XI for a match
    Pick {
        /// Match index (0-based, as shown by `matches`)
        #[arg(long = "match")]
        match_index: usize,

        /// Player that must be in the lineup (repeatable)
        #[arg(long = "include")]
        include: Vec<String>,

        /// Risk profile: low, medium, high
        #[arg(long)]
        risk: Option<RiskPreference>,

        /// Ranking score: consistency, upside, points
        #[arg(long)]
        rank: Option<RankingPreference>,

        /// JSON request document (must_include_players, risk_rating, team_preference)
        #[arg(long)]
        request: Option<PathBuf>,

        /// Print the JSON envelope instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let (ctx, _stats) = xi_loader::load_context(&cli.schedule, &cli.roster)?;

    match cli.command {
        Commands::Matches { json } => {
            if json {
                println!("{}", ApiResponse::success(ctx.matches()).to_json_pretty()?);
            } else {
                for (idx, description) in ctx.matches().iter().enumerate() {
                    println!("{:>3}  {}", idx, description);
                }
            }
        }

        Commands::Squad { match_index } => {
            let (teams, players) = ctx.match_players(match_index)?;
            println!("{} vs {} ({} players)", teams.home, teams.away, players.len());
            for p in players {
                println!(
                    "   {:<28} {:<28} {:<8} {:<6} {:>8.1}",
                    p.full_name, p.team, p.position, p.risk, p.total_points
                );
            }
        }

        Commands::Pick { match_index, include, risk, rank, request, json } => {
            let mut selection = match request {
                Some(path) => xi_loader::load_request(&path)?,
                None => Default::default(),
            };
            selection = selection.must_include(include);
            if let Some(risk) = risk {
                selection.risk = risk;
            }
            if let Some(rank) = rank {
                selection.ranking = rank;
            }

            let result = ctx.best_xi(match_index, &selection);

            if json {
                let response = ApiResponse::from_result(result);
                println!("{}", response.to_json_pretty()?);
                if let Some(err) = response.error {
                    anyhow::bail!("{} ({})", err.message, err.code);
                }
            } else {
                print_best_xi(&ctx, &result?);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(feature = "cli")]
fn print_best_xi(ctx: &DataContext, result: &BestXi) {
    println!("\n✅ {}", result.match_description);
    println!("   Pool: {} roster entries", ctx.roster().len());

    for (i, p) in result.best_xi.iter().enumerate() {
        println!(
            "   {:>2}. {:<28} {:<28} {:<8} {:<6} {:>8.1}",
            i + 1,
            p.full_name,
            p.team,
            p.position,
            p.risk,
            p.total_points
        );
    }

    let counts = result.best_xi.tier_counts();
    println!(
        "\n   Risk mix: {} Low / {} Medium / {} High",
        counts.low, counts.medium, counts.high
    );
    println!("   Total:    {:.1} points", result.best_xi.total_points());
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("best_xi CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
