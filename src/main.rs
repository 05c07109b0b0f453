#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use salvo::{
    count_placements, fleet_fits, init_logging, print_grid, print_heatmap, random_placement, solve,
    Grid, HuntAndTarget, Probabilistic, Strategy, DEFAULT_GRID_SIZE, FLEET, MAX_SOLVE_ITERATIONS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum StrategyKind {
    Probabilistic,
    Hunt,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Pick a random board and solve it, printing every turn.
    Solve {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for a reproducible board (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = StrategyKind::Probabilistic)]
        strategy: StrategyKind,
        #[arg(long, default_value_t = MAX_SOLVE_ITERATIONS)]
        max_iterations: usize,
        #[arg(long, help = "Print one JSON object per turn instead of tables")]
        json: bool,
    },
    /// Count every placement of the fleet on an empty grid.
    Count {
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            size,
            seed,
            strategy,
            max_iterations,
            json,
        } => {
            if !fleet_fits(size, &FLEET) {
                anyhow::bail!("fleet does not fit on a {}x{} grid", size, size);
            }
            if let Some(s) = seed {
                log::info!("Using fixed seed: {} (board will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let board = random_placement(&Grid::new(size), &FLEET, &mut rng)
                .ok_or_else(|| anyhow::anyhow!("no placement of the fleet on a {}x{} grid", size, size))?;
            let mut player: Box<dyn Strategy> = match strategy {
                StrategyKind::Probabilistic => Box::new(Probabilistic::new(&FLEET)),
                StrategyKind::Hunt => Box::new(HuntAndTarget),
            };

            if json {
                println!("{}", serde_json::json!({ "shot": 0, "grid": &board }));
            } else {
                println!("Ground truth ({}):", player.name());
                print_grid(&board);
            }
            let mut shot = 0;
            let report = solve(board, player.as_mut(), max_iterations, |turn| {
                shot += 1;
                if json {
                    let line = serde_json::json!({
                        "shot": shot,
                        "target": [turn.target.0, turn.target.1],
                        "outcome": turn.outcome,
                        "grid": &turn.grid,
                        "heatmap": &turn.heatmap,
                    });
                    println!("{}", line);
                } else {
                    if let Some(heatmap) = &turn.heatmap {
                        print_heatmap(heatmap);
                    }
                    println!(
                        "\nShot {} at {}{}: {:?}",
                        shot,
                        (b'A' + (turn.target.0 % 26) as u8) as char,
                        turn.target.1 + 1,
                        turn.outcome
                    );
                    print_grid(&turn.grid);
                }
            })?;

            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": report.status,
                        "shots": report.shots,
                        "hits": report.hits,
                    })
                );
            } else {
                println!(
                    "\n{:?} after {} shots ({} hits).",
                    report.status, report.shots, report.hits
                );
            }
        }
        Commands::Count { size } => {
            let total = count_placements(&Grid::new(size), &FLEET);
            println!("{} placements of {} ships on a {}x{} grid", total, FLEET.len(), size, size);
        }
    }
    Ok(())
}
