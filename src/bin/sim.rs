use salvo::{
    init_logging, random_placement, solve, Grid, HuntAndTarget, Probabilistic, SolveReport,
    Strategy, DEFAULT_GRID_SIZE, FLEET, MAX_SOLVE_ITERATIONS,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn run(board: &Grid, strategy: &mut dyn Strategy) -> anyhow::Result<SolveReport> {
    Ok(solve(board.clone(), strategy, MAX_SOLVE_ITERATIONS, |_| {})?)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_GRID_SIZE,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let board = random_placement(&Grid::new(size), &FLEET, &mut rng)
        .ok_or_else(|| anyhow::anyhow!("fleet does not fit on a {}x{} grid", size, size))?;

    let probabilistic = run(&board, &mut Probabilistic::new(&FLEET))?;
    let hunt = run(&board, &mut HuntAndTarget)?;

    let best = match probabilistic.shots.cmp(&hunt.shots) {
        std::cmp::Ordering::Less => Some("probabilistic"),
        std::cmp::Ordering::Greater => Some("hunt-and-target"),
        std::cmp::Ordering::Equal => None,
    };

    let result = json!({
        "seed": seed,
        "size": size,
        "probabilistic": {"status": probabilistic.status, "shots": probabilistic.shots, "hits": probabilistic.hits},
        "hunt_and_target": {"status": hunt.status, "shots": hunt.shots, "hits": hunt.hits},
        "fewest_shots": best,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
