use facecube::prelude::*;

use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;

const USAGE: &str = "usage: facecube [MOVES...] | facecube --scramble [LENGTH] [SEED]";

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let mut cube = Cube::solved();
    let moves: Vec<Move> = match args.first().map(String::as_str) {
        Some("-h" | "--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--scramble") => {
            let length = match args.get(1) {
                Some(s) => s.parse()?,
                None => DEFAULT_SCRAMBLE_LENGTH,
            };
            let mut rng = match args.get(2) {
                Some(s) => StdRng::seed_from_u64(s.parse()?),
                None => StdRng::from_entropy(),
            };

            let scramble = cube.clone().scramble(length, &mut rng);
            log::info!("Scramble: {}", scramble);
            scramble.into_iter().collect()
        }
        _ => Move::parse_sequence(&args.join(" "))?,
    };

    let history = StepLog::record(&mut cube, moves);
    for (i, step) in history.steps().iter().enumerate() {
        println!("{:>3} {:<2} {}", i + 1, step.move_.to_string(), step.state);
    }

    print!("{}", cube);
    println!("{}", cube.to_facelet_string());
    log::info!(
        "{} after {} moves",
        if cube.is_solved() { "Solved" } else { "Scrambled" },
        history.len()
    );

    Ok(())
}
