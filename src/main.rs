use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aoc2023::AocError;

#[derive(Parser)]
#[command(name = "aoc2023", about = "Advent of Code 2023 solutions")]
struct Args {
    /// Puzzle day
    day: u8,

    /// Which half of the puzzle to answer
    #[arg(value_parser = clap::value_parser!(u8).range(1 ..= 2))]
    part: u8,

    /// Read `day<DAY>test<N>.in` instead of `day<DAY>.in`
    #[arg(long)]
    test: Option<u32>,

    /// Directory holding the input files
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,
}

impl Args {
    fn input_path(&self) -> PathBuf {
        let fname = match self.test {
            Some(test) => format!("day{}test{}.in", self.day, test),
            None => format!("day{}.in", self.day),
        };
        self.input_dir.join(fname)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let solve = aoc2023::solver(args.day)?;
    let path = args.input_path();
    info!(path = %path.display(), "reading input");
    let input = std::fs::read_to_string(&path)
        .map_err(|source| AocError::Io {path: path.clone(), source})?;

    let time = std::time::Instant::now();
    let answer = solve(args.part, &input)
        .with_context(|| format!("day {} part {}", args.day, args.part))?;
    println!("{}", answer);
    info!(seconds = time.elapsed().as_secs_f32(), "solved");
    Ok(())
}
