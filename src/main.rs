//! Two-Phase Rubik's Cube Solver
//!
//! Solves 3x3x3 scrambles with Kociemba's two-phase algorithm. The default
//! mode reads scramble lines interactively and prints the rendered cube
//! and its solution; `bench` solves a file of scrambles and reports timing
//! and length statistics. Precomputed tables are loaded from the data
//! directory, or generated and saved on first run.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use twophase::cube::Cube;
use twophase::moves::format_moves;
use twophase::render;
use twophase::solver::Solver;
use twophase::tables::Tables;

/// Solves 3x3x3 Rubik's Cube scrambles with the two-phase algorithm.
#[derive(Parser)]
#[command(name = "twophase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the precomputed table files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Read scrambles interactively and print solutions.
    Solve,
    /// Solve every scramble in a file and report timing statistics.
    Bench {
        /// File with one scramble per line.
        #[arg(default_value = "sc.txt")]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("Initializing tables...");
    let tables = Tables::load_or_generate(&cli.data_dir).context("table initialization failed")?;
    let solver = Solver::new(&tables);

    match cli.command {
        None | Some(Command::Solve) => run_interactive(&solver),
        Some(Command::Bench { file }) => run_bench(&solver, &file),
    }
}

/// Prompts for scrambles until `exit` or end of input.
fn run_interactive(solver: &Solver) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter scramble sequence (or 'exit' to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let scramble = line.trim();
        if scramble == "exit" {
            break;
        }
        if scramble.is_empty() {
            println!("No scramble entered, please try again.");
            continue;
        }

        let cube = match Cube::from_scramble(scramble) {
            Ok(cube) => cube,
            Err(err) => {
                eprintln!("{err}");
                println!("Please enter a valid scramble sequence.");
                continue;
            }
        };

        println!("Initial cube state:\n{}", render::render(&cube));
        println!("Solving...");

        let started = Instant::now();
        match solver.solve_phases(&cube) {
            Ok((phase1, phase2)) => {
                let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;
                println!("Phase 1: {} moves: {}", phase1.len(), format_moves(&phase1));
                println!("Phase 2: {} moves: {}", phase2.len(), format_moves(&phase2));

                let mut solution = phase1;
                solution.extend_from_slice(&phase2);
                println!(
                    "Solution found ({} moves in {:.1} ms):",
                    solution.len(),
                    elapsed_ms
                );
                println!("{}", format_moves(&solution));
            }
            Err(err) => eprintln!("An error occurred: {err}"),
        }
    }

    Ok(())
}

struct BenchResult {
    solve_time_ms: f64,
    solution_length: usize,
}

/// Solves every scramble in `file` and prints aggregate statistics.
fn run_bench(solver: &Solver, file: &Path) -> anyhow::Result<()> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("cannot open scramble file {}", file.display()))?;
    let scrambles: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if scrambles.is_empty() {
        bail!("no scrambles in {}", file.display());
    }

    println!("Loaded {} scrambles from {}", scrambles.len(), file.display());
    println!("Starting benchmark...\n");

    let mut results = Vec::with_capacity(scrambles.len());
    let mut failures = 0usize;
    for (i, scramble) in scrambles.iter().enumerate() {
        println!(
            "Processing scramble {}/{}: {}",
            i + 1,
            scrambles.len(),
            scramble
        );
        let solved = Cube::from_scramble(scramble).map_err(anyhow::Error::from).and_then(|cube| {
            let started = Instant::now();
            let solution = solver.solve(&cube)?;
            Ok((started.elapsed().as_secs_f64() * 1e3, solution.len()))
        });
        match solved {
            Ok((solve_time_ms, solution_length)) => {
                println!("  solved in {solve_time_ms:.2} ms, {solution_length} moves");
                results.push(BenchResult {
                    solve_time_ms,
                    solution_length,
                });
            }
            Err(err) => {
                println!("  failed: {err}");
                failures += 1;
            }
        }
    }

    print_statistics(&results, failures);
    Ok(())
}

fn print_statistics(results: &[BenchResult], failures: usize) {
    let total = results.len() + failures;
    println!("\n========== BENCHMARK RESULTS ==========");
    println!("Total scrambles: {total}");
    println!("Successful solves: {}", results.len());
    if results.is_empty() {
        println!("No successful solves.");
        return;
    }
    println!(
        "Success rate: {:.2}%",
        100.0 * results.len() as f64 / total as f64
    );

    let mut times: Vec<f64> = results.iter().map(|r| r.solve_time_ms).collect();
    let mut lengths: Vec<f64> = results.iter().map(|r| r.solution_length as f64).collect();
    times.sort_by(f64::total_cmp);
    lengths.sort_by(f64::total_cmp);

    report("SOLVE TIME STATISTICS (ms)", &times);
    report("SOLUTION LENGTH STATISTICS (moves)", &lengths);
    println!("\n=======================================");
}

/// Prints percentiles and summary statistics for a sorted sample.
fn report(title: &str, sorted: &[f64]) {
    println!("\n--- {title} ---");
    for pct in [90.0, 95.0, 99.0] {
        println!("{:.0}th percentile: {:.2}", pct, percentile(sorted, pct));
    }
    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    println!("Average: {mean:.2}");
    println!("Median: {:.2}", sorted[sorted.len() / 2]);
    println!("Min: {:.2}", sorted[0]);
    println!("Max: {:.2}", sorted[sorted.len() - 1]);
}

/// Nearest-rank percentile over an ascending sample.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let index = ((pct / 100.0) * (sorted.len() - 1) as f64) as usize;
    sorted[index.min(sorted.len() - 1)]
}
