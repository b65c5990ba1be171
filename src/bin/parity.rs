//! Run every detected backend at one size and compare the canonical
//! spectra against the reference backend's output.

use std::process::ExitCode;

use clap::Parser;

use fftbench::{validate_all, Checker, Outcome, Registry, Signal};

/// Cross-check FFT backends for numerical agreement at a single size.
#[derive(Parser)]
struct Args {
    /// Transform length to validate
    #[arg(long, default_value_t = 1024)]
    size: usize,

    /// Absolute tolerance on the interior-bin deviation
    #[arg(long, default_value_t = 1e-3)]
    tolerance: f64,

    /// Boundary bins excluded from comparison at each spectrum edge
    #[arg(long, default_value_t = 2)]
    guard: usize,

    /// Seed for the generated input signal
    #[arg(long, default_value_t = fftbench::sweep::BASE_SEED)]
    seed: u64,

    /// Reference backend (defaults to the first detected backend)
    #[arg(long)]
    reference: Option<String>,

    /// List detected backends and their planning strategies, then exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let registry = Registry::detect();

    if args.list {
        for backend in registry.backends() {
            let tags: Vec<&str> = backend.strategies().iter().map(|s| s.tag()).collect();
            println!("{} ({})", backend.name(), tags.join(", "));
        }
        return ExitCode::SUCCESS;
    }

    let reference = match &args.reference {
        Some(name) => match registry.get(name) {
            Some(backend) => backend,
            None => {
                eprintln!("Error: unknown backend {name:?}");
                return ExitCode::FAILURE;
            }
        },
        None => match registry.reference() {
            Some(backend) => backend,
            None => {
                eprintln!("Error: no backends detected");
                return ExitCode::FAILURE;
            }
        },
    };

    let checker = Checker {
        tolerance: args.tolerance,
        guard: args.guard,
        ..Checker::default()
    };
    let signal = Signal::random(args.size, args.seed);

    match validate_all(&registry, reference, &signal, &checker) {
        Ok(reports) => {
            let mut failed = false;
            for report in &reports {
                println!("{report}");
                failed |= matches!(
                    report.outcome,
                    Outcome::ToleranceExceeded { .. } | Outcome::SizeMismatch { .. }
                );
            }
            if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
