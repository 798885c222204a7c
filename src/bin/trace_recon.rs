use std::env;
use std::process;
use std::time::Instant;

use trace_recon::input::{read_trace_file, TraceSet};
use trace_recon::utils::format_symbols;
use trace_recon::{engine::select_path, Reconstruction, TraceCollection, TraceEngine};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("trace_recon: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let start = Instant::now();
    let set = match read_trace_file(&options.sequences_file) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("trace_recon: {}: {err}", options.sequences_file);
            process::exit(1);
        }
    };

    let backing = if options.trie {
        Backing::Trie
    } else {
        Backing::Matrix
    };

    if let Err(err) = run(&options, &set, start, backing) {
        eprintln!("trace_recon: {err}");
        process::exit(1);
    }
}

#[derive(Copy, Clone)]
enum Backing {
    Matrix,
    Trie,
}

impl Backing {
    fn name(self) -> &'static str {
        match self {
            Backing::Matrix => "matrix",
            Backing::Trie => "trie",
        }
    }
}

fn run(
    options: &Options,
    set: &TraceSet,
    start: Instant,
    backing: Backing,
) -> trace_recon::Result<()> {
    match backing {
        Backing::Matrix => {
            let matrix = set.to_matrix()?;
            reconstruct(options, matrix, start, backing)
        }
        Backing::Trie => {
            let trie = set.to_trie()?;
            reconstruct(options, trie, start, backing)
        }
    }
}

fn reconstruct<C: TraceCollection>(
    options: &Options,
    traces: C,
    start: Instant,
    backing: Backing,
) -> trace_recon::Result<()> {
    println!(
        "Constructing the {} took {:.4} ms.",
        backing.name(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let path = select_path(options.n, traces.height())?;
    println!("Reconstructing x from {path} {}", backing.name());

    let engine = TraceEngine::new(options.n, traces);
    let start = Instant::now();
    let result = engine.run()?;
    let elapsed = start.elapsed();

    if options.verbose {
        print_steps(&result);
    }
    println!(
        "Reconstruction took {:.4} ms. Result:",
        elapsed.as_secs_f64() * 1000.0
    );
    println!("{}", format_symbols(&result.symbols));
    Ok(())
}

fn print_steps(result: &Reconstruction) {
    println!("Took {} iterations", result.iterations());
    for (idx, step) in result.steps.iter().enumerate() {
        let threshold = step
            .threshold
            .map_or_else(|| "-".to_string(), |j| j.to_string());
        println!(
            "  [{idx}] n={} t={} threshold={threshold} emitted=[{}] kept={}",
            step.n,
            step.t,
            format_symbols(&step.emitted),
            step.remaining
        );
    }
}

struct Options {
    n: usize,
    sequences_file: String,
    trie: bool,
    verbose: bool,
}

impl Options {
    fn parse<I, T>(args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut positional = Vec::new();
        let mut trie = false;
        let mut verbose = false;

        for arg in args {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if arg == "--trie" || arg == "-t" {
                trie = true;
            } else if arg == "--verbose" || arg == "-v" {
                verbose = true;
            } else if arg.starts_with('-') {
                return Err(format!("unrecognized argument '{arg}'"));
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        let n = positional
            .next()
            .ok_or_else(|| "missing original sequence size <n>".to_string())?
            .parse::<usize>()
            .map_err(|_| "n must be a non-negative integer".to_string())?;
        let sequences_file = positional
            .next()
            .ok_or_else(|| "missing <sequences_file>".to_string())?;
        if let Some(extra) = positional.next() {
            return Err(format!("unexpected argument '{extra}'"));
        }

        Ok(Self {
            n,
            sequences_file,
            trie,
            verbose,
        })
    }

    fn print_help() {
        println!(
            "\
Reconstruct a binary sequence from a list of sub/super-sequences

Usage: trace_recon <n> <sequences_file> [options]

Arguments:
  <n>                 Original sequence size
  <sequences_file>    Binary sub/super-sequences of the original sequence, all of
                      the same length, one per line, symbols separated by spaces

Options:
  -t, --trie          Store sequences in a trie (default: matrix)
  -v, --verbose       Print every reconstruction step
  -h, --help          Print this help message

Examples:
  cargo run --bin trace_recon -- 3 traces.txt
  cargo run --bin trace_recon -- 3 traces.txt --trie --verbose
"
        );
    }
}
