mod debug_report;

use env_logger::{Builder, Env, Target};
use lotsize::{Options, normalize_verbose_with};
use std::io::{self, BufRead, IsTerminal};

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).target(Target::Stderr).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let inputs = match config.inputs {
        Some(inputs) => inputs,
        None => match read_stdin_lines() {
            Ok(lines) => lines,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    let opts = Options::default();
    for raw in &inputs {
        let res = normalize_verbose_with(raw, &opts);
        if config.verbose {
            debug_report::print_run(&res, config.color);
        } else {
            println!("{}", res.value);
        }
    }
}

struct CliConfig {
    /// `None` means read one raw value per line from stdin.
    inputs: Option<Vec<String>>,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut inputs: Vec<String> = Vec::new();
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("lotsize {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                inputs.push(value);
            }
            "--" => {
                inputs.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--input=") => {
                inputs.push(arg.trim_start_matches("--input=").to_string());
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
            _ => inputs.push(arg),
        }
    }

    let inputs = if inputs.is_empty() { None } else { Some(inputs) };
    Ok(CliConfig { inputs, verbose, color })
}

fn read_stdin_lines() -> Result<Vec<String>, String> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("error: failed to read stdin: {err}"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "lotsize {version}

Normalize raw real-estate lot-size fields into acres.

Usage:
  lotsize [OPTIONS] [--] <raw...>
  lotsize [OPTIONS] --input <raw>
  <source> | lotsize [OPTIONS]

Each positional argument is one raw value; quote values that contain spaces
or '|'. With no inputs, one raw value is read per line of stdin. One
normalized value is printed per input, in input order (empty line when no
rule matched).

Options:
  -i, --input <raw>          Raw value to normalize. May be repeated.
  -v, --verbose              Print a report per input: cleaned text, matched
                             rule, rules evaluated and skipped, timing.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (default: warn). NaN diagnostics are
                             logged at warn level to stderr.

Exit codes:
  0  Success.
  1  Failed to read stdin.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
