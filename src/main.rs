//! Purpose: `linear-collections` CLI entry point: container demo and benchmark harness.
//! Role: Binary crate root; parses args, initializes logging, dispatches commands.
//! Invariants: Demo and bench output go to stdout; logs and diagnostics go to stderr.
//! Invariants: Errors are emitted as text on a TTY and as JSON otherwise.
//! Invariants: Process exit code is derived from `to_exit_code`.
use std::error::Error as StdError;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod bench;
mod command_dispatch;
mod demo;

use demo::DemoSection;
use linear_collections::{Error, ErrorKind, to_exit_code};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Try `linear-collections --help`."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    init_tracing();
    let color_mode = cli.color;
    command_dispatch::dispatch_command(cli.command).map_err(|err| (err, color_mode))
}

#[derive(Parser)]
#[command(
    name = "linear-collections",
    version,
    about = "Stack, queue, and singly linked list: demo and benchmarks",
    long_about = None,
    after_help = r#"EXAMPLES
  $ linear-collections demo
  $ linear-collections demo --section list
  $ linear-collections bench --sizes 100,1000 --format json

LOGGING
  Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr."#,
    arg_required_else_help = true
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Trace every container operation",
        after_help = r#"EXAMPLES
  $ linear-collections demo
  $ linear-collections demo --section practical"#
    )]
    Demo {
        #[arg(long, value_enum, default_value = "all", help = "Section to run")]
        section: DemoSection,
    },
    #[command(
        about = "Time operation batches per container and input size",
        long_about = r#"Time push/pop, enqueue/dequeue, and append/prepend/insert batches against
each container and a plain Vec baseline, then compare index and sequential access."#,
        after_help = r#"EXAMPLES
  $ linear-collections bench
  $ linear-collections bench --sizes 1000,100000 --list-limit 100000
  $ linear-collections bench --format both --out report.json

NOTES
  - Linked list batches only run for sizes <= --list-limit
  - --access-size 0 skips the access pattern comparison
  - Build with --release for meaningful numbers"#
    )]
    Bench {
        #[arg(
            long,
            value_delimiter = ',',
            default_values_t = bench::DEFAULT_SIZES,
            help = "Comma-separated input sizes"
        )]
        sizes: Vec<usize>,
        #[arg(
            long,
            default_value_t = bench::DEFAULT_LIST_LIMIT,
            help = "Largest size for linked list batches"
        )]
        list_limit: usize,
        #[arg(
            long,
            default_value_t = bench::DEFAULT_ACCESS_SIZE,
            help = "Size for the access pattern comparison"
        )]
        access_size: usize,
        #[arg(long, default_value = "table", help = "Output format: json|table|both")]
        format: String,
        #[arg(
            long,
            help = "Also write the JSON report to this path",
            value_hint = ValueHint::FilePath
        )]
        out: Option<PathBuf>,
    },
    #[command(about = "Print version info")]
    Version,
    #[command(arg_required_else_help = true, about = "Generate shell completions")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn emit_version_output() {
    if io::stdout().is_terminal() {
        println!("linear-collections {}", env!("CARGO_PKG_VERSION"));
    } else {
        let value = json!({
            "name": "linear-collections",
            "version": env!("CARGO_PKG_VERSION"),
        });
        println!("{value}");
    }
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::EmptyContainer => "container is empty".to_string(),
        ErrorKind::IndexOutOfRange => "index out of range".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(index) = err.index() {
        inner.insert("index".to_string(), json!(index));
    }
    if let Some(bound) = err.bound() {
        inner.insert("bound".to_string(), json!(bound));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(index) = err.index() {
        lines.push(format!(
            "{} {index}",
            colorize_label("index:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(bound) = err.bound() {
        let valid = match bound {
            0 => "none, container is empty".to_string(),
            _ => format!("[0, {}]", bound - 1),
        };
        lines.push(format!(
            "{} {valid}",
            colorize_label("valid:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, error_json, error_text};
    use clap::Parser;
    use linear_collections::{Error, ErrorKind};

    #[test]
    fn error_text_respects_color_flag() {
        let err = Error::new(ErrorKind::Usage).with_message("bad input");
        let colored = error_text(&err, true);
        let plain = error_text(&err, false);
        assert!(colored.contains("\u{1b}[31merror:\u{1b}[0m"));
        assert!(plain.contains("error: bad input"));
        assert!(!plain.contains("\u{1b}["));
    }

    #[test]
    fn error_json_carries_index_context() {
        let err = Error::out_of_range(7, 3);
        let value = error_json(&err);
        assert_eq!(value["error"]["kind"], "IndexOutOfRange");
        assert_eq!(value["error"]["index"], 7);
        assert_eq!(value["error"]["bound"], 3);
        assert!(value["error"].get("hint").is_none());
    }

    #[test]
    fn error_text_shows_index_and_valid_range() {
        let text = error_text(&Error::out_of_range(10, 4), false);
        assert_eq!(
            text,
            "error: index 10 out of range\nindex: 10\nvalid: [0, 3]"
        );

        let empty = error_text(&Error::out_of_range(0, 0), false);
        assert!(empty.ends_with("valid: none, container is empty"));
    }

    #[test]
    fn bench_sizes_parse_comma_separated() {
        let cli = Cli::try_parse_from(["linear-collections", "bench", "--sizes", "5,50"])
            .expect("parse");
        match cli.command {
            Command::Bench { sizes, list_limit, .. } => {
                assert_eq!(sizes, vec![5, 50]);
                assert_eq!(list_limit, 1_000);
            }
            _ => panic!("expected bench"),
        }
    }

    #[test]
    fn bench_defaults_match_harness() {
        let cli = Cli::try_parse_from(["linear-collections", "bench"]).expect("parse");
        match cli.command {
            Command::Bench { sizes, format, out, .. } => {
                assert_eq!(sizes, vec![100, 1_000, 10_000]);
                assert_eq!(format, "table");
                assert!(out.is_none());
            }
            _ => panic!("expected bench"),
        }
    }
}
