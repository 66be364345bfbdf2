//! Purpose: Hold top-level CLI command dispatch for `linear-collections`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Flag validation happens here; the harness and demo receive typed arguments.
use std::io;

use clap::CommandFactory;

use super::{Cli, Command, RunOutcome, emit_version_output};
use crate::bench::{self, BenchArgs, BenchFormat};
use crate::demo;
use linear_collections::Error;

pub(super) fn dispatch_command(command: Command) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(
                shell,
                &mut cmd,
                "linear-collections",
                &mut io::stdout(),
            );
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output();
            Ok(RunOutcome::ok())
        }
        Command::Demo { section } => {
            demo::run_demo(section, &mut io::stdout().lock())?;
            Ok(RunOutcome::ok())
        }
        Command::Bench {
            sizes,
            list_limit,
            access_size,
            format,
            out,
        } => {
            let args = BenchArgs {
                sizes,
                list_limit,
                access_size,
                format: BenchFormat::parse(&format)?,
                out,
            };
            tracing::debug!(?args, "starting bench");
            bench::run_bench(args, env!("CARGO_PKG_VERSION"))?;
            Ok(RunOutcome::ok())
        }
    }
}
