//! tagmend CLI: append synthetic closing tags to partial markup.
//!
//! Reads markup from a file (or stdin), completes it, and prints the result.
//! `--chunk N` feeds the input through a [`PreviewSession`] in N-byte chunks
//! to exercise the same path a streaming caller uses.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mimalloc::MiMalloc;
use preview::PreviewSession;
use preview::chunker::ChunkPlan;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[command(name = "tagmend", version, about = "Complete partial markup by closing open tags")]
struct Args {
    /// Input file; reads stdin when absent.
    path: Option<PathBuf>,

    /// Simulate a live stream: feed the input in N-byte chunks through a
    /// preview session and print the renderable view of the open stream.
    #[arg(long, value_name = "N")]
    chunk: Option<usize>,

    /// With --chunk, log the renderable view after every chunk at debug level.
    #[arg(long, requires = "chunk")]
    trace_chunks: bool,

    /// Exit non-zero when the input is not already tag-balanced; print nothing.
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tagmend: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let input = read_input(args.path.as_deref())?;

    if args.check {
        return Ok(if markup::is_balanced(&input) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let output = match args.chunk {
        Some(size) => complete_chunked(&input, size, args.trace_chunks),
        None => markup::complete(&input),
    };
    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn complete_chunked(input: &str, size: usize, trace: bool) -> String {
    let mut session = PreviewSession::new();
    ChunkPlan::fixed(size.max(1)).for_each_chunk(input, |chunk| {
        session.push_str(chunk);
        if trace {
            let source_len = session.source().len();
            log::debug!(
                target: "tagmend",
                "renderable after {source_len} bytes: {}",
                session.renderable()
            );
        }
    });
    session.renderable().to_string()
}
