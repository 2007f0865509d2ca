//! Greeting demo tool, current argument convention: the orchestrator passes
//! every argument in one JSON object via `TRELLIS_ARGS`.

use std::io;

use trellis_tool::args::ArgumentSet;
use trellis_tool::greet;

const TOOL_NAME: &str = "greet";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error in {TOOL_NAME}: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = ArgumentSet::from_env();
    let result = greet::run(&args);
    result.write_line(io::stdout().lock())?;
    Ok(())
}
