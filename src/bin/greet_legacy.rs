//! Greeting demo tool, legacy argument convention: one `TRELLIS_ARG_<KEY>`
//! environment variable per argument, keys upper-cased by the orchestrator.

use std::io;

use trellis_tool::args::ArgumentSet;
use trellis_tool::greet;

const TOOL_NAME: &str = "greet-legacy";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error in {TOOL_NAME}: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = ArgumentSet::from_legacy_env();
    let result = greet::run(&args);
    result.write_line(io::stdout().lock())?;
    Ok(())
}
