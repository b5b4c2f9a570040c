//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a ScoreRequest. Output lines are either:
//! - A CompletionStats or SprsReport (depending on the requested op)
//! - An ErrorOutput (when parsing or calculation fails)
//!
//! Blank lines are skipped.

use scoring_engine::types::ErrorOutput;
use scoring_engine::{run, ScoreRequest};
use std::io::{self, BufRead, Write};

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "scoring-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let request: ScoreRequest = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(format!("json parse: {}", e));
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    match run(&request) {
      Ok(outcome) => {
        let _ = serde_json::to_writer(&mut out, &outcome);
        let _ = writeln!(out);
      }
      Err(e) => {
        let err = ErrorOutput::new(e.to_string());
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
      }
    }
  }

  let _ = out.flush();
}
