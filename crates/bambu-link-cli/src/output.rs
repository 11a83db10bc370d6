//! Run narration and the final report.
//!
//! Commands receive a `RunMode` and route user-facing text through here, so
//! stdout stays pipeline-safe in scripted runs: the only stdout line a
//! scripted generate run produces is the URL itself.

use colored::*;

use crate::cli::RunMode;

/// Print a narration line; dropped in scripted runs.
pub fn note(mode: RunMode, line: &str) {
    if mode == RunMode::Interactive {
        println!("{}", line);
    }
}

/// Print a title with an underline, interactive runs only.
pub fn banner(mode: RunMode, title: &str) {
    if mode == RunMode::Interactive {
        println!("{}", title);
        println!("{}", "=".repeat(title.len()));
    }
}

/// Print the final URL: framed report when interactive, bare line otherwise.
pub fn report_url(mode: RunMode, url: &str) {
    match mode {
        RunMode::Interactive => {
            println!();
            println!("{}", "=".repeat(50));
            println!("{}", "Stream URL generated:".green());
            println!("{}", url);
            println!("{}", "=".repeat(50));
            println!();
            println!("Use this URL with bambu_source or in your scripts.");
        }
        RunMode::Scripted => println!("{}", url),
    }
}
