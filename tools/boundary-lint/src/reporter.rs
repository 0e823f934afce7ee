use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::CheckResult;

pub fn print_header() {
    println!(
        "{}",
        "\n=== Boundary Tag Validation ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(result: &CheckResult) {
    if result.passed {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            format!("clean ({} examined)", result.examined)
                .if_supports_color(Stdout, |s| s.green()),
        );
        return;
    }

    println!(
        "{} {}: {}",
        "\u{2717}".if_supports_color(Stdout, |s| s.red()),
        result.name,
        format!(
            "{} flagged of {} examined",
            result.flags.len(),
            result.examined
        )
        .if_supports_color(Stdout, |s| s.red()),
    );
    println!();
    for flag in &result.flags {
        println!(
            "  {}",
            format!("relation {}", flag.identifier).if_supports_color(Stdout, |s| s.bold())
        );
        for instruction in &flag.instructions {
            println!("    {}", instruction.if_supports_color(Stdout, |s| s.dimmed()));
        }
    }
    println!();
}

/// Machine-readable output: the whole result as one JSON document.
pub fn write_json<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}
