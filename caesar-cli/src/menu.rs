//! Interactive menu used when the binary is started without arguments.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use caesar_core::{DEFAULT_TOP_N, Listing, analyze, decrypt, encrypt};

use crate::report;

/// Prints `label` and reads one line; `None` on end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn parse_key(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .with_context(|| format!("invalid key '{}', expected an integer", raw))
}

/// Blank or unparsable input falls back to the default
fn parse_top_n(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(DEFAULT_TOP_N)
}

enum Step {
    Continue,
    Quit,
}

/// Runs the menu loop until the user quits or input ends
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    writeln!(out, "=== Caesar Cipher (Interactive Mode) ===")?;

    loop {
        writeln!(out)?;
        writeln!(out, "Choose a mode:")?;
        writeln!(out, "1) Encrypt")?;
        writeln!(out, "2) Decrypt")?;
        writeln!(out, "3) Analyze (brute-force)")?;
        writeln!(out, "4) Quit")?;

        let Some(choice) = prompt(input, out, "Enter choice (1-4): ")? else {
            writeln!(out)?;
            break;
        };

        let step = match choice.trim() {
            "1" => key_operation(input, out, "plaintext", "encrypt", encrypt)?,
            "2" => key_operation(input, out, "ciphertext", "decrypt", decrypt)?,
            "3" => analyze_operation(input, out)?,
            "4" => {
                writeln!(out, "Goodbye!")?;
                Step::Quit
            }
            other => {
                tracing::debug!(choice = other, "invalid menu choice");
                writeln!(out, "Invalid choice, try again.")?;
                Step::Continue
            }
        };

        if let Step::Quit = step {
            break;
        }
    }

    Ok(())
}

fn key_operation<R, W, F, E>(
    input: &mut R,
    out: &mut W,
    text_label: &str,
    name: &str,
    op: F,
) -> Result<Step>
where
    R: BufRead,
    W: Write,
    F: Fn(&str, i64) -> std::result::Result<String, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    let Some(text) = prompt(input, out, &format!("Enter {}: ", text_label))? else {
        return Ok(Step::Quit);
    };
    let Some(raw_key) = prompt(input, out, "Enter key (1-25): ")? else {
        return Ok(Step::Quit);
    };

    let result = parse_key(&raw_key).and_then(|key| Ok(op(&text, key)?));
    match result {
        Ok(output) => {
            writeln!(out)?;
            writeln!(out, "Result ({}):", name)?;
            writeln!(out, "{}", output)?;
        }
        Err(e) => {
            tracing::debug!(error = %e, "{} failed", name);
            writeln!(out, "Error: {:#}", e)?;
        }
    }
    Ok(Step::Continue)
}

fn analyze_operation<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Step> {
    let Some(text) = prompt(input, out, "Enter ciphertext to analyze: ")? else {
        return Ok(Step::Quit);
    };
    let Some(top) = prompt(input, out, "Show top N candidates (enter = 10): ")? else {
        return Ok(Step::Quit);
    };
    let Some(all) = prompt(input, out, "Show all candidates? (y/N): ")? else {
        return Ok(Step::Quit);
    };

    let listing = Listing::from_flags(parse_top_n(&top), all.trim().eq_ignore_ascii_case("y"));
    let analysis = analyze(&text);
    report::write_text(out, &analysis, listing)?;
    Ok(Step::Continue)
}
