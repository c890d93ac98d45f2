use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soundex::{soundex, Encoding};

/// Words and the code each must produce. `None` marks words too short to
/// carry a code.
static CHECKS: [(&str, Option<&str>); 17] = [
    ("ashcraft", Some("A261")),
    ("ashcroft", Some("A261")),
    ("rubin", Some("R150")),
    ("robert", Some("R163")),
    ("rupert", Some("R163")),
    ("euler", Some("E460")),
    ("ellery", Some("E460")),
    ("gauss", Some("G200")),
    ("ghosh", Some("G200")),
    ("hilbert", Some("H416")),
    ("heilbronn", Some("H416")),
    ("knuth", Some("K530")),
    ("kant", Some("K530")),
    ("lloyd", Some("L430")),
    ("ladd", Some("L300")),
    ("lukasiewicz", Some("L200")),
    ("a", None),
];

#[derive(Parser, Debug)]
#[command(name = "soundex")]
#[command(about = "Compute Soundex phonetic codes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the Soundex code of each word
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// Print one JSON object per word instead of tab separated text
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in self-check battery
    Check,
}

#[derive(Debug)]
struct CheckOutcome {
    word: &'static str,
    expected: Option<&'static str>,
    actual: Option<String>,
}

impl CheckOutcome {
    fn passed(&self) -> bool {
        self.actual.as_deref() == self.expected
    }
}

fn run_checks() -> Result<Vec<CheckOutcome>> {
    CHECKS
        .iter()
        .map(|&(word, expected)| -> Result<CheckOutcome> {
            Ok(CheckOutcome {
                word,
                expected,
                actual: soundex(word)?,
            })
        })
        .collect()
}

/// One output line for `encoding`: a JSON object, or the word and its code
/// separated by a tab, with `-` standing in for a missing code.
fn render(encoding: &Encoding, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(encoding)?);
    }

    Ok(format!(
        "{}\t{}",
        encoding.word,
        encoding.code.as_deref().unwrap_or("-")
    ))
}

fn encode(words: &[String], json: bool) -> Result<()> {
    for word in words {
        let encoding = Encoding::new(word)?;
        tracing::debug!(word = %encoding.word, normalized = %encoding.normalized, "normalized word");

        println!("{}", render(&encoding, json)?);
    }

    Ok(())
}

fn check() -> Result<()> {
    let outcomes = run_checks()?;
    let failures = outcomes.iter().filter(|o| !o.passed()).count();

    for outcome in &outcomes {
        let status = if outcome.passed() {
            "ok".green()
        } else {
            "FAILED".red().bold()
        };

        println!(
            "{} {:<12} expected {:<5} got {}",
            status,
            outcome.word,
            outcome.expected.unwrap_or("-"),
            outcome.actual.as_deref().unwrap_or("-")
        );
    }

    if failures > 0 {
        bail!("{} of {} checks failed", failures, outcomes.len());
    }

    println!(
        "{}: {}",
        "Checks passed".bold(),
        outcomes.len().to_string().green()
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundex=info,soundex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Encode { words, json } => encode(&words, json),
        Command::Check => check(),
    }
}
