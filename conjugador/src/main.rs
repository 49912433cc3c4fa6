use std::io::{self, BufRead};

use clap::Parser;
use conjugador_lib::{conjugate, output, ConjugationError, Mood, Tense, Verb};

#[derive(Parser)]
#[command(name = "conjugador", about = "Spanish verb conjugator")]
struct Cli {
    /// Infinitive to conjugate. If omitted, reads infinitives from stdin.
    infinitive: Option<String>,

    /// English gloss stored on the verb.
    #[arg(long, default_value = "")]
    definition: String,

    /// Mood code (ind, sub, imp).
    #[arg(long, default_value = "ind")]
    mood: String,

    /// Tense code (pres, imp, pret, ...). Without it, every generated
    /// tense is printed.
    #[arg(long)]
    tense: Option<String>,

    /// Subject index 0-5 (yo through ellos/ellas/ustedes).
    #[arg(long, requires = "tense")]
    subject: Option<usize>,

    /// Output the verb with its full paradigm as JSON.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Print conjugation tables for the built-in verb list.
    #[arg(long)]
    demo: bool,
}

/// The original practice list: one verb per irregularity pattern.
const DEMO_VERBS: &[(&str, &str)] = &[
    ("hablar", "to speak"),
    ("escribir", "to write"),
    ("aprender", "to learn"),
    ("cazar", "to hunt"),
    ("leer", "to read"),
    ("oír", "to hear"),
    ("destruir", "to destroy"),
    ("traer", "to bring"),
];

fn main() {
    let cli = Cli::parse();

    if cli.demo {
        run_demo();
        return;
    }

    match cli.infinitive {
        Some(ref infinitive) => {
            if let Err(e) = process_verb(infinitive, &cli) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.expect("failed to read stdin");
                let infinitive = line.trim();
                if infinitive.is_empty() {
                    continue;
                }
                if let Err(e) = process_verb(infinitive, &cli) {
                    eprintln!("error: {e}");
                }
            }
        }
    }
}

fn process_verb(infinitive: &str, cli: &Cli) -> Result<(), ConjugationError> {
    let verb = Verb::new(infinitive, &cli.definition)?;

    if cli.json {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&verb)
        } else {
            serde_json::to_string(&verb)
        };
        println!("{}", json.expect("JSON serialization failed"));
        return Ok(());
    }

    match (&cli.tense, cli.subject) {
        (Some(tense), Some(subject)) => {
            println!("{}", conjugate(&verb, &cli.mood, tense, subject)?);
        }
        (Some(tense), None) => {
            let mood: Mood = cli.mood.parse()?;
            let tense: Tense = tense.parse()?;
            println!("{}", output::table(&verb, mood, tense)?);
        }
        // --subject without --tense is rejected at argument parsing.
        (None, _) => {
            println!("{}", output::full_table(&verb));
        }
    }
    Ok(())
}

fn run_demo() {
    for (infinitive, definition) in DEMO_VERBS {
        let verb = Verb::new(infinitive, definition)
            .expect("demo verb list contains a malformed infinitive");
        println!();
        println!("{}", output::full_table(&verb));
        println!("-----------------------------------------------");
    }
}
