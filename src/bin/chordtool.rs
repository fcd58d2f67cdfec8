use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use chord_engine::{process_input, suggest, EngineError, LearningStore, Lexicon};

#[derive(Parser)]
#[command(name = "chordtool", about = "Chorded braille autocorrect diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank dictionary words against one chord input
    Suggest {
        /// Path to the word list (lines of `word` or `language<TAB>word`;
        /// untabbed lines load as english)
        words_file: String,
        /// Chord input, e.g. "D+K D W+Q+O"
        input: String,
        /// Language to query
        #[arg(short, long, default_value = "english")]
        language: String,
        /// Number of suggestions to show
        #[arg(short = 'k', long, default_value = "5")]
        top: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a JSON corpus of {input, language, expected} cases
    Accuracy {
        /// Path to the word list
        words_file: String,
        /// Path to the corpus JSON file (array of cases; expected is a word
        /// array or the string "error")
        corpus_file: String,
        /// Show passing cases too (default: only failures)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Interactive loop: type chords, get suggestions
    Repl {
        /// Path to the word list
        words_file: String,
        /// Starting language
        #[arg(short, long, default_value = "english")]
        language: String,
    },
}

#[derive(Deserialize)]
struct CorpusCase {
    input: String,
    language: String,
    expected: Expected,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Expected {
    /// The literal string "error"
    Marker(String),
    Words(Vec<String>),
}

#[derive(Serialize)]
struct CaseResult {
    input: String,
    language: String,
    expected: String,
    got: String,
    pass: bool,
}

fn main() {
    chord_engine::trace_init::init_tracing(Path::new("."));
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Suggest {
            words_file,
            input,
            language,
            top,
            json,
        } => run_suggest(&words_file, &input, &language, top, json),
        Command::Accuracy {
            words_file,
            corpus_file,
            verbose,
            json,
        } => run_accuracy(&words_file, &corpus_file, verbose, json),
        Command::Repl {
            words_file,
            language,
        } => run_repl(&words_file, &language),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Load a word list into a fresh lexicon. Lines are `word` (english) or
/// `language<TAB>word`; blank lines and `#` comments are skipped.
fn load_lexicon(path: &str) -> Result<Lexicon, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let mut by_language: Vec<(String, Vec<String>)> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (language, word) = match line.split_once('\t') {
            Some((language, word)) => (language, word),
            None => ("english", line),
        };
        match by_language.iter_mut().find(|(l, _)| l == language) {
            Some((_, words)) => words.push(word.to_string()),
            None => by_language.push((language.to_string(), vec![word.to_string()])),
        }
    }

    let mut lexicon = Lexicon::new();
    for (language, words) in by_language {
        lexicon.load_dictionary(&words, &language)?;
    }
    Ok(lexicon)
}

fn run_suggest(
    words_file: &str,
    input: &str,
    language: &str,
    top: usize,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = load_lexicon(words_file)?;
    let learning = LearningStore::new();
    let results = suggest(&lexicon, &learning, input, language, top)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        println!("no suggestions");
    } else {
        for (rank, s) in results.iter().enumerate() {
            println!(
                "{:>2}. {:<16} distance={:.3} score={:.3}",
                rank + 1,
                s.word,
                s.distance,
                s.score
            );
        }
    }
    Ok(())
}

fn run_accuracy(
    words_file: &str,
    corpus_file: &str,
    verbose: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = load_lexicon(words_file)?;
    let mut learning = LearningStore::new();
    let corpus: Vec<CorpusCase> = serde_json::from_str(&fs::read_to_string(corpus_file)?)?;

    let mut results = Vec::new();
    let mut passed = 0usize;
    for case in &corpus {
        // Each case runs against a clean learning state.
        learning.reset();

        let (got, pass) =
            match process_input(&lexicon, &learning, &case.input, &case.language) {
                Ok(words) => {
                    let pass = matches!(&case.expected, Expected::Words(w) if *w == words);
                    (format!("{words:?}"), pass)
                }
                Err(e @ EngineError::InvalidKeys { .. }) => {
                    let pass =
                        matches!(&case.expected, Expected::Marker(m) if m == "error");
                    (e.to_string(), pass)
                }
                Err(e) => (e.to_string(), false),
            };
        if pass {
            passed += 1;
        }
        results.push(CaseResult {
            input: case.input.clone(),
            language: case.language.clone(),
            expected: match &case.expected {
                Expected::Marker(m) => m.clone(),
                Expected::Words(w) => format!("{w:?}"),
            },
            got,
            pass,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for r in &results {
        if r.pass && !verbose {
            continue;
        }
        let mark = if r.pass { "PASS" } else { "FAIL" };
        println!(
            "[{mark}] {} ({}): expected {}, got {}",
            r.input, r.language, r.expected, r.got
        );
    }
    let total = results.len();
    let pct = if total == 0 {
        100.0
    } else {
        100.0 * passed as f64 / total as f64
    };
    println!("{passed}/{total} passed ({pct:.1}%)");
    if passed != total {
        process::exit(1);
    }
    Ok(())
}

fn run_repl(words_file: &str, language: &str) -> Result<(), Box<dyn std::error::Error>> {
    let lexicon = load_lexicon(words_file)?;
    let mut learning = LearningStore::new();
    let mut language = language.to_string();

    println!("chordtool repl - language: {language}");
    println!("chords like D+K D W+Q+O; :lang <l> switches, :learn <word> records, :q quits");

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let line = input.trim();
        if line == ":q" {
            break;
        }
        if let Some(rest) = line.strip_prefix(":lang ") {
            language = rest.trim().to_string();
            println!("language: {language}");
            continue;
        }
        if let Some(rest) = line.strip_prefix(":learn ") {
            let word = rest.trim();
            learning.record_correction(word);
            println!("recorded correction for {word:?} (count {})", learning.count(word));
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match suggest(&lexicon, &learning, line, &language, 5) {
            Ok(results) if results.is_empty() => println!("no suggestions"),
            Ok(results) => {
                for (rank, s) in results.iter().enumerate() {
                    println!("  {}. {} (score {:.3})", rank + 1, s.word, s.score);
                }
            }
            Err(e) => println!("  {e}"),
        }
    }
    Ok(())
}
