use std::io::{BufRead, Write};

use dfa_suffix::prelude::*;

use tracing::{debug, error, info, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgAction, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("dfq")
        .about("Deterministic finite automaton queries")
        .subcommand_required(true)
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("file containing the description of the automaton")
                .default_value("automaton.txt"),
        )
        .subcommand(
            Command::new("check")
                .about("decides whether some accepted word has the form w1w0, where w0 is the given word")
                .arg(Arg::new("word").help("the word w0, read from stdin if omitted"))
                .arg(
                    Arg::new("witness")
                        .long("witness")
                        .action(ArgAction::SetTrue)
                        .help("also print an accepted word of the form w1w0w2"),
                ),
        )
        .subcommand(Command::new("show").about("prints a summary and the transition table"))
        .subcommand(Command::new("dot").about("prints the automaton in the DOT format"))
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

/// Returns the first whitespace separated token of `line`, or the empty word if there is none.
fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_string()
}

/// Prompts for `w0` and reads it from a single line of stdin.
fn prompt_word() -> std::io::Result<String> {
    print!("Enter w0: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(first_token(&line))
}

/// Takes `w0` from the arguments of `check`, prompting for it if it is absent.
fn word_to_check(matches: &ArgMatches) -> String {
    match matches.get_one::<String>("word") {
        Some(word) => word.clone(),
        None => match prompt_word() {
            Ok(word) => word,
            Err(e) => {
                error!("could not read w0 from stdin: {e}");
                eprintln!("could not read w0: {e}");
                std::process::exit(1);
            }
        },
    }
}

fn check(dfa: &DFA, word: &str, matches: &ArgMatches) {
    let start = std::time::Instant::now();
    let acceptable = accepts_as_suffix(word, dfa);
    info!("query took {}µs", start.elapsed().as_micros());

    println!("\nw = w1w0, where w0 = \"{word}\"");
    if acceptable {
        println!("Acceptable");
    } else {
        println!("Isn`t acceptable");
    }

    if matches.get_flag("witness") {
        match acceptance_witness(word, dfa) {
            Some(witness) => println!(
                "witness: \"{}\", reading w0 from state {}",
                witness.word(),
                witness.origin
            ),
            None => println!("no witness"),
        }
    }
}

pub fn main() {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let word = match matches.subcommand() {
        Some(("check", sub_matches)) => Some(word_to_check(sub_matches)),
        _ => None,
    };

    let path = matches
        .get_one::<String>("file")
        .map(String::as_str)
        .unwrap_or("automaton.txt");
    debug!("reading automaton from {path}");
    let dfa = match DFA::from_path(path) {
        Ok(dfa) => dfa,
        Err(e) => {
            error!("could not load automaton from {path}: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    debug!(
        "loaded automaton with {} states and {} transitions",
        dfa.state_count(),
        dfa.transitions().len()
    );

    match matches.subcommand() {
        Some(("check", sub_matches)) => {
            print!("{}", dfa.summary());
            check(&dfa, word.as_deref().unwrap_or_default(), sub_matches);
        }
        Some(("show", _)) => {
            print!("{}", dfa.summary());
            println!("{}", dfa.build_transition_table());
        }
        Some(("dot", _)) => println!("{}", dfa.dot_representation()),
        _ => unreachable!(),
    }
}
