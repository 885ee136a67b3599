//! Command-line interface for drills
//! Runs each drill from the shell.
//!
//! Usage:
//!   drills fare `<from>` `<to>` --fare `<n>` [--json]    - Enter at one station, exit at another
//!   drills synth `<phrase>` [--effect `<effect>`]...     - Play a phrase through an effect chain
//!   drills hash-syntax `<text>`                        - Rewrite `:key => value` pairs
//!   drills length `<value>` [--from `<unit>`] [--to `<unit>`]
//!   drills hex `<r>` `<g>` `<b>` / drills rgb `<color>`
//!   drills fizz-buzz `<n>`
//!   drills stations                                  - List the configured line

use clap::{Arg, ArgAction, ArgMatches, Command};
use drills::config::DrillsConfig;
use drills::convert::{convert_hash_syntax, convert_length, to_hex, to_ints, Unit};
use drills::fizz_buzz::fizz_buzz;
use drills::synth::{EffectKind, WordSynth};
use drills::transit::{Gate, Ticket};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli().get_matches();

    // Global flags are propagated into whichever subcommand ran
    if let Some((_, sub)) = matches.subcommand() {
        init_tracing(sub.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("fare", sub)) => handle_fare_command(sub),
        Some(("synth", sub)) => handle_synth_command(sub),
        Some(("hash-syntax", sub)) => {
            let text = sub.get_one::<String>("text").unwrap();
            println!("{}", convert_hash_syntax(text));
        }
        Some(("length", sub)) => {
            let value = *sub.get_one::<f64>("value").unwrap();
            let from = *sub.get_one::<Unit>("from").unwrap();
            let to = *sub.get_one::<Unit>("to").unwrap();
            println!("{}", convert_length(value, from, to));
        }
        Some(("hex", sub)) => {
            let channel = |name: &str| *sub.get_one::<u8>(name).unwrap();
            println!("{}", to_hex(channel("r"), channel("g"), channel("b")));
        }
        Some(("rgb", sub)) => handle_rgb_command(sub.get_one::<String>("color").unwrap()),
        Some(("fizz-buzz", sub)) => {
            let n = *sub.get_one::<u64>("n").unwrap();
            for i in 1..=n {
                println!("{}", fizz_buzz(i));
            }
        }
        Some(("stations", sub)) => handle_stations_command(sub),
        _ => unreachable!(),
    }
}

fn cli() -> Command {
    Command::new("drills")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Small text and arithmetic drills")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in configuration"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v for debug, -vv for trace)"),
        )
        .subcommand(
            Command::new("fare")
                .about("Enter at one station and try to exit at another")
                .arg(Arg::new("from").help("Entry station").required(true).index(1))
                .arg(Arg::new("to").help("Exit station").required(true).index(2))
                .arg(
                    Arg::new("fare")
                        .long("fare")
                        .help("Fare paid for the ticket")
                        .required(true)
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the fare check as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("synth")
                .about("Play a phrase through an effect chain")
                .arg(Arg::new("phrase").required(true).index(1))
                .arg(
                    Arg::new("effect")
                        .long("effect")
                        .short('e')
                        .help("Effect to add: reverse, echo:<rate> or loud:<level> (repeatable)")
                        .action(ArgAction::Append)
                        .value_parser(|s: &str| s.parse::<EffectKind>()),
                ),
        )
        .subcommand(
            Command::new("hash-syntax")
                .about("Rewrite `:key => value` pairs as `key: value`")
                .arg(Arg::new("text").required(true).index(1)),
        )
        .subcommand(
            Command::new("length")
                .about("Convert a length between m, ft and in")
                .arg(
                    Arg::new("value")
                        .required(true)
                        .index(1)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .default_value("m")
                        .value_parser(|s: &str| s.parse::<Unit>()),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .default_value("m")
                        .value_parser(|s: &str| s.parse::<Unit>()),
                ),
        )
        .subcommand(
            Command::new("hex")
                .about("Format RGB channels as #rrggbb")
                .arg(channel_arg("r", 1))
                .arg(channel_arg("g", 2))
                .arg(channel_arg("b", 3)),
        )
        .subcommand(
            Command::new("rgb")
                .about("Parse #rrggbb into RGB channels")
                .arg(Arg::new("color").required(true).index(1)),
        )
        .subcommand(
            Command::new("fizz-buzz")
                .about("Count from 1 to n, FizzBuzz style")
                .arg(
                    Arg::new("n")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(Command::new("stations").about("List stations and fares of the configured line"))
}

fn channel_arg(name: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .required(true)
        .index(index)
        .value_parser(clap::value_parser!(u8))
}

/// Base log level for the number of `-v` flags
fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` directives refine the level picked by `-v`
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(verbosity).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Load the built-in configuration, layered with `--config` if given
fn load_config(matches: &ArgMatches) -> DrillsConfig {
    let user_file = matches.get_one::<String>("config").map(Path::new);
    DrillsConfig::load(user_file)
        .unwrap_or_else(|e| fail(format!("loading configuration: {}", e)))
}

/// Handle the fare command
fn handle_fare_command(sub: &ArgMatches) {
    let config = load_config(sub);
    let line = config.line();
    let from = sub.get_one::<String>("from").unwrap();
    let to = sub.get_one::<String>("to").unwrap();
    let fare = *sub.get_one::<u32>("fare").unwrap();

    let mut ticket = Ticket::new(fare);
    Gate::on(line, from.as_str()).enter(&mut ticket);
    let quote = Gate::on(line, to.as_str())
        .quote(&ticket)
        .unwrap_or_else(|e| fail(e));

    if sub.get_flag("json") {
        let json = serde_json::to_string_pretty(&quote).unwrap_or_else(|e| fail(e));
        println!("{}", json);
    } else {
        let verdict = if quote.accepted { "OK" } else { "REJECTED" };
        println!(
            "{}: {} -> {} needs {}, paid {}",
            verdict, quote.from, quote.to, quote.required, quote.paid
        );
    }
}

/// Handle the synth command
fn handle_synth_command(sub: &ArgMatches) {
    let phrase = sub.get_one::<String>("phrase").unwrap();
    let synth: WordSynth = match sub.get_many::<EffectKind>("effect") {
        Some(effects) => effects.copied().collect(),
        None => load_config(sub).word_synth(),
    };
    debug!(effects = synth.len(), "playing phrase");
    println!("{}", synth.play(phrase));
}

/// Handle the rgb command
fn handle_rgb_command(color: &str) {
    let [r, g, b] = to_ints(color).unwrap_or_else(|e| fail(e));
    println!("{} {} {}", r, g, b);
}

/// Handle the stations command
fn handle_stations_command(matches: &ArgMatches) {
    let config = load_config(matches);
    let line = config.line();
    println!("Stations ({}):", line.stations().len());
    for station in line.stations() {
        println!("  {}", station);
    }
    println!("Fares:");
    for (index, fare) in line.fares().iter().enumerate() {
        println!("  {} stop(s): {}", index + 1, fare);
    }
}
