use clap::{Args, Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use t9_core::config::Config;
use t9_core::persistence::save_snapshot;
use t9_core::trace_init::init_tracing;
use t9_core::{encode, KeypadCommand, Lookup, Strategy, TypingSession};

#[derive(Parser)]
#[command(name = "t9", about = "Keypad signature lookup and predictive typing")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct IndexArgs {
    /// Lookup strategy: sorted, hashed, trie or scan
    #[arg(long)]
    strategy: Option<Strategy>,
    /// Word list, one word per line
    #[arg(long)]
    dictionary: Option<PathBuf>,
    /// Prebuilt index snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the keypad signature of each word
    Encode {
        words: Vec<String>,
    },
    /// Print the words matching each signature
    Lookup {
        #[command(flatten)]
        index: IndexArgs,
        /// Print one JSON object instead of text lines
        #[arg(long)]
        json: bool,
        signatures: Vec<String>,
    },
    /// Build an index and save it as a snapshot
    Snapshot {
        #[command(flatten)]
        index: IndexArgs,
        /// Output file
        #[arg(long)]
        output: PathBuf,
    },
    /// Interactive keypad: 2-9 type, * next word, # delete, 0/space commit, Esc quit.
    /// Logging is off unless RUST_LOG is set, which will interleave with the input line.
    Simulate {
        #[command(flatten)]
        index: IndexArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> t9_core::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_tracing(log_filter(&cli.command, &config));

    match cli.command {
        Command::Encode { words } => {
            let signatures: Vec<String> = words.iter().map(|w| encode(w).to_string()).collect();
            println!("{}", signatures.join(" "));
        }
        Command::Lookup { index, json, signatures } => {
            let lookup = resolve(config, index).open_index()?;
            if json {
                let results: BTreeMap<&str, Vec<String>> = signatures
                    .iter()
                    .map(|sig| (sig.as_str(), lookup.query(sig).into_iter().collect()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for sig in &signatures {
                    let words: Vec<String> = lookup.query(sig).into_iter().collect();
                    println!("{} : [{}]", sig, words.join(", "));
                }
            }
        }
        Command::Snapshot { index, output } => {
            let built = resolve(config, index).open_index()?;
            save_snapshot(&built, &output)?;
            println!("Snapshot saved to '{}'", output.display());
        }
        Command::Simulate { index } => {
            let lookup = resolve(config, index).open_index()?;
            simulate(Arc::new(lookup))?;
        }
    }
    Ok(())
}

/// Log lines on stderr would break up the raw-mode input line, so the
/// simulator only logs when `RUST_LOG` asks for it.
fn log_filter<'a>(command: &Command, config: &'a Config) -> &'a str {
    match command {
        Command::Simulate { .. } => "off",
        _ => &config.log_filter,
    }
}

/// Command-line flags override the config file.
fn resolve(mut config: Config, args: IndexArgs) -> Config {
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if let Some(dictionary) = args.dictionary {
        config.dictionary = dictionary;
    }
    if args.snapshot.is_some() {
        config.snapshot = args.snapshot;
    }
    config
}

fn simulate(lookup: Arc<dyn Lookup>) -> t9_core::Result<()> {
    let strategy = lookup.strategy();
    let mut session = TypingSession::new(lookup);
    let renders = session.subscribe_channel();
    let mut stdout = io::stdout();

    println!("T9 keypad simulator ({strategy} lookup)");
    println!("2-9 type, * next word, # delete, 0 or space commit, Esc quits.");
    if !strategy.matches_prefixes() {
        println!("Note: {strategy} lookup only matches complete signatures.");
    }

    terminal::enable_raw_mode()?;
    let result = key_loop(&mut session, &renders, &mut stdout);
    terminal::disable_raw_mode()?;
    println!();
    result
}

fn key_loop(
    session: &mut TypingSession,
    renders: &std::sync::mpsc::Receiver<t9_core::RenderEvent>,
    stdout: &mut io::Stdout,
) -> t9_core::Result<()> {
    draw(stdout, "", &[])?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let command = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
            KeyCode::Backspace => Some(KeypadCommand::Backspace),
            KeyCode::Enter => Some(KeypadCommand::Commit),
            KeyCode::Tab => Some(KeypadCommand::Cycle),
            KeyCode::Char(c) => KeypadCommand::from_key(c),
            _ => None,
        };
        let Some(command) = command else {
            continue;
        };
        session.apply(command);
        while let Ok(render) = renders.try_recv() {
            draw(stdout, &render.text, session.candidates())?;
        }
    }
}

fn draw(stdout: &mut io::Stdout, text: &str, candidates: &[String]) -> io::Result<()> {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine)
    )?;
    write!(stdout, "> {text}")?;
    if candidates.len() > 1 {
        write!(stdout, "   ({} candidates)", candidates.len())?;
    }
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn simulator_is_silent_by_default() {
        let config = Config { log_filter: "t9_core=debug".into(), ..Config::default() };
        let cli = parse(&["t9", "simulate", "--strategy", "hashed"]);
        assert_eq!(log_filter(&cli.command, &config), "off");
    }

    #[test]
    fn other_commands_use_the_configured_filter() {
        let config = Config { log_filter: "t9_core=debug".into(), ..Config::default() };
        for args in [&["t9", "encode", "home"][..], &["t9", "lookup", "4663"][..]] {
            assert_eq!(log_filter(&parse(args).command, &config), "t9_core=debug");
        }
    }
}
