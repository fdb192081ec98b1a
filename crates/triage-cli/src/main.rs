use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use triage_core::error::TriageError;
use triage_core::extract::VocabularyExtractor;
use triage_core::session::{TriageEngine, TriageService, TurnReply};
use triage_core::settings::TriageSettings;
use triage_core::catalog::CatalogRepository;
use triage_infrastructure::{
    FileDiagnosisLog, TomlCatalogRepository, TomlSessionRepository, TriagePaths,
};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "/help".to_string(),
                "/restart".to_string(),
                "/quit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Basic user details collected before the chat starts.
struct UserInfo {
    name: String,
    age: u32,
    gender: String,
}

/// Prompts for name, age, and gender, re-asking until each is valid.
fn collect_user_info(rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>) -> Result<UserInfo> {
    let name = loop {
        let input = rl.readline("Enter your name: ")?;
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            break trimmed.to_string();
        }
        println!("{}", "Please fill in your name to proceed.".yellow());
    };

    let age = loop {
        let input = rl.readline("Enter your age: ")?;
        match input.trim().parse::<u32>() {
            Ok(age) if (1..=120).contains(&age) => break age,
            _ => println!("{}", "Please enter an age between 1 and 120.".yellow()),
        }
    };

    let gender = loop {
        let input = rl.readline("Select your gender (male/female/other): ")?;
        let normalized = input.trim().to_lowercase();
        if ["male", "female", "other"].contains(&normalized.as_str()) {
            break normalized;
        }
        println!("{}", "Please answer male, female, or other.".yellow());
    };

    Ok(UserInfo { name, age, gender })
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  /help     Show this help");
    println!("  /restart  Discard the current triage and start over");
    println!("  /quit     Exit");
    println!();
    println!("Describe your symptoms in plain language, then answer the");
    println!("follow-up questions with 'yes' or 'no'.");
}

fn print_reply(reply: &TurnReply) {
    match reply {
        TurnReply::Question(msg) => println!("{}", msg.bright_cyan()),
        TurnReply::Reprompt(msg) | TurnReply::NoMatch(msg) => println!("{}", msg.yellow()),
        TurnReply::Diagnosis(msg) => {
            println!("{}", msg.green());
            println!("{}", "Type /restart to begin a new triage.".dimmed());
        }
        TurnReply::SessionOver(msg) => println!("{}", msg.yellow()),
    }
}

/// The main entry point for the triage REPL.
///
/// Sets up tracing, loads the catalog, wires the session store and
/// diagnosis log, collects the user's details, and then runs the chat
/// loop: one message in, one reply out, until /quit or EOF.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths = TriagePaths::default_location()?;
    paths.ensure_dirs()?;

    let catalog = TomlCatalogRepository::from_paths(&paths).load_all().await?;
    let extractor = VocabularyExtractor::from_catalog(&catalog)?;
    let engine = TriageEngine::new(catalog, extractor, TriageSettings::default())?;
    let store = Arc::new(TomlSessionRepository::from_paths(&paths)?);
    let log = Arc::new(FileDiagnosisLog::from_paths(&paths));
    let service = TriageService::new(engine, store, log);

    // One conversation per CLI run.
    let conversation_id = uuid::Uuid::new_v4().to_string();

    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "Medical Assistant".bold());
    println!("{}", "Not a clinical tool; see a doctor for medical concerns.".dimmed());
    println!();

    let user = collect_user_info(&mut rl)?;
    println!();
    println!(
        "Hello {} ({}, {}). Describe your symptoms to begin.",
        user.name.bold(),
        user.age,
        user.gender
    );
    println!("{}", "Type /help for commands.".dimmed());

    loop {
        match rl.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match line.as_str() {
                    "/quit" => break,
                    "/help" => {
                        print_help();
                        continue;
                    }
                    "/restart" => {
                        service.reset(&conversation_id).await?;
                        println!("{}", "Session restarted. Describe your symptoms.".green());
                        continue;
                    }
                    _ => {}
                }

                match service.handle_message(&conversation_id, &line).await {
                    Ok(reply) => print_reply(&reply),
                    Err(e @ TriageError::InvariantViolation(_)) => {
                        // Corrupted session state is unrecoverable in place.
                        eprintln!("{} {}", "session corrupted:".red(), e);
                        service.reset(&conversation_id).await?;
                        println!("{}", "Session restarted. Describe your symptoms.".yellow());
                    }
                    Err(e) => {
                        eprintln!("{} {}", "error:".red(), e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("{}", "Take care!".bold());
    Ok(())
}
