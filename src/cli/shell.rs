//! Interactive vault shell.
//!
//! Reads one command per line and applies it to a vault that lives for the
//! duration of the session. Rejected commands are reported and the session
//! keeps going; only I/O and serialization failures end it.

use std::io::{self, BufRead, IsTerminal, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::error::{CommandError, Error, Result};

/// Command words understood by the shell.
pub const COMMANDS: &[&str] = &[
    "create", "read", "list", "update", "delete", "contains", "size", "clear", "help", "exit",
    "quit",
];

const USAGE: &[(&str, &str)] = &[
    ("create <account> <password>", "add an entry"),
    ("read <account>", "show an entry"),
    ("list [--json]", "show all entries"),
    ("update <account> <password>", "change a password"),
    ("delete <account>", "remove an entry"),
    ("contains <account>", "check whether an account exists"),
    ("size", "count entries"),
    ("clear", "remove all entries"),
    ("help", "show this list"),
    ("exit", "end the session"),
];

const QUOTING: &str = r#"wrap arguments with spaces in "double quotes"; \ escapes the next character"#;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Create { account: String, password: String },
    Read { account: String },
    List { json: bool },
    Update { account: String, password: String },
    Delete { account: String },
    Contains { account: String },
    Size,
    Clear,
    Help,
    Exit,
}

/// Whether the session should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl ShellCommand {
    /// Parse one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. Missing
    /// arguments become empty strings so that the vault reports them as
    /// validation failures.
    ///
    /// # Errors
    ///
    /// Returns `Error::Command` for unknown commands, surplus arguments and
    /// unbalanced quotes.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let words = tokenize(trimmed)?;
        let mut words = words.into_iter();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let mut args = Args {
            command: &name,
            rest: words,
        };

        let command = match name.as_str() {
            "create" => Self::Create {
                account: args.next(),
                password: args.next(),
            },
            "read" => Self::Read {
                account: args.next(),
            },
            "list" => Self::List {
                json: args.flag("--json")?,
            },
            "update" => Self::Update {
                account: args.next(),
                password: args.next(),
            },
            "delete" => Self::Delete {
                account: args.next(),
            },
            "contains" => Self::Contains {
                account: args.next(),
            },
            "size" => Self::Size,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "exit" | "quit" => Self::Exit,
            _ => {
                return Err(CommandError::Unknown {
                    input: name.clone(),
                    suggestion: suggest(&name).map(str::to_string),
                }
                .into())
            }
        };

        args.finish()?;
        Ok(Some(command))
    }

    /// Command word, for logging without arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Read { .. } => "read",
            Self::List { .. } => "list",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
            Self::Contains { .. } => "contains",
            Self::Size => "size",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }
}

/// Positional arguments of one command.
struct Args<'a, I: Iterator<Item = String>> {
    command: &'a str,
    rest: I,
}

impl<I: Iterator<Item = String>> Args<'_, I> {
    fn next(&mut self) -> String {
        self.rest.next().unwrap_or_default()
    }

    fn flag(&mut self, flag: &str) -> std::result::Result<bool, CommandError> {
        match self.rest.next() {
            None => Ok(false),
            Some(arg) if arg == flag => Ok(true),
            Some(arg) => Err(self.unexpected(arg)),
        }
    }

    fn finish(mut self) -> std::result::Result<(), CommandError> {
        match self.rest.next() {
            None => Ok(()),
            Some(arg) => Err(self.unexpected(arg)),
        }
    }

    fn unexpected(&self, arg: String) -> CommandError {
        CommandError::UnexpectedArgument {
            command: self.command.to_string(),
            arg,
        }
    }
}

/// Split a line on whitespace, keeping double-quoted runs together.
///
/// A backslash takes the next character literally, inside or outside
/// quotes, so `\"` is a quote and `\\` a backslash. A trailing backslash is
/// kept as is.
fn tokenize(line: &str) -> std::result::Result<Vec<String>, CommandError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                current.push(chars.next().unwrap_or('\\'));
                in_word = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(CommandError::UnterminatedQuote(line.to_string()));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Closest known command within edit distance 2.
fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|cmd| (*cmd, edit_distance(input, cmd)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(cmd, _)| cmd)
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut row = vec![i + 1; b.len() + 1];
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != *cb);
            row[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(row[j] + 1);
        }
        prev = row;
    }

    prev[b.len()]
}

#[derive(Serialize)]
struct EntryView<'a> {
    account: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ListView<'a> {
    entries: Vec<EntryView<'a>>,
    count: usize,
}

/// A shell session and the vault it operates on.
#[derive(Debug, Default)]
pub struct Session {
    vault: Vault,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Apply one command and print its result.
    ///
    /// # Errors
    ///
    /// Returns an error only if the JSON listing cannot be serialized.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Flow> {
        debug!(command = command.name(), "shell command");

        match command {
            ShellCommand::Create { account, password } => {
                if self.vault.create_entry(&account, &password) {
                    output::success(&format!("created: {}", output::account(&account)));
                } else {
                    output::error(&format!("could not create entry: {}", account));
                }
            }
            ShellCommand::Read { account } => match self.vault.read_entry(&account) {
                Some(entry) => println!("{}", entry),
                None => output::warn(&format!("not found: {}", account)),
            },
            ShellCommand::List { json } => self.list(json)?,
            ShellCommand::Update { account, password } => {
                if self.vault.update_entry(&account, &password) {
                    output::success(&format!("updated: {}", output::account(&account)));
                } else {
                    output::error(&format!("could not update entry: {}", account));
                }
            }
            ShellCommand::Delete { account } => {
                if self.vault.delete_entry(&account) {
                    output::success(&format!("deleted: {}", output::account(&account)));
                } else {
                    output::warn(&format!("not found: {}", account));
                }
            }
            ShellCommand::Contains { account } => {
                println!("{}", self.vault.contains_account(&account));
            }
            ShellCommand::Size => println!("{}", self.vault.len()),
            ShellCommand::Clear => {
                self.vault.clear();
                output::success("vault cleared");
            }
            ShellCommand::Help => print_help(),
            ShellCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn list(&self, json: bool) -> Result<()> {
        let entries = self.vault.read_all_entries();

        if json {
            let view = ListView {
                entries: entries
                    .values()
                    .map(|e| EntryView {
                        account: e.account_name(),
                        password: e.password(),
                    })
                    .collect(),
                count: entries.len(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else if entries.is_empty() {
            output::dimmed("vault is empty");
        } else {
            println!();
            output::header(&format!("{} entries", entries.len()));
            output::rule();
            for entry in entries.values() {
                println!("{}", entry);
            }
        }

        Ok(())
    }
}

fn print_help() {
    output::header("Commands");
    output::rule();
    for (usage, about) in USAGE {
        println!("  {:<30} {}", usage, about);
    }
    println!();
    output::dimmed(QUOTING);
}

fn report(err: &CommandError) {
    output::error(&err.to_string());
    if let CommandError::Unknown {
        suggestion: Some(cmd),
        ..
    } = err
    {
        output::hint(&format!("did you mean: {}", cmd));
    }
}

/// Run a session over `input` until EOF or `exit`.
///
/// The prompt is written before each line when `prompt` is set.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_with<R: BufRead>(mut input: R, prompt: Option<&str>) -> Result<Session> {
    let mut session = Session::new();
    let mut line = String::new();

    loop {
        if let Some(prompt) = prompt {
            print!("{}", prompt);
            io::stdout().flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match ShellCommand::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => {
                if session.execute(command)? == Flow::Exit {
                    break;
                }
            }
            Err(Error::Command(e)) => report(&e),
            Err(e) => return Err(e),
        }
    }

    Ok(session)
}

/// Run the shell on stdin.
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn execute(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(interactive, "starting shell");

    if interactive {
        output::dimmed("type `help` for commands, `exit` to quit");
    }

    let prompt = interactive.then_some(config.prompt.as_str());
    let session = run_with(stdin.lock(), prompt)?;

    if interactive {
        println!();
    }
    info!(entries = session.vault().len(), "shell finished");
    Ok(())
}
