//! Line-oriented shell over the style catalogue and the recommender.
//!
//! One command per input line, one JSON document per output line.

use beer_machine_core::app::{App, NewStyle, StyleFields};
use beer_machine_core::domain::{BeerError, StyleId};
use serde_json::{Value, json};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &[&str] = &[
    "create <id|-> <name> <min> <max>",
    "update <id> <name> <min> <max>",
    "delete <id>",
    "get <id>",
    "list",
    "best <temperature>",
    "help",
    "quit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        id: Option<String>,
        name: String,
        min_temp: f64,
        max_temp: f64,
    },
    Update {
        id: String,
        name: String,
        min_temp: f64,
        max_temp: f64,
    },
    Delete { id: String },
    Get { id: String },
    List,
    Best { temperature: f64 },
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("unknown command {0:?}, try `help`")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{arg} must be a number, got {value:?}")]
    InvalidNumber { arg: &'static str, value: String },

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Split a line on whitespace; double quotes group words.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if quoted {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn number(arg: &'static str, value: &str) -> Result<f64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        arg,
        value: value.to_string(),
    })
}

/// Parse one line. Blank lines and `#` comments give `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let tokens = tokenize(line)?;
    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();

    let command = match args.as_slice() {
        ["create", id, name, min, max] => Command::Create {
            id: (*id != "-").then(|| id.to_string()),
            name: name.to_string(),
            min_temp: number("min", min)?,
            max_temp: number("max", max)?,
        },
        ["create", ..] => return Err(ParseError::Usage(HELP[0])),
        ["update", id, name, min, max] => Command::Update {
            id: id.to_string(),
            name: name.to_string(),
            min_temp: number("min", min)?,
            max_temp: number("max", max)?,
        },
        ["update", ..] => return Err(ParseError::Usage(HELP[1])),
        ["delete", id] => Command::Delete { id: id.to_string() },
        ["delete", ..] => return Err(ParseError::Usage(HELP[2])),
        ["get", id] => Command::Get { id: id.to_string() },
        ["get", ..] => return Err(ParseError::Usage(HELP[3])),
        ["list"] => Command::List,
        ["best", temperature] => Command::Best {
            temperature: number("temperature", temperature)?,
        },
        ["best", ..] => return Err(ParseError::Usage(HELP[5])),
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        [other, ..] => return Err(ParseError::UnknownCommand(other.to_string())),
        [] => return Ok(None),
    };
    Ok(Some(command))
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

pub fn error_json(kind: &str, message: impl ToString) -> Value {
    json!({ "error": kind, "message": message.to_string() })
}

/// Run one command against the app.
pub async fn execute(app: &App, command: Command) -> Result<Value, BeerError> {
    let catalog = &app.catalog;
    let value = match command {
        Command::Create {
            id,
            name,
            min_temp,
            max_temp,
        } => {
            let new = NewStyle {
                id: id.map(StyleId::new),
                name,
                min_temp,
                max_temp,
            };
            to_json(&catalog.create(new).await?)
        }
        Command::Update {
            id,
            name,
            min_temp,
            max_temp,
        } => {
            let fields = StyleFields {
                name,
                min_temp,
                max_temp,
            };
            to_json(&catalog.update(&StyleId::new(id), fields).await?)
        }
        Command::Delete { id } => {
            catalog.delete(&StyleId::new(id.clone())).await?;
            json!({ "deleted": id })
        }
        Command::Get { id } => to_json(&catalog.get(&StyleId::new(id)).await?),
        Command::List => to_json(&catalog.list().await?),
        Command::Best { temperature } => to_json(&app.recommender.recommend(temperature).await?),
        Command::Help => json!({ "commands": HELP }),
        Command::Quit => json!({ "bye": true }),
    };
    Ok(value)
}

/// Read commands until `quit` or end of input. Command failures are
/// reported on the output and do not end the session.
pub async fn run<R, W>(app: &App, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let reply = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => match execute(app, command).await {
                Ok(value) => value,
                Err(err) => error_json(err.kind().as_str(), &err),
            },
            Err(err) => error_json("invalid_input", &err),
        };
        output.write_all(reply.to_string().as_bytes()).await?;
        output.write_all(b"\n").await?;
        output.flush().await?;
    }
    Ok(())
}
