//! Text encodings of action sequences
//!
//! Numeric: `0` = SHIFT, `1` = REDUCE, `2` = padding (dropped).
//! Symbolic: `S` / `SHIFT` and `R` / `REDUCE`, case-insensitive.
//! Tokens are separated by whitespace or commas.

use std::str::FromStr;

use super::{Action, ActionSequence};
use crate::{EvalError, EvalResult};

/// Accepted token vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionFormat {
    /// Accept numeric and symbolic tokens
    #[default]
    Auto,
    /// Only `0`, `1`, `2`
    Numeric,
    /// Only `S`, `R`, `SHIFT`, `REDUCE`
    Symbolic,
}

impl FromStr for ActionFormat {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ActionFormat::Auto),
            "numeric" => Ok(ActionFormat::Numeric),
            "symbolic" => Ok(ActionFormat::Symbolic),
            other => Err(EvalError::InvalidConfiguration(format!(
                "unknown action format '{}'",
                other
            ))),
        }
    }
}

enum Token {
    Action(Action),
    Padding,
}

fn numeric_token(token: &str) -> Option<Token> {
    match token {
        "0" => Some(Token::Action(Action::Shift)),
        "1" => Some(Token::Action(Action::Reduce)),
        "2" => Some(Token::Padding),
        _ => None,
    }
}

fn symbolic_token(token: &str) -> Option<Token> {
    if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("shift") {
        Some(Token::Action(Action::Shift))
    } else if token.eq_ignore_ascii_case("r") || token.eq_ignore_ascii_case("reduce") {
        Some(Token::Action(Action::Reduce))
    } else {
        None
    }
}

/// Parse one line of actions; padding tokens are dropped
pub fn parse_actions(line: &str, format: ActionFormat) -> EvalResult<ActionSequence> {
    let mut actions = ActionSequence::new();

    let tokens = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    for (position, token) in tokens.enumerate() {
        let parsed = match format {
            ActionFormat::Numeric => numeric_token(token),
            ActionFormat::Symbolic => symbolic_token(token),
            ActionFormat::Auto => numeric_token(token).or_else(|| symbolic_token(token)),
        };

        match parsed {
            Some(Token::Action(action)) => actions.push(action),
            Some(Token::Padding) => continue,
            None => {
                return Err(EvalError::InvalidActionToken {
                    token: token.to_string(),
                    position,
                })
            }
        }
    }

    Ok(actions)
}
