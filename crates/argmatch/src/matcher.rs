//! The token-consumption state machine.
//!
//! One call scans one command level's token stream; subcommand dispatch is
//! ordinary call-stack recursion on the remaining slice. The matcher is a
//! pure function of (command tree, token list): diagnostics go through
//! `tracing` and never influence control flow.

use crate::arg::{Arg, ArgKind};
use crate::command::Command;
use crate::error::MatchError;
use crate::matches::ArgMatches;

/// Cursor over the unconsumed token stream.
struct Tokens<'a> {
    toks: &'a [String],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(toks: &'a [String]) -> Self {
        Self { toks, pos: 0 }
    }

    fn shift(&mut self) -> Option<&'a str> {
        let tok = self.toks.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    fn peek(&self) -> Option<&'a str> {
        self.toks.get(self.pos).map(String::as_str)
    }

    fn remaining(&self) -> &'a [String] {
        &self.toks[self.pos..]
    }
}

/// Whether a token would be interpreted as a flag or option marker.
/// Only consulted before literal mode; `--` itself qualifies, which is what
/// ends a greedy value run at the literal boundary.
fn is_flag_like(tok: &str) -> bool {
    tok.len() >= 2 && tok.starts_with('-')
}

pub(crate) fn match_tokens(cmd: &Command, tokens: &[String]) -> Result<ArgMatches, MatchError> {
    let positionals: Vec<&Arg> = cmd
        .args()
        .iter()
        .filter(|a| a.kind() == ArgKind::Positional)
        .collect();

    let mut cur = Tokens::new(tokens);
    let mut matches = ArgMatches::default();
    let mut literal = false;
    let mut next_positional = 0usize;
    let mut dispatched = false;

    while let Some(tok) = cur.shift() {
        if !literal {
            if tok == "--" {
                tracing::trace!("'--' seen, entering literal mode");
                literal = true;
                continue;
            }
            if let Some(text) = tok.strip_prefix("--") {
                let arg = find_long(cmd, text).ok_or_else(|| unknown(cmd, tok))?;
                bind_alias(cmd, arg, &mut cur, &mut matches)?;
                continue;
            }
            if is_flag_like(tok) {
                let arg = tok
                    .chars()
                    .nth(1)
                    .and_then(|letter| find_short(cmd, letter))
                    .ok_or_else(|| unknown(cmd, tok))?;
                bind_alias(cmd, arg, &mut cur, &mut matches)?;
                continue;
            }
            if let Some(sub) = cmd.subcommands().iter().find(|s| s.name() == tok) {
                tracing::debug!("dispatching '{}' to subcommand '{}'", cmd.name(), sub.name());
                // The dispatching level validates its own arguments first;
                // everything after the subcommand token belongs to its subtree.
                validate(cmd, &matches)?;
                let nested = match_tokens(sub, cur.remaining())?;
                matches.set_subcommand(sub.name(), nested);
                dispatched = true;
                break;
            }
        }
        assign_positional(cmd, &positionals, tok, &mut next_positional, &mut matches)?;
    }

    if !dispatched {
        validate(cmd, &matches)?;
        if cmd.is_subcommand_required() && !matches.get_flag("help") {
            return Err(MatchError::MissingRequiredSubcommand {
                command: cmd.name().to_string(),
            });
        }
    }
    apply_defaults(cmd, &mut matches);
    Ok(matches)
}

fn find_long<'a>(cmd: &'a Command, text: &str) -> Option<&'a Arg> {
    cmd.args().iter().find(|a| a.matches_long(text))
}

fn find_short<'a>(cmd: &'a Command, letter: char) -> Option<&'a Arg> {
    cmd.args().iter().find(|a| a.matches_short(letter))
}

fn unknown(cmd: &Command, tok: &str) -> MatchError {
    MatchError::UnknownArgument {
        token: tok.to_string(),
        command: cmd.name().to_string(),
    }
}

/// Bind a flag or option matched by alias, consuming value tokens for
/// options: exactly one for single-value options, a greedy run (up to the
/// next flag-like token, `--`, or end of input) for `multiple` ones.
fn bind_alias(
    cmd: &Command,
    arg: &Arg,
    cur: &mut Tokens<'_>,
    matches: &mut ArgMatches,
) -> Result<(), MatchError> {
    debug_assert!(arg.kind() != ArgKind::Positional);
    if arg.kind() == ArgKind::Flag {
        matches.set_flag(arg.name(), true);
        return Ok(());
    }

    if arg.is_multiple() {
        while let Some(next) = cur.peek() {
            if is_flag_like(next) {
                break;
            }
            matches.add_value(arg.name(), next);
            cur.shift();
        }
    } else {
        let value = cur.shift().ok_or_else(|| MatchError::MissingValue {
            arg: arg.name().to_string(),
            command: cmd.name().to_string(),
        })?;
        matches.set_value(arg.name(), value);
    }
    Ok(())
}

/// Assign a plain token to the next unfilled positional in declaration
/// order. A `multiple` positional (always declared last) pins the cursor
/// and absorbs every further plain token.
fn assign_positional(
    cmd: &Command,
    positionals: &[&Arg],
    tok: &str,
    next: &mut usize,
    matches: &mut ArgMatches,
) -> Result<(), MatchError> {
    match positionals.get(*next) {
        Some(p) if p.is_multiple() => matches.add_value(p.name(), tok),
        Some(p) => {
            matches.set_value(p.name(), tok);
            *next += 1;
        }
        None => {
            if !cmd.extra_positionals_allowed() {
                return Err(MatchError::UnexpectedPositional {
                    token: tok.to_string(),
                    command: cmd.name().to_string(),
                });
            }
            tracing::trace!("ignoring extra positional '{tok}' for '{}'", cmd.name());
        }
    }
    Ok(())
}

/// Required-argument validation, run once this level's token stream is
/// exhausted (or right before dispatching into a subcommand). A matched
/// help flag bypasses the checks: a help request must not be masked by a
/// missing-argument error.
fn validate(cmd: &Command, matches: &ArgMatches) -> Result<(), MatchError> {
    if matches.get_flag("help") {
        return Ok(());
    }
    for arg in cmd.args() {
        if !arg.is_required() {
            continue;
        }
        let satisfied = match arg.kind() {
            ArgKind::Flag => matches.get_flag(arg.name()),
            ArgKind::Option | ArgKind::Positional => matches.has_value(arg.name()),
        };
        if !satisfied {
            return Err(MatchError::MissingRequiredArgument {
                arg: arg.name().to_string(),
                command: cmd.name().to_string(),
            });
        }
    }
    Ok(())
}

/// Materialize declared defaults for options and positionals that received
/// no value, so lookups need no back-reference to the command tree.
fn apply_defaults(cmd: &Command, matches: &mut ArgMatches) {
    for arg in cmd.args() {
        if arg.kind() == ArgKind::Flag {
            continue;
        }
        if let Some(default) = arg.get_default() {
            if !matches.has_value(arg.name()) {
                matches.set_default(arg.name(), default.render_value());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn shift_and_peek_walk_the_stream() {
        let stream = toks(&["prog", "arg1", "arg2"]);
        let mut cur = Tokens::new(&stream);

        assert_eq!(cur.peek(), Some("prog"));
        assert_eq!(cur.shift(), Some("prog"));
        assert_eq!(cur.peek(), Some("arg1"));
        assert_eq!(cur.remaining(), &stream[1..]);

        assert_eq!(cur.shift(), Some("arg1"));
        assert_eq!(cur.shift(), Some("arg2"));
        assert_eq!(cur.shift(), None);
        assert!(cur.remaining().is_empty());
    }

    #[test]
    fn flag_like_classification() {
        assert!(is_flag_like("-v"));
        assert!(is_flag_like("--verbose"));
        assert!(is_flag_like("--"));
        assert!(!is_flag_like("-"));
        assert!(!is_flag_like("file.txt"));
    }

    #[test]
    fn literal_mode_turns_flag_spellings_into_positionals() {
        let cmd = Command::new("app", "")
            .arg(Arg::flag("verbose").short_alias('v'))
            .arg(Arg::positional("files").multiple(true));
        let matches = match_tokens(&cmd, &toks(&["-v", "--", "--weird", "-x"])).unwrap();
        assert!(matches.get_flag("verbose"));
        assert_eq!(matches.get_many("files"), ["--weird", "-x"]);
    }
}
