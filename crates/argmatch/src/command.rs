//! Command tree declaration and the matching entry points.

use crate::arg::{Arg, ArgKind};
use crate::error::MatchError;
use crate::matches::ArgMatches;
use crate::{help, matcher};

/// A named node in the command tree: an ordered set of declared arguments
/// plus an ordered set of subcommands.
///
/// Every command starts with an implicit help flag (`-h`, `--help`) as its
/// first argument. Declaration uses chained, value-returning builders; the
/// tree is built once and read-only during matching. Invariant violations
/// (duplicate names or short aliases, a non-last `multiple` positional)
/// are programmer errors and panic at declaration time.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    description: String,
    args: Vec<Arg>,
    subcommands: Vec<Command>,
    subcommand_required: bool,
    allow_extra_positionals: bool,
}

impl Command {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "command must have a name");
        let help = Arg::flag("help")
            .short_alias('h')
            .about("Print help information");
        Self {
            name,
            description: description.into(),
            args: vec![help],
            subcommands: Vec::new(),
            subcommand_required: false,
            allow_extra_positionals: true,
        }
    }

    /// Append a declared argument.
    pub fn arg(mut self, arg: Arg) -> Self {
        self.check_new_arg(&arg);
        self.args.push(arg);
        self
    }

    /// Append a subcommand.
    pub fn subcommand(mut self, cmd: Command) -> Self {
        assert!(
            !self.subcommands.iter().any(|s| s.name == cmd.name),
            "duplicate subcommand '{}' for command '{}'",
            cmd.name,
            self.name
        );
        self.subcommands.push(cmd);
        self
    }

    /// Require that a subcommand is matched.
    pub fn subcommand_required(mut self, required: bool) -> Self {
        self.subcommand_required = required;
        self
    }

    /// Whether tokens with no positional left to fill are silently ignored
    /// (the default) or reported as an error.
    pub fn allow_extra_positionals(mut self, allow: bool) -> Self {
        self.allow_extra_positionals = allow;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    pub(crate) fn is_subcommand_required(&self) -> bool {
        self.subcommand_required
    }

    pub(crate) fn extra_positionals_allowed(&self) -> bool {
        self.allow_extra_positionals
    }

    /// Match the process arguments. The program name (`argv[0]`) is
    /// stripped before matching begins.
    pub fn get_matches(&self) -> Result<ArgMatches, MatchError> {
        self.get_matches_from(std::env::args())
    }

    /// Match an explicit argument vector, `argv[0]` included.
    ///
    /// When the help flag was matched at some level, the help text of the
    /// deepest such level is printed to stdout before returning. Matching
    /// errors are returned, never printed; surfacing them is the caller's
    /// business.
    pub fn get_matches_from<I, T>(&self, argv: I) -> Result<ArgMatches, MatchError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = argv.into_iter().map(Into::into).skip(1).collect();
        let matches = self.try_match(&tokens)?;
        if let Some(level) = help_target(self, &matches) {
            level.print_help();
        }
        Ok(matches)
    }

    /// The pure matching core: no `argv[0]` stripping, no printing.
    pub fn try_match(&self, tokens: &[String]) -> Result<ArgMatches, MatchError> {
        matcher::match_tokens(self, tokens)
    }

    /// Render this command's help text (own arguments and subcommands,
    /// not the whole tree).
    pub fn render_help(&self) -> String {
        help::render(self)
    }

    /// Write the rendered help text to stdout.
    pub fn print_help(&self) {
        print!("{}", self.render_help());
    }

    fn check_new_arg(&self, arg: &Arg) {
        assert!(
            !self.args.iter().any(|a| a.name() == arg.name()),
            "duplicate argument '{}' for command '{}'",
            arg.name(),
            self.name
        );
        if let Some(short) = arg.short() {
            assert!(
                !self.args.iter().any(|a| a.short() == Some(short)),
                "duplicate short alias '-{short}' for command '{}'",
                self.name
            );
        }
        if let Some(long) = arg.long_or_name() {
            assert!(
                !self.args.iter().any(|a| a.long_or_name() == Some(long)),
                "duplicate long alias '--{long}' for command '{}'",
                self.name
            );
        }
        if arg.kind() == ArgKind::Positional {
            assert!(
                !self
                    .args
                    .iter()
                    .any(|a| a.kind() == ArgKind::Positional && a.is_multiple()),
                "a multiple positional must be the last declared positional for command '{}'",
                self.name
            );
        }
    }
}

/// The deepest command level at which the help flag was matched.
fn help_target<'a>(cmd: &'a Command, matches: &ArgMatches) -> Option<&'a Command> {
    if let Some((name, nested)) = matches.subcommand() {
        let sub = cmd.subcommands.iter().find(|s| s.name == name);
        if let Some(target) = sub.and_then(|s| help_target(s, nested)) {
            return Some(target);
        }
    }
    matches.get_flag("help").then_some(cmd)
}
