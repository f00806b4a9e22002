//! Two-pass column-aligned help rendering.

use crate::arg::{Arg, ArgKind};
use crate::command::Command;

/// Render one command's help text: usage line, description, a `Commands:`
/// block when subcommands exist, and an `Options:` block with the
/// flag/option column padded to the widest rendering. Output is fully
/// determined by the declaration, so repeated renders are byte-identical.
pub(crate) fn render(cmd: &Command) -> String {
    let options: Vec<&Arg> = cmd
        .args()
        .iter()
        .filter(|a| a.kind() != ArgKind::Positional)
        .collect();
    let positionals: Vec<&Arg> = cmd
        .args()
        .iter()
        .filter(|a| a.kind() == ArgKind::Positional)
        .collect();

    // Pass one: column widths.
    let opt_width = options.iter().map(|a| option_column(a).len()).max().unwrap_or(0);
    let cmd_width = cmd
        .subcommands()
        .iter()
        .map(|s| s.name().len())
        .max()
        .unwrap_or(0);

    // Pass two: emit.
    let mut out = format!("Usage: {}", cmd.name());
    for pos in &positionals {
        if pos.is_required() {
            out.push_str(&format!(" <{}>", pos.name()));
        } else {
            out.push_str(&format!(" [{}]", pos.name()));
        }
    }
    if !cmd.subcommands().is_empty() {
        out.push_str(" <COMMAND>");
    }
    if !options.is_empty() {
        out.push_str(" [OPTIONS]");
    }
    out.push('\n');
    if !cmd.description().is_empty() {
        out.push_str(cmd.description());
    }
    out.push('\n');

    if !cmd.subcommands().is_empty() {
        out.push_str("\nCommands:\n");
        for sub in cmd.subcommands() {
            out.push_str(&format!("    {:cmd_width$}", sub.name()));
            if !sub.description().is_empty() {
                out.push_str(&format!("    {}", sub.description()));
            }
            out.push('\n');
        }
    }

    if !options.is_empty() {
        out.push_str("\nOptions:\n");
        for opt in &options {
            out.push_str(&format!("    {:opt_width$}    {}", option_column(opt), opt.get_about()));
            if let Some(default) = opt.get_default() {
                out.push_str(&format!(" (default: {})", default.render_help()));
            }
            out.push('\n');
        }
    }

    out
}

/// The left column of an options row: `-x, --long <value>`.
fn option_column(arg: &Arg) -> String {
    let mut col = String::new();
    if let Some(short) = arg.short() {
        col.push('-');
        col.push(short);
    }
    if let Some(long) = arg.long_or_name() {
        if !col.is_empty() {
            col.push_str(", ");
        }
        col.push_str("--");
        col.push_str(long);
    }
    if let Some(value_name) = arg.get_value_name() {
        col.push_str(&format!(" <{value_name}>"));
    }
    col
}
