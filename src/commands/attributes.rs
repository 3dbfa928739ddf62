//! Attribute and bang commands for weft objects

use crate::commands::{CommandContext, CommandResult};
use crate::objects::{format_list, parse_atoms, ObjectError, ObjectKind, WeftObject};
use colored::*;
use std::sync::Arc;

fn report(result: Result<(), ObjectError>) -> CommandResult {
    match result {
        Ok(()) => CommandResult::Success,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn usage(args: &str, usage: &str) -> Option<CommandResult> {
    if args.is_empty() {
        Some(CommandResult::Error(format!("Usage: {}", usage)))
    } else {
        None
    }
}

/// Handle `sequence <ints>`
pub fn cmd_sequence(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if let Some(result) = usage(args, "sequence <int> <int> ...") {
        return result;
    }
    report(ctx.current_object().set_sequence(&parse_atoms(args)))
}

/// Handle `pattern <ints>` for the current object
pub fn cmd_pattern(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if let Some(result) = usage(args, "pattern <int> <int> ...") {
        return result;
    }
    report(ctx.current_object().set_pattern(&parse_atoms(args)))
}

fn set_named_pattern(kind: ObjectKind, args: &str, ctx: &mut CommandContext) -> CommandResult {
    let name = kind.pattern_name().unwrap_or("pattern");
    if let Some(result) = usage(args, &format!("{} <int> <int> ...", name)) {
        return result;
    }
    report(ctx.object(kind).set_pattern(&parse_atoms(args)))
}

/// Handle `gates <ints>`
pub fn cmd_gates(args: &str, ctx: &mut CommandContext) -> CommandResult {
    set_named_pattern(ObjectKind::Gates, args, ctx)
}

/// Handle `repeats <ints>`
pub fn cmd_repeats(args: &str, ctx: &mut CommandContext) -> CommandResult {
    set_named_pattern(ObjectKind::Repeater, args, ctx)
}

/// Handle `shifts <ints>`
pub fn cmd_shifts(args: &str, ctx: &mut CommandContext) -> CommandResult {
    set_named_pattern(ObjectKind::Shifter, args, ctx)
}

/// Handle `rhythm <ints>`
pub fn cmd_rhythm(args: &str, ctx: &mut CommandContext) -> CommandResult {
    set_named_pattern(ObjectKind::Rhythm, args, ctx)
}

/// Handle `length <int>`
pub fn cmd_length(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args.parse::<i64>() {
        Ok(length) => report(ctx.current_object().set_length(length)),
        Err(_) => CommandResult::Error(
            "Usage: length <int> (a value below 1 derives the length from the rhythm)"
                .to_string(),
        ),
    }
}

/// Handle `fill <wrap|silence>`
pub fn cmd_fill(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args.parse() {
        Ok(fill_mode) => report(ctx.current_object().set_fill_mode(fill_mode)),
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `melody <iv|xi|xv|xvi>`
pub fn cmd_melody(args: &str, ctx: &mut CommandContext) -> CommandResult {
    match args.parse() {
        Ok(melody) => report(ctx.current_object().set_melody(melody)),
        Err(e) => CommandResult::Error(e),
    }
}

fn append(inlet: usize, args: &str, ctx: &mut CommandContext) -> CommandResult {
    if let Some(result) = usage(args, "list <int> <int> ...") {
        return result;
    }
    report(ctx.current_object().append(inlet, &parse_atoms(args)))
}

/// Handle `list <ints>`: append to the left inlet
pub fn cmd_list_left(args: &str, ctx: &mut CommandContext) -> CommandResult {
    append(0, args, ctx)
}

/// Handle `list2 <ints>`: append to the right inlet
pub fn cmd_list_right(args: &str, ctx: &mut CommandContext) -> CommandResult {
    append(1, args, ctx)
}

/// Handle `clear`
pub fn cmd_clear(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.current_object().clear() {
        Ok(()) => CommandResult::Message(
            format!("{} reset to defaults", ctx.current)
                .bright_green()
                .to_string(),
        ),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `bang [object]`
///
/// The transformed list is delivered through the outlet; only failures are
/// reported here.
pub fn cmd_bang(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let target: Arc<WeftObject> = if args.is_empty() {
        ctx.current_object().clone()
    } else {
        match args.parse() {
            Ok(kind) => ctx.object(kind).clone(),
            Err(e) => return CommandResult::Error(e),
        }
    };

    match target.bang() {
        Ok(_) => CommandResult::Success,
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Render an outlet message for the terminal
pub fn format_outlet(object: ObjectKind, values: &[i32]) -> String {
    format!("{}: {}", object.name().bright_magenta(), format_list(values).cyan())
}
