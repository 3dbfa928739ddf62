//! General REPL commands (help, quit, object selection)

use crate::commands::{CommandContext, CommandResult};
use crate::objects::ObjectKind;
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `objects` command
pub fn cmd_objects(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let lines: Vec<String> = ObjectKind::ALL
        .iter()
        .map(|kind| {
            let marker = if *kind == ctx.current { "▶" } else { " " };
            format!("{} {:<14} {}", marker, kind.name(), kind.description())
        })
        .collect();
    CommandResult::Message(lines.join("\n"))
}

/// Handle `use <object>` command
pub fn cmd_use(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Current object: {}", ctx.current));
    }

    match args.parse::<ObjectKind>() {
        Ok(kind) => {
            ctx.current = kind;
            CommandResult::Message(format!("Using {}", kind).bright_green().to_string())
        }
        Err(e) => CommandResult::Error(e),
    }
}

/// Handle `status` command
pub fn cmd_status(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.current_object().describe() {
        Ok(text) => CommandResult::Message(text),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Print help information
fn print_help() {
    println!("{}", "🧵 Weft Help".bold());
    println!("{}", "============".bold());
    println!();
    println!("{}", "Objects:".green());
    println!("  {}        - List objects (▶ marks the current one)", "objects".cyan());
    println!("  {}   - Send following commands to an object", "use rhythm".cyan());
    println!("  {}         - Show the current object's attributes", "status".cyan());
    println!();
    println!("{}", "Attributes (current object):".green());
    println!("  {} - Primary sequence (integers only)", "sequence 1 2 3 4".cyan());
    println!("  {}    - Pattern cycled against the sequence", "pattern 1 0 0".cyan());
    println!(
        "  {}  - Shifter inlets: append to sequence / shifts",
        "list 1 2 / list2 1".cyan()
    );
    println!("  {}      - Rhythm length (below 1 = derive)", "length 16".cyan());
    println!("  {}   - Rhythm fill mode: wrap | silence", "fill silence".cyan());
    println!("  {}       - Rational melody: iv | xi | xv | xvi", "melody xv".cyan());
    println!("  {}          - Reset attributes to defaults", "clear".cyan());
    println!();
    println!("{}", "Patterns by object:".green());
    println!(
        "  {} {} {} {}",
        "gates 1 0 0".cyan(),
        "repeats 1 2".cyan(),
        "shifts 1 0".cyan(),
        "rhythm 1 1 0".cyan()
    );
    println!();
    println!("{}", "Output:".green());
    println!("  {}           - Send out the transformed sequence", "bang".cyan());
    println!("  {}  - Bang another object", "bang rational".cyan());
    println!();
    println!("{}", "Examples:".green());
    println!("  weft> {}", "sequence 1 1 5 5 6 6".cyan());
    println!("  weft> {}", "gates 1 0 0".cyan());
    println!("  weft> {}", "bang".cyan());
    println!("  weft.gates: 1 0 0 5 0 0");
    println!();
    println!(
        "Set {} (e.g. {}) to see attribute changes logged.",
        "RUST_LOG".yellow(),
        "RUST_LOG=weft=debug".yellow()
    );
}
