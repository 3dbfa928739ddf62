//! REPL (Read-Eval-Print Loop) for weft objects

use crate::commands::attributes::format_outlet;
use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use crate::objects::OutletMessage;
use anyhow::Result;
use colored::*;
use crossbeam_channel::{unbounded, Receiver};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};
use tracing::debug;

/// Interactive REPL driving one instance of every weft object
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
    /// Everything the objects send out of their outlets
    rx_outlet: Receiver<OutletMessage>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> RustylineResult<Self> {
        let editor = DefaultEditor::new()?;
        let (tx_outlet, rx_outlet) = unbounded();

        Ok(Repl {
            editor,
            registry: create_registry(),
            ctx: CommandContext::new(tx_outlet),
            rx_outlet,
        })
    }

    /// Run one line of input, returning false when the REPL should stop
    pub fn handle_line(&mut self, line: &str) -> bool {
        match self.registry.execute(line, &mut self.ctx) {
            CommandResult::Success => {}
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Exit => {
                println!("{} 🧵", "Goodbye!".bright_cyan());
                return false;
            }
            CommandResult::Error(e) => {
                println!("{} {}", "Error:".bright_red().bold(), e.red());
            }
            CommandResult::NotACommand => {
                println!(
                    "{} Unknown command '{}'. Type '{}' for a list of commands.",
                    "Error:".bright_red().bold(),
                    line,
                    "help".bright_green()
                );
            }
        }

        self.print_outlets();
        true
    }

    fn print_outlets(&self) {
        for message in self.rx_outlet.try_iter() {
            println!("{}", format_outlet(message.object, &message.values));
        }
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🧵".bright_yellow(),
            "Weft sequence transformations".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "sequence 1 2 3 4".cyan(),
            "use rational".cyan(),
            "bang".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+C".bright_red()
        );

        loop {
            let prompt = format!("{} ", "weft>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.to_owned())?;
                    debug!(input = line, object = %self.ctx.current, "command");

                    if !self.handle_line(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("{} 🧵", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    println!(
                        "{} {}",
                        "Error reading input:".bright_red().bold(),
                        err.to_string().red()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Convenience function to start the REPL
pub fn start() -> Result<()> {
    let mut repl = Repl::new().map_err(|e| anyhow::anyhow!("Failed to initialize REPL: {}", e))?;
    repl.run()
}
