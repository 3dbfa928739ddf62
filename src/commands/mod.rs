//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod attributes;
pub mod general;

use crate::objects::{ObjectKind, OutletMessage, WeftObject};
use crossbeam_channel::Sender;
use std::sync::Arc;

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// No registered command matches the input
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Context passed to command handlers
pub struct CommandContext {
    /// One instance of every object kind, in `ObjectKind::ALL` order
    pub objects: Vec<Arc<WeftObject>>,
    /// Object that receives attribute and bang commands
    pub current: ObjectKind,
}

impl CommandContext {
    /// Create one object per kind, all sharing `outlet`
    pub fn new(outlet: Sender<OutletMessage>) -> Self {
        let objects = ObjectKind::ALL
            .into_iter()
            .map(|kind| Arc::new(WeftObject::new(kind, outlet.clone())))
            .collect();
        Self {
            objects,
            current: ObjectKind::Gates,
        }
    }

    pub fn object(&self, kind: ObjectKind) -> &Arc<WeftObject> {
        let index = ObjectKind::ALL
            .iter()
            .position(|&k| k == kind)
            .unwrap_or_default();
        &self.objects[index]
    }

    pub fn current_object(&self) -> &Arc<WeftObject> {
        self.object(self.current)
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Commands indexed by their prefix (e.g., "use")
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        // Sort by prefix length descending for longest-match-first
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Attribute messages for the current object
    registry.register("sequence", attributes::cmd_sequence);
    registry.register("pattern", attributes::cmd_pattern);
    registry.register("length", attributes::cmd_length);
    registry.register("fill", attributes::cmd_fill);
    registry.register("melody", attributes::cmd_melody);
    registry.register("list", attributes::cmd_list_left);
    registry.register("list2", attributes::cmd_list_right);
    registry.register("clear", attributes::cmd_clear);
    registry.register("bang", attributes::cmd_bang);

    // Pattern attributes addressed by name go to their own object
    registry.register("gates", attributes::cmd_gates);
    registry.register("repeats", attributes::cmd_repeats);
    registry.register("shifts", attributes::cmd_shifts);
    registry.register("rhythm", attributes::cmd_rhythm);

    // General commands
    registry.register("objects", general::cmd_objects);
    registry.register("use", general::cmd_use);
    registry.register("status", general::cmd_status);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}
