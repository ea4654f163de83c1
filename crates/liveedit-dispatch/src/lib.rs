//! # liveedit Dispatch
//!
//! The edit dispatcher: turns a `(file, optional element, instruction)`
//! tuple into one external CLI invocation.
//!
//! The heavy context (element markup for component edits, the live on-disk
//! file for page edits) is streamed to the process via standard input; the
//! prompt handed on the command line stays short. The process is spawned
//! directly from an argument vector - no shell is interposed, so
//! instruction text cannot be interpreted as shell syntax.

mod cli;
mod dispatcher;
mod prompt;

pub use cli::CliTool;
pub use dispatcher::EditDispatcher;
pub use prompt::{full_prompt, simplified_prompt_and_stdin, EditRequest};
