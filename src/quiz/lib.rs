//! # Quiz Architecture
//!
//! Quiz is a small interactive quiz tool: it keeps question/answer pairs in a JSON file and lets
//! the user list, add, edit, delete and test them, or play all of them in random order.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, repl.rs)                      │
//! │  - Parses process arguments, sets up logging                │
//! │  - Reads command lines and dispatches them to handlers      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, game.rs)                     │
//! │  - One handler per verb                                     │
//! │  - Returns structured results (`CmdResult`)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                        │
//!                    ▼                        ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage Layer (store/)      │ │  Session Layer (session/)  │
//! │  - QuizStore owns records    │ │  - Awaitable prompts       │
//! │  - Persistence trait         │ │  - LineIo trait            │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Identifiers
//!
//! Quizzes are addressed by their position in the store. Deleting a quiz shifts every later
//! quiz down by one, so a listing must be fetched again after a delete.
//!
//! ## No Terminal Assumptions in Core
//!
//! Commands and the game loop only talk to the user through [`session::Session`], which wraps
//! a [`session::LineIo`]. The terminal implementation lives in [`session::terminal`]; tests use
//! [`session::scripted::ScriptedIo`].
//!
//! ## Module Overview
//!
//! - [`commands`]: One handler per verb
//! - [`game`]: The play loop
//! - [`store`]: The record store and its persistence backends
//! - [`session`]: Prompt sequencing over a line-based I/O channel
//! - [`validation`]: Identifier parsing and record checks
//! - [`repl`]: Command-line parsing and the session loop
//! - [`model`]: Core data types
//! - [`config`]: Store location resolution
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod game;
pub mod model;
pub mod repl;
pub mod session;
pub mod store;
pub mod validation;
