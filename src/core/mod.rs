//! # Core Application Logic
//!
//! This module contains scriptgen's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌──────────────────────────┐
//!                    │          CORE            │
//!                    │                          │
//!                    │  • InputState (prompt)   │
//!                    │  • Controller (lifecycle)│
//!                    │  • render() (sections)   │
//!                    │  • Action / update()     │
//!                    └────────────┬─────────────┘
//!                                 │
//!                 ┌───────────────┴───────────────┐
//!                 ▼                               ▼
//!          ┌────────────┐                  ┌────────────┐
//!          │    TUI     │                  │  One-shot  │
//!          │  Adapter   │                  │    CLI     │
//!          │ (ratatui)  │                  │  (stdout)  │
//!          └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`input`]: `InputState`, the prompt text and where it came from
//! - [`controller`]: `GenerationController`, the Idle/Loading state machine
//! - [`render`]: pure mapping from a result to display sections
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: layered configuration
//! - [`samples`]: built-in sample prompts

pub mod action;
pub mod config;
pub mod controller;
pub mod input;
pub mod render;
pub mod samples;
pub mod state;
