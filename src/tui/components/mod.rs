//! # TUI Components
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status line
//! - `GenerateButton`: submit control with spinner
//! - `SectionView`: one rendered output section
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! The state struct lives in `TuiState`; the wrapper is built each frame
//! around `&mut` state plus props:
//! - `SampleListState` / `SampleList`: sample prompt catalog
//! - `PromptInputState` / `PromptInput`: prompt editor (cursor + scroll)
//! - `OutputPaneState` / `OutputPane`: scrollable output column
//!
//! Each file carries its own state types, event types, rendering and tests.
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs
//! ├── sample_list.rs
//! ├── prompt_input.rs
//! ├── generate_button.rs
//! ├── section_view.rs
//! └── output_pane.rs
//! ```

pub mod title_bar;
pub use title_bar::TitleBar;

pub mod generate_button;
pub use generate_button::GenerateButton;
pub mod output_pane;
pub use output_pane::{OutputPane, OutputPaneState};
pub mod prompt_input;
pub use prompt_input::{PromptEvent, PromptInput, PromptInputState};
pub mod sample_list;
pub use sample_list::{SampleEvent, SampleList, SampleListState};
pub mod section_view;
pub use section_view::SectionView;
