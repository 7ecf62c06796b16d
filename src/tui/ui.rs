//! Frame layout.
//!
//! ```text
//! ┌ title bar ──────────────────────────────────────────────┐
//! │ Try a sample          │ Generated Screenplay            │
//! │ Your prompt           │   sections...                   │
//! │ [Generate Screenplay] │                                 │
//! └───────────────────────┴─────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::render::render;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::generate_button::spinner;
use crate::tui::components::{GenerateButton, OutputPane, PromptInput, SampleList, TitleBar};
use crate::tui::{Focus, TuiState};

/// Minimum rows for the prompt editor (borders + 2 lines).
const PROMPT_MIN_HEIGHT: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};

    let [title_area, body_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());
    let [left_area, right_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(body_area);
    let [samples_area, prompt_area, button_area] = Layout::vertical([
        Length(SampleList::preferred_height(app.samples.len())),
        Min(PROMPT_MIN_HEIGHT),
        Length(BUTTON_HEIGHT),
    ])
    .areas(left_area);

    let controller = &app.controller;
    let is_loading = controller.is_loading();

    TitleBar::new(
        app.service_name.clone(),
        app.status_message.clone(),
        !is_loading && controller.result().is_failure(),
    )
    .render(frame, title_area);

    SampleList::new(
        &mut tui.sample_list,
        &app.samples,
        tui.focus == Focus::Samples,
    )
    .render(frame, samples_area);

    PromptInput::new(
        &mut tui.prompt,
        controller.input().text(),
        tui.focus == Focus::Input,
    )
    .render(frame, prompt_area);

    GenerateButton::new(is_loading, controller.is_submittable(), spinner_frame)
        .render(frame, button_area);

    let sections = render(controller.result());
    OutputPane::new(&mut tui.output, &sections, is_loading, spinner(spinner_frame))
        .render(frame, right_area);
}
