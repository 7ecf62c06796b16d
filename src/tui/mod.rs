//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Submission
//!
//! `Action::Submit` goes through `update()`, which does the check-and-set and
//! hands back `Effect::SpawnRequest`. The request runs on a tokio task and
//! reports back over an mpsc channel as `Action::GenerationSettled`, so the
//! loop keeps drawing (and accepting edits) while the backend works.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events or a settlement.

mod component;
mod components;
mod event;
mod ui;
mod wrap;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::controller::dispatch;
use crate::core::state::App;
use crate::generation::{GenerationRequest, GenerationService};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    OutputPaneState, PromptEvent, PromptInput, PromptInputState, SampleEvent, SampleListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which left-column widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Samples,
    Input,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Samples => Focus::Input,
            Focus::Input => Focus::Samples,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sample_list: SampleListState,
    pub prompt: PromptInputState,
    pub output: OutputPaneState,
    pub focus: Focus,
}

impl TuiState {
    pub fn new(sample_count: usize) -> Self {
        Self {
            sample_list: SampleListState::new(sample_count),
            prompt: PromptInputState::new(),
            output: OutputPaneState::new(),
            focus: Focus::Input, // User expects to type immediately
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: continuous redraws reset the blink timer
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Runs the interactive UI until the user quits.
///
/// Must be called from inside a tokio runtime; generation requests are
/// spawned onto it.
pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(app.samples.len());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    // Channel for settlements coming back from request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.controller.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(app, tui, &event)
                && apply(app, tui, action, &tx)
            {
                info!("Quit requested");
                return Ok(());
            }
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(app, tui, action, &tx) {
                return Ok(());
            }
        }
    }
}

/// Routes a terminal event. TUI-local events (focus, scrolling, cursor
/// movement) are handled in place; anything that touches core state comes
/// back as an `Action`.
fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit | TuiEvent::Escape => return Some(Action::Quit),
        TuiEvent::Generate => return Some(Action::Submit),
        TuiEvent::Resize => return None,
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return None;
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.output.handle_event(event);
            return None;
        }
        // Typing while the list is focused goes to the prompt
        TuiEvent::InputChar(_) | TuiEvent::Paste(_) if tui.focus == Focus::Samples => {
            tui.focus = Focus::Input;
        }
        _ => {}
    }

    match tui.focus {
        Focus::Samples => tui
            .sample_list
            .handle_event(event, app.samples.len())
            .map(|SampleEvent::Apply(index)| Action::ApplySample(index)),
        Focus::Input => {
            let text = app.controller.input().text();
            match PromptInput::new(&mut tui.prompt, text, true).handle_event(event)? {
                PromptEvent::Edited(new_text) => Some(Action::EditPrompt(new_text)),
                PromptEvent::Submit => Some(Action::Submit),
            }
        }
    }
}

/// Applies an action and carries out its effect. Returns `true` on quit.
fn apply(app: &mut App, tui: &mut TuiState, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    let applies_sample = matches!(action, Action::ApplySample(_));

    let effect = update(app, action);

    if applies_sample {
        tui.prompt.move_to_end(app.controller.input().text());
        tui.focus = Focus::Input;
    }

    match effect {
        Effect::Quit => true,
        Effect::SpawnRequest(request) => {
            spawn_request(app.controller.service(), request, tx.clone());
            false
        }
        Effect::None => false,
    }
}

fn spawn_request(
    service: Arc<dyn GenerationService>,
    request: GenerationRequest,
    tx: mpsc::Sender<Action>,
) {
    info!(
        "Spawning generation request to {} ({} chars)",
        service.name(),
        request.user_input.len()
    );
    tokio::spawn(async move {
        let outcome = dispatch(service, request).await;
        if tx.send(Action::GenerationSettled(outcome)).is_err() {
            warn!("Failed to send settlement: receiver dropped");
        }
    });
}
