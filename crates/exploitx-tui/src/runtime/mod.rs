//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the Elm runtime boundary. The reducer stays pure and returns
//! effects; every side effect happens here or in `handlers`.
//!
//! Events come from three places:
//! - the terminal (crossterm poll)
//! - the session view channel (`watch::Receiver<ViewState>`)
//! - the inbox, where background handlers report back

mod handlers;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use exploitx_core::auth::AuthPublisher;
use exploitx_core::catalog::Catalog;
use exploitx_core::session::ViewState;
use tokio::sync::{mpsc, watch};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::PageTerminal;
use crate::{render, terminal, update};

/// Interval between Tick events.
pub const TICK_RATE: Duration = Duration::from_millis(120);

/// Full-screen page runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: PageTerminal,
    pub state: AppState,
    /// Views published by the session driver.
    view_rx: watch::Receiver<ViewState>,
    /// Stand-in identity provider for sign-in and sign-out.
    auth: AuthPublisher,
    session_path: PathBuf,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    pub fn new(
        mut view_rx: watch::Receiver<ViewState>,
        auth: AuthPublisher,
        session_path: PathBuf,
        catalog: Catalog,
        store_label: String,
    ) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let view = view_rx.borrow_and_update().clone();
        let state = AppState::new(view, catalog, store_label);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            view_rx,
            auth,
            session_path,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// Blocks the calling thread.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("event page started");
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }

            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
                dirty = true;
            }
        }

        tracing::info!("event page closed");
        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        self.collect_session_view(&mut events);
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            TICK_RATE.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= TICK_RATE {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Picks up the latest view, skipping intermediate ones the page never drew.
    fn collect_session_view(&mut self, events: &mut Vec<UiEvent>) {
        // Err means the driver is gone; the last view stays on screen.
        if self.view_rx.has_changed().unwrap_or(false) {
            let view = self.view_rx.borrow_and_update().clone();
            events.push(UiEvent::Session(view));
        }
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        tracing::debug!(?effect, "executing effect");
        match effect {
            UiEffect::SignIn { identity } => {
                let event = handlers::sign_in(&self.auth, &self.session_path, identity);
                self.dispatch_event(event);
            }
            UiEffect::SignOut => {
                let event = handlers::sign_out(&self.auth, &self.session_path);
                self.dispatch_event(event);
            }
            UiEffect::Refresh { identity } => {
                let event = handlers::refresh(&self.auth, identity);
                self.dispatch_event(event);
            }
            UiEffect::OpenUrl { url } => {
                let tx = self.inbox_tx.clone();
                tokio::task::spawn_blocking(move || {
                    let _ = tx.send(handlers::open_url(&url));
                });
            }
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}
