//! Reducer: the only place `AppState` changes.
//!
//! `update` is pure. It mutates state and returns effects for the runtime to
//! execute; it performs no I/O.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use exploitx_core::session::{Phase, ViewState};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{challenges, event, rules};
use crate::overlays::{Overlay, OverlayTransition, SignInState};
use crate::state::{AppState, Notice, Tab};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Session(view) => {
            handle_session_view(app, view);
            vec![]
        }
        UiEvent::Notice(notice) => {
            app.notice = Some(notice);
            vec![]
        }
    }
}

fn handle_session_view(app: &mut AppState, view: ViewState) {
    if view.phase == Phase::SignedIn
        && app.view.phase == Phase::Loading
        && let Some(email) = view.email()
    {
        app.notice = Some(Notice::info(format!("Signed in as {email}")));
    }
    app.view = view;
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        if update.transition == OverlayTransition::Close {
            app.overlay = None;
        }
        return update.effects;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            return vec![];
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return vec![];
        }
        KeyCode::Tab | KeyCode::Right => {
            app.tab = app.tab.next();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.tab = app.tab.prev();
            return vec![];
        }
        KeyCode::Char(c) if !ctrl => {
            if let Some(tab) = c.to_digit(10).and_then(Tab::from_number) {
                app.tab = tab;
                return vec![];
            }
        }
        _ => {}
    }

    if let Some(effects) = handle_tab_key(app, key) {
        return effects;
    }

    match key.code {
        KeyCode::Char('l') => open_sign_in(app),
        KeyCode::Char('o') => sign_out(app),
        KeyCode::Char('r') => refresh(app),
        _ => vec![],
    }
}

/// Keys owned by the focused tab. `None` if the tab did not consume the key.
fn handle_tab_key(app: &mut AppState, key: KeyEvent) -> Option<Vec<UiEffect>> {
    match app.tab {
        Tab::Home => None,
        Tab::Rules => rules::handle_key(&mut app.rules, key).then(Vec::new),
        Tab::Challenges => {
            challenges::handle_key(&mut app.challenges, app.catalog.len(), key).then(Vec::new)
        }
        Tab::Contact => event::handle_key(&mut app.contact, key),
    }
}

fn open_sign_in(app: &mut AppState) -> Vec<UiEffect> {
    match app.view.phase {
        Phase::SignedOut => {
            app.notice = None;
            app.overlay = Some(Overlay::SignIn(SignInState::open()));
        }
        Phase::SignedIn => {
            let email = app.view.email().unwrap_or_default();
            app.notice = Some(Notice::info(format!(
                "Already signed in as {email}. Press o to sign out first."
            )));
        }
        Phase::Loading => {
            app.notice = Some(Notice::info("Session is still loading"));
        }
    }
    vec![]
}

fn sign_out(app: &mut AppState) -> Vec<UiEffect> {
    if app.view.identity.is_none() {
        app.notice = Some(Notice::info("Not signed in"));
        return vec![];
    }
    vec![UiEffect::SignOut]
}

fn refresh(app: &mut AppState) -> Vec<UiEffect> {
    match (&app.view.phase, &app.view.identity) {
        (Phase::SignedIn, Some(identity)) => vec![UiEffect::Refresh {
            identity: identity.clone(),
        }],
        _ => vec![],
    }
}
