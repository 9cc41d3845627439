//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the periodic tick, session view updates and results of executed effects.

use crossterm::event::Event;
use exploitx_core::session::ViewState;

use crate::state::Notice;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic tick driving animation and redraws.
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// The session driver published a new view.
    Session(ViewState),

    /// An effect finished and has something to tell the user.
    Notice(Notice),
}
