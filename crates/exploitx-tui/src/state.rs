//! Application state for the event page.

use exploitx_core::catalog::Catalog;
use exploitx_core::session::ViewState;

use crate::features::challenges::ChallengesState;
use crate::features::event::ContactState;
use crate::features::rules::RulesState;
use crate::overlays::Overlay;

/// Top-level page sections, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Rules,
    Challenges,
    Contact,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Rules, Tab::Challenges, Tab::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Rules => "Rules",
            Tab::Challenges => "Challenges",
            Tab::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Tab> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown in the status bar until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Full page state. Mutated only by `update::update`.
#[derive(Debug)]
pub struct AppState {
    pub should_quit: bool,
    /// Latest view published by the session driver.
    pub view: ViewState,
    pub tab: Tab,
    pub rules: RulesState,
    pub challenges: ChallengesState,
    pub contact: ContactState,
    pub overlay: Option<Overlay>,
    pub notice: Option<Notice>,
    /// Advances on every tick; drives the loading skeleton.
    pub spinner_frame: usize,
    pub catalog: Catalog,
    pub store_label: String,
}

impl AppState {
    pub fn new(view: ViewState, catalog: Catalog, store_label: String) -> Self {
        Self {
            should_quit: false,
            view,
            tab: Tab::default(),
            rules: RulesState::default(),
            challenges: ChallengesState::default(),
            contact: ContactState::default(),
            overlay: None,
            notice: None,
            spinner_frame: 0,
            catalog,
            store_label,
        }
    }
}
