//! Mobile menu state.
//!
//! The open/closed flag is owned by the mounted header and the body-level
//! class is derived from it at render time.

use serde::Serialize;

/// Body class present while the mobile menu is open.
///
/// External stylesheets key off this exact string.
pub const MENU_OPEN_CLASS: &str = "menu--opened";

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub const CLOSED: Self = Self { open: false };
    pub const OPEN: Self = Self { open: true };

    #[inline]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Handle activation of the toggle control.
    ///
    /// Flips the state and suppresses the control's default action.
    pub fn toggle(&mut self, activation: &mut Activation) {
        activation.prevent_default();
        self.open = !self.open;
    }

    /// Handle a window resize.
    ///
    /// `toggle_visible` is `None` when the toggle control has no layout box
    /// to query, which counts as hidden. A hidden toggle means the desktop
    /// layout is active, so the menu is forced closed.
    pub fn on_resize(&mut self, toggle_visible: Option<bool>) {
        if toggle_visible != Some(true) {
            self.close();
        }
    }

    /// Handle the start of a client-side route change.
    pub fn on_route_change_start(&mut self) {
        self.close();
    }

    #[inline]
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class to put on `<body>` for this state.
    #[inline]
    pub const fn body_class(self) -> Option<&'static str> {
        if self.open { Some(MENU_OPEN_CLASS) } else { None }
    }
}

/// A user activation (click, Enter, Space) of a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Activation {
    default_prevented: bool,
}

impl Activation {
    pub const fn new() -> Self {
        Self {
            default_prevented: false,
        }
    }

    #[inline]
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    #[inline]
    pub const fn default_prevented(self) -> bool {
        self.default_prevented
    }
}
