//! State transitions. Each returns `true` if the tab's state changed or
//! a callback fired.

use super::{Tab, TabState};

impl Tab {
    /// Programmatic selection: become `Active` without notifying anyone.
    pub fn select(&mut self) -> bool {
        match self.state {
            TabState::Created | TabState::Inactive => {
                self.state = TabState::Active;
                true
            }
            TabState::Active | TabState::Closed => false,
        }
    }

    /// Another tab took the foreground.
    pub fn deselect(&mut self) -> bool {
        match self.state {
            TabState::Created | TabState::Active => {
                self.state = TabState::Inactive;
                true
            }
            TabState::Inactive | TabState::Closed => false,
        }
    }

    /// User focused the tab. Fires the activate handler on every request,
    /// including one for a tab that is already active.
    pub fn request_activate(&mut self) -> bool {
        if self.state == TabState::Closed {
            return false;
        }
        self.state = TabState::Active;
        if let Some(handler) = self.on_activate.as_mut() {
            handler(&self.info);
        }
        true
    }

    /// User pressed the close affordance. Non-closable and already closed
    /// tabs ignore it.
    pub fn request_close(&mut self) -> bool {
        if !self.info.closable || self.state == TabState::Closed {
            return false;
        }
        if let Some(handler) = self.on_close_request.as_mut() {
            handler(&self.info);
        }
        self.state = TabState::Closed;
        // A closed tab never calls out again.
        self.on_activate = None;
        self.on_close_request = None;
        true
    }
}
