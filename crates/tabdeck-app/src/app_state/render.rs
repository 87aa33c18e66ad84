//! Text rendering of the dock: tab bar, then the visible tab's view.

use super::core::TabdeckApp;

impl TabdeckApp {
    /// The dock as it currently looks.
    pub fn render(&self) -> String {
        if !self.surface.is_attached() {
            return "(dock not attached)".to_string();
        }
        let bar = self.tab_bar();
        let rule = "-".repeat(bar.chars().count().max(24));
        let mut lines = vec![bar, rule];
        lines.extend(self.content_lines());
        lines.join("\n")
    }

    /// Headers in tab order. The visible tab is marked `<..>`, closable
    /// tabs carry an `x`.
    fn tab_bar(&self) -> String {
        let current = self.surface.current();
        let headers: Vec<String> = self
            .surface
            .tabs()
            .enumerate()
            .map(|(i, tab)| {
                let close = if tab.closable() { " x" } else { "" };
                let label = format!("{}:{}{close}", i + 1, tab.title());
                if current == Some(tab.id()) {
                    format!("<{label}>")
                } else {
                    format!("[{label}]")
                }
            })
            .collect();

        if headers.is_empty() {
            "(no tabs)".to_string()
        } else {
            headers.join(" ")
        }
    }

    fn content_lines(&self) -> Vec<String> {
        let Some(id) = self.surface.current() else {
            return Vec::new();
        };
        let Some(mount) = self.mounts.get(id) else {
            return Vec::new();
        };
        let shown = self
            .surface
            .container(mount.container)
            .is_some_and(|c| c.visible && c.rect.is_some());
        if !shown {
            return vec!["(no room for content)".to_string()];
        }
        mount.view.render(&self.store)
    }
}
