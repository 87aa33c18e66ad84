use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// The three widget flavours a tab can host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Incrementor,
    Decrementor,
    Watcher,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 3] = [
        WidgetKind::Incrementor,
        WidgetKind::Decrementor,
        WidgetKind::Watcher,
    ];

    /// Tab label used when a widget of this kind is added without a title.
    pub fn default_title(self) -> &'static str {
        match self {
            WidgetKind::Incrementor => "Incrementor",
            WidgetKind::Decrementor => "Decrementor",
            WidgetKind::Watcher => "Watcher",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetKind::Incrementor => "incrementor",
            WidgetKind::Decrementor => "decrementor",
            WidgetKind::Watcher => "watcher",
        };
        f.write_str(s)
    }
}

impl FromStr for WidgetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "incrementor" | "inc" => Ok(WidgetKind::Incrementor),
            "decrementor" | "dec" => Ok(WidgetKind::Decrementor),
            "watcher" | "watch" => Ok(WidgetKind::Watcher),
            other => Err(format!("unknown widget kind '{other}'")),
        }
    }
}
