use serde::{Deserialize, Serialize};

mod action_enum;
mod labels;

pub use action_enum::*;

/// How a console command names a tab: by its 1-based position in the tab
/// bar or by a prefix of its widget id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TabRef {
    Index(usize),
    IdPrefix(String),
}

impl TabRef {
    /// Numbers are positions, anything else is an id prefix.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.parse::<usize>() {
            Ok(n) => Some(TabRef::Index(n)),
            Err(_) => Some(TabRef::IdPrefix(s.to_string())),
        }
    }
}
