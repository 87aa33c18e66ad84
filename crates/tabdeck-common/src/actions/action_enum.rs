use serde::{Deserialize, Serialize};

use super::TabRef;
use crate::id::WidgetId;
use crate::types::WidgetKind;

/// Every user-triggerable action in the application.
///
/// Console commands and scripted input both resolve to an `Action`.
/// The composition root matches on this enum to route to the store or
/// the dock surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    // -- Widgets --
    AddWidget(WidgetKind),

    // -- Tabs --
    ClickTab(TabRef),
    CloseTab(TabRef),
    /// Click at a point in window coordinates; lands on a tab header or
    /// its close box.
    ClickAt { x: u32, y: u32 },
    PressButton,

    // -- Counter --
    Increment,
    Decrement,
    IncrementByAmount(i64),
    IncrementAsync(i64),

    // -- Window --
    Resize { width: u32, height: u32 },
    Show,
    Help,
    Quit,
    /// Pause input for this many milliseconds, letting delayed actions land.
    Wait(u64),

    // -- Noop --
    None,
}

/// A mutation request for the state container.
///
/// Ids for new widgets are minted by the caller so that applying an
/// action is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum StoreAction {
    Increment,
    Decrement,
    IncrementByAmount(i64),
    AddWidget {
        kind: WidgetKind,
        id: WidgetId,
        title: String,
    },
    DeleteWidget(WidgetId),
    ActivateWidget(WidgetId),
}
