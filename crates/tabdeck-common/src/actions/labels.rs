use super::{Action, StoreAction};
use crate::types::WidgetKind;

impl Action {
    /// Human-readable label for the help listing.
    pub fn label(&self) -> &'static str {
        match self {
            Action::AddWidget(WidgetKind::Incrementor) => "Add Incrementor",
            Action::AddWidget(WidgetKind::Decrementor) => "Add Decrementor",
            Action::AddWidget(WidgetKind::Watcher) => "Add Watcher",
            Action::ClickTab(_) => "Activate Tab",
            Action::CloseTab(_) => "Close Tab",
            Action::ClickAt { .. } => "Click At Point",
            Action::PressButton => "Press Button",
            Action::Increment => "Increment",
            Action::Decrement => "Decrement",
            Action::IncrementByAmount(_) => "Increment By Amount",
            Action::IncrementAsync(_) => "Increment After Delay",
            Action::Resize { .. } => "Resize Window",
            Action::Show => "Show",
            Action::Help => "Help",
            Action::Quit => "Quit",
            Action::Wait(_) => "Wait",
            Action::None => "None",
        }
    }

    /// Actions listed by the `help` command.
    pub fn help_actions() -> Vec<Action> {
        vec![
            Action::AddWidget(WidgetKind::Incrementor),
            Action::AddWidget(WidgetKind::Decrementor),
            Action::AddWidget(WidgetKind::Watcher),
            Action::ClickTab(super::TabRef::Index(1)),
            Action::CloseTab(super::TabRef::Index(1)),
            Action::ClickAt { x: 0, y: 0 },
            Action::PressButton,
            Action::Increment,
            Action::Decrement,
            Action::IncrementByAmount(1),
            Action::IncrementAsync(1),
            Action::Resize {
                width: 0,
                height: 0,
            },
            Action::Show,
            Action::Wait(0),
            Action::Help,
            Action::Quit,
        ]
    }
}

impl StoreAction {
    /// Slice-qualified name, in the `slice/action` form the action log prints.
    pub fn name(&self) -> &'static str {
        match self {
            StoreAction::Increment => "counter/increment",
            StoreAction::Decrement => "counter/decrement",
            StoreAction::IncrementByAmount(_) => "counter/incrementByAmount",
            StoreAction::AddWidget { .. } => "widgets/addWidget",
            StoreAction::DeleteWidget(_) => "widgets/deleteWidget",
            StoreAction::ActivateWidget(_) => "widgets/activateWidget",
        }
    }
}
