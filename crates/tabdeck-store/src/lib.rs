//! State container for tabdeck: a counter slice and a widget registry
//! slice, plus a scheduler for actions that fire after a delay.

pub mod counter;
pub mod scheduler;
pub mod store;
pub mod widgets;

pub use counter::CounterState;
pub use scheduler::{DelayedDispatcher, ScheduledTask};
pub use store::{RootState, Store};
pub use widgets::{WidgetDescriptor, WidgetRegistry};
