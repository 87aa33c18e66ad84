pub mod actions;
pub mod errors;
pub mod id;
pub mod types;

pub use actions::{Action, StoreAction, TabRef};
pub use errors::{ConfigError, DockError, TabdeckError};
pub use id::{new_id, WidgetId};
pub use types::{Rect, WidgetKind};

pub type Result<T> = std::result::Result<T, TabdeckError>;
