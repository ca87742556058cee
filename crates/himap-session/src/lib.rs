pub mod session;
pub mod viewport;

pub use session::{Session, WidgetStatus, WIDGET_FAILED_MESSAGE};
pub use viewport::{Selection, SelectionController};
