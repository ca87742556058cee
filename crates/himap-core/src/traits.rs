use crate::types::{Marker, School, Viewport};

/// Capabilities the session needs from the external map widget.
///
/// Rendering, clustering and pan/zoom animation all live behind this trait.
/// Interaction callbacks travel the other way as [`MapEvent`]s handed to the
/// session.
pub trait MapWidget {
    fn init(&mut self) -> crate::error::Result<()>;
    fn show_markers(&mut self, markers: &[Marker]);
    fn move_to(&mut self, viewport: &Viewport);
    fn show_detail(&mut self, school: Option<&School>);
}

/// Interactions reported by the map widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    MarkerActivated(String),
    BackgroundActivated,
    ZoomChanged(u8),
}
