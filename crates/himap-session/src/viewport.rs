use himap_core::config::MapSettings;
use himap_core::types::{School, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Idle,
    Focused(School),
}

/// Owns the selected school and the map viewport so both change together.
#[derive(Debug, Clone)]
pub struct SelectionController {
    selection: Selection,
    viewport: Viewport,
    focused_level: u8,
    dismiss_on_background_click: bool,
}

impl SelectionController {
    pub fn new(settings: &MapSettings) -> Self {
        Self {
            selection: Selection::Idle,
            viewport: settings.default_viewport(),
            focused_level: settings.focused_level,
            dismiss_on_background_click: settings.dismiss_on_background_click,
        }
    }

    pub fn selection(&self) -> &Selection { &self.selection }

    pub fn selected(&self) -> Option<&School> {
        match &self.selection {
            Selection::Focused(s) => Some(s),
            Selection::Idle => None,
        }
    }

    pub fn viewport(&self) -> Viewport { self.viewport }

    /// Focuses `school`, replacing any previous selection, and zooms in on it.
    pub fn select_record(&mut self, school: &School) {
        self.viewport = Viewport { center: school.position(), level: self.focused_level };
        self.selection = Selection::Focused(school.clone());
    }

    /// Clears the selection. The viewport stays where it is.
    pub fn dismiss(&mut self) { self.selection = Selection::Idle; }

    /// Empty map space was clicked. Returns whether that dismissed anything.
    pub fn background_activated(&mut self) -> bool {
        if !self.dismiss_on_background_click || self.selected().is_none() { return false; }
        self.dismiss();
        true
    }

    pub fn zoom_changed(&mut self, level: u8) { self.viewport.level = level; }
}
