use himap_core::catalog::{Catalog, LoadStatus};
use himap_core::config::Settings;
use himap_core::error::Result;
use himap_core::facets::{Coed, Establishment, SchoolType};
use himap_core::traits::{MapEvent, MapWidget};
use himap_core::types::{Marker, School, Viewport};
use himap_search::{filter, FilterState, SearchMatcher};

use crate::viewport::{Selection, SelectionController};

/// Full-screen text shown when the map widget cannot start.
pub const WIDGET_FAILED_MESSAGE: &str = "지도를 불러오지 못했습니다.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetStatus {
    Ready,
    Failed(String),
}

/// All state behind one map screen.
///
/// Every user or widget interaction goes through a method here. Filtered
/// markers and search suggestions are derived on demand from the current
/// fields and never cached.
pub struct Session<W> where W: MapWidget {
    catalog: Catalog,
    filters: FilterState,
    matcher: SearchMatcher,
    query: String,
    suggestions_open: bool,
    controller: SelectionController,
    sidebar_open: bool,
    widget: W,
    widget_status: WidgetStatus,
}

impl<W> Session<W> where W: MapWidget {
    pub fn new(settings: &Settings, mut widget: W) -> Self {
        let widget_status = match widget.init() {
            Ok(()) => WidgetStatus::Ready,
            Err(e) => {
                tracing::error!(error = %e, "map widget failed to initialize");
                WidgetStatus::Failed(e.to_string())
            }
        };
        let mut session = Self {
            catalog: Catalog::loading(),
            filters: FilterState::default(),
            matcher: SearchMatcher::new(settings.search.max_results),
            query: String::new(),
            suggestions_open: false,
            controller: SelectionController::new(&settings.map),
            sidebar_open: true,
            widget,
            widget_status,
        };
        session.sync_widget();
        session
    }

    /// Installs the loaded catalog. Only the first completed load is taken.
    pub fn install_catalog(&mut self, catalog: Catalog) -> bool {
        if self.catalog.status() != &LoadStatus::Loading {
            tracing::warn!("catalog already installed; ignoring reload");
            return false;
        }
        self.catalog = catalog;
        self.push_markers();
        true
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn load_status(&self) -> &LoadStatus { self.catalog.status() }
    pub fn regions(&self) -> Vec<String> { self.catalog.regions() }

    // --- facets ---

    pub fn filters(&self) -> &FilterState { &self.filters }

    pub fn toggle_type(&mut self, t: SchoolType) { self.filters.toggle_type(t); self.push_markers(); }
    pub fn toggle_coed(&mut self, c: Coed) { self.filters.toggle_coed(c); self.push_markers(); }
    pub fn toggle_establishment(&mut self, e: Establishment) { self.filters.toggle_establishment(e); self.push_markers(); }
    pub fn set_region(&mut self, region: impl Into<String>) { self.filters.set_region(region); self.push_markers(); }

    /// Clears every facet. The query text is left alone.
    pub fn reset_filters(&mut self) { self.filters.reset(); self.push_markers(); }

    pub fn visible(&self) -> Vec<&School> { filter(self.catalog.records(), &self.filters) }
    pub fn visible_count(&self) -> usize { self.visible().len() }

    // --- search box ---

    pub fn query(&self) -> &str { &self.query }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.suggestions_open = true;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.suggestions_open = false;
    }

    /// Re-opens the dropdown on focus when there is something to show.
    pub fn focus_search(&mut self) {
        self.suggestions_open = !self.matcher.search(self.catalog.records(), &self.query).is_empty();
    }

    pub fn close_suggestions(&mut self) { self.suggestions_open = false; }
    pub fn suggestions_open(&self) -> bool { self.suggestions_open }

    pub fn suggestions(&self) -> Vec<&School> {
        if !self.suggestions_open { return Vec::new(); }
        self.matcher.search(self.catalog.records(), &self.query)
    }

    /// Selects a suggestion, copies its name into the box and closes the list.
    pub fn pick_suggestion(&mut self, id: &str) -> Result<()> {
        let school = self.catalog.get(id)?;
        self.controller.select_record(school);
        self.query = school.name.clone();
        self.suggestions_open = false;
        self.push_focus();
        Ok(())
    }

    // --- selection & viewport ---

    pub fn select(&mut self, id: &str) -> Result<()> {
        let school = self.catalog.get(id)?;
        self.controller.select_record(school);
        self.push_focus();
        Ok(())
    }

    /// Closes the detail card.
    pub fn dismiss(&mut self) {
        if self.controller.selected().is_none() { return; }
        self.controller.dismiss();
        self.push_focus();
    }

    pub fn selection(&self) -> &Selection { self.controller.selection() }
    pub fn selected(&self) -> Option<&School> { self.controller.selected() }
    pub fn viewport(&self) -> Viewport { self.controller.viewport() }

    pub fn handle_map_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::MarkerActivated(id) => {
                if let Err(e) = self.select(&id) { tracing::warn!(marker = %id, error = %e, "activated marker has no school"); }
            }
            MapEvent::BackgroundActivated => {
                if self.controller.background_activated() { self.push_focus(); }
            }
            MapEvent::ZoomChanged(level) => self.controller.zoom_changed(level),
        }
    }

    // --- chrome ---

    pub fn sidebar_open(&self) -> bool { self.sidebar_open }
    pub fn toggle_sidebar(&mut self) { self.sidebar_open = !self.sidebar_open; }

    pub fn widget_status(&self) -> &WidgetStatus { &self.widget_status }

    pub fn blocking_message(&self) -> Option<&'static str> {
        match self.widget_status {
            WidgetStatus::Ready => None,
            WidgetStatus::Failed(_) => Some(WIDGET_FAILED_MESSAGE),
        }
    }

    pub fn widget(&self) -> &W { &self.widget }

    /// Pushes markers, viewport and detail card to the widget.
    pub fn sync_widget(&mut self) {
        self.push_markers();
        self.push_focus();
    }

    fn push_markers(&mut self) {
        if self.widget_status != WidgetStatus::Ready { return; }
        let markers: Vec<Marker> = filter(self.catalog.records(), &self.filters).into_iter().map(Marker::from).collect();
        tracing::debug!(markers = markers.len(), "pushing markers");
        self.widget.show_markers(&markers);
    }

    fn push_focus(&mut self) {
        if self.widget_status != WidgetStatus::Ready { return; }
        self.widget.move_to(&self.controller.viewport());
        self.widget.show_detail(self.controller.selected());
    }
}
