use std::fs;

use himap_core::catalog::{Catalog, LoadStatus};
use himap_core::config::{MapSettings, Settings};
use himap_core::error::{Error, Result};
use himap_core::facets::{Coed, SchoolType};
use himap_core::traits::{MapEvent, MapWidget};
use himap_core::types::{LatLng, Marker, School, Viewport};
use himap_session::{Selection, SelectionController, Session, WidgetStatus, WIDGET_FAILED_MESSAGE};

#[derive(Default)]
struct RecordingWidget {
    markers: Vec<Marker>,
    viewport: Option<Viewport>,
    detail: Option<String>,
    marker_pushes: usize,
}

impl MapWidget for RecordingWidget {
    fn init(&mut self) -> Result<()> { Ok(()) }
    fn show_markers(&mut self, markers: &[Marker]) { self.markers = markers.to_vec(); self.marker_pushes += 1; }
    fn move_to(&mut self, viewport: &Viewport) { self.viewport = Some(*viewport); }
    fn show_detail(&mut self, school: Option<&School>) { self.detail = school.map(|s| s.id.clone()); }
}

struct BrokenWidget;

impl MapWidget for BrokenWidget {
    fn init(&mut self) -> Result<()> { Err(Error::Widget("sdk script blocked".to_string())) }
    fn show_markers(&mut self, _markers: &[Marker]) { panic!("widget is down"); }
    fn move_to(&mut self, _viewport: &Viewport) { panic!("widget is down"); }
    fn show_detail(&mut self, _school: Option<&School>) { panic!("widget is down"); }
}

fn school(id: &str, name: &str, region: &str, school_type: &str, lat: f64, lng: f64) -> School {
    School {
        id: id.to_string(),
        name: name.to_string(),
        english_name: String::new(),
        school_type: school_type.to_string(),
        establishment: "공립".to_string(),
        address: String::new(),
        address_detail: String::new(),
        latitude: lat,
        longitude: lng,
        phone: String::new(),
        fax: String::new(),
        website: String::new(),
        coed: "남여공학".to_string(),
        region: region.to_string(),
        admission_timing: String::new(),
        day_night: String::new(),
        founded_date: String::new(),
    }
}

fn seoul_busan() -> Catalog {
    Catalog::from_schools(vec![
        school("1", "Seoul High", "Seoul", "일반고", 37.5, 127.0),
        school("2", "Busan High", "Busan", "특목고", 35.1, 129.0),
    ])
}

fn session_with(settings: &Settings) -> Session<RecordingWidget> {
    let mut session = Session::new(settings, RecordingWidget::default());
    assert!(session.install_catalog(seoul_busan()));
    session
}

fn marker_ids(session: &Session<RecordingWidget>) -> Vec<String> {
    session.widget().markers.iter().map(|m| m.id.clone()).collect()
}

#[test]
fn scenario_select_then_dismiss_keeps_viewport() {
    let settings = Settings::default();
    let mut session = session_with(&settings);

    session.toggle_type(SchoolType::SpecialPurpose);
    assert_eq!(marker_ids(&session), vec!["2"]);
    assert_eq!(session.visible_count(), 1);

    session.set_query("seoul");
    let ids: Vec<&str> = session.suggestions().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1"]);

    session.select("2").expect("known id");
    session.dismiss();
    assert_eq!(session.selection(), &Selection::Idle);
    let expected = Viewport { center: LatLng { lat: 35.1, lng: 129.0 }, level: settings.map.focused_level };
    assert_eq!(session.viewport(), expected);
    assert_eq!(session.widget().viewport, Some(expected));
    assert_eq!(session.widget().detail, None);
}

#[test]
fn selecting_replaces_previous_selection_and_recenters() {
    let settings = MapSettings::default();
    let mut controller = SelectionController::new(&settings);
    assert_eq!(controller.viewport(), settings.default_viewport());

    let seoul = school("1", "Seoul High", "Seoul", "일반고", 37.5, 127.0);
    let busan = school("2", "Busan High", "Busan", "특목고", 35.1, 129.0);

    controller.select_record(&seoul);
    assert_eq!(controller.selected(), Some(&seoul));
    controller.select_record(&busan);
    assert_eq!(controller.selected(), Some(&busan));
    assert_eq!(controller.viewport().center, busan.position());
    assert_eq!(controller.viewport().level, 4);

    controller.dismiss();
    controller.dismiss();
    assert!(controller.selected().is_none());
    assert_eq!(controller.viewport().center, busan.position());
}

#[test]
fn marker_activation_selects_and_unknown_markers_are_ignored() {
    let mut session = session_with(&Settings::default());
    session.handle_map_event(MapEvent::MarkerActivated("1".to_string()));
    assert_eq!(session.selected().map(|s| s.id.as_str()), Some("1"));
    assert_eq!(session.widget().detail.as_deref(), Some("1"));

    session.handle_map_event(MapEvent::MarkerActivated("nope".to_string()));
    assert_eq!(session.selected().map(|s| s.id.as_str()), Some("1"));
    assert!(session.select("nope").is_err());
}

#[test]
fn background_click_follows_policy() {
    let mut session = session_with(&Settings::default());
    session.select("1").expect("known id");
    session.handle_map_event(MapEvent::BackgroundActivated);
    assert!(session.selected().is_some(), "policy off by default");

    let mut settings = Settings::default();
    settings.map.dismiss_on_background_click = true;
    let mut session = session_with(&settings);
    session.select("1").expect("known id");
    session.handle_map_event(MapEvent::BackgroundActivated);
    assert!(session.selected().is_none());
    session.handle_map_event(MapEvent::BackgroundActivated);
    assert!(session.selected().is_none());
}

#[test]
fn zoom_changes_track_the_widget() {
    let mut session = session_with(&Settings::default());
    session.select("1").expect("known id");
    session.handle_map_event(MapEvent::ZoomChanged(7));
    assert_eq!(session.viewport().level, 7);
    assert!(session.selected().is_some());
}

#[test]
fn picking_a_suggestion_fills_query_and_closes_dropdown() {
    let mut session = session_with(&Settings::default());
    session.set_query("high");
    assert_eq!(session.suggestions().len(), 2);

    session.pick_suggestion("2").expect("known id");
    assert_eq!(session.query(), "Busan High");
    assert!(!session.suggestions_open());
    assert!(session.suggestions().is_empty());
    assert_eq!(session.viewport().center, LatLng { lat: 35.1, lng: 129.0 });

    session.focus_search();
    assert!(session.suggestions_open());
    let refocused: Vec<&str> = session.suggestions().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(refocused, vec!["2"], "refocus searches the picked name");
    session.close_suggestions();
    session.clear_query();
    session.focus_search();
    assert!(!session.suggestions_open());
    assert!(session.suggestions().is_empty());
}

#[test]
fn reset_clears_facets_but_not_query() {
    let mut session = session_with(&Settings::default());
    session.set_query("busan");
    session.toggle_coed(Coed::Girls);
    session.set_region("Seoul");
    assert_eq!(session.visible_count(), 0);
    assert!(session.filters().is_active());

    session.reset_filters();
    assert!(!session.filters().is_active());
    assert_eq!(marker_ids(&session), vec!["1", "2"]);
    assert_eq!(session.query(), "busan");
    assert_eq!(session.regions(), vec!["Busan".to_string(), "Seoul".to_string()]);
}

#[test]
fn catalog_is_installed_once() {
    let mut session = session_with(&Settings::default());
    assert!(!session.install_catalog(Catalog::from_schools(Vec::new())));
    assert_eq!(session.catalog().len(), 2);
}

#[test]
fn sidebar_starts_open_and_toggles() {
    let mut session = session_with(&Settings::default());
    assert!(session.sidebar_open());
    session.toggle_sidebar();
    assert!(!session.sidebar_open());
}

#[test]
fn widget_failure_blocks_without_touching_the_widget() {
    let mut session = Session::new(&Settings::default(), BrokenWidget);
    assert!(matches!(session.widget_status(), WidgetStatus::Failed(_)));
    assert_eq!(session.blocking_message(), Some(WIDGET_FAILED_MESSAGE));

    session.install_catalog(seoul_busan());
    session.select("1").expect("state still tracked");
    session.toggle_type(SchoolType::General);
    assert_eq!(session.visible_count(), 1);
}

#[tokio::test]
async fn failed_dataset_load_leaves_an_empty_but_distinct_state() {
    let tmp = tempfile::TempDir::new().unwrap();
    let mut session = Session::new(&Settings::default(), RecordingWidget::default());
    assert_eq!(session.load_status(), &LoadStatus::Loading);

    session.install_catalog(Catalog::load(&tmp.path().join("absent.json")).await);
    assert!(matches!(session.load_status(), LoadStatus::Failed(_)));
    session.set_query("seoul");
    assert!(session.suggestions().is_empty());
    assert_eq!(session.visible_count(), 0);
    assert!(session.widget().markers.is_empty());
}

#[tokio::test]
async fn dataset_file_flows_into_markers() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("data.json");
    let rows = serde_json::json!([
        {"행정표준코드": "A", "학교명": "가", "시도명": "서울특별시", "Latitude": "37.5", "Longitude": "127.0"},
        {"행정표준코드": "B", "학교명": "나", "시도명": "서울특별시", "Latitude": "", "Longitude": "127.0"}
    ]);
    fs::write(&path, rows.to_string()).unwrap();

    let mut session = Session::new(&Settings::default(), RecordingWidget::default());
    let pushes = session.widget().marker_pushes;
    session.install_catalog(Catalog::load(&path).await);
    assert_eq!(session.load_status(), &LoadStatus::Ready);
    assert_eq!(session.widget().marker_pushes, pushes + 1);
    assert_eq!(marker_ids(&session), vec!["A"]);
}
