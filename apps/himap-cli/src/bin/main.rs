use std::env;

use anyhow::{anyhow, bail};
use tracing_subscriber::{fmt, EnvFilter};

use himap_core::catalog::{Catalog, LoadStatus};
use himap_core::config::Config;
use himap_core::facets::{coed_label, school_type_label, Coed, Establishment, FacetValue, SchoolType};
use himap_core::traits::{MapEvent, MapWidget};
use himap_core::types::{Marker, School, Viewport};
use himap_session::Session;

/// Stand-in for the browser map: logs pins and camera moves, prints the card.
struct ConsoleMap;

impl MapWidget for ConsoleMap {
    fn init(&mut self) -> himap_core::error::Result<()> { Ok(()) }

    fn show_markers(&mut self, markers: &[Marker]) { tracing::debug!(markers = markers.len(), "markers placed"); }

    fn move_to(&mut self, viewport: &Viewport) {
        tracing::debug!(lat = viewport.center.lat, lng = viewport.center.lng, level = viewport.level, "camera moved");
    }

    fn show_detail(&mut self, school: Option<&School>) {
        let Some(s) = school else { return };
        println!("{}", s.name);
        println!("  [{}] [{}] [{}]", school_type_label(&s.school_type), s.establishment, coed_label(&s.coed));
        println!("  {}", s.address);
        println!("  {}", s.phone);
        if !s.website.is_empty() { println!("  홈페이지 방문 → {}", s.website); }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();
}

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <schools|regions|search|filter|select> [args...]", prog);
        eprintln!("  filter [--type T] [--coed C] [--establishment E] [--region R]");
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

fn parse_facet<T: FacetValue>(flag: &str, value: Option<&String>) -> anyhow::Result<T> {
    let value = value.ok_or_else(|| anyhow!("{} requires a value", flag))?;
    T::parse(value).ok_or_else(|| {
        let options: Vec<&str> = T::ALL.iter().map(|v| v.code()).collect();
        anyhow!("unknown value '{}' for {} (expected one of: {})", value, flag, options.join(", "))
    })
}

fn print_row(s: &School) {
    println!("{}\t{}\t{} · {}", s.id, s.name, s.address, school_type_label(&s.school_type));
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let dataset = config.dataset_path()?;
    let (cmd, args) = parse_args();

    let catalog = tokio::runtime::Runtime::new()?.block_on(async { Catalog::load(&dataset).await });
    if let LoadStatus::Failed(reason) = catalog.status() {
        eprintln!("⚠️  School data unavailable ({}); results will be empty", reason);
    }

    let mut session = Session::new(&settings, ConsoleMap);
    if let Some(message) = session.blocking_message() { bail!("{}", message); }
    session.install_catalog(catalog);

    match cmd.as_str() {
        "schools" => println!("{}", serde_json::to_string_pretty(session.catalog().records())?),
        "regions" => {
            for region in session.regions() { println!("{}", region); }
        }
        "search" => {
            let query = args.join(" ");
            session.set_query(query.as_str());
            let hits = session.suggestions();
            println!("🔍 {} suggestions for \"{}\"", hits.len(), query);
            for s in hits { print_row(s); }
        }
        "filter" => {
            let mut i = 0;
            while i < args.len() {
                let flag = args[i].as_str();
                let value = args.get(i + 1);
                match flag {
                    "--type" => session.toggle_type(parse_facet::<SchoolType>(flag, value)?),
                    "--coed" => session.toggle_coed(parse_facet::<Coed>(flag, value)?),
                    "--establishment" => session.toggle_establishment(parse_facet::<Establishment>(flag, value)?),
                    "--region" => session.set_region(value.ok_or_else(|| anyhow!("--region requires a value"))?.as_str()),
                    _ => bail!("unknown filter flag '{}'", flag),
                }
                i += 2;
            }
            let visible = session.visible();
            println!("표시 학교: {}개", visible.len());
            for s in visible { print_row(s); }
        }
        "select" => {
            let id = args.first().ok_or_else(|| anyhow!("Usage: himap select <id>"))?;
            session.handle_map_event(MapEvent::MarkerActivated(id.clone()));
            if session.selected().is_none() { bail!("no school with id '{}'", id); }
        }
        _ => { eprintln!("Unknown command: {}", cmd); std::process::exit(1); }
    }
    Ok(())
}
