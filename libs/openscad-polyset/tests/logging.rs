//! # Logging Tests
//!
//! Conversion failures are the only user-visible signal for skipped
//! fragments, so they must reach the log under the `polyset` target.

use glam::DVec3;
use log::{Level, LevelFilter, Log, Metadata, Record};
use openscad_polyset::{Geometry, NefAdapter, PolySet, PolySetBuilder, PolySetError, PolySetResult};
use std::sync::{Arc, Mutex, Once};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((
                record.level(),
                record.target().to_string(),
                record.args().to_string(),
            ));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

fn captured() -> Vec<(Level, String, String)> {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    LOGGER.records.lock().unwrap().clone()
}

#[derive(Debug)]
struct BrokenNef;

impl NefAdapter for BrokenNef {
    fn to_polyset(&self) -> PolySetResult<PolySet> {
        Err(PolySetError::conversion_failed("Nef", "open shell"))
    }
}

#[test]
fn conversion_failure_is_logged_and_degenerate_drop_is_not() {
    captured();

    let mut builder = PolySetBuilder::default();
    builder.append_geometry(&Geometry::Nef(Arc::new(BrokenNef)));
    builder.append_polygon_points(&[DVec3::ZERO, DVec3::X]);
    assert_eq!(builder.dropped_polygons(), 1);

    let errors: Vec<_> = captured()
        .into_iter()
        .filter(|(level, target, _)| *level <= Level::Warn && target == "polyset")
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, Level::Error);
    assert!(errors[0].2.contains("Nef->PolySet failed"));
    assert!(errors[0].2.contains("open shell"));
}
