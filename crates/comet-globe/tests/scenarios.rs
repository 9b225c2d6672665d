//! End-to-end behaviour of the globe state without a window or GPU.

use comet_globe::{
    globe::{Globe, LOAD_ERROR_STATUS},
    presenter::Presenter,
};
use neo_catalog::{decode_records, Details, Record};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;

const VIEWPORT: (u32, u32) = (1280, 720);

#[derive(Debug, Default)]
struct RecordingPresenter {
    status: Vec<String>,
    shown: Vec<Vec<String>>,
    hidden: usize,
}

impl Presenter for RecordingPresenter {
    fn show_status(&mut self, text: &str) {
        self.status.push(text.to_owned());
    }

    fn show_details(&mut self, details: &Details) {
        self.shown.push(details.lines());
    }

    fn hide_details(&mut self) {
        self.hidden += 1;
    }
}

fn globe(seed: u64) -> Globe<RecordingPresenter> {
    Globe::new(RecordingPresenter::default(), VIEWPORT, StdRng::seed_from_u64(seed))
}

fn xa_payload() -> Vec<u8> {
    json!([{
        "object_name": "2023 XA",
        "object": "XA",
        "epoch_tdb": "2460000.5",
        "e": "0.3",
        "i_deg": "12.1",
        "q_au_1": "1.0",
        "q_au_2": "1.2"
    }])
    .to_string()
    .into_bytes()
}

/// Pixel position of marker `i` as currently projected.
fn marker_on_screen(g: &Globe<RecordingPresenter>, i: usize) -> (f64, f64) {
    let group = &g.scene.markers;
    let world = group.world_position(&group.children()[i]);
    let ndc = g.scene.camera.world_to_ndc(world);
    let (w, h) = g.viewport();
    (
        ((ndc.x + 1.0) * 0.5 * w as f32) as f64,
        ((1.0 - ndc.y) * 0.5 * h as f32) as f64,
    )
}

#[test]
fn loaded_comet_can_be_inspected() {
    let mut g = globe(7);
    g.on_fetch_result(decode_records(&xa_payload()));

    assert_eq!(g.presenter.status.last().map(String::as_str), Some("Loaded 1 Near-Earth comets"));
    assert_eq!(g.scene.markers.len(), 1);

    let (x, y) = marker_on_screen(&g, 0);
    g.on_click(x, y);

    assert_eq!(
        g.presenter.shown.last().cloned(),
        Some(vec![
            "Object: XA".to_owned(),
            "Epoch (TDB): 2460000.5".to_owned(),
            "Eccentricity: 0.3".to_owned(),
            "Inclination (degrees): 12.1".to_owned(),
            "Semi-major axis (AU): 1.2".to_owned(),
        ])
    );
}

#[test]
fn marker_stays_clickable_while_spinning() {
    let mut g = globe(11);
    g.on_fetch_result(decode_records(&xa_payload()));

    for _ in 0..500 {
        g.tick();
    }

    let (x, y) = marker_on_screen(&g, 0);
    g.on_click(x, y);
    assert_eq!(g.presenter.shown.len(), 1);
}

#[test]
fn empty_payload_is_a_load_error() {
    let mut g = globe(1);
    let hidden_before = g.presenter.hidden;

    g.on_fetch_result(decode_records(b"[]"));
    assert_eq!(g.presenter.status.last().map(String::as_str), Some(LOAD_ERROR_STATUS));
    assert!(g.scene.markers.is_empty());

    g.on_click(640.0, 360.0);
    assert!(g.presenter.shown.is_empty());
    assert_eq!(g.presenter.hidden, hidden_before + 1);
}

#[test]
fn malformed_payload_is_a_load_error() {
    let mut g = globe(1);
    g.on_fetch_result(decode_records(b"{\"error\": true}"));
    assert_eq!(g.presenter.status.last().map(String::as_str), Some(LOAD_ERROR_STATUS));
    assert!(g.records().is_empty());
}

#[test]
fn zero_width_range_clears_markers() {
    let mut g = globe(3);
    g.on_fetch_result(decode_records(&xa_payload()));
    assert_eq!(g.scene.markers.len(), 1);

    g.filter.min_altitude = 0.0;
    g.filter.max_altitude = 0.0;
    g.apply_filter();
    assert!(g.scene.markers.is_empty());

    // Records survive the filter.
    assert_eq!(g.records().len(), 1);
}

#[test]
fn filter_selects_same_records_each_time() {
    let records: Vec<Record> = (0..40)
        .map(|i| {
            let q = 6000.0 + 250.0 * i as f64;
            serde_json::from_value(json!({
                "object_name": format!("P/{}", i),
                "q_au_1": q.to_string(),
                "q_au_2": "0"
            }))
            .unwrap()
        })
        .collect();

    let mut g = globe(5);
    g.on_fetch_result(Ok(records));
    assert_eq!(g.scene.markers.len(), g.records().len());

    g.filter.min_altitude = 1000.0;
    g.filter.max_altitude = 4000.0;

    g.apply_filter();
    let first: Vec<_> = g.scene.markers.children().iter().map(|m| m.record).collect();
    g.apply_filter();
    let second: Vec<_> = g.scene.markers.children().iter().map(|m| m.record).collect();

    assert_eq!(first, second);
    // q in [7371, 10371] ⇒ i in 6..=17.
    assert_eq!(first, (6..=17).collect::<Vec<_>>());
}
