//! Application state and its event handlers.
//!
//! `Globe` owns everything the viewer mutates: the record set, the scene,
//! camera controls, filter panel, presenter and random source. The winit loop
//! in `main.rs` (through `App`) calls one handler per event; there is no other
//! path to this state.

use crate::{
    camera::CameraController,
    filter::FilterPanel,
    picking::{client_to_ndc, pick_marker, ClickTracker},
    presenter::Presenter,
    scene::Scene,
};
use neo_catalog::{Details, FetchError, Record};
use rand::rngs::StdRng;
use winit::event::WindowEvent;

pub const LOADING_STATUS: &str = "Loading Near-Earth comets...";
pub const LOAD_ERROR_STATUS: &str = "An error occurred while loading data. Please try again later.";

pub fn loaded_status(count: usize) -> String {
    format!("Loaded {} Near-Earth comets", count)
}

pub struct Globe<P: Presenter> {
    pub scene: Scene,
    pub controls: CameraController,
    pub filter: FilterPanel,
    pub presenter: P,
    clicks: ClickTracker,
    records: Vec<Record>,
    viewport: (u32, u32),
    rng: StdRng,
}

impl<P: Presenter> Globe<P> {
    pub fn new(mut presenter: P, viewport: (u32, u32), rng: StdRng) -> Self {
        presenter.show_status(LOADING_STATUS);
        presenter.hide_details();

        let (w, h) = viewport;
        Self {
            scene: Scene::new(w.max(1) as f32 / h.max(1) as f32),
            controls: CameraController::new(),
            filter: FilterPanel::default(),
            presenter,
            clicks: ClickTracker::default(),
            records: Vec::new(),
            viewport,
            rng,
        }
    }

    /// The full record set. Empty until a fetch succeeds.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Stores the fetched records and builds one marker each, or reports the
    /// failure. An empty list counts as a failure.
    pub fn on_fetch_result(&mut self, outcome: Result<Vec<Record>, FetchError>) {
        match outcome {
            Ok(records) if !records.is_empty() => {
                self.records = records;
                self.rebuild_all();
                self.presenter.show_status(&loaded_status(self.records.len()));
                log::info!("Loaded {} near-Earth comet records", self.records.len());
            }
            Ok(_) => self.fail_load(&FetchError::Empty),
            Err(e) => self.fail_load(&e),
        }
    }

    fn fail_load(&mut self, err: &FetchError) {
        log::error!("Error fetching data: {}", err);
        self.presenter.show_status(LOAD_ERROR_STATUS);
    }

    /// Rebuilds markers for every record.
    pub fn rebuild_all(&mut self) {
        self.scene
            .rebuild_markers(&self.records, 0..self.records.len(), &mut self.rng);
    }

    /// Rebuilds markers from the records inside the panel's bounds.
    pub fn apply_filter(&mut self) {
        let ids = self.filter.select(&self.records);
        log::info!(
            "Filter [{}, {}] kept {} of {} records",
            self.filter.min_altitude,
            self.filter.max_altitude,
            ids.len(),
            self.records.len()
        );
        self.scene.rebuild_markers(&self.records, ids, &mut self.rng);
    }

    /// Shows the nearest marker under `(x, y)` (physical pixels) or hides the
    /// detail panel when nothing is hit.
    pub fn on_click(&mut self, x: f64, y: f64) {
        let (w, h) = self.viewport;
        let ndc = client_to_ndc(x, y, w as f32, h as f32);

        let details = pick_marker(&self.scene, ndc)
            .map(|hit| &self.scene.markers.children()[hit.marker])
            .and_then(|marker| self.records.get(marker.record))
            .map(Details::from_record);

        match details {
            Some(d) => self.presenter.show_details(&d),
            None => self.presenter.hide_details(),
        }
    }

    /// Routes pointer input to the orbit controls and click detection.
    pub fn on_pointer_event(&mut self, event: &WindowEvent) {
        self.controls.handle_event(event, self.viewport.1 as f32);
        if let Some((x, y)) = self.clicks.handle_event(event) {
            self.on_click(x, y);
        }
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.viewport = (width, height);
            self.scene.camera.set_viewport(width, height);
        }
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// One render-loop step: spin Earth and the markers, then ease the camera.
    pub fn tick(&mut self) {
        self.scene.advance();
        self.controls.update(&mut self.scene.camera);
    }
}
