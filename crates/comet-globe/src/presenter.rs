//! Presentation port for the status line and the detail panel.

use neo_catalog::Details;

/// Where the viewer publishes user-facing text.
pub trait Presenter {
    fn show_status(&mut self, text: &str);
    fn show_details(&mut self, details: &Details);
    fn hide_details(&mut self);
}

/// Backing state for the egui HUD, drawn every frame by `ui::draw_hud`.
#[derive(Debug, Default, Clone)]
pub struct HudPresenter {
    status: String,
    details: Option<Details>,
}

impl HudPresenter {
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The visible detail panel, if any.
    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }
}

impl Presenter for HudPresenter {
    fn show_status(&mut self, text: &str) {
        text.clone_into(&mut self.status);
    }

    fn show_details(&mut self, details: &Details) {
        self.details = Some(details.clone());
    }

    fn hide_details(&mut self) {
        self.details = None;
    }
}
