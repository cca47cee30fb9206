//! Status bar message shared by the panels

use eframe::egui::{self, Color32, RichText};

#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    is_error: bool,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: "Ready".to_string(),
            is_error: false,
        }
    }
}

impl StatusLine {
    pub fn info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = false;
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = true;
        log::warn!("{}", self.message);
    }

    pub fn ui(&self, ui: &mut egui::Ui) {
        let color = if self.is_error {
            Color32::LIGHT_RED
        } else {
            Color32::WHITE
        };
        ui.label(RichText::new(&self.message).color(color));
    }
}
