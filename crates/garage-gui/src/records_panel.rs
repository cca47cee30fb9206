//! Service records panel

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use garage_domain::{Garage, RECORD_HEADERS};

/// Read-only view of closed records plus the session in progress
#[derive(Default)]
pub struct RecordsPanel;

impl RecordsPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut Ui, garage: &Garage) {
        ui.heading("Service Records");
        ui.label(format!("{} completed", garage.records().count()));
        ui.separator();

        let rows = garage.record_rows();
        if rows.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("No service records yet").color(Color32::GRAY));
            });
            return;
        }

        ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("records_grid")
                .num_columns(RECORD_HEADERS.len())
                .spacing([14.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    for header in RECORD_HEADERS {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in &rows {
                        for cell in row.cells() {
                            // Highlight the open session
                            if row.in_progress {
                                ui.label(RichText::new(cell).color(Color32::from_rgb(0xff, 0xfa, 0xcd)));
                            } else {
                                ui.label(cell);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
    }
}
