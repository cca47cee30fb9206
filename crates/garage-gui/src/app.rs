//! Main application structure with tab navigation

use eframe::egui::{self, Color32, RichText};
use garage_app::app::export_records;
use garage_app::config::Config;
use garage_domain::Garage;
use garage_types::ExportError;

use crate::records_panel::RecordsPanel;
use crate::status::StatusLine;
use crate::vehicle_panel::VehiclePanel;

/// Application tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Vehicles,
    Records,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Vehicles => "Vehicle Management",
            Tab::Records => "Service Records",
        }
    }
}

/// Main application state
pub struct GarageApp {
    /// Currently selected tab
    current_tab: Tab,
    vehicle_panel: VehiclePanel,
    records_panel: RecordsPanel,
    status: StatusLine,
    /// Application configuration
    config: Config,
    /// In-memory garage state
    garage: Garage,
}

impl GarageApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        Self {
            current_tab: Tab::default(),
            vehicle_panel: VehiclePanel::new(),
            records_panel: RecordsPanel::new(),
            status: StatusLine::default(),
            config: Config::load_or_default(),
            garage: Garage::new(),
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("FAST & FURIOUS GARAGE")
                    .size(28.0)
                    .strong()
                    .color(Color32::RED),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let export = egui::Button::new(RichText::new("Export Records").color(Color32::WHITE))
                    .fill(Color32::RED);
                if ui.add(export).clicked() {
                    self.export();
                }
            });
        });
    }

    fn export(&mut self) {
        if self.garage.records().is_empty() {
            self.status.error(ExportError::EmptyStore.to_string());
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .set_directory(self.config.export_dir())
            .set_file_name(format!("service_records.{}", self.config.export_format.extension()))
            .add_filter("Excel", &["xlsx"])
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };

        match export_records(&self.garage, Some(&path), &self.config) {
            Ok(written) => self
                .status
                .info(format!("Exported successfully! ({})", written.display())),
            Err(e) => self.status.error(e.to_string()),
        }
    }

    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in [Tab::Vehicles, Tab::Records] {
                let selected = self.current_tab == tab;
                if ui.selectable_label(selected, tab.label()).clicked() {
                    self.current_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
    }
}

impl eframe::App for GarageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            self.render_tab_bar(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.status.ui(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Vehicles => {
                self.vehicle_panel
                    .ui(ui, &mut self.garage, &mut self.status);
            }
            Tab::Records => {
                self.records_panel.ui(ui, &self.garage);
            }
        });
    }
}
