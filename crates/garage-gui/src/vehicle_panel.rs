//! Vehicle management panel: registration form and service queue

use eframe::egui::{self, Color32, RichText, Ui};
use garage_domain::Garage;
use garage_types::{VehicleKind, VehicleStatus};

use crate::status::StatusLine;

/// Panel for registering vehicles and driving service sessions
pub struct VehiclePanel {
    /// New vehicle form fields
    new_kind: VehicleKind,
    new_name: String,
    new_license: String,
    new_owner: String,
    /// Vehicle selected in the queue
    selected_id: Option<String>,
}

impl VehiclePanel {
    pub fn new() -> Self {
        Self {
            new_kind: VehicleKind::Car,
            new_name: String::new(),
            new_license: String::new(),
            new_owner: String::new(),
            selected_id: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, garage: &mut Garage, status: &mut StatusLine) {
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                self.render_add_form(ui, garage, status);
            });
            columns[1].group(|ui| {
                self.render_queue(ui, garage);
                ui.add_space(8.0);
                self.render_controls(ui, garage, status);
            });
        });
    }

    fn render_add_form(&mut self, ui: &mut Ui, garage: &mut Garage, status: &mut StatusLine) {
        ui.label(RichText::new("Register New Vehicle").strong());
        ui.add_space(5.0);

        egui::Grid::new("add_vehicle_form")
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Type:");
                egui::ComboBox::from_id_salt("vehicle_kind")
                    .selected_text(self.new_kind.label())
                    .show_ui(ui, |ui| {
                        for kind in VehicleKind::ALL {
                            ui.selectable_value(&mut self.new_kind, kind, kind.label());
                        }
                    });
                ui.end_row();

                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.new_name)
                        .hint_text("e.g. Mustang")
                        .desired_width(200.0),
                );
                ui.end_row();

                ui.label("License:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.new_license)
                        .hint_text("e.g. XYZ123")
                        .desired_width(200.0),
                );
                ui.end_row();

                ui.label("Owner:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.new_owner)
                        .hint_text("e.g. Dom")
                        .desired_width(200.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Add Vehicle").clicked() {
            self.add_vehicle(garage, status);
        }
    }

    fn add_vehicle(&mut self, garage: &mut Garage, status: &mut StatusLine) {
        match garage.register_vehicle(
            self.new_kind,
            &self.new_name,
            &self.new_license,
            &self.new_owner,
        ) {
            Ok(vehicle) => {
                status.info(format!("Vehicle {} added.", vehicle.id));
                // Clear form
                self.new_name.clear();
                self.new_license.clear();
                self.new_owner.clear();
            }
            Err(e) => status.error(e.to_string()),
        }
    }

    fn render_queue(&mut self, ui: &mut Ui, garage: &Garage) {
        ui.label(RichText::new("Service Queue").strong());
        ui.add_space(5.0);

        let vehicles = garage.vehicles();
        if vehicles.is_empty() {
            ui.label(
                RichText::new("No vehicles registered")
                    .italics()
                    .color(Color32::GRAY),
            );
            return;
        }

        egui::ScrollArea::vertical()
            .max_height(ui.available_height() * 0.7)
            .show(ui, |ui| {
                egui::Grid::new("vehicle_queue")
                    .num_columns(6)
                    .spacing([10.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for header in ["ID", "Type", "Name", "License", "Owner", "Status"] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for vehicle in vehicles {
                            let selected = self.selected_id.as_deref() == Some(vehicle.id.as_str());
                            if ui.selectable_label(selected, &vehicle.id).clicked() {
                                self.selected_id = Some(vehicle.id.clone());
                            }
                            ui.label(vehicle.kind.label());
                            ui.label(&vehicle.name);
                            ui.label(&vehicle.license);
                            ui.label(&vehicle.owner);
                            let status_color = match vehicle.status {
                                VehicleStatus::Waiting => Color32::LIGHT_GRAY,
                                VehicleStatus::InService => Color32::LIGHT_GREEN,
                            };
                            ui.label(RichText::new(vehicle.status.label()).color(status_color))
                                .on_hover_text(format!("Added {}", vehicle.registered_label()));
                            ui.end_row();
                        }
                    });
            });
    }

    fn render_controls(&mut self, ui: &mut Ui, garage: &mut Garage, status: &mut StatusLine) {
        let active = garage.current_session().is_some();

        ui.horizontal(|ui| {
            let start = egui::Button::new("Start Service").fill(Color32::from_rgb(0x2e, 0xcc, 0x71));
            if ui.add_enabled(!active, start).clicked() {
                self.start_service(garage, status);
            }

            let stop = egui::Button::new("Complete Service").fill(Color32::from_rgb(0xe7, 0x4c, 0x3c));
            if ui.add_enabled(active, stop).clicked() {
                match garage.stop_service() {
                    Ok(session) => status.info(format!(
                        "Service completed. {} Duration {}",
                        session.vehicle.stop_message(),
                        session.duration_label().unwrap_or_default()
                    )),
                    Err(e) => status.error(e.to_string()),
                }
            }

            let check = egui::Button::new("Check Fuel Efficiency").fill(Color32::from_rgb(0xf3, 0x9c, 0x12));
            if ui.add(check).clicked() {
                match garage.sample_fuel_efficiency() {
                    Ok(reading) => status.info(format!("Fuel efficiency: {}", reading)),
                    Err(e) => status.error(e.to_string()),
                }
            }
        });
    }

    fn start_service(&mut self, garage: &mut Garage, status: &mut StatusLine) {
        let Some(id) = self.selected_id.clone() else {
            status.error("Select a vehicle");
            return;
        };

        match garage.start_service(&id) {
            Ok(session) => status.info(format!(
                "Service started for {}. {}",
                session.vehicle.name,
                session.vehicle.start_message()
            )),
            Err(e) => status.error(e.to_string()),
        }
    }
}

impl Default for VehiclePanel {
    fn default() -> Self {
        Self::new()
    }
}
