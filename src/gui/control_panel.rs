//! Control Panel Widget
//! Left side panel with all chart settings and group inputs.

use crate::chart::{
    BarColor, ChartParams, AXIS_NUM_FONT_RANGE, FIG_HEIGHT_RANGE, FIG_WIDTH_RANGE,
    LABEL_FONT_RANGE, LINE_WIDTH_RANGE, NUM_GROUPS_RANGE, TICK_FONT_RANGE, TITLE_FONT_RANGE,
};
use egui::{Color32, ComboBox, DragValue, RichText, Slider};

/// Left side control panel. Owns the chart parameters the rest of the app
/// renders from.
pub struct ControlPanel {
    pub params: ChartParams,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            params: ChartParams::default(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, can_open_export: bool) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 SigPlot")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Bar Chart Builder")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Labels Section =====
        ui.label(RichText::new("🖊 Labels").size(14.0).strong());
        ui.add_space(5.0);

        let label_width = 110.0;
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Chart Title:"));
            ui.text_edit_singleline(&mut self.params.title);
        });
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("X Axis Title:"));
            ui.text_edit_singleline(&mut self.params.x_label);
        });
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Y Axis Title:"));
            ui.text_edit_singleline(&mut self.params.y_label);
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Font Sizes Section =====
        ui.label(RichText::new("🔤 Font Sizes").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(Slider::new(&mut self.params.title_font_size, TITLE_FONT_RANGE).text("Title"));
        ui.add(
            Slider::new(&mut self.params.label_font_size, LABEL_FONT_RANGE).text("Axis labels"),
        );
        ui.add(Slider::new(&mut self.params.tick_font_size, TICK_FONT_RANGE).text("Tick labels"));
        ui.add(
            Slider::new(&mut self.params.axis_num_font_size, AXIS_NUM_FONT_RANGE)
                .text("Axis numbers"),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Figure Section =====
        ui.label(RichText::new("📐 Figure").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            Slider::new(&mut self.params.line_width, LINE_WIDTH_RANGE)
                .step_by(0.1)
                .text("Line width"),
        );

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Figure size:"));
            ui.add(
                DragValue::new(&mut self.params.fig_width)
                    .range(FIG_WIDTH_RANGE)
                    .speed(0.5),
            );
            ui.label("×");
            ui.add(
                DragValue::new(&mut self.params.fig_height)
                    .range(FIG_HEIGHT_RANGE)
                    .speed(0.5),
            );
        });

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Bar color:"));
            ComboBox::from_id_salt("bar_color")
                .width(150.0)
                .selected_text(self.params.bar_color.label())
                .show_ui(ui, |ui| {
                    for color in BarColor::ALL {
                        if ui
                            .selectable_label(self.params.bar_color == color, color.label())
                            .clicked()
                        {
                            self.params.bar_color = color;
                        }
                    }
                });
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(rect, 3.0, self.params.bar_color.color32());
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Groups Section =====
        ui.label(RichText::new("📦 Groups").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Group count:"));
            let mut count = self.params.num_groups();
            if ui
                .add(DragValue::new(&mut count).range(NUM_GROUPS_RANGE))
                .changed()
            {
                self.params.set_num_groups(count);
            }
        });
        ui.add_space(5.0);

        for index in 0..self.params.num_groups() {
            let group = &mut self.params.groups[index];
            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.add_sized([50.0, 20.0], egui::Label::new("Name:"));
                        ui.text_edit_singleline(&mut group.name);
                    });
                    ui.horizontal(|ui| {
                        ui.add_sized([50.0, 20.0], egui::Label::new("Mean:"));
                        ui.add(DragValue::new(&mut group.mean).speed(0.1));
                        ui.add_space(10.0);
                        ui.label("Std error:");
                        ui.add(DragValue::new(&mut group.std_error).speed(0.05));
                    });
                });
            ui.add_space(4.0);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Significance Section =====
        ui.label(RichText::new("⭐ Significant Pairs").size(14.0).strong());
        ui.add_space(5.0);

        let names = self.params.group_names();
        if names.len() < 2 {
            ui.label(
                RichText::new("Needs at least two groups")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                let mut significant = self.params.has_pair(i, j);
                let label = format!("{} vs {}", names[i], names[j]);
                if ui.checkbox(&mut significant, label).changed() {
                    self.params.set_pair(i, j, significant);
                }
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("💾 Export PNG").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::ExportPng;
            }

            ui.add_space(8.0);

            ui.add_enabled_ui(can_open_export, |ui| {
                let open_button =
                    egui::Button::new(RichText::new("🖼 Open Last Export").size(14.0))
                        .min_size(egui::vec2(150.0, 30.0));
                if ui.add(open_button).clicked() {
                    action = ControlPanelAction::OpenExport;
                }
            });
        });

        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    ExportPng,
    OpenExport,
}
