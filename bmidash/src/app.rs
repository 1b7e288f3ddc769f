//! BmiDash application

use std::time::Duration;

use bmicore::chart::history::CHART_SIZE;
use bmicore::chart::meter::{METER_HEIGHT, METER_WIDTH};
use bmicore::repaint::RepaintController;
use bmicore::theme::{consume_zoom_keys, menu_bar, DashColors, DashTheme};
use bmicore::widgets::{chart_canvas, status_bar, PillButton, ResultBar};
use bmicore::DashConfig;
use egui::{Context, Key, RichText};

use crate::state::DashState;

const WEIGHT_HINT: &str = "Enter weight (kg)";
const HEIGHT_HINT: &str = "Enter height (cm)";

pub struct BmiDashApp {
    state: DashState,
    show_about: bool,
    repaint: RepaintController,
}

impl BmiDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashConfig) -> Self {
        Self {
            state: DashState::new(config),
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    fn dialog_open(&self) -> bool {
        self.state.modal_open() || self.show_about
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_zoom_keys(ctx);
        if self.dialog_open() {
            return;
        }
        if ctx.input(|i| i.key_pressed(Key::Enter)) {
            self.state.submit();
        }
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("BMI CALCULATOR").size(22.0).strong());
        ui.add_space(10.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.state.weight_input)
                .hint_text(WEIGHT_HINT)
                .font(egui::FontId::proportional(14.0))
                .desired_width(180.0),
        );
        ui.add_space(5.0);
        ui.add(
            egui::TextEdit::singleline(&mut self.state.height_input)
                .hint_text(HEIGHT_HINT)
                .font(egui::FontId::proportional(14.0))
                .desired_width(180.0),
        );
        ui.add_space(5.0);
    }

    fn render_result(&self, ui: &mut egui::Ui) {
        match self.state.result() {
            Some(result) => {
                ui.label(
                    RichText::new(result.summary())
                        .size(16.0)
                        .strong()
                        .color(result.color()),
                );
            }
            None => {
                ui.label(RichText::new(" ").size(16.0));
            }
        }

        // Emoji, bouncing inside a fixed slot so the layout below stays put
        let (rect, _) = ui.allocate_exact_size(egui::vec2(60.0, 56.0), egui::Sense::hover());
        if let Some(result) = self.state.result() {
            let pos = rect.center() + egui::vec2(0.0, self.state.emoji_offset());
            ui.painter().text(
                pos,
                egui::Align2::CENTER_CENTER,
                result.emoji(),
                egui::FontId::proportional(40.0),
                DashColors::BLACK,
            );
        }

        ui.add_space(10.0);
        ui.add(ResultBar::new(self.state.bar_width()));
        ui.add_space(10.0);
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let clear = PillButton::new("CLEAR HISTORY", DashColors::CLEAR_BUTTON).font_size(12.0);
        if ui.add(clear).clicked() {
            self.state.request_clear();
        }
        ui.add_space(10.0);

        let calc = PillButton::new("CALCULATE", DashColors::CALC_BUTTON)
            .active_fill(DashColors::CALC_BUTTON_ACTIVE)
            .font_size(14.0);
        if ui.add(calc).clicked() {
            self.state.submit();
        }
    }

    fn render_charts(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            chart_canvas(
                ui,
                egui::vec2(CHART_SIZE, CHART_SIZE),
                self.state.chart_commands(),
            );
            ui.add_space(5.0);
            chart_canvas(
                ui,
                egui::vec2(METER_WIDTH, METER_HEIGHT),
                self.state.meter_commands(),
            );
        });
    }

    fn render_dialogs(&mut self, ctx: &Context) {
        if let Some(err) = self.state.error {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(err.to_string());
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.state.error = None;
                        }
                    });
                });
        }

        if self.state.confirm_clear {
            egui::Window::new("Clear History")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label("Delete all BMI history?");
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("no").clicked() {
                            self.state.confirm_clear = false;
                        }
                        if ui.button("yes").clicked() {
                            self.state.clear_history();
                        }
                    });
                });
        }

        if self.show_about {
            egui::Window::new("about bmi dashboard")
                .collapsible(false)
                .resizable(false)
                .default_width(260.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("bmi dashboard");
                        ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    });
                    ui.add_space(4.0);
                    ui.separator();
                    ui.label("bmi = weight (kg) / height (m)^2");
                    ui.label("  under 18.5   underweight");
                    ui.label("  18.5 - 24.9  normal");
                    ui.label("  24.9 - 29.9  overweight");
                    ui.label("  29.9 and up  obese");
                    ui.add_space(2.0);
                    ui.label("keys: Enter calculates");
                    ui.label("history is kept for this session only");
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }

    fn schedule_repaint(&mut self) {
        self.repaint.set_continuous(self.state.is_animating());
        if let Some(secs) = self.state.next_background_change() {
            self.repaint.schedule_in(Duration::from_secs_f32(secs));
        }
    }
}

impl eframe::App for BmiDashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let dt = self.repaint.begin_frame();
        self.state.update(dt);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("history", |ui| {
                    if ui.button("clear...").clicked() {
                        self.state.request_clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let text = match self.state.history().last() {
                Some(last) => format!(
                    "{} entries  |  last {}",
                    self.state.history().len(),
                    bmicore::bmi::format_value(last)
                ),
                None => "no entries".to_string(),
            };
            status_bar(ui, &text);
        });

        egui::SidePanel::right("charts")
            .resizable(false)
            .frame(DashTheme::chart_frame())
            .show(ctx, |ui| {
                self.render_charts(ui);
            });

        let bg = self.state.background();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(bg).inner_margin(egui::Margin::same(20.0)))
            .show(ctx, |ui| {
                // Dialogs are modal: nothing behind them takes input
                let enabled = !self.dialog_open();
                ui.vertical_centered(|ui| {
                    ui.add_enabled_ui(enabled, |ui| self.render_inputs(ui));
                    self.render_result(ui);
                    ui.add_enabled_ui(enabled, |ui| self.render_buttons(ui));
                });
            });

        self.render_dialogs(ctx);

        self.schedule_repaint();
        self.repaint.end_frame(ctx);
    }
}
