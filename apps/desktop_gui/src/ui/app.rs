use std::time::Duration;

use client_core::{ChapterPicker, Stepper, DEFAULT_MAX_VERSES, DEFAULT_MIN_VERSES, DEFAULT_VERSES};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub server_url: String,
    pub initial_verses: i64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            initial_verses: DEFAULT_VERSES,
        }
    }
}

pub struct DesktopGuiApp {
    picker: ChapterPicker,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    status: String,
}

impl DesktopGuiApp {
    pub fn new(
        startup: StartupConfig,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        let stepper = Stepper::new(startup.initial_verses, DEFAULT_MIN_VERSES, DEFAULT_MAX_VERSES);
        Self {
            picker: ChapterPicker::new(stepper),
            cmd_tx,
            ui_rx,
            status: format!("Server: {}", startup.server_url),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::SequenceFetched(result) => {
                self.picker.complete(result);
            }
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), "{}", err.message());
                self.status = err.status_text();
            }
        }
    }

    fn find_chapters(&mut self) {
        // validation failures surface through the picker notice
        let Ok(verse_count) = self.picker.trigger() else {
            return;
        };
        if let Err(err) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::FetchSequence { verse_count })
        {
            self.picker.cancel();
            self.status = err.status_text();
        }
    }

    fn show_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("Verse Count Picker");
        ui.add_space(8.0);

        let mut submit = false;
        ui.horizontal(|ui| {
            ui.label("Verses:");
            if ui.button("-").clicked() {
                self.picker.stepper.decrement();
            }
            let field = ui.add(
                egui::TextEdit::singleline(self.picker.stepper.text_mut()).desired_width(72.0),
            );
            if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }
            if ui.button("+").clicked() {
                self.picker.stepper.increment();
            }
        });

        ui.add_space(8.0);
        let trigger = self.picker.trigger_state();
        ui.horizontal(|ui| {
            if ui
                .add_enabled(trigger.enabled, egui::Button::new(trigger.label))
                .clicked()
            {
                submit = true;
            }
            if self.picker.is_busy() {
                ui.spinner();
            }
        });
        if submit && trigger.enabled {
            self.find_chapters();
        }

        let result = self.picker.result();
        if result.visible {
            ui.add_space(12.0);
            ui.separator();
            if result.is_error {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, &result.text);
            } else {
                ui.label(&result.text);
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.picker.notice().map(str::to_owned) else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Invalid input")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.picker.dismiss_notice();
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(&self.status);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(self.picker.notice().is_none(), |ui| self.show_picker(ui));
        });
        self.show_notice(ctx);

        if self.picker.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
