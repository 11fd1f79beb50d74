use std::time::Instant;

use eframe::egui;
use tracing::debug;

use crate::config::AppConfig;
use crate::gate::RedrawGate;
use crate::model::NetworkParameters;
use crate::render::{CurveRenderer, Plot};

/// Desktop front end: parameter controls, the graph and its formula.
pub struct VisualizerApp {
    config: AppConfig,
    params: NetworkParameters,
    renderer: CurveRenderer,
    gate: RedrawGate,
    texture: Option<egui::TextureHandle>,
    formula: String,
    status: String,
    last_poll: Option<Instant>,
}

impl VisualizerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self::with_config(config);
        // draw once up front rather than waiting for the first tick
        app.poll(&cc.egui_ctx);
        app
    }

    fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            params: NetworkParameters::default(),
            renderer: CurveRenderer::default(),
            gate: RedrawGate::new(),
            texture: None,
            formula: String::new(),
            status: "Ready".into(),
            last_poll: None,
        }
    }

    /// Redraws if the parameters changed since the last redraw.
    fn poll(&mut self, ctx: &egui::Context) {
        self.last_poll = Some(Instant::now());
        if let Some(plot) = self.gate.poll(self.params, &self.renderer) {
            self.show(ctx, plot);
        }
    }

    fn show(&mut self, ctx: &egui::Context, plot: Plot) {
        // replacing the handle frees the previous texture
        self.texture = Some(ctx.load_texture("network-curve", plot.image, egui::TextureOptions::NEAREST));
        if self.config.copy_formula_to_clipboard {
            ctx.copy_text(plot.formula.clone());
        }
        debug!(formula = %plot.formula, "graph updated");
        self.formula = plot.formula;
    }

    fn poll_due(&self) -> bool {
        self.last_poll
            .is_none_or(|at| at.elapsed() >= self.config.redraw_interval())
    }

    fn draw_parameter_ui(&mut self, ui: &mut egui::Ui) {
        let speed = f64::from(self.config.drag_speed);
        ui.horizontal_wrapped(|ui| {
            for (name, value) in self.params.fields_mut() {
                ui.label(format!("{name}:"));
                ui.add(egui::DragValue::new(value).speed(speed).max_decimals(3));
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Randomize").clicked() {
                self.params = NetworkParameters::random();
                self.status = "Randomized parameters".into();
            }
            if ui.button("Reset").clicked() {
                self.params = NetworkParameters::default();
                self.status = "Reset parameters".into();
            }
            if ui.button("Copy formula").clicked() {
                ui.ctx().copy_text(self.formula.clone());
                self.status = "Formula copied".into();
            }
        });
    }

    fn draw_graph(&self, ui: &mut egui::Ui) {
        match &self.texture {
            Some(texture) => {
                ui.image((texture.id(), texture.size_vec2()));
            }
            None => {
                ui.label("No graph yet.");
            }
        }
        ui.monospace(&self.formula);
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(&self.status);
            ui.separator();
            self.draw_parameter_ui(ui);
            ui.separator();
            self.draw_graph(ui);
        });

        if self.poll_due() {
            self.poll(ctx);
        }
        ctx.request_repaint_after(self.config.redraw_interval());
    }
}
