//! Desktop preview app for twinkle-fox
//!
//! Renders the twinkling strip in a window with interactive controls.
//! Tunables go through the intent channel; LED count and gamma changes
//! rebuild the renderer.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use twinkle_fox::{
    ConfigError, FilterConfig, Instant, IntentChannel, IntentSender, PaletteId, Renderer,
    RendererConfig, Rgb, TwinkleIntent, Waveform, filter::WS2812_GAMMA, palette::DEFAULT_ROTATION,
};

/// Maximum number of LEDs the renderer supports
const MAX_LEDS: usize = 300;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 100;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

const INTENT_CHANNEL_SIZE: usize = 16;

/// Static intent channel for communication between UI and renderer
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("TwinkleFOX Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "twinkle-fox-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()?))),
    )
}

struct PreviewApp {
    renderer: Renderer<'static, MAX_LEDS, INTENT_CHANNEL_SIZE>,
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,

    // UI state (tracked to detect changes and send intents)
    palette: PaletteId,
    speed: u8,
    density: u8,
    waveform: Waveform,
    cooling: bool,
    background: [u8; 3],
    brightness: u8,
    apply_gamma: bool,
    led_count: usize,
    led_size: f32,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
}

impl PreviewApp {
    fn new() -> Result<Self, ConfigError> {
        let config = RendererConfig::new(DEFAULT_LED_COUNT);
        let background = config.twinkle.background;
        let renderer = Renderer::new(INTENTS_CHANNEL.receiver(), &config)?;

        Ok(Self {
            renderer,
            intent_sender: INTENTS_CHANNEL.sender(),
            palette: DEFAULT_ROTATION[0],
            speed: config.twinkle.speed,
            density: config.twinkle.density,
            waveform: config.twinkle.waveform,
            cooling: config.twinkle.cool_like_incandescent,
            background: [background.r, background.g, background.b],
            brightness: config.filters.brightness,
            apply_gamma: false,
            led_count: DEFAULT_LED_COUNT,
            led_size: LED_SIZE,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
        })
    }

    fn background_color(&self) -> Rgb {
        let [r, g, b] = self.background;
        Rgb::new(r, g, b)
    }

    fn send(&self, intent: TwinkleIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    /// Rebuild the renderer from the current UI state
    ///
    /// Palette rotation restarts from the selected palette.
    fn rebuild(&mut self) {
        let mut config = RendererConfig::new(self.led_count);
        config.twinkle.speed = self.speed;
        config.twinkle.density = self.density;
        config.twinkle.waveform = self.waveform;
        config.twinkle.cool_like_incandescent = self.cooling;
        config.twinkle.background = self.background_color();
        config.filters = FilterConfig {
            brightness: self.brightness,
            gamma: self.apply_gamma.then_some(WS2812_GAMMA),
        };

        if let Ok(renderer) = Renderer::new(INTENTS_CHANNEL.receiver(), &config) {
            self.renderer = renderer;
            self.send(TwinkleIntent::SelectPalette(self.palette));
        }
    }

    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            if delta_ms.is_finite() && delta_ms > 0.0 {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let delta_ms = delta_ms as u64;
                self.t_ms = self.t_ms.wrapping_add(delta_ms);
            }
        }
    }

    fn playback_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                if ui.button("⏮ Reset").clicked() {
                    self.reset_time();
                }
                let label = if self.playing { "⏸ Pause" } else { "▶ Play" };
                if ui.button(label).clicked() {
                    self.playing = !self.playing;
                }
            });

            ui.add_space(4.0);
            ui.label(format!("Time: {}.{:03}s", self.t_ms / 1000, self.t_ms % 1000));

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Time scale:");
                ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=10.0).logarithmic(true));
            });
        });
    }

    fn strip_controls(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label("Size:");
                ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("LEDs:");
                let old_led_count = self.led_count;
                ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                if self.led_count != old_led_count {
                    self.rebuild();
                }
            });

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Brightness:");
                let old_brightness = self.brightness;
                ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                if self.brightness != old_brightness {
                    self.send(TwinkleIntent::Brightness(self.brightness));
                }

                ui.add_space(8.0);
                if ui.checkbox(&mut self.apply_gamma, "WS2812 Gamma").changed() {
                    self.rebuild();
                }
            });
        });
    }

    fn twinkle_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Palette:");
            let mut selected = self.palette;
            egui::ComboBox::from_id_salt("palette_selector")
                .selected_text(self.palette.as_str())
                .show_ui(ui, |ui| {
                    for id in DEFAULT_ROTATION {
                        ui.selectable_value(&mut selected, id, id.as_str());
                    }
                });
            if selected != self.palette {
                self.palette = selected;
                self.send(TwinkleIntent::SelectPalette(selected));
            }
            if ui.button("Next").clicked() {
                self.send(TwinkleIntent::NextPalette);
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Speed:");
            if ui.add(egui::Slider::new(&mut self.speed, 0..=8)).changed() {
                self.send(TwinkleIntent::Speed(self.speed));
            }
            ui.add_space(8.0);
            ui.label("Density:");
            if ui.add(egui::Slider::new(&mut self.density, 0..=8)).changed() {
                self.send(TwinkleIntent::Density(self.density));
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Waveform:");
            let old_waveform = self.waveform;
            ui.selectable_value(&mut self.waveform, Waveform::Triangle, "triangle");
            ui.selectable_value(&mut self.waveform, Waveform::AttackDecay, "attack/decay");
            if self.waveform != old_waveform {
                self.send(TwinkleIntent::Waveform(self.waveform));
            }

            ui.add_space(8.0);
            if ui.checkbox(&mut self.cooling, "Incandescent cooling").changed() {
                self.send(TwinkleIntent::Cooling(self.cooling));
            }

            ui.add_space(8.0);
            ui.label("Background:");
            if ui.color_edit_button_srgb(&mut self.background).changed() {
                self.send(TwinkleIntent::Background(self.background_color()));
            }
        });
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        let now = Instant::from_millis(self.t_ms);
        let frame = self.renderer.render(now).to_vec();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.playback_controls(ui);
                ui.add_space(16.0);
                self.strip_controls(ui);
            });

            ui.add_space(16.0);
            self.twinkle_controls(ui);
            ui.add_space(16.0);

            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let x = origin.x + (i % leds_per_row) as f32 * led_pitch;
                let y = origin.y + (i / leds_per_row) as f32 * led_pitch;
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
            }
        });
    }
}
