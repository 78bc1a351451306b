// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use filvis::{
    config::Config,
    controllers::{action_for_key, KeyAction, OscController},
    Installation,
};

struct Model {
    // Core components:
    installation: Installation,

    // Comms components:
    osc_controller: Option<OscController>,

    // FPS
    last_update: Instant,
    fps: f32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to the built-in defaults
    let config = Config::load().unwrap_or_else(|e| {
        log::warn!("{}; using default config", e);
        Config::default()
    });

    // Create window
    app.new_window()
        .title(format!("filvis {}", env!("CARGO_PKG_VERSION")))
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .resized(resized)
        .build()
        .expect("Failed to create window");

    let mut installation = Installation::on_setup(&config);
    installation.on_resized(app.window_rect());

    // Without a listener the app still runs, just without live tuning
    let osc_controller = match OscController::new(config.osc.rx_port) {
        Ok(controller) => Some(controller),
        Err(e) => {
            log::error!("{}", e);
            None
        }
    };

    Model {
        installation,
        osc_controller,
        last_update: Instant::now(),
        fps: 0.0,
    }
}

fn now_ms(app: &App) -> f32 {
    app.time * 1000.0
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    if model.installation.debug && duration.as_secs_f32() > 0.0 {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    // Drain OSC messages
    let commands = match model.osc_controller.as_mut() {
        Some(osc) => {
            osc.process_messages();
            osc.take_commands()
        }
        None => Vec::new(),
    };

    model.installation.on_update(now_ms(app), commands);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    model
        .installation
        .on_draw(&draw, app.window_rect(), model.fps);

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match action_for_key(key) {
        Some(KeyAction::ToggleFullscreen) => {
            let window = app.main_window();
            window.set_fullscreen(!window.is_fullscreen());
        }
        Some(action) => model.installation.on_key(action, now_ms(app)),
        None => (),
    }
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    model
        .installation
        .on_mouse_pressed(app.mouse.position(), app.window_rect());
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    model.installation.on_mouse_moved(position);
}

fn mouse_released(_app: &App, model: &mut Model, _button: MouseButton) {
    model.installation.on_mouse_released();
}

fn resized(app: &App, model: &mut Model, _size: Vec2) {
    model.installation.on_resized(app.window_rect());
}
