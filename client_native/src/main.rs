mod app;
mod audio;
mod camera;
mod clock;
mod fsm;
mod input;
mod mesh;
mod renderer;
mod scene;
mod settings;

use std::path::Path;

use anyhow::Context;

use app::App;
use settings::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load(Path::new("pong.toml"))?;
    let config = settings.to_config();
    config.validate().context("invalid configuration")?;

    log::info!(
        "starting {} ({}x{} @ {} Hz)",
        settings.caption,
        config.field_width,
        config.field_height,
        config.tick_rate
    );

    App::new(settings, config)?.run()
}
