use anyhow::Result;
use flappy_core::{FlappyApp, GameConfig, TICK_RATE};
use flappy_sdl2::App;
use flappy_sdl2::{SdlContext, SdlInitInfo};

/// Build the game from `config` and play it in an SDL2 window until the
/// player quits.
pub fn run(config: &GameConfig) -> Result<()> {
    let app = FlappyApp::from_config(config);
    log::info!(
        "Best score file: '{}'",
        app.session.store().path().display()
    );

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .tick_rate(TICK_RATE)
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
