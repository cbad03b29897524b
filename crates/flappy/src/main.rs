use flappy_core::GameConfig;

fn main() {
    env_logger::init();

    let config = GameConfig::default();
    if let Err(err) = flappy::run(&config) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
