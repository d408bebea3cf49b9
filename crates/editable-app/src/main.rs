//! Main application entry point (native).

fn main() {
    env_logger::init();
    log::info!("Starting editable label");

    if let Err(e) = editable_app::App::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
