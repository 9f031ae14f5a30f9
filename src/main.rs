//! Simple progress bar demo
//! Hosts the dual-layer progress bar in a window with controls to drive it

use simple_progressbar::app;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = simple_progressbar::features::Settings::load();
    let window_size = iced::Size::new(settings.window_width, settings.window_height);

    iced::application(move || app::App::new(settings.clone()), app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .window_size(window_size)
        .antialiasing(true)
        .run()
}
