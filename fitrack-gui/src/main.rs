#![windows_subsystem = "windows"]

use std::{error::Error, io::Write};

use iced::{Settings, Size};
use tracing::error;

use fitrack_ui::{component::text, font, theme};

use fitrack_gui::{
    args::{datadir_from_args, parse_args},
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let config = Config::new(datadir_from_args(&args)?);
    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("Fitrack".to_string()),
        antialiasing: false,

        default_text_size: text::Size::Body.px().into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 800.0,
            height: 700.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 400.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
