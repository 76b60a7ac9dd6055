//! A Housie/Tambola number-caller TUI.
//!
//! Draws unique numbers from 1–90 on a fixed cadence, speaks each one when a
//! text-to-speech command is available, and renders the 90-cell board.

use anyhow::Result;
use pico_args::Arguments;

use hc_client::{speech::SpeechAnnouncer, tui_app::TuiApp};
use housie::{CallerActor, CallerConfig, NullAnnouncer, announce::Announcer};

const HELP: &str = "\
A Housie/Tambola number caller

USAGE:
  hc_client [OPTIONS]

OPTIONS:
  --mute                Disable spoken announcements

FLAGS:
  -h, --help            Print help information
";

#[tokio::main]
async fn main() -> Result<()> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }
    let mute = pargs.contains("--mute");

    // stderr output would tear the board, so only log when asked to
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let announcer: Box<dyn Announcer> = if mute {
        Box::new(NullAnnouncer)
    } else {
        Box::new(SpeechAnnouncer::new())
    };
    let handle = CallerActor::spawn(CallerConfig::default(), announcer);
    let initial_view = handle.view().await?;

    // Initialize terminal
    let terminal = ratatui::init();

    let tui_app = TuiApp::new(initial_view);
    let result = tui_app.run(handle, terminal).await;

    // Restore terminal
    ratatui::restore();

    result
}
