use std::io::stdout;
use std::sync::Arc;

use anyhow::Context;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tinylink_engine::{
    ArboardClipboard, ControllerSettings, ReqwestShortenClient, SubmissionController,
};
use tinylink_logging::{tinylink_info, tinylink_warn};

use super::cli::Cli;
use super::input::{translate_key, translate_paste};
use super::intents::IntentRunner;
use super::logging;
use super::ui;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.log_level());

    let settings = cli.shorten_settings();
    tinylink_info!(
        "Starting tinylink endpoint={} timeout_ms={}",
        settings.endpoint(),
        settings.request_timeout.as_millis()
    );

    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    let controller = SubmissionController::new(
        Arc::new(ReqwestShortenClient::new(settings)),
        Arc::new(ArboardClipboard::new()),
        ControllerSettings::default(),
    );
    let runner = IntentRunner::new(runtime.handle().clone(), controller.clone());

    let mut terminal = ratatui::init();
    if let Err(err) = execute!(stdout(), EnableBracketedPaste) {
        tinylink_warn!("Bracketed paste unavailable: {}", err);
    }
    let result = event_loop(&mut terminal, &controller, &runner);
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    // Let in-flight requests be abandoned instead of blocking exit.
    runtime.shutdown_background();
    tinylink_info!("Exiting tinylink");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    controller: &SubmissionController,
    runner: &IntentRunner,
) -> anyhow::Result<()> {
    let mut updates = controller.subscribe();
    let mut needs_draw = true;
    loop {
        // Redraw when the controller published a new snapshot, or on resize.
        if needs_draw || updates.has_changed().unwrap_or(false) {
            let view = updates.borrow_and_update().clone();
            terminal
                .draw(|frame| ui::render::render(frame, &view))
                .context("draw frame")?;
            needs_draw = false;
        }

        if !event::poll(ui::constants::FRAME_INTERVAL).context("poll terminal events")? {
            continue;
        }
        let view = controller.snapshot();
        let action = match event::read().context("read terminal event")? {
            Event::Key(key) => translate_key(&key, &view),
            Event::Paste(pasted) => translate_paste(&pasted, &view),
            Event::Resize(..) => {
                needs_draw = true;
                continue;
            }
            _ => continue,
        };
        if !runner.dispatch(action) {
            return Ok(());
        }
    }
}
