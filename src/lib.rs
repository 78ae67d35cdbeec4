//! A simulated internet speed test for the terminal, with animated gauges
//! and a short history of results.
//!
//! Nothing is actually measured: each phase waits a while and then picks a
//! number from a fixed range.

pub mod utils {
    pub mod cancellation_token;
    pub mod logging;
}

pub mod app;
pub mod canvas;
pub mod constants;
pub mod event;
pub mod measurement;
pub mod options;

use std::{
    io::{stderr, stdout, IsTerminal, Stdout, Write},
    panic::{self, PanicHookInfo},
    path::Path,
    sync::{
        mpsc::{self, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use anyhow::Context;
use app::App;
use crossterm::{
    cursor::{Hide, Show},
    event::{
        poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
        MouseEventKind,
    },
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::{handle_key_event_or_break, handle_mouse_event, SpeedEvent};
use time::UtcOffset;
use tui::{backend::CrosstermBackend, Terminal};
use utils::cancellation_token::CancellationToken;

use crate::{
    canvas::Painter,
    constants::TICK_RATE_IN_MILLISECONDS,
    options::{args, get_or_create_config, get_source, init_app},
};

/// Warn the user if they are not running in a terminal.
pub fn check_if_terminal() {
    if !stdout().is_terminal() {
        eprintln!(
            "Warning: speedcheck is not being output to a terminal. Things might not work properly."
        );
        eprintln!("If you're stuck, press 'q' or 'Ctrl-c' to quit the program.");
        let _ = stderr().flush();
        thread::sleep(Duration::from_secs(1));
    }
}

/// Resets the terminal back to how it was before speedcheck started.
pub fn cleanup_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Reset stdout back to normal state. Used when exiting on an error.
pub fn reset_stdout() {
    let mut stdout = stdout();
    let _ = disable_raw_mode();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, Show);
}

/// A panic hook to properly restore the terminal in the case of a panic.
/// Originally based on [spotify-tui's implementation](https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs).
pub fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let backtrace = format!("{:?}", backtrace::Backtrace::new());
    let location = panic_info
        .location()
        .map(|location| location.to_string())
        .unwrap_or_default();

    let _ = disable_raw_mode();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen, Show);

    // Print the stack trace. Must be done after leaving the alternate screen.
    let _ = execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{msg}', {location}\n\r{backtrace}",
        )),
    );
}

/// Reads terminal events on a separate thread and forwards them to the main
/// thread until cancelled.
pub fn create_input_thread(
    sender: Sender<SpeedEvent>, cancellation_token: Arc<CancellationToken>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        loop {
            if cancellation_token.is_cancelled() {
                break;
            }

            if let Ok(true) = poll(Duration::from_millis(20)) {
                let event = match read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        SpeedEvent::KeyInput(key)
                    }
                    Ok(Event::Mouse(mouse)) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                        SpeedEvent::MouseInput(mouse)
                    }
                    Ok(Event::Resize(_, _)) => SpeedEvent::Resize,
                    _ => continue,
                };

                if sender.send(event).is_err() {
                    break;
                }
            }
        }
    })
}

fn try_drawing(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App, painter: &Painter,
) -> anyhow::Result<()> {
    if let Err(err) = terminal.draw(|f| painter.draw_data(f, app)) {
        cleanup_terminal(terminal)?;
        return Err(err.into());
    }

    Ok(())
}

/// Main code to call to start speedcheck.
///
/// `enable_error_hook` is set once the terminal has been taken over, so the
/// caller knows to reset it if this returns an error.
pub fn start_speedcheck(enable_error_hook: &mut bool) -> anyhow::Result<()> {
    // This has to happen before any other thread is spawned.
    let utc_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let args = args::get_args();

    #[cfg(feature = "logging")]
    {
        let _ = utils::logging::OFFSET.set(utc_offset);
        if let Err(err) = utils::logging::init_logger(
            log::LevelFilter::Debug,
            Some(std::ffi::OsStr::new("debug.log")),
        ) {
            println!("Issue initializing logger: {err}");
        }
    }

    let config = get_or_create_config(args.general.config_location.as_deref().map(Path::new))
        .context("Unable to properly parse or create the config file.")?;

    let (app_config_fields, styles) = init_app(&args, &config)?;
    let source = get_source(&app_config_fields);
    let autostart = app_config_fields.autostart;

    check_if_terminal();

    let painter = Painter::init(styles);
    let (sender, receiver) = mpsc::channel();
    let mut app = App::new(app_config_fields, utc_offset, source, sender.clone());

    // Set up the termination handler before touching the terminal.
    {
        let sender = sender.clone();
        ctrlc::set_handler(move || {
            let _ = sender.send(SpeedEvent::Terminate);
        })?;
    }

    let cancellation_token = Arc::new(CancellationToken::default());
    let _input_thread = create_input_thread(sender, cancellation_token.clone());

    // Set up tui and crossterm
    *enable_error_hook = true;

    let mut stdout_val = stdout();
    execute!(stdout_val, Hide, EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(panic_hook));

    if autostart {
        app.on_action();
    }

    try_drawing(&mut terminal, &mut app, &painter)?;

    loop {
        if let Ok(recv) = receiver.recv_timeout(Duration::from_millis(TICK_RATE_IN_MILLISECONDS)) {
            match recv {
                SpeedEvent::Resize => {}
                SpeedEvent::KeyInput(event) => {
                    if handle_key_event_or_break(event, &mut app) {
                        break;
                    }
                }
                SpeedEvent::MouseInput(event) => handle_mouse_event(event, &mut app),
                SpeedEvent::Runner { run_id, event } => app.handle_runner_event(run_id, event),
                SpeedEvent::GaugeTick { gauge, generation } => {
                    app.handle_gauge_tick(gauge, generation)
                }
                SpeedEvent::Terminate => break,
            }
        }

        app.update(Instant::now());
        try_drawing(&mut terminal, &mut app, &painter)?;
    }

    cancellation_token.cancel();
    app.shutdown();
    cleanup_terminal(&mut terminal)?;

    Ok(())
}
