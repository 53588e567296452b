use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

mod actions;
mod dispatcher;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod store;
mod views;

use actions::{Action, GlobalAction, SessionAction};
use middleware::{
    high_score_middleware::HighScoreMiddleware, keyboard_middleware::KeyboardMiddleware,
    logging_middleware::LoggingMiddleware,
};
use shark_game::GameAction;
use store::Store;

/// Cadence of the splash animation
const SPLASH_FRAME: Duration = Duration::from_millis(150);
/// Cadence of the game clock - one tick per second, only while playing
const GAME_TICK: Duration = Duration::from_secs(1);

fn main() -> io::Result<()> {
    logger::init();

    log::info!("Starting hungry-shark");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize store with middleware
    let mut store = Store::new(Box::new(StdRng::from_os_rng()));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(HighScoreMiddleware::new()));

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting hungry-shark");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> io::Result<()> {
    let mut last_splash_frame = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Drive the splash animation, then dismiss it once its minimum
        // display time has elapsed
        if store.state().splash.visible {
            if store.state().splash.min_duration_elapsed() {
                store.dispatch(Action::Global(GlobalAction::SplashDone));
            } else if last_splash_frame.elapsed() >= SPLASH_FRAME {
                store.dispatch(Action::Global(GlobalAction::SplashTick));
                last_splash_frame = Instant::now();
            }
        }

        // The one-second game clock runs only while the game is live; the
        // timer re-arms on start so the first tick lands a full second in
        if store.state().game.started {
            if last_tick.elapsed() >= GAME_TICK {
                store.dispatch(Action::Game(GameAction::Tick));
                last_tick = Instant::now();
            }
        } else {
            last_tick = Instant::now();
        }

        // Hand the final score to the high-score store, once per game
        let state = store.state();
        if state.game.is_over() && !state.session.result_recorded {
            let score = state.game.score;
            store.dispatch(Action::Session(SessionAction::GameEnded(score)));
        }
    }

    Ok(())
}
