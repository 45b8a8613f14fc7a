//! Terminal blockfall runner.
//!
//! Menu, gameplay and the game-over sequence all run on one fixed-tick loop.
//! Input comes from crossterm events; held movement keys repeat on the game
//! clock rather than the terminal's auto-repeat.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use blockfall::core::Session;
use blockfall::input::{handle_key_event, should_quit, HeldTracker};
use blockfall::score::{ScoreStore, HIGH_SCORE_FILE};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, GAME_OVER_LINGER_MS, HIGH_SCORE_LINGER_MS, TICK_MS};

/// How long the menu waits for a key before refreshing the screen.
const MENU_POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = ScoreStore::new(HIGH_SCORE_FILE);
    let view = GameView::default();

    loop {
        if !menu(term, &view, &store)? {
            return Ok(());
        }
        if !play(term, &view, &store)? {
            return Ok(());
        }
        // Coming back from the game-over flash; start the menu clean.
        term.invalidate();
    }
}

/// Show the start menu until a key is pressed.
///
/// Returns `false` when the player quit instead of starting a game.
fn menu(term: &mut TerminalRenderer, view: &GameView, store: &ScoreStore) -> Result<bool> {
    let high_score = store.read_high_score();

    loop {
        let viewport = current_viewport();
        term.draw(view.render_menu(viewport, high_score))?;

        if event::poll(Duration::from_millis(MENU_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(false);
                }
                return Ok(true);
            }
        }
    }
}

/// Run one game session to completion.
///
/// Returns `false` when the player quit instead of playing out the game.
fn play(term: &mut TerminalRenderer, view: &GameView, store: &ScoreStore) -> Result<bool> {
    let mut session = Session::new(time_seed());
    let mut tracker = HeldTracker::new();
    let high_score = store.read_high_score();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let viewport = current_viewport();
        term.draw(view.render(&session, viewport, high_score))?;

        if session.game_over() {
            return game_over(term, view, store, &session, high_score);
        }

        // Spend the rest of the tick waiting for input.
        let budget = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(budget)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(false);
                }
                dispatch_key(&mut session, &mut tracker, key);
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS, tracker.held());
        }
    }
}

/// Route one key event into the session and the held tracker.
///
/// Direction keys go through the tracker so the press edge applies exactly
/// once; terminal auto-repeat events are dropped because held keys repeat
/// on the game clock inside `Session::tick`.
fn dispatch_key(session: &mut Session, tracker: &mut HeldTracker, key: KeyEvent) {
    match key.kind {
        KeyEventKind::Press => {
            if let Some(action) = tracker.handle_key_press(key.code) {
                session.apply(action);
            } else if let Some(action) = handle_key_event(key) {
                let is_direction = matches!(
                    action,
                    GameAction::MoveLeft | GameAction::MoveRight | GameAction::SoftDrop
                );
                if !is_direction {
                    session.apply(action);
                }
            }
        }
        KeyEventKind::Repeat => {}
        KeyEventKind::Release => tracker.handle_key_release(key.code),
    }
}

/// Post-game sequence: linger on the final board, persist the score, then
/// flash the high-score screen when the run set (or tied) the record.
fn game_over(
    term: &mut TerminalRenderer,
    view: &GameView,
    store: &ScoreStore,
    session: &Session,
    previous: u32,
) -> Result<bool> {
    thread::sleep(Duration::from_millis(GAME_OVER_LINGER_MS));

    let candidate = session.score();
    store.write_high_score(candidate, previous)?;
    if candidate >= previous {
        let viewport = current_viewport();
        term.draw(view.render_banner(viewport, "NEW HIGH SCORE"))?;
    }
    thread::sleep(Duration::from_millis(HIGH_SCORE_LINGER_MS));

    Ok(true)
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos()
}
