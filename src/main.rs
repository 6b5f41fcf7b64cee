//! Dino Dash entry point
//!
//! Drives the simulation at ~60 Hz: drain terminal input into the intent
//! queue, tick the simulation with the measured delta, paint the snapshot,
//! sleep off the remainder of the frame.

use std::io::{self, Stdout, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, terminal,
};

use dino_dash::ScoreBoard;
use dino_dash::input::IntentQueue;
use dino_dash::platform::{FrameClock, delta_seconds};
use dino_dash::render::Renderer;
use dino_dash::sim::{GamePhase, RunState, tick};

/// Target frame duration (~60 Hz)
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::init();

    let seed = seed_from_args().unwrap_or_else(seed_from_time);
    log::info!("Dino Dash starting (seed {seed})");

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let result = run(&mut out, seed);

    execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut Stdout, seed: u64) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut renderer = Renderer::new(cols, rows);
    let mut state = RunState::new(seed);
    let mut queue = IntentQueue::new();
    let mut board = ScoreBoard::new();

    let clock = FrameClock::new();
    let mut last_ms = clock.now_ms();
    let mut last_phase = GamePhase::Idle;

    loop {
        // Input queued since the previous tick
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        return Ok(());
                    }
                    queue.push_key(&key);
                }
                Event::Resize(c, r) => renderer.resize(c, r),
                _ => {}
            }
        }

        let now_ms = clock.now_ms();
        let dt = delta_seconds(last_ms, now_ms);
        last_ms = now_ms;

        let intents = queue.drain();
        let snap = tick(&mut state, &intents, dt);

        // Record finished runs on the session board
        if snap.phase == GamePhase::GameOver && last_phase == GamePhase::Running {
            if let Some(rank) = board.add_run(snap.score, snap.elapsed) {
                log::info!("run placed #{rank} on the session board");
            }
        }
        last_phase = snap.phase;

        renderer.draw(out, &snap)?;

        // Frame pacing
        let spent = Duration::from_secs_f64((clock.now_ms() - now_ms) / 1000.0);
        if spent < FRAME {
            std::thread::sleep(FRAME - spent);
        }
    }
}

/// `--seed N` makes a session reproducible
fn seed_from_args() -> Option<u64> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            return args.next().and_then(|v| v.parse().ok());
        }
    }
    None
}

fn seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
