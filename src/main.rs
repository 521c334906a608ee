//! Car Arcade entry point
//!
//! Headless driver: plays one demo episode on autopilot at a simulated 60 Hz
//! refresh and prints the final snapshot. Graphical frontends embed the
//! library instead.
//!
//! Usage: `car-arcade [settings.json]`

use std::path::Path;

use car_arcade::Settings;
use car_arcade::sim::{FrameDriver, GameMode, GameState, InputEvent};
use car_arcade::ui::Button;

/// Give up on the demo after this many seconds of play
const DEMO_SECONDS: u32 = 120;

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let mut state = GameState::with_settings(&settings);
    log::info!("Car Arcade (headless) starting with seed {}", state.seed);

    if state.roster.is_empty() {
        state.roster.register("Demo");
    }

    let mut driver = FrameDriver::new();
    driver.push(InputEvent::Activate(Button::Start));
    driver.push(InputEvent::Activate(Button::SelectPlayer(0)));
    driver.set_idle_mode(true);

    let frame = 1.0 / 60.0;
    for _ in 0..DEMO_SECONDS * 60 {
        driver.advance(&mut state, frame);
        if state.mode == GameMode::GameOver {
            break;
        }
    }

    let snapshot = state.snapshot();
    println!(
        "{} scored {} with {} lives left (speed x{:.2})",
        state.roster.selected().unwrap_or("Nobody"),
        snapshot.score,
        snapshot.lives,
        snapshot.speed_multiplier
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
