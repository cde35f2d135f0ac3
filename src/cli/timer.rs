//! Timer command: drives the delay timer in the terminal.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::timer::{Tick, TimerState, UrgeTimer};

/// Runs the countdown to completion, one tick per second.
///
/// This loop is the timer's only driver and ends with the command.
pub(super) fn cmd_timer(seconds: u32) -> Result<(), String> {
    let mut timer = UrgeTimer::new(seconds);
    timer.start();
    debug!(seconds, "timer started");

    println!("Most cravings subside within 3 to 5 minutes. Observe without acting.");
    if let Some(prompt) = timer.prompt() {
        println!("{prompt}");
    }
    draw(&timer)?;

    while matches!(timer.state(), TimerState::Running { .. }) {
        thread::sleep(Duration::from_secs(1));
        if let Tick::Prompted(_) = timer.tick()
            && let Some(prompt) = timer.prompt()
        {
            println!("\r{prompt}      ");
        }
        draw(&timer)?;
    }

    println!("\rComplete.      ");
    println!("Timer complete.");
    Ok(())
}

fn draw(timer: &UrgeTimer) -> Result<(), String> {
    let mut out = io::stdout().lock();
    write!(
        out,
        "\r{}  {:>3.0}%",
        timer.display(),
        timer.progress() * 100.0
    )
    .and_then(|()| out.flush())
    .map_err(|e| format!("failed to write to terminal: {e}"))
}
