//! Splash/loading sequence
//!
//! A purely cosmetic progress bar: it fills on a fixed interval and the
//! overlay tears itself down after a fixed duration, independent of any
//! real work. Both timers run under the view's [`ViewScope`] so an early
//! unmount stops them.

use crate::lifecycle::StateCell;
use crate::scope::ViewScope;
use crate::timer::Timer;
use std::time::Duration;

/// Timing of the splash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashConfig {
    pub tick: Duration,
    pub step: u8,
    pub ceiling: u8,
    pub hide_after: Duration,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            step: 5,
            ceiling: 100,
            hide_after: Duration::from_millis(3000),
        }
    }
}

impl SplashConfig {
    /// Time the bar needs to fill when every tick lands on schedule.
    pub fn fill_duration(&self) -> Duration {
        let ticks = u32::from(self.ceiling).div_ceil(u32::from(self.step.max(1)));
        self.tick * ticks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashState {
    progress: u8,
    visible: bool,
}

impl Default for SplashState {
    fn default() -> Self {
        Self {
            progress: 0,
            visible: true,
        }
    }
}

impl SplashState {
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move the bar one step. Returns `false` once the ceiling is reached.
    pub fn advance(&mut self, config: &SplashConfig) -> bool {
        if self.progress < config.ceiling {
            self.progress = self.progress.saturating_add(config.step).min(config.ceiling);
        }
        self.progress < config.ceiling
    }

    /// Tear the overlay down. The bar is completed first so it never
    /// disappears part-way.
    pub fn hide(&mut self, config: &SplashConfig) {
        self.progress = self.progress.max(config.ceiling);
        self.visible = false;
    }

    pub fn status_label(&self) -> &'static str {
        match self.progress {
            0..=29 => "Loading App...",
            30..=59 => "Connecting...",
            60..=89 => "Preparing...",
            _ => "Ready!",
        }
    }

    /// Bucket used to re-trigger the label's fade animation.
    pub fn label_phase(&self) -> u8 {
        self.progress / 20
    }
}

/// Subtitle under the logo, derived from the current location.
pub fn portal_label(path: &str) -> &'static str {
    if path.contains("/student") {
        "Student Portal"
    } else {
        "Faculty Portal"
    }
}

/// Run both splash timers until the overlay hides or `scope` is cancelled.
pub async fn run_splash<C, T>(scope: &ViewScope, cell: &C, timer: &T, config: SplashConfig)
where
    C: StateCell<SplashState>,
    T: Timer + ?Sized,
{
    let fill = async {
        loop {
            timer.sleep(config.tick).await;
            match cell.update(|state| state.advance(&config)) {
                Some(true) => continue,
                Some(false) | None => break,
            }
        }
    };

    let teardown = async {
        timer.sleep(config.hide_after).await;
        cell.update(|state| state.hide(&config));
    };

    let (filled, hidden) = futures::join!(scope.run(fill), scope.run(teardown));
    tracing::debug!(
        completed = filled.is_some() && hidden.is_some(),
        "splash sequence finished"
    );
}
