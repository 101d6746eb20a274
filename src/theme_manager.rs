//! Current theme, persistence, and the auto-cycle timer.
//!
//! The manager never touches the DOM or a clock. Each operation appends
//! [`Action`]s for the host, including requests to start or cancel timers.
//! Timers are identified by a [`TimerToken`]; a tick carrying any token other
//! than the live one is stale and ignored, so at most one cycle timer can
//! ever advance the theme even if the host is slow to cancel an old one.

#[cfg(test)]
#[path = "theme_manager_test.rs"]
mod theme_manager_test;

use crate::config::PageConfig;
use crate::engine::Action;
use crate::theme::Theme;

/// Identity of a timer requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
    cycling: bool,
    cycle_timer: Option<TimerToken>,
    transition_timer: Option<TimerToken>,
    next_token: u64,
    cycle_interval_ms: u32,
    transition_ms: u32,
}

impl ThemeManager {
    /// Resolve the initial theme from the stored value and show it.
    ///
    /// An absent or unrecognized stored value falls back to
    /// `config.default_theme`, which is then written back so storage and the
    /// document agree from the first frame. No transition runs at load.
    pub fn load(config: &PageConfig, stored: Option<&str>, out: &mut Vec<Action>) -> Self {
        let current = match stored.map(|raw| (raw, Theme::from_id(raw))) {
            Some((_, Some(theme))) => theme,
            Some((raw, None)) => {
                log::warn!("ignoring unrecognized stored theme {raw:?}");
                config.default_theme
            }
            None => config.default_theme,
        };

        out.push(Action::SetTheme(current));
        if stored != Some(current.id()) {
            out.push(Action::PersistTheme(current));
        }
        log::info!("applied theme: {current}");

        let mut manager = Self {
            current,
            cycling: false,
            cycle_timer: None,
            transition_timer: None,
            next_token: 0,
            cycle_interval_ms: config.cycle_interval_ms,
            transition_ms: config.transition_ms,
        };
        if config.auto_cycle {
            manager.start_cycle(out);
        } else {
            out.push(Action::SetCycleControl { running: false });
        }
        manager
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Position of the current theme in cycle order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.current.index()
    }

    #[must_use]
    pub fn is_cycling(&self) -> bool {
        self.cycling
    }

    /// The live cycle timer, present exactly while cycling.
    #[must_use]
    pub fn cycle_timer(&self) -> Option<TimerToken> {
        self.cycle_timer
    }

    /// The pending transition-clear timer, if a transition is running.
    #[must_use]
    pub fn transition_timer(&self) -> Option<TimerToken> {
        self.transition_timer
    }

    /// Show, persist, and animate into `theme`.
    pub fn apply_theme(&mut self, theme: Theme, out: &mut Vec<Action>) {
        self.current = theme;
        let token = self.issue_token();
        self.transition_timer = Some(token);
        out.push(Action::BeginTransition { token, duration_ms: self.transition_ms });
        out.push(Action::SetTheme(theme));
        out.push(Action::PersistTheme(theme));
    }

    /// Advance to the next theme in cycle order.
    pub fn cycle_next(&mut self, out: &mut Vec<Action>) {
        self.apply_theme(self.current.next(), out);
    }

    /// (Re)start the cycle timer, replacing any live one.
    pub fn start_cycle(&mut self, out: &mut Vec<Action>) {
        if self.cycle_timer.take().is_some() {
            out.push(Action::CancelCycleTimer);
        }
        let token = self.issue_token();
        self.cycle_timer = Some(token);
        self.cycling = true;
        out.push(Action::StartCycleTimer { token, interval_ms: self.cycle_interval_ms });
        out.push(Action::SetCycleControl { running: true });
    }

    /// Cancel the cycle timer, if any.
    pub fn stop_cycle(&mut self, out: &mut Vec<Action>) {
        if self.cycle_timer.take().is_some() {
            out.push(Action::CancelCycleTimer);
        }
        self.cycling = false;
        out.push(Action::SetCycleControl { running: false });
    }

    /// Start/pause control: stop when cycling, start otherwise.
    pub fn toggle_cycle(&mut self, out: &mut Vec<Action>) {
        if self.cycling {
            self.stop_cycle(out);
        } else {
            self.start_cycle(out);
        }
    }

    /// Explicit choice from the picker. Restarts a running cycle so the next
    /// automatic change is a full interval away.
    pub fn select(&mut self, theme: Theme, out: &mut Vec<Action>) {
        self.apply_theme(theme, out);
        if self.cycling {
            self.start_cycle(out);
        }
    }

    /// A cycle timer fired.
    pub fn on_cycle_tick(&mut self, token: TimerToken, out: &mut Vec<Action>) {
        if self.cycle_timer != Some(token) {
            log::debug!("dropping stale cycle tick {token:?}");
            return;
        }
        self.cycle_next(out);
    }

    /// A transition-clear timeout fired.
    pub fn on_transition_elapsed(&mut self, token: TimerToken, out: &mut Vec<Action>) {
        if self.transition_timer != Some(token) {
            return;
        }
        self.transition_timer = None;
        out.push(Action::EndTransition);
    }

    fn issue_token(&mut self) -> TimerToken {
        self.next_token += 1;
        TimerToken(self.next_token)
    }
}
