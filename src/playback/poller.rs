use std::time::{Duration, Instant};

use tracing::info;

use crate::audio::AudioEngine;
use crate::error::Result;

use super::controller::PlaybackController;
use super::types::{Direction, PlaybackState};

/// Recurring check that turns a naturally finished track into `advance(Next)`.
///
/// The poller does not own a timer. The host loop calls [`poll`](Self::poll)
/// with the current time; the check runs when the period has elapsed and
/// then reschedules itself. Tests can call [`tick`](Self::tick) directly.
#[derive(Debug, Clone)]
pub struct EndOfTrackPoller {
    period: Duration,
    next_due: Option<Instant>,
}

impl EndOfTrackPoller {
    /// Create a stopped poller firing every `period`.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Schedule the first check one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Cancel the recurring schedule.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Time left until the next check, `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Run the check if it is due and reschedule. Returns whether an
    /// automatic advance happened.
    pub fn poll<E: AudioEngine>(
        &mut self,
        now: Instant,
        controller: &mut PlaybackController<E>,
    ) -> Result<bool> {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.period);
                Self::tick(controller)
            }
            _ => Ok(false),
        }
    }

    /// One check: advance when a non-empty playlist is `Playing` but the
    /// engine has gone idle.
    pub fn tick<E: AudioEngine>(controller: &mut PlaybackController<E>) -> Result<bool> {
        if controller.playlist().is_empty()
            || controller.state() != PlaybackState::Playing
            || controller.is_engine_busy()
        {
            return Ok(false);
        }

        let index = controller.advance(Direction::Next)?;
        info!(index, "track finished, advanced");
        Ok(true)
    }
}
