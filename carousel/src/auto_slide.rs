/// A recurring timer driven by the host's clock.
///
/// The engine has no clock of its own: the timer is armed by [`AutoSlide::set_interval`] and
/// starts counting on the first [`AutoSlide::poll`] after that.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AutoSlide {
    interval_ms: Option<u64>,
    saved_interval_ms: Option<u64>,
    timer: Option<Timer>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Timer {
    due_ms: Option<u64>,
}

impl AutoSlide {
    /// Negative, zero, or non-finite `seconds` cancel the timer and forget any suspended interval.
    ///
    /// While suspended, a positive interval replaces the saved one and takes effect on
    /// [`Self::resume`].
    pub fn set_interval(&mut self, seconds: f64) {
        match seconds_to_ms(seconds) {
            Some(ms) if self.is_suspended() => {
                self.interval_ms = Some(ms);
                self.saved_interval_ms = Some(ms);
                cdebug!(interval_ms = ms, "auto slide interval saved while suspended");
            }
            Some(ms) => {
                self.saved_interval_ms = None;
                self.interval_ms = Some(ms);
                self.timer = Some(Timer { due_ms: None });
                cdebug!(interval_ms = ms, "auto slide started");
            }
            None => {
                self.interval_ms = None;
                self.saved_interval_ms = None;
                self.timer = None;
                cdebug!("auto slide cancelled");
            }
        }
    }

    /// The configured interval in seconds, or a negative value when disabled.
    pub fn interval(&self) -> f64 {
        self.interval_ms.map_or(-1.0, |ms| ms as f64 / 1000.0)
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_suspended(&self) -> bool {
        self.saved_interval_ms.is_some() && self.timer.is_none()
    }

    /// Stops the timer while keeping the interval for [`Self::resume`].
    pub fn suspend(&mut self) {
        if self.timer.take().is_some() {
            self.saved_interval_ms = self.interval_ms;
            ctrace!("auto slide suspended");
        }
    }

    /// Restarts a previously suspended timer with its original interval.
    pub fn resume(&mut self) {
        let Some(ms) = self.saved_interval_ms.take() else {
            return;
        };
        self.interval_ms = Some(ms);
        self.timer = Some(Timer { due_ms: None });
        ctrace!(interval_ms = ms, "auto slide resumed");
    }

    pub fn cancel(&mut self) {
        self.interval_ms = None;
        self.saved_interval_ms = None;
        self.timer = None;
    }

    /// Advances the timer to `now_ms`; returns `true` when a tick fired.
    ///
    /// At most one tick fires per poll; a host that stalls past several intervals gets a
    /// single advance and the schedule restarts from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let (Some(interval), Some(timer)) = (self.interval_ms, self.timer.as_mut()) else {
            return false;
        };
        let Some(due) = timer.due_ms else {
            timer.due_ms = Some(now_ms.saturating_add(interval));
            return false;
        };
        if now_ms < due {
            return false;
        }
        let next = due.saturating_add(interval);
        timer.due_ms = Some(if next > now_ms {
            next
        } else {
            now_ms.saturating_add(interval)
        });
        true
    }

    /// The next time a tick is due, once the timer has started counting.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.timer.and_then(|t| t.due_ms)
    }
}

fn seconds_to_ms(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Some(((seconds * 1000.0).round() as u64).max(1))
}
