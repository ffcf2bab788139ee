//! Delayed actions on the session clock.
//!
//! Every timer is stamped with the scheduler epoch at creation. Leaving
//! active play bumps the epoch, which invalidates everything still pending.
//! Because the session clock stops while paused, so do the timers.

/// Work to do when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Clear the "firing at" trigger flag.
    ClearTrigger,
    /// Drop an entity from the session dying list.
    PruneDying { entity_id: String },
}

#[derive(Debug, Clone)]
struct Timer {
    due_secs: f64,
    epoch: u64,
    action: TimerAction,
}

/// Epoch-stamped timer queue.
#[derive(Debug, Default)]
pub struct Scheduler {
    epoch: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    /// Schedule `action` to fire `delay_secs` after `now_secs`.
    pub fn schedule(&mut self, now_secs: f64, delay_secs: f64, action: TimerAction) {
        self.timers.push(Timer {
            due_secs: now_secs + delay_secs,
            epoch: self.epoch,
            action,
        });
    }

    /// Remove and return every current-epoch action due at `now_secs`,
    /// in the order they were scheduled. Stale timers are discarded.
    pub fn take_due(&mut self, now_secs: f64) -> Vec<TimerAction> {
        let epoch = self.epoch;
        let mut due = Vec::new();
        self.timers.retain(|timer| {
            if timer.epoch != epoch {
                return false;
            }
            if timer.due_secs <= now_secs {
                due.push(timer.action.clone());
                return false;
            }
            true
        });
        due
    }

    /// Invalidate every pending timer.
    pub fn cancel_all(&mut self) {
        self.epoch += 1;
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.timers.iter().filter(|t| t.epoch == self.epoch).count()
    }
}
