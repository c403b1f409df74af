use super::state::TimerState;

/// Host timer capability: deliver a tick for `generation` on a fixed period until cancelled.
pub trait TickScheduler {
    fn schedule(&mut self, generation: u64);
    fn cancel(&mut self);
}

pub struct Stopwatch {
    state: TimerState,
    elapsed_secs: u64,
    // Bumped on every start; ticks carrying an older value are dropped.
    generation: u64,
    scheduler: Box<dyn TickScheduler>,
}

impl Stopwatch {
    pub fn new(scheduler: Box<dyn TickScheduler>) -> Self {
        Self {
            state: TimerState::Stopped,
            elapsed_secs: 0,
            generation: 0,
            scheduler,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Returns false when already running; a second interval is never scheduled.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = TimerState::Running;
        self.generation += 1;
        self.scheduler.schedule(self.generation);
        true
    }

    /// Returns false when already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = TimerState::Stopped;
        self.scheduler.cancel();
        true
    }

    /// Advance by one second if the tick belongs to the current run.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.is_running() || generation != self.generation {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Format elapsed time as HH:MM:SS
    pub fn format_elapsed(&self) -> String {
        format_secs(self.elapsed_secs)
    }
}

pub fn format_secs(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TickScheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    pub enum SchedulerCall {
        Schedule(u64),
        Cancel,
    }

    /// Records scheduler calls so tests can drive ticks by hand.
    #[derive(Clone, Default)]
    pub struct RecordingScheduler {
        pub calls: Rc<RefCell<Vec<SchedulerCall>>>,
    }

    impl RecordingScheduler {
        pub fn calls(&self) -> Vec<SchedulerCall> {
            self.calls.borrow().clone()
        }

        pub fn active_generation(&self) -> Option<u64> {
            match self.calls.borrow().last() {
                Some(SchedulerCall::Schedule(generation)) => Some(*generation),
                _ => None,
            }
        }
    }

    impl TickScheduler for RecordingScheduler {
        fn schedule(&mut self, generation: u64) {
            self.calls
                .borrow_mut()
                .push(SchedulerCall::Schedule(generation));
        }

        fn cancel(&mut self) {
            self.calls.borrow_mut().push(SchedulerCall::Cancel);
        }
    }
}
