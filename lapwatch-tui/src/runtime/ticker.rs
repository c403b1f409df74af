use crate::app::TickScheduler;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use super::action_queue::{Action, ActionTx};

/// Each tick adds one second to the stopwatch, so ticks must be one second apart.
pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Stopwatch ticks backed by a tokio interval task feeding the action queue.
pub(crate) struct TokioTicker {
    tx: ActionTx,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl TokioTicker {
    pub(crate) fn new(tx: ActionTx, period: Duration) -> Self {
        Self {
            tx,
            period,
            task: None,
        }
    }
}

impl TickScheduler for TokioTicker {
    fn schedule(&mut self, generation: u64) {
        self.cancel();

        let tx = self.tx.clone();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            // First tick one full period after start, not immediately
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Action::Tick { generation }).is_err() {
                    tracing::debug!("action queue closed, ticker exiting");
                    break;
                }
            }
        }));
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "ticker scheduled");
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!("ticker cancelled");
        }
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
