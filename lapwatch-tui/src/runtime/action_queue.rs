use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    /// One stopwatch second elapsed for the run identified by `generation`.
    Tick { generation: u64 },
}

pub(crate) type ActionTx = UnboundedSender<Action>;
pub(crate) type ActionRx = UnboundedReceiver<Action>;

pub(crate) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
