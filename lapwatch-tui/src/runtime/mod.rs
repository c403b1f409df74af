mod action_queue;
mod event_loop;
mod ticker;
mod views;

pub(crate) use action_queue::channel;
pub use event_loop::run_app;
pub(crate) use ticker::{TokioTicker, TICK_PERIOD};
