use seqchain::engine::progress::{Progress, ProgressCallback};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// Turns library progress events into log lines. Counters are atomic because `batch`
/// reports from worker threads.
#[derive(Clone, Default)]
pub struct CliProgressHandler {
    state: Arc<ProgressState>,
}

#[derive(Default)]
struct ProgressState {
    total: AtomicU64,
    done: AtomicU64,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn completed(&self) -> u64 {
        self.state.done.load(Ordering::Relaxed)
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let state = self.state.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                info!("Phase '{}' started.", name);
            }
            Progress::PhaseFinish => {
                info!("Phase finished.");
            }
            Progress::TaskStart { total_steps } => {
                state.total.store(total_steps, Ordering::Relaxed);
                state.done.store(0, Ordering::Relaxed);
            }
            Progress::TaskIncrement => {
                let done = state.done.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(
                    "Processed {}/{} record(s).",
                    done,
                    state.total.load(Ordering::Relaxed)
                );
            }
            Progress::TaskFinish => {
                info!(
                    "Processed {}/{} record(s).",
                    state.done.load(Ordering::Relaxed),
                    state.total.load(Ordering::Relaxed)
                );
            }
            Progress::Message(msg) => {
                warn!("{}", msg);
            }
        })
    }
}
