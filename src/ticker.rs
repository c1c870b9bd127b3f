use std::sync::mpsc;
use std::time::Duration;

/// A background timing loop driving periodic repaints.
///
/// The worker invokes the render closure immediately with index 0, then once
/// per interval with an index that only ever advances. Stop signalling runs
/// over an mpsc channel: the worker parks in `recv_timeout`, so dropping the
/// sender wakes it mid-interval instead of letting it sleep out the tick.
pub(crate) struct Ticker {
    stop: Option<mpsc::Sender<()>>,
    handle: Option<std::thread::JoinHandle<()>>,
}

impl Ticker {
    /// Start the loop. Returns immediately; the worker owns the closure.
    pub fn spawn(interval: Duration, mut render: impl FnMut(u64) + Send + 'static) -> Self {
        let (stop, ticks) = mpsc::channel::<()>();
        let handle = std::thread::spawn(move || {
            let mut index = 0u64;
            loop {
                render(index);
                index = index.wrapping_add(1);
                match ticks.recv_timeout(interval) {
                    Err(mpsc::RecvTimeoutError::Timeout) => continue,
                    // Sender dropped (or an explicit nudge): shut down.
                    _ => break,
                }
            }
        });
        Self {
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Signal the worker and block until it has fully stopped.
    ///
    /// After this returns, no further renders occur. That ordering is what
    /// lets the owner paint its exit state as the last visible write.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
