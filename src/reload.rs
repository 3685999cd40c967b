use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::info;

/// Capability to reload the page hosting the selector.
pub trait PageReloader: Send + Sync {
    fn reload(&self);
}

/// Reloader for hosts that are not a browser page.
///
/// Records reload requests and wakes whoever waits in [`ReloadSignal::reloaded`].
/// A request made before anyone waits is not lost.
#[derive(Debug, Clone, Default)]
pub struct ReloadSignal {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    notify: Notify,
    count: AtomicUsize,
}

impl ReloadSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of reloads requested so far.
    pub fn count(&self) -> usize {
        self.inner.count.load(Ordering::SeqCst)
    }

    /// Wait for the next reload request.
    pub async fn reloaded(&self) {
        self.inner.notify.notified().await;
    }
}

impl PageReloader for ReloadSignal {
    fn reload(&self) {
        let n = self.inner.count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(reloads = n, "Page reload requested");
        self.inner.notify.notify_one();
    }
}
