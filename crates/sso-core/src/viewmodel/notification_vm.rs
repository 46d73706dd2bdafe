//! Success Notification View Model
//!
//! Toast queue: notifications are shown in insertion order and each one is
//! removed either by `hide()` or by its own expiry timer. Timers are
//! independent, hiding one notification never touches the others.
//!
//! Timers run on the tokio runtime and only hold a weak reference to the
//! queue, so dropping the last handle (unmount) aborts whatever is pending.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use sso_shared::constants::DEFAULT_NOTIFICATION_DURATION_MS;
use tokio::task::AbortHandle;
use tracing::debug;

/// Process-wide notification identifier.
///
/// Drawn from one counter shared by every queue, so an id never matches a
/// toast in another queue and two notifications in the same millisecond
/// never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl NotificationId {
    fn next() -> Self {
        NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone)]
pub struct NotificationAction {
    pub label: String,
    on_click: Arc<dyn Fn() + Send + Sync>,
}

impl NotificationAction {
    pub fn new<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self { label: label.into(), on_click: Arc::new(on_click) }
    }

    pub fn click(&self) {
        (self.on_click)();
    }
}

impl fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationAction").field("label", &self.label).finish()
    }
}

#[derive(Debug, Clone)]
pub struct SuccessNotification {
    pub id: NotificationId,
    pub message: String,
    pub is_visible: bool,
    pub duration: Duration,
    pub action: Option<NotificationAction>,
}

#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    pub duration: Option<Duration>,
    pub action: Option<NotificationAction>,
}

impl ShowOptions {
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }
}

#[derive(Default)]
struct QueueState {
    entries: Vec<SuccessNotification>,
    timers: HashMap<NotificationId, AbortHandle>,
}

impl Drop for QueueState {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}

#[derive(Clone)]
pub struct NotificationViewModel {
    inner: Arc<Mutex<QueueState>>,
    default_duration: Duration,
}

impl Default for NotificationViewModel {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS))
    }
}

impl NotificationViewModel {
    pub fn new(default_duration: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueState::default())),
            default_duration,
        }
    }

    /// Append a notification and arm its expiry timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self, message: impl Into<String>, options: ShowOptions) -> NotificationId {
        let id = NotificationId::next();
        let duration = options.duration.unwrap_or(self.default_duration);

        let mut state = self.inner.lock();
        state.entries.push(SuccessNotification {
            id,
            message: message.into(),
            is_visible: true,
            duration,
            action: options.action,
        });

        // The timer blocks on this lock until the entry and handle are in place
        let weak = Arc::downgrade(&self.inner);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            expire(&weak, id);
        });
        state.timers.insert(id, timer.abort_handle());
        id
    }

    /// Remove immediately. Unknown or already removed ids are ignored.
    pub fn hide(&self, id: NotificationId) {
        let mut state = self.inner.lock();
        state.entries.retain(|n| n.id != id);
        if let Some(timer) = state.timers.remove(&id) {
            timer.abort();
        }
    }

    /// Drop every notification and cancel every pending timer.
    pub fn clear(&self) {
        let mut state = self.inner.lock();
        state.entries.clear();
        for (_, timer) in state.timers.drain() {
            timer.abort();
        }
    }

    pub fn notifications(&self) -> Vec<SuccessNotification> {
        self.inner.lock().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }
}

fn expire(queue: &Weak<Mutex<QueueState>>, id: NotificationId) {
    let Some(inner) = queue.upgrade() else {
        return;
    };
    let mut state = inner.lock();
    state.timers.remove(&id);
    let before = state.entries.len();
    state.entries.retain(|n| n.id != id);
    if state.entries.len() < before {
        debug!("Notification {} expired", id);
    }
}
