//! ============================================================================
//! CONFIRMATION VIEW MODEL
//! ============================================================================
//!
//! State machine behind the confirmation dialog used by delete and other
//! dangerous actions.
//!
//! ```text
//! closed --open--> open --confirm ok--> closed
//!                  open --confirm err--> open (retry possible)
//!                  open --cancel--> closed (cancel callback fires once)
//! ```
//!
//! Handles are cheap to clone and share one dialog. At most one confirmation
//! is active: `open()` replaces whatever was there.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tracing::{debug, error};

pub type ConfirmCallback = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync>;
pub type CancelCallback = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationVariant {
    Danger,
    Warning,
    #[default]
    Info,
}

#[derive(Clone, Default)]
pub struct ConfirmationOptions {
    pub title: Option<String>,
    pub message: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub variant: ConfirmationVariant,
    /// Text the operator must type exactly before confirm is accepted.
    pub require_text: Option<String>,
    pub on_confirm: Option<ConfirmCallback>,
    pub on_cancel: Option<CancelCallback>,
}

impl std::fmt::Debug for ConfirmationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfirmationOptions")
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_text", &self.confirm_text)
            .field("variant", &self.variant)
            .field("require_text", &self.require_text)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl ConfirmationOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn variant(mut self, variant: ConfirmationVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn require_text(mut self, text: impl Into<String>) -> Self {
        self.require_text = Some(text.into());
        self
    }

    pub fn on_confirm<F, Fut>(mut self, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        self.on_confirm = Some(Arc::new(move || -> BoxFuture<'static, anyhow::Result<()>> {
            Box::pin(callback())
        }));
        self
    }

    pub fn on_cancel<F>(mut self, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_cancel = Some(Arc::new(callback));
        self
    }
}

// ============================================================================
// PRESETS - stateless option bundles
// ============================================================================

pub mod presets {
    use super::{ConfirmationOptions, ConfirmationVariant};

    pub fn delete(item_name: &str) -> ConfirmationOptions {
        ConfirmationOptions::new(
            format!("Delete {}", item_name),
            format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                item_name
            ),
        )
        .confirm_text("Delete")
        .cancel_text("Cancel")
        .variant(ConfirmationVariant::Danger)
    }

    pub fn dangerous_action(action_name: &str) -> ConfirmationOptions {
        ConfirmationOptions::new(
            format!("Confirm {}", action_name),
            format!("Are you sure you want to {}? Please make sure before continuing.", action_name),
        )
        .confirm_text(action_name)
        .cancel_text("Cancel")
        .variant(ConfirmationVariant::Warning)
    }

    /// Guarded by retyping `item_name`.
    pub fn permanent_change(item_name: &str) -> ConfirmationOptions {
        ConfirmationOptions::new(
            "Permanent change",
            format!(
                "This will permanently change \"{}\". Type the name to confirm.",
                item_name
            ),
        )
        .confirm_text("I understand")
        .cancel_text("Cancel")
        .variant(ConfirmationVariant::Danger)
        .require_text(item_name)
    }
}

/// Rendered state of the dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmationView {
    pub is_open: bool,
    pub is_loading: bool,
    pub title: Option<String>,
    pub message: Option<String>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub variant: ConfirmationVariant,
    pub require_text: Option<String>,
    pub input: String,
    pub can_confirm: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Callback succeeded, dialog closed.
    Confirmed,
    /// Callback failed, dialog stays open for a retry.
    Failed(String),
    /// Nothing ran: closed dialog, confirm already running, no callback or
    /// retype guard unmet.
    Skipped,
    /// The dialog was cancelled or replaced while the callback ran.
    Superseded,
}

#[derive(Default)]
struct DialogState {
    is_open: bool,
    is_loading: bool,
    options: Option<ConfirmationOptions>,
    input: String,
    /// Bumped by `open` and `cancel` so a late callback result can tell
    /// whether it still owns the dialog.
    generation: u64,
}

impl DialogState {
    fn guard_satisfied(&self) -> bool {
        match self.options.as_ref().and_then(|o| o.require_text.as_deref()) {
            Some(expected) => self.input == expected,
            None => true,
        }
    }
}

#[derive(Clone, Default)]
pub struct ConfirmationViewModel {
    inner: Arc<Mutex<DialogState>>,
}

impl ConfirmationViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, options: ConfirmationOptions) {
        let mut state = self.inner.lock();
        if state.is_open {
            debug!("Replacing open confirmation dialog");
        }
        state.is_open = true;
        state.is_loading = false;
        state.options = Some(options);
        state.input.clear();
        state.generation += 1;
    }

    pub fn set_input(&self, input: impl Into<String>) {
        self.inner.lock().input = input.into();
    }

    pub fn is_open(&self) -> bool {
        self.inner.lock().is_open
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().is_loading
    }

    pub fn view(&self) -> ConfirmationView {
        let state = self.inner.lock();
        let options = state.options.as_ref();
        ConfirmationView {
            is_open: state.is_open,
            is_loading: state.is_loading,
            title: options.and_then(|o| o.title.clone()),
            message: options.and_then(|o| o.message.clone()),
            confirm_text: options.and_then(|o| o.confirm_text.clone()),
            cancel_text: options.and_then(|o| o.cancel_text.clone()),
            variant: options.map(|o| o.variant).unwrap_or_default(),
            require_text: options.and_then(|o| o.require_text.clone()),
            input: state.input.clone(),
            can_confirm: state.is_open && !state.is_loading && state.guard_satisfied(),
        }
    }

    /// Run the confirm callback.
    ///
    /// The lock is released while the callback runs, so `cancel()` may be
    /// called meanwhile; the callback's result is then ignored.
    pub async fn confirm(&self) -> ConfirmOutcome {
        let (callback, generation) = {
            let mut state = self.inner.lock();
            if !state.is_open || state.is_loading || !state.guard_satisfied() {
                return ConfirmOutcome::Skipped;
            }
            let Some(callback) = state.options.as_ref().and_then(|o| o.on_confirm.clone()) else {
                return ConfirmOutcome::Skipped;
            };
            state.is_loading = true;
            (callback, state.generation)
        };

        let result = callback().await;

        let mut state = self.inner.lock();
        if state.generation != generation {
            debug!("Confirmation result arrived after the dialog changed, ignoring");
            return ConfirmOutcome::Superseded;
        }
        state.is_loading = false;
        match result {
            Ok(()) => {
                state.is_open = false;
                state.options = None;
                state.input.clear();
                ConfirmOutcome::Confirmed
            }
            Err(e) => {
                error!("Confirmation action failed: {:#}", e);
                ConfirmOutcome::Failed(e.to_string())
            }
        }
    }

    /// Close the dialog, also while a confirm is pending.
    pub fn cancel(&self) {
        let on_cancel = {
            let mut state = self.inner.lock();
            let options = state.options.take();
            state.is_open = false;
            state.is_loading = false;
            state.input.clear();
            state.generation += 1;
            options.and_then(|o| o.on_cancel)
        };
        // Called outside the lock so the callback may reopen the dialog
        if let Some(callback) = on_cancel {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_confirm_success_closes() {
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M").on_confirm(|| async { Ok(()) }));

        let view = vm.view();
        assert!(view.is_open);
        assert_eq!(view.title.as_deref(), Some("T"));
        assert_eq!(view.message.as_deref(), Some("M"));

        assert_eq!(vm.confirm().await, ConfirmOutcome::Confirmed);
        assert!(!vm.is_open());
        assert!(!vm.is_loading());
    }

    #[tokio::test]
    async fn test_confirm_failure_stays_open_and_retries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M").on_confirm(move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    anyhow::bail!("server said no")
                }
                Ok(())
            }
        }));

        assert_eq!(vm.confirm().await, ConfirmOutcome::Failed("server said no".to_string()));
        assert!(vm.is_open());
        assert!(!vm.is_loading());

        assert_eq!(vm.confirm().await, ConfirmOutcome::Confirmed);
        assert!(!vm.is_open());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_second_confirm_while_loading_is_skipped() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M").on_confirm(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let gate = gate.lock().take();
            async move {
                if let Some(rx) = gate {
                    let _ = rx.await;
                }
                Ok(())
            }
        }));

        let first = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.confirm().await })
        };
        while !vm.is_loading() {
            tokio::task::yield_now().await;
        }

        assert!(!vm.view().can_confirm);
        assert_eq!(vm.confirm().await, ConfirmOutcome::Skipped);
        assert!(vm.is_loading());

        let _ = release.send(());
        assert_eq!(first.await.unwrap(), ConfirmOutcome::Confirmed);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!vm.is_open());
    }

    #[tokio::test]
    async fn test_confirm_without_callback_is_noop() {
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M"));
        assert_eq!(vm.confirm().await, ConfirmOutcome::Skipped);
        assert!(vm.is_open());

        let closed = ConfirmationViewModel::new();
        assert_eq!(closed.confirm().await, ConfirmOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_cancel_fires_callback_once() {
        let cancelled = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cancelled);
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M").on_cancel(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        vm.cancel();
        vm.cancel();
        assert!(!vm.is_open());
        assert_eq!(cancelled.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_open_replaces_previous() {
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("first", "1"));
        vm.open(presets::delete("alice"));

        let view = vm.view();
        assert_eq!(view.title.as_deref(), Some("Delete alice"));
        assert_eq!(view.variant, ConfirmationVariant::Danger);
    }

    #[tokio::test]
    async fn test_cancel_during_pending_confirm() {
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(gate)));
        let vm = ConfirmationViewModel::new();
        vm.open(ConfirmationOptions::new("T", "M").on_confirm(move || {
            let gate = gate.lock().take();
            async move {
                if let Some(rx) = gate {
                    let _ = rx.await;
                }
                anyhow::bail!("late failure")
            }
        }));

        let pending = {
            let vm = vm.clone();
            tokio::spawn(async move { vm.confirm().await })
        };
        while !vm.is_loading() {
            tokio::task::yield_now().await;
        }

        vm.cancel();
        assert!(!vm.is_open());
        assert!(!vm.is_loading());

        let _ = release.send(());
        assert_eq!(pending.await.unwrap(), ConfirmOutcome::Superseded);
        // The late failure must not reopen the dialog
        assert!(!vm.is_open());
    }

    #[tokio::test]
    async fn test_retype_guard() {
        let vm = ConfirmationViewModel::new();
        vm.open(presets::permanent_change("prod-client").on_confirm(|| async { Ok(()) }));

        assert!(!vm.view().can_confirm);
        assert_eq!(vm.confirm().await, ConfirmOutcome::Skipped);

        vm.set_input("prod-clien");
        assert_eq!(vm.confirm().await, ConfirmOutcome::Skipped);

        vm.set_input("prod-client");
        assert!(vm.view().can_confirm);
        assert_eq!(vm.confirm().await, ConfirmOutcome::Confirmed);
    }

    #[test]
    fn test_presets_carry_no_callbacks() {
        for options in [
            presets::delete("x"),
            presets::dangerous_action("reset secrets"),
            presets::permanent_change("x"),
        ] {
            assert!(options.on_confirm.is_none());
            assert!(options.on_cancel.is_none());
        }
        assert_eq!(presets::dangerous_action("rotate keys").confirm_text.as_deref(), Some("rotate keys"));
        assert_eq!(presets::dangerous_action("x").variant, ConfirmationVariant::Warning);
    }
}
