//! ViewModel Module
//!
//! Per-instance UI state: sidebar navigation, dashboard cards, the
//! confirmation dialog and the success notification queue. Each instance
//! owns its state; nothing here is a process-wide singleton.

pub mod confirmation_vm;
pub mod dashboard_vm;
pub mod navigation_vm;
pub mod notification_vm;

pub use confirmation_vm::{
    presets, ConfirmOutcome, ConfirmationOptions, ConfirmationVariant, ConfirmationView,
    ConfirmationViewModel,
};
pub use dashboard_vm::{DashboardCard, DashboardCards};
pub use navigation_vm::{NavigationSnapshot, NavigationViewModel};
pub use notification_vm::{
    NotificationAction, NotificationId, NotificationViewModel, ShowOptions, SuccessNotification,
};
