//! User-facing toast notifications
//!
//! The bridge reports failures through the [`Notifier`] trait so the UI host
//! decides how toasts are rendered. Headless callers (tests, CLIs) get
//! [`LogNotifier`], which routes toasts through `tracing` instead.

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Failure,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub style: ToastStyle,
    pub title: String,
    pub message: String,
}

impl Toast {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Failure,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Seam between bridge error reporting and the hosting UI.
pub trait Notifier {
    fn show(&self, toast: Toast);
}

/// Default notifier that logs toasts instead of rendering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, toast: Toast) {
        match toast.style {
            ToastStyle::Failure => tracing::error!("{}: {}", toast.title, toast.message),
            ToastStyle::Success => tracing::info!("{}: {}", toast.title, toast.message),
        }
    }
}
