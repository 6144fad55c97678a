use leptos::prelude::*;

use kuroi_cart::notices::Notice;

/// A toast currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ToastState {
    /// Increments with every toast so stale timers can tell they are stale.
    id: u64,

    message: String,

    /// Set once the slide-out transition has started.
    leaving: bool,
}

/// Shows one toast at a time; a new toast replaces the current one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Toasts {
    current: RwSignal<Option<ToastState>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub(crate) fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: RwSignal::new(0),
        }
    }

    pub(crate) fn show(self, notice: &Notice) {
        let id = self.next_id.get_untracked().saturating_add(1);

        self.next_id.set(id);
        self.current.set(Some(ToastState {
            id,
            message: notice.to_string(),
            leaving: false,
        }));

        schedule_dismiss(self, id);
    }

    /// Start the slide-out for toast `id`, if it is still the one on screen.
    fn begin_exit(self, id: u64) -> bool {
        let mut started = false;

        self.current.update(|current| {
            if let Some(toast) = current.as_mut().filter(|toast| toast.id == id) {
                toast.leaving = true;
                started = true;
            }
        });

        started
    }

    /// Remove toast `id`, if it is still the one on screen.
    fn remove(self, id: u64) {
        self.current.update(|current| {
            if current.as_ref().is_some_and(|toast| toast.id == id) {
                *current = None;
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: Toasts, id: u64) {
    use kuroi_cart::notices::{DISMISS_AFTER, EXIT_TRANSITION};

    set_timeout(
        move || {
            if toasts.begin_exit(id) {
                set_timeout(move || toasts.remove(id), EXIT_TRANSITION);
            }
        },
        DISMISS_AFTER,
    );
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: Toasts, _id: u64) {}

#[component]
pub(crate) fn Toast(toasts: Toasts) -> impl IntoView {
    move || {
        toasts.current.get().map(|toast| {
            view! {
                <div
                    class="notification"
                    class:notification-leaving=toast.leaving
                    role="status"
                    aria-live="polite"
                >
                    {toast.message}
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_current_toast() {
        let toasts = Toasts::new();

        toasts.show(&Notice::ItemAdded("Ramen".to_string()));
        toasts.show(&Notice::EmptyCart);

        let current = toasts.current.get_untracked();

        assert_eq!(
            current.map(|toast| (toast.id, toast.message)),
            Some((2, "Your cart is empty!".to_string()))
        );
    }

    #[test]
    fn stale_timer_does_not_touch_newer_toast() {
        let toasts = Toasts::new();

        toasts.show(&Notice::MessageSent);
        toasts.show(&Notice::MissingFields);

        assert!(!toasts.begin_exit(1), "stale id should not start an exit");

        toasts.remove(1);

        assert!(toasts.current.get_untracked().is_some());
    }

    #[test]
    fn exit_then_remove_clears_toast() {
        let toasts = Toasts::new();

        toasts.show(&Notice::MessageSent);

        assert!(toasts.begin_exit(1));
        assert_eq!(
            toasts.current.get_untracked().map(|toast| toast.leaving),
            Some(true)
        );

        toasts.remove(1);

        assert_eq!(toasts.current.get_untracked(), None);
    }
}
