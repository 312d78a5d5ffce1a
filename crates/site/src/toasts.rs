//! Toast queue and its on-screen host.

use std::time::Duration;

use leptos::*;
use vault_core::{Notice, NoticeLevel};

use crate::{
    icons::{Icon, IconName, IconSize},
    runtime_context::use_vault_runtime,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Visible notices, newest first.
pub(crate) struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Puts `notice` on top and returns the id to dismiss it with.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(0, Toast { id, notice });
        id
    }

    /// Removes one toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

fn level_icon(level: NoticeLevel) -> IconName {
    match level {
        NoticeLevel::Success => IconName::Check,
        NoticeLevel::Info => IconName::Info,
        NoticeLevel::Error => IconName::Alert,
    }
}

/// Queues `notice` and schedules its automatic dismissal.
pub(crate) fn show_notice(toasts: RwSignal<ToastQueue>, notice: Notice, lifetime: Duration) {
    let mut id = 0;
    toasts.update(|queue| id = queue.push(notice));
    set_timeout(move || toasts.update(|queue| queue.dismiss(id)), lifetime);
}

#[component]
pub(crate) fn ToastHost() -> impl IntoView {
    let runtime = use_vault_runtime();
    let toasts = runtime.toasts;

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.with(|queue| queue.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let level = toast.notice.level;
                    view! {
                        <button
                            type="button"
                            class="toast"
                            data-level=level.token()
                            title="Dismiss"
                            on:click=move |_| toasts.update(|queue| queue.dismiss(id))
                        >
                            <Icon icon=level_icon(level) size=IconSize::Sm />
                            <span class="toast-message">{toast.notice.message}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn messages(queue: &ToastQueue) -> Vec<&str> {
        queue
            .toasts()
            .iter()
            .map(|toast| toast.notice.message.as_str())
            .collect()
    }

    #[test]
    fn newest_toast_is_on_top() {
        let mut queue = ToastQueue::default();
        queue.push(Notice::success("2 files added successfully"));
        queue.push(Notice::info("File removed"));
        assert_eq!(
            messages(&queue),
            vec!["File removed", "2 files added successfully"]
        );
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Notice::success("a"));
        let second = queue.push(Notice::success("b"));
        assert_ne!(first, second);

        queue.dismiss(first);
        queue.dismiss(first);
        queue.dismiss(999);
        assert_eq!(messages(&queue), vec!["b"]);
    }
}
