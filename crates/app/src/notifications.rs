//! The session's notification sink.
//!
//! [`use_notification_center`] is called once by the root shell: it owns the
//! store and the task that runs auto-expiry timers. Everything below the
//! shell gets the same [`NotificationCenter`] through [`use_notifications`].

use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use futures::StreamExt;
use shared_types::{templates, Notification, NotificationDraft, NotificationId, NotificationStore};
use shared_ui::timer::sleep;
use std::time::Duration;

/// A removal to run once `after` has elapsed.
#[derive(Debug, Clone, Copy)]
struct ScheduledExpiry {
    id: NotificationId,
    after: Duration,
}

/// Handle to the session's notification store.
///
/// `Copy`, so it can be moved into any number of event handlers.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    store: Signal<NotificationStore>,
    expiries: Coroutine<ScheduledExpiry>,
}

impl NotificationCenter {
    /// Add a notification and, if the store gave it a deadline, schedule
    /// its removal.
    pub fn add(&mut self, draft: NotificationDraft) -> NotificationId {
        let now = Utc::now();
        let id = self.store.write().add(draft, now);
        let deadline = self.store.peek().deadline(id);
        if let Some(after) = deadline.and_then(|due| (due - now).to_std().ok()) {
            self.expiries.send(ScheduledExpiry { id, after });
        }
        id
    }

    pub fn remove(&mut self, id: NotificationId) {
        self.store.write().remove(id);
    }

    pub fn mark_as_read(&mut self, id: NotificationId) {
        // Skip the write (and the re-render it triggers) when nothing changes.
        let unread = self.store.peek().get(id).is_some_and(|n| !n.read);
        if unread {
            self.store.write().mark_as_read(id);
        }
    }

    pub fn clear_all(&mut self) {
        self.store.write().clear_all();
    }

    /// Current list, newest first. Subscribes the calling component.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.store.read().notifications().to_vec()
    }

    pub fn unread_count(&self) -> usize {
        self.store.read().unread_count()
    }

    pub fn request_submitted(&mut self, component: &str, quantity: u32) -> NotificationId {
        self.add(templates::request_submitted(component, quantity))
    }

    pub fn request_approved(
        &mut self,
        component: &str,
        quantity: u32,
        admin_notes: Option<&str>,
    ) -> NotificationId {
        self.add(templates::request_approved(component, quantity, admin_notes))
    }

    pub fn request_rejected(
        &mut self,
        component: &str,
        quantity: u32,
        reason: Option<&str>,
    ) -> NotificationId {
        self.add(templates::request_rejected(component, quantity, reason))
    }

    pub fn component_checked_out(
        &mut self,
        component: &str,
        quantity: u32,
        due_date: NaiveDate,
    ) -> NotificationId {
        self.add(templates::component_checked_out(component, quantity, due_date))
    }

    pub fn component_returned(&mut self, component: &str, quantity: u32) -> NotificationId {
        self.add(templates::component_returned(component, quantity))
    }

    pub fn due_date_reminder(
        &mut self,
        component: &str,
        quantity: u32,
        days_left: u32,
    ) -> NotificationId {
        self.add(templates::due_date_reminder(component, quantity, days_left))
    }

    pub fn overdue_notice(
        &mut self,
        component: &str,
        quantity: u32,
        days_overdue: u32,
    ) -> NotificationId {
        self.add(templates::overdue_notice(component, quantity, days_overdue))
    }
}

/// Create the session's notification center and provide it as context.
///
/// Expiry timers are spawned from the coroutine, so they belong to the
/// calling component's scope and are cancelled when it unmounts. Each firing
/// also sweeps anything else already past its deadline.
pub fn use_notification_center() -> NotificationCenter {
    let store = use_signal(NotificationStore::new);

    let expiries = use_coroutine(move |mut rx: UnboundedReceiver<ScheduledExpiry>| async move {
        while let Some(ScheduledExpiry { id, after }) = rx.next().await {
            let mut store = store;
            spawn(async move {
                sleep(after).await;
                let mut list = store.write();
                if list.fire_expiry(id) {
                    tracing::debug!(%id, "notification expired");
                }
                let swept = list.expire_due(Utc::now());
                if !swept.is_empty() {
                    tracing::debug!(count = swept.len(), "overdue notifications swept");
                }
            });
        }
    });

    use_context_provider(|| NotificationCenter { store, expiries })
}

/// Hook to access the session's notification center.
pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{NotificationCategory, NotificationKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<Notification>>>;

    /// Mount a center, run `act` against it once and record the list after
    /// every render.
    fn mount(act: fn(&mut NotificationCenter), seen: Seen) -> VirtualDom {
        #[derive(Props, Clone)]
        struct HarnessProps {
            act: fn(&mut NotificationCenter),
            seen: Seen,
        }

        impl PartialEq for HarnessProps {
            fn eq(&self, _: &Self) -> bool {
                false
            }
        }

        fn harness(props: HarnessProps) -> Element {
            let mut center = use_notification_center();
            use_hook(|| (props.act)(&mut center));
            *props.seen.borrow_mut() = center.snapshot();
            rsx! {}
        }

        let mut dom = VirtualDom::new_with_props(harness, HarnessProps { act, seen });
        dom.rebuild_in_place();
        dom
    }

    fn run(act: fn(&mut NotificationCenter)) -> Vec<Notification> {
        let seen: Seen = Rc::default();
        let _dom = mount(act, seen.clone());
        let items = seen.borrow().clone();
        items
    }

    /// Run woken tasks and pending renders without moving the paused clock.
    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            let ready = tokio::select! {
                biased;
                _ = dom.wait_for_work() => true,
                _ = tokio::task::yield_now() => false,
            };
            if ready {
                dom.render_immediate_to_vec();
            }
        }
    }

    async fn advance_ms(dom: &mut VirtualDom, ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        settle(dom).await;
    }

    #[test]
    fn producers_go_through_the_store() {
        let items = run(|c| {
            c.request_submitted("Multimeter", 1);
            c.request_approved("Arduino Uno", 2, None);
        });
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, NotificationKind::Success);
        assert_eq!(items[0].category, NotificationCategory::Approval);
        assert!(items[0].message.contains("2x Arduino Uno"));
        assert_eq!(items[1].category, NotificationCategory::Request);
    }

    #[test]
    fn add_then_remove_leaves_empty() {
        let items = run(|c| {
            let id = c.add(
                NotificationDraft::new("x")
                    .title("Request Submitted")
                    .category(NotificationCategory::Request),
            );
            c.remove(id);
            c.remove(id);
        });
        assert!(items.is_empty());
    }

    #[test]
    fn mark_as_read_and_clear_all() {
        let items = run(|c| {
            let a = c.component_returned("Servo", 1);
            c.overdue_notice("Servo", 1, 2);
            c.mark_as_read(a);
            c.mark_as_read(a);
        });
        assert_eq!(items.iter().filter(|n| n.read).count(), 1);

        let cleared = run(|c| {
            c.due_date_reminder("Servo", 1, 3);
            c.add(NotificationDraft::new("transient").duration_ms(3000));
            c.clear_all();
        });
        assert!(cleared.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn transient_notification_expires_on_schedule() {
        let seen: Seen = Rc::default();
        let mut dom = mount(
            |c| {
                c.add(NotificationDraft::new("bye").duration_ms(3000));
                c.request_submitted("Oscilloscope", 1);
            },
            seen.clone(),
        );
        settle(&mut dom).await;
        assert_eq!(seen.borrow().len(), 2);

        advance_ms(&mut dom, 2999).await;
        assert_eq!(seen.borrow().len(), 2);

        advance_ms(&mut dom, 2).await;
        let left = seen.borrow().clone();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].category, NotificationCategory::Request);
    }

    #[tokio::test(start_paused = true)]
    async fn removed_before_expiry_stays_removed() {
        let seen: Seen = Rc::default();
        let mut dom = mount(
            |c| {
                let id = c.add(NotificationDraft::new("short").duration_ms(1000));
                c.remove(id);
                c.component_returned("Servo", 1);
            },
            seen.clone(),
        );
        settle(&mut dom).await;
        advance_ms(&mut dom, 1500).await;
        let left = seen.borrow().clone();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].category, NotificationCategory::Return);
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_duration_is_kept_without_a_timer() {
        let seen: Seen = Rc::default();
        let mut dom = mount(
            |c| {
                c.add(NotificationDraft::new("forever").duration_ms(u64::MAX));
            },
            seen.clone(),
        );
        settle(&mut dom).await;
        advance_ms(&mut dom, 86_400_000).await;
        assert_eq!(seen.borrow().len(), 1);
    }
}
