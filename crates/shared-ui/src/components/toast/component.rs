use crate::components::NotificationIcon;
use crate::timer::sleep;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use shared_types::{Notification, NotificationId, ToastSettings};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Lifecycle of a single toast card. A card in `Leaving` is removed once the
/// exit delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Entering,
    Visible,
    Leaving,
}

impl ToastPhase {
    /// Finish the enter transition. Has no effect once leaving.
    pub fn reveal(self) -> Self {
        match self {
            ToastPhase::Entering => ToastPhase::Visible,
            other => other,
        }
    }

    /// Start the exit transition from any phase. Returns `None` if the card
    /// is already leaving, so removal is scheduled only once.
    pub fn begin_leave(self) -> Option<Self> {
        match self {
            ToastPhase::Leaving => None,
            _ => Some(ToastPhase::Leaving),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPhase::Entering => "entering",
            ToastPhase::Visible => "visible",
            ToastPhase::Leaving => "leaving",
        }
    }
}

/// Delays driving the toast phase machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTiming {
    pub enter: Duration,
    pub exit: Duration,
    pub default_lifetime: Duration,
}

impl ToastTiming {
    /// How long a toast stays visible. Notifications without their own
    /// duration use the default lifetime.
    pub fn lifetime(&self, duration_ms: u64) -> Duration {
        if duration_ms == 0 {
            self.default_lifetime
        } else {
            Duration::from_millis(duration_ms)
        }
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self::from(&ToastSettings::default())
    }
}

impl From<&ToastSettings> for ToastTiming {
    fn from(settings: &ToastSettings) -> Self {
        Self {
            enter: Duration::from_millis(settings.enter_delay_ms),
            exit: Duration::from_millis(settings.exit_delay_ms),
            default_lifetime: Duration::from_millis(settings.default_duration_ms),
        }
    }
}

/// Cards currently on screen.
///
/// An item that drops out of the incoming list keeps its card, marked as
/// departing, until the card reports that its exit transition has finished.
#[derive(Debug, Default)]
struct Departures {
    last: Vec<Notification>,
    leaving: Vec<Notification>,
}

impl Departures {
    /// Cards to render for `incoming`, newest first, each paired with
    /// whether it is departing.
    fn reconcile(&mut self, incoming: &[Notification]) -> Vec<(Notification, bool)> {
        for gone in self.last.iter().filter(|p| !incoming.iter().any(|n| n.id == p.id)) {
            if !self.leaving.iter().any(|l| l.id == gone.id) {
                self.leaving.push(gone.clone());
            }
        }
        self.last = incoming.to_vec();

        let mut cards: Vec<(Notification, bool)> = incoming
            .iter()
            .cloned()
            .map(|n| (n, false))
            .chain(self.leaving.iter().cloned().map(|n| (n, true)))
            .collect();
        cards.sort_by(|a, b| b.0.id.cmp(&a.0.id));
        cards
    }

    /// Forget a card whose exit has completed.
    fn finish(&mut self, id: NotificationId) {
        self.last.retain(|n| n.id != id);
        self.leaving.retain(|n| n.id != id);
    }
}

/// Floating stack of auto-dismissing cards in the top-right corner.
///
/// Each card calls `on_remove` exactly once, after its lifetime or a manual
/// dismiss plus the exit delay. A card whose notification disappears from
/// `notifications` first plays its exit transition.
#[component]
pub fn ToastStack(
    notifications: Vec<Notification>,
    #[props(default)] timing: ToastTiming,
    on_remove: EventHandler<NotificationId>,
) -> Element {
    let departures = use_hook(|| Rc::new(RefCell::new(Departures::default())));
    let mut exits = use_signal(|| 0u64);
    // Re-render once a departing card is done.
    let _ = exits();

    let cards = departures.borrow_mut().reconcile(&notifications);

    let finish = use_callback(move |id: NotificationId| {
        departures.borrow_mut().finish(id);
        exits += 1;
        on_remove.call(id);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "toast-stack", "aria-live": "polite",
            for (key , notification , departing) in cards.into_iter().map(|(n, d)| (n.id.to_string(), n, d)) {
                ToastCard {
                    key: "{key}",
                    notification,
                    timing,
                    departing,
                    on_remove: finish,
                }
            }
        }
    }
}

/// Handle to one toast's phase machine.
#[derive(Clone, Copy)]
pub struct ToastLifecycle {
    phase: Signal<ToastPhase>,
    leave: Callback<()>,
}

impl ToastLifecycle {
    pub fn phase(&self) -> ToastPhase {
        *self.phase.read()
    }

    /// Start leaving now. Repeated calls are ignored.
    pub fn dismiss(&self) {
        self.leave.call(());
    }
}

/// Drive a toast through entering, visible and leaving, then call
/// `on_remove` once.
///
/// The timers are tasks owned by the calling component and are cancelled
/// if it unmounts first.
pub fn use_toast_lifecycle(
    id: NotificationId,
    duration_ms: u64,
    timing: ToastTiming,
    on_remove: EventHandler<NotificationId>,
) -> ToastLifecycle {
    let mut phase = use_signal(ToastPhase::default);
    let lifetime = timing.lifetime(duration_ms);

    let leave = use_callback(move |_: ()| {
        let Some(next) = phase.peek().begin_leave() else {
            return;
        };
        phase.set(next);
        spawn(async move {
            sleep(timing.exit).await;
            on_remove.call(id);
        });
    });

    use_hook(move || {
        spawn(async move {
            sleep(timing.enter).await;
            let next = phase.peek().reveal();
            phase.set(next);
        });
        spawn(async move {
            sleep(lifetime).await;
            leave.call(());
        });
    });

    ToastLifecycle { phase, leave }
}

/// A single toast card.
#[component]
pub fn ToastCard(
    notification: Notification,
    timing: ToastTiming,
    on_remove: EventHandler<NotificationId>,
    /// Set once the notification is gone from the list; starts the exit.
    #[props(default)]
    departing: bool,
) -> Element {
    let toast = use_toast_lifecycle(
        notification.id,
        notification.duration_ms,
        timing,
        on_remove,
    );

    use_effect(use_reactive!(|departing| {
        if departing {
            toast.dismiss();
        }
    }));

    let kind = notification.kind;

    rsx! {
        div {
            class: "toast-card",
            role: "status",
            "data-kind": kind.as_str(),
            "data-phase": toast.phase().as_str(),
            span { class: "toast-icon",
                NotificationIcon { kind }
            }
            div { class: "toast-body",
                if let Some(title) = notification.title.as_deref() {
                    p { class: "toast-title", "{title}" }
                }
                p { class: "toast-message", "{notification.message}" }
            }
            button {
                class: "toast-dismiss",
                r#type: "button",
                "aria-label": "Dismiss notification",
                onclick: move |_| toast.dismiss(),
                Icon::<LdX> { icon: LdX, width: 16, height: 16 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use shared_types::{NotificationCategory, NotificationKind};
    use std::cell::Cell;

    fn toast(id: u64, message: &str, duration_ms: u64) -> Notification {
        Notification {
            id: NotificationId::new(id),
            title: None,
            message: message.to_string(),
            kind: NotificationKind::Success,
            category: NotificationCategory::System,
            timestamp: Utc::now(),
            read: false,
            duration_ms,
        }
    }

    #[test]
    fn phase_starts_entering_then_reveals() {
        let phase = ToastPhase::default();
        assert_eq!(phase, ToastPhase::Entering);
        assert_eq!(phase.reveal(), ToastPhase::Visible);
        assert_eq!(ToastPhase::Visible.reveal(), ToastPhase::Visible);
    }

    #[test]
    fn leave_from_any_phase_but_only_once() {
        assert_eq!(ToastPhase::Entering.begin_leave(), Some(ToastPhase::Leaving));
        assert_eq!(ToastPhase::Visible.begin_leave(), Some(ToastPhase::Leaving));
        assert_eq!(ToastPhase::Leaving.begin_leave(), None);
    }

    #[test]
    fn reveal_does_not_undo_leaving() {
        assert_eq!(ToastPhase::Leaving.reveal(), ToastPhase::Leaving);
    }

    #[test]
    fn lifetime_defaults_when_unset() {
        let timing = ToastTiming::default();
        assert_eq!(timing.lifetime(0), Duration::from_millis(5000));
        assert_eq!(timing.lifetime(3000), Duration::from_millis(3000));
        assert_eq!(timing.exit, Duration::from_millis(300));
        assert_eq!(timing.enter, Duration::from_millis(50));
    }

    #[test]
    fn timing_follows_settings() {
        let settings = ToastSettings {
            enabled: true,
            default_duration_ms: 8000,
            enter_delay_ms: 10,
            exit_delay_ms: 150,
        };
        let timing = ToastTiming::from(&settings);
        assert_eq!(timing.lifetime(0), Duration::from_millis(8000));
        assert_eq!(timing.exit, Duration::from_millis(150));
    }

    #[test]
    fn stack_renders_cards_in_entering_phase() {
        #[component]
        fn Harness() -> Element {
            rsx! {
                ToastStack {
                    notifications: vec![toast(2, "Saved", 3000), toast(1, "Checked out", 0)],
                    on_remove: |_| {},
                }
            }
        }

        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("toast-stack"));
        assert_eq!(html.matches("class=\"toast-card\"").count(), 2);
        assert!(html.contains("data-phase=\"entering\""));
        assert!(html.contains("data-kind=\"success\""));
        let saved = html.find("Saved").unwrap();
        let checked = html.find("Checked out").unwrap();
        assert!(saved < checked);
    }

    #[test]
    fn departures_keep_cards_until_finished() {
        let mut departures = Departures::default();
        let a = toast(1, "a", 3000);
        let b = toast(2, "b", 3000);

        let cards = departures.reconcile(&[b.clone(), a.clone()]);
        assert_eq!(cards, vec![(b.clone(), false), (a.clone(), false)]);

        let cards = departures.reconcile(&[b.clone()]);
        assert_eq!(cards, vec![(b.clone(), false), (a.clone(), true)]);

        departures.finish(a.id);
        assert_eq!(departures.reconcile(&[b.clone()]), vec![(b.clone(), false)]);
    }

    #[test]
    fn finished_card_is_not_brought_back() {
        let mut departures = Departures::default();
        let a = toast(1, "a", 3000);
        departures.reconcile(&[a.clone()]);
        // Dismissed card reports done before the list drops it.
        departures.finish(a.id);
        assert!(departures.reconcile(&[]).is_empty());
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

    #[derive(Clone, Default)]
    struct Bench {
        removed: Rc<RefCell<Vec<NotificationId>>>,
        toast: Rc<Cell<Option<ToastLifecycle>>>,
        show: Rc<Cell<Option<Signal<bool>>>>,
    }

    impl Bench {
        fn mount(&self, duration_ms: u64) -> VirtualDom {
            #[derive(Props, Clone)]
            struct BenchProps {
                bench: Bench,
                duration_ms: u64,
            }

            impl PartialEq for BenchProps {
                fn eq(&self, _: &Self) -> bool {
                    false
                }
            }

            fn root(props: BenchProps) -> Element {
                let show = use_signal(|| true);
                props.bench.show.set(Some(show));
                use_context_provider(|| props.bench.clone());
                rsx! {
                    if show() {
                        TimedToast { duration_ms: props.duration_ms }
                    }
                }
            }

            #[component]
            fn TimedToast(duration_ms: u64) -> Element {
                let bench = use_context::<Bench>();
                let removed = bench.removed.clone();
                let on_remove =
                    use_callback(move |id: NotificationId| removed.borrow_mut().push(id));
                let toast = use_toast_lifecycle(
                    NotificationId::new(1),
                    duration_ms,
                    ToastTiming::default(),
                    on_remove,
                );
                bench.toast.set(Some(toast));
                rsx! { span { {toast.phase().as_str()} } }
            }

            let mut dom = VirtualDom::new_with_props(
                root,
                BenchProps {
                    bench: self.clone(),
                    duration_ms,
                },
            );
            dom.rebuild_in_place();
            dom
        }

        fn phase(&self, dom: &VirtualDom) -> Option<ToastPhase> {
            let toast = self.toast.get()?;
            Some(dom.in_runtime(|| *toast.phase.peek()))
        }

        fn dismiss(&self, dom: &VirtualDom) {
            if let Some(toast) = self.toast.get() {
                dom.in_runtime(|| toast.dismiss());
            }
        }

        fn removed(&self) -> Vec<NotificationId> {
            self.removed.borrow().clone()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn enters_then_leaves_after_lifetime() {
        let bench = Bench::default();
        let mut dom = bench.mount(1000);
        settle(&mut dom).await;
        assert_eq!(bench.phase(&dom), Some(ToastPhase::Entering));

        advance_ms(&mut dom, 60).await;
        assert_eq!(bench.phase(&dom), Some(ToastPhase::Visible));

        advance_ms(&mut dom, 945).await;
        assert_eq!(bench.phase(&dom), Some(ToastPhase::Leaving));
        assert!(bench.removed().is_empty());

        advance_ms(&mut dom, 310).await;
        assert_eq!(bench.removed(), vec![NotificationId::new(1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn double_dismiss_removes_exactly_once() {
        let bench = Bench::default();
        let mut dom = bench.mount(60_000);
        settle(&mut dom).await;
        advance_ms(&mut dom, 60).await;

        bench.dismiss(&dom);
        bench.dismiss(&dom);
        settle(&mut dom).await;
        assert_eq!(bench.phase(&dom), Some(ToastPhase::Leaving));

        advance_ms(&mut dom, 290).await;
        assert!(bench.removed().is_empty());

        advance_ms(&mut dom, 20).await;
        assert_eq!(bench.removed(), vec![NotificationId::new(1)]);

        // The lifetime timer still fires later but finds the card leaving.
        advance_ms(&mut dom, 60_000).await;
        assert_eq!(bench.removed().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_during_enter_goes_straight_to_leaving() {
        let bench = Bench::default();
        let mut dom = bench.mount(60_000);
        settle(&mut dom).await;

        bench.dismiss(&dom);
        settle(&mut dom).await;
        advance_ms(&mut dom, 60).await;
        assert_eq!(bench.phase(&dom), Some(ToastPhase::Leaving));

        advance_ms(&mut dom, 260).await;
        assert_eq!(bench.removed(), vec![NotificationId::new(1)]);
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_cancels_pending_removal() {
        let bench = Bench::default();
        let mut dom = bench.mount(1000);
        settle(&mut dom).await;

        bench.dismiss(&dom);
        settle(&mut dom).await;
        if let Some(mut show) = bench.show.get() {
            dom.in_runtime(|| show.set(false));
        }
        settle(&mut dom).await;

        advance_ms(&mut dom, 5000).await;
        assert!(bench.removed().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn card_dropped_from_list_plays_exit_before_removal() {
        type Items = Rc<Cell<Option<Signal<Vec<Notification>>>>>;

        #[derive(Props, Clone)]
        struct StackProps {
            items: Items,
            removed: Rc<RefCell<Vec<NotificationId>>>,
        }

        impl PartialEq for StackProps {
            fn eq(&self, _: &Self) -> bool {
                false
            }
        }

        fn root(props: StackProps) -> Element {
            let items = use_signal(|| vec![toast(1, "Checked out", 60_000)]);
            props.items.set(Some(items));
            let removed = props.removed.clone();
            rsx! {
                ToastStack {
                    notifications: items(),
                    on_remove: move |id| removed.borrow_mut().push(id),
                }
            }
        }

        let items: Items = Rc::default();
        let removed: Rc<RefCell<Vec<NotificationId>>> = Rc::default();
        let mut dom = VirtualDom::new_with_props(
            root,
            StackProps {
                items: items.clone(),
                removed: removed.clone(),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;
        advance_ms(&mut dom, 60).await;

        if let Some(mut list) = items.get() {
            dom.in_runtime(|| list.write().clear());
        }
        settle(&mut dom).await;
        let html = dioxus_ssr::render(&dom);
        assert_eq!(html.matches("class=\"toast-card\"").count(), 1);
        assert!(html.contains("data-phase=\"leaving\""));

        advance_ms(&mut dom, 310).await;
        assert_eq!(*removed.borrow(), vec![NotificationId::new(1)]);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("toast-card"));
    }
}
