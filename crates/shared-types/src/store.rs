use crate::{Notification, NotificationDraft, NotificationId};
use chrono::{DateTime, Duration, Utc};

/// A scheduled auto-removal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingExpiry {
    id: NotificationId,
    due: DateTime<Utc>,
}

/// In-memory notification list with explicit time.
///
/// The store never reads the clock or spawns timers itself: callers pass
/// `now` into [`add`](Self::add) and either fire individual expiries from
/// their own timers or sweep with [`expire_due`](Self::expire_due).
/// The list is kept newest-first.
#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    items: Vec<Notification>,
    pending: Vec<PendingExpiry>,
    next_seq: u64,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notification from `draft`, stamped at `now`, and put it at
    /// the front of the list.
    pub fn add(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> NotificationId {
        self.next_seq += 1;
        let id = NotificationId::new(self.next_seq);

        match expiry_deadline(now, draft.duration_ms) {
            Some(due) => self.pending.push(PendingExpiry { id, due }),
            None if draft.duration_ms > 0 => tracing::warn!(
                %id,
                duration_ms = draft.duration_ms,
                "duration out of range, notification will not expire"
            ),
            None => {}
        }

        tracing::debug!(
            %id,
            kind = draft.kind.as_str(),
            category = draft.category.as_str(),
            duration_ms = draft.duration_ms,
            "notification added"
        );

        self.items.insert(
            0,
            Notification {
                id,
                title: draft.title,
                message: draft.message,
                kind: draft.kind,
                category: draft.category,
                timestamp: now,
                read: false,
                duration_ms: draft.duration_ms,
            },
        );
        id
    }

    /// Remove a notification. Returns `false` when it was already gone,
    /// which is the normal outcome when a dismiss races its own expiry.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        self.pending.retain(|p| p.id != id);
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(%id, "notification removed");
        }
        removed
    }

    /// Mark a notification read. Returns `true` only if it changed.
    pub fn mark_as_read(&mut self, id: NotificationId) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Drop every notification and every pending expiry.
    pub fn clear_all(&mut self) {
        tracing::debug!(count = self.items.len(), "notifications cleared");
        self.items.clear();
        self.pending.clear();
    }

    /// Called when the timer scheduled for `id` fires.
    pub fn fire_expiry(&mut self, id: NotificationId) -> bool {
        self.remove(id)
    }

    /// Remove everything whose deadline is at or before `now`, returning the
    /// ids that were removed (oldest deadline first).
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> Vec<NotificationId> {
        let mut due: Vec<PendingExpiry> = self
            .pending
            .iter()
            .copied()
            .filter(|p| p.due <= now)
            .collect();
        due.sort_by_key(|p| p.due);

        due.into_iter()
            .filter_map(|p| self.remove(p.id).then_some(p.id))
            .collect()
    }

    /// Deadline scheduled for `id`, if it is still pending.
    pub fn deadline(&self, id: NotificationId) -> Option<DateTime<Utc>> {
        self.pending.iter().find(|p| p.id == id).map(|p| p.due)
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        unread_count(&self.items)
    }
}

/// `now + duration_ms`, or `None` for persistent notifications and for
/// durations that do not fit the calendar.
fn expiry_deadline(now: DateTime<Utc>, duration_ms: u64) -> Option<DateTime<Utc>> {
    if duration_ms == 0 {
        return None;
    }
    let millis = i64::try_from(duration_ms).ok()?;
    now.checked_add_signed(Duration::try_milliseconds(millis)?)
}

/// Number of unread notifications in a snapshot.
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}
