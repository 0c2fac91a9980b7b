//! Notice bus.
//!
//! Publishes transient notices to any number of subscribers using a tokio
//! broadcast channel and keeps the list of notices that are still visible.
//! Publishing never blocks and never fails, even with no subscriber.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use memberdb_core::account::SubmitOutcome;
use memberdb_core::notice::Notice;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::config::DEFAULT_NOTICE_TTL_SECS;

/// Channel capacity for published notices.
const CHANNEL_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
    active: Arc<Mutex<Vec<Notice>>>,
    ttl: chrono::Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_NOTICE_TTL_SECS))
    }
}

impl Notifier {
    /// Creates a notifier whose auto-dismissing notices live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            active: Arc::new(Mutex::new(Vec::new())),
            ttl: chrono::Duration::from_std(ttl)
                .unwrap_or_else(|_| chrono::Duration::weeks(52)),
        }
    }

    /// Receive every notice published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publish a notice. Notices that expired by now are dropped first.
    pub fn notify(&self, notice: Notice) {
        tracing::debug!(
            id = %notice.id,
            level = %notice.level,
            message = %notice.message,
            "Notice"
        );
        {
            let now = Utc::now();
            let mut active = self.lock();
            active.retain(|existing| !existing.is_expired(self.ttl, now));
            active.push(notice.clone());
        }

        // No receivers just means nobody is watching right now.
        let _ = self.sender.send(notice);
    }

    /// Publish the notice for a submission outcome and return it.
    pub fn notify_outcome(&self, outcome: SubmitOutcome) -> Notice {
        let notice = Notice::for_outcome(outcome, Utc::now());
        self.notify(notice.clone());
        notice
    }

    /// Notices still visible at `now`, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> Vec<Notice> {
        self.lock()
            .iter()
            .filter(|notice| !notice.is_expired(self.ttl, now))
            .cloned()
            .collect()
    }

    /// Drop expired notices. Returns how many were removed.
    pub fn prune(&self, now: DateTime<Utc>) -> usize {
        let mut active = self.lock();
        let before = active.len();
        active.retain(|notice| !notice.is_expired(self.ttl, now));
        before - active.len()
    }

    /// Dismiss a notice before it expires.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut active = self.lock();
        let before = active.len();
        active.retain(|notice| notice.id != id);
        active.len() != before
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use memberdb_core::notice::{NoticeLevel, USER_ADDED, USER_EXISTS};

    use super::*;

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let notifier = Notifier::default();
        let mut receiver = notifier.subscribe();

        let published = notifier.notify_outcome(SubmitOutcome::Created);
        let received = receiver.recv().await.unwrap();

        assert_eq!(received, published);
        assert_eq!(received.level, NoticeLevel::Success);
        assert_eq!(received.message, USER_ADDED);
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_the_notice() {
        let notifier = Notifier::default();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        notifier.notify_outcome(SubmitOutcome::AlreadyExists);

        assert_eq!(first.recv().await.unwrap().message, USER_EXISTS);
        assert_eq!(second.recv().await.unwrap().message, USER_EXISTS);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let notifier = Notifier::default();
        notifier.notify_outcome(SubmitOutcome::Failed);
        assert_eq!(notifier.active(Utc::now()).len(), 1);
    }

    #[test]
    fn test_notices_coexist_until_they_expire() {
        let notifier = Notifier::new(Duration::from_secs(5));
        let now = Utc::now();

        notifier.notify(Notice::error("first", now));
        notifier.notify(Notice::error("second", now + chrono::Duration::seconds(3)));

        assert_eq!(notifier.active(now + chrono::Duration::seconds(4)).len(), 2);

        let later = now + chrono::Duration::seconds(6);
        let active = notifier.active(later);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "second");

        assert_eq!(notifier.prune(later), 1);
        assert_eq!(notifier.prune(later), 0);
    }

    #[test]
    fn test_sticky_notices_stay_until_dismissed() {
        let notifier = Notifier::new(Duration::from_secs(1));
        let now = Utc::now();
        let notice = Notice {
            auto_dismiss: false,
            ..Notice::error("read me", now)
        };
        let id = notice.id;
        notifier.notify(notice);

        assert_eq!(notifier.active(now + chrono::Duration::hours(1)).len(), 1);
        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
        assert!(notifier.active(now).is_empty());
    }

    #[test]
    fn test_publishing_drops_expired_notices() {
        let notifier = Notifier::new(Duration::from_secs(1));
        let an_hour_ago = Utc::now() - chrono::Duration::hours(1);

        for _ in 0..1000 {
            notifier.notify(Notice::error("stale", an_hour_ago));
        }
        notifier.notify(Notice::success("fresh", Utc::now()));

        let stored = notifier.lock();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].message, "fresh");
    }
}
