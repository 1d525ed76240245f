//! Scroll notifications from the host to its listeners.
//!
//! The host calls [`ScrollEvents::emit`] whenever its scroll offset changes.
//! Each [`ScrollSubscription`] sees that something happened since it last
//! looked; bursts collapse into one pending notification. Dropping a
//! subscription releases it, so a torn-down view is never notified.

use tokio::sync::watch;

#[derive(Debug)]
pub struct ScrollEvents {
    tx: watch::Sender<u64>,
}

impl Default for ScrollEvents {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollEvents {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self { tx }
    }

    pub fn emit(&self) {
        self.tx.send_modify(|seq| *seq = seq.wrapping_add(1));
    }

    #[must_use]
    pub fn listen(&self) -> ScrollSubscription {
        ScrollSubscription {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[derive(Debug)]
pub struct ScrollSubscription {
    rx: watch::Receiver<u64>,
}

impl ScrollSubscription {
    /// Whether a scroll happened since the last call. Clears the flag.
    pub fn take_pending(&mut self) -> bool {
        match self.rx.has_changed() {
            Ok(true) => {
                self.rx.borrow_and_update();
                true
            }
            Ok(false) | Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollEvents;

    #[test]
    fn new_subscription_has_nothing_pending() {
        let events = ScrollEvents::new();
        events.emit();
        let mut sub = events.listen();
        assert!(!sub.take_pending());
    }

    #[test]
    fn bursts_collapse_into_one_notification() {
        let events = ScrollEvents::new();
        let mut sub = events.listen();
        events.emit();
        events.emit();
        events.emit();
        assert!(sub.take_pending());
        assert!(!sub.take_pending());
    }

    #[test]
    fn dropping_subscription_releases_it() {
        let events = ScrollEvents::new();
        let sub = events.listen();
        let other = events.listen();
        assert_eq!(events.listener_count(), 2);
        drop(sub);
        assert_eq!(events.listener_count(), 1);
        drop(other);
        assert_eq!(events.listener_count(), 0);
        events.emit();
    }

    #[test]
    fn subscription_outliving_source_stays_quiet() {
        let events = ScrollEvents::new();
        let mut sub = events.listen();
        drop(events);
        assert!(!sub.take_pending());
    }
}
