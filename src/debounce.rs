use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    id: RequestId,
    due: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    next_id: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            pending: None,
        }
    }

    /// Schedules a run `delay` after `now`, replacing any pending one.
    pub fn request(&mut self, now: Instant) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        if let Some(stale) = self.pending.replace(Pending {
            id,
            due: now + self.delay,
        }) {
            log::trace!("request {:?} superseded by {:?}", stale.id, id);
        }
        id
    }

    pub fn cancel(&mut self) -> Option<RequestId> {
        self.pending.take().map(|p| p.id)
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending.map(|p| p.id)
    }

    /// Fires the pending request if its quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<RequestId> {
        match self.pending {
            Some(p) if p.due <= now => self.cancel(),
            _ => None,
        }
    }

    /// Fires the pending request regardless of time.
    pub fn flush(&mut self) -> Option<RequestId> {
        self.cancel()
    }
}
