//! Debounced Search
//!
//! Search-as-you-type: each keystroke submits the query, and only the query
//! still current after the delay is returned for fetching.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::timer::{default_timer, Timer};

pub struct Debouncer {
    delay: Duration,
    timer: Rc<dyn Timer>,
    generation: Cell<u64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self::with_timer(delay, default_timer())
    }

    pub fn with_timer(delay: Duration, timer: Rc<dyn Timer>) -> Self {
        Self {
            delay,
            timer,
            generation: Cell::new(0),
        }
    }

    /// Wait out the delay. `Some(trimmed query)` if nothing newer came in.
    pub async fn settle(&self, query: &str) -> Option<String> {
        let ticket = self.generation.get() + 1;
        self.generation.set(ticket);
        self.timer.sleep(self.delay).await;
        (self.generation.get() == ticket).then(|| query.trim().to_string())
    }

    /// Drop any query waiting to settle
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_query_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let (a, b, c) = futures::join!(
            debouncer.settle("k"),
            debouncer.settle("km"),
            debouncer.settle(" kmcc "),
        );
        assert_eq!(a, None);
        assert_eq!(b, None);
        assert_eq!(c.as_deref(), Some("kmcc"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_queries_all_settle() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        assert_eq!(debouncer.settle("a").await.as_deref(), Some("a"));
        assert_eq!(debouncer.settle("ab").await.as_deref(), Some("ab"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let (pending, _) = futures::join!(debouncer.settle("x"), async { debouncer.cancel() });
        assert_eq!(pending, None);
    }
}
