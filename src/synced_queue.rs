use std::{
    collections::VecDeque,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};
use tracing::trace;

use crate::{queue_trait::TimedQueue, QueueConfig, Result};

struct QueueInner<T> {
    items: Mutex<VecDeque<T>>,
    /// Signalled once per pushed item.
    not_empty: Condvar,
    pop_timeout: Duration,
}

/// An unbounded FIFO shared between any number of producers and consumers.
///
/// `push` never blocks. `pop` waits for an item, but never longer than the
/// configured pop timeout ([`crate::POP_TIMEOUT`] by default).
///
/// Cloning yields another handle to the same queue.
///
/// ## Example
/// ```
/// use streamq::{BlockingQueue, TimedQueue};
///
/// let queue = BlockingQueue::new();
///
/// let producer = queue.clone();
/// let handle = std::thread::spawn(move || {
///     for i in 0..4 {
///         producer.push(i);
///     }
/// });
/// handle.join().unwrap();
///
/// let mut received = Vec::new();
/// while let Some(item) = queue.pop() {
///     received.push(item);
///     if received.len() == 4 {
///         break;
///     }
/// }
/// assert_eq!(vec![0, 1, 2, 3], received);
/// ```
pub struct BlockingQueue<T> {
    inner: Arc<QueueInner<T>>,
}

impl<T> Clone for BlockingQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Debug for BlockingQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockingQueue")
            .field("len", &self.len())
            .field("pop_timeout", &self.inner.pop_timeout)
            .finish()
    }
}

impl<T> Default for BlockingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BlockingQueue<T> {
    pub fn new() -> Self {
        Self::from_valid_config(QueueConfig::default())
    }

    pub fn with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    pub(crate) fn from_valid_config(config: QueueConfig) -> Self {
        Self {
            inner: Arc::new(QueueInner {
                items: Mutex::new(VecDeque::new()),
                not_empty: Condvar::new(),
                pop_timeout: config.pop_timeout(),
            }),
        }
    }

    pub fn pop_timeout(&self) -> Duration {
        self.inner.pop_timeout
    }

    /// Number of queued items at the moment of the call.
    pub fn len(&self) -> usize {
        self.inner.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.lock().is_empty()
    }

    /// True when both handles refer to the same underlying queue.
    pub fn same_queue(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> TimedQueue for BlockingQueue<T> {
    type Item = T;

    fn push(&self, item: Self::Item) {
        self.inner.items.lock().push_back(item);
        self.inner.not_empty.notify_one();
    }

    fn pop(&self) -> Option<Self::Item> {
        let deadline = Instant::now().checked_add(self.inner.pop_timeout);
        let mut items = self.inner.items.lock();
        // the guard is dropped on both the item and the timeout path.
        let timed_out = match deadline {
            Some(deadline) => self
                .inner
                .not_empty
                .wait_while_until(&mut items, |items| items.is_empty(), deadline)
                .timed_out(),
            // timeout too large to form a deadline: wait for an item.
            None => {
                self.inner
                    .not_empty
                    .wait_while(&mut items, |items| items.is_empty());
                false
            }
        };

        let item = items.pop_front();
        if item.is_none() && timed_out {
            let timeout_ms = u64::try_from(self.inner.pop_timeout.as_millis()).unwrap_or(u64::MAX);
            trace!(timeout_ms, "pop timed out on empty queue");
        }
        item
    }
}
