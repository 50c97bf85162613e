use std::{collections::HashMap, fmt::Debug};

use parking_lot::Mutex;
use tracing::debug;

use crate::{queue_trait::TimedQueue, BlockingQueue, QueueConfig, Result};

/// Independent [`BlockingQueue`]s keyed by stream name.
///
/// A stream's queue is created the first time its name is pushed to or
/// popped from, and lives as long as the registry. The registry lock only
/// covers the name lookup; pushes and the bounded wait in `pop` run against
/// the stream's own queue, so streams never wait on each other.
pub struct QueueRegistry<T> {
    queues: Mutex<HashMap<String, BlockingQueue<T>>>,
    config: QueueConfig,
}

impl<T> Debug for QueueRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueRegistry")
            .field("streams", &self.stream_names())
            .field("config", &self.config)
            .finish()
    }
}

impl<T> Default for QueueRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueRegistry<T> {
    pub fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            config: QueueConfig::default(),
        }
    }

    /// Every queue this registry provisions uses `config`.
    pub fn with_config(config: QueueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            queues: Mutex::new(HashMap::new()),
            config,
        })
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Handle to the queue for `name`, creating it if this is the first
    /// reference. The registry lock is released before this returns.
    pub fn queue(&self, name: &str) -> BlockingQueue<T> {
        let mut queues = self.queues.lock();
        if let Some(queue) = queues.get(name) {
            return queue.clone();
        }

        debug!(stream = name, "provisioning queue for new stream");
        let queue = BlockingQueue::from_valid_config(self.config);
        queues.insert(name.to_owned(), queue.clone());
        queue
    }

    pub fn push(&self, name: &str, item: T) {
        self.queue(name).push(item);
    }

    /// Waits up to the pop timeout for an item on `name`. A name nobody has
    /// pushed to yet behaves like an empty stream.
    pub fn pop(&self, name: &str) -> Option<T> {
        let queue = self.queue(name);
        queue.pop()
    }

    /// Does not provision `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.queues.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.queues.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.lock().is_empty()
    }

    pub fn stream_names(&self) -> Vec<String> {
        let mut names = self.queues.lock().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }
}
