//! Timeout-bounded blocking FIFO queues, and a registry that hands out one
//! queue per stream name.
//!
//! ```
//! use streamq::QueueRegistry;
//!
//! let registry = QueueRegistry::new();
//! registry.push("metrics", 1);
//! registry.push("logs", 2);
//!
//! assert_eq!(Some(2), registry.pop("logs"));
//! assert_eq!(Some(1), registry.pop("metrics"));
//! ```
mod config;
mod error;
mod queue_map;
mod queue_trait;
mod synced_queue;
#[cfg(test)]
mod test_util;

pub use config::{QueueConfig, POP_TIMEOUT};
pub use error::{Error, ErrorKind, Result};
pub use queue_map::QueueRegistry;
pub use queue_trait::TimedQueue;
pub use synced_queue::BlockingQueue;
