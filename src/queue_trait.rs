pub trait TimedQueue {
    type Item;

    fn push(&self, item: Self::Item);

    /// Waits at most the queue's pop timeout. `None` means the wait expired
    /// with nothing to take; callers that need to keep waiting call again.
    fn pop(&self) -> Option<Self::Item>;
}
