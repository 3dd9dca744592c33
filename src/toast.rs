use std::collections::VecDeque;

/// Pending notifications, shown one at a time from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pending: VecDeque<String>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The toast currently on screen.
    pub fn current(&self) -> Option<&str> {
        self.pending.front().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.pending.push_back(text.into());
    }

    /// Queues a submission behind whatever is already showing.
    ///
    /// Returns true when the queue was idle and now has work, i.e. the caller
    /// must start a drain task. An empty submission never needs one.
    pub fn enqueue<I>(&mut self, names: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        let idle = self.pending.is_empty();
        self.pending.extend(names);
        idle && !self.pending.is_empty()
    }

    /// Retires the toast on screen. Returns whether another one follows.
    pub fn advance(&mut self) -> bool {
        self.pending.pop_front();
        !self.pending.is_empty()
    }
}

impl Extend<String> for ToastQueue {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_in_submission_order() {
        let mut q = ToastQueue::new();
        q.extend(vec!["Bananas".to_string(), "Cherries".to_string()]);
        assert_eq!(q.current(), Some("Bananas"));
        assert!(q.advance());
        assert_eq!(q.current(), Some("Cherries"));
        assert!(!q.advance());
        assert_eq!(q.current(), None);
    }

    #[test]
    fn later_submits_queue_behind() {
        let mut q = ToastQueue::new();
        q.push("Apple");
        q.extend(vec!["Navel".to_string()]);
        assert_eq!(q.len(), 2);
        q.advance();
        assert_eq!(q.current(), Some("Navel"));
    }

    #[test]
    fn empty_submit_shows_nothing() {
        let mut q = ToastQueue::new();
        assert!(!q.enqueue(Vec::new()));
        assert_eq!(q.current(), None);
    }

    #[test]
    fn first_submit_starts_draining() {
        let mut q = ToastQueue::new();
        assert!(q.enqueue(vec!["Bananas".to_string(), "Cherries".to_string()]));
        assert_eq!(q.current(), Some("Bananas"));
    }

    #[test]
    fn repeat_submit_joins_running_drain() {
        let mut q = ToastQueue::new();
        assert!(q.enqueue(vec!["Bananas".to_string()]));
        assert!(!q.enqueue(vec!["Apple".to_string(), "Bananas".to_string()]));
        assert!(!q.enqueue(Vec::new()));
        assert_eq!(q.len(), 3);
        assert_eq!(q.current(), Some("Bananas"));
        assert!(q.advance());
        assert_eq!(q.current(), Some("Apple"));
    }

    #[test]
    fn drained_queue_restarts_on_next_submit() {
        let mut q = ToastQueue::new();
        q.enqueue(vec!["Oval".to_string()]);
        assert!(!q.advance());
        assert!(q.enqueue(vec!["Navel".to_string()]));
    }

    #[test]
    fn advancing_empty_queue_is_harmless() {
        let mut q = ToastQueue::new();
        assert!(!q.advance());
        assert!(q.is_empty());
    }
}
