use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use parking_lot::{Condvar, Mutex};
use tracing::trace;

/// Which end of the queue a sent message lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueOrder {
    /// Oldest message is received first.
    #[default]
    Fifo,
    /// Newest message is received first.
    Lifo,
}

/// A blocking message queue built on a Mutex and Condvar.
///
/// Senders never block (beyond taking the lock) and the queue is unbounded.
/// Receivers sleep on the condvar until a message is available; every wakeup
/// re-checks the queue, so spurious wakeups and racing receivers are handled.
/// Each message is handed to exactly one receiver.
#[derive(Debug)]
pub struct MessageQueue<T> {
    queue: Mutex<VecDeque<T>>,
    item_ready: Condvar,
    order: QueueOrder,
}

impl<T> Default for MessageQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MessageQueue<T> {
    pub fn new() -> Self {
        Self::with_order(QueueOrder::Fifo)
    }

    pub fn with_order(order: QueueOrder) -> Self {
        MessageQueue {
            queue: Mutex::new(VecDeque::new()),
            item_ready: Condvar::new(),
            order,
        }
    }

    pub fn order(&self) -> QueueOrder {
        self.order
    }

    /// Queues a message and wakes one waiting receiver.
    pub fn send(&self, message: T) {
        {
            let mut queue = self.queue.lock();
            match self.order {
                QueueOrder::Fifo => queue.push_back(message),
                QueueOrder::Lifo => queue.push_front(message),
            }
        }
        self.item_ready.notify_one();
    }

    /// Waits until a message is available and takes it.
    pub fn receive(&self) -> T {
        let mut queue = self.queue.lock();
        loop {
            if let Some(message) = queue.pop_front() {
                return message;
            }
            trace!("queue empty, waiting for a message");
            self.item_ready.wait(&mut queue);
        }
    }

    /// Like [`receive`](Self::receive), but gives up once `timeout` has passed.
    pub fn receive_timeout(&self, timeout: Duration) -> Option<T> {
        let deadline = Instant::now() + timeout;
        let mut queue = self.queue.lock();
        loop {
            if let Some(message) = queue.pop_front() {
                return Some(message);
            }
            if self.item_ready.wait_until(&mut queue, deadline).timed_out() {
                return queue.pop_front();
            }
        }
    }

    /// Takes a message if one is queued, without waiting.
    pub fn try_receive(&self) -> Option<T> {
        self.queue.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}
