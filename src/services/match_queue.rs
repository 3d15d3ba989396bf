use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::info;

/// FIFO waiting list of player ids.
///
/// One mutex guards the whole queue, so the duplicate check inside
/// `enqueue` and the dequeue-of-two inside `try_get_pair` are each a single
/// critical section; two concurrent pair attempts can never draw
/// overlapping players.
#[derive(Default)]
pub struct MatchQueue {
    waiting: Mutex<VecDeque<i64>>,
}

impl MatchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `user_id` unless it is already waiting. A duplicate join
    /// request from a still-queued player is a no-op.
    pub fn enqueue(&self, user_id: i64) {
        let mut waiting = self.waiting.lock().expect("match queue poisoned");
        if !waiting.contains(&user_id) {
            waiting.push_back(user_id);
            info!(
                "User {} joined the queue. Players waiting: {}",
                user_id,
                waiting.len()
            );
        }
    }

    /// Atomically removes and returns the two oldest entries, or `None`
    /// when fewer than two players are waiting.
    pub fn try_get_pair(&self) -> Option<(i64, i64)> {
        let mut waiting = self.waiting.lock().expect("match queue poisoned");
        if waiting.len() >= 2 {
            let player1 = waiting.pop_front()?;
            let player2 = waiting.pop_front()?;
            Some((player1, player2))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.waiting.lock().expect("match queue poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
