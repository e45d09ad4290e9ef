use std::collections::{HashSet, VecDeque};

use crate::solver::puzzle::Position;

/// The propagation agenda: positions whose domain just collapsed to a
/// singleton and still need their consequences applied.
///
/// A position is never queued twice; re-pushing a queued position is a
/// no-op. Processing order is FIFO, which is purely a performance choice —
/// propagation reaches the same fixpoint regardless of order.
pub(crate) struct WorkList {
    queue: VecDeque<Position>,
    queued: HashSet<Position>,
}

impl WorkList {
    pub(crate) fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
        }
    }

    pub(crate) fn push_back(&mut self, pos: Position) {
        if self.queued.insert(pos) {
            self.queue.push_back(pos);
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<Position> {
        let pos = self.queue.pop_front()?;
        self.queued.remove(&pos);
        Some(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pushes_are_ignored() {
        let mut list = WorkList::new();
        list.push_back(Position::new(0, 0));
        list.push_back(Position::new(0, 1));
        list.push_back(Position::new(0, 0));

        assert_eq!(list.pop_front(), Some(Position::new(0, 0)));
        assert_eq!(list.pop_front(), Some(Position::new(0, 1)));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn a_popped_position_can_be_requeued() {
        let mut list = WorkList::new();
        list.push_back(Position::new(1, 1));
        assert_eq!(list.pop_front(), Some(Position::new(1, 1)));

        list.push_back(Position::new(1, 1));
        assert_eq!(list.pop_front(), Some(Position::new(1, 1)));
    }
}
