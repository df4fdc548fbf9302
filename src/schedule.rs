// Single-threaded task queue with fixed priority lanes. The deferred
// activation re-check rides the lowest lane so it never preempts in-flight
// input, layout, or render work on the dispatch thread.

use std::collections::VecDeque;

/// Priority lanes of the dispatch queue, drained in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskPriority {
    /// Input handling; never deferred behind anything.
    Input,
    /// Layout passes.
    Layout,
    /// Rendering work.
    Render,
    /// Below rendering: deferred re-checks such as click activation.
    Deferred,
}

impl TaskPriority {
    const LANES: usize = 4;

    const fn lane(self) -> usize {
        match self {
            TaskPriority::Input => 0,
            TaskPriority::Layout => 1,
            TaskPriority::Render => 2,
            TaskPriority::Deferred => 3,
        }
    }
}

/// FIFO-within-lane priority queue for the single UI dispatch thread.
pub struct TaskQueue<T> {
    lanes: [VecDeque<T>; TaskPriority::LANES],
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            lanes: Default::default(),
        }
    }

    /// Enqueue a task on the given lane.
    pub fn push(&mut self, priority: TaskPriority, task: T) {
        self.lanes[priority.lane()].push_back(task);
    }

    /// Dequeue the next task: highest-priority lane first, FIFO within it.
    pub fn pop(&mut self) -> Option<T> {
        self.lanes.iter_mut().find_map(VecDeque::pop_front)
    }

    pub fn len(&self) -> usize {
        self.lanes.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.iter().all(VecDeque::is_empty)
    }

    /// Drop every queued task.
    pub fn clear(&mut self) {
        for lane in &mut self.lanes {
            lane.clear();
        }
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
