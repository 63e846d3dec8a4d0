//! Per-store id generation.

/// Monotonic id counter owned by a single store.
///
/// Ids start at 1 and are never handed out twice, even after the entity that held one
/// has been deleted. Each store owns its own sequence, so resetting one store's ids
/// does not affect any other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next successful create will receive.
    pub fn peek(&self) -> u32 {
        self.next
    }

    /// Consume the current id.
    pub fn advance(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Make sure an externally chosen id is never generated later.
    pub fn observe(&mut self, id: u32) {
        if id >= self.next {
            self.next = id + 1;
        }
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}
