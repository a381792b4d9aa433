use std::cell::Cell;

/// Numbers each call of one workflow so a late answer from a superseded call can
/// be recognized and kept off the screen.
#[derive(Debug)]
pub struct RequestSequence {
    latest: Cell<u64>,
    drop_stale: bool,
}

impl RequestSequence {
    pub fn new(drop_stale: bool) -> Self {
        Self {
            latest: Cell::new(0),
            drop_stale,
        }
    }

    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    /// Always false when stale dropping is off: the last answer to arrive wins.
    pub fn is_stale(&self, ticket: u64) -> bool {
        self.drop_stale && ticket != self.latest.get()
    }
}
