//! Allocation of fresh attribute identifiers.

use std::collections::HashSet;

use crate::config::IdScheme;

/// Hands out identifiers that collide with nothing already in use.
///
/// The cursor only moves forward, and every identifier handed out is
/// added to the used set, so one run never repeats itself. Once the
/// cursor passes `u32::MAX` the allocator is exhausted.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    scheme: IdScheme,
    used: HashSet<String>,
    cursor: Option<u32>,
}

impl IdAllocator {
    pub fn new(scheme: IdScheme, used: impl IntoIterator<Item = String>) -> Self {
        let cursor = Some(scheme.start);
        Self {
            scheme,
            used: used.into_iter().collect(),
            cursor,
        }
    }

    /// Next free identifier at or after the cursor, `None` once exhausted
    pub fn allocate(&mut self) -> Option<String> {
        loop {
            let number = self.cursor?;
            self.cursor = number.checked_add(1);
            let candidate = self.scheme.format(number);
            if self.used.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
    }

    pub fn is_used(&self, id: &str) -> bool {
        self.used.contains(id)
    }
}
