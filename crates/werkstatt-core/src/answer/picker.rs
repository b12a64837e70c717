//! PhrasePicker trait definition.
//!
//! Each reply comes from a pool of equivalent phrasings. The choice goes
//! through this port so the engine stays deterministic under test.

/// Chooses one index out of `len` candidates.
///
/// Implementations live in werkstatt-infra (e.g., `ThreadRngPicker`).
pub trait PhrasePicker: Send + Sync {
    /// Returns a value in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;

    /// Pick one phrase from a non-empty pool.
    fn pick(&self, pool: &[&'static str]) -> &'static str {
        let idx = self.pick_index(pool.len()).min(pool.len().saturating_sub(1));
        pool[idx]
    }
}
