//! Random phrase selection backed by the thread-local RNG.

use rand::Rng;

use werkstatt_core::answer::picker::PhrasePicker;

/// Uniform pick using `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl PhrasePicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_index_in_range() {
        let picker = ThreadRngPicker;
        for _ in 0..200 {
            assert!(picker.pick_index(3) < 3);
        }
        assert_eq!(picker.pick_index(1), 0);
        assert_eq!(picker.pick_index(0), 0);
    }

    #[test]
    fn test_pick_eventually_covers_pool() {
        let picker = ThreadRngPicker;
        let pool = ["a", "b", "c"];
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(picker.pick(&pool));
        }
        assert_eq!(seen.len(), 3);
    }
}
