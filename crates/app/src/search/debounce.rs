use dioxus::prelude::*;
use std::time::Duration;

/// Identifies one scheduled timer. Only the most recent generation may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

/// Pending-value bookkeeping behind [`use_debounced`].
///
/// Every `push` supersedes the previous one, so a timer that wakes up with
/// an old generation finds nothing to deliver. Intermediate values are
/// never queued.
#[derive(Debug, Clone, PartialEq)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new input and restart the quiet period.
    pub fn push(&mut self, value: T) -> Generation {
        self.generation += 1;
        self.pending = Some(value);
        Generation(self.generation)
    }

    /// Called when the timer for `generation` elapses. Yields the pending
    /// value only if no newer input arrived in the meantime.
    pub fn fire(&mut self, generation: Generation) -> Option<T> {
        if generation.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value and invalidate any running timer.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// A copy of `source` that only updates once `source` has been stable for
/// `quiet`.
///
/// Timers are tasks on the calling component's scope, so they are dropped
/// with the component and never fire into a disposed tree.
pub fn use_debounced<T>(source: Signal<T>, quiet: Duration) -> Signal<T>
where
    T: Clone + PartialEq + 'static,
{
    let mut settled = use_signal(|| source.peek().clone());
    let mut debouncer = use_signal(Debouncer::<T>::new);

    use_effect(move || {
        let value = source.read().clone();
        let generation = debouncer.write().push(value);
        spawn(async move {
            dioxus_sdk_time::sleep(quiet).await;
            let Some(value) = debouncer.write().fire(generation) else {
                return;
            };
            if *settled.peek() != value {
                settled.set(value);
            }
        });
    });

    use_drop(move || {
        if let Ok(mut pending) = debouncer.try_write() {
            pending.cancel();
        }
    });

    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn latest_timer_delivers_latest_value() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push("n");
        let second = debouncer.push("no");
        let third = debouncer.push("nol");

        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), None);
        assert_eq!(debouncer.fire(third), Some("nol"));
    }

    #[test]
    fn a_generation_fires_at_most_once() {
        let mut debouncer = Debouncer::new();
        let generation = debouncer.push(1);
        assert_eq!(debouncer.fire(generation), Some(1));
        assert_eq!(debouncer.fire(generation), None);
    }

    #[test]
    fn cancel_invalidates_pending_timer() {
        let mut debouncer = Debouncer::new();
        let generation = debouncer.push("wedding");
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.fire(generation), None);
    }

    #[test]
    fn push_after_cancel_starts_fresh() {
        let mut debouncer = Debouncer::new();
        debouncer.push("a");
        debouncer.cancel();
        let generation = debouncer.push("ab");
        assert_eq!(debouncer.fire(generation), Some("ab"));
    }

    proptest! {
        /// However a burst of inputs interleaves with stale timers, exactly
        /// one value is delivered and it is the last input.
        #[test]
        fn burst_coalesces_to_last_value(values in prop::collection::vec(any::<u16>(), 1..40)) {
            let mut debouncer = Debouncer::new();
            let generations: Vec<Generation> =
                values.iter().map(|v| debouncer.push(*v)).collect();

            let delivered: Vec<u16> = generations
                .iter()
                .filter_map(|g| debouncer.fire(*g))
                .collect();

            prop_assert_eq!(delivered, vec![*values.last().unwrap()]);
        }
    }
}
