//! Reorders results arriving from worker threads
//!
//! Two min-heaps: one of keys still expected, one of received results
//! waiting for every smaller key to show up.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// (year, day, part), ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

struct OrderedResult(SolverResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers results and releases them in (year, day, part) order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return every result now ready, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let Some(Reverse(next_expected)) = self.expected.peek() {
            let next_is_pending = self
                .pending
                .peek()
                .is_some_and(|top| ResultKey::from(&top.0) == *next_expected);
            if !next_is_pending {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}_{day}_{part}")),
            solve_duration: TimeDelta::milliseconds(10),
            parse_duration: Some(TimeDelta::milliseconds(5)),
        }
    }

    fn keys_of(results: &[SolverResult]) -> Vec<ResultKey> {
        results.iter().map(ResultKey::from).collect()
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(2023, 10, 1), key(2023, 10, 2)]);

        let ready = agg.add(make_result(2023, 10, 1));
        assert_eq!(keys_of(&ready), [key(2023, 10, 1)]);

        let ready = agg.add(make_result(2023, 10, 2));
        assert_eq!(keys_of(&ready), [key(2023, 10, 2)]);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg =
            ResultAggregator::new([key(2023, 11, 1), key(2023, 10, 2), key(2023, 10, 1)]);

        assert!(agg.add(make_result(2023, 10, 2)).is_empty());
        assert!(agg.add(make_result(2023, 11, 1)).is_empty());

        let ready = agg.add(make_result(2023, 10, 1));
        assert_eq!(
            keys_of(&ready),
            [key(2023, 10, 1), key(2023, 10, 2), key(2023, 11, 1)]
        );
        assert_eq!(ready[0].answer.as_deref().ok(), Some("2023_10_1"));
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(2023, 10, 1), key(2023, 10, 2)]);

        agg.add(make_result(2023, 10, 2));
        assert!(!agg.is_complete());

        let remaining = agg.drain();
        assert_eq!(keys_of(&remaining), [key(2023, 10, 2)]);
        assert!(agg.drain().is_empty());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_emits_sorted(
            keys in proptest::collection::btree_set((2015u16..2025, 1u8..=25, 1u8..=2), 1..30)
                .prop_map(|set| set.into_iter().collect::<Vec<_>>())
                .prop_shuffle()
        ) {
            let expected: Vec<_> = keys.iter().map(|&(y, d, p)| key(y, d, p)).collect();
            let mut agg = ResultAggregator::new(expected.iter().copied());

            let mut emitted = Vec::new();
            for &(y, d, p) in &keys {
                emitted.extend(keys_of(&agg.add(make_result(y, d, p))));
            }

            let mut sorted = expected;
            sorted.sort();
            prop_assert_eq!(emitted, sorted);
            prop_assert!(agg.is_complete());
            prop_assert!(agg.drain().is_empty());
        }
    }
}
