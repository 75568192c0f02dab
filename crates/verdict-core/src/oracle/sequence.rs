use crate::{
    key::EntityKey,
    mode::ComparisonMode,
    oracle::Oracle,
    outcome::{Mismatch, Verdict},
    tuple::Tuple,
    value::Value,
};
use std::cmp::Ordering;

///
/// Element
///
/// Anything the oracle can match one-to-one inside a sequence.
///

pub(crate) trait Element {
    /// Deterministic total order used to align unordered sequences.
    ///
    /// Must return `Equal` exactly when `matches` holds, as long as the
    /// oracle has no float tolerance.
    fn order(&self, other: &Self, oracle: &Oracle) -> Ordering;

    /// Oracle equality under the active configuration.
    fn matches(&self, other: &Self, oracle: &Oracle) -> bool;

    fn render(&self) -> String;
}

impl Element for Value {
    fn order(&self, other: &Self, oracle: &Oracle) -> Ordering {
        oracle.order_values(self, other)
    }

    fn matches(&self, other: &Self, oracle: &Oracle) -> bool {
        oracle.values_match(self, other)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Element for EntityKey {
    fn order(&self, other: &Self, _: &Oracle) -> Ordering {
        self.cmp(other)
    }

    fn matches(&self, other: &Self, _: &Oracle) -> bool {
        self == other
    }

    fn render(&self) -> String {
        format!("\"{self}\"")
    }
}

impl Element for Tuple {
    // Cell by cell, then width.
    fn order(&self, other: &Self, oracle: &Oracle) -> Ordering {
        self.iter()
            .zip(other.iter())
            .map(|(left, right)| oracle.order_values(left, right))
            .find(|cmp| *cmp != Ordering::Equal)
            .unwrap_or_else(|| self.width().cmp(&other.width()))
    }

    fn matches(&self, other: &Self, oracle: &Oracle) -> bool {
        self.width() == other.width()
            && self
                .iter()
                .zip(other.iter())
                .all(|(left, right)| oracle.values_match(left, right))
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl Oracle {
    /// Match two sequences under `mode`.
    ///
    /// Cardinality is checked before any element; in distinct modes it is
    /// checked after duplicates collapse.
    pub(crate) fn compare_sequence<T: Element>(
        &self,
        actual: &[T],
        expected: &[T],
        mode: ComparisonMode,
    ) -> Verdict {
        let mut actual: Vec<&T> = actual.iter().collect();
        let mut expected: Vec<&T> = expected.iter().collect();

        if !mode.is_multiset() {
            if mode.is_order_sensitive() {
                actual = self.first_occurrences(actual);
                expected = self.first_occurrences(expected);
            } else {
                actual = self.sorted_distinct(actual);
                expected = self.sorted_distinct(expected);
            }
        } else if !mode.is_order_sensitive() {
            actual.sort_by(|a, b| a.order(b, self));
            expected.sort_by(|a, b| a.order(b, self));
        }

        if actual.len() != expected.len() {
            return Verdict::fail(Mismatch::Cardinality {
                actual: actual.len(),
                expected: expected.len(),
            });
        }

        if mode.is_order_sensitive() {
            self.compare_positional(&actual, &expected)
        } else if self.is_tolerant() {
            self.compare_paired(&actual, &expected)
        } else {
            self.compare_aligned(&actual, &expected)
        }
    }

    // First differing position; both sides already have equal length.
    fn compare_positional<T: Element>(&self, actual: &[&T], expected: &[&T]) -> Verdict {
        let first_diff = actual
            .iter()
            .zip(expected.iter())
            .position(|(a, e)| !a.matches(e, self));

        match first_diff {
            None => Verdict::matched(),
            Some(index) => Verdict::fail(Mismatch::Position {
                index,
                actual: actual[index].render(),
                expected: expected[index].render(),
            }),
        }
    }

    // Merge-walk two sorted sides, collecting the elements left unmatched
    // on each.
    fn compare_aligned<T: Element>(&self, actual: &[&T], expected: &[&T]) -> Verdict {
        let mut missing = Vec::new();
        let mut unexpected = Vec::new();
        let (mut i, mut j) = (0, 0);

        while i < actual.len() && j < expected.len() {
            let (a, e) = (actual[i], expected[j]);
            if a.matches(e, self) {
                i += 1;
                j += 1;
            } else if a.order(e, self) == Ordering::Less {
                unexpected.push(a);
                i += 1;
            } else {
                missing.push(e);
                j += 1;
            }
        }
        unexpected.extend(&actual[i..]);
        missing.extend(&expected[j..]);

        self.element_verdict(&missing, &unexpected)
    }

    // Tolerant equality is not transitive, so sorted neighbours say nothing
    // about partners. Find a maximum one-to-one pairing by augmenting paths
    // instead.
    fn compare_paired<T: Element>(&self, actual: &[&T], expected: &[&T]) -> Verdict {
        let mut partner_of: Vec<Option<usize>> = vec![None; expected.len()];
        for index in 0..actual.len() {
            let mut visited = vec![false; expected.len()];
            self.augment(index, actual, expected, &mut partner_of, &mut visited);
        }

        let mut paired = vec![false; actual.len()];
        for &index in partner_of.iter().flatten() {
            paired[index] = true;
        }

        let missing: Vec<&T> = expected
            .iter()
            .zip(&partner_of)
            .filter(|(_, partner)| partner.is_none())
            .map(|(e, _)| *e)
            .collect();
        let unexpected: Vec<&T> = actual
            .iter()
            .zip(&paired)
            .filter(|(_, is_paired)| !**is_paired)
            .map(|(a, _)| *a)
            .collect();

        self.element_verdict(&missing, &unexpected)
    }

    // Try to pair `actual[index]`, moving earlier pairings aside when they
    // can be re-routed.
    fn augment<T: Element>(
        &self,
        index: usize,
        actual: &[&T],
        expected: &[&T],
        partner_of: &mut [Option<usize>],
        visited: &mut [bool],
    ) -> bool {
        for (slot, candidate) in expected.iter().enumerate() {
            if visited[slot] || !actual[index].matches(candidate, self) {
                continue;
            }
            visited[slot] = true;

            let free = match partner_of[slot] {
                None => true,
                Some(other) => self.augment(other, actual, expected, partner_of, visited),
            };
            if free {
                partner_of[slot] = Some(index);
                return true;
            }
        }

        false
    }

    fn element_verdict<T: Element>(&self, missing: &[&T], unexpected: &[&T]) -> Verdict {
        if missing.is_empty() && unexpected.is_empty() {
            return Verdict::matched();
        }

        let limit = self.config.diagnostic_limit;
        let omitted = missing.len().saturating_sub(limit) + unexpected.len().saturating_sub(limit);

        Verdict::fail(Mismatch::Element {
            missing: missing.iter().take(limit).map(|e| e.render()).collect(),
            unexpected: unexpected.iter().take(limit).map(|e| e.render()).collect(),
            omitted,
        })
    }

    // Keep the first occurrence of each element, preserving order.
    fn first_occurrences<'a, T: Element>(&self, items: Vec<&'a T>) -> Vec<&'a T> {
        let mut kept: Vec<&T> = Vec::with_capacity(items.len());
        for item in items {
            if !kept.iter().any(|seen| seen.matches(item, self)) {
                kept.push(item);
            }
        }

        kept
    }

    fn sorted_distinct<'a, T: Element>(&self, mut items: Vec<&'a T>) -> Vec<&'a T> {
        items.sort_by(|a, b| a.order(b, self));
        if self.is_tolerant() {
            return self.first_occurrences(items);
        }
        items.dedup_by(|a, b| (*a).matches(*b, self));

        items
    }
}
