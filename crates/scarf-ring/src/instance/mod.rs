// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod err;
pub mod loader;

use crate::{
    instance::err::{InvalidQueryError, SolveError},
    ring::{Placement, SegmentRing},
};
use std::io::Write;

/// One relocation request: move the run `l ..= r` to `placement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    l: usize,
    r: usize,
    placement: Placement,
}

impl Query {
    #[inline]
    pub fn new(l: usize, r: usize, placement: Placement) -> Self {
        Self { l, r, placement }
    }

    /// Builds a query from the raw `l r k` triple, `k == 0` meaning front.
    #[inline]
    pub fn from_raw(l: usize, r: usize, k: usize) -> Self {
        Self::new(l, r, Placement::from_raw(k))
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.l
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.r
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "move {}..={} {}", self.l, self.r, self.placement)
    }
}

/// A ring size together with the queries to replay against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    num_elements: usize,
    queries: Vec<Query>,
}

impl Instance {
    #[inline]
    pub fn new(num_elements: usize, queries: Vec<Query>) -> Self {
        Self {
            num_elements,
            queries,
        }
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    #[inline]
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Replays every query through the unchecked core.
    pub fn solve(&self) -> SegmentRing {
        let mut ring = SegmentRing::new(self.num_elements);
        for q in &self.queries {
            ring.relocate(q.l, q.r, q.placement);
        }

        tracing::debug!(
            "Replayed {} queries on {} elements, head is {}",
            self.queries.len(),
            self.num_elements,
            ring.head()
        );
        ring
    }

    /// Replays every query through the checked variant, stopping at the first
    /// query that violates the ring's preconditions.
    pub fn solve_checked(&self) -> Result<SegmentRing, SolveError> {
        let mut ring = SegmentRing::try_new(self.num_elements)?;
        for (index, q) in self.queries.iter().enumerate() {
            ring.try_relocate(q.l, q.r, q.placement)
                .map_err(|e| InvalidQueryError::new(index, *q, e))?;
        }

        tracing::debug!(
            "Replayed {} checked queries on {} elements, head is {}",
            self.queries.len(),
            self.num_elements,
            ring.head()
        );
        Ok(ring)
    }
}

/// Writes the ring's traversal as space-separated ids on one line.
pub fn write_line<W: Write>(ring: &SegmentRing, out: &mut W) -> std::io::Result<()> {
    for (i, x) in ring.linearize().enumerate() {
        if i > 0 {
            out.write_all(b" ")?;
        }
        write!(out, "{}", x)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::err::SegmentError;

    fn line_of(ring: &SegmentRing) -> String {
        let mut buf = Vec::new();
        write_line(ring, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_solve_prepend_scenario() {
        let inst = Instance::new(4, vec![Query::from_raw(2, 2, 0)]);
        assert_eq!(line_of(&inst.solve()), "2 1 3 4\n");
    }

    #[test]
    fn test_solve_after_scenario() {
        let inst = Instance::new(4, vec![Query::from_raw(3, 4, 1)]);
        assert_eq!(line_of(&inst.solve()), "1 3 4 2\n");
    }

    #[test]
    fn test_solve_sequence_of_queries() {
        let inst = Instance::new(
            6,
            vec![
                Query::from_raw(1, 2, 5), // 3 4 5 1 2 6
                Query::from_raw(6, 6, 0), // 6 3 4 5 1 2
                Query::from_raw(4, 5, 2), // 6 3 1 2 4 5
                Query::from_raw(6, 3, 5), // 1 2 4 5 6 3
            ],
        );
        let ring = inst.solve();
        assert_eq!(line_of(&ring), "1 2 4 5 6 3\n");
        assert!(ring.is_consistent());

        let checked = inst.solve_checked().unwrap();
        assert_eq!(line_of(&checked), line_of(&ring));
    }

    #[test]
    fn test_solve_checked_reports_failing_query() {
        let inst = Instance::new(
            5,
            vec![Query::from_raw(2, 3, 0), Query::from_raw(3, 4, 1)],
        );
        let err = inst.solve_checked().unwrap_err();
        match err {
            SolveError::InvalidQuery(e) => {
                assert_eq!(e.index(), 1);
                assert_eq!(e.query(), Query::from_raw(3, 4, 1));
                assert!(matches!(
                    e.segment_error(),
                    SegmentError::AnchorInsideSegment(_)
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_solve_checked_rejects_tiny_ring() {
        let inst = Instance::new(2, vec![]);
        assert!(matches!(
            inst.solve_checked().unwrap_err(),
            SolveError::RingTooSmall(_)
        ));
    }

    #[test]
    fn test_query_display() {
        assert_eq!(Query::from_raw(3, 4, 1).to_string(), "move 3..=4 after 1");
        assert_eq!(Query::from_raw(2, 2, 0).to_string(), "move 2..=2 front");
    }
}
