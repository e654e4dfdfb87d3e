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

use crate::ring::err::{
    AnchorInsideSegmentError, ElementOutOfBoundsError, RingTooSmallError, SegmentError,
    SegmentNotContiguousError,
};

/// Smallest ring a driver may build: a run of at least one element strictly
/// between two others, with at least one element left outside of it.
pub const MIN_ELEMENTS: usize = 3;

/// Where a cut run is reinserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Immediately after the given element.
    After(usize),
    /// Immediately before the current head; the run's first element becomes
    /// the new head.
    Front,
}

impl Placement {
    /// Decodes the integer form used by query streams, where `0` means front.
    #[inline]
    pub fn from_raw(k: usize) -> Self {
        if k == 0 {
            Placement::Front
        } else {
            Placement::After(k)
        }
    }

    #[inline]
    pub fn to_raw(self) -> usize {
        match self {
            Placement::After(k) => k,
            Placement::Front => 0,
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::After(k) => write!(f, "after {}", k),
            Placement::Front => write!(f, "front"),
        }
    }
}

/// A single circular doubly-linked sequence over the ids `1..=len`.
///
/// Adjacency lives in two flat vectors addressed by id (slot `0` is unused),
/// so nothing is allocated after construction and every relocation rewrites
/// a constant number of entries.
#[derive(Debug, Clone)]
pub struct SegmentRing {
    next: Vec<usize>,
    prev: Vec<usize>,
    head: usize,
}

#[derive(Debug, Clone, Copy)]
struct RunScan {
    reached: bool,
    contains_anchor: bool,
    crosses_head: bool,
}

impl SegmentRing {
    /// Builds the identity cycle `1 -> 2 -> ... -> n -> 1` with head `1`.
    #[inline]
    pub fn new(num_elements: usize) -> Self {
        debug_assert!(num_elements >= 1, "a ring needs at least one element");

        let n = num_elements;
        let mut next = vec![0; n + 1];
        let mut prev = vec![0; n + 1];

        for x in 1..n {
            next[x] = x + 1;
            prev[x + 1] = x;
        }
        if n >= 1 {
            next[n] = 1;
            prev[1] = n;
        }

        Self {
            next,
            prev,
            head: 1,
        }
    }

    #[inline]
    pub fn try_new(num_elements: usize) -> Result<Self, RingTooSmallError> {
        if num_elements < MIN_ELEMENTS {
            return Err(RingTooSmallError::new(num_elements, MIN_ELEMENTS));
        }
        Ok(Self::new(num_elements))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.next.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline(always)]
    pub fn contains(&self, x: usize) -> bool {
        (1..=self.len()).contains(&x)
    }

    #[inline]
    fn check_element(&self, x: usize) -> Result<(), ElementOutOfBoundsError> {
        if self.contains(x) {
            Ok(())
        } else {
            Err(ElementOutOfBoundsError::new(x, self.len()))
        }
    }

    #[inline]
    pub fn succ(&self, x: usize) -> Result<usize, ElementOutOfBoundsError> {
        self.check_element(x)?;
        Ok(self.next[x])
    }

    #[inline]
    pub fn pred(&self, x: usize) -> Result<usize, ElementOutOfBoundsError> {
        self.check_element(x)?;
        Ok(self.prev[x])
    }

    /// Cuts the run `l ..= r` (following `next`) and reinserts it at
    /// `placement`.
    ///
    /// This is the unchecked O(1) core. The caller guarantees that `l` and
    /// `r` are ids of this ring, that an `After(k)` anchor lies outside the
    /// run, and that a `Front` run does not contain the head anywhere but at
    /// `l`. Violations corrupt the cycle; debug builds assert them.
    ///
    /// Cutting a run that starts at the head hands the head to the element
    /// that followed the run. `Front` always makes `l` the head.
    #[inline]
    pub fn relocate(&mut self, l: usize, r: usize, placement: Placement) {
        #[cfg(debug_assertions)]
        {
            let scan = self.scan_run(l, r, placement);
            debug_assert!(scan.reached, "relocate: {l}..={r} is not a run of this ring");
            debug_assert!(
                !scan.contains_anchor,
                "relocate: anchor {placement} lies inside {l}..={r}"
            );
            debug_assert!(
                placement != Placement::Front || !scan.crosses_head,
                "relocate: front run {l}..={r} contains head {}",
                self.head
            );
        }

        let before = self.prev[l];
        let after = self.next[r];

        match placement {
            Placement::After(k) => {
                if k == before && l != self.head {
                    return;
                }

                self.next[before] = after;
                self.prev[after] = before;

                if self.head == l {
                    self.head = after;
                }

                let kn = self.next[k];
                self.next[k] = l;
                self.prev[l] = k;
                self.next[r] = kn;
                self.prev[kn] = r;
            }
            Placement::Front => {
                if l == self.head {
                    return;
                }

                self.next[before] = after;
                self.prev[after] = before;

                let tail = self.prev[self.head];
                self.next[tail] = l;
                self.prev[l] = tail;
                self.next[r] = self.head;
                self.prev[self.head] = r;
                self.head = l;
            }
        }
    }

    /// Checked variant of [`SegmentRing::relocate`].
    ///
    /// Rejects ids outside the ring, runs that wrap across the head and
    /// anchors inside the run. Costs one walk over the run on top of the
    /// O(1) splice. The ring is left untouched on error.
    pub fn try_relocate(
        &mut self,
        l: usize,
        r: usize,
        placement: Placement,
    ) -> Result<(), SegmentError> {
        self.check_element(l)?;
        self.check_element(r)?;
        if let Placement::After(k) = placement {
            self.check_element(k)?;
        }

        let scan = self.scan_run(l, r, placement);
        if !scan.reached || scan.crosses_head {
            return Err(SegmentNotContiguousError::new(l, r, self.head).into());
        }
        if scan.contains_anchor {
            return Err(AnchorInsideSegmentError::new(l, r, placement.to_raw()).into());
        }

        self.relocate(l, r, placement);
        Ok(())
    }

    // Walks `l ..= r`. `crosses_head` means the head sits strictly inside
    // the run, i.e. the run wraps past the end of the linear order.
    fn scan_run(&self, l: usize, r: usize, placement: Placement) -> RunScan {
        let anchor = match placement {
            Placement::After(k) => Some(k),
            Placement::Front => None,
        };

        let mut scan = RunScan {
            reached: false,
            contains_anchor: false,
            crosses_head: false,
        };

        let mut cur = l;
        let mut hops = 0usize;
        loop {
            if anchor == Some(cur) {
                scan.contains_anchor = true;
            }
            if cur == r {
                scan.reached = true;
                break;
            }
            cur = self.next[cur];
            hops += 1;
            if hops >= self.len() {
                break;
            }
            if cur == self.head {
                scan.crosses_head = true;
            }
        }
        scan
    }

    /// Traverses the ring from the head, yielding every id exactly once.
    #[inline]
    pub fn linearize(&self) -> RingIter<'_> {
        RingIter::new(&self.next, self.head, self.len())
    }

    /// Full O(n) audit: `next` and `prev` are mutual inverses over `1..=len`
    /// and form one cycle through the head.
    pub fn is_consistent(&self) -> bool {
        let n = self.len();
        if n == 0 {
            return true;
        }
        if !self.contains(self.head) {
            return false;
        }

        for x in 1..=n {
            let nx = self.next[x];
            if !self.contains(nx) || self.prev[nx] != x {
                return false;
            }
        }

        let mut cur = self.head;
        for step in 1..=n {
            cur = self.next[cur];
            if cur == self.head {
                return step == n;
            }
        }
        false
    }
}

#[derive(Debug, Clone)]
pub struct RingIter<'a> {
    next: &'a [usize],
    cur: usize,
    remaining: usize,
}

impl<'a> RingIter<'a> {
    #[inline]
    fn new(next: &'a [usize], start: usize, remaining: usize) -> Self {
        Self {
            next,
            cur: start,
            remaining,
        }
    }
}

impl<'a> Iterator for RingIter<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let out = self.cur;
        self.cur = self.next[self.cur];
        self.remaining -= 1;
        Some(out)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingIter<'_> {}

impl std::iter::FusedIterator for RingIter<'_> {}
