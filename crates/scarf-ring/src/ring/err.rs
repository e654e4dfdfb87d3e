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

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ElementOutOfBoundsError {
    element: usize,
    num_elements: usize,
}

impl ElementOutOfBoundsError {
    pub fn new(element: usize, num_elements: usize) -> Self {
        Self {
            element,
            num_elements,
        }
    }

    pub fn element(&self) -> usize {
        self.element
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }
}

impl std::fmt::Display for ElementOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Element {} out of bounds (valid ids are 1..={})",
            self.element, self.num_elements
        )
    }
}

impl std::error::Error for ElementOutOfBoundsError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RingTooSmallError {
    num_elements: usize,
    min: usize,
}

impl RingTooSmallError {
    pub fn new(num_elements: usize, min: usize) -> Self {
        Self { num_elements, min }
    }

    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

impl std::fmt::Display for RingTooSmallError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ring of {} elements is too small (at least {} required)",
            self.num_elements, self.min
        )
    }
}

impl std::error::Error for RingTooSmallError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SegmentNotContiguousError {
    first: usize,
    last: usize,
    head: usize,
}

impl SegmentNotContiguousError {
    #[inline]
    pub fn new(first: usize, last: usize, head: usize) -> Self {
        Self { first, last, head }
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }
}

impl std::fmt::Display for SegmentNotContiguousError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid segment boundaries: run {}..={} wraps across head {}",
            self.first, self.last, self.head
        )
    }
}

impl std::error::Error for SegmentNotContiguousError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AnchorInsideSegmentError {
    first: usize,
    last: usize,
    anchor: usize,
}

impl AnchorInsideSegmentError {
    #[inline]
    pub fn new(first: usize, last: usize, anchor: usize) -> Self {
        Self {
            first,
            last,
            anchor,
        }
    }

    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    #[inline]
    pub fn anchor(&self) -> usize {
        self.anchor
    }
}

impl std::fmt::Display for AnchorInsideSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Reinsertion point {} is inside the moved run {}..={}",
            self.anchor, self.first, self.last
        )
    }
}

impl std::error::Error for AnchorInsideSegmentError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentError {
    ElementOutOfBounds(ElementOutOfBoundsError),
    NotContiguous(SegmentNotContiguousError),
    AnchorInsideSegment(AnchorInsideSegmentError),
}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentError::ElementOutOfBounds(e) => write!(f, "Segment error: {}", e),
            SegmentError::NotContiguous(e) => write!(f, "Segment error: {}", e),
            SegmentError::AnchorInsideSegment(e) => write!(f, "Segment error: {}", e),
        }
    }
}

impl std::error::Error for SegmentError {}

impl From<ElementOutOfBoundsError> for SegmentError {
    fn from(e: ElementOutOfBoundsError) -> Self {
        SegmentError::ElementOutOfBounds(e)
    }
}

impl From<SegmentNotContiguousError> for SegmentError {
    fn from(e: SegmentNotContiguousError) -> Self {
        SegmentError::NotContiguous(e)
    }
}

impl From<AnchorInsideSegmentError> for SegmentError {
    fn from(e: AnchorInsideSegmentError) -> Self {
        SegmentError::AnchorInsideSegment(e)
    }
}
