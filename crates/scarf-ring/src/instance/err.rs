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

use crate::{
    instance::Query,
    ring::err::{ElementOutOfBoundsError, RingTooSmallError, SegmentError},
};
use std::num::ParseIntError;

#[derive(Debug)]
pub enum InstanceLoaderError {
    Io(std::io::Error),
    ParseInt {
        token: usize,
        source: ParseIntError,
    },
    UnexpectedEof,
    TooFewElements(RingTooSmallError),
    TooManyElements {
        num_elements: usize,
        max: usize,
    },
    QueryOutOfBounds {
        index: usize,
        source: ElementOutOfBoundsError,
    },
}

impl From<std::io::Error> for InstanceLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<RingTooSmallError> for InstanceLoaderError {
    fn from(e: RingTooSmallError) -> Self {
        Self::TooFewElements(e)
    }
}

impl std::fmt::Display for InstanceLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InstanceLoaderError::*;
        match self {
            Io(e) => write!(f, "I/O error: {e}"),
            ParseInt { token, source } => write!(f, "parse-int error at token #{token}: {source}"),
            UnexpectedEof => write!(f, "unexpected end of input while parsing instance"),
            TooFewElements(e) => write!(f, "instance error: {e}"),
            TooManyElements { num_elements, max } => write!(
                f,
                "instance error: ring of {num_elements} elements exceeds the limit of {max}"
            ),
            QueryOutOfBounds { index, source } => write!(f, "query #{index}: {source}"),
        }
    }
}

impl std::error::Error for InstanceLoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceLoaderError::Io(e) => Some(e),
            InstanceLoaderError::ParseInt { source, .. } => Some(source),
            InstanceLoaderError::TooFewElements(e) => Some(e),
            InstanceLoaderError::QueryOutOfBounds { source, .. } => Some(source),
            InstanceLoaderError::UnexpectedEof | InstanceLoaderError::TooManyElements { .. } => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidQueryError {
    index: usize,
    query: Query,
    source: SegmentError,
}

impl InvalidQueryError {
    pub fn new(index: usize, query: Query, source: SegmentError) -> Self {
        Self {
            index,
            query,
            source,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn query(&self) -> Query {
        self.query
    }

    pub fn segment_error(&self) -> SegmentError {
        self.source
    }
}

impl std::fmt::Display for InvalidQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query #{} ({}): {}", self.index, self.query, self.source)
    }
}

impl std::error::Error for InvalidQueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SolveError {
    RingTooSmall(RingTooSmallError),
    InvalidQuery(InvalidQueryError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::RingTooSmall(e) => write!(f, "Solve error: {}", e),
            SolveError::InvalidQuery(e) => write!(f, "Solve error: {}", e),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<RingTooSmallError> for SolveError {
    fn from(e: RingTooSmallError) -> Self {
        SolveError::RingTooSmall(e)
    }
}

impl From<InvalidQueryError> for SolveError {
    fn from(e: InvalidQueryError) -> Self {
        SolveError::InvalidQuery(e)
    }
}
