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
    instance::{Instance, Query, err::InstanceLoaderError},
    ring::{
        MIN_ELEMENTS,
        err::{ElementOutOfBoundsError, RingTooSmallError},
    },
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Reads instances from whitespace-separated integer tokens:
/// `N Q` followed by `Q` triples `l r k`, with `k == 0` meaning front.
///
/// In multi-case mode the stream starts with the number of cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    multi_case: bool,
    min_elements: usize,
    max_elements: usize,
}

/// Default upper bound on `N`; larger rings are rejected before allocating.
pub const MAX_ELEMENTS: usize = 1 << 26;

// Counts come from untrusted input, so vectors only pre-allocate up to this
// many slots and grow as tokens actually arrive.
const PREALLOC_LIMIT: usize = 1 << 16;

impl Default for InstanceLoader {
    fn default() -> Self {
        Self {
            multi_case: false,
            min_elements: MIN_ELEMENTS,
            max_elements: MAX_ELEMENTS,
        }
    }
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn multi_case(mut self, yes: bool) -> Self {
        self.multi_case = yes;
        self
    }

    #[inline]
    pub fn min_elements(mut self, v: usize) -> Self {
        self.min_elements = v.max(1);
        self
    }

    #[inline]
    pub fn max_elements(mut self, v: usize) -> Self {
        self.max_elements = v.min(usize::MAX - 1);
        self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Vec<Instance>, InstanceLoaderError> {
        let mut sc = Scanner::new(&mut br);
        let cases = if self.multi_case {
            sc.next_usize()?
        } else {
            1
        };

        let mut out = Vec::with_capacity(cases.min(PREALLOC_LIMIT));
        for _ in 0..cases {
            out.push(self.read_instance(&mut sc)?);
        }

        tracing::debug!("Loaded {} instance(s)", out.len());
        Ok(out)
    }

    fn read_instance<R: BufRead>(
        &self,
        sc: &mut Scanner<R>,
    ) -> Result<Instance, InstanceLoaderError> {
        let n = sc.next_usize()?;
        let q = sc.next_usize()?;
        if n < self.min_elements {
            return Err(RingTooSmallError::new(n, self.min_elements).into());
        }
        if n > self.max_elements {
            return Err(InstanceLoaderError::TooManyElements {
                num_elements: n,
                max: self.max_elements,
            });
        }

        let mut queries = Vec::with_capacity(q.min(PREALLOC_LIMIT));
        for index in 0..q {
            let l = sc.next_usize()?;
            let r = sc.next_usize()?;
            let k = sc.next_usize()?;

            let bad = [l, r]
                .into_iter()
                .find(|&x| x == 0 || x > n)
                .or((k > n).then_some(k));
            if let Some(x) = bad {
                return Err(InstanceLoaderError::QueryOutOfBounds {
                    index,
                    source: ElementOutOfBoundsError::new(x, n),
                });
            }

            queries.push(Query::from_raw(l, r, k));
        }

        Ok(Instance::new(n, queries))
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Instance>, InstanceLoaderError> {
        let file = File::open(path).map_err(InstanceLoaderError::Io)?;
        let br = BufReader::new(file);
        self.from_bufread(br)
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Instance>, InstanceLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_text(&self, s: &str) -> Result<Vec<Instance>, InstanceLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

// Whitespace tokenizer over a line-buffered reader. Tokens are counted from
// zero across the whole stream so parse errors can say which one was bad.
#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    line: String,
    pos: usize,
    consumed: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            line: String::new(),
            pos: 0,
            consumed: 0,
        }
    }

    // Byte range of the next token within `self.line`.
    fn next_token(&mut self) -> Result<(usize, usize), InstanceLoaderError> {
        loop {
            let rest = &self.line[self.pos..];
            if let Some(off) = rest.find(|c: char| !c.is_ascii_whitespace()) {
                let start = self.pos + off;
                let len = self.line[start..]
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(self.line.len() - start);
                self.pos = start + len;
                return Ok((start, start + len));
            }

            self.line.clear();
            self.pos = 0;
            if self.rdr.read_line(&mut self.line)? == 0 {
                return Err(InstanceLoaderError::UnexpectedEof);
            }
        }
    }

    fn next_usize(&mut self) -> Result<usize, InstanceLoaderError> {
        let (start, end) = self.next_token()?;
        let token = self.consumed;
        self.consumed += 1;
        self.line[start..end]
            .parse::<usize>()
            .map_err(|source| InstanceLoaderError::ParseInt { token, source })
    }
}
