//! Top-down merge sort over an explicit frame stack
//!
//! The recursion `sort(l, m); sort(m + 1, r); merge(l, m, r)` is flattened into
//! a stack of [`Frame`]s so that a merge in progress can be suspended between
//! two writes. A write is announced by a snapshot first and performed at the
//! start of the following resume.

use super::{Emit, StepKind};
use crate::highlight::Role;
use std::iter;

#[derive(Debug)]
enum Frame {
    /// Sort the inclusive range `[l, r]`
    Sort { l: usize, r: usize },
    /// Both halves are sorted; merge them when this frame is reached
    Merge { l: usize, m: usize, r: usize },
    /// A merge in progress
    Merging(MergeCursor),
}

#[derive(Debug)]
struct MergeCursor {
    l: usize,
    r: usize,
    left: Vec<i64>,
    right: Vec<i64>,
    i: usize,
    j: usize,
    k: usize,
    /// Write announced by the last snapshot, applied on the next resume
    pending: Option<(usize, i64)>,
}

impl MergeCursor {
    fn new(values: &[i64], l: usize, m: usize, r: usize) -> Self {
        MergeCursor {
            l,
            r,
            left: values[l..=m].to_vec(),
            right: values[m + 1..=r].to_vec(),
            i: 0,
            j: 0,
            k: l,
            pending: None,
        }
    }

    /// Pick the value that goes into slot `k` next, or `None` once both
    /// temporaries are drained.
    fn next_write(&mut self) -> Option<(usize, i64)> {
        let value = match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(&a), Some(&b)) if a <= b => {
                self.i += 1;
                a
            }
            (_, Some(&b)) => {
                self.j += 1;
                b
            }
            (Some(&a), None) => {
                self.i += 1;
                a
            }
            (None, None) => return None,
        };
        let k = self.k;
        self.k += 1;
        Some((k, value))
    }
}

#[derive(Debug)]
pub struct MergeSort {
    n: usize,
    frames: Vec<Frame>,
}

impl MergeSort {
    pub fn new(n: usize) -> Self {
        let mut frames = Vec::new();
        if n > 1 {
            frames.push(Frame::Sort { l: 0, r: n - 1 });
        }
        MergeSort { n, frames }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub(crate) fn advance(&mut self, values: &mut [i64]) -> Option<Emit> {
        let n = self.n;
        while let Some(frame) = self.frames.pop() {
            match frame {
                Frame::Sort { l, r } => {
                    if l >= r {
                        continue;
                    }
                    let m = l + (r - l) / 2;
                    self.frames.push(Frame::Merge { l, m, r });
                    self.frames.push(Frame::Sort { l: m + 1, r });
                    self.frames.push(Frame::Sort { l, r: m });
                }
                Frame::Merge { l, m, r } => {
                    self.frames
                        .push(Frame::Merging(MergeCursor::new(values, l, m, r)));
                }
                Frame::Merging(mut cursor) => {
                    if let Some((k, value)) = cursor.pending.take() {
                        values[k] = value;
                    }

                    let (l, r) = (cursor.l, cursor.r);
                    let Some((k, value)) = cursor.next_write() else {
                        return Some(Emit::new(
                            StepKind::Finalize,
                            n,
                            (l..=r).map(|idx| (idx, Role::Finalized)),
                        ));
                    };

                    cursor.pending = Some((k, value));
                    self.frames.push(Frame::Merging(cursor));
                    let working = (l..=r).map(|idx| (idx, Role::WorkingRange));
                    return Some(Emit::new(
                        StepKind::Write,
                        n,
                        working.chain(iter::once((k, Role::Written))),
                    ));
                }
            }
        }
        None
    }
}
