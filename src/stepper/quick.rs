//! Iterative quicksort with Lomuto partitioning
//!
//! Ranges wait on an explicit stack. After a pivot is placed, the larger
//! sub-range is pushed first so the smaller one is popped next, which keeps
//! the stack at `O(log n)` for balanced splits.

use super::{Emit, StepKind};
use crate::highlight::Role;

/// Partition state for one `[low, high]` range
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Next slot for an element `<= pivot`
    i: usize,
    /// Element under inspection
    j: usize,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Pop the next range off the stack
    Pop,
    /// Compare `j` against the pivot, or place the pivot once `j == high`
    Scan(Partition),
    /// `j` was shown as compared; swap it down if it belongs left of the pivot
    Check(Partition),
    Done,
}

#[derive(Debug)]
pub struct QuickSort {
    n: usize,
    /// Inclusive ranges; `high` may be `low - 1` for an empty side
    stack: Vec<(isize, isize)>,
    phase: Phase,
}

impl QuickSort {
    pub fn new(n: usize) -> Self {
        QuickSort {
            n,
            stack: vec![(0, n as isize - 1)],
            phase: Phase::Pop,
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn advance(&mut self, values: &mut [i64]) -> Option<Emit> {
        let n = self.n;
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Pop => {
                    let Some((low, high)) = self.stack.pop() else {
                        self.phase = Phase::Done;
                        return None;
                    };
                    if low >= high {
                        continue;
                    }
                    let (low, high) = (low as usize, high as usize);
                    self.phase = Phase::Scan(Partition {
                        low,
                        high,
                        pivot: values[high],
                        i: low,
                        j: low,
                    });
                    return Some(Emit::new(StepKind::Pivot, n, [(high, Role::Pivot)]));
                }
                Phase::Scan(p) => {
                    if p.j < p.high {
                        self.phase = Phase::Check(p);
                        return Some(Emit::new(
                            StepKind::Compare,
                            n,
                            [
                                (p.j, Role::Compared),
                                (p.i, Role::ActiveIndex),
                                (p.high, Role::Pivot),
                            ],
                        ));
                    }

                    values.swap(p.i, p.high);
                    self.push_subranges(p);
                    self.phase = Phase::Pop;
                    return Some(Emit::new(StepKind::Finalize, n, [(p.i, Role::Finalized)]));
                }
                Phase::Check(mut p) => {
                    let j = p.j;
                    p.j += 1;
                    if values[j] <= p.pivot {
                        let i = p.i;
                        values.swap(i, j);
                        p.i += 1;
                        self.phase = Phase::Scan(p);
                        return Some(Emit::new(
                            StepKind::Swap,
                            n,
                            [(i, Role::Swapped), (j, Role::Swapped), (p.high, Role::Pivot)],
                        ));
                    }
                    self.phase = Phase::Scan(p);
                }
            }
        }
    }

    fn push_subranges(&mut self, p: Partition) {
        let pivot_at = p.i as isize;
        let left = (p.low as isize, pivot_at - 1);
        let right = (pivot_at + 1, p.high as isize);
        if left.1 - left.0 > right.1 - right.0 {
            self.stack.push(left);
            self.stack.push(right);
        } else {
            self.stack.push(right);
            self.stack.push(left);
        }
    }
}
