//! Bubble sort as a resumable state machine
//!
//! Pass `i` walks `j` over `0..n-1-i`. Each comparison is one suspension
//! point, each swap another, and the end of a pass marks `n-1-i` as final.

use super::{Emit, StepKind};
use crate::highlight::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Next event is the comparison of `j` and `j+1` (or the end of the pass)
    Compare,
    /// `j` and `j+1` were shown as compared; swap them if out of order
    Check,
    Done,
}

#[derive(Debug)]
pub struct BubbleSort {
    n: usize,
    i: usize,
    j: usize,
    phase: Phase,
}

impl BubbleSort {
    pub fn new(n: usize) -> Self {
        BubbleSort {
            n,
            i: 0,
            j: 0,
            phase: if n <= 1 { Phase::Done } else { Phase::Compare },
        }
    }

    pub(crate) fn advance(&mut self, values: &mut [i64]) -> Option<Emit> {
        let n = self.n;
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Compare => {
                    let j = self.j;
                    if j + 1 + self.i < n {
                        self.phase = Phase::Check;
                        return Some(Emit::new(
                            StepKind::Compare,
                            n,
                            [(j, Role::Compared), (j + 1, Role::Compared)],
                        ));
                    }

                    let settled = n - 1 - self.i;
                    self.i += 1;
                    self.j = 0;
                    if self.i >= n {
                        self.phase = Phase::Done;
                    }
                    return Some(Emit::new(
                        StepKind::Finalize,
                        n,
                        [(settled, Role::Finalized)],
                    ));
                }
                Phase::Check => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if values[j] > values[j + 1] {
                        values.swap(j, j + 1);
                        return Some(Emit::new(
                            StepKind::Swap,
                            n,
                            [(j, Role::Swapped), (j + 1, Role::Swapped)],
                        ));
                    }
                    // in order: fall through to the next comparison in this resume
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{drain, sorted_copy};
    use super::super::{Algorithm, Step, StepKind, Stepper};
    use crate::highlight::Role;

    #[test]
    fn first_two_snapshots_compare_then_swap() {
        let mut stepper = Stepper::new(Algorithm::Bubble, vec![5, 3, 8, 1]);

        let Step::Snapshot(first) = stepper.resume().unwrap() else {
            panic!("expected a snapshot");
        };
        assert_eq!(first.kind, StepKind::Compare);
        assert_eq!(first.roles[0], Role::Compared);
        assert_eq!(first.roles[1], Role::Compared);
        assert_eq!(first.roles[2], Role::Default);
        assert_eq!(stepper.values(), &[5, 3, 8, 1]);

        let Step::Snapshot(second) = stepper.resume().unwrap() else {
            panic!("expected a snapshot");
        };
        assert_eq!(second.kind, StepKind::Swap);
        assert_eq!(second.roles[0], Role::Swapped);
        assert_eq!(second.roles[1], Role::Swapped);
        assert_eq!(second.values, vec![3, 5, 8, 1]);
        assert_eq!(stepper.values(), &[3, 5, 8, 1]);

        drain(&mut stepper);
        assert_eq!(stepper.into_sequence(), vec![1, 3, 5, 8]);
    }

    #[test]
    fn descending_input_swaps_every_pair() {
        let n = 8;
        let input: Vec<i64> = (0..n).rev().collect();
        let mut stepper = Stepper::new(Algorithm::Bubble, input);
        let snapshots = drain(&mut stepper);

        let swaps = snapshots.iter().filter(|s| s.kind == StepKind::Swap).count();
        assert_eq!(swaps, (n * (n - 1) / 2) as usize);
        assert_eq!(stepper.values(), sorted_copy(stepper.values()).as_slice());
    }

    #[test]
    fn pass_end_finalizes_the_tail() {
        let mut stepper = Stepper::new(Algorithm::Bubble, vec![1, 2, 3]);
        let finals: Vec<usize> = drain(&mut stepper)
            .iter()
            .filter(|s| s.kind == StepKind::Finalize)
            .map(|s| s.roles.iter().position(|r| *r == Role::Finalized).unwrap())
            .collect();
        assert_eq!(finals, vec![2, 1, 0]);
    }

    #[test]
    fn sorted_input_never_swaps() {
        let mut stepper = Stepper::new(Algorithm::Bubble, vec![1, 2, 2, 3]);
        let snapshots = drain(&mut stepper);
        assert!(snapshots.iter().all(|s| s.kind != StepKind::Swap));
        // 3 + 2 + 1 comparisons, one finalize per pass
        assert_eq!(snapshots.len(), 6 + 4);
    }
}
