// Integration tests for the sorting steppers, driver and session

use sortty::driver::{map_speed_to_delay, Driver, Renderer, Speed, Tick};
use sortty::highlight::Role;
use sortty::session::{Session, SessionError};
use sortty::stepper::{Algorithm, SortError, Step, StepKind, Stepper};
use std::time::{Duration, Instant};

/// Resume until completion, collecting every snapshot
fn run_all(algorithm: Algorithm, input: Vec<i64>) -> (Vec<sortty::stepper::Snapshot>, Vec<i64>) {
    let mut stepper = Stepper::new(algorithm, input);
    let mut snapshots = Vec::new();
    loop {
        match stepper.resume().expect("resume failed") {
            Step::Snapshot(s) => snapshots.push(s),
            Step::Completed => break,
        }
    }
    (snapshots, stepper.into_sequence())
}

#[derive(Default)]
struct LastFrame {
    values: Vec<i64>,
    roles: Vec<Role>,
    count: usize,
}

impl Renderer for LastFrame {
    fn render(&mut self, values: &[i64], roles: &[Role]) {
        self.values = values.to_vec();
        self.roles = roles.to_vec();
        self.count += 1;
    }
}

#[test]
fn test_bubble_scenario() {
    let mut stepper = Stepper::new(Algorithm::Bubble, vec![5, 3, 8, 1]);

    let Step::Snapshot(first) = stepper.resume().unwrap() else {
        panic!("expected a compare snapshot");
    };
    assert_eq!(&first.roles[..2], &[Role::Compared, Role::Compared]);

    let Step::Snapshot(second) = stepper.resume().unwrap() else {
        panic!("expected a swap snapshot");
    };
    assert_eq!(&second.roles[..2], &[Role::Swapped, Role::Swapped]);
    assert_eq!(stepper.values(), &[3, 5, 8, 1]);

    while stepper.resume().unwrap() != Step::Completed {}
    assert_eq!(stepper.into_sequence(), vec![1, 3, 5, 8]);
}

#[test]
fn test_edge_case_inputs_sort() {
    let inputs: Vec<Vec<i64>> = vec![
        vec![],
        vec![7],
        vec![2, 2, 2],
        vec![1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1],
        vec![0, -5, 12, -5, 3, 99, -100],
    ];
    for algorithm in Algorithm::ALL {
        for input in &inputs {
            let (_, output) = run_all(algorithm, input.clone());
            let mut expected = input.clone();
            expected.sort();
            assert_eq!(output, expected, "{} on {:?}", algorithm, input);
        }
    }
}

#[test]
fn test_all_equal_input_never_changes() {
    for algorithm in Algorithm::ALL {
        let (snapshots, output) = run_all(algorithm, vec![2, 2, 2]);
        assert_eq!(output, vec![2, 2, 2]);
        assert!(snapshots.iter().all(|s| s.values == vec![2, 2, 2]));
        if algorithm == Algorithm::Bubble {
            assert!(snapshots.iter().all(|s| s.kind != StepKind::Swap));
        }
    }
}

#[test]
fn test_bubble_descending_swap_count() {
    for n in 2..12i64 {
        let (snapshots, _) = run_all(Algorithm::Bubble, (0..n).rev().collect());
        let swaps = snapshots.iter().filter(|s| s.kind == StepKind::Swap).count() as i64;
        assert_eq!(swaps, n * (n - 1) / 2);
    }
}

#[test]
fn test_merge_working_range_highlight() {
    let (snapshots, _) = run_all(Algorithm::Merge, vec![4, 3, 2, 1]);
    let last_write = snapshots
        .iter()
        .rev()
        .find(|s| s.kind == StepKind::Write)
        .unwrap();
    // final merge covers [0, 3] and writes slot 3 last
    assert_eq!(
        last_write.roles,
        vec![
            Role::WorkingRange,
            Role::WorkingRange,
            Role::WorkingRange,
            Role::Written
        ]
    );
    let last = snapshots.last().unwrap();
    assert_eq!(last.kind, StepKind::Finalize);
    assert!(last.roles.iter().all(|r| *r == Role::Finalized));
}

#[test]
fn test_values_only_change_inside_resume() {
    for algorithm in Algorithm::ALL {
        let mut stepper = Stepper::new(algorithm, vec![6, 2, 9, 2, 5, 1]);
        loop {
            let before = stepper.values().to_vec();
            let step = stepper.resume().unwrap();
            match step {
                Step::Snapshot(s) => assert_eq!(s.values, stepper.values()),
                Step::Completed => {
                    assert_eq!(stepper.values(), before.as_slice());
                    break;
                }
            }
        }
    }
}

#[test]
fn test_resume_after_completion_fails() {
    let mut stepper = Stepper::new(Algorithm::Merge, vec![1, 0]);
    while stepper.resume().unwrap() != Step::Completed {}
    assert!(matches!(
        stepper.resume(),
        Err(SortError::AlreadyCompleted {
            algorithm: Algorithm::Merge
        })
    ));
    assert_eq!(stepper.values(), &[0, 1]);
}

#[test]
fn test_speed_mapping() {
    assert_eq!(map_speed_to_delay(100).unwrap(), 20);
    assert_eq!(map_speed_to_delay(1).unwrap(), 198);
    assert!(matches!(
        map_speed_to_delay(1000),
        Err(SortError::SpeedOutOfRange { speed: 1000, .. })
    ));
}

#[test]
fn test_driver_forwards_every_snapshot() {
    let input = vec![3, 1, 2];
    let (snapshots, _) = run_all(Algorithm::Quick, input.clone());

    let start = Instant::now();
    let mut driver = Driver::new(Stepper::new(Algorithm::Quick, input), start);
    let mut frame = LastFrame::default();
    let mut now = start;
    let delay = Duration::from_millis(30);
    while driver.poll(now, delay, &mut frame).unwrap() != Tick::Finished {
        now += delay;
    }

    // one frame per snapshot plus the final all-finalized frame
    assert_eq!(frame.count, snapshots.len() + 1);
    assert_eq!(frame.values, vec![1, 2, 3]);
    assert!(frame.roles.iter().all(|r| *r == Role::Finalized));
}

#[test]
fn test_session_single_active_run() {
    let mut session = Session::new(vec![9, 7, 5, 3, 1], Speed::default());
    let mut frame = LastFrame::default();
    let now = Instant::now();

    session.start(Algorithm::Merge, now).unwrap();
    session.tick(now, &mut frame).unwrap();
    assert!(matches!(
        session.start(Algorithm::Quick, now),
        Err(SessionError::Busy)
    ));
    assert_eq!(session.active_algorithm(), Some(Algorithm::Merge));

    session.finish_now(&mut frame).unwrap();
    assert_eq!(session.values(), &[1, 3, 5, 7, 9]);

    // idle again: a new run may start
    session.start(Algorithm::Quick, now).unwrap();
    assert_eq!(session.active_algorithm(), Some(Algorithm::Quick));
}
