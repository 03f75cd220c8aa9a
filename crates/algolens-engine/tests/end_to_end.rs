//! Full-engine tests: registry → controller → stepper → dispatcher →
//! executor → scene, driven entirely by manual pulses.

use rand::rngs::StdRng;
use rand::SeedableRng;

use algolens_engine::{
    AlgorithmRegistry, Controller, ControllerConfig, Executor, ManualPulse, SessionId, Sessions,
};
use algolens_model::{EventKind, Snapshot, ValueSeq};
use algolens_scene::{HeadlessRenderer, Scene};
use algolens_stepper::{InsertionSort, Stepper};

type TestController = Controller<HeadlessRenderer, ManualPulse, ManualPulse>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("algolens=debug")
        .with_test_writer()
        .try_init();
}

fn controller_for(key: &str, seed: u64) -> TestController {
    let registry = AlgorithmRegistry::with_defaults();
    let mut rng = StdRng::seed_from_u64(seed);
    let (algorithm, layout) = registry.create(key, &mut rng).unwrap();

    Controller::new(
        Stepper::new(algorithm, seed),
        layout,
        Scene::new(HeadlessRenderer::new()),
        Executor::new(ManualPulse::new()),
        ManualPulse::new(),
        ControllerConfig::default(),
    )
}

fn drain(controller: &mut TestController) {
    let mut guard = 0;
    while !controller.executor().is_idle() {
        controller.on_anim_pulse();
        guard += 1;
        assert!(guard < 100_000, "executor failed to converge");
    }
}

fn scene_values(controller: &TestController) -> Vec<i64> {
    (0..controller.scene().len())
        .map(|slot| controller.scene().value_at(slot).unwrap())
        .collect()
}

#[test]
fn insertion_sort_end_to_end() {
    init_tracing();
    let mut ctrl = controller_for("insertion-sort", 42);
    ctrl.start().unwrap();

    let initial = scene_values(&ctrl);
    assert_eq!(initial.len(), 10);

    while !ctrl.is_done() {
        ctrl.step_forward().unwrap();
        drain(&mut ctrl);
    }

    let mut expected = initial;
    expected.sort_unstable();
    assert_eq!(scene_values(&ctrl), expected);
}

#[test]
fn swap_events_match_inversions_end_to_end() {
    let input = ValueSeq::new(vec![5, 3, 4, 1, 2]);
    let inversions = input.inversions();

    let mut stepper = Stepper::new(Box::new(InsertionSort::new(input)), 1);
    stepper.start();

    let mut swaps = 0;
    while !stepper.is_done() {
        let snapshot = stepper.step().unwrap();
        swaps += snapshot
            .events
            .iter()
            .filter(|e| e.kind() == EventKind::Swap)
            .count();
    }

    assert_eq!(swaps, inversions);
}

#[test]
fn forward_back_forward_is_deterministic() {
    let mut ctrl = controller_for("insertion-sort", 7);
    ctrl.start().unwrap();

    // Walk halfway in, then all the way back, then forward again; the scene
    // must land on identical values at every revisited position.
    let mut forward_states: Vec<Vec<i64>> = Vec::new();
    for _ in 0..8 {
        ctrl.step_forward().unwrap();
        drain(&mut ctrl);
        forward_states.push(scene_values(&ctrl));
    }

    let mut back_count = 0;
    while ctrl.step_back().unwrap() {
        back_count += 1;
    }
    assert_eq!(back_count, 8);

    for state in &forward_states {
        ctrl.step_forward().unwrap();
        drain(&mut ctrl);
        assert_eq!(&scene_values(&ctrl), state);
    }
}

#[test]
fn bfs_end_to_end_highlights_every_vertex() {
    let mut ctrl = controller_for("bfs", 13);
    ctrl.start().unwrap();

    while !ctrl.is_done() {
        ctrl.step_forward().unwrap();
        drain(&mut ctrl);
    }

    // Complete clears highlights visually, but every vertex was discovered
    // along the way: the terminal snapshot's highlight set is the vertex set.
    let stepper = ctrl.stepper();
    assert!(stepper.is_done());
    assert_eq!(ctrl.scene().len(), 10);
}

#[test]
fn sessions_host_independent_visualizations() {
    let mut sessions: Sessions<HeadlessRenderer, ManualPulse, ManualPulse> = Sessions::new();
    sessions.insert(SessionId(1), controller_for("insertion-sort", 1));
    sessions.insert(SessionId(2), controller_for("bfs", 2));

    let ctrl = sessions.get_mut(SessionId(1)).unwrap();
    ctrl.start().unwrap();
    ctrl.step_forward().unwrap();

    assert!(sessions.get(SessionId(1)).unwrap().scene().is_started());
    assert!(!sessions.get(SessionId(2)).unwrap().scene().is_started());

    assert!(sessions.remove(SessionId(1)));
    assert_eq!(sessions.len(), 1);
}

#[test]
fn snapshot_tokens_round_trip_through_history() {
    let mut stepper = Stepper::new(
        Box::new(InsertionSort::new(ValueSeq::new(vec![3, 1, 2]))),
        1,
    );
    stepper.start();

    let snapshot = stepper.step().unwrap();
    let token = algolens_model::to_token(&snapshot).unwrap();
    let restored: Snapshot = algolens_model::from_token(&token).unwrap();
    assert_eq!(restored, snapshot);
}
