use ca_harness::bodies::{ChainLink, ChainSimulation, SerialChain};
use ca_harness::collision::{ContactPair, ContactTopologyMonitor};
use ca_harness::core::{BodyHandle, Constraint, MultibodyEngine, StepHooks, StepModel};
use ca_harness::diagnostics::{
    LineSink, MemorySink, StepTelemetry, KINETIC_ENERGY_LOG, MANIFOLD_CHANGE_LOG, POSE_LOG,
};
use ca_harness::integration::GeneralizedEuler;
use ca_harness::math::{Transform, Vector3};
use ca_harness::shapes::BoxShape;
use nalgebra::DVector;
use std::f64::consts::FRAC_PI_2;
use std::sync::Arc;

const A: BodyHandle = BodyHandle::GROUND;

fn b() -> BodyHandle {
    BodyHandle::new(1)
}

fn contacts(n: usize) -> Vec<Constraint> {
    vec![Constraint::contact(A, b()); n]
}

#[test]
fn test_scripted_contact_counts() {
    let mut monitor = ContactTopologyMonitor::new(MemorySink::new());

    // the first step departs from the empty initial state
    assert!(monitor.observe(0.1, &contacts(2)).unwrap());
    assert!(!monitor.observe(0.2, &contacts(2)).unwrap());
    assert!(monitor.observe(0.3, &contacts(1)).unwrap());
    assert!(monitor.observe(0.4, &[]).unwrap());

    assert_eq!(monitor.sink().lines(), ["0.1", "0.3", "0.4"]);
    let changes = monitor.changes();
    assert_eq!(changes[1].pairs, vec![ContactPair::new(b(), A)]);
    assert_eq!(changes[2].pairs, vec![ContactPair::new(A, b())]);
    assert!(monitor.previous().unwrap().is_empty());
}

#[test]
fn test_pair_order_and_non_contacts_do_not_matter() {
    let mut monitor = ContactTopologyMonitor::new(MemorySink::new());
    monitor.observe(1.0, &contacts(1)).unwrap();

    let swapped = vec![Constraint::contact(b(), A), Constraint::limit(b())];
    assert!(!monitor.observe(2.0, &swapped).unwrap());
    assert_eq!(monitor.sink().lines(), ["1"]);
}

// A single box link hinged at the base, rolled about x onto the plane.
fn hinged_box() -> SerialChain {
    SerialChain::builder(Transform::identity())
        .link(
            ChainLink::revolute(Vector3::zero(), Vector3::unit_x())
                .with_shape(Arc::new(BoxShape::new(Vector3::new(0.1, 0.1, 0.1)))),
        )
        .build()
}

#[test]
fn test_simulation_logs_each_topology_change() {
    let dir = tempfile::tempdir().unwrap();
    let mut chain = hinged_box();
    chain.set_velocity(&DVector::from_vec(vec![FRAC_PI_2])).unwrap();

    let mut monitor = ContactTopologyMonitor::new(LineSink::create(dir.path().join(MANIFOLD_CHANGE_LOG)).unwrap());
    let mut telemetry = StepTelemetry::new(
        LineSink::create(dir.path().join(KINETIC_ENERGY_LOG)).unwrap(),
        LineSink::create(dir.path().join(POSE_LOG)).unwrap(),
    );

    // the plane cuts through the bottom face at rest, 4 vertices below
    let mut sim = ChainSimulation::new(chain, GeneralizedEuler::new(), StepModel::new(0.25).unwrap())
        .with_ground_height(-0.05);
    {
        let mut hooks = StepHooks::new();
        hooks.on_constraints(&mut monitor).on_post_step(&mut telemetry);
        sim.run(8, &mut hooks).unwrap();
    }
    telemetry.flush().unwrap();
    let changes: Vec<f64> = monitor.changes().iter().map(|c| c.time).collect();
    drop(monitor);

    // after a quarter turn the box sits on an equivalent face again, so the
    // count only differs while it is tilted
    assert!(!changes.is_empty());
    let written = std::fs::read_to_string(dir.path().join(MANIFOLD_CHANGE_LOG)).unwrap();
    let logged: Vec<f64> = written.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(logged, changes);

    let energy = std::fs::read_to_string(dir.path().join(KINETIC_ENERGY_LOG)).unwrap();
    assert_eq!(energy.lines().count(), 8);
    let pose = std::fs::read_to_string(dir.path().join(POSE_LOG)).unwrap();
    let last: Vec<f64> = pose.lines().last().unwrap().split(' ').map(|f| f.parse().unwrap()).collect();
    assert_eq!(last.len(), 2);
    assert_eq!(last[0], 2.0);
}
