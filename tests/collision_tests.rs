use approx::assert_relative_eq;
use planetesimal::*;

const STEP: f64 = 1.0;

fn at_rest(x: f64, y: f64, mass: f64) -> Body<f64> {
    let position = DVec3::new(x, y, 0.0);
    Body::new(position, position, mass)
}

/// Radius of a 1e6 kg planetesimal, roughly 10.9 m.
fn unit_radius() -> f64 {
    radius_from_mass(1.0e6_f64)
}

#[test]
fn two_overlapping_bodies_merge_at_centre_of_mass() {
    let m1 = 1.0e6;
    let m2 = 3.0e6;
    let mut simulation =
        Simulation64::from_bodies(STEP, vec![at_rest(0.0, 0.0, m1), at_rest(20.0, 0.0, m2)]);

    simulation.simulate(1);

    assert_eq!(simulation.body_count(), 1);
    let merged = &simulation.bodies()[0];
    assert_eq!(merged.mass(), m1 + m2);
    assert_relative_eq!(merged.inverse_mass(), 1.0 / (m1 + m2));
    assert_relative_eq!(merged.radius(), radius_from_mass(m1 + m2));
    assert_relative_eq!(merged.position.x, 15.0, max_relative = 1e-12);
    assert_relative_eq!(merged.position.y, 0.0);
    assert!(!merged.is_pending_removal());
}

#[test]
fn distant_bodies_are_left_alone() {
    let separation = 3.0 * unit_radius();
    let bodies = vec![at_rest(0.0, 0.0, 1.0e6), at_rest(separation, 0.0, 1.0e6)];
    let mut store = BodyStore::from(bodies);

    let outcome = CollisionMerger::new().merge(&mut store);

    assert_eq!(outcome, MergeOutcome::default());
    assert_eq!(store.purge_removed(), 0);
    assert_eq!(store.len(), 2);
}

#[test]
fn touching_counts_as_a_collision() {
    let r = unit_radius();
    let a = at_rest(0.0, 0.0, 1.0e6);
    let b = at_rest(2.0 * r, 0.0, 1.0e6);
    assert!(CollisionMerger::touching(&a, &b));

    let c = at_rest(2.0 * r * 1.001, 0.0, 1.0e6);
    assert!(!CollisionMerger::touching(&a, &c));
}

#[test]
fn three_mutually_overlapping_bodies_become_one() {
    let mut simulation = Simulation64::from_bodies(
        STEP,
        vec![
            at_rest(0.0, 0.0, 1.0e6),
            at_rest(10.0, 0.0, 1.0e6),
            at_rest(5.0, 8.0, 1.0e6),
        ],
    );

    simulation.simulate(1);

    assert_eq!(simulation.body_count(), 1);
    assert_eq!(simulation.bodies()[0].mass(), 3.0e6);
    assert_relative_eq!(simulation.bodies()[0].position.x, 5.0, max_relative = 1e-9);
    assert_relative_eq!(simulation.bodies()[0].position.y, 8.0 / 3.0, max_relative = 1e-9);
}

#[test]
fn chained_overlaps_merge_transitively() {
    // a touches b, b touches c, a and c are apart.
    let mut store = BodyStore::from(vec![
        at_rest(0.0, 0.0, 1.0e6),
        at_rest(20.0, 0.0, 1.0e6),
        at_rest(40.0, 0.0, 1.0e6),
    ]);

    let outcome = CollisionMerger::new().merge(&mut store);

    assert_eq!(outcome, MergeOutcome { groups: 1, absorbed: 3 });
    assert_eq!(store.len(), 4);
    assert!(store.iter().take(3).all(|body| body.is_pending_removal()));
    assert_eq!(store.purge_removed(), 3);
    assert_eq!(store.len(), 1);
    assert_relative_eq!(
        store.get(0).expect("merged body").position.x,
        20.0,
        max_relative = 1e-12
    );
}

#[test]
fn separate_groups_are_joined_when_a_later_pair_links_them() {
    // Detection order: (0, 2) opens one group, (1, 3) another, (2, 3) joins them.
    let mut merger = CollisionMerger::new();
    let bodies = vec![
        at_rest(0.0, 0.0, 1.0e6),
        at_rest(60.0, 0.0, 1.0e6),
        at_rest(20.0, 0.0, 1.0e6),
        at_rest(40.0, 0.0, 1.0e6),
    ];

    assert_eq!(merger.find_groups(&bodies), vec![vec![0, 1, 2, 3]]);

    let mut simulation = Simulation64::from_bodies(STEP, bodies);
    simulation.simulate(1);
    assert_eq!(simulation.body_count(), 1);
    assert_eq!(simulation.bodies()[0].mass(), 4.0e6);
}

#[test]
fn independent_clusters_merge_separately() {
    let mut simulation = Simulation64::from_bodies(
        STEP,
        vec![
            at_rest(0.0, 0.0, 1.0e6),
            at_rest(5000.0, 0.0, 2.0e6),
            at_rest(15.0, 0.0, 1.0e6),
            at_rest(5015.0, 0.0, 2.0e6),
            at_rest(0.0, 9000.0, 1.0e6),
        ],
    );

    simulation.simulate(1);

    assert_eq!(simulation.body_count(), 3);
    let mut masses: Vec<f64> = simulation.bodies().iter().map(|body| body.mass()).collect();
    masses.sort_by(f64::total_cmp);
    assert_eq!(masses, vec![1.0e6, 2.0e6, 4.0e6]);
    assert_relative_eq!(simulation.total_mass(), 7.0e6);
}

#[test]
fn merged_body_keeps_the_group_momentum() {
    let m1 = 2.0e6;
    let m2 = 6.0e6;
    let step = 1.0;
    let bodies = vec![
        Body::with_velocity(DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.4, 0.0), m1, step),
        Body::with_velocity(DVec3::new(25.0, 0.0, 0.0), DVec3::new(-0.2, 0.0, 0.0), m2, step),
    ];
    let mut simulation = Simulation64::from_bodies(step, bodies);
    let before = simulation.system_velocity();

    simulation.simulate(1);

    assert_eq!(simulation.body_count(), 1);
    let merged_velocity = simulation.bodies()[0].velocity(step);
    assert_relative_eq!(merged_velocity.x, before.x, max_relative = 1e-6);
    assert_relative_eq!(merged_velocity.y, before.y, max_relative = 1e-6);
    assert_relative_eq!(before.x, -0.15, max_relative = 1e-12);
    assert_relative_eq!(before.y, 0.1, max_relative = 1e-12);
}

#[test]
fn merged_bodies_only_collide_again_on_the_next_step() {
    // The third body is out of reach of the second, but inside the radius of
    // the body the first two merge into. It is only absorbed a step later.
    let mut simulation = Simulation64::from_bodies(
        STEP,
        vec![
            at_rest(0.0, 0.0, 1.0e6),
            at_rest(6.0, 0.0, 1.0e6),
            at_rest(28.6, 0.0, 1.0e6),
        ],
    );

    simulation.simulate(1);
    assert_eq!(simulation.body_count(), 2);

    simulation.simulate(1);
    assert_eq!(simulation.body_count(), 1);
    assert_eq!(simulation.bodies()[0].mass(), 3.0e6);
}

#[test]
fn negative_total_mass_still_weights_by_mass() {
    // The negative body has no radius, but sits inside the positive one.
    let mut store = BodyStore::from(vec![at_rest(0.0, 0.0, 1.0e6), at_rest(5.0, 0.0, -3.0e6)]);

    let outcome = CollisionMerger::new().merge(&mut store);
    store.purge_removed();

    assert_eq!(outcome, MergeOutcome { groups: 1, absorbed: 2 });
    let merged = store.get(0).expect("merged body");
    assert_eq!(merged.mass(), -2.0e6);
    assert_relative_eq!(merged.position.x, 7.5, max_relative = 1e-12);
    assert_relative_eq!(merged.previous_position.x, 7.5, max_relative = 1e-12);
    assert_eq!(merged.radius(), 0.0);
}

#[test]
fn zero_total_mass_falls_back_to_equal_weights() {
    let position = |x: f64| DVec3::new(x, 0.0, 0.0);
    let mut store = BodyStore::from(vec![
        Body::new(position(0.0), position(0.0), 2.0e6),
        Body::new(position(4.0), position(4.0), -2.0e6),
    ]);

    CollisionMerger::new().merge(&mut store);
    store.purge_removed();

    let merged = store.get(0).expect("merged body");
    assert_eq!(merged.mass(), 0.0);
    assert_eq!(merged.position, position(2.0));
}
