//! Unit tests for swarm-sim.

use swarm_agent::{AgentEnvironment, AgentState, Controller, DiffDriveAgent, DiffDriveConfig, Population, PopulationBuilder};
use swarm_core::{Vec2, WorldConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state_at(x: f64, y: f64, heading: f64, radius: f64) -> AgentState {
    AgentState::new(Vec2::new(x, y), heading, radius)
}

fn stationary_at(points: &[(f64, f64)], radius: f64) -> Population {
    PopulationBuilder::new()
        .spawn(points.len(), |i| DiffDriveAgent::stationary(Vec2::new(points[i].0, points[i].1), radius))
        .build()
}

fn arena(width: f64, height: f64) -> WorldConfig {
    WorldConfig { width, height, ..WorldConfig::default() }
}

/// Drives forward at a fixed speed and turns by a random rate drawn from
/// the world's stream.
struct Wander {
    speed: f64,
}

impl Controller for Wander {
    fn control(&mut self, _state: &AgentState, env: &mut dyn AgentEnvironment) -> (f64, f64) {
        (self.speed, env.rng().gen_range(-1.0..1.0))
    }
}

fn wanderer(x: f64, y: f64, heading: f64) -> DiffDriveAgent {
    let config = DiffDriveConfig { radius: 5.0, ..DiffDriveConfig::default() };
    DiffDriveAgent::new(Vec2::new(x, y), heading, config, Wander { speed: 3.0 })
}

// ── Boundary ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use super::*;
    use crate::within_world_boundaries;

    #[test]
    fn interior_agent_is_untouched() {
        let config = arena(100.0, 100.0);
        let mut agent = state_at(50.0, 50.0, 0.0, 5.0);
        assert!(!within_world_boundaries(&config, &[], &mut agent));
        assert_eq!(agent.position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn clamps_left_edge() {
        let config = arena(100.0, 100.0);
        let mut agent = state_at(-5.0, 50.0, 0.0, 1.0);
        assert!(within_world_boundaries(&config, &[], &mut agent));
        assert_eq!(agent.x(), 1.0);
        assert_eq!(agent.y(), 50.0);
    }

    #[test]
    fn clamp_respects_padding_on_both_axes() {
        let config = WorldConfig { padding: 10.0, ..arena(100.0, 80.0) };
        let mut agent = state_at(200.0, 79.0, 0.0, 2.0);
        assert!(within_world_boundaries(&config, &[], &mut agent));
        assert_eq!(agent.position, Vec2::new(88.0, 68.0));
    }

    #[test]
    fn disabled_walls_make_it_a_no_op() {
        let config = WorldConfig { collide_walls: false, ..arena(100.0, 100.0) };
        let mut agent = state_at(-5.0, 500.0, 0.0, 1.0);
        assert!(!within_world_boundaries(&config, &[], &mut agent));
        assert_eq!(agent.position, Vec2::new(-5.0, 500.0));
    }

    #[test]
    fn walls_are_resolved_after_clamping() {
        use swarm_core::Segment;
        use swarm_spatial::Wall;

        let config = arena(100.0, 100.0);
        let wall = Wall::from_segments(vec![
            Segment::new(Vec2::new(0.0, 20.0), Vec2::new(100.0, 20.0)).unwrap(),
        ]);
        let mut agent = state_at(50.0, 22.0, 0.0, 4.0);
        // Inside the arena: no clamp, but the wall push still counts.
        assert!(within_world_boundaries(&config, &[wall], &mut agent));
        assert_eq!(agent.position, Vec2::new(50.0, 25.0));
    }
}

// ── Walls ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walls {
    use swarm_core::Segment;
    use swarm_spatial::Wall;

    use super::*;
    use crate::handle_wall_collisions;

    fn floor() -> Wall {
        Wall::from_segments(vec![Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)).unwrap()])
    }

    #[test]
    fn perpendicular_contact_pushes_clear() {
        let mut agent = state_at(5.0, 3.0, 0.0, 4.0);
        assert!(handle_wall_collisions(&[floor()], &mut agent));
        // |delta_y| = 3, push = 4 - 3 + 1 = 2 away from the segment.
        assert_eq!(agent.position, Vec2::new(5.0, 5.0));
        assert!(floor().sensing_segments()[0].distance_to(agent.position) >= agent.radius);
    }

    #[test]
    fn agent_below_is_pushed_down() {
        let mut agent = state_at(5.0, -1.0, 0.0, 4.0);
        assert!(handle_wall_collisions(&[floor()], &mut agent));
        assert_eq!(agent.position, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn distant_agent_is_untouched() {
        let mut agent = state_at(5.0, 4.0, 0.0, 4.0);
        assert!(!handle_wall_collisions(&[floor()], &mut agent));
        assert_eq!(agent.position, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn endpoint_contact_pushes_diagonally() {
        let mut agent = state_at(12.0, 1.0, 0.0, 4.0);
        assert!(handle_wall_collisions(&[floor()], &mut agent));
        // Closest point is the endpoint (10, 0): delta = (-2, -1).
        assert_eq!(agent.position, Vec2::new(15.0, 5.0));
    }

    #[test]
    fn every_colliding_segment_pushes() {
        let corner = Wall::polyline(
            &[Vec2::new(0.0, 10.0), Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)],
            false,
        )
        .unwrap();
        let mut agent = state_at(2.0, 2.0, 0.0, 3.0);
        assert!(handle_wall_collisions(&[corner], &mut agent));
        assert!(agent.x() >= 3.0 && agent.y() >= 3.0, "{}", agent.position);
    }

    #[test]
    fn segments_of_one_wall_share_the_sampled_center() {
        // Both edges meeting at the corner see the original center, so
        // each one pushes by 3 on both axes.
        let square = Wall::rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let mut agent = state_at(-1.0, -1.0, 0.0, 3.0);
        assert!(handle_wall_collisions(&[square], &mut agent));
        assert_eq!(agent.position, Vec2::new(-7.0, -7.0));
    }

    #[test]
    fn later_walls_see_earlier_pushes() {
        // The second copy samples the center left by the first and no
        // longer touches.
        let mut agent = state_at(5.0, 3.0, 0.0, 4.0);
        assert!(handle_wall_collisions(&[floor(), floor()], &mut agent));
        assert_eq!(agent.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn zero_length_segment_is_rejected_at_construction() {
        assert!(Wall::rect(0.0, 0.0, 0.0, 5.0).is_err());
        assert!(Segment::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)).is_err());
    }
}

// ── Goals ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod goals {
    use swarm_core::Aabb;
    use swarm_spatial::Goal;

    use super::*;
    use crate::handle_goal_collisions;

    #[test]
    fn cylinder_pushes_agent_out() {
        let goals = [Goal::cylinder(Vec2::new(0.0, 0.0), 10.0)];
        let mut agent = state_at(15.0, 0.0, 0.0, 10.0);
        assert!(handle_goal_collisions(&goals, &mut agent));
        assert!((agent.x() - 20.0).abs() < 1e-12);
        assert_eq!(agent.y(), 0.0);
    }

    #[test]
    fn area_goals_are_not_solid() {
        let goals = [Goal::area(Aabb::new(Vec2::ZERO, Vec2::new(50.0, 50.0)))];
        let mut agent = state_at(25.0, 25.0, 0.0, 5.0);
        assert!(!handle_goal_collisions(&goals, &mut agent));
        assert_eq!(agent.position, Vec2::new(25.0, 25.0));
    }

    #[test]
    fn overlapping_goals_correct_cumulatively() {
        let goals = [
            Goal::cylinder(Vec2::new(0.0, 0.0), 10.0),
            Goal::cylinder(Vec2::new(0.0, 0.0), 10.0),
        ];
        let mut agent = state_at(15.0, 0.0, 0.0, 10.0);
        handle_goal_collisions(&goals, &mut agent);
        // First push reaches contact; the second finds no overlap.
        assert!((agent.x() - 20.0).abs() < 1e-12);
    }
}

// ── Agent-agent ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod separation {
    use std::f64::consts::{FRAC_PI_2, PI};

    use swarm_core::{AgentId, SimRng};

    use super::*;
    use crate::prevent_agent_collisions;
    use crate::resolve::SEPARATION_EPSILON;

    #[test]
    fn lone_agent_is_a_no_op() {
        let mut others = stationary_at(&[(100.0, 100.0)], 5.0);
        let mut agent = state_at(10.0, 10.0, 0.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        assert_eq!(agent.position, Vec2::new(10.0, 10.0));
        assert!(!agent.collision_flag);
    }

    #[test]
    fn overlap_is_resolved_on_one_side() {
        let mut others = stationary_at(&[(16.0, 10.0)], 5.0);
        let mut agent = state_at(10.0, 10.0, PI / 2.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);

        let other = others.state(AgentId(0)).unwrap();
        assert_eq!(other.position, Vec2::new(16.0, 10.0), "the neighbor never moves");
        let d = agent.position.distance(other.position);
        assert!((d - (10.0 + SEPARATION_EPSILON)).abs() < 1e-9, "distance {d}");
        assert!(agent.collision_flag);
        assert!(other.collision_flag);
        assert_eq!(agent.stopped_duration, 0);
    }

    #[test]
    fn coincident_agents_are_separated_without_nan() {
        let mut others = stationary_at(&[(50.0, 50.0)], 5.0);
        let mut agent = state_at(50.0, 50.0, 0.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(7), false);

        assert!(agent.position.is_finite());
        let other = others.state(AgentId(0)).unwrap();
        assert_ne!(agent.position, other.position);
        assert!(agent.position.distance(other.position) >= 10.0);
    }

    #[test]
    fn forward_freeze_leaves_frontal_approach_in_place() {
        let mut others = stationary_at(&[(15.0, 10.0)], 5.0);
        // Heading 0 points straight at the neighbor's center.
        let mut agent = state_at(10.0, 10.0, 0.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), true);

        assert_eq!(agent.position, Vec2::new(10.0, 10.0));
        assert_eq!(agent.stopped_duration, 2);
        assert!(agent.collision_flag);
    }

    #[test]
    fn forward_freeze_stops_the_neighbor_that_approaches() {
        let mut others = PopulationBuilder::new()
            .agent(DiffDriveAgent::new(
                Vec2::new(15.0, 10.0),
                PI,
                DiffDriveConfig::default(),
                swarm_agent::ConstantControl::default(),
            ))
            .build();
        let mut agent = state_at(10.0, 10.0, FRAC_PI_2, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), true);

        assert_eq!(agent.position, Vec2::new(10.0, 10.0));
        assert_eq!(agent.stopped_duration, 0);
        assert_eq!(others.state(AgentId(0)).unwrap().stopped_duration, 2);
    }

    #[test]
    fn without_forward_freeze_frontal_contact_is_pushed() {
        let mut others = stationary_at(&[(15.0, 10.0)], 5.0);
        let mut agent = state_at(10.0, 10.0, 0.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        assert!(agent.x() < 10.0);
        assert_eq!(agent.stopped_duration, 0);
    }

    #[test]
    fn detection_id_two_is_contagious() {
        let mut others = stationary_at(&[(16.0, 10.0)], 5.0);
        others.state_mut(AgentId(0)).unwrap().detection_id = 2;
        let mut agent = state_at(10.0, 10.0, FRAC_PI_2, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        assert_eq!(agent.detection_id, 2);
    }

    #[test]
    fn other_detection_ids_do_not_spread() {
        let mut others = stationary_at(&[(16.0, 10.0)], 5.0);
        others.state_mut(AgentId(0)).unwrap().detection_id = 5;
        let mut agent = state_at(10.0, 10.0, FRAC_PI_2, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        assert_eq!(agent.detection_id, 0);
    }

    #[test]
    fn stop_on_collision_sets_three_ticks() {
        let mut others = stationary_at(&[(16.0, 10.0)], 5.0);
        let mut agent = state_at(10.0, 10.0, FRAC_PI_2, 5.0);
        agent.stop_on_collision = true;
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        assert_eq!(agent.stopped_duration, 3);
    }

    #[test]
    fn frontal_stop_overrides_collision_stop() {
        let mut others = stationary_at(&[(15.0, 10.0)], 5.0);
        let mut agent = state_at(10.0, 10.0, 0.0, 5.0);
        agent.stop_on_collision = true;
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), true);
        assert_eq!(agent.stopped_duration, 2);
    }

    #[test]
    fn several_neighbors_are_cleared() {
        let mut others = stationary_at(&[(20.0, 13.0), (27.0, 20.0)], 5.0);
        let mut agent = state_at(20.0, 20.0, 0.0, 5.0);
        prevent_agent_collisions(&mut agent, &mut others, &mut SimRng::new(0), false);
        for s in others.states() {
            assert!(agent.position.distance(s.position) >= 10.0 - 1e-9, "{}", agent.position);
        }
    }
}

// ── Forward classifier ────────────────────────────────────────────────────────

#[cfg(test)]
mod forward {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;
    use crate::collision_forward;

    #[test]
    fn head_on_triggers_for_agent_first() {
        let mut a = state_at(0.0, 0.0, 0.0, 5.0);
        let mut b = state_at(8.0, 0.0, PI, 5.0);
        assert!(collision_forward(&mut a, &mut b));
        assert_eq!(a.stopped_duration, 2);
        assert_eq!(b.stopped_duration, 0);
    }

    #[test]
    fn inside_thirty_degrees_counts() {
        let mut a = state_at(0.0, 0.0, 25f64.to_radians(), 5.0);
        let mut b = state_at(8.0, 0.0, FRAC_PI_2, 5.0);
        assert!(collision_forward(&mut a, &mut b));
    }

    #[test]
    fn side_contact_is_not_forward() {
        let mut a = state_at(0.0, 0.0, FRAC_PI_2, 5.0);
        let mut b = state_at(8.0, 0.0, FRAC_PI_2, 5.0);
        assert!(!collision_forward(&mut a, &mut b));
        let mut c = state_at(0.0, 0.0, FRAC_PI_4, 5.0);
        assert!(!collision_forward(&mut c, &mut b));
        assert_eq!(c.stopped_duration, 0);
    }

    #[test]
    fn coincident_centers_are_not_forward() {
        let mut a = state_at(3.0, 3.0, 0.0, 5.0);
        let mut b = state_at(3.0, 3.0, PI, 5.0);
        assert!(!collision_forward(&mut a, &mut b));
    }

    #[test]
    fn exactly_parallel_vectors_do_not_produce_nan() {
        // cos rounds to slightly above 1 for some inputs; the clamp keeps
        // acos defined.
        let mut a = state_at(0.1, 0.2, (0.3f64).atan2(0.7), 5.0);
        let mut b = state_at(0.1 + 0.7, 0.2 + 0.3, 0.0, 5.0);
        assert!(collision_forward(&mut a, &mut b));
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::{SimError, WorldBuilder};

    #[test]
    fn rejects_empty_arena() {
        let err = WorldBuilder::new(arena(0.0, 100.0)).build().err().unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn rejects_padding_wider_than_arena() {
        let config = WorldConfig { padding: 60.0, ..arena(100.0, 200.0) };
        assert!(WorldBuilder::new(config).build().is_err());
    }

    #[test]
    fn rejects_malformed_agent() {
        let err = WorldBuilder::new(arena(100.0, 100.0))
            .agents(stationary_at(&[(10.0, 10.0)], 0.0))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::ContractViolation(_)));
    }

    #[test]
    fn detectable_walls_add_border() {
        let config = WorldConfig { detectable_walls: true, ..arena(100.0, 100.0) };
        let world = WorldBuilder::new(config).build().unwrap();
        assert_eq!(world.walls().len(), 4);
        let plain = WorldBuilder::new(arena(100.0, 100.0)).build().unwrap();
        assert!(plain.walls().is_empty());
    }

    #[test]
    fn behaviors_are_reset_and_attached() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        use swarm_behavior::{Behavior, History, WorldContext};

        struct TickRecorder {
            history:  History,
            attached: Arc<AtomicUsize>,
        }

        impl Behavior for TickRecorder {
            fn name(&self) -> &str {
                "tick_recorder"
            }
            fn reset(&mut self) {
                self.history.push(-1.0);
            }
            fn attach(&mut self, ctx: &WorldContext<'_>) {
                self.attached.store(ctx.population.len(), Ordering::SeqCst);
            }
            fn calculate(&mut self, ctx: &WorldContext<'_>) {
                self.history.push(ctx.tick.0 as f64);
            }
            fn history(&self) -> &History {
                &self.history
            }
        }

        let attached = Arc::new(AtomicUsize::new(0));
        let world = WorldBuilder::new(arena(100.0, 100.0))
            .agents(stationary_at(&[(10.0, 10.0), (50.0, 50.0)], 2.0))
            .behavior(TickRecorder { history: History::new(4), attached: attached.clone() })
            .build()
            .unwrap();
        assert_eq!(attached.load(Ordering::SeqCst), 2);
        assert_eq!(world.behaviors()[0].current(), Some(-1.0));
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod world {
    use swarm_agent::ConstantControl;
    use swarm_behavior::{AverageSpeed, TotalCollisions};
    use swarm_core::{Aabb, AgentId, Tick};
    use swarm_spatial::Goal;

    use super::*;
    use crate::{NoopObserver, SimError, SimObserver, World, WorldBuilder};

    fn world_with(population: Population, config: WorldConfig) -> World {
        WorldBuilder::new(config).agents(population).build().unwrap()
    }

    fn positions(world: &World) -> Vec<(Vec2, f64)> {
        world.population().states().map(|s| (s.position, s.heading)).collect()
    }

    #[test]
    fn step_advances_clock() {
        let mut world = world_with(Population::new(), arena(100.0, 100.0));
        world.step().unwrap();
        world.step().unwrap();
        assert_eq!(world.clock.current_tick, Tick(2));
    }

    #[test]
    fn cluster_separates_over_ticks() {
        // A packed 3x3 block, slightly irregular.
        let points: Vec<(f64, f64)> = (0..9)
            .map(|i| {
                let f = i as f64;
                (100.0 + 6.0 * (i % 3) as f64 + 0.3 * f, 100.0 + 6.0 * (i / 3) as f64 + 0.17 * f * f)
            })
            .collect();
        let mut world = world_with(stationary_at(&points, 5.0), arena(300.0, 300.0));
        world.run_ticks(50, &mut NoopObserver).unwrap();

        let states: Vec<_> = world.population().states().collect();
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                let d = a.position.distance(b.position);
                assert!(d >= 10.0 - 1e-6, "{} and {} at {d}", a.id, b.id);
            }
        }
    }

    #[test]
    fn agents_stay_inside_the_arena() {
        let config = WorldConfig { padding: 5.0, ..arena(100.0, 100.0) };
        let population = PopulationBuilder::new()
            .agent(DiffDriveAgent::new(
                Vec2::new(50.0, 50.0),
                0.0,
                DiffDriveConfig { radius: 4.0, ..DiffDriveConfig::default() },
                ConstantControl { speed: 7.0, turn_rate: 0.1 },
            ))
            .build();
        let mut world = world_with(population, config);
        for _ in 0..100 {
            world.step().unwrap();
            let s = world.agent(AgentId(0)).unwrap();
            assert!(s.x() >= 9.0 && s.x() <= 91.0, "x {}", s.x());
            assert!(s.y() >= 9.0 && s.y() <= 91.0, "y {}", s.y());
        }
    }

    #[test]
    fn agents_are_pushed_out_of_goals() {
        let population = PopulationBuilder::new()
            .agent(DiffDriveAgent::new(
                Vec2::new(20.0, 50.0),
                0.0,
                DiffDriveConfig { radius: 3.0, ..DiffDriveConfig::default() },
                ConstantControl { speed: 2.0, turn_rate: 0.0 },
            ))
            .build();
        let mut world = WorldBuilder::new(arena(100.0, 100.0))
            .agents(population)
            .goals(vec![Goal::cylinder(Vec2::new(50.0, 50.0), 10.0)])
            .build()
            .unwrap();
        for _ in 0..30 {
            world.step().unwrap();
            let d = world.agent(AgentId(0)).unwrap().position.distance(Vec2::new(50.0, 50.0));
            assert!(d >= 13.0 - 1e-9, "inside goal at distance {d}");
        }
    }

    #[test]
    fn same_seed_same_trajectories() {
        let make = |seed: u64| {
            let population = PopulationBuilder::new()
                .spawn(12, |i| wanderer(40.0 + 15.0 * (i % 4) as f64, 40.0 + 15.0 * (i / 4) as f64, i as f64))
                // Two coincident agents force the jitter path.
                .agent(wanderer(150.0, 150.0, 0.0))
                .agent(wanderer(150.0, 150.0, 0.0))
                .build();
            let config = WorldConfig { seed, ..arena(200.0, 200.0) };
            world_with(population, config)
        };
        let (mut a, mut b) = (make(11), make(11));
        for _ in 0..200 {
            a.step().unwrap();
            b.step().unwrap();
            assert_eq!(positions(&a), positions(&b));
        }
        let mut c = make(12);
        c.run_ticks(200, &mut NoopObserver).unwrap();
        assert_ne!(positions(&a), positions(&c));
    }

    #[test]
    fn controllers_never_see_themselves() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountNeighbors(Arc<AtomicUsize>);

        impl Controller for CountNeighbors {
            fn control(&mut self, state: &AgentState, env: &mut dyn AgentEnvironment) -> (f64, f64) {
                let seen = env.neighbors_within(state.position, 1_000.0);
                assert!(!seen.contains(&state.id));
                self.0.store(seen.len(), Ordering::SeqCst);
                (0.0, 0.0)
            }
        }

        let seen = Arc::new(AtomicUsize::new(usize::MAX));
        let population = PopulationBuilder::new()
            .agent(DiffDriveAgent::new(
                Vec2::new(50.0, 50.0),
                0.0,
                DiffDriveConfig::default(),
                CountNeighbors(seen.clone()),
            ))
            .agent(DiffDriveAgent::stationary(Vec2::new(80.0, 80.0), 5.0))
            .agent(DiffDriveAgent::stationary(Vec2::new(20.0, 20.0), 5.0))
            .build();
        let mut world = world_with(population, arena(100.0, 100.0));
        world.step().unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn detached_slot_is_a_contract_violation() {
        let mut world = world_with(stationary_at(&[(10.0, 10.0), (50.0, 50.0)], 2.0), arena(100.0, 100.0));
        let _held = world.population_mut().take(AgentId(1)).unwrap();
        let err = world.step().err().unwrap();
        assert!(matches!(err, SimError::ContractViolation(_)));
    }

    #[test]
    fn removed_agents_are_skipped() {
        let mut world = world_with(
            stationary_at(&[(10.0, 10.0), (50.0, 50.0), (90.0, 90.0)], 2.0),
            arena(100.0, 100.0),
        );
        let removed = world.remove_agent(AgentId(1)).unwrap();
        assert!(removed.state().deleted);
        world.step().unwrap();
        assert_eq!(world.population().len(), 2);
        assert!(world.agent(AgentId(1)).is_none());
        assert!(world.remove_agent(AgentId(1)).is_err());
    }

    #[test]
    fn replace_keeps_pose() {
        let mut world = world_with(stationary_at(&[(10.0, 10.0), (50.0, 50.0)], 2.0), arena(100.0, 100.0));
        let human = DiffDriveAgent::new(
            Vec2::ZERO,
            0.0,
            DiffDriveConfig { radius: 3.0, ..DiffDriveConfig::default() },
            ConstantControl { speed: 1.0, turn_rate: 0.0 },
        );
        let old = world.replace_agent(AgentId(1), human).unwrap();
        assert_eq!(old.state().radius, 2.0);
        let s = world.agent(AgentId(1)).unwrap();
        assert_eq!(s.position, Vec2::new(50.0, 50.0));
        assert_eq!(s.radius, 3.0);

        let bad = DiffDriveAgent::stationary(Vec2::ZERO, -1.0);
        assert!(matches!(world.replace_agent(AgentId(0), bad), Err(SimError::ContractViolation(_))));
    }

    #[test]
    fn y_range_query_ignores_x() {
        let world = world_with(
            stationary_at(&[(10.0, 17.0), (90.0, 30.0), (50.0, 80.0)], 5.0),
            arena(100.0, 100.0),
        );
        let band = Aabb::new(Vec2::new(0.0, 20.0), Vec2::new(1.0, 40.0));
        assert_eq!(world.agents_matching_y_range(&band), vec![AgentId(0), AgentId(1)]);
    }

    #[test]
    fn behavior_vector_follows_attachment_order() {
        let population = PopulationBuilder::new()
            .agent(wanderer(30.0, 30.0, 0.0))
            .agent(wanderer(70.0, 70.0, 1.0))
            .build();
        let mut world = WorldBuilder::new(arena(100.0, 100.0))
            .agents(population)
            .behavior(TotalCollisions::new(3))
            .behavior(AverageSpeed::new(3))
            .build()
            .unwrap();
        assert_eq!(world.behavior_vector(), vec![0.0, 0.0]);
        world.run_ticks(5, &mut NoopObserver).unwrap();
        let v = world.behavior_vector();
        assert_eq!(v.len(), 2);
        assert_eq!(world.behaviors()[1].name(), "average_speed");
        assert!(v[1] > 0.0 && v[1] <= 3.0 + 1e-9);
    }

    #[derive(Default)]
    struct Counter {
        starts:    Vec<Tick>,
        ends:      usize,
        snapshots: Vec<(Tick, usize, usize)>,
        finished:  Option<Tick>,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_tick_end(&mut self, _tick: Tick, _live: usize) {
            self.ends += 1;
        }
        fn on_snapshot(
            &mut self,
            tick:       Tick,
            population: &Population,
            behaviors:  &[Box<dyn swarm_behavior::Behavior>],
        ) {
            self.snapshots.push((tick, population.len(), behaviors.len()));
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.finished = Some(final_tick);
        }
    }

    #[test]
    fn run_drives_observer_to_end_tick() {
        let config = WorldConfig { total_ticks: 6, output_interval_ticks: 2, ..arena(100.0, 100.0) };
        let mut world = WorldBuilder::new(config)
            .agents(stationary_at(&[(10.0, 10.0)], 2.0))
            .behavior(AverageSpeed::default())
            .build()
            .unwrap();
        let mut counter = Counter::default();
        world.run(&mut counter).unwrap();

        assert_eq!(counter.starts.first(), Some(&Tick(1)));
        assert_eq!(counter.starts.len(), 6);
        assert_eq!(counter.ends, 6);
        assert_eq!(counter.snapshots, vec![(Tick(2), 1, 1), (Tick(4), 1, 1), (Tick(6), 1, 1)]);
        assert_eq!(counter.finished, Some(Tick(6)));
        assert_eq!(world.clock.current_tick, Tick(6));
    }
}
