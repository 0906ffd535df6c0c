//! Fixed timestep simulation tick
//!
//! Advances ball and hexagon by one step. Edges are resolved one after
//! another in index order, each seeing the ball as left by the previous one.
//! This sequential pass is an approximation that holds while the ball is
//! small next to the hexagon; near a vertex two corrections can interact
//! slightly.

use super::collision::{ball_segment_collision, resolve_moving_wall};
use super::state::Simulation;

/// Advance the simulation by `dt` seconds
///
/// `dt` is expected to be small and roughly constant. Large steps can carry
/// the ball through a wall in one move; that is not guarded against here.
pub fn tick(sim: &mut Simulation, dt: f64) {
    let params = sim.params;

    // Semi-implicit Euler: velocity first, then position
    let ball = &mut sim.ball;
    ball.vel.y += params.gravity * dt;
    ball.vel *= params.damping;
    ball.pos += ball.vel * dt;

    sim.hexagon.rotate(dt);

    for (index, (a, b)) in sim.hexagon.edges().into_iter().enumerate() {
        let hit = ball_segment_collision(sim.ball.pos, sim.ball.radius, a, b);
        if !hit.hit {
            continue;
        }

        sim.ball.pos += hit.normal * hit.penetration;

        let wall_vel = sim.hexagon.velocity_at(hit.point);
        let approach = (sim.ball.vel - wall_vel).dot(hit.normal);
        sim.ball.vel = resolve_moving_wall(sim.ball.vel, hit.normal, wall_vel, params.restitution);

        log::trace!(
            "tick {} edge {}: penetration {:.4}, approach {:.3}",
            sim.time_ticks,
            index,
            hit.penetration,
            approach
        );
    }

    sim.time_ticks += 1;
    sim.elapsed += dt;
}
