//! Inverted pendulum swing-up with a continuous torque action.
//!
//! The episode never terminates and is truncated after a fixed number of
//! steps. Observations are `[cos(theta), sin(theta), theta_dot]`.

use std::f32::consts::PI;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::env::{Env, Info, RenderFrame, Step};
use crate::error::{EnvError, Result};
use crate::space::{BoxSpace, Space};

const MAX_SPEED: f32 = 8.0;
const MAX_TORQUE: f32 = 2.0;
const DT: f32 = 0.05;
const G: f32 = 10.0;
const M: f32 = 1.0;
const L: f32 = 1.0;
const MAX_STEPS: u32 = 200;

pub struct Pendulum {
    /// `(theta, theta_dot)`, `None` until the first reset.
    state: Option<(f32, f32)>,
    rng: Xoshiro256StarStar,
    ticks: u32,
    max_steps: u32,
    action_space: Space,
    observation_space: Space,
}

impl Pendulum {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_steps(MAX_STEPS)
    }

    #[must_use]
    pub fn with_max_steps(max_steps: u32) -> Self {
        Self {
            state: None,
            rng: Xoshiro256StarStar::seed_from_u64(rand::random()),
            ticks: 0,
            max_steps,
            action_space: Space::Box(BoxSpace::symmetric(vec![MAX_TORQUE])),
            observation_space: Space::Box(BoxSpace::symmetric(vec![1.0, 1.0, MAX_SPEED])),
        }
    }

    fn observe(theta: f32, theta_dot: f32) -> Vec<f32> {
        vec![theta.cos(), theta.sin(), theta_dot]
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::new()
    }
}

fn angle_normalize(x: f32) -> f32 {
    (x + PI).rem_euclid(2.0 * PI) - PI
}

impl Env for Pendulum {
    fn action_space(&self) -> &Space {
        &self.action_space
    }

    fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    fn reset(&mut self, seed: Option<u64>, _options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        if let Some(seed) = seed {
            self.rng = Xoshiro256StarStar::seed_from_u64(seed);
        }
        let theta = self.rng.gen::<f32>() * (2.0 * PI) - PI;
        let theta_dot = self.rng.gen::<f32>() * 2.0 - 1.0;
        self.state = Some((theta, theta_dot));
        self.ticks = 0;
        Ok((Self::observe(theta, theta_dot), Info::new()))
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        let (theta, theta_dot) = self.state.ok_or(EnvError::ResetNeeded)?;
        let torque = match action {
            [u] if u.is_finite() => u.clamp(-MAX_TORQUE, MAX_TORQUE),
            _ => {
                return Err(EnvError::InvalidAction(format!(
                    "pendulum expects a single finite torque, got {action:?}"
                )))
            }
        };

        let norm_theta = angle_normalize(theta);
        let cost = norm_theta * norm_theta + 0.1 * theta_dot * theta_dot + 0.001 * torque * torque;

        let new_theta_dot = (theta_dot
            + (3.0 * G / (2.0 * L) * theta.sin() + 3.0 / (M * L * L) * torque) * DT)
            .clamp(-MAX_SPEED, MAX_SPEED);
        let new_theta = theta + new_theta_dot * DT;

        self.state = Some((new_theta, new_theta_dot));
        self.ticks += 1;
        let truncated = self.ticks >= self.max_steps;

        Ok(Step::new(Self::observe(new_theta, new_theta_dot), -cost, false, truncated))
    }

    fn render(&self) -> Option<RenderFrame> {
        let (theta, theta_dot) = self.state?;
        Some(RenderFrame::Text(format!(
            "pendulum theta={:+.3} rad theta_dot={theta_dot:+.3}",
            angle_normalize(theta)
        )))
    }
}
