//! Classic cart-pole balancing task.
//!
//! A pole is attached by an un-actuated joint to a cart moving along a
//! frictionless track. The agent pushes the cart left (`0`) or right (`1`)
//! and receives `+1` for every step the pole stays upright.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use crate::env::{Env, Info, RenderFrame, Step};
use crate::error::{EnvError, Result};
use crate::space::{BoxSpace, Discrete, Space};

const GRAVITY: f32 = 9.8;
const CART_MASS: f32 = 1.0;
const POLE_MASS: f32 = 0.1;
const POLE_HALF_LENGTH: f32 = 0.5;
const FORCE_MAG: f32 = 10.0;
const DT: f32 = 0.02;
const X_THRESHOLD: f32 = 2.4;
const THETA_THRESHOLD: f32 = 12.0 * std::f32::consts::PI / 180.0;
const INIT_RANGE: f32 = 0.05;
const MAX_STEPS: u32 = 500;

pub struct CartPole {
    /// `[x, x_dot, theta, theta_dot]`, `None` until the first reset.
    state: Option<[f32; 4]>,
    rng: Xoshiro256StarStar,
    ticks: u32,
    max_steps: u32,
    terminated: bool,
    action_space: Space,
    observation_space: Space,
}

impl CartPole {
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_steps(MAX_STEPS)
    }

    /// Creates a cart-pole truncated after `max_steps` steps.
    #[must_use]
    pub fn with_max_steps(max_steps: u32) -> Self {
        // Twice the failure thresholds so terminal states remain observable.
        let high = vec![X_THRESHOLD * 2.0, f32::MAX, THETA_THRESHOLD * 2.0, f32::MAX];
        Self {
            state: None,
            rng: Xoshiro256StarStar::seed_from_u64(rand::random()),
            ticks: 0,
            max_steps,
            terminated: false,
            action_space: Space::Discrete(Discrete::binary()),
            observation_space: Space::Box(BoxSpace::symmetric(high)),
        }
    }

    /// Current state, if the environment has been reset.
    #[must_use]
    pub fn state(&self) -> Option<[f32; 4]> {
        self.state
    }

    #[allow(clippy::float_cmp)]
    /// Whether `action` pushes the cart to the right.
    fn pushes_right(action: &[f32]) -> Result<bool> {
        match action {
            [a] if *a == 0.0 || *a == 1.0 => Ok(*a == 1.0),
            _ => Err(EnvError::InvalidAction(format!(
                "cart-pole expects a single 0 or 1, got {action:?}"
            ))),
        }
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for CartPole {
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
        let mut state = [0.0; 4];
        for s in &mut state {
            *s = self.rng.gen::<f32>() * (2.0 * INIT_RANGE) - INIT_RANGE;
        }
        self.state = Some(state);
        self.ticks = 0;
        self.terminated = false;
        Ok((state.to_vec(), Info::new()))
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        let [x, x_dot, theta, theta_dot] = self.state.ok_or(EnvError::ResetNeeded)?;
        let force = if Self::pushes_right(action)? {
            FORCE_MAG
        } else {
            -FORCE_MAG
        };

        let (sin_theta, cos_theta) = theta.sin_cos();
        let total_mass = CART_MASS + POLE_MASS;
        let pole_mass_length = POLE_MASS * POLE_HALF_LENGTH;

        let temp = (force + pole_mass_length * theta_dot * theta_dot * sin_theta) / total_mass;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (POLE_HALF_LENGTH * (4.0 / 3.0 - POLE_MASS * cos_theta * cos_theta / total_mass));
        let x_acc = temp - pole_mass_length * theta_acc * cos_theta / total_mass;

        let state = [
            x + DT * x_dot,
            x_dot + DT * x_acc,
            theta + DT * theta_dot,
            theta_dot + DT * theta_acc,
        ];
        self.state = Some(state);
        self.ticks += 1;

        let reward = if self.terminated {
            tracing::warn!("cart-pole stepped after termination; reset the environment");
            0.0
        } else {
            1.0
        };
        self.terminated |= state[0].abs() > X_THRESHOLD || state[2].abs() > THETA_THRESHOLD;
        let truncated = self.ticks >= self.max_steps;

        Ok(Step::new(state.to_vec(), reward, self.terminated, truncated))
    }

    fn render(&self) -> Option<RenderFrame> {
        let [x, _, theta, _] = self.state?;
        Some(RenderFrame::Text(format!(
            "cart x={x:+.3} pole theta={:+.2} deg",
            theta.to_degrees()
        )))
    }
}
