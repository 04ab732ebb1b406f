#![allow(dead_code)]

use gym::{BoxSpace, Env, EnvError, Info, Result, Space, Step};

/// Route wrapper logs to the test harness output. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Deterministic test environment with a bounded box action and observation.
///
/// The observation is `[position, last action, sin(ticks)]`. The position
/// integrates the action and is clamped to `[-1, 1]`. The reward is
/// `1 + 0.5 * position`, or a constant when one is set.
#[derive(Debug)]
pub struct LineEnv {
    action_space: Space,
    observation_space: Space,
    position: f32,
    ticks: u32,
    ready: bool,
    constant_reward: Option<f32>,
    pub last_action: Option<Vec<f32>>,
}

impl LineEnv {
    pub const MAX_TICKS: u32 = 200;

    pub fn new() -> Self {
        Self {
            action_space: Space::Box(BoxSpace::uniform(1, -1.0, 1.0).unwrap()),
            observation_space: Space::Box(BoxSpace::uniform(3, -1.0, 1.0).unwrap()),
            position: 0.0,
            ticks: 0,
            ready: false,
            constant_reward: None,
            last_action: None,
        }
    }

    pub fn with_constant_reward(reward: f32) -> Self {
        Self {
            constant_reward: Some(reward),
            ..Self::new()
        }
    }

    fn observation(&self, action: f32) -> Vec<f32> {
        vec![self.position, action, (self.ticks as f32).sin()]
    }
}

impl Env for LineEnv {
    fn action_space(&self) -> &Space {
        &self.action_space
    }

    fn observation_space(&self) -> &Space {
        &self.observation_space
    }

    fn reset(&mut self, seed: Option<u64>, _options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        self.position = seed.map_or(0.0, |s| (s % 10) as f32 / 20.0);
        self.ticks = 0;
        self.ready = true;
        Ok((self.observation(0.0), Info::new()))
    }

    fn step(&mut self, action: &[f32]) -> Result<Step> {
        if !self.ready {
            return Err(EnvError::ResetNeeded);
        }
        let [a] = action else {
            return Err(EnvError::InvalidAction(format!("expected one value, got {action:?}")));
        };
        self.last_action = Some(action.to_vec());
        self.ticks += 1;
        self.position = (self.position + 0.1 * a).clamp(-1.0, 1.0);
        let reward = self.constant_reward.unwrap_or(1.0 + 0.5 * self.position);
        let truncated = self.ticks >= Self::MAX_TICKS;
        Ok(Step::new(self.observation(*a), reward, false, truncated))
    }
}

/// Observations are infinite in every dimension; used to provoke
/// non-finite noise results.
#[derive(Debug)]
pub struct InfiniteEnv {
    space: Space,
}

impl InfiniteEnv {
    pub fn new() -> Self {
        let space = BoxSpace::uniform(2, f32::NEG_INFINITY, f32::INFINITY).unwrap();
        Self {
            space: Space::Box(space),
        }
    }
}

impl Env for InfiniteEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn observation_space(&self) -> &Space {
        &self.space
    }

    fn reset(&mut self, _seed: Option<u64>, _options: Option<&Info>) -> Result<(Vec<f32>, Info)> {
        Ok((vec![f32::INFINITY, 1.0], Info::new()))
    }

    fn step(&mut self, _action: &[f32]) -> Result<Step> {
        Ok(Step::new(vec![f32::INFINITY, 1.0], 0.0, false, false))
    }
}

/// Run `steps` steps with a fixed action and collect every step.
pub fn rollout<E: Env>(env: &mut E, seed: u64, action: &[f32], steps: usize) -> Result<Vec<Step>> {
    env.reset(Some(seed), None)?;
    (0..steps).map(|_| env.step(action)).collect()
}
