use gym::{CartPole, Env, EnvError};

/// Resetting twice with the same seed gives the same initial state and the
/// same trajectory for the same actions.
#[test]
fn cart_pole_seeded_reset_is_reproducible() -> anyhow::Result<()> {
    let mut a = CartPole::new();
    let mut b = CartPole::new();
    let (obs_a, _) = a.reset(Some(333), None)?;
    let (obs_b, _) = b.reset(Some(333), None)?;
    assert_eq!(obs_a, obs_b);
    assert!(obs_a.iter().all(|v| v.abs() <= 0.05));

    for i in 0..20 {
        let action = [(i % 2) as f32];
        assert_eq!(a.step(&action)?, b.step(&action)?);
    }
    Ok(())
}

#[test]
fn cart_pole_requires_reset() {
    let mut env = CartPole::new();
    assert_eq!(env.step(&[0.0]), Err(EnvError::ResetNeeded));
    assert!(env.render().is_none());
}

#[test]
fn cart_pole_rejects_malformed_actions() -> anyhow::Result<()> {
    let mut env = CartPole::new();
    env.reset(Some(1), None)?;
    assert!(matches!(env.step(&[2.0]), Err(EnvError::InvalidAction(_))));
    assert!(matches!(env.step(&[0.5]), Err(EnvError::InvalidAction(_))));
    assert!(matches!(env.step(&[]), Err(EnvError::InvalidAction(_))));
    Ok(())
}

/// Pushing the cart in one direction makes the pole fall, which terminates
/// the episode well before truncation.
#[test]
fn cart_pole_falls_under_constant_push() -> anyhow::Result<()> {
    let mut env = CartPole::new();
    env.reset(Some(7), None)?;
    let mut terminated = false;
    for _ in 0..200 {
        let step = env.step(&[1.0])?;
        assert_eq!(step.reward, 1.0);
        assert!(!step.truncated);
        if step.terminated {
            terminated = true;
            break;
        }
    }
    assert!(terminated, "episode should end once the pole falls over");

    // Stepping past termination yields no reward.
    let step = env.step(&[1.0])?;
    assert!(step.terminated);
    assert_eq!(step.reward, 0.0);
    Ok(())
}

#[test]
fn cart_pole_truncates_at_step_limit() -> anyhow::Result<()> {
    let mut env = CartPole::with_max_steps(3);
    env.reset(Some(11), None)?;
    assert!(!env.step(&[0.0])?.truncated);
    assert!(!env.step(&[1.0])?.truncated);
    assert!(env.step(&[0.0])?.truncated);
    Ok(())
}

#[test]
fn cart_pole_observations_are_in_space() -> anyhow::Result<()> {
    let mut env = CartPole::new();
    let (obs, _) = env.reset(Some(5), None)?;
    assert!(env.observation_space().contains(&obs));
    for i in 0..10 {
        let step = env.step(&[(i % 2) as f32])?;
        assert!(env.observation_space().contains(&step.observation));
    }
    assert!(env.render().is_some());
    Ok(())
}
