//! Unit tests for sre-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ItemId, TeamId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn team_id_overflow_rejected() {
        assert!(TeamId::try_from(70_000usize).is_err());
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(ItemId(100) > ItemId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(TeamId::INVALID.0, u16::MAX);
        assert_eq!(ItemId::default(), ItemId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{RunConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(3)), 12);
    }

    #[test]
    fn run_config_end_tick() {
        let cfg = RunConfig::new(1_000, Some(7));
        assert_eq!(cfg.end_tick(), Tick(1_000));
        assert_eq!(cfg.snapshot_interval_ticks, 1);
    }
}

#[cfg(test)]
mod work {
    use crate::{KindCounts, WorkKind};

    #[test]
    fn indices_follow_all_order() {
        for (i, kind) in WorkKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn idle_is_default_and_not_work() {
        assert_eq!(WorkKind::default(), WorkKind::Idle);
        assert!(!WorkKind::Idle.is_work());
        assert!(WorkKind::Onboarding.is_work());
    }

    #[test]
    fn display_labels() {
        assert_eq!(WorkKind::CrossTeamProject.to_string(), "cross_team_project");
        assert_eq!(WorkKind::Operational.to_string(), "operational");
    }

    #[test]
    fn counts_start_at_zero() {
        let counts = KindCounts::new();
        assert_eq!(counts.total(), 0);
        assert!(WorkKind::ALL.iter().all(|&k| counts.get(k) == 0));
        assert_eq!(counts.fraction(WorkKind::Idle), 0.0);
    }

    #[test]
    fn fractions_sum_to_one() {
        let mut counts = KindCounts::new();
        counts.add(WorkKind::Operational, 3);
        counts.add(WorkKind::InTeamProject, 1);
        counts[WorkKind::Idle] += 4;
        assert_eq!(counts.total(), 8);
        assert_eq!(counts.fraction(WorkKind::Operational), 0.375);
        let sum: f64 = WorkKind::ALL.iter().map(|&k| counts.fraction(k)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[cfg(test)]
mod rng {
    use rand::RngCore;

    use crate::{AgentId, AgentRng, AgentRngs, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a = r1.inner().next_u64();
            let b = r2.inner().next_u64();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a = r0.inner().next_u64();
        let b = r1.inner().next_u64();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn arrival_stream_differs_from_agent_zero() {
        let mut agent = AgentRng::new(9, AgentId(0));
        let mut arrivals = SimRng::arrivals(9);
        let a = agent.inner().next_u64();
        let b = arrivals.inner().next_u64();
        assert_ne!(a, b);
    }

    #[test]
    fn agent_rngs_match_individual_construction() {
        let mut rngs = AgentRngs::new(3, 77);
        assert_eq!(rngs.len(), 3);
        let mut lone = AgentRng::new(77, AgentId(2));
        let a = rngs.get_mut(AgentId(2)).inner().next_u64();
        let b = lone.inner().next_u64();
        assert_eq!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
