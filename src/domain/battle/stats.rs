//! Aggregate statistics over a session's objection record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::objection::RulingDecision;
use super::session::BattleSession;

/// Read model summarizing a session's objection outcomes. Computed on
/// demand from the battle record, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_battles: usize,
    pub sustained: usize,
    pub overruled: usize,
    /// Citation tallies across rulings, keyed by rule number.
    pub rules_cited: HashMap<String, u32>,
}

impl SessionStats {
    /// Computes the stats for a session from its battle record.
    pub fn from_session(session: &BattleSession) -> Self {
        let mut stats = SessionStats::default();
        for battle in session.objection_battles() {
            stats.total_battles += 1;
            match battle.ruling.decision {
                RulingDecision::Sustained => stats.sustained += 1,
                RulingDecision::Overruled => stats.overruled += 1,
            }
            for rule in &battle.ruling.rules_applied {
                *stats.rules_cited.entry(rule.clone()).or_insert(0) += 1;
            }
        }
        stats
    }

    /// Fraction of battles the objector won, in `[0, 1]`. Zero when no
    /// battles were fought.
    pub fn sustain_rate(&self) -> f64 {
        if self.total_battles == 0 {
            return 0.0;
        }
        self.sustained as f64 / self.total_battles as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::battle::{
        CounterArgument, JudgeRuling, ModePayload, Objection, ObjectionBattle,
    };
    use crate::domain::foundation::{EntryId, SessionOwner};
    use crate::domain::ruleset::RulesetType;

    fn battle(decision: RulingDecision, rules: &[&str]) -> ObjectionBattle {
        ObjectionBattle::new(
            Objection::new("Hearsay", "FRE 802", EntryId::new()),
            CounterArgument::new("It falls under an exception.", vec![]),
            None,
            JudgeRuling::new(
                decision,
                "As argued.",
                rules.iter().map(|r| r.to_string()).collect(),
            ),
        )
    }

    fn session_with(battles: Vec<ObjectionBattle>) -> BattleSession {
        let mut session = BattleSession::new(
            SessionOwner::Anonymous,
            RulesetType::Fre,
            ModePayload::Scripted { script: vec![] },
        );
        for b in battles {
            session.append_battle(b).unwrap();
        }
        session
    }

    #[test]
    fn empty_session_yields_zeroed_stats() {
        let stats = SessionStats::from_session(&session_with(vec![]));
        assert_eq!(stats, SessionStats::default());
        assert_eq!(stats.sustain_rate(), 0.0);
    }

    #[test]
    fn counts_split_by_decision() {
        let stats = SessionStats::from_session(&session_with(vec![
            battle(RulingDecision::Sustained, &[]),
            battle(RulingDecision::Overruled, &[]),
            battle(RulingDecision::Sustained, &[]),
        ]));
        assert_eq!(stats.total_battles, 3);
        assert_eq!(stats.sustained, 2);
        assert_eq!(stats.overruled, 1);
        assert!((stats.sustain_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn citation_tallies_accumulate_across_battles() {
        let stats = SessionStats::from_session(&session_with(vec![
            battle(RulingDecision::Sustained, &["802", "803"]),
            battle(RulingDecision::Overruled, &["802"]),
        ]));
        assert_eq!(stats.rules_cited.get("802"), Some(&2));
        assert_eq!(stats.rules_cited.get("803"), Some(&1));
    }
}
