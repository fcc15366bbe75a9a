pub mod class_engagement;
pub mod logins;
pub mod playtime;
pub mod progression;

use crate::{classes::ClassGroup, signals::NormalizedSignals};
use serde::Serialize;

/// Read-only context passed to every rule evaluator.
pub struct RuleContext<'a> {
    pub signals: &'a NormalizedSignals,
    pub group:   ClassGroup,
}

impl<'a> RuleContext<'a> {
    pub fn new(signals: &'a NormalizedSignals) -> Self {
        Self { signals, group: ClassGroup::of(&signals.class) }
    }
}

/// Which way a factor pushes: towards quitting, or towards staying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Risk,
    Engagement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Factor {
    pub key:      &'static str,
    pub polarity: Polarity,
    pub text:     String,
}

/// Rules return zero or more factors, at most one per polarity.
/// Zero means the rule did not fire.
pub type RuleOutput = Vec<Factor>;

// ---------------------------------------------------------------------------
// Convenience constructors so rules don't repeat boilerplate
// ---------------------------------------------------------------------------

pub fn risk(key: &'static str, text: impl Into<String>) -> Factor {
    Factor { key, polarity: Polarity::Risk, text: text.into() }
}

pub fn engagement(key: &'static str, text: impl Into<String>) -> Factor {
    Factor { key, polarity: Polarity::Engagement, text: text.into() }
}

/// Runs every rule in the fixed reporting order: logins, playtime,
/// progression, class.
pub fn evaluate_all(ctx: &RuleContext) -> RuleOutput {
    logins::evaluate(ctx)
        .into_iter()
        .chain(playtime::evaluate(ctx))
        .chain(progression::evaluate(ctx))
        .chain(class_engagement::evaluate(ctx))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::PlayerSignals;

    fn texts(out: &RuleOutput, polarity: Polarity) -> Vec<&str> {
        out.iter()
            .filter(|f| f.polarity == polarity)
            .map(|f| f.text.as_str())
            .collect()
    }

    #[test]
    fn keeps_rule_order_within_each_polarity() {
        let n   = NormalizedSignals::from(&PlayerSignals::new(1, 10, 0, "Rogue"));
        let out = evaluate_all(&RuleContext::new(&n));
        assert_eq!(
            texts(&out, Polarity::Risk),
            vec!["Very low logins", "Very low playtime", "No progression", "Class Rogue with low engagement"]
        );
        assert!(texts(&out, Polarity::Engagement).is_empty());
    }

    #[test]
    fn a_player_can_carry_both_polarities() {
        // Few logins but long sessions and steady levelling
        let n   = NormalizedSignals::from(&PlayerSignals::new(3, 200, 5, "Mage"));
        let out = evaluate_all(&RuleContext::new(&n));
        assert_eq!(texts(&out, Polarity::Risk),       vec!["Below-average logins"]);
        assert_eq!(texts(&out, Polarity::Engagement), vec!["Very high playtime", "Strong progression"]);
    }
}
