/// Churn-risk scorer.
///
/// Takes one set of player signals, clamps them, and produces a weighted
/// linear risk score with a small class interaction nudge:
///
///   risk = 0.45 * login_risk + 0.35 * playtime_risk + 0.20 * level_risk
///
/// Each sub-score is 1.0 for the riskiest value and 0.0 at the healthy cap:
///   logins    0 – 14 / week
///   playtime  0 – 240 min / day (longer sessions add nothing)
///   levels    0 – 6 / week      (faster levelling adds nothing)
///
/// This is a fixed heuristic, not a trained model. The call is pure; there is
/// no state between predictions.
use crate::{
    classes::ClassGroup,
    rules::{self, Factor, Polarity, RuleContext},
    signals::{NormalizedSignals, PlayerSignals},
};
use serde::{Deserialize, Serialize};

const LOGIN_WEIGHT:    f64 = 0.45;
const PLAYTIME_WEIGHT: f64 = 0.35;
const LEVEL_WEIGHT:    f64 = 0.20;

const LOGIN_CAP:    f64 = 14.0;
const PLAYTIME_CAP: f64 = 240.0;
const LEVEL_CAP:    f64 = 6.0;

const CLASS_NUDGE: f64 = 0.05;
const QUIT_THRESHOLD: f64 = 0.5;
const MAX_FACTORS: usize = 4;

const FALLBACK_RISK:       &str = "Edge case metrics";
const FALLBACK_ENGAGEMENT: &str = "Balanced engagement";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuitLabel {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl QuitLabel {
    fn from_score(score: f64) -> Self {
        if score >= QUIT_THRESHOLD { QuitLabel::Yes } else { QuitLabel::No }
    }

    fn polarity(self) -> Polarity {
        match self {
            QuitLabel::Yes => Polarity::Risk,
            QuitLabel::No  => Polarity::Engagement,
        }
    }

    fn fallback(self) -> &'static str {
        match self {
            QuitLabel::Yes => FALLBACK_RISK,
            QuitLabel::No  => FALLBACK_ENGAGEMENT,
        }
    }
}

/// The public result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub quit_next_5d: QuitLabel,
    /// Rounded to two decimals.
    pub probability:  f64,
    /// 1 – 4 short reasons, most basic signal first.
    pub factors:      Vec<String>,
}

/// Full breakdown behind a prediction. Used by `--explain` and by tests.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub signals:          NormalizedSignals,
    pub class_group:      ClassGroup,
    pub login_risk:       f64,
    pub playtime_risk:    f64,
    pub level_risk:       f64,
    pub weighted_risk:    f64,
    pub class_adjustment: f64,
    /// Clamped to [0, 1] but not rounded; the label is decided on this.
    pub score:            f64,
    pub label:            QuitLabel,
    pub factors:          Vec<Factor>,
}

impl Assessment {
    pub fn probability(&self) -> f64 {
        round_2dp(self.score)
    }

    pub fn into_prediction(self) -> Prediction {
        let probability = self.probability();
        Prediction {
            quit_next_5d: self.label,
            probability,
            factors:      self.factors.into_iter().map(|f| f.text).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub fn predict(raw: &PlayerSignals) -> Prediction {
    assess(raw).into_prediction()
}

pub fn assess(raw: &PlayerSignals) -> Assessment {
    let signals = NormalizedSignals::from(raw);

    let login_risk    = 1.0 - signals.logins as f64 / LOGIN_CAP;
    let playtime_risk = 1.0 - (signals.playtime as f64).min(PLAYTIME_CAP) / PLAYTIME_CAP;
    let level_risk    = 1.0 - (signals.levels as f64).min(LEVEL_CAP) / LEVEL_CAP;

    let weighted_risk = LOGIN_WEIGHT * login_risk
        + PLAYTIME_WEIGHT * playtime_risk
        + LEVEL_WEIGHT * level_risk;

    let ctx = RuleContext::new(&signals);
    let class_adjustment = class_adjustment(ctx.group, &signals);

    let score = (weighted_risk + class_adjustment).clamp(0.0, 1.0);
    let label = QuitLabel::from_score(score);
    let factors = select_factors(rules::evaluate_all(&ctx), label);

    tracing::debug!(
        "assess lf={} pt={} lv={} cls={} → login={:.3} playtime={:.3} level={:.3} adj={:+.2} score={:.4} label={:?}",
        signals.logins, signals.playtime, signals.levels, signals.class,
        login_risk, playtime_risk, level_risk, class_adjustment, score, label
    );

    let class_group = ctx.group;
    Assessment {
        signals,
        class_group,
        login_risk,
        playtime_risk,
        level_risk,
        weighted_risk,
        class_adjustment,
        score,
        label,
        factors,
    }
}

/// Both arms are checked independently and summed; with disjoint class groups
/// at most one applies.
fn class_adjustment(group: ClassGroup, signals: &NormalizedSignals) -> f64 {
    let mut adjustment = 0.0;
    if group == ClassGroup::Volatile && signals.low_engagement() {
        adjustment += CLASS_NUDGE;
    }
    if group == ClassGroup::Steady && signals.high_engagement() {
        adjustment -= CLASS_NUDGE;
    }
    adjustment
}

fn select_factors(candidates: Vec<Factor>, label: QuitLabel) -> Vec<Factor> {
    let polarity = label.polarity();
    let mut selected: Vec<Factor> = candidates
        .into_iter()
        .filter(|f| f.polarity == polarity)
        .take(MAX_FACTORS)
        .collect();

    if selected.is_empty() {
        selected.push(Factor {
            key:      "fallback",
            polarity,
            text:     label.fallback().to_owned(),
        });
    }
    selected
}

/// Rounds from the exact decimal expansion of `x`. Scaling by 100 first is
/// inexact (0.7949999999999999 * 100 == 79.5) and would round the wrong way.
fn round_2dp(x: f64) -> f64 {
    format!("{:.2}", x).parse().unwrap_or(x)
}
