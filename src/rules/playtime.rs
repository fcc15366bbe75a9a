/// Average daily playtime in minutes.
///
/// Risk:        <= 15 "Very low playtime",  else <= 45 "Low playtime"
/// Engagement:  >= 120 "Very high playtime", else >= 45 "Moderate playtime"
///
/// Exactly 45 minutes counts both ways; the engine only ever reports one side.
use super::{engagement, risk, RuleContext, RuleOutput};

pub const KEY: &str = "playtime";

pub fn evaluate(ctx: &RuleContext) -> RuleOutput {
    let pt = ctx.signals.playtime;
    let mut out = Vec::with_capacity(2);

    if pt <= 15 {
        out.push(risk(KEY, "Very low playtime"));
    } else if pt <= 45 {
        out.push(risk(KEY, "Low playtime"));
    }

    if pt >= 120 {
        out.push(engagement(KEY, "Very high playtime"));
    } else if pt >= 45 {
        out.push(engagement(KEY, "Moderate playtime"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{NormalizedSignals, PlayerSignals};

    fn run(pt: i64) -> Vec<String> {
        let n = NormalizedSignals::from(&PlayerSignals::new(5, pt, 3, "Mage"));
        evaluate(&RuleContext::new(&n)).into_iter().map(|f| f.text).collect()
    }

    #[test]
    fn bands() {
        assert_eq!(run(0),   vec!["Very low playtime"]);
        assert_eq!(run(15),  vec!["Very low playtime"]);
        assert_eq!(run(16),  vec!["Low playtime"]);
        assert_eq!(run(44),  vec!["Low playtime"]);
        assert_eq!(run(45),  vec!["Low playtime", "Moderate playtime"]);
        assert_eq!(run(119), vec!["Moderate playtime"]);
        assert_eq!(run(120), vec!["Very high playtime"]);
        assert_eq!(run(600), vec!["Very high playtime"]);
    }
}
