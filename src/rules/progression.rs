/// Levels gained over the last seven days.
///
/// Risk:        == 0 "No progression",      else <= 1 "Minimal progression"
/// Engagement:  >= 4 "Strong progression", else >= 2 "Some progression"
use super::{engagement, risk, RuleContext, RuleOutput};

pub const KEY: &str = "progression";

pub fn evaluate(ctx: &RuleContext) -> RuleOutput {
    let lv = ctx.signals.levels;
    let mut out = Vec::with_capacity(1);

    if lv == 0 {
        out.push(risk(KEY, "No progression"));
    } else if lv <= 1 {
        out.push(risk(KEY, "Minimal progression"));
    }

    if lv >= 4 {
        out.push(engagement(KEY, "Strong progression"));
    } else if lv >= 2 {
        out.push(engagement(KEY, "Some progression"));
    }

    out
}
