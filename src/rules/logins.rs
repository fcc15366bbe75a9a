/// Login frequency over the last week.
///
/// Risk:        <= 2 "Very low logins", else <= 4 "Below-average logins"
/// Engagement:  >= 6 "High logins",     else == 5 "Moderate logins"
use super::{engagement, risk, RuleContext, RuleOutput};

pub const KEY: &str = "logins";

pub fn evaluate(ctx: &RuleContext) -> RuleOutput {
    let lf = ctx.signals.logins;
    let mut out = Vec::with_capacity(1);

    if lf <= 2 {
        out.push(risk(KEY, "Very low logins"));
    } else if lf <= 4 {
        out.push(risk(KEY, "Below-average logins"));
    }

    if lf >= 6 {
        out.push(engagement(KEY, "High logins"));
    } else if lf == 5 {
        out.push(engagement(KEY, "Moderate logins"));
    }

    out
}
