/// Class interaction factor.
///
/// Volatile classes (Rogue, Necromancer) flag a risk when any signal is weak.
/// Steady classes (Warrior, Healer) flag engagement when all signals are healthy.
/// The same conditions drive the +/-0.05 score adjustment in the engine.
use super::{engagement, risk, RuleContext, RuleOutput};
use crate::classes::ClassGroup;

pub const KEY: &str = "class_engagement";

pub fn evaluate(ctx: &RuleContext) -> RuleOutput {
    let s = ctx.signals;
    match ctx.group {
        ClassGroup::Volatile if s.low_engagement() => {
            vec![risk(KEY, format!("Class {} with low engagement", s.class))]
        }
        ClassGroup::Steady if s.high_engagement() => {
            vec![engagement(KEY, format!("Class {} with strong engagement", s.class))]
        }
        _ => vec![],
    }
}
