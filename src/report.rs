/// JSON-lines in, JSON-lines out.
///
/// Input: one `PlayerSignals` object per line, e.g.
///   {"login_frequency_per_week":7,"avg_daily_playtime_minutes":90,"levels_gained_last_7d":4,"character_class":"Warrior"}
///
/// Output: one `Prediction` per input record, in input order. Blank input
/// lines are skipped. A line that fails to parse stops the batch with the
/// 1-based line number; nothing is guessed for it.
use crate::{
    engine::{self, Prediction},
    error::{Result, ScorerError},
    signals::PlayerSignals,
};
use serde::Serialize;
use std::io::{BufRead, Write};

/// The three reference players printed when the binary runs without input.
pub fn example_signals() -> Vec<PlayerSignals> {
    vec![
        PlayerSignals::new(0, 0, 0, "Warrior"),
        PlayerSignals::new(7, 90, 4, "Warrior"),
        PlayerSignals::new(2, 40, 2, "Necromancer"),
    ]
}

pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}

/// Print one compact prediction line per example.
pub fn write_examples<W: Write>(writer: &mut W) -> Result<()> {
    for signals in example_signals() {
        write_json(writer, &engine::predict(&signals), false)?;
    }
    writer.flush()?;
    Ok(())
}

/// Score every record from `reader`. Returns the number of records scored.
pub fn score_lines<R: BufRead, W: Write>(reader: R, writer: &mut W, pretty: bool) -> Result<usize> {
    let mut scored = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let signals: PlayerSignals = serde_json::from_str(trimmed)
            .map_err(|source| ScorerError::InvalidRecord { line: idx + 1, source })?;

        let prediction: Prediction = engine::predict(&signals);
        write_json(writer, &prediction, pretty)?;
        scored += 1;
    }

    writer.flush()?;
    tracing::info!("Scored {} player record(s)", scored);
    Ok(scored)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn examples_print_one_line_each() {
        let mut out = Vec::new();
        write_examples(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"quit_next_5d":"Y","probability":1.0,"factors":["Very low logins","Very low playtime","No progression"]}"#,
                r#"{"quit_next_5d":"N","probability":0.46,"factors":["High logins","Moderate playtime","Strong progression","Class Warrior with strong engagement"]}"#,
                r#"{"quit_next_5d":"Y","probability":0.86,"factors":["Very low logins","Low playtime","Class Necromancer with low engagement"]}"#,
            ]
        );
    }

    #[test]
    fn scores_records_in_order_and_skips_blanks() {
        let input = concat!(
            r#"{"login_frequency_per_week":7,"avg_daily_playtime_minutes":90,"levels_gained_last_7d":4,"character_class":"Warrior"}"#, "\n",
            "\n",
            "   \n",
            r#"{"login_frequency_per_week":-3,"avg_daily_playtime_minutes":0,"levels_gained_last_7d":0}"#, "\n",
        );
        let mut out = Vec::new();
        let n = score_lines(Cursor::new(input), &mut out, false).unwrap();
        assert_eq!(n, 2);

        let preds: Vec<Prediction> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(preds[0].probability, 0.46);
        assert_eq!(preds[1].probability, 1.0);
        assert_eq!(preds[1].factors, vec!["Very low logins", "Very low playtime", "No progression"]);
    }

    #[test]
    fn reports_line_number_of_bad_record() {
        let input = concat!(
            r#"{"login_frequency_per_week":7,"avg_daily_playtime_minutes":90,"levels_gained_last_7d":4}"#, "\n",
            "\n",
            r#"{"login_frequency_per_week":"seven"}"#, "\n",
        );
        let mut out = Vec::new();
        let err = score_lines(Cursor::new(input), &mut out, false).unwrap_err();
        match err {
            ScorerError::InvalidRecord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {}", other),
        }
        // The good record before it was still written
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn pretty_output_spans_lines() {
        let input = r#"{"login_frequency_per_week":2,"avg_daily_playtime_minutes":40,"levels_gained_last_7d":2,"character_class":"Necromancer"}"#;
        let mut out = Vec::new();
        score_lines(Cursor::new(input), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().count() > 1);
        let back: Prediction = serde_json::from_str(&text).unwrap();
        assert_eq!(back.probability, 0.86);
    }
}
