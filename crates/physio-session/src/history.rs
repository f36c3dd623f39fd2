//! Answer history → structured intake.
//!
//! This is the boundary where free-text answers become typed values. Every
//! yes/no goes through the tri-state `Answer`, multi-select answers are
//! split on commas, and numeric sliders are read the way a lenient form
//! parser would (leading digits only, so `"7 - severe"` is 7).

use physio_core::models::history::HistoryEntry;
use physio_core::models::intake::{Intake, SubRecord};
use serde_json::{json, Value};

use crate::error::SessionError;

/// `(answer id, symptom)` pairs added to the pain red-flag symptoms on yes.
const SYMPTOM_ANSWERS: &[(&str, &str)] = &[
    ("neuro_numb", "Numbness"),
    ("neuro_weak_foc", "Focal Weakness"),
    ("vis_blur", "Blurred Vision"),
];

/// `(answer id, key)` pairs set on the stress record on yes.
const STRESS_ANSWERS: &[(&str, &str)] = &[
    ("m_fear", "fear_movement"),
    ("ros_malaise", "malaise"),
    ("psy_dep", "depression_screen"),
    ("psy_anx", "anxiety_screen"),
    ("psy_anger", "irritability"),
    ("psy_withdraw", "social_withdrawal"),
];

/// `(answer id, risk factor)` pairs appended to the cardio record on yes.
const CARDIO_ANSWERS: &[(&str, &str)] = &[
    ("ch_bp", "Hypertension"),
    ("ch_palp", "Palpitations"),
    ("hab_smoke", "Smoking"),
];

/// `hist_` answer suffixes whose history key differs from the suffix.
const HISTORY_KEYS: &[(&str, &str)] = &[
    ("cancer", "history_cancer"),
    ("trauma", "trauma_history"),
    ("steroids", "steroid_use"),
    ("surgery", "recent_surgery"),
    ("ivdu", "iv_drug_use"),
];

/// Parse a JSON answer history (an array of `{id, answer, text?}`).
pub fn parse_history(value: Value) -> Result<Vec<HistoryEntry>, SessionError> {
    if !value.is_array() {
        return Err(SessionError::MalformedHistory(
            "history must be a JSON array".to_string(),
        ));
    }
    let history: Vec<HistoryEntry> = serde_json::from_value(value)?;
    if let Some(position) = history.iter().position(|h| h.id.trim().is_empty()) {
        return Err(SessionError::MalformedHistory(format!(
            "entry {position} has an empty id"
        )));
    }
    Ok(history)
}

/// Build the intake the doctor consumes from the answers given so far.
///
/// Unrecognised ids are ignored. Later answers to the same slider win;
/// pain intensity keeps the worst of rest and movement.
pub fn map_history_to_intake(history: &[HistoryEntry]) -> Intake {
    let mut intake = Intake::default();

    for entry in history {
        let id = entry.id.as_str();
        let text = entry.answer_text();
        let number = leading_number(&text);
        let answer = entry.as_answer();
        let yes = answer.is_yes();

        match id {
            "age" | "start_age" => {
                if let Some(age) = number.filter(|n| *n >= 0.0) {
                    intake.profile.age = Some(age as u32);
                }
            }
            "sex" => intake.profile.sex = Some(text.to_lowercase()).filter(|s| !s.is_empty()),

            "p_loc" | "pain_location" => intake.pain.locations.extend(split_multi(&text)),
            "p_qual" | "pain_quality" => intake.pain.quality.extend(split_multi(&text)),
            "aggravators" => intake.pain.aggravators.extend(split_multi(&text)),
            "p_int_rest" | "p_int_move" | "pain_level" => {
                if let Some(level) = number {
                    intake.pain.pain_level = intake.pain.pain_level.max(level.clamp(0.0, 10.0));
                }
            }
            "p_trig_sit" if yes => intake.pain.aggravators.push("sitting".to_string()),
            "p_trig_stand" if yes => intake.pain.aggravators.push("standing".to_string()),
            "p_trig_walk" if yes => intake.pain.aggravators.push("walking".to_string()),

            // Rating sliders are 0-10; limitation and risk invert.
            "m_rate" => set_score(&mut intake.mobility, number.map(|n| (10.0 - n) * 10.0)),
            "s_qual" => set_score(&mut intake.sleep, number.map(|n| n * 10.0)),
            "c_rate" => set_score(&mut intake.cardio, number.map(|n| n * 10.0)),
            "st_rate" => set_score(&mut intake.strength, number.map(|n| n * 10.0)),
            "n_rate" => set_score(&mut intake.nutrition, number.map(|n| n * 10.0)),
            "e_risk" => set_score(&mut intake.ergo, number.map(|n| (10.0 - n) * 10.0)),
            "str_lvl" => {
                if let Some(level) = number {
                    intake.stress.insert("stress_level", json!(level.clamp(0.0, 10.0)));
                }
            }
            "s_dur" => {
                if let Some(hours) = sleep_hours(&text) {
                    intake.sleep.insert("hours", json!(hours));
                }
            }

            "vis_strain" if yes => intake.ergo.insert("eye_strain", json!(true)),
            "gi_bloat" if yes => intake.nutrition.insert("bloating", json!(true)),

            _ => {}
        }

        if let Some((_, symptom)) = SYMPTOM_ANSWERS.iter().find(|(key, _)| *key == id)
            && yes
        {
            intake.pain.red_flags_symptoms.push(symptom.to_string());
        }
        if let Some((_, key)) = STRESS_ANSWERS.iter().find(|(k, _)| *k == id)
            && yes
        {
            intake.stress.insert(*key, json!(true));
        }
        if let Some((_, factor)) = CARDIO_ANSWERS.iter().find(|(k, _)| *k == id)
            && yes
        {
            push_tag(&mut intake.cardio, "risk_factors", factor);
        }

        if id.starts_with("ros_") || id.starts_with("rf_") {
            intake.ros.insert(id.to_string(), answer);
        } else if let Some(suffix) = id.strip_prefix("hist_") {
            let key = HISTORY_KEYS
                .iter()
                .find(|(s, _)| *s == suffix)
                .map(|(_, key)| *key)
                .unwrap_or(suffix);
            intake.history.insert(key, json!(answer.as_str()));
        }
    }

    intake
}

fn set_score(record: &mut SubRecord, score: Option<f64>) {
    if let Some(score) = score {
        record.insert("score", json!(score.clamp(0.0, 100.0)));
    }
}

fn push_tag(record: &mut SubRecord, key: &str, tag: &str) {
    let entry = record
        .0
        .entry(key.to_string())
        .or_insert_with(|| Value::Array(Vec::new()));
    match entry {
        Value::Array(items) => items.push(json!(tag)),
        other => *other = json!([tag]),
    }
}

/// Split a multi-select answer on commas, dropping blanks.
fn split_multi(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leading integer of `text`, ignoring what follows (`"7/10"` is 7).
fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && *c == '-')))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse::<i64>().ok().map(|n| n as f64)
}

/// Hours for the sleep-duration choice buckets.
fn sleep_hours(text: &str) -> Option<f64> {
    let text = text.replace(' ', "");
    if text.contains("<5") {
        Some(4.0)
    } else if text.contains("5-7") {
        Some(6.0)
    } else if text.contains("7-9") {
        Some(8.0)
    } else if text.contains(">9") || text.contains("9+") {
        Some(10.0)
    } else {
        leading_number(&text)
    }
}

#[cfg(test)]
mod tests {
    use physio_core::models::answer::Answer;

    use super::*;

    #[test]
    fn leading_number_reads_like_a_form_parser() {
        assert_eq!(leading_number("7"), Some(7.0));
        assert_eq!(leading_number(" 7 - severe"), Some(7.0));
        assert_eq!(leading_number("7/10"), Some(7.0));
        assert_eq!(leading_number("-3"), Some(-3.0));
        assert_eq!(leading_number("seven"), None);
        assert_eq!(leading_number(""), None);
    }

    #[test]
    fn sleep_buckets() {
        assert_eq!(sleep_hours("< 5 hours"), Some(4.0));
        assert_eq!(sleep_hours("5-7 hours"), Some(6.0));
        assert_eq!(sleep_hours("7-9 hours"), Some(8.0));
        assert_eq!(sleep_hours("9+ hours"), Some(10.0));
        assert_eq!(sleep_hours("not sure"), None);
    }

    #[test]
    fn unknown_answers_stay_unknown() {
        let intake = map_history_to_intake(&[HistoryEntry::new("ros_fever", "maybe")]);
        assert_eq!(intake.ros.get("ros_fever"), Some(&Answer::Unknown));
    }
}
