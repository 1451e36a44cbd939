//! Grading submitted answers against a document's answer slots.
//!
//! Scoring is a pure projection of a (document, answer set) pair. Nothing is recorded; calling
//! [score] twice with the same inputs gives the same result.

use std::collections::{btree_map, BTreeMap};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{flatten::Flattenable, node::{Document, InputSlot}, number::Number};

/// Submitted answers, keyed by input id. An answer set belongs to one document; see
/// [Attempt](crate::attempt::Attempt) for the lifecycle.
#[derive(PartialEq, Eq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous answer for the same id.
    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.answers.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.answers.remove(id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.answers.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (id, value) in iter {
            answers.set(id, value);
        }
        answers
    }
}

/// Options for grading.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// If true, an answer which reads as the same number as the expected answer is correct even
    /// if it is written differently, e.g. `0.5` for `1/2`. Answers which aren't numbers are
    /// still compared as strings.
    pub numeric_equivalence: bool,
}

/// The result of grading a whole document.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,

    /// `100 * correct / total`, rounded half away from zero. `0` when there is nothing to grade.
    pub percentage: u32,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            // Integer form of round(100 * correct / total)
            ((200 * correct + total) / (2 * total)) as u32
        };

        Self { correct, total, percentage }
    }

    /// Returns true if there was nothing to grade. Whether such a document counts as passed is
    /// up to the caller.
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    /// Returns true if every answer slot was answered correctly, and there was at least one.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

/// How one answer slot was graded.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Verdict<'a> {
    pub slot: &'a InputSlot,

    /// The submitted answer, or `None` if the slot was left unanswered.
    pub submitted: Option<&'a str>,

    pub correct: bool,
}

/// Compares one submitted answer with the expected answer. Surrounding whitespace is ignored on
/// both sides; otherwise the comparison is exact and case-sensitive, unless numeric equivalence
/// is enabled and both sides are numbers.
pub fn answer_matches(submitted: &str, expected: &str, settings: &ScoringSettings) -> bool {
    let (submitted, expected) = (submitted.trim(), expected.trim());
    if submitted == expected {
        return true;
    }

    if settings.numeric_equivalence {
        if let (Some(s), Some(e)) = (Number::parse(submitted), Number::parse(expected)) {
            return s.equivalent(&e);
        }
    }

    false
}

/// Grades every answer slot of a document, in canonical order. Unanswered slots are wrong.
pub fn grade<'a>(document: &'a Document, answers: &'a AnswerSet, settings: &ScoringSettings) -> Vec<Verdict<'a>> {
    document
        .collect_inputs()
        .into_iter()
        .map(|slot| {
            let submitted = answers.get(&slot.id);
            Verdict {
                slot,
                submitted,
                correct: submitted.map_or(false, |s| answer_matches(s, &slot.expected, settings)),
            }
        })
        .collect()
}

/// Scores a document with the given settings.
pub fn score_with(document: &Document, answers: &AnswerSet, settings: &ScoringSettings) -> Score {
    let verdicts = grade(document, answers, settings);
    let correct = verdicts.iter().filter(|v| v.correct).count();
    let score = Score::new(correct, verdicts.len());
    trace!("scored {}/{} ({}%)", score.correct, score.total, score.percentage);
    score
}

/// Scores a document with exact, case-sensitive comparison.
pub fn score(document: &Document, answers: &AnswerSet) -> Score {
    score_with(document, answers, &ScoringSettings::default())
}
