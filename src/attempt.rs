//! One user's attempt at one document: the answer set and its lifecycle.
//!
//! An attempt starts with no answers. Answers are recorded as the user edits input slots, until
//! the attempt is submitted; from then on the answers are read-only. If the document is replaced,
//! the answers belonged to the old document and are discarded.

use log::debug;

use crate::{
    error::AttemptError,
    node::Document,
    score::{grade, score_with, AnswerSet, Score, ScoringSettings, Verdict},
};

#[derive(Debug, Clone)]
pub struct Attempt {
    document: Document,
    answers: AnswerSet,
    settings: ScoringSettings,
    submitted: bool,
}

impl Attempt {
    pub fn new(document: Document) -> Self {
        Self::with_settings(document, ScoringSettings::default())
    }

    pub fn with_settings(document: Document, settings: ScoringSettings) -> Self {
        Self { document, answers: AnswerSet::new(), settings, submitted: false }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Records the current value of an input slot.
    pub fn answer(&mut self, id: &str, value: impl Into<String>) -> Result<(), AttemptError> {
        self.check_editable(id)?;
        self.answers.set(id, value);
        Ok(())
    }

    /// Clears the value of an input slot, returning what it was.
    pub fn clear(&mut self, id: &str) -> Result<Option<String>, AttemptError> {
        self.check_editable(id)?;
        Ok(self.answers.remove(id))
    }

    fn check_editable(&self, id: &str) -> Result<(), AttemptError> {
        if self.submitted {
            return Err(AttemptError::AlreadyScored);
        }
        if self.document.input(id).is_none() {
            return Err(AttemptError::UnknownInput(id.to_string()));
        }
        Ok(())
    }

    /// Scores the attempt and makes the answers read-only. Submitting again gives the same score.
    pub fn submit(&mut self) -> Score {
        self.submitted = true;
        score_with(&self.document, &self.answers, &self.settings)
    }

    /// The per-slot grading of the current answers, in canonical order.
    pub fn verdicts(&self) -> Vec<Verdict<'_>> {
        grade(&self.document, &self.answers, &self.settings)
    }

    /// The input id which should receive focus after `current`, following canonical order. With
    /// no current slot, this is the first slot. Returns `None` after the last slot.
    pub fn next_focus(&self, current: Option<&str>) -> Option<&str> {
        let order = self.document.focus_order();
        match current {
            None => order.first().copied(),
            Some(current) => {
                let position = order.iter().position(|id| *id == current)?;
                order.get(position + 1).copied()
            }
        }
    }

    /// Moves this attempt onto a new document. Unless it is the same snapshot, the old answers
    /// are discarded and the attempt becomes editable again.
    pub fn replace_document(&mut self, document: Document) {
        if self.document.same_snapshot(&document) {
            return;
        }

        debug!("document replaced; discarding {} answer(s)", self.answers.len());
        self.document = document;
        self.answers = AnswerSet::new();
        self.submitted = false;
    }
}
