use serde::{Deserialize, Serialize};

use crate::{node::{InputSlot, Node}, project::Projector};

/// Options for [SpeechLinearizer]. The defaults are English.
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Spoken between a numerator and denominator.
    pub over: String,

    /// Spoken between a base and its exponent.
    pub to_the_power: String,

    /// Spoken in place of an answer slot.
    pub input: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            over: "over".into(),
            to_the_power: "to the power".into(),
            input: "input".into(),
        }
    }
}

/// Linearizes node trees into plain text for a speech engine.
///
/// Unlike [LatexCompiler](super::LatexCompiler), this never reads override markup: it always
/// walks the structural children, so what is read out is built from the same nodes that are
/// graded. A structural node with markup but no children is therefore silent.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct SpeechLinearizer {
    pub settings: SpeechSettings,
}

impl SpeechLinearizer {
    pub fn new(settings: SpeechSettings) -> Self {
        Self { settings }
    }
}

/// Removes markup tags from a rich payload, leaving the text a reader would see. Tags become word
/// breaks, a handful of common entities are decoded, and whitespace is collapsed.
///
/// As in HTML, a `<` only opens a tag when a letter, `/`, `!` or `?` follows it. Any other `<`,
/// as in `x < 5`, is read as text.
pub fn strip_tags(payload: &str) -> String {
    let mut text = String::with_capacity(payload.len());
    let mut in_tag = false;
    let mut chars = payload.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '<' if !in_tag && chars.peek().map_or(false, |&next| opens_tag(next)) => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => (),
        }
    }

    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&");

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn opens_tag(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?')
}

impl Projector for SpeechLinearizer {
    fn name(&self) -> &'static str {
        "speech"
    }

    fn text(&self, content: &str) -> String {
        content.to_string()
    }

    fn decimal(&self, content: &str) -> String {
        content.to_string()
    }

    fn fraction(&self, numerator: &Node, denominator: &Node, _markup: Option<&str>) -> String {
        self.join(vec![
            self.project(numerator),
            self.settings.over.clone(),
            self.project(denominator),
        ])
    }

    fn exponent(&self, base: &Node, exponent: &Node, _markup: Option<&str>) -> String {
        self.join(vec![
            self.project(base),
            self.settings.to_the_power.clone(),
            self.project(exponent),
        ])
    }

    fn algebraic(&self, children: &[Node], _markup: Option<&str>) -> String {
        self.project_all(children)
    }

    fn equation(&self, children: &[Node], _markup: Option<&str>) -> String {
        self.project_all(children)
    }

    fn input(&self, _slot: &InputSlot) -> String {
        self.settings.input.clone()
    }

    fn rich(&self, payload: &str) -> String {
        strip_tags(payload)
    }

    /// Joins fragments with single spaces, dropping fragments which are empty or only whitespace
    /// so that silent nodes do not leave gaps.
    fn join(&self, fragments: Vec<String>) -> String {
        fragments
            .iter()
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Linearizes a node to speech text with the default settings.
pub fn to_speech_text(node: &Node) -> String {
    SpeechLinearizer::default().project(node)
}
