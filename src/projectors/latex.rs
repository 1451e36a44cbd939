use serde::{Deserialize, Serialize};

use crate::{node::{InputSlot, Node}, project::Projector};

/// Options for [LatexCompiler].
#[derive(PartialEq, Eq, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LatexSettings {
    /// The character authors type for multiplication in text nodes.
    pub multiplication_sign: char,

    /// What `multiplication_sign` is rewritten to. The trailing space stops the command running
    /// into a following letter.
    pub times_token: String,

    /// Placed around an equation's override markup.
    pub display_open: String,
    pub display_close: String,

    /// Emitted in place of rich content, which is rendered elsewhere.
    pub rich_placeholder: String,
}

impl Default for LatexSettings {
    fn default() -> Self {
        Self {
            multiplication_sign: '*',
            times_token: "\\times ".into(),
            display_open: "\\[".into(),
            display_close: "\\]".into(),
            rich_placeholder: "\\text{[rich]}".into(),
        }
    }
}

/// Compiles node trees into LaTeX for an external math typesetter.
///
/// Override markup is honoured: a fraction, exponent or algebraic node with markup compiles to
/// exactly that markup, and an equation compiles to its markup between display delimiters.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct LatexCompiler {
    pub settings: LatexSettings,
}

impl LatexCompiler {
    pub fn new(settings: LatexSettings) -> Self {
        Self { settings }
    }
}

/// Escapes characters which are special inside `\text{...}`.
fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash{}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '^' => result.push_str("\\textasciicircum{}"),
            '{' | '}' | '$' | '&' | '#' | '_' | '%' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

impl Projector for LatexCompiler {
    fn name(&self) -> &'static str {
        "latex"
    }

    fn text(&self, content: &str) -> String {
        content.replace(self.settings.multiplication_sign, &self.settings.times_token)
    }

    fn decimal(&self, content: &str) -> String {
        content.to_string()
    }

    fn fraction(&self, numerator: &Node, denominator: &Node, markup: Option<&str>) -> String {
        match markup {
            Some(markup) => markup.to_string(),
            None => format!("\\frac{{{}}}{{{}}}", self.project(numerator), self.project(denominator)),
        }
    }

    fn exponent(&self, base: &Node, exponent: &Node, markup: Option<&str>) -> String {
        match markup {
            Some(markup) => markup.to_string(),
            None => format!("{{{}}}^{{{}}}", self.project(base), self.project(exponent)),
        }
    }

    fn algebraic(&self, children: &[Node], markup: Option<&str>) -> String {
        match markup {
            Some(markup) => markup.to_string(),
            None => self.project_all(children),
        }
    }

    fn equation(&self, children: &[Node], markup: Option<&str>) -> String {
        match markup {
            Some(markup) => format!("{}{}{}", self.settings.display_open, markup, self.settings.display_close),
            None => self.project_all(children),
        }
    }

    fn input(&self, slot: &InputSlot) -> String {
        format!("\\boxed{{\\text{{{}}}}}", escape_text(&slot.id))
    }

    fn rich(&self, _payload: &str) -> String {
        self.settings.rich_placeholder.clone()
    }

    fn join(&self, fragments: Vec<String>) -> String {
        fragments.concat()
    }
}

/// Compiles a node to LaTeX with the default settings.
pub fn to_latex(node: &Node) -> String {
    LatexCompiler::default().project(node)
}
