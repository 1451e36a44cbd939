//! Memoized projections of a document snapshot.
//!
//! Documents are immutable, so everything projected from one stays valid for as long as the
//! snapshot does. [ProjectionCache] keeps the projections for the most recent snapshot and only
//! recomputes them when it is handed a different one.

use crate::{
    layout::{group_spans, Group, GroupSpan},
    node::Document,
    project::Projector,
    projectors::{LatexCompiler, SpeechLinearizer},
    settings::Settings,
};

/// Everything a presentation surface needs to draw one document.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Projection {
    pub groups: Vec<GroupSpan>,

    /// LaTeX for each top-level node, by index.
    pub latex: Vec<String>,

    /// Speech text for each top-level node, by index.
    pub speech: Vec<String>,
}

impl Projection {
    pub fn compute(document: &Document, latex: &LatexCompiler, speech: &SpeechLinearizer) -> Self {
        Self {
            groups: group_spans(document.nodes()),
            latex: document.iter().map(|node| latex.project(node)).collect(),
            speech: document.iter().map(|node| speech.project(node)).collect(),
        }
    }

    /// Resolves the group spans against the document they were computed from.
    pub fn groups<'a>(&self, document: &'a Document) -> Vec<Group<'a>> {
        self.groups.iter().map(|span| span.resolve(document.nodes())).collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectionCache {
    latex: LatexCompiler,
    speech: SpeechLinearizer,
    entry: Option<(Document, Projection)>,
    computed: usize,
}

impl ProjectionCache {
    pub fn new(settings: &Settings) -> Self {
        Self {
            latex: settings.latex_compiler(),
            speech: settings.speech_linearizer(),
            entry: None,
            computed: 0,
        }
    }

    /// Returns the projection of `document`, computing it only if the cache holds a different
    /// snapshot.
    pub fn get(&mut self, document: &Document) -> &Projection {
        if !self.holds(document) {
            self.entry = None;
        }

        let (latex, speech, computed) = (&self.latex, &self.speech, &mut self.computed);
        let (_, projection) = self.entry.get_or_insert_with(|| {
            *computed += 1;
            (document.clone(), Projection::compute(document, latex, speech))
        });
        projection
    }

    /// Returns true if the cache currently holds the projection of this exact snapshot.
    pub fn holds(&self, document: &Document) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached.same_snapshot(document))
    }

    /// How many times a projection has been computed. Useful for checking cache behaviour.
    pub fn computed(&self) -> usize {
        self.computed
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
