//! Configuration for every interpreter, loadable from JSON. Any field left out takes its default.
//!
//! ```
//! # use quizexpr::settings::Settings;
//! let settings = Settings::from_json(r#"{ "scoring": { "numeric_equivalence": true } }"#).unwrap();
//! assert!(settings.scoring.numeric_equivalence);
//! assert_eq!(settings.speech.over, "over");
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::SettingsError,
    projectors::{LatexCompiler, LatexSettings, SpeechLinearizer, SpeechSettings},
    score::ScoringSettings,
};

#[derive(PartialEq, Eq, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub latex: LatexSettings,
    pub speech: SpeechSettings,
    pub scoring: ScoringSettings,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Settings, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn latex_compiler(&self) -> LatexCompiler {
        LatexCompiler::new(self.latex.clone())
    }

    pub fn speech_linearizer(&self) -> SpeechLinearizer {
        SpeechLinearizer::new(self.speech.clone())
    }
}
