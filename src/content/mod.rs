//! Content pack module
//!
//! Holds the question sets and the lesson card for one topic. A pack is
//! either the built-in one or loaded from a TOML or JSON file named in the
//! configuration.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::{Lesson, Question};
use crate::{QuizFlowError, Result};

mod builtin;

/// Everything the flow displays for one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPack {
    /// Questions of the placement quiz
    pub placement: Vec<Question>,
    /// Lesson card shown after the level-up screen
    pub lesson: Lesson,
    /// Questions of the practice quiz
    pub practice: Vec<Question>,
}

impl Default for ContentPack {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentPack {
    /// The pack compiled into the binary
    pub fn builtin() -> Self {
        Self {
            placement: builtin::placement_questions(),
            lesson: builtin::lesson(),
            practice: builtin::practice_questions(),
        }
    }

    /// Load a pack from disk; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| QuizFlowError::ContentError(
                format!("Failed to read content pack {}: {}", path.display(), e)
            ))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let pack: Self = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)
                .map_err(|e| QuizFlowError::ContentError(
                    format!("Failed to parse content pack {}: {}", path.display(), e)
                ))?
        };

        pack.validate()?;
        log::info!(
            "loaded content pack {} ({} placement, {} practice questions)",
            path.display(),
            pack.placement.len(),
            pack.practice.len()
        );
        Ok(pack)
    }

    /// Validate every question and the lesson
    pub fn validate(&self) -> Result<()> {
        if self.placement.is_empty() {
            return Err(QuizFlowError::ContentError(
                "Placement quiz needs at least one question".to_string()
            ));
        }
        if self.practice.is_empty() {
            return Err(QuizFlowError::ContentError(
                "Practice quiz needs at least one question".to_string()
            ));
        }

        for question in self.placement.iter().chain(self.practice.iter()) {
            question.validate()?;
        }
        self.lesson.validate()
    }

    /// Placement questions as a shared, immutable list
    pub fn placement_questions(&self) -> Arc<[Question]> {
        self.placement.clone().into()
    }

    /// Practice questions as a shared, immutable list
    pub fn practice_questions(&self) -> Arc<[Question]> {
        self.practice.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_pack_is_valid() {
        let pack = ContentPack::builtin();
        assert!(pack.validate().is_ok());
        assert_eq!(pack.placement.len(), 3);
        assert_eq!(pack.practice.len(), 3);
    }

    #[test]
    fn test_builtin_keeps_authored_key() {
        let pack = ContentPack::builtin();
        assert_eq!(pack.placement[1].correct, "يقضيها إذا استيقظ");
    }

    #[test]
    fn test_load_toml_pack() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pack.toml");
        fs::write(
            &path,
            r#"
[[placement]]
prompt = "2 + 2"
options = ["3", "4"]
correct = "4"

[[practice]]
prompt = "Capital of France"
options = ["Paris", "Rome", "Oslo"]
correct = "Paris"

[lesson]
title = "Basics"
body = ["One", "Two"]
"#,
        )
        .unwrap();

        let pack = ContentPack::load(&path).unwrap();
        assert_eq!(pack.placement[0].correct, "4");
        assert_eq!(pack.lesson.body.len(), 2);
    }

    #[test]
    fn test_load_json_pack() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pack.json");
        let json = serde_json::to_string(&ContentPack::builtin()).unwrap();
        fs::write(&path, json).unwrap();

        let pack = ContentPack::load(&path).unwrap();
        assert_eq!(pack, ContentPack::builtin());
    }

    #[test]
    fn test_load_rejects_bad_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pack.toml");
        fs::write(
            &path,
            r#"
[[placement]]
prompt = "2 + 2"
options = ["3", "5"]
correct = "4"

[[practice]]
prompt = "x"
options = ["a", "b"]
correct = "a"

[lesson]
title = "Basics"
body = ["One"]
"#,
        )
        .unwrap();

        assert!(matches!(
            ContentPack::load(&path),
            Err(QuizFlowError::ContentError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ContentPack::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(QuizFlowError::ContentError(_))));
    }

    #[test]
    fn test_empty_practice_rejected() {
        let mut pack = ContentPack::builtin();
        pack.practice.clear();
        assert!(pack.validate().is_err());
    }
}
