use std::{collections::BTreeMap, time::Duration};

use thiserror::Error;

use crate::content::{skill_key, SkillGroup};

/// Delay between mount and the progress bars filling up.
pub const REVEAL_DELAY: Duration = Duration::from_millis(500);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("no progress value for skill {0:?}")]
    UnknownSkill(String),
    #[error("skills {first:?} and {second:?} share the progress key {key:?}")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },
    #[error("skill {name:?} has level {level}, expected at most 100")]
    LevelOutOfRange { name: String, level: u8 },
}

/// Displayed progress per skill. Targets come straight from the skill registry,
/// so every registered skill has exactly one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillProgress {
    targets: BTreeMap<String, (&'static str, u8)>,
    revealed: bool,
}

impl SkillProgress {
    pub fn from_registry(groups: &[SkillGroup]) -> Result<Self, ProgressError> {
        let mut targets = BTreeMap::new();
        for skill in groups.iter().flat_map(|g| g.skills.iter()) {
            if skill.level > 100 {
                return Err(ProgressError::LevelOutOfRange {
                    name: skill.name.to_string(),
                    level: skill.level,
                });
            }
            if let Some((first, _)) = targets.insert(skill.key(), (skill.name, skill.level)) {
                return Err(ProgressError::DuplicateKey {
                    key: skill.key(),
                    first: first.to_string(),
                    second: skill.name.to_string(),
                });
            }
        }
        Ok(Self {
            targets,
            revealed: false,
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Set every value to its target at once. Returns false if already revealed.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    /// Current value for a skill by display name: 0 before the reveal, the target after.
    pub fn value(&self, name: &str) -> Result<u8, ProgressError> {
        let (_, target) = self
            .targets
            .get(&skill_key(name))
            .ok_or_else(|| ProgressError::UnknownSkill(name.to_string()))?;
        Ok(if self.revealed { *target } else { 0 })
    }

    /// All current values keyed by progress key, in key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        let revealed = self.revealed;
        self.targets
            .iter()
            .map(move |(key, (_, target))| (key.as_str(), if revealed { *target } else { 0 }))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
