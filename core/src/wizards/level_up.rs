// stepwise/src/wizards/level_up.rs

//! Step registry for the level-up wizard.

use crate::core::step::StepDescriptor;
use crate::error::StepwiseResult;
use crate::navigation::registry::StepRegistry;

pub mod steps {
  pub const CLASS: &str = "class";
  pub const HIT_POINTS: &str = "hit-points";
  pub const SUBCLASS: &str = "subclass";
  pub const ABILITY_SCORE_IMPROVEMENT: &str = "ability-score-improvement";
  pub const FEAT: &str = "feat";
  pub const SPELLS: &str = "spells";
  pub const FEATURES: &str = "features";
  pub const LANGUAGES: &str = "languages";
  pub const SUMMARY: &str = "summary";
}

/// Standard ability score improvement levels.
pub const DEFAULT_ASI_LEVELS: [u8; 5] = [4, 8, 12, 16, 19];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsiChoice {
  AbilityScores,
  Feat,
}

/// Level-up choices for the class being advanced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpDraft {
  pub class_slug: Option<String>,
  /// Class level before this level-up.
  pub current_class_level: u8,
  pub subclass_level: u8,
  pub has_subclass: bool,
  pub asi_levels: Vec<u8>,
  pub asi_choice: Option<AsiChoice>,
  pub is_spellcaster: bool,
  pub new_spells_known: u8,
  pub feature_choices: u8,
  pub granted_language_choices: u8,
}

impl Default for LevelUpDraft {
  fn default() -> Self {
    Self {
      class_slug: None,
      current_class_level: 0,
      subclass_level: 3,
      has_subclass: false,
      asi_levels: DEFAULT_ASI_LEVELS.to_vec(),
      asi_choice: None,
      is_spellcaster: false,
      new_spells_known: 0,
      feature_choices: 0,
      granted_language_choices: 0,
    }
  }
}

impl LevelUpDraft {
  /// Class level after this level-up.
  pub fn new_class_level(&self) -> u8 {
    self.current_class_level.saturating_add(1)
  }

  fn picks_subclass(&self) -> bool {
    !self.has_subclass && self.new_class_level() == self.subclass_level
  }

  fn gains_asi(&self) -> bool {
    self.asi_levels.contains(&self.new_class_level())
  }

  fn takes_feat(&self) -> bool {
    self.gains_asi() && self.asi_choice == Some(AsiChoice::Feat)
  }
}

/// Builds the level-up wizard's registry.
pub fn registry() -> StepwiseResult<StepRegistry<LevelUpDraft>> {
  StepRegistry::new(vec![
    StepDescriptor::new(steps::CLASS, "Class", "shield"),
    StepDescriptor::new(steps::HIT_POINTS, "Hit Points", "heart"),
    StepDescriptor::new(steps::SUBCLASS, "Subclass", "git-branch").visible_when(LevelUpDraft::picks_subclass),
    StepDescriptor::new(steps::ABILITY_SCORE_IMPROVEMENT, "Ability Score Improvement", "trending-up")
      .visible_when(LevelUpDraft::gains_asi),
    StepDescriptor::new(steps::FEAT, "Feat", "star").visible_when(LevelUpDraft::takes_feat),
    StepDescriptor::new(steps::SPELLS, "Spells", "zap")
      .visible_when(|d: &LevelUpDraft| d.is_spellcaster)
      .skip_when(|d: &LevelUpDraft| d.new_spells_known == 0),
    StepDescriptor::new(steps::FEATURES, "Features", "layers").skip_when(|d: &LevelUpDraft| d.feature_choices == 0),
    StepDescriptor::new(steps::LANGUAGES, "Languages", "message-circle")
      .visible_when(|d: &LevelUpDraft| d.granted_language_choices > 0),
    StepDescriptor::new(steps::SUMMARY, "Summary", "clipboard"),
  ])
}
