// stepwise/src/wizards/creation.rs

//! Step registry for the character-creation wizard.

use crate::core::step::StepDescriptor;
use crate::error::StepwiseResult;
use crate::navigation::registry::StepRegistry;

/// Route-stable step names of the creation wizard.
pub mod steps {
  pub const SOURCES: &str = "sources";
  pub const RACE: &str = "race";
  pub const SUBRACE: &str = "subrace";
  pub const SIZE: &str = "size";
  pub const CLASS: &str = "class";
  pub const SUBCLASS: &str = "subclass";
  pub const BACKGROUND: &str = "background";
  pub const ABILITY_SCORES: &str = "ability-scores";
  pub const FEATS: &str = "feats";
  pub const PROFICIENCIES: &str = "proficiencies";
  pub const LANGUAGES: &str = "languages";
  pub const EQUIPMENT: &str = "equipment";
  pub const SPELLS: &str = "spells";
  pub const DETAILS: &str = "details";
  pub const REVIEW: &str = "review";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceChoice {
  pub slug: String,
  pub has_subraces: bool,
  /// Sizes the race lets the player pick from. One or none means no choice.
  pub size_options: Vec<String>,
  pub grants_feat: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassChoice {
  pub slug: String,
  /// Character level at which the class picks its subclass.
  pub subclass_level: u8,
  pub is_spellcaster: bool,
}

/// The in-progress character the creation predicates read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDraft {
  pub starting_level: u8,
  pub selected_sources: Vec<String>,
  pub race: Option<RaceChoice>,
  pub class: Option<ClassChoice>,
  pub background: Option<String>,
  pub pending_proficiency_choices: usize,
  pub pending_language_choices: usize,
  pub pending_feat_choices: usize,
}

impl Default for CreationDraft {
  fn default() -> Self {
    Self {
      starting_level: 1,
      selected_sources: Vec::new(),
      race: None,
      class: None,
      background: None,
      pending_proficiency_choices: 0,
      pending_language_choices: 0,
      pending_feat_choices: 0,
    }
  }
}

impl CreationDraft {
  fn offers_subrace(&self) -> bool {
    self.race.as_ref().is_some_and(|r| r.has_subraces)
  }

  fn offers_size_choice(&self) -> bool {
    self.race.as_ref().is_some_and(|r| r.size_options.len() > 1)
  }

  fn offers_subclass(&self) -> bool {
    self
      .class
      .as_ref()
      .is_some_and(|c| c.subclass_level > 0 && c.subclass_level <= self.starting_level)
  }

  fn offers_feat(&self) -> bool {
    self.pending_feat_choices > 0 || self.race.as_ref().is_some_and(|r| r.grants_feat)
  }

  fn casts_spells(&self) -> bool {
    self.class.as_ref().is_some_and(|c| c.is_spellcaster)
  }
}

/// Builds the creation wizard's registry.
pub fn registry() -> StepwiseResult<StepRegistry<CreationDraft>> {
  StepRegistry::new(vec![
    StepDescriptor::new(steps::SOURCES, "Sources", "book"),
    StepDescriptor::new(steps::RACE, "Race", "user"),
    StepDescriptor::new(steps::SUBRACE, "Subrace", "users").visible_when(CreationDraft::offers_subrace),
    StepDescriptor::new(steps::SIZE, "Size", "ruler").visible_when(CreationDraft::offers_size_choice),
    StepDescriptor::new(steps::CLASS, "Class", "shield"),
    StepDescriptor::new(steps::SUBCLASS, "Subclass", "git-branch").visible_when(CreationDraft::offers_subclass),
    StepDescriptor::new(steps::BACKGROUND, "Background", "map"),
    StepDescriptor::new(steps::ABILITY_SCORES, "Ability Scores", "bar-chart"),
    StepDescriptor::new(steps::FEATS, "Feats", "star").visible_when(CreationDraft::offers_feat),
    StepDescriptor::new(steps::PROFICIENCIES, "Proficiencies", "check-square")
      .skip_when(|d: &CreationDraft| d.pending_proficiency_choices == 0),
    StepDescriptor::new(steps::LANGUAGES, "Languages", "message-circle")
      .skip_when(|d: &CreationDraft| d.pending_language_choices == 0),
    StepDescriptor::new(steps::EQUIPMENT, "Equipment", "package"),
    StepDescriptor::new(steps::SPELLS, "Spells", "zap").visible_when(CreationDraft::casts_spells),
    StepDescriptor::new(steps::DETAILS, "Details", "edit"),
    StepDescriptor::new(steps::REVIEW, "Review", "clipboard"),
  ])
}
