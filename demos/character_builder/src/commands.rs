// demos/character_builder/src/commands.rs

//! Console commands and the draft edits they perform.

use crate::errors::{AppError, Result};
use stepwise::wizards::creation::{ClassChoice, CreationDraft, RaceChoice};
use stepwise::wizards::level_up::{AsiChoice, LevelUpDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardKind {
  Create,
  LevelUp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Switch(WizardKind),
  Next,
  Previous,
  GoTo(String),
  Status,
  /// `set <key> <args...>` against the active wizard's draft.
  Set { key: String, args: Vec<String> },
  History,
  Help,
  Quit,
}

pub const HELP: &str = "\
commands:
  wizard create|level-up   switch the active wizard
  next | prev              sequential navigation
  goto <step>              jump to an active step
  status                   show progress and the step list
  history                  show visited locations
  set <key> <args...>      edit the active draft
    create:   race <slug> <has-subraces> [size,size]   class <slug> <subclass-level> <caster>
              level <n>   proficiencies <n>   languages <n>   feats <n>
    level-up: class-level <n>   subclass <bool>   asi scores|feat|none   caster <bool>
              spells <n>   features <n>   languages <n>
  help | quit";

pub fn parse(line: &str) -> Result<Option<Command>> {
  let mut words = line.split_whitespace();
  let Some(head) = words.next() else {
    return Ok(None);
  };
  let rest: Vec<String> = words.map(str::to_string).collect();

  let command = match (head, rest.as_slice()) {
    ("wizard", [kind]) => match kind.as_str() {
      "create" => Command::Switch(WizardKind::Create),
      "level-up" => Command::Switch(WizardKind::LevelUp),
      other => return Err(AppError::Command(format!("unknown wizard '{}'", other))),
    },
    ("next", []) => Command::Next,
    ("prev" | "previous", []) => Command::Previous,
    ("goto", [step]) => Command::GoTo(step.clone()),
    ("status", []) => Command::Status,
    ("history", []) => Command::History,
    ("set", [key, args @ ..]) => Command::Set {
      key: key.clone(),
      args: args.to_vec(),
    },
    ("help", []) => Command::Help,
    ("quit" | "exit", []) => Command::Quit,
    _ => return Err(AppError::Command(line.trim().to_string())),
  };
  Ok(Some(command))
}

fn arg<'a>(args: &'a [String], idx: usize, key: &str) -> Result<&'a str> {
  args
    .get(idx)
    .map(String::as_str)
    .ok_or_else(|| AppError::Command(format!("'set {}' is missing argument {}", key, idx + 1)))
}

fn number<T: std::str::FromStr>(args: &[String], idx: usize, key: &str) -> Result<T> {
  let raw = arg(args, idx, key)?;
  raw
    .parse()
    .map_err(|_| AppError::Command(format!("'{}' is not a valid number for '{}'", raw, key)))
}

fn flag(args: &[String], idx: usize, key: &str) -> Result<bool> {
  let raw = arg(args, idx, key)?;
  raw
    .parse()
    .map_err(|_| AppError::Command(format!("'{}' is not true/false for '{}'", raw, key)))
}

pub fn apply_creation(draft: &mut CreationDraft, key: &str, args: &[String]) -> Result<()> {
  match key {
    "race" => {
      draft.race = Some(RaceChoice {
        slug: arg(args, 0, key)?.to_string(),
        has_subraces: flag(args, 1, key)?,
        size_options: args
          .get(2)
          .map(|sizes| sizes.split(',').map(str::to_string).collect())
          .unwrap_or_default(),
        grants_feat: false,
      });
    }
    "class" => {
      draft.class = Some(ClassChoice {
        slug: arg(args, 0, key)?.to_string(),
        subclass_level: number(args, 1, key)?,
        is_spellcaster: flag(args, 2, key)?,
      });
    }
    "level" => draft.starting_level = number(args, 0, key)?,
    "proficiencies" => draft.pending_proficiency_choices = number(args, 0, key)?,
    "languages" => draft.pending_language_choices = number(args, 0, key)?,
    "feats" => draft.pending_feat_choices = number(args, 0, key)?,
    other => return Err(AppError::Command(format!("unknown creation field '{}'", other))),
  }
  Ok(())
}

pub fn apply_level_up(draft: &mut LevelUpDraft, key: &str, args: &[String]) -> Result<()> {
  match key {
    "class-level" => draft.current_class_level = number(args, 0, key)?,
    "subclass" => draft.has_subclass = flag(args, 0, key)?,
    "asi" => {
      draft.asi_choice = match arg(args, 0, key)? {
        "scores" => Some(AsiChoice::AbilityScores),
        "feat" => Some(AsiChoice::Feat),
        "none" => None,
        other => return Err(AppError::Command(format!("unknown ASI choice '{}'", other))),
      }
    }
    "caster" => draft.is_spellcaster = flag(args, 0, key)?,
    "spells" => draft.new_spells_known = number(args, 0, key)?,
    "features" => draft.feature_choices = number(args, 0, key)?,
    "languages" => draft.granted_language_choices = number(args, 0, key)?,
    other => return Err(AppError::Command(format!("unknown level-up field '{}'", other))),
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_navigation_commands() {
    assert_eq!(parse("next").unwrap(), Some(Command::Next));
    assert_eq!(parse("  prev ").unwrap(), Some(Command::Previous));
    assert_eq!(parse("goto race").unwrap(), Some(Command::GoTo("race".to_string())));
    assert_eq!(parse("wizard level-up").unwrap(), Some(Command::Switch(WizardKind::LevelUp)));
    assert_eq!(parse("").unwrap(), None);
    assert!(parse("goto").is_err());
    assert!(parse("wizard multiclass").is_err());
  }

  #[test]
  fn set_race_updates_creation_draft() {
    let mut draft = CreationDraft::default();
    let Some(Command::Set { key, args }) = parse("set race gnome false Small,Medium").unwrap() else {
      panic!("expected a set command");
    };
    apply_creation(&mut draft, &key, &args).unwrap();

    let race = draft.race.unwrap();
    assert_eq!(race.slug, "gnome");
    assert!(!race.has_subraces);
    assert_eq!(race.size_options, vec!["Small", "Medium"]);
  }

  #[test]
  fn set_rejects_bad_values() {
    let mut draft = LevelUpDraft::default();
    assert!(apply_level_up(&mut draft, "spells", &["many".to_string()]).is_err());
    assert!(apply_level_up(&mut draft, "asi", &["both".to_string()]).is_err());
    assert!(apply_level_up(&mut draft, "speed", &[]).is_err());

    apply_level_up(&mut draft, "asi", &["feat".to_string()]).unwrap();
    assert_eq!(draft.asi_choice, Some(AsiChoice::Feat));
  }
}
