//! Character variety section - checks required character classes.

use super::SectionResult;
use crate::config::{CharacterClass, PolicyConfig};
use crate::verdict::{FailureReason, Rejection};

/// Checks that every required class is present and, when the policy restricts
/// the alphabet, that no character falls outside letters, digits and the
/// special set.
///
/// The reason names the first missing class; the message names all of them.
pub fn character_variety_section(password: &str, config: &PolicyConfig) -> SectionResult {
    let missing: Vec<CharacterClass> = config
        .required_classes()
        .iter()
        .copied()
        .filter(|&class| !password.chars().any(|c| config.is_member(class, c)))
        .collect();

    if let Some(&first) = missing.first() {
        let names: Vec<&str> = missing.iter().map(|class| class.describe()).collect();
        let mut message = format!(
            "Password must contain at least one {}",
            join_with_and(&names)
        );
        if missing.contains(&CharacterClass::Special) {
            message.push_str(&format!(" ({})", config.special_characters_display()));
        }
        return Err(Rejection::new(
            FailureReason::MissingCharacterClass(first),
            message,
        ));
    }

    if config.restrict_alphabet() {
        let allowed = |c: char| {
            CharacterClass::ALL
                .iter()
                .any(|&class| config.is_member(class, c))
        };
        if !password.chars().all(allowed) {
            return Err(Rejection::new(
                FailureReason::DisallowedCharacter,
                format!(
                    "Password may only contain letters, digits, and the special characters {}",
                    config.special_characters_display()
                ),
            ));
        }
    }

    Ok(())
}

fn join_with_and(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [one] => one.to_string(),
        [first, second] => format!("{first} and one {second}"),
        [init @ .., last] => format!("{}, and one {}", init.join(", one "), last),
    }
}
