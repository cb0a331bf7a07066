//! The wristband/backpack rule chain.
//!
//! One canonical precedence order, applied uniformly:
//!
//! 1. Expo entry type: black wristband, no backpack.
//! 2. Pirata flag set: black wristband, no backpack.
//! 3. LPN event with congress entry: orange wristband, backpack per pirata.
//! 4. PorciForum event with congress entry: blue wristband, backpack per pirata.
//! 5. Default: no wristband, backpack per pirata.
//!
//! Expo is checked before pirata. The two rules produce identical results
//! today, but the order is fixed so later rule additions cannot reopen the
//! ambiguity.

use crate::models::{ClassificationResult, MatchedRule, WristbandColor};

use super::shows_wristband_panel;

/// Whether an (already lowercased) entry type is a congress ticket.
fn is_congress(entry: &str) -> bool {
    entry.contains("congress") || entry.contains("congreso")
}

/// Classifies an attendee into a wristband color and backpack decision.
///
/// Pure, total, and deterministic: every input triple maps to exactly one
/// [`ClassificationResult`] and no input can fail. Substring matching is
/// case-insensitive; both inputs are lowercased once on entry and the
/// lowercased forms are used for every comparison in the call.
///
/// `pirata` is the already-normalized exclusion flag (see
/// [`crate::models::parse_flag`] for how loose source values map onto it).
///
/// # Example
///
/// ```
/// use checkin_engine::classification::classify;
/// use checkin_engine::models::{MatchedRule, WristbandColor};
///
/// let result = classify("LPN Congress 2025", "Congress Pass", false);
/// assert_eq!(result.wristband_color, WristbandColor::Orange);
/// assert!(result.deliver_backpack);
/// assert_eq!(result.rule_matched, MatchedRule::LpnCongress);
///
/// // Expo dominates everything, including the event rules.
/// let expo = classify("LPN Congress 2025", "Expo Pass", false);
/// assert_eq!(expo.wristband_color, WristbandColor::Black);
/// assert!(!expo.deliver_backpack);
/// ```
pub fn classify(event_name: &str, entry_type: &str, pirata: bool) -> ClassificationResult {
    let event = event_name.to_lowercase();
    let entry = entry_type.to_lowercase();

    if entry.contains("expo") {
        ClassificationResult {
            wristband_color: WristbandColor::Black,
            deliver_backpack: false,
            rule_matched: MatchedRule::Expo,
        }
    } else if pirata {
        ClassificationResult {
            wristband_color: WristbandColor::Black,
            deliver_backpack: false,
            rule_matched: MatchedRule::Pirata,
        }
    } else if event.contains("lpn") && is_congress(&entry) {
        ClassificationResult {
            wristband_color: WristbandColor::Orange,
            deliver_backpack: !pirata,
            rule_matched: MatchedRule::LpnCongress,
        }
    } else if (event.contains("porciforum") || event.contains("porci forum")) && is_congress(&entry)
    {
        ClassificationResult {
            wristband_color: WristbandColor::Blue,
            deliver_backpack: !pirata,
            rule_matched: MatchedRule::PorciForumCongress,
        }
    } else {
        ClassificationResult {
            wristband_color: WristbandColor::None,
            deliver_backpack: !pirata,
            rule_matched: MatchedRule::Default,
        }
    }
}

/// Computes wristband guidance, gated on panel visibility.
///
/// Guidance is exposed only for events in a recognized category; for every
/// other event this returns `None` regardless of what the rule chain would
/// have produced, and no wristband or backpack guidance reaches the
/// operator.
///
/// # Example
///
/// ```
/// use checkin_engine::classification::wristband_guidance;
///
/// assert!(wristband_guidance("LPN Congress 2025", "Expo Pass", false).is_some());
/// assert!(wristband_guidance("Annual Meetup", "Expo Pass", false).is_none());
/// ```
pub fn wristband_guidance(
    event_name: &str,
    entry_type: &str,
    pirata: bool,
) -> Option<ClassificationResult> {
    if !shows_wristband_panel(event_name) {
        return None;
    }
    Some(classify(event_name, entry_type, pirata))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // CLS-001: LPN congress, regular attendee
    // ==========================================================================
    #[test]
    fn test_cls_001_lpn_congress_orange_with_backpack() {
        let result = classify("LPN Congress 2025", "Congress Pass", false);
        assert_eq!(result.wristband_color, WristbandColor::Orange);
        assert!(result.deliver_backpack);
        assert_eq!(result.rule_matched, MatchedRule::LpnCongress);
    }

    // ==========================================================================
    // CLS-002: Expo entry overrides the event rules
    // ==========================================================================
    #[test]
    fn test_cls_002_expo_entry_is_black_without_backpack() {
        let result = classify("LPN Congress 2025", "Expo Pass", false);
        assert_eq!(result.wristband_color, WristbandColor::Black);
        assert!(!result.deliver_backpack);
        assert_eq!(result.rule_matched, MatchedRule::Expo);
    }

    // ==========================================================================
    // CLS-003: pirata overrides PorciForum congress coloring
    // ==========================================================================
    #[test]
    fn test_cls_003_pirata_overrides_porciforum_congress() {
        let result = classify("PorciForum Latam", "Congreso", true);
        assert_eq!(result.wristband_color, WristbandColor::Black);
        assert!(!result.deliver_backpack);
        assert_eq!(result.rule_matched, MatchedRule::Pirata);
    }

    // ==========================================================================
    // CLS-004: unrecognized event falls through to the default rule
    // ==========================================================================
    #[test]
    fn test_cls_004_unrecognized_event_defaults() {
        let result = classify("Annual Meetup", "General", false);
        assert_eq!(result.wristband_color, WristbandColor::None);
        assert!(result.deliver_backpack);
        assert_eq!(result.rule_matched, MatchedRule::Default);
    }

    // ==========================================================================
    // CLS-005: empty inputs defaulted, never panic
    // ==========================================================================
    #[test]
    fn test_cls_005_empty_inputs_default() {
        let result = classify("", "", false);
        assert_eq!(result.wristband_color, WristbandColor::None);
        assert!(result.deliver_backpack);
        assert_eq!(result.rule_matched, MatchedRule::Default);
    }

    #[test]
    fn test_expo_beats_pirata_in_rule_attribution() {
        let result = classify("LPN Congress 2025", "Expo Pass", true);
        assert_eq!(result.rule_matched, MatchedRule::Expo);
        assert_eq!(result.wristband_color, WristbandColor::Black);
        assert!(!result.deliver_backpack);
    }

    #[test]
    fn test_expo_matches_any_casing() {
        for entry in ["EXPO", "expo day", "Expo Pass", "visita eXpO"] {
            let result = classify("PorciForum Latam", entry, false);
            assert_eq!(result.rule_matched, MatchedRule::Expo, "entry: {entry}");
        }
    }

    #[test]
    fn test_congress_matches_spanish_spelling() {
        let result = classify("PorciForum Latam", "Congreso", false);
        assert_eq!(result.wristband_color, WristbandColor::Blue);
        assert_eq!(result.rule_matched, MatchedRule::PorciForumCongress);

        let spaced = classify("Porci Forum Iberia", "CONGRESS", false);
        assert_eq!(spaced.rule_matched, MatchedRule::PorciForumCongress);
    }

    #[test]
    fn test_lpn_congress_with_pirata_flag_is_pirata_rule() {
        // Pirata is decided before either congress rule is reached.
        let result = classify("LPN Congress 2025", "Congress Pass", true);
        assert_eq!(result.rule_matched, MatchedRule::Pirata);
        assert!(!result.deliver_backpack);
    }

    #[test]
    fn test_lpn_without_congress_entry_defaults() {
        let result = classify("LPN Congress 2025", "General", false);
        assert_eq!(result.wristband_color, WristbandColor::None);
        assert_eq!(result.rule_matched, MatchedRule::Default);
    }

    #[test]
    fn test_default_rule_backpack_follows_pirata() {
        assert!(classify("Annual Meetup", "General", false).deliver_backpack);
        assert!(!classify("Annual Meetup", "General", true).deliver_backpack);
    }

    #[test]
    fn test_classify_is_idempotent() {
        let a = classify("LPN Congress 2025", "Congress Pass", false);
        let b = classify("LPN Congress 2025", "Congress Pass", false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_guidance_hidden_for_unrecognized_events() {
        assert!(wristband_guidance("Annual Meetup", "Expo Pass", false).is_none());
        assert!(wristband_guidance("Annual Meetup", "General", true).is_none());
        assert!(wristband_guidance("", "", false).is_none());
    }

    #[test]
    fn test_guidance_visible_for_recognized_events() {
        let guidance = wristband_guidance("LPN Congress 2025", "Congress Pass", false).unwrap();
        assert_eq!(guidance, classify("LPN Congress 2025", "Congress Pass", false));

        let porci = wristband_guidance("Porci Forum Iberia", "Congreso", true).unwrap();
        assert_eq!(porci.rule_matched, MatchedRule::Pirata);
    }
}
