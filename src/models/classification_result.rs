//! Classification result model.
//!
//! This module contains the [`ClassificationResult`] type and its associated
//! enums capturing the outcome of a wristband/backpack classification.

use serde::{Deserialize, Serialize};

/// The wristband color assigned to an attendee category.
///
/// # Example
///
/// ```
/// use checkin_engine::models::WristbandColor;
///
/// let color = WristbandColor::Orange;
/// assert_eq!(serde_json::to_string(&color).unwrap(), "\"orange\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WristbandColor {
    /// No wristband is assigned.
    None,
    /// Black wristband (Expo entries and excluded attendees).
    Black,
    /// Orange wristband (LPN congress attendees).
    Orange,
    /// Blue wristband (PorciForum congress attendees).
    Blue,
}

impl WristbandColor {
    /// Lowercase display label, used in preview badge text.
    pub fn label(&self) -> &'static str {
        match self {
            WristbandColor::None => "none",
            WristbandColor::Black => "black",
            WristbandColor::Orange => "orange",
            WristbandColor::Blue => "blue",
        }
    }
}

/// Names the rule that produced a classification, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedRule {
    /// Entry type contains "expo".
    Expo,
    /// Pirata flag is set on a non-Expo entry.
    Pirata,
    /// LPN event with a congress entry type.
    LpnCongress,
    /// PorciForum event with a congress entry type.
    PorciForumCongress,
    /// No other rule applied.
    Default,
}

impl MatchedRule {
    /// Human-readable rule name, as written to audit output.
    pub fn name(&self) -> &'static str {
        match self {
            MatchedRule::Expo => "Expo",
            MatchedRule::Pirata => "Pirata",
            MatchedRule::LpnCongress => "LPN Congress",
            MatchedRule::PorciForumCongress => "PorciForum Congress",
            MatchedRule::Default => "Default",
        }
    }
}

/// The outcome of classifying one attendee.
///
/// Recomputed fresh per scan; never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// The wristband color to hand out.
    pub wristband_color: WristbandColor,
    /// Whether the welcome backpack should be delivered.
    pub deliver_backpack: bool,
    /// Which rule in the precedence chain fired.
    pub rule_matched: MatchedRule,
}
