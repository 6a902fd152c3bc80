//! Preflop drills: the raise-first-in trainer and the 3-bet matchup
//! trainer.
//!
//! Unlike the postflop catalog these render parameterized text. Seats flow
//! in from the request, unrecognized seats are sanitized rather than
//! rejected, and a sample hand is drawn fresh on every call.

use rand::Rng;

use crate::trainer::hints::{is_rfi_position, rfi_hint, three_bet_hint, RFI_POSITIONS};
use crate::trainer::models::{Module, Scenario};

/// Hands dealt by the open-or-fold trainer.
const RFI_SAMPLE_HANDS: [&str; 10] = [
    "AJo", "KQo", "A5s", "K9s", "QTs", "J9s", "55", "77", "A8o", "T9s",
];

/// Hands dealt by the 3-bet trainer.
const THREE_BET_SAMPLE_HANDS: [&str; 8] = [
    "AQo", "A5s", "KJs", "QJs", "TT", "99", "AJo", "KQo",
];

/// Sizing-only fallback if a blind-battle matchup were ever missing from
/// the hint table.
const THREE_BET_SIZING_HINT: &str = "IP ~3.5x, OOP ~5.0-5.5x.";

/// Hint for every matchup outside the two covered blind-vs-button battles.
const THREE_BET_GENERIC_HINT: &str =
    "IP ~3.5x, OOP ~5.0-5.5x. Use blockers and consider linear vs polarized mixes.";

/// Open-or-fold drill for one seat.
///
/// An unrecognized `position` is replaced by a uniformly random recognized
/// one before the hand draw, so the RNG sequence is: seat (only when
/// substituting), then hand.
pub fn generate_preflop_open<R: Rng>(rng: &mut R, position: &str) -> Scenario {
    let position = if is_rfi_position(position) {
        position
    } else {
        RFI_POSITIONS[rng.gen_range(0..RFI_POSITIONS.len())]
    };
    let hand = RFI_SAMPLE_HANDS[rng.gen_range(0..RFI_SAMPLE_HANDS.len())];

    let text = format!(
        "Open Trainer (RFI)\n\
         Position: {position}\n\
         Hand: {hand}\n\
         Task: Open or Fold? Suggested sizes: 2.2-2.7bb (SB ~3bb). Hint: {hint}",
        hint = rfi_hint(position),
    );
    Scenario {
        id: "preflop_open".to_string(),
        module: Module::PreflopOpen,
        text,
    }
}

/// 3-bet drill for one opener/defender matchup.
///
/// Unrecognized seats fall back to the BTN-open, SB-defend battle rather
/// than a random seat. Matchup hints are keyed `"{defender}-vs-{opener}"`;
/// only the two blind-vs-button keys get the specific table entry,
/// everything else gets the generic sizing line.
pub fn generate_preflop_3bet<R: Rng>(rng: &mut R, opener: &str, defender: &str) -> Scenario {
    let opener = if is_rfi_position(opener) { opener } else { "BTN" };
    let defender = if is_rfi_position(defender) { defender } else { "SB" };
    let hand = THREE_BET_SAMPLE_HANDS[rng.gen_range(0..THREE_BET_SAMPLE_HANDS.len())];

    let matchup = format!("{defender}-vs-{opener}");
    let hint = match matchup.as_str() {
        "SB-vs-BTN" | "BTN-vs-SB" => three_bet_hint(&matchup).unwrap_or(THREE_BET_SIZING_HINT),
        _ => THREE_BET_GENERIC_HINT,
    };

    let text = format!(
        "3-Bet Trainer\n\
         Opener: {opener}, Defender: {defender}\n\
         Hand: {hand}\n\
         Task: 3-Bet / Call / Fold? Give size. Notes: {hint}"
    );
    Scenario {
        id: "preflop_3bet".to_string(),
        module: Module::PreflopThreeBet,
        text,
    }
}
