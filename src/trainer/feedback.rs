//! Rule-based feedback on a submitted action.
//!
//! A fixed sequence of independent substring checks over the lowercased
//! scenario text and action, each appending one canned tip. Check order is
//! output order, several checks can fire for the same submission, and no
//! check suppresses another. If nothing fires, a generic tip is returned
//! so the result is never empty.

use crate::trainer::models::{Module, Scenario};

const TIP_MDF: &str = "MDF: Pot/(Pot+Bet). 1.5x => 40%, 1.25x => ~44%.";
const TIP_RIVER_POLARITY: &str = "After IP checks turn, OOP polarizes rivers; pick bluff-catchers that block value and unblock bluffs.";
const TIP_THREE_BET_POTS: &str =
    "3-bet pots: stronger ranges; big river jams need strong bluff-catchers or nut blockers.";
const TIP_FLUSH_BLOCKERS: &str = "Track front-door vs back-door flushes and key blockers on rivers.";
const TIP_RFI_RANGES: &str = "RFI: tighter early, widest BTN/SB; sizes 2.2-2.7bb (SB ~3bb).";
const TIP_THREE_BET_SIZING: &str =
    "3-bet sizing: IP ~3.5x, OOP ~5.0-5.5x. Use blockers; linear vs polarized by matchup.";
const TIP_CALL: &str = "Call when removal favors you and equity clears pot-odds.";
const TIP_FOLD: &str = "Exploit under-bluffing by folding marginal bluff-catchers.";
const TIP_RAISE: &str = "Raise polar (nuts + low-SDV bluffs); avoid merged raises.";
const TIP_DEFAULT: &str = "State range advantage, nutted combos, and your future-street plan.";

/// Phrases that mark an oversized river bet in the scenario text.
const OVERBET_MARKERS: [&str; 4] = ["150% pot", "125% pot", "2x pot", "overbet"];

/// Crude suit-letter heuristic. A lone `s`/`c`/`d`/`h` before a space
/// counts as flush-relevant, which matches far more than card suits (plain
/// English words end in these letters); that looseness is part of the
/// contract, not a bug to tighten.
const SUIT_MARKERS: [&str; 5] = [" flush", "s ", "c ", "d ", "h "];

/// Build the feedback string for `action` against `scenario`.
///
/// Pure and infallible. `reasoning` is accepted for symmetry with the wire
/// format but never inspected.
pub fn feedback(scenario: &Scenario, action: &str, _reasoning: &str) -> String {
    let text = scenario.text.to_lowercase();
    let mut tips: Vec<&str> = Vec::new();

    if OVERBET_MARKERS.iter().any(|marker| text.contains(marker)) {
        tips.push(TIP_MDF);
    }
    if text.contains("check/check") {
        tips.push(TIP_RIVER_POLARITY);
    }
    if text.contains("3-bet") || text.contains("3-bets") {
        tips.push(TIP_THREE_BET_POTS);
    }
    if SUIT_MARKERS.iter().any(|marker| text.contains(marker)) {
        tips.push(TIP_FLUSH_BLOCKERS);
    }

    match scenario.module {
        Module::PreflopOpen => tips.push(TIP_RFI_RANGES),
        Module::PreflopThreeBet => tips.push(TIP_THREE_BET_SIZING),
        _ => {}
    }

    let action = action.to_lowercase();
    if action.starts_with("call") {
        tips.push(TIP_CALL);
    }
    if action.starts_with("fold") {
        tips.push(TIP_FOLD);
    }
    if action.starts_with("raise") || action.contains("jam") {
        tips.push(TIP_RAISE);
    }

    if tips.is_empty() {
        tips.push(TIP_DEFAULT);
    }
    format!("Feedback:\n- {}", tips.join("\n- "))
}
