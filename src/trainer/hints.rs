//! Static preflop hint tables.
//!
//! Two read-only tables rendered into scenario text: raise-first-in
//! baselines keyed by seat, and 3-bet baselines keyed by a
//! `"{defender}-vs-{opener}"` matchup string. Lookups never fail; the RFI
//! lookup falls back to an empty string and matchup callers supply their
//! own fallback.

/// Seats the open trainer recognizes, in table order. UTG and LJ share an
/// entry, so a 6-max table collapses to five seats here.
pub const RFI_POSITIONS: [&str; 5] = ["UTG/LJ", "HJ", "CO", "BTN", "SB"];

const RFI_BASE_HINTS: [(&str, &str); 5] = [
    (
        "UTG/LJ",
        "RFI ~ 18-22%; tighter broadways, pairs, suited aces down to A5s.",
    ),
    (
        "HJ",
        "RFI ~ 22-26%; add suited broadways, some suited connectors.",
    ),
    (
        "CO",
        "RFI ~ 28-32%; add suited gappers and offsuit broadways.",
    ),
    (
        "BTN",
        "RFI ~ 42-48%; widest range; many suited/offsuit broadways, suited connectors.",
    ),
    (
        "SB",
        "Raise-first ~ 40-46% with raise-only strategy; small open size common.",
    ),
];

/// Matchup-specific 3-bet hints. The `BB-vs-BTN` row is part of the data
/// even though the generator's seat sanitizing never produces a BB
/// defender, so no request currently reaches it.
const THREE_BET_HINTS: [(&str, &str); 3] = [
    (
        "BTN-vs-SB",
        "SB 3-bets ~14-16% (linear-ish): strong broadways/pairs, suited wheel aces as blockers.",
    ),
    (
        "BB-vs-BTN",
        "BB 3-bets ~12-14% baseline; linear vs polarized mixes by pool.",
    ),
    (
        "SB-vs-BTN",
        "OOP sizing bigger (5.0-5.5x); similar idea to BTN-vs-SB matchups.",
    ),
];

/// True if `position` is one of the recognized RFI seats. Matching is
/// exact: `"btn"` is not `"BTN"`.
pub fn is_rfi_position(position: &str) -> bool {
    RFI_POSITIONS.contains(&position)
}

/// RFI hint for a seat; empty string when the table has no entry.
pub fn rfi_hint(position: &str) -> &'static str {
    RFI_BASE_HINTS
        .iter()
        .find(|(seat, _)| *seat == position)
        .map(|(_, hint)| *hint)
        .unwrap_or("")
}

/// Matchup hint for a `"{defender}-vs-{opener}"` key, if the table has one.
pub fn three_bet_hint(matchup: &str) -> Option<&'static str> {
    THREE_BET_HINTS
        .iter()
        .find(|(key, _)| *key == matchup)
        .map(|(_, hint)| *hint)
}
