use rand::Rng;

use crate::trainer::catalog::{postflop, preflop};
use crate::trainer::models::{Module, Scenario};

/// Build a fresh scenario for `module`.
///
/// `opener` and `defender` carry the raw query values; only the preflop
/// modules read them. The open trainer treats `opener` as the hero seat
/// (default `"CO"`), the 3-bet trainer defaults to the BTN-open, SB-defend
/// matchup. An empty string counts as absent, like an empty query value
/// would; anything else unrecognized is sanitized inside the generator,
/// never rejected.
pub fn generate_scenario<R: Rng>(
    rng: &mut R,
    module: Module,
    opener: Option<&str>,
    defender: Option<&str>,
) -> Scenario {
    let opener = opener.filter(|value| !value.is_empty());
    let defender = defender.filter(|value| !value.is_empty());

    match module {
        Module::BluffCatch => postflop::generate_bluffcatch(rng),
        Module::ThinValue => postflop::generate_thinvalue(),
        Module::ThreeBet => postflop::generate_threebet(),
        Module::PreflopOpen => preflop::generate_preflop_open(rng, opener.unwrap_or("CO")),
        Module::PreflopThreeBet => {
            preflop::generate_preflop_3bet(rng, opener.unwrap_or("BTN"), defender.unwrap_or("SB"))
        }
    }
}
