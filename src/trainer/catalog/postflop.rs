//! Canned postflop drills: river bluff-catching, thin value, and the
//! 3-bet-pot jam.
//!
//! Each template is a fixed `(id, title, body)` triple rendered as
//! `"{title}\n{body}"`. Only the bluff-catch module has more than one
//! template; the other two always serve the same spot.

use rand::Rng;

use crate::trainer::models::{Module, Scenario};

type Template = (&'static str, &'static str, &'static str);

const BLUFFCATCH_TEMPLATES: [Template; 2] = [
    (
        "bc1",
        "BTN vs BB SRP — River Overbet",
        "6-max 100bb. BTN opens 2.5bb, BB calls. Pot 5.5bb.\n\
         Flop Kc 9d 4c — BTN 33% c-bet, BB calls.\n\
         Turn 2h — check/check.\n\
         River 6c — BB overbets 150% pot.\n\
         Hero: BTN holds Ac Qd.\n\
         Task: Call or fold vs 1.5x pot? Discuss range vs range, blockers, bluff supply, MDF.",
    ),
    (
        "bc2",
        "CO vs BB SRP — Missed Turn, River Donk",
        "6-max 100bb. CO opens 2.5bb, BB calls. Pot 5.5bb.\n\
         Flop Js 8d 3c — CO 33% c-bet, BB calls.\n\
         Turn 3d — check/check.\n\
         River Tc — BB leads 125% pot.\n\
         Hero: CO holds Qc Jd.\n\
         Task: Call/fold/raise? Use blockers and MDF.",
    ),
];

const THINVALUE_TEMPLATE: Template = (
    "tv1",
    "CO vs BB — Paired-Paired River",
    "6-max 100bb. CO opens 2.5bb, BB calls. Pot 5.5bb.\n\
     Flop Ts 6d 2s — CO 33% c-bet, BB calls.\n\
     Turn Tc — check/check.\n\
     River 2d — BB checks.\n\
     Hero: CO holds Ad Td.\n\
     Task: Choose river size (check, 25-50%, 66%+, overbet). Targets and why.",
);

const THREEBET_TEMPLATE: Template = (
    "b3p1",
    "SB 3-bet vs BTN — Polar River Jam",
    "6-max 100bb. BTN opens 2.5bb, SB 3-bets 9bb, BTN calls. Pot 19bb.\n\
     Flop Qh Js 5s — SB 33% bet, BTN calls.\n\
     Turn 3c — SB 75% bet, BTN calls.\n\
     River Kd — SB jams ~2x pot.\n\
     Hero: BTN holds Qc Jd.\n\
     Task: Call or fold? Discuss nuts advantage, removal, bluff supply, pot odds.",
);

fn render(module: Module, (id, title, body): Template) -> Scenario {
    Scenario {
        id: id.to_string(),
        module,
        text: format!("{title}\n{body}"),
    }
}

/// One of the two bluff-catching rivers, picked uniformly at random.
pub fn generate_bluffcatch<R: Rng>(rng: &mut R) -> Scenario {
    let template = BLUFFCATCH_TEMPLATES[rng.gen_range(0..BLUFFCATCH_TEMPLATES.len())];
    render(Module::BluffCatch, template)
}

/// The thin-value river spot. No randomness.
pub fn generate_thinvalue() -> Scenario {
    render(Module::ThinValue, THINVALUE_TEMPLATE)
}

/// The 3-bet-pot river jam. No randomness.
pub fn generate_threebet() -> Scenario {
    render(Module::ThreeBet, THREEBET_TEMPLATE)
}
