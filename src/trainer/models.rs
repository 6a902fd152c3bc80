use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Training modules
// ---------------------------------------------------------------------------

/// The five training modules the API serves.
///
/// Wire names are the lowercase ids used in URL paths, request bodies, and
/// the `module` field of every [`Scenario`]. They are renamed per variant
/// because `preflop_3bet` has an underscore before a digit that no blanket
/// rename rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "bluffcatch")]
    BluffCatch,
    #[serde(rename = "thinvalue")]
    ThinValue,
    #[serde(rename = "threebet")]
    ThreeBet,
    #[serde(rename = "preflop_open")]
    PreflopOpen,
    #[serde(rename = "preflop_3bet")]
    PreflopThreeBet,
}

impl Module {
    /// Parse a wire name; `None` for anything unrecognized.
    pub fn parse(s: &str) -> Option<Module> {
        match s {
            "bluffcatch"   => Some(Module::BluffCatch),
            "thinvalue"    => Some(Module::ThinValue),
            "threebet"     => Some(Module::ThreeBet),
            "preflop_open" => Some(Module::PreflopOpen),
            "preflop_3bet" => Some(Module::PreflopThreeBet),
            _ => None,
        }
    }

    /// The wire name, e.g. `"preflop_3bet"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Module::BluffCatch      => "bluffcatch",
            Module::ThinValue       => "thinvalue",
            Module::ThreeBet        => "threebet",
            Module::PreflopOpen     => "preflop_open",
            Module::PreflopThreeBet => "preflop_3bet",
        }
    }

    /// All modules, in catalog order.
    pub fn all() -> [Module; 5] {
        [
            Module::BluffCatch,
            Module::ThinValue,
            Module::ThreeBet,
            Module::PreflopOpen,
            Module::PreflopThreeBet,
        ]
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request / response records
// ---------------------------------------------------------------------------

/// A rendered training scenario.
///
/// Built fresh for every request and never stored. The `id` names the
/// template that produced the text (`bc1`, `tv1`, ...), not the request, so
/// repeated calls can legitimately return the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub module: Module,
    pub text: String,
}

/// A submitted answer.
///
/// `scenario_id` is echoed by clients but never matched against a
/// previously issued scenario, and `action` is free-form text. `reasoning`
/// may be absent or `null`; it is carried for the wire format but feedback
/// never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub scenario_id: String,
    pub module: Module,
    pub action: String,
    #[serde(default)]
    pub reasoning: Option<String>,
}
