use std::{fmt, str::FromStr};

use crate::foundation::error::PictoplaceError;

macro_rules! letters {
    ($($variant:ident => $glyph:literal),+ $(,)?) => {
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        /// Closed set of pictograph letters. Serialized as the letter glyph.
        #[allow(missing_docs)]
        pub enum Letter {
            $(#[serde(rename = $glyph)] $variant,)+
        }

        impl Letter {
            /// Every letter, in codex order.
            pub const ALL: &'static [Letter] = &[$(Letter::$variant),+];

            /// The letter glyph (`"G"`, `"Y-"`, `"Ψ-"`, ...).
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Letter::$variant => $glyph,)+
                }
            }
        }
    };
}

letters! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F",
    G => "G", H => "H", I => "I", J => "J", K => "K", L => "L",
    M => "M", N => "N", O => "O", P => "P", Q => "Q", R => "R",
    S => "S", T => "T", U => "U", V => "V",
    W => "W", X => "X", Y => "Y", Z => "Z",
    Sigma => "Σ", Delta => "Δ", Theta => "θ", Omega => "Ω",
    WDash => "W-", XDash => "X-", YDash => "Y-", ZDash => "Z-",
    SigmaDash => "Σ-", DeltaDash => "Δ-", ThetaDash => "θ-", OmegaDash => "Ω-",
    Phi => "Φ", Psi => "Ψ", Lambda => "Λ",
    PhiDash => "Φ-", PsiDash => "Ψ-", LambdaDash => "Λ-",
    Alpha => "α", Beta => "β", Gamma => "Γ",
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// Structural letter category; decides which motions form the turns key.
pub enum LetterType {
    /// Dual shift (`A..V`).
    Type1,
    /// Shift + static.
    Type2,
    /// Shift + dash.
    Type3,
    /// Dash + static.
    Type4,
    /// Dual dash.
    Type5,
    /// Dual static.
    Type6,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Letter groups with a dedicated beta repositioning rule.
pub enum BetaLetterGroup {
    /// `G`, `H`.
    GH,
    /// `I`.
    I,
    /// `J`, `K`, `L`.
    JKL,
    /// `Y`, `Z`.
    YZ,
    /// `β`.
    Beta,
    /// `Y-`, `Z-`.
    YZDash,
    /// `Ψ`.
    Psi,
    /// `Ψ-`.
    PsiDash,
}

impl Letter {
    /// Structural category of the letter.
    pub fn letter_type(self) -> LetterType {
        use Letter::*;
        match self {
            A | B | C | D | E | F | G | H | I | J | K | L | M | N | O | P | Q | R | S | T | U
            | V => LetterType::Type1,
            W | X | Y | Z | Sigma | Delta | Theta | Omega => LetterType::Type2,
            WDash | XDash | YDash | ZDash | SigmaDash | DeltaDash | ThetaDash | OmegaDash => {
                LetterType::Type3
            }
            Phi | Psi | Lambda => LetterType::Type4,
            PhiDash | PsiDash | LambdaDash => LetterType::Type5,
            Alpha | Beta | Gamma => LetterType::Type6,
        }
    }

    /// Type1 letters made of one pro and one anti motion.
    pub fn is_hybrid(self) -> bool {
        use Letter::*;
        matches!(self, C | F | I | L | O | R | U | V)
    }

    /// Letters whose two motions chase each other around the grid.
    pub fn has_lead_state(self) -> bool {
        use Letter::*;
        matches!(self, S | T | U | V)
    }

    /// Letters that only rotate in place; their overrides key off the motion color.
    pub fn is_pure_rotation(self) -> bool {
        use Letter::*;
        matches!(self, Alpha | Beta | Gamma | PhiDash | PsiDash | LambdaDash)
    }

    /// Beta repositioning group, if the letter has one.
    pub fn beta_group(self) -> Option<BetaLetterGroup> {
        use Letter::*;
        match self {
            G | H => Some(BetaLetterGroup::GH),
            I => Some(BetaLetterGroup::I),
            J | K | L => Some(BetaLetterGroup::JKL),
            Y | Z => Some(BetaLetterGroup::YZ),
            Beta => Some(BetaLetterGroup::Beta),
            YDash | ZDash => Some(BetaLetterGroup::YZDash),
            Psi => Some(BetaLetterGroup::Psi),
            PsiDash => Some(BetaLetterGroup::PsiDash),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Letter {
    type Err = PictoplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letter::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| PictoplaceError::validation(format!("unknown letter '{s}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/letter.rs"]
mod tests;
