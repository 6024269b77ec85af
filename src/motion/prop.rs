#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize,
    serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
/// Prop kind selected in the application settings.
#[allow(missing_docs)]
pub enum PropType {
    Hand,
    #[default]
    Staff,
    BigStaff,
    Club,
    Buugeng,
    BigBuugeng,
    Fractalgeng,
    EightRings,
    BigEightRings,
    DoubleStar,
    BigDoubleStar,
    Fan,
    BigFan,
    Triad,
    BigTriad,
    Minihoop,
    BigHoop,
    Quiad,
    Sword,
    Guitar,
    Ukulele,
    Chicken,
    Triquetra,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Shape class of a prop: whether it has one or two ends, and its scale.
pub enum PropClassification {
    /// One end, normal size (fan, club, ...).
    SmallUnilateral,
    /// One end, oversized (big hoop, guitar, ...).
    BigUnilateral,
    /// Two ends, normal size (staff, buugeng, ...).
    SmallBilateral,
    /// Two ends, oversized (big staff, quiad, ...).
    BigBilateral,
}

impl PropClassification {
    /// `true` for one-ended props.
    pub fn is_unilateral(self) -> bool {
        matches!(
            self,
            PropClassification::SmallUnilateral | PropClassification::BigUnilateral
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Beta offset magnitude class.
pub enum PropSizeClass {
    /// Divisor 60.
    Large,
    /// Divisor 50.
    Medium,
    /// Divisor 45; everything not listed as large or medium.
    Small,
}

impl PropType {
    /// Shape classification used by beta repositioning.
    pub fn classification(self) -> PropClassification {
        use PropType::*;
        match self {
            Fan | Club | Minihoop | Triad | Ukulele | Triquetra => {
                PropClassification::SmallUnilateral
            }
            BigHoop | Guitar | Sword | Chicken | BigFan | BigTriad => {
                PropClassification::BigUnilateral
            }
            BigStaff | BigBuugeng | BigDoubleStar | BigEightRings | Quiad => {
                PropClassification::BigBilateral
            }
            Hand | Staff | Buugeng | Fractalgeng | EightRings | DoubleStar => {
                PropClassification::SmallBilateral
            }
        }
    }

    /// Beta offset magnitude class.
    pub fn size_class(self) -> PropSizeClass {
        use PropType::*;
        match self {
            Club | EightRings | BigEightRings | DoubleStar | BigDoubleStar => PropSizeClass::Large,
            Fan | BigFan | Minihoop | Triad | BigTriad | Chicken => PropSizeClass::Medium,
            _ => PropSizeClass::Small,
        }
    }
}
