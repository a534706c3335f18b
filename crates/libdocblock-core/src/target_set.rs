/// The kinds of declaration site a directive can appear on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DirectiveTarget {
    Class,
    Method,
    Property,
    /// Inside another directive's argument list.
    NestedDirective,
}
impl DirectiveTarget {
    pub fn as_target_set(self) -> TargetSet {
        match self {
            Self::Class => TargetSet::CLASS,
            Self::Method => TargetSet::METHOD,
            Self::Property => TargetSet::PROPERTY,
            Self::NestedDirective => TargetSet::NESTED,
        }
    }
}

/// A bitmask over [`DirectiveTarget`]s: `CLASS=1, METHOD=2, PROPERTY=4,
/// NESTED=8`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TargetSet(u8);
impl TargetSet {
    pub const NONE: TargetSet = TargetSet(0);
    pub const CLASS: TargetSet = TargetSet(1);
    pub const METHOD: TargetSet = TargetSet(2);
    pub const PROPERTY: TargetSet = TargetSet(4);
    pub const NESTED: TargetSet = TargetSet(8);
    pub const ALL: TargetSet = TargetSet(15);

    /// Literal names in description order.
    const LITERALS: [(&'static str, TargetSet); 4] = [
        ("CLASS", Self::CLASS),
        ("METHOD", Self::METHOD),
        ("PROPERTY", Self::PROPERTY),
        ("NESTED", Self::NESTED),
    ];

    /// Every literal accepted by [`TargetSet::from_literal`].
    pub const AVAILABLE_LITERALS: [&'static str; 6] =
        ["ALL", "CLASS", "METHOD", "PROPERTY", "NESTED", "ANNOTATION"];

    /// Builds a set from raw bits; bits above `ALL` are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Parses one target literal. `ANNOTATION` is accepted as an alias of
    /// `NESTED`.
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "ALL" => Some(Self::ALL),
            "CLASS" => Some(Self::CLASS),
            "METHOD" => Some(Self::METHOD),
            "PROPERTY" => Some(Self::PROPERTY),
            "NESTED" | "ANNOTATION" => Some(Self::NESTED),
            _ => None,
        }
    }

    pub fn contains(self, other: TargetSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersects(self, other: TargetSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn allows(self, target: DirectiveTarget) -> bool {
        self.intersects(target.as_target_set())
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Human-readable form used in error messages: `ALL` for the full set,
    /// otherwise the member literals in the order `CLASS, METHOD, PROPERTY,
    /// NESTED`.
    pub fn describe(self) -> String {
        if self == Self::ALL {
            return "ALL".to_string();
        }
        Self::LITERALS
            .iter()
            .filter(|(_, member)| self.contains(*member))
            .map(|(literal, _)| *literal)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::ops::BitOr for TargetSet {
    type Output = TargetSet;

    fn bitor(self, rhs: TargetSet) -> TargetSet {
        TargetSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for TargetSet {
    fn bitor_assign(&mut self, rhs: TargetSet) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for TargetSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
