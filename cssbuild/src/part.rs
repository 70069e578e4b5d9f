//! Atomic pieces of a compound selector and the rule table shared by every kind.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use strum::{EnumIter, IntoStaticStr};

/// Kind of a single selector part.
///
/// Declaration order is the canonical order inside a compound selector:
/// a part may only follow parts of the same or a lower rank.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr,
    strum::Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

struct PartRule {
    prefix: &'static str,
    suffix: &'static str,
    unique: bool,
}

// indexed by rank
const RULES: [PartRule; 6] = [
    PartRule { prefix: "", suffix: "", unique: true },
    PartRule { prefix: "#", suffix: "", unique: true },
    PartRule { prefix: ".", suffix: "", unique: false },
    PartRule { prefix: "[", suffix: "]", unique: false },
    PartRule { prefix: ":", suffix: "", unique: false },
    PartRule { prefix: "::", suffix: "", unique: true },
];

impl PartKind {
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// Whether at most one part of this kind may appear in a compound.
    pub fn is_unique(self) -> bool {
        self.rule().unique
    }

    /// Whether a part of this kind may directly follow a part of kind `last`.
    pub fn may_follow(self, last: PartKind) -> bool {
        last.rank() <= self.rank()
    }

    fn rule(self) -> &'static PartRule {
        &RULES[self.rank()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SelectorPart {
    pub kind: PartKind,
    pub value: SmolStr,
}

impl SelectorPart {
    pub fn new(kind: PartKind, value: impl Into<SmolStr>) -> Self {
        return Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = self.kind.rule();
        write!(f, "{}{}{}", rule.prefix, self.value, rule.suffix)
    }
}
