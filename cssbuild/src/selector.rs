//! Immutable selector values.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use triomphe::Arc;

use crate::combinator::Combinator;
use crate::part::{PartKind, SelectorPart};

/// One compound selector, e.g. `div#main.container`.
///
/// Parts are always in canonical order; the only way to extend a compound is
/// through [`crate::SelectorFactory`], which returns a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CompoundSelector {
    parts: Vec<SelectorPart>,
}

impl CompoundSelector {
    pub(crate) fn from_parts(parts: Vec<SelectorPart>) -> Self {
        return Self { parts }
    }

    pub fn parts(&self) -> &[SelectorPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn contains(&self, kind: PartKind) -> bool {
        self.parts.iter().any(|part| part.kind == kind)
    }

    pub fn last_kind(&self) -> Option<PartKind> {
        self.parts.last().map(|part| part.kind)
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parts.iter().join(""))
    }
}

/// Two selectors joined by a combinator. Children are shared, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CombinedSelector {
    left: Arc<Selector>,
    combinator: Combinator,
    right: Arc<Selector>,
}

impl CombinedSelector {
    pub fn new(
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> Self {
        return Self {
            left: Arc::new(left.into()),
            combinator: combinator.into(),
            right: Arc::new(right.into()),
        }
    }

    pub fn left(&self) -> &Selector {
        &self.left
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    pub fn right(&self) -> &Selector {
        &self.right
    }

    /// Same left side and combinator, new right side.
    pub(crate) fn with_right(&self, right: Selector) -> Self {
        return Self {
            left: self.left.clone(),
            combinator: self.combinator.clone(),
            right: Arc::new(right),
        }
    }

    pub fn stringify(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CombinedSelector {
    // the combinator is always padded by one space on each side, even a ' ' one
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left(), self.combinator, self.right())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selector {
    Compound(CompoundSelector),
    Combined(CombinedSelector),
}

impl Selector {
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Compound selectors of the tree, left to right.
    pub fn compounds(&self) -> Vec<&CompoundSelector> {
        let mut res = Vec::new();
        self.collect_compounds(&mut res);
        return res
    }

    fn collect_compounds<'a>(&'a self, res: &mut Vec<&'a CompoundSelector>) {
        match self {
            Selector::Compound(compound) => res.push(compound),
            Selector::Combined(combined) => {
                combined.left.collect_compounds(res);
                combined.right.collect_compounds(res);
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Compound(compound) => fmt::Display::fmt(compound, f),
            Selector::Combined(combined) => fmt::Display::fmt(combined, f),
        }
    }
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Selector::Compound(compound)
    }
}

impl From<CombinedSelector> for Selector {
    fn from(combined: CombinedSelector) -> Self {
        Selector::Combined(combined)
    }
}
