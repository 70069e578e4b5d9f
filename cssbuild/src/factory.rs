//! Fluent construction of selectors.
//!
//! Every selector value, the builder itself and any `SelectorResult` of them
//! implement [`SelectorFactory`], so a chain such as
//! `builder.element("a").attr("href$=\".png\"").pseudo_class("focus")?`
//! only needs a single `?` at the end. All implementations funnel into
//! [`append_part`], which owns the ordering and uniqueness rules.

use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::combinator::Combinator;
use crate::config::{CombinatorPolicy, Config};
use crate::error::{SelectorError, SelectorResult};
use crate::part::{PartKind, SelectorPart};
use crate::selector::{CombinedSelector, CompoundSelector, Selector};

/// Checks that a part of `kind` may extend `parts`.
pub fn check_append(parts: &[SelectorPart], kind: PartKind) -> SelectorResult<()> {
    if kind.is_unique() && parts.iter().any(|part| part.kind == kind) {
        return Err(SelectorError::DuplicateKind { kind })
    }
    if let Some(last) = parts.last() {
        if !kind.may_follow(last.kind) {
            return Err(SelectorError::Order { kind, after: last.kind })
        }
    }
    return Ok(())
}

/// Returns a new compound made of `parts` followed by one part of `kind`.
pub fn append_part(parts: &[SelectorPart], kind: PartKind, value: &str) -> SelectorResult<CompoundSelector> {
    if let Err(err) = check_append(parts, kind) {
        debug!(%kind, value, %err, "rejected selector part");
        return Err(err)
    }
    trace!(%kind, value, "appending selector part");
    let mut extended = Vec::with_capacity(parts.len() + 1);
    extended.extend_from_slice(parts);
    extended.push(SelectorPart::new(kind, value));
    return Ok(CompoundSelector::from_parts(extended))
}

pub trait SelectorFactory {
    type Output;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<Self::Output>;

    fn element(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::Element, value)
    }

    fn id(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::Id, value)
    }

    fn class(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::Class, value)
    }

    fn attr(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::Attribute, value)
    }

    fn pseudo_class(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::PseudoClass, value)
    }

    fn pseudo_element(&self, value: &str) -> SelectorResult<Self::Output> {
        self.append(PartKind::PseudoElement, value)
    }
}

impl SelectorFactory for CompoundSelector {
    type Output = CompoundSelector;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<CompoundSelector> {
        append_part(self.parts(), kind, value)
    }
}

/// Extends the right-most compound: `a > b` followed by `.c` gives `a > b.c`.
impl SelectorFactory for CombinedSelector {
    type Output = CombinedSelector;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<CombinedSelector> {
        let right = self.right().append(kind, value)?;
        return Ok(self.with_right(right))
    }
}

impl SelectorFactory for Selector {
    type Output = Selector;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<Selector> {
        match self {
            Selector::Compound(compound) => compound.append(kind, value).map(Selector::from),
            Selector::Combined(combined) => combined.append(kind, value).map(Selector::from),
        }
    }
}

impl<T: SelectorFactory> SelectorFactory for SelectorResult<T> {
    type Output = T::Output;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<T::Output> {
        match self {
            Ok(selector) => selector.append(kind, value),
            Err(err) => Err(err.clone()),
        }
    }
}

/// Entry point for building selectors. Part factories start a fresh compound.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorBuilder {
    combinators: CombinatorPolicy,
}

impl SelectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        return Self {
            combinators: config.combinators,
        }
    }

    pub fn combinator_policy(&self) -> CombinatorPolicy {
        self.combinators
    }

    /// Joins two selectors. Any combinator token is accepted.
    pub fn combine(
        &self,
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> CombinedSelector {
        let combinator = combinator.into();
        trace!(%combinator, "combining selectors");
        CombinedSelector::new(left, combinator, right)
    }

    /// Like [`Self::combine`], but rejects unknown combinators under
    /// [`CombinatorPolicy::Strict`].
    pub fn try_combine(
        &self,
        left: impl Into<Selector>,
        combinator: impl Into<Combinator>,
        right: impl Into<Selector>,
    ) -> SelectorResult<CombinedSelector> {
        let combinator = combinator.into();
        if self.combinators == CombinatorPolicy::Strict && combinator.kind().is_none() {
            debug!(%combinator, "rejected combinator");
            return Err(SelectorError::UnknownCombinator {
                combinator: SmolStr::new(combinator.as_str()),
            })
        }
        Ok(self.combine(left, combinator, right))
    }
}

impl SelectorFactory for SelectorBuilder {
    type Output = CompoundSelector;

    fn append(&self, kind: PartKind, value: &str) -> SelectorResult<CompoundSelector> {
        append_part(&[], kind, value)
    }
}
