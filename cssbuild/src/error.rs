use smol_str::SmolStr;

use crate::part::PartKind;

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("{kind} cannot follow {after}: parts must be ordered element, id, class, attribute, pseudo-class, pseudo-element")]
    Order { kind: PartKind, after: PartKind },
    #[error("{kind} may occur only once in a compound selector")]
    DuplicateKind { kind: PartKind },
    #[error("`{combinator}` is not one of the combinators ' ', '>', '+', '~'")]
    UnknownCombinator { combinator: SmolStr },
}

impl SelectorError {
    /// The part kind whose append was rejected, if any.
    pub fn kind(&self) -> Option<PartKind> {
        match self {
            Self::Order { kind, .. } | Self::DuplicateKind { kind } => Some(*kind),
            Self::UnknownCombinator { .. } => None,
        }
    }
}
