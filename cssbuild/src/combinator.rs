//! Combinators joining two selectors.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use smol_str::SmolStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// The documented combinators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum CombinatorKind {
    #[strum(serialize = " ")]
    Descendant,
    #[strum(serialize = ">")]
    Child,
    #[strum(serialize = "+")]
    NextSibling,
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl CombinatorKind {
    pub fn from_token(token: &str) -> Option<Self> {
        Self::from_str(token).ok()
    }

    pub fn token(self) -> &'static str {
        self.into()
    }
}

/// Combinator token as passed to `combine`. Any string is accepted and rendered
/// verbatim; [`Combinator::kind`] tells whether it is one of the known ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Combinator(SmolStr);

impl Combinator {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> Option<CombinatorKind> {
        CombinatorKind::from_token(&self.0)
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        Self(token.into())
    }
}

impl From<String> for Combinator {
    fn from(token: String) -> Self {
        Self(token.into())
    }
}

impl From<SmolStr> for Combinator {
    fn from(token: SmolStr) -> Self {
        Self(token)
    }
}

impl From<CombinatorKind> for Combinator {
    fn from(kind: CombinatorKind) -> Self {
        Self(SmolStr::new_inline(kind.token()))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn known_tokens() {
        let tokens: Vec<&str> = CombinatorKind::iter().map(CombinatorKind::token).collect();
        assert_eq!(tokens, vec![" ", ">", "+", "~"]);
        for kind in CombinatorKind::iter() {
            assert_eq!(CombinatorKind::from_token(kind.token()), Some(kind));
            assert_eq!(Combinator::from(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn unknown_token_is_kept_verbatim() {
        let combinator = Combinator::from("||");
        assert_eq!(combinator.kind(), None);
        assert_eq!(combinator.to_string(), "||");
        assert_eq!(CombinatorKind::from_token(">>"), None);
    }
}
