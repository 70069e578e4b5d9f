use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::part::{PartKind, SelectorPart};
use crate::selector::{CompoundSelector, Selector};

/// Selector specificity, compared field by field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Specificity {
    // count of identifiers (e.g. `#app`)
    pub id: usize,
    // count of attributes (`[type="number"]`), classes (`.container-fluid`), and pseudo-classes (`:hover`)
    pub attr: usize,
    // count of tag names (`div`), and pseudo-elements (`::before`)
    pub tag: usize,
}

impl Specificity {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(id: usize, attr: usize, tag: usize) -> Self {
        Self { id, attr, tag }
    }

    fn of_part(part: &SelectorPart) -> Self {
        match part.kind {
            PartKind::Id => Self::new(1, 0, 0),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => Self::new(0, 1, 0),
            // the universal selector does not count
            PartKind::Element if part.value.as_str() == "*" => Self::ZERO,
            PartKind::Element | PartKind::PseudoElement => Self::new(0, 0, 1),
        }
    }
}

impl Add for Specificity {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self::Output {
        self.id += rhs.id;
        self.attr += rhs.attr;
        self.tag += rhs.tag;
        return self
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.attr, self.tag)
    }
}

impl CompoundSelector {
    pub fn specificity(&self) -> Specificity {
        self.parts()
            .iter()
            .map(Specificity::of_part)
            .fold(Specificity::ZERO, Add::add)
    }
}

impl Selector {
    pub fn specificity(&self) -> Specificity {
        self.compounds()
            .into_iter()
            .map(CompoundSelector::specificity)
            .fold(Specificity::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::Specificity;
    use crate::{SelectorBuilder, SelectorFactory};

    #[test]
    fn order() {
        assert!(Specificity::new(3, 3, 3) > Specificity::new(2, 4, 4));
        assert!(Specificity::new(3, 3, 3) > Specificity::new(3, 2, 4));
        assert!(Specificity::new(3, 3, 3) > Specificity::new(3, 3, 2));
        assert_eq!(Specificity::new(3, 3, 3), Specificity::new(3, 3, 3));
    }

    #[test]
    fn compound() {
        let b = SelectorBuilder::new();
        let sel = b.element("a").id("x").class("c").attr("href").pseudo_class("hover").pseudo_element("before").unwrap();
        assert_eq!(sel.specificity(), Specificity::new(1, 3, 2));
        assert_eq!(b.element("*").unwrap().specificity(), Specificity::ZERO);
        assert_eq!(sel.specificity().to_string(), "(1, 3, 2)");
    }

    #[test]
    fn combined_sums_both_sides() {
        let b = SelectorBuilder::new();
        let sel = b.combine(
            b.element("ul").id("menu").unwrap(),
            ">",
            b.combine(b.element("li").unwrap(), " ", b.class("item").unwrap()),
        );
        assert_eq!(crate::Selector::from(sel).specificity(), Specificity::new(1, 1, 2));
    }
}
