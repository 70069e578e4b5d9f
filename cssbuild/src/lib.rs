#![allow(clippy::needless_return)]
#![allow(clippy::new_without_default)]

//! Builds CSS selector strings from typed parts.
//!
//! ```
//! use cssbuild::{SelectorBuilder, SelectorFactory};
//!
//! let b = SelectorBuilder::new();
//! let link = b.element("a").attr("href$=\".png\"").pseudo_class("focus").unwrap();
//! let nav = b.combine(b.element("nav").id("top").unwrap(), ">", link);
//! assert_eq!(nav.stringify(), "nav#top > a[href$=\".png\"]:focus");
//! ```

pub mod combinator;
pub mod config;
pub mod description;
mod error;
mod factory;
pub mod logging;
mod part;
mod selector;
pub mod specificity;


pub use combinator::{Combinator, CombinatorKind};
pub use config::{CombinatorPolicy, Config};
pub use error::{SelectorError, SelectorResult};
pub use factory::{append_part, check_append, SelectorBuilder, SelectorFactory};
pub use part::{PartKind, SelectorPart};
pub use selector::{CombinedSelector, CompoundSelector, Selector};
pub use specificity::Specificity;
