//! Selectors described as data, e.g. read from JSON.

use serde::Deserialize;

use crate::error::SelectorError;
use crate::factory::{SelectorBuilder, SelectorFactory};
use crate::part::PartKind;
use crate::selector::{CompoundSelector, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartDescription {
    pub kind: PartKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SelectorDescription {
    Compound {
        parts: Vec<PartDescription>,
    },
    Combined {
        left: Box<SelectorDescription>,
        combinator: String,
        right: Box<SelectorDescription>,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("compound selector has no parts")]
    EmptyCompound,
    #[error("part {index} (`{value}`) is invalid")]
    InvalidPart {
        index: usize,
        value: String,
        #[source]
        source: SelectorError,
    },
    #[error(transparent)]
    Combine(SelectorError),
}

impl SelectorDescription {
    #[tracing::instrument(skip_all)]
    pub fn build(&self, builder: &SelectorBuilder) -> Result<Selector, DescriptionError> {
        match self {
            SelectorDescription::Compound { parts } => {
                build_compound(builder, parts).map(Selector::from)
            }
            SelectorDescription::Combined {
                left,
                combinator,
                right,
            } => {
                let left = left.build(builder)?;
                let right = right.build(builder)?;
                builder
                    .try_combine(left, combinator.as_str(), right)
                    .map(Selector::from)
                    .map_err(DescriptionError::Combine)
            }
        }
    }
}

fn build_compound(
    builder: &SelectorBuilder,
    parts: &[PartDescription],
) -> Result<CompoundSelector, DescriptionError> {
    let Some((first, rest)) = parts.split_first() else {
        return Err(DescriptionError::EmptyCompound);
    };
    let mut compound = append_described(builder, 0, first)?;
    for (index, part) in rest.iter().enumerate() {
        compound = append_described(&compound, index + 1, part)?;
    }
    return Ok(compound)
}

fn append_described<F>(current: &F, index: usize, part: &PartDescription) -> Result<CompoundSelector, DescriptionError>
where
    F: SelectorFactory<Output = CompoundSelector>,
{
    current
        .append(part.kind, &part.value)
        .map_err(|source| DescriptionError::InvalidPart {
            index,
            value: part.value.clone(),
            source,
        })
}
