//! Sample selectors shared by the benchmarks.

use cssbuild::description::SelectorDescription;
use cssbuild::{CombinedSelector, SelectorBuilder, SelectorFactory, SelectorResult};

/// The four-compound selector from the builder docs, built call by call.
pub fn nested_sample(b: &SelectorBuilder) -> SelectorResult<CombinedSelector> {
    Ok(b.combine(
        b.combine(
            b.element("div").id("main").class("container").class("draggable")?,
            "+",
            b.element("table").id("data")?,
        ),
        "~",
        b.combine(
            b.element("tr").pseudo_class("nth-of-type(even)")?,
            " ",
            b.element("td").pseudo_class("nth-of-type(even)")?,
        ),
    ))
}

/// A chain of `depth` child combinators, `li > li > ...`.
pub fn deep_sample(b: &SelectorBuilder, depth: usize) -> SelectorResult<CombinedSelector> {
    let mut sel = b.combine(b.element("ul")?, ">", b.element("li").class("item")?);
    for _ in 1..depth {
        sel = b.combine(sel, ">", b.element("li").class("item")?);
    }
    Ok(sel)
}

pub fn description_sample() -> SelectorDescription {
    serde_json::from_str(
        r#"{
            "type": "combined",
            "left": {"type": "compound", "parts": [
                {"kind": "element", "value": "a"},
                {"kind": "attribute", "value": "href$=\".png\""},
                {"kind": "pseudoClass", "value": "focus"}
            ]},
            "combinator": ">",
            "right": {"type": "compound", "parts": [{"kind": "pseudoElement", "value": "after"}]}
        }"#,
    )
    .expect("sample description should be valid JSON")
}
