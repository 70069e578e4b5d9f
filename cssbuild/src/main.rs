use std::io::{Read, Write};

use anyhow::{bail, Context};
use cssbuild::description::SelectorDescription;
use cssbuild::logging::{set_level, tracing_init};
use cssbuild::{Config, SelectorBuilder};
use serde_json::Value;
use tracing::level_filters::LevelFilter;

fn main() {
    let level_handle = tracing_init(LevelFilter::WARN);

    if let Err(err) = run(|config| {
        if let Some(level) = config.level_filter()? {
            set_level(&level_handle, level)?;
        }
        Ok(())
    }) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(apply_logging: impl FnOnce(&Config) -> anyhow::Result<()>) -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("could not read config file {}", path.to_string_lossy()))?;
            Config::from_json(&text)?
        }
        None => Config::default(),
    };
    if args.next().is_some() {
        bail!("usage: cssbuild [CONFIG.json] < descriptions.json");
    }
    apply_logging(&config)?;

    run_with(&config, std::io::stdin().lock(), std::io::stdout().lock())
}

/// Reads one description or an array of them from `input` and writes one
/// stringified selector per line to `out`.
fn run_with(config: &Config, mut input: impl Read, mut out: impl Write) -> anyhow::Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("could not read selector descriptions")?;
    let descriptions = parse_descriptions(&text)?;

    let builder = SelectorBuilder::with_config(config);
    for (index, description) in descriptions.iter().enumerate() {
        let selector = description
            .build(&builder)
            .with_context(|| format!("selector {index} is invalid"))?;
        writeln!(out, "{selector}").context("could not write selector")?;
    }
    Ok(())
}

fn parse_descriptions(text: &str) -> anyhow::Result<Vec<SelectorDescription>> {
    let value: Value = serde_json::from_str(text).context("selector descriptions are not valid JSON")?;
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item)
                    .with_context(|| format!("invalid description for selector {index}"))
            })
            .collect(),
        value => {
            let description = serde_json::from_value(value).context("invalid selector description")?;
            Ok(vec![description])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssbuild::CombinatorPolicy;

    const DIV_MAIN: &str = r#"{"type": "compound", "parts": [
        {"kind": "element", "value": "div"}, {"kind": "id", "value": "main"}
    ]}"#;

    fn output(config: &Config, input: &str) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run_with(config, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn single_description() {
        assert_eq!(output(&Config::default(), DIV_MAIN).unwrap(), "div#main\n");
    }

    #[test]
    fn array_prints_one_line_each() {
        let input = format!(
            r#"[{DIV_MAIN}, {{"type": "combined", "left": {DIV_MAIN}, "combinator": "+",
                "right": {{"type": "compound", "parts": [{{"kind": "element", "value": "span"}}]}}}}]"#
        );
        assert_eq!(
            output(&Config::default(), &input).unwrap(),
            "div#main\ndiv#main + span\n"
        );
    }

    #[test]
    fn invalid_selector_names_its_index() {
        let input = format!(
            r#"[{DIV_MAIN}, {{"type": "compound", "parts": [
                {{"kind": "element", "value": "a"}}, {{"kind": "element", "value": "b"}}
            ]}}]"#
        );
        let err = output(&Config::default(), &input).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("selector 1 is invalid: part 1 (`b`) is invalid"), "{message}");
        assert!(message.contains("element may occur only once"), "{message}");
    }

    #[test]
    fn unknown_kind_is_reported() {
        let input = format!(r#"[{DIV_MAIN}, {{"type": "compound", "parts": [{{"kind": "bogus", "value": "a"}}]}}]"#);
        let message = format!("{:#}", output(&Config::default(), &input).unwrap_err());
        assert!(message.starts_with("invalid description for selector 1"), "{message}");
        assert!(message.contains("unknown variant `bogus`"), "{message}");
    }

    #[test]
    fn strict_config_rejects_unknown_combinator() {
        let config = Config {
            combinators: CombinatorPolicy::Strict,
            ..Default::default()
        };
        let input = format!(r#"{{"type": "combined", "left": {DIV_MAIN}, "combinator": "||", "right": {DIV_MAIN}}}"#);
        let message = format!("{:#}", output(&config, &input).unwrap_err());
        assert!(message.starts_with("selector 0 is invalid"), "{message}");
        assert_eq!(output(&Config::default(), &input).unwrap(), "div#main || div#main\n");
    }

    #[test]
    fn malformed_json() {
        let message = format!("{:#}", output(&Config::default(), "[{").unwrap_err());
        assert!(message.starts_with("selector descriptions are not valid JSON"), "{message}");
    }
}
