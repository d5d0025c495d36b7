use ins_core::responses::Reply;
use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print the content of a reply; `NoContent` prints nothing.
pub fn output_reply<T: Serialize>(reply: &Reply<T>, format: OutputFormat) -> anyhow::Result<()> {
    match reply {
        Reply::Content(value) => output(value, format),
        Reply::NoContent => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ins_core::enums::ActivityFacet;

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&vec![ActivityFacet::Tickets], OutputFormat::Raw).unwrap();
        assert_eq!(rendered, r#"["tickets"]"#);
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&vec![ActivityFacet::Reported], OutputFormat::Json).unwrap();
        assert_eq!(rendered, "[\n  \"reported\"\n]");
    }
}
