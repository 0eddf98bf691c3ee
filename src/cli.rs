//! Minimal CLI: load → extract → sort → render → assemble → write.
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use crate::render;
use crate::schema::SchemaDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// render a static HTML documentation page for the enum and pattern
/// definitions in a JSON Schema `$defs` mapping
#[derive(Parser, Debug)]
#[command(name = "generate-enum-docs")]
pub struct CommandLineInterface {
    /// input JSON file carrying optional `title` and `$defs`
    enums_json: PathBuf,

    /// destination for the rendered HTML page (parents created, file overwritten)
    output_html: PathBuf,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    /// Parse process arguments. Wrong argument count makes clap print a
    /// usage message to stderr and exit with status 2.
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // 1) load & parse
        let doc = SchemaDocument::load(&self.enums_json)?;

        // 2) extract (empty $defs is a warning, not fatal)
        if doc.defs.is_empty() {
            eprintln!("Warning: No definitions found in $defs");
        }

        // 3) render the whole page in memory, then write once
        let generated_at = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
        let html = render::render_page(&doc, &generated_at);

        write_page(&self.output_html, &html)?;
        println!("Enum documentation written to: {}", self.output_html.display());
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_page(out: &Path, html: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        // parent() yields "" for bare file names in the working directory
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {}", parent.display()))?;
        }
    }
    std::fs::write(out, html)
        .with_context(|| format!("failed to write output file {}", out.display()))?;
    Ok(())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocError;

    fn workspace(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "generate-enum-docs-{tag}-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn cli(input: PathBuf, output: PathBuf) -> CommandLineInterface {
        CommandLineInterface {
            enums_json: input,
            output_html: output,
        }
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = workspace("missing");
        let err = cli(dir.join("no-such.json"), dir.join("out.html"))
            .run()
            .unwrap_err();
        match err.downcast_ref::<DocError>() {
            Some(DocError::InputNotFound(path)) => {
                assert!(path.ends_with("no-such.json"));
            }
            other => panic!("expected InputNotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_input_fails_without_writing_output() {
        let dir = workspace("malformed");
        let input = dir.join("enums.json");
        let output = dir.join("out.html");
        std::fs::write(&input, "{not valid}").unwrap();

        let err = cli(input, output.clone()).run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DocError>(),
            Some(DocError::InputParse(_))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn generates_page_and_creates_parent_directories() {
        let dir = workspace("generate");
        let input = dir.join("enums.json");
        let output = dir.join("docs/nested/enums.html");
        std::fs::write(
            &input,
            r#"{"title":"T","$defs":{"B":{"enum":["x","y"]},"A":{"pattern":"^a+$"}}}"#,
        )
        .unwrap();

        cli(input, output.clone()).run().unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        let a = page.find("id=\"A\"").unwrap();
        let b = page.find("id=\"B\"").unwrap();
        assert!(a < b);
        assert!(page.contains("Pattern:"));
        assert!(page.contains("<li>x</li>") && page.contains("<li>y</li>"));
        assert!(page.contains("Generated at "));
    }

    #[test]
    fn empty_document_still_produces_a_page() {
        let dir = workspace("empty");
        let input = dir.join("empty.json");
        let output = dir.join("empty.html");
        std::fs::write(&input, "{}").unwrap();

        cli(input, output.clone()).run().unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(page.contains("0 definitions &middot;"));
    }

    #[test]
    fn existing_output_is_overwritten() {
        let dir = workspace("overwrite");
        let input = dir.join("enums.json");
        let output = dir.join("out.html");
        std::fs::write(&input, r#"{"$defs":{"A":{"type":"string"}}}"#).unwrap();
        std::fs::write(&output, "stale contents").unwrap();

        cli(input, output.clone()).run().unwrap();

        let page = std::fs::read_to_string(&output).unwrap();
        assert!(!page.contains("stale contents"));
        assert!(page.contains("Type: string"));
    }
}
