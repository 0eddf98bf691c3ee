//! Card rendering and page assembly.
//!
//! Produces one self-contained HTML document: a header card (title, meta
//! line, back link, table of contents) followed by one card per definition
//! in sorted order. The style sheet is inlined; the output references no
//! external asset and carries no script.

use serde_json::Value;

use crate::escape::escape_html;
use crate::schema::{Definition, SchemaDocument, Shape};

// ————————————————————————————————————————————————————————————————————————————
// PAGE CHROME
// ————————————————————————————————————————————————————————————————————————————

/// Companion page produced by a separate generator; linked, never written.
const TRANSPORT_SCHEMA_HREF: &str = "./credittimeline-file.v1.schema.html";

const STYLE: &str = r#"      :root {
        --bg: #f6f8fb;
        --fg: #10243e;
        --muted: #4a617f;
        --card: #ffffff;
        --accent: #0054a6;
      }
      body {
        margin: 0;
        padding: 2rem;
        background: var(--bg);
        color: var(--fg);
        font-family: "Avenir Next", "Segoe UI", sans-serif;
      }
      main {
        max-width: 900px;
        margin: 0 auto;
      }
      .card {
        background: var(--card);
        border-radius: 14px;
        padding: 1.25rem 1.5rem;
        box-shadow: 0 10px 30px rgba(16, 36, 62, 0.08);
        margin-bottom: 1.5rem;
      }
      h1 {
        margin-top: 0;
      }
      h2 {
        margin-top: 0;
        color: var(--fg);
        font-size: 1.1rem;
      }
      .meta {
        color: var(--muted);
        margin-bottom: 1rem;
      }
      a {
        color: var(--accent);
      }
      .enum-description {
        color: var(--muted);
        margin: 0.5rem 0 0.75rem;
      }
      .enum-values {
        display: flex;
        flex-wrap: wrap;
        gap: 0.4rem;
        padding: 0;
        list-style: none;
        margin: 0;
      }
      .enum-values li {
        background: var(--bg);
        border-radius: 6px;
        padding: 0.25rem 0.6rem;
        font-family: "SF Mono", "Fira Code", monospace;
        font-size: 0.85rem;
      }
      .pattern-value {
        font-family: "SF Mono", "Fira Code", monospace;
        font-size: 0.85rem;
        background: var(--bg);
        border-radius: 6px;
        padding: 0.25rem 0.6rem;
        display: inline-block;
      }
      .toc {
        line-height: 1.8;
      }
      .toc a {
        text-decoration: none;
      }
      .toc a:hover {
        text-decoration: underline;
      }
"#;

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

/// String form of one enum value: strings render bare, every other scalar
/// uses its JSON text (`true`, `null`, `3`, `4.5`).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_body(defn: &Definition) -> String {
    match defn.shape() {
        Shape::Enum(values) => {
            let items = values
                .iter()
                .map(|v| format!("        <li>{}</li>", escape_html(&scalar_text(v))))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul class=\"enum-values\">\n{items}\n      </ul>")
        }
        Shape::Pattern(pattern) => {
            format!(
                "<p>Pattern: <span class=\"pattern-value\">{}</span></p>",
                escape_html(pattern)
            )
        }
        Shape::Plain(type_label) => {
            format!(
                "<p class=\"enum-description\">Type: {}</p>",
                escape_html(type_label)
            )
        }
    }
}

/// One card, anchored by the definition name.
pub fn render_card(name: &str, defn: &Definition) -> String {
    let name = escape_html(name);
    let desc = escape_html(defn.description());
    let body = render_body(defn);
    format!(
        r#"    <div class="card" id="{name}">
      <h2>{name}</h2>
      <p class="enum-description">{desc}</p>
      {body}
    </div>"#
    )
}

/// Table of contents: one anchor link per sorted name, middle-dot separated.
pub fn render_toc(sorted_names: &[&str]) -> String {
    sorted_names
        .iter()
        .map(|name| {
            let name = escape_html(name);
            format!("<a href=\"#{name}\">{name}</a>")
        })
        .collect::<Vec<_>>()
        .join(" &middot;\n        ")
}

/// Assemble the full page. `generated_at` is captured by the caller so a
/// frozen clock yields byte-identical output for identical input.
pub fn render_page(doc: &SchemaDocument, generated_at: &str) -> String {
    let sorted_names = doc.sorted_names();
    let title = escape_html(doc.title());
    let count = sorted_names.len();
    let toc = render_toc(&sorted_names);
    let cards = sorted_names
        .iter()
        .map(|&name| render_card(name, &doc.defs[name]))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <style>
{STYLE}    </style>
  </head>
  <body>
    <main>
      <div class="card">
        <h1>{title}</h1>
        <p class="meta">{count} definitions &middot; Generated at {generated_at}</p>
        <p class="meta"><a href="{TRANSPORT_SCHEMA_HREF}">&larr; Back to Transport Schema</a></p>
        <div class="toc">
        {toc}
        </div>
      </div>

{cards}
    </main>
  </body>
</html>
"#
    )
}

// ------------------------------- Tests ------------------------------------ //
