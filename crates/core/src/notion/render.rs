//! Rendering Notion blocks as Markdown.

use tracing::{debug, warn};

use super::NotionError;
use super::types::{Block, RichText};

const CHILD_INDENT: &str = "    ";

/// Render a block tree as Markdown.
///
/// Consecutive list items are separated by a single newline; every other
/// block is separated by a blank line.
pub fn render_blocks(blocks: &[Block]) -> Result<String, NotionError> {
    let mut out = String::new();
    let mut previous_was_item = false;
    let mut number = 0;

    for block in blocks {
        let is_item = is_list_item(block);
        number = if block.kind == "numbered_list_item" { number + 1 } else { 0 };

        let Some(rendered) = render_block(block, number)? else {
            continue;
        };

        if !out.is_empty() {
            out.push_str(if is_item && previous_was_item { "\n" } else { "\n\n" });
        }
        out.push_str(&rendered);
        previous_was_item = is_item;
    }

    Ok(out)
}

fn is_list_item(block: &Block) -> bool {
    matches!(
        block.kind.as_str(),
        "bulleted_list_item" | "numbered_list_item" | "to_do" | "toggle"
    )
}

/// Render one block with its children, or `None` when nothing is produced.
fn render_block(block: &Block, number: usize) -> Result<Option<String>, NotionError> {
    match block.kind.as_str() {
        // Layout-only blocks: their content is their children.
        "column_list" | "column" | "synced_block" => return render_container(block),
        "table" => return render_table(block),
        _ => {}
    }

    let content = block.content()?;
    let text = render_rich_text(&content.rich_text);

    let line = match block.kind.as_str() {
        "paragraph" => text,
        "heading_1" => format!("# {text}"),
        "heading_2" => format!("## {text}"),
        "heading_3" => format!("### {text}"),
        "bulleted_list_item" | "toggle" => format!("- {text}"),
        "numbered_list_item" => format!("{number}. {text}"),
        "to_do" => {
            let mark = if content.checked.unwrap_or(false) { "x" } else { " " };
            format!("- [{mark}] {text}")
        }
        "quote" | "callout" => prefix_lines(&text, "> "),
        "code" => {
            let code: String =
                content.rich_text.iter().map(|t| t.plain_text.as_str()).collect();
            let language = match content.language.as_deref() {
                Some("plain text") | None => "",
                Some(lang) => lang,
            };
            format!("```{language}\n{code}\n```")
        }
        "equation" => format!("$$\n{}\n$$", content.expression.unwrap_or_default()),
        "divider" => "---".to_string(),
        "image" => {
            let url = content.file_url().unwrap_or_default();
            format!("![{}]({url})", render_rich_text(&content.caption))
        }
        "bookmark" | "link_preview" | "embed" => {
            let url = content.url.unwrap_or_default();
            let caption = render_rich_text(&content.caption);
            if caption.is_empty() { url } else { format!("[{caption}]({url})") }
        }
        "child_page" => format!("**{}**", content.title.unwrap_or_default()),
        other => {
            if block.has_children {
                warn!(
                    kind = other,
                    id = %block.id,
                    "dropping unsupported block and its children"
                );
            } else {
                warn!(kind = other, id = %block.id, "dropping unsupported block");
            }
            return Ok(None);
        }
    };

    if block.children.is_empty() {
        return Ok(Some(line));
    }

    let children = render_blocks(&block.children)?;
    let rendered = if is_list_item(block) {
        format!("{line}\n{}", prefix_lines(&children, CHILD_INDENT))
    } else {
        format!("{line}\n\n{children}")
    };
    Ok(Some(rendered))
}

fn render_container(block: &Block) -> Result<Option<String>, NotionError> {
    let inner = render_blocks(&block.children)?;
    if inner.is_empty() {
        debug!(kind = %block.kind, id = %block.id, "empty container block");
        return Ok(None);
    }
    Ok(Some(inner))
}

/// Render a `table` and its `table_row` children as a pipe table whose first
/// row is the header.
fn render_table(block: &Block) -> Result<Option<String>, NotionError> {
    let mut rows = Vec::new();
    for row in block.children.iter().filter(|b| b.kind == "table_row") {
        let cells = row.content()?.cells;
        rows.push(cells.iter().map(|c| table_cell(c)).collect::<Vec<_>>());
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    if width == 0 {
        debug!(id = %block.id, "empty table");
        return Ok(None);
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    for (i, row) in rows.iter().enumerate() {
        let mut cells: Vec<&str> = row.iter().map(String::as_str).collect();
        cells.resize(width, "");
        lines.push(format!("| {} |", cells.join(" | ")));
        if i == 0 {
            lines.push(format!("| {} |", vec!["---"; width].join(" | ")));
        }
    }
    Ok(Some(lines.join("\n")))
}

fn table_cell(parts: &[RichText]) -> String {
    render_rich_text(parts).replace('|', "\\|").replace('\n', "<br>")
}

/// Render rich text spans with their annotations.
pub fn render_rich_text(parts: &[RichText]) -> String {
    parts.iter().map(render_span).collect()
}

fn render_span(part: &RichText) -> String {
    let mut s = part.plain_text.clone();
    if s.trim().is_empty() {
        return s;
    }

    let a = &part.annotations;
    if a.code {
        s = format!("`{s}`");
    }
    if a.bold {
        s = format!("**{s}**");
    }
    if a.italic {
        s = format!("_{s}_");
    }
    if a.strikethrough {
        s = format!("~~{s}~~");
    }
    if let Some(href) = &part.href {
        s = format!("[{s}]({href})");
    }
    s
}

/// Prefix every line (blank ones included, trimmed) with `prefix`.
fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
