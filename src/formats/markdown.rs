//! Markdown format implementation using tree-sitter-md.
//!
//! Every ATX heading (`#` syntax) opens a section and every list item below it becomes one
//! element, its text joined onto a single line. Task markers (`[ ]`, `[x]`) stay part of the
//! element text.
//!
//! Blocks between a heading and its list (prose, code blocks, setext headings) are kept verbatim
//! as the heading's body and written back under it. Content that has no place in the outline is
//! refused with `InvalidData` rather than dropped on save: anything before the first heading,
//! anything after a section's list items, and list items holding more than one paragraph or a
//! nested block.

use crate::config::Config;
use crate::formats::{Document, Format};
use crate::section::{Heading, Section};
use std::fmt::Write;
use std::io;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

const OUTLINE_QUERY: &str = "(atx_heading) @heading (list) @list (list_item) @item";

/// Tree-sitter driven reader for heading-and-bullet outlines.
pub struct MarkdownFormat;

enum Entry {
    Heading(Heading),
    Item(String),
    Body(String),
}

impl Format for MarkdownFormat {
    fn parse(&self, source: &str) -> io::Result<Document> {
        let language: tree_sitter::Language = tree_sitter_md::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| io::Error::other(e.to_string()))?;
        let tree = parser.parse(source, None).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "Failed to parse markdown")
        })?;

        let query =
            Query::new(&language, OUTLINE_QUERY).map_err(|e| io::Error::other(e.to_string()))?;
        let capture_names = query.capture_names();
        let bytes = source.as_bytes();

        let mut entries = Vec::new();
        let mut covered = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&query, tree.root_node(), bytes);
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                match capture_names[capture.index as usize] {
                    "heading" => {
                        covered.push(node.byte_range());
                        let heading = heading_of(node, bytes)?;
                        entries.push((node.start_byte(), Entry::Heading(heading)));
                    }
                    "list" => covered.push(node.byte_range()),
                    _ => entries.push((node.start_byte(), Entry::Item(item_text(node, bytes)?))),
                }
            }
        }

        covered.sort_by_key(|range| range.start);
        let mut pos = 0;
        for range in covered.into_iter().chain(std::iter::once(source.len()..source.len())) {
            if range.start > pos {
                if let Some(text) = source.get(pos..range.start).and_then(block_text) {
                    entries.push((pos, Entry::Body(text)));
                }
            }
            pos = pos.max(range.end);
        }
        entries.sort_by_key(|(start, _)| *start);

        let mut sections: Document = Vec::new();
        for (start, entry) in entries {
            match entry {
                Entry::Heading(heading) => sections.push(Section::new(heading, Vec::new())),
                Entry::Item(text) => match sections.last_mut() {
                    Some(section) => section.elements.push(text),
                    None => {
                        return Err(invalid(format!(
                            "list item at byte {start} appears before any heading"
                        )))
                    }
                },
                Entry::Body(text) => match sections.last_mut() {
                    Some(section) if section.elements.is_empty() => {
                        if !section.header.body.is_empty() {
                            section.header.body.push_str("\n\n");
                        }
                        section.header.body.push_str(&text);
                    }
                    Some(section) => {
                        return Err(invalid(format!(
                            "content at byte {start} follows the list of \"{}\" and would be lost",
                            section.header.title
                        )))
                    }
                    None => {
                        return Err(invalid(format!(
                            "content at byte {start} appears before any heading and would be lost"
                        )))
                    }
                },
            }
        }

        Ok(sections)
    }

    fn render(&self, sections: &[Section<Heading, String>], cfg: &Config) -> io::Result<String> {
        let mut out = String::new();

        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let level = if section.header.level == 0 {
                cfg.heading_level
            } else {
                section.header.level
            };
            writeln!(out, "{} {}", "#".repeat(level), section.header.title)
                .map_err(io::Error::other)?;

            if !section.header.body.is_empty() {
                writeln!(out, "\n{}", section.header.body).map_err(io::Error::other)?;
            }

            if !section.elements.is_empty() {
                out.push('\n');
                for element in &section.elements {
                    writeln!(out, "{} {element}", cfg.list_marker).map_err(io::Error::other)?;
                }
            }
        }

        Ok(out)
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn node_text<'a>(node: Node<'_>, bytes: &'a [u8]) -> io::Result<&'a str> {
    node.utf8_text(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Uncovered source with blank lines trimmed from both ends; `None` when nothing is left.
fn block_text(gap: &str) -> Option<String> {
    let lines: Vec<&str> = gap
        .trim_end()
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Depth comes from the run of `#` markers, the title from the inline content.
fn heading_of(node: Node<'_>, bytes: &[u8]) -> io::Result<Heading> {
    let raw = node_text(node, bytes)?;
    let level = raw.trim_start().chars().take_while(|c| *c == '#').count();

    let mut walker = node.walk();
    let inline = node
        .named_children(&mut walker)
        .find(|child| child.kind() == "inline")
        .map(|inline| node_text(inline, bytes))
        .transpose()?
        .unwrap_or_default();

    Ok(Heading::new(level, strip_closing_sequence(inline)))
}

/// Drops an optional closing run of `#`. The run only counts when it is the whole title or
/// follows whitespace, so `C#` keeps its hash.
fn strip_closing_sequence(title: &str) -> &str {
    let title = title.trim();
    let open = title.trim_end_matches('#');
    if open.len() == title.len() {
        title
    } else if open.is_empty() || open.ends_with([' ', '\t']) {
        open.trim_end()
    } else {
        title
    }
}

/// Item text runs from the end of the bullet to the end of its paragraph, so a task marker
/// between them is kept. Items carrying anything beyond one paragraph are refused.
fn item_text(node: Node<'_>, bytes: &[u8]) -> io::Result<String> {
    let mut start = node.start_byte();
    let mut end = None;
    let mut paragraphs = 0;

    let mut walker = node.walk();
    for child in node.named_children(&mut walker) {
        let kind = child.kind();
        if kind.starts_with("list_marker") {
            start = child.end_byte();
        } else if kind == "paragraph" || kind.starts_with("task_list_marker") {
            paragraphs += usize::from(kind == "paragraph");
            end = Some(child.end_byte());
        } else if kind != "block_continuation" {
            return Err(invalid(format!(
                "list item at byte {} holds a {kind} that cannot be kept",
                node.start_byte()
            )));
        }
    }

    if paragraphs > 1 {
        return Err(invalid(format!(
            "list item at byte {} spans several paragraphs",
            node.start_byte()
        )));
    }

    let Some(end) = end else {
        return Ok(String::new());
    };
    let raw = std::str::from_utf8(&bytes[start.min(end)..end])
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let text = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(text)
}
