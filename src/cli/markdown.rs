use colored::*;
use pulldown_cmark::{Event, Parser, Tag};

/// Renders service Markdown as styled terminal text, the CLI counterpart
/// of a browser Markdown view.
pub fn render_markdown(markdown: &str) -> String {
    let mut renderer = TerminalRenderer::new();
    for event in Parser::new(markdown) {
        renderer.handle_event(event);
    }
    renderer.finish()
}

struct TerminalRenderer {
    out: String,
    in_heading: bool,
    in_code_block: bool,
    in_quote: bool,
    bold: bool,
    italic: bool,
    // One entry per open list; Some(n) carries the next ordered index.
    list_stack: Vec<Option<u64>>,
}

impl TerminalRenderer {
    fn new() -> Self {
        TerminalRenderer {
            out: String::new(),
            in_heading: false,
            in_code_block: false,
            in_quote: false,
            bold: false,
            italic: false,
            list_stack: Vec::new(),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Start(Tag::Heading(..)) => self.in_heading = true,
            Event::End(Tag::Heading(..)) => {
                self.in_heading = false;
                self.out.push_str("\n\n");
            }
            Event::End(Tag::Paragraph) => self.out.push_str("\n\n"),
            Event::Start(Tag::CodeBlock(_)) => self.in_code_block = true,
            Event::End(Tag::CodeBlock(_)) => {
                self.in_code_block = false;
                self.out.push('\n');
            }
            Event::Start(Tag::BlockQuote) => self.in_quote = true,
            Event::End(Tag::BlockQuote) => self.in_quote = false,
            Event::Start(Tag::List(start)) => self.list_stack.push(start),
            Event::End(Tag::List(_)) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.out.push('\n');
                }
            }
            Event::Start(Tag::Item) => self.push_item_marker(),
            Event::End(Tag::Item) => {
                if !self.out.ends_with('\n') {
                    self.out.push('\n');
                }
            }
            Event::Start(Tag::Emphasis) => self.italic = true,
            Event::End(Tag::Emphasis) => self.italic = false,
            Event::Start(Tag::Strong) => self.bold = true,
            Event::End(Tag::Strong) => self.bold = false,
            Event::End(Tag::Link(_, dest, _)) => {
                if !dest.is_empty() {
                    let target = format!(" ({})", dest);
                    self.out.push_str(&target.dimmed().to_string());
                }
            }
            Event::Text(text) => {
                if self.in_code_block {
                    self.push_code_block(&text);
                } else {
                    let styled = self.styled(&text);
                    self.out.push_str(&styled);
                }
            }
            Event::Code(code) => {
                self.out.push_str(&code.yellow().to_string());
            }
            Event::SoftBreak | Event::HardBreak => self.out.push('\n'),
            Event::Rule => {
                self.out.push_str(&"─".repeat(40).dimmed().to_string());
                self.out.push_str("\n\n");
            }
            _ => {}
        }
    }

    fn push_item_marker(&mut self) {
        let indent = "  ".repeat(self.list_stack.len().max(1));
        match self.list_stack.last_mut() {
            Some(Some(index)) => {
                let marker = format!("{}{}. ", indent, index);
                *index += 1;
                self.out.push_str(&marker);
            }
            _ => self.out.push_str(&format!("{}• ", indent)),
        }
    }

    fn push_code_block(&mut self, text: &str) {
        for line in text.lines() {
            self.out.push_str("    ");
            self.out.push_str(&line.dimmed().to_string());
            self.out.push('\n');
        }
    }

    fn styled(&self, text: &str) -> String {
        if self.in_heading {
            text.bright_cyan().bold().to_string()
        } else if self.bold {
            text.bold().to_string()
        } else if self.italic {
            text.italic().to_string()
        } else if self.in_quote {
            text.dimmed().italic().to_string()
        } else {
            text.to_string()
        }
    }

    fn finish(self) -> String {
        let mut rendered = self.out.trim_end().to_string();
        rendered.push('\n');
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(markdown: &str) -> String {
        colored::control::set_override(false);
        render_markdown(markdown)
    }

    #[test]
    fn test_plain_paragraph_passes_through() {
        assert_eq!(render_plain("hello world"), "hello world\n");
    }

    #[test]
    fn test_heading_loses_markup() {
        let rendered = render_plain("# Project Title");
        assert!(rendered.contains("Project Title"));
        assert!(!rendered.contains('#'));
    }

    #[test]
    fn test_unordered_list_bullets() {
        let rendered = render_plain("- one\n- two");
        assert!(rendered.contains("  • one"));
        assert!(rendered.contains("  • two"));
    }

    #[test]
    fn test_ordered_list_keeps_numbering() {
        let rendered = render_plain("1. first\n2. second");
        assert!(rendered.contains("  1. first"));
        assert!(rendered.contains("  2. second"));
    }

    #[test]
    fn test_code_block_is_indented() {
        let rendered = render_plain("```\nfn main() {}\n```");
        assert!(rendered.contains("    fn main() {}"));
    }

    #[test]
    fn test_link_target_is_kept() {
        let rendered = render_plain("[Rust](https://www.rust-lang.org)");
        assert!(rendered.contains("Rust"));
        assert!(rendered.contains("(https://www.rust-lang.org)"));
    }

    #[test]
    fn test_inline_code_content_survives() {
        let rendered = render_plain("run `cargo doc` first");
        assert!(rendered.contains("cargo doc"));
    }
}
