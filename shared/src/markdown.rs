//! Just enough markdown for the blog posts: headings, bullet and numbered
//! lists, paragraphs, bold text and links. Output is a block tree the
//! frontend turns into elements, never raw HTML.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Deserialize};

static INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<strong>.+?)\*\*|\[(?P<text>[^\]]+)\]\((?P<href>[^)\s]+)\)")
        .expect("inline markdown pattern")
});

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+(?P<item>.*)$").expect("ordered item pattern"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Link { text: String, href: String },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph(Vec<Inline>),
    List(Vec<Vec<Inline>>),
    OrderedList(Vec<Vec<Inline>>),
}

pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        if let Some(strong) = caps.name("strong") {
            spans.push(Inline::Strong(strong.as_str().to_string()));
        } else if let (Some(label), Some(href)) = (caps.name("text"), caps.name("href")) {
            spans.push(Inline::Link {
                text: label.as_str().to_string(),
                href: href.as_str().to_string(),
            });
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Inline::Text(text[last..].to_string()));
    }
    spans
}

enum Pending {
    None,
    Paragraph(Vec<String>),
    List(Vec<Vec<Inline>>),
    Ordered(Vec<Vec<Inline>>),
}

impl Pending {
    fn flush(&mut self, blocks: &mut Vec<Block>) {
        match std::mem::replace(self, Pending::None) {
            Pending::None => {}
            Pending::Paragraph(lines) => blocks.push(Block::Paragraph(parse_inline(&lines.join(" ")))),
            Pending::List(items) => blocks.push(Block::List(items)),
            Pending::Ordered(items) => blocks.push(Block::OrderedList(items)),
        }
    }
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    rest.starts_with(' ').then(|| (level as u8, rest.trim()))
}

pub fn parse(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut pending = Pending::None;

    for line in markdown.lines().map(str::trim) {
        if line.is_empty() {
            pending.flush(&mut blocks);
            continue;
        }

        if let Some((level, text)) = heading(line) {
            pending.flush(&mut blocks);
            blocks.push(Block::Heading { level, content: parse_inline(text) });
        } else if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            if !matches!(pending, Pending::List(_)) {
                pending.flush(&mut blocks);
                pending = Pending::List(Vec::new());
            }
            if let Pending::List(items) = &mut pending {
                items.push(parse_inline(item.trim()));
            }
        } else if let Some(caps) = ORDERED_ITEM.captures(line) {
            let item = caps.name("item").map_or("", |m| m.as_str());
            if !matches!(pending, Pending::Ordered(_)) {
                pending.flush(&mut blocks);
                pending = Pending::Ordered(Vec::new());
            }
            if let Pending::Ordered(items) = &mut pending {
                items.push(parse_inline(item.trim()));
            }
        } else {
            if !matches!(pending, Pending::Paragraph(_)) {
                pending.flush(&mut blocks);
                pending = Pending::Paragraph(Vec::new());
            }
            if let Pending::Paragraph(lines) = &mut pending {
                lines.push(line.to_string());
            }
        }
    }

    pending.flush(&mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn test_inline_bold_and_link() {
        let spans = parse_inline("**Apua?** [Ota yhteyttä](/contact) nyt.");
        assert_eq!(spans, vec![
            Inline::Strong("Apua?".to_string()),
            text(" "),
            Inline::Link { text: "Ota yhteyttä".to_string(), href: "/contact".to_string() },
            text(" nyt."),
        ]);
    }

    #[test]
    fn test_unclosed_markers_stay_text() {
        assert_eq!(parse_inline("**auki ja [ei linkki"), vec![text("**auki ja [ei linkki")]);
        assert!(parse_inline("").is_empty());
    }

    #[test]
    fn test_blocks() {
        let source = "
Johdanto rivi yksi
ja rivi kaksi.

## Otsikko
- Eka
- **Toka**: selitys

### Alaotsikko
1. **Intro** (30-60 sek)
2. Outro
";
        let blocks = parse(source);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0], Block::Paragraph(vec![text("Johdanto rivi yksi ja rivi kaksi.")]));
        assert_eq!(blocks[1], Block::Heading { level: 2, content: vec![text("Otsikko")] });
        assert_eq!(blocks[2], Block::List(vec![
            vec![text("Eka")],
            vec![Inline::Strong("Toka".to_string()), text(": selitys")],
        ]));
        assert_eq!(blocks[3], Block::Heading { level: 3, content: vec![text("Alaotsikko")] });
        match &blocks[4] {
            Block::OrderedList(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0][0], Inline::Strong("Intro".to_string()));
            }
            other => panic!("expected ordered list, got {:?}", other),
        }
    }

    #[test]
    fn test_list_directly_after_paragraph() {
        let blocks = parse("Keskity:\n- Strategiaan\n- Viihteeseen");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Paragraph(_)));
        assert!(matches!(&blocks[1], Block::List(items) if items.len() == 2));
    }

    #[test]
    fn test_hash_without_space_is_text() {
        assert_eq!(parse("#hashtag"), vec![Block::Paragraph(vec![text("#hashtag")])]);
    }
}
