//! Composed page with section anchors

use ischool_core::{AnchorIndex, SectionId};

/// One contiguous run of lines, optionally anchored to a section id
#[derive(Debug, Clone)]
pub struct Block {
    pub anchor: Option<SectionId>,
    pub lines: Vec<String>,
}

/// The whole page, top to bottom
#[derive(Debug, Clone, Default)]
pub struct Page {
    blocks: Vec<Block>,
}

impl Page {
    pub fn push(&mut self, anchor: Option<SectionId>, lines: Vec<String>) {
        self.blocks.push(Block { anchor, lines });
    }

    /// Page text starting `offset` lines from the top
    pub fn render_from(&self, offset: usize) -> String {
        self.lines().skip(offset).collect::<Vec<_>>().join("\n")
    }

    pub fn render(&self) -> String {
        self.render_from(0)
    }

    /// Blocks are separated by one blank line
    fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().flat_map(|b| {
            b.lines
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(""))
        })
    }
}

impl AnchorIndex for Page {
    fn offset_of(&self, anchor: &str) -> Option<usize> {
        let mut offset = 0;
        for block in &self.blocks {
            if block.anchor.is_some_and(|id| id.as_str() == anchor) {
                return Some(offset);
            }
            offset += block.lines.len() + 1;
        }
        None
    }
}
