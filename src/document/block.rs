// Notes and the blocks they are made of

use crate::common::{Result, generate_id, now_millis};
use crate::formula::{MathAst, to_markup};
use serde::{Deserialize, Serialize};

/// Title given to notes created without one
pub const DEFAULT_NOTE_TITLE: &str = "Untitled Note";

/// A math expression block.
///
/// `latex` caches the compiled form of `ast`; [`MathBlock::set_ast`] keeps
/// the two in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathBlock {
    pub id: String,
    /// Rendered within the text flow rather than on its own line
    pub inline: bool,
    pub ast: MathAst,
    pub latex: String,
}

impl MathBlock {
    /// Create a block with a fresh id and compiled markup
    pub fn new(ast: MathAst, inline: bool) -> Self {
        let latex = to_markup(&ast);
        Self {
            id: generate_id(),
            inline,
            ast,
            latex,
        }
    }

    /// Replace the expression and recompile its markup
    pub fn set_ast(&mut self, ast: MathAst) {
        self.latex = to_markup(&ast);
        self.ast = ast;
    }
}

/// One block of a note, tagged by `type` (`paragraph` or `math`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { id: String, text: String },
    Math(MathBlock),
}

impl ContentBlock {
    /// Paragraph with a fresh id
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            id: generate_id(),
            text: text.into(),
        }
    }

    /// Math block with a fresh id
    pub fn math(ast: MathAst, inline: bool) -> Self {
        ContentBlock::Math(MathBlock::new(ast, inline))
    }

    pub fn id(&self) -> &str {
        match self {
            ContentBlock::Paragraph { id, .. } => id,
            ContentBlock::Math(block) => &block.id,
        }
    }
}

/// A note: a titled, ordered list of blocks.
///
/// Timestamps are epoch milliseconds. The JSON form uses camelCase keys
/// (`createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: Vec<ContentBlock>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    /// Create a note holding a single empty paragraph.
    ///
    /// A blank title becomes [`DEFAULT_NOTE_TITLE`].
    pub fn new(title: impl Into<String>) -> Self {
        let mut title = title.into();
        if title.trim().is_empty() {
            title = DEFAULT_NOTE_TITLE.to_string();
        }
        let now = now_millis();
        Self {
            id: format!("note-{}", generate_id()),
            title,
            content: vec![ContentBlock::Paragraph {
                id: format!("block-{}", generate_id()),
                text: String::new(),
            }],
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the note as modified now
    pub fn touch(&mut self) {
        self.updated_at = now_millis();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.touch();
    }

    pub fn block(&self, id: &str) -> Option<&ContentBlock> {
        self.content.iter().find(|block| block.id() == id)
    }

    /// Insert a block at `position`; a missing or out-of-range position appends
    pub fn insert_block(&mut self, block: ContentBlock, position: Option<usize>) {
        match position {
            Some(index) if index <= self.content.len() => self.content.insert(index, block),
            _ => self.content.push(block),
        }
        self.touch();
    }

    /// Apply `update` to the block with `id`.
    ///
    /// Returns `false` when no such block exists.
    pub fn update_block<F>(&mut self, id: &str, update: F) -> bool
    where
        F: FnOnce(&mut ContentBlock),
    {
        let Some(block) = self.content.iter_mut().find(|block| block.id() == id) else {
            return false;
        };
        update(block);
        self.touch();
        true
    }

    /// Remove the block with `id`, returning it
    pub fn remove_block(&mut self, id: &str) -> Option<ContentBlock> {
        let index = self.content.iter().position(|block| block.id() == id)?;
        let removed = self.content.remove(index);
        self.touch();
        Some(removed)
    }

    /// Add a paragraph and return its id
    pub fn add_paragraph(&mut self, text: impl Into<String>, position: Option<usize>) -> String {
        let block = ContentBlock::paragraph(text);
        let id = block.id().to_string();
        self.insert_block(block, position);
        id
    }

    /// Add a math block and return its id
    pub fn add_math(&mut self, ast: MathAst, inline: bool, position: Option<usize>) -> String {
        let block = ContentBlock::math(ast, inline);
        let id = block.id().to_string();
        self.insert_block(block, position);
        id
    }

    pub fn summary(&self) -> NoteSummary {
        NoteSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            updated_at: self.updated_at,
        }
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new(DEFAULT_NOTE_TITLE)
    }
}

/// Entry of a note list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummary {
    pub id: String,
    pub title: String,
    pub updated_at: i64,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        note.summary()
    }
}

/// Order notes most recently updated first; ties keep their order
pub fn sort_by_recent(notes: &mut [NoteSummary]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}
