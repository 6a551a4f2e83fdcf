//! Ordered document model and comment association
//!
//! The fold pass walks the flat token stream and attaches each comment run
//! to its nearest structural neighbor: runs directly before a key or header
//! become Leading comments, runs cut off by a blank line or end of input
//! become Trailing (or standalone) comments of the enclosing section.

use crate::conversion::config::ConversionConfig;
use crate::error::{ConversionResult, LimitExceededError};
use crate::parser::{decode_commented_header, decode_commented_key_value, Line, LineToken};

/// How a comment relates to its structural neighbor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// Directly precedes an entry or section header
    Leading,
    /// Follows the last entry of a section, or the section itself
    Trailing,
    /// Separated by blank lines from both neighbors
    StandaloneBlock,
}

/// A source comment with its marker stripped
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub kind: CommentKind,
}

impl Comment {
    pub fn new(text: impl Into<String>, kind: CommentKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A single key/value line, active or commented-out
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub key: String,
    /// Unparsed value text; typed conversion is a derived view
    pub raw_value: String,
    /// False if the source line was itself a comment encoding a pair
    pub is_active: bool,
    /// Original comment text for inactive entries
    pub source: Option<String>,
    pub leading_comments: Vec<Comment>,
    pub inline_comment: Option<Comment>,
}

impl Entry {
    pub fn active(key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            raw_value: raw_value.into(),
            is_active: true,
            source: None,
            leading_comments: Vec::new(),
            inline_comment: None,
        }
    }

    /// Whether the commented-out form can be rendered back as a JSON line
    pub fn is_reconstructable(&self) -> bool {
        !self.key.is_empty()
            && !self.key.chars().any(|c| c.is_control())
            && !self.raw_value.chars().any(|c| c.is_control())
    }
}

/// A named group of entries; inactive when the header itself was commented out
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub is_active: bool,
    pub entries: Vec<Entry>,
    pub leading_comments: Vec<Comment>,
    pub trailing_comments: Vec<Comment>,
}

impl Section {
    pub fn new(name: impl Into<String>, is_active: bool) -> Self {
        Self {
            name: name.into(),
            is_active,
            entries: Vec::new(),
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
        }
    }

    pub fn active_entry_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_active).count()
    }
}

/// Ordered parse result of one INF input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
    /// Comments before any section, not attached to one
    pub leading_comments: Vec<Comment>,
    /// Comments after all content, not attached to a section
    pub trailing_comments: Vec<Comment>,
}

impl Document {
    pub fn active_section_count(&self) -> usize {
        self.sections.iter().filter(|s| s.is_active).count()
    }

    pub fn entry_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.entries.iter().filter(|e| e.is_active).count())
            .sum()
    }

    pub fn inactive_entry_count(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.entries.iter().filter(|e| !e.is_active).count())
            .sum()
    }

    pub fn comment_count(&self) -> usize {
        let section_comments: usize = self
            .sections
            .iter()
            .map(|s| {
                s.leading_comments.len()
                    + s.trailing_comments.len()
                    + s.entries
                        .iter()
                        .map(|e| {
                            e.leading_comments.len() + usize::from(e.inline_comment.is_some())
                        })
                        .sum::<usize>()
            })
            .sum();
        section_comments + self.leading_comments.len() + self.trailing_comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
            && self.leading_comments.is_empty()
            && self.trailing_comments.is_empty()
    }
}

/// Fold a token stream into a document, enforcing the section limit
pub fn fold(lines: &[Line], config: &ConversionConfig) -> ConversionResult<Document> {
    let mut folder = Folder::new(config);
    for line in lines {
        folder.on_line(line)?;
    }
    Ok(folder.finish())
}

struct Folder<'a> {
    config: &'a ConversionConfig,
    doc: Document,
    /// Section currently receiving entries and comments
    current: Option<usize>,
    /// Most recent active section, for fallback when current is inactive
    last_active: Option<usize>,
    active_count: usize,
    /// Plain comment texts awaiting a structural neighbor
    pending: Vec<String>,
}

impl<'a> Folder<'a> {
    fn new(config: &'a ConversionConfig) -> Self {
        Self {
            config,
            doc: Document::default(),
            current: None,
            last_active: None,
            active_count: 0,
            pending: Vec::new(),
        }
    }

    fn on_line(&mut self, line: &Line) -> ConversionResult<()> {
        match &line.token {
            LineToken::Blank => {
                self.on_blank();
                Ok(())
            }
            LineToken::Header { name } => self.start_section(name.clone(), true).map(|_| ()),
            LineToken::KeyValue {
                key,
                value,
                inline_comment,
            } => self.on_key_value(key, value, inline_comment.as_deref()),
            LineToken::Comment { text } => self.on_comment(text),
        }
    }

    fn on_comment(&mut self, text: &str) -> ConversionResult<()> {
        if let Some(name) = decode_commented_header(text) {
            self.start_section(name, false)?;
        } else if let Some((key, value)) = decode_commented_key_value(text) {
            let leading = self.take_pending(CommentKind::Leading);
            let entry = Entry {
                key,
                raw_value: value,
                is_active: false,
                source: Some(text.to_string()),
                leading_comments: leading,
                inline_comment: None,
            };
            let idx = match self.current {
                Some(i) => i,
                None => self.ensure_active_container()?,
            };
            self.doc.sections[idx].entries.push(entry);
        } else {
            self.pending.push(text.to_string());
        }
        Ok(())
    }

    fn on_key_value(
        &mut self,
        key: &str,
        value: &str,
        inline_comment: Option<&str>,
    ) -> ConversionResult<()> {
        let leading = self.take_pending(CommentKind::Leading);
        let idx = self.ensure_active_container()?;
        let mut entry = Entry::active(key, value);
        entry.leading_comments = leading;
        entry.inline_comment = inline_comment.map(|c| Comment::new(c, CommentKind::Trailing));
        self.doc.sections[idx].entries.push(entry);
        Ok(())
    }

    fn on_blank(&mut self) {
        self.flush_pending(CommentKind::StandaloneBlock);
        // A blank line ends a commented-out section block
        if let Some(i) = self.current {
            if !self.doc.sections[i].is_active {
                self.current = self.last_active;
            }
        }
    }

    fn start_section(&mut self, name: String, is_active: bool) -> ConversionResult<usize> {
        if is_active {
            if self.active_count + 1 > self.config.max_sections {
                return Err(LimitExceededError::Sections {
                    limit: self.config.max_sections,
                }
                .into());
            }
            self.active_count += 1;
        }

        let mut section = Section::new(name, is_active);
        section.leading_comments = self.take_pending(CommentKind::Leading);
        self.doc.sections.push(section);

        let idx = self.doc.sections.len() - 1;
        self.current = Some(idx);
        if is_active {
            self.last_active = Some(idx);
        }
        Ok(idx)
    }

    /// Active entries belong to the nearest active section, materializing
    /// the default section when no header has been seen yet
    fn ensure_active_container(&mut self) -> ConversionResult<usize> {
        if let Some(i) = self.current {
            if self.doc.sections[i].is_active {
                return Ok(i);
            }
        }
        if let Some(i) = self.last_active {
            self.current = Some(i);
            return Ok(i);
        }
        self.start_section(self.config.default_section.clone(), true)
    }

    fn take_pending(&mut self, kind: CommentKind) -> Vec<Comment> {
        self.pending
            .drain(..)
            .map(|text| Comment { text, kind })
            .collect()
    }

    fn flush_pending(&mut self, kind: CommentKind) {
        if self.pending.is_empty() {
            return;
        }
        let comments: Vec<Comment> = self
            .pending
            .drain(..)
            .map(|text| Comment { text, kind })
            .collect();
        match self.current {
            Some(i) => self.doc.sections[i].trailing_comments.extend(comments),
            None => match kind {
                CommentKind::Trailing => self.doc.trailing_comments.extend(comments),
                _ => self.doc.leading_comments.extend(comments),
            },
        }
    }

    fn finish(mut self) -> Document {
        self.flush_pending(CommentKind::Trailing);
        self.doc
    }
}
