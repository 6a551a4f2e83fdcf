//! JSON rendering of parsed documents
//!
//! Both output modes run the same line-based emitter; the comment-aware
//! mode only adds `//` lines, so removing every comment line from JSONC
//! output yields exactly the plain JSON output.

pub mod escape;
pub mod jsonc;

use crate::conversion::config::ConversionConfig;
use crate::conversion::typing::{self, TypedValue};
use crate::error::ConversionResult;
use crate::parser::document::{Comment, Document, Entry, Section};
use crate::validation;
use escape::{escape as escape_lossy, escape_strict};
use indexmap::IndexMap;

/// Render a document as plain JSON: one object keyed by section name,
/// active entries only, duplicate sections merged in encounter order.
pub fn serialize(document: &Document, config: &ConversionConfig) -> ConversionResult<String> {
    JsonEmitter::new(config, false).emit(document)
}

struct EmitLine {
    level: usize,
    text: String,
    is_comment: bool,
}

/// Line-based JSON/JSONC emitter shared by both output modes
pub(crate) struct JsonEmitter<'a> {
    config: &'a ConversionConfig,
    with_comments: bool,
    lines: Vec<EmitLine>,
}

/// Duplicate active sections merged into one render slot; inactive
/// sections keep their own source position.
enum Slot<'a> {
    Active(MergedSection<'a>),
    Inactive(&'a Section),
}

struct MergedSection<'a> {
    name: &'a str,
    entries: Vec<&'a Entry>,
    leading: Vec<&'a Comment>,
    trailing: Vec<&'a Comment>,
}

fn build_plan(document: &Document) -> Vec<Slot<'_>> {
    let mut slots: Vec<Slot> = Vec::new();
    let mut index: IndexMap<&str, usize> = IndexMap::new();

    for section in &document.sections {
        if !section.is_active {
            slots.push(Slot::Inactive(section));
            continue;
        }

        match index.get(section.name.as_str()) {
            Some(&i) => {
                if let Slot::Active(merged) = &mut slots[i] {
                    merged.entries.extend(section.entries.iter());
                    merged.leading.extend(section.leading_comments.iter());
                    merged.trailing.extend(section.trailing_comments.iter());
                }
            }
            None => {
                index.insert(section.name.as_str(), slots.len());
                slots.push(Slot::Active(MergedSection {
                    name: &section.name,
                    entries: section.entries.iter().collect(),
                    leading: section.leading_comments.iter().collect(),
                    trailing: section.trailing_comments.iter().collect(),
                }));
            }
        }
    }

    slots
}

impl<'a> JsonEmitter<'a> {
    pub(crate) fn new(config: &'a ConversionConfig, with_comments: bool) -> Self {
        Self {
            config,
            with_comments,
            lines: Vec::new(),
        }
    }

    pub(crate) fn emit(mut self, document: &Document) -> ConversionResult<String> {
        // Document -> Section -> Entry nests two levels
        validation::check_depth(2, self.config)?;

        let slots = build_plan(document);
        let active_total = slots
            .iter()
            .filter(|s| matches!(s, Slot::Active(_)))
            .count();

        self.line(0, "{");

        if self.with_comments {
            for comment in &document.leading_comments {
                self.comment(1, &comment.text);
            }
        }

        let mut active_seen = 0;
        for slot in &slots {
            match slot {
                Slot::Active(merged) => {
                    active_seen += 1;
                    let comma = active_seen < active_total;
                    if self.with_comments {
                        for comment in &merged.leading {
                            self.comment(1, &comment.text);
                        }
                    }
                    self.emit_active_section(merged, comma)?;
                    if self.with_comments {
                        for comment in &merged.trailing {
                            self.comment(1, &comment.text);
                        }
                    }
                }
                Slot::Inactive(section) => {
                    if self.with_comments {
                        for comment in &section.leading_comments {
                            self.comment(1, &comment.text);
                        }
                        self.emit_inactive_section(section)?;
                        for comment in &section.trailing_comments {
                            self.comment(1, &comment.text);
                        }
                    }
                }
            }
        }

        if self.with_comments {
            for comment in &document.trailing_comments {
                self.comment(1, &comment.text);
            }
        }

        self.line(0, "}");
        Ok(self.assemble())
    }

    fn emit_active_section(&mut self, merged: &MergedSection, comma: bool) -> ConversionResult<()> {
        let name = self.escape_text(merged.name)?;
        let suffix = if comma { "," } else { "" };

        if merged.entries.is_empty() {
            self.line(1, format!("\"{}\": {{}}{}", name, suffix));
            return Ok(());
        }

        self.line(1, format!("\"{}\": {{", name));
        self.emit_entries(&merged.entries, 2)?;
        self.line(1, format!("}}{}", suffix));
        Ok(())
    }

    fn emit_entries(&mut self, entries: &[&Entry], level: usize) -> ConversionResult<()> {
        let active_total = entries.iter().filter(|e| e.is_active).count();
        let mut active_seen = 0;

        for entry in entries {
            if entry.is_active {
                active_seen += 1;
                if self.with_comments {
                    for comment in &entry.leading_comments {
                        self.comment(level, &comment.text);
                    }
                }
                let rendered = self.render_entry(entry)?;
                let comma = if active_seen < active_total { "," } else { "" };
                self.line(level, format!("{}{}", rendered, comma));
                if self.with_comments {
                    if let Some(comment) = &entry.inline_comment {
                        self.comment(level, &comment.text);
                    }
                }
            } else if self.with_comments {
                for comment in &entry.leading_comments {
                    self.comment(level, &comment.text);
                }
                let rendered = self.render_entry(entry)?;
                self.comment(level, &format!("{},", rendered));
            }
        }

        Ok(())
    }

    /// Render a fully commented-out section as one `//`-prefixed block
    /// reproducing the would-be JSON object, so deleting the markers
    /// uncomments the whole section atomically.
    fn emit_inactive_section(&mut self, section: &Section) -> ConversionResult<()> {
        let name = self.escape_text(&section.name)?;
        let mut block: Vec<(usize, String)> = Vec::new();

        if section.entries.is_empty() {
            block.push((0, format!("\"{}\": {{}},", name)));
        } else {
            block.push((0, format!("\"{}\": {{", name)));
            let total = section.entries.len();
            for (i, entry) in section.entries.iter().enumerate() {
                // Plain comments inside the block stay comments after the
                // block itself is uncommented
                for comment in &entry.leading_comments {
                    block.push((1, format!("// {}", comment.text)));
                }
                let rendered = self.render_entry(entry)?;
                let comma = if i + 1 < total { "," } else { "" };
                block.push((1, format!("{}{}", rendered, comma)));
            }
            block.push((0, "},".to_string()));
        }

        let indent_unit = " ".repeat(self.config.indent_size as usize);
        for (rel, text) in block {
            self.comment(1, &format!("{}{}", indent_unit.repeat(rel), text));
        }
        Ok(())
    }

    fn render_entry(&self, entry: &Entry) -> ConversionResult<String> {
        let key = self.escape_text(&entry.key)?;
        let value = self.render_value(&entry.raw_value)?;
        Ok(format!("\"{}\": {}", key, value))
    }

    fn render_value(&self, raw: &str) -> ConversionResult<String> {
        Ok(match typing::convert(raw, self.config) {
            TypedValue::String(s) => format!("\"{}\"", self.escape_text(&s)?),
            TypedValue::Integer(n) => n.to_string(),
            TypedValue::Float(f) => render_float(f),
            TypedValue::Boolean(b) => b.to_string(),
            TypedValue::Null => "null".to_string(),
        })
    }

    fn escape_text(&self, text: &str) -> ConversionResult<String> {
        if self.config.strict {
            Ok(escape_strict(text)?)
        } else {
            Ok(escape_lossy(text))
        }
    }

    fn line(&mut self, level: usize, text: impl Into<String>) {
        self.lines.push(EmitLine {
            level,
            text: text.into(),
            is_comment: false,
        });
    }

    fn comment(&mut self, level: usize, text: &str) {
        let rendered = if text.is_empty() {
            "//".to_string()
        } else {
            format!("// {}", text)
        };
        self.lines.push(EmitLine {
            level,
            text: rendered,
            is_comment: true,
        });
    }

    fn assemble(&self) -> String {
        let pretty = self.config.pretty || self.with_comments;
        if pretty {
            let indent_unit = " ".repeat(self.config.indent_size as usize);
            self.lines
                .iter()
                .map(|l| format!("{}{}", indent_unit.repeat(l.level), l.text))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.lines
                .iter()
                .filter(|l| !l.is_comment)
                .map(|l| l.text.as_str())
                .collect()
        }
    }
}

fn render_float(value: f64) -> String {
    let mut text = format!("{}", value);
    if !text.contains('.') && !text.contains('e') && !text.contains('E') {
        text.push_str(".0");
    }
    text
}
