use crate::error::{Result, StringsError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::{debug, trace};

/// A `<string>` declaration from a resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    /// Resource name (e.g., "app_name")
    pub name: String,
    /// Text content, unescaped
    pub value: String,
    /// `false` only when the element carries `translatable="false"`
    pub translatable: bool,
    /// Line of the opening tag, 1-based
    pub line: usize,
}

/// Parser for Android `values/strings.xml` files
pub struct StringsParser;

impl StringsParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a strings file
    pub fn parse_file(&self, path: &Path) -> Result<Vec<StringEntry>> {
        let contents = std::fs::read_to_string(path).map_err(|e| StringsError::io(path, e))?;
        self.parse(path, &contents)
    }

    /// Parse strings file contents in document order; `path` is only used in errors
    pub fn parse(&self, path: &Path, contents: &str) -> Result<Vec<StringEntry>> {
        let mut reader = Reader::from_str(contents);
        reader.trim_text(false);
        reader.check_end_names(true);

        let parse_error = |position: usize, message: String| StringsError::Parse {
            path: path.to_path_buf(),
            position,
            message,
        };

        let mut entries = Vec::new();
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut root_seen = false;
        // entry being filled and the element depth it was opened at
        let mut current: Option<(StringEntry, usize)> = None;

        loop {
            let position = reader.buffer_position();
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| parse_error(reader.buffer_position(), e.to_string()))?;

            let opens_element = matches!(event, Event::Start(_) | Event::Empty(_));
            if depth == 0 && opens_element {
                if root_seen {
                    return Err(parse_error(position, "more than one root element".to_string()));
                }
                root_seen = true;
            }

            match event {
                Event::Start(e) => {
                    depth += 1;
                    if current.is_none() && e.name().as_ref() == b"string" {
                        let entry = self.start_entry(path, contents, position, &e)?;
                        current = Some((entry, depth));
                    }
                }
                Event::Empty(e) => {
                    if current.is_none() && e.name().as_ref() == b"string" {
                        let entry = self.start_entry(path, contents, position, &e)?;
                        trace!("Found empty string '{}'", entry.name);
                        entries.push(entry);
                    }
                }
                Event::End(_) => {
                    if matches!(current, Some((_, opened_at)) if opened_at == depth) {
                        if let Some((entry, _)) = current.take() {
                            trace!("Found string '{}'", entry.name);
                            entries.push(entry);
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Text(e) if depth == 0 => {
                    if !e.iter().all(u8::is_ascii_whitespace) {
                        return Err(parse_error(
                            position,
                            "text outside the root element".to_string(),
                        ));
                    }
                }
                Event::CData(_) if depth == 0 => {
                    return Err(parse_error(
                        position,
                        "character data outside the root element".to_string(),
                    ));
                }
                Event::Text(e) => {
                    if let Some((entry, _)) = current.as_mut() {
                        let text = e
                            .unescape()
                            .map_err(|err| parse_error(position, err.to_string()))?;
                        entry.value.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    if let Some((entry, _)) = current.as_mut() {
                        entry.value.push_str(&String::from_utf8_lossy(&e));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if depth > 0 {
            return Err(parse_error(
                reader.buffer_position(),
                "unexpected end of document, unclosed element".to_string(),
            ));
        }
        if !root_seen {
            return Err(parse_error(
                reader.buffer_position(),
                "no root element".to_string(),
            ));
        }

        debug!("Parsed {} strings from {}", entries.len(), path.display());
        Ok(entries)
    }

    fn start_entry(
        &self,
        path: &Path,
        contents: &str,
        position: usize,
        element: &BytesStart<'_>,
    ) -> Result<StringEntry> {
        let mut name = None;
        let mut translatable = true;

        for attr in element.attributes() {
            let attr = attr.map_err(|e| StringsError::Parse {
                path: path.to_path_buf(),
                position,
                message: e.to_string(),
            })?;
            let value = attr.unescape_value().map_err(|e| StringsError::Parse {
                path: path.to_path_buf(),
                position,
                message: e.to_string(),
            })?;

            match attr.key.as_ref() {
                b"name" => name = Some(value.into_owned()),
                b"translatable" => translatable = value != "false",
                _ => {}
            }
        }

        let name = name.ok_or_else(|| StringsError::MissingName {
            path: path.to_path_buf(),
            position,
        })?;

        Ok(StringEntry {
            name,
            value: String::new(),
            translatable,
            line: line_at(contents, position),
        })
    }
}

impl Default for StringsParser {
    fn default() -> Self {
        Self::new()
    }
}

fn line_at(contents: &str, position: usize) -> usize {
    let end = position.min(contents.len());
    contents.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
