use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

/// A single message unit read from a gettext catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub msgid: String,
    /// True if the entry carries the `fuzzy` flag.
    pub fuzzy: bool,
    /// True if the entry is current and every msgstr form is non-empty.
    pub translated: bool,
    /// True for `#~` entries kept from an earlier template.
    pub obsolete: bool,
}

impl CatalogEntry {
    /// The header pseudo-entry has an empty (or blank) msgid.
    pub fn is_header(&self) -> bool {
        self.msgid.trim().is_empty()
    }
}

/// Reads all entries of a `.po` catalog, in file order.
///
/// Fails if the file cannot be read or is not a well-formed catalog.
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_catalog(&content).with_context(|| format!("Failed to parse catalog file: {:?}", path))
}

/// Parses catalog text into entries.
///
/// The header is optional and may carry any subset of fields. Entries sharing
/// a msgid are kept apart, and obsolete `#~` entries are returned with
/// `obsolete` set. Text with no entry at all is rejected.
pub fn parse_catalog(content: &str) -> Result<Vec<CatalogEntry>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut entries = Vec::new();
    let mut pending = PendingEntry::default();
    let mut line_no = 0;

    for line in content.lines() {
        line_no += 1;
        let line = line.trim();

        let (line, obsolete) = match line.strip_prefix("#~") {
            Some(rest) if !rest.starts_with('|') => (rest.trim_start(), true),
            _ => (line, false),
        };
        if line.is_empty() {
            continue;
        }

        if let Some(flags) = line.strip_prefix("#,") {
            pending.finish_into(&mut entries, line_no)?;
            if flags.split(',').any(|flag| flag.trim() == "fuzzy") {
                pending.fuzzy = true;
            }
            continue;
        }
        if line.starts_with('#') {
            pending.finish_into(&mut entries, line_no)?;
            continue;
        }

        if line.starts_with('"') {
            let value = unquote(line, line_no)?;
            match pending.field {
                Field::Msgctxt | Field::MsgidPlural => {}
                Field::Msgid => pending.msgid.get_or_insert_default().push_str(&value),
                Field::Msgstr => {
                    if let Some(form) = pending.msgstr.last_mut() {
                        form.push_str(&value);
                    }
                }
                Field::None => bail!("line {}: string without a keyword", line_no),
            }
            continue;
        }

        let (keyword, value) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match keyword {
            "msgctxt" | "msgid" => {
                if pending.msgid.is_some() {
                    pending.finish_into(&mut entries, line_no)?;
                }
                let value = unquote(value, line_no)?;
                pending.obsolete = obsolete;
                if keyword == "msgid" {
                    pending.msgid = Some(value);
                    pending.field = Field::Msgid;
                } else {
                    pending.field = Field::Msgctxt;
                }
            }
            "msgid_plural" => {
                if pending.msgid.is_none() {
                    bail!("line {}: msgid_plural without msgid", line_no);
                }
                unquote(value, line_no)?;
                pending.field = Field::MsgidPlural;
            }
            _ if keyword == "msgstr" || is_plural_msgstr(keyword) => {
                if pending.msgid.is_none() {
                    bail!("line {}: msgstr without msgid", line_no);
                }
                pending.msgstr.push(unquote(value, line_no)?);
                pending.field = Field::Msgstr;
            }
            _ => bail!("line {}: unexpected content '{}'", line_no, line),
        }
    }

    if pending.msgid.is_none() && pending.field != Field::None {
        bail!("line {}: msgctxt without msgid", line_no);
    }
    pending.finish_into(&mut entries, line_no)?;

    if entries.is_empty() {
        bail!("No catalog entries found");
    }
    Ok(entries)
}

/// String the next continuation line belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Field {
    #[default]
    None,
    Msgctxt,
    Msgid,
    MsgidPlural,
    Msgstr,
}

#[derive(Debug, Default)]
struct PendingEntry {
    msgid: Option<String>,
    msgstr: Vec<String>,
    fuzzy: bool,
    obsolete: bool,
    field: Field,
}

impl PendingEntry {
    /// Moves a complete entry into `entries`. Flags seen before any msgid
    /// stay pending for the entry they precede.
    fn finish_into(&mut self, entries: &mut Vec<CatalogEntry>, line_no: usize) -> Result<()> {
        let Some(msgid) = self.msgid.take() else {
            return Ok(());
        };
        if self.msgstr.is_empty() {
            bail!("line {}: missing msgstr for msgid \"{}\"", line_no, msgid);
        }

        entries.push(CatalogEntry {
            translated: !self.obsolete && self.msgstr.iter().all(|form| !form.is_empty()),
            msgid,
            fuzzy: self.fuzzy,
            obsolete: self.obsolete,
        });
        *self = PendingEntry::default();
        Ok(())
    }
}

fn is_plural_msgstr(keyword: &str) -> bool {
    keyword
        .strip_prefix("msgstr[")
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|index| index.parse::<usize>().is_ok())
}

/// Removes the surrounding quotes and resolves escape sequences in one pass.
fn unquote(value: &str, line_no: usize) -> Result<String> {
    let value = value.trim();
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        bail!("line {}: expected a quoted string, found '{}'", line_no, value);
    };

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => bail!("line {}: string ends with a lone backslash", line_no),
        }
    }
    Ok(result)
}

/// Splits a catalog file name into `(language, group)`.
///
/// The language is the text after the last `-` up to the first `.`; the group
/// is everything before that hyphen. Names without a hyphen have an empty
/// group and the whole stem as language.
///
/// Examples:
/// - "report-fr.po" -> ("fr", "report")
/// - "user-guide-pt.po" -> ("pt", "user-guide")
/// - "messages.po" -> ("messages", "")
pub fn split_catalog_name(file_name: &str) -> (String, String) {
    let (group, tail) = match file_name.rsplit_once('-') {
        Some((group, tail)) => (group, tail),
        None => ("", file_name),
    };
    let language = tail.split('.').next().unwrap_or(tail);
    (language.to_string(), group.to_string())
}

/// Returns true if the file name has the catalog extension.
pub fn is_catalog_file(file_name: &str) -> bool {
    file_name.ends_with(".po")
}
