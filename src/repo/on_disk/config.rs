//! Reads and writes the INI-style `config` file at the top of the `.git` directory.
//!
//! Only the subset of git's config syntax needed to locate and validate
//! `core.repositoryformatversion` is understood: sections, `key = value`
//! pairs, bare keys (which mean `true`), and `#`/`;` comment lines.

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

/// The only repository format version this crate reads or writes.
pub const SUPPORTED_FORMAT_VERSION: i64 = 0;

/// Reasons a config file can not be parsed.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseConfigError {
    #[error("line {0}: unterminated section header")]
    UnterminatedSection(usize),

    #[error("line {0}: empty section name")]
    EmptySection(usize),

    #[error("line {0}: entry appears before any section")]
    EntryOutsideSection(usize),

    #[error("line {0}: empty key")]
    EmptyKey(usize),
}

/// Parsed contents of a git config file. Sections and keys keep file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    sections: Vec<Section>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Config {
    /// The default configuration written into a new repository.
    pub fn new_repository() -> Config {
        let mut config = Config::default();
        config.set("core", "repositoryformatversion", "0");
        config.set("core", "filemode", "false");
        config.set("core", "bare", "false");
        config
    }

    /// Parse config text.
    ///
    /// Section and key names are case-insensitive and stored lowercased.
    /// A subsection header such as `[remote "origin"]` is stored as `remote.origin`.
    pub fn parse(text: &str) -> Result<Config, ParseConfigError> {
        let mut config = Config::default();
        let mut current: Option<String> = None;

        for (n, line) in text.lines().enumerate() {
            let line_no = n + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let header = header
                    .strip_suffix(']')
                    .ok_or(ParseConfigError::UnterminatedSection(line_no))?;
                let name = section_name(header);
                if name.is_empty() {
                    return Err(ParseConfigError::EmptySection(line_no));
                }

                config.section_mut(&name);
                current = Some(name);
                continue;
            }

            let section = current
                .as_ref()
                .ok_or(ParseConfigError::EntryOutsideSection(line_no))?;

            let (key, value) = match line.find('=') {
                Some(n) => (line[..n].trim(), line[n + 1..].trim()),
                None => (line, "true"),
            };

            if key.is_empty() {
                return Err(ParseConfigError::EmptyKey(line_no));
            }

            config.set(section, key, value);
        }

        Ok(config)
    }

    /// Look up `key` in `section`. If the key appears more than once,
    /// the last value wins.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let section = section.to_lowercase();
        let key = key.to_lowercase();

        self.sections
            .iter()
            .filter(|s| s.name == section)
            .flat_map(|s| s.entries.iter())
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .last()
    }

    /// Set `key` in `section`, replacing an existing value.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let key = key.to_lowercase();
        let entries = &mut self.section_mut(&section.to_lowercase()).entries;

        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => entries.push((key, value.to_string())),
        }
    }

    /// Return the raw `core.repositoryformatversion` value, if present.
    pub fn format_version(&self) -> Option<&str> {
        self.get("core", "repositoryformatversion")
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let pos = match self.sections.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        &mut self.sections[pos]
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for section in &self.sections {
            match section.name.find('.') {
                Some(n) => writeln!(
                    f,
                    "[{} \"{}\"]",
                    &section.name[..n],
                    &section.name[n + 1..]
                )?,
                None => writeln!(f, "[{}]", section.name)?,
            }

            for (key, value) in &section.entries {
                writeln!(f, "\t{} = {}", key, value)?;
            }
        }

        Ok(())
    }
}

fn section_name(header: &str) -> String {
    let header = header.trim();

    match header.find(char::is_whitespace) {
        Some(n) => {
            let sub = header[n..].trim().trim_matches('"');
            format!("{}.{}", header[..n].to_lowercase(), sub)
        }
        None => header.to_lowercase(),
    }
}
