//! Pinned requirements manifest parsing and checking.
//!
//! The deployment manifest is a flat text file with one `name==version`
//! entry per line. `#` lines annotate groups of entries, a trailing
//! ` # note` on an entry records why it is pinned, and blank lines separate
//! logical groups. The file is consumed by a package installer; this module
//! only parses it and checks the properties that can be verified without
//! touching a package index:
//!
//! - every non-blank, non-comment line is a well-formed exact pin
//! - no package is pinned twice to different versions
//!
//! Whether the pin set resolves together is an install-time question and is
//! out of scope here.
//!
//! Parsing is total: malformed lines are kept (so the file can be
//! reproduced verbatim) and surface as issues from [`Manifest::check`].

use std::collections::HashMap;
use std::fmt;

/// A parsed manifest, line for line.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    lines: Vec<ManifestLine>,
}

/// One line of a manifest.
#[derive(Debug, Clone)]
pub enum ManifestLine {
    /// A blank separator line.
    Blank,
    /// A full-line `#` comment, stored as written.
    Comment(String),
    /// A well-formed `name==version` entry.
    Pin(Pin),
    /// Anything else, stored as written.
    Malformed(String),
}

/// An exact version pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    /// The line exactly as written, for reproduction.
    raw: String,
    /// Package name as written.
    pub name: String,
    /// Version string. Opaque: compared only for equality.
    pub version: String,
    /// Trailing justification note, without the `#`.
    pub note: Option<String>,
    /// 1-based line number.
    pub line: usize,
}

impl Pin {
    /// Package name folded the way the consuming installer folds it:
    /// lowercase, with runs of `-`, `_`, and `.` collapsed to a single `-`.
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize_package_name(&self.name)
    }
}

/// A finding from [`Manifest::check`].
#[derive(Debug, Clone)]
pub struct ManifestIssue {
    /// 1-based line number the issue was found on.
    pub line: usize,
    pub kind: IssueKind,
}

/// What kind of problem a [`ManifestIssue`] reports.
#[derive(Debug, Clone)]
pub enum IssueKind {
    /// The line is neither blank, a comment, nor `name==version`.
    Malformed { text: String },
    /// The same package is pinned to two different versions.
    ConflictingPin {
        name: String,
        version: String,
        previous_version: String,
        first_line: usize,
    },
    /// The same package and version appear twice. Harmless, but one of the
    /// lines is dead weight.
    DuplicatePin { name: String, first_line: usize },
}

impl ManifestIssue {
    /// Advisory issues do not make the manifest invalid.
    #[must_use]
    pub const fn is_advisory(&self) -> bool {
        matches!(self.kind, IssueKind::DuplicatePin { .. })
    }
}

impl fmt::Display for ManifestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::Malformed { text } => {
                write!(
                    f,
                    "line {}: not a valid pinned requirement: `{text}`",
                    self.line
                )
            }
            IssueKind::ConflictingPin {
                name,
                version,
                previous_version,
                first_line,
            } => write!(
                f,
                "line {}: {name} pinned to {version}, but line {first_line} pins it to {previous_version}",
                self.line
            ),
            IssueKind::DuplicatePin { name, first_line } => write!(
                f,
                "line {}: {name} already pinned on line {first_line}",
                self.line
            ),
        }
    }
}

impl Manifest {
    /// Parse manifest text. Never fails; malformed lines are preserved and
    /// reported by [`Manifest::check`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(idx, raw)| parse_line(raw, idx + 1))
            .collect();
        Self { lines }
    }

    /// All parsed lines, in file order.
    #[must_use]
    pub fn lines(&self) -> &[ManifestLine] {
        &self.lines
    }

    /// The pinned entries, in file order.
    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.lines.iter().filter_map(|line| match line {
            ManifestLine::Pin(pin) => Some(pin),
            _ => None,
        })
    }

    /// Check the manifest: report malformed lines, conflicting pins, and
    /// (advisory) exact duplicates. Issues come back in line order.
    #[must_use]
    pub fn check(&self) -> Vec<ManifestIssue> {
        let mut issues = Vec::new();
        // Folded name -> (first line, version as written, name as written)
        let mut seen: HashMap<String, (usize, String, String)> = HashMap::new();

        for (idx, line) in self.lines.iter().enumerate() {
            let line_no = idx + 1;
            match line {
                ManifestLine::Blank | ManifestLine::Comment(_) => {}
                ManifestLine::Malformed(text) => issues.push(ManifestIssue {
                    line: line_no,
                    kind: IssueKind::Malformed { text: text.clone() },
                }),
                ManifestLine::Pin(pin) => {
                    let folded = pin.normalized_name();
                    match seen.get(&folded) {
                        None => {
                            seen.insert(
                                folded,
                                (line_no, pin.version.clone(), pin.name.clone()),
                            );
                        }
                        Some((first_line, first_version, first_name)) => {
                            let kind = if first_version == &pin.version {
                                IssueKind::DuplicatePin {
                                    name: first_name.clone(),
                                    first_line: *first_line,
                                }
                            } else {
                                IssueKind::ConflictingPin {
                                    name: pin.name.clone(),
                                    version: pin.version.clone(),
                                    previous_version: first_version.clone(),
                                    first_line: *first_line,
                                }
                            };
                            issues.push(ManifestIssue {
                                line: line_no,
                                kind,
                            });
                        }
                    }
                }
            }
        }

        issues
    }
}

impl fmt::Display for Manifest {
    /// Reproduce the manifest as written, byte for byte apart from line
    /// ending normalization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                ManifestLine::Blank => writeln!(f)?,
                ManifestLine::Comment(raw) | ManifestLine::Malformed(raw) => {
                    writeln!(f, "{raw}")?;
                }
                ManifestLine::Pin(pin) => writeln!(f, "{}", pin.raw)?,
            }
        }
        Ok(())
    }
}

fn parse_line(raw: &str, line_no: usize) -> ManifestLine {
    let trimmed = raw.trim_end_matches('\r');
    let stripped = trimmed.trim();

    if stripped.is_empty() {
        return ManifestLine::Blank;
    }
    if stripped.starts_with('#') {
        return ManifestLine::Comment(trimmed.to_string());
    }

    // Split off a trailing note. The installer only treats `#` as a comment
    // when preceded by whitespace, so `pkg==1.0#x` is not an entry plus note.
    let (entry, note) = match stripped.find('#') {
        Some(pos) => {
            let before = &stripped[..pos];
            if before.ends_with(char::is_whitespace) {
                let note = stripped[pos + 1..].trim();
                (
                    before.trim_end(),
                    (!note.is_empty()).then(|| note.to_string()),
                )
            } else {
                return ManifestLine::Malformed(trimmed.to_string());
            }
        }
        None => (stripped, None),
    };

    let Some((name_part, version_part)) = entry.split_once("==") else {
        return ManifestLine::Malformed(trimmed.to_string());
    };

    let name = name_part.trim_end();
    let version = version_part.trim_start();

    if !is_valid_package_name(name) || !is_valid_version(version) {
        return ManifestLine::Malformed(trimmed.to_string());
    }

    ManifestLine::Pin(Pin {
        raw: trimmed.to_string(),
        name: name.to_string(),
        version: version.to_string(),
        note,
        line: line_no,
    })
}

/// Package names start and end alphanumeric, with `-`, `_`, and `.` allowed
/// in between.
fn is_valid_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphanumeric() {
        return false;
    }
    if name.len() == 1 {
        return true;
    }
    let last_ok = name
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    last_ok
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Versions are opaque, but an empty string or embedded whitespace is never
/// a version.
fn is_valid_version(version: &str) -> bool {
    !version.is_empty() && !version.contains(char::is_whitespace)
}

/// Fold a package name the way the consuming installer does: lowercase,
/// with every run of `-`, `_`, and `.` collapsed to a single `-`.
#[must_use]
pub fn normalize_package_name(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !folded.ends_with('-') {
                folded.push('-');
            }
        } else {
            folded.push(c.to_ascii_lowercase());
        }
    }
    folded
}
