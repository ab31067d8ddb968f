//! Splitting of `project.godot` text into named sections.

use log::trace;

/// A named group of raw lines taken from a `[name]` header up to the next header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    lines: Vec<String>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The non-blank lines of this section, in file order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Returns the header name when `line` is a `[name]` header.
fn header_name(line: &str) -> Option<&str> {
    line.trim().strip_prefix('[')?.strip_suffix(']')
}

/// Parses the full text of a project file into its sections.
///
/// Lines before the first header belong to no section and are dropped, as are
/// blank lines. A trailing carriage return is stripped from every line. An
/// unbalanced header such as `[input` is an ordinary content line.
#[must_use]
pub fn parse(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(name) = header_name(line) {
            if let Some(done) = current.replace(Section::new(name)) {
                sections.push(done);
            }
            continue;
        }

        match &mut current {
            Some(section) if !line.trim().is_empty() => section.lines.push(line.to_string()),
            Some(_) => {}
            None => trace!("Dropping line outside of any section: {line:?}"),
        }
    }

    sections.extend(current);
    sections
}

/// Finds the first section called `name`.
#[must_use]
pub fn find<'a>(sections: &'a [Section], name: &str) -> Option<&'a Section> {
    sections.iter().find(|section| section.name == name)
}
