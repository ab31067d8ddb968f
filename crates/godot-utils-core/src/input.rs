//! Input action names from the `[input]` section.

use log::{trace, warn};

use crate::cancel::Cancellation;
use crate::error::Fallible;
use crate::ident::{is_identifier, snake_to_pascal};
use crate::section::Section;

/// One input action, e.g. `move_left` exposed as `MoveLeft`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub raw_key: String,
    pub generated_name: String,
}

impl InputRecord {
    /// Reads the action key left of the first `=`; lines without one yield nothing.
    ///
    /// The key is taken verbatim, surrounding whitespace included.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let (key, _) = line.split_once('=')?;
        Some(Self {
            raw_key: key.to_string(),
            generated_name: snake_to_pascal(key),
        })
    }
}

/// Extracts every input action of `section` in file order, duplicates included.
#[must_use]
pub fn extract_inputs(section: &Section) -> Vec<InputRecord> {
    section
        .lines()
        .iter()
        .filter_map(|line| {
            let record = InputRecord::from_line(line);
            if record.is_none() {
                trace!("Skipping input line without a key: {line:?}");
            }
            record
        })
        .collect()
}

/// Like [`extract_inputs`], polling `cancel` before each line.
///
/// # Errors
///
/// Returns `ErrorKind::Cancelled` if cancellation is observed; the records read
/// so far are discarded.
pub fn try_extract_inputs(section: &Section, cancel: &Cancellation) -> Fallible<Vec<InputRecord>> {
    let mut records = Vec::with_capacity(section.lines().len());
    for line in section.lines() {
        cancel.check()?;
        match InputRecord::from_line(line) {
            Some(record) => records.push(record),
            None => trace!("Skipping input line without a key: {line:?}"),
        }
    }
    Ok(records)
}

/// Renders one `&str` constant per record inside `pub mod {module}`.
///
/// Records whose generated name is not a Rust identifier (empty, quoted,
/// hyphenated, a keyword) are skipped with a warning; repeated keys are kept and
/// produce repeated constants.
#[must_use]
pub fn render_input_constants(module: &str, records: &[InputRecord]) -> String {
    let constants: Vec<String> = records
        .iter()
        .filter(|record| {
            let named = is_identifier(&record.generated_name);
            if !named {
                warn!("Input action {:?} has no usable identifier, skipping", record.raw_key);
            }
            named
        })
        .map(|record| {
            format!(
                "    pub const {}: &str = {:?};",
                record.generated_name, record.raw_key
            )
        })
        .collect();

    format!(
        "#[allow(non_upper_case_globals)]\npub mod {module} {{\n{}\n}}\n",
        constants.join("\n")
    )
}
