use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Dimension, LayerCategory, LayerRecord};
use crate::cancel::Cancellation;
use crate::error::Fallible;
use crate::ident::snake_to_pascal;
use crate::section::Section;

static LAYER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?P<dimension>[23])d_(?P<category>\w+)/layer_(?P<offset>\d+)="(?P<name>\w+)"$"#)
        .expect("regex is valid")
});

impl LayerRecord {
    /// Parses a `<2|3>d_<category>/layer_<n>="<name>"` line.
    ///
    /// Anything else, including unknown categories and `layer_0`, yields nothing.
    #[must_use]
    pub fn from_line(line: &str) -> Option<Self> {
        let caps = LAYER_LINE.captures(line)?;

        let dimension = if &caps["dimension"] == "2" {
            Dimension::Two
        } else {
            Dimension::Three
        };
        let category = LayerCategory::from_token(&caps["category"])?;
        let shift = caps["offset"].parse::<u32>().ok()?.checked_sub(1)?;

        Some(Self {
            dimension,
            category,
            shift,
            generated_name: snake_to_pascal(&caps["name"]),
        })
    }
}

/// Extracts every layer declaration of `section` in file order.
#[must_use]
pub fn extract_layers(section: &Section) -> Vec<LayerRecord> {
    section
        .lines()
        .iter()
        .filter_map(|line| {
            let record = LayerRecord::from_line(line);
            if record.is_none() {
                trace!("Skipping unrecognized layer line: {line:?}");
            }
            record
        })
        .collect()
}

/// Like [`extract_layers`], polling `cancel` before each line.
///
/// # Errors
///
/// Returns `ErrorKind::Cancelled` if cancellation is observed; the records read
/// so far are discarded.
pub fn try_extract_layers(section: &Section, cancel: &Cancellation) -> Fallible<Vec<LayerRecord>> {
    let mut records = Vec::new();
    for line in section.lines() {
        cancel.check()?;
        match LayerRecord::from_line(line) {
            Some(record) => records.push(record),
            None => trace!("Skipping unrecognized layer line: {line:?}"),
        }
    }
    Ok(records)
}
