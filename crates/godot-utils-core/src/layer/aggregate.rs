use super::{Dimension, LayerCategory, LayerRecord};

/// The layers of one dimension, split by category in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct LayerAggregate {
    pub dimension: Dimension,
    pub render: Vec<LayerRecord>,
    pub physics: Vec<LayerRecord>,
    pub navigation: Vec<LayerRecord>,
}

impl LayerAggregate {
    #[must_use]
    pub const fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            render: Vec::new(),
            physics: Vec::new(),
            navigation: Vec::new(),
        }
    }

    #[must_use]
    pub fn category(&self, category: LayerCategory) -> &[LayerRecord] {
        match category {
            LayerCategory::Render => &self.render,
            LayerCategory::Physics => &self.physics,
            LayerCategory::Navigation => &self.navigation,
        }
    }

    fn category_mut(&mut self, category: LayerCategory) -> &mut Vec<LayerRecord> {
        match category {
            LayerCategory::Render => &mut self.render,
            LayerCategory::Physics => &mut self.physics,
            LayerCategory::Navigation => &mut self.navigation,
        }
    }
}

/// Both dimensions' aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerAggregates {
    pub two_d: LayerAggregate,
    pub three_d: LayerAggregate,
}

impl LayerAggregates {
    #[must_use]
    pub const fn get(&self, dimension: Dimension) -> &LayerAggregate {
        match dimension {
            Dimension::Two => &self.two_d,
            Dimension::Three => &self.three_d,
        }
    }
}

/// Partitions records by dimension and category, keeping their relative order.
///
/// Shifts are neither sorted nor checked for collisions.
pub fn aggregate<I>(records: I) -> LayerAggregates
where
    I: IntoIterator<Item = LayerRecord>,
{
    let mut two_d = LayerAggregate::new(Dimension::Two);
    let mut three_d = LayerAggregate::new(Dimension::Three);

    for record in records {
        let target = match record.dimension {
            Dimension::Two => &mut two_d,
            Dimension::Three => &mut three_d,
        };
        target.category_mut(record.category).push(record);
    }

    LayerAggregates { two_d, three_d }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(dimension: Dimension, category: LayerCategory, shift: u32, name: &str) -> LayerRecord {
        LayerRecord {
            dimension,
            category,
            shift,
            generated_name: name.to_string(),
        }
    }

    fn names(records: &[LayerRecord]) -> Vec<&str> {
        records.iter().map(|r| r.generated_name.as_str()).collect()
    }

    #[test]
    fn partitions_by_dimension_and_category() {
        let aggregates = aggregate(vec![
            record(Dimension::Three, LayerCategory::Physics, 4, "Enemies"),
            record(Dimension::Two, LayerCategory::Render, 0, "Walls"),
            record(Dimension::Two, LayerCategory::Navigation, 1, "Ground"),
            record(Dimension::Three, LayerCategory::Physics, 0, "World"),
        ]);

        assert_eq!(names(&aggregates.two_d.render), vec!["Walls"]);
        assert!(aggregates.two_d.physics.is_empty());
        assert_eq!(names(&aggregates.two_d.navigation), vec!["Ground"]);
        assert!(aggregates.three_d.render.is_empty());
        assert_eq!(names(&aggregates.three_d.physics), vec!["Enemies", "World"]);
        assert_eq!(aggregates.get(Dimension::Three).dimension, Dimension::Three);
    }

    #[test]
    fn colliding_shifts_are_kept() {
        let aggregates = aggregate(vec![
            record(Dimension::Two, LayerCategory::Physics, 2, "Player"),
            record(Dimension::Two, LayerCategory::Physics, 2, "Hero"),
        ]);
        let physics = aggregates.two_d.category(LayerCategory::Physics);
        assert_eq!(names(physics), vec!["Player", "Hero"]);
        assert!(physics.iter().all(|r| r.shift == 2));
    }
}
