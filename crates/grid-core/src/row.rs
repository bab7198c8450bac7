//! The row value flowing through the generation pipeline.

/// One output row: category texts followed by measure texts.
///
/// Category and measure cells are kept apart so that sparsity injection can
/// only ever address measure cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    categories: Vec<String>,
    measures: Vec<String>,
}

impl Row {
    /// Create a row from its rendered category and measure values.
    pub fn new(categories: Vec<String>, measures: Vec<String>) -> Self {
        Self {
            categories,
            measures,
        }
    }

    /// Rendered category values, in dimension order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Rendered measure values, in measure-column order.
    pub fn measures(&self) -> &[String] {
        &self.measures
    }

    /// Number of measure cells in this row.
    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }

    /// Mutable access to one measure cell, if `index` is in range.
    pub fn measure_mut(&mut self, index: usize) -> Option<&mut String> {
        self.measures.get_mut(index)
    }

    /// Total number of cells (categories plus measures).
    pub fn len(&self) -> usize {
        self.categories.len() + self.measures.len()
    }

    /// Whether the row has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.measures.is_empty()
    }

    /// Render the row as a delimited record.
    ///
    /// No quoting or escaping is performed; generated values must not
    /// contain the delimiter or a line separator.
    pub fn to_record(&self, delimiter: char) -> String {
        let mut record = String::new();
        for (i, field) in self.categories.iter().chain(&self.measures).enumerate() {
            if i > 0 {
                record.push(delimiter);
            }
            record.push_str(field);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> Row {
        Row::new(
            vec!["series0".to_string(), "01/01/2020".to_string()],
            vec!["12.345".to_string(), "-0.250".to_string()],
        )
    }

    #[test]
    fn test_row_shape() {
        let row = sample_row();
        assert_eq!(row.len(), 4);
        assert_eq!(row.categories().len(), 2);
        assert_eq!(row.measure_count(), 2);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_to_record_joins_categories_then_measures() {
        let row = sample_row();
        assert_eq!(row.to_record(','), "series0,01/01/2020,12.345,-0.250");
    }

    #[test]
    fn test_measure_mut_addresses_only_measures() {
        let mut row = sample_row();

        *row.measure_mut(0).unwrap() = "0".to_string();
        assert_eq!(row.measures()[0], "0");
        // Categories are untouched
        assert_eq!(row.categories()[0], "series0");

        // Out-of-range measure index is not addressable
        assert!(row.measure_mut(2).is_none());
    }

    #[test]
    fn test_empty_row() {
        let row = Row::new(vec![], vec![]);
        assert!(row.is_empty());
        assert_eq!(row.to_record(','), "");
    }
}
