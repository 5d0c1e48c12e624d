//! Logical column path parsing.

use parquet::schema::types::ColumnPath;

/// Splits a logical path such as `engine.capacity` into its segments.
///
/// Empty segments are kept, so `"a..b"` yields `["a", "", "b"]` and can only
/// resolve against a reader whose physical path carries an empty field name.
pub fn parse_column_path(path: &str, delimiter: char) -> ColumnPath {
    ColumnPath::new(path.split(delimiter).map(str::to_owned).collect())
}

/// Dot-joined rendering used in error messages and logs.
pub(crate) fn display_path(path: &ColumnPath) -> String {
    path.parts().join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiter() {
        let path = parse_column_path("engine.capacity", '.');
        assert_eq!(path.parts(), &["engine".to_string(), "capacity".to_string()]);

        let path = parse_column_path("engine/capacity", '/');
        assert_eq!(path.parts().len(), 2);
    }

    #[test]
    fn single_segment_and_empty_segments() {
        assert_eq!(parse_column_path("id", '.').parts(), &["id".to_string()]);
        assert_eq!(parse_column_path("a..b", '.').parts().len(), 3);
        assert_eq!(parse_column_path("", '.').parts(), &[String::new()]);
    }

    #[test]
    fn equality_is_segment_wise() {
        assert_eq!(
            parse_column_path("a.b", '.'),
            ColumnPath::new(vec!["a".into(), "b".into()])
        );
        assert_ne!(
            parse_column_path("a.b", '.'),
            ColumnPath::new(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_ne!(
            parse_column_path("a.b", '.'),
            ColumnPath::new(vec!["a.b".into()])
        );
    }
}
