//! Shared CLI utilities.

use crate::utils::split_list;

/// Parse a comma/semicolon separated flag value into a `Vec<String>`, trimming
/// whitespace and discarding empty segments. Returns `None` when `value` is `None`.
pub fn parse_list(value: &Option<String>) -> Option<Vec<String>> {
    value.as_deref().map(split_list)
}

#[cfg(test)]
mod tests {
    use super::parse_list;

    #[test]
    fn unset_flag_stays_unset() {
        assert_eq!(parse_list(&None), None);
    }

    #[test]
    fn set_flag_is_split() {
        assert_eq!(
            parse_list(&Some("common/space/*; common/dash/main".to_string())),
            Some(vec!["common/space/*".to_string(), "common/dash/main".to_string()])
        );
    }
}
