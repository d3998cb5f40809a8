//! Small text helpers.

/// Return at most `max` leading characters of `incoming`, with newlines
/// flattened to spaces so the sample fits on one line.
pub fn sample_string(incoming: &str, max: usize) -> String {
    incoming
        .chars()
        .take(max)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_kept() {
        assert_eq!(sample_string("hello", 60), "hello");
        assert_eq!(sample_string("", 60), "");
    }

    #[test]
    fn long_input_is_truncated() {
        let long = "a".repeat(100);
        assert_eq!(sample_string(&long, 60).len(), 60);
    }

    #[test]
    fn newlines_are_flattened() {
        assert_eq!(sample_string("# Title\nbody\n", 60), "# Title body ");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(sample_string("ééééé", 3), "ééé");
    }
}
