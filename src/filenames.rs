//! Filename sanitization for downloaded tracks.

const INVALID_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];
const MAX_LEN: usize = 150;

/// Strip filesystem-illegal characters, replace spaces with underscores and
/// truncate to 150 characters.
///
/// The result doubles as the skip-index key, so it must stay stable across runs.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !INVALID_CHARS.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .take(MAX_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_with_underscores() {
        assert_eq!(
            sanitize_filename("Artist One, Artist Two - Song"),
            "Artist_One,_Artist_Two_-_Song"
        );
    }

    #[test]
    fn strips_illegal_characters() {
        let out = sanitize_filename(r#"AC/DC - What? "Live" <at> C:\Wembley | *1986*"#);
        assert_eq!(out, "ACDC_-_What_Live_at_CWembley__1986");
        assert!(!out.contains(INVALID_CHARS));
    }

    #[test]
    fn truncates_to_max_len() {
        let long = "a b ".repeat(100);
        let out = sanitize_filename(&long);
        assert_eq!(out.chars().count(), MAX_LEN);
        assert!(out.starts_with("a_b_a_b_"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let long = "é".repeat(200);
        let out = sanitize_filename(&long);
        assert_eq!(out.chars().count(), MAX_LEN);
    }

    #[test]
    fn is_idempotent() {
        for name in [
            "Artist - Song",
            "What?: <the> \"best\" | of / both \\ worlds*",
            &"x y".repeat(80),
            "",
        ] {
            let once = sanitize_filename(name);
            assert_eq!(sanitize_filename(&once), once);
        }
    }
}
