/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Stagger delay for card entry animations, e.g. `0.3s`.
pub fn animation_delay(index: usize, step: f64) -> String {
    format!("{:.1}s", index as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <b>"), "R&amp;D &lt;b&gt;");
        assert_eq!(escape(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape("I'll"), "I&#39;ll");
        assert_eq!(escape("MediQ — RAG"), "MediQ — RAG");
    }

    #[test]
    fn test_animation_delay() {
        assert_eq!(animation_delay(0, 0.1), "0.0s");
        assert_eq!(animation_delay(7, 0.1), "0.7s");
        assert_eq!(animation_delay(1, 0.2), "0.2s");
    }
}
