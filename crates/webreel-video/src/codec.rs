//! Codec capability probing

/// Probe order: best compressive quality first, container default last.
pub const CODEC_PRIORITY: &[&str] = &[
    "video/webm;codecs=vp9",
    "video/webm;codecs=vp8",
    "video/webm",
];

/// Pick the first codec the platform reports as supported.
///
/// The chosen type ends up in the artifact's `mime_type` so later
/// playback is correctly typed. When the probe rejects everything, the
/// bare container type is used anyway: better a possibly-playable
/// artifact than none.
pub fn select_codec(supports: impl Fn(&str) -> bool) -> &'static str {
    CODEC_PRIORITY
        .iter()
        .copied()
        .find(|codec| supports(codec))
        .unwrap_or("video/webm")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_vp9() {
        assert_eq!(select_codec(|_| true), "video/webm;codecs=vp9");
    }

    #[test]
    fn test_falls_back_in_priority_order() {
        let chosen = select_codec(|codec| !codec.contains("vp9"));
        assert_eq!(chosen, "video/webm;codecs=vp8");
    }

    #[test]
    fn test_container_default_when_nothing_supported() {
        assert_eq!(select_codec(|_| false), "video/webm");
    }
}
