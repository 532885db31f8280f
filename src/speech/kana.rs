/// Best-effort normalization of recognized speech into hiragana.
///
/// Katakana maps to its hiragana counterpart (the long-vowel mark ー is
/// kept). Kanji cannot be read back without a dictionary, so each CJK
/// ideograph becomes a `？` placeholder. Everything else passes through.
pub fn to_hiragana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            // Katakana block shares the hiragana layout at a fixed offset.
            '\u{30A1}'..='\u{30F6}' => {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            }
            '\u{4E00}'..='\u{9FFF}' => '？',
            _ => c,
        })
        .collect()
}
