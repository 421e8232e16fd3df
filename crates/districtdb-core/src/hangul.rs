// crates/districtdb-core/src/hangul.rs

//! # Hangul Decomposition
//!
//! Expands precomposed Hangul syllables into compatibility jamo so that
//! matching can happen below the whole-character level: `강남` becomes
//! `ㄱㅏㅇㄴㅏㅁ`, which the query `강ㄴ` (an IME state mid-way through
//! typing `강남`) matches as a plain substring.
//!
//! Applied identically to queries and candidates, so comparison stays
//! symmetric. Pure and locale-independent.

/// First codepoint of the precomposed syllable block (가).
const SYLLABLE_BASE: u32 = 0xAC00;
/// 19 choseong × 21 jungseong × 28 jongseong.
const SYLLABLE_COUNT: u32 = 11_172;

const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Leading consonants, indexed by choseong number.
const CHOSEONG: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ", "ㅆ", "ㅇ",
    "ㅈ", "ㅉ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// Vowels, indexed by jungseong number. Compound vowels are pre-expanded
/// into their basic constituents (ㅘ → ㅗㅏ, ㅢ → ㅡㅣ, ...).
const JUNGSEONG: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅗㅏ", "ㅗㅐ",
    "ㅗㅣ", "ㅛ", "ㅜ", "ㅜㅓ", "ㅜㅔ", "ㅜㅣ", "ㅠ", "ㅡ", "ㅡㅣ", "ㅣ",
];

/// Trailing consonants, indexed by jongseong number. Index 0 is the empty
/// final; cluster finals are pre-expanded (ㄳ → ㄱㅅ, ㄺ → ㄹㄱ, ...).
const JONGSEONG: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ", "ㄹㅁ",
    "ㄹㅂ", "ㄹㅅ", "ㄹㅌ", "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ", "ㅆ",
    "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// Decompose `text` into a flat sequence of jamo units.
///
/// - Precomposed syllables (U+AC00–U+D7A3) expand into leading consonant,
///   vowel, and (when present) trailing consonant, with compound vowels and
///   cluster finals broken down further: `값` → `ㄱㅏㅂㅅ`.
/// - Standalone compatibility jamo pass through, compound ones decomposed
///   the same way, so half-typed queries compare cleanly.
/// - Any other character is case-folded and passed through unchanged, which
///   keeps matching case-insensitive for Latin text mixed into names.
///
/// ```
/// use districtdb_core::hangul::decompose;
///
/// assert_eq!(decompose("강남"), "ㄱㅏㅇㄴㅏㅁ");
/// assert_eq!(decompose("광주"), "ㄱㅗㅏㅇㅈㅜ");
/// assert_eq!(decompose("Seoul 1번지"), "seoul 1ㅂㅓㄴㅈㅣ");
/// ```
pub fn decompose(text: &str) -> String {
    // Worst case every char is a 3-jamo syllable.
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        if let Some(index) = syllable_index(ch) {
            let choseong = index / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
            let jungseong = (index / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
            let jongseong = index % JONGSEONG_COUNT;
            out.push_str(CHOSEONG[choseong as usize]);
            out.push_str(JUNGSEONG[jungseong as usize]);
            out.push_str(JONGSEONG[jongseong as usize]);
        } else if let Some(expanded) = decompose_compat_jamo(ch) {
            out.push_str(expanded);
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Offset of `ch` within the precomposed syllable block, if it is one.
fn syllable_index(ch: char) -> Option<u32> {
    let cp = ch as u32;
    if (SYLLABLE_BASE..SYLLABLE_BASE + SYLLABLE_COUNT).contains(&cp) {
        Some(cp - SYLLABLE_BASE)
    } else {
        None
    }
}

/// Expansion for standalone compound compatibility jamo.
fn decompose_compat_jamo(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ㅘ' => "ㅗㅏ",
        'ㅙ' => "ㅗㅐ",
        'ㅚ' => "ㅗㅣ",
        'ㅝ' => "ㅜㅓ",
        'ㅞ' => "ㅜㅔ",
        'ㅟ' => "ㅜㅣ",
        'ㅢ' => "ㅡㅣ",
        'ㄳ' => "ㄱㅅ",
        'ㄵ' => "ㄴㅈ",
        'ㄶ' => "ㄴㅎ",
        'ㄺ' => "ㄹㄱ",
        'ㄻ' => "ㄹㅁ",
        'ㄼ' => "ㄹㅂ",
        'ㄽ' => "ㄹㅅ",
        'ㄾ' => "ㄹㅌ",
        'ㄿ' => "ㄹㅍ",
        'ㅀ' => "ㄹㅎ",
        'ㅄ' => "ㅂㅅ",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_open_syllables() {
        assert_eq!(decompose("서울"), "ㅅㅓㅇㅜㄹ");
        assert_eq!(decompose("부산"), "ㅂㅜㅅㅏㄴ");
    }

    #[test]
    fn decomposes_trailing_consonants() {
        assert_eq!(decompose("강남"), "ㄱㅏㅇㄴㅏㅁ");
        assert_eq!(decompose("압구정"), "ㅇㅏㅂㄱㅜㅈㅓㅇ");
    }

    #[test]
    fn expands_compound_vowels() {
        // ㅘ in 광, ㅢ in 의
        assert_eq!(decompose("광주"), "ㄱㅗㅏㅇㅈㅜ");
        assert_eq!(decompose("의정부"), "ㅇㅡㅣㅈㅓㅇㅂㅜ");
    }

    #[test]
    fn expands_cluster_finals() {
        assert_eq!(decompose("값"), "ㄱㅏㅂㅅ");
        assert_eq!(decompose("닭"), "ㄷㅏㄹㄱ");
    }

    #[test]
    fn double_consonants_stay_single_units() {
        // ㅆ and ㄲ are basic jamo, not clusters
        assert_eq!(decompose("쌍문"), "ㅆㅏㅇㅁㅜㄴ");
        assert_eq!(decompose("까치산"), "ㄲㅏㅊㅣㅅㅏㄴ");
    }

    #[test]
    fn standalone_jamo_pass_through() {
        // An IME state mid-way through typing 강남
        assert_eq!(decompose("강ㄴ"), "ㄱㅏㅇㄴ");
        // Standalone compound jamo decompose like their syllable forms
        assert_eq!(decompose("ㅢ"), "ㅡㅣ");
        assert_eq!(decompose("ㄳ"), "ㄱㅅ");
    }

    #[test]
    fn non_hangul_is_case_folded_and_kept() {
        assert_eq!(decompose("Gangnam-Gu 123"), "gangnam-gu 123");
        assert_eq!(decompose("SEOUL 시청"), "seoul ㅅㅣㅊㅓㅇ");
    }

    #[test]
    fn decomposition_is_deterministic() {
        let input = "서울특별시 강남구 압구정동 Apgujeong 123-4";
        assert_eq!(decompose(input), decompose(input));
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(decompose(""), "");
    }
}
