//! Kana tables and romaji checking for the typing drills.
use rand::Rng;
use rand::seq::SliceRandom;

pub const HIRAGANA: &[&str] = &[
    "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ", "た",
    "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ", "ま", "み",
    "む", "め", "も", "や", "ゆ", "よ", "ら", "り", "る", "れ", "ろ", "わ", "を", "ん",
];

pub const KATAKANA: &[&str] = &[
    "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ", "ソ", "タ",
    "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "ヒ", "フ", "ヘ", "ホ", "マ", "ミ",
    "ム", "メ", "モ", "ヤ", "ユ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ワ", "ヲ", "ン",
];

/// Romaji for each position of [`HIRAGANA`] and [`KATAKANA`].
const ROMAJI: &[&str] = &[
    "a", "i", "u", "e", "o", "ka", "ki", "ku", "ke", "ko", "sa", "shi", "su", "se", "so", "ta",
    "chi", "tsu", "te", "to", "na", "ni", "nu", "ne", "no", "ha", "hi", "fu", "he", "ho", "ma",
    "mi", "mu", "me", "mo", "ya", "yu", "yo", "ra", "ri", "ru", "re", "ro", "wa", "wo", "n",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KanaSet {
    #[default]
    Hiragana,
    Katakana,
}

impl KanaSet {
    pub fn chars(self) -> &'static [&'static str] {
        match self {
            KanaSet::Hiragana => HIRAGANA,
            KanaSet::Katakana => KATAKANA,
        }
    }
}

pub fn romaji(kana: &str) -> Option<&'static str> {
    HIRAGANA
        .iter()
        .position(|&k| k == kana)
        .or_else(|| KATAKANA.iter().position(|&k| k == kana))
        .map(|i| ROMAJI[i])
}

/// Whether `input` is the romaji for `kana`, ignoring case and surrounding whitespace.
pub fn check_romaji(kana: &str, input: &str) -> bool {
    match romaji(kana) {
        Some(expected) => input.trim().to_lowercase() == expected,
        None => false,
    }
}

pub fn random_kana<R: Rng + ?Sized>(set: KanaSet, rng: &mut R) -> &'static str {
    set.chars().choose(rng).copied().unwrap_or("あ")
}

/// Random character drawn from both syllabaries.
pub fn random_any_kana<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let set = if rng.gen_bool(0.5) {
        KanaSet::Hiragana
    } else {
        KanaSet::Katakana
    };
    random_kana(set, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tables_line_up() {
        assert_eq!(HIRAGANA.len(), 46);
        assert_eq!(KATAKANA.len(), 46);
        assert_eq!(ROMAJI.len(), 46);
    }

    #[test]
    fn test_romaji_lookup() {
        assert_eq!(romaji("し"), Some("shi"));
        assert_eq!(romaji("ツ"), Some("tsu"));
        assert_eq!(romaji("ン"), Some("n"));
        assert_eq!(romaji("x"), None);
    }

    #[test]
    fn test_check_romaji_normalizes_input() {
        assert!(check_romaji("ふ", "  FU "));
        assert!(check_romaji("ヲ", "wo"));
        assert!(!check_romaji("ふ", "hu"));
        assert!(!check_romaji("?", "a"));
    }

    #[test]
    fn test_random_kana_stays_in_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(KATAKANA.contains(&random_kana(KanaSet::Katakana, &mut rng)));
            assert!(romaji(random_any_kana(&mut rng)).is_some());
        }
    }
}
