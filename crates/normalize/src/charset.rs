//! Built-in removal groups.
//!
//! Each constant is one toggleable group of code points. The groups are
//! mutually disjoint and internally duplicate-free; [`RemovalSet`]
//! construction would reject them otherwise.
//!
//! [`RemovalSet`]: crate::RemovalSet

/// Generic ASCII punctuation plus the decimal digits.
///
/// Digits are removed because chapter/page numbering in the source scans is
/// editorial apparatus, not text. `^` is deliberately absent: it never
/// appears in the scanned corpora.
pub(crate) const ASCII_PUNCTUATION: &str =
    "!\"#$%&'()*+,-./0123456789:;<=>?@[\\]_`{|}~";

/// Ideographic and full-width punctuation used in CJK typography.
///
/// Covers the ideographic stops and brackets, the curly quotation marks
/// used in horizontal typesetting, the full-width forms of ASCII symbols
/// and digits, and the small-form variants found in vertically set scans.
pub(crate) const CJK_PUNCTUATION: &str = "\u{3002}\u{3001}\u{ff01}\u{ff0c}\u{ff1a}\u{ff1b}\u{ff1f}\u{ff08}\u{ff09}\u{3008}\u{3009}\u{300a}\u{300b}\u{300c}\u{300d}\u{300e}\u{300f}\u{3014}\u{3015}\u{3010}\u{3011}\u{201c}\u{201d}\u{30fb}\u{2026}\u{ff02}\u{ff03}\u{ff05}\u{ff06}\u{ff0a}\u{ff0e}\u{ff0f}\u{ff10}\u{ff11}\u{ff12}\u{ff13}\u{ff14}\u{ff15}\u{ff16}\u{ff17}\u{ff18}\u{ff19}\u{ff1c}\u{ff1d}\u{ff1e}\u{ff20}\u{ff3b}\u{ff3c}\u{ff3d}\u{ff3e}\u{ff3f}\u{ff40}\u{ff5b}\u{ff5c}\u{ff5d}\u{ff5e}\u{ffe5}\u{ffe0}\u{ffe1}\u{fe36}\u{fe51}\u{fe54}\u{fe56}";

/// Box-drawing rules and geometric shapes left behind by OCR of tables
/// and decorative borders.
pub(crate) const BOX_AND_GEOMETRY: &str = "\u{2500}\u{2501}\u{2505}\u{250b}\u{250c}\u{250d}\u{250e}\u{250f}\u{2510}\u{2511}\u{2512}\u{2513}\u{2514}\u{2515}\u{2518}\u{2519}\u{251a}\u{251b}\u{251c}\u{251d}\u{251e}\u{2520}\u{2521}\u{2522}\u{2523}\u{2524}\u{2525}\u{2526}\u{2527}\u{2529}\u{252a}\u{252b}\u{252c}\u{252d}\u{252e}\u{252f}\u{2530}\u{2531}\u{2532}\u{2533}\u{25a0}\u{25a1}\u{25b2}\u{25b3}\u{25c6}\u{25c7}\u{25cb}\u{25ce}\u{25cf}\u{2605}";

/// Latin letters, ASCII and full-width forms.
///
/// The target corpora are logographic; any Latin letters are editorial
/// glosses or catalogue sigla and are discarded.
pub(crate) const LATIN_LETTERS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
     \u{ff41}\u{ff42}\u{ff43}\u{ff44}\u{ff45}\u{ff46}\u{ff47}\u{ff48}\u{ff49}\u{ff4a}\u{ff4b}\u{ff4c}\u{ff4d}\u{ff4e}\u{ff4f}\u{ff50}\u{ff51}\u{ff52}\u{ff53}\u{ff54}\u{ff55}\u{ff56}\u{ff57}\u{ff58}\u{ff59}\u{ff5a}\
     \u{ff21}\u{ff22}\u{ff23}\u{ff24}\u{ff25}\u{ff26}\u{ff27}\u{ff28}\u{ff29}\u{ff2a}\u{ff2b}\u{ff2c}\u{ff2d}\u{ff2e}\u{ff2f}\u{ff30}\u{ff31}\u{ff32}\u{ff33}\u{ff34}\u{ff35}\u{ff36}\u{ff37}\u{ff38}\u{ff39}\u{ff3a}";
