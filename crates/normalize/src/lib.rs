//! Intertext normalization layer.
//!
//! This crate strips structural noise from raw source texts so that only
//! content-bearing symbols remain. Downstream stages (alignment, n-gram
//! comparison) rely on the output being free of whitespace and of every
//! configured punctuation/symbol/annotation character.
//!
//! ## What we do
//!
//! - Delete all whitespace code points (delete, not collapse: the target
//!   corpora are logographic and carry no meaningful word boundaries)
//! - Delete every occurrence of every [`RemovalSet`] entry, in set order
//! - Validate the removal set once at startup: entries must be non-empty
//!   and distinct
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Give us the same text
//! and removal set, you get the same result on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Output contains no whitespace and no removal-set entry
//! - Normalization is idempotent for a fixed set
//! - Characters outside the set pass through untouched
//!
//! Bottom line: same input + same set = same output forever.

mod charset;
mod config;
mod error;
mod removal;
mod transform;

pub use crate::config::NormalizeConfig;
pub use crate::error::NormalizeError;
pub use crate::removal::RemovalSet;
pub use crate::transform::normalize;

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> RemovalSet {
        NormalizeConfig::default()
            .removal_set()
            .expect("default removal set is valid")
    }

    #[test]
    fn strips_whitespace_and_mixed_width_punctuation() {
        let set = default_set();
        let input = "子曰:「學而時習之, 不亦說乎?」\n有朋自遠方來。";
        let out = normalize(input, &set);
        assert_eq!(out, "子曰學而時習之不亦說乎有朋自遠方來");
    }

    #[test]
    fn strips_latin_annotations() {
        let set = default_set();
        let out = normalize("道 (Tao) 可道,非常道", &set);
        assert_eq!(out, "道可道非常道");
    }

    #[test]
    fn strips_box_drawing_and_digits() {
        let set = default_set();
        let out = normalize("┌──┐\n第1章 ★ 序■\n└──┘", &set);
        assert_eq!(out, "第章序");
    }

    #[test]
    fn idempotent_for_fixed_set() {
        let set = default_set();
        let input = " 水、火。木 abc ── 12";
        let once = normalize(input, &set);
        let twice = normalize(&once, &set);
        assert_eq!(once, twice);
    }

    #[test]
    fn output_contains_no_forbidden_characters() {
        let set = default_set();
        let out = normalize("天地玄黃,宇宙洪荒。 gloss ○", &set);
        assert!(!out.chars().any(char::is_whitespace));
        for entry in set.entries() {
            assert!(!out.contains(entry.as_str()), "entry {entry:?} survived");
        }
    }

    #[test]
    fn unknown_characters_pass_through() {
        let set = default_set();
        // Greek is in no removal group.
        assert_eq!(normalize("α βγ? x", &set), "αβγ");
    }

    #[test]
    fn latin_toggle_is_independent() {
        let cfg = NormalizeConfig {
            strip_latin_letters: false,
            ..Default::default()
        };
        let set = cfg.removal_set().expect("config is valid");
        assert_eq!(normalize("道 Tao 可道。", &set), "道Tao可道");
    }

    #[test]
    fn cjk_punctuation_toggle_is_independent() {
        let cfg = NormalizeConfig {
            strip_cjk_punctuation: false,
            strip_latin_letters: false,
            ..Default::default()
        };
        let set = cfg.removal_set().expect("config is valid");
        // U+3002 and U+FF01 survive; the ASCII group stays independent.
        assert_eq!(
            normalize("道\u{3002}可道\u{ff01}", &set),
            "道\u{3002}可道\u{ff01}"
        );
    }

    #[test]
    fn extra_entries_are_applied_after_groups() {
        let cfg = NormalizeConfig {
            extra: vec!["序文".to_string()],
            ..Default::default()
        };
        let set = cfg.removal_set().expect("config is valid");
        assert_eq!(normalize("序文:天地玄黃", &set), "天地玄黃");
    }

    #[test]
    fn multi_character_entries_delete_to_fixed_point() {
        let set = RemovalSet::from_entries(["ab"]).expect("set is valid");
        // Deleting the inner occurrence splices a fresh one together.
        let out = normalize("aabb", &set);
        assert_eq!(out, "");
        assert_eq!(normalize(&out, &set), out);
    }

    #[test]
    fn empty_entry_rejected() {
        let res = RemovalSet::from_entries(["。", ""]);
        assert!(matches!(res, Err(NormalizeError::EmptyEntry { index: 1 })));
    }

    #[test]
    fn duplicate_entry_rejected() {
        let res = RemovalSet::from_entries(["。", "、", "。"]);
        assert!(matches!(
            res,
            Err(NormalizeError::DuplicateEntry(entry)) if entry == "。"
        ));
    }

    #[test]
    fn zero_config_version_rejected() {
        let cfg = NormalizeConfig {
            version: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.removal_set(),
            Err(NormalizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn removal_set_serde_round_trip() {
        let set = default_set();
        let json = serde_json::to_string(&set).expect("serializes");
        let back: RemovalSet = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(set, back);
    }

    #[test]
    fn removal_set_deserialization_revalidates() {
        let res: Result<RemovalSet, _> = serde_json::from_str(r#"["。", "。"]"#);
        assert!(res.is_err());
    }
}
