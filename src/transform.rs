use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Cap applied when the cap field text does not parse
const DEFAULT_CAP: f64 = 0.15;

/// Rewrite the weight of every `<lora:name:weight>` token in `source`.
///
/// A token whose name equals `keep_name` gets `keep_weight` verbatim;
/// every other token gets `min(weight, cap_weight)`. Text outside the
/// tokens passes through untouched, as does any token whose weight does
/// not parse as a float.
pub fn rewrite_weights(
    source: &str,
    keep_name: &str,
    keep_weight: &str,
    cap_weight: &str,
) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"<lora:([\w-]+):([\d.]+)>").unwrap());

    if source.is_empty() {
        return String::new();
    }

    let cap: f64 = cap_weight.parse().unwrap_or(DEFAULT_CAP);

    re.replace_all(source, |caps: &Captures| {
        let name = &caps[1];
        let weight: f64 = match caps[2].parse() {
            Ok(w) => w,
            // Something like "1.2.3" got past the pattern; leave it be
            Err(_) => return caps[0].to_string(),
        };
        if name == keep_name {
            format!("<lora:{}:{}>", name, keep_weight)
        } else {
            format!("<lora:{}:{}>", name, weight.min(cap))
        }
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_every_tag_when_no_name_is_kept() {
        let out = rewrite_weights("<lora:anime:0.8> <lora:realistic:0.3>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:anime:0.15> <lora:realistic:0.15>");
    }

    #[test]
    fn kept_name_gets_the_keep_weight() {
        let out = rewrite_weights(
            "<lora:anime:0.8> <lora:realistic:0.3>",
            "anime",
            "0.75",
            "0.15",
        );
        assert_eq!(out, "<lora:anime:0.75> <lora:realistic:0.15>");
    }

    #[test]
    fn kept_name_overrides_even_a_low_weight() {
        let out = rewrite_weights("<lora:x:0.05>", "x", "0.75", "0.15");
        assert_eq!(out, "<lora:x:0.75>");
    }

    #[test]
    fn weight_below_cap_survives_the_min() {
        let out = rewrite_weights("<lora:x:0.1>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:x:0.1>");
    }

    #[test]
    fn trailing_zeros_are_not_preserved_through_the_min() {
        // "0.10" parses to 0.1 and is printed back in shortest form
        let out = rewrite_weights("<lora:x:0.10>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:x:0.1>");
    }

    #[test]
    fn keep_weight_string_is_passed_through_verbatim() {
        let out = rewrite_weights("<lora:x:0.9>", "x", "0.70", "0.15");
        assert_eq!(out, "<lora:x:0.70>");
    }

    #[test]
    fn non_numeric_weight_never_matches() {
        let out = rewrite_weights("<lora:bad:abc>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:bad:abc>");
    }

    #[test]
    fn multi_dot_weight_is_copied_unchanged() {
        let out = rewrite_weights("<lora:bad:1.2.3> <lora:ok:0.9>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:bad:1.2.3> <lora:ok:0.15>");
    }

    #[test]
    fn surrounding_text_is_untouched() {
        let out = rewrite_weights(
            "masterpiece, <lora:style:0.9>, best quality",
            "",
            "0.75",
            "0.2",
        );
        assert_eq!(out, "masterpiece, <lora:style:0.2>, best quality");
    }

    #[test]
    fn plain_text_passes_through() {
        let out = rewrite_weights("no tags here", "", "0.75", "0.15");
        assert_eq!(out, "no tags here");
    }

    #[test]
    fn empty_source_gives_empty_output() {
        assert_eq!(rewrite_weights("", "anime", "0.75", "0.15"), "");
    }

    #[test]
    fn newlines_are_preserved() {
        let out = rewrite_weights("<lora:a:0.9>\n<lora:b:0.9>\n", "", "0.75", "0.15");
        assert_eq!(out, "<lora:a:0.15>\n<lora:b:0.15>\n");
    }

    #[test]
    fn repeated_names_are_rewritten_independently() {
        let out = rewrite_weights("<lora:a:0.9> <lora:a:0.05>", "", "0.75", "0.15");
        assert_eq!(out, "<lora:a:0.15> <lora:a:0.05>");
    }

    #[test]
    fn hyphens_and_underscores_in_names() {
        let out = rewrite_weights("<lora:foo-bar_v2:0.9>", "foo-bar_v2", "0.5", "0.15");
        assert_eq!(out, "<lora:foo-bar_v2:0.5>");
    }

    #[test]
    fn unparseable_cap_falls_back_to_default() {
        let out = rewrite_weights("<lora:x:0.8>", "", "0.75", "oops");
        assert_eq!(out, "<lora:x:0.15>");
    }

    #[test]
    fn transform_is_idempotent() {
        let source = "<lora:anime:0.8> plus <lora:realistic:0.3> text";
        let once = rewrite_weights(source, "anime", "0.75", "0.15");
        let twice = rewrite_weights(&once, "anime", "0.75", "0.15");
        assert_eq!(once, twice);
    }
}
