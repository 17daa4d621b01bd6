//! `{placeholder}` substitution for fact row templates.
//!
//! Unknown placeholders render as the empty string — content authors add
//! placeholders ahead of engine support, and a half-shaped template must
//! never take down a generation. An unclosed `{` renders literally.

use std::collections::HashMap;

pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let key = &after_open[..close];
                if let Some(value) = vars.get(key) {
                    out.push_str(value);
                }
                rest = &after_open[close + 1..];
            }
            None => {
                // No closing brace ahead: emit the remainder verbatim.
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn substitutes_known_placeholders() {
        let v = vars(&[("name", "Piti"), ("element", "Fire")]);
        assert_eq!(
            render("{name} walks with {element}.", &v),
            "Piti walks with Fire."
        );
    }

    #[test]
    fn unknown_placeholder_renders_empty() {
        let v = vars(&[("name", "Piti")]);
        assert_eq!(render("{name}:{missing}:", &v), "Piti::");
    }

    #[test]
    fn unclosed_brace_renders_literally() {
        let v = vars(&[("name", "Piti")]);
        assert_eq!(render("{name} and {rest", &v), "Piti and {rest");
    }

    #[test]
    fn empty_template_is_fine() {
        assert_eq!(render("", &vars(&[])), "");
    }
}
