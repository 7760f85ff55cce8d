//! Rule table rewriter.
//!
//! Applies every rule from [`table::RULES`] in declaration order. Each
//! rule is one global `replace_all` pass; the result of rule *i* is the
//! input of rule *i + 1*. Most rules fire zero times on a typical
//! document, so the engine keeps the no-match path allocation-free.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::table;

/// Rule patterns compiled once, process-wide.
///
/// The table is static configuration and every pattern is covered by the
/// authoring checks in [`validate`](super::validate), so a failure to
/// compile here is a defect in the table itself, not a runtime condition.
static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    table::RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern)
                .unwrap_or_else(|e| panic!("rule pattern {:?} failed to compile: {e}", rule.pattern));
            (regex, rule.replacement)
        })
        .collect()
});

/// Convert a LaTeX document into its KaTeX-compatible form.
///
/// Total over all inputs: empty strings, arbitrary Unicode and unbalanced
/// LaTeX all come back rewritten or untouched, never as an error. Content
/// not covered by any rule passes through verbatim — that is the designed
/// fallback for unsupported-but-harmless commands.
///
/// Example: `\begin{eqnarray} .. \end{eqnarray}` becomes
/// `\begin{align} .. \end{align}`, since KaTeX has no eqnarray.
pub fn convert(input: &str) -> String {
    let mut working = input.to_string();
    for (regex, replacement) in COMPILED.iter() {
        // Borrowed means the rule fired zero times; keep the buffer.
        if let Cow::Owned(rewritten) = regex.replace_all(&working, *replacement) {
            working = rewritten;
        }
    }
    working
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(convert("x^2 + x + 2 = 0"), "x^2 + x + 2 = 0");
    }

    #[test]
    fn test_unknown_command_passes_through() {
        assert_eq!(convert(r"\frac{1}{2}"), r"\frac{1}{2}");
    }

    #[test]
    fn test_deletion_rule() {
        assert_eq!(convert(r"\usepackage{amsmath}$x$"), "$x$");
    }

    #[test]
    fn test_rename_preserves_argument() {
        assert_eq!(convert(r"\emph{Solve this}"), r"\textit{Solve this}");
    }

    #[test]
    fn test_environment_rename_cascades() {
        let input = "\\begin{eqnarray}\nx=1\n\\end{eqnarray}";
        assert_eq!(convert(input), "\\begin{align}\nx=1\n\\end{align}");
    }

    #[test]
    fn test_starred_environment_rename() {
        assert_eq!(
            convert(r"\begin{eqnarray*}x\end{eqnarray*}"),
            r"\begin{align*}x\end{align*}"
        );
    }

    #[test]
    fn test_unbalanced_input_is_not_rejected() {
        // No brace balancing: the matched span is rewritten, the rest kept.
        assert_eq!(convert(r"\emph{unclosed"), r"\textit{unclosed");
    }

    #[test]
    fn test_lazy_matching_spares_later_groups() {
        assert_eq!(convert(r"\label{eq:1} and {braces}"), " and {braces}");
    }

    #[test]
    fn test_converted_output_is_stable() {
        let once = convert("\\begin{eqnarray}\n\\emph{hi}\n\\end{eqnarray}");
        assert_eq!(convert(&once), once);
    }
}
