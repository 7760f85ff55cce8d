//! The rewrite rule table.
//!
//! An explicit ordered sequence of rules, applied top to bottom. Order is
//! load-bearing: later rules see the output of earlier rules, never the
//! original input, and duplicate patterns are permitted. Appending a rule
//! is the only extension mechanism — the engine never changes.
//!
//! ## Authoring conventions
//!
//! Checked mechanically by [`validate`](super::validate):
//!
//! - A literal backslash command is matched as `\\cmd`; literal braces and
//!   brackets are always escaped (`\{`, `\}`, `\[`, `\]`).
//! - Every deleted brace- or bracket-delimited argument is matched lazily
//!   (`\{.*?\}`), so a rule never swallows unrelated text between two
//!   argument groups later in the document. Commands with a fixed arity
//!   spell out exactly that many consecutive lazy groups.
//! - A bare command-name pattern ends with `\b`, so the rule for `\ang`
//!   leaves `\angle` alone, `\item` leaves `\itemsep` alone and `\up`
//!   leaves `\upsilon` alone.
//! - Optional star variants are written `\*?`.

use serde::Serialize;

/// One rewrite step: a regex over LaTeX syntax and its replacement.
///
/// Stateless and context-free — a rule matches and replaces with no
/// awareness of nesting depth or document structure beyond the text in
/// front of it. An empty replacement deletes the matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    /// Regex matched against the working document.
    pub pattern: &'static str,
    /// Literal replacement; may reference capture groups, may be empty.
    pub replacement: &'static str,
    /// Free-text rationale for the rule, surfaced by `katexify rules`.
    pub note: Option<&'static str>,
}

impl Rule {
    /// Rule that substitutes `replacement` for every match of `pattern`.
    pub const fn sub(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
            note: None,
        }
    }

    /// Rule that deletes every match of `pattern`.
    pub const fn del(pattern: &'static str) -> Self {
        Self::sub(pattern, "")
    }

    /// Attach a rationale note.
    pub const fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }
}

/// The full LaTeX → KaTeX rule table, in application order.
pub const RULES: &[Rule] = &[
    // Page formatting. These fire when a user feeds an entire document,
    // preamble included, into the converter.
    Rule::del(r"\\usepackage\{.*?\}").note("package imports have no KaTeX analogue"),
    Rule::del(r"\\lhead\{.*?\}").note("header text is dropped; could be surfaced separately"),
    Rule::del(r"\\pagestyle\{.*?\}"),
    Rule::del(r"\\setcounter\{.*?\}\{.*?\}"),
    Rule::del(r"\\documentclass(?:\[.*?\])?\{.*?\}"),
    // References. Wrappers go, names stay readable in the output.
    Rule::del(r"\\label\{.*?\}").note("delete label and its argument"),
    Rule::del(r"\\ref\b").note("delete \\ref but leave the name"),
    Rule::del(r"\\eqref\b"),
    Rule::del(r"\\caption\{.*?\}"),
    // Environment delimiters: deleted outright, or renamed to a supported
    // environment. Begin and end are independent rules so an unpaired
    // delimiter is still handled.
    Rule::del(r"\\begin\{figure\}"),
    Rule::del(r"\\begin\{document\}"),
    Rule::del(r"\\end\{document\}"),
    Rule::del(r"\\end\{figure\}"),
    Rule::del(r"\\begin\{center\}"),
    Rule::del(r"\\end\{center\}"),
    Rule::del(r"\\begin\{enumerate\}"),
    Rule::del(r"\\end\{enumerate\}"),
    Rule::del(r"\\item\b"),
    Rule::del(r"\\begin\{problem\}"),
    Rule::del(r"\\end\{problem\}"),
    Rule::del(r"\\begin\{tabular\}"),
    Rule::del(r"\\end\{tabular\}"),
    Rule::del(r"\\begin\{flushright\}"),
    Rule::del(r"\\end\{flushright\}"),
    Rule::sub(r"\\begin\{eqnarray\}", r"\begin{align}").note("KaTeX has no eqnarray"),
    Rule::sub(r"\\end\{eqnarray\}", r"\end{align}"),
    Rule::sub(r"\\begin\{eqnarray\*\}", r"\begin{align*}"),
    Rule::sub(r"\\end\{eqnarray\*\}", r"\end{align*}"),
    Rule::sub(r"\\begin\{eqalign\}", r"\begin{align}"),
    Rule::sub(r"\\end\{eqalign\}", r"\end{align}"),
    Rule::sub(r"\\begin\{eqalign\*\}", r"\begin{align*}"),
    Rule::sub(r"\\end\{eqalign\*\}", r"\end{align*}"),
    // Unsupported layout and spacing.
    Rule::del(r"\\centerline\b"),
    Rule::del(r"\\bigskip\b").note("skip commands are unsupported"),
    Rule::del(r"\\medskip\b"),
    Rule::del(r"\\smallskip\b"),
    Rule::del(r"\\noindent\b"),
    Rule::del(r"\\vrulefill\b"),
    Rule::del(r"\\vfill\b"),
    Rule::del(r"\\vfil\b"),
    Rule::del(r"\\hrulefill\b"),
    Rule::del(r"\\hfill\b"),
    Rule::del(r"\\hfil\b"),
    Rule::del(r"\\hline\b"),
    Rule::del(r"\\vline\b"),
    Rule::del(r"\\setlength\{.*?\}\{.*?\}"),
    Rule::del(r"\\setlength\{.*?\}").note("fallback for a setlength missing its value"),
    // Float placement options.
    Rule::del(r"\[h!?\]"),
    Rule::del(r"\[ht!?\]"),
    Rule::del(r"\[t!?\]"),
    Rule::del(r"\[b!?\]"),
    Rule::del(r"\[p!?\]"),
    Rule::del(r"\[!\]"),
    Rule::del(r"\[H!?\]"),
    Rule::del(r"\{l+\}").note("tabular column specs"),
    Rule::del(r"\{\}").note("lone empty group"),
    // Generalized-fraction delimiters.
    Rule::del(r"\\abovewithdelims\b"),
    Rule::del(r"\\atopwithdelims\b"),
    Rule::del(r"\\overwithdelims\b"),
    // Commands KaTeX does not support, mostly alphabetical. Deleted, or
    // replaced with the closest supported equivalent. Fixed-arity
    // commands take their arguments down with them.
    Rule::del(r"\\and\b"),
    Rule::sub(r"\\ang\b", r"\angle"),
    Rule::del(r"\\array\b"),
    Rule::sub(r"\\Arrowvert\b", r"\Vert"),
    Rule::sub(r"\\arrowvert\b", r"\vert"),
    Rule::del(r"\\bbox\b"),
    Rule::sub(r"\\bfseries\b", r"\textbf"),
    Rule::del(r"\\bigominus\b").note("may be supported in future"),
    Rule::del(r"\\bigoslash\b"),
    Rule::del(r"\\bigsqcap\b"),
    Rule::del(r"\\bracevert\b"),
    Rule::del(r"\\buildrel\b"),
    Rule::del(r"\\C\b"),
    Rule::del(r"\\cancelto\b"),
    Rule::del(r"\\cases\b"),
    Rule::del(r"\\cee\b"),
    Rule::del(r"\\cf\b"),
    Rule::del(r"\\class\b"),
    Rule::del(r"\\cline\b"),
    Rule::del(r"\\Coppa\b"),
    Rule::del(r"\\coppa\b"),
    Rule::del(r"\\cssld\b"),
    Rule::del(r"\\dddot\b"),
    Rule::del(r"\\ddddot\b"),
    Rule::del(r"\\DeclareMathOperator\*?\{.*?\}\{.*?\}").note("removes both arguments"),
    Rule::del(r"\\definecolor\*?\{.*?\}\{.*?\}\{.*?\}"),
    Rule::del(r"\\Digamma\b"),
    Rule::del(r"\\else\b"),
    Rule::sub(r"\\emph\b", r"\textit"),
    Rule::del(r"\\enclose\{.*?\}\[.*?\]\{.*?\}"),
    Rule::sub(r"\\euro\b", "€"),
    Rule::del(r"\\idotint\b"),
    Rule::del(r"\\iddots\b"),
    Rule::del(r"\\ifx\b"),
    Rule::del(r"\\ifmode\b"),
    Rule::del(r"\\if\b"),
    Rule::del(r"\\fi\b"),
    Rule::del(r"\\iiiint\b").note("only integrals up to triple are supported"),
    Rule::del(r"\\itshape\b"),
    Rule::del(r"\\Koppa\b"),
    Rule::del(r"\\koppa\b"),
    Rule::sub(r"\\LeftArrow\b", r"\leftarrow"),
    Rule::del(r"\\leftroot\b"),
    Rule::del(r"\\leqalignno\b"),
    Rule::del(r"\\lower\b"),
    Rule::del(r"\\mathtip\b"),
    Rule::sub(r"\\mit\b", r"\mathit"),
    Rule::del(r"\\mbox\b"),
    Rule::del(r"\\md\b"),
    Rule::del(r"\\mdseries\b"),
    Rule::del(r"\\mmltoken\b"),
    Rule::del(r"\\moveleft\b"),
    Rule::del(r"\\moveright\b"),
    Rule::del(r"\\mspace\b"),
    Rule::del(r"\\multicolumn\*?\{.*?\}\{.*?\}\{.*?\}").note("removes all three arguments"),
    Rule::del(r"\{multiline\}"),
    Rule::del(r"\\Newextarrow\b"),
    Rule::del(r"\\newcounter\{.*?\}"),
    Rule::del(r"\\newenvironment\{.*?\}(?:\[.*?\])?\{.*?\}\{.*?\}"),
    Rule::del(r"\\addtocounter\{.*?\}\{.*?\}"),
    Rule::del(r"\\normalfont\b"),
    Rule::del(r"\\oldstyle\b"),
    Rule::del(r"\\or\b"),
    Rule::del(r"\\pagecolor\b"),
    Rule::del(r"\\part\b"),
    Rule::del(r"\\Q\b"),
    Rule::del(r"\\newtheorem\{.*?\}\{.*?\}"),
    Rule::del(r"\\raise\b"),
    Rule::del(r"\\raisebox\b"),
    Rule::del(r"\\require\{.*?\}"),
    Rule::del(r"\\root\b"),
    Rule::sub(r"\\rule\b", r"\Rule"),
    Rule::del(r"\\newtheorem\{\}"),
    Rule::sub(r"\\overparen\b", r"\overgroup"),
    Rule::del(r"\\Sampi\b"),
    Rule::del(r"\\sampi\b"),
    Rule::del(r"\\sc\b"),
    Rule::del(r"\\scalebox\{.*?\}"),
    Rule::sub(r"\\scr\b", r"\mathscr"),
    Rule::sub(r"\\Space\b", r"\space"),
    Rule::del(r"\\shoveleft\b"),
    Rule::del(r"\\shoveright\b"),
    Rule::del(r"\\sideset\{.*?\}\{.*?\}"),
    Rule::del(r"\\SI\b"),
    Rule::del(r"\\unit\b"),
    Rule::del(r"\\skew\b"),
    Rule::del(r"\\skip\b"),
    Rule::del(r"\\sl\b"),
    Rule::del(r"\\smiley\b"),
    Rule::del(r"\\Stigma\b"),
    Rule::del(r"\\stigma\b"),
    Rule::del(r"\\strut\b"),
    Rule::del(r"\\style\b"),
    Rule::del(r"\{subarray\}"),
    Rule::del(r"\\textsl\b"),
    Rule::del(r"\\texttip\b"),
    Rule::del(r"\\textvisiblespace\b"),
    Rule::sub(r"\\Tiny\b", r"\tiny"),
    Rule::del(r"\\toggle\b"),
    Rule::del(r"\\unicode\b"),
    Rule::del(r"\\up\b"),
    Rule::del(r"\\uproot\b"),
    Rule::del(r"\\upshape\b"),
    Rule::sub(r"\\underparen\b", r"\undergroup"),
    Rule::sub(r"\\overbracket\b", r"\overbrace"),
    Rule::sub(r"\\underbracket\b", r"\underbrace"),
    Rule::del(r"\\varcoppa\b"),
    Rule::del(r"\\varstigma\b"),
    Rule::del(r"\\wideparen\b").note("may be supported in future"),
];
