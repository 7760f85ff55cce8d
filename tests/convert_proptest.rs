//! Property-based tests for the converter.
//!
//! These tests ensure the converter is total over arbitrary input and
//! that text outside the rule vocabulary is never disturbed.

use proptest::prelude::*;

use katexify::convert;

proptest! {
    /// Totality: any string at all, including arbitrary Unicode, converts
    /// without panicking.
    #[test]
    fn convert_is_total(input in any::<String>()) {
        let _ = convert(&input);
    }

    /// Every rule pattern requires a backslash, brace or bracket, so text
    /// containing none of them must pass through byte for byte.
    #[test]
    fn rule_free_text_passes_through(input in r"[^\\{}\[\]]*") {
        prop_assert_eq!(convert(&input), input);
    }

    /// Converting twice is the same as converting once for inputs whose
    /// commands are only deleted or renamed into rule-free output.
    #[test]
    fn converted_deletion_output_is_stable(body in r"[^\\{}\[\]]*") {
        let input = format!("\\begin{{center}}\\bigskip {}\\end{{center}}", body);
        let once = convert(&input);
        prop_assert_eq!(convert(&once), once.clone());
    }
}

/// Unbalanced brace floods must not blow up conversion time. The regex
/// engine guarantees no backtracking, so this bounds the whole pass.
#[test]
fn test_adversarial_brace_flood_is_bounded() {
    let input = format!("\\usepackage{}{}", "{".repeat(50_000), "}".repeat(50_000));
    let start = std::time::Instant::now();
    let _ = convert(&input);
    assert!(start.elapsed() < std::time::Duration::from_secs(10));
}
