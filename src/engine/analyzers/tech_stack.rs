//! Technology-stack scoring from signature matches.
//!
//! Matched signatures contribute their catalog points. Legacy markers
//! score nothing and record issues; a modern framework sharing a page
//! with legacy markers costs a mixing penalty. The sum is capped at the
//! category ceiling, since a well-built page can match more signatures
//! than the ceiling covers.

use crate::engine::category::Category;
use crate::engine::result::CategoryResult;
use crate::engine::signatures::{detect_signatures, SignatureKind};
use crate::engine::snapshot::Snapshot;

pub(crate) const ISSUE_NO_FRAMEWORK: &str = "No modern JavaScript framework detected";
pub(crate) const ISSUE_NO_OPTIMIZATIONS: &str = "No performance optimizations detected";
pub(crate) const ISSUE_MIXED_STACK: &str =
    "Modern framework mixed with legacy technologies";
pub(crate) const LEGACY_ISSUE_PREFIX: &str = "Legacy technology detected: ";

const MIXING_PENALTY: u32 = 2;

pub(crate) fn analyze(snapshot: &Snapshot) -> CategoryResult {
    let mut result = CategoryResult::new(Category::TechStack);

    let mut has_framework = false;
    let mut has_legacy = false;
    let mut has_optimization = false;

    for signature in detect_signatures(snapshot.raw_markup()) {
        match signature.kind {
            SignatureKind::ModernFramework => {
                has_framework = true;
                result.award(signature.points, &format!("Detected {}", signature.name));
            }
            SignatureKind::ModernFeature => {
                result.award(signature.points, &format!("Detected {}", signature.name));
            }
            SignatureKind::Optimization => {
                has_optimization = true;
                result.award(signature.points, &format!("Detected {}", signature.name));
            }
            SignatureKind::Legacy => {
                has_legacy = true;
                result.flag(&format!("{LEGACY_ISSUE_PREFIX}{}", signature.name));
            }
        }
    }

    if !has_framework {
        result.flag(ISSUE_NO_FRAMEWORK);
    }
    if !has_optimization {
        result.flag(ISSUE_NO_OPTIMIZATIONS);
    }
    if has_framework && has_legacy {
        result.penalize(MIXING_PENALTY, ISSUE_MIXED_STACK);
    }

    result.clamp_to_ceiling();
    result
}
