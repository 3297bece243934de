use xi_rope::Rope;

use crate::parsing::blocks::BlockNode;

/// Validates parser output invariants.
///
/// # Panics
/// Panics with a descriptive message if a block span is out of bounds,
/// inverted, or overlaps the previous block.
pub fn check(rope: &Rope, blocks: &[BlockNode]) {
    let n = rope.len();
    let mut prev_end = 0usize;
    for b in blocks {
        assert!(
            b.span.start < b.span.end && b.span.end <= n,
            "block span out of bounds: {:?} (rope len: {})",
            b.span,
            n
        );
        assert!(
            b.span.start >= prev_end,
            "block {:?} at {:?} overlaps previous block ending at {}",
            b.node.kind_name(),
            b.span,
            prev_end
        );
        prev_end = b.span.end;
    }
}
