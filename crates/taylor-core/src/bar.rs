//! Fixed-width bar rendering with eighth-block resolution.

const FULL_BLOCK: char = '█';

/// Partial-cell glyphs indexed by eighths filled. Index 0 emits no glyph.
const PARTIAL_BLOCKS: [&str; 9] = ["", "▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];

/// Renders `fraction` of `width` cells as a block bar, padded with spaces to
/// exactly `width` characters.
///
/// `fraction` is clamped to `[0, 1]`; NaN renders as an empty bar.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_bar(width: usize, fraction: f64) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    let eighths = (fraction * width as f64 * 8.0).floor() as usize;
    let whole = (eighths / 8).min(width);

    let mut bar: String = std::iter::repeat_n(FULL_BLOCK, whole).collect();
    if whole < width {
        // The cell after the full blocks holds the partial glyph, or a space
        // when the remainder is under one eighth.
        match PARTIAL_BLOCKS[eighths % 8] {
            "" => bar.push(' '),
            glyph => bar.push_str(glyph),
        }
        bar.extend(std::iter::repeat_n(' ', width - whole - 1));
    }
    bar
}
