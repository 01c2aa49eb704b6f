//! Edge resistance.

/// Dragging past the first slide rightwards or the last slide leftwards.
pub fn is_pulling_past_edge(delta_x: f32, index: usize, count: usize) -> bool {
    (index == 0 && delta_x > 0.0) || (count > 0 && index == count - 1 && delta_x < 0.0)
}

/// Visible offset for a raw horizontal drag of `delta_x`.
///
/// Past an edge the offset follows `Δx / (|Δx|/W + 1)`, which is monotonic and
/// saturates below `W`. Elsewhere the drag is followed one to one.
pub fn resisted_offset(delta_x: f32, width: f32, index: usize, count: usize) -> f32 {
    if width <= 0.0 || !is_pulling_past_edge(delta_x, index, count) {
        return delta_x;
    }
    delta_x / (delta_x.abs() / width + 1.0)
}
