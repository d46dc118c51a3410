use crate::render::AxisTick;

/// Drops ticks that sit closer than `min_spacing_px` to the previously kept
/// one, preferring to keep the last tick so the axis end stays labeled.
pub(super) fn select_ticks_with_min_spacing(
    mut ticks: Vec<AxisTick>,
    min_spacing_px: f64,
) -> Vec<AxisTick> {
    if ticks.is_empty() {
        return ticks;
    }

    ticks.sort_by(|left, right| left.position.total_cmp(&right.position));
    if ticks.len() == 1 || !min_spacing_px.is_finite() || min_spacing_px <= 0.0 {
        return ticks;
    }

    let last_tick = ticks[ticks.len() - 1].clone();
    let mut selected: Vec<AxisTick> = Vec::with_capacity(ticks.len());
    for tick in ticks {
        match selected.last() {
            Some(previous) if tick.position - previous.position < min_spacing_px => {}
            _ => selected.push(tick),
        }
    }

    let selected_last_position = selected[selected.len() - 1].position;
    if selected_last_position != last_tick.position {
        if selected.len() == 1 {
            // On very narrow axes a single label is clearer than overlapping pairs.
            selected[0] = last_tick;
        } else {
            let penultimate = selected[selected.len() - 2].position;
            if last_tick.position - penultimate >= min_spacing_px {
                let last_index = selected.len() - 1;
                selected[last_index] = last_tick;
            }
        }
    }

    selected
}

/// Smallest positive gap between consecutive tick values.
pub(super) fn tick_step_hint_from_values(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }

    let mut best = f64::INFINITY;
    for pair in values.windows(2) {
        let step = (pair[1] - pair[0]).abs();
        if step.is_finite() && step > 0.0 {
            best = best.min(step);
        }
    }

    if best.is_finite() { best } else { 0.0 }
}
