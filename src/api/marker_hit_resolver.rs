use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::render::Renderer;

use super::ScatterChart;

impl<R: Renderer> ScatterChart<R> {
    /// Index of the marker under canvas point `(x, y)`, if any.
    ///
    /// Overlapping markers resolve to the one whose center is nearest; ties
    /// go to the marker drawn last, which is the one on top.
    #[must_use]
    pub fn marker_at(&self, x: f64, y: f64) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let local_x = x - self.dimensions.margin.left;
        let local_y = y - self.dimensions.margin.top;

        let mut hits: SmallVec<[(OrderedFloat<f64>, usize); 4]> = SmallVec::new();
        for marker in &self.markers {
            if marker.circle.contains(local_x, local_y) {
                hits.push((
                    OrderedFloat(marker.circle.distance_to(local_x, local_y)),
                    marker.index,
                ));
            }
        }

        hits.into_iter()
            .min_by_key(|(distance, index)| (*distance, std::cmp::Reverse(*index)))
            .map(|(_, index)| index)
    }
}
