use indexmap::IndexMap;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Accessor, Record};
use crate::error::ScatterResult;
use crate::interaction::race_time_attribute;
use crate::render::{CirclePrimitive, MarkerPrimitive};

use super::{AxisScale, FillRule};

pub const MARKER_CLASS: &str = "dot";

/// Inputs shared by every marker of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct MarkerProjection {
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    pub x_accessor: Accessor,
    pub y_accessor: Accessor,
    pub fill: FillRule,
    pub radius: f64,
}

/// Projects records into markers, one per record, in input order.
pub fn project_markers(
    records: &[Record],
    projection: MarkerProjection,
) -> ScatterResult<Vec<MarkerPrimitive>> {
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ScatterResult<MarkerPrimitive>> = records
            .par_iter()
            .enumerate()
            .map(|(index, record)| project_single_marker(index, record, projection))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            out.push(project_single_marker(index, record, projection)?);
        }
        Ok(out)
    }
}

fn project_single_marker(
    index: usize,
    record: &Record,
    projection: MarkerProjection,
) -> ScatterResult<MarkerPrimitive> {
    let cx = projection.x_scale.map((projection.x_accessor)(record))?;
    let cy = projection.y_scale.map((projection.y_accessor)(record))?;

    let mut attributes = IndexMap::with_capacity(2);
    attributes.insert("data-xvalue".to_owned(), record.year().to_string());
    attributes.insert("data-yvalue".to_owned(), race_time_attribute(record));

    Ok(MarkerPrimitive {
        index,
        circle: CirclePrimitive::new(cx, cy, projection.radius, projection.fill.fill_for(record)),
        class_name: MARKER_CLASS.to_owned(),
        attributes,
    })
}
