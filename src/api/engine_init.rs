use tracing::{debug, info};

use crate::core::{Dimensions, RawRecord, RecordSet, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::interaction::TooltipState;
use crate::render::Renderer;

use super::{AxisScale, MarkerProjection, ScatterChart, ScatterConfig, project_markers};

impl<R: Renderer> ScatterChart<R> {
    /// Builds dimensions, scales and markers once; none of them change later.
    pub fn new(
        renderer: R,
        config: ScatterConfig,
        viewport: Viewport,
        records: impl Into<RecordSet>,
    ) -> ScatterResult<Self> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        config.validate()?;

        let records: RecordSet = records.into();
        let records = records.into_records();
        if records.is_empty() {
            return Err(ScatterError::EmptyDataset);
        }

        let dimensions = Dimensions::from_viewport_with_margin(viewport, config.margin);
        let x_axis = config.x_axis();
        let y_axis = config.y_axis();
        let x_accessor = x_axis.field.accessor();
        let y_accessor = y_axis.field.accessor();

        let x_scale = AxisScale::from_records(
            &records,
            x_accessor,
            x_axis.scale,
            (0.0, dimensions.bounded_width),
        )?;
        let y_scale = AxisScale::from_records(
            &records,
            y_accessor,
            y_axis.scale,
            (0.0, dimensions.bounded_height),
        )?;
        debug!(
            x_domain = ?x_scale.domain(),
            y_domain = ?y_scale.domain(),
            bounded_width = dimensions.bounded_width,
            bounded_height = dimensions.bounded_height,
            "built chart scales"
        );

        let markers = project_markers(
            &records,
            MarkerProjection {
                x_scale,
                y_scale,
                x_accessor,
                y_accessor,
                fill: config.fill_rule(),
                radius: config.marker_radius,
            },
        )?;
        info!(
            variant = ?config.variant,
            records = records.len(),
            side = dimensions.width,
            "scatter chart initialized"
        );

        let tooltip = config.tooltip_config().map(TooltipState::new);
        Ok(Self {
            renderer,
            config,
            dimensions,
            records,
            x_axis,
            y_axis,
            x_scale,
            y_scale,
            markers,
            tooltip,
        })
    }

    /// Validates raw records with the configured policy, then builds the chart.
    pub fn from_raw(
        renderer: R,
        config: ScatterConfig,
        viewport: Viewport,
        raw: &[RawRecord],
    ) -> ScatterResult<Self> {
        let records = RecordSet::from_raw(raw, config.record_policy)?;
        Self::new(renderer, config, viewport, records)
    }
}
