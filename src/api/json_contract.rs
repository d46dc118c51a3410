use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};
use crate::render::{RenderFrame, Renderer};

use super::{ScatterChart, ScatterConfig};

pub const SCATTER_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const RENDER_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ScatterConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl ScatterConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = ScatterConfigJsonContractV1 {
            schema_version: SCATTER_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned v1 contract.
    pub fn from_json_compat_str(input: &str) -> ScatterResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let config = if value.get("schema_version").is_some() {
            let payload: ScatterConfigJsonContractV1 = serde_json::from_value(value)?;
            if payload.schema_version != SCATTER_CONFIG_JSON_SCHEMA_V1 {
                return Err(ScatterError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        let payload = RenderFrameJsonContractV1 {
            schema_version: RENDER_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScatterError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }
}

impl<R: Renderer> ScatterChart<R> {
    pub fn frame_json_contract_v1_pretty(&self) -> ScatterResult<String> {
        self.build_render_frame()?.to_json_contract_v1_pretty()
    }
}
