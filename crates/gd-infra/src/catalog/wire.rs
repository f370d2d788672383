//! Catalog JSON envelope.
//!
//! Every endpoint answers `{ success, data?, error?, message?, count?,
//! deleted_gif?, userId?, query? }`. Only the fields the client consumes are
//! modelled; unknown keys are ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use gd_core::CatalogResult;

/// Message used when a `success: false` envelope carries no text.
pub const UNKNOWN_CATALOG_ERROR: &str = "unknown catalog error";

#[derive(Debug, Deserialize)]
pub(crate) struct WireEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub deleted_gif: Option<Value>,
}

/// Which envelope field carries the payload for an endpoint.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PayloadField {
    Data,
    DeletedGif,
    Message,
}

impl WireEnvelope {
    pub fn parse(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Converts to a [`CatalogResult`], decoding the payload from `field`.
    ///
    /// A payload that is absent (or `null`) yields a payload-less success;
    /// one that does not decode as `T` is an error.
    pub fn into_result<T: DeserializeOwned>(
        self,
        field: PayloadField,
    ) -> Result<CatalogResult<T>, serde_json::Error> {
        if !self.success {
            let message = self
                .error
                .or(self.message)
                .unwrap_or_else(|| UNKNOWN_CATALOG_ERROR.to_string());
            return Ok(CatalogResult::failure(message));
        }

        let raw = match field {
            PayloadField::Data => self.data,
            PayloadField::DeletedGif => self.deleted_gif,
            PayloadField::Message => self.message.map(Value::String),
        };

        match raw {
            None | Some(Value::Null) => Ok(CatalogResult::success_empty()),
            Some(value) => Ok(CatalogResult::success(serde_json::from_value(value)?)),
        }
    }
}
