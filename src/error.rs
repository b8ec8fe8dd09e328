// Copyright 2022 Spanfile
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for image decoding.
//!
//! Decoding is the only step of the analysis that can fail. Everything after it is total over
//! any pixel grid.

use thiserror::Error;

/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// The input could not be turned into a pixel grid.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// No bytes were given.
    #[error("image payload is empty")]
    Empty,

    /// A data URL was given but it isn't of the `data:<mime>;base64,<payload>` form.
    #[error("malformed data URL: {reason}")]
    DataUrl { reason: &'static str },

    /// The payload isn't valid base64.
    #[error("invalid base64 payload")]
    Base64 {
        #[from]
        source: base64::DecodeError,
    },

    /// The bytes aren't a raster format the decoder understands.
    #[error("failed to decode image")]
    Image {
        #[from]
        source: image::ImageError,
    },
}

impl DecodeError {
    /// Whether the failure happened before reaching the raster decoder, i.e. the transport encoding was broken
    /// rather than the image itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, DecodeError::DataUrl { .. } | DecodeError::Base64 { .. })
    }
}
