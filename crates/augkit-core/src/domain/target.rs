//! Named output conventions for converted arrays.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output convention for converting 2-D arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetFormat {
    /// Leave 2-D arrays untouched.
    #[serde(rename = "mask")]
    Mask,
    /// Three-channel image.
    #[serde(rename = "image")]
    Image,
    /// Four-channel image.
    #[serde(rename = "image_4_channels")]
    Image4Channels,
}

impl TargetFormat {
    /// Every recognized target, in declaration order.
    pub const ALL: [Self; 3] = [Self::Mask, Self::Image, Self::Image4Channels];

    /// Returns the canonical string name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mask => "mask",
            Self::Image => "image",
            Self::Image4Channels => "image_4_channels",
        }
    }

    /// Channel count the target broadcasts to, `None` for masks.
    #[must_use]
    pub const fn num_channels(self) -> Option<usize> {
        match self {
            Self::Mask => None,
            Self::Image => Some(3),
            Self::Image4Channels => Some(4),
        }
    }
}

impl FromStr for TargetFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| Error::UnknownTarget(s.to_owned()))
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
