/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Clip-space conventions, and reading them from YAML.
//!
//! Graphics APIs disagree on two things that change every view and
//! projection matrix: which way the camera looks down its own z axis,
//! and what range clip-space depth is mapped to.  Rather than fixing
//! these at build time, they are values passed to each builder in
//! `transform`, or bound once in a `ClipConfig`.

use std::io::Read;

use crate::traits::Field;
use crate::traits::internal::PrimitiveFloat;
use crate::transform;
use crate::types::*;

/// The range that clip-space depth is mapped to.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DepthRange {
    /// `[0, 1]`, as in Direct3D, Metal and Vulkan.
    ZeroToOne,
    /// `[-1, 1]`, as in OpenGL.
    NegativeOneToOne,
}

impl Default for DepthRange {
    fn default() -> Self { DepthRange::ZeroToOne }
}

/// Handedness of view space.
///
/// In a left-handed view the camera looks down `+z`; in a right-handed
/// view it looks down `-z`.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Handedness {
    Left,
    Right,
}

impl Default for Handedness {
    fn default() -> Self { Handedness::Left }
}

/// A pair of clip conventions, with the builders from `transform` bound to them.
///
/// ```yaml
/// depth: negative-one-to-one
/// handedness: right
/// ```
///
/// Either field may be omitted to take its default.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ClipConfig {
    #[serde(default)]
    pub depth: DepthRange,
    #[serde(default)]
    pub handedness: Handedness,
}

impl ClipConfig {
    /// View matrix for this config's handedness. See `transform::look_at_lh`.
    pub fn look_at<X: Field>(&self, eye: &V3<X>, center: &V3<X>, up: &V3<X>) -> M44<X>
    where X: PrimitiveFloat,
    {
        match self.handedness {
            Handedness::Left => transform::look_at_lh(eye, center, up),
            Handedness::Right => transform::look_at_rh(eye, center, up),
        }
    }

    /// Projection matrix for this config. See `transform::perspective_lh`.
    pub fn perspective<X: Field>(&self, fovy: X, aspect: X, near: X, far: X) -> M44<X>
    where X: PrimitiveFloat,
    {
        match self.handedness {
            Handedness::Left => transform::perspective_lh(self.depth, fovy, aspect, near, far),
            Handedness::Right => transform::perspective_rh(self.depth, fovy, aspect, near, far),
        }
    }

    /// Projection matrix for this config. See `transform::perspective_fov_lh`.
    pub fn perspective_fov<X: Field>(&self, fov: X, width: X, height: X, near: X, far: X) -> M44<X>
    where X: PrimitiveFloat,
    {
        match self.handedness {
            Handedness::Left => transform::perspective_fov_lh(self.depth, fov, width, height, near, far),
            Handedness::Right => transform::perspective_fov_rh(self.depth, fov, width, height, near, far),
        }
    }
}

// ---------------------------------------------------------------------------

/// Read a config from YAML, warning about keys that nothing reads.
///
/// Unused keys are logged (so that a typo in a config file does not pass
/// silently) but do not cause an error.
pub trait YamlRead: for<'de> serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml only
        // offers one for an already-parsed Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: serde_yaml::Value) -> Result<Self, serde_yaml::Error>;
}

/// Implement `YamlRead` for a `Deserialize` type.
///
/// The body is the same for every type; it lives in a macro so that the
/// deserialization code is generated in the crate that owns the type.
#[macro_export]
macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl $crate::YamlRead for $Type {
            fn from_value(
                value: $crate::clip::__private::Value,
            ) -> Result<$Type, $crate::clip::__private::Error> {
                $crate::clip::__private::deserialize_reporting(value, $crate::clip::__private::warn_unused)
            }
        }
    };
}

#[doc(hidden)]
pub mod __private {
    pub use serde_yaml::{Value, Error};

    /// Deserialize, handing the path of each ignored key to `on_unused`.
    pub fn deserialize_reporting<T, F>(value: Value, mut on_unused: F) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
        F: FnMut(String),
    { serde_ignored::deserialize(value, |path| on_unused(path.to_string())) }

    pub fn warn_unused(path: String) {
        warn!("Unused config item (possible typo?): {}", path);
    }
}

derive_yaml_read!{ClipConfig}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<serde_yaml::Value, serde_yaml::Error>
{ serde_yaml::from_reader(r) }

// ---------------------------------------------------------------------------
