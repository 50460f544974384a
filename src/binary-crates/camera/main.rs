/* ************************************************************************ **
** This file is part of minimath, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

#[macro_use] extern crate log;
#[macro_use] extern crate serde_derive;

use std::fs::File;
use std::io;

use clap::Arg;
use minimath::{ClipConfig, YamlRead, V3, M44};

pub type FailResult<T> = Result<T, failure::Error>;

pub fn main() {
    _main().unwrap_or_else(|e| {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    });
}

pub fn _main() -> FailResult<()> {
    env_logger::init();
    let app = {
        clap::App::new("minimath-camera")
            .about("Prints the view and projection matrices of a camera, in column-major order.")
            .args(&[
                Arg::with_name("camera")
                    .value_name("CAMERA")
                    .help("Camera description (YAML)")
                    .required(true),
                Arg::with_name("clip")
                    .long("clip")
                    .value_name("CLIP")
                    .help("Clip conventions (YAML). Defaults to left-handed with depth in [0, 1].")
                    .takes_value(true),
                Arg::with_name("out_path")
                    .long("output")
                    .short("o")
                    .value_name("OUTPATH")
                    .help("Output JSON path. Defaults to stdout.")
                    .takes_value(true),
            ])
    };
    let matches = app.get_matches();

    let camera = CameraConfig::from_reader(File::open(matches.value_of("camera").unwrap())?)?;
    let clip = match matches.value_of("clip") {
        Some(path) => ClipConfig::from_reader(File::open(path)?)?,
        None => ClipConfig::default(),
    };
    debug!("camera: {:?}", camera);
    debug!("clip: {:?}", clip);

    let output = compute(&camera, &clip)?;

    match matches.value_of("out_path") {
        Some(path) => serde_json::to_writer(File::create(path)?, &output)?,
        None => {
            serde_json::to_writer(io::stdout(), &output)?;
            println!();
        },
    }
    Ok(())
}

/// Camera placement and lens.
///
/// Exactly one of `aspect` or `viewport` must be given.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct CameraConfig {
    pub eye: V3,
    pub center: V3,
    #[serde(default = "default_up")]
    pub up: V3,

    /// Vertical field of view, in radians.
    pub fovy: f64,
    /// Width over height.
    #[serde(default)]
    pub aspect: Option<f64>,
    /// `[width, height]`, in any unit.
    #[serde(default)]
    pub viewport: Option<[f64; 2]>,

    pub near: f64,
    pub far: f64,
}

fn default_up() -> V3 { V3([0.0, 1.0, 0.0]) }

minimath::derive_yaml_read!{CameraConfig}

#[derive(Serialize)]
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub view: Vec<f64>,
    pub projection: Vec<f64>,
}

pub fn compute(camera: &CameraConfig, clip: &ClipConfig) -> FailResult<Output> {
    if !(camera.near > 0.0 && camera.near < camera.far) {
        failure::bail!("need 0 < near < far (got near = {}, far = {})", camera.near, camera.far);
    }

    let view = clip.look_at(&camera.eye, &camera.center, &camera.up);
    let projection = match (camera.aspect, camera.viewport) {
        (Some(aspect), None) => {
            if aspect == 0.0 {
                failure::bail!("aspect must be nonzero");
            }
            clip.perspective(camera.fovy, aspect, camera.near, camera.far)
        },
        (None, Some([width, height])) => {
            if !(width > 0.0 && height > 0.0 && camera.fovy > 0.0) {
                failure::bail!("viewport and fovy must be positive");
            }
            clip.perspective_fov(camera.fovy, width, height, camera.near, camera.far)
        },
        (Some(_), Some(_)) => failure::bail!("'aspect' and 'viewport' cannot both be given"),
        (None, None) => failure::bail!("one of 'aspect' or 'viewport' is required"),
    };
    trace!("view: {}", view);
    trace!("projection: {}", projection);

    Ok(Output { view: flat(&view), projection: flat(&projection) })
}

fn flat(m: &M44) -> Vec<f64> { m.as_flat().to_vec() }

#[cfg(test)]
mod tests {
    use super::*;
    use minimath::{DepthRange, Handedness};

    fn camera(text: &str) -> CameraConfig {
        CameraConfig::from_reader(text.as_bytes()).unwrap()
    }

    const BASIC: &str = "
eye: [0.0, 0.0, -1.0]
center: [0.0, 0.0, 0.0]
fovy: 1.5707963267948966
aspect: 2.0
near: 1.0
far: 3.0
";

    #[test]
    fn reads_yaml() {
        let c = camera(BASIC);
        assert_eq!(c.up, V3([0.0, 1.0, 0.0]));
        assert_eq!(c.aspect, Some(2.0));
        assert_eq!(c.viewport, None);
    }

    #[test]
    fn outputs_columns() {
        let out = compute(&camera(BASIC), &ClipConfig::default()).unwrap();
        assert_eq!(out.view, vec![
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 1.0, 1.0,
        ]);
        assert_eq!(out.projection.len(), 16);
        assert_eq!(out.projection[11], 1.0);
        assert_eq!(out.projection[10], 1.5);
        assert_eq!(out.projection[14], -1.5);

        let gl = ClipConfig { depth: DepthRange::NegativeOneToOne, handedness: Handedness::Right };
        let out = compute(&camera(BASIC), &gl).unwrap();
        assert_eq!(out.projection[11], -1.0);
        assert_eq!(out.projection[10], -2.0);
    }

    #[test]
    fn lens_must_be_unambiguous() {
        let both = format!("{}viewport: [800.0, 400.0]\n", BASIC);
        assert!(compute(&camera(&both), &ClipConfig::default()).is_err());

        let mut c = camera(BASIC);
        c.aspect = None;
        assert!(compute(&c, &ClipConfig::default()).is_err());

        c.viewport = Some([800.0, 400.0]);
        assert!(compute(&c, &ClipConfig::default()).is_ok());
    }

    #[test]
    fn bad_depth_planes() {
        let mut c = camera(BASIC);
        c.near = 0.0;
        assert!(compute(&c, &ClipConfig::default()).is_err());
    }
}
