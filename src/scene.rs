//! Editing sessions that keep sampled geometry in sync with their controls.
//!
//! A scene owns a control collection, its options and the samples last
//! computed from them. Every mutation recomputes the samples right away.
//! If that fails the scene logs a warning, keeps the previous samples so
//! the renderer still has something to draw, and returns the error.
//!
//! Picking and selection stay with the caller: points are addressed by
//! index.
use crate::{
    sample_surface, BilinearSurface, CircleOptions, ControlGrid,
    ControlSequence, CurveOptions, DegenerateCause, ParametricCurve,
    Parametrization, PolylineCursor, Position, RationalCurve, SectorOptions,
    SectorialSurface, SplineResult, SurfaceOptions, SurfaceSamples,
    WaveGridOptions,
};
use nalgebra::{Point2, Point3};

/// Passes `result` through, logging a failed recomputation of `scene`.
fn logged<T>(result: SplineResult<T>, scene: &str) -> SplineResult<T> {
    result.inspect_err(|error| log::warn!("{scene}: keeping previous samples, {error}"))
}

/// Stores `fresh` in `slot` unless it failed.
fn commit<S>(slot: &mut S, fresh: SplineResult<S>, scene: &str) -> SplineResult<()> {
    *slot = logged(fresh, scene)?;
    log::debug!("{scene}: resampled");
    Ok(())
}

/// A polyline through points the user places one by one.
#[derive(Clone, Debug)]
pub struct PolylineScene<P: Position> {
    options: CurveOptions,
    control: ControlSequence<P>,
    samples: Vec<P>,
}

impl<P: Position> PolylineScene<P> {
    pub fn new(options: CurveOptions) -> Self {
        Self {
            options,
            control: ControlSequence::new(),
            samples: Vec::new(),
        }
    }

    pub fn options(&self) -> &CurveOptions {
        &self.options
    }

    pub fn control(&self) -> &ControlSequence<P> {
        &self.control
    }

    /// Samples of the current curve. Empty while there are fewer than two
    /// control points.
    pub fn samples(&self) -> &[P] {
        &self.samples
    }

    /// Appends a control point.
    pub fn push(&mut self, position: P) -> SplineResult<()> {
        self.control.push(position.into());
        self.refresh()
    }

    /// Drags the control point at `index` to `position`.
    pub fn set_position(&mut self, index: usize, position: P) -> SplineResult<()> {
        self.control.set_position(index, position)?;
        self.refresh()
    }

    /// Switches the parametrization. Rejected options are not kept.
    pub fn set_parametrization(&mut self, policy: Parametrization) -> SplineResult<()> {
        self.reconfigure(CurveOptions {
            parametrization: policy,
            ..self.options
        })
    }

    pub fn set_sample_count(&mut self, sample_count: usize) -> SplineResult<()> {
        self.reconfigure(CurveOptions {
            sample_count,
            ..self.options
        })
    }

    fn reconfigure(&mut self, options: CurveOptions) -> SplineResult<()> {
        let previous = core::mem::replace(&mut self.options, options);
        self.refresh().inspect_err(|_| self.options = previous)
    }

    /// Removes all control points and samples.
    pub fn clear(&mut self) {
        self.control = ControlSequence::new();
        self.samples.clear();
    }

    fn refresh(&mut self) -> SplineResult<()> {
        if self.control.len() < 2 {
            self.samples.clear();
            return Ok(());
        }
        let fresh = self.resample();
        commit(&mut self.samples, fresh, "polyline")
    }

    fn resample(&mut self) -> SplineResult<Vec<P>> {
        self.control.parametrize(self.options.parametrization)?;
        PolylineCursor::new(self.control.points())?.sample(self.options.sample_count)
    }
}

/// The rational circle in the plane, regenerated from center and radius.
///
/// Control points may be dragged individually afterwards; changing the
/// center or radius discards those edits.
#[derive(Clone, Debug)]
pub struct CircleScene {
    options: CircleOptions,
    curve: RationalCurve<Point2<f64>>,
    samples: Vec<Point2<f64>>,
}

impl CircleScene {
    /// # Errors
    /// If the initial circle cannot be built or sampled.
    pub fn new(options: CircleOptions) -> SplineResult<Self> {
        let mut curve = circle(&options)?;
        let samples = curve.sample(options.sample_count)?;
        Ok(Self {
            options,
            curve,
            samples,
        })
    }

    pub fn options(&self) -> &CircleOptions {
        &self.options
    }

    pub fn curve(&self) -> &RationalCurve<Point2<f64>> {
        &self.curve
    }

    pub fn samples(&self) -> &[Point2<f64>] {
        &self.samples
    }

    pub fn set_center(&mut self, center: [f64; 2]) -> SplineResult<()> {
        self.regenerate(CircleOptions {
            center,
            ..self.options
        })
    }

    pub fn set_radius(&mut self, radius: f64) -> SplineResult<()> {
        self.regenerate(CircleOptions {
            radius,
            ..self.options
        })
    }

    pub fn set_sample_count(&mut self, sample_count: usize) -> SplineResult<()> {
        let fresh = self.curve.sample(sample_count);
        commit(&mut self.samples, fresh, "circle")?;
        self.options.sample_count = sample_count;
        Ok(())
    }

    /// Drags control point `index` (`0..7`), keeping its weight.
    pub fn set_position(&mut self, index: usize, position: Point2<f64>) -> SplineResult<()> {
        self.curve.set_position(index, position)?;
        let fresh = self.curve.sample(self.options.sample_count);
        commit(&mut self.samples, fresh, "circle")
    }

    fn regenerate(&mut self, options: CircleOptions) -> SplineResult<()> {
        let fresh = circle(&options).and_then(|mut curve| {
            let samples = curve.sample(options.sample_count)?;
            Ok((curve, samples))
        });
        (self.curve, self.samples) = logged(fresh, "circle")?;
        self.options = options;
        Ok(())
    }
}

fn circle(options: &CircleOptions) -> SplineResult<RationalCurve<Point2<f64>>> {
    let [x, y] = options.center;
    RationalCurve::circle(Point2::new(x, y), options.radius)
}

/// Builds the control net described by `options`.
///
/// # Errors
/// [`DegenerateCause::TooFewPoints`] if `rows` or `cols` is below two.
pub fn wave_grid(options: &WaveGridOptions) -> SplineResult<ControlGrid<Point3<f64>>> {
    let [x_min, x_max] = options.x_range;
    let [y_min, y_max] = options.y_range;
    let (x_mid, y_mid) = ((x_min + x_max) / 2.0, (y_min + y_max) / 2.0);
    let rows = options.rows.saturating_sub(1).max(1) as f64;
    let cols = options.cols.saturating_sub(1).max(1) as f64;

    ControlGrid::from_fn(options.rows, options.cols, |i, j| {
        let x = x_min + i as f64 * (x_max - x_min) / rows - x_mid;
        let y = y_min + j as f64 * (y_max - y_min) / cols - y_mid;
        Point3::new(x, y, options.amplitude * x.sin() * y.sin())
    })
}

/// The bilinear patch through an editable control net.
#[derive(Clone, Debug)]
pub struct PatchScene {
    options: SurfaceOptions,
    grid: ControlGrid<Point3<f64>>,
    samples: SurfaceSamples<Point3<f64>>,
}

impl PatchScene {
    /// # Errors
    /// If the net cannot be generated, parametrized or sampled.
    pub fn new(options: SurfaceOptions, wave: &WaveGridOptions) -> SplineResult<Self> {
        let mut grid = wave_grid(wave)?;
        let samples = patch_samples(&mut grid, &options)?;
        Ok(Self {
            options,
            grid,
            samples,
        })
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    /// The control net with its current parameters.
    pub fn grid(&self) -> &ControlGrid<Point3<f64>> {
        &self.grid
    }

    pub fn samples(&self) -> &SurfaceSamples<Point3<f64>> {
        &self.samples
    }

    /// Replaces the control net with a freshly generated one.
    pub fn regenerate(&mut self, wave: &WaveGridOptions) -> SplineResult<()> {
        let fresh = wave_grid(wave).and_then(|mut grid| {
            let samples = patch_samples(&mut grid, &self.options)?;
            Ok((grid, samples))
        });
        (self.grid, self.samples) = logged(fresh, "patch")?;
        Ok(())
    }

    /// Drags control point `(i, j)`.
    pub fn set_position(&mut self, i: usize, j: usize, position: Point3<f64>) -> SplineResult<()> {
        self.grid.set_position(i, j, position)?;
        self.refresh()
    }

    pub fn set_parametrization(&mut self, policy: Parametrization) -> SplineResult<()> {
        self.reconfigure(SurfaceOptions {
            parametrization: policy,
            ..self.options
        })
    }

    pub fn set_resolution(&mut self, slices: usize, stacks: usize) -> SplineResult<()> {
        self.reconfigure(SurfaceOptions {
            slices,
            stacks,
            ..self.options
        })
    }

    fn reconfigure(&mut self, options: SurfaceOptions) -> SplineResult<()> {
        let previous = core::mem::replace(&mut self.options, options);
        self.refresh().inspect_err(|_| self.options = previous)
    }

    fn refresh(&mut self) -> SplineResult<()> {
        let fresh = patch_samples(&mut self.grid, &self.options);
        commit(&mut self.samples, fresh, "patch")
    }
}

fn patch_samples(
    grid: &mut ControlGrid<Point3<f64>>,
    options: &SurfaceOptions,
) -> SplineResult<SurfaceSamples<Point3<f64>>> {
    grid.parametrize(options.parametrization)?;
    sample_surface(&mut BilinearSurface::new(grid), options.slices, options.stacks)
}

/// A cone over the rational circle with a movable apex.
///
/// Control points `0..7` are the circle's, point `7` is the apex.
#[derive(Clone, Debug)]
pub struct SectorScene {
    options: SectorOptions,
    surface: SectorialSurface<Point3<f64>>,
    samples: SurfaceSamples<Point3<f64>>,
}

impl SectorScene {
    /// Index of the apex among the control points.
    pub const APEX: usize = 7;

    /// # Errors
    /// If the cone cannot be built or sampled.
    pub fn new(options: SectorOptions) -> SplineResult<Self> {
        let mut surface = cone(&options)?;
        let samples = sample_surface(&mut surface, options.slices, options.stacks)?;
        Ok(Self {
            options,
            surface,
            samples,
        })
    }

    pub fn options(&self) -> &SectorOptions {
        &self.options
    }

    pub fn surface(&self) -> &SectorialSurface<Point3<f64>> {
        &self.surface
    }

    pub fn samples(&self) -> &SurfaceSamples<Point3<f64>> {
        &self.samples
    }

    /// The seven circle control points followed by the apex.
    pub fn control_points(&self) -> impl Iterator<Item = Point3<f64>> + '_ {
        self.surface
            .curve()
            .control_points()
            .iter()
            .map(|point| point.position)
            .chain(core::iter::once(self.surface.apex()))
    }

    /// Drags control point `index`, see [`APEX`](Self::APEX).
    pub fn set_position(&mut self, index: usize, position: Point3<f64>) -> SplineResult<()> {
        if index == Self::APEX {
            self.surface.set_apex(position);
        } else if index < Self::APEX {
            self.surface.curve_mut().set_position(index, position)?;
        } else {
            return Err(DegenerateCause::IndexOutOfRange {
                index,
                len: Self::APEX + 1,
            }
            .into());
        }
        self.refresh()
    }

    /// Rebuilds the cone for a new center, discarding dragged points.
    pub fn set_center(&mut self, center: [f64; 2]) -> SplineResult<()> {
        self.regenerate(SectorOptions {
            center,
            ..self.options
        })
    }

    /// Rebuilds the cone for a new radius, discarding dragged points.
    pub fn set_radius(&mut self, radius: f64) -> SplineResult<()> {
        self.regenerate(SectorOptions {
            radius,
            ..self.options
        })
    }

    pub fn set_resolution(&mut self, slices: usize, stacks: usize) -> SplineResult<()> {
        let fresh = sample_surface(&mut self.surface, slices, stacks);
        commit(&mut self.samples, fresh, "sector")?;
        self.options.slices = slices;
        self.options.stacks = stacks;
        Ok(())
    }

    fn refresh(&mut self) -> SplineResult<()> {
        let fresh = sample_surface(&mut self.surface, self.options.slices, self.options.stacks);
        commit(&mut self.samples, fresh, "sector")
    }

    fn regenerate(&mut self, options: SectorOptions) -> SplineResult<()> {
        let fresh = cone(&options).and_then(|mut surface| {
            let samples = sample_surface(&mut surface, options.slices, options.stacks)?;
            Ok((surface, samples))
        });
        (self.surface, self.samples) = logged(fresh, "sector")?;
        self.options = options;
        Ok(())
    }
}

fn cone(options: &SectorOptions) -> SplineResult<SectorialSurface<Point3<f64>>> {
    let [x, y] = options.center;
    SectorialSurface::cone(Point3::new(x, y, 0.0), options.radius, options.apex_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SplineError, CIRCLE_WEIGHTS};

    #[test]
    fn polyline_scene_follows_its_points() {
        let mut scene = PolylineScene::new(CurveOptions {
            sample_count: 4,
            ..Default::default()
        });
        scene.push(Point2::new(0.0f64, 0.0)).unwrap();
        assert!(scene.samples().is_empty());

        scene.push(Point2::new(10.0, 0.0)).unwrap();
        scene.push(Point2::new(10.0, 10.0)).unwrap();
        scene.push(Point2::new(0.0, 10.0)).unwrap();
        assert_eq!(scene.samples(), scene.control().positions().collect::<Vec<_>>().as_slice());

        scene.set_position(3, Point2::new(10.0, 30.0)).unwrap();
        assert_eq!(scene.samples()[3], Point2::new(10.0, 30.0));

        scene.set_parametrization(Parametrization::Chordal).unwrap();
        let parameters = scene.control().parameters().collect::<Vec<_>>();
        assert_eq!(parameters, vec![0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn polyline_scene_keeps_last_good_samples() {
        let mut scene = PolylineScene::new(CurveOptions::default());
        scene.push(Point2::new(1.0f64, 1.0)).unwrap();
        scene.push(Point2::new(2.0, 1.0)).unwrap();
        let before = scene.samples().to_vec();
        assert_eq!(before.len(), 10);

        assert_eq!(
            scene.set_sample_count(0),
            Err(SplineError::from(DegenerateCause::NoSamples))
        );
        assert_eq!(scene.samples(), before.as_slice());

        scene.set_position(1, Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(
            scene.set_parametrization(Parametrization::Centripetal),
            Err(DegenerateCause::CoincidentPoints.into())
        );

        scene.clear();
        assert!(scene.control().is_empty() && scene.samples().is_empty());
    }

    #[test]
    fn circle_scene_regenerates() {
        let mut scene = CircleScene::new(CircleOptions::default()).unwrap();
        assert_eq!(scene.samples().len(), 10);
        scene.set_radius(2.0).unwrap();
        scene.set_center([1.0, -1.0]).unwrap();
        for sample in scene.samples() {
            assert!(((sample - Point2::new(1.0, -1.0)).norm() - 2.0).abs() < 1.0e-9);
        }
        let weights = scene.curve().control_points().iter().map(|point| point.weight);
        assert!(weights.eq(CIRCLE_WEIGHTS));

        assert_eq!(
            scene.set_radius(-1.0),
            Err(DegenerateCause::NonPositiveRadius.into())
        );
        assert_eq!(scene.options().radius, 2.0);

        scene.set_position(0, Point2::new(5.0, -1.0)).unwrap();
        assert_eq!(scene.samples()[0], Point2::new(5.0, -1.0));
    }

    #[test]
    fn wave_grid_is_centered() {
        let grid = wave_grid(&WaveGridOptions::default()).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (4, 4));
        let corner = grid.get(0, 0).position;
        assert!((corner.x + 1.5 * core::f64::consts::PI).abs() < 1.0e-12);
        assert!((grid.get(0, 3).position.y - 1.5 * core::f64::consts::PI).abs() < 1.0e-12);
        assert!(wave_grid(&WaveGridOptions {
            rows: 1,
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn patch_scene_resamples_on_drag() {
        let mut scene =
            PatchScene::new(SurfaceOptions::default(), &WaveGridOptions::default()).unwrap();
        assert_eq!(scene.samples().points().len(), 81);

        scene.set_position(0, 0, Point3::new(-5.0, -5.0, 2.0)).unwrap();
        assert_eq!(*scene.samples().get(0, 0), Point3::new(-5.0, -5.0, 2.0));

        scene.set_parametrization(Parametrization::Chordal).unwrap();
        scene.set_resolution(2, 3).unwrap();
        assert_eq!(scene.samples().points().len(), 12);

        assert!(scene.set_resolution(0, 3).is_err());
        assert_eq!(scene.samples().points().len(), 12);
    }

    #[test]
    fn sector_scene_drags_apex_and_rim() {
        let mut scene = SectorScene::new(SectorOptions::default()).unwrap();
        assert_eq!(scene.control_points().count(), 8);
        assert_eq!(scene.samples().points().len(), 51 * 3);

        scene.set_position(SectorScene::APEX, Point3::new(1.0, 1.0, 1.0)).unwrap();
        assert_eq!(*scene.samples().get(17, 2), Point3::new(1.0, 1.0, 1.0));

        scene.set_position(0, Point3::new(2.0, 0.0, 0.0)).unwrap();
        assert_eq!(*scene.samples().get(0, 0), Point3::new(2.0, 0.0, 0.0));

        assert!(scene.set_position(8, Point3::origin()).is_err());

        scene.set_center([3.0, 4.0]).unwrap();
        assert_eq!(scene.surface().apex(), Point3::new(3.0, 4.0, 5.0));
    }
}
