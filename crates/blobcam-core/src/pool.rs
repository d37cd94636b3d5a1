//! Frame buffer pool
//!
//! The pool owns every named plane of the pipeline. It is allocated once
//! at startup from a [`FrameGeometry`] and reused for every frame. Stages
//! borrow disjoint planes through the public fields, so the grayscale
//! input can be read while the threshold plane is written.

use crate::error::{Error, Result};
use crate::plane::Plane;

/// Default maximum sensor width in pixels
pub const DEFAULT_SENSOR_WIDTH: u32 = 752;
/// Default maximum sensor height in pixels
pub const DEFAULT_SENSOR_HEIGHT: u32 = 480;
/// Default sensor-to-plane downsample factor
pub const DEFAULT_DOWNSAMPLE: u32 = 2;

/// Processing plane dimensions
///
/// Derived from the maximum sensor resolution divided by a fixed
/// downsample factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    /// Plane width in pixels
    pub width: u32,
    /// Plane height in pixels
    pub height: u32,
}

impl FrameGeometry {
    /// Geometry with explicit plane dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Geometry derived from a sensor resolution and downsample factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `downsample` is 0, and
    /// [`Error::InvalidDimension`] if the result is empty.
    pub fn from_sensor(sensor_width: u32, sensor_height: u32, downsample: u32) -> Result<Self> {
        if downsample == 0 {
            return Err(Error::InvalidParameter(
                "downsample factor must be >= 1".to_string(),
            ));
        }
        Self::new(sensor_width / downsample, sensor_height / downsample)
    }

    /// Number of samples per plane
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that a plane has this geometry.
    pub fn check_plane(&self, plane: &Plane) -> Result<()> {
        if plane.dimensions() != (self.width, self.height) {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: plane.dimensions(),
            });
        }
        Ok(())
    }
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            width: DEFAULT_SENSOR_WIDTH / DEFAULT_DOWNSAMPLE,
            height: DEFAULT_SENSOR_HEIGHT / DEFAULT_DOWNSAMPLE,
        }
    }
}

/// Name of a plane in the [`FramePool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneId {
    /// Grayscale camera input, annotated on output
    Grayscale,
    /// Binarized foreground mask
    Threshold,
    /// Erosion output, recycled as the labeling input
    Erosion,
    /// Dilation output (the denoised mask), annotated on output
    Dilation,
}

impl PlaneId {
    /// All plane names in pipeline order
    pub const ALL: [PlaneId; 4] = [
        PlaneId::Grayscale,
        PlaneId::Threshold,
        PlaneId::Erosion,
        PlaneId::Dilation,
    ];

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            PlaneId::Grayscale => "grayscale",
            PlaneId::Threshold => "threshold",
            PlaneId::Erosion => "erosion",
            PlaneId::Dilation => "dilation",
        }
    }
}

/// Preallocated set of pipeline planes
///
/// # Example
///
/// ```
/// use blobcam_core::{FrameGeometry, FramePool, PlaneId};
///
/// let mut pool = FramePool::new(FrameGeometry::new(64, 48).unwrap()).unwrap();
/// pool.grayscale.fill(10);
/// assert_eq!(pool.plane(PlaneId::Grayscale).get(0, 0), Some(10));
/// ```
#[derive(Debug, Clone)]
pub struct FramePool {
    geometry: FrameGeometry,
    /// Grayscale input plane
    pub grayscale: Plane,
    /// Binarized mask plane
    pub threshold: Plane,
    /// Erosion output plane
    pub erosion: Plane,
    /// Dilation output plane
    pub dilation: Plane,
}

impl FramePool {
    /// Allocate all planes for `geometry`, zero-filled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the geometry is empty.
    pub fn new(geometry: FrameGeometry) -> Result<Self> {
        let blank = || Plane::new(geometry.width, geometry.height);
        Ok(Self {
            geometry,
            grayscale: blank()?,
            threshold: blank()?,
            erosion: blank()?,
            dilation: blank()?,
        })
    }

    /// Pool geometry
    #[inline]
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// Borrow a plane by name.
    pub fn plane(&self, id: PlaneId) -> &Plane {
        match id {
            PlaneId::Grayscale => &self.grayscale,
            PlaneId::Threshold => &self.threshold,
            PlaneId::Erosion => &self.erosion,
            PlaneId::Dilation => &self.dilation,
        }
    }

    /// Mutably borrow a plane by name.
    pub fn plane_mut(&mut self, id: PlaneId) -> &mut Plane {
        match id {
            PlaneId::Grayscale => &mut self.grayscale,
            PlaneId::Threshold => &mut self.threshold,
            PlaneId::Erosion => &mut self.erosion,
            PlaneId::Dilation => &mut self.dilation,
        }
    }

    /// Copy a caller frame into the grayscale plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `frame` is not exactly one plane.
    pub fn load_grayscale(&mut self, frame: &[u8]) -> Result<()> {
        if frame.len() != self.geometry.pixel_count() {
            return Err(Error::BufferLength {
                len: frame.len(),
                width: self.geometry.width,
                height: self.geometry.height,
            });
        }
        self.grayscale.data_mut().copy_from_slice(frame);
        Ok(())
    }

    /// Verify every plane still matches the pool geometry.
    ///
    /// Planes are public fields, so a caller can swap one for a plane of
    /// another size.
    pub fn validate(&self) -> Result<()> {
        for id in PlaneId::ALL {
            self.geometry.check_plane(self.plane(id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_sensor() {
        let g = FrameGeometry::from_sensor(752, 480, 2).unwrap();
        assert_eq!((g.width, g.height), (376, 240));
        assert_eq!(g, FrameGeometry::default());
        assert_eq!(g.pixel_count(), 376 * 240);

        assert!(FrameGeometry::from_sensor(752, 480, 0).is_err());
        assert!(FrameGeometry::from_sensor(1, 480, 2).is_err());
    }

    #[test]
    fn test_pool_planes_share_geometry() {
        let pool = FramePool::new(FrameGeometry::new(16, 8).unwrap()).unwrap();
        for id in PlaneId::ALL {
            assert_eq!(pool.plane(id).dimensions(), (16, 8), "{}", id.name());
        }
        assert!(pool.validate().is_ok());

        let empty = FrameGeometry {
            width: 0,
            height: 8,
        };
        assert!(FramePool::new(empty).is_err());
    }

    #[test]
    fn test_pool_validate_detects_swapped_plane() {
        let mut pool = FramePool::new(FrameGeometry::new(16, 8).unwrap()).unwrap();
        pool.erosion = Plane::new(8, 8).unwrap();
        assert!(matches!(
            pool.validate(),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_load_grayscale() {
        let mut pool = FramePool::new(FrameGeometry::new(4, 2).unwrap()).unwrap();
        pool.load_grayscale(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(pool.grayscale.row(1), &[5, 6, 7, 8]);
        assert!(pool.load_grayscale(&[0; 7]).is_err());
    }

    #[test]
    fn test_plane_mut_by_id() {
        let mut pool = FramePool::new(FrameGeometry::new(4, 4).unwrap()).unwrap();
        pool.plane_mut(PlaneId::Dilation).fill(3);
        assert_eq!(pool.dilation.count_value(3), 16);
        assert_eq!(pool.erosion.count_value(3), 0);
    }
}
