//! Region records and the capacity-bounded region list

use blobcam_core::Box;

/// A labeled foreground region of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Label, starting at 1 in raster order of each region's first pixel
    pub label: u32,
    /// Bounding box (half-open right/bottom edges)
    pub bounds: Box,
    /// Number of foreground pixels
    pub area: u32,
    /// Mean column of the region's pixels
    pub centroid_x: f32,
    /// Mean row of the region's pixels
    pub centroid_y: f32,
}

impl Region {
    /// Create a region with a bounding box and area.
    ///
    /// The centroid is the mean pixel position of a solid box, matching
    /// what [`ConnectedComponentLabeler`] reports for one.
    ///
    /// [`ConnectedComponentLabeler`]: crate::ConnectedComponentLabeler
    pub fn new(label: u32, bounds: Box, area: u32) -> Self {
        Self {
            label,
            bounds,
            area,
            centroid_x: bounds.x as f32 + (bounds.w - 1).max(0) as f32 / 2.0,
            centroid_y: bounds.y as f32 + (bounds.h - 1).max(0) as f32 / 2.0,
        }
    }
}

/// Fixed-capacity list of regions, reused every frame
///
/// The backing storage is reserved at construction; [`RegionList::push`]
/// refuses entries beyond the capacity instead of growing.
#[derive(Debug, Clone)]
pub struct RegionList {
    regions: Vec<Region>,
    capacity: usize,
}

impl RegionList {
    /// Reserve room for `capacity` regions.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of regions held
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of regions held
    #[inline]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if no region is held
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// True if no further region fits
    #[inline]
    pub fn is_full(&self) -> bool {
        self.regions.len() >= self.capacity
    }

    /// Drop all regions, keeping the storage.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Append a region; returns false and drops it if the list is full.
    pub fn push(&mut self, region: Region) -> bool {
        if self.is_full() {
            return false;
        }
        self.regions.push(region);
        true
    }

    /// Regions as a slice
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// Iterate over the regions
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Iterate over the bounding boxes
    pub fn boxes(&self) -> impl Iterator<Item = &Box> + '_ {
        self.regions.iter().map(|r| &r.bounds)
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
