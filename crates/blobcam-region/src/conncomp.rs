//! Connected component labeling
//!
//! Two-pass labeling with a union-find (disjoint set) table. The first pass
//! assigns provisional labels and records equivalences; the second resolves
//! every pixel to its root and accumulates per-region features.
//!
//! All tables are sized for the frame geometry when the labeler is built,
//! so labeling a frame does not allocate.

use crate::error::{RegionError, RegionResult};
use crate::labeler::RegionLabeler;
use crate::region::{Region, RegionList};
use blobcam_core::{Box, FrameGeometry, Plane};
use log::trace;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// Unassigned entry in the root-to-region table
const NO_SLOT: u32 = u32::MAX;

/// Running features of one region during the second pass
#[derive(Debug, Clone, Copy)]
struct Accum {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    area: u32,
    sum_x: u64,
    sum_y: u64,
}

impl Accum {
    fn start(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
            area: 0,
            sum_x: 0,
            sum_y: 0,
        }
    }

    #[inline]
    fn add(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.area += 1;
        self.sum_x += x as u64;
        self.sum_y += y as u64;
    }

    fn to_region(self, label: u32) -> Region {
        let bounds = Box::new_unchecked(
            self.min_x as i32,
            self.min_y as i32,
            (self.max_x - self.min_x + 1) as i32,
            (self.max_y - self.min_y + 1) as i32,
        );
        Region {
            label,
            bounds,
            area: self.area,
            centroid_x: (self.sum_x as f64 / self.area as f64) as f32,
            centroid_y: (self.sum_y as f64 / self.area as f64) as f32,
        }
    }
}

/// Union-find labeler for unit-convention masks
///
/// Any nonzero sample counts as foreground.
///
/// # Example
///
/// ```
/// use blobcam_core::{FrameGeometry, Plane};
/// use blobcam_region::{ConnectedComponentLabeler, ConnectivityType, RegionLabeler, RegionList};
///
/// let mask = Plane::from_rows(&[
///     &[1, 1, 0, 0],
///     &[1, 0, 0, 1],
///     &[0, 0, 0, 1],
/// ])
/// .unwrap();
/// let geometry = FrameGeometry::new(4, 3).unwrap();
/// let mut labeler = ConnectedComponentLabeler::new(geometry, ConnectivityType::EightWay);
/// let mut regions = RegionList::with_capacity(8);
/// assert_eq!(labeler.label(&mask, &mut regions).unwrap(), 2);
/// assert_eq!(regions.as_slice()[0].area, 3);
/// ```
#[derive(Debug, Clone)]
pub struct ConnectedComponentLabeler {
    geometry: FrameGeometry,
    connectivity: ConnectivityType,
    min_area: u32,
    /// Provisional label per pixel, 0 for background
    labels: Vec<u32>,
    /// Union-find parent per provisional label (index 0 unused)
    parent: Vec<u32>,
    /// Region slot per root label
    slot: Vec<u32>,
    /// Feature accumulators in discovery order
    accum: Vec<Accum>,
}

impl ConnectedComponentLabeler {
    /// Build a labeler with tables sized for `geometry`.
    pub fn new(geometry: FrameGeometry, connectivity: ConnectivityType) -> Self {
        let n = geometry.pixel_count();
        // Neither connectivity can produce more than ceil(n / 2) components.
        let max_components = n / 2 + 1;
        Self {
            geometry,
            connectivity,
            min_area: 0,
            labels: vec![0; n],
            parent: vec![0; n + 1],
            slot: vec![NO_SLOT; n + 1],
            accum: Vec::with_capacity(max_components),
        }
    }

    /// Drop regions with fewer than `min_area` pixels.
    pub fn with_min_area(mut self, min_area: u32) -> Self {
        self.min_area = min_area;
        self
    }

    /// Connectivity in use
    pub fn connectivity(&self) -> ConnectivityType {
        self.connectivity
    }

    /// Minimum region area kept
    pub fn min_area(&self) -> u32 {
        self.min_area
    }

    #[inline]
    fn find(&mut self, mut label: u32) -> u32 {
        while self.parent[label as usize] != label {
            let grand = self.parent[self.parent[label as usize] as usize];
            self.parent[label as usize] = grand;
            label = grand;
        }
        label
    }

    #[inline]
    fn union(&mut self, a: u32, b: u32) -> u32 {
        let ra = self.find(a);
        let rb = self.find(b);
        let (keep, merge) = if ra <= rb { (ra, rb) } else { (rb, ra) };
        self.parent[merge as usize] = keep;
        keep
    }

    /// First pass: provisional labels and equivalences.
    ///
    /// Returns the highest provisional label used.
    fn first_pass(&mut self, binary: &Plane) -> u32 {
        let w = binary.width();
        let h = binary.height();
        let stride = binary.stride();
        let eight = self.connectivity == ConnectivityType::EightWay;
        let mut next = 0u32;

        for row in 0..h {
            for col in 0..w {
                let idx = binary.index(row, col);
                if binary.data()[idx] == 0 {
                    self.labels[idx] = 0;
                    continue;
                }

                let mut current = 0u32;
                let mut neighbors = [0u32; 4];
                if col > 0 {
                    neighbors[0] = self.labels[idx - 1];
                }
                if row > 0 {
                    neighbors[1] = self.labels[idx - stride];
                    if eight {
                        if col > 0 {
                            neighbors[2] = self.labels[idx - stride - 1];
                        }
                        if col + 1 < w {
                            neighbors[3] = self.labels[idx - stride + 1];
                        }
                    }
                }

                for &n in neighbors.iter().filter(|&&n| n != 0) {
                    current = if current == 0 {
                        self.find(n)
                    } else {
                        self.union(current, n)
                    };
                }

                if current == 0 {
                    next += 1;
                    self.parent[next as usize] = next;
                    current = next;
                }
                self.labels[idx] = current;
            }
        }
        next
    }

    /// Second pass: resolve roots and accumulate features.
    fn second_pass(&mut self, binary: &Plane) {
        self.accum.clear();
        let w = binary.width();
        let h = binary.height();

        for row in 0..h {
            for col in 0..w {
                let idx = binary.index(row, col);
                let label = self.labels[idx];
                if label == 0 {
                    continue;
                }
                let root = self.find(label);
                let mut slot = self.slot[root as usize];
                if slot == NO_SLOT {
                    slot = self.accum.len() as u32;
                    self.slot[root as usize] = slot;
                    self.accum.push(Accum::start(col, row));
                }
                self.accum[slot as usize].add(col, row);
            }
        }
    }
}

impl RegionLabeler for ConnectedComponentLabeler {
    fn label(&mut self, binary: &Plane, regions: &mut RegionList) -> RegionResult<usize> {
        self.geometry.check_plane(binary)?;
        regions.clear();

        let provisional = self.first_pass(binary);
        self.second_pass(binary);
        for label in 1..=provisional as usize {
            self.slot[label] = NO_SLOT;
        }

        let mut found = 0usize;
        for acc in &self.accum {
            if acc.area < self.min_area {
                continue;
            }
            found += 1;
            regions.push(acc.to_region(found as u32));
        }
        trace!(
            "labeled {} provisional, {} components, {} kept",
            provisional,
            self.accum.len(),
            found
        );

        if found > regions.capacity() {
            return Err(RegionError::CapacityExceeded {
                found,
                capacity: regions.capacity(),
            });
        }
        Ok(found)
    }
}
