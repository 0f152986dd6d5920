use ilattice::glam::IVec2;
use ilattice::prelude::Extent;

/// Where one footprint ended up in the atlas.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AtlasPlacement {
    /// Top-left texel.
    pub position: [u32; 2],
    /// `[width, height]` in texels.
    pub size: [u32; 2],
}

impl AtlasPlacement {
    #[inline]
    pub fn extent(&self) -> Extent<IVec2> {
        Extent::from_min_and_shape(
            IVec2::from(self.position.map(|c| c as i32)),
            IVec2::from(self.size.map(|c| c as i32)),
        )
    }

    #[inline]
    pub fn area(&self) -> u64 {
        self.size[0] as u64 * self.size[1] as u64
    }

    /// Whether the two footprints share at least one texel.
    pub fn overlaps(&self, other: &AtlasPlacement) -> bool {
        if self.area() == 0 || other.area() == 0 {
            return false;
        }
        let [ax, ay] = self.position;
        let [bx, by] = other.position;
        let [aw, ah] = self.size;
        let [bw, bh] = other.size;
        ax < bx + bw && bx < ax + aw && ay < by + bh && by < ay + ah
    }
}

/// A successful packing: one placement per input footprint, in input order,
/// inside a `size x size` atlas.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AtlasLayout {
    pub size: u32,
    pub placements: Vec<AtlasPlacement>,
}

impl AtlasLayout {
    /// Whether every placement lies inside the atlas.
    pub fn fits(&self) -> bool {
        let bounds = Extent::from_min_and_shape(IVec2::ZERO, IVec2::splat(self.size as i32));
        self.placements
            .iter()
            .all(|p| p.extent().is_subset_of(&bounds))
    }

    /// Whether no two placements share a texel.
    pub fn is_disjoint(&self) -> bool {
        self.placements.iter().enumerate().all(|(i, a)| {
            self.placements[i + 1..].iter().all(|b| !a.overlaps(b))
        })
    }

    pub fn used_area(&self) -> u64 {
        self.placements.iter().map(AtlasPlacement::area).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(x: u32, y: u32, w: u32, h: u32) -> AtlasPlacement {
        AtlasPlacement {
            position: [x, y],
            size: [w, h],
        }
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = placement(0, 0, 2, 2);
        assert!(!a.overlaps(&placement(2, 0, 1, 2)));
        assert!(!a.overlaps(&placement(0, 2, 2, 1)));
        assert!(a.overlaps(&placement(1, 1, 2, 2)));
        assert!(placement(1, 1, 2, 2).overlaps(&a));
    }

    #[test]
    fn empty_footprint_overlaps_nothing() {
        assert!(!placement(1, 1, 0, 3).overlaps(&placement(0, 0, 4, 4)));
    }

    #[test]
    fn layout_checks() {
        let layout = AtlasLayout {
            size: 4,
            placements: vec![placement(0, 0, 4, 2), placement(0, 2, 2, 2)],
        };
        assert!(layout.fits());
        assert!(layout.is_disjoint());
        assert_eq!(layout.used_area(), 12);

        let spill = AtlasLayout {
            size: 4,
            placements: vec![placement(3, 0, 2, 1)],
        };
        assert!(!spill.fits());
    }
}
