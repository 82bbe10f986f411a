//! Physical strip geometry
//!
//! The strip is divided into `partitions` equal sections. Each section shows
//! one copy of the canonical pattern; in folded mode every odd section is
//! mirrored so neighbouring sections meet seamlessly. All of the index
//! arithmetic here is integer math; the ceiling-division path covers strips
//! whose length is not a multiple of the partition count.

/// How partition sections reuse the canonical pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionMode {
    /// Every section shows the pattern in the same direction
    Repeated,
    /// Odd sections are mirrored
    Folded,
}

impl PartitionMode {
    /// Parse the external string form. Only "folded" (any case) selects
    /// folding; every other value means repeated.
    pub fn parse_from_str(s: &str) -> Self {
        if s.eq_ignore_ascii_case("folded") {
            Self::Folded
        } else {
            Self::Repeated
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Repeated => "repeated",
            Self::Folded => "folded",
        }
    }
}

/// Geometry of the physical strip
#[derive(Debug, Clone, Copy)]
pub struct StripLayout {
    /// Number of physical pixels, fixed at construction
    pub led_count: usize,
    /// Number of sections the strip is divided into (>= 1)
    pub partitions: usize,
    /// Section reuse mode
    pub mode: PartitionMode,
    /// Whole-strip direction reversal
    pub reversed: bool,
}

impl StripLayout {
    /// A single-section, forward layout
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            partitions: 1,
            mode: PartitionMode::Repeated,
            reversed: false,
        }
    }

    /// Length of one canonical (unmirrored) section: `ceil(led_count / partitions)`,
    /// at least 1.
    pub const fn independent_len(&self) -> usize {
        let partitions = if self.partitions == 0 { 1 } else { self.partitions };
        let len = self.led_count.div_ceil(partitions);
        if len == 0 { 1 } else { len }
    }

    /// Snapshot the per-frame geometry constants.
    pub const fn geometry(&self) -> SectionGeometry {
        let partitions = if self.partitions == 0 { 1 } else { self.partitions };
        let folded = matches!(self.mode, PartitionMode::Folded);
        SectionGeometry {
            led_count: self.led_count,
            partitions,
            independent: self.independent_len(),
            folded,
            // Without whole-strip reversal, folded sections are inverted so
            // the pattern converges/diverges symmetrically from the strip's
            // natural start. The folded + reversed combination is left
            // uninverted, matching the reference hardware.
            inverted: folded && partitions > 1 && !self.reversed,
            reversed: self.reversed,
        }
    }
}

/// Per-frame geometry constants, computed once and applied per pixel
#[derive(Debug, Clone, Copy)]
pub struct SectionGeometry {
    led_count: usize,
    partitions: usize,
    independent: usize,
    folded: bool,
    inverted: bool,
    reversed: bool,
}

impl SectionGeometry {
    pub const fn independent_len(&self) -> usize {
        self.independent
    }

    /// Map a physical pixel to its position within one canonical section.
    ///
    /// The result is always in `[0, independent_len)`. Reversal flips which
    /// canonical position is sampled, never where the pixel is written.
    pub const fn canonical_index(&self, pixel: usize) -> usize {
        let logical = if self.reversed {
            self.led_count - 1 - pixel
        } else {
            pixel
        };

        let section = {
            let section = logical / self.independent;
            let last = self.partitions - 1;
            if section > last { last } else { section }
        };
        let offset = logical % self.independent;

        let mut canonical = if self.folded && section % 2 == 1 {
            self.independent - 1 - offset
        } else {
            offset
        };
        if self.inverted {
            canonical = self.independent - 1 - canonical;
        }
        canonical
    }
}
