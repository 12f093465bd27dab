use crate::shapes::Shape;

/// Where one input sits along the concatenated axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Sum of the extents of every input before this one.
    pub offset: usize,
    /// This input's size along the axis.
    pub extent: usize,
}

/// Views a concatenated tensor as `(outer, along-axis, inner)`.
///
/// `outer` is the product of the dims before the axis and `inner` the
/// product of the dims after it. Element `(o, a, r)` of segment `s` lives
/// at `(o, a + s.offset, r)` of the joined tensor, so in row-major order
/// each segment is a run of `s.extent * inner` contiguous elements repeated
/// once per outer index, every `out_extent * inner` elements.
///
/// ```rust
/// # use catsplit_core::prelude::*;
/// let layout = AxisLayout::new(&Shape::from([2, 8, 4]), 1, [3, 5]);
/// assert_eq!(layout.outer, 2);
/// assert_eq!(layout.inner, 4);
/// assert_eq!(layout.out_extent, 8);
/// assert_eq!(layout.segments[1], Segment { offset: 3, extent: 5 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    pub axis: usize,
    pub outer: usize,
    pub inner: usize,
    pub out_extent: usize,
    pub segments: Vec<Segment>,
}

impl AxisLayout {
    /// `shape` is the joined shape, `extents` the per-input sizes along `axis`
    /// in input order. Callers check that the extents sum to `shape[axis]`.
    pub fn new<I: IntoIterator<Item = usize>>(shape: &Shape, axis: usize, extents: I) -> Self {
        let mut offset = 0;
        let segments = extents
            .into_iter()
            .map(|extent| {
                let seg = Segment { offset, extent };
                offset += extent;
                seg
            })
            .collect();
        debug_assert_eq!(offset, shape[axis]);
        Self {
            axis,
            outer: shape.outer_size(axis),
            inner: shape.inner_size(axis),
            out_extent: offset,
            segments,
        }
    }

    /// Elements per outer index of the joined tensor.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.out_extent * self.inner
    }

    /// Elements per outer index of one segment.
    #[inline]
    pub fn segment_len(&self, seg: &Segment) -> usize {
        seg.extent * self.inner
    }

    /// Number of elements of the input behind `seg`.
    #[inline]
    pub fn segment_numel(&self, seg: &Segment) -> usize {
        self.outer * self.segment_len(seg)
    }

    /// Maps linear index `i` of the input behind `seg` to its linear index
    /// in the joined tensor.
    ///
    /// The kernels copy whole segment rows instead; this is the per-element
    /// reference they are tested against.
    #[cfg(test)]
    pub(crate) fn joined_index(&self, seg: &Segment, i: usize) -> usize {
        let o = i / (self.inner * seg.extent);
        let a = i / self.inner % seg.extent + seg.offset;
        let r = i % self.inner;
        r + self.inner * (a + self.out_extent * o)
    }
}
