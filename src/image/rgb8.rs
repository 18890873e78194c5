/// Borrowed packed 8-bit RGB view.
///
/// Rows hold `w` interleaved `r, g, b` byte triples; `stride` counts bytes
/// between row starts and is at least `3 * w`.
#[derive(Clone, Debug)]
pub struct ImageRgb8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageRgb8<'a> {
    /// View a tightly packed buffer of length `w * h * 3`.
    pub fn packed(w: usize, h: usize, data: &'a [u8]) -> Option<Self> {
        (data.len() == w * h * 3).then_some(Self {
            w,
            h,
            stride: w * 3,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = y * self.stride + x * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Bytes of row `y` (length `3 * w`).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * 3]
    }
}
