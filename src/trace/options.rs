/// Options for the skeleton walker.
#[derive(Clone, Copy, Debug)]
pub struct TraceOptions {
    /// Pixel value treated as part of the skeleton. Every other value is off.
    pub on_value: u8,
    /// Paths with at most this many vertices are dropped as noise.
    pub min_path_len: usize,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            on_value: 255,
            min_path_len: 10,
        }
    }
}
