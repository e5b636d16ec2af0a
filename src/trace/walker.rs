use super::options::TraceOptions;
use super::workspace::TraceWorkspace;
use crate::image::ImageU8;
use crate::types::TracedPath;
use log::debug;
use std::time::Instant;

/// Fixed neighbour scan order for the greedy walk, as `(dx, dy)`: the west
/// column top to bottom, then the two vertical neighbours, then the east
/// column top to bottom. The first unvisited on-pixel in this order wins;
/// the remaining branches are abandoned.
const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Output of one tracing run.
#[derive(Clone, Debug, Default)]
pub struct TraceResult {
    /// Paths that survived the minimum-length filter.
    pub paths: Vec<TracedPath>,
    /// Total on-pixels in the skeleton.
    pub on_pixels: usize,
    /// Walks discarded as noise (at most `min_path_len` vertices).
    pub discarded: usize,
    pub elapsed_ms: f64,
}

/// Trace all distinct stroke paths from a binary skeleton.
///
/// On-pixels are scanned in row-major order; each unvisited one starts a
/// greedy 8-connected walk that marks pixels visited as it consumes them,
/// so every on-pixel ends up in at most one path. An empty or noise-only
/// skeleton yields no paths. Never panics on any byte content: values other
/// than `options.on_value` are simply off.
pub fn trace_paths(
    skeleton: &ImageU8<'_>,
    options: &TraceOptions,
    workspace: &mut TraceWorkspace,
) -> TraceResult {
    let t0 = Instant::now();
    let (w, h) = (skeleton.w, skeleton.h);
    let visited = workspace.reset(w * h);

    let mut paths = Vec::new();
    let mut on_pixels = 0usize;
    let mut discarded = 0usize;
    for y in 0..h {
        for x in 0..w {
            if skeleton.get(x, y) != options.on_value {
                continue;
            }
            on_pixels += 1;
            if visited[y * w + x] != 0 {
                continue;
            }
            let points = walk_from(skeleton, options.on_value, visited, x, y);
            if points.len() > options.min_path_len {
                paths.push(TracedPath::new(points));
            } else {
                discarded += 1;
            }
        }
    }

    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "trace: {}x{} on_pixels={} paths={} discarded={} elapsed_ms={:.3}",
        w,
        h,
        on_pixels,
        paths.len(),
        discarded,
        elapsed_ms
    );
    TraceResult {
        paths,
        on_pixels,
        discarded,
        elapsed_ms,
    }
}

/// Greedy walk from one start pixel until no unvisited on-neighbour remains.
/// No backtracking: at a junction exactly one branch is taken.
fn walk_from(
    skeleton: &ImageU8<'_>,
    on_value: u8,
    visited: &mut [u8],
    start_x: usize,
    start_y: usize,
) -> Vec<[f32; 2]> {
    let (w, h) = (skeleton.w, skeleton.h);
    let mut points = vec![[start_x as f32, start_y as f32]];
    visited[start_y * w + start_x] = 1;

    let (mut cx, mut cy) = (start_x, start_y);
    loop {
        let mut advanced = false;
        for &(dx, dy) in &NEIGH_OFFSETS {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if nx < 0 || ny < 0 {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if nx >= w || ny >= h {
                continue;
            }
            let idx = ny * w + nx;
            if visited[idx] == 0 && skeleton.get(nx, ny) == on_value {
                visited[idx] = 1;
                points.push([nx as f32, ny as f32]);
                cx = nx;
                cy = ny;
                advanced = true;
                break;
            }
        }
        if !advanced {
            break;
        }
    }
    points
}
