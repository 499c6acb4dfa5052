//! Helpers shared by the screen runners

use std::time::{Duration, Instant};

/// Length of one frame at `target_fps` (treated as at least 1)
pub fn frame_duration(target_fps: u64) -> Duration {
    Duration::from_secs_f64(1.0 / target_fps.max(1) as f64)
}

/// Sleep out whatever is left of the frame that began at `frame_start`.
///
/// Call at the end of each loop iteration so the game runs at a steady
/// speed no matter how quickly a frame was drawn.
pub fn limit_frame_rate(frame_start: Instant, frame_duration: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}
