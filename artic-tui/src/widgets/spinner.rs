//! Spinner for loading states.
//!
//! Based on the snake spinner pattern - a bar that travels across a track and
//! back, pausing at each end.

use std::time::Duration;

/// Configuration for the spinner.
#[derive(Clone, Debug)]
pub struct Spinner {
    /// Width of the track in characters.
    track_width: u16,
    /// Length of the snake/bar.
    snake_len: u16,
    /// Pause frames at right end.
    right_pause: usize,
    /// Pause frames at left end.
    left_pause: usize,
    /// Frame duration in milliseconds.
    frame_ms: u64,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            track_width: 8,
            snake_len: 4,
            right_pause: 1,
            left_pause: 4,
            frame_ms: 80,
        }
    }
}

impl Spinner {
    /// Create a new spinner with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the track width.
    pub fn track_width(mut self, width: u16) -> Self {
        self.track_width = width;
        self
    }

    /// Set the snake/bar length.
    pub fn snake_len(mut self, len: u16) -> Self {
        self.snake_len = len.max(1);
        self
    }

    /// Time each frame stays on screen.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Build every frame of one full cycle.
    pub fn frames(&self) -> Vec<String> {
        let mut frames = Vec::new();
        let span = self.track_width as i32 + self.snake_len as i32 - 2;

        // Right pass: snake enters from left, travels across, exits right
        for head_pos in 0..=span {
            frames.push(self.make_snake_frame(head_pos));
        }
        for _ in 0..self.right_pause {
            frames.push(self.make_empty_frame());
        }

        // Left pass
        for head_pos in (0..=span).rev() {
            frames.push(self.make_snake_frame(head_pos));
        }
        for _ in 0..self.left_pause {
            frames.push(self.make_empty_frame());
        }

        frames
    }

    fn make_empty_frame(&self) -> String {
        "⬝".repeat(self.track_width as usize)
    }

    fn make_snake_frame(&self, head_pos: i32) -> String {
        let snake_start = head_pos - self.snake_len as i32 + 1;
        (0..self.track_width as i32)
            .map(|i| if i >= snake_start && i <= head_pos { '■' } else { '⬝' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_have_track_width() {
        let spinner = Spinner::new().track_width(6).snake_len(3);
        let frames = spinner.frames();
        assert!(frames.iter().all(|f| f.chars().count() == 6));
        assert_eq!(frames[0], "■⬝⬝⬝⬝⬝");
        assert!(frames.contains(&"⬝⬝⬝■■■".to_string()));
    }

    #[test]
    fn test_cycle_length() {
        let spinner = Spinner::new().track_width(8).snake_len(4);
        // 2 passes of (8 + 4 - 1) head positions, plus 1 + 4 pause frames.
        assert_eq!(spinner.frames().len(), 2 * 11 + 5);
    }
}
