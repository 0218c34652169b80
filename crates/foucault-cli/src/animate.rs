//! Terminal playback.
//!
//! The player is the animation clock the model leaves to its callers: it
//! advances the frame index once per `1 / frame_rate` seconds, asks a
//! [`TrajectoryCache`] for the revealed prefix and redraws the canvas.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use foucault::TrajectoryCache;
use tracing::{debug, info};

use crate::config::Simulation;
use crate::error::Result;
use crate::render::Canvas;

/// Frame sequencing for one run.
///
/// Yields frame indices `1..=frames`. Frame `n` reveals the first `n`
/// samples, so the last frame shows the complete path.
#[derive(Debug, Clone)]
pub struct Playback {
    frame: usize,
    frames: usize,
    repeat: bool,
}

impl Playback {
    /// Creates a playback over `frames` frames.
    #[must_use]
    pub const fn new(frames: usize, repeat: bool) -> Self {
        Self {
            frame: 0,
            frames,
            repeat,
        }
    }

    /// The frame most recently returned by [`Playback::next_frame`].
    #[must_use]
    pub const fn current(&self) -> usize {
        self.frame
    }

    /// Advances to the next frame, wrapping to the first when repeating.
    pub fn next_frame(&mut self) -> Option<usize> {
        if self.frame < self.frames {
            self.frame += 1;
        } else if self.repeat && self.frames > 0 {
            self.frame = 1;
        } else {
            return None;
        }
        Some(self.frame)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every frame was shown.
    Finished {
        /// The final frame index.
        frame: usize,
    },
    /// The user quit early.
    Stopped {
        /// The frame on screen when playback stopped.
        frame: usize,
    },
}

impl PlaybackOutcome {
    /// The frame on screen when playback ended.
    #[must_use]
    pub const fn frame(self) -> usize {
        match self {
            Self::Finished { frame } | Self::Stopped { frame } => frame,
        }
    }
}

/// Returns `true` for `q`, `Esc` and `Ctrl+C` presses.
#[must_use]
pub fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// One-line status shown under the canvas.
#[must_use]
pub fn status_line(sim: &Simulation, frame: usize) -> String {
    let t = frame
        .checked_sub(1)
        .and_then(|i| sim.samples().get(i))
        .copied()
        .unwrap_or(0.0);
    format!(
        "{}  frame {}/{}  t = {:.1} s",
        sim.planet(),
        frame,
        sim.frame_count(),
        t
    )
}

/// Raw mode and alternate screen, restored on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Plays the simulation on stdout until it finishes or the user quits.
///
/// The canvas is left holding the last frame drawn.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or written
/// to.
#[allow(clippy::cast_possible_truncation)]
pub fn play(sim: &Simulation, canvas: &mut Canvas, repeat: bool) -> Result<PlaybackOutcome> {
    let mut cache = TrajectoryCache::new(*sim.params(), sim.samples().clone());
    let mut playback = Playback::new(sim.frame_count(), repeat);
    let interval = sim.frame_interval();

    info!(
        frames = sim.frame_count(),
        interval_ms = interval.as_millis() as u64,
        repeat,
        "starting playback"
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    while let Some(frame) = playback.next_frame() {
        let started = Instant::now();

        let (xs, ys) = cache.prefix(frame)?;
        canvas.draw(xs, ys);

        let lines = canvas.lines();
        for (row, line) in lines.iter().enumerate() {
            queue!(stdout, MoveTo(0, row as u16), Print(line))?;
        }
        queue!(
            stdout,
            MoveTo(0, lines.len() as u16),
            Clear(ClearType::UntilNewLine),
            Print(status_line(sim, frame)),
            Print("  (q to quit)")
        )?;
        stdout.flush()?;

        let remaining = interval.saturating_sub(started.elapsed());
        if event::poll(remaining)? {
            if let Event::Key(key) = event::read()? {
                if is_quit(&key) {
                    debug!(frame, "playback stopped by user");
                    return Ok(PlaybackOutcome::Stopped { frame });
                }
            }
        }
    }

    Ok(PlaybackOutcome::Finished {
        frame: playback.current(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    #[test]
    fn plays_each_frame_once() {
        let mut playback = Playback::new(3, false);
        let frames: Vec<_> = std::iter::from_fn(|| playback.next_frame()).collect();
        assert_eq!(frames, vec![1, 2, 3]);
        assert_eq!(playback.current(), 3);
        assert_eq!(playback.next_frame(), None);
    }

    #[test]
    fn repeat_wraps_to_first_frame() {
        let mut playback = Playback::new(2, true);
        let frames: Vec<_> = (0..5).filter_map(|_| playback.next_frame()).collect();
        assert_eq!(frames, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn empty_playback_ends_immediately() {
        assert_eq!(Playback::new(0, true).next_frame(), None);
        assert_eq!(Playback::new(0, false).next_frame(), None);
    }

    #[test]
    fn quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);

        assert!(is_quit(&q));
        assert!(is_quit(&esc));
        assert!(is_quit(&ctrl_c));
        assert!(!is_quit(&c));
        assert!(!is_quit(&space));
    }

    #[test]
    fn outcome_frame() {
        assert_eq!(PlaybackOutcome::Finished { frame: 600 }.frame(), 600);
        assert_eq!(PlaybackOutcome::Stopped { frame: 12 }.frame(), 12);
    }

    #[test]
    fn status_shows_time_of_last_sample() {
        let sim = SimulationConfig::default().resolve().unwrap();
        let status = status_line(&sim, 4);
        assert!(status.starts_with("Earth  frame 4/600"), "{status}");
        assert!(status.contains("t = 1.0 s"), "{status}");
        assert!(status_line(&sim, 0).contains("t = 0.0 s"));
    }
}
