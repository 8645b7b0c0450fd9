//! Viewport reveal
//!
//! Decides when a section's one-shot entrance animation runs. The section
//! starts `Unseen`; the first intersection update whose visible ratio reaches
//! the threshold moves it to `Seen`, observation stops and it stays `Seen`
//! even after scrolling away.

use std::fmt;

/// Half the element visible
pub const DEFAULT_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Unseen,
    Seen,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Unseen => "unseen",
            Visibility::Seen => "seen",
        }
    }
}

/// Trigger-once reveal state machine
#[derive(Debug, Clone)]
pub struct RevealController {
    threshold: f64,
    state: Visibility,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealController {
    /// Threshold is clamped to `0.0..=1.0`
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };

        Self {
            threshold,
            state: Visibility::Unseen,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Whether intersection updates still matter
    pub fn is_observing(&self) -> bool {
        self.state == Visibility::Unseen
    }

    /// Reveal without an intersection update, for browsers that cannot observe
    pub fn reveal_now(&mut self) -> bool {
        self.observe(1.0)
    }

    /// Feed one intersection ratio; returns `true` on the update that reveals
    pub fn observe(&mut self, ratio: f64) -> bool {
        if !self.is_observing() || ratio.is_nan() {
            return false;
        }

        if ratio >= self.threshold {
            self.state = Visibility::Seen;
            return true;
        }

        false
    }
}

/// Opacity and offset of an animated element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
}

impl Pose {
    pub const SETTLED: Pose = Pose {
        opacity: 1.0,
        x: 0,
        y: 0,
    };
}

impl fmt::Display for Pose {
    /// Inline CSS declarations
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "opacity: {}; transform: translate({}px, {}px)",
            self.opacity, self.x, self.y
        )
    }
}

/// Entrance animation of one element group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Pose while unseen
    pub initial: Pose,
    pub duration_ms: u32,
}

impl Motion {
    /// Fade in while rising from `offset` pixels below
    pub const fn rise(offset: i32, duration_ms: u32) -> Self {
        Self {
            initial: Pose {
                opacity: 0.0,
                x: 0,
                y: offset,
            },
            duration_ms,
        }
    }

    /// Fade in while sliding from `offset` pixels to the side
    pub const fn slide(offset: i32, duration_ms: u32) -> Self {
        Self {
            initial: Pose {
                opacity: 0.0,
                x: offset,
                y: 0,
            },
            duration_ms,
        }
    }

    pub fn pose(&self, visibility: Visibility) -> Pose {
        match visibility {
            Visibility::Unseen => self.initial,
            Visibility::Seen => Pose::SETTLED,
        }
    }

    /// CSS transition declaration for this motion
    pub fn transition(&self) -> String {
        format!(
            "transition: opacity {ms}ms ease-out, transform {ms}ms ease-out",
            ms = self.duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once_and_never_reverts() {
        let mut controller = RevealController::new(0.5);
        let fired: Vec<bool> = [0.1, 0.6, 0.2]
            .into_iter()
            .map(|ratio| controller.observe(ratio))
            .collect();

        assert_eq!(fired, vec![false, true, false]);
        assert_eq!(controller.state(), Visibility::Seen);
        assert!(!controller.is_observing());
    }

    #[test]
    fn test_state_after_each_update() {
        let mut controller = RevealController::default();

        controller.observe(0.1);
        assert_eq!(controller.state(), Visibility::Unseen);
        controller.observe(0.6);
        assert_eq!(controller.state(), Visibility::Seen);
        controller.observe(0.2);
        assert_eq!(controller.state(), Visibility::Seen);
        assert!(!controller.observe(1.0));
        assert!(!controller.reveal_now());
    }

    #[test]
    fn test_reveal_now_ignores_threshold() {
        let mut controller = RevealController::new(1.0);
        assert!(controller.reveal_now());
        assert_eq!(controller.state(), Visibility::Seen);
    }

    #[test]
    fn test_exact_threshold_reveals() {
        let mut controller = RevealController::new(0.5);
        assert!(controller.observe(0.5));
    }

    #[test]
    fn test_nan_inputs() {
        let mut controller = RevealController::new(f64::NAN);
        assert_eq!(controller.threshold(), DEFAULT_THRESHOLD);
        assert!(!controller.observe(f64::NAN));
        assert!(controller.is_observing());

        assert_eq!(RevealController::new(3.0).threshold(), 1.0);
    }

    #[test]
    fn test_motion_poses() {
        let title = Motion::rise(50, 600);
        assert_eq!(title.pose(Visibility::Unseen), Pose { opacity: 0.0, x: 0, y: 50 });
        assert_eq!(title.pose(Visibility::Seen), Pose::SETTLED);

        let card = Motion::slide(-50, 1000);
        assert_eq!(card.pose(Visibility::Unseen).x, -50);
        assert_eq!(
            card.pose(Visibility::Unseen).to_string(),
            "opacity: 0; transform: translate(-50px, 0px)"
        );
        assert_eq!(
            card.transition(),
            "transition: opacity 1000ms ease-out, transform 1000ms ease-out"
        );
    }
}
