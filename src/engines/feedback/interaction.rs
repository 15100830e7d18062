//! Online metric updates driven by external interaction events.
//!
//! Updates land on the individual's metrics immediately but fitness is only
//! recomputed at the next Evaluate phase of a tick.

use crate::engines::generation::individual::{AdaptiveState, PerformanceMetrics};
use serde::{Deserialize, Serialize};

pub const ENGAGEMENT_DELTA: f64 = 0.05;
pub const HOVER_APPEAL_DELTA: f64 = 0.03;
pub const CLICK_EFFECTIVENESS_DELTA: f64 = 0.05;
pub const GESTURE_EFFECTIVENESS_DELTA: f64 = 0.03;
pub const AWARENESS_DELTA: f64 = 0.02;
/// Distance at which proximity stops raising appeal
pub const PROXIMITY_RANGE: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    Hover,
    Click,
    Gesture(String),
    Proximity(f64),
}

impl InteractionEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            InteractionEvent::Hover => "hover",
            InteractionEvent::Click => "click",
            InteractionEvent::Gesture(_) => "gesture",
            InteractionEvent::Proximity(_) => "proximity",
        }
    }
}

/// Apply the fixed deltas for `event`; every update clamps at 1.0.
pub fn apply_interaction(
    event: &InteractionEvent,
    metrics: &mut PerformanceMetrics,
    adaptive: &mut AdaptiveState,
) {
    metrics.engagement.nudge(ENGAGEMENT_DELTA);

    match event {
        InteractionEvent::Hover => metrics.appeal.nudge(HOVER_APPEAL_DELTA),
        InteractionEvent::Proximity(distance) => {
            if !distance.is_nan() {
                let closeness = (1.0 - distance.max(0.0) / PROXIMITY_RANGE).max(0.0);
                metrics.appeal.nudge(HOVER_APPEAL_DELTA * closeness);
            }
        }
        InteractionEvent::Click => {
            metrics.effectiveness.nudge(CLICK_EFFECTIVENESS_DELTA);
            adaptive.awareness.nudge(AWARENESS_DELTA);
        }
        InteractionEvent::Gesture(_) => {
            metrics.effectiveness.nudge(GESTURE_EFFECTIVENESS_DELTA);
            adaptive.awareness.nudge(AWARENESS_DELTA);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitInterval;

    fn blank() -> (PerformanceMetrics, AdaptiveState) {
        (PerformanceMetrics::default(), AdaptiveState::default())
    }

    #[test]
    fn test_hover_raises_appeal_only() {
        let (mut metrics, mut adaptive) = blank();
        apply_interaction(&InteractionEvent::Hover, &mut metrics, &mut adaptive);

        assert_eq!(metrics.engagement.get(), ENGAGEMENT_DELTA);
        assert_eq!(metrics.appeal.get(), HOVER_APPEAL_DELTA);
        assert_eq!(metrics.effectiveness, UnitInterval::ZERO);
        assert_eq!(adaptive.awareness, UnitInterval::ZERO);
    }

    #[test]
    fn test_far_proximity_only_engages() {
        let (mut metrics, mut adaptive) = blank();
        apply_interaction(&InteractionEvent::Proximity(500.0), &mut metrics, &mut adaptive);
        apply_interaction(&InteractionEvent::Proximity(f64::NAN), &mut metrics, &mut adaptive);

        assert_eq!(metrics.appeal, UnitInterval::ZERO);
        assert!((metrics.engagement.get() - 2.0 * ENGAGEMENT_DELTA).abs() < 1e-12);
    }

    #[test]
    fn test_close_proximity_scales_appeal() {
        let (mut metrics, mut adaptive) = blank();
        apply_interaction(&InteractionEvent::Proximity(100.0), &mut metrics, &mut adaptive);
        assert!((metrics.appeal.get() - HOVER_APPEAL_DELTA / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gesture_is_click_like() {
        let (mut metrics, mut adaptive) = blank();
        apply_interaction(
            &InteractionEvent::Gesture("swipe".to_string()),
            &mut metrics,
            &mut adaptive,
        );
        assert_eq!(metrics.effectiveness.get(), GESTURE_EFFECTIVENESS_DELTA);
        assert_eq!(adaptive.awareness.get(), AWARENESS_DELTA);
    }
}
