//! Easing functions for the slide animation.

/// Maps animation progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
    /// Overshoots slightly past the target before settling.
    EaseOutBack,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::EaseOutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseOutQuart,
        Easing::EaseOutBack,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert!(
                easing.apply(0.0).abs() < 1e-9,
                "{easing:?} must map 0 to 0"
            );
            assert!(
                (easing.apply(1.0) - 1.0).abs() < 1e-9,
                "{easing:?} must map 1 to 1"
            );
        }
    }

    #[test]
    fn ease_out_cubic_is_monotone_non_decreasing() {
        let mut prev = 0.0;
        for i in 0..=1000 {
            let t = i as f64 / 1000.0;
            let v = Easing::EaseOutCubic.apply(t);
            assert!(v >= prev, "not monotone at t={t}");
            prev = v;
        }
    }

    #[test]
    fn ease_out_cubic_front_loads_progress() {
        // Ease-out moves fastest early: halfway in time is well past
        // halfway in distance.
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.8);
    }

    #[test]
    fn ease_in_out_cubic_is_symmetric_around_midpoint() {
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let a = Easing::EaseInOutCubic.apply(t);
            let b = Easing::EaseInOutCubic.apply(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-9, "asymmetric at t={t}");
        }
    }

    #[test]
    fn ease_out_back_overshoots() {
        let max = (0..=100)
            .map(|i| Easing::EaseOutBack.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(max > 1.0);
    }
}
