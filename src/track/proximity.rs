/// Distance below which a tasker counts as "arriving soon", in km.
pub const DEFAULT_THRESHOLD_KM: f64 = 2.0;

/// One-shot "arriving soon" detector.
///
/// Fires only on a strict crossing: the previous sample above the
/// threshold and the current one at or below it. A first sample that is
/// already inside the threshold stays silent, as there is no prior
/// sample to cross from.
#[derive(Debug, Clone)]
pub struct ProximityWatch {
    threshold_km: f64,
    previous_km: Option<f64>,
    notified: bool,
}

impl ProximityWatch {
    pub fn new(threshold_km: f64) -> Self {
        ProximityWatch {
            threshold_km,
            previous_km: None,
            notified: false,
        }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Feeds the next distance sample. Returns true at most once per
    /// session, on the sample that crosses the threshold.
    pub fn observe(&mut self, distance_km: f64) -> bool {
        let crossed = self
            .previous_km
            .is_some_and(|previous| previous > self.threshold_km && distance_km <= self.threshold_km);

        self.previous_km = Some(distance_km);

        if crossed && !self.notified {
            self.notified = true;
            return true;
        }

        false
    }

    /// Clears the sample history and the notified latch. Invoked when
    /// tracking stops so a restarted session can notify again.
    pub fn reset(&mut self) {
        self.previous_km = None;
        self.notified = false;
    }
}

impl Default for ProximityWatch {
    fn default() -> Self {
        ProximityWatch::new(DEFAULT_THRESHOLD_KM)
    }
}
