//! PPE and disinfectant supply estimation.
//!
//! Quantities scale linearly with crew size and duration: one coverall,
//! mask, and boot cover per worker per day, two glove pairs per worker per
//! day, and half a liter of disinfectant per worker per day rounded up.

use serde::{Deserialize, Serialize};

/// Crew size and duration for a supply estimate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpeRequest {
    pub workers: u32,
    pub days: u32,
}

/// Estimated supply quantities for one crew over one period.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpeEstimate {
    pub coveralls: u32,
    /// Glove pairs.
    pub gloves: u32,
    pub masks: u32,
    pub boot_covers: u32,
    pub disinfectant_liters: u32,
}

impl PpeEstimate {
    /// Coveralls padded by 10% (rounded up) to cover replacements.
    pub fn coveralls_with_reserve(&self) -> u32 {
        self.coveralls + self.coveralls.div_ceil(10)
    }
}

/// Compute supply quantities for `workers` over `days`.
///
/// Pure integer arithmetic; zero workers or zero days yields an all-zero
/// estimate.
pub fn estimate(request: PpeRequest) -> PpeEstimate {
    let PpeRequest { workers, days } = request;
    let worker_days = workers * days;

    PpeEstimate {
        coveralls: worker_days,
        gloves: workers * 2 * days,
        masks: worker_days,
        boot_covers: worker_days,
        // ceil(workers * 0.5 * days) without going through floats
        disinfectant_liters: worker_days.div_ceil(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_crew() {
        let estimate = estimate(PpeRequest {
            workers: 5,
            days: 7,
        });

        assert_eq!(estimate.coveralls, 35);
        assert_eq!(estimate.gloves, 70);
        assert_eq!(estimate.masks, 35);
        assert_eq!(estimate.boot_covers, 35);
        assert_eq!(estimate.disinfectant_liters, 18);
    }

    #[test]
    fn test_disinfectant_rounds_up_on_odd_worker_days() {
        let odd = estimate(PpeRequest {
            workers: 3,
            days: 1,
        });
        assert_eq!(odd.disinfectant_liters, 2);

        let even = estimate(PpeRequest {
            workers: 4,
            days: 1,
        });
        assert_eq!(even.disinfectant_liters, 2);
    }

    #[test]
    fn test_zero_crew_or_duration() {
        let none = estimate(PpeRequest {
            workers: 0,
            days: 7,
        });
        assert_eq!(none.coveralls, 0);
        assert_eq!(none.disinfectant_liters, 0);
        assert_eq!(none.coveralls_with_reserve(), 0);
    }

    #[test]
    fn test_coverall_reserve_rounds_up() {
        let estimate = estimate(PpeRequest {
            workers: 5,
            days: 7,
        });
        // 35 + ceil(35 / 10) = 39
        assert_eq!(estimate.coveralls_with_reserve(), 39);
    }
}
