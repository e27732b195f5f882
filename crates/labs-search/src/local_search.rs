use labs_core::Sequence;
use serde::{Deserialize, Serialize};

/// Result of hill-climbing from one starting sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    /// Best sequence reached.
    pub sequence: Sequence,
    /// Energy of `sequence`.
    pub energy: f32,
    /// Rounds executed, including the final non-improving round if any.
    pub rounds: usize,
    /// Number of accepted single-element flips.
    pub accepted_flips: usize,
    /// Number of energy evaluations spent.
    pub evaluations: usize,
}

/// Greedy first-improvement single-flip hill-climb using the LABS energy.
///
/// See [`improve_with`].
pub fn improve(sequence: &Sequence, max_rounds: usize) -> Improvement {
    improve_with(sequence, max_rounds, labs_energy::energy)
}

/// Greedy first-improvement single-flip hill-climb under `energy`.
///
/// Each round scans positions in ascending order and accepts the first flip
/// that strictly lowers the energy, then starts the next round. A round with
/// no accepted flip ends the search early. The caller's sequence is never
/// modified.
pub fn improve_with<F>(sequence: &Sequence, max_rounds: usize, energy: F) -> Improvement
where
    F: Fn(&[f32]) -> f32,
{
    let mut best = sequence.clone();
    let mut best_energy = energy(best.as_slice());
    let mut evaluations = 1;
    let mut accepted_flips = 0;
    let mut rounds = 0;

    for _ in 0..max_rounds {
        rounds += 1;
        let mut improved = false;
        for index in 0..best.len() {
            let trial = best.flipped(index);
            let trial_energy = energy(trial.as_slice());
            evaluations += 1;
            if trial_energy < best_energy {
                best = trial;
                best_energy = trial_energy;
                accepted_flips += 1;
                improved = true;
                break;
            }
        }
        if !improved {
            break;
        }
    }

    Improvement {
        sequence: best,
        energy: best_energy,
        rounds,
        accepted_flips,
        evaluations,
    }
}
