use ssp_challenge::{round_weight, Error, Label, Population, Selection};
use std::collections::HashSet;

/// Searches for the best-weight compatible selection by running one greedy
/// expansion per supplier acting as seed, in ascending label order.
///
/// Each pass scans the seed's interactions list in generation order and
/// accepts a candidate only if it is not in the accumulated interference set
/// and does not blacklist any already-accepted member. The incumbent is
/// updated with a non-strict comparison, so a later state of equal weight
/// takes over. This is a bounded greedy scan, not a subset enumeration: no
/// backtracking and no alternative extension orders are tried.
pub fn solve(population: &Population) -> Result<Selection, Error> {
    let mut best_weight = 0.0f64;
    let mut best_labels: Vec<Label> = Vec::new();

    for seed in &population.suppliers {
        let mut interference: HashSet<Label> = seed.blacklist.iter().copied().collect();
        let mut current_weight = seed.weight;
        let mut current_labels = vec![seed.label];

        // A seed with an empty interactions list never enters the candidate
        // loop, so it must be able to claim the incumbent here.
        if current_weight >= best_weight {
            best_weight = current_weight;
            best_labels = current_labels.clone();
        }

        for &candidate in &seed.interactions {
            let entry = population
                .supplier(candidate)
                .ok_or(Error::InvalidState {
                    supplier: seed.label,
                    label: candidate,
                })?;

            if !interference.contains(&candidate) {
                // Asymmetric check: only the candidate's blacklist is tested
                // against the accepted members, never the reverse direction.
                let compatible = current_labels.iter().all(|m| !entry.blacklist.contains(m));
                if compatible {
                    current_weight += entry.weight;
                    interference.extend(entry.blacklist.iter().copied());
                    current_labels.push(candidate);
                }
            }

            if current_weight >= best_weight {
                best_weight = current_weight;
                best_labels = current_labels.clone();
            }
        }
    }

    Ok(Selection {
        total_weight: round_weight(best_weight),
        labels: best_labels,
    })
}
