//! Classification availability filtering.
//!
//! A classification may be applied to a station any number of times when it
//! is repeatable, and at most once otherwise. Availability is therefore the
//! full classification set minus the non-repeatable classifications already
//! observed at the station. Removal is by identity (set difference on the
//! classification key), never by list position.

use std::collections::HashSet;

use uuid::Uuid;

use crate::error::LookupError;

/// A classification referenced by an observation already recorded at the
/// station under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedClassification {
    pub classification_id: Uuid,
    pub repeatable: bool,
}

/// Returns the classifications from `all` that can still be applied, given
/// the observations already recorded at the station.
///
/// Input order is preserved. A station with nothing left to classify is an
/// error, never an empty-ok answer.
pub fn filter_available(
    all: &[Uuid],
    observed: &[ObservedClassification],
) -> Result<Vec<Uuid>, LookupError> {
    let exhausted: HashSet<Uuid> = observed
        .iter()
        .filter(|o| !o.repeatable)
        .map(|o| o.classification_id)
        .collect();

    let available: Vec<Uuid> = all
        .iter()
        .copied()
        .filter(|id| !exhausted.contains(id))
        .collect();

    if available.is_empty() {
        return Err(LookupError::Empty {
            entity: "classification",
        });
    }
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observed(id: Uuid, repeatable: bool) -> ObservedClassification {
        ObservedClassification {
            classification_id: id,
            repeatable,
        }
    }

    #[test]
    fn test_no_observations_leaves_everything_available() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(filter_available(&[a, b], &[]).unwrap(), vec![a, b]);
    }

    #[test]
    fn test_non_repeatable_observation_excludes_only_its_classification() {
        let a = Uuid::new_v4(); // repeatable = false, already observed
        let b = Uuid::new_v4(); // repeatable = true
        let available = filter_available(&[a, b], &[observed(a, false)]).unwrap();
        assert_eq!(available, vec![b]);
    }

    #[test]
    fn test_repeatable_observation_stays_available() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let available = filter_available(&[a, b], &[observed(b, true)]).unwrap();
        assert_eq!(available, vec![a, b]);
    }

    #[test]
    fn test_removal_is_by_identity_not_position() {
        // The observation iteration index points at a different position
        // than the classification it refers to; only identity may matter.
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let available = filter_available(&[a, b, c], &[observed(c, false)]).unwrap();
        assert_eq!(available, vec![a, b]);
    }

    #[test]
    fn test_duplicate_observations_of_same_classification() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let available =
            filter_available(&[a, b], &[observed(a, false), observed(a, false)]).unwrap();
        assert_eq!(available, vec![b]);
    }

    #[test]
    fn test_all_exhausted_fails_instead_of_returning_empty() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let result = filter_available(&[a, b], &[observed(a, false), observed(b, false)]);
        assert!(matches!(
            result,
            Err(LookupError::Empty {
                entity: "classification"
            })
        ));
    }

    #[test]
    fn test_observed_classification_outside_full_set_is_ignored() {
        // An observation may reference a classification the caller did not
        // include in `all`; it must not disturb the rest.
        let a = Uuid::new_v4();
        let stray = Uuid::new_v4();
        let available = filter_available(&[a], &[observed(stray, false)]).unwrap();
        assert_eq!(available, vec![a]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let available = filter_available(&ids, &[observed(ids[2], false)]).unwrap();
        assert_eq!(available, vec![ids[0], ids[1], ids[3], ids[4]]);
    }
}
