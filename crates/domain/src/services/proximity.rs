//! Proximity candidate resolution.
//!
//! The geospatial index returns station candidates in its own internal
//! order, which is not distance-sorted. The contract is "first candidate
//! within the radius that still resolves against the store", not "closest
//! station": the radius is the ranking signal. Candidates the store no
//! longer knows are skipped, and if every candidate is skipped the index
//! and the store have diverged, which is a lookup failure in its own right.

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::error::LookupError;
use crate::models::Station;

/// Resolves a station candidate id against the primary store.
#[async_trait]
pub trait StationResolver {
    async fn resolve(&self, station_id: Uuid) -> Result<Station, LookupError>;
}

/// Returns the first candidate that resolves successfully, in candidate
/// order.
///
/// Fails with [`LookupError::Unresolvable`] when every candidate fails,
/// counting them so the caller can see the extent of the divergence. An
/// empty candidate list is the caller's concern and is reported the same
/// way with a count of zero.
pub async fn first_resolvable<R>(candidates: &[Uuid], resolver: &R) -> Result<Station, LookupError>
where
    R: StationResolver + ?Sized,
{
    let mut failed = 0usize;
    for &candidate in candidates {
        match resolver.resolve(candidate).await {
            Ok(station) => return Ok(station),
            Err(err) => {
                warn!(station_id = %candidate, error = %err, "proximity candidate did not resolve");
                failed += 1;
            }
        }
    }
    Err(LookupError::Unresolvable { count: failed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;
    use chrono::Utc;
    use std::collections::HashMap;

    struct MapResolver {
        stations: HashMap<Uuid, Station>,
    }

    #[async_trait]
    impl StationResolver for MapResolver {
        async fn resolve(&self, station_id: Uuid) -> Result<Station, LookupError> {
            self.stations
                .get(&station_id)
                .cloned()
                .ok_or_else(|| LookupError::not_found("station", station_id.to_string()))
        }
    }

    fn station(id: Uuid, national_id: &str) -> Station {
        Station {
            id,
            national_id: national_id.to_string(),
            district_id: Uuid::new_v4(),
            observer_id: None,
            name: "Casilla".to_string(),
            address: "Calle 1".to_string(),
            picture_url: "https://example.com/c.jpg".to_string(),
            location: GeoPoint::new(19.4, -99.1),
            created_at: Utc::now(),
        }
    }

    fn resolver_with(stations: Vec<Station>) -> MapResolver {
        MapResolver {
            stations: stations.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    #[tokio::test]
    async fn test_first_candidate_wins_when_it_resolves() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let resolver =
            resolver_with(vec![station(first, "MX-001"), station(second, "MX-002")]);

        let found = first_resolvable(&[first, second], &resolver).await.unwrap();
        assert_eq!(found.national_id, "MX-001");
    }

    #[tokio::test]
    async fn test_unresolvable_candidates_are_skipped() {
        let stale = Uuid::new_v4();
        let live = Uuid::new_v4();
        let resolver = resolver_with(vec![station(live, "MX-002")]);

        let found = first_resolvable(&[stale, live], &resolver).await.unwrap();
        assert_eq!(found.national_id, "MX-002");
    }

    #[tokio::test]
    async fn test_all_candidates_failing_reports_divergence() {
        let resolver = resolver_with(vec![]);
        let candidates = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

        let err = first_resolvable(&candidates, &resolver).await.unwrap_err();
        match err {
            LookupError::Unresolvable { count } => assert_eq!(count, 3),
            other => panic!("expected Unresolvable, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidate_list_fails() {
        let resolver = resolver_with(vec![]);
        let err = first_resolvable(&[], &resolver).await.unwrap_err();
        assert!(matches!(err, LookupError::Unresolvable { count: 0 }));
    }

    #[tokio::test]
    async fn test_candidate_order_not_distance_decides() {
        // Two resolvable candidates: the one listed first is returned even
        // if another would be geographically closer to anything.
        let far = Uuid::new_v4();
        let near = Uuid::new_v4();
        let mut far_station = station(far, "MX-FAR");
        far_station.location = GeoPoint::new(25.0, -100.0);
        let near_station = station(near, "MX-NEAR");
        let resolver = resolver_with(vec![far_station, near_station]);

        let found = first_resolvable(&[far, near], &resolver).await.unwrap();
        assert_eq!(found.national_id, "MX-FAR");
    }
}
