use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::Granularity;
use crate::modules::income::models::{ManualGroup, MemberGroup, ParkingGroup};
use crate::modules::locations::models::Location;
use crate::modules::revenue::models::{AggregateReport, LocationSeries, RevenueBucket};

/// Join the three fact sources on (period, location) and fill every gap.
///
/// `periods` is the authoritative bucket sequence from the period
/// bucketer: the output contains exactly one bucket per element of
/// `periods x locations`, all-zero where no fact rows exist. Locations
/// keep the order the access resolver returned them in.
pub fn aggregate(
    locations: &[Location],
    periods: &[NaiveDate],
    granularity: Granularity,
    parking: Vec<ParkingGroup>,
    member: Vec<MemberGroup>,
    manual: Vec<ManualGroup>,
) -> AggregateReport {
    let mut parking_by_key: HashMap<(NaiveDate, i32), ParkingGroup> =
        HashMap::with_capacity(parking.len());
    for group in parking {
        let key = (granularity.truncate(group.bucket), group.location_id);
        parking_by_key.insert(key, group);
    }

    let mut member_by_key: HashMap<(NaiveDate, i32), MemberGroup> =
        HashMap::with_capacity(member.len());
    for group in member {
        let key = (granularity.truncate(group.bucket), group.location_id);
        member_by_key.insert(key, group);
    }

    let mut manual_by_key: HashMap<(NaiveDate, i32), ManualGroup> =
        HashMap::with_capacity(manual.len());
    for group in manual {
        let key = (granularity.truncate(group.bucket), group.location_id);
        manual_by_key.insert(key, group);
    }

    let series = locations
        .iter()
        .map(|location| {
            let buckets = periods
                .iter()
                .map(|&period| {
                    let key = (period, location.id);
                    let mut bucket = RevenueBucket::zero(period);

                    if let Some(p) = parking_by_key.get(&key) {
                        bucket.cash = p.cash;
                        bucket.prepaid = p.prepaid;
                        bucket.casual_qty = p.casual;
                        bucket.pass_qty = p.pass;
                    }
                    if let Some(m) = member_by_key.get(&key) {
                        bucket.member = m.member;
                    }
                    if let Some(n) = manual_by_key.get(&key) {
                        bucket.manual = n.manual;
                        bucket.problem = n.problem;
                    }

                    bucket
                })
                .collect();

            LocationSeries {
                location_id: location.id,
                site: location.site.clone(),
                buckets,
            }
        })
        .collect();

    AggregateReport {
        granularity,
        periods: periods.to_vec(),
        series,
    }
}
