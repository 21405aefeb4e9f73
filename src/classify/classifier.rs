//! Mapping readings onto severity tiers.

use aurorawatch_types::{Reading, Tier};

use super::thresholds::ThresholdTable;

/// Classify a reading against a metric's table.
///
/// Missing readings are `NoData` whatever the table says. Present readings
/// take the first band (green, yellow, orange, red) that contains them, and
/// `Unclassified` if none does, e.g. a speed below the green floor or NaN.
/// The default tables are open-ended at the severe end, so only the floor
/// side can fall through.
pub fn classify(reading: Reading, table: &ThresholdTable) -> Tier {
    let value = match reading {
        Reading::Present(v) => v,
        Reading::Missing => return Tier::NoData,
    };

    table
        .bands()
        .into_iter()
        .find(|(_, band)| band.contains(value))
        .map_or(Tier::Unclassified, |(tier, _)| tier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Band, Thresholds};

    fn tier(value: f64, table: &ThresholdTable) -> Tier {
        classify(Reading::from_raw(value), table)
    }

    #[test]
    fn test_bz_boundaries() {
        let t = Thresholds::default();
        assert_eq!(tier(5.0, &t.bz.table), Tier::Green);
        assert_eq!(tier(0.0, &t.bz.table), Tier::Green);
        assert_eq!(tier(-0.1, &t.bz.table), Tier::Yellow);
        assert_eq!(tier(-10.0, &t.bz.table), Tier::Yellow);
        assert_eq!(tier(-12.0, &t.bz.table), Tier::Orange);
        assert_eq!(tier(-15.0, &t.bz.table), Tier::Orange);
        assert_eq!(tier(-16.0, &t.bz.table), Tier::Red);
        assert_eq!(tier(-80.0, &t.bz.table), Tier::Red);
    }

    #[test]
    fn test_speed_boundaries() {
        let t = Thresholds::default();
        assert_eq!(tier(200.0, &t.speed.table), Tier::Green);
        assert_eq!(tier(349.9, &t.speed.table), Tier::Green);
        assert_eq!(tier(350.0, &t.speed.table), Tier::Yellow);
        assert_eq!(tier(420.0, &t.speed.table), Tier::Yellow);
        assert_eq!(tier(500.0, &t.speed.table), Tier::Orange);
        assert_eq!(tier(650.0, &t.speed.table), Tier::Orange);
        assert_eq!(tier(700.0, &t.speed.table), Tier::Red);
        assert_eq!(tier(1200.0, &t.speed.table), Tier::Red);
    }

    #[test]
    fn test_density_and_kp() {
        let t = Thresholds::default();
        assert_eq!(tier(0.0, &t.density.table), Tier::Green);
        assert_eq!(tier(4.0, &t.density.table), Tier::Yellow);
        assert_eq!(tier(7.5, &t.density.table), Tier::Yellow);
        assert_eq!(tier(10.0, &t.density.table), Tier::Orange);
        assert_eq!(tier(12.0, &t.density.table), Tier::Orange);
        assert_eq!(tier(14.0, &t.density.table), Tier::Red);
        assert_eq!(tier(30.0, &t.density.table), Tier::Red);

        assert_eq!(tier(0.0, &t.kp.table), Tier::Green);
        assert_eq!(tier(3.0, &t.kp.table), Tier::Yellow);
        assert_eq!(tier(4.0, &t.kp.table), Tier::Orange);
        assert_eq!(tier(5.0, &t.kp.table), Tier::Red);

        assert_eq!(tier(2.33, &t.kp.table), Tier::Green);
        assert_eq!(tier(3.67, &t.kp.table), Tier::Yellow);
        assert_eq!(tier(4.33, &t.kp.table), Tier::Orange);
        assert_eq!(tier(7.0, &t.kp.table), Tier::Red);
    }

    #[test]
    fn test_missing_overrides_table() {
        let t = Thresholds::default();
        for table in [&t.bz.table, &t.speed.table, &t.density.table, &t.kp.table] {
            assert_eq!(tier(-999.9, table), Tier::NoData);
            assert_eq!(tier(-5000.0, table), Tier::NoData);
            assert_eq!(classify(Reading::Missing, table), Tier::NoData);
        }
    }

    #[test]
    fn test_below_floor_is_unclassified() {
        let t = Thresholds::default();
        assert_eq!(tier(150.0, &t.speed.table), Tier::Unclassified);
        assert_eq!(tier(-1.0, &t.density.table), Tier::Unclassified);
        assert_eq!(classify(Reading::Present(f64::NAN), &t.bz.table), Tier::Unclassified);
    }

    #[test]
    fn test_custom_table() {
        let table = ThresholdTable::ascending(None, 1.0, 2.0, 3.0);
        assert_eq!(tier(-100.0, &table), Tier::Green);
        assert_eq!(tier(2.5, &table), Tier::Orange);
    }

    #[test]
    fn test_overlapping_bands_take_first_match() {
        let table = ThresholdTable {
            green: Band::new(Some(0.0), Some(10.0)),
            yellow: Band::new(Some(5.0), Some(20.0)),
            orange: Band::new(Some(15.0), None),
            red: Band::new(Some(15.0), None),
        };
        assert_eq!(tier(7.0, &table), Tier::Green);
        assert_eq!(tier(16.0, &table), Tier::Yellow);
        assert_eq!(tier(25.0, &table), Tier::Orange);
    }
}
