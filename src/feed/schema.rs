//! Feed layouts.
//!
//! Each feed is described by a table of `(token index, field name)` pairs so
//! one mapper can handle all of them.

use std::fmt;
use std::time::Duration;

/// The three SWPC feeds used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedKind {
    /// ACE magnetometer, `ace_mag_1m.txt`.
    Magnetometer,
    /// ACE SWEPAM solar wind plasma, `ace_swepam_1m.txt`.
    Plasma,
    /// Wing Kp predictions, `wingkp_list.txt`.
    KIndex,
}

impl FeedKind {
    /// Every feed, in merge order.
    pub const ALL: [FeedKind; 3] = [FeedKind::Magnetometer, FeedKind::Plasma, FeedKind::KIndex];

    /// Layout used to map this feed's lines.
    pub fn schema(&self) -> &'static FeedSchema {
        match self {
            FeedKind::Magnetometer => &MAGNETOMETER,
            FeedKind::Plasma => &PLASMA,
            FeedKind::KIndex => &KINDEX,
        }
    }

    /// Lowercase name used in logs and exports.
    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::Magnetometer => "magnetometer",
            FeedKind::Plasma => "plasma",
            FeedKind::KIndex => "k-index",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Positional layout of one feed's data lines.
#[derive(Debug, PartialEq)]
pub struct FeedSchema {
    pub kind: FeedKind,
    /// `(token index, field name)`, in record order.
    pub fields: &'static [(usize, &'static str)],
    /// How often the feed publishes a sample.
    pub interval: Duration,
}

impl FeedSchema {
    /// Position of a field within a record built from this schema.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(_, n)| *n == name)
    }

    /// Field names in record order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(_, n)| *n)
    }
}

/// `ace_mag_1m.txt`: date, time and the GSM field components, with Bz at
/// token 9.
pub static MAGNETOMETER: FeedSchema = FeedSchema {
    kind: FeedKind::Magnetometer,
    fields: &[
        (0, "YR"),
        (1, "DA"),
        (2, "MO"),
        (3, "Time"),
        (4, "JulianDay"),
        (5, "Seconds"),
        (6, "S"),
        (7, "Bx"),
        (8, "By"),
        (9, "Bz"),
        (10, "Bt"),
        (11, "Lat"),
        (12, "Long"),
    ],
    interval: Duration::from_secs(60),
};

// YR MO DA HHMM MJD SecOfDay S Density Speed Temperature
pub static PLASMA: FeedSchema = FeedSchema {
    kind: FeedKind::Plasma,
    fields: &[(7, "Density"), (8, "Speed"), (9, "IonTemperature")],
    interval: Duration::from_secs(60),
};

/// `wingkp_list.txt`: the 1-hour and 4-hour lead predictions and the
/// observed Kp used for scoring.
pub static KINDEX: FeedSchema = FeedSchema {
    kind: FeedKind::KIndex,
    fields: &[(9, "Kp1Hour"), (15, "Kp4Hour"), (17, "Kp")],
    interval: Duration::from_secs(15 * 60),
};
