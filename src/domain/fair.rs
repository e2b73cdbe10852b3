//! Static fair catalog
//!
//! The catalog ships with the binary and is not user-editable. The store
//! never checks fair ids against it: documents imported from a backup may
//! reference fairs this build does not know about.

use serde::Serialize;

/// A trade-show event from the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fair {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Display label for the date range, e.g. "Feb 26 - Feb 29"
    pub dates: &'static str,
}

/// The built-in fair catalog
pub const CATALOG: &[Fair] = &[
    Fair {
        id: "mwc-24",
        name: "Mobile World Congress 2024",
        location: "Barcelona, Spain",
        dates: "Feb 26 - Feb 29",
    },
    Fair {
        id: "ces-24",
        name: "CES 2024",
        location: "Las Vegas, USA",
        dates: "Jan 9 - Jan 12",
    },
    Fair {
        id: "ifa-24",
        name: "IFA Berlin 2024",
        location: "Berlin, Germany",
        dates: "Sep 6 - Sep 10",
    },
    Fair {
        id: "fitur-24",
        name: "FITUR 2024",
        location: "Madrid, Spain",
        dates: "Jan 24 - Jan 28",
    },
    Fair {
        id: "ibc-24",
        name: "IBC 2024",
        location: "Amsterdam, Netherlands",
        dates: "Sep 13 - Sep 16",
    },
    Fair {
        id: "hannover-24",
        name: "Hannover Messe 2024",
        location: "Hannover, Germany",
        dates: "Apr 22 - Apr 26",
    },
];

impl Fair {
    /// Looks up a catalog entry by id
    pub fn find(id: &str) -> Option<&'static Fair> {
        CATALOG.iter().find(|f| f.id == id)
    }
}
