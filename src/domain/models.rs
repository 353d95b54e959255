use serde::Serialize;
use std::fmt;

/// Geographic position of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A restaurant listing shown on a card.
///
/// Listings come from a fixed, trusted list compiled into the binary, so every
/// field borrows `'static` data and the whole value is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: &'static str,
    pub name: &'static str,
    pub cuisine: &'static str,
    /// Price for two, in rupees
    pub price: u32,
    pub tags: &'static [&'static str],
    /// Reserved, not read by any decision logic
    pub popularity: u32,
    /// Reserved, not read by any decision logic
    pub hidden: bool,
    pub position: Coordinates,
}

impl Restaurant {
    /// One-line description used by the outcome lists and the clipboard.
    ///
    /// # Examples
    ///
    /// ```
    /// use snackswipe::domain::DATASET;
    ///
    /// assert_eq!(DATASET[0].summary(), "Spice Route • Indian • ₹200 • spicy, veg");
    /// ```
    pub fn summary(&self) -> String {
        format!(
            "{} • {} • ₹{} • {}",
            self.name,
            self.cuisine,
            self.price,
            self.tags.join(", ")
        )
    }
}

/// Where a classified listing ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Like,
    Reject,
    Wishlist,
    Skip,
}

impl Outcome {
    pub const ALL: [Outcome; 4] =
        [Outcome::Like, Outcome::Wishlist, Outcome::Reject, Outcome::Skip];

    /// Heading used when the collection is listed.
    pub fn heading(self) -> &'static str {
        match self {
            Outcome::Like => "Liked",
            Outcome::Reject => "Rejected",
            Outcome::Wishlist => "Wishlist",
            Outcome::Skip => "Skipped",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Like => "like",
            Outcome::Reject => "reject",
            Outcome::Wishlist => "wishlist",
            Outcome::Skip => "skip",
        };
        f.write_str(label)
    }
}

/// Result of evaluating a released gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Like,
    Reject,
    Wishlist,
    Skip,
    /// Return the card to rest without touching the store
    Cancel,
}

impl Decision {
    /// The store outcome this decision classifies into, `None` for `Cancel`.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Decision::Like => Some(Outcome::Like),
            Decision::Reject => Some(Outcome::Reject),
            Decision::Wishlist => Some(Outcome::Wishlist),
            Decision::Skip => Some(Outcome::Skip),
            Decision::Cancel => None,
        }
    }
}

impl From<Outcome> for Decision {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Like => Decision::Like,
            Outcome::Reject => Decision::Reject,
            Outcome::Wishlist => Decision::Wishlist,
            Outcome::Skip => Decision::Skip,
        }
    }
}
