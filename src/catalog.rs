use serde::Serialize;

// The rental fleet is fixed at deployment time and ships with the binary.
// Pricing snapshots taken at booking time reference these rows, so edits
// here never rewrite existing bookings.

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transmission {
    Manual,
    Automatic,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub id: &'static str,
    pub name: &'static str,
    pub r#type: &'static str,
    pub transmission: Transmission,
    pub seats: i32,
    pub price_per_day: i32,
    pub image: &'static str,
    pub available: bool,
    pub features: &'static [&'static str],
}

pub const FLEET: &[Vehicle] = &[
    Vehicle {
        id: "toyota-yaris-1",
        name: "Toyota Yaris",
        r#type: "Sedan",
        transmission: Transmission::Automatic,
        seats: 5,
        price_per_day: 6000,
        image: "/cars/toyota-yaris.png",
        available: true,
        features: &["AC", "Bluetooth", "Airbags", "Apple CarPlay"],
    },
    Vehicle {
        id: "honda-civic-2023",
        name: "Honda Civic 2023",
        r#type: "Premium Sedan",
        transmission: Transmission::Automatic,
        seats: 5,
        price_per_day: 8000,
        image: "/cars/honda-civic.png",
        available: true,
        features: &["Sunroof", "Adaptive Cruise", "Leather Seats", "Lane Assist"],
    },
    Vehicle {
        id: "kia-sorento",
        name: "KIA Sorento",
        r#type: "SUV",
        transmission: Transmission::Automatic,
        seats: 7,
        price_per_day: 18000,
        image: "/cars/kia-sorento.png",
        available: true,
        features: &["Panoramic Sunroof", "All-Wheel Drive", "Premium Audio", "7 Seater"],
    },
    Vehicle {
        id: "toyota-revo",
        name: "Toyota Hilux Revo",
        r#type: "Pickup / 4x4",
        transmission: Transmission::Automatic,
        seats: 5,
        price_per_day: 14000,
        image: "/cars/toyota-hilux-revo.png",
        available: true,
        features: &["4x4", "Off-road Capability", "Turbo Diesel", "Tow Bar"],
    },
    Vehicle {
        id: "mg-hs",
        name: "MG HS Trophy",
        r#type: "SUV",
        transmission: Transmission::Automatic,
        seats: 5,
        price_per_day: 12000,
        image: "/cars/mg-hs-trophy.png",
        available: true,
        features: &["Turbo Engine", "Ambient Lighting", "360 Camera", "Panoramic Roof"],
    },
    Vehicle {
        id: "hiace-10",
        name: "Toyota Hiace",
        r#type: "Van",
        transmission: Transmission::Manual,
        seats: 10,
        price_per_day: 10000,
        image: "/cars/toyota-hiace.png",
        available: true,
        features: &["10 Seater", "Dual AC", "Large Luggage Space", "Group Travel"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFilter {
    Any,
    Exactly5,
    SevenPlus,
}

impl SeatFilter {
    // Accepts the portal's query spellings: "Any"/"any", "5", "7+".
    pub fn parse(raw: &str) -> Option<SeatFilter> {
        match raw {
            "Any" | "any" => Some(SeatFilter::Any),
            "5" => Some(SeatFilter::Exactly5),
            "7+" => Some(SeatFilter::SevenPlus),
            _ => None,
        }
    }

    fn matches(&self, seats: i32) -> bool {
        match self {
            SeatFilter::Any => true,
            SeatFilter::Exactly5 => seats == 5,
            SeatFilter::SevenPlus => seats >= 7,
        }
    }
}

pub fn find_vehicle(vehicle_id: &str) -> Option<&'static Vehicle> {
    FLEET.iter().find(|v| v.id == vehicle_id)
}

/// Applies all active predicates and keeps the catalog's original order.
/// `max_price` is inclusive; a type of "All" (or none) matches everything.
pub fn filter_fleet(
    type_filter: Option<&str>,
    max_price: Option<i32>,
    seats: SeatFilter,
) -> Vec<&'static Vehicle> {
    FLEET
        .iter()
        .filter(|v| match type_filter {
            None | Some("All") => true,
            Some(t) => v.r#type == t,
        })
        .filter(|v| match max_price {
            None => true,
            Some(cap) => v.price_per_day <= cap,
        })
        .filter(|v| seats.matches(v.seats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_predicates_returns_whole_catalog() {
        let all = filter_fleet(None, None, SeatFilter::Any);
        assert_eq!(all.len(), FLEET.len());
    }

    #[test]
    fn seven_plus_keeps_catalog_order() {
        let vans = filter_fleet(None, None, SeatFilter::SevenPlus);
        let ids: Vec<&str> = vans.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["kia-sorento", "hiace-10"]);
    }

    #[test]
    fn max_price_is_inclusive() {
        let cheap = filter_fleet(None, Some(6000), SeatFilter::Any);
        assert_eq!(cheap.len(), 1);
        assert_eq!(cheap[0].id, "toyota-yaris-1");
    }

    #[test]
    fn type_and_price_combine() {
        let suvs = filter_fleet(Some("SUV"), Some(12000), SeatFilter::Any);
        let ids: Vec<&str> = suvs.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["mg-hs"]);
    }

    #[test]
    fn all_type_matches_everything() {
        assert_eq!(
            filter_fleet(Some("All"), None, SeatFilter::Any).len(),
            FLEET.len()
        );
    }

    #[test]
    fn filtering_a_filtered_set_is_idempotent() {
        let first = filter_fleet(None, Some(12000), SeatFilter::Exactly5);
        let second: Vec<&Vehicle> = first
            .iter()
            .copied()
            .filter(|v| v.price_per_day <= 12000 && v.seats == 5)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn seat_filter_rejects_unknown_spelling() {
        assert_eq!(SeatFilter::parse("7"), None);
        assert_eq!(SeatFilter::parse("5"), Some(SeatFilter::Exactly5));
    }
}
