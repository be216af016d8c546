use crate::domain::model::{FounderRecord, LngLat};
use crate::domain::ports::DirectorySource;
use crate::utils::error::Result;
use async_trait::async_trait;

// id, name, country, city, [lng, lat], handle
const FOUNDERS: &[(u32, &str, &str, &str, [f64; 2], &str)] = &[
    (1, "John Smith", "Canada", "Toronto", [-79.3832, 43.6532], "johnsmith"),
    (2, "Priya Sharma", "India", "Mumbai", [72.8777, 19.076], "priyasharma"),
    (3, "Alex Johnson", "United States", "San Francisco", [-122.4194, 37.7749], "alexjohnson"),
    (4, "Maria Garcia", "Spain", "Madrid", [-3.7038, 40.4168], "mariagarcia"),
    (5, "Chen Wei", "China", "Shanghai", [121.4737, 31.2304], "chenwei"),
    (6, "Sarah Wilson", "United Kingdom", "London", [-0.1276, 51.5074], "sarahwilson"),
    (7, "Ahmed Hassan", "Egypt", "Cairo", [31.2357, 30.0444], "ahmedhassan"),
    (8, "Lucas Silva", "Brazil", "São Paulo", [-46.6333, -23.5505], "lucassilva"),
    (9, "Emma Brown", "Australia", "Sydney", [151.2093, -33.8688], "emmabrown"),
    (10, "Yuki Tanaka", "Japan", "Tokyo", [139.6917, 35.6895], "yukitanaka"),
    (11, "Pierre Dubois", "France", "Paris", [2.3522, 48.8566], "pierredubois"),
    (12, "Anna Kowalski", "Poland", "Warsaw", [21.0122, 52.2297], "annakowalski"),
    (13, "Carlos Rodriguez", "Mexico", "Mexico City", [-99.1332, 19.4326], "carlosrodriguez"),
    (14, "Fatima Al-Zahra", "Morocco", "Casablanca", [-7.5898, 33.5731], "fatimaalzahra"),
    (15, "Olaf Andersen", "Norway", "Oslo", [10.7522, 59.9139], "olafandersen"),
];

/// The compiled-in directory. Loading never fails.
#[derive(Debug, Clone, Default)]
pub struct BuiltinSource;

impl BuiltinSource {
    pub fn records() -> Vec<FounderRecord> {
        FOUNDERS
            .iter()
            .map(|(id, name, country, city, [lng, lat], handle)| FounderRecord {
                id: *id,
                name: name.to_string(),
                country: country.to_string(),
                city: city.to_string(),
                coordinates: LngLat(*lng, *lat),
                website: format!("https://{}.com", handle),
                social_handle: format!("@{}", handle),
                share_url: format!("https://founders.com/{}", handle),
            })
            .collect()
    }
}

#[async_trait]
impl DirectorySource for BuiltinSource {
    fn name(&self) -> String {
        "builtin".to_string()
    }

    async fn load(&self) -> Result<Vec<FounderRecord>> {
        Ok(Self::records())
    }
}
