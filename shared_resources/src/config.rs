use std::fs;

/// Which assignment policy the dispatcher runs with. Configuration-time
/// surrogate for the strategy objects in the `dispatch` crate.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    NearestCar,
    Fixed { car: u8 },
    ParityPartitioned,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankConfig {
    pub num_cars: u8,
    pub num_floors: u8,
    pub strategy: StrategyKind,
}

impl BankConfig {
    pub fn new(num_cars: u8, num_floors: u8, strategy: StrategyKind) -> Self {
        BankConfig {
            num_cars: num_cars,
            num_floors: num_floors,
            strategy: strategy,
        }
    }

    pub fn top_floor(&self) -> u8 {
        self.num_floors.saturating_sub(1)
    }

    /// Reads the bank topology from a JSON file, falling back to the
    /// compiled defaults when the file is missing or malformed.
    pub fn load(path: &str) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                log::warn!("no configuration file at {}, using default settings", path);
                return BankConfig::default();
            },
        };
        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("could not parse {}: {}, using default settings", path, err);
                BankConfig::default()
            },
        }
    }
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig::new(2, 10, StrategyKind::NearestCar)
    }
}
