// Cyclist race record domain model
use super::race_time::RaceTime;
use serde::Deserialize;

/// One result entry from the source dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub year: i32,
    pub time: RaceTime,
    pub name: String,
    pub nationality: String,
    #[serde(default)]
    pub doping: String,
    #[serde(default)]
    pub place: Option<u32>,
    #[serde(default)]
    pub seconds: Option<u32>,
    #[serde(default, rename = "URL")]
    pub url: Option<String>,
}

impl Record {
    pub fn category(&self) -> Category {
        if self.doping.is_empty() {
            Category::Clean
        } else {
            Category::Doping
        }
    }
}

/// Doping classification used for mark color and legend grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Doping,
    Clean,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Doping => "Doping allegations",
            Category::Clean => "No doping allegations",
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Category::Doping => "doping",
            Category::Clean => "clean",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANTANI: &str = r#"{
        "Time": "36:55",
        "Place": 2,
        "Seconds": 2215,
        "Name": "Marco Pantani",
        "Year": 1997,
        "Nationality": "ITA",
        "Doping": "Alleged drug use during 1997 due to high hermatocrit levels",
        "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"
    }"#;

    #[test]
    fn test_deserialize_dataset_entry() {
        let record: Record = serde_json::from_str(PANTANI).unwrap();
        assert_eq!(record.year, 1997);
        assert_eq!(record.time.to_string(), "36:55");
        assert_eq!(record.place, Some(2));
        assert_eq!(record.seconds, Some(2215));
        assert_eq!(record.category(), Category::Doping);
    }

    #[test]
    fn test_minimal_entry_is_clean() {
        let json = r#"{"Year": 2015, "Time": "39:12", "Name": "Chris Froome", "Nationality": "GBR", "Doping": ""}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category(), Category::Clean);
        assert_eq!(record.url, None);

        let json = r#"{"Year": 2015, "Time": "39:12", "Name": "Chris Froome", "Nationality": "GBR"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.category(), Category::Clean);
    }

    #[test]
    fn test_malformed_time_fails_to_parse() {
        let json = r#"{"Year": 2015, "Time": "39.12", "Name": "X", "Nationality": "GBR", "Doping": ""}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Doping.label(), "Doping allegations");
        assert_eq!(Category::Clean.label(), "No doping allegations");
    }
}
