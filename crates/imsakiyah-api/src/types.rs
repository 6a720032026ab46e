//! Wire types of the imsakiyah schedule API

use serde::{Deserialize, Serialize};

/// Response envelope used by every API endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i64,
    pub message: String,
    pub data: T,
}

/// Full Ramadhan schedule for one city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImsakiyahData {
    #[serde(rename = "provinsi")]
    pub province: String,

    #[serde(rename = "kabkota")]
    pub city: String,

    /// Hijri month and year, e.g. "Ramadhan 1446"
    #[serde(rename = "hijriah", default)]
    pub hijri: String,

    /// Gregorian year/month span as reported by the API
    #[serde(rename = "masehi", default)]
    pub gregorian: String,

    /// Daily entries; index 0 is today
    #[serde(rename = "imsakiyah", default)]
    pub days: Vec<ImsakiyahDay>,
}

impl ImsakiyahData {
    /// Hijri month name, falling back to "Ramadhan"
    pub fn hijri_month(&self) -> &str {
        self.hijri.split_whitespace().next().unwrap_or("Ramadhan")
    }

    /// Hijri year if the API supplied one
    pub fn hijri_year(&self) -> Option<&str> {
        self.hijri.split_whitespace().nth(1)
    }

    /// Today's entry
    pub fn today(&self) -> Option<&ImsakiyahDay> {
        self.days.first()
    }
}

/// One day of prayer times. Times are "HH:MM" strings, passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImsakiyahDay {
    /// Day of Ramadhan (1-based); 0 when the API omits it
    #[serde(rename = "tanggal", default)]
    pub day: u32,
    pub imsak: String,
    pub subuh: String,
    pub terbit: String,
    pub dhuha: String,
    pub dzuhur: String,
    pub ashar: String,
    pub maghrib: String,
    pub isya: String,
}

impl ImsakiyahDay {
    /// Time string for a prayer
    pub fn time(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Imsak => &self.imsak,
            Prayer::Subuh => &self.subuh,
            Prayer::Terbit => &self.terbit,
            Prayer::Dhuha => &self.dhuha,
            Prayer::Dzuhur => &self.dzuhur,
            Prayer::Ashar => &self.ashar,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isya => &self.isya,
        }
    }

    /// Ramadhan day number, using `index + 1` when the API left it out
    pub fn day_number(&self, index: usize) -> usize {
        if self.day == 0 {
            index + 1
        } else {
            self.day as usize
        }
    }
}

/// Prayer and marker times carried by a schedule day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    Imsak,
    Subuh,
    Terbit,
    Dhuha,
    Dzuhur,
    Ashar,
    Maghrib,
    Isya,
}

impl Prayer {
    /// All times in the order they occur during the day
    pub const ALL: [Prayer; 8] = [
        Prayer::Imsak,
        Prayer::Subuh,
        Prayer::Terbit,
        Prayer::Dhuha,
        Prayer::Dzuhur,
        Prayer::Ashar,
        Prayer::Maghrib,
        Prayer::Isya,
    ];

    /// Times highlighted on the today card
    pub const HIGHLIGHTS: [Prayer; 4] = [
        Prayer::Imsak,
        Prayer::Maghrib,
        Prayer::Subuh,
        Prayer::Isya,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Prayer::Imsak => "Imsak",
            Prayer::Subuh => "Subuh",
            Prayer::Terbit => "Terbit",
            Prayer::Dhuha => "Dhuha",
            Prayer::Dzuhur => "Dzuhur",
            Prayer::Ashar => "Ashar",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isya => "Isya",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_JSON: &str = r#"{
        "code": 200,
        "message": "Data berhasil diambil",
        "data": [{
            "provinsi": "DKI Jakarta",
            "kabkota": "Kota Jakarta",
            "hijriah": "Ramadhan 1446",
            "masehi": "Maret 2025",
            "imsakiyah": [{
                "tanggal": 1,
                "imsak": "04:28",
                "subuh": "04:38",
                "terbit": "05:53",
                "dhuha": "06:21",
                "dzuhur": "12:05",
                "ashar": "15:10",
                "maghrib": "18:11",
                "isya": "19:20"
            }]
        }]
    }"#;

    #[test]
    fn decode_schedule_response() {
        let response: ApiResponse<Vec<ImsakiyahData>> =
            serde_json::from_str(SCHEDULE_JSON).unwrap();
        assert_eq!(response.code, 200);

        let data = &response.data[0];
        assert_eq!(data.province, "DKI Jakarta");
        assert_eq!(data.city, "Kota Jakarta");
        assert_eq!(data.hijri_month(), "Ramadhan");
        assert_eq!(data.hijri_year(), Some("1446"));

        let today = data.today().unwrap();
        assert_eq!(today.time(Prayer::Imsak), "04:28");
        assert_eq!(today.time(Prayer::Maghrib), "18:11");
        assert_eq!(today.day_number(0), 1);
    }

    #[test]
    fn decode_province_list() {
        let json = r#"{"code":200,"message":"ok","data":["Aceh","Bali"]}"#;
        let response: ApiResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, vec!["Aceh", "Bali"]);
    }

    #[test]
    fn missing_hijri_falls_back() {
        let data = ImsakiyahData {
            province: "Bali".into(),
            city: "Kota Denpasar".into(),
            hijri: String::new(),
            gregorian: String::new(),
            days: vec![],
        };
        assert_eq!(data.hijri_month(), "Ramadhan");
        assert_eq!(data.hijri_year(), None);
        assert!(data.today().is_none());
    }

    #[test]
    fn day_number_uses_index_when_missing() {
        let json = r#"{"imsak":"04:28","subuh":"04:38","terbit":"05:53","dhuha":"06:21",
            "dzuhur":"12:05","ashar":"15:10","maghrib":"18:11","isya":"19:20"}"#;
        let day: ImsakiyahDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.day, 0);
        assert_eq!(day.day_number(4), 5);
    }

    #[test]
    fn prayer_order() {
        assert_eq!(Prayer::ALL.first(), Some(&Prayer::Imsak));
        assert_eq!(Prayer::ALL.last(), Some(&Prayer::Isya));
        assert_eq!(Prayer::Dzuhur.label(), "Dzuhur");
    }
}
