use serde::Serialize;

pub const REGIONS: &[&str] = &[
    "Toshkent shahri",
    "Toshkent viloyati",
    "Andijon",
    "Fargʻona",
    "Namangan",
    "Samarqand",
    "Buxoro",
    "Xorazm",
    "Qashqadaryo",
    "Surxondaryo",
    "Jizzax",
    "Sirdaryo",
    "Navoiy",
    "Qoraqalpogʻiston Respublikasi",
];

const BACHELOR_DAYTIME_DIRECTIONS: &[&str] = &[
    "Jahon iqtisodiyoti va xalqaro iqtisodiy munosabatlar",
    "Tarix",
    "Xorijiy til va adabiyoti",
    "Boshlang‘ich ta‘lim",
    "Maktabgacha ta‘lim",
    "Psixologiya",
    "Maxsus pedagogika",
    "Iqtisodiyot",
    "Moliya va moliyaviy texnologiyalar",
    "Biznesni boshqarish",
    "Sanoat muhandisligi va menejmenti",
    "Kompyuter injiniringi",
    "Musiqa ta'limi",
    "Turizm va mehmondo’stlik",
    "Jurnalistika",
    "Amaliy matematika",
];

const MASTERS_DIRECTIONS: &[&str] = &[
    "Pedagogika",
    "Xorijiy til va adabiyoti",
    "Musiqa ta'limi va san'at",
    "Ta'lim muassasalari boshqaruvi",
    "Jurnalistika",
    "Ta'lim va tarbiya nazariyasi va metodikasi(boshlang'ich ta'lim)",
    "Ta'lim va tarbiya nazariyasi va metodikasi(Maktabgacha ta'lim)",
    "Jahon iqtisodiyoti",
    "Iqtisodiyot (tarmoqlar va sohalar bo'yicha)",
    "Ma'lumot ilmi (DATA SCIENCE)",
    "Turizm va mehmondo'stlik",
    "Amaliy matematika",
    "Kompyuter injiniringi",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EducationType {
    #[serde(rename = "Bakalavr kunduzgi")]
    BachelorDaytime,
    #[serde(rename = "Magistratura")]
    Masters,
}

impl EducationType {
    pub const ALL: [EducationType; 2] = [EducationType::BachelorDaytime, EducationType::Masters];

    pub fn label(&self) -> &'static str {
        match self {
            EducationType::BachelorDaytime => "Bakalavr kunduzgi",
            EducationType::Masters => "Magistratura",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn directions(&self) -> &'static [&'static str] {
        match self {
            EducationType::BachelorDaytime => BACHELOR_DAYTIME_DIRECTIONS,
            EducationType::Masters => MASTERS_DIRECTIONS,
        }
    }

    pub fn offers(&self, direction: &str) -> bool {
        self.directions().contains(&direction)
    }
}

pub fn is_known_region(region: &str) -> bool {
    REGIONS.contains(&region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for t in EducationType::ALL {
            assert_eq!(EducationType::from_label(t.label()), Some(t));
        }
        assert_eq!(EducationType::from_label(""), None);
        assert_eq!(EducationType::from_label("Sirtqi"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&EducationType::Masters).unwrap();
        assert_eq!(json, "\"Magistratura\"");
    }

    #[test]
    fn test_directions_are_filtered_by_type() {
        assert!(EducationType::BachelorDaytime.offers("Tarix"));
        assert!(!EducationType::Masters.offers("Tarix"));
        assert!(EducationType::Masters.offers("Pedagogika"));
        assert!(EducationType::BachelorDaytime.offers("Jurnalistika"));
        assert!(EducationType::Masters.offers("Jurnalistika"));
    }

    #[test]
    fn test_regions() {
        assert_eq!(REGIONS.len(), 14);
        assert!(is_known_region("Samarqand"));
        assert!(!is_known_region(""));
    }
}
