use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Language {
    English => "en",
    Portuguese => "pt",
    Spanish => "es",
    Danish => "da",
});

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

str_enum!(HypoCategory {
    Onset => "hypo-onset",
    Peak => "hypo-peak",
    Duration => "hypo-duration",
    IncreaseFactor => "hypo-increase-factor",
    DecreaseFactor => "hypo-decrease-factor",
});

impl HypoCategory {
    /// All five hypoglycaemia category codes.
    pub fn all() -> &'static [HypoCategory] {
        &[
            Self::Onset,
            Self::Peak,
            Self::Duration,
            Self::IncreaseFactor,
            Self::DecreaseFactor,
        ]
    }
}

/// Pharmacokinetic class of an insulin. Unknown labels map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PkClass {
    RapidActing,
    LongActing,
    #[serde(other)]
    Other,
}

impl PkClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RapidActing => "rapid-acting",
            Self::LongActing => "long-acting",
            Self::Other => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_round_trip() {
        for (variant, s) in [
            (Language::English, "en"),
            (Language::Portuguese, "pt"),
            (Language::Spanish, "es"),
            (Language::Danish, "da"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Language::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn hypo_category_codes() {
        let codes: Vec<&str> = HypoCategory::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "hypo-onset",
                "hypo-peak",
                "hypo-duration",
                "hypo-increase-factor",
                "hypo-decrease-factor",
            ]
        );
    }

    #[test]
    fn unknown_category_code_rejected() {
        let err = HypoCategory::from_str("hypo-severity").unwrap_err();
        assert!(err.to_string().contains("hypo-severity"));
    }

    #[test]
    fn language_serializes_as_code() {
        let json = serde_json::to_string(&Language::Danish).unwrap();
        assert_eq!(json, "\"da\"");
    }

    #[test]
    fn pk_class_unknown_label_is_other() {
        let class: PkClass = serde_json::from_str("\"intermediate-acting\"").unwrap();
        assert_eq!(class, PkClass::Other);
        let class: PkClass = serde_json::from_str("\"rapid-acting\"").unwrap();
        assert_eq!(class, PkClass::RapidActing);
    }
}
