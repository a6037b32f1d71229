//! Structured phone number value with country selection

/// Maximum digits in an international number (E.164), dial code included
pub const MAX_PHONE_DIGITS: usize = 15;

/// A country offered by the phone field's country picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code, lowercase
    pub iso2: &'static str,
    /// Display name
    pub name: &'static str,
    /// International dial code without the leading `+`
    pub dial_code: &'static str,
    /// National number mask, `.` marks a digit slot
    pub mask: &'static str,
}

/// Countries available in the picker, in display order
pub const COUNTRIES: &[Country] = &[
    Country {
        iso2: "us",
        name: "United States",
        dial_code: "1",
        mask: "(...) ...-....",
    },
    Country {
        iso2: "ca",
        name: "Canada",
        dial_code: "1",
        mask: "(...) ...-....",
    },
    Country {
        iso2: "mx",
        name: "Mexico",
        dial_code: "52",
        mask: "... ... ....",
    },
    Country {
        iso2: "br",
        name: "Brazil",
        dial_code: "55",
        mask: "(..) .........",
    },
    Country {
        iso2: "gb",
        name: "United Kingdom",
        dial_code: "44",
        mask: ".... ......",
    },
    Country {
        iso2: "fr",
        name: "France",
        dial_code: "33",
        mask: ". .. .. .. ..",
    },
    Country {
        iso2: "de",
        name: "Germany",
        dial_code: "49",
        mask: ".... ........",
    },
    Country {
        iso2: "in",
        name: "India",
        dial_code: "91",
        mask: ".....-.....",
    },
    Country {
        iso2: "jp",
        name: "Japan",
        dial_code: "81",
        mask: ".. .... ....",
    },
    Country {
        iso2: "au",
        name: "Australia",
        dial_code: "61",
        mask: ". .... ....",
    },
];

impl Country {
    /// Look up a country by its ISO code (case-insensitive)
    pub fn find(iso2: &str) -> Option<&'static Country> {
        COUNTRIES
            .iter()
            .find(|country| country.iso2.eq_ignore_ascii_case(iso2))
    }

    /// Country used when no other is configured
    pub fn fallback() -> &'static Country {
        &COUNTRIES[0]
    }

    /// Position of this country in [`COUNTRIES`]
    pub fn index(&self) -> usize {
        COUNTRIES
            .iter()
            .position(|country| country.iso2 == self.iso2)
            .unwrap_or(0)
    }

    /// Country code shown on the picker button, e.g. `US +1`
    pub fn badge(&self) -> String {
        format!("{} +{}", self.iso2.to_ascii_uppercase(), self.dial_code)
    }
}

/// Phone number held by the phone field: a country plus national digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    country: &'static Country,
    national: String,
}

impl PhoneNumber {
    pub fn new(country: &'static Country) -> Self {
        Self {
            country,
            national: String::new(),
        }
    }

    pub fn country(&self) -> &'static Country {
        self.country
    }

    /// National digits typed so far
    pub fn national(&self) -> &str {
        &self.national
    }

    /// Append a digit. Non-digits and digits past the E.164 limit are ignored.
    /// Returns true if the value changed.
    pub fn push_digit(&mut self, c: char) -> bool {
        if !c.is_ascii_digit() {
            return false;
        }
        if self.country.dial_code.len() + self.national.len() >= MAX_PHONE_DIGITS {
            return false;
        }
        self.national.push(c);
        true
    }

    /// Remove the last national digit. Returns true if the value changed.
    pub fn pop_digit(&mut self) -> bool {
        self.national.pop().is_some()
    }

    /// Switch country, keeping the national digits that still fit
    pub fn set_country(&mut self, country: &'static Country) {
        self.country = country;
        let max_national = MAX_PHONE_DIGITS.saturating_sub(country.dial_code.len());
        self.national.truncate(max_national);
    }

    pub fn clear(&mut self) {
        self.national.clear();
    }

    /// Submitted value: dial code followed by national digits, or empty
    pub fn identifier(&self) -> String {
        if self.national.is_empty() {
            return String::new();
        }
        format!("{}{}", self.country.dial_code, self.national)
    }

    /// Formatted value as rendered in the field, e.g. `+1 (555) 123-4567`
    pub fn display(&self) -> String {
        let national = format_national(self.country.mask, &self.national);
        if national.is_empty() {
            format!("+{}", self.country.dial_code)
        } else {
            format!("+{} {}", self.country.dial_code, national)
        }
    }
}

/// Apply a mask to national digits. Literal mask characters are only emitted
/// while digits remain; digits beyond the mask are appended unformatted.
pub fn format_national(mask: &str, digits: &str) -> String {
    let mut out = String::with_capacity(mask.len());
    let mut remaining = digits.chars().peekable();

    for slot in mask.chars() {
        if remaining.peek().is_none() {
            break;
        }
        if slot == '.' {
            if let Some(digit) = remaining.next() {
                out.push(digit);
            }
        } else {
            out.push(slot);
        }
    }

    out.extend(remaining);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn us() -> &'static Country {
        Country::find("us").unwrap()
    }

    mod country {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_find_is_case_insensitive() {
            assert_eq!(Country::find("GB").unwrap().name, "United Kingdom");
            assert_eq!(Country::find("gb").unwrap().dial_code, "44");
        }

        #[test]
        fn test_find_unknown_returns_none() {
            assert!(Country::find("zz").is_none());
        }

        #[test]
        fn test_fallback_is_us() {
            assert_eq!(Country::fallback().iso2, "us");
        }

        #[test]
        fn test_index_matches_table_position() {
            for (i, country) in COUNTRIES.iter().enumerate() {
                assert_eq!(country.index(), i);
            }
        }

        #[test]
        fn test_badge() {
            assert_eq!(us().badge(), "US +1");
            assert_eq!(Country::find("de").unwrap().badge(), "DE +49");
        }
    }

    mod formatting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_partial_number_stops_before_literal() {
            assert_eq!(format_national("(...) ...-....", "555"), "(555");
            assert_eq!(format_national("(...) ...-....", "5551"), "(555) 1");
        }

        #[test]
        fn test_full_us_number() {
            assert_eq!(
                format_national("(...) ...-....", "5551234567"),
                "(555) 123-4567"
            );
        }

        #[test]
        fn test_overflow_digits_are_appended() {
            assert_eq!(format_national(".. ..", "123456"), "12 3456");
        }

        #[test]
        fn test_empty_digits() {
            assert_eq!(format_national("(...) ...-....", ""), "");
        }
    }

    mod phone_number {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_empty_identifier() {
            let phone = PhoneNumber::new(us());
            assert_eq!(phone.national(), "");
            assert_eq!(phone.identifier(), "");
            assert_eq!(phone.display(), "+1");
        }

        #[test]
        fn test_ten_digit_us_number() {
            let mut phone = PhoneNumber::new(us());
            for c in "5551234567".chars() {
                assert!(phone.push_digit(c));
            }
            assert_eq!(phone.identifier(), "15551234567");
            assert_eq!(phone.display(), "+1 (555) 123-4567");
        }

        #[test]
        fn test_non_digits_are_ignored() {
            let mut phone = PhoneNumber::new(us());
            assert!(!phone.push_digit('a'));
            assert!(!phone.push_digit('-'));
            assert!(!phone.push_digit(' '));
            assert_eq!(phone.national(), "");
        }

        #[test]
        fn test_length_is_capped() {
            let mut phone = PhoneNumber::new(us());
            for _ in 0..20 {
                phone.push_digit('9');
            }
            assert_eq!(phone.identifier().len(), MAX_PHONE_DIGITS);
        }

        #[test]
        fn test_pop_digit() {
            let mut phone = PhoneNumber::new(us());
            phone.push_digit('5');
            assert!(phone.pop_digit());
            assert!(!phone.pop_digit());
            assert_eq!(phone.identifier(), "");
        }

        #[test]
        fn test_set_country_keeps_digits_and_changes_dial_code() {
            let mut phone = PhoneNumber::new(us());
            for c in "2079460958".chars() {
                phone.push_digit(c);
            }
            phone.set_country(Country::find("gb").unwrap());
            assert_eq!(phone.identifier(), "442079460958");
            assert_eq!(phone.display(), "+44 2079 460958");
        }

        #[test]
        fn test_clear_keeps_country() {
            let mut phone = PhoneNumber::new(Country::find("fr").unwrap());
            phone.push_digit('6');
            phone.clear();
            assert_eq!(phone.national(), "");
            assert_eq!(phone.country().iso2, "fr");
        }
    }
}
