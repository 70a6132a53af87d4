use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::{Field, PHONE_NUMBER_UTIL};

use super::region_code::RegionCode;

static ONCE: std::sync::Once = std::sync::Once::new();

fn init_logger() {
    ONCE.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn regions() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        RegionCode::us(),
        RegionCode::gb(),
        RegionCode::de(),
        RegionCode::fr(),
        RegionCode::it(),
    ])
}

#[test]
fn fields_rejoin_in_input_order() {
    init_logger();
    for (text, region) in [
        ("1120148524", RegionCode::de()),
        ("1100891234567", RegionCode::de()),
        ("1010288*676505551212", RegionCode::us()),
        ("*6716505551212", RegionCode::us()),
    ] {
        let number = PHONE_NUMBER_UTIL.parse(text, region, None).unwrap();
        assert_eq!(number.to_string(), text);
        let reparsed = PHONE_NUMBER_UTIL
            .parse(&number.format("default", false), region, None)
            .unwrap();
        assert_eq!(reparsed.to_string(), text);
    }
}

proptest! {
    #[test]
    fn digits_only_input_rejoins(digits in "[0-9]{1,16}", region in regions()) {
        init_logger();
        let number = PHONE_NUMBER_UTIL.parse(&digits, region, None).unwrap();
        prop_assert_eq!(number.to_string(), digits);
    }

    #[test]
    fn dialed_characters_survive_parsing(text in "[0-9+*#]{1,16}", region in regions()) {
        init_logger();
        let number = PHONE_NUMBER_UTIL.parse(&text, region, None).unwrap();
        prop_assert_eq!(number.to_string(), text);
    }

    #[test]
    fn formatted_numbers_parse_back(digits in "[0-9]{1,16}", region in regions()) {
        init_logger();
        let number = PHONE_NUMBER_UTIL.parse(&digits, region, None).unwrap();
        let formatted = number.format("default", false);
        let reparsed = PHONE_NUMBER_UTIL.parse(&formatted, region, None).unwrap();

        let fields = |number: &crate::ParsedNumber| {
            number.fields().map(|(field, _)| field).collect::<BTreeSet<Field>>()
        };
        prop_assert_eq!(fields(&number), fields(&reparsed));
        prop_assert_eq!(reparsed.to_string(), digits);
    }

    #[test]
    fn number_matches_itself(digits in "[0-9]{1,16}", region in regions()) {
        init_logger();
        let number = PHONE_NUMBER_UTIL.parse(&digits, region, None).unwrap();
        prop_assert_eq!(PHONE_NUMBER_UTIL.compare(&number, &number), 100);
    }
}
