//! Parsing single cards into their JSON shape.

use rolodex_rfc::rfc::vcard::parse;
use serde_json::{Value, json};

fn parse_json(input: &str) -> Value {
    serde_json::to_value(parse(input).unwrap()).unwrap()
}

#[test_log::test]
fn required_properties_only() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "fn": { "params": {}, "value": "John Doe" },
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}

#[test]
fn structured_name() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Stevenson\r\nN:Stevenson;John;Philip,Paul;Dr.;Jr.,M.D.,A.C.P.\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "fn": { "params": {}, "value": "John Stevenson" },
            "n": {
                "params": {},
                "value": {
                    "surnames": ["Stevenson"],
                    "givenNames": ["John"],
                    "additionalNames": ["Philip", "Paul"],
                    "honorificPrefixes": ["Dr."],
                    "honorificSuffixes": ["Jr.", "M.D.", "A.C.P."],
                },
            },
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}

#[test]
fn gender() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nGENDER:M;Man\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "fn": { "params": {}, "value": "John Doe" },
            "gender": { "params": {}, "value": { "sex": "M", "identity": "Man" } },
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}

#[test]
fn address() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nADR:;;123 Main Street;Any Town;CA;91921-1234;U.S.A.\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "adr": [{
                "params": {},
                "value": {
                    "countryName": "U.S.A.",
                    "extendedAddress": "",
                    "locality": "Any Town",
                    "postOfficeBox": "",
                    "postalCode": "91921-1234",
                    "region": "CA",
                    "streetAddress": "123 Main Street",
                },
            }],
            "fn": { "params": {}, "value": "John Doe" },
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}

#[test]
fn quoted_type_list() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nTEL;VALUE=uri;PREF=1;TYPE=\"voice,home\":tel:+1-555-555-5555;ext=5555\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "fn": { "params": {}, "value": "John Doe" },
            "tel": [{
                "params": {
                    "pref": 1,
                    "type": ["voice", "home"],
                    "value": "uri",
                },
                "value": "tel:+1-555-555-5555;ext=5555",
            }],
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}

#[test]
fn extensions_are_flattened() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nitem1.X-SKYPE;X-SERVICE-TYPE=chat:jdoe\r\nEND:VCARD";

    assert_eq!(
        parse_json(input),
        json!([{
            "fn": { "params": {}, "value": "John Doe" },
            "version": { "params": {}, "value": "4.0" },
            "x-skype": [{
                "group": "item1",
                "params": { "X-SERVICE-TYPE": ["chat"] },
                "value": "jdoe",
            }],
        }])
    );
}

#[test]
fn property_names_ignore_case() {
    let input = "begin:vcard\r\nVersion:4.0\r\nfn:John Doe\r\nemail;type=HOME:john@example.com\r\nend:vcard";

    assert_eq!(
        parse_json(input),
        json!([{
            "email": [{ "params": { "type": ["home"] }, "value": "john@example.com" }],
            "fn": { "params": {}, "value": "John Doe" },
            "version": { "params": {}, "value": "4.0" },
        }])
    );
}
