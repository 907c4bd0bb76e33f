//! Tests for Roman numeral validation and decoding

use rstest::rstest;

use numerus::domain::{decode_decimal, is_valid, validate, DomainError, Numeral};

#[rstest]
#[case("I")]
#[case("IV")]
#[case("XXX")]
#[case("XCIX")]
#[case("DCC")]
#[case("MMMCMXCIX")]
fn given_well_formed_text_when_validating_then_accepted(#[case] text: &str) {
    assert!(is_valid(text));
    assert_eq!(validate(text), Ok(()));
}

#[rstest]
#[case("IIII")]
#[case("IC")]
#[case("MZM")]
#[case("XMIX")]
#[case("VC")]
#[case("IIV")]
#[case("")]
#[case("iv")]
#[case("X X")]
fn given_malformed_text_when_validating_then_rejected(#[case] text: &str) {
    assert!(!is_valid(text));
    assert!(decode_decimal(text).is_err());
}

#[rstest]
#[case("MZM", DomainError::InvalidSymbol { symbol: 'Z', position: 1 })]
#[case("XIIIIV", DomainError::MalformedRun { symbol: 'I', count: 4 })]
#[case("VV", DomainError::MalformedRun { symbol: 'V', count: 2 })]
#[case("LLL", DomainError::MalformedRun { symbol: 'L', count: 3 })]
#[case("IC", DomainError::IllegalSubtraction { subtrahend: 'I', minuend: 'C' })]
#[case("IM", DomainError::IllegalSubtraction { subtrahend: 'I', minuend: 'M' })]
#[case("VX", DomainError::IllegalSubtraction { subtrahend: 'V', minuend: 'X' })]
#[case("IIX", DomainError::IllegalSubtraction { subtrahend: 'I', minuend: 'X' })]
#[case("", DomainError::Empty)]
fn given_malformed_text_when_validating_then_reports_reason(
    #[case] text: &str,
    #[case] expected: DomainError,
) {
    assert_eq!(validate(text), Err(expected));
}

#[rstest]
#[case("III", 3)]
#[case("XIV", 14)]
#[case("XCIX", 99)]
#[case("CDXLIV", 444)]
#[case("MCMLXXIII", 1973)]
#[case("MMMCMXCIX", 3999)]
fn given_valid_numeral_when_decoding_then_returns_value(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(decode_decimal(text).unwrap(), expected);
}

#[test]
fn given_numeral_when_parsing_then_keeps_text_and_runs() {
    let numeral: Numeral = "XXIV".parse().unwrap();
    assert_eq!(numeral.as_str(), "XXIV");
    assert_eq!(numeral.to_string(), "XXIV");
    assert_eq!(numeral.terms().len(), 3);
    assert_eq!(numeral.value(), 24);
}
