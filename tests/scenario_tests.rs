//! End-to-end scenarios across schemes: canonical validation results,
//! error kinds, presentation formats, and cross-conversions.

use idnum::ValidationError::*;
use idnum::{au, cusip, ee, fr, gb, imo, isin};

// ---------------------------------------------------------------------------
// Australia
// ---------------------------------------------------------------------------

#[test]
fn abn_round_trip() {
    assert_eq!(au::abn::validate("83 914 571 673").unwrap(), "83914571673");
    assert_eq!(au::abn::validate("99 999 999 999"), Err(InvalidChecksum));
    assert_eq!(au::abn::format("51824753556"), "51 824 753 556");
}

#[test]
fn tfn_round_trip() {
    assert_eq!(au::tfn::validate("123 456 782").unwrap(), "123456782");
    assert_eq!(au::tfn::validate("999 999 999"), Err(InvalidChecksum));
    assert_eq!(au::tfn::format("123456782"), "123 456 782");
}

#[test]
fn acn_extends_to_abn() {
    let abn = au::acn::to_abn("002 724 334").unwrap();
    assert_eq!(abn, "43002724334");
    assert_eq!(au::abn::validate(&abn).unwrap(), abn);
}

// ---------------------------------------------------------------------------
// France
// ---------------------------------------------------------------------------

#[test]
fn siren_and_tva() {
    assert_eq!(fr::siren::validate("404 833 048").unwrap(), "404833048");
    assert_eq!(fr::siren::validate("404833047"), Err(InvalidChecksum));
    assert_eq!(fr::siren::to_tva("443 121 975").unwrap(), "46 443 121 975");
    assert_eq!(fr::tva::validate("46 443 121 975").unwrap(), "46443121975");
}

#[test]
fn nif_component_rules() {
    assert_eq!(fr::nif::validate("0701987765432").unwrap(), "0701987765432");
    assert_eq!(fr::nif::validate("9701987765432"), Err(InvalidComponent));
    assert_eq!(fr::nif::validate("070198776543"), Err(InvalidLength));
    assert_eq!(fr::nif::validate("07019877654321"), Err(InvalidLength));
}

// ---------------------------------------------------------------------------
// Securities
// ---------------------------------------------------------------------------

#[test]
fn sedol_to_isin() {
    assert_eq!(gb::sedol::validate("B15KXQ8").unwrap(), "B15KXQ8");
    assert_eq!(gb::sedol::validate("B15KXQ7"), Err(InvalidChecksum));
    let gb_isin = gb::sedol::to_isin("B15KXQ8").unwrap();
    assert_eq!(gb_isin, "GB00B15KXQ89");
    assert!(isin::is_valid(&gb_isin));
    // The embedded body is the original SEDOL.
    assert_eq!(&gb_isin[4..11], "B15KXQ8");
}

#[test]
fn cusip_to_isin() {
    assert_eq!(cusip::to_isin("91324PAE2").unwrap(), "US91324PAE25");
    assert_eq!(cusip::validate("DUS0421CN"), Err(InvalidChecksum));
}

// ---------------------------------------------------------------------------
// Ships
// ---------------------------------------------------------------------------

#[test]
fn imo_prefix_handling() {
    assert_eq!(imo::validate("IMO 9319466").unwrap(), "9319466");
    assert_eq!(imo::format("8814275"), "IMO 8814275");
    assert_eq!(imo::validate("8814274"), Err(InvalidChecksum));
}

// ---------------------------------------------------------------------------
// Argentina
// ---------------------------------------------------------------------------

#[test]
fn cbu_block_checks() {
    let valid = "2850590940090418135201";
    assert_eq!(idnum::ar::cbu::validate(valid).unwrap(), valid);
    assert_eq!(idnum::ar::cbu::format(valid), "28505909 40090418135201");
    // Either embedded check digit failing is a checksum error.
    assert_eq!(
        idnum::ar::cbu::validate("2850590440090418135201"),
        Err(InvalidChecksum)
    );
    assert_eq!(
        idnum::ar::cbu::validate("2850590940090418135209"),
        Err(InvalidChecksum)
    );
}

// ---------------------------------------------------------------------------
// Estonia
// ---------------------------------------------------------------------------

#[test]
fn registrikood_leading_digit() {
    assert_eq!(ee::registrikood::validate("12345678").unwrap(), "12345678");
    assert_eq!(ee::registrikood::validate("32345674"), Err(InvalidComponent));
}
