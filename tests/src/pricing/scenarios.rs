use lustre_common::diamond::quote::format_money;
use lustre_common::{PredictionResult, PredictiveModel, RawInput, Rejection};
use lustre_core::{build_features, predict_and_format};

use super::{bundled_model, bundled_service};

/// Expected output of the bundled linear model for the reference stone:
/// 0.7 ct, 4.0 x 4.0 x 2.5 mm, Ideal, E, VS1.
const REFERENCE_PRICE_USD: f64 = 4090.0;

fn reference_stone() -> RawInput {
    RawInput::from_form(0.7, 4.0, 4.0, 2.5, "Ideal", "E", "VS1").unwrap()
}

#[test]
fn reference_stone_is_priced() {
    let service = bundled_service().unwrap();
    let result = service.quote(&reference_stone()).unwrap();

    assert!(!result.is_rejected());
    let quote = result.quote().copied().unwrap();
    assert!(
        (quote.price_usd - REFERENCE_PRICE_USD).abs() < 1e-6,
        "unexpected price: {}",
        quote.price_usd
    );
    assert_eq!(quote.price_sgd, quote.price_usd * 1.28);
    assert_eq!(format_money(quote.price_usd), "$4,090.00");
    assert_eq!(format_money(quote.price_sgd), "$5,235.20");
}

#[test]
fn default_form_is_priced_above_zero() {
    let service = bundled_service().unwrap();
    let quote = service
        .quote(&RawInput::default())
        .unwrap()
        .into_quote()
        .unwrap();
    assert!(quote.price_usd > 0.0, "default form priced at {}", quote.price_usd);
    assert!(quote.price_sgd > 0.0);
}

#[test]
fn every_stone_under_the_guard_is_priced_above_zero() {
    let service = bundled_service().unwrap();
    // Worst grades at the corners of the accepted carat and volume range.
    for carat in [0.0, 0.01, 5.0] {
        for (x, y, z) in [(0.0, 0.0, 0.0), (10.0, 10.0, 5.0)] {
            let raw = RawInput::from_form(carat, x, y, z, "Fair", "J", "I1").unwrap();
            let quote = service.quote(&raw).unwrap().into_quote().unwrap();
            assert!(
                quote.price_usd > 0.0,
                "{carat} ct, {x}x{y}x{z} priced at {}",
                quote.price_usd
            );
        }
    }
}

#[test]
fn reference_stone_feature_record() {
    let record = build_features(&reference_stone());

    assert_eq!(record.carat(), 0.7);
    assert_eq!(record.volume(), 40.0);
    for (name, value) in record.iter().skip(2) {
        let expected = if ["cut_Ideal", "color_E", "clarity_VS1"].contains(&name) {
            1.0
        } else {
            0.0
        };
        assert_eq!(value, expected, "column {name}");
    }
}

#[test]
fn heavy_stone_is_rejected_whatever_else() {
    let service = bundled_service().unwrap();
    for (cut, color, clarity) in [("Fair", "J", "I1"), ("Ideal", "D", "IF")] {
        let raw = RawInput::from_form(6.0, 1.0, 1.0, 1.0, cut, color, clarity).unwrap();
        assert_eq!(
            service.quote(&raw).unwrap(),
            PredictionResult::Rejected(Rejection::CaratAboveLimit {
                carat: 6.0,
                limit: 5.0
            })
        );
    }
}

#[test]
fn bulky_stone_is_rejected_by_volume() {
    let service = bundled_service().unwrap();
    let raw = RawInput::from_form(1.0, 10.0, 10.0, 10.0, "Premium", "G", "SI1").unwrap();
    assert_eq!(
        service.quote(&raw).unwrap(),
        PredictionResult::Rejected(Rejection::VolumeAboveLimit {
            volume: 1000.0,
            limit: 500.0
        })
    );
}

#[test]
fn guard_limits_are_inclusive_for_the_bundled_model() {
    let model = bundled_model().unwrap();

    let at_limits = RawInput {
        carat: 5.0,
        x: 10.0,
        y: 10.0,
        z: 5.0,
        ..RawInput::default()
    };
    let features = build_features(&at_limits);
    assert_eq!(features.volume(), 500.0);
    let result = predict_and_format(&at_limits, &features, model.as_ref()).unwrap();
    assert!(!result.is_rejected());

    let quote = result.into_quote().unwrap();
    assert_eq!(quote.price_usd, model.predict(&features).unwrap());
}

#[test]
fn invalid_category_never_reaches_the_model() {
    let err = RawInput::from_form(0.7, 4.0, 4.0, 2.5, "Ideal", "E", "VS3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid clarity 'VS3', expected one of: I1, SI2, SI1, VS2, VS1, VVS2, VVS1, IF"
    );
}

#[test]
fn better_grades_never_lower_the_price() {
    let service = bundled_service().unwrap();
    let price = |raw: RawInput| {
        service
            .quote(&raw)
            .unwrap()
            .quote()
            .map(|quote| quote.price_usd)
            .unwrap()
    };

    let base = reference_stone();
    let worse_color = RawInput {
        color: lustre_common::Color::J,
        ..base
    };
    let worse_clarity = RawInput {
        clarity: lustre_common::Clarity::I1,
        ..base
    };
    assert!(price(base) > price(worse_color));
    assert!(price(base) > price(worse_clarity));
}
