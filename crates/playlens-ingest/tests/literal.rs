//! Literal decoder properties.

use playlens_ingest::{decode_cell, decode_literal, encode_cell};
use playlens_model::CellValue;
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    let leaf = prop_oneof![
        Just(CellValue::Missing),
        any::<bool>().prop_map(CellValue::Bool),
        any::<i64>().prop_map(CellValue::Int),
        (prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE | prop::num::f64::NORMAL)
            .prop_map(CellValue::Float),
        "[a-zA-Z0-9 ,:'\"\\[\\]{}-]{0,12}".prop_map(CellValue::Text),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(CellValue::List),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4).prop_map(CellValue::Record),
        ]
    })
}

proptest! {
    #[test]
    fn encode_then_decode_is_identity(value in cell_strategy()) {
        let encoded = encode_cell(&value);
        prop_assert_eq!(decode_literal(&encoded), Some(value));
    }

    #[test]
    fn decode_never_panics_and_settles_after_one_pass(s in ".{0,40}") {
        let once = decode_cell(CellValue::Text(s));
        // Decoded output that is not itself a further-encoded string is a
        // fixed point.
        if !matches!(once, CellValue::Text(_)) {
            let twice = decode_cell(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}

#[test]
fn plain_strings_pass_through_unchanged() {
    assert_eq!(
        decode_cell(CellValue::Text("hello".into())),
        CellValue::Text("hello".into())
    );
    assert_eq!(
        decode_cell(CellValue::Text("Free to Play".into())),
        CellValue::Text("Free to Play".into())
    );
}

#[test]
fn encoded_list_decodes_to_list() {
    assert_eq!(
        decode_cell(CellValue::Text("[1, 2, 3]".into())),
        CellValue::List(vec![CellValue::Int(1), CellValue::Int(2), CellValue::Int(3)])
    );
}
