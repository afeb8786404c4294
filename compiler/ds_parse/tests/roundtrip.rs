//! Property tests: every generated type renders to text that parses back
//! to an equal type, and rebuilds from its own parameters.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ds_parse::parse;
use ds_types::{
    builtin, DataShape, Field, Function, Mono, Param, Record, StringOptions, StringType, Tuple,
    TypeVar, Units,
};
use proptest::prelude::*;

fn scalar_strategy() -> impl Strategy<Value = Mono> {
    prop::sample::select(vec![
        builtin::bool_(),
        builtin::int8(),
        builtin::int16(),
        builtin::int32(),
        builtin::int64(),
        builtin::uint8(),
        builtin::uint64(),
        builtin::float32(),
        builtin::float64(),
        builtin::complex64(),
        builtin::complex128(),
        builtin::object(),
        builtin::bytes(),
        builtin::json(),
        builtin::null(),
        builtin::date(),
    ])
}

fn string_strategy() -> impl Strategy<Value = Mono> {
    (
        prop::option::of(1u64..200),
        prop::sample::select(vec!["A", "U8", "U16", "U32", "ascii", "utf-16"]),
    )
        .prop_map(|(fixlen, encoding)| {
            let options = StringOptions {
                fixlen,
                encoding: Some(encoding),
            };
            Mono::String(StringType::with_options(&options).unwrap())
        })
}

fn timezone_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::string::string_regex("[A-Za-z_/]{1,12}").expect("valid regex"))
}

fn temporal_strategy() -> impl Strategy<Value = Mono> {
    prop_oneof![
        timezone_strategy().prop_map(|tz| Mono::Time(tz.map(Into::into))),
        timezone_strategy().prop_map(|tz| Mono::DateTime(tz.map(Into::into))),
    ]
}

fn units_strategy() -> impl Strategy<Value = Mono> {
    (
        prop::string::string_regex("[a-z]{1,4}").expect("valid regex"),
        prop::option::of(scalar_strategy()),
    )
        .prop_map(|(unit, carrier)| {
            let carrier = carrier.map(|ty| DataShape::wrap(ty).unwrap());
            Mono::Units(Units::new(unit, carrier).unwrap())
        })
}

fn typevar_strategy() -> impl Strategy<Value = TypeVar> {
    prop::string::string_regex("[A-Z][a-z0-9]{0,3}")
        .expect("valid regex")
        .prop_map(|name| TypeVar::new(name).unwrap())
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_ ']{0,8}").expect("valid regex")
}

fn leaf_strategy() -> impl Strategy<Value = Mono> {
    prop_oneof![
        4 => scalar_strategy(),
        2 => string_strategy(),
        1 => temporal_strategy(),
        1 => units_strategy(),
        1 => typevar_strategy().prop_map(Mono::TypeVar),
    ]
}

fn dim_strategy() -> impl Strategy<Value = Mono> {
    prop_oneof![
        4 => (0u64..100).prop_map(Mono::Fixed),
        2 => Just(Mono::Var),
        1 => typevar_strategy().prop_map(Mono::TypeVar),
        1 => Just(Mono::Ellipsis(None)),
        1 => typevar_strategy().prop_map(|tv| Mono::Ellipsis(Some(tv))),
    ]
}

/// Dimensions over `measure`; with no dimensions the measure stays bare.
fn datashape_over(measure: BoxedStrategy<Mono>) -> BoxedStrategy<Mono> {
    (prop::collection::vec(dim_strategy(), 0..3), measure)
        .prop_map(|(dims, measure)| {
            if dims.is_empty() {
                return measure;
            }
            let mut params: Vec<Param> = dims.into_iter().map(Param::Type).collect();
            params.push(Param::Type(measure));
            Mono::DataShape(DataShape::new(params).unwrap())
        })
        .boxed()
}

fn measure_strategy() -> BoxedStrategy<Mono> {
    leaf_strategy()
        .prop_recursive(4, 32, 4, |inner| {
            let ds = datashape_over(inner.clone());
            prop_oneof![
                inner.prop_map(|ty| Mono::option(ty).unwrap()),
                prop::collection::vec((field_name_strategy(), ds.clone()), 0..4).prop_map(
                    |fields| {
                        let fields = fields.into_iter().map(|(name, ty)| Field::new(name, ty));
                        Mono::Record(Record::from_fields(fields).unwrap())
                    }
                ),
                prop::collection::vec(ds.clone(), 0..4).prop_map(|items| {
                    Mono::Tuple(Tuple::new(items.into_iter().map(Param::Type)).unwrap())
                }),
                (prop::collection::vec(ds.clone(), 0..3), ds).prop_map(|(args, ret)| {
                    let args = args.into_iter().map(Param::Type);
                    Mono::Function(Function::new(args, Param::Type(ret)).unwrap())
                }),
            ]
        })
        .boxed()
}

fn type_strategy() -> BoxedStrategy<Mono> {
    datashape_over(measure_strategy())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn text_round_trip(ty in type_strategy()) {
        let text = ty.to_string();
        let parsed = parse(&text);
        prop_assert!(parsed.is_ok(), "failed to parse {text:?}: {parsed:?}");
        prop_assert_eq!(parsed.unwrap(), ty);
    }

    #[test]
    fn rendering_is_stable(ty in type_strategy()) {
        let text = ty.to_string();
        prop_assert_eq!(parse(&text).unwrap().to_string(), text);
    }

    #[test]
    fn option_wraps_only_measures(ty in type_strategy()) {
        let wrapped = Mono::option(ty.clone());
        prop_assert_eq!(wrapped.is_ok(), ty.shape().is_empty(), "option over {}", ty);
        if let Ok(option) = wrapped {
            prop_assert_eq!(parse(&option.to_string()).unwrap(), option);
        }
    }

    #[test]
    fn parameter_round_trip(ty in type_strategy()) {
        let rebuilt = Mono::from_parameters(ty.tag(), ty.parameters()).unwrap();
        prop_assert_eq!(rebuilt, ty);
    }
}
