use super::*;
use crate::{builtin, Param, TypeSet};
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of(ty: &Mono) -> u64 {
    let mut hasher = DefaultHasher::new();
    ty.hash(&mut hasher);
    hasher.finish()
}

fn ds(params: Vec<Param>) -> Mono {
    Mono::DataShape(DataShape::new(params).unwrap())
}

#[test]
fn fixed_compares_with_integers() {
    assert_eq!(Mono::Fixed(10), 10u64);
    assert_ne!(Mono::Fixed(10), 11u64);
    assert_eq!(Mono::IntegerConstant(3), 3u64);
    assert_ne!(Mono::IntegerConstant(-3), 3u64);
    assert_ne!(Mono::Var, 0u64);
}

#[test]
fn string_constant_compares_with_str() {
    let ty = Mono::StringConstant("ms".into());
    assert_eq!(ty, "ms");
    assert_ne!(ty, "us");
    assert_ne!(builtin::string(), "string");
}

#[test]
fn equal_nodes_hash_equal() {
    let a = ds(vec![Param::Int(3), "int32".into()]);
    let b = ds(vec![Param::Int(3), "int".into()]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn temporal_timezones_are_identity() {
    assert_ne!(Mono::Time(None), Mono::Time(Some("UTC".into())));
    assert_ne!(Mono::Time(None), Mono::DateTime(None));
}

#[test]
fn option_rejects_dimensions() {
    assert!(Mono::option(Param::Int(3)).is_err());
    assert!(Mono::option(builtin::var()).is_err());
    let array = DataShape::new(vec![Param::Int(3), builtin::int32().into()]).unwrap();
    assert!(matches!(
        Mono::option(array),
        Err(DataShapeError::Construction(_))
    ));
    let bare = DataShape::wrap(builtin::int32()).unwrap();
    assert_eq!(Mono::option(bare).unwrap().to_string(), "?int32");
    assert_eq!(
        Mono::option(builtin::int32()).unwrap().to_string(),
        "?int32"
    );
}

#[test]
fn typevar_requires_capital() {
    assert!(Mono::typevar("N").is_ok());
    assert!(Mono::typevar("n").is_err());
    assert!(Mono::typevar("").is_err());
}

#[test]
fn kind_of_nodes() {
    assert_eq!(Mono::Fixed(3).kind(), Some(Kind::Dimension));
    assert_eq!(builtin::var().kind(), Some(Kind::Dimension));
    assert_eq!(Mono::Ellipsis(None).kind(), Some(Kind::Dimension));
    assert_eq!(builtin::int32().kind(), Some(Kind::Measure));
    assert_eq!(builtin::string().kind(), Some(Kind::Measure));
    assert_eq!(Mono::typevar("T").unwrap().kind(), None);
}

#[test]
fn shape_and_measure_of_bare_measure() {
    let ty = builtin::float32();
    assert!(ty.shape().is_empty());
    assert_eq!(ty.measure(), &ty);
}

#[test]
fn shape_and_measure_of_datashape() {
    let ty = ds(vec![Param::Int(5), "var".into(), "float32".into()]);
    assert_eq!(ty.shape(), &[Mono::Fixed(5), Mono::Var]);
    assert_eq!(ty.measure(), &builtin::float32());
}

#[test]
fn subarray_of_bare_measure() {
    let ty = builtin::int16();
    assert_eq!(ty.subarray(0).unwrap(), ty);
    assert_eq!(
        ty.subarray(1),
        Err(DataShapeError::Index(
            "Not enough dimensions in data shape to remove 1 leading dimensions.".into()
        ))
    );
}

#[test]
fn sigform_leaves_measures_alone() {
    assert_eq!(builtin::int8().sigform(), builtin::int8());
    let ty = ds(vec![Param::Int(5), Param::Int(3), "int8".into()]);
    assert_eq!(ty.sigform().to_string(), "I0 * I1 * int8");
}

#[test]
fn free_vars_in_order() {
    let n = Mono::typevar("N").unwrap();
    let t = Mono::typevar("T").unwrap();
    let rec = Record::new([("x", Param::from(t.clone()))]).unwrap();
    let ty = ds(vec![n.into(), Param::Int(3), rec.into()]);
    let names: Vec<_> = ty.free_vars().iter().map(|tv| tv.to_string()).collect();
    assert_eq!(names, ["N", "T"]);
    assert!(builtin::int32().free_vars().is_empty());
}

#[test]
fn free_vars_of_ellipsis_and_constraint() {
    let tv = TypeVar::new("Dims").unwrap();
    assert_eq!(Mono::Ellipsis(Some(tv.clone())).free_vars(), [tv]);
    assert!(Mono::Ellipsis(None).free_vars().is_empty());

    let numeric = TypeSet::new("numeric", [builtin::int32(), builtin::float64()]);
    let constraint = Implements::new(Mono::typevar("T").unwrap(), numeric).unwrap();
    assert_eq!(
        Mono::Implements(constraint).free_vars(),
        [TypeVar::new("T").unwrap()]
    );
}

#[test]
fn display_temporal_and_constants() {
    assert_eq!(builtin::date().to_string(), "date");
    assert_eq!(Mono::Time(Some("UTC".into())).to_string(), "time[tz='UTC']");
    assert_eq!(
        Mono::DateTime(Some("America/New_York".into())).to_string(),
        "datetime[tz='America/New_York']"
    );
    assert_eq!(Mono::StringConstant("it's".into()).to_string(), r"'it\'s'");
    assert_eq!(Mono::IntegerConstant(-4).to_string(), "-4");
    assert_eq!(Mono::Ellipsis(None).to_string(), "...");
    assert_eq!(
        Mono::Ellipsis(Some(TypeVar::new("Dims").unwrap())).to_string(),
        "Dims..."
    );
}

#[test]
fn display_record_quotes_odd_names() {
    let rec = Record::new([
        ("plain", Param::from("int32")),
        ("with space", Param::from("int32")),
        ("snake_case", Param::from("int32")),
    ])
    .unwrap();
    assert_eq!(
        Mono::Record(rec).to_string(),
        "{ plain : int32, 'with space' : int32, 'snake_case' : int32 }"
    );
}

#[test]
fn display_units() {
    let default = Units::new("m", None).unwrap();
    assert_eq!(Mono::Units(default).to_string(), "units['m']");
    let carrier = DataShape::wrap(builtin::int32()).unwrap();
    let custom = Units::new("s", Some(carrier)).unwrap();
    assert_eq!(Mono::Units(custom).to_string(), "units['s', int32]");
}

#[test]
fn as_views() {
    let rec = Mono::Record(Record::new([("a", Param::from("int8"))]).unwrap());
    assert!(rec.as_record().is_some());
    assert!(rec.as_datashape().is_none());
    assert!(builtin::int8().as_record().is_none());
}

#[test]
fn tag_matches_variant() {
    assert_eq!(builtin::int32().tag(), Tag::CType);
    assert_eq!(builtin::string().tag(), Tag::String);
    assert_eq!(Mono::Fixed(1).tag(), Tag::Fixed);
    assert_eq!(Mono::Option(Arc::new(builtin::int8())).tag(), Tag::Option);
}

#[test]
fn parameters_rebuild_the_node() {
    let samples = [
        Mono::Fixed(7),
        builtin::var(),
        builtin::int32(),
        builtin::complex128(),
        Mono::String(StringType::fixed_encoded(4, "ascii").unwrap()),
        Mono::DateTime(Some("UTC".into())),
        Mono::Units(Units::new("m", None).unwrap()),
        Mono::option("int16").unwrap(),
        ds(vec![Param::Int(3), "var".into(), "int32".into()]),
        Mono::Function(Function::new([Param::from("int32")], "float64".into()).unwrap()),
    ];
    for ty in samples {
        let rebuilt = Mono::from_parameters(ty.tag(), ty.parameters()).unwrap();
        assert_eq!(rebuilt, ty);
    }
}
