use super::*;
use crate::{builtin, CType, Param};
use pretty_assertions::assert_eq;
use smallvec::smallvec;

fn ds(params: Vec<Param>) -> Mono {
    Mono::DataShape(DataShape::new(params).unwrap())
}

#[test]
fn fixed_array_of_scalars() {
    let layout = to_native_layout(&ds(vec![Param::Int(5), Param::Int(3), "float32".into()])).unwrap();
    assert_eq!(
        layout,
        NativeLayout {
            shape: smallvec![Extent::Fixed(5), Extent::Fixed(3)],
            element: ElementDescriptor::Scalar(ScalarKind::Float32),
        }
    );
    assert_eq!(layout.to_string(), "(5, 3) float32");
}

#[test]
fn typevar_dimension_is_a_wildcard() {
    let n = Mono::typevar("N").unwrap();
    let layout = to_native_layout(&ds(vec![n.into(), "int8".into()])).unwrap();
    assert_eq!(layout.shape.as_slice(), &[Extent::Any]);
    assert_eq!(layout.to_string(), "(-1,) int8");
}

#[test]
fn var_dimension_is_incompatible() {
    assert!(matches!(
        to_native_layout(&ds(vec!["var".into(), "int32".into()])),
        Err(DataShapeError::IncompatibleLayout(_))
    ));
}

#[test]
fn strings() {
    let element = |s: StringType| to_native_element(&Mono::String(s)).unwrap();
    assert_eq!(element(StringType::new()), ElementDescriptor::VarString);
    assert_eq!(element(StringType::fixed(30)), ElementDescriptor::Unicode(30));
    assert_eq!(
        element(StringType::fixed_encoded(30, "ascii").unwrap()),
        ElementDescriptor::Bytes(30)
    );
    assert_eq!(ElementDescriptor::Unicode(30).itemsize(), 120);
}

#[test]
fn char_is_one_byte() {
    assert_eq!(
        to_native_element(&builtin::char()).unwrap(),
        ElementDescriptor::Bytes(1)
    );
}

#[test]
fn temporal_resolutions() {
    assert_eq!(
        to_native_element(&builtin::date()).unwrap().to_string(),
        "datetime64[D]"
    );
    assert_eq!(
        to_native_element(&builtin::datetime()).unwrap().to_string(),
        "datetime64[us]"
    );
    assert!(to_native_element(&builtin::time()).is_err());
}

#[test]
fn records_become_structs() {
    let rec = Record::new([("x", Param::from("int32")), ("y", Param::from("float64"))]).unwrap();
    let element = to_native_element(&Mono::Record(rec.clone())).unwrap();
    assert_eq!(element.to_string(), "[('x', int32), ('y', float64)]");
    assert_eq!(element.itemsize(), 12);
    assert_eq!(from_native_layout(&[], &element).unwrap(), Mono::Record(rec));
}

#[test]
fn record_fields_with_dimensions_are_incompatible() {
    let inner = DataShape::new(vec![Param::Int(3), "int32".into()]).unwrap();
    let rec = Record::new([("xs", Param::from(inner))]).unwrap();
    assert!(matches!(
        to_native_element(&Mono::Record(rec)),
        Err(DataShapeError::IncompatibleLayout(_))
    ));
}

#[test]
fn unknown_ctype_is_incompatible() {
    let odd = Mono::CType(CType::new("int24", 3, 1));
    assert!(matches!(
        to_native_element(&odd),
        Err(DataShapeError::IncompatibleLayout(_))
    ));
}

#[test]
fn from_layout_wraps_fixed_dimensions() {
    let element = ElementDescriptor::Scalar(ScalarKind::Int64);
    assert_eq!(
        from_native_layout(&[Extent::Fixed(4)], &element).unwrap().to_string(),
        "4 * int64"
    );
    assert_eq!(from_native_layout(&[], &element).unwrap(), builtin::int64());
    assert!(from_native_layout(&[Extent::Any], &element).is_err());
}

#[test]
fn from_layout_strings_and_times() {
    assert_eq!(
        from_native_layout(&[], &ElementDescriptor::Unicode(30)).unwrap().to_string(),
        "string[30, 'U32']"
    );
    assert_eq!(
        from_native_layout(&[], &ElementDescriptor::Bytes(4)).unwrap().to_string(),
        "string[4, 'A']"
    );
    assert_eq!(
        from_native_layout(&[], &ElementDescriptor::VarString).unwrap(),
        builtin::string()
    );
    for unit in [TimeUnit::Year, TimeUnit::Month, TimeUnit::Week, TimeUnit::Day] {
        assert_eq!(
            from_native_layout(&[], &ElementDescriptor::DateTime64(Some(unit))).unwrap(),
            builtin::date()
        );
    }
    assert_eq!(
        from_native_layout(&[], &ElementDescriptor::DateTime64(Some(TimeUnit::Nanosecond))).unwrap(),
        builtin::datetime()
    );
    assert_eq!(
        from_native_layout(&[], &ElementDescriptor::DateTime64(None)).unwrap(),
        builtin::datetime()
    );
}

#[test]
fn complex_names_resolve_through_aliases() {
    let element = ElementDescriptor::Scalar(ScalarKind::Complex64);
    assert_eq!(from_native_layout(&[], &element).unwrap(), builtin::complex64());
}

#[test]
fn layout_round_trip() {
    let rec = Record::new([("id", Param::from("int64")), ("score", Param::from("float32"))]).unwrap();
    let ty = ds(vec![Param::Int(10), Param::Int(2), rec.into()]);
    let layout = to_native_layout(&ty).unwrap();
    assert_eq!(from_native_layout(&layout.shape, &layout.element).unwrap(), ty);
}
