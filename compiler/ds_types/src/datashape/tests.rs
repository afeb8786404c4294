use super::*;
use crate::builtin;
use pretty_assertions::assert_eq;

fn ds(params: Vec<Param>) -> DataShape {
    DataShape::new(params).unwrap()
}

fn int32_array(dims: &[i64]) -> DataShape {
    let mut params: Vec<Param> = dims.iter().map(|&n| Param::from(n)).collect();
    params.push(builtin::int32().into());
    ds(params)
}

fn people() -> DataShape {
    let rec = Record::new([
        ("name", Param::from("string")),
        ("amount", Param::from("int32")),
        ("id", Param::from("int32")),
    ])
    .unwrap();
    ds(vec!["var".into(), rec.into()])
}

fn slice(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Index {
    Index::Slice(Slice::new(start, stop, step))
}

#[test]
fn construction_rejects_empty() {
    assert!(matches!(
        DataShape::new(vec![]),
        Err(DataShapeError::Construction(_))
    ));
}

#[test]
fn construction_rejects_single_string() {
    let err = DataShape::new(vec!["5 * int32".into()]).unwrap_err();
    assert!(err.to_string().contains("dshape(\"5 * int32\")"));
}

#[test]
fn measure_must_be_last() {
    let err = DataShape::new(vec!["int32".into(), Param::Int(5)]).unwrap_err();
    assert_eq!(
        err,
        DataShapeError::Construction(
            "only a measure can appear on the last position of a datashape, not `5`".into()
        )
    );
}

#[test]
fn dimensions_must_come_first() {
    let err = DataShape::new(vec![Param::Int(3), "int32".into(), "int32".into()]).unwrap_err();
    assert_eq!(
        err,
        DataShapeError::Construction(
            "only dimensions can appear before the last position of a datashape, not `int32` at position 1".into()
        )
    );
}

#[test]
fn typevars_fit_either_position() {
    let n = Mono::typevar("N").unwrap();
    let t = Mono::typevar("T").unwrap();
    let shape = ds(vec![n.into(), t.into()]);
    assert_eq!(shape.to_string(), "N * T");
    assert_eq!(shape.ndim(), 1);
}

#[test]
fn measure_only_datashape() {
    let shape = DataShape::wrap(builtin::int32()).unwrap();
    assert_eq!(shape.len(), 1);
    assert_eq!(shape.ndim(), 0);
    assert!(shape.shape().is_empty());
    assert_eq!(shape.to_string(), "int32");
}

#[test]
fn trailing_datashape_is_spliced() {
    let inner = int32_array(&[5]);
    let outer = ds(vec![Param::Int(3), inner.into()]);
    assert_eq!(outer, int32_array(&[3, 5]));
    assert_eq!(outer.len(), 3);
}

#[test]
fn laundering_aliases() {
    let a = ds(vec![Param::Int(3), "int".into()]);
    assert_eq!(a, int32_array(&[3]));
    assert_eq!(a.measure(), &builtin::int32());
}

#[test]
fn shape_and_measure() {
    let shape = ds(vec![Param::Int(5), "var".into(), "float32".into()]);
    assert_eq!(shape.shape(), &[Mono::Fixed(5), Mono::Var]);
    assert_eq!(shape.measure(), &builtin::float32());
    assert_eq!(shape.get(1), Some(&Mono::Var));
    assert_eq!(shape.get(3), None);
}

#[test]
fn name_is_not_identity() {
    let registry = TypeRegistry::new();
    let named = DataShape::named_in(&registry, "Triple", vec![Param::Int(3), builtin::int32().into()])
        .unwrap();
    assert_eq!(named.to_string(), "Triple");
    assert_eq!(named.name(), Some("Triple"));
    assert_eq!(named, int32_array(&[3]));
    assert_eq!(
        registry.lookup("Triple").unwrap(),
        Mono::DataShape(int32_array(&[3]))
    );
}

#[test]
fn named_collides_in_registry() {
    let registry = TypeRegistry::new();
    DataShape::named_in(&registry, "Pair", vec![Param::Int(2), builtin::int8().into()]).unwrap();
    assert_eq!(
        DataShape::named_in(&registry, "Pair", vec![Param::Int(2), builtin::int16().into()]),
        Err(DataShapeError::DuplicateName("Pair".into()))
    );
}

#[test]
fn debug_form() {
    assert_eq!(format!("{:?}", int32_array(&[5])), "dshape(\"5 * int32\")");
}

#[test]
fn subarray_drops_leading() {
    let shape = int32_array(&[1, 2, 3]);
    assert_eq!(shape.subarray(1).unwrap(), int32_array(&[2, 3]));
    assert_eq!(shape.subarray(2).unwrap(), int32_array(&[3]));
    assert_eq!(shape.subarray(3).unwrap(), int32_array(&[]));
    assert!(matches!(shape.subarray(4), Err(DataShapeError::Index(_))));
}

#[test]
fn sigform_replaces_dimensions() {
    let shape = ds(vec![Param::Int(5), "var".into(), "float64".into()]);
    let sig = shape.sigform();
    assert_eq!(sig.to_string(), "I0 * I1 * float64");
    assert_eq!(sig.measure(), shape.measure());
    assert_eq!(shape.to_string(), "5 * var * float64");
}

#[test]
fn subshape_int_drops_dimension() {
    assert_eq!(
        int32_array(&[5, 3]).subshape(&Index::Int(0)).unwrap(),
        int32_array(&[3])
    );
}

#[test]
fn subshape_slices() {
    let shape = ds(vec![Param::Int(5), Param::Int(3), "float32".into()]);
    let expect = ds(vec![Param::Int(3), Param::Int(3), "float32".into()]);
    assert_eq!(shape.subshape(&slice(Some(2), None, None)).unwrap(), expect);
    assert_eq!(shape.subshape(&slice(None, None, Some(2))).unwrap(), expect);
    assert!(matches!(
        shape.subshape(&slice(None, None, Some(0))),
        Err(DataShapeError::Index(_))
    ));
}

#[test]
fn subshape_slice_counts_bounds_as_written() {
    let shape = ds(vec![Param::Int(5), "int32".into()]);
    let count = |start, stop, step| shape.subshape(&slice(start, stop, step)).unwrap().to_string();
    assert_eq!(count(Some(2), Some(10), None), "8 * int32");
    assert_eq!(count(Some(-2), None, None), "7 * int32");
    assert_eq!(count(Some(0), Some(5), Some(2)), "3 * int32");
    assert_eq!(count(Some(4), Some(0), Some(-1)), "4 * int32");
    assert_eq!(count(None, None, Some(-1)), "0 * int32");
    assert_eq!(count(Some(4), Some(1), None), "0 * int32");
}

#[test]
fn subshape_var_slice_with_negative_start() {
    let shape = ds(vec![builtin::var().into(), "int32".into()]);
    assert_eq!(
        shape.subshape(&slice(Some(-2), Some(3), None)).unwrap().to_string(),
        "5 * int32"
    );
}

#[test]
fn subshape_var_slices() {
    let shape = people();
    assert_eq!(
        shape.subshape(&slice(Some(0), Some(3), None)).unwrap().to_string(),
        "3 * { name : string, amount : int32, id : int32 }"
    );
    assert_eq!(
        shape.subshape(&slice(None, None, None)).unwrap().to_string(),
        "var * { name : string, amount : int32, id : int32 }"
    );
}

#[test]
fn subshape_list_on_dimension() {
    let index = Index::List(vec![Index::Int(1), Index::Int(10), Index::Int(15)]);
    assert_eq!(
        people().subshape(&index).unwrap().to_string(),
        "3 * { name : string, amount : int32, id : int32 }"
    );
}

#[test]
fn subshape_record_projection() {
    let shape = people();
    assert_eq!(
        shape.subshape(&Index::Int(0)).unwrap().to_string(),
        "{ name : string, amount : int32, id : int32 }"
    );
    let index = Index::Tuple(vec![slice(Some(0), Some(7), Some(2)), "amount".into()]);
    assert_eq!(shape.subshape(&index).unwrap().to_string(), "4 * int32");
}

#[test]
fn subshape_field_lists_keep_requested_order() {
    let shape = people();
    let by_pos = Index::Tuple(vec![
        slice(None, None, None),
        Index::List(vec![Index::Int(0), Index::Int(2)]),
    ]);
    assert_eq!(
        shape.subshape(&by_pos).unwrap().to_string(),
        "var * { name : string, id : int32 }"
    );
    let by_name = Index::Tuple(vec![
        slice(None, None, None),
        Index::List(vec!["id".into(), "name".into()]),
    ]);
    assert_eq!(
        shape.subshape(&by_name).unwrap().to_string(),
        "var * { id : int32, name : string }"
    );
}

#[test]
fn subshape_record_slice() {
    let index = Index::Tuple(vec![Index::Int(0), slice(Some(1), None, None)]);
    assert_eq!(
        people().subshape(&index).unwrap().to_string(),
        "{ amount : int32, id : int32 }"
    );
}

#[test]
fn subshape_bare_record_by_name() {
    let rec = Record::new([("x", Param::from("int")), ("y", Param::from("int"))]).unwrap();
    let shape = DataShape::wrap(rec.into()).unwrap();
    assert_eq!(shape.subshape(&"x".into()).unwrap().to_string(), "int32");
    assert_eq!(
        shape.subshape(&"z".into()),
        Err(DataShapeError::UnknownField("z".into()))
    );
}

#[test]
fn subshape_multi_axis() {
    let shape = ds(vec![Param::Int(10), "var".into(), Param::Int(10), "int32".into()]);
    let index = Index::Tuple(vec![
        slice(Some(0), Some(5), None),
        slice(Some(0), Some(3), None),
        Index::Int(5),
    ]);
    assert_eq!(shape.subshape(&index).unwrap(), int32_array(&[5, 3]));
}

#[test]
fn subshape_nested_record_then_axis() {
    let rec = Record::new([("x", Param::from(int32_array(&[3])))]).unwrap();
    let shape = DataShape::wrap(rec.into()).unwrap();
    let index = Index::Tuple(vec!["x".into(), Index::Int(0)]);
    assert_eq!(shape.subshape(&index).unwrap(), int32_array(&[]));
}

#[test]
fn subshape_unsupported_forms() {
    let err = int32_array(&[5]).subshape(&"x".into()).unwrap_err();
    assert_eq!(
        err,
        DataShapeError::NotImplemented {
            datashape: "5 * int32".into(),
            index: "'x'".into(),
        }
    );
    assert!(matches!(
        int32_array(&[]).subshape(&Index::Int(0)),
        Err(DataShapeError::NotImplemented { .. })
    ));
}

#[test]
fn index_display() {
    let index = Index::Tuple(vec![
        slice(Some(0), Some(7), Some(2)),
        Index::List(vec![Index::Int(1), "id".into()]),
        slice(None, None, None),
    ]);
    assert_eq!(index.to_string(), "0:7:2, [1, 'id'], :");
}
