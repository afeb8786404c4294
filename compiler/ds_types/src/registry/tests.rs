use super::*;
use crate::{builtin, CType, DataShape, Param};
use pretty_assertions::assert_eq;

#[test]
fn builtins_are_seeded() {
    let registry = TypeRegistry::with_builtins();
    for name in [
        "bool", "int8", "int16", "int32", "int64", "uint8", "uint16", "uint32", "uint64",
        "float16", "float32", "float64", "complex[float32]", "complex[float64]", "void",
        "object", "char", "string", "var", "date", "time", "datetime", "bytes", "json", "null",
    ] {
        assert!(registry.contains(name), "missing built-in `{name}`");
    }
}

#[test]
fn object_is_pointer_sized() {
    let registry = TypeRegistry::with_builtins();
    let object = builtin::object();
    assert_eq!(registry.lookup("object").unwrap(), object);
    let Mono::CType(ctype) = object else {
        panic!("object is a scalar");
    };
    let pointer = u32::try_from(std::mem::size_of::<usize>()).unwrap();
    assert_eq!(ctype.itemsize(), pointer);
    assert_eq!(ctype.alignment(), pointer);
}

#[test]
fn aliases_resolve_to_canonical_instances() {
    let registry = TypeRegistry::with_builtins();
    assert_eq!(registry.lookup("int").unwrap(), builtin::int32());
    assert_eq!(registry.lookup("real").unwrap(), builtin::float64());
    assert_eq!(registry.lookup("double").unwrap(), builtin::float64());
    assert_eq!(registry.lookup("float").unwrap(), builtin::float32());
    assert_eq!(registry.lookup("complex").unwrap(), builtin::complex128());
    assert_eq!(registry.lookup("complex64").unwrap(), builtin::complex64());
    assert!(registry.lookup("intptr").unwrap().to_string().starts_with("int"));
}

#[test]
fn lookup_miss_is_unknown_type() {
    let registry = TypeRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(
        registry.lookup("int32"),
        Err(DataShapeError::UnknownType("int32".into()))
    );
}

#[test]
fn duplicate_names_are_rejected() {
    let registry = TypeRegistry::new();
    registry.register("cell", builtin::int8()).unwrap();
    assert_eq!(
        registry.register("cell", builtin::int16()),
        Err(DataShapeError::DuplicateName("cell".into()))
    );
    assert_eq!(registry.lookup("cell").unwrap(), builtin::int8());
}

#[test]
fn builtin_names_cannot_be_rebound() {
    let registry = TypeRegistry::with_builtins();
    assert!(matches!(
        registry.register("int32", builtin::int64()),
        Err(DataShapeError::DuplicateName(_))
    ));
    for keyword in ["var", "json"] {
        assert!(matches!(
            registry.register(keyword, builtin::int8()),
            Err(DataShapeError::DuplicateName(_))
        ));
    }
    assert_eq!(registry.lookup("var").unwrap(), Mono::Var);
    assert_eq!(registry.lookup("json").unwrap(), Mono::Json);
}

#[test]
fn names_are_sorted() {
    let registry = TypeRegistry::new();
    registry.register("b", builtin::int8()).unwrap();
    registry.register("a", builtin::int8()).unwrap();
    let names = registry.names();
    assert_eq!(names, [Arc::from("a"), Arc::from("b")]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn global_registration_is_visible_to_laundering() {
    let ctype = CType::register("registry_test_pixel", 3, 1).unwrap();
    assert_eq!(
        global().lookup("registry_test_pixel").unwrap(),
        Mono::CType(ctype.clone())
    );
    let shape = DataShape::new(vec![Param::Int(4), "registry_test_pixel".into()]).unwrap();
    assert_eq!(shape.measure(), &Mono::CType(ctype));
    assert!(CType::register("registry_test_pixel", 3, 1).is_err());
}

#[test]
fn concurrent_registration_binds_once() {
    let registry = TypeRegistry::new();
    let wins = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| registry.register("contended", builtin::int32()).is_ok()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&ok| ok)
            .count()
    });
    assert_eq!(wins, 1);
}
