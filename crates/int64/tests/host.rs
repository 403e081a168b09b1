use int64::host::{self, Heap, Host, Returned};
use int64::{Context, ErrorKind, Int64Value, Kind, Operand, Protocol};

#[test]
fn test_push_and_read() {
    let mut heap = Heap::new();

    let a = host::push_signed(&mut heap, -5).unwrap();
    let b = host::push_unsigned(&mut heap, u64::MAX).unwrap();

    assert_eq!(host::read_signed(&heap, Some(&a)), -5);
    assert_eq!(host::read_unsigned(&heap, Some(&a)), (-5i64) as u64);
    assert_eq!(host::read_unsigned(&heap, Some(&b)), u64::MAX);
    assert_eq!(host::read_signed(&heap, Some(&b)), -1);
    assert_eq!(heap.len(), 2);
}

#[test]
fn test_read_missing() {
    let mut heap = Heap::new();
    assert_eq!(host::read_signed(&heap, None), 0);
    assert_eq!(host::read_unsigned(&heap, None), 0);

    let handle = host::push_signed(&mut heap, 7).unwrap();
    assert_eq!(heap.release(handle), Some(Int64Value::signed(7)));
    assert_eq!(heap.release(handle), None);
    assert_eq!(host::read_signed(&heap, Some(&handle)), 0);
    assert!(heap.is_empty());
}

#[test]
fn test_constructors() {
    let mut heap = Heap::new();
    let cx = Context::new();

    let zero = host::new_signed(&mut heap, &cx, &[]).unwrap();
    assert_eq!(heap.resolve(&zero), Some(Int64Value::signed(0)));

    let a = host::new_unsigned(&mut heap, &cx, &["18446744073709551615".into()]).unwrap();
    assert_eq!(heap.resolve(&a), Some(Int64Value::unsigned(u64::MAX)));

    let value = heap.resolve(&a).unwrap();
    let b = host::new_signed(&mut heap, &cx, &[value.into()]).unwrap();
    assert_eq!(heap.resolve(&b), Some(Int64Value::signed(-1)));

    let c = host::new_signed(&mut heap, &cx, &[(-3.7).into()]).unwrap();
    assert_eq!(host::read_signed(&heap, Some(&c)), -3);

    let error = host::new_unsigned(&mut heap, &cx, &[Operand::Other("boolean")]).unwrap_err();
    assert_eq!(error.to_string(), "argument error type `boolean` to `unsigned`");

    let error = host::new_signed(&mut heap, &cx, &["123abc".into()]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "the string (length = 6) passed to `signed` is not a Signed64 string"
    );

    assert_eq!(heap.len(), 4);
}

#[test]
fn test_call_binds_values() {
    let mut heap = Heap::new();
    let cx = Context::new();

    let a = host::push_signed(&mut heap, i64::MAX).unwrap();
    let a = heap.resolve(&a).unwrap();

    let args = [Operand::from(a), Operand::from(1i64)];
    let returned = host::call(&mut heap, &cx, Kind::Signed, Protocol::Add, &args).unwrap();

    let sum = match returned {
        Returned::Handle(handle) => handle,
        returned => panic!("expected handle but got {returned:?}"),
    };

    assert_eq!(host::read_signed(&heap, Some(&sum)), i64::MIN);

    let args = [Operand::from(a), Operand::from(0i64)];
    let returned = host::call(&mut heap, &cx, Kind::Signed, Protocol::Lt, &args).unwrap();
    assert_eq!(returned, Returned::Bool(false));

    let args = [Operand::from(a)];
    let returned = host::call(&mut heap, &cx, Kind::Unsigned, Protocol::ToString, &args).unwrap();
    assert_eq!(
        returned,
        Returned::String(String::from("9223372036854775807"))
    );

    let returned = host::call(&mut heap, &cx, Kind::Unsigned, Protocol::Len, &args).unwrap();
    assert_eq!(returned, Returned::Size(8));
}

#[test]
fn test_allocation_limit() {
    let mut heap = Heap::with_limit(2);
    let cx = Context::new();

    let a = host::push_signed(&mut heap, 1).unwrap();
    host::push_unsigned(&mut heap, 2).unwrap();

    let error = host::push_unsigned(&mut heap, 3).unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorKind::Allocation {
            kind: Kind::Unsigned
        }
    ));
    assert_eq!(error.to_string(), "no memory to allocate Unsigned64");

    let args = [Operand::from(1i64), Operand::from(2i64)];
    let error = host::call(&mut heap, &cx, Kind::Signed, Protocol::Add, &args).unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::Allocation { .. }));

    heap.release(a);
    assert!(host::push_signed(&mut heap, 3).is_ok());
}
