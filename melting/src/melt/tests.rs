//! Unit tests for the entry points and the recursive matcher.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface merge mistakes"
)]

use std::cell::RefCell;

use rstest::rstest;

use super::{melt, melt_with_filter};
use crate::Melt;
use crate::error::MeltError;
use crate::field::{FieldDescriptor, FieldKind};
use crate::filter::FieldFilter;
use crate::operand::{Operand, OperandKind};

#[derive(Debug, Clone, PartialEq, Melt)]
struct Inner {
    a: u8,
    b: String,
}

#[derive(Debug, Clone, PartialEq, Melt)]
struct Outer {
    first: u8,
    inner: Inner,
    last: u8,
}

#[derive(Debug, Clone, PartialEq, Melt)]
struct WrongInner {
    a: u8,
    b: f64,
}

#[derive(Debug, Clone, PartialEq, Melt)]
struct OuterWithWrongInner {
    first: u8,
    inner: WrongInner,
    last: u8,
}

/// Records every call it receives and approves all of them.
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(String, FieldKind, FieldKind, String)>>,
}

impl FieldFilter for Recorder {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        assert_eq!(source_field.name(), destination_field.name());
        self.calls.borrow_mut().push((
            source_field.name().to_owned(),
            source_field.kind(),
            destination_field.kind(),
            destination_field.path().to_string(),
        ));
        true
    }
}

fn outer(first: u8, a: u8, b: &str, last: u8) -> Outer {
    Outer {
        first,
        inner: Inner { a, b: b.to_owned() },
        last,
    }
}

#[rstest]
fn filter_sees_every_matched_pair_in_destination_order() {
    let source = outer(1, 2, "x", 3);
    let mut destination = outer(0, 0, "", 0);
    let recorder = Recorder::default();

    melt_with_filter(&source, &mut destination, &recorder).expect("melt succeeds");

    let calls = recorder.calls.into_inner();
    let expected = [
        ("first", FieldKind::Leaf, FieldKind::Leaf, "first"),
        ("inner", FieldKind::Record, FieldKind::Record, "inner"),
        ("a", FieldKind::Leaf, FieldKind::Leaf, "inner.a"),
        ("b", FieldKind::Leaf, FieldKind::Leaf, "inner.b"),
        ("last", FieldKind::Leaf, FieldKind::Leaf, "last"),
    ];
    assert_eq!(calls.len(), expected.len());
    for (call, (name, source_kind, destination_kind, path)) in calls.iter().zip(expected) {
        assert_eq!(call.0, name);
        assert_eq!(call.1, source_kind);
        assert_eq!(call.2, destination_kind);
        assert_eq!(call.3, path);
    }
    assert_eq!(destination, source);
}

#[rstest]
fn failure_leaves_earlier_fields_merged() {
    let source = OuterWithWrongInner {
        first: 1,
        inner: WrongInner { a: 2, b: 0.5 },
        last: 3,
    };
    let mut destination = outer(0, 0, "kept", 0);

    let err = melt(&source, &mut destination).expect_err("b has the wrong type");

    assert!(matches!(
        &err,
        MeltError::TypeMismatch {
            source_type: "f64",
            destination_type: "alloc::string::String",
            ..
        }
    ));
    assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("inner.b"));
    // `first` and `inner.a` ran before the failure, `last` never ran.
    assert_eq!(destination, outer(1, 2, "kept", 0));
}

#[rstest]
fn record_destination_rejects_leaf_source() {
    let mut destination = outer(0, 0, "", 0);
    let err = melt(&7_u8, &mut destination).expect_err("a leaf cannot fill a record");
    assert!(matches!(err, MeltError::TypeMismatch { source_type: "u8", .. }));
    assert_eq!(destination, outer(0, 0, "", 0));
}

#[rstest]
fn leaf_destination_rejects_record_source() {
    let source = outer(1, 2, "x", 3);
    let mut destination = 0_u8;
    let err = melt(&source, &mut destination).expect_err("a record cannot fill a leaf");
    assert!(matches!(err, MeltError::TypeMismatch { destination_type: "u8", .. }));
}

#[rstest]
#[case::owned(Operand::owned(0_u8), OperandKind::Owned)]
#[case::shared(Operand::Shared(&0_u8), OperandKind::Shared)]
fn destination_must_be_exclusive(#[case] destination: Operand<'static>, #[case] kind: OperandKind) {
    let err = melt(&1_u8, destination).expect_err("destination is not exclusive");
    assert_eq!(
        err,
        MeltError::NotAReference {
            operand: kind,
            type_name: "u8",
        }
    );
}

#[rstest]
#[case::owned(Operand::owned(3_u8))]
#[case::shared(Operand::Shared(&3_u8))]
fn sources_are_dereferenced_once(#[case] source: Operand<'static>) {
    let mut destination = 0_u8;
    melt(source, &mut destination).expect("melt succeeds");
    assert_eq!(destination, 3);
}

#[rstest]
fn exclusive_source_is_not_mutated() {
    let mut source = outer(1, 2, "x", 3);
    let mut destination = outer(0, 0, "", 0);
    melt(&mut source, &mut destination).expect("melt succeeds");
    assert_eq!(source, outer(1, 2, "x", 3));
    assert_eq!(destination, source);
}
