//! Resolution table properties across every instruction set

use lanewise_core::*;
use std::any::TypeId;

fn same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Register, mask and lane count of `T` agree with each other and with the runtime table
fn check_entry<T, I>()
where
    T: SimdTraits<I>,
    I: Isa,
{
    let lanes = <T as SimdTraits<I>>::SIZE;
    assert!(lanes >= 1);
    assert_eq!(lanes, <SimdType<T, I> as Register>::LANES);
    assert_eq!(lanes, <SimdBoolType<T, I> as Mask>::LANES);
    assert_eq!(lanes, lane_count::<T, I>());
    assert_eq!(lanes, I::SET.lanes(T::SCALAR));
    assert_eq!(lanes, ResolutionTable::for_set(I::SET).lanes(T::SCALAR));

    // Round trip through the reverse resolver
    assert!(same::<RevertSimdType<SimdType<T, I>, I>, T>());
    assert!(same::<SimdType<RevertSimdType<SimdType<T, I>, I>, I>, SimdType<T, I>>());
    assert_eq!(<SimdType<T, I> as RevertSimdTraits<I>>::SIZE, lanes);

    // Scalar fallback pairs the kind with itself and a plain bool mask
    if lanes == 1 {
        assert!(same::<SimdType<T, I>, T>());
        assert!(same::<SimdBoolType<T, I>, bool>());
    }
}

fn check_isa<I: Isa>() {
    check_entry::<i32, I>();
    check_entry::<i64, I>();
    check_entry::<f32, I>();
    check_entry::<f64, I>();
}

fn lanes_of<I: Isa>() -> [usize; 4] {
    [
        lane_count::<i32, I>(),
        lane_count::<i64, I>(),
        lane_count::<f32, I>(),
        lane_count::<f64, I>(),
    ]
}

#[test]
fn test_table_is_total_for_every_isa() {
    check_isa::<NoSimd>();
    check_isa::<Sse2>();
    check_isa::<Avx>();
    check_isa::<Neon>();
    check_isa::<Neon64>();
    check_isa::<NativeIsa>();
}

#[test]
fn test_scalar_fallback() {
    assert!(same::<SimdType<i32, NoSimd>, i32>());
    assert!(same::<SimdType<i64, NoSimd>, i64>());
    assert!(same::<SimdType<f32, NoSimd>, f32>());
    assert!(same::<SimdType<f64, NoSimd>, f64>());
    assert_eq!(lanes_of::<NoSimd>(), [1, 1, 1, 1]);
}

#[test]
fn test_tier_scaling() {
    assert_eq!(lanes_of::<Avx>(), [8, 4, 8, 4]);
    assert_eq!(lanes_of::<Sse2>(), [4, 2, 4, 2]);
    assert_eq!(lanes_of::<Neon64>(), [4, 2, 4, 2]);
    assert_eq!(lanes_of::<Neon>(), [4, 2, 4, 1]);

    assert!(same::<SimdType<f32, Avx>, Batch<f32, 8>>());
    assert!(same::<SimdType<f32, Sse2>, Batch<f32, 4>>());
    assert!(same::<SimdBoolType<i64, Avx>, BatchBool<i64, 4>>());
}

#[test]
fn test_native_isa_follows_build() {
    assert_eq!(<NativeIsa as Isa>::SET, InstructionSet::compiled());
    assert_eq!(
        lanes_of::<NativeIsa>().to_vec(),
        ScalarKind::ALL
            .iter()
            .map(|&kind| InstructionSet::compiled().lanes(kind))
            .collect::<Vec<_>>()
    );
    #[cfg(feature = "force-scalar")]
    assert_eq!(lanes_of::<NativeIsa>(), [1, 1, 1, 1]);
}

#[test]
fn test_native_defaults() {
    // Default type parameters pick the build's instruction set
    assert!(same::<SimdType<f32>, SimdType<f32, NativeIsa>>());
    assert!(same::<SimdBoolType<i32>, SimdBoolType<i32, NativeIsa>>());
    assert!(same::<RevertSimdType<SimdType<f64>>, f64>());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_register_ops_match_lane_ops(a in prop::array::uniform8(any::<i32>()), b in prop::array::uniform8(any::<i32>())) {
            let va = <SimdType<i32, Avx> as Register>::load(&a);
            let vb = <SimdType<i32, Avx> as Register>::load(&b);
            let sum = va.lanes_add(vb);
            let product = va.lanes_mul(vb);
            for i in 0..8 {
                prop_assert_eq!(sum.extract(i), a[i].lane_add(b[i]));
                prop_assert_eq!(product.extract(i), a[i].lane_mul(b[i]));
            }
            prop_assert_eq!(va.lanes_lt(vb).count_true(), (0..8).filter(|&i| a[i] < b[i]).count());
        }

        #[test]
        fn prop_compatibility_follows_left_operand(lhs in 0usize..10, rhs in 0usize..10) {
            const KINDS: [ElementKind; 10] = [
                ElementKind::I8, ElementKind::U8, ElementKind::I16, ElementKind::U16,
                ElementKind::I32, ElementKind::U32, ElementKind::I64, ElementKind::U64,
                ElementKind::F32, ElementKind::F64,
            ];
            let (l, r) = (KINDS[lhs], KINDS[rhs]);
            prop_assert_eq!(l.is_compatible(r), lhs == rhs || ScalarKind::try_from(l).is_ok());
        }
    }
}
