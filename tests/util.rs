#![allow(dead_code)]
use mixin_order::mixin_error::MixinOrderError;
use mixin_order::mixins::definition::MixinDefinition;
use mixin_order::mixins::sorter::sort_mixins;

/// Mixin with the given dependencies.
pub fn mixin(name: &str, deps: &[&str]) -> MixinDefinition {
    deps.iter()
        .fold(MixinDefinition::new(name), |m, &d| m.depends_on(d))
}

/// Mixin overriding `member`, optionally accepting alphabetic ordering.
pub fn overriding(name: &str, member: &str, accepts_alphabetic: bool) -> MixinDefinition {
    let m = MixinDefinition::new(name).overrides(member);
    if accepts_alphabetic {
        m.accepting_alphabetic_ordering()
    } else {
        m
    }
}

/// Sort and return full names.
pub fn sorted_names(mixins: &[MixinDefinition]) -> Result<Vec<String>, MixinOrderError> {
    Ok(sort_mixins(mixins)?
        .into_iter()
        .map(|m| m.full_name.clone())
        .collect())
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
