mod util;
use mixin_order::mixin_error::{AmbiguousGroup, MixinOrderError};
use mixin_order::mixins::definition::MixinDefinition;
use util::*;

const AMBIGUOUS_HEADER: &str = "The following mixin groups require a clear base call ordering, \
but do not provide enough dependency information:";
const AMBIGUOUS_FOOTER: &str = "Please supply additional dependencies to the mixin definitions, \
mark them as accepting alphabetic ordering, or adjust the mixin configuration accordingly.";

#[test]
fn two_objecting_mixins_are_rejected() {
    let mixins = vec![
        overriding("NullMixin", "ToString", false),
        overriding("NullMixin2", "ToString", true),
        overriding("NullMixin3", "ToString", false),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err,
        MixinOrderError::AmbiguousOrdering {
            groups: vec![AmbiguousGroup {
                mixins: vec!["NullMixin".into(), "NullMixin2".into(), "NullMixin3".into()],
                members: vec!["ToString".into()],
            }]
        }
    );
    assert_eq!(
        err.to_string(),
        format!(
            "{AMBIGUOUS_HEADER}\n{{'NullMixin', 'NullMixin2', 'NullMixin3'}} (overriding: 'ToString')\n{AMBIGUOUS_FOOTER}"
        )
    );
}

#[test]
fn every_unresolved_group_gets_a_line() {
    let mixins = vec![
        overriding("A", "ToString", false),
        overriding("B", "ToString", false),
        overriding("C", "Equals", false),
        overriding("D", "Equals", false),
        overriding("E", "Dispose", false),
        overriding("F", "Dispose", true),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{AMBIGUOUS_HEADER}\n\
             {{'C', 'D'}} (overriding: 'Equals')\n\
             {{'A', 'B'}} (overriding: 'ToString')\n\
             {AMBIGUOUS_FOOTER}"
        )
    );
}

#[test]
fn shared_member_set_is_listed_together() {
    let mixins = vec![
        MixinDefinition::new("A")
            .overrides("GetHashCode")
            .overrides("Equals"),
        MixinDefinition::new("B")
            .overrides("Equals")
            .overrides("GetHashCode"),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "{AMBIGUOUS_HEADER}\n{{'A', 'B'}} (overriding: 'Equals', 'GetHashCode')\n{AMBIGUOUS_FOOTER}"
        )
    );
}

#[test]
fn ambiguity_in_a_later_level_is_detected() {
    let mixins = vec![
        mixin("Top", &["Left", "Right"]),
        overriding("Left", "ToString", false),
        overriding("Right", "ToString", false),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert!(matches!(
        err,
        MixinOrderError::AmbiguousOrdering { ref groups }
            if groups.len() == 1 && groups[0].mixins == ["Left", "Right"]
    ));
}

#[test]
fn unresolved_groups_from_every_level_are_reported() {
    // A -> C, B -> D; {A, B} clash on ToString, {C, D} on Equals one level down.
    let mixins = vec![
        overriding("A", "ToString", false).depends_on("C"),
        overriding("B", "ToString", false).depends_on("D"),
        overriding("C", "Equals", false),
        overriding("D", "Equals", false),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err,
        MixinOrderError::AmbiguousOrdering {
            groups: vec![
                AmbiguousGroup {
                    mixins: vec!["A".into(), "B".into()],
                    members: vec!["ToString".into()],
                },
                AmbiguousGroup {
                    mixins: vec!["C".into(), "D".into()],
                    members: vec!["Equals".into()],
                },
            ]
        }
    );
    assert_eq!(
        err.to_string(),
        format!(
            "{AMBIGUOUS_HEADER}\n\
             {{'A', 'B'}} (overriding: 'ToString')\n\
             {{'C', 'D'}} (overriding: 'Equals')\n\
             {AMBIGUOUS_FOOTER}"
        )
    );
}

#[test]
fn cycle_outranks_earlier_ambiguity() {
    let mixins = vec![
        overriding("A", "ToString", false).depends_on("C"),
        overriding("B", "ToString", false).depends_on("C"),
        mixin("C", &["D"]),
        mixin("D", &["C"]),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err,
        MixinOrderError::CyclicDependency {
            mixins: vec!["C".into(), "D".into()]
        }
    );
}

#[test]
fn cycle_lists_every_participant_sorted() {
    // A -> B -> C -> {A, D}
    let mixins = vec![
        mixin("D", &[]),
        mixin("C", &["A", "D"]),
        mixin("B", &["C"]),
        mixin("A", &["B"]),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err,
        MixinOrderError::CyclicDependency {
            mixins: vec!["A".into(), "B".into(), "C".into(), "D".into()]
        }
    );
    assert_eq!(
        err.to_string(),
        "The following mixins have cyclic dependencies and cannot be ordered:\n'A',\n'B',\n'C',\n'D'."
    );
}

#[test]
fn cycle_excludes_already_ordered_mixins() {
    let mixins = vec![
        mixin("Free", &["A"]),
        mixin("A", &["B"]),
        mixin("B", &["A"]),
    ];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The following mixins have cyclic dependencies and cannot be ordered:\n'A',\n'B'."
    );
}

#[test]
fn duplicate_full_name_is_rejected() {
    let mixins = vec![mixin("A", &[]), mixin("B", &[]), mixin("A", &["B"])];
    let err = sorted_names(&mixins).unwrap_err();
    assert_eq!(err, MixinOrderError::DuplicateMixin("A".into()));
    assert_eq!(err.to_string(), "Mixin 'A' is configured more than once");
}
