use crate::DirectiveTarget;
use crate::TargetSet;

#[test]
fn describe_lists_members_in_fixed_order() {
    let names = ["CLASS", "METHOD", "PROPERTY", "NESTED"];
    for bits in 0..=TargetSet::ALL.bits() {
        let set = TargetSet::from_bits(bits);
        let expected = if set == TargetSet::ALL {
            "ALL".to_string()
        } else {
            names
                .iter()
                .enumerate()
                .filter(|(idx, _)| bits & (1 << idx) != 0)
                .map(|(_, name)| *name)
                .collect::<Vec<_>>()
                .join(", ")
        };
        assert_eq!(set.describe(), expected, "bits {bits:#06b}");
        assert_eq!(set.to_string(), expected);
    }
}

#[test]
fn literals() {
    assert_eq!(TargetSet::from_literal("ALL"), Some(TargetSet::ALL));
    assert_eq!(TargetSet::from_literal("ANNOTATION"), Some(TargetSet::NESTED));
    assert_eq!(TargetSet::from_literal("NESTED"), Some(TargetSet::NESTED));
    assert_eq!(TargetSet::from_literal("class"), None);
    assert_eq!(TargetSet::from_literal("FUNCTION"), None);
}

#[test]
fn allows_intersecting_targets() {
    let set = TargetSet::CLASS | TargetSet::PROPERTY;
    assert!(set.allows(DirectiveTarget::Class));
    assert!(set.allows(DirectiveTarget::Property));
    assert!(!set.allows(DirectiveTarget::Method));
    assert!(!set.allows(DirectiveTarget::NestedDirective));
    assert!(TargetSet::ALL.allows(DirectiveTarget::NestedDirective));
    assert!(!TargetSet::NONE.allows(DirectiveTarget::Class));
}

#[test]
fn bits_above_all_are_dropped() {
    assert_eq!(TargetSet::from_bits(0xff), TargetSet::ALL);
    assert!(TargetSet::from_bits(16).is_empty());
}
