//! A library which compiles set/equality based label selectors into matchers and evaluates
//! them against label sets.
//!
//! A [`LabelSelector`] is the declarative specification, usually loaded from configuration.
//! It is compiled into a [`Selector`] once, which may then be shared and evaluated against
//! any number of [`Labels`] sets.

#![deny(missing_docs)]

mod error;
mod labels;
mod selector;
mod spec;
mod validation;

/// Exports from the error module.
pub use error::Error;
/// Exports from the labels module.
pub use labels::Labels;
/// Exports from the selector module.
pub use selector::{Requirement, Selector};
/// Exports from the spec module.
pub use spec::{LabelSelector, LabelSelectorRequirement, Operator};

#[cfg(test)]
mod tests {
    use super::{Error, LabelSelector, LabelSelectorRequirement, Operator, Selector};
    use std::collections::HashMap;

    fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
    fn compile(spec: &LabelSelector) -> Selector {
        Selector::compile(Some(spec)).unwrap()
    }
    fn expression(key: &str, operator: Operator, values: &[&str]) -> LabelSelector {
        LabelSelector::default().with_expression(LabelSelectorRequirement::new(
            key,
            operator,
            values.iter().copied(),
        ))
    }

    #[test]
    fn empty_selects_all() {
        let none = Selector::compile(None).unwrap();
        let empty = compile(&LabelSelector::default());
        let explicit_empty = compile(&LabelSelector {
            match_labels: Some(Default::default()),
            match_expressions: Some(vec![]),
        });

        for selector in [none, empty, explicit_empty, Selector::everything()] {
            assert!(selector.is_empty());
            assert!(selector.matches(&labels(&[])));
            assert!(selector.matches(&labels(&[("tier", "prod"), ("zone", "a")])));
            assert_eq!(selector.to_string(), "");
        }
    }

    #[test]
    fn match_labels() {
        let selector = compile(&LabelSelector::default().with_label("tier", "prod"));

        assert!(selector.matches(&labels(&[("tier", "prod"), ("az", "a")])));
        assert!(!selector.matches(&labels(&[("tier", "dev")])));
        assert!(!selector.matches(&labels(&[])));
    }

    #[test]
    fn in_operator() {
        let selector = compile(&expression("zone", Operator::In, &["a", "b"]));

        assert!(selector.matches(&labels(&[("zone", "b")])));
        assert!(!selector.matches(&labels(&[("zone", "c")])));
        assert!(!selector.matches(&labels(&[])));
    }

    #[test]
    fn not_in_operator() {
        let selector = compile(&expression("zone", Operator::NotIn, &["a"]));

        assert!(selector.matches(&labels(&[])));
        assert!(selector.matches(&labels(&[("zone", "b")])));
        assert!(!selector.matches(&labels(&[("zone", "a")])));
    }

    #[test]
    fn exists_and_does_not_exist() {
        let exists = compile(&expression("canary", Operator::Exists, &[]));
        let does_not_exist = compile(&expression("canary", Operator::DoesNotExist, &[]));

        let sets = [
            labels(&[]),
            labels(&[("canary", "")]),
            labels(&[("canary", "true")]),
            labels(&[("canary", "false"), ("tier", "prod")]),
            labels(&[("tier", "prod")]),
        ];
        for set in &sets {
            assert_eq!(exists.matches(set), set.contains_key("canary"));
            assert_eq!(does_not_exist.matches(set), !exists.matches(set));
        }
    }

    #[test]
    fn conjunction() {
        let selector = compile(
            &LabelSelector::default()
                .with_label("tier", "prod")
                .with_expression(LabelSelectorRequirement::new("zone", Operator::In, ["a"])),
        );

        assert!(selector.matches(&labels(&[("tier", "prod"), ("zone", "a")])));
        assert!(!selector.matches(&labels(&[("tier", "prod"), ("zone", "b")])));
        assert!(!selector.matches(&labels(&[("tier", "dev"), ("zone", "a")])));
        assert!(!selector.matches(&labels(&[("tier", "prod")])));
        assert!(!selector.matches(&labels(&[("zone", "a")])));
    }

    #[test]
    fn deterministic() {
        let spec = LabelSelector::default()
            .with_label("tier", "prod")
            .with_expression(LabelSelectorRequirement::new(
                "zone",
                Operator::NotIn,
                ["c"],
            ));
        let set = labels(&[("tier", "prod"), ("zone", "a")]);

        let first = compile(&spec);
        let second = compile(&spec);
        assert_eq!(first, second);
        assert_eq!(first.matches(&set), first.matches(&set));
        assert_eq!(first.matches(&set), second.matches(&set));
    }

    #[test]
    fn configuration_errors() {
        let result = Selector::compile(Some(&expression("zone", Operator::In, &[])));
        assert!(matches!(result, Err(Error::EmptyValues { .. })), "{result:?}");

        let result = Selector::compile(Some(&expression("zone", Operator::NotIn, &[])));
        assert!(matches!(result, Err(Error::EmptyValues { .. })), "{result:?}");

        let result = Selector::compile(Some(&expression("zone", Operator::Exists, &["a"])));
        assert!(matches!(result, Err(Error::UnexpectedValues { .. })), "{result:?}");

        let bad_operator = LabelSelector::default().with_expression(LabelSelectorRequirement {
            key: "zone".to_string(),
            operator: "in".to_string(),
            values: Some(vec!["a".to_string()]),
        });
        let result = Selector::compile(Some(&bad_operator));
        assert!(matches!(result, Err(Error::InvalidOperator { .. })), "{result:?}");

        let bad_key = LabelSelector::default().with_label("-tier", "prod");
        let result = Selector::compile(Some(&bad_key));
        assert!(matches!(result, Err(Error::InvalidKey { .. })), "{result:?}");

        let bad_value = LabelSelector::default().with_label("tier", "prod!");
        let result = Selector::compile(Some(&bad_value));
        assert!(matches!(result, Err(Error::InvalidValue { .. })), "{result:?}");

        // a single bad term fails the whole selector
        let mixed = LabelSelector::default()
            .with_label("tier", "prod")
            .with_expression(LabelSelectorRequirement::new("zone", Operator::In, ["a"]))
            .with_expression(LabelSelectorRequirement::new(
                "canary",
                Operator::NotIn,
                Vec::<String>::new(),
            ));
        assert!(Selector::compile(Some(&mixed)).is_err());
    }

    #[test]
    fn canonical_string() {
        let selector = compile(
            &LabelSelector::default()
                .with_label("tier", "prod")
                .with_expression(LabelSelectorRequirement::new(
                    "zone",
                    Operator::In,
                    ["b", "a", "b"],
                ))
                .with_expression(LabelSelectorRequirement::new(
                    "canary",
                    Operator::DoesNotExist,
                    Vec::<String>::new(),
                ))
                .with_expression(LabelSelectorRequirement::new(
                    "app",
                    Operator::Exists,
                    Vec::<String>::new(),
                ))
                .with_expression(LabelSelectorRequirement::new(
                    "region",
                    Operator::NotIn,
                    ["eu"],
                )),
        );
        assert_eq!(
            selector.to_string(),
            "app,!canary,region notin (eu),tier=prod,zone in (a,b)"
        );
    }

    #[test]
    fn deserialize_spec() {
        let spec: LabelSelector = serde_yaml::from_str(
            r#"
matchLabels:
  tier: prod
matchExpressions:
  - key: zone
    operator: In
    values: [a, b]
  - key: canary
    operator: DoesNotExist
"#,
        )
        .unwrap();
        let selector = compile(&spec);

        assert!(selector.matches(&labels(&[("tier", "prod"), ("zone", "a")])));
        assert!(!selector.matches(&labels(&[("tier", "prod"), ("zone", "a"), ("canary", "x")])));
        assert_eq!(selector.requirements().len(), 3);

        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["matchExpressions"][1]["operator"], "DoesNotExist");
        assert!(json["matchExpressions"][1].get("values").is_none());
    }

    #[test]
    fn from_k8s_openapi() {
        use k8s_openapi::apimachinery::pkg::apis::meta::v1 as meta;

        let k8s = meta::LabelSelector {
            match_labels: Some([("tier".to_string(), "prod".to_string())].into()),
            match_expressions: Some(vec![meta::LabelSelectorRequirement {
                key: "zone".to_string(),
                operator: "NotIn".to_string(),
                values: Some(vec!["c".to_string()]),
            }]),
        };
        let selector = compile(&LabelSelector::from(&k8s));

        assert!(selector.matches(&labels(&[("tier", "prod")])));
        assert!(!selector.matches(&labels(&[("tier", "prod"), ("zone", "c")])));
        assert_eq!(selector.to_string(), "tier=prod,zone notin (c)");
    }
}
