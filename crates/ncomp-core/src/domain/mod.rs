//! Core domain layer for ncomp.
//!
//! Pure logic with no I/O. Filesystem access, template storage and code
//! formatting are reached through the ports in `crate::application::ports`.
//!
//! - **No I/O**: existence checks belong to the application layer
//! - **Immutable values**: requests, templates and config are never mutated
//!   after construction
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    ComponentRequest, EffectiveConfig, FormatRules, PLACEHOLDER, ScaffoldResult, Template,
    TemplateKey,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{ComponentType, LanguageFlavor};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn component_type_parses_names_and_aliases() {
        assert_eq!(ComponentType::from_str("class").unwrap(), ComponentType::Class);
        assert_eq!(
            ComponentType::from_str("Pure-Class").unwrap(),
            ComponentType::PureClass
        );
        assert_eq!(ComponentType::from_str("fn").unwrap(), ComponentType::Functional);
        assert_eq!(
            ComponentType::from_str("FNP").unwrap(),
            ComponentType::FunctionalWithProps
        );
        assert!(matches!(
            ComponentType::from_str("hook"),
            Err(DomainError::UnknownComponentType { .. })
        ));
    }

    #[test]
    fn component_type_display_round_trips_through_from_str() {
        for t in ComponentType::ALL {
            assert_eq!(ComponentType::from_str(&t.to_string()).unwrap(), t);
        }
    }

    #[test]
    fn flavor_extensions() {
        assert_eq!(LanguageFlavor::Script.component_extension(), "js");
        assert_eq!(LanguageFlavor::Script.index_extension(), "js");
        assert_eq!(LanguageFlavor::TypedScript.component_extension(), "tsx");
        assert_eq!(LanguageFlavor::TypedScript.index_extension(), "ts");
    }

    #[test]
    fn typed_flavor_rejects_pure_class_and_props() {
        let ts = LanguageFlavor::TypedScript;
        assert!(ts.supports(ComponentType::Class));
        assert!(ts.supports(ComponentType::Functional));
        assert!(!ts.supports(ComponentType::PureClass));
        assert!(!ts.supports(ComponentType::FunctionalWithProps));

        for t in ComponentType::ALL {
            assert!(LanguageFlavor::Script.supports(t));
        }
    }

    #[test]
    fn flavor_from_typescript_switch() {
        assert_eq!(LanguageFlavor::from_typescript(true), LanguageFlavor::TypedScript);
        assert_eq!(LanguageFlavor::from_typescript(false), LanguageFlavor::Script);
    }

    // ========================================================================
    // Request Tests
    // ========================================================================

    fn request(name: &str, t: ComponentType, flavor: LanguageFlavor) -> ComponentRequest {
        ComponentRequest::new(name, "src", t, flavor)
    }

    #[test]
    fn request_paths_follow_flavor() {
        let js = request("Widget", ComponentType::Functional, LanguageFlavor::Script);
        assert_eq!(js.component_dir(), PathBuf::from("src/Widget"));
        assert_eq!(js.component_file(), PathBuf::from("src/Widget/Widget.js"));
        assert_eq!(js.index_file(), PathBuf::from("src/Widget/index.js"));

        let ts = request("Card", ComponentType::Class, LanguageFlavor::TypedScript);
        assert_eq!(ts.component_file(), PathBuf::from("src/Card/Card.tsx"));
        assert_eq!(ts.index_file(), PathBuf::from("src/Card/index.ts"));
    }

    #[test]
    fn empty_or_blank_name_is_missing() {
        for name in ["", "   "] {
            let r = request(name, ComponentType::Class, LanguageFlavor::Script);
            assert_eq!(r.validate(), Err(DomainError::MissingName));
        }
    }

    #[test]
    fn missing_name_wins_over_unsupported_combination() {
        let r = request("", ComponentType::PureClass, LanguageFlavor::TypedScript);
        assert_eq!(DomainValidator::validate_request(&r), Err(DomainError::MissingName));
    }

    #[test]
    fn unsupported_combination_is_rejected() {
        let r = request("Card", ComponentType::PureClass, LanguageFlavor::TypedScript);
        assert_eq!(
            r.validate(),
            Err(DomainError::UnsupportedCombination {
                component_type: ComponentType::PureClass,
                flavor: LanguageFlavor::TypedScript,
            })
        );
        assert_eq!(r.validate().unwrap_err().category(), ErrorCategory::Compatibility);
    }

    #[test]
    fn unsupported_combination_suggests_available_types() {
        let err = DomainError::UnsupportedCombination {
            component_type: ComponentType::FunctionalWithProps,
            flavor: LanguageFlavor::TypedScript,
        };
        let suggestions = err.suggestions();
        assert!(suggestions[0].contains("class"));
        assert!(suggestions[0].contains("functional"));
        assert!(!suggestions[0].contains("pure-class"));
    }

    // ========================================================================
    // Template Tests
    // ========================================================================

    const SAMPLE: &str = "class COMPONENT_NAME {}\nexport default COMPONENT_NAME;\n// COMPONENT_NAME\n";

    fn sample() -> Template {
        Template::new(
            TemplateKey::new(ComponentType::Class, LanguageFlavor::Script),
            SAMPLE,
        )
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let t = sample();
        assert_eq!(t.placeholder_count(), 3);

        let out = t.substitute("Widget");
        assert_eq!(out.matches("Widget").count(), 3);
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn substitute_alters_nothing_else() {
        let out = sample().substitute("Widget");
        assert_eq!(out, SAMPLE.replace("COMPONENT_NAME", "Widget"));
        // Putting the token back yields the original text byte for byte.
        assert_eq!(out.replace("Widget", PLACEHOLDER), SAMPLE);
    }

    #[test]
    fn substitute_is_not_recursive() {
        let out = sample().substitute("XCOMPONENT_NAMEX");
        assert_eq!(out.matches("XCOMPONENT_NAMEX").count(), 3);
    }

    #[test]
    fn template_key_mismatch_is_reported() {
        let t = sample();
        assert!(
            DomainValidator::validate_template(&t, ComponentType::Class, LanguageFlavor::Script)
                .is_ok()
        );
        assert!(matches!(
            DomainValidator::validate_template(
                &t,
                ComponentType::Functional,
                LanguageFlavor::Script
            ),
            Err(DomainError::TemplateNotFound { .. })
        ));
    }

    // ========================================================================
    // Config Tests
    // ========================================================================

    #[test]
    fn default_config_is_class_script() {
        let cfg = EffectiveConfig::default();
        assert_eq!(cfg.component_type, ComponentType::Class);
        assert_eq!(cfg.flavor(), LanguageFlavor::Script);
        assert_eq!(cfg.format.indent_width, 2);
        assert!(cfg.format.single_quote);
        assert!(cfg.format.semicolons);
    }

    #[test]
    fn indent_width_outside_range_is_a_configuration_error() {
        for width in [0, 17, usize::MAX] {
            let rules = FormatRules {
                indent_width: width,
                ..FormatRules::default()
            };
            let err = rules.validate().unwrap_err();
            assert_eq!(err.category(), crate::error::ErrorCategory::Configuration);
            assert!(err.to_string().contains("indent_width"), "{err}");
        }
    }

    #[test]
    fn indent_width_bounds_are_accepted() {
        for width in [1, 2, 16] {
            let rules = FormatRules {
                indent_width: width,
                ..FormatRules::default()
            };
            assert!(rules.validate().is_ok());
        }
    }
}
