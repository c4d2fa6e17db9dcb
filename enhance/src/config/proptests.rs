//! Property-based tests for configuration layering.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn key_strategy() -> impl Strategy<Value = String> {
    "[<>@+a-z]{1,4}"
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(key_strategy()),
        prop::option::of(key_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(directive_key, simple_directive_key, strict, strip)| Config {
            directive_key,
            simple_directive_key,
            strict,
            strip_unresolved_directives: strip,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Fields set in the higher layer win, unset fields fall through
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.directive_key, high.directive_key.or(low.directive_key));
        prop_assert_eq!(
            result.simple_directive_key,
            high.simple_directive_key.or(low.simple_directive_key)
        );
        prop_assert_eq!(result.strict, high.strict.or(low.strict));
        prop_assert_eq!(
            result.strip_unresolved_directives,
            high.strip_unresolved_directives.or(low.strip_unresolved_directives)
        );
    }

    // An empty layer changes nothing
    #[test]
    fn merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Keys drawn from the operator alphabet validate unless they collide
    #[test]
    fn validator_accepts_distinct_keys(config in config_strategy()) {
        let settings = config.settings();
        let valid = ConfigValidator::validate(&settings).is_ok();
        prop_assert_eq!(valid, settings.directive_key != settings.simple_directive_key);
    }
}
